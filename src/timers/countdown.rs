use std::time::Duration;

use tokio::sync::mpsc::Sender;
use tokio_util::sync::CancellationToken;

use super::helper_structs::{CountdownId, CountdownKind, CounterEvent};

/// A one shot countdown that reports every remaining second and then finishes.
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    id: CountdownId,
    kind: CountdownKind,
    total: u64,
}
impl Countdown {
    pub fn new(id: CountdownId, kind: CountdownKind, total: u64) -> Self {
        Self { id, kind, total }
    }

    /// Emits `Tick` for `total, total - 1, ..., 1` one second apart, then `Finished`.
    /// Returns quietly as soon as `close` is cancelled or the receiver is gone.
    pub async fn run(self, sender: Sender<CounterEvent>, close: CancellationToken) {
        for remaining in (1..=self.total).rev() {
            if close.is_cancelled() {
                return;
            }
            let tick = CounterEvent::Tick {
                id: self.id,
                kind: self.kind,
                remaining,
            };
            if sender.send(tick).await.is_err() {
                return;
            }
            tokio::select! {
                _ = tokio::time::sleep(Duration::from_secs(1)) => {}
                _ = close.cancelled() => return,
            }
        }
        if close.is_cancelled() {
            return;
        }
        let _ = sender
            .send(CounterEvent::Finished {
                id: self.id,
                kind: self.kind,
            })
            .await;
    }

    pub fn spawn(
        self,
        sender: Sender<CounterEvent>,
        close: CancellationToken,
    ) -> tokio::task::JoinHandle<()> {
        tokio::task::spawn(self.run(sender, close))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticks_every_second_then_finishes() {
        let (tx, mut rx) = tokio::sync::mpsc::channel(8);
        let id = CountdownId(7);
        Countdown::new(id, CountdownKind::Work, 3).spawn(tx, CancellationToken::new());

        let mut ticks = Vec::new();
        while let Some(event) = rx.recv().await {
            match event {
                CounterEvent::Tick { remaining, .. } => ticks.push(remaining),
                CounterEvent::Finished { id: done, kind } => {
                    assert_eq!(done, id);
                    assert_eq!(kind, CountdownKind::Work);
                    break;
                }
            }
        }
        assert_eq!(ticks, vec![3, 2, 1]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_never_finishes() {
        let (tx, mut rx) = tokio::sync::mpsc::channel(8);
        let close = CancellationToken::new();
        let handle = Countdown::new(CountdownId(1), CountdownKind::Lock, 300).spawn(tx, close.clone());

        assert!(matches!(
            rx.recv().await,
            Some(CounterEvent::Tick { remaining: 300, .. })
        ));
        close.cancel();
        handle.await.unwrap();
        while let Some(event) = rx.recv().await {
            assert!(!matches!(event, CounterEvent::Finished { .. }));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn stops_when_receiver_is_dropped() {
        let (tx, rx) = tokio::sync::mpsc::channel(1);
        drop(rx);
        Countdown::new(CountdownId(2), CountdownKind::Work, 60)
            .spawn(tx, CancellationToken::new())
            .await
            .unwrap();
    }
}
