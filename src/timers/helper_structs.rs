use tokio_util::sync::CancellationToken;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum TimerState {
    #[default]
    Idle,
    Running,
    Locked,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CountdownKind {
    Work,
    Lock,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct CountdownId(pub u64);

/// Posted by a running countdown to the UI task.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CounterEvent {
    Tick {
        id: CountdownId,
        kind: CountdownKind,
        remaining: u64,
    },
    Finished {
        id: CountdownId,
        kind: CountdownKind,
    },
}

/// Handle to the single countdown task that is allowed to be alive.
#[derive(Debug)]
pub struct ActiveCountdown {
    id: CountdownId,
    kind: CountdownKind,
    cancel: CancellationToken,
}

impl ActiveCountdown {
    pub fn new(id: CountdownId, kind: CountdownKind, cancel: CancellationToken) -> Self {
        Self { id, kind, cancel }
    }

    pub fn id(&self) -> CountdownId {
        self.id
    }

    pub fn kind(&self) -> CountdownKind {
        self.kind
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}
