use std::io;

use crate::popup::Popup;

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum DurationError {
    #[error("Please enter a valid number of minutes, got \"{0}\"")]
    NotANumber(String),

    #[error("Please enter a positive number of minutes, got {0}")]
    NotPositive(i64),

    #[error("{0} minutes is too long for a work period")]
    TooLarge(i64),
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("There was an error with loading your config: {0}")]
    LoadError(String),

    #[error("Couldn't locate a suitable directory to keep your config in.")]
    HomeDirNotFound,

    #[error("Error with filesystem: {0}")]
    IO(#[from] io::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    IO(#[from] io::Error),

    #[error("Settings Error: {0}")]
    SettingsError(#[from] SettingsError),

    #[error("Invalid work duration: {0}")]
    InvalidDuration(#[from] DurationError),

    #[error("Toml Deserialization Error: {0}")]
    TomlDeError(#[from] toml::de::Error),

    #[error("Background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
impl Error {
    pub fn handle_error_and_consume_data<T>(result: Result<T>) -> Option<Popup> {
        if let Err(e) = result {
            Some(Popup::from(e))
        } else {
            None
        }
    }
}
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_errors_become_popups() {
        assert!(Error::handle_error_and_consume_data(Ok(())).is_none());
        let popup = Error::handle_error_and_consume_data::<()>(Err(
            DurationError::NotPositive(0).into(),
        ))
        .expect("error should turn into a popup");
        assert!(popup.message.contains("positive"));
    }
}
