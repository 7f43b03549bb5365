//! Chat-style commands: account linking, profiles and the recent play summary.

pub mod link;
pub mod profile;
pub mod recent;
pub mod target;
#[cfg(test)]
pub(crate) mod testing;

pub use link::link;
pub use profile::profile;
pub use recent::{RecentPlay, recent};
pub use target::{Target, resolve_target};

use crate::network::ApiError;

#[derive(Debug)]
pub enum CommandError {
    /// No link stored for the addressed user. `own` is true when the caller
    /// addressed themselves.
    NotLinked { own: bool },
    /// The user exists but has no recent plays.
    NoRecentScores(String),
    Api(ApiError),
    Database(sqlx::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::NotLinked { own: true } => write!(
                f,
                "No linked account. Run `link <username>` first or pass a username."
            ),
            CommandError::NotLinked { own: false } => {
                write!(f, "That user has not linked an osu! account.")
            }
            CommandError::NoRecentScores(username) => {
                write!(f, "{} has no recent plays.", username)
            }
            CommandError::Api(e) => write!(f, "{}", e),
            CommandError::Database(e) => write!(f, "Database error: {}", e),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Api(e) => Some(e),
            CommandError::Database(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ApiError> for CommandError {
    fn from(e: ApiError) -> Self {
        CommandError::Api(e)
    }
}

impl From<sqlx::Error> for CommandError {
    fn from(e: sqlx::Error) -> Self {
        CommandError::Database(e)
    }
}
