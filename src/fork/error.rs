use crate::platform::ApiError;
use thiserror::Error;

/// Domain taxonomy for a fork run.
///
/// User errors print their bare message and terminate the process at the
/// action layer; everything else propagates unchanged with no retry and no
/// rollback of calls that already succeeded.
#[derive(Debug, Error)]
pub enum ForkError {
    #[error("Couldn't find app {name}.")]
    AppNotFound { name: String },

    #[error("app {name} already exists.")]
    NameTaken { name: String },

    #[error("Couldn't find space {name}.")]
    SpaceNotFound { name: String },

    #[error("No slug for app {name} was found.\nPush some code to {name} before forking it.")]
    NoRelease { name: String },

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ForkError {
    /// Whether this failure is reported to the user as a plain message
    /// rather than propagated as an internal error.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::AppNotFound { .. }
                | Self::NameTaken { .. }
                | Self::SpaceNotFound { .. }
                | Self::NoRelease { .. }
        )
    }
}
