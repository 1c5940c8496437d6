use ignite_kernel::collaborators::CollaboratorError;
use std::borrow::Cow;

#[ignite_derive::ignite_error]
pub enum AssetError {
    #[error("Asset not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Path traversal security violation{}: {message}", format_context(.context))]
    PathTraversalAttempt { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unrecognized font data{}: {message}", format_context(.context))]
    InvalidFont { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Hardware I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Internal fault{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl From<AssetError> for CollaboratorError {
    fn from(err: AssetError) -> Self {
        match err {
            AssetError::NotFound { .. } => Self::unavailable(err.to_string()),
            AssetError::Io { source, context } => Self::Io { source, context },
            AssetError::PathTraversalAttempt { .. } | AssetError::InvalidFont { .. } => {
                Self::rejected(err.to_string())
            },
            AssetError::Internal { .. } => {
                Self::Internal { message: err.to_string().into(), context: None }
            },
        }
    }
}
