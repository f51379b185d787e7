/// Errors raised while building or sampling Bezier interpolations
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// Too few input points to build the requested interpolation
    #[error("insufficient data: at least {required} points are required, got {actual}")]
    InsufficientData { required: usize, actual: usize },
    /// A point, parameter or resolution was malformed or out of range
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The linear system for the control points has no unique solution
    #[error("failed to solve control points")]
    SolveFailed,
}

pub type InterpolationResult<T> = Result<T, InterpolationError>;

impl InterpolationError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
