use thiserror::Error;

/// Error type for line construction, queries and combination.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineError {
    /// The coefficients do not describe a line (`a` and `b` both zero),
    /// or the inputs do not determine a unique line.
    #[error("invalid equation: {0}")]
    InvalidEquation(String),

    /// The requested quantity is undefined for this line.
    #[error("degenerate operation: {operation} is undefined for {reason}")]
    DegenerateOperation {
        operation: &'static str,
        reason: &'static str,
    },

    /// The lines are parallel or coincident and have no unique intersection.
    #[error("lines are parallel")]
    ParallelLines,
}

impl LineError {
    pub(crate) fn vertical(operation: &'static str) -> Self {
        Self::DegenerateOperation {
            operation,
            reason: "a vertical line",
        }
    }

    pub(crate) fn horizontal(operation: &'static str) -> Self {
        Self::DegenerateOperation {
            operation,
            reason: "a horizontal line",
        }
    }
}

/// Convenience type alias for results using [`LineError`].
pub type Result<T> = std::result::Result<T, LineError>;
