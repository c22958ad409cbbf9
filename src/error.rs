use thiserror::Error;

/// Error type for vector construction and vector operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    /// A constructor, scale or normalize argument is not a number.
    #[error("cannot interpret {value} as a vector component")]
    InvalidComponent { value: String },

    /// A binary operation received an operand of the wrong vector type.
    #[error("cannot {operation} {expected} and {found} (both operands must be {expected})")]
    TypeMismatch {
        operation: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// A bounding box is malformed.
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),

    /// A rotation received a non-numeric angle or pivot.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("division by zero in {operation}")]
    DivisionByZero { operation: &'static str },
}

/// Convenience type alias for results using [`VectorError`].
pub type Result<T> = std::result::Result<T, VectorError>;
