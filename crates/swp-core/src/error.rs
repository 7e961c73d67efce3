use std::fmt;

use thiserror::Error;

/// Curve basis an evaluator was asked to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basis {
    Bezier,
    BSpline,
    Circle,
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Basis::Bezier => f.write_str("Bezier"),
            Basis::BSpline => f.write_str("B-spline"),
            Basis::Circle => f.write_str("circle"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SwpError {
    #[error("{basis} curve given {count} control points, needs {requirement}")]
    InvalidControlPoints {
        basis: Basis,
        count: usize,
        requirement: &'static str,
    },

    #[error("{basis} curve needs at least one step per segment")]
    InvalidSteps { basis: Basis },

    #[error("Degenerate frame: {0}")]
    Degenerate(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SwpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_control_points_message() {
        let err = SwpError::InvalidControlPoints {
            basis: Basis::Bezier,
            count: 5,
            requirement: "3n+1 (n >= 1)",
        };
        assert_eq!(
            err.to_string(),
            "Bezier curve given 5 control points, needs 3n+1 (n >= 1)"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SwpError = io.into();
        assert!(matches!(err, SwpError::Io(_)));
    }
}
