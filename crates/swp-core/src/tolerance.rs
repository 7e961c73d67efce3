/// Tolerances for comparing evaluated geometry.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Linear tolerance for distances and vector lengths (in model units)
    pub linear: f64,
    /// Angular tolerance, compared against dot products of unit vectors
    pub angular: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-7;
    pub const DEFAULT_ANGULAR: f64 = 1e-7;

    pub fn new(linear: f64, angular: f64) -> Self {
        Self { linear, angular }
    }

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
            angular: Self::DEFAULT_ANGULAR,
        }
    }

    /// The tolerance frame checks are held to for single-precision consumers.
    pub fn loose() -> Self {
        Self {
            linear: 1e-5,
            angular: 1e-5,
        }
    }

    pub fn tight() -> Self {
        Self {
            linear: 1e-10,
            angular: 1e-12,
        }
    }

    /// Check if two values are equal within linear tolerance
    pub fn linear_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.linear
    }

    /// Check if a value is zero within linear tolerance
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() <= self.linear
    }

    /// Check if the dot product of two unit vectors says they are orthogonal
    pub fn is_orthogonal(self, dot: f64) -> bool {
        dot.abs() <= self.angular
    }

    /// Check if a vector length is one within linear tolerance
    pub fn is_unit(self, length: f64) -> bool {
        self.linear_eq(length, 1.0)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_loose_matches_frame_precision() {
        let tol = Tolerance::loose();
        assert_relative_eq!(tol.linear, 1e-5);
        assert!(tol.is_unit(1.0 + 5e-6));
        assert!(!tol.is_unit(1.0 + 5e-5));
    }

    #[test]
    fn test_orthogonal() {
        let tol = Tolerance::default();
        assert!(tol.is_orthogonal(-1e-9));
        assert!(!tol.is_orthogonal(1e-3));
    }

    #[test]
    fn test_nan_is_never_within_tolerance() {
        let tol = Tolerance::loose();
        assert!(!tol.is_unit(f64::NAN));
        assert!(!tol.is_orthogonal(f64::NAN));
        assert!(!tol.is_zero(f64::NAN));
    }
}
