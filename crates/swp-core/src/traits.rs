use crate::error::Result;
use crate::tolerance::Tolerance;

/// Check an entity against its geometric invariants.
pub trait Validate {
    fn validate(&self, tolerance: Tolerance) -> Result<()>;
}
