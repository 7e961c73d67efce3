pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{Basis, Result, SwpError};
pub use tolerance::Tolerance;
pub use traits::Validate;
