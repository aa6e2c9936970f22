//! Business logic services
//!
//! Pure logic that operates on domain models. These services have no
//! I/O dependencies - they operate on data passed in and return results.
//!
//! - [`validator`] - Field validation for entry submissions
//! - [`classifier`] - Status classification for validated entries

pub mod classifier;
pub mod validator;

pub use classifier::{HEALTHY_MINUTES, classify};
pub use validator::{EntryForm, ValidationError, validate};
