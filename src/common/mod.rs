pub mod error;
pub mod serde_helpers;
pub mod validation;
