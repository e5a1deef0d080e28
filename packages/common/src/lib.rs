//! Shared plumbing for the stylist crates: the error type, file output and
//! rule tree traversal.

pub mod error;
pub mod filesystem;
pub mod visitor;

pub use error::*;
pub use filesystem::*;
pub use visitor::*;
