//! IAM model types for MockStack.
//!
//! Request, response, and error types for the group, user, inline policy,
//! and managed policy operations of the IAM API.
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod error;
pub mod input;
pub mod output;
pub mod types;

pub use error::{IamError, IamErrorCode};
