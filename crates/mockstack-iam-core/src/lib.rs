//! IAM core business logic for MockStack.
//!
//! Groups, users, inline policies, customer-managed policies, and their
//! attachments. IAM is a global service: state is scoped per account only.
#![allow(missing_docs, clippy::doc_markdown, clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod policy;
pub mod provider;
pub mod state;
pub mod validation;

pub use config::IamConfig;
pub use provider::MockStackIam;
