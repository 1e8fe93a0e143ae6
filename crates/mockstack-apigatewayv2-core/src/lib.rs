//! API Gateway v2 core business logic for MockStack.
//!
//! Implements APIs and their authorizers on top of the shared resource
//! store in `mockstack-core`.
#![allow(missing_docs, clippy::doc_markdown, clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod provider;
pub mod state;
pub mod validation;

pub use config::ApiGatewayV2Config;
pub use provider::MockStackApiGatewayV2;
