//! API Gateway v2 model types for MockStack.
//!
//! Hand-written request, response, and error types for the API and
//! authorizer operations of the API Gateway v2 management API.
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod error;
pub mod input;
pub mod output;
pub mod types;

pub use error::{ApiGatewayV2Error, ApiGatewayV2ErrorCode};
