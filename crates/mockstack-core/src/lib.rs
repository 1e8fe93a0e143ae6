//! Core types, configuration, and state management for MockStack.
//!
//! This crate provides the building blocks shared by the emulated services:
//! multi-account/multi-region state, the generic resource table, the
//! relationship index, identifier and ARN generation, and configuration.

pub mod arn;
mod config;
mod error;
pub mod id;
mod logging;
mod relation;
mod state;
mod store;
mod types;

pub use config::MockStackConfig;
pub use error::{MockStackError, MockStackResult, StoreError};
pub use logging::init_tracing;
pub use relation::RelationIndex;
pub use state::AccountRegionStore;
pub use store::{Resource, ResourceTable};
pub use types::{AccountId, AwsRegion, RequestContext};
