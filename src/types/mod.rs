//! Core type system and domain definitions
//!
//! This module provides the domain types shared by the search client, the
//! involvement aggregator and the status-bar formatter. Values here are
//! immutable snapshots of a single API response and are discarded after the run.

pub mod category;
pub mod label;
pub mod pull_request;
pub mod search;
pub mod user;

pub use category::*;
pub use label::*;
pub use pull_request::*;
pub use search::*;
pub use user::*;
