//! # settle-core
//!
//! Domain model, channel registry, and error taxonomy shared by the
//! settlement file parsing pipeline:
//! - Channel and area identifiers ([`ChannelId`], [`AreaTag`])
//! - The channel registry: declarative descriptors and filename
//!   classification
//! - Parsed-record, group, and job shapes
//! - The error taxonomy

pub mod channel;
pub mod error;
pub mod job;
pub mod model;
pub mod registry;

pub use channel::*;
pub use error::*;
pub use job::*;
pub use model::*;
pub use registry::*;
