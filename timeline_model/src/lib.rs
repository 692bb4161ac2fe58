//! # Timeline Model
//!
//! The typed, immutable object graph of a match timeline: value records,
//! closed wire enumerations, the timeline event sum type and the frame and
//! timeline aggregates. This crate holds no decoding logic; see
//! `timeline_decoder` for turning raw documents into these types.
//!
//! Every value is owned by its container. Nothing is mutated after a decode
//! pass builds it.

pub mod events;
pub mod stats;
pub mod timeline;
pub mod values;

pub use events::*;
pub use stats::*;
pub use timeline::*;
pub use values::*;
