//! Decoders from property bags into the typed timeline model.

mod aggregates;
mod event;

pub use aggregates::*;
pub use event::*;
