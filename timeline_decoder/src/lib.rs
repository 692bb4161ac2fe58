//! # Timeline Decoder
//!
//! Turns raw, loosely-typed match-timeline documents into the strongly-typed
//! graph of `timeline_model`, without ever failing on event data the decoder
//! does not understand.
//!
//! ## Core Components
//!
//! - **property_bag**: total, typed getters over one JSON object
//! - **decode**: scalar aggregate decoders and the event variant decoder
//! - **assembler**: frame assembly and the [`TimelineDecoder`] entry point
//! - **config**: [`DecoderConfig`], loadable from TOML
//! - **error**: structural document errors
//!
//! ## Decoding Policy
//!
//! - **Missing fields**: absent or mistyped leaves become `0`, `""` or an empty `Vec`
//! - **Unknown literals**: enum fields fall back to the enum's `Unknown` member
//! - **Unknown tags**: events become `TimelineEvent::Unknown` with the record kept verbatim
//! - **Lenient references**: participant ids are never checked against the roster

pub mod assembler;
pub mod config;
pub mod decode;
pub mod error;
pub mod property_bag;

pub use assembler::*;
pub use config::*;
pub use decode::*;
pub use error::*;
pub use property_bag::*;

pub use timeline_model;
