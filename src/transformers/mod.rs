//! Voice, depth, and cross-reference transformation of extracted content.

pub mod cross_reference;
pub mod depth;
pub mod voice;

pub use cross_reference::{CrossRef, CrossReferenceGenerator, PlacedContent};
pub use depth::DepthTransformer;
pub use voice::VoiceTransformer;
