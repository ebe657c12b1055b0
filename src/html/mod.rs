//! HTML parse tree and selector matching.
//!
//! Generated reports are re-parsed by the integration pipeline, so the
//! crate carries its own small arena-based parser instead of scanning
//! markup with regular expressions.

pub mod arena;
pub mod selector;

pub use arena::{decode_entities, Document, Node, NodeId, NodeKind};
pub use selector::{CompoundSelector, SelectorError, SelectorList, SimpleSelector};
