#![forbid(unsafe_code)]

//! Core logic for treetabs: tree model, tri-state selection, and keyboard
//! navigation.
//!
//! Everything in this crate is synchronous and side-effect free. The tree
//! datasets are immutable after construction; the selection engine and the
//! navigation state machine are pure state transitions over key sets. The
//! hosting layer (see `treetabs-runtime`) only stores and redistributes the
//! values these transitions produce.

pub mod event;
pub mod logging;
pub mod nav;
pub mod selection;
pub mod tree;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, info, trace, warn};
