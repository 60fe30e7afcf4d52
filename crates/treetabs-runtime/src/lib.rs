#![forbid(unsafe_code)]

//! State containers and the tabbed application model.
//!
//! The core (see `treetabs-core`) never owns tree state. It is handed a
//! [`container::StateContainer`] at construction time, reads whole values
//! from it, and writes whole-value replacements back. Two interchangeable
//! containers are provided: an ad-hoc shared context
//! ([`context::ContextProvider`]) and a centralized reducer-style store
//! ([`store::CentralStore`]). [`app::App`] drives both trees, the tab bar,
//! and the deferred focus hand-off behind either container.

pub mod app;
pub mod container;
pub mod context;
pub mod store;

pub use app::{App, Cmd, Tab};
pub use container::{StateContainer, TreeId, TreeSlot};
pub use context::{ContextProvider, SharedContext};
pub use store::{Action, CentralStore};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use tracing::{debug, info, trace, warn};

// When tracing is not enabled, reuse the core crate's no-op macros.
#[cfg(not(feature = "tracing"))]
pub use treetabs_core::{debug, info, trace, warn};
