#![forbid(unsafe_code)]

//! Render-ready projections for treetabs.
//!
//! Nothing here draws to a terminal. The modules turn core state (tree
//! data, navigation state, checked keys) into plain values a host can
//! render however it likes: [`rows::TreeRow`] records for structured
//! consumers, [`text::StyledLine`]s with guide characters for a text
//! surface, and [`summary::SummaryEntry`] records for a selection summary.

pub mod rows;
pub mod summary;
pub mod text;

pub use rows::{TreeRow, render_rows};
pub use summary::{SummaryEntry, summarize};
pub use text::{StyledLine, TreeGuides, render_lines};
