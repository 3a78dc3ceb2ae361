//! Yule Log Core Library
//!
//! Simulation core for a full-screen terminal fireplace: a cellular-automaton
//! heat field with bottom-row injection and in-place diffusion, a fixed
//! glyph/color palette, and a two-line scrolling ticker built once from
//! recent version-control history.
//!
//! Everything here is terminal-agnostic. The binary crate owns the screen,
//! the frame cadence, and the mapping from abstract color bands to styles.

pub mod heat;
pub mod history;
pub mod palette;
pub mod ticker;

// Re-export the main types
pub use heat::HeatField;
pub use history::{GitHistorySource, HistoryError, HistorySource, MAX_RECORDS};
pub use palette::{color_band, glyph, glyph_and_color};
pub use ticker::{parse_history_ticker, TickerOverlay, TickerPair};
