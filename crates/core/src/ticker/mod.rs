//! Two-line scrolling ticker built from version-control history.
//!
//! [`parser`] turns raw `git log` text into a pair of aligned strings once
//! at startup; [`overlay`] owns the scroll state and hands the frame loop a
//! screen-width window of each line every frame.

pub mod overlay;
pub mod parser;

pub use overlay::TickerOverlay;
pub use parser::{parse_history_ticker, TickerPair};
