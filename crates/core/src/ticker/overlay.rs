//! Scroll state and per-frame windowing for the two ticker lines.

use crate::ticker::TickerPair;

/// How many `advance` calls move the scroll offset by one column.
const FRAMES_PER_COLUMN: u64 = 4;

/// Owns the parsed ticker lines plus the single scroll offset shared by
/// both, so message and meta move in lockstep and the per-record column
/// alignment from the parser survives scrolling.
#[derive(Debug, Clone)]
pub struct TickerOverlay {
    message: Vec<char>,
    meta: Vec<char>,
    offset: usize,
    frame: u64,
}

impl From<TickerPair> for TickerOverlay {
    fn from(pair: TickerPair) -> Self {
        TickerOverlay {
            message: pair.message_text.chars().collect(),
            meta: pair.meta_text.chars().collect(),
            offset: 0,
            frame: 0,
        }
    }
}

impl TickerOverlay {
    /// Wrap a parsed ticker pair with scroll state at offset zero.
    pub fn new(pair: TickerPair) -> Self {
        TickerOverlay::from(pair)
    }

    /// Current scroll offset in columns.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The visible slice of the message line for a `width`-column screen.
    pub fn message_window(&self, width: usize) -> String {
        window(&self.message, self.offset, width)
    }

    /// The visible slice of the meta line for a `width`-column screen.
    pub fn meta_window(&self, width: usize) -> String {
        window(&self.meta, self.offset, width)
    }

    /// Tick the scroll state; call once per rendered frame.
    ///
    /// The offset moves one column every [`FRAMES_PER_COLUMN`] calls,
    /// wrapping at the text length, so the scroll speed is fixed relative
    /// to the frame cadence rather than the text.
    pub fn advance(&mut self) {
        self.frame += 1;
        if self.frame % FRAMES_PER_COLUMN == 0 && !self.message.is_empty() {
            self.offset = (self.offset + 1) % self.message.len();
        }
    }
}

/// Text shorter than the screen is pinned left and padded; longer text
/// wraps circularly from `offset`.
fn window(text: &[char], offset: usize, width: usize) -> String {
    if text.len() <= width {
        let mut out: String = text.iter().collect();
        out.push_str(&" ".repeat(width - text.len()));
        out
    } else {
        (0..width).map(|j| text[(offset + j) % text.len()]).collect()
    }
}
