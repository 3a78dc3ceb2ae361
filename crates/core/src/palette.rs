//! Intensity-to-glyph and intensity-to-color-band mapping.
//!
//! Color bands are abstract identifiers (1 = coolest .. 4 = hottest); the
//! terminal binary decides what style each band gets. Injected heat (65) is
//! far above both the glyph saturation point (9) and the hottest band
//! threshold (15). That mismatch is inherited tuning: fresh injections
//! render as the hottest glyph/color for a few ticks before cooling into
//! the visible gradient, and must not be "corrected".

/// Glyphs ordered coldest to hottest. Intensity `n` in `0..=9` maps to
/// index `n`; anything hotter saturates at the last glyph.
pub const GLYPHS: [char; 10] = [' ', '.', ':', '^', '*', 'x', 's', 'S', '#', '$'];

/// Glyph for an intensity (saturating at the hottest entry).
pub fn glyph(intensity: u32) -> char {
    GLYPHS[intensity.min(9) as usize]
}

/// Color band for an intensity: 4 above 15, 3 above 9, 2 above 4, else 1.
pub fn color_band(intensity: u32) -> u8 {
    if intensity > 15 {
        4
    } else if intensity > 9 {
        3
    } else if intensity > 4 {
        2
    } else {
        1
    }
}

/// Combined lookup used by the render loop. Pure and total.
pub fn glyph_and_color(intensity: u32) -> (char, u8) {
    (glyph(intensity), color_band(intensity))
}
