//! Heat field: the flat intensity buffer backing the fire.
//!
//! The buffer is over-allocated by one row plus one cell so the diffusion
//! kernel can always read one row and one column ahead without bounds
//! checks. The trailing slots are never injected and never displayed, so
//! they stay zero and act as a permanent cold edge below the screen.

use rand::Rng;

/// Intensity written into each injected bottom-row cell.
pub const IGNITION_INTENSITY: u32 = 65;

/// One injection draw per this many columns of width.
pub const INJECTION_DIVISOR: usize = 9;

/// Owned heat buffer for a fixed-size screen.
///
/// Logical cell `(row, col)` lives at linear index `row * width + col`,
/// row 0 at the top of the screen and row `height - 1` (the heat source)
/// at the bottom.
#[derive(Debug, Clone)]
pub struct HeatField {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

impl HeatField {
    /// Create a cold field for a `width x height` screen.
    ///
    /// Degenerate dimensions (zero in either axis) yield an empty field
    /// whose `inject` and `diffuse` are no-ops.
    pub fn new(width: usize, height: usize) -> Self {
        HeatField {
            width,
            height,
            cells: vec![0; width * height + width + 1],
        }
    }

    /// Screen width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Screen height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Intensity at `(row, col)`. Both must be in bounds.
    pub fn intensity(&self, row: usize, col: usize) -> u32 {
        debug_assert!(row < self.height && col < self.width);
        self.cells[row * self.width + col]
    }

    /// Seed heat along the bottom row.
    ///
    /// Draws `width / 9` independent random columns and sets each chosen
    /// cell to [`IGNITION_INTENSITY`]. Draws may collide; a collision just
    /// re-injects the same cell.
    pub fn inject<R: Rng>(&mut self, rng: &mut R) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let bottom = self.width * (self.height - 1);
        for _ in 0..self.width / INJECTION_DIVISOR {
            let col = rng.random_range(0..self.width);
            self.cells[bottom + col] = IGNITION_INTENSITY;
        }
    }

    /// Advance the field one tick.
    ///
    /// Single in-place pass in ascending index order: each cell becomes the
    /// floor-average of itself and its right, below, and below-right
    /// neighbours. Only looking "down-right" in linear-index space is what
    /// pulls heat upward from the bottom-row source frame over frame. The
    /// pass order is part of the visual tuning; keep it a single ascending
    /// sweep rather than restructuring it into a double-buffered update.
    pub fn diffuse(&mut self) {
        let w = self.width;
        for i in 0..w * self.height {
            let sum = self.cells[i] + self.cells[i + 1] + self.cells[i + w] + self.cells[i + w + 1];
            self.cells[i] = sum / 4;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_field_is_cold_and_over_allocated() {
        let field = HeatField::new(10, 5);
        assert_eq!(field.cells.len(), 10 * 5 + 10 + 1);
        assert!(field.cells.iter().all(|&v| v == 0));
    }

    #[test]
    fn inject_hits_only_the_bottom_row() {
        let mut field = HeatField::new(30, 6);
        let mut rng = StdRng::seed_from_u64(7);
        field.inject(&mut rng);

        let injected: Vec<usize> = field
            .cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != 0)
            .map(|(i, _)| i)
            .collect();
        // width / 9 = 3 draws, so between 1 and 3 distinct cells hit
        assert!(!injected.is_empty() && injected.len() <= 3);
        for idx in injected {
            assert_eq!(field.cells[idx], IGNITION_INTENSITY);
            assert_eq!(idx / 30, 5, "injection outside bottom row at index {idx}");
        }
    }

    #[test]
    fn diffuse_is_deterministic() {
        let mut a = HeatField::new(12, 8);
        a.cells[12 * 7 + 3] = 65;
        a.cells[12 * 7 + 9] = 65;
        let mut b = a.clone();

        for _ in 0..5 {
            a.diffuse();
            b.diffuse();
        }
        assert_eq!(a.cells, b.cells);
    }

    #[test]
    fn diffuse_never_exceeds_local_max() {
        let mut field = HeatField::new(12, 8);
        field.cells[12 * 7 + 5] = 65;
        let before = field.cells.clone();
        field.diffuse();

        let w = 12;
        for i in 0..w * 8 {
            let local_max = before[i]
                .max(before[i + 1])
                .max(before[i + w])
                .max(before[i + w + 1]);
            // A floor-average can never exceed the largest of its inputs.
            assert!(field.cells[i] <= local_max, "cell {i} grew past its inputs");
        }
    }

    #[test]
    fn padding_cells_stay_zero() {
        let mut field = HeatField::new(9, 4);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            field.inject(&mut rng);
            field.diffuse();
        }
        assert!(field.cells[9 * 4..].iter().all(|&v| v == 0));
    }

    #[test]
    fn zero_sized_field_is_inert() {
        let mut field = HeatField::new(0, 0);
        let mut rng = StdRng::seed_from_u64(0);
        field.inject(&mut rng);
        field.diffuse();
        assert_eq!(field.cells, vec![0]);
    }
}
