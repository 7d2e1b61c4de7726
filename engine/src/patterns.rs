//! Seed configurations for a [`SimulationEngine`].
//!
//! Everything here goes through the engine's public mutators, so the
//! matrix and the living set stay in step.

use log::debug;
use rand::Rng;

use crate::engine::{Coord, SimulationEngine};
use crate::error::{Error, Result};

/// A named arrangement of living cells, relative to its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [Coord],
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 1), (1, 1), (2, 1)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const PATTERNS: &[Pattern] = &[BLOCK, BLINKER, TOAD, BEACON, GLIDER];

impl Pattern {
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0)
    }

    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0)
    }

    /// Top-left corner that centres the pattern on a `rows`x`cols` grid.
    /// Patterns larger than the grid are anchored at the origin.
    pub fn centered_origin(&self, rows: usize, cols: usize) -> Coord {
        (
            rows.saturating_sub(self.height()) / 2,
            cols.saturating_sub(self.width()) / 2,
        )
    }

    /// Clear the engine and seed it with this pattern at `origin`.
    ///
    /// Nothing is changed if any cell would land off the grid.
    pub fn place(&self, engine: &mut SimulationEngine, origin: Coord) -> Result<()> {
        let (top, left) = origin;
        let mut translated = Vec::with_capacity(self.cells.len());
        for &(row, col) in self.cells {
            let pos = top.checked_add(row).zip(left.checked_add(col));
            match pos {
                Some(pos) if engine.contains(pos) => translated.push(pos),
                // Off the grid, or past usize::MAX.
                _ => {
                    return Err(Error::OutOfBounds {
                        row: top.saturating_add(row),
                        col: left.saturating_add(col),
                        rows: engine.rows(),
                        cols: engine.cols(),
                    })
                }
            }
        }

        engine.reset();
        for pos in translated {
            engine.set_alive(pos)?;
        }
        debug!("placed {} at {:?}", self.name, origin);
        Ok(())
    }
}

/// Clear the engine, then bring each cell to life with probability `density`.
pub fn randomize<R: Rng + ?Sized>(
    engine: &mut SimulationEngine,
    rng: &mut R,
    density: f64,
) -> Result<()> {
    let density = density.clamp(0.0, 1.0);
    engine.reset();

    for row in 0..engine.rows() {
        for col in 0..engine.cols() {
            if rng.random_bool(density) {
                engine.set_alive((row, col))?;
            }
        }
    }
    debug!(
        "randomized {}x{} grid at density {density}: {} alive",
        engine.rows(),
        engine.cols(),
        engine.living_cells().len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn living(engine: &SimulationEngine) -> HashSet<Coord> {
        engine.living_cells().clone()
    }

    #[test]
    fn bounding_boxes() {
        assert_eq!((BLOCK.height(), BLOCK.width()), (2, 2));
        assert_eq!((BLINKER.height(), BLINKER.width()), (3, 2));
        assert_eq!((TOAD.height(), TOAD.width()), (2, 4));
        assert_eq!((BEACON.height(), BEACON.width()), (4, 4));
        assert_eq!((GLIDER.height(), GLIDER.width()), (3, 3));
    }

    #[test]
    fn centered_origin_fits_small_grids() {
        assert_eq!(GLIDER.centered_origin(10, 10), (3, 3));
        assert_eq!(BEACON.centered_origin(2, 2), (0, 0));
    }

    #[test]
    fn place_translates_and_replaces_previous_cells() {
        let mut engine = SimulationEngine::new(10, 10).unwrap();
        engine.set_alive((9, 9)).unwrap();

        BLOCK.place(&mut engine, (4, 5)).unwrap();

        let expected: HashSet<Coord> = [(4, 5), (4, 6), (5, 5), (5, 6)].into_iter().collect();
        assert_eq!(living(&engine), expected);
        assert!(!engine.is_alive((9, 9)));
    }

    #[test]
    fn place_off_grid_leaves_engine_untouched() {
        let mut engine = SimulationEngine::new(5, 5).unwrap();
        engine.set_alive((0, 0)).unwrap();
        let before = engine.clone();

        let result = GLIDER.place(&mut engine, (3, 3));

        assert!(matches!(result, Err(Error::OutOfBounds { .. })));
        assert_eq!(engine, before);
    }

    #[test]
    fn place_with_overflowing_origin_is_rejected() {
        let mut engine = SimulationEngine::new(10, 10).unwrap();
        engine.set_alive((5, 5)).unwrap();
        let before = engine.clone();

        let result = BLINKER.place(&mut engine, (0, usize::MAX));

        assert_eq!(
            result,
            Err(Error::OutOfBounds {
                row: 0,
                col: usize::MAX,
                rows: 10,
                cols: 10,
            })
        );
        assert_eq!(engine, before);

        assert!(matches!(
            BLOCK.place(&mut engine, (usize::MAX, usize::MAX)),
            Err(Error::OutOfBounds { .. })
        ));
        assert_eq!(engine, before);
    }

    #[test]
    fn toad_and_beacon_have_period_two() {
        for pattern in [TOAD, BEACON] {
            let mut engine = SimulationEngine::new(10, 10).unwrap();
            pattern.place(&mut engine, (3, 3)).unwrap();
            let start = living(&engine);

            engine.update();
            assert_ne!(living(&engine), start, "{} did not change", pattern.name);
            engine.update();
            assert_eq!(living(&engine), start, "{} did not return", pattern.name);
        }
    }

    #[test]
    fn glider_translates_diagonally_every_four_generations() {
        let mut engine = SimulationEngine::new(10, 10).unwrap();
        GLIDER.place(&mut engine, (0, 0)).unwrap();

        for _ in 0..4 {
            engine.update();
        }

        let expected: HashSet<Coord> = GLIDER.cells.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
        assert_eq!(living(&engine), expected);
    }

    #[test]
    fn glider_dies_against_the_corner() {
        let mut engine = SimulationEngine::new(6, 6).unwrap();
        GLIDER.place(&mut engine, (0, 0)).unwrap();

        for _ in 0..40 {
            engine.update();
        }

        // It settles into a block in the bottom-right corner rather than wrapping.
        let block: HashSet<Coord> = [(4, 4), (4, 5), (5, 4), (5, 5)].into_iter().collect();
        assert_eq!(living(&engine), block);
    }

    #[test]
    fn randomize_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut engine = SimulationEngine::new(4, 6).unwrap();

        randomize(&mut engine, &mut rng, 1.0).unwrap();
        assert_eq!(engine.living_cells().len(), 24);

        randomize(&mut engine, &mut rng, 0.0).unwrap();
        assert!(engine.life_over());

        randomize(&mut engine, &mut rng, 3.5).unwrap();
        assert_eq!(engine.living_cells().len(), 24);
    }

    #[test]
    fn randomize_is_reproducible_for_a_seed() {
        let mut a = SimulationEngine::new(8, 8).unwrap();
        let mut b = SimulationEngine::new(8, 8).unwrap();

        randomize(&mut a, &mut StdRng::seed_from_u64(42), 0.5).unwrap();
        randomize(&mut b, &mut StdRng::seed_from_u64(42), 0.5).unwrap();

        assert_eq!(a, b);
        let matrix_alive = a.state().iter().flatten().filter(|cell| cell.is_alive()).count();
        assert_eq!(matrix_alive, a.living_cells().len());
    }
}
