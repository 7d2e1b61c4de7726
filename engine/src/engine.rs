use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use crate::engine::CellState::{Alive, Dead};
use crate::error::{Error, Result};

/// A `(row, column)` position on the grid, 0-indexed.
pub type Coord = (usize, usize);

const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == Alive
    }
}

/// Bounded Game of Life grid.
///
/// Keeps a dense matrix for point lookups and a sparse set of living cells
/// that drives [`SimulationEngine::update`]. Both always describe the same
/// generation once a public method returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationEngine {
    rows: usize,
    cols: usize,
    state: Vec<Vec<CellState>>,
    living_cells: HashSet<Coord>,
}

impl SimulationEngine {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyGrid { rows, cols });
        }
        Ok(SimulationEngine {
            rows,
            cols,
            state: vec![vec![Dead; cols]; rows],
            living_cells: HashSet::new(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn state(&self) -> &[Vec<CellState>] {
        &self.state
    }

    pub fn living_cells(&self) -> &HashSet<Coord> {
        &self.living_cells
    }

    /// Whether `pos` lies on the grid.
    pub fn contains(&self, (row, col): Coord) -> bool {
        row < self.rows && col < self.cols
    }

    /// Cells outside the grid are reported as dead.
    pub fn is_alive(&self, (row, col): Coord) -> bool {
        self.state.get(row).and_then(|cells| cells.get(col)) == Some(&Alive)
    }

    /// Mark a cell alive. Reviving a living cell is a no-op.
    pub fn set_alive(&mut self, pos: Coord) -> Result<()> {
        self.check_bounds(pos)?;
        self.revive(pos);
        Ok(())
    }

    /// Mark a living cell dead. Fails with [`Error::NotAlive`] if it was not alive.
    pub fn set_dead(&mut self, pos: Coord) -> Result<()> {
        self.check_bounds(pos)?;
        if !self.living_cells.contains(&pos) {
            return Err(Error::NotAlive {
                row: pos.0,
                col: pos.1,
            });
        }
        self.kill(pos);
        Ok(())
    }

    /// The Moore neighbourhood of `pos`, truncated at the grid edges.
    pub fn neighbours(&self, pos: Coord) -> Result<HashSet<Coord>> {
        self.check_bounds(pos)?;
        Ok(moore_neighbourhood(pos, self.rows, self.cols).collect())
    }

    /// Advance the grid by one generation.
    ///
    /// Only living cells and their neighbours are visited. Every birth and
    /// death is decided against the current generation and applied once the
    /// scan is finished.
    pub fn update(&mut self) {
        let mut votes: HashMap<Coord, u8> = HashMap::new();
        let mut doomed = Vec::new();

        for &cell in &self.living_cells {
            let mut alive_neighbours = 0;
            for neighbour in moore_neighbourhood(cell, self.rows, self.cols) {
                if self.living_cells.contains(&neighbour) {
                    alive_neighbours += 1;
                } else {
                    // Dead neighbour, one more vote towards a birth
                    *votes.entry(neighbour).or_default() += 1;
                }
            }

            // Under- or overpopulated, dies
            if !(2..=3).contains(&alive_neighbours) {
                doomed.push(cell);
            }
        }

        let born: Vec<Coord> = votes
            .into_iter()
            .filter(|&(_, count)| count == 3) // Becomes alive
            .map(|(cell, _)| cell)
            .collect();

        trace!("doomed: {doomed:?}, born: {born:?}");

        // Apply only after the scan so every decision saw the same generation
        for &cell in &doomed {
            self.kill(cell);
        }
        for &cell in &born {
            self.revive(cell);
        }

        debug!(
            "generation advanced: {} died, {} born, {} alive",
            doomed.len(),
            born.len(),
            self.living_cells.len()
        );
    }

    /// True once every cell is dead. Still lifes and oscillators never end.
    pub fn life_over(&self) -> bool {
        self.living_cells.is_empty()
    }

    pub fn reset(&mut self) {
        for row in &mut self.state {
            row.fill(Dead);
        }
        self.living_cells.clear();
    }

    fn check_bounds(&self, (row, col): Coord) -> Result<()> {
        if self.contains((row, col)) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    fn revive(&mut self, (row, col): Coord) {
        self.state[row][col] = Alive;
        self.living_cells.insert((row, col));
    }

    fn kill(&mut self, (row, col): Coord) {
        self.state[row][col] = Dead;
        self.living_cells.remove(&(row, col));
    }
}

fn moore_neighbourhood(
    (row, col): Coord,
    rows: usize,
    cols: usize,
) -> impl Iterator<Item = Coord> {
    NEIGHBOUR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
        let r = row.checked_add_signed(dr).filter(|&r| r < rows)?;
        let c = col.checked_add_signed(dc).filter(|&c| c < cols)?;
        Some((r, c))
    })
}
