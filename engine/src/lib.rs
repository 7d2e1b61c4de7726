/**
* Conway's Game of Life on a bounded grid.
*
* A live cell with two or three live neighbours survives, any other live cell dies.
* A dead cell with exactly three live neighbours is born.
* Cells beyond the edges do not exist and never count as neighbours.
*/

pub mod engine;
pub mod error;
pub mod patterns;

pub use engine::{CellState, Coord, SimulationEngine};
pub use error::{Error, Result};
pub use patterns::{randomize, Pattern, PATTERNS};
