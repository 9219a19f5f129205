// sim.rs - Generation engine and run-state machine

use std::collections::HashSet;
use std::fmt;

use rand::Rng;

use crate::error::GolError;
use crate::grid::Grid;
use crate::patterns::Pattern;

/// Status line surfaced to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Ready,
    Running,
    Paused,
    Cleared,
    Extinction,
    Stasis,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Message::Ready => "Ready.",
            Message::Running => "Running.",
            Message::Paused => "Paused.",
            Message::Cleared => "Cleared.",
            Message::Extinction => "Extinction",
            Message::Stasis => "Stasis",
        })
    }
}

/// One Game of Life run: grid, live set, generation counter and run flag.
///
/// The live set is maintained incrementally by every toggle rather than
/// rebuilt by scanning, and each generation only visits live cells and
/// their neighbors (the "relevant set") instead of the whole board.
///
/// The engine never drives itself: a caller (the GUI's frame loop, or a
/// test harness in a plain loop) calls [`Simulation::step`] once per
/// generation, so `stop` is observed at every generation boundary.
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    alive: HashSet<usize>,
    generation: u64,
    running: bool,
    message: Message,
}

impl Simulation {
    pub fn new(size: usize) -> Result<Self, GolError> {
        Ok(Self {
            grid: Grid::new(size)?,
            alive: HashSet::new(),
            generation: 0,
            running: false,
            message: Message::Ready,
        })
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.grid.is_alive(row, col)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.alive.len()
    }

    pub fn message(&self) -> Message {
        self.message
    }

    /// Manual cell flip. Ignored while the simulation is running, so user
    /// edits cannot interleave with an in-flight generation.
    pub fn toggle(&mut self, row: usize, col: usize) {
        if self.running {
            return;
        }
        let idx = self.grid.index(row, col);
        self.flip(idx);
    }

    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.message = Message::Running;
    }

    /// Cooperative stop: takes effect at the next generation boundary.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.message = Message::Paused;
    }

    /// Advances one generation and returns whether the simulation is
    /// still running afterwards. A no-op when stopped.
    ///
    /// A generation with no change terminates the run: `Extinction` when
    /// the board emptied, `Stasis` otherwise. The generation counter only
    /// advances when something changed.
    pub fn step(&mut self) -> bool {
        if !self.running {
            return false;
        }

        // Live cells plus everything adjacent to one: a superset of every
        // cell whose status can change this generation. A dead cell with
        // no live neighbor has count 0 and stays dead.
        let mut relevant: HashSet<usize> = self.alive.clone();
        for &idx in &self.alive {
            relevant.extend(self.grid.cell(idx).neighbors);
        }

        for &idx in &relevant {
            let count = self
                .grid
                .cell(idx)
                .neighbors
                .iter()
                .filter(|&&n| self.grid.cell(n).status)
                .count() as u8;
            let cell = self.grid.cell_mut(idx);
            cell.neighbor_count = count;
            cell.next = match (cell.status, count) {
                (true, 2) | (true, 3) => true, // survival
                (false, 3) => true,            // birth
                _ => false,
            };
        }

        // `relevant` is distinct from `alive`, which flip mutates.
        let mut changed = false;
        for &idx in &relevant {
            let cell = self.grid.cell(idx);
            if cell.next != cell.status {
                self.flip(idx);
                changed = true;
            }
        }

        if changed {
            self.generation += 1;
        } else {
            self.running = false;
            self.message = if self.alive.is_empty() {
                Message::Extinction
            } else {
                Message::Stasis
            };
        }
        self.running
    }

    /// Kills every live cell and resets the generation counter. Ignored
    /// while running.
    pub fn clear(&mut self) {
        if self.running {
            return;
        }
        self.generation = 0;
        self.message = Message::Cleared;
        // Snapshot first: flip mutates the set being walked.
        let live: Vec<usize> = self.alive.iter().copied().collect();
        for idx in live {
            self.flip(idx);
        }
    }

    /// Clears, then revives each cell independently with probability 1/5.
    /// Ignored while running.
    pub fn randomize(&mut self, rng: &mut impl Rng) {
        if self.running {
            return;
        }
        self.clear();
        for idx in 0..self.grid.cell_count() {
            if rng.gen_bool(0.2) {
                self.flip(idx);
            }
        }
    }

    /// Clears, then stamps `pattern` centered on the grid, wrapping any
    /// cells that fall off a board smaller than the pattern. Ignored
    /// while running.
    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        if self.running {
            return;
        }
        self.clear();
        let size = self.grid.size();
        let (rows, cols) = pattern.extent();
        let top = size.saturating_sub(rows) / 2;
        let left = size.saturating_sub(cols) / 2;
        for &(r, c) in pattern.cells {
            let idx = self.grid.index((top + r) % size, (left + c) % size);
            // Wrap collisions on tiny boards would double-toggle.
            if !self.grid.cell(idx).status {
                self.flip(idx);
            }
        }
    }

    /// Applies a toggle through the grid primitive and keeps the live set
    /// in sync with cell status.
    fn flip(&mut self, idx: usize) {
        if self.grid.toggle(idx) {
            self.alive.insert(idx);
        } else {
            self.alive.remove(&idx);
        }
    }
}
