// grid.rs - Toroidal cell store for Conway's Game of Life

use crate::error::GolError;

/// Default grid side length.
pub const DEFAULT_SIZE: usize = 30;

/// One cell of the grid.
///
/// `next` and `neighbor_count` are scratch state owned by the engine and
/// are only meaningful while a generation step is in progress.
#[derive(Debug, Clone)]
pub(crate) struct Cell {
    pub(crate) status: bool,
    pub(crate) next: bool,
    pub(crate) neighbor_count: u8,
    pub(crate) neighbors: [usize; 8],
}

/// N x N toroidal grid with flat row-major storage.
///
/// The side length is fixed at construction, and each cell's 8 wrapped
/// neighbors are precomputed once there; the topology never changes
/// afterwards.
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-dead grid with precomputed neighbor topology.
    pub fn new(size: usize) -> Result<Self, GolError> {
        if size == 0 {
            return Err(GolError::InvalidSize(size));
        }
        let mut cells = vec![
            Cell {
                status: false,
                next: false,
                neighbor_count: 0,
                neighbors: [0; 8],
            };
            size * size
        ];
        for idx in 0..cells.len() {
            cells[idx].neighbors = neighbors_of(size, idx);
        }
        Ok(Self { size, cells })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Flat index of `(row, col)`. Callers keep coordinates in range.
    pub(crate) fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)].status
    }

    /// Coordinates of the 8 toroidal neighbors of `(row, col)`.
    pub fn neighbors(&self, row: usize, col: usize) -> [(usize, usize); 8] {
        self.cells[self.index(row, col)]
            .neighbors
            .map(|idx| (idx / self.size, idx % self.size))
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| (row, col)))
    }

    /// Flips the cell and returns its new status. This is the single
    /// mutation primitive: every state change goes through here.
    pub(crate) fn toggle(&mut self, idx: usize) -> bool {
        let cell = &mut self.cells[idx];
        cell.status = !cell.status;
        cell.status
    }

    pub(crate) fn cell(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    pub(crate) fn cell_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }
}

/// The 8 wrapped neighbor indices of a cell: every (row, col) offset in
/// {-1, 0, 1} except (0, 0), taken modulo the side length.
fn neighbors_of(size: usize, idx: usize) -> [usize; 8] {
    let row = (idx / size) as isize;
    let col = (idx % size) as isize;
    let n = size as isize;
    let mut out = [0usize; 8];
    let mut slot = 0;
    for dr in -1..=1 {
        for dc in -1..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let nr = (row + dr).rem_euclid(n) as usize;
            let nc = (col + dc).rem_euclid(n) as usize;
            out[slot] = nr * size + nc;
            slot += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(Grid::new(0), Err(GolError::InvalidSize(0))));
    }

    #[test]
    fn every_cell_has_eight_distinct_neighbors() {
        for size in 3..=8 {
            let grid = Grid::new(size).unwrap();
            for (row, col) in grid.coords() {
                let neighbors = grid.neighbors(row, col);
                let unique: HashSet<_> = neighbors.iter().copied().collect();
                assert_eq!(unique.len(), 8, "duplicates at ({row}, {col}), size {size}");
                assert!(
                    !unique.contains(&(row, col)),
                    "self-reference at ({row}, {col}), size {size}"
                );
            }
        }
    }

    #[test]
    fn neighbor_relation_is_symmetric() {
        let grid = Grid::new(5).unwrap();
        for (row, col) in grid.coords() {
            for (nr, nc) in grid.neighbors(row, col) {
                assert!(
                    grid.neighbors(nr, nc).contains(&(row, col)),
                    "({row}, {col}) -> ({nr}, {nc}) not symmetric"
                );
            }
        }
    }

    #[test]
    fn corner_neighbors_wrap_around() {
        let grid = Grid::new(4).unwrap();
        let neighbors = grid.neighbors(0, 0);
        for expected in [(3, 3), (3, 0), (3, 1), (0, 3), (0, 1), (1, 3), (1, 0), (1, 1)] {
            assert!(neighbors.contains(&expected), "missing {expected:?}");
        }
    }

    #[test]
    fn coords_are_row_major() {
        let grid = Grid::new(3).unwrap();
        let coords: Vec<_> = grid.coords().collect();
        assert_eq!(
            coords,
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 1),
                (1, 2),
                (2, 0),
                (2, 1),
                (2, 2),
            ]
        );
    }

    #[test]
    fn new_grid_is_all_dead() {
        let grid = Grid::new(6).unwrap();
        assert!(grid.coords().all(|(row, col)| !grid.is_alive(row, col)));
    }
}
