// patterns.rs - Seed patterns, stamped centered on the grid

/// A named set of live cells, offsets from the pattern's own top-left
/// corner. Stamping centers the bounding box on the grid.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Bounding-box extent `(rows, cols)` of the pattern.
    pub fn extent(&self) -> (usize, usize) {
        let rows = self.cells.iter().map(|&(r, _)| r).max().map_or(0, |m| m + 1);
        let cols = self.cells.iter().map(|&(_, c)| c).max().map_or(0, |m| m + 1);
        (rows, cols)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extents_match_bounding_boxes() {
        assert_eq!(PATTERNS[0].extent(), (3, 3));
        assert_eq!(PATTERNS[1].extent(), (1, 3));
        assert_eq!(PATTERNS[5].extent(), (13, 13));
    }

    #[test]
    fn pattern_cells_are_distinct() {
        for pattern in PATTERNS {
            let mut seen = std::collections::HashSet::new();
            for cell in pattern.cells {
                assert!(seen.insert(cell), "{} repeats {cell:?}", pattern.name);
            }
        }
    }
}
