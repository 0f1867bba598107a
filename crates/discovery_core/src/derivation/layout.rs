//! Periodic-table grid placement.
//!
//! # Invariants
//! - `grid_position` is total: it never panics for any `u32`.
//! - Atomic numbers 1..=118 map to distinct cells in rows 0..=6, 8, 9.
//! - Atomic numbers above 118 map to [`GridPosition::OFF_GRID`].

use serde::{Deserialize, Serialize};

pub const GRID_COLUMNS: i32 = 18;
/// Seven periods, one spacer row, lanthanide and actinide rows.
pub const GRID_ROWS: i32 = 10;
pub const LANTHANIDE_ROW: i32 = 8;
pub const ACTINIDE_ROW: i32 = 9;
pub const LAST_CANONICAL_ELEMENT: u32 = 118;

/// Zero-based `(row, column)` cell in the 18 x 10 layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: i32,
    pub column: i32,
}

impl GridPosition {
    pub const OFF_GRID: GridPosition = GridPosition {
        row: -1,
        column: -1,
    };

    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    pub fn is_on_grid(self) -> bool {
        (0..GRID_ROWS).contains(&self.row) && (0..GRID_COLUMNS).contains(&self.column)
    }
}

/// Maps an atomic number to its standard periodic-table cell.
///
/// Lanthanides (57-71) and actinides (89-103) sit in rows 8 and 9 from
/// column 3. Rows 5 and 6 resume at column 3 after the f-block gap.
/// Zero falls through to the `(0, 0)` default; no canonical element does.
pub fn grid_position(atomic_number: u32) -> GridPosition {
    let n = atomic_number as i64;
    let at = |row: i32, column: i64| GridPosition::new(row, column as i32);
    match atomic_number {
        57..=71 => at(LANTHANIDE_ROW, n - 57 + 3),
        89..=103 => at(ACTINIDE_ROW, n - 89 + 3),
        1 => at(0, 0),
        2 => at(0, 17),
        3..=4 => at(1, n - 3),
        5..=10 => at(1, n - 5 + 12),
        11..=12 => at(2, n - 11),
        13..=18 => at(2, n - 13 + 12),
        19..=36 => at(3, n - 19),
        37..=54 => at(4, n - 37),
        55..=56 => at(5, n - 55),
        72..=86 => at(5, n - 72 + 3),
        87..=88 => at(6, n - 87),
        104..=118 => at(6, n - 104 + 3),
        beyond if beyond > LAST_CANONICAL_ELEMENT => GridPosition::OFF_GRID,
        _ => GridPosition::new(0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::{grid_position, GridPosition};

    #[test]
    fn anchors_match_standard_layout() {
        assert_eq!(grid_position(1), GridPosition::new(0, 0));
        assert_eq!(grid_position(2), GridPosition::new(0, 17));
        assert_eq!(grid_position(5), GridPosition::new(1, 12));
        assert_eq!(grid_position(26), GridPosition::new(3, 7));
        assert_eq!(grid_position(56), GridPosition::new(5, 1));
        assert_eq!(grid_position(57), GridPosition::new(8, 3));
        assert_eq!(grid_position(71), GridPosition::new(8, 17));
        assert_eq!(grid_position(72), GridPosition::new(5, 3));
        assert_eq!(grid_position(86), GridPosition::new(5, 17));
        assert_eq!(grid_position(89), GridPosition::new(9, 3));
        assert_eq!(grid_position(104), GridPosition::new(6, 3));
        assert_eq!(grid_position(118), GridPosition::new(6, 17));
    }

    #[test]
    fn beyond_canonical_range_is_off_grid() {
        assert_eq!(grid_position(119), GridPosition::OFF_GRID);
        assert_eq!(grid_position(u32::MAX), GridPosition::OFF_GRID);
        assert!(!GridPosition::OFF_GRID.is_on_grid());
    }

    #[test]
    fn zero_hits_the_catch_all_default() {
        assert_eq!(grid_position(0), GridPosition::new(0, 0));
    }
}
