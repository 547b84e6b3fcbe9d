//! Shapes module - the fixed catalog of piece grids
//!
//! A [`Shape`] is a small rectangular grid of occupied/empty cells stored inline
//! (no allocation). Rotation builds a new value; catalog entries are never
//! mutated.

use crate::rng::SimpleRng;
use crate::types::{ShapeKind, MAX_SHAPE_DIM};

/// Rectangular grid of occupied cells, at most 4x4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    grid: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from 0/1 rows.
    ///
    /// Returns `None` for empty input, ragged rows, or anything larger than 4x4.
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height == 0 || width == 0 || height > MAX_SHAPE_DIM || width > MAX_SHAPE_DIM {
            return None;
        }
        let mut grid = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return None;
            }
            for (c, &v) in row.iter().enumerate() {
                grid[r][c] = v != 0;
            }
        }
        Some(Self {
            rows: height as u8,
            cols: width as u8,
            grid,
        })
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at (row, col) is occupied; false outside the grid
    pub fn is_filled(&self, row: u8, col: u8) -> bool {
        row < self.rows && col < self.cols && self.grid[row as usize][col as usize]
    }

    /// Occupied cells as (col, row) offsets from the top-left origin
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows).flat_map(move |r| {
            (0..self.cols)
                .filter(move |&c| self.grid[r as usize][c as usize])
                .map(move |c| (c as i8, r as i8))
        })
    }

    /// Clockwise quarter turn: transpose, then reverse each row.
    ///
    /// Row `i` of the result is column `i` of `self` read bottom-to-top.
    pub fn rotated_cw(&self) -> Self {
        let mut grid = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for i in 0..self.cols as usize {
            for j in 0..self.rows as usize {
                grid[i][j] = self.grid[self.rows as usize - 1 - j][i];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            grid,
        }
    }
}

/// Catalog grid for a shape kind, in spawn orientation
pub fn get_shape(kind: ShapeKind) -> Shape {
    match kind {
        ShapeKind::I => I_SHAPE,
        ShapeKind::O => O_SHAPE,
        ShapeKind::T => T_SHAPE,
        ShapeKind::L => L_SHAPE,
        ShapeKind::J => J_SHAPE,
    }
}

/// Uniform, independent draw from the catalog
pub fn random_shape(rng: &mut SimpleRng) -> (ShapeKind, Shape) {
    let kind = rng
        .choose(&ShapeKind::ALL)
        .copied()
        .unwrap_or(ShapeKind::I);
    (kind, get_shape(kind))
}

const fn catalog_shape(rows: u8, cols: u8, grid: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM]) -> Shape {
    Shape { rows, cols, grid }
}

const X: bool = true;
const E: bool = false;

/// [1111]
const I_SHAPE: Shape = catalog_shape(
    1,
    4,
    [[X, X, X, X], [E, E, E, E], [E, E, E, E], [E, E, E, E]],
);

/// [11] [11]
const O_SHAPE: Shape = catalog_shape(
    2,
    2,
    [[X, X, E, E], [X, X, E, E], [E, E, E, E], [E, E, E, E]],
);

/// [010] [111]
const T_SHAPE: Shape = catalog_shape(
    2,
    3,
    [[E, X, E, E], [X, X, X, E], [E, E, E, E], [E, E, E, E]],
);

/// [100] [111]
const L_SHAPE: Shape = catalog_shape(
    2,
    3,
    [[X, E, E, E], [X, X, X, E], [E, E, E, E], [E, E, E, E]],
);

/// [001] [111]
const J_SHAPE: Shape = catalog_shape(
    2,
    3,
    [[E, E, X, E], [X, X, X, E], [E, E, E, E], [E, E, E, E]],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_dimensions() {
        assert_eq!((get_shape(ShapeKind::I).rows(), get_shape(ShapeKind::I).cols()), (1, 4));
        assert_eq!((get_shape(ShapeKind::O).rows(), get_shape(ShapeKind::O).cols()), (2, 2));
        for kind in [ShapeKind::T, ShapeKind::L, ShapeKind::J] {
            let shape = get_shape(kind);
            assert_eq!((shape.rows(), shape.cols()), (2, 3), "{:?}", kind);
        }
    }

    #[test]
    fn test_every_catalog_row_is_used() {
        for kind in ShapeKind::ALL {
            let shape = get_shape(kind);
            for r in 0..shape.rows() {
                assert!(
                    (0..shape.cols()).any(|c| shape.is_filled(r, c)),
                    "{:?} row {} is empty",
                    kind,
                    r
                );
            }
            assert_eq!(shape.cells().count(), 4, "{:?} should have 4 cells", kind);
        }
    }

    #[test]
    fn test_from_rows_matches_catalog() {
        let t = Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]).unwrap();
        assert_eq!(t, get_shape(ShapeKind::T));
        assert!(Shape::from_rows(&[]).is_none());
        assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
        assert!(Shape::from_rows(&[&[1, 1, 1, 1, 1]]).is_none());
    }

    #[test]
    fn test_rotate_i_becomes_vertical() {
        let rotated = get_shape(ShapeKind::I).rotated_cw();
        assert_eq!((rotated.rows(), rotated.cols()), (4, 1));
        assert_eq!(
            rotated.cells().collect::<Vec<_>>(),
            vec![(0, 0), (0, 1), (0, 2), (0, 3)]
        );
    }

    #[test]
    fn test_rotate_l_clockwise() {
        // [100]      [11]
        // [111]  ->  [10]
        //            [10]
        let rotated = get_shape(ShapeKind::L).rotated_cw();
        let expected = Shape::from_rows(&[&[1, 1], &[1, 0], &[1, 0]]).unwrap();
        assert_eq!(rotated, expected);
    }

    #[test]
    fn test_four_rotations_return_to_start() {
        for kind in ShapeKind::ALL {
            let start = get_shape(kind);
            let back = start.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
            assert_eq!(back, start, "{:?}", kind);
        }
    }

    #[test]
    fn test_rotation_leaves_catalog_untouched() {
        let before = get_shape(ShapeKind::J);
        let _ = before.rotated_cw();
        assert_eq!(get_shape(ShapeKind::J), before);
    }

    #[test]
    fn test_random_shape_returns_catalog_grid() {
        let mut rng = SimpleRng::new(3);
        for _ in 0..50 {
            let (kind, shape) = random_shape(&mut rng);
            assert_eq!(shape, get_shape(kind));
        }
    }
}
