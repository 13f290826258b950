use shakmaty::{Color, File, Rank, Square};

/// Number of cells along each side of the board canvas.
const CELLS: u32 = 8;

/// Which color the human player sits behind.
///
/// Fixed once per session. The player's own pieces are always drawn at the
/// bottom of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Player is White: rank 1 at the bottom.
    #[default]
    White,
    /// Player is Black: rank 8 at the bottom.
    Black,
}

impl From<Color> for Orientation {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Orientation::White,
            Color::Black => Orientation::Black,
        }
    }
}

impl Orientation {
    /// Map a logical rank to its bottom-up drawing row.
    ///
    /// Identity for White, vertical flip for Black. Applying it twice
    /// yields the original rank.
    #[inline]
    pub fn display_row(self, rank: Rank) -> Rank {
        match self {
            Orientation::White => rank,
            Orientation::Black => rank.flip_vertical(),
        }
    }

    /// Logical rank shown in the given top-down grid row.
    ///
    /// `grid_row` must be below 8.
    #[inline]
    pub fn rank_at_grid_row(self, grid_row: u32) -> Rank {
        debug_assert!(grid_row < CELLS);
        self.display_row(Rank::new(CELLS - 1 - grid_row))
    }

    /// Resolve a click on the canvas to the square under it.
    ///
    /// `x` and `y` are window pixels measured from the top-left corner.
    /// Returns `None` for positions outside the canvas.
    pub fn square_from_pixel(self, x: f32, y: f32, board_size: u32) -> Option<Square> {
        let col = grid_index(x, board_size)?;
        let grid_row = grid_index(y, board_size)?;
        Some(Square::from_coords(
            File::new(col),
            self.rank_at_grid_row(grid_row),
        ))
    }

    /// Top-down `(col, grid_row)` cell a square occupies on the canvas.
    pub fn grid_cell(self, square: Square) -> (u32, u32) {
        let row = u32::from(self.display_row(square.rank()));
        (u32::from(square.file()), CELLS - 1 - row)
    }

    /// Centre of a square's cell in window pixels.
    pub fn pixel_center(self, square: Square, board_size: u32) -> (f32, f32) {
        let cell = board_size as f32 / CELLS as f32;
        let (col, grid_row) = self.grid_cell(square);
        (
            (col as f32 + 0.5) * cell,
            (grid_row as f32 + 0.5) * cell,
        )
    }
}

/// Grid cell index along one axis, or `None` outside `[0, 8)`.
///
/// NaN positions and a zero-sized board both land outside.
fn grid_index(pos: f32, board_size: u32) -> Option<u32> {
    let cell = (pos / board_size as f32 * CELLS as f32).floor();
    (0.0..CELLS as f32).contains(&cell).then_some(cell as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const SIZE: u32 = 800;

    #[test_case(Orientation::White; "white")]
    #[test_case(Orientation::Black; "black")]
    fn display_row_is_self_inverse(orientation: Orientation) {
        for rank in Rank::ALL {
            assert_eq!(
                orientation.display_row(orientation.display_row(rank)),
                rank
            );
        }
    }

    #[test]
    fn display_row_flips_only_for_black() {
        assert_eq!(Orientation::White.display_row(Rank::Second), Rank::Second);
        assert_eq!(Orientation::Black.display_row(Rank::Second), Rank::Seventh);
        assert_eq!(Orientation::Black.display_row(Rank::First), Rank::Eighth);
    }

    #[test_case(Orientation::White, Square::E1; "white bottom edge is rank one")]
    #[test_case(Orientation::Black, Square::E8; "black bottom edge is rank eight")]
    fn click_on_bottom_edge(orientation: Orientation, expected: Square) {
        // col 4, grid row 7
        let square = orientation.square_from_pixel(450.0, 750.0, SIZE);
        assert_eq!(square, Some(expected));
    }

    #[test_case(Orientation::White, Square::A8; "white")]
    #[test_case(Orientation::Black, Square::A1; "black")]
    fn click_on_top_left_corner(orientation: Orientation, expected: Square) {
        assert_eq!(orientation.square_from_pixel(0.0, 0.0, SIZE), Some(expected));
    }

    #[test_case(Orientation::White; "white")]
    #[test_case(Orientation::Black; "black")]
    fn pixel_to_square_preserves_grid_cell(orientation: Orientation) {
        for py in (0..SIZE).step_by(37) {
            for px in (0..SIZE).step_by(41) {
                let (x, y) = (px as f32, py as f32);
                let square = orientation
                    .square_from_pixel(x, y, SIZE)
                    .expect("pixel inside the canvas");
                let expected = ((x / 100.0) as u32, (y / 100.0) as u32);
                assert_eq!(orientation.grid_cell(square), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test_case(-0.5, 400.0; "left of canvas")]
    #[test_case(400.0, -1.0; "above canvas")]
    #[test_case(800.0, 400.0; "right edge is exclusive")]
    #[test_case(400.0, 800.0; "bottom edge is exclusive")]
    #[test_case(1200.0, 1200.0; "far outside")]
    #[test_case(f32::NAN, 10.0; "nan")]
    fn click_outside_canvas_is_none(x: f32, y: f32) {
        assert_eq!(Orientation::White.square_from_pixel(x, y, SIZE), None);
        assert_eq!(Orientation::Black.square_from_pixel(x, y, SIZE), None);
    }

    #[test]
    fn zero_sized_board_has_no_squares() {
        assert_eq!(Orientation::White.square_from_pixel(0.0, 0.0, 0), None);
        assert_eq!(Orientation::White.square_from_pixel(5.0, 5.0, 0), None);
    }

    #[test_case(Orientation::White; "white")]
    #[test_case(Orientation::Black; "black")]
    fn pixel_center_round_trips(orientation: Orientation) {
        for square in Square::ALL {
            let (x, y) = orientation.pixel_center(square, SIZE);
            assert_eq!(orientation.square_from_pixel(x, y, SIZE), Some(square));
        }
    }

    #[test]
    fn files_are_never_mirrored() {
        let (col, _) = Orientation::Black.grid_cell(Square::A1);
        assert_eq!(col, 0);
    }

    #[test]
    fn orientation_from_color() {
        assert_eq!(Orientation::from(Color::White), Orientation::White);
        assert_eq!(Orientation::from(Color::Black), Orientation::Black);
    }
}
