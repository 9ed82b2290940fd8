/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    fn to_nd_index(self) -> [usize; 2];
}

impl ToNdIndex for Coord2 {
    fn to_nd_index(self) -> [usize; 2] {
        [self.0.into(), self.1.into()]
    }
}

/// Converts a row-major linear index back into `(row, col)`.
pub(crate) fn from_linear(index: usize, cols: Coord) -> Coord2 {
    let cols = usize::from(cols);
    ((index / cols) as Coord, (index % cols) as Coord)
}

/// The up-to-8 cells around `center` on a `size` grid, in row-major order.
pub fn neighbors(center: Coord2, size: Coord2) -> impl Iterator<Item = Coord2> {
    let (row, col) = center;
    let (rows, cols) = size;
    let row_span = row.saturating_sub(1)..=row.saturating_add(1).min(rows.saturating_sub(1));
    let col_span = col.saturating_sub(1)..=col.saturating_add(1).min(cols.saturating_sub(1));

    row_span
        .flat_map(move |r| col_span.clone().map(move |c| (r, c)))
        .filter(move |&pos| pos != center)
}
