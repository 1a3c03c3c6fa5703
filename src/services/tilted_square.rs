//! Tilted-square (diamond) brick layout.
//!
//! Items are drawn as squares rotated by 45 degrees. Each row is shifted half a
//! cell to the right of the previous one so diamond corners touch across rows.

use serde::Serialize;

/// One placed diamond.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedSquare<T> {
    /// The grid item
    pub item: T,
    /// Row index (0-based)
    pub row: usize,
    /// Column index within the row (0-based)
    pub column: usize,
    /// Absolute left position in pixels
    pub left_px: f64,
    /// Absolute top position in pixels
    pub top_px: f64,
}

/// Result of a tilted-square layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TiltedSquareLayout<T> {
    /// Placed items in input order
    pub items: Vec<PlacedSquare<T>>,
    /// Items per full row
    pub items_per_row: usize,
    /// Number of rows
    pub row_count: usize,
    /// Horizontal distance between neighbours in a row
    pub horizontal_step_px: f64,
    /// Vertical distance between rows
    pub vertical_step_px: f64,
    /// Width needed to contain every diamond
    pub container_width_px: f64,
    /// Height needed to contain every diamond
    pub container_height_px: f64,
}

impl<T> TiltedSquareLayout<T> {
    fn empty(items_per_row: usize) -> Self {
        Self {
            items: Vec::new(),
            items_per_row,
            row_count: 0,
            horizontal_step_px: 0.0,
            vertical_step_px: 0.0,
            container_width_px: 0.0,
            container_height_px: 0.0,
        }
    }

    /// Positions of the items in one row, left to right.
    #[must_use]
    pub fn row_lefts(&self, row: usize) -> Vec<f64> {
        self.items
            .iter()
            .filter(|placed| placed.row == row)
            .map(|placed| placed.left_px)
            .collect()
    }
}

/// Step sizes derived from the square size and gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiamondMetrics {
    /// Diagonal of the square (width and height of the rotated bounding box)
    pub diagonal: f64,
    /// Half the diagonal
    pub diamond_height: f64,
    /// Horizontal distance between neighbours in a row
    pub horizontal_step: f64,
    /// Vertical distance between rows
    pub vertical_step: f64,
}

impl DiamondMetrics {
    /// Computes the metrics for a square of `size` px separated by `gap` px.
    ///
    /// Neighbours in a row touch corner to corner; the gap opens the rows
    /// vertically by half its value.
    #[must_use]
    pub fn new(size: f64, gap: f64) -> Self {
        let diagonal = size * std::f64::consts::SQRT_2;
        let diamond_height = diagonal / 2.0;
        Self {
            diagonal,
            diamond_height,
            horizontal_step: diagonal,
            vertical_step: diamond_height + gap / 2.0,
        }
    }
}

/// Lays out items as a brick-offset diamond grid.
///
/// Returns an empty layout when there are no items, when `size_px` is not a
/// positive number, or when `gap_px` is negative or not finite.
/// `items_per_row` below 1 is treated as 1.
///
/// # Examples
///
/// ```
/// use siteblocks::services::tilted_square::layout_tilted_square;
///
/// let layout = layout_tilted_square(&["a", "b", "c", "d"], 3, 90.0, 4.0);
/// assert_eq!(layout.row_count, 2);
/// assert!((layout.items[3].left_px - 63.64).abs() < 0.01);
/// ```
pub fn layout_tilted_square<T: Clone>(
    items: &[T],
    items_per_row: usize,
    size_px: f64,
    gap_px: f64,
) -> TiltedSquareLayout<T> {
    let per_row = items_per_row.max(1);

    let valid_size = size_px.is_finite() && size_px > 0.0;
    let valid_gap = gap_px.is_finite() && gap_px >= 0.0;
    if items.is_empty() || !valid_size || !valid_gap {
        return TiltedSquareLayout::empty(per_row);
    }

    let metrics = DiamondMetrics::new(size_px, gap_px);
    let row_shift = metrics.horizontal_step / 2.0;

    let placed: Vec<PlacedSquare<T>> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let row = index / per_row;
            let column = index % per_row;
            PlacedSquare {
                item: item.clone(),
                row,
                column,
                left_px: column as f64 * metrics.horizontal_step + row as f64 * row_shift,
                top_px: row as f64 * metrics.vertical_step,
            }
        })
        .collect();

    let row_count = items.len().div_ceil(per_row);
    let widest_row = per_row.min(items.len());

    let container_width_px = (widest_row - 1) as f64 * metrics.horizontal_step
        + metrics.diagonal
        + (row_count - 1) as f64 * row_shift;
    let container_height_px = (row_count - 1) as f64 * metrics.vertical_step + metrics.diagonal;

    TiltedSquareLayout {
        items: placed,
        items_per_row: per_row,
        row_count,
        horizontal_step_px: metrics.horizontal_step,
        vertical_step_px: metrics.vertical_step,
        container_width_px,
        container_height_px,
    }
}
