//! Honeycomb tessellation layout.
//!
//! Arranges grid items into hexagon rows whose lengths alternate `m, m-1, m, ...`
//! so that every other row sits in the gaps of the row above. The computation
//! runs in stages:
//!
//! 1. Pick a [`Breakpoint`] from the viewport width
//! 2. Derive the responsive items-per-row maximum
//! 3. Partition items into alternating-length rows
//! 4. Place each row's items outward from the row center
//! 5. Shift the short rows left by the previous row's center gap
//! 6. Center the whole honeycomb in the viewport
//!
//! Everything is a pure function of its inputs and runs in O(N), cheap enough
//! to recompute on every resize notification.

use serde::Serialize;
use tracing::debug;

/// Viewport class that selects hexagon dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Breakpoint {
    /// Width <= 480px
    Mobile,
    /// Width <= 768px
    Tablet,
    /// Anything wider
    Desktop,
}

/// Size of one hexagon cell in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HexDimensions {
    /// Hexagon width
    pub width: f64,
    /// Hexagon height (point to point)
    pub height: f64,
    /// Margin on each horizontal side
    pub margin: f64,
}

impl HexDimensions {
    /// Horizontal distance between neighbouring hexagon origins.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.width + 2.0 * self.margin
    }

    /// Vertical distance between row origins; rows interlock by a quarter height.
    #[must_use]
    pub fn row_step(&self) -> f64 {
        self.height * 0.75 + 2.0 * self.margin
    }
}

impl Breakpoint {
    /// Largest viewport width treated as mobile.
    pub const MOBILE_MAX_WIDTH: f64 = 480.0;
    /// Largest viewport width treated as tablet.
    pub const TABLET_MAX_WIDTH: f64 = 768.0;

    /// Classifies a viewport width.
    #[must_use]
    pub fn from_viewport(width: f64) -> Self {
        if width <= Self::MOBILE_MAX_WIDTH {
            Self::Mobile
        } else if width <= Self::TABLET_MAX_WIDTH {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    /// Hexagon dimensions for this breakpoint.
    #[must_use]
    pub const fn hex_dimensions(&self) -> HexDimensions {
        match self {
            Self::Mobile => HexDimensions {
                width: 100.0,
                height: 115.0,
                margin: 4.0,
            },
            Self::Tablet => HexDimensions {
                width: 130.0,
                height: 150.0,
                margin: 5.0,
            },
            Self::Desktop => HexDimensions {
                width: 160.0,
                height: 185.0,
                margin: 6.0,
            },
        }
    }

    /// How many items per row this breakpoint removes from the configured maximum.
    #[must_use]
    pub const fn row_reduction(&self) -> usize {
        match self {
            Self::Mobile => 2,
            Self::Tablet => 1,
            Self::Desktop => 0,
        }
    }
}

/// Smallest items-per-row the breakpoint reduction may produce.
const MIN_REDUCED_ITEMS: usize = 3;

/// One positioned honeycomb row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoneycombRow<T> {
    /// Items in visual left-to-right order
    pub items: Vec<T>,
    /// Leftward shift of the row in pixels (0 for even rows)
    pub offset_px: f64,
    /// Top of the row relative to the container
    pub top_px: f64,
    /// Unshifted row width in pixels
    pub width_px: f64,
}

/// Result of a honeycomb layout pass.
///
/// Rows are laid out left-aligned at x = 0 before their `offset_px` shift.
/// `container_margin_px` is the left margin that centers that coordinate
/// space in the viewport.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoneycombLayout<T> {
    /// Positioned rows, top to bottom
    pub rows: Vec<HoneycombRow<T>>,
    /// Row length cap actually applied
    pub max_items_per_row: usize,
    /// Breakpoint used; `None` for the unknown-viewport fallback
    pub breakpoint: Option<Breakpoint>,
    /// Whether odd rows interlock with their neighbours
    pub tessellated: bool,
    /// Viewport width the layout was computed for
    pub viewport_width_px: Option<f64>,
    /// Left margin of the row coordinate space; `None` means center with auto margins
    pub container_margin_px: Option<f64>,
    /// Width from the leftmost to the rightmost cell edge
    pub content_width_px: f64,
    /// Height from the first row top to the last row bottom
    pub content_height_px: f64,
}

impl<T> HoneycombLayout<T> {
    /// Total number of placed items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.rows.iter().map(|row| row.items.len()).sum()
    }

    /// Row lengths, top to bottom.
    #[must_use]
    pub fn row_lengths(&self) -> Vec<usize> {
        self.rows.iter().map(|row| row.items.len()).collect()
    }
}

/// Computes the responsive items-per-row cap for a viewport.
///
/// Starts from `max(3, configured)`, removes the breakpoint's reduction (never
/// going below 3), then caps the result so at least half a hexagon of padding
/// remains on each side of the viewport. The result is never below 1.
#[must_use]
pub fn responsive_max_items(configured: usize, viewport_width: f64) -> usize {
    let breakpoint = Breakpoint::from_viewport(viewport_width);
    let dims = breakpoint.hex_dimensions();

    let reduced = configured
        .max(MIN_REDUCED_ITEMS)
        .saturating_sub(breakpoint.row_reduction())
        .max(MIN_REDUCED_ITEMS);

    let fit = ((viewport_width - dims.width) / dims.spacing()).floor();
    let fit = if fit.is_finite() && fit >= 1.0 {
        fit as usize
    } else {
        1
    };

    reduced.min(fit)
}

/// Splits `count` items into row lengths alternating `max, max-1, max, ...`.
///
/// `max == 1` gives rows of one; the final row holds whatever remains.
#[must_use]
pub fn partition_rows(count: usize, max_items_per_row: usize) -> Vec<usize> {
    let max = max_items_per_row.max(1);
    let mut rows = Vec::new();
    let mut remaining = count;

    while remaining > 0 {
        let nominal = if max == 1 || rows.len() % 2 == 0 {
            max
        } else {
            max - 1
        };
        let len = nominal.min(remaining);
        rows.push(len);
        remaining -= len;
    }

    rows
}

/// Visual slot for each input position of a row of `len` items.
///
/// Input 0 takes the center slot (center-right for even rows). Later items
/// alternate outward: right then left for odd lengths, left then right for
/// even lengths so that the first two fill the two middle slots.
#[must_use]
pub fn center_outward_slots(len: usize) -> Vec<usize> {
    let center = len / 2;
    (0..len)
        .map(|k| {
            if len % 2 == 1 {
                let step = (k + 1) / 2;
                if k == 0 {
                    center
                } else if k % 2 == 1 {
                    center + step
                } else {
                    center - step
                }
            } else {
                let step = k / 2;
                if k % 2 == 0 {
                    center + step
                } else {
                    center - 1 - step
                }
            }
        })
        .collect()
}

/// Reorders a row's items from input order into center-outward visual order.
#[must_use]
pub fn arrange_center_outward<T: Clone>(items: &[T]) -> Vec<T> {
    let mut slots: Vec<Option<T>> = vec![None; items.len()];
    for (item, slot) in items.iter().zip(center_outward_slots(items.len())) {
        slots[slot] = Some(item.clone());
    }
    slots.into_iter().flatten().collect()
}

/// Leftward shift of a short row, given the previous row's length.
///
/// Equals the distance from the start of the previous row to its center gap.
#[must_use]
pub fn row_offset(previous_len: usize, spacing: f64) -> f64 {
    let half = (previous_len / 2) as f64;
    if previous_len % 2 == 0 {
        half * spacing
    } else {
        (half + 0.5) * spacing
    }
}

/// Lays out items in a honeycomb for the given viewport.
///
/// `viewport_width` is `None` before the client width is known; the layout then
/// falls back to plain centered rows with no tessellation offsets. Non-finite or
/// non-positive widths are treated the same way.
///
/// # Examples
///
/// ```
/// use siteblocks::services::honeycomb::layout_honeycomb;
///
/// let items: Vec<u32> = (0..5).collect();
/// let layout = layout_honeycomb(&items, 4, Some(1280.0));
/// assert_eq!(layout.row_lengths(), vec![4, 1]);
/// ```
pub fn layout_honeycomb<T: Clone>(
    items: &[T],
    max_items_per_row: usize,
    viewport_width: Option<f64>,
) -> HoneycombLayout<T> {
    let configured = max_items_per_row.max(1);

    let Some(viewport) = viewport_width.filter(|w| w.is_finite() && *w > 0.0) else {
        return fallback_layout(items, configured);
    };

    let breakpoint = Breakpoint::from_viewport(viewport);
    let dims = breakpoint.hex_dimensions();
    let spacing = dims.spacing();
    let max_items = responsive_max_items(configured, viewport);

    debug!(
        "Honeycomb: {} items, viewport {viewport}px ({breakpoint:?}), {max_items} per row",
        items.len()
    );

    let lengths = partition_rows(items.len(), max_items);
    let mut rows = Vec::with_capacity(lengths.len());
    let mut start = 0;

    for (index, len) in lengths.iter().copied().enumerate() {
        let offset_px = if index % 2 == 1 {
            row_offset(lengths[index - 1], spacing)
        } else {
            0.0
        };

        rows.push(HoneycombRow {
            items: arrange_center_outward(&items[start..start + len]),
            offset_px,
            top_px: index as f64 * dims.row_step(),
            width_px: len as f64 * spacing,
        });
        start += len;
    }

    let (min_left, max_right) = rows.iter().fold((0.0_f64, 0.0_f64), |(lo, hi), row| {
        let left = -row.offset_px;
        (lo.min(left), hi.max(left + row.width_px))
    });
    let content_width_px = if rows.is_empty() {
        0.0
    } else {
        max_right - min_left
    };
    let container_margin_px = ((viewport - content_width_px) / 2.0).max(0.0) - min_left;

    HoneycombLayout {
        content_height_px: content_height(rows.len(), &dims),
        rows,
        max_items_per_row: max_items,
        breakpoint: Some(breakpoint),
        tessellated: true,
        viewport_width_px: Some(viewport),
        container_margin_px: Some(container_margin_px),
        content_width_px,
    }
}

/// Viewport-independent layout used before the client width is known.
///
/// Rows are plain chunks of `max_items_per_row` in input order, unshifted,
/// centered by the renderer with auto margins. Sizes use desktop cells.
fn fallback_layout<T: Clone>(items: &[T], max_items_per_row: usize) -> HoneycombLayout<T> {
    let dims = Breakpoint::Desktop.hex_dimensions();
    let spacing = dims.spacing();

    let rows: Vec<HoneycombRow<T>> = items
        .chunks(max_items_per_row)
        .enumerate()
        .map(|(index, chunk)| HoneycombRow {
            items: chunk.to_vec(),
            offset_px: 0.0,
            top_px: index as f64 * (dims.height + 2.0 * dims.margin),
            width_px: chunk.len() as f64 * spacing,
        })
        .collect();

    let content_width_px = rows.iter().map(|row| row.width_px).fold(0.0, f64::max);
    let content_height_px = if rows.is_empty() {
        0.0
    } else {
        rows.len() as f64 * (dims.height + 2.0 * dims.margin)
    };

    HoneycombLayout {
        rows,
        max_items_per_row,
        breakpoint: None,
        tessellated: false,
        viewport_width_px: None,
        container_margin_px: None,
        content_width_px,
        content_height_px,
    }
}

fn content_height(row_count: usize, dims: &HexDimensions) -> f64 {
    if row_count == 0 {
        0.0
    } else {
        (row_count - 1) as f64 * dims.row_step() + dims.height + 2.0 * dims.margin
    }
}

/// Honeycomb that recomputes its layout on viewport changes.
///
/// Models the renderer's resize subscription: each [`resize`](Self::resize)
/// replaces the cached layout, so the last notification wins. Before the
/// first resize the unknown-viewport fallback is served.
#[derive(Debug, Clone)]
pub struct ResponsiveHoneycomb<T> {
    items: Vec<T>,
    max_items_per_row: usize,
    layout: HoneycombLayout<T>,
}

impl<T: Clone> ResponsiveHoneycomb<T> {
    /// Creates a honeycomb with the fallback layout.
    pub fn new(items: Vec<T>, max_items_per_row: usize) -> Self {
        let layout = layout_honeycomb(&items, max_items_per_row, None);
        Self {
            items,
            max_items_per_row,
            layout,
        }
    }

    /// Recomputes the layout for a new viewport width.
    pub fn resize(&mut self, viewport_width: f64) -> &HoneycombLayout<T> {
        if self.layout.viewport_width_px != Some(viewport_width) {
            self.layout = layout_honeycomb(&self.items, self.max_items_per_row, Some(viewport_width));
        }
        &self.layout
    }

    /// Current layout.
    #[must_use]
    pub fn layout(&self) -> &HoneycombLayout<T> {
        &self.layout
    }

    /// Items in input order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }
}
