//! Position of an event bar inside the rendered month grid.
//!
//! Vertical and horizontal placement is a percentage of the grid plus
//! a pixel offset, the same shape as a CSS `calc(x% + ypx)` value.
use serde::Serialize;

use super::layout::EventLayout;

pub const DEFAULT_CELL_HEIGHT: f64 = 128.0;
const DATE_AREA_HEIGHT: f64 = 32.0;
const CELL_BOTTOM_PADDING: f64 = 8.0;
const BAR_HEIGHT: f64 = 12.0;
const TRACK_SPACING: f64 = 14.0;
const HORIZONTAL_INSET: f64 = 4.0;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarGeometry {
    pub top_percent: f64,
    pub top_px: f64,
    pub left_percent: f64,
    pub left_px: f64,
    pub width_percent: f64,
    pub width_px: f64,
    pub height_px: f64,
}

impl BarGeometry {
    pub fn for_layout(layout: &EventLayout, week_count: usize, cell_height: f64) -> Self {
        let available_height = cell_height - DATE_AREA_HEIGHT - CELL_BOTTOM_PADDING;
        // Bars that would overflow the cell are pinned to its bottom edge
        let max_top = DATE_AREA_HEIGHT + (available_height - BAR_HEIGHT);
        let top_px = (DATE_AREA_HEIGHT + layout.track as f64 * TRACK_SPACING).min(max_top);

        let top_percent = if week_count == 0 {
            0.0
        } else {
            layout.start_week as f64 * 100.0 / week_count as f64
        };

        Self {
            top_percent,
            top_px,
            left_percent: layout.start_day as f64 * 100.0 / 7.0,
            left_px: HORIZONTAL_INSET,
            width_percent: layout.duration as f64 * 100.0 / 7.0,
            width_px: -2.0 * HORIZONTAL_INSET,
            height_px: BAR_HEIGHT,
        }
    }

    /// CSS `top`, `left` and `width` values.
    pub fn css(&self) -> (String, String, String) {
        let calc = |percent: f64, px: f64| {
            if px < 0.0 {
                format!("calc({:.4}% - {}px)", percent, -px)
            } else {
                format!("calc({:.4}% + {}px)", percent, px)
            }
        };
        (
            calc(self.top_percent, self.top_px),
            calc(self.left_percent, self.left_px),
            calc(self.width_percent, self.width_px),
        )
    }
}
