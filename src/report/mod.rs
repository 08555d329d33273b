// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use serde::{Deserialize, Serialize};

/// A placed, axis-aligned rectangular block on the chip.
///
/// Corner coordinates are in the same integer grid units as the chip
/// dimensions. `x2 >= x1` and `y2 >= y1` are expected but not enforced;
/// degenerate rectangles pass through parsing untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macro {
    pub name: String,
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

impl Macro {
    pub fn width(&self) -> i64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i64 {
        self.y2 - self.y1
    }

    pub fn area(&self) -> i64 {
        self.width() * self.height()
    }
}

/// A complete floorplan result: the placer's summary metrics plus the
/// placed macros in file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorplanReport {
    pub final_cost: f64,
    pub total_wirelength: i64,
    pub chip_area: i64,
    pub chip_width: i64,
    pub chip_height: i64,
    pub runtime_seconds: f64,
    pub macros: Vec<Macro>,
}

impl FloorplanReport {
    /// Sum of macro areas, for the utilization statistic.
    pub fn total_macro_area(&self) -> i64 {
        self.macros.iter().map(|m| m.area()).sum()
    }

    /// Ratio of total macro area to chip area. 0.0 when the chip area is
    /// zero, so display code never divides by zero.
    pub fn utilization(&self) -> f64 {
        if self.chip_area == 0 {
            return 0.0;
        }
        self.total_macro_area() as f64 / self.chip_area as f64
    }
}

pub mod parser;
pub mod reader;
