// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use serde::Serialize;

use crate::report::{FloorplanReport, Macro};

/// True when the two rectangles share interior area.
///
/// Half-open-interval semantics: macros that only touch along an edge or
/// at a corner (`a.x2 == b.x1`) do not overlap. The inequality form below
/// is contractual; abutting macros in a legal floorplan must not be
/// flagged.
pub fn rects_overlap(a: &Macro, b: &Macro) -> bool {
    !(a.x2 <= b.x1 || a.x1 >= b.x2 || a.y2 <= b.y1 || a.y1 >= b.y2)
}

/// Pairwise overlap scan over all macro pairs.
///
/// Pairs come out in input order (first macro of the pair appears earlier
/// in the report), each unordered pair at most once, never reversed.
/// O(n^2), fine for the tens-to-hundreds of macros a floorplan carries.
pub fn find_overlaps(macros: &[Macro]) -> Vec<(String, String)> {
    let mut overlaps = Vec::new();
    for i in 0..macros.len() {
        for j in i + 1..macros.len() {
            if rects_overlap(&macros[i], &macros[j]) {
                overlaps.push((macros[i].name.clone(), macros[j].name.clone()));
            }
        }
    }
    overlaps
}

/// Names of macros whose upper-right corner exceeds the chip extent, in
/// input order.
///
/// Only the upper bound is checked: a macro extending past the origin
/// (negative x1/y1) is not flagged here. That asymmetry is part of the
/// contract; an integration that wants origin-side checking should add it
/// as a separate check rather than change this one.
pub fn find_out_of_bounds(macros: &[Macro], chip_width: i64, chip_height: i64) -> Vec<String> {
    macros
        .iter()
        .filter(|m| m.x2 > chip_width || m.y2 > chip_height)
        .map(|m| m.name.clone())
        .collect()
}

/// Both validator results bundled for renderers and the CLI.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub overlaps: Vec<(String, String)>,
    pub out_of_bounds: Vec<String>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.overlaps.is_empty() && self.out_of_bounds.is_empty()
    }

    /// Whether the named macro appears in any finding. Used by renderers
    /// to pick the highlight stroke.
    pub fn is_violating(&self, name: &str) -> bool {
        self.out_of_bounds.iter().any(|n| n == name)
            || self.overlaps.iter().any(|(a, b)| a == name || b == name)
    }
}

/// Run both geometry checks over a parsed report.
pub fn validate(report: &FloorplanReport) -> ValidationReport {
    ValidationReport {
        overlaps: find_overlaps(&report.macros),
        out_of_bounds: find_out_of_bounds(
            &report.macros,
            report.chip_width,
            report.chip_height,
        ),
    }
}
