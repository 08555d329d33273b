// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::fs;
use std::path::Path;

use super::{parser::parse_report, FloorplanReport};

pub struct ReportReader;

impl ReportReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<FloorplanReport, Box<dyn std::error::Error>> {
        let path_str = path.as_ref().display().to_string();
        println!("[LOAD] Loading floorplan report: {path_str}");

        let content = fs::read_to_string(path)?;
        println!("[FILE] Report size: {} bytes", content.len());

        match parse_report(&content) {
            Ok(report) => {
                println!("[PASS] Report parsed successfully!");
                println!(
                    "[INFO] Chip {}x{}, {} macros, cost {:.2}, wirelength {}, runtime {:.2}s",
                    report.chip_width,
                    report.chip_height,
                    report.macros.len(),
                    report.final_cost,
                    report.total_wirelength,
                    report.runtime_seconds
                );
                Ok(report)
            }
            Err(e) => {
                println!("[FAIL] Failed to parse report: {e}");
                Err(Box::new(e))
            }
        }
    }
}

impl Default for ReportReader {
    fn default() -> Self {
        Self::new()
    }
}
