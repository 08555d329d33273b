// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use csv::Writer;
use serde::Serialize;
use std::fs::File;

use crate::report::{FloorplanReport, Macro};

#[derive(Debug, Serialize)]
pub struct MacroCsvRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "X1")]
    pub x1: i64,
    #[serde(rename = "Y1")]
    pub y1: i64,
    #[serde(rename = "X2")]
    pub x2: i64,
    #[serde(rename = "Y2")]
    pub y2: i64,
    #[serde(rename = "Width")]
    pub width: i64,
    #[serde(rename = "Height")]
    pub height: i64,
    #[serde(rename = "Area")]
    pub area: i64,
}

/// Convert a placed macro to a MacroCsvRecord
fn macro_to_csv_record(macro_def: &Macro) -> MacroCsvRecord {
    MacroCsvRecord {
        name: macro_def.name.clone(),
        x1: macro_def.x1,
        y1: macro_def.y1,
        x2: macro_def.x2,
        y2: macro_def.y2,
        width: macro_def.width(),
        height: macro_def.height(),
        area: macro_def.area(),
    }
}

/// Export the macro table of a report to a CSV file
pub fn export_report_to_csv(
    report: &FloorplanReport,
    file_path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(file_path)?;
    let mut writer = Writer::from_writer(file);

    for macro_def in &report.macros {
        let record = macro_to_csv_record(macro_def);
        writer.serialize(record)?;
    }

    writer.flush()?;
    Ok(())
}
