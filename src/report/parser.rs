// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use log::debug;
use nom::{
    character::complete::{i64 as parse_i64, space0, space1},
    combinator::all_consuming,
    number::complete::double,
    sequence::{delimited, separated_pair},
    IResult, Parser,
};
use thiserror::Error;

use super::{FloorplanReport, Macro};

/// Structural parse failure. The header section is strict: any of these
/// aborts the parse with no partial report. Macro lines with the wrong
/// token count are skipped, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("report truncated: expected 5 header lines, found {found}")]
    TruncatedHeader { found: usize },
    #[error("line {line}: invalid {field}: {value:?}")]
    InvalidHeaderField {
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("line {line}: macro {name:?} has non-integer coordinate {value:?}")]
    InvalidMacroCoordinate {
        line: usize,
        name: String,
        value: String,
    },
}

fn invalid_field(line: &str, line_no: usize, field: &'static str) -> ParseError {
    ParseError::InvalidHeaderField {
        line: line_no,
        field,
        value: line.to_string(),
    }
}

fn header_f64(line: &str, line_no: usize, field: &'static str) -> Result<f64, ParseError> {
    let parsed: IResult<&str, f64> = all_consuming(delimited(space0, double, space0)).parse(line);
    match parsed {
        Ok((_, value)) => Ok(value),
        Err(_) => Err(invalid_field(line, line_no, field)),
    }
}

fn header_i64(line: &str, line_no: usize, field: &'static str) -> Result<i64, ParseError> {
    let parsed: IResult<&str, i64> =
        all_consuming(delimited(space0, parse_i64, space0)).parse(line);
    match parsed {
        Ok((_, value)) => Ok(value),
        Err(_) => Err(invalid_field(line, line_no, field)),
    }
}

fn header_dimensions(line: &str, line_no: usize) -> Result<(i64, i64), ParseError> {
    let parsed: IResult<&str, (i64, i64)> = all_consuming(delimited(
        space0,
        separated_pair(parse_i64, space1, parse_i64),
        space0,
    ))
    .parse(line);
    match parsed {
        Ok((_, dims)) => Ok(dims),
        Err(_) => Err(invalid_field(line, line_no, "chip dimensions")),
    }
}

/// Parse a floorplan report.
///
/// Fixed line-oriented layout: five header lines (final cost, total
/// wirelength, chip area, chip width/height, runtime seconds) followed by
/// zero or more macro records `name x1 y1 x2 y2`. Trailing lines that do
/// not split into exactly five tokens are skipped so blank lines and
/// annotations after the macro table never break a load.
pub fn parse_report(input: &str) -> Result<FloorplanReport, ParseError> {
    let lines: Vec<&str> = input.lines().map(str::trim).collect();
    if lines.len() < 5 {
        return Err(ParseError::TruncatedHeader { found: lines.len() });
    }

    let final_cost = header_f64(lines[0], 1, "final cost")?;
    let total_wirelength = header_i64(lines[1], 2, "total wirelength")?;
    let chip_area = header_i64(lines[2], 3, "chip area")?;
    let (chip_width, chip_height) = header_dimensions(lines[3], 4)?;
    let runtime_seconds = header_f64(lines[4], 5, "runtime")?;

    let mut macros = Vec::new();
    for (idx, line) in lines.iter().enumerate().skip(5) {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 5 {
            if !parts.is_empty() {
                debug!("skipping trailing line {}: {:?}", idx + 1, line);
            }
            continue;
        }

        let name = parts[0].to_string();
        let mut coords = [0i64; 4];
        for (slot, token) in coords.iter_mut().zip(&parts[1..]) {
            *slot = token
                .parse()
                .map_err(|_| ParseError::InvalidMacroCoordinate {
                    line: idx + 1,
                    name: name.clone(),
                    value: (*token).to_string(),
                })?;
        }

        macros.push(Macro {
            name,
            x1: coords[0],
            y1: coords[1],
            x2: coords[2],
            y2: coords[3],
        });
    }

    Ok(FloorplanReport {
        final_cost,
        total_wirelength,
        chip_area,
        chip_width,
        chip_height,
        runtime_seconds,
        macros,
    })
}
