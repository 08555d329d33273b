//! Floorplan Report Viewer Library
//!
//! This library parses floorplan result reports produced by a macro placer,
//! validates the placement geometry (macro overlaps, chip-boundary
//! containment), and renders the floorplan either to a PNG image or in an
//! interactive viewer.

pub mod export;
pub mod gui;
pub mod render;
pub mod report;
pub mod validate;

// Re-export commonly used types
pub use report::{parser::ParseError, FloorplanReport, Macro};
pub use validate::ValidationReport;
