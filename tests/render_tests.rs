//! Test cases for the headless PNG renderer
//!
//! Tests cover:
//! - Canvas geometry derived from chip dimensions and render options
//! - Deterministic palette fills by macro index
//! - Violation highlighting and the chip outline
//! - PNG file output

use floorplan_viewer::render::{render_image, render_png, RenderOptions, MACRO_PALETTE};
use floorplan_viewer::report::{FloorplanReport, Macro};
use floorplan_viewer::validate::validate;
use image::Rgb;
use std::fs;

fn make_macro(name: &str, x1: i64, y1: i64, x2: i64, y2: i64) -> Macro {
    Macro {
        name: name.to_string(),
        x1,
        y1,
        x2,
        y2,
    }
}

fn make_report(macros: Vec<Macro>) -> FloorplanReport {
    FloorplanReport {
        final_cost: 100.0,
        total_wirelength: 500,
        chip_area: 10000,
        chip_width: 100,
        chip_height: 100,
        runtime_seconds: 0.5,
        macros,
    }
}

// 100x100 chip at target 200 -> scale 2.0, so report (x, y) maps to
// pixel (10 + 2x, 10 + 2y) with the 10 px margin.
fn options() -> RenderOptions {
    RenderOptions {
        target_px: 200,
        margin_px: 10,
    }
}

#[test]
fn test_canvas_dimensions() {
    let report = make_report(Vec::new());
    let validation = validate(&report);
    let img = render_image(&report, &validation, &options());

    assert_eq!(img.width(), 220);
    assert_eq!(img.height(), 220);
}

#[test]
fn test_macro_fill_uses_palette_by_index() {
    let report = make_report(vec![
        make_macro("A", 10, 10, 50, 50),
        make_macro("B", 60, 10, 90, 40),
    ]);
    let validation = validate(&report);
    let img = render_image(&report, &validation, &options());

    // Interior of A: first palette entry
    assert_eq!(*img.get_pixel(70, 70), Rgb(MACRO_PALETTE[0]));
    // Interior of B: second palette entry
    assert_eq!(*img.get_pixel(150, 40), Rgb(MACRO_PALETTE[1]));
    // Margin area stays background white
    assert_eq!(*img.get_pixel(5, 5), Rgb([255, 255, 255]));
}

#[test]
fn test_chip_outline_is_red() {
    let report = make_report(Vec::new());
    let validation = validate(&report);
    let img = render_image(&report, &validation, &options());

    // Chip corner (0, 0) maps to pixel (10, 10)
    assert_eq!(*img.get_pixel(10, 10), Rgb([255, 0, 0]));
    // Right edge of the chip at x = 100 -> pixel column 210
    assert_eq!(*img.get_pixel(210, 100), Rgb([255, 0, 0]));
}

#[test]
fn test_violating_macro_outlined_red() {
    // B exceeds the chip on the x axis and gets the violation stroke
    let report = make_report(vec![
        make_macro("A", 10, 10, 50, 50),
        make_macro("B", 60, 60, 120, 90),
    ]);
    let validation = validate(&report);
    assert_eq!(validation.out_of_bounds, vec!["B".to_string()]);

    let img = render_image(&report, &validation, &options());

    // Top edge of B at y = 60 -> pixel row 130, inside the canvas
    assert_eq!(*img.get_pixel(140, 130), Rgb([255, 0, 0]));
    // Interior of B keeps its palette fill
    assert_eq!(*img.get_pixel(140, 150), Rgb(MACRO_PALETTE[1]));
    // A is clean: interior filled from the palette, edge dark
    assert_eq!(*img.get_pixel(70, 70), Rgb(MACRO_PALETTE[0]));
    assert_eq!(*img.get_pixel(70, 30), Rgb([0, 0, 0]));
}

#[test]
fn test_out_of_chip_pixels_are_clipped() {
    // Far off-chip macro: guarded writes must not panic
    let report = make_report(vec![make_macro("FAR", 500, 500, 600, 600)]);
    let validation = validate(&report);
    let img = render_image(&report, &validation, &options());
    assert_eq!(img.width(), 220);
}

#[test]
fn test_render_png_writes_file() {
    let report = make_report(vec![make_macro("A", 10, 10, 50, 50)]);
    let validation = validate(&report);

    let temp_file = "/tmp/test_floorplan_render.png";
    render_png(&report, &validation, temp_file, &options()).unwrap();

    let metadata = fs::metadata(temp_file).unwrap();
    assert!(metadata.len() > 0);

    fs::remove_file(temp_file).unwrap();
}
