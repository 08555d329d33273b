// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use image::{Rgb, RgbImage};

use crate::report::FloorplanReport;
use crate::validate::ValidationReport;

/// Fill colors assigned to macros by index, shared with the interactive
/// viewer so both renderings agree. Assignment is deterministic: macro i
/// gets `MACRO_PALETTE[i % 12]`, independent of any process state.
pub const MACRO_PALETTE: [[u8; 3]; 12] = [
    [141, 211, 199],
    [255, 255, 179],
    [190, 186, 218],
    [251, 128, 114],
    [128, 177, 211],
    [253, 180, 98],
    [179, 222, 105],
    [252, 205, 229],
    [217, 217, 217],
    [188, 128, 189],
    [204, 235, 197],
    [255, 237, 111],
];

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const MACRO_EDGE: Rgb<u8> = Rgb([0, 0, 0]);
const CHIP_OUTLINE: Rgb<u8> = Rgb([255, 0, 0]);
const VIOLATION_EDGE: Rgb<u8> = Rgb([255, 0, 0]);

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Pixel extent the larger chip dimension is scaled to.
    pub target_px: u32,
    /// Blank border around the chip outline.
    pub margin_px: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            target_px: 1024,
            margin_px: 32,
        }
    }
}

fn put(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && x < img.width() as i64 && y < img.height() as i64 {
        img.put_pixel(x as u32, y as u32, color);
    }
}

fn fill_rect(img: &mut RgbImage, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgb<u8>) {
    for y in y0..y1 {
        for x in x0..x1 {
            put(img, x, y, color);
        }
    }
}

/// Outline of the half-open region [x0, x1) x [y0, y1), grown outward by
/// `thickness` pixels.
fn stroke_rect(
    img: &mut RgbImage,
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    color: Rgb<u8>,
    thickness: i64,
) {
    for k in 0..thickness {
        let (sx0, sy0, sx1, sy1) = (x0 - k, y0 - k, x1 + k, y1 + k);
        for x in sx0..sx1 {
            put(img, x, sy0, color);
            put(img, x, sy1 - 1, color);
        }
        for y in sy0..sy1 {
            put(img, sx0, y, color);
            put(img, sx1 - 1, y, color);
        }
    }
}

/// Rasterize the floorplan: colored macro fills with black edges, red
/// edges on macros named in the validation findings, chip outline drawn
/// last in red. Y grows downward, matching the report's orientation.
///
/// Macros placed outside the chip are clipped at the canvas edge by the
/// guarded pixel writes.
pub fn render_image(
    report: &FloorplanReport,
    validation: &ValidationReport,
    options: &RenderOptions,
) -> RgbImage {
    let extent = report.chip_width.max(report.chip_height).max(1);
    let scale = options.target_px as f64 / extent as f64;
    let margin = options.margin_px as i64;

    let width = (report.chip_width as f64 * scale).round() as i64 + 2 * margin;
    let height = (report.chip_height as f64 * scale).round() as i64 + 2 * margin;
    let mut img = RgbImage::from_pixel(width.max(1) as u32, height.max(1) as u32, BACKGROUND);

    let map = |v: i64| margin + (v as f64 * scale).round() as i64;

    for (i, m) in report.macros.iter().enumerate() {
        let (x0, y0, x1, y1) = (map(m.x1), map(m.y1), map(m.x2), map(m.y2));
        let fill = MACRO_PALETTE[i % MACRO_PALETTE.len()];
        fill_rect(&mut img, x0, y0, x1, y1, Rgb(fill));
        if validation.is_violating(&m.name) {
            stroke_rect(&mut img, x0, y0, x1, y1, VIOLATION_EDGE, 2);
        } else {
            stroke_rect(&mut img, x0, y0, x1, y1, MACRO_EDGE, 1);
        }
    }

    stroke_rect(
        &mut img,
        map(0),
        map(0),
        map(report.chip_width),
        map(report.chip_height),
        CHIP_OUTLINE,
        2,
    );

    img
}

/// Render the floorplan and write it as a PNG.
pub fn render_png(
    report: &FloorplanReport,
    validation: &ValidationReport,
    file_path: &str,
    options: &RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let img = render_image(report, validation, options);
    img.save(file_path)?;
    println!("[PASS] Wrote floorplan image: {file_path}");
    Ok(())
}
