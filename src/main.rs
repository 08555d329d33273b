// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use eframe::egui;
use std::env;
use std::process;

use floorplan_viewer::gui::FloorplanViewer;
use floorplan_viewer::render::{self, RenderOptions};
use floorplan_viewer::report::reader::ReportReader;
use floorplan_viewer::validate;

fn print_usage() {
    eprintln!("Usage: floorplan-viewer <report.rpt> [output_image.png]");
    eprintln!();
    eprintln!("With an output image path the floorplan is rendered headlessly;");
    eprintln!("without one an interactive viewer opens on the report.");
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        process::exit(2);
    }

    let report_path = args[1].clone();
    let output_path = args.get(2).cloned();

    let report = match ReportReader::new().read(&report_path) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error reading report: {e}");
            process::exit(1);
        }
    };

    let validation = validate::validate(&report);
    if validation.overlaps.is_empty() {
        println!("[PASS] No overlapping macros detected");
    } else {
        println!("[WARN] Overlapping macros detected:");
        for (a, b) in &validation.overlaps {
            println!("[WARN]   {a} overlaps with {b}");
        }
    }
    if validation.out_of_bounds.is_empty() {
        println!("[PASS] All macros fit within chip boundaries");
    } else {
        println!("[WARN] Macros exceeding chip boundaries:");
        for name in &validation.out_of_bounds {
            println!("[WARN]   {name}");
        }
    }

    if let Some(output_path) = output_path {
        if let Err(e) =
            render::render_png(&report, &validation, &output_path, &RenderOptions::default())
        {
            eprintln!("Error writing image: {e}");
            process::exit(1);
        }
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Floorplan Viewer",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(FloorplanViewer::with_report(
                report,
                validation,
                Some(report_path),
            )))
        }),
    )
}
