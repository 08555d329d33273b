// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use eframe::egui;
use rfd::FileDialog;

use crate::export;
use crate::render::{self, RenderOptions, MACRO_PALETTE};
use crate::report::{reader::ReportReader, FloorplanReport};
use crate::validate::{self, ValidationReport};
use std::path::Path;

pub struct FloorplanViewer {
    report: Option<FloorplanReport>,
    validation: ValidationReport,
    report_path: Option<String>,
    zoom: f32,
    pan_x: f32,
    pan_y: f32,
    error_message: Option<String>,
    success_message: Option<String>,
    selected_macros: std::collections::HashSet<String>,
    show_names: bool,
    show_chip_outline: bool,
    highlight_violations: bool,
    fit_to_view_requested: bool,
    fit_to_view_delay_frames: u8, // Delay fit to view by a few frames for UI stability
}

impl Default for FloorplanViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl FloorplanViewer {
    pub fn new() -> Self {
        Self {
            report: None,
            validation: ValidationReport::default(),
            report_path: None,
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            error_message: None,
            success_message: None,
            selected_macros: std::collections::HashSet::new(),
            show_names: true,
            show_chip_outline: true,
            highlight_violations: true,
            fit_to_view_requested: false,
            fit_to_view_delay_frames: 0,
        }
    }

    /// Viewer preloaded with an already parsed and validated report, for
    /// the CLI path.
    pub fn with_report(
        report: FloorplanReport,
        validation: ValidationReport,
        path: Option<String>,
    ) -> Self {
        let mut viewer = Self::new();
        viewer.report = Some(report);
        viewer.validation = validation;
        viewer.report_path = path;
        viewer.fit_to_view_delay_frames = 2;
        viewer
    }

    fn load_report_file(&mut self, path: String) {
        match ReportReader::new().read(&path) {
            Ok(report) => {
                self.validation = validate::validate(&report);
                self.success_message = Some(format!(
                    "Loaded {} macros from report: {}",
                    report.macros.len(),
                    path
                ));
                self.report = Some(report);
                self.report_path = Some(path);
                self.selected_macros.clear();
                self.fit_to_view_delay_frames = 2;
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to load report: {e}"));
            }
        }
    }

    fn macro_color(&self, index: usize) -> egui::Color32 {
        let [r, g, b] = MACRO_PALETTE[index % MACRO_PALETTE.len()];
        egui::Color32::from_rgba_unmultiplied(r, g, b, 180)
    }

    fn render_text_with_outline(
        &self,
        painter: &egui::Painter,
        pos: egui::Pos2,
        anchor: egui::Align2,
        text: &str,
        font: egui::FontId,
        color: egui::Color32,
    ) {
        // Add black outline for white text
        if color == egui::Color32::WHITE {
            let outline_color = egui::Color32::BLACK;
            let outline_offset = 1.0;

            // Render outline in 8 directions
            let offsets = [
                (-outline_offset, -outline_offset),
                (0.0, -outline_offset),
                (outline_offset, -outline_offset),
                (-outline_offset, 0.0),
                (outline_offset, 0.0),
                (-outline_offset, outline_offset),
                (0.0, outline_offset),
                (outline_offset, outline_offset),
            ];

            for (dx, dy) in offsets {
                let outline_pos = egui::pos2(pos.x + dx, pos.y + dy);
                painter.text(outline_pos, anchor, text, font.clone(), outline_color);
            }
        }

        // Render the main text on top
        painter.text(pos, anchor, text, font, color);
    }

    /// Extent of the chip outline plus every displayed macro, in report
    /// coordinates. Out-of-bounds macros widen the box so fit-to-view
    /// never hides a violation off-screen.
    fn calculate_bounds(&self) -> Option<(f32, f32, f32, f32)> {
        let report = self.report.as_ref()?;

        let mut min_x = 0.0f32;
        let mut min_y = 0.0f32;
        let mut max_x = report.chip_width as f32;
        let mut max_y = report.chip_height as f32;

        for macro_def in &report.macros {
            if !self.selected_macros.is_empty() && !self.selected_macros.contains(&macro_def.name)
            {
                continue;
            }

            min_x = min_x.min(macro_def.x1 as f32);
            min_y = min_y.min(macro_def.y1 as f32);
            max_x = max_x.max(macro_def.x2 as f32);
            max_y = max_y.max(macro_def.y2 as f32);
        }

        if max_x > min_x && max_y > min_y {
            Some((min_x, min_y, max_x, max_y))
        } else {
            None
        }
    }

    fn fit_to_view(&mut self, available_size: egui::Vec2) {
        if let Some((min_x, min_y, max_x, max_y)) = self.calculate_bounds() {
            let content_width = max_x - min_x;
            let content_height = max_y - min_y;

            if content_width > 0.0 && content_height > 0.0 {
                // Use 90% of available space for content, 10% for margin
                let target_width = available_size.x * 0.9;
                let target_height = available_size.y * 0.9;

                let scale_x = target_width / content_width;
                let scale_y = target_height / content_height;

                // Use the smaller scale to ensure everything fits
                self.zoom = scale_x.min(scale_y).max(0.001);

                // Center the content in the available space
                let center_x = (min_x + max_x) * 0.5;
                let center_y = (min_y + max_y) * 0.5;
                self.pan_x = -center_x * self.zoom;
                self.pan_y = -center_y * self.zoom;
            }
        }
    }

    fn get_report_basename(&self) -> String {
        if let Some(report_path) = &self.report_path {
            if let Some(file_stem) = Path::new(report_path).file_stem() {
                if let Some(basename) = file_stem.to_str() {
                    return basename.to_string();
                }
            }
        }
        "floorplan".to_string() // fallback default
    }

    fn handle_export_csv(&mut self) {
        if let Some(report) = &self.report {
            let default_filename = format!("{}.csv", self.get_report_basename());
            if let Some(file_path) = FileDialog::new()
                .set_file_name(&default_filename)
                .add_filter("CSV files", &["csv"])
                .save_file()
            {
                match export::export_report_to_csv(report, &file_path.to_string_lossy()) {
                    Ok(()) => {
                        self.success_message = Some(format!(
                            "Successfully exported {} macros to CSV file: {}",
                            report.macros.len(),
                            file_path.display()
                        ));
                    }
                    Err(e) => {
                        self.error_message = Some(format!("Failed to export CSV: {e}"));
                    }
                }
            }
        }
    }

    fn handle_export_png(&mut self) {
        if let Some(report) = &self.report {
            let default_filename = format!("{}.png", self.get_report_basename());
            if let Some(file_path) = FileDialog::new()
                .set_file_name(&default_filename)
                .add_filter("PNG images", &["png"])
                .save_file()
            {
                match render::render_png(
                    report,
                    &self.validation,
                    &file_path.to_string_lossy(),
                    &RenderOptions::default(),
                ) {
                    Ok(()) => {
                        self.success_message =
                            Some(format!("Wrote floorplan image: {}", file_path.display()));
                    }
                    Err(e) => {
                        self.error_message = Some(format!("Failed to render image: {e}"));
                    }
                }
            }
        }
    }

    fn render_menu_bar(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open Report").clicked() {
                    if let Some(path) = FileDialog::new()
                        .add_filter("Floorplan reports", &["rpt", "txt"])
                        .pick_file()
                    {
                        self.load_report_file(path.to_string_lossy().to_string());
                    }
                    ui.close_menu();
                }

                ui.separator();

                if ui
                    .add_enabled(self.report.is_some(), egui::Button::new("Export CSV"))
                    .clicked()
                {
                    self.handle_export_csv();
                    ui.close_menu();
                }

                if ui
                    .add_enabled(self.report.is_some(), egui::Button::new("Export PNG"))
                    .clicked()
                {
                    self.handle_export_png();
                    ui.close_menu();
                }

                ui.separator();

                if ui.button("Close Report").clicked() {
                    self.report = None;
                    self.report_path = None;
                    self.validation = ValidationReport::default();
                    self.selected_macros.clear();
                    ui.close_menu();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                ui.checkbox(&mut self.show_names, "Show Macro Names");
                ui.checkbox(&mut self.show_chip_outline, "Show Chip Outline");
                ui.checkbox(&mut self.highlight_violations, "Highlight Violations");
            });
        });
    }

    fn render_summary(&self, ui: &mut egui::Ui, report: &FloorplanReport) {
        ui.label(format!("Final cost: {:.2}", report.final_cost));
        ui.label(format!("Wirelength: {}", report.total_wirelength));
        ui.label(format!(
            "Chip: {} x {}",
            report.chip_width, report.chip_height
        ));
        ui.label(format!("Chip area: {}", report.chip_area));
        ui.label(format!("Runtime: {:.2}s", report.runtime_seconds));
        ui.separator();
        ui.label(format!("Macros: {}", report.macros.len()));
        ui.label(format!("Macro area: {}", report.total_macro_area()));
        ui.label(format!(
            "Utilization: {:.1}%",
            report.utilization() * 100.0
        ));
    }

    fn render_validation(&self, ui: &mut egui::Ui) {
        if self.validation.is_clean() {
            ui.colored_label(
                egui::Color32::from_rgb(76, 175, 80),
                "No violations found",
            );
            return;
        }

        if !self.validation.overlaps.is_empty() {
            ui.colored_label(
                egui::Color32::from_rgb(244, 67, 54),
                format!("Overlapping macros: {}", self.validation.overlaps.len()),
            );
            for (a, b) in &self.validation.overlaps {
                ui.label(format!("  {a} overlaps {b}"));
            }
        }

        if !self.validation.out_of_bounds.is_empty() {
            ui.colored_label(
                egui::Color32::from_rgb(244, 67, 54),
                format!(
                    "Macros exceeding chip bounds: {}",
                    self.validation.out_of_bounds.len()
                ),
            );
            for name in &self.validation.out_of_bounds {
                ui.label(format!("  {name}"));
            }
        }
    }

    fn render_left_panel(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            ui.heading("Report");

            if let Some(path) = &self.report_path {
                ui.label(format!("File: {}", path));
            } else {
                ui.label("No report loaded");
            }

            ui.separator();

            ui.heading("Controls");

            // Zoom controls
            ui.horizontal(|ui| {
                ui.label("Zoom:");
                if ui.button("-").clicked() {
                    self.zoom = (self.zoom * 0.8).max(0.001);
                }
                ui.add(egui::Slider::new(&mut self.zoom, 0.001..=1000.0).logarithmic(true));
                if ui.button("+").clicked() {
                    self.zoom = (self.zoom * 1.25).min(1000.0);
                }
            });

            ui.horizontal(|ui| {
                if ui.button("Fit to View").clicked() {
                    self.fit_to_view_requested = true;
                }
                if ui.button("Reset View").clicked() {
                    self.zoom = 1.0;
                    self.pan_x = 0.0;
                    self.pan_y = 0.0;
                }
            });

            ui.separator();

            if let Some(report) = self.report.clone() {
                ui.heading("Summary");
                self.render_summary(ui, &report);

                ui.separator();

                ui.heading("Validation");
                self.render_validation(ui);

                ui.separator();

                ui.heading("Macros");
                ui.label("Select macros to display:");
                egui::ScrollArea::vertical()
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        for macro_def in &report.macros {
                            let mut is_selected = self.selected_macros.contains(&macro_def.name);
                            if ui.checkbox(&mut is_selected, &macro_def.name).clicked() {
                                if is_selected {
                                    self.selected_macros.insert(macro_def.name.clone());
                                } else {
                                    self.selected_macros.remove(&macro_def.name);
                                }
                            }

                            ui.collapsing(format!("Details: {}", &macro_def.name), |ui| {
                                ui.monospace(format!(
                                    "Corners: ({}, {}) -> ({}, {})",
                                    macro_def.x1, macro_def.y1, macro_def.x2, macro_def.y2
                                ));
                                ui.monospace(format!(
                                    "Size: {} x {}",
                                    macro_def.width(),
                                    macro_def.height()
                                ));
                                ui.monospace(format!("Area: {}", macro_def.area()));
                                if self.validation.is_violating(&macro_def.name) {
                                    ui.colored_label(
                                        egui::Color32::from_rgb(244, 67, 54),
                                        "Has violations",
                                    );
                                }
                            });
                        }
                    });
            }
        });
    }

    fn render_visualization(&mut self, ui: &mut egui::Ui) {
        // First record the remaining available space
        let available_size = ui.available_size();

        // Then allocate this entire space at once
        let (response, painter) = ui.allocate_painter(available_size, egui::Sense::drag());

        // Handle fit to view request with frame delay
        if self.fit_to_view_delay_frames > 0 {
            self.fit_to_view_delay_frames -= 1;
            if self.fit_to_view_delay_frames == 0 {
                self.fit_to_view_requested = true;
            }
            ui.ctx().request_repaint(); // Continue animation until delay is complete
        }

        if self.fit_to_view_requested {
            self.fit_to_view(available_size);
            self.fit_to_view_requested = false;
        }

        // Handle F key for fit to view
        if ui.input(|i| i.key_pressed(egui::Key::F)) {
            self.fit_to_view(available_size);
        }

        // Handle mouse interactions
        if response.dragged() {
            let delta = response.drag_delta();
            self.pan_x += delta.x;
            self.pan_y += delta.y;
        }

        // Handle mouse wheel zoom
        if let Some(hover_pos) = response.hover_pos() {
            let scroll_delta = ui.input(|i| i.raw_scroll_delta.y);
            if scroll_delta != 0.0 {
                let zoom_factor = if scroll_delta > 0.0 { 1.1 } else { 0.9 };
                let old_zoom = self.zoom;

                // Get drawing area center
                let rect = response.rect;
                let center = rect.center();

                // Convert mouse screen position to world coordinates before zoom
                let world_x = (hover_pos.x - center.x - self.pan_x) / old_zoom;
                let world_y = (hover_pos.y - center.y - self.pan_y) / old_zoom;

                // Update zoom
                self.zoom = (self.zoom * zoom_factor).clamp(0.001, 1000.0);

                // Adjust pan so that the world point under mouse stays at the same screen position
                self.pan_x = hover_pos.x - center.x - (world_x * self.zoom);
                self.pan_y = hover_pos.y - center.y - (world_y * self.zoom);
            }
        }

        let rect = response.rect;
        let center = rect.center();

        painter.rect_filled(rect, 0.0, egui::Color32::BLACK);

        // Store text to render on top
        let mut texts_to_render = Vec::new();

        if let Some(report) = &self.report {
            let to_screen = |x: i64, y: i64| {
                egui::pos2(
                    center.x + self.pan_x + (x as f32 * self.zoom),
                    center.y + self.pan_y + (y as f32 * self.zoom),
                )
            };

            for (i, macro_def) in report.macros.iter().enumerate() {
                // Only render selected macros (or all if none selected)
                if !self.selected_macros.is_empty()
                    && !self.selected_macros.contains(&macro_def.name)
                {
                    continue;
                }

                let macro_rect = egui::Rect::from_min_max(
                    to_screen(macro_def.x1, macro_def.y1),
                    to_screen(macro_def.x2, macro_def.y2),
                );

                painter.rect_filled(macro_rect, 0.0, self.macro_color(i));

                let violating =
                    self.highlight_violations && self.validation.is_violating(&macro_def.name);
                let stroke = if violating {
                    egui::Stroke::new(2.5, egui::Color32::from_rgb(255, 0, 0))
                } else {
                    egui::Stroke::new(1.0, egui::Color32::WHITE)
                };
                painter.rect_stroke(macro_rect, 0.0, stroke, egui::StrokeKind::Middle);

                if self.show_names {
                    texts_to_render.push((
                        macro_rect.center(),
                        macro_def.name.clone(),
                        egui::FontId::monospace(10.0),
                        egui::Color32::WHITE,
                    ));
                }
            }

            // Chip outline over the macros so boundary crossings stay visible
            if self.show_chip_outline {
                let chip_rect = egui::Rect::from_min_max(
                    to_screen(0, 0),
                    to_screen(report.chip_width, report.chip_height),
                );
                painter.rect_stroke(
                    chip_rect,
                    0.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(255, 60, 60)),
                    egui::StrokeKind::Middle,
                );
            }
        }

        // Render all text on top of everything with outline for white text
        for (pos, text, font, color) in texts_to_render {
            self.render_text_with_outline(
                &painter,
                pos,
                egui::Align2::CENTER_CENTER,
                &text,
                font,
                color,
            );
        }

        ui.ctx().request_repaint();
    }
}

impl eframe::App for FloorplanViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(error) = &self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.colored_label(egui::Color32::from_rgb(244, 67, 54), error);
                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.allocate_space(egui::Vec2::new(ui.available_width() / 2.0 - 25.0, 0.0));
                        if ui.button("OK").clicked() {
                            self.error_message = None;
                        }
                    });
                });
        }

        if let Some(success) = &self.success_message.clone() {
            egui::Window::new("Success")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.colored_label(egui::Color32::from_rgb(76, 175, 80), success);
                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.allocate_space(egui::Vec2::new(ui.available_width() / 2.0 - 25.0, 0.0));
                        if ui.button("OK").clicked() {
                            self.success_message = None;
                        }
                    });
                });
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.render_menu_bar(ui);
        });

        egui::SidePanel::left("left_panel")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| {
                self.render_left_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Floorplan Visualization");
            self.render_visualization(ui);
        });
    }
}
