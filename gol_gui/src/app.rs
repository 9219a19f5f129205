// app.rs - egui presentation layer over the simulation core

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};

use gol_core::{DEFAULT_SIZE, PATTERNS, Simulation};

pub struct LifeApp {
    sim: Simulation,
    last_update: Instant,
    update_interval: Duration,
    live_color: Color32,
    dead_color: Color32,
    selected_pattern: usize,
    cell_px: f32,
}

impl Default for LifeApp {
    fn default() -> Self {
        Self {
            sim: Simulation::new(DEFAULT_SIZE).expect("default grid size is valid"),
            last_update: Instant::now(),
            update_interval: Duration::ZERO,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_gray(110),
            selected_pattern: 0,
            cell_px: 18.0,
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // One generation per frame while running, paced by the delay.
        // Stepping once per update pass keeps Stop responsive between
        // generations.
        if self.sim.is_running() && self.last_update.elapsed() >= self.update_interval {
            self.sim.step();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Game of Life");

            ui.horizontal(|ui| {
                if ui.button("▶ Start").clicked() {
                    self.sim.start();
                    self.last_update = Instant::now();
                }
                if ui.button("⏸ Stop").clicked() {
                    self.sim.stop();
                }
                if ui.button("⏹ Reset").clicked() {
                    self.sim.clear();
                }
                if ui.button("🎲 Random").clicked() {
                    self.sim.randomize(&mut rand::thread_rng());
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });
                if ui.button("Apply").clicked() {
                    self.sim.apply_pattern(&PATTERNS[self.selected_pattern]);
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Delay:");
                let mut delay_ms = self.update_interval.as_millis() as u64;
                if ui
                    .add(egui::Slider::new(&mut delay_ms, 0..=500).suffix(" ms"))
                    .changed()
                {
                    self.update_interval = Duration::from_millis(delay_ms);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click cells to toggle them while paused. Start runs until stasis or extinction.");

            ui.separator();

            // Draw the grid
            let size = self.sim.size();
            let spacing = 0.5;
            let start_pos = ui.cursor().min;
            let total_size = Vec2::splat((self.cell_px + spacing) * size as f32 - spacing);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::BLACK);

            for row in 0..size {
                for col in 0..size {
                    let x = start_pos.x + col as f32 * (self.cell_px + spacing);
                    let y = start_pos.y + row as f32 * (self.cell_px + spacing);
                    let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(self.cell_px));

                    let color = if self.sim.is_alive(row, col) {
                        self.live_color
                    } else {
                        self.dead_color
                    };
                    painter.rect_filled(rect, 1.0, color);
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));

                    // Manual edits only while paused; the core ignores
                    // them while running as well.
                    if !self.sim.is_running() && response.clicked() {
                        if let Some(pos) = response.interact_pointer_pos() {
                            if rect.contains(pos) {
                                self.sim.toggle(row, col);
                            }
                        }
                    }
                }
            }

            ui.separator();

            ui.horizontal(|ui| {
                ui.label(format!("Generations: {}", self.sim.generation()));
                ui.label(format!("Population: {}", self.sim.population()));
                ui.label(format!("Status: {}", self.sim.message()));
            });
        });

        // Keep animating while the simulation runs.
        if self.sim.is_running() {
            ctx.request_repaint();
        }
    }
}
