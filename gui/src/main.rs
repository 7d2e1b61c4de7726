use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use eframe::egui;
use eframe::egui::{Button, ScrollArea, Ui};
use eframe::run_native;
use life_engine::{SimulationEngine, PATTERNS};
use log::info;

mod animation;
mod config;
mod controller;

use config::Config;
use controller::Controller;

const CONTROLS_HEIGHT: f32 = 140.0;
const WINDOW_MARGIN: f32 = 40.0;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_PATH));
    let config = Config::load(&path)?;
    info!(
        "starting with a {}x{} grid, stepping every {:?}",
        config.rows,
        config.cols,
        config.step_interval()
    );

    let engine = SimulationEngine::new(config.rows, config.cols).context("create engine")?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([
            config.cols as f32 * config.cell_width + WINDOW_MARGIN,
            config.rows as f32 * config.cell_height + CONTROLS_HEIGHT,
        ]),
        ..Default::default()
    };

    run_native(
        "Game of Life GUI",
        options,
        Box::new(move |cc| Ok(Box::new(GuiOfLife::new(cc, engine, &config)))),
    )
    .map_err(|err| anyhow::anyhow!("run gui: {err}"))
}

struct GuiOfLife {
    controller: Controller,
    cell_width: f32,
    cell_height: f32,
    selected_pattern: usize,
}

impl GuiOfLife {
    fn new(_cc: &eframe::CreationContext<'_>, engine: SimulationEngine, config: &Config) -> Self {
        Self {
            controller: Controller::new(engine, config.step_interval()),
            cell_width: config.cell_width,
            cell_height: config.cell_height,
            selected_pattern: 0,
        }
    }

    fn controls(&mut self, ui: &mut Ui, now: Instant) {
        // Seeding is locked while the animation runs; Stop always works.
        let running = self.controller.is_running();

        ui.horizontal(|ui| {
            if ui.add_enabled(!running, Button::new("Start")).clicked() {
                self.controller.start(now);
            }
            if ui.button("Stop").clicked() {
                self.controller.stop();
            }
            if ui.add_enabled(!running, Button::new("Randomize")).clicked() {
                self.controller.randomize(&mut rand::rng());
            }
        });

        ui.horizontal(|ui| {
            let selected = PATTERNS.get(self.selected_pattern).map_or("", |p| p.name);
            egui::ComboBox::from_label("Pattern")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    for (index, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, index, pattern.name);
                    }
                });
            if ui.add_enabled(!running, Button::new("Load")).clicked() {
                self.controller.load_pattern(self.selected_pattern);
            }
        });

        ui.label(format!(
            "Generation {}, {} alive",
            self.controller.generation(),
            self.controller.engine().living_cells().len()
        ));
    }

    fn create_grid(&mut self, ui: &mut Ui) {
        let engine = self.controller.engine();
        let cell_size = egui::vec2(self.cell_width, self.cell_height);

        // One painter for the whole grid, so a click can be mapped back to a cell
        let (response, painter) = ui.allocate_painter(
            egui::vec2(
                self.cell_width * engine.cols() as f32,
                self.cell_height * engine.rows() as f32,
            ),
            egui::Sense::click(),
        );
        let origin = response.rect.min;

        for (row_index, row) in engine.state().iter().enumerate() {
            for (col_index, cell) in row.iter().enumerate() {
                // Top-left corner of the cell
                let pos = origin
                    + egui::vec2(
                        col_index as f32 * self.cell_width,
                        row_index as f32 * self.cell_height,
                    );

                let color = if cell.is_alive() {
                    egui::Color32::WHITE
                } else {
                    egui::Color32::DARK_GRAY
                };

                // Shrink by a point to leave a gap between cells
                painter.rect_filled(
                    egui::Rect::from_min_size(pos, cell_size).shrink(1.0),
                    self.cell_width.min(self.cell_height) / 4f32,
                    color,
                );
            }
        }

        if response.clicked() {
            if let Some(pointer) = response.interact_pointer_pos() {
                let offset = pointer - origin;
                let row = (offset.y / self.cell_height) as usize;
                let col = (offset.x / self.cell_width) as usize;
                self.controller.toggle_cell((row, col));
            }
        }
    }
}

impl eframe::App for GuiOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        // Wake up again when the next generation is due
        if let Some(wait) = self.controller.tick(now) {
            ctx.request_repaint_after(wait);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::both().show(ui, |ui| {
                ui.heading("Game of Life");
                self.controls(ui, now);
                self.create_grid(ui);
            });
        });
    }
}
