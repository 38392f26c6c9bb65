use eframe::egui;
use std::time::Instant;

use crate::config::{self, GuiConfig};
use crate::gui::{APP_TITLE, BG_TOP, globe::GlobeView, info_panel, sections};
use crate::state::{InputModality, ViewState};

pub struct GuiApp {
    state: ViewState,
    globe: GlobeView,
    gui_config: GuiConfig,
    force_touch: bool,
    start_fullscreen: bool,
    started: Instant,
    initial_scale_applied: bool,
    scroll_to_projects: bool,
    // Track window size for saving on exit
    last_window_size: Option<(u32, u32)>,
}

impl GuiApp {
    pub fn new(
        gui_config: GuiConfig,
        force_touch: bool,
        skip_fly: bool,
        start_fullscreen: bool,
    ) -> Self {
        Self {
            state: ViewState::new(),
            globe: GlobeView::new(skip_fly),
            gui_config,
            force_touch,
            start_fullscreen,
            started: Instant::now(),
            initial_scale_applied: false,
            scroll_to_projects: false,
            last_window_size: None,
        }
    }

    /// Input-modality predicate, read fresh from the live viewport so
    /// resizes change how subsequent events are interpreted.
    fn modality(&self, ctx: &egui::Context) -> InputModality {
        if self.force_touch {
            return InputModality::Touch;
        }
        InputModality::from_viewport_width(ctx.screen_rect().width())
    }

    pub fn run(self) -> Result<(), eframe::Error> {
        let width = self.gui_config.width.unwrap_or(1100) as f32;
        let height = self.gui_config.height.unwrap_or(780) as f32;

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([width, height])
                .with_fullscreen(self.start_fullscreen)
                .with_title(APP_TITLE),
            ..Default::default()
        };

        eframe::run_native(
            APP_TITLE,
            options,
            Box::new(move |cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                Ok(Box::new(self))
            }),
        )
    }
}

impl eframe::App for GuiApp {
    // The runner still calls the deprecated `update` each frame; the app
    // body lives there, so the required `ui` hook has nothing left to do.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.initial_scale_applied {
            if let Some(scale) = self.gui_config.font_scale
                && scale > 0.0
            {
                ctx.set_pixels_per_point(scale);
            }
            self.initial_scale_applied = true;
        }

        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.last_window_size = Some((rect.width() as u32, rect.height() as u32));
        }

        if ctx.input(|i| i.key_pressed(egui::Key::F)) {
            let fullscreen = ctx.input(|i| i.viewport().fullscreen.unwrap_or(false));
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(!fullscreen));
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Q)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        let modality = self.modality(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(BG_TOP))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.set_width(ui.available_width());

                    if sections::hero(ui, self.started, self.gui_config.portrait.as_deref())
                    {
                        self.scroll_to_projects = true;
                    }

                    let projects_heading = sections::projects(ui);
                    if self.scroll_to_projects {
                        projects_heading.scroll_to_me(Some(egui::Align::TOP));
                        self.scroll_to_projects = false;
                    }

                    sections::skills(ui);

                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("Journey")
                                .size(26.0)
                                .strong()
                                .color(crate::gui::TEXT),
                        );
                    });
                    ui.add_space(16.0);

                    let map_height = 420.0_f32.min(ctx.screen_rect().height() * 0.8);
                    let map_size = egui::vec2(ui.available_width(), map_height);
                    ui.allocate_ui(map_size, |ui| {
                        ui.set_min_size(map_size);
                        self.globe.show(ui, &mut self.state, modality);
                    });

                    let anchor = self
                        .state
                        .active_location
                        .and_then(|id| self.globe.screen_pos(id));
                    info_panel::show(ctx, self.state.active_location, anchor);

                    ui.add_space(32.0);
                    sections::footer(ui);
                });
            });
    }

    fn on_exit(&mut self) {
        let mut gui_config = self.gui_config.clone();
        if let Some((w, h)) = self.last_window_size {
            gui_config.width = Some(w);
            gui_config.height = Some(h);
        }
        if let Err(e) = config::save_gui(&gui_config) {
            eprintln!("Error saving config: {}", e);
        }
    }
}
