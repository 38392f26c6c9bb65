use eframe::egui;

pub mod app;
mod globe;
mod info_panel;
mod sections;

pub use app::GuiApp;

pub const APP_TITLE: &str = "geovita";

// Palette (slate + amber)
pub(crate) const BG_TOP: egui::Color32 = egui::Color32::from_rgb(15, 23, 42);
pub(crate) const BG_CARD: egui::Color32 = egui::Color32::from_rgb(51, 65, 85);
pub(crate) const BORDER: egui::Color32 = egui::Color32::from_rgb(71, 85, 105);
pub(crate) const TEXT: egui::Color32 = egui::Color32::from_rgb(226, 232, 240);
pub(crate) const TEXT_DIM: egui::Color32 = egui::Color32::from_rgb(148, 163, 184);
pub(crate) const ACCENT: egui::Color32 = egui::Color32::from_rgb(250, 204, 21);
