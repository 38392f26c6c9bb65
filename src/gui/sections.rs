// Static page sections: hero banner, project cards, skills radar.
use eframe::egui;
use std::time::Instant;

use crate::content::{HERO_NAME, HERO_STATS, HERO_TAGLINE, PROJECTS, SKILLS};
use crate::gui::{ACCENT, BG_CARD, BORDER, TEXT, TEXT_DIM};

const COUNT_UP_SECS: f32 = 1.5;

/// Eased count-up value after `elapsed` seconds of a `duration` ramp.
fn count_up(target: f32, elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return target;
    }
    let t = (elapsed / duration).clamp(0.0, 1.0);
    let k = 1.0 - (1.0 - t).powi(3);
    target * k
}

/// Hero banner. Returns true when the "view my work" button is clicked.
pub fn hero(ui: &mut egui::Ui, started: Instant, portrait: Option<&str>) -> bool {
    let mut view_work = false;
    let elapsed = started.elapsed().as_secs_f32();

    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        if let Some(path) = portrait {
            ui.add(
                egui::Image::from_uri(format!("file://{}", path)).max_height(160.0),
            );
            ui.add_space(12.0);
        }

        ui.label(egui::RichText::new(HERO_NAME).size(40.0).strong().color(TEXT));
        ui.add_space(6.0);
        ui.label(egui::RichText::new(HERO_TAGLINE).size(18.0).color(TEXT_DIM));

        ui.add_space(28.0);
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 32.0;
            // center the row by padding; wrapped rows just flow on narrow windows
            let row_width = HERO_STATS.len() as f32 * 140.0;
            let pad = ((ui.available_width() - row_width) / 2.0).max(0.0);
            ui.add_space(pad);
            for stat in HERO_STATS {
                ui.vertical(|ui| {
                    let shown = count_up(stat.value, elapsed, COUNT_UP_SECS);
                    ui.label(
                        egui::RichText::new(format!("{:.0}{}", shown, stat.suffix))
                            .size(26.0)
                            .strong()
                            .color(ACCENT),
                    );
                    ui.label(egui::RichText::new(stat.label).size(12.0).color(TEXT_DIM));
                });
            }
        });
        if elapsed < COUNT_UP_SECS {
            ui.ctx().request_repaint();
        }

        ui.add_space(28.0);
        let button = egui::Button::new(
            egui::RichText::new("View my work ⬇").color(egui::Color32::BLACK),
        )
        .fill(ACCENT);
        if ui.add(button).clicked() {
            view_work = true;
        }
    });
    ui.add_space(48.0);

    view_work
}

/// Project card grid. Returns the heading response for scroll targeting.
pub fn projects(ui: &mut egui::Ui) -> egui::Response {
    let heading = ui
        .vertical_centered(|ui| {
            ui.label(egui::RichText::new("Projects").size(26.0).strong().color(TEXT))
        })
        .response;
    ui.add_space(16.0);

    ui.columns(PROJECTS.len(), |cols| {
        for (col, project) in cols.iter_mut().zip(PROJECTS) {
            egui::Frame::new()
                .fill(BG_CARD)
                .stroke(egui::Stroke::new(1.0, BORDER))
                .corner_radius(8.0)
                .inner_margin(egui::Margin::same(14))
                .show(col, |ui| {
                    ui.label(
                        egui::RichText::new(project.title).size(17.0).strong().color(TEXT),
                    );
                    ui.add_space(4.0);
                    ui.label(egui::RichText::new(project.desc).size(13.0).color(TEXT_DIM));
                    ui.add_space(10.0);
                    // KPI chip
                    egui::Frame::new()
                        .fill(ACCENT.gamma_multiply(0.2))
                        .corner_radius(4.0)
                        .inner_margin(egui::Margin::symmetric(6, 2))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(project.kpi).size(11.0).color(ACCENT),
                            );
                        });
                });
        }
    });
    ui.add_space(48.0);

    heading
}

fn radar_point(center: egui::Pos2, radius: f32, i: usize, n: usize, frac: f32) -> egui::Pos2 {
    let angle = -std::f32::consts::FRAC_PI_2 + i as f32 * std::f32::consts::TAU / n as f32;
    center + egui::vec2(angle.cos(), angle.sin()) * (radius * frac)
}

/// Skills radar chart with the evidence legend below it.
pub fn skills(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("Skills Snapshot").size(26.0).strong().color(TEXT));
    });
    ui.add_space(8.0);

    let n = SKILLS.len();
    let size = egui::vec2(ui.available_width(), 340.0);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = rect.height() * 0.38;

    // Polar grid: one ring per proficiency step
    let grid_stroke = egui::Stroke::new(1.0, BORDER);
    for ring in 1..=5 {
        let frac = ring as f32 / 5.0;
        let points: Vec<egui::Pos2> =
            (0..n).map(|i| radar_point(center, radius, i, n, frac)).collect();
        painter.add(egui::Shape::closed_line(points, grid_stroke));
    }

    // Spokes and axis labels
    for (i, skill) in SKILLS.iter().enumerate() {
        let tip = radar_point(center, radius, i, n, 1.0);
        painter.line_segment([center, tip], grid_stroke);

        let label_pos = radar_point(center, radius + 22.0, i, n, 1.0);
        painter.text(
            label_pos,
            egui::Align2::CENTER_CENTER,
            skill.name,
            egui::FontId::proportional(12.0),
            TEXT,
        );
    }

    // Proficiency polygon: a triangle fan from the center fills any
    // star-shaped outline correctly
    let outline: Vec<egui::Pos2> = SKILLS
        .iter()
        .enumerate()
        .map(|(i, s)| radar_point(center, radius, i, n, s.level / 5.0))
        .collect();
    let fill = ACCENT.gamma_multiply(0.35);
    for i in 0..n {
        let a = outline[i];
        let b = outline[(i + 1) % n];
        painter.add(egui::Shape::convex_polygon(
            vec![center, a, b],
            fill,
            egui::Stroke::NONE,
        ));
    }
    painter.add(egui::Shape::closed_line(outline, egui::Stroke::new(1.5, ACCENT)));

    // Legend
    ui.add_space(12.0);
    ui.columns(2, |cols| {
        for (i, skill) in SKILLS.iter().enumerate() {
            let col = &mut cols[i % 2];
            col.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("{}:", skill.name)).strong().color(TEXT),
                );
                ui.label(egui::RichText::new(skill.evidence).color(TEXT_DIM));
            });
        }
    });
    ui.add_space(48.0);
}

pub fn footer(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        let hash = env!("APP_GIT_HASH");
        let short = if hash.len() >= 8 { &hash[..8] } else { hash };
        ui.label(
            egui::RichText::new(format!(
                "{} {} ({})",
                crate::gui::APP_TITLE,
                env!("CARGO_PKG_VERSION"),
                short
            ))
            .size(11.0)
            .color(TEXT_DIM),
        );
    });
    ui.add_space(12.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_up_ramp() {
        assert_eq!(count_up(100.0, 0.0, 1.5), 0.0);
        assert_eq!(count_up(100.0, 1.5, 1.5), 100.0);
        // Overshoot clamps at the target
        assert_eq!(count_up(100.0, 10.0, 1.5), 100.0);
        // Ease-out: past half time, past half value
        assert!(count_up(100.0, 0.75, 1.5) > 50.0);
        // Degenerate duration snaps to target
        assert_eq!(count_up(42.0, 0.0, 0.0), 42.0);
    }

    #[test]
    fn test_radar_point_geometry() {
        let center = egui::pos2(100.0, 100.0);

        // First axis points straight up
        let top = radar_point(center, 50.0, 0, 6, 1.0);
        assert!((top.x - 100.0).abs() < 1e-3);
        assert!((top.y - 50.0).abs() < 1e-3);

        // Zero fraction collapses to the center
        let origin = radar_point(center, 50.0, 3, 6, 0.0);
        assert!((origin - center).length() < 1e-3);

        // All full-fraction points sit on the circle
        for i in 0..6 {
            let p = radar_point(center, 50.0, i, 6, 1.0);
            assert!(((p - center).length() - 50.0).abs() < 1e-3);
        }
    }
}
