use eframe::egui;

use crate::content::{self, HOME_LOCATION_ID, LocationId, LocationRecord};
use crate::gui::{TEXT, TEXT_DIM};
use crate::position;

/// Pure projection from active id to panel content. None and unknown
/// ids both render nothing.
pub fn lookup(active: Option<LocationId>) -> Option<&'static LocationRecord> {
    active.and_then(content::find_location)
}

/// Floating panel next to the active marker.
pub fn show(ctx: &egui::Context, active: Option<LocationId>, anchor: Option<egui::Pos2>) {
    let Some(record) = lookup(active) else { return };
    let Some(pos) = anchor else { return };

    egui::Area::new("location_info_panel".into())
        .fixed_pos(pos + egui::vec2(14.0, -10.0))
        .order(egui::Order::Tooltip)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_max_width(260.0);
                ui.label(egui::RichText::new(record.label).strong().color(TEXT));

                // Lines are shown verbatim, dividers included.
                for line in record.lines {
                    ui.label(egui::RichText::new(*line).size(12.0).color(TEXT_DIM));
                }

                if record.id != HOME_LOCATION_ID {
                    let home = content::home();
                    if let Some(s) = position::distance_bearing_string(
                        home.lat, home.lon, record.lat, record.lon,
                    ) {
                        ui.separator();
                        ui.label(
                            egui::RichText::new(format!("{} from home", s))
                                .size(11.0)
                                .color(TEXT_DIM),
                        );
                    }
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_none_is_empty() {
        assert!(lookup(None).is_none());
    }

    #[test]
    fn test_lookup_unknown_id_is_empty() {
        assert!(lookup(Some(999)).is_none());
    }

    #[test]
    fn test_lookup_renders_exact_record() {
        let rec = content::locations().first().unwrap();
        let found = lookup(Some(rec.id)).unwrap();
        assert_eq!(found.label, rec.label);
        // Order and dividers preserved as-is.
        assert_eq!(found.lines, rec.lines);
    }
}
