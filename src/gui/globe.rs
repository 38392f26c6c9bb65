// Map panel using the walkers crate: biography markers, hover/tap
// selection, and the one-time camera flight to the home location.
use eframe::egui;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;
use walkers::{HttpTiles, Map, MapMemory, Plugin, Position, Projector};

use crate::content::{self, LocationId};
use crate::gui::{ACCENT, TEXT};
use crate::state::{InputModality, OverlayEvent, ViewState};

const MARKER_RADIUS: f32 = 6.0;
const HIT_RADIUS: f32 = MARKER_RADIUS + 6.0;

pub const FLY_DURATION_SECS: f32 = 2.0;
const OVERVIEW_CENTER: (f64, f64) = (20.0, 0.0);
const OVERVIEW_ZOOM: f64 = 2.0;
const HOME_ZOOM: f64 = 6.0;

/// Pointer interaction with the marker layer, collected once per frame.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Marker under the pointer, if any.
    pub hovered: Option<LocationId>,
    /// A primary click landed on the map surface this frame.
    pub clicked: bool,
    /// Marker that absorbed the click, if any.
    pub clicked_marker: Option<LocationId>,
}

/// Turns per-frame pointer state into the marker event stream. Leave is
/// emitted before enter when the pointer moves directly between markers.
pub fn synthesize_events(prev_hover: Option<LocationId>, input: FrameInput) -> Vec<OverlayEvent> {
    let mut events = Vec::new();
    if prev_hover != input.hovered {
        if let Some(id) = prev_hover {
            events.push(OverlayEvent::PointerLeave(id));
        }
        if let Some(id) = input.hovered {
            events.push(OverlayEvent::PointerEnter(id));
        }
    }
    if input.clicked {
        match input.clicked_marker {
            Some(id) => events.push(OverlayEvent::Tap(id)),
            None => events.push(OverlayEvent::BackgroundTap),
        }
    }
    events
}

// --- Camera flight ---

fn ease_in_out(t: f32) -> f32 {
    0.5 - 0.5 * (t * std::f32::consts::PI).cos()
}

struct Flight {
    from: (f64, f64),
    to: (f64, f64),
    from_zoom: f64,
    to_zoom: f64,
    started: Instant,
}

impl Flight {
    fn to_home() -> Self {
        let home = content::home();
        Self {
            from: OVERVIEW_CENTER,
            to: (home.lat, home.lon),
            from_zoom: OVERVIEW_ZOOM,
            to_zoom: HOME_ZOOM,
            started: Instant::now(),
        }
    }

    /// Eased camera pose at raw progress `t` in [0, 1].
    fn sample(&self, t: f32) -> ((f64, f64), f64) {
        let k = ease_in_out(t.clamp(0.0, 1.0)) as f64;
        let lat = self.from.0 + (self.to.0 - self.from.0) * k;
        let lon = self.from.1 + (self.to.1 - self.from.1) * k;
        let zoom = self.from_zoom + (self.to_zoom - self.from_zoom) * k;
        ((lat, lon), zoom)
    }

    fn progress(&self) -> f32 {
        self.started.elapsed().as_secs_f32() / FLY_DURATION_SECS
    }
}

// --- Marker layer plugin ---

#[derive(Default)]
struct FrameOutput {
    input: FrameInput,
    /// Projected screen position per marker, for anchoring the info panel.
    screens: Vec<(LocationId, egui::Pos2)>,
    dragged: bool,
}

struct MarkerLayer {
    /// (position, id, active, hovered last frame)
    markers: Vec<(Position, LocationId, bool, bool)>,
    out: Rc<RefCell<FrameOutput>>,
}

impl Plugin for MarkerLayer {
    fn run(
        self: Box<Self>,
        ui: &mut egui::Ui,
        response: &egui::Response,
        projector: &Projector,
        _memory: &MapMemory,
    ) {
        let painter = ui.painter();
        let hover_pos = if response.hovered() {
            ui.input(|i| i.pointer.hover_pos())
        } else {
            None
        };
        // clicked() excludes drags, so panning never reads as a tap
        let click_pos = if response.clicked() {
            ui.input(|i| i.pointer.interact_pos())
        } else {
            None
        };

        let mut out = FrameOutput {
            input: FrameInput { clicked: click_pos.is_some(), ..Default::default() },
            dragged: response.dragged(),
            ..Default::default()
        };

        for (pos, id, is_active, was_hovered) in &self.markers {
            let screen_vec = projector.project(*pos);
            let screen_pos = egui::pos2(screen_vec.x, screen_vec.y);
            out.screens.push((*id, screen_pos));

            let (color, radius) = if *is_active {
                (ACCENT, MARKER_RADIUS + 2.0)
            } else if *was_hovered {
                (TEXT, MARKER_RADIUS + 1.0)
            } else {
                (egui::Color32::GRAY, MARKER_RADIUS)
            };

            painter.circle_filled(screen_pos, radius, color);
            painter.circle_stroke(
                screen_pos,
                radius,
                egui::Stroke::new(1.5, egui::Color32::WHITE),
            );

            if let Some(hp) = hover_pos
                && hp.distance(screen_pos) <= HIT_RADIUS
            {
                out.input.hovered = Some(*id);
            }
            if let Some(cp) = click_pos
                && cp.distance(screen_pos) <= HIT_RADIUS
            {
                out.input.clicked_marker = Some(*id);
            }
        }

        *self.out.borrow_mut() = out;
    }
}

// --- Panel state ---

pub struct GlobeView {
    map_memory: MapMemory,
    /// Tile provider (lazy initialized)
    tiles: Option<HttpTiles>,
    hovered: Option<LocationId>,
    flight: Option<Flight>,
    skip_fly: bool,
    last_screens: Vec<(LocationId, egui::Pos2)>,
}

impl GlobeView {
    pub fn new(skip_fly: bool) -> Self {
        Self {
            map_memory: MapMemory::default(),
            tiles: None,
            hovered: None,
            flight: None,
            skip_fly,
            last_screens: Vec::new(),
        }
    }

    fn ensure_tiles(&mut self, ctx: &egui::Context) {
        if self.tiles.is_none() {
            let tiles = HttpTiles::new(walkers::sources::OpenStreetMap, ctx.clone());
            self.tiles = Some(tiles);
        }
    }

    /// Screen position of a marker as of the last rendered frame.
    pub fn screen_pos(&self, id: LocationId) -> Option<egui::Pos2> {
        self.last_screens.iter().find(|(m, _)| *m == id).map(|(_, p)| *p)
    }

    /// Renders the map for one frame and feeds the resulting marker
    /// events into `state` under the given modality.
    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut ViewState, modality: InputModality) {
        self.ensure_tiles(ui.ctx());

        // First layout of this panel is the readiness signal; the guard
        // makes re-renders and resizes no-ops.
        if ui.max_rect().height() > 0.0 && state.fly_once() && !self.skip_fly {
            self.flight = Some(Flight::to_home());
        }

        if let Some(flight) = &self.flight {
            let t = flight.progress();
            let ((lat, lon), zoom) = flight.sample(t);
            self.map_memory.center_at(walkers::lat_lon(lat, lon));
            if let Err(e) = self.map_memory.set_zoom(zoom) {
                eprintln!("Failed to set zoom during flight: {:?}", e);
            }
            if t >= 1.0 {
                self.flight = None;
            } else {
                ui.ctx().request_repaint();
            }
        }

        let home = content::home();
        let my_position = walkers::lat_lon(home.lat, home.lon);

        let markers: Vec<_> = content::locations()
            .iter()
            .map(|rec| {
                (
                    rec.position(),
                    rec.id,
                    state.active_location == Some(rec.id),
                    self.hovered == Some(rec.id),
                )
            })
            .collect();

        let out = Rc::new(RefCell::new(FrameOutput::default()));
        if let Some(ref mut tiles) = self.tiles {
            let layer = MarkerLayer { markers, out: out.clone() };
            let map =
                Map::new(Some(tiles), &mut self.map_memory, my_position).with_plugin(layer);
            ui.add(map);
        }

        let frame = out.take();

        // A pan gesture interrupts the flight; it is never reissued.
        if frame.dragged {
            self.flight = None;
        }

        for event in synthesize_events(self.hovered, frame.input) {
            state.apply(event, modality);
        }
        self.hovered = frame.input.hovered;
        self.last_screens = frame.screens;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::OverlayEvent::*;

    fn input(
        hovered: Option<LocationId>,
        clicked: bool,
        clicked_marker: Option<LocationId>,
    ) -> FrameInput {
        FrameInput { hovered, clicked, clicked_marker }
    }

    #[test]
    fn test_synthesize_no_change_no_events() {
        assert!(synthesize_events(None, input(None, false, None)).is_empty());
        assert!(synthesize_events(Some(2), input(Some(2), false, None)).is_empty());
    }

    #[test]
    fn test_synthesize_enter_and_leave() {
        assert_eq!(
            synthesize_events(None, input(Some(3), false, None)),
            vec![PointerEnter(3)]
        );
        assert_eq!(
            synthesize_events(Some(3), input(None, false, None)),
            vec![PointerLeave(3)]
        );
    }

    #[test]
    fn test_synthesize_marker_to_marker_orders_leave_first() {
        assert_eq!(
            synthesize_events(Some(1), input(Some(2), false, None)),
            vec![PointerLeave(1), PointerEnter(2)]
        );
    }

    #[test]
    fn test_synthesize_click_on_marker_is_tap() {
        assert_eq!(
            synthesize_events(Some(4), input(Some(4), true, Some(4))),
            vec![Tap(4)]
        );
    }

    #[test]
    fn test_synthesize_click_on_background() {
        assert_eq!(
            synthesize_events(None, input(None, true, None)),
            vec![BackgroundTap]
        );
    }

    #[test]
    fn test_ease_endpoints_and_monotonicity() {
        assert!(ease_in_out(0.0).abs() < 1e-6);
        assert!((ease_in_out(1.0) - 1.0).abs() < 1e-6);
        let mut prev = 0.0;
        for i in 1..=20 {
            let v = ease_in_out(i as f32 / 20.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_flight_sample_endpoints() {
        let f = Flight::to_home();
        let home = content::home();

        let ((lat, lon), zoom) = f.sample(0.0);
        assert_eq!((lat, lon), OVERVIEW_CENTER);
        assert_eq!(zoom, OVERVIEW_ZOOM);

        let ((lat, lon), zoom) = f.sample(1.0);
        assert!((lat - home.lat).abs() < 1e-9);
        assert!((lon - home.lon).abs() < 1e-9);
        assert!((zoom - HOME_ZOOM).abs() < 1e-9);

        // Out-of-range progress clamps to the endpoints.
        assert_eq!(f.sample(2.5), f.sample(1.0));
    }
}
