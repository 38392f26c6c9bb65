use crate::content::LocationId;

/// Below this viewport width the UI is treated as touch-only.
pub const TOUCH_WIDTH_MAX: f32 = 768.0;

/// How the current interaction mode is classified. Width is a proxy:
/// hybrid devices branch on it the same way, imprecise as that is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputModality {
    Pointer,
    Touch,
}

impl InputModality {
    /// Re-evaluated from the live viewport width on every event,
    /// never cached, so resizes change how later events are read.
    pub fn from_viewport_width(width: f32) -> Self {
        if width < TOUCH_WIDTH_MAX {
            InputModality::Touch
        } else {
            InputModality::Pointer
        }
    }
}

/// Marker-layer input, already attributed to a marker id by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    PointerEnter(LocationId),
    PointerLeave(LocationId),
    Tap(LocationId),
    /// Any click on the map surface that no marker absorbed.
    BackgroundTap,
}

/// The only mutable state: which marker's panel is open, and whether the
/// one-time camera flight has been issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    /// Stored raw; ids without a registry match render nothing downstream.
    pub active_location: Option<LocationId>,
    camera_flown: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self { active_location: None, camera_flown: false }
    }

    /// Applies one event under the modality in force at that moment.
    ///
    /// Pointer mode is hover-driven: enter selects, leave clears
    /// unconditionally, taps are ignored. Touch mode is tap-driven:
    /// tap toggles the same id off or switches to a new one, a
    /// background tap dismisses, hover events are ignored.
    pub fn apply(&mut self, event: OverlayEvent, modality: InputModality) {
        match (event, modality) {
            (OverlayEvent::PointerEnter(id), InputModality::Pointer) => {
                self.active_location = Some(id);
            }
            (OverlayEvent::PointerLeave(_), InputModality::Pointer) => {
                self.active_location = None;
            }
            (OverlayEvent::Tap(id), InputModality::Touch) => {
                if self.active_location == Some(id) {
                    self.active_location = None;
                } else {
                    self.active_location = Some(id);
                }
            }
            (OverlayEvent::BackgroundTap, InputModality::Touch) => {
                self.active_location = None;
            }
            // Taps while hover governs, hover events without a hover concept.
            (OverlayEvent::Tap(_), InputModality::Pointer)
            | (OverlayEvent::BackgroundTap, InputModality::Pointer)
            | (OverlayEvent::PointerEnter(_), InputModality::Touch)
            | (OverlayEvent::PointerLeave(_), InputModality::Touch) => {}
        }
    }

    /// One-shot guard for the camera flight. Returns true exactly once;
    /// the flag flips atomically with the claim and is never reset.
    pub fn fly_once(&mut self) -> bool {
        if self.camera_flown {
            return false;
        }
        self.camera_flown = true;
        true
    }

    pub fn camera_flown(&self) -> bool {
        self.camera_flown
    }
}
