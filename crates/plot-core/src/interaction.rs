// File: crates/plot-core/src/interaction.rs
// Summary: Pointer/wheel state machine (Idle <-> Dragging) that pans and zooms a viewport.

use crate::geometry::PixelPoint;
use crate::types::{Canvas, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use crate::viewport::Viewport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDirection {
    In,
    Out,
}

impl WheelDirection {
    /// Browser-style vertical delta: positive scrolls down, which zooms out.
    pub fn from_delta(delta_y: f64) -> Self {
        if delta_y > 0.0 { WheelDirection::Out } else { WheelDirection::In }
    }

    pub fn factor(self) -> f64 {
        match self {
            WheelDirection::In => ZOOM_IN_FACTOR,
            WheelDirection::Out => ZOOM_OUT_FACTOR,
        }
    }
}

/// Device input in canvas pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    Leave,
    Wheel { direction: WheelDirection, x: f64, y: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { last: PixelPoint },
}

/// What a pointer event did to the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PointerOutcome {
    /// The viewport changed.
    pub moved: bool,
    /// The host should suppress its default handling (page scroll on wheel).
    pub consumed: bool,
}

#[derive(Clone, Debug, Default)]
pub struct Interaction {
    state: DragState,
}

impl Interaction {
    pub fn new() -> Self { Self::default() }

    pub fn state(&self) -> DragState { self.state }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Apply one event. Refused viewport mutations leave the viewport untouched.
    pub fn handle(&mut self, event: PointerEvent, viewport: &mut Viewport, canvas: Canvas) -> PointerOutcome {
        match event {
            PointerEvent::Down { x, y } => {
                self.state = DragState::Dragging { last: PixelPoint::new(x, y) };
                PointerOutcome::default()
            }
            PointerEvent::Move { x, y } => {
                let DragState::Dragging { last } = self.state else {
                    return PointerOutcome::default();
                };
                let current = PixelPoint::new(x, y);
                let (dx, dy) = current.delta_from(last);
                self.state = DragState::Dragging { last: current };
                if dx == 0.0 && dy == 0.0 {
                    return PointerOutcome::default();
                }
                match viewport.pan_by_pixels(dx, dy, canvas) {
                    Ok(()) => PointerOutcome { moved: true, consumed: false },
                    Err(err) => {
                        log::warn!("pan by ({dx}, {dy}) refused: {err}");
                        PointerOutcome::default()
                    }
                }
            }
            PointerEvent::Up | PointerEvent::Leave => {
                self.state = DragState::Idle;
                PointerOutcome::default()
            }
            PointerEvent::Wheel { direction, x, y } => {
                let moved = match viewport.zoom_at_pixel(x, y, direction.factor(), canvas) {
                    Ok(()) => true,
                    Err(err) => {
                        log::warn!("zoom {direction:?} at ({x}, {y}) refused: {err}");
                        false
                    }
                };
                PointerOutcome { moved, consumed: true }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_while_idle_is_ignored() {
        let mut i = Interaction::new();
        let mut v = Viewport::default();
        let out = i.handle(PointerEvent::Move { x: 50.0, y: 50.0 }, &mut v, Canvas::default());
        assert_eq!(out, PointerOutcome::default());
        assert_eq!(v, Viewport::default());
    }

    #[test]
    fn wheel_direction_from_browser_delta() {
        assert_eq!(WheelDirection::from_delta(120.0), WheelDirection::Out);
        assert_eq!(WheelDirection::from_delta(-3.0), WheelDirection::In);
        assert_eq!(WheelDirection::from_delta(0.0).factor(), ZOOM_IN_FACTOR);
    }
}
