// File: crates/plot-core/src/plotter.rs
// Summary: Plotter state (viewport, committed/pending formula, drag session) and its event transition function.

use crate::config::PlotConfig;
use crate::error::PlotError;
use crate::expr::{self, Expression};
use crate::interaction::{Interaction, PointerEvent, WheelDirection};
use crate::render::{Renderer, Surface};
use crate::types::Canvas;
use crate::viewport::Viewport;

/// Affordance hint shown under the status line.
pub const HINT: &str = "Tip: drag to pan, use the mouse wheel to zoom";

/// Every input the plotter reacts to. Pointer coordinates are canvas pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum PlotEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    PointerLeave,
    Wheel { direction: WheelDirection, x: f64, y: f64 },
    /// The text field changed; nothing is plotted yet.
    EditExpression(String),
    /// "Plot": replace the pending text and try to commit it.
    SubmitExpression(String),
    Reset,
    Resize { width: u32, height: u32 },
}

/// What the host should do after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// Drawing inputs changed; run a render pass.
    pub redraw: bool,
    /// Suppress the platform default (page scroll for wheel events).
    pub consumed: bool,
}

impl EventResponse {
    const NONE: Self = Self { redraw: false, consumed: false };
    const REDRAW: Self = Self { redraw: true, consumed: false };
}

pub struct Plotter {
    config: PlotConfig,
    initial_viewport: Viewport,
    initial_expression: Expression,
    canvas: Canvas,
    viewport: Viewport,
    committed: Expression,
    pending: String,
    error: Option<PlotError>,
    interaction: Interaction,
    renderer: Renderer,
}

impl Plotter {
    /// Build from configuration; fails if the configured canvas, ranges or formula are invalid.
    pub fn new(config: PlotConfig) -> Result<Self, PlotError> {
        let canvas = config.canvas()?;
        let viewport = config.viewport()?;
        let expression = config.expression()?;
        let renderer = Renderer::new(config.theme());
        log::debug!(
            "plotter {}x{} over x[{}, {}] y[{}, {}] f(x) = {}",
            canvas.width(), canvas.height(),
            viewport.x_min(), viewport.x_max(), viewport.y_min(), viewport.y_max(),
            expression
        );
        Ok(Self {
            pending: expression.source().to_owned(),
            committed: expression.clone(),
            initial_expression: expression,
            initial_viewport: viewport,
            viewport,
            canvas,
            config,
            error: None,
            interaction: Interaction::new(),
            renderer,
        })
    }

    pub fn config(&self) -> &PlotConfig { &self.config }
    pub fn canvas(&self) -> Canvas { self.canvas }
    pub fn viewport(&self) -> &Viewport { &self.viewport }
    pub fn committed(&self) -> &Expression { &self.committed }
    pub fn pending(&self) -> &str { &self.pending }
    /// Last rejected submission, cleared by a successful commit or reset.
    pub fn error(&self) -> Option<&PlotError> { self.error.as_ref() }
    /// Hosts show a "grabbing" cursor while true.
    pub fn is_dragging(&self) -> bool { self.interaction.is_dragging() }
    pub fn renderer(&self) -> &Renderer { &self.renderer }

    /// Current bounds to two decimals.
    pub fn status_line(&self) -> String {
        let v = &self.viewport;
        format!(
            "Domain: x ∈ [{:.2}, {:.2}], y ∈ [{:.2}, {:.2}]",
            v.x_min(), v.x_max(), v.y_min(), v.y_max()
        )
    }

    pub fn handle(&mut self, event: PlotEvent) -> EventResponse {
        match event {
            PlotEvent::PointerDown { x, y } => self.pointer(PointerEvent::Down { x, y }),
            PlotEvent::PointerMove { x, y } => self.pointer(PointerEvent::Move { x, y }),
            PlotEvent::PointerUp => self.pointer(PointerEvent::Up),
            PlotEvent::PointerLeave => self.pointer(PointerEvent::Leave),
            PlotEvent::Wheel { direction, x, y } => self.pointer(PointerEvent::Wheel { direction, x, y }),
            PlotEvent::EditExpression(text) => {
                self.pending = text;
                EventResponse::NONE
            }
            PlotEvent::SubmitExpression(text) => {
                self.pending = text;
                self.commit_pending()
            }
            PlotEvent::Reset => self.reset(),
            PlotEvent::Resize { width, height } => match Canvas::new(width, height) {
                Ok(canvas) if canvas == self.canvas => EventResponse::NONE,
                Ok(canvas) => {
                    self.canvas = canvas;
                    EventResponse::REDRAW
                }
                Err(err) => {
                    log::warn!("resize ignored: {err}");
                    EventResponse::NONE
                }
            },
        }
    }

    /// Run one render pass with the current state.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.renderer.render(surface, &self.viewport, self.canvas, &self.committed);
    }

    /// [`Plotter::handle`], then redraw into `surface` if the event asked for it.
    pub fn handle_and_render<S: Surface + ?Sized>(&mut self, event: PlotEvent, surface: &mut S) -> EventResponse {
        let response = self.handle(event);
        if response.redraw {
            self.render(surface);
        }
        response
    }

    fn pointer(&mut self, event: PointerEvent) -> EventResponse {
        let outcome = self.interaction.handle(event, &mut self.viewport, self.canvas);
        if outcome.moved {
            log::trace!("{}", self.status_line());
        }
        EventResponse { redraw: outcome.moved, consumed: outcome.consumed }
    }

    fn commit_pending(&mut self) -> EventResponse {
        match expr::validate(&self.pending) {
            Ok(expression) => {
                log::debug!("committed f(x) = {expression}");
                self.committed = expression;
                self.error = None;
                EventResponse::REDRAW
            }
            Err(err) => {
                log::warn!("rejected formula '{}': {err}", self.pending);
                self.error = Some(PlotError::InvalidFunction(err));
                EventResponse::NONE
            }
        }
    }

    fn reset(&mut self) -> EventResponse {
        self.viewport = self.initial_viewport;
        self.committed = self.initial_expression.clone();
        self.pending = self.initial_expression.source().to_owned();
        self.error = None;
        EventResponse::REDRAW
    }
}
