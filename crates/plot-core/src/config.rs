// File: crates/plot-core/src/config.rs

//! Widget configuration.
//!
//! Every field is optional when deserializing; missing keys fall back to the
//! defaults below. Keys use the camelCase names of the widget props
//! (`xMin`, `functionStr`, ...), so the same JSON can drive either host.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PlotError;
use crate::expr::{self, Expression};
use crate::theme::{self, Theme};
use crate::types::{Canvas, DEFAULT_FUNCTION, DEFAULT_MAX, DEFAULT_MIN, HEIGHT, WIDTH};
use crate::viewport::Viewport;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlotConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// Formula plotted at start-up and restored by reset.
    pub function_str: String,
    /// Theme preset name, see [`theme::presets`].
    pub theme: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            x_min: DEFAULT_MIN,
            x_max: DEFAULT_MAX,
            y_min: DEFAULT_MIN,
            y_max: DEFAULT_MAX,
            function_str: DEFAULT_FUNCTION.to_owned(),
            theme: "light".to_owned(),
        }
    }
}

impl PlotConfig {
    pub fn from_json_str(json: &str) -> Result<Self, PlotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PlotError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    pub fn canvas(&self) -> Result<Canvas, PlotError> {
        Canvas::new(self.width, self.height)
    }

    pub fn viewport(&self) -> Result<Viewport, PlotError> {
        Ok(Viewport::new(self.x_min, self.x_max, self.y_min, self.y_max)?)
    }

    pub fn expression(&self) -> Result<Expression, PlotError> {
        Ok(expr::validate(&self.function_str)?)
    }

    pub fn theme(&self) -> Theme {
        theme::find(&self.theme)
    }
}
