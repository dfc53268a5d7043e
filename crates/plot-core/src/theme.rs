// File: crates/plot-core/src/theme.rs
// Summary: Light/Dark theming for plot rendering colors and stroke widths.

/// Backend-neutral 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 255,
        }
    }
}

/// Color and width of a stroked line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: Rgba, width: f32) -> Self {
        Self { color, width }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Stroke,
    pub axis: Stroke,
    pub curve: Stroke,
}

impl Theme {
    /// Palette of the web grapher widget.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::from_hex(0xffffff),
            grid: Stroke::new(Rgba::from_hex(0xe5e7eb), 0.5), // gray-200
            axis: Stroke::new(Rgba::from_hex(0x4b5563), 1.5), // gray-600
            curve: Stroke::new(Rgba::from_hex(0x1d4ed8), 2.0), // blue-700
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::from_argb(255, 18, 18, 20),
            grid: Stroke::new(Rgba::from_argb(255, 40, 40, 45), 0.5),
            axis: Stroke::new(Rgba::from_argb(255, 180, 180, 190), 1.5),
            curve: Stroke::new(Rgba::from_argb(255, 64, 160, 255), 2.0),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Rgba::from_hex(0x000000),
            grid: Stroke::new(Rgba::from_hex(0x333333), 1.0),
            axis: Stroke::new(Rgba::from_hex(0xffffff), 2.0),
            curve: Stroke::new(Rgba::from_hex(0x00ffff), 2.5),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    log::warn!("unknown theme '{name}', falling back to light");
    Theme::light()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_splits_channels() {
        assert_eq!(Rgba::from_hex(0x1d4ed8), Rgba { r: 0x1d, g: 0x4e, b: 0xd8, a: 255 });
    }

    #[test]
    fn find_is_case_insensitive_with_fallback() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("no-such-theme").name, "light");
    }
}
