// File: crates/plot-core/tests/viewport.rs
// Purpose: Coordinate mapping round-trips and pan/zoom fixed points.

use plot_core::{Canvas, PixelPoint, Viewport, ViewportError};

const EPS: f64 = 1e-9;

fn viewports() -> Vec<Viewport> {
    vec![
        Viewport::default(),
        Viewport::new(-3.5, 12.25, 0.1, 0.2).unwrap(),
        Viewport::new(1000.0, 1000.5, -1e6, 1e6).unwrap(),
    ]
}

#[test]
fn pixel_math_round_trip() {
    let canvas = Canvas::new(600, 400).unwrap();
    for v in viewports() {
        for p in [0.0, 1.0, 137.5, 300.0, 599.0, 600.0] {
            let back = v.to_pixel_x(v.to_math_x(p, canvas), canvas);
            assert!((back - p).abs() < 1e-6, "x {p} -> {back} in {v:?}");
        }
        for p in [0.0, 0.5, 200.0, 399.0, 400.0] {
            let back = v.to_pixel_y(v.to_math_y(p, canvas), canvas);
            assert!((back - p).abs() < 1e-6, "y {p} -> {back} in {v:?}");
        }
    }
}

#[test]
fn origin_maps_to_canvas_center() {
    let canvas = Canvas::default();
    let v = Viewport::default();
    assert_eq!(v.to_pixel_x(0.0, canvas), 300.0);
    assert_eq!(v.to_pixel_y(0.0, canvas), 200.0);
    // Math up is pixel up.
    assert_eq!(v.to_pixel_y(10.0, canvas), 0.0);
    assert_eq!(v.to_pixel_y(-10.0, canvas), 400.0);
}

#[test]
fn pan_moves_anchor_by_pixel_delta_and_keeps_spans() {
    let canvas = Canvas::default();
    for mut v in viewports() {
        let p0 = PixelPoint::new(120.0, 80.0);
        let anchor = v.to_math(p0, canvas);
        let (x_span, y_span) = (v.x_span(), v.y_span());

        v.pan_by_pixels(37.0, -21.0, canvas).unwrap();

        let moved = v.to_pixel(anchor, canvas);
        assert!((moved.x - (p0.x + 37.0)).abs() < 1e-6);
        assert!((moved.y - (p0.y - 21.0)).abs() < 1e-6);
        assert!((v.x_span() - x_span).abs() <= x_span * EPS);
        assert!((v.y_span() - y_span).abs() <= y_span * EPS);
    }
}

#[test]
fn drag_right_moves_view_left() {
    let canvas = Canvas::default();
    let mut v = Viewport::default();
    v.pan_by_pixels(30.0, 0.0, canvas).unwrap();
    assert!((v.x_min() - -11.0).abs() < EPS);
    assert!((v.x_max() - 9.0).abs() < EPS);
    // Dragging down reveals larger y.
    v.pan_by_pixels(0.0, 20.0, canvas).unwrap();
    assert!((v.y_min() - -9.0).abs() < EPS);
    assert!((v.y_max() - 11.0).abs() < EPS);
}

#[test]
fn zoom_keeps_point_under_cursor() {
    let canvas = Canvas::default();
    for v0 in viewports() {
        for factor in [0.9, 1.1, 0.25, 3.0] {
            for (px, py) in [(0.0, 0.0), (300.0, 200.0), (451.0, 17.0), (600.0, 400.0)] {
                let mut v = v0;
                let before = v.to_math(PixelPoint::new(px, py), canvas);
                v.zoom_at_pixel(px, py, factor, canvas).unwrap();
                let after = v.to_math(PixelPoint::new(px, py), canvas);
                assert!((before.x - after.x).abs() <= v0.x_span() * 1e-9, "{factor} at ({px},{py})");
                assert!((before.y - after.y).abs() <= v0.y_span() * 1e-9, "{factor} at ({px},{py})");
                assert!((v.x_span() - v0.x_span() * factor).abs() <= v0.x_span() * 1e-9);
            }
        }
    }
}

#[test]
fn extreme_zoom_in_is_refused_not_collapsed() {
    let canvas = Canvas::default();
    let mut v = Viewport::default();
    let mut refused = None;
    for _ in 0..1000 {
        if let Err(err) = v.zoom_at_pixel(300.0, 200.0, 0.5, canvas) {
            refused = Some(err);
            break;
        }
    }
    assert!(matches!(refused, Some(ViewportError::Degenerate { .. })));
    assert!(v.x_min() < v.x_max());
    assert!(v.y_min() < v.y_max());
}

#[test]
fn extreme_zoom_out_is_refused() {
    let canvas = Canvas::default();
    let mut v = Viewport::default();
    let mut refusals = 0;
    for _ in 0..1000 {
        if v.zoom_at_pixel(10.0, 390.0, 2.0, canvas).is_err() {
            refusals += 1;
        }
    }
    assert!(refusals > 0);
    assert!(v.x_span().is_finite() && v.y_span().is_finite());
}
