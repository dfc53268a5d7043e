// File: crates/plot-window/src/main.rs
// Summary: Interactive window host; feeds winit input to the plotter and blits Skia RGBA via softbuffer.

use std::num::NonZeroU32;

use anyhow::{anyhow, Context, Result};
use plot_core::{PlotConfig, PlotEvent, Plotter, WheelDirection, HINT};
use plot_render_skia::SkiaSurface;
use winit::event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{CursorIcon, Window, WindowBuilder};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional arg: JSON config path
    let config = match std::env::args().nth(1) {
        Some(path) => PlotConfig::from_path(&path).with_context(|| format!("failed to load config '{path}'"))?,
        None => PlotConfig::default(),
    };

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Function Plotter")
        .with_inner_size(winit::dpi::LogicalSize::new(config.width as f64, config.height as f64))
        .build(&event_loop)
        .context("build window")?;

    let mut plotter = Plotter::new(config)?;
    let size = window.inner_size();
    plotter.handle(PlotEvent::Resize { width: size.width.max(1), height: size.height.max(1) });

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut frame = unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;
    let mut raster = SkiaSurface::new(plotter.canvas())?;

    let mut cursor = (0.0f64, 0.0f64);
    update_title(&window, &plotter);

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        let plot_event = match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                    None
                }
                WindowEvent::Resized(new_size) => Some(PlotEvent::Resize {
                    width: new_size.width.max(1),
                    height: new_size.height.max(1),
                }),
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = (position.x, position.y);
                    Some(PlotEvent::PointerMove { x: position.x, y: position.y })
                }
                WindowEvent::CursorLeft { .. } => Some(PlotEvent::PointerLeave),
                WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => Some(match state {
                    ElementState::Pressed => PlotEvent::PointerDown { x: cursor.0, y: cursor.1 },
                    ElementState::Released => PlotEvent::PointerUp,
                }),
                WindowEvent::MouseWheel { delta, .. } => {
                    // winit reports scroll-up as positive; browsers the opposite.
                    let dy = match delta {
                        MouseScrollDelta::LineDelta(_, y) => -(y as f64),
                        MouseScrollDelta::PixelDelta(p) => -p.y,
                    };
                    (dy != 0.0).then(|| PlotEvent::Wheel {
                        direction: WheelDirection::from_delta(dy),
                        x: cursor.0,
                        y: cursor.1,
                    })
                }
                WindowEvent::ReceivedCharacter(c) => text_input(&plotter, c),
                _ => None,
            },
            Event::RedrawRequested(_) => {
                if let Err(err) = present(&plotter, &mut raster, &mut frame) {
                    log::error!("present failed: {err:#}");
                }
                None
            }
            _ => None,
        };

        if let Some(plot_event) = plot_event {
            let text_changed = matches!(
                plot_event,
                PlotEvent::EditExpression(_) | PlotEvent::SubmitExpression(_) | PlotEvent::Reset
            );
            let response = plotter.handle(plot_event);
            if response.redraw {
                window.request_redraw();
            }
            if response.redraw || text_changed {
                update_title(&window, &plotter);
            }
            window.set_cursor_icon(if plotter.is_dragging() { CursorIcon::Grabbing } else { CursorIcon::Grab });
        }
    });
}

/// Keyboard editing of the pending formula: Enter plots, Escape resets, Backspace deletes.
fn text_input(plotter: &Plotter, c: char) -> Option<PlotEvent> {
    let mut text = plotter.pending().to_owned();
    match c {
        '\r' | '\n' => Some(PlotEvent::SubmitExpression(text)),
        '\u{1b}' => Some(PlotEvent::Reset),
        '\u{8}' | '\u{7f}' => {
            text.pop();
            Some(PlotEvent::EditExpression(text))
        }
        c if !c.is_control() => {
            text.push(c);
            Some(PlotEvent::EditExpression(text))
        }
        _ => None,
    }
}

fn update_title(window: &Window, plotter: &Plotter) {
    let error = plotter.error().map(|e| format!(" | {e}")).unwrap_or_default();
    window.set_title(&format!("f(x) = {}{} | {} | {}", plotter.pending(), error, plotter.status_line(), HINT));
}

fn present(plotter: &Plotter, raster: &mut SkiaSurface, frame: &mut softbuffer::Surface) -> Result<()> {
    let canvas = plotter.canvas();
    let (w, h) = (canvas.width(), canvas.height());
    let (nw, nh) = NonZeroU32::new(w).zip(NonZeroU32::new(h)).ok_or_else(|| anyhow!("empty canvas"))?;
    frame.resize(nw, nh).map_err(|e| anyhow!("resize frame: {e}"))?;

    plotter.render(raster);
    let rgba = raster.to_rgba8()?;

    let mut buffer = frame.buffer_mut().map_err(|e| anyhow!("frame buffer: {e}"))?;
    for (dst, px) in buffer.iter_mut().zip(rgba.chunks_exact(4)) {
        // softbuffer expects 0RGB
        *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
    }
    buffer.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}
