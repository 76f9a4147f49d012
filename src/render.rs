//! Rendering: draws the star row to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only configuration and fill state and produces pixels —
//! it does not mutate any application state.
//!
//! Fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::RatingView::render`]) handles the
//! result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::config::RatingConfig;
use crate::geometry::{self, FillPath, StarGeometry};

/// Draw the full star row.
///
/// `viewport_w` and `viewport_h` are in CSS pixels; `dpr` is the device
/// pixel ratio. A degenerate viewport draws nothing.
///
/// # Errors
///
/// Returns `Err` if the configuration is invalid or a `Canvas2D` call fails.
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    config: &RatingConfig,
    fractions: &[f64],
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    if viewport_w <= 0.0 || viewport_h <= 0.0 {
        return Ok(());
    }

    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);

    let stars = geometry::layout(config, viewport_h)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    for (star, fraction) in stars.iter().zip(fractions) {
        draw_star(ctx, config, star, *fraction);
    }

    Ok(())
}

/// Draw one star: unfilled body, clipped fill, then the outline stroke.
fn draw_star(
    ctx: &CanvasRenderingContext2d,
    config: &RatingConfig,
    star: &StarGeometry,
    fraction: f64,
) {
    trace_outline(ctx, star);
    ctx.set_fill_style_str(&config.unfilled_color);
    ctx.fill();

    match geometry::fill_path(star, fraction) {
        FillPath::Empty => {}
        FillPath::Full => {
            trace_outline(ctx, star);
            ctx.set_fill_style_str(&config.fill_color);
            ctx.fill();
        }
        FillPath::Partial { clip } => {
            // Rectangular clip against the outline gives the left-to-right wipe.
            ctx.save();
            ctx.begin_path();
            ctx.rect(clip.x, clip.y, clip.width, clip.height);
            ctx.clip();
            trace_outline(ctx, star);
            ctx.set_fill_style_str(&config.fill_color);
            ctx.fill();
            ctx.restore();
        }
    }

    if config.line_width > 0.0 {
        trace_outline(ctx, star);
        ctx.set_stroke_style_str(&config.stroke_color);
        ctx.set_line_width(config.line_width);
        ctx.stroke();
    }
}

/// Trace the star outline as the current path.
fn trace_outline(ctx: &CanvasRenderingContext2d, star: &StarGeometry) {
    ctx.begin_path();
    for (i, vertex) in star.outline().iter().enumerate() {
        if i == 0 {
            ctx.move_to(vertex.x, vertex.y);
        } else {
            ctx.line_to(vertex.x, vertex.y);
        }
    }
    ctx.close_path();
}
