// ============================================================================
// CANVAS RENDERER - Executes draw commands on a CanvasRenderingContext2d
// ============================================================================

use std::f64::consts::PI;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use crate::scene::commands::DrawCommand;

fn ctx_set_fill_style(ctx: &CanvasRenderingContext2d, value: &str) {
    let _ = js_sys::Reflect::set(ctx.as_ref(), &JsValue::from_str("fillStyle"), &JsValue::from_str(value));
}

fn ctx_set_stroke_style(ctx: &CanvasRenderingContext2d, value: &str) {
    let _ = js_sys::Reflect::set(ctx.as_ref(), &JsValue::from_str("strokeStyle"), &JsValue::from_str(value));
}

/// 2D context of a mounted canvas, resized to its layout box.
/// `None` when there is nothing to draw on.
pub fn acquire_context(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    let width = canvas.offset_width();
    let height = canvas.offset_height();
    if width > 0 && height > 0 {
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
    }
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

pub fn execute(ctx: &CanvasRenderingContext2d, commands: &[DrawCommand]) -> Result<(), JsValue> {
    for command in commands {
        match command {
            DrawCommand::Clear { width, height } => ctx.clear_rect(0.0, 0.0, *width, *height),
            DrawCommand::Lines { segments, stroke, line_width } => {
                ctx.begin_path();
                for segment in segments {
                    ctx.move_to(segment.from.x, segment.from.y);
                    ctx.line_to(segment.to.x, segment.to.y);
                }
                ctx_set_stroke_style(ctx, stroke);
                ctx.set_line_width(*line_width);
                ctx.stroke();
            }
            DrawCommand::Save => ctx.save(),
            DrawCommand::Restore => ctx.restore(),
            DrawCommand::Translate { x, y } => ctx.translate(*x, *y)?,
            DrawCommand::Scale { x, y } => ctx.scale(*x, *y)?,
            DrawCommand::Rotate { radians } => ctx.rotate(*radians)?,
            DrawCommand::Rect { x, y, width, height, fill, stroke, line_width } => {
                ctx.begin_path();
                ctx.rect(*x, *y, *width, *height);
                ctx_set_fill_style(ctx, fill);
                ctx.fill();
                ctx_set_stroke_style(ctx, stroke);
                ctx.set_line_width(*line_width);
                ctx.stroke();
            }
            DrawCommand::Circle { center, radius, fill, stroke, line_width } => {
                ctx.begin_path();
                ctx.arc(center.x, center.y, *radius, 0.0, PI * 2.0)?;
                if let Some(fill) = fill {
                    ctx_set_fill_style(ctx, fill);
                    ctx.fill();
                }
                if let Some(stroke) = stroke {
                    ctx_set_stroke_style(ctx, stroke);
                    ctx.set_line_width(*line_width);
                    ctx.stroke();
                }
            }
            DrawCommand::Polygon { points, fill } => {
                let mut iter = points.iter();
                if let Some(first) = iter.next() {
                    ctx.begin_path();
                    ctx.move_to(first.x, first.y);
                    for p in iter {
                        ctx.line_to(p.x, p.y);
                    }
                    ctx.close_path();
                    ctx_set_fill_style(ctx, fill);
                    ctx.fill();
                }
            }
            DrawCommand::Text { text, at, fill, font } => {
                ctx_set_fill_style(ctx, fill);
                ctx.set_font(font);
                ctx.set_text_align("center");
                ctx.fill_text(text, at.x, at.y)?;
            }
        }
    }
    Ok(())
}
