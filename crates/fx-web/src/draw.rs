//! Canvas-2D draw passes. Pure consumers of core state; all geometry comes
//! from `fx-core` so the draw code stays a thin stroke/fill layer.

use fx_core::{hue_stroke_style, CursorTrails, Starfield};
use web_sys as web;

/// Background fill plus one motion-blur stroke per drawable star.
pub fn draw_starfield(ctx: &web::CanvasRenderingContext2d, field: &Starfield) {
    let s = field.surface();
    ctx.set_fill_style_str(&field.fill_style());
    ctx.fill_rect(0.0, 0.0, s.width as f64, s.height as f64);
    ctx.set_stroke_style_str(&field.config.star_color);
    for seg in field.segments() {
        ctx.set_line_width(seg.width as f64);
        ctx.begin_path();
        ctx.move_to(seg.from.x as f64, seg.from.y as f64);
        ctx.line_to(seg.to.x as f64, seg.to.y as f64);
        ctx.stroke();
    }
}

/// Clear, then stroke every trail additively with the frame's hue.
pub fn draw_trails(ctx: &web::CanvasRenderingContext2d, trails: &CursorTrails, hue: f32) {
    let Some(canvas) = ctx.canvas() else {
        return;
    };
    let _ = ctx.set_global_composite_operation("source-over");
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    let _ = ctx.set_global_composite_operation("lighter");
    ctx.set_stroke_style_str(&hue_stroke_style(hue));
    ctx.set_line_width(1.0);

    for line in trails.lines() {
        let path = line.path();
        ctx.begin_path();
        ctx.move_to(path.start.x as f64, path.start.y as f64);
        for c in &path.curves {
            ctx.quadratic_curve_to(c.ctrl.x as f64, c.ctrl.y as f64, c.to.x as f64, c.to.y as f64);
        }
        ctx.stroke();
    }
}
