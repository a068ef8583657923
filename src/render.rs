//! CPU rasterization of the glyph chain via `vello_cpu`.
//!
//! Geometry is built with `kurbo` and converted at the boundary; stroked
//! segments are expanded to filled quads (butt caps), since the backend
//! fills paths.

use std::f64::consts::FRAC_PI_2;

use kurbo::{Affine, BezPath, Point, Vec2};

use crate::chain::Chain;
use crate::config::{
    BACK_COLOR, FORE_COLOR, LINES, NODES, PARTS, SIZE_FACTOR, STROKE_FACTOR,
};
use crate::core::{Canvas, Rgba8};
use crate::error::{CrossboxError, CrossboxResult};
use crate::stagger::local_progress;

/// One rasterized frame: premultiplied RGBA8, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub data: Vec<u8>,
}

/// CPU renderer. Reuses its `vello_cpu` context and pixmap across frames.
pub struct CpuRenderer {
    canvas: Canvas,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
}

impl CpuRenderer {
    /// Create a renderer for `canvas`. Dimensions must be non-zero and fit
    /// in `u16` (the pixmap limit).
    pub fn new(canvas: Canvas) -> CrossboxResult<Self> {
        if canvas.width == 0 || canvas.height == 0 {
            return Err(CrossboxError::validation("canvas dimensions must be non-zero"));
        }
        let w: u16 = canvas
            .width
            .try_into()
            .map_err(|_| CrossboxError::validation("canvas width exceeds u16"))?;
        let h: u16 = canvas
            .height
            .try_into()
            .map_err(|_| CrossboxError::validation("canvas height exceeds u16"))?;
        Ok(Self {
            canvas,
            ctx: vello_cpu::RenderContext::new(w, h),
            pixmap: vello_cpu::Pixmap::new(w, h),
        })
    }

    /// The canvas this renderer draws to.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Rasterize every node of the chain at its current scale: clear to the
    /// background fill, then draw glyphs top to bottom.
    #[tracing::instrument(skip(self, chain))]
    pub fn render(&mut self, chain: &Chain) -> CrossboxResult<FrameRgba> {
        let w = f64::from(self.canvas.width);
        let h = f64::from(self.canvas.height);
        let gap = h / (NODES as f64 + 1.0);
        let size = gap / SIZE_FACTOR;
        let stroke = self.canvas.min_side() / STROKE_FACTOR;

        self.ctx.reset();

        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color_to_cpu(BACK_COLOR));
        self.ctx
            .fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));

        self.ctx.set_paint(color_to_cpu(FORE_COLOR));
        for i in 0..NODES {
            let scale = chain.node(i).scale();
            draw_node(&mut self.ctx, i, scale, w, gap, size, stroke);
        }

        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);

        Ok(FrameRgba {
            width: self.canvas.width,
            height: self.canvas.height,
            data: self.pixmap.data_as_u8_slice().to_vec(),
        })
    }
}

/// Draw glyph `i` at progress `scale`, centered horizontally in row `i + 1`.
///
/// The outer 2-way split spends the first half of `scale` on the cross parts
/// (`sc1`, subdivided 4 ways) and the second half spinning the center square
/// a quarter turn (`sc2`).
fn draw_node(
    ctx: &mut vello_cpu::RenderContext,
    i: usize,
    scale: f64,
    w: f64,
    gap: f64,
    size: f64,
    stroke: f64,
) {
    let sc1 = local_progress(scale, 0, PARTS);
    let sc2 = local_progress(scale, 1, PARTS);
    let base = Affine::translate((w / 2.0, gap * (i as f64 + 1.0))) * Affine::rotate(FRAC_PI_2 * sc2);

    let half = size / 2.0;
    let corners = [
        Point::new(-half, -half),
        Point::new(half, -half),
        Point::new(half, half),
        Point::new(-half, half),
    ];
    for j in 0..4 {
        fill_segment(ctx, base, corners[j], corners[(j + 1) % 4], stroke);
    }

    for j in 0..LINES {
        let part = local_progress(sc1, j, LINES);
        let transform = base * Affine::rotate(FRAC_PI_2 * f64::from(j));
        draw_cross_part(ctx, transform, size, part, stroke);
    }
}

/// One of the four cross parts: a diagonal tick growing out of the square's
/// corner, and an edge line sweeping along the outer side. Each consumes
/// half of the part's progress.
fn draw_cross_part(
    ctx: &mut vello_cpu::RenderContext,
    transform: Affine,
    size: f64,
    progress: f64,
    stroke: f64,
) {
    let p1 = local_progress(progress, 0, 2);
    let p2 = local_progress(progress, 1, 2);
    let a = size / 2.0;
    let b = a * p1;
    let c = 2.0 * size * p2;

    fill_segment(
        ctx,
        transform,
        Point::new(a, a),
        Point::new(a + b, a + b),
        stroke,
    );
    fill_segment(
        ctx,
        transform,
        Point::new(size, -size),
        Point::new(size, -size + c),
        stroke,
    );
}

/// Fill the quad covering a stroked segment from `p0` to `p1`. Zero-length
/// segments draw nothing, matching butt-cap stroking.
fn fill_segment(
    ctx: &mut vello_cpu::RenderContext,
    transform: Affine,
    p0: Point,
    p1: Point,
    width: f64,
) {
    let d = p1 - p0;
    let len = d.hypot();
    if len <= f64::EPSILON {
        return;
    }
    let n = Vec2::new(-d.y, d.x) * (width / (2.0 * len));

    let mut path = BezPath::new();
    path.move_to(p0 + n);
    path.line_to(p1 + n);
    path.line_to(p1 - n);
    path.line_to(p0 - n);
    path.close_path();

    ctx.set_transform(affine_to_cpu(transform));
    ctx.fill_path(&bezpath_to_cpu(&path));
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
