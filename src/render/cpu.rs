use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    foundation::core::{Affine, Viewport},
    foundation::error::{VitrineError, VitrineResult},
    foundation::math::mul_div255_u8,
    render::backend::{FrameRGBA, RenderBackend, RenderSettings},
    render::plan::{DrawOp, FramePlan},
};

/// CPU raster backend powered by `vello_cpu`.
///
/// The render context and target pixmap are kept between frames and only
/// reallocated when the viewport changes. Glow sprites are rasterized once per
/// `(radius, color)` and reused as image paints.
pub struct CpuBackend {
    settings: RenderSettings,
    ctx: Option<vello_cpu::RenderContext>,
    target: Option<CpuSurface>,
    glow_cache: HashMap<GlowKey, GlowSprite>,
}

struct CpuSurface {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct GlowKey {
    radius_bits: u64,
    rgba: [u8; 4],
}

#[derive(Clone)]
struct GlowSprite {
    paint: vello_cpu::Image,
    size: f64,
}

impl CpuBackend {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            ctx: None,
            target: None,
            glow_cache: HashMap::new(),
        }
    }

    fn ensure_target(&mut self, viewport: Viewport) -> VitrineResult<(u16, u16)> {
        let width: u16 = viewport
            .width
            .try_into()
            .map_err(|_| VitrineError::render("surface width exceeds u16"))?;
        let height: u16 = viewport
            .height
            .try_into()
            .map_err(|_| VitrineError::render("surface height exceeds u16"))?;

        let stale = self
            .target
            .as_ref()
            .is_none_or(|s| s.width != width || s.height != height);
        if stale {
            tracing::debug!(width, height, "allocating cpu surface");
            self.target = Some(CpuSurface {
                width,
                height,
                pixmap: vello_cpu::Pixmap::new(width, height),
            });
        }
        Ok((width, height))
    }

    fn glow_sprite(&mut self, radius: f64, rgba: [u8; 4]) -> VitrineResult<GlowSprite> {
        let key = GlowKey {
            radius_bits: radius.to_bits(),
            rgba,
        };
        if let Some(sprite) = self.glow_cache.get(&key) {
            return Ok(sprite.clone());
        }

        let side = (radius * 2.0).ceil().max(1.0) as u32;
        let bytes = radial_fade_premul(side, radius, rgba);
        let pixmap = pixmap_from_premul_bytes(&bytes, side, side)?;
        let sprite = GlowSprite {
            paint: vello_cpu::Image {
                image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
                sampler: vello_cpu::peniko::ImageSampler::default(),
            },
            size: f64::from(side),
        };
        self.glow_cache.insert(key, sprite.clone());
        Ok(sprite)
    }
}

impl RenderBackend for CpuBackend {
    fn render_plan(&mut self, plan: &FramePlan) -> VitrineResult<FrameRGBA> {
        let viewport = plan.viewport;
        if viewport.is_empty() {
            return Ok(FrameRGBA {
                width: viewport.width,
                height: viewport.height,
                data: Vec::new(),
                premultiplied: true,
            });
        }

        let (width, height) = self.ensure_target(viewport)?;

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        let full = vello_cpu::kurbo::Rect::new(0.0, 0.0, f64::from(width), f64::from(height));
        let [r, g, b, a] = self.settings.clear_rgba.unwrap_or([0, 0, 0, 0]);
        let opaque = a == u8::MAX;
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        ctx.fill_rect(&full);

        for op in &plan.ops {
            match op {
                DrawOp::FillRect { rect, rgba } => {
                    let [r, g, b, a] = *rgba;
                    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
                    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(rect.x0, rect.y0, rect.x1, rect.y1));
                }
                DrawOp::RadialGlow {
                    center,
                    radius,
                    inner_rgba,
                } => {
                    if *radius <= 0.0 || inner_rgba[3] == 0 {
                        continue;
                    }
                    let sprite = self.glow_sprite(*radius, *inner_rgba)?;
                    let half = sprite.size / 2.0;
                    let origin = Affine::translate((center.x - half, center.y - half));
                    ctx.set_transform(affine_to_cpu(origin));
                    ctx.set_paint(sprite.paint);
                    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, sprite.size, sprite.size));
                }
            }
        }

        ctx.flush();
        let target = self
            .target
            .as_mut()
            .ok_or_else(|| VitrineError::render("cpu surface missing"))?;
        target.pixmap.data_as_u8_slice_mut().fill(0);
        ctx.render_to_pixmap(&mut target.pixmap);
        if opaque {
            // Source-over onto an opaque base is opaque; the u8 pipeline can
            // round it down to 254.
            for px in target.pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
                px[3] = u8::MAX;
            }
        }
        let data = target.pixmap.data_as_u8_slice().to_vec();
        self.ctx = Some(ctx);

        Ok(FrameRGBA {
            width: viewport.width,
            height: viewport.height,
            data,
            premultiplied: true,
        })
    }
}

/// Premultiplied square sprite of side `side` holding a linear radial fade
/// from `rgba` at the center to transparent at `radius`.
fn radial_fade_premul(side: u32, radius: f64, rgba: [u8; 4]) -> Vec<u8> {
    let mut bytes = vec![0u8; (side as usize).saturating_mul(side as usize).saturating_mul(4)];
    let c = f64::from(side) / 2.0;
    for y in 0..side {
        for x in 0..side {
            let dx = f64::from(x) + 0.5 - c;
            let dy = f64::from(y) + 0.5 - c;
            let t = (dx * dx + dy * dy).sqrt() / radius;
            if t >= 1.0 {
                continue;
            }
            let alpha = (f64::from(rgba[3]) * (1.0 - t)).round().clamp(0.0, 255.0) as u16;
            if alpha == 0 {
                continue;
            }
            let idx = ((y as usize) * (side as usize) + (x as usize)) * 4;
            bytes[idx] = mul_div255_u8(u16::from(rgba[0]), alpha);
            bytes[idx + 1] = mul_div255_u8(u16::from(rgba[1]), alpha);
            bytes[idx + 2] = mul_div255_u8(u16::from(rgba[2]), alpha);
            bytes[idx + 3] = alpha as u8;
        }
    }
    bytes
}

fn pixmap_from_premul_bytes(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> VitrineResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| VitrineError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| VitrineError::render("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(VitrineError::render("sprite byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
