//! Per-frame uniform values handed to the external renderer.

/// Drawing surface size. Backing-store pixels for rendering, CSS pixels
/// for pointer math; only the ratio matters for the latter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    /// Length of the shorter side; it spans `[-1, 1] / zoom` in world units.
    #[inline]
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

/// Scalar uniforms, laid out for a single uniform block upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub resolution: [f32; 2],
    pub center: [f32; 2],
    pub c: [f32; 2],
    pub zoom: f32,
    pub fractal: u32,
    pub exponent: u32,
    pub frame: f32,
    pub escape_radius: f32,
    pub log_escape_radius: f32,
    pub spacing: f32,
    pub smoothing: u32,
}

/// Everything the renderer needs for one frame.
#[derive(Debug)]
pub struct Frame<'a> {
    pub uniforms: FrameUniforms,
    /// Flat RGB colour table.
    pub colors: &'a [f32],
    /// Read the finished frame back and save it.
    pub export: bool,
}

/// External collaborator that turns uniforms into pixels.
pub trait Renderer {
    fn draw(&mut self, frame: &Frame<'_>);
}

/// Palette animation phase, advanced by frame timestamps.
#[derive(Clone, Debug, Default)]
pub struct PaletteClock {
    phase: f64,
    last_ms: Option<f64>,
}

impl PaletteClock {
    /// `direction * speed` palette entries per second, stretched by `spacing`.
    pub fn advance(&mut self, now_ms: f64, playing: bool, direction: f64, speed: f64, spacing: f64) {
        let dt_sec = match self.last_ms {
            Some(last) if now_ms > last => (now_ms - last) / 1000.0,
            Some(_) => return,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        if playing && spacing > 0.0 {
            self.phase += direction * speed * dt_sec / spacing;
        }
    }

    /// Animated index into a palette of `palette_len` colours.
    pub fn frame_index(&self, palette_len: usize) -> f64 {
        if palette_len == 0 {
            return 0.0;
        }
        self.phase.rem_euclid(palette_len as f64)
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}
