//! Application-root context tying the store, smoothing, persistence and
//! messaging together. One instance lives for the whole page session.

use crate::constants::{DEFAULT_DENSITY, ONBOARDING_MIN_FIELDS};
use crate::frame::{Frame, FrameUniforms, PaletteClock, Renderer, Viewport};
use crate::gesture::GestureRecognizer;
use crate::messages::MessageBoard;
use crate::palette::{self, PaletteOrder};
use crate::persist::{FragmentWriter, Location};
use crate::state::{Field, Patch, RestoreReport, Smoothing, UpdateReport, ViewState};

pub struct Explorer<L: Location> {
    pub(crate) state: ViewState,
    pub(crate) smoothing: Smoothing,
    pub(crate) writer: FragmentWriter,
    pub(crate) location: L,
    pub(crate) messages: MessageBoard,
    pub(crate) gestures: GestureRecognizer,
    pub(crate) palettes: PaletteOrder,
    pub(crate) clock: PaletteClock,
    pub(crate) density: f64,
    pub(crate) help_visible: bool,
    pub(crate) export_requested: bool,
    pub(crate) last_tick_ms: Option<f64>,
    colors: Vec<f32>,
    colors_for: Option<String>,
}

impl<L: Location> Explorer<L> {
    pub fn new(location: L) -> Self {
        let state = ViewState::new();
        let smoothing = Smoothing::new(&state);
        Self {
            state,
            smoothing,
            writer: FragmentWriter::new(),
            location,
            messages: MessageBoard::default(),
            gestures: GestureRecognizer::default(),
            palettes: PaletteOrder::catalog(),
            clock: PaletteClock::default(),
            density: DEFAULT_DENSITY,
            help_visible: false,
            export_requested: false,
            last_tick_ms: None,
            colors: Vec::new(),
            colors_for: None,
        }
    }

    pub fn with_palette_order(mut self, order: PaletteOrder) -> Self {
        self.palettes = order;
        self
    }

    pub fn with_gestures(mut self, gestures: GestureRecognizer) -> Self {
        self.gestures = gestures;
        self
    }

    // ---------------- Accessors ----------------

    #[inline]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[inline]
    pub fn smoothing(&self) -> &Smoothing {
        &self.smoothing
    }

    #[inline]
    pub fn messages(&self) -> &MessageBoard {
        &self.messages
    }

    #[inline]
    pub fn location(&self) -> &L {
        &self.location
    }

    #[inline]
    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    #[inline]
    pub fn palette_order(&self) -> &PaletteOrder {
        &self.palettes
    }

    #[inline]
    pub fn density(&self) -> f64 {
        self.density
    }

    #[inline]
    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn set_help_visible(&mut self, visible: bool) {
        self.help_visible = visible;
    }

    // ---------------- Lifecycle ----------------

    /// Read the initial fragment. Opens help on a first visit (few fields in
    /// the URL) or when the link asks for it.
    pub fn start(&mut self) -> RestoreReport {
        let report = self.restore_from_location();
        if report.applied < ONBOARDING_MIN_FIELDS || self.state.force_help() {
            self.help_visible = true;
        }
        if self.state.force_help() {
            self.update(Patch::new().set(Field::ForceHelp, false));
        }
        log::info!(
            "[state] start: restored {} field(s), help={}",
            report.applied,
            self.help_visible
        );
        report
    }

    /// React to a `hashchange`; our own writes are ignored.
    pub fn hash_changed(&mut self) -> Option<RestoreReport> {
        let fragment = self.location.fragment();
        if self.writer.is_own_write(&fragment) {
            return None;
        }
        self.writer.forget_own_write();
        let report = self.restore_from_location();
        if self.state.force_help() {
            self.help_visible = true;
            self.update(Patch::new().set(Field::ForceHelp, false));
        }
        Some(report)
    }

    fn restore_from_location(&mut self) -> RestoreReport {
        let fragment = self.location.fragment();
        let report = self.state.restore(&fragment, &mut self.smoothing);
        for e in &report.errors {
            self.messages.show_error(e.to_string());
        }
        report
    }

    /// Validated partial update; rejected entries surface as messages.
    pub fn update(&mut self, patch: Patch) -> UpdateReport {
        let report = self.state.update(patch);
        for e in &report.errors {
            self.messages.show_error(e.to_string());
        }
        report
    }

    /// Defaults everywhere, channels snapped, fragment cleared.
    pub fn reset(&mut self) {
        self.state.reset();
        self.state.take_dirty();
        self.smoothing.snap_to(&self.state);
        self.clock.reset();
        self.writer.clear(self.last_tick_ms, &mut self.location);
        log::info!("[state] full reset");
    }

    // ---------------- Frame ----------------

    /// Advance everything time-based and build this frame's uniforms.
    pub fn tick(&mut self, now_ms: f64, viewport: Viewport) -> Frame<'_> {
        self.last_tick_ms = Some(now_ms);
        self.smoothing.advance(now_ms);
        self.clock.advance(
            now_ms,
            self.state.playing(),
            self.state.direction(),
            self.state.speed(),
            self.state.spacing(),
        );
        self.messages.tick(now_ms);
        self.writer.poll(now_ms, &mut self.state, &mut self.location);
        self.refresh_colors();

        let palette_len = palette::get(self.state.palette_id())
            .map(|p| p.colors.len())
            .unwrap_or(1);
        let center = self.smoothing.center();
        let c = self.state.c();
        let escape_radius = self.state.escape_radius();
        let uniforms = FrameUniforms {
            resolution: [viewport.width as f32, viewport.height as f32],
            center: [center.x as f32, center.y as f32],
            c: [c.x as f32, c.y as f32],
            zoom: self.smoothing.zoom() as f32,
            fractal: self.state.fractal().index() as u32,
            exponent: self.state.exponent() as u32,
            frame: self.clock.frame_index(palette_len) as f32,
            escape_radius: escape_radius as f32,
            log_escape_radius: escape_radius.ln() as f32,
            spacing: self.state.spacing() as f32,
            smoothing: self.state.smoothing() as u32,
        };
        Frame {
            uniforms,
            colors: &self.colors,
            export: std::mem::take(&mut self.export_requested),
        }
    }

    /// One animation-frame step: tick, then hand the frame to `renderer`.
    pub fn render(&mut self, now_ms: f64, viewport: Viewport, renderer: &mut impl Renderer) {
        let frame = self.tick(now_ms, viewport);
        renderer.draw(&frame);
    }

    fn refresh_colors(&mut self) {
        let id = self.state.palette_id();
        if self.colors_for.as_deref() == Some(id) {
            return;
        }
        if let Some(p) = palette::get(id) {
            self.colors = palette::color_table(p);
            self.colors_for = Some(id.to_string());
        }
    }
}
