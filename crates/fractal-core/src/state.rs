//! Canonical exploration state and its field descriptor table.
//!
//! Every field is described once in [`FIELDS`]: external name, default,
//! one-letter URL key, value domain, whether it is persisted, and an
//! optional hook that snaps a smoothed channel when the field is restored
//! from a URL. The store, the fragment codec and the controller all read
//! this table instead of hard-coding per-field behavior.

use crate::codec;
use crate::constants::*;
use crate::error::StateError;
use crate::palette::{self, DEFAULT_PALETTE_ID};
use crate::tween::{Easing, Tween};
use fnv::FnvHashMap;
use glam::DVec2;
use std::borrow::Cow;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    CReal,
    CImaginary,
    Fractal,
    Exponent,
    Palette,
    X,
    Y,
    Zoom,
    Playing,
    Direction,
    EscapeRadius,
    Speed,
    Spacing,
    Smoothing,
    ForceHelp,
}

impl Field {
    pub const COUNT: usize = 15;

    pub const ALL: [Field; Self::COUNT] = [
        Field::CReal,
        Field::CImaginary,
        Field::Fractal,
        Field::Exponent,
        Field::Palette,
        Field::X,
        Field::Y,
        Field::Zoom,
        Field::Playing,
        Field::Direction,
        Field::EscapeRadius,
        Field::Speed,
        Field::Spacing,
        Field::Smoothing,
        Field::ForceHelp,
    ];

    #[inline]
    pub fn spec(self) -> &'static FieldSpec {
        &FIELDS[self as usize]
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    #[inline]
    pub fn short_key(self) -> char {
        self.spec().short_key
    }

    pub fn from_name(name: &str) -> Option<Field> {
        FIELDS.iter().find(|s| s.name == name).map(|s| s.field)
    }
}

/// Fractal variants in selector order; the index is what the shader sees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia,
    BurningShip,
    Mandala,
}

impl FractalKind {
    pub const ALL: [FractalKind; 4] = [
        FractalKind::Mandelbrot,
        FractalKind::Julia,
        FractalKind::BurningShip,
        FractalKind::Mandala,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: i64) -> Option<FractalKind> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(self) -> &'static str {
        match self {
            FractalKind::Mandelbrot => "Mandelbrot",
            FractalKind::Julia => "Julia",
            FractalKind::BurningShip => "Burning Ship",
            FractalKind::Mandala => "Mandala",
        }
    }

    /// Variant `step` positions away, wrapping around.
    pub fn step(self, step: i32) -> FractalKind {
        let len = Self::ALL.len() as i64;
        let next = (self.index() as i64 + step as i64).rem_euclid(len);
        Self::ALL[next as usize]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Text(Cow<'static, str>),
}

impl Value {
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            Value::Text(_) => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Number(_) => None,
            Value::Text(t) => Some(t),
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "a number",
            Value::Text(_) => "text",
        }
    }

    /// Text form used in the URL, before percent-encoding.
    pub fn encode(&self) -> String {
        match self {
            Value::Number(v) => codec::encode_number(*v),
            Value::Text(t) => t.to_string(),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(v as f64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Number(if v { 1.0 } else { 0.0 })
    }
}

impl From<&'static str> for Value {
    fn from(v: &'static str) -> Self {
        Value::Text(Cow::Borrowed(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(Cow::Owned(v))
    }
}

/// Set of values a field may hold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Domain {
    Real { min: f64, max: f64 },
    Int { min: i64, max: i64 },
    Flag,
    Sign,
    /// `[MIN_ESCAPE_RADIUS, MAX_ESCAPE_RADIUS]`, kept off exactly 1.
    EscapeRadius,
    PaletteId,
}

impl Domain {
    /// Bring a number into the domain. `None` when the domain is textual or
    /// the number is not finite.
    pub fn normalize(self, v: f64) -> Option<f64> {
        if !v.is_finite() {
            return None;
        }
        match self {
            Domain::Real { min, max } => Some(v.clamp(min, max)),
            Domain::Int { min, max } => Some((v.round() as i64).clamp(min, max) as f64),
            Domain::Flag => Some(if v != 0.0 { 1.0 } else { 0.0 }),
            Domain::Sign => Some(if v < 0.0 { -1.0 } else { 1.0 }),
            Domain::EscapeRadius => {
                let r = v.clamp(MIN_ESCAPE_RADIUS, MAX_ESCAPE_RADIUS);
                if (r - 1.0).abs() < ESCAPE_RADIUS_NUDGE {
                    Some(if r < 1.0 {
                        1.0 - ESCAPE_RADIUS_NUDGE
                    } else {
                        1.0 + ESCAPE_RADIUS_NUDGE
                    })
                } else {
                    Some(r)
                }
            }
            Domain::PaletteId => None,
        }
    }

    /// Validate a value for this domain, normalizing numbers.
    pub fn accept(self, field: &'static str, value: Value) -> Result<Value, StateError> {
        match (self, value) {
            (Domain::PaletteId, Value::Text(id)) => {
                if palette::contains(&id) {
                    Ok(Value::Text(id))
                } else {
                    Err(StateError::UnknownPalette(id.into_owned()))
                }
            }
            (Domain::PaletteId, other) | (_, other @ Value::Text(_)) => Err(StateError::WrongType {
                field,
                given: other.kind_name(),
            }),
            (domain, Value::Number(v)) => domain
                .normalize(v)
                .map(Value::Number)
                .ok_or(StateError::WrongType {
                    field,
                    given: "a non-finite number",
                }),
        }
    }

    /// Parse raw (already percent-decoded) URL text.
    pub fn parse(self, text: &str) -> Option<Value> {
        match self {
            Domain::PaletteId => {
                let id = text.trim();
                palette::contains(id).then(|| Value::Text(Cow::Owned(id.to_string())))
            }
            Domain::Int { .. } => codec::parse_int(text)
                .and_then(|v| self.normalize(v as f64))
                .map(Value::Number),
            Domain::Flag => codec::parse_flag(text).map(Value::from),
            Domain::Sign => codec::parse_sign(text).map(Value::Number),
            Domain::Real { .. } | Domain::EscapeRadius => codec::parse_number(text)
                .and_then(|v| self.normalize(v))
                .map(Value::Number),
        }
    }
}

/// Smoothed counterparts of the position and zoom fields.
#[derive(Clone, Debug)]
pub struct Smoothing {
    pub center: Tween,
    pub zoom: Tween,
}

impl Smoothing {
    pub fn new(state: &ViewState) -> Self {
        let c = state.center();
        Self {
            center: Tween::new(&[c.x, c.y]),
            zoom: Tween::new(&[state.zoom_exponent()]),
        }
    }

    /// Force both channels onto the settled values in `state`.
    pub fn snap_to(&mut self, state: &ViewState) {
        let c = state.center();
        self.center.snap(&[c.x, c.y]);
        self.zoom.snap(&[state.zoom_exponent()]);
    }

    pub fn retarget_center(&mut self, target: DVec2, duration_ms: f64, easing: Easing) {
        self.center.set_target(&[target.x, target.y], duration_ms, easing);
    }

    pub fn retarget_zoom(&mut self, exponent: f64, duration_ms: f64, easing: Easing) {
        self.zoom.set_target(&[exponent], duration_ms, easing);
    }

    /// Returns `true` while any channel is still animating.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        let center = self.center.advance(now_ms);
        let zoom = self.zoom.advance(now_ms);
        center || zoom
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        let c = self.center.channel();
        DVec2::new(c[0], c[1])
    }

    #[inline]
    pub fn zoom_exponent(&self) -> f64 {
        self.zoom.channel()[0]
    }

    #[inline]
    pub fn zoom(&self) -> f64 {
        self.zoom_exponent().exp2()
    }
}

fn snap_x(s: &mut Smoothing, v: f64) {
    s.center.snap_component(0, v);
}

fn snap_y(s: &mut Smoothing, v: f64) {
    s.center.snap_component(1, v);
}

fn snap_zoom(s: &mut Smoothing, v: f64) {
    s.zoom.snap(&[v]);
}

pub struct FieldSpec {
    pub field: Field,
    pub name: &'static str,
    pub short_key: char,
    pub default: Value,
    pub domain: Domain,
    pub persist: bool,
    pub on_restore: Option<fn(&mut Smoothing, f64)>,
}

const UNBOUNDED: Domain = Domain::Real {
    min: f64::MIN,
    max: f64::MAX,
};

pub static FIELDS: [FieldSpec; Field::COUNT] = [
    FieldSpec {
        field: Field::CReal,
        name: "c_real",
        short_key: 'R',
        default: Value::Number(0.0),
        domain: Domain::Real { min: -C_BOUND, max: C_BOUND },
        persist: true,
        on_restore: None,
    },
    FieldSpec {
        field: Field::CImaginary,
        name: "c_imaginary",
        short_key: 'I',
        default: Value::Number(0.0),
        domain: Domain::Real { min: -C_BOUND, max: C_BOUND },
        persist: true,
        on_restore: None,
    },
    FieldSpec {
        field: Field::Fractal,
        name: "fractal",
        short_key: 'F',
        default: Value::Number(0.0),
        domain: Domain::Int {
            min: 0,
            max: FractalKind::ALL.len() as i64 - 1,
        },
        persist: true,
        on_restore: None,
    },
    FieldSpec {
        field: Field::Exponent,
        name: "exponent",
        short_key: 'E',
        default: Value::Number(MIN_EXPONENT as f64),
        domain: Domain::Int {
            min: MIN_EXPONENT as i64,
            max: MAX_EXPONENT as i64,
        },
        persist: true,
        on_restore: None,
    },
    FieldSpec {
        field: Field::Palette,
        name: "palette",
        short_key: 'P',
        default: Value::Text(Cow::Borrowed(DEFAULT_PALETTE_ID)),
        domain: Domain::PaletteId,
        persist: true,
        on_restore: None,
    },
    FieldSpec {
        field: Field::X,
        name: "x",
        short_key: 'X',
        default: Value::Number(DEFAULT_CENTER_X),
        domain: UNBOUNDED,
        persist: true,
        on_restore: Some(snap_x),
    },
    FieldSpec {
        field: Field::Y,
        name: "y",
        short_key: 'Y',
        default: Value::Number(0.0),
        domain: UNBOUNDED,
        persist: true,
        on_restore: Some(snap_y),
    },
    FieldSpec {
        field: Field::Zoom,
        name: "zoom",
        short_key: 'Z',
        default: Value::Number(0.0),
        domain: Domain::Real {
            min: MIN_ZOOM_EXPONENT,
            max: MAX_ZOOM_EXPONENT,
        },
        persist: true,
        on_restore: Some(snap_zoom),
    },
    FieldSpec {
        field: Field::Playing,
        name: "playing",
        short_key: 'A',
        default: Value::Number(1.0),
        domain: Domain::Flag,
        persist: true,
        on_restore: None,
    },
    FieldSpec {
        field: Field::Direction,
        name: "direction",
        short_key: 'D',
        default: Value::Number(1.0),
        domain: Domain::Sign,
        persist: true,
        on_restore: None,
    },
    FieldSpec {
        field: Field::EscapeRadius,
        name: "escape_radius",
        short_key: 'B',
        default: Value::Number(MAX_ESCAPE_RADIUS),
        domain: Domain::EscapeRadius,
        persist: true,
        on_restore: None,
    },
    FieldSpec {
        field: Field::Speed,
        name: "speed",
        short_key: 'S',
        default: Value::Number(1.0),
        domain: Domain::Real {
            min: MIN_SPEED,
            max: MAX_SPEED,
        },
        persist: true,
        on_restore: None,
    },
    FieldSpec {
        field: Field::Spacing,
        name: "spacing",
        short_key: 'K',
        default: Value::Number(1.0),
        domain: Domain::Real {
            min: MIN_SPACING,
            max: MAX_SPACING,
        },
        persist: true,
        on_restore: None,
    },
    FieldSpec {
        field: Field::Smoothing,
        name: "smoothing",
        short_key: 'M',
        default: Value::Number(1.0),
        domain: Domain::Flag,
        persist: true,
        on_restore: None,
    },
    FieldSpec {
        field: Field::ForceHelp,
        name: "force_help",
        short_key: 'H',
        default: Value::Number(0.0),
        domain: Domain::Flag,
        persist: false,
        on_restore: None,
    },
];

/// Ordered name/value pairs applied by [`ViewState::update`].
///
/// Names are kept as text so entries coming from outside (devtools, old
/// links, scripts) go through the same validation as the controller's own.
#[derive(Clone, Debug, Default)]
pub struct Patch {
    entries: Vec<(Cow<'static, str>, Value)>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, field: Field, value: impl Into<Value>) -> Self {
        self.entries
            .push((Cow::Borrowed(field.name()), value.into()));
        self
    }

    pub fn set_named(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((Cow::Owned(name.into()), value.into()));
        self
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct UpdateReport {
    pub applied: Vec<Field>,
    pub errors: Vec<StateError>,
}

#[derive(Debug, Default)]
pub struct RestoreReport {
    pub applied: usize,
    /// Problems worth showing to the user (unknown keys, broken entries).
    pub errors: Vec<StateError>,
}

#[derive(Clone, Debug)]
pub struct ViewState {
    values: Vec<Value>,
    short_keys: FnvHashMap<char, Field>,
    dirty: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        let mut short_keys = FnvHashMap::default();
        for spec in FIELDS.iter() {
            if let Some(prev) = short_keys.insert(spec.short_key, spec.field) {
                log::error!(
                    "[state] short key {} shared by {:?} and {:?}",
                    spec.short_key,
                    prev,
                    spec.field
                );
            }
        }
        Self {
            values: FIELDS.iter().map(|s| s.default.clone()).collect(),
            short_keys,
            dirty: false,
        }
    }

    #[inline]
    pub fn get(&self, field: Field) -> &Value {
        &self.values[field as usize]
    }

    /// Numeric value of `field`; textual fields read as 0.
    #[inline]
    pub fn number(&self, field: Field) -> f64 {
        self.get(field).as_number().unwrap_or(0.0)
    }

    #[inline]
    pub fn flag(&self, field: Field) -> bool {
        self.number(field) != 0.0
    }

    pub fn field_for_short_key(&self, key: &str) -> Option<Field> {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.short_keys.get(&c).copied(),
            _ => None,
        }
    }

    // ---------------- Typed accessors ----------------

    pub fn c(&self) -> DVec2 {
        DVec2::new(
            self.number(Field::CReal),
            self.number(Field::CImaginary),
        )
    }

    pub fn fractal(&self) -> FractalKind {
        FractalKind::from_index(self.number(Field::Fractal) as i64).unwrap_or_default()
    }

    pub fn exponent(&self) -> i32 {
        self.number(Field::Exponent) as i32
    }

    pub fn palette_id(&self) -> &str {
        self.get(Field::Palette)
            .as_text()
            .unwrap_or(DEFAULT_PALETTE_ID)
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.number(Field::X), self.number(Field::Y))
    }

    pub fn zoom_exponent(&self) -> f64 {
        self.number(Field::Zoom)
    }

    pub fn playing(&self) -> bool {
        self.flag(Field::Playing)
    }

    pub fn direction(&self) -> f64 {
        self.number(Field::Direction)
    }

    pub fn escape_radius(&self) -> f64 {
        self.number(Field::EscapeRadius)
    }

    pub fn speed(&self) -> f64 {
        self.number(Field::Speed)
    }

    pub fn spacing(&self) -> f64 {
        self.number(Field::Spacing)
    }

    pub fn smoothing(&self) -> bool {
        self.flag(Field::Smoothing)
    }

    pub fn force_help(&self) -> bool {
        self.flag(Field::ForceHelp)
    }

    // ---------------- Mutation ----------------

    /// Apply every valid entry of `patch`; unknown names and invalid values
    /// are skipped and reported. Marks the state dirty when anything changed.
    pub fn update(&mut self, patch: Patch) -> UpdateReport {
        let mut report = UpdateReport::default();
        for (name, value) in patch.entries {
            let Some(field) = Field::from_name(&name) else {
                log::warn!("[state] rejected unknown field `{}`", name);
                report.errors.push(StateError::UnknownField(name.into_owned()));
                continue;
            };
            let spec = field.spec();
            match spec.domain.accept(spec.name, value) {
                Ok(v) => {
                    self.values[field as usize] = v;
                    report.applied.push(field);
                }
                Err(e) => {
                    log::warn!("[state] rejected {}: {}", spec.name, e);
                    report.errors.push(e);
                }
            }
        }
        if !report.applied.is_empty() {
            self.dirty = true;
        }
        report
    }

    /// Restore every field to its default.
    pub fn reset(&mut self) {
        for spec in FIELDS.iter() {
            self.values[spec.field as usize] = spec.default.clone();
        }
        self.dirty = true;
    }

    /// Returns whether anything changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    // ---------------- URL fragment ----------------

    /// `K=value_K=value...` for every persisted field, without a leading `#`.
    pub fn encode_fragment(&self) -> String {
        let mut out = String::new();
        for spec in FIELDS.iter().filter(|s| s.persist) {
            if !out.is_empty() {
                out.push(FRAGMENT_DELIMITER);
            }
            out.push(spec.short_key);
            out.push('=');
            out.push_str(&urlencoding::encode(&self.get(spec.field).encode()));
        }
        out
    }

    /// Read fields out of a URL fragment (leading `#` optional).
    ///
    /// Restored position/zoom fields also snap their smoothed channel so the
    /// view does not animate in from the previous value.
    pub fn restore(&mut self, fragment: &str, smoothing: &mut Smoothing) -> RestoreReport {
        let mut report = RestoreReport::default();
        let body = fragment.trim().trim_start_matches('#');
        if body.is_empty() {
            return report;
        }
        for entry in body.split(FRAGMENT_DELIMITER) {
            if entry.is_empty() {
                continue;
            }
            let Some((key, raw)) = entry.split_once('=') else {
                log::warn!("[state] malformed URL entry `{}`", entry);
                report.errors.push(StateError::MalformedEntry(entry.to_string()));
                continue;
            };
            let Some(field) = self.field_for_short_key(key) else {
                log::warn!("[state] unknown short key `{}`", key);
                report.errors.push(StateError::UnknownShortKey(key.to_string()));
                continue;
            };
            let spec = field.spec();
            let text = match urlencoding::decode(raw) {
                Ok(t) => t,
                Err(_) => {
                    log::debug!("[state] {}", StateError::Decode { field: spec.name });
                    continue;
                }
            };
            let Some(value) = spec.domain.parse(&text) else {
                log::debug!("[state] dropped unparseable {}={}", spec.name, text);
                continue;
            };
            if let (Some(hook), Some(v)) = (spec.on_restore, value.as_number()) {
                hook(smoothing, v);
            }
            self.values[field as usize] = value;
            report.applied += 1;
        }
        report
    }
}
