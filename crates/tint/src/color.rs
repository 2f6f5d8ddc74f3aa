//! The immutable color value type.
//!
//! A [`Color`] is a model tag, a channel array, and an alpha value. Nothing
//! mutates in place: every conversion, accessor write, and derived operation
//! builds a new value, and every construction path funnels through one
//! assembly step that clamps alpha into [0, 1] and runs the registered
//! channel limiters.

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use tint_convert::{conversion, keywords, Channels, Model};

use crate::channel::{self, Channel};
use crate::error::{ColorError, Result};
use crate::input::ColorInput;

/// Model names accepted as an explicit-model argument but treated as "no
/// explicit model": keyword resolves through the string codec, gray has its
/// own channel accessor, and hex is a formatting concern.
const SKIPPED_MODELS: [&str; 3] = ["keyword", "gray", "hex"];

/// WCAG contrast minimums.
const MIN_AA: f64 = 4.5;
const MIN_AAA: f64 = 7.0;

/// An immutable color: a model tag, channel values, and alpha.
///
/// # Example
///
/// ```
/// use tint::Color;
///
/// let color = Color::new("rgb(10, 30, 25)").unwrap();
/// assert_eq!(color.hex(), "#0A1E19");
/// assert_eq!(color.to_hsl().round(0).array(), vec![165.0, 50.0, 8.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    model: Model,
    channels: Channels,
    alpha: f64,
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Color {
            model: Model::Rgb,
            channels: Channels::zeroed(3),
            alpha: 1.0,
        }
    }
}

// ============================================================================
// Construction
// ============================================================================

impl Color {
    /// Construct from any accepted input shape.
    ///
    /// ```
    /// use tint::Color;
    ///
    /// assert_eq!(
    ///     Color::new(0xff0000_u32).unwrap(),
    ///     Color::new("red").unwrap(),
    /// );
    /// ```
    pub fn new(input: impl Into<ColorInput>) -> Result<Color> {
        Color::construct(input.into(), None)
    }

    /// Construct with an explicit model name for value-list input.
    ///
    /// Empty and skip-listed names (`keyword`, `gray`, `hex`) mean "no
    /// explicit model" and fall back to rgb; any other unknown name is an
    /// error, whatever the input shape.
    pub fn new_with_model(input: impl Into<ColorInput>, model: &str) -> Result<Color> {
        let model = Color::resolve_model(model)?;

        Color::construct(input.into(), model)
    }

    /// Parse a CSS color string.
    pub fn parse(text: &str) -> Result<Color> {
        Color::construct(ColorInput::Text(text.to_owned()), None)
    }

    /// Construct from channel values in model order.
    ///
    /// Missing or NaN entries default to 0; the entry just past the model's
    /// channel count is taken as alpha when present.
    pub fn from_model(model: Model, values: &[f64]) -> Color {
        let count = model.channels();
        let mut channels = Channels::zeroed(count);

        for (index, slot) in channels.iter_mut().enumerate() {
            let value = values.get(index).copied().unwrap_or(0.0);
            *slot = if value.is_nan() { 0.0 } else { value };
        }

        let alpha = match values.get(count) {
            Some(value) if !value.is_nan() => *value,
            _ => 1.0,
        };

        Color::assemble(model, channels, alpha)
    }

    /// Construct from a packed 24-bit RGB integer.
    pub fn from_rgb_number(number: u32) -> Color {
        let number = number & 0xffffff;

        Color::from_model(
            Model::Rgb,
            &[
                f64::from((number >> 16) & 0xff),
                f64::from((number >> 8) & 0xff),
                f64::from(number & 0xff),
            ],
        )
    }

    fn construct(input: ColorInput, model: Option<Model>) -> Result<Color> {
        match input {
            ColorInput::None => Ok(Color::default()),
            ColorInput::Color(color) => Ok(color),
            ColorInput::Text(text) => match tint_string::parse(&text) {
                Some(parsed) => Ok(Color::assemble(
                    parsed.model,
                    Channels::new(&parsed.channels),
                    parsed.alpha,
                )),
                None => Err(ColorError::UnparseableString(text)),
            },
            ColorInput::Values(values) => {
                Ok(Color::from_model(model.unwrap_or(Model::Rgb), &values))
            }
            ColorInput::Number(number) => Ok(Color::from_rgb_number(number)),
            ColorInput::Map(pairs) => Color::from_pairs(&pairs),
        }
    }

    /// The channel-map branch: infer the model from the sorted key set.
    fn from_pairs(pairs: &[(String, f64)]) -> Result<Color> {
        let mut alpha = 1.0;
        let mut keys: Vec<&str> = Vec::with_capacity(pairs.len());

        for (key, value) in pairs {
            if key == "alpha" {
                // A present-but-NaN alpha reads as 0 here, unlike the
                // value-list branch's default of 1.
                alpha = if value.is_nan() { 0.0 } else { *value };
            } else {
                keys.push(key.as_str());
            }
        }

        keys.sort_unstable();
        let signature = keys.concat();

        let Some(model) = Model::from_signature(&signature) else {
            return Err(ColorError::UnparseableMap(serialize_pairs(pairs)));
        };

        let mut channels = Channels::zeroed(model.channels());

        for (slot, label) in channels.iter_mut().zip(model.labels()) {
            let value = pairs
                .iter()
                .find(|(key, _)| key == label)
                .map_or(0.0, |(_, value)| *value);
            *slot = if value.is_nan() { 0.0 } else { value };
        }

        Ok(Color::assemble(model, channels, alpha))
    }

    /// Final assembly: run the registered channel limiters in index order,
    /// then clamp alpha into [0, 1].
    fn assemble(model: Model, mut channels: Channels, alpha: f64) -> Color {
        for (index, value) in channels.iter_mut().enumerate() {
            if let Some(rule) = channel::limiter(model, index) {
                *value = rule.apply(*value);
            }
        }

        let alpha = if alpha.is_nan() {
            0.0
        } else {
            alpha.clamp(0.0, 1.0)
        };

        Color {
            model,
            channels,
            alpha,
        }
    }

    fn resolve_model(name: &str) -> Result<Option<Model>> {
        if name.trim().is_empty() || SKIPPED_MODELS.contains(&name) {
            return Ok(None);
        }

        match name.parse::<Model>() {
            Ok(model) => Ok(Some(model)),
            Err(unknown) => Err(ColorError::UnknownModel(unknown.0)),
        }
    }
}

// ============================================================================
// Static per-model constructors
// ============================================================================

impl Color {
    /// An rgb color.
    pub fn rgb(r: f64, g: f64, b: f64) -> Color {
        Color::from_model(Model::Rgb, &[r, g, b])
    }

    /// An rgb color with alpha.
    pub fn rgba(r: f64, g: f64, b: f64, alpha: f64) -> Color {
        Color::from_model(Model::Rgb, &[r, g, b, alpha])
    }

    /// An hsl color.
    pub fn hsl(h: f64, s: f64, l: f64) -> Color {
        Color::from_model(Model::Hsl, &[h, s, l])
    }

    /// An hsl color with alpha.
    pub fn hsla(h: f64, s: f64, l: f64, alpha: f64) -> Color {
        Color::from_model(Model::Hsl, &[h, s, l, alpha])
    }

    /// An hsv color.
    pub fn hsv(h: f64, s: f64, v: f64) -> Color {
        Color::from_model(Model::Hsv, &[h, s, v])
    }

    /// An hsv color with alpha.
    pub fn hsva(h: f64, s: f64, v: f64, alpha: f64) -> Color {
        Color::from_model(Model::Hsv, &[h, s, v, alpha])
    }

    /// An hwb color.
    pub fn hwb(h: f64, w: f64, b: f64) -> Color {
        Color::from_model(Model::Hwb, &[h, w, b])
    }

    /// An hwb color with alpha.
    pub fn hwba(h: f64, w: f64, b: f64, alpha: f64) -> Color {
        Color::from_model(Model::Hwb, &[h, w, b, alpha])
    }

    /// A cmyk color.
    pub fn cmyk(c: f64, m: f64, y: f64, k: f64) -> Color {
        Color::from_model(Model::Cmyk, &[c, m, y, k])
    }

    /// An XYZ color.
    pub fn xyz(x: f64, y: f64, z: f64) -> Color {
        Color::from_model(Model::Xyz, &[x, y, z])
    }

    /// A Lab color.
    pub fn lab(l: f64, a: f64, b: f64) -> Color {
        Color::from_model(Model::Lab, &[l, a, b])
    }

    /// An LCh color.
    pub fn lch(l: f64, c: f64, h: f64) -> Color {
        Color::from_model(Model::Lch, &[l, c, h])
    }

    /// An HCG color.
    pub fn hcg(h: f64, c: f64, g: f64) -> Color {
        Color::from_model(Model::Hcg, &[h, c, g])
    }

    /// An AppleRGB color with 16-bit channels.
    pub fn apple(r16: f64, g16: f64, b16: f64) -> Color {
        Color::from_model(Model::Apple, &[r16, g16, b16])
    }

    /// A basic ANSI palette color.
    pub fn ansi16(code: f64) -> Color {
        Color::from_model(Model::Ansi16, &[code])
    }

    /// An xterm 256-palette color.
    pub fn ansi256(code: f64) -> Color {
        Color::from_model(Model::Ansi256, &[code])
    }
}

// ============================================================================
// Representation
// ============================================================================

impl Color {
    /// The model this value is expressed in.
    #[inline]
    pub fn model(&self) -> Model {
        self.model
    }

    /// The channel values in model order, alpha excluded.
    #[inline]
    pub fn channels(&self) -> &[f64] {
        &self.channels
    }

    /// The alpha value in [0, 1].
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Replace the alpha value, clamped into [0, 1].
    pub fn with_alpha(&self, alpha: f64) -> Color {
        Color::assemble(self.model, self.channels, alpha)
    }

    /// Channels with alpha appended only when it is not exactly 1.
    pub fn array(&self) -> Vec<f64> {
        let mut values = self.channels.to_vec();

        if self.alpha != 1.0 {
            values.push(self.alpha);
        }

        values
    }

    /// Channel label → value map, with an `alpha` key only when alpha ≠ 1.
    pub fn object(&self) -> BTreeMap<&'static str, f64> {
        let mut map: BTreeMap<&'static str, f64> = self
            .model
            .labels()
            .iter()
            .zip(self.channels.iter())
            .map(|(label, value)| (*label, *value))
            .collect();

        if self.alpha != 1.0 {
            map.insert("alpha", self.alpha);
        }

        map
    }

    /// rgb channels scaled into [0, 1], alpha appended when ≠ 1.
    pub fn unit_array(&self) -> Vec<f64> {
        let rgb = self.to_rgb();
        let mut values: Vec<f64> = rgb.channels.iter().map(|value| value / 255.0).collect();

        if self.alpha != 1.0 {
            values.push(self.alpha);
        }

        values
    }

    /// rgb label → unit value map, with `alpha` when ≠ 1.
    pub fn unit_object(&self) -> BTreeMap<&'static str, f64> {
        let mut map = self.to_rgb().object();

        for value in map.values_mut() {
            *value /= 255.0;
        }

        if self.alpha != 1.0 {
            map.insert("alpha", self.alpha);
        }

        map
    }

    /// Round every channel to `places` decimal places (default 0), alpha
    /// untouched.
    pub fn round(&self, places: impl Into<Option<i32>>) -> Color {
        let places = places.into().unwrap_or(0).max(0);
        let rounded = self.channels.map(|value| round_to(value, places));

        Color::assemble(self.model, rounded, self.alpha)
    }
}

// ============================================================================
// Conversion methods
// ============================================================================

impl Color {
    /// View this color in another model.
    ///
    /// The same model yields a structural copy; anything else goes through
    /// the composed conversion route at full precision, carrying alpha
    /// along.
    pub fn to_model(&self, model: Model) -> Color {
        if self.model == model {
            return self.clone();
        }

        match conversion(self.model, model) {
            Some(route) => Color::assemble(model, route.apply_raw(&self.channels), self.alpha),
            // The model graph is strongly connected (asserted in
            // tint-convert's route tests).
            None => unreachable!("no conversion route from {} to {}", self.model, model),
        }
    }

    /// This color in rgb.
    pub fn to_rgb(&self) -> Color {
        self.to_model(Model::Rgb)
    }

    /// This color in hsl.
    pub fn to_hsl(&self) -> Color {
        self.to_model(Model::Hsl)
    }

    /// This color in hsv.
    pub fn to_hsv(&self) -> Color {
        self.to_model(Model::Hsv)
    }

    /// This color in hwb.
    pub fn to_hwb(&self) -> Color {
        self.to_model(Model::Hwb)
    }

    /// This color in cmyk.
    pub fn to_cmyk(&self) -> Color {
        self.to_model(Model::Cmyk)
    }

    /// This color in XYZ.
    pub fn to_xyz(&self) -> Color {
        self.to_model(Model::Xyz)
    }

    /// This color in Lab.
    pub fn to_lab(&self) -> Color {
        self.to_model(Model::Lab)
    }

    /// This color in LCh.
    pub fn to_lch(&self) -> Color {
        self.to_model(Model::Lch)
    }

    /// The nearest basic ANSI palette code.
    pub fn to_ansi16(&self) -> Color {
        self.to_model(Model::Ansi16)
    }

    /// The nearest xterm 256-palette code.
    pub fn to_ansi256(&self) -> Color {
        self.to_model(Model::Ansi256)
    }

    /// This color in HCG.
    pub fn to_hcg(&self) -> Color {
        self.to_model(Model::Hcg)
    }

    /// This color in AppleRGB.
    pub fn to_apple(&self) -> Color {
        self.to_model(Model::Apple)
    }
}

// ============================================================================
// Formatting
// ============================================================================

impl Color {
    /// CSS string form, channels rounded to `places` decimal places
    /// (default 1, clamped into [0, 20]).
    ///
    /// rgb, hsl, and hwb colors format directly; every other model goes
    /// through rgb first.
    pub fn string(&self, places: impl Into<Option<i32>>) -> String {
        let places = places.into().unwrap_or(1).clamp(0, 20);

        let color = match self.model {
            Model::Rgb | Model::Hsl | Model::Hwb => self.round(places),
            _ => self.to_rgb().round(places),
        };
        let args = color.array();

        match color.model {
            Model::Rgb => tint_string::to_rgb(&args),
            Model::Hsl => tint_string::to_hsl(&args),
            Model::Hwb => tint_string::to_hwb(&args),
            _ => unreachable!(),
        }
    }

    /// CSS `rgb(r%, g%, b%)` form, rounded to `places` (default 1).
    pub fn percent_string(&self, places: impl Into<Option<i32>>) -> String {
        let places = places.into().unwrap_or(1).clamp(0, 20);
        let color = self.to_rgb().round(places);

        tint_string::to_rgb_percent(&color.array())
    }

    /// Uppercase hex form, alpha never included.
    pub fn hex(&self) -> String {
        tint_string::to_hex(self.to_rgb().round(0).channels())
    }

    /// Construct a new color by parsing `value`; the model comes from
    /// whatever `value` parses as, not from this color.
    pub fn with_hex(&self, value: &str) -> Result<Color> {
        Color::parse(value)
    }

    /// The CSS keyword nearest this color.
    pub fn keyword(&self) -> &'static str {
        let keyword = self.to_model(Model::Keyword);

        keywords::name_at(keyword.channels[0] as usize).unwrap_or("")
    }

    /// Construct a new color by parsing `value`; the model comes from
    /// whatever `value` parses as, not from this color.
    pub fn with_keyword(&self, value: &str) -> Result<Color> {
        Color::parse(value)
    }

    /// Pack the rounded rgb channels into a 24-bit integer.
    pub fn rgb_number(&self) -> u32 {
        let rgb = self.to_rgb();
        let c = rgb.channels();

        (((c[0].round() as u32) & 0xff) << 16)
            | (((c[1].round() as u32) & 0xff) << 8)
            | ((c[2].round() as u32) & 0xff)
    }
}

// ============================================================================
// WCAG measures
// ============================================================================

impl Color {
    fn raw_luminosity(&self) -> f64 {
        // http://www.w3.org/TR/WCAG20/#relativeluminancedef
        let rgb = self.to_rgb();
        let lum: Vec<f64> = rgb
            .channels
            .iter()
            .map(|channel| {
                let chan = channel / 255.0;

                if chan <= 0.03928 {
                    chan / 12.92
                } else {
                    ((chan + 0.055) / 1.055).powf(2.4)
                }
            })
            .collect();

        0.2126 * lum[0] + 0.7152 * lum[1] + 0.0722 * lum[2]
    }

    /// WCAG relative luminance, rounded to `places` (default 6).
    pub fn luminosity(&self, places: impl Into<Option<i32>>) -> f64 {
        round_to(self.raw_luminosity(), places.into().unwrap_or(6))
    }

    /// WCAG contrast ratio against another color, rounded to `places`
    /// (default 6).
    ///
    /// ```
    /// use tint::Color;
    ///
    /// let white = Color::new("white").unwrap();
    /// let black = Color::new("black").unwrap();
    /// assert_eq!(white.contrast(&black, None), 21.0);
    /// ```
    pub fn contrast(&self, other: &Color, places: impl Into<Option<i32>>) -> f64 {
        // http://www.w3.org/TR/WCAG20/#contrast-ratiodef
        let lum1 = self.raw_luminosity();
        let lum2 = other.raw_luminosity();

        let ratio = if lum1 > lum2 {
            (lum1 + 0.05) / (lum2 + 0.05)
        } else {
            (lum2 + 0.05) / (lum1 + 0.05)
        };

        round_to(ratio, places.into().unwrap_or(6))
    }

    /// WCAG rating: `"AAA"` at contrast ≥ 7, `"AA"` at ≥ 4.5, else `""`.
    pub fn level(&self, other: &Color) -> &'static str {
        let lum1 = self.raw_luminosity();
        let lum2 = other.raw_luminosity();

        let ratio = if lum1 > lum2 {
            (lum1 + 0.05) / (lum2 + 0.05)
        } else {
            (lum2 + 0.05) / (lum1 + 0.05)
        };

        if ratio >= MIN_AAA {
            "AAA"
        } else if ratio >= MIN_AA {
            "AA"
        } else {
            ""
        }
    }

    /// YIQ luma below 128.
    pub fn is_dark(&self) -> bool {
        // YIQ equation from http://24ways.org/2010/calculating-color-contrast
        let rgb = self.to_rgb();
        let c = rgb.channels();
        let yiq = (c[0] * 299.0 + c[1] * 587.0 + c[2] * 114.0) / 1000.0;

        yiq < 128.0
    }

    /// The exact complement of [`Color::is_dark`].
    pub fn is_light(&self) -> bool {
        !self.is_dark()
    }
}

// ============================================================================
// Derived colors
// ============================================================================

impl Color {
    /// 255 minus each rgb channel, alpha preserved.
    pub fn negate(&self) -> Color {
        let rgb = self.to_rgb();
        let channels = rgb.channels.map(|value| 255.0 - value);

        Color::assemble(Model::Rgb, channels, self.alpha)
    }

    /// Scale one channel of a model view by a signed ratio.
    fn scale_channel(&self, model: Model, index: usize, ratio: f64) -> Color {
        let base = self.to_model(model);
        let mut channels = base.channels;
        channels[index] += channels[index] * ratio;

        Color::assemble(model, channels, self.alpha)
    }

    /// Increase hsl lightness by `lightness · ratio`.
    ///
    /// ```
    /// use tint::Color;
    ///
    /// assert_eq!(Color::hsl(100.0, 50.0, 60.0).lighten(0.5).lightness(), 90.0);
    /// ```
    pub fn lighten(&self, ratio: f64) -> Color {
        self.scale_channel(Model::Hsl, 2, ratio)
    }

    /// Decrease hsl lightness by `lightness · ratio`.
    pub fn darken(&self, ratio: f64) -> Color {
        self.scale_channel(Model::Hsl, 2, -ratio)
    }

    /// Increase hsl saturation by `saturation · ratio`.
    pub fn saturate(&self, ratio: f64) -> Color {
        self.scale_channel(Model::Hsl, 1, ratio)
    }

    /// Decrease hsl saturation by `saturation · ratio`.
    pub fn desaturate(&self, ratio: f64) -> Color {
        self.scale_channel(Model::Hsl, 1, -ratio)
    }

    /// Increase hwb whiteness by `whiteness · ratio`.
    pub fn whiten(&self, ratio: f64) -> Color {
        self.scale_channel(Model::Hwb, 1, ratio)
    }

    /// Increase hwb blackness by `blackness · ratio`.
    pub fn blacken(&self, ratio: f64) -> Color {
        self.scale_channel(Model::Hwb, 2, ratio)
    }

    /// Luma-weighted gray replicated into all rgb channels.
    ///
    /// Alpha resets to opaque, unlike the other derived operations.
    pub fn grayscale(&self) -> Color {
        // http://en.wikipedia.org/wiki/Grayscale#Converting_color_to_grayscale
        let rgb = self.to_rgb();
        let c = rgb.channels();
        let value = c[0] * 0.3 + c[1] * 0.59 + c[2] * 0.11;

        Color::rgb(value, value, value)
    }

    /// Reduce alpha by `alpha · ratio`.
    pub fn fade(&self, ratio: f64) -> Color {
        self.with_alpha(self.alpha - self.alpha * ratio)
    }

    /// Increase alpha by `alpha · ratio`.
    pub fn opaquer(&self, ratio: f64) -> Color {
        self.with_alpha(self.alpha + self.alpha * ratio)
    }

    /// Rotate the hue by `degrees`, wrapping into [0, 360).
    pub fn rotate(&self, degrees: f64) -> Color {
        let hsl = self.to_hsl();
        let mut channels = hsl.channels;
        let angle = (channels[0] + degrees) % 360.0;
        channels[0] = if angle < 0.0 { 360.0 + angle } else { angle };

        Color::assemble(Model::Hsl, channels, self.alpha)
    }

    /// Mix another color into this one using the SASS algorithm.
    ///
    /// The receiver plays the base (`color2`) role and `other` the mixed-in
    /// (`color1`) role; `weight` (default 0.5) is the share of `other`, so
    /// weight 0 returns the receiver's color and weight 1 returns `other`'s.
    ///
    /// ```
    /// use tint::Color;
    ///
    /// let red = Color::new("#f00").unwrap();
    /// let blue = Color::new("#00f").unwrap();
    /// assert_eq!(red.mix(&blue, None).hex(), "#800080");
    /// ```
    pub fn mix(&self, other: &Color, weight: impl Into<Option<f64>>) -> Color {
        // Ported from the sass implementation:
        // https://github.com/sass/libsass/blob/0e6b4a2850092356aa3ece07c6b249f0221caced/functions.cpp#L209
        let color1 = other.to_rgb();
        let color2 = self.to_rgb();
        let p = weight.into().unwrap_or(0.5);

        let w = 2.0 * p - 1.0;
        let a = color1.alpha - color2.alpha;

        let w1 = ((if w * a == -1.0 { w } else { (w + a) / (1.0 + w * a) }) + 1.0) / 2.0;
        let w2 = 1.0 - w1;

        Color::rgba(
            w1 * color1.channels[0] + w2 * color2.channels[0],
            w1 * color1.channels[1] + w2 * color2.channels[1],
            w1 * color1.channels[2] + w2 * color2.channels[2],
            color1.alpha * p + color2.alpha * (1.0 - p),
        )
    }
}

// ============================================================================
// Channel accessors
// ============================================================================

impl Color {
    /// Read a named channel through its bound model.
    pub fn get(&self, channel: Channel) -> f64 {
        let def = channel.def();
        let value = self.to_model(def.model).channels[def.index];

        def.rule.map_or(value, |rule| rule.apply(value))
    }

    /// Replace a named channel through its bound model, returning a new
    /// color tagged with that model. Alpha carries over.
    pub fn with(&self, channel: Channel, value: f64) -> Color {
        let def = channel.def();
        let value = def.rule.map_or(value, |rule| rule.apply(value));

        let base = self.to_model(def.model);
        let mut channels = base.channels;
        channels[def.index] = value;

        Color::assemble(def.model, channels, self.alpha)
    }
}

macro_rules! channel_accessors {
    ($(($getter:ident, $setter:ident, $channel:ident, $doc:literal)),* $(,)?) => {
        impl Color {
            $(
                #[doc = concat!("Read ", $doc, ".")]
                pub fn $getter(&self) -> f64 {
                    self.get(Channel::$channel)
                }

                #[doc = concat!("Replace ", $doc, ", returning a new color.")]
                pub fn $setter(&self, value: f64) -> Color {
                    self.with(Channel::$channel, value)
                }
            )*
        }
    };
}

channel_accessors!(
    (red, with_red, Red, "the rgb red channel"),
    (green, with_green, Green, "the rgb green channel"),
    (blue, with_blue, Blue, "the rgb blue channel"),
    (hue, with_hue, Hue, "the hue in degrees"),
    (saturationl, with_saturationl, SaturationL, "the hsl saturation"),
    (lightness, with_lightness, Lightness, "the hsl lightness"),
    (saturationv, with_saturationv, SaturationV, "the hsv saturation"),
    (value, with_value, Value, "the hsv value"),
    (white, with_white, White, "the hwb whiteness"),
    (wblack, with_wblack, WBlack, "the hwb blackness"),
    (cyan, with_cyan, Cyan, "the cmyk cyan channel"),
    (magenta, with_magenta, Magenta, "the cmyk magenta channel"),
    (yellow, with_yellow, Yellow, "the cmyk yellow channel"),
    (black, with_black, Black, "the cmyk key channel"),
    (chroma, with_chroma, Chroma, "the hcg chroma"),
    (gray, with_gray, Gray, "the hcg gray level"),
    (l, with_l, L, "the Lab lightness"),
    (a, with_a, A, "the Lab a channel"),
    (b, with_b, B, "the Lab b channel"),
    (x, with_x, X, "the XYZ x channel"),
    (y, with_y, Y, "the XYZ y channel"),
    (z, with_z, Z, "the XYZ z channel"),
);

// ============================================================================
// Trait impls
// ============================================================================

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string(None))
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Color> {
        Color::parse(s)
    }
}

/// Decimal rounding, half away from zero.
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);

    (value * factor).round() / factor
}

/// JSON-ish rendering of map input for error messages.
fn serialize_pairs(pairs: &[(String, f64)]) -> String {
    let mut out = String::from("{");

    for (i, (key, value)) in pairs.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }

        let _ = write!(out, "\"{key}\":{value}");
    }

    out.push('}');
    out
}

#[cfg(feature = "serde")]
mod serde_support {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use tint_convert::Model;

    use super::Color;

    #[derive(Serialize, Deserialize)]
    struct ColorRepr {
        model: Model,
        channels: Vec<f64>,
        alpha: f64,
    }

    impl Serialize for Color {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            ColorRepr {
                model: self.model(),
                channels: self.channels().to_vec(),
                alpha: self.alpha(),
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Color {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let repr = ColorRepr::deserialize(deserializer)?;
            let mut values = repr.channels;
            values.resize(repr.model.channels(), 0.0);
            values.push(repr.alpha);

            // Assembly re-applies the limiters, so hostile input stays in
            // range.
            Ok(Color::from_model(repr.model, &values))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_opaque_black() {
        let color = Color::default();
        assert_eq!(color.model(), Model::Rgb);
        assert_eq!(color.channels(), &[0.0, 0.0, 0.0]);
        assert_eq!(color.alpha(), 1.0);
    }

    #[test]
    fn assemble_runs_limiters() {
        let color = Color::rgb(400.0, -10.0, 128.0);
        assert_eq!(color.channels(), &[255.0, 0.0, 128.0]);

        let color = Color::hsl(400.0, 120.0, -5.0);
        assert_eq!(color.channels(), &[40.0, 100.0, 0.0]);
    }

    #[test]
    fn lab_a_b_are_unbounded() {
        let color = Color::lab(50.0, -300.0, 300.0);
        assert_eq!(color.channels(), &[50.0, -300.0, 300.0]);
    }

    #[test]
    fn values_branch_defaults() {
        let color = Color::from_model(Model::Rgb, &[10.0]);
        assert_eq!(color.channels(), &[10.0, 0.0, 0.0]);
        assert_eq!(color.alpha(), 1.0);

        let color = Color::from_model(Model::Rgb, &[10.0, f64::NAN, 30.0, f64::NAN]);
        assert_eq!(color.channels(), &[10.0, 0.0, 30.0]);
        assert_eq!(color.alpha(), 1.0);
    }

    #[test]
    fn map_branch_nan_alpha_reads_as_zero() {
        let color = Color::new(vec![
            ("r".to_owned(), 10.0),
            ("g".to_owned(), 30.0),
            ("b".to_owned(), 25.0),
            ("alpha".to_owned(), f64::NAN),
        ])
        .unwrap();

        assert_eq!(color.alpha(), 0.0);
    }

    #[test]
    fn map_branch_rejects_unknown_shapes() {
        let err = Color::new(ColorInput::Map(vec![])).unwrap_err();
        assert_eq!(err, ColorError::UnparseableMap("{}".to_owned()));

        let err = Color::new([("q", 1.0)]).unwrap_err();
        assert!(matches!(err, ColorError::UnparseableMap(_)));
    }

    #[test]
    fn model_resolution() {
        assert!(Color::new_with_model([10.0, 30.0, 25.0], "mmm").is_err());

        for skip in SKIPPED_MODELS {
            let color = Color::new_with_model([10.0, 30.0, 25.0], skip).unwrap();
            assert_eq!(color.model(), Model::Rgb);
        }

        let color = Color::new_with_model([260.0, 10.0, 10.0], "hsl").unwrap();
        assert_eq!(color.model(), Model::Hsl);
    }

    #[test]
    fn round_places() {
        let color = Color::hsl(165.2345, 50.55, 7.89).round(1);
        assert_eq!(color.channels(), &[165.2, 50.6, 7.9]);

        let color = Color::hsl(165.2345, 50.55, 7.89).round(-3);
        assert_eq!(color.channels(), &[165.0, 51.0, 8.0]);
    }

    #[test]
    fn serialize_pairs_renders_json_ish() {
        let pairs = vec![("r".to_owned(), 10.0), ("g".to_owned(), 0.5)];
        assert_eq!(serialize_pairs(&pairs), "{\"r\":10,\"g\":0.5}");
    }
}
