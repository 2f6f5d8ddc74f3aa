//! # tint-string
//!
//! CSS color string parsing and formatting.
//!
//! [`parse`] recognizes hex notation (`#rgb`, `#rgba`, `#rrggbb`,
//! `#rrggbbaa`), `rgb()`/`rgba()` with integer or percentage channels,
//! `hsl()`/`hsla()`, `hwb()` with an optional trailing alpha, and bare CSS
//! keyword names (`transparent` included). Formatting goes the other way for
//! hex, rgb, rgb-percent, hsl, hwb, and keyword.
//!
//! Out-of-range channel values are clamped while parsing, never rejected;
//! only text that matches no grammar at all yields `None`.
//!
//! # Example
//!
//! ```
//! use tint_string::{parse, to_hex};
//! use tint_convert::Model;
//!
//! let parsed = parse("rgba(10, 30, 25, 0.4)").unwrap();
//! assert_eq!(parsed.model, Model::Rgb);
//! assert_eq!(parsed.channels, [10.0, 30.0, 25.0]);
//! assert_eq!(parsed.alpha, 0.4);
//!
//! assert_eq!(to_hex(&[10.0, 30.0, 25.0]), "#0A1E19");
//! ```
//!
//! # Dependencies
//!
//! - [`regex`] - grammar productions, compiled once into `LazyLock` statics
//! - [`tracing`] - trace event on parse misses
//! - `tint-convert` - the [`Model`] tags and the shared CSS keyword table

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;
use tint_convert::{keywords, Model};

/// A successfully parsed color string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parsed {
    /// The model the notation is expressed in (rgb, hsl, or hwb).
    pub model: Model,
    /// Channel values in model order.
    pub channels: [f64; 3],
    /// Alpha in [0, 1]; 1 when the notation carries none.
    pub alpha: f64,
}

static HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#([a-f0-9]{6})([a-f0-9]{2})?$").unwrap());
static HEX_ABBR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#([a-f0-9]{3,4})$").unwrap());
static RGB_FN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*([+-]?\d+)\s*,\s*([+-]?\d+)\s*,\s*([+-]?\d+)\s*(?:,\s*([+-]?[\d.]+)\s*)?\)$",
    )
    .unwrap()
});
static RGB_PERCENT_FN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*([+-]?[\d.]+)%\s*,\s*([+-]?[\d.]+)%\s*,\s*([+-]?[\d.]+)%\s*(?:,\s*([+-]?[\d.]+)\s*)?\)$",
    )
    .unwrap()
});
static HSL_FN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^hsla?\(\s*([+-]?(?:\d*\.)?\d+)(?:deg)?\s*,\s*([+-]?[\d.]+)%\s*,\s*([+-]?[\d.]+)%\s*(?:,\s*([+-]?[\d.]+)\s*)?\)$",
    )
    .unwrap()
});
static HWB_FN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^hwb\(\s*([+-]?\d*\.?\d+)(?:deg)?\s*,\s*([+-]?[\d.]+)%\s*,\s*([+-]?[\d.]+)%\s*(?:,\s*([+-]?[\d.]+)\s*)?\)$",
    )
    .unwrap()
});
static KEYWORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\D+)").unwrap());

/// Parse a color string into model-tagged channels.
///
/// Dispatches on the notation prefix: `hsl…` and `hwb…` go to their own
/// grammars, everything else is tried as an RGB notation (hex, functional,
/// percentage, keyword). Returns `None` for unrecognized text.
pub fn parse(string: &str) -> Option<Parsed> {
    let prefix = string.get(..3).map(str::to_lowercase);

    let parsed = match prefix.as_deref() {
        Some("hsl") => parse_hsl(string),
        Some("hwb") => parse_hwb(string),
        _ => parse_rgb(string),
    };

    if parsed.is_none() {
        tracing::trace!(input = string, "color string matched no grammar");
    }

    parsed
}

/// Parse any RGB notation: hex, `rgb()`/`rgba()`, percentages, or keyword.
pub fn parse_rgb(string: &str) -> Option<Parsed> {
    if string.is_empty() {
        return None;
    }

    let mut rgb = [0.0_f64; 3];
    let mut alpha = 1.0_f64;

    if let Some(caps) = HEX.captures(string) {
        let hex = &caps[1];

        for (i, channel) in rgb.iter_mut().enumerate() {
            *channel = f64::from(u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok()?);
        }

        if let Some(hex_alpha) = caps.get(2) {
            let a = f64::from(u8::from_str_radix(hex_alpha.as_str(), 16).ok()?);
            alpha = (a / 255.0 * 100.0).round() / 100.0;
        }
    } else if let Some(caps) = HEX_ABBR.captures(string) {
        let digits: Vec<char> = caps[1].chars().collect();

        for (i, channel) in rgb.iter_mut().enumerate() {
            let doubled: String = [digits[i], digits[i]].iter().collect();
            *channel = f64::from(u8::from_str_radix(&doubled, 16).ok()?);
        }

        if let Some(&digit) = digits.get(3) {
            let doubled: String = [digit, digit].iter().collect();
            let a = f64::from(u8::from_str_radix(&doubled, 16).ok()?);
            alpha = (a / 255.0 * 100.0).round() / 100.0;
        }
    } else if let Some(caps) = RGB_FN.captures(string) {
        for (i, channel) in rgb.iter_mut().enumerate() {
            *channel = caps[i + 1].parse::<i64>().ok()? as f64;
        }

        if let Some(a) = caps.get(4) {
            alpha = a.as_str().parse().ok()?;
        }
    } else if let Some(caps) = RGB_PERCENT_FN.captures(string) {
        for (i, channel) in rgb.iter_mut().enumerate() {
            let percent: f64 = caps[i + 1].parse().ok()?;
            *channel = (percent * 2.55).round();
        }

        if let Some(a) = caps.get(4) {
            alpha = a.as_str().parse().ok()?;
        }
    } else if let Some(caps) = KEYWORD.captures(string) {
        let name = &caps[1];

        if name == "transparent" {
            return Some(Parsed {
                model: Model::Rgb,
                channels: [0.0, 0.0, 0.0],
                alpha: 0.0,
            });
        }

        return keywords::rgb_for(name).map(|channels| Parsed {
            model: Model::Rgb,
            channels,
            alpha: 1.0,
        });
    } else {
        return None;
    }

    for channel in &mut rgb {
        *channel = channel.clamp(0.0, 255.0);
    }

    Some(Parsed {
        model: Model::Rgb,
        channels: rgb,
        alpha: alpha.clamp(0.0, 1.0),
    })
}

/// Parse `hsl()`/`hsla()` notation.
pub fn parse_hsl(string: &str) -> Option<Parsed> {
    let caps = HSL_FN.captures(string)?;

    let h: f64 = caps[1].parse().ok()?;
    let s: f64 = caps[2].parse().ok()?;
    let l: f64 = caps[3].parse().ok()?;
    let alpha: f64 = match caps.get(4) {
        Some(a) => a.as_str().parse().ok()?,
        None => 1.0,
    };

    Some(Parsed {
        model: Model::Hsl,
        channels: [(h + 360.0) % 360.0, s.clamp(0.0, 100.0), l.clamp(0.0, 100.0)],
        alpha: alpha.clamp(0.0, 1.0),
    })
}

/// Parse `hwb()` notation with its optional trailing alpha.
pub fn parse_hwb(string: &str) -> Option<Parsed> {
    let caps = HWB_FN.captures(string)?;

    let h: f64 = caps[1].parse().ok()?;
    let w: f64 = caps[2].parse().ok()?;
    let b: f64 = caps[3].parse().ok()?;
    let alpha: f64 = match caps.get(4) {
        Some(a) => a.as_str().parse().ok()?,
        None => 1.0,
    };

    Some(Parsed {
        model: Model::Hwb,
        channels: [
            ((h % 360.0) + 360.0) % 360.0,
            w.clamp(0.0, 100.0),
            b.clamp(0.0, 100.0),
        ],
        alpha: alpha.clamp(0.0, 1.0),
    })
}

/// Format as uppercase hex, with an alpha byte only when alpha < 1.
pub fn to_hex(rgba: &[f64]) -> String {
    let mut out = String::with_capacity(9);
    out.push('#');

    for channel in rgba.iter().take(3) {
        let _ = write!(out, "{:02X}", channel.round() as i64 & 0xff);
    }

    if let Some(&alpha) = rgba.get(3) {
        if alpha < 1.0 {
            let _ = write!(out, "{:02X}", (alpha * 255.0).round() as i64 & 0xff);
        }
    }

    out
}

/// Format as `rgb(r, g, b)`, or `rgba(…)` when alpha is carried and ≠ 1.
pub fn to_rgb(rgba: &[f64]) -> String {
    let r = rgba[0].round();
    let g = rgba[1].round();
    let b = rgba[2].round();

    match rgba.get(3) {
        Some(&alpha) if alpha != 1.0 => format!("rgba({r}, {g}, {b}, {alpha})"),
        _ => format!("rgb({r}, {g}, {b})"),
    }
}

/// Format as `rgb(r%, g%, b%)`, or the `rgba(…)` form when alpha ≠ 1.
pub fn to_rgb_percent(rgba: &[f64]) -> String {
    let r = (rgba[0] / 255.0 * 100.0).round();
    let g = (rgba[1] / 255.0 * 100.0).round();
    let b = (rgba[2] / 255.0 * 100.0).round();

    match rgba.get(3) {
        Some(&alpha) if alpha != 1.0 => format!("rgba({r}%, {g}%, {b}%, {alpha})"),
        _ => format!("rgb({r}%, {g}%, {b}%)"),
    }
}

/// Format as `hsl(h, s%, l%)`, or `hsla(…)` when alpha is carried and ≠ 1.
pub fn to_hsl(hsla: &[f64]) -> String {
    let h = hsla[0];
    let s = hsla[1];
    let l = hsla[2];

    match hsla.get(3) {
        Some(&alpha) if alpha != 1.0 => format!("hsla({h}, {s}%, {l}%, {alpha})"),
        _ => format!("hsl({h}, {s}%, {l}%)"),
    }
}

/// Format as `hwb(h, w%, b%)` with a trailing alpha argument when ≠ 1.
///
/// hwb has no alpha-specific function name; the alpha rides as an optional
/// fourth argument instead.
pub fn to_hwb(hwba: &[f64]) -> String {
    let h = hwba[0];
    let w = hwba[1];
    let b = hwba[2];

    match hwba.get(3) {
        Some(&alpha) if alpha != 1.0 => format!("hwb({h}, {w}%, {b}%, {alpha})"),
        _ => format!("hwb({h}, {w}%, {b}%)"),
    }
}

/// Exact reverse keyword lookup for an integral RGB triplet.
pub fn to_keyword(rgb: &[f64]) -> Option<&'static str> {
    keywords::exact_index([rgb[0], rgb[1], rgb[2]]).and_then(keywords::name_at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_notations() {
        let p = parse("#0A1E19").unwrap();
        assert_eq!(p.model, Model::Rgb);
        assert_eq!(p.channels, [10.0, 30.0, 25.0]);
        assert_eq!(p.alpha, 1.0);

        let p = parse("#abc").unwrap();
        assert_eq!(p.channels, [170.0, 187.0, 204.0]);

        let p = parse("#0A1E1980").unwrap();
        assert_eq!(p.alpha, 0.5);

        let p = parse("#f00a").unwrap();
        assert_eq!(p.channels, [255.0, 0.0, 0.0]);
        assert_eq!(p.alpha, 0.67);
    }

    #[test]
    fn parses_rgb_functions() {
        let p = parse("rgb(10, 30, 25)").unwrap();
        assert_eq!(p.channels, [10.0, 30.0, 25.0]);
        assert_eq!(p.alpha, 1.0);

        let p = parse("rgba(10, 30, 25, 0.4)").unwrap();
        assert_eq!(p.alpha, 0.4);

        // Out-of-range channels clamp rather than fail.
        let p = parse("rgb(400, -10, 25)").unwrap();
        assert_eq!(p.channels, [255.0, 0.0, 25.0]);
    }

    #[test]
    fn parses_percentage_channels() {
        let p = parse("rgb(4%, 12%, 10%)").unwrap();
        assert_eq!(p.channels, [10.0, 31.0, 26.0]);

        let p = parse("rgba(4%, 12%, 10%, 0.4)").unwrap();
        assert_eq!(p.alpha, 0.4);
    }

    #[test]
    fn parses_hsl() {
        let p = parse("hsl(120, 50%, 60%)").unwrap();
        assert_eq!(p.model, Model::Hsl);
        assert_eq!(p.channels, [120.0, 50.0, 60.0]);

        let p = parse("hsla(120, 50%, 60%, 0.4)").unwrap();
        assert_eq!(p.alpha, 0.4);

        // Negative hue normalizes through the +360 step.
        let p = parse("hsl(-120, 50%, 60%)").unwrap();
        assert_eq!(p.channels[0], 240.0);
    }

    #[test]
    fn parses_hwb() {
        let p = parse("hwb(120, 50%, 60%)").unwrap();
        assert_eq!(p.model, Model::Hwb);
        assert_eq!(p.channels, [120.0, 50.0, 60.0]);

        let p = parse("hwb(120, 50%, 60%, 0.4)").unwrap();
        assert_eq!(p.alpha, 0.4);

        let p = parse("hwb(-400, 50%, 60%)").unwrap();
        assert_eq!(p.channels[0], 320.0);
    }

    #[test]
    fn parses_keywords() {
        let p = parse("blue").unwrap();
        assert_eq!(p.channels, [0.0, 0.0, 255.0]);

        let p = parse("transparent").unwrap();
        assert_eq!(p.channels, [0.0, 0.0, 0.0]);
        assert_eq!(p.alpha, 0.0);

        assert!(parse("unknow").is_none());
        assert!(parse("").is_none());
    }

    #[test]
    fn formats_hex() {
        assert_eq!(to_hex(&[10.0, 30.0, 25.0]), "#0A1E19");
        assert_eq!(to_hex(&[255.0, 0.0, 0.0, 1.0]), "#FF0000");
        assert_eq!(to_hex(&[255.0, 0.0, 0.0, 0.5]), "#FF000080");
    }

    #[test]
    fn formats_rgb() {
        assert_eq!(to_rgb(&[10.0, 30.0, 25.0]), "rgb(10, 30, 25)");
        assert_eq!(to_rgb(&[10.0, 30.0, 25.0, 0.4]), "rgba(10, 30, 25, 0.4)");
        assert_eq!(to_rgb(&[155.5, 243.1, 88.2]), "rgb(156, 243, 88)");
        assert_eq!(
            to_rgb_percent(&[10.0, 30.0, 25.0]),
            "rgb(4%, 12%, 10%)"
        );
    }

    #[test]
    fn formats_hsl_and_hwb() {
        assert_eq!(to_hsl(&[165.0, 50.0, 7.8]), "hsl(165, 50%, 7.8%)");
        assert_eq!(
            to_hsl(&[165.0, 50.0, 7.8, 0.3]),
            "hsla(165, 50%, 7.8%, 0.3)"
        );
        assert_eq!(to_hwb(&[165.0, 4.0, 88.0]), "hwb(165, 4%, 88%)");
        assert_eq!(
            to_hwb(&[165.0, 4.0, 88.0, 0.3]),
            "hwb(165, 4%, 88%, 0.3)"
        );
    }

    #[test]
    fn keyword_formatting() {
        assert_eq!(to_keyword(&[0.0, 0.0, 255.0]), Some("blue"));
        assert_eq!(to_keyword(&[0.0, 255.0, 255.0]), Some("cyan"));
        assert_eq!(to_keyword(&[1.0, 2.0, 3.0]), None);
    }
}
