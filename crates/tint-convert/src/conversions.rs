//! Pairwise conversion primitives.
//!
//! One pure function per supported ordered model pair. Each takes the source
//! model's channels (alpha excluded) and returns the target's. The constants
//! here are binding: the sRGB piecewise gamma (0.04045 / 12.92 and
//! 0.055 / 1.055 / 2.4), the D65 XYZ matrix rows, the Lab f(t) split at
//! 0.008856 with 7.787 and 16/116, and the CSS HSL definition with its case
//! split at `l <= 0.5`. Replacing any of them changes outputs.
//!
//! Composition and rounding policy live in [`crate::route`]; nothing in this
//! module rounds.

use crate::keywords;

/// NaN-to-zero guard for 0/0 channel math.
#[inline]
fn or_zero(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value }
}

// ============================================================================
// RGB sources
// ============================================================================

/// RGB to HSL per the CSS/W3C definition.
pub fn rgb_to_hsl(rgb: [f64; 3]) -> [f64; 3] {
    let r = rgb[0] / 255.0;
    let g = rgb[1] / 255.0;
    let b = rgb[2] / 255.0;
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let delta = max - min;

    let mut h = if max == min {
        0.0
    } else if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    h = (h * 60.0).min(360.0);

    if h < 0.0 {
        h += 360.0;
    }

    let l = (min + max) / 2.0;

    let s = if max == min {
        0.0
    } else if l <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    [h, s * 100.0, l * 100.0]
}

/// RGB to HSV.
pub fn rgb_to_hsv(rgb: [f64; 3]) -> [f64; 3] {
    let r = rgb[0] / 255.0;
    let g = rgb[1] / 255.0;
    let b = rgb[2] / 255.0;
    let v = r.max(g).max(b);
    let diff = v - r.min(g).min(b);
    let diffc = |c: f64| (v - c) / 6.0 / diff + 1.0 / 2.0;

    if diff == 0.0 {
        return [0.0, 0.0, v * 100.0];
    }

    let s = diff / v;
    let rdif = diffc(r);
    let gdif = diffc(g);
    let bdif = diffc(b);

    let mut h = if r == v {
        bdif - gdif
    } else if g == v {
        (1.0 / 3.0) + rdif - bdif
    } else {
        (2.0 / 3.0) + gdif - rdif
    };

    if h < 0.0 {
        h += 1.0;
    } else if h > 1.0 {
        h -= 1.0;
    }

    [h * 360.0, s * 100.0, v * 100.0]
}

/// RGB to HWB; hue is taken from the HSL conversion.
pub fn rgb_to_hwb(rgb: [f64; 3]) -> [f64; 3] {
    let r = rgb[0];
    let g = rgb[1];
    let b = rgb[2];
    let h = rgb_to_hsl(rgb)[0];
    let w = 1.0 / 255.0 * r.min(g.min(b));
    let bl = 1.0 - 1.0 / 255.0 * r.max(g.max(b));

    [h, w * 100.0, bl * 100.0]
}

/// RGB to CMYK.
pub fn rgb_to_cmyk(rgb: [f64; 3]) -> [f64; 4] {
    let r = rgb[0] / 255.0;
    let g = rgb[1] / 255.0;
    let b = rgb[2] / 255.0;

    let k = (1.0 - r).min(1.0 - g).min(1.0 - b);
    let c = or_zero((1.0 - r - k) / (1.0 - k));
    let m = or_zero((1.0 - g - k) / (1.0 - k));
    let y = or_zero((1.0 - b - k) / (1.0 - k));

    [c * 100.0, m * 100.0, y * 100.0, k * 100.0]
}

/// RGB to the keyword table index.
///
/// Exact integral matches hit the table directly; everything else resolves
/// by nearest squared Euclidean distance, first minimum winning.
pub fn rgb_to_keyword(rgb: [f64; 3]) -> f64 {
    match keywords::exact_index(rgb) {
        Some(index) => index as f64,
        None => keywords::nearest_index(rgb) as f64,
    }
}

/// Keyword table index to RGB.
pub fn keyword_to_rgb(keyword: f64) -> [f64; 3] {
    keywords::rgb_at(keyword as usize)
}

/// RGB to CIE XYZ (D65, channels scaled to [0, 100]).
pub fn rgb_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    // Assume sRGB
    let linearize = |c: f64| {
        if c > 0.04045 {
            ((c + 0.055) / 1.055).powf(2.4)
        } else {
            c / 12.92
        }
    };

    let r = linearize(rgb[0] / 255.0);
    let g = linearize(rgb[1] / 255.0);
    let b = linearize(rgb[2] / 255.0);

    let x = r * 0.4124 + g * 0.3576 + b * 0.1805;
    let y = r * 0.2126 + g * 0.7152 + b * 0.0722;
    let z = r * 0.0193 + g * 0.1192 + b * 0.9505;

    [x * 100.0, y * 100.0, z * 100.0]
}

/// RGB to CIE L*a*b* via XYZ.
pub fn rgb_to_lab(rgb: [f64; 3]) -> [f64; 3] {
    xyz_to_lab(rgb_to_xyz(rgb))
}

/// RGB to the basic ANSI 16-color code.
///
/// `value` short-circuits the HSV value computation when the caller already
/// has it (the HSV source path).
pub fn rgb_to_ansi16(rgb: [f64; 3], value: Option<f64>) -> f64 {
    let [r, g, b] = rgb;
    let value = value.unwrap_or_else(|| rgb_to_hsv(rgb)[2]);
    let value = (value / 50.0).round();

    if value == 0.0 {
        return 30.0;
    }

    let mut ansi = 30
        + ((((b / 255.0).round() as i64) << 2)
            | (((g / 255.0).round() as i64) << 1)
            | ((r / 255.0).round() as i64));

    if value == 2.0 {
        ansi += 60;
    }

    ansi as f64
}

/// RGB to the xterm 256-color code.
///
/// Grayscale input uses the extended grayscale ramp except for near-black
/// and near-white, which map onto the 6x6x6 cube corners.
pub fn rgb_to_ansi256(rgb: [f64; 3]) -> f64 {
    let [r, g, b] = rgb;

    if r == g && g == b {
        if r < 8.0 {
            return 16.0;
        }

        if r > 248.0 {
            return 231.0;
        }

        return ((r - 8.0) / 247.0 * 24.0).round() + 232.0;
    }

    16.0 + 36.0 * (r / 255.0 * 5.0).round() + 6.0 * (g / 255.0 * 5.0).round()
        + (b / 255.0 * 5.0).round()
}

/// RGB to the packed 24-bit value.
pub fn rgb_to_hex(rgb: [f64; 3]) -> f64 {
    let packed = (((rgb[0].round() as i64) & 0xff) << 16)
        + (((rgb[1].round() as i64) & 0xff) << 8)
        + ((rgb[2].round() as i64) & 0xff);

    packed as f64
}

/// Packed 24-bit value to RGB.
pub fn hex_to_rgb(hex: f64) -> [f64; 3] {
    let packed = (hex as i64) & 0xffffff;
    let r = (packed >> 16) & 0xff;
    let g = (packed >> 8) & 0xff;
    let b = packed & 0xff;

    [r as f64, g as f64, b as f64]
}

/// RGB to HCG.
pub fn rgb_to_hcg(rgb: [f64; 3]) -> [f64; 3] {
    let r = rgb[0] / 255.0;
    let g = rgb[1] / 255.0;
    let b = rgb[2] / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;

    let grayscale = if chroma < 1.0 { min / (1.0 - chroma) } else { 0.0 };

    let mut hue = if chroma <= 0.0 {
        0.0
    } else if max == r {
        ((g - b) / chroma) % 6.0
    } else if max == g {
        2.0 + (b - r) / chroma
    } else {
        // Faithful to the reference tables, which offset the blue sector
        // twice before the mod-1 reduction.
        4.0 + (r - g) / chroma + 4.0
    };

    hue /= 6.0;
    hue %= 1.0;

    [hue * 360.0, chroma * 100.0, grayscale * 100.0]
}

/// RGB to AppleRGB's 16-bit channels.
pub fn rgb_to_apple(rgb: [f64; 3]) -> [f64; 3] {
    [
        rgb[0] / 255.0 * 65535.0,
        rgb[1] / 255.0 * 65535.0,
        rgb[2] / 255.0 * 65535.0,
    ]
}

/// RGB to a single gray level in [0, 100].
pub fn rgb_to_gray(rgb: [f64; 3]) -> f64 {
    let value = (rgb[0] + rgb[1] + rgb[2]) / 3.0;

    value / 255.0 * 100.0
}

// ============================================================================
// HSL / HSV / HWB sources
// ============================================================================

/// HSL to RGB per the CSS/W3C definition.
pub fn hsl_to_rgb(hsl: [f64; 3]) -> [f64; 3] {
    let h = hsl[0] / 360.0;
    let s = hsl[1] / 100.0;
    let l = hsl[2] / 100.0;

    if s == 0.0 {
        let value = l * 255.0;
        return [value, value, value];
    }

    let t2 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let t1 = 2.0 * l - t2;

    let mut rgb = [0.0; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        let mut t3 = h + 1.0 / 3.0 * -(i as f64 - 1.0);

        if t3 < 0.0 {
            t3 += 1.0;
        }

        if t3 > 1.0 {
            t3 -= 1.0;
        }

        let value = if 6.0 * t3 < 1.0 {
            t1 + (t2 - t1) * 6.0 * t3
        } else if 2.0 * t3 < 1.0 {
            t2
        } else if 3.0 * t3 < 2.0 {
            t1 + (t2 - t1) * (2.0 / 3.0 - t3) * 6.0
        } else {
            t1
        };

        *channel = value * 255.0;
    }

    rgb
}

/// HSL to HSV.
pub fn hsl_to_hsv(hsl: [f64; 3]) -> [f64; 3] {
    let h = hsl[0];
    let mut s = hsl[1] / 100.0;
    let mut l = hsl[2] / 100.0;
    let mut smin = s;
    let lmin = l.max(0.01);

    l *= 2.0;
    s *= if l <= 1.0 { l } else { 2.0 - l };
    smin *= if lmin <= 1.0 { lmin } else { 2.0 - lmin };
    let v = (l + s) / 2.0;
    let sv = if l == 0.0 {
        (2.0 * smin) / (lmin + smin)
    } else {
        (2.0 * s) / (l + s)
    };

    [h, sv * 100.0, v * 100.0]
}

/// HSL to HCG.
pub fn hsl_to_hcg(hsl: [f64; 3]) -> [f64; 3] {
    let s = hsl[1] / 100.0;
    let l = hsl[2] / 100.0;

    let c = if l < 0.5 {
        2.0 * s * l
    } else {
        2.0 * s * (1.0 - l)
    };

    let f = if c < 1.0 { (l - 0.5 * c) / (1.0 - c) } else { 0.0 };

    [hsl[0], c * 100.0, f * 100.0]
}

/// HSV to RGB.
pub fn hsv_to_rgb(hsv: [f64; 3]) -> [f64; 3] {
    let h = hsv[0] / 60.0;
    let s = hsv[1] / 100.0;
    let mut v = hsv[2] / 100.0;
    let hi = (h.floor() % 6.0 + 6.0) % 6.0;

    let f = h - h.floor();
    let p = 255.0 * v * (1.0 - s);
    let q = 255.0 * v * (1.0 - s * f);
    let t = 255.0 * v * (1.0 - s * (1.0 - f));
    v *= 255.0;

    match hi as i64 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// HSV to HSL.
pub fn hsv_to_hsl(hsv: [f64; 3]) -> [f64; 3] {
    let h = hsv[0];
    let s = hsv[1] / 100.0;
    let v = hsv[2] / 100.0;
    let vmin = v.max(0.01);

    let l = (2.0 - s) * v;
    let lmin = (2.0 - s) * vmin;
    let mut sl = s * vmin;
    sl /= if lmin <= 1.0 { lmin } else { 2.0 - lmin };
    sl = or_zero(sl);

    [h, sl * 100.0, l / 2.0 * 100.0]
}

/// HSV to ANSI 16; the value channel skips the HSV round trip.
pub fn hsv_to_ansi16(hsv: [f64; 3]) -> f64 {
    rgb_to_ansi16(hsv_to_rgb(hsv), Some(hsv[2]))
}

/// HSV to HCG.
pub fn hsv_to_hcg(hsv: [f64; 3]) -> [f64; 3] {
    let s = hsv[1] / 100.0;
    let v = hsv[2] / 100.0;

    let c = s * v;
    let f = if c < 1.0 { (v - c) / (1.0 - c) } else { 0.0 };

    [hsv[0], c * 100.0, f * 100.0]
}

/// HWB to RGB.
///
/// <http://dev.w3.org/csswg/css-color/#hwb-to-rgb>
pub fn hwb_to_rgb(hwb: [f64; 3]) -> [f64; 3] {
    let h = hwb[0] / 360.0;
    let mut wh = hwb[1] / 100.0;
    let mut bl = hwb[2] / 100.0;
    let ratio = wh + bl;

    // Wh + bl cant be > 1
    if ratio > 1.0 {
        wh /= ratio;
        bl /= ratio;
    }

    let i = (6.0 * h).floor();
    let v = 1.0 - bl;
    let mut f = 6.0 * h - i;

    if (i as i64) & 0x01 != 0 {
        f = 1.0 - f;
    }

    // Linear interpolation
    let n = wh + f * (v - wh);

    let (r, g, b) = match i as i64 {
        1 => (n, v, wh),
        2 => (wh, v, n),
        3 => (wh, n, v),
        4 => (n, wh, v),
        5 => (v, wh, n),
        _ => (v, n, wh),
    };

    [r * 255.0, g * 255.0, b * 255.0]
}

/// HWB to HCG.
pub fn hwb_to_hcg(hwb: [f64; 3]) -> [f64; 3] {
    let w = hwb[1] / 100.0;
    let b = hwb[2] / 100.0;
    let v = 1.0 - b;
    let c = v - w;

    let g = if c < 1.0 { (v - c) / (1.0 - c) } else { 0.0 };

    [hwb[0], c * 100.0, g * 100.0]
}

// ============================================================================
// CMYK / XYZ / Lab / LCh sources
// ============================================================================

/// CMYK to RGB.
pub fn cmyk_to_rgb(cmyk: [f64; 4]) -> [f64; 3] {
    let c = cmyk[0] / 100.0;
    let m = cmyk[1] / 100.0;
    let y = cmyk[2] / 100.0;
    let k = cmyk[3] / 100.0;

    let r = 1.0 - (c * (1.0 - k) + k).min(1.0);
    let g = 1.0 - (m * (1.0 - k) + k).min(1.0);
    let b = 1.0 - (y * (1.0 - k) + k).min(1.0);

    [r * 255.0, g * 255.0, b * 255.0]
}

/// XYZ to RGB with a [0, 1] clamp on the linear channels.
pub fn xyz_to_rgb(xyz: [f64; 3]) -> [f64; 3] {
    let x = xyz[0] / 100.0;
    let y = xyz[1] / 100.0;
    let z = xyz[2] / 100.0;

    let encode = |c: f64| {
        let c = if c > 0.0031308 {
            1.055 * c.powf(1.0 / 2.4) - 0.055
        } else {
            c * 12.92
        };

        c.clamp(0.0, 1.0) * 255.0
    };

    let r = x * 3.2406 + y * -1.5372 + z * -0.4986;
    let g = x * -0.9689 + y * 1.8758 + z * 0.0415;
    let b = x * 0.0557 + y * -0.2040 + z * 1.0570;

    [encode(r), encode(g), encode(b)]
}

/// XYZ to CIE L*a*b* (D65 reference white 95.047 / 100 / 108.883).
pub fn xyz_to_lab(xyz: [f64; 3]) -> [f64; 3] {
    let f = |t: f64| {
        if t > 0.008856 {
            t.powf(1.0 / 3.0)
        } else {
            7.787 * t + 16.0 / 116.0
        }
    };

    let x = f(xyz[0] / 95.047);
    let y = f(xyz[1] / 100.0);
    let z = f(xyz[2] / 108.883);

    let l = 116.0 * y - 16.0;
    let a = 500.0 * (x - y);
    let b = 200.0 * (y - z);

    [l, a, b]
}

/// CIE L*a*b* to XYZ.
pub fn lab_to_xyz(lab: [f64; 3]) -> [f64; 3] {
    let l = lab[0];
    let a = lab[1];
    let b = lab[2];

    let y = (l + 16.0) / 116.0;
    let x = a / 500.0 + y;
    let z = y - b / 200.0;

    let finv = |t: f64| {
        let t3 = t.powi(3);
        if t3 > 0.008856 {
            t3
        } else {
            (t - 16.0 / 116.0) / 7.787
        }
    };

    [finv(x) * 95.047, finv(y) * 100.0, finv(z) * 108.883]
}

/// Lab to LCh.
pub fn lab_to_lch(lab: [f64; 3]) -> [f64; 3] {
    let l = lab[0];
    let a = lab[1];
    let b = lab[2];

    let hr = b.atan2(a);
    let mut h = hr * 360.0 / 2.0 / std::f64::consts::PI;

    if h < 0.0 {
        h += 360.0;
    }

    let c = (a * a + b * b).sqrt();

    [l, c, h]
}

/// LCh to Lab.
pub fn lch_to_lab(lch: [f64; 3]) -> [f64; 3] {
    let l = lch[0];
    let c = lch[1];
    let h = lch[2];

    let hr = h / 360.0 * 2.0 * std::f64::consts::PI;
    let a = c * hr.cos();
    let b = c * hr.sin();

    [l, a, b]
}

// ============================================================================
// ANSI / Apple / gray sources
// ============================================================================

/// ANSI 16 code to RGB.
pub fn ansi16_to_rgb(ansi: f64) -> [f64; 3] {
    let mut color = ansi % 10.0;

    // Handle greyscale
    if color == 0.0 || color == 7.0 {
        if ansi > 50.0 {
            color += 3.5;
        }

        let c = color / 10.5 * 255.0;

        return [c, c, c];
    }

    let mult = if ansi > 50.0 { 1.0 } else { 0.5 };
    let bits = color as i64;
    let r = (bits & 1) as f64 * mult * 255.0;
    let g = ((bits >> 1) & 1) as f64 * mult * 255.0;
    let b = ((bits >> 2) & 1) as f64 * mult * 255.0;

    [r, g, b]
}

/// xterm 256-color code to RGB.
pub fn ansi256_to_rgb(ansi: f64) -> [f64; 3] {
    // Handle greyscale
    if ansi >= 232.0 {
        let c = (ansi - 232.0) * 10.0 + 8.0;
        return [c, c, c];
    }

    let index = ansi - 16.0;
    let rem = index % 36.0;

    let r = (index / 36.0).floor() / 5.0 * 255.0;
    let g = (rem / 6.0).floor() / 5.0 * 255.0;
    let b = (rem % 6.0) / 5.0 * 255.0;

    [r, g, b]
}

/// AppleRGB's 16-bit channels to RGB.
pub fn apple_to_rgb(apple: [f64; 3]) -> [f64; 3] {
    [
        apple[0] / 65535.0 * 255.0,
        apple[1] / 65535.0 * 255.0,
        apple[2] / 65535.0 * 255.0,
    ]
}

/// Gray level to RGB.
pub fn gray_to_rgb(gray: f64) -> [f64; 3] {
    let c = gray / 100.0 * 255.0;

    [c, c, c]
}

/// Gray level to HSL (also the HSV rendering — they coincide).
pub fn gray_to_hsl(gray: f64) -> [f64; 3] {
    [0.0, 0.0, gray]
}

/// Gray level to HWB.
pub fn gray_to_hwb(gray: f64) -> [f64; 3] {
    [0.0, 100.0, gray]
}

/// Gray level to CMYK.
pub fn gray_to_cmyk(gray: f64) -> [f64; 4] {
    [0.0, 0.0, 0.0, gray]
}

/// Gray level to Lab.
pub fn gray_to_lab(gray: f64) -> [f64; 3] {
    [gray, 0.0, 0.0]
}

/// Gray level to the packed 24-bit value.
pub fn gray_to_hex(gray: f64) -> f64 {
    let value = ((gray / 100.0 * 255.0).round() as i64) & 0xff;
    let packed = (value << 16) + (value << 8) + value;

    packed as f64
}

// ============================================================================
// HCG sources
// ============================================================================

/// HCG to RGB.
pub fn hcg_to_rgb(hcg: [f64; 3]) -> [f64; 3] {
    let h = hcg[0] / 360.0;
    let c = hcg[1] / 100.0;
    let g = hcg[2] / 100.0;

    if c == 0.0 {
        return [g * 255.0, g * 255.0, g * 255.0];
    }

    let hi = (h % 1.0) * 6.0;
    let v = hi % 1.0;
    let w = 1.0 - v;

    let pure = match hi.floor() as i64 {
        0 => [1.0, v, 0.0],
        1 => [w, 1.0, 0.0],
        2 => [0.0, 1.0, v],
        3 => [0.0, w, 1.0],
        4 => [v, 0.0, 1.0],
        _ => [1.0, 0.0, w],
    };

    let mg = (1.0 - c) * g;

    [
        (c * pure[0] + mg) * 255.0,
        (c * pure[1] + mg) * 255.0,
        (c * pure[2] + mg) * 255.0,
    ]
}

/// HCG to HSV.
pub fn hcg_to_hsv(hcg: [f64; 3]) -> [f64; 3] {
    let c = hcg[1] / 100.0;
    let g = hcg[2] / 100.0;

    let v = c + g * (1.0 - c);
    let f = if v > 0.0 { c / v } else { 0.0 };

    [hcg[0], f * 100.0, v * 100.0]
}

/// HCG to HSL.
pub fn hcg_to_hsl(hcg: [f64; 3]) -> [f64; 3] {
    let c = hcg[1] / 100.0;
    let g = hcg[2] / 100.0;

    let l = g * (1.0 - c) + 0.5 * c;

    let s = if l > 0.0 && l < 0.5 {
        c / (2.0 * l)
    } else if l >= 0.5 && l < 1.0 {
        c / (2.0 * (1.0 - l))
    } else {
        0.0
    };

    [hcg[0], s * 100.0, l * 100.0]
}

/// HCG to HWB.
pub fn hcg_to_hwb(hcg: [f64; 3]) -> [f64; 3] {
    let c = hcg[1] / 100.0;
    let g = hcg[2] / 100.0;
    let v = c + g * (1.0 - c);

    [hcg[0], (v - c) * 100.0, (1.0 - v) * 100.0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rgb_hsl_fixed_point() {
        let hsl = rgb_to_hsl([10.0, 30.0, 25.0]);
        assert_relative_eq!(hsl[0], 165.0, epsilon = 1e-9);
        assert_relative_eq!(hsl[1], 50.0, epsilon = 1e-9);
        assert_relative_eq!(hsl[2], 20.0 / 255.0 * 100.0, epsilon = 1e-9);
    }

    #[test]
    fn rgb_hsv_fixed_point() {
        let hsv = rgb_to_hsv([10.0, 30.0, 25.0]);
        assert_eq!(hsv.map(f64::round), [165.0, 67.0, 12.0]);
    }

    #[test]
    fn rgb_hwb_fixed_point() {
        let hwb = rgb_to_hwb([10.0, 30.0, 25.0]);
        assert_eq!(hwb.map(f64::round), [165.0, 4.0, 88.0]);
    }

    #[test]
    fn rgb_cmyk_fixed_point() {
        let cmyk = rgb_to_cmyk([10.0, 30.0, 25.0]);
        assert_eq!(cmyk.map(f64::round), [67.0, 0.0, 17.0, 88.0]);
    }

    #[test]
    fn cmyk_black_avoids_division_by_zero() {
        assert_eq!(rgb_to_cmyk([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0, 100.0]);
    }

    #[test]
    fn hsl_rgb_achromatic() {
        assert_eq!(hsl_to_rgb([120.0, 0.0, 50.0]), [127.5, 127.5, 127.5]);
    }

    #[test]
    fn hsl_rgb_round_trip() {
        for rgb in [[10.0, 30.0, 25.0], [255.0, 0.0, 0.0], [1.0, 2.0, 3.0]] {
            let back = hsl_to_rgb(rgb_to_hsl(rgb));
            for (a, b) in back.iter().zip(rgb) {
                assert_relative_eq!(*a, b, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn srgb_linearization_boundaries() {
        // The piecewise split sits at 0.04045 encoded.
        let below = rgb_to_xyz([10.0, 10.0, 10.0]);
        let above = rgb_to_xyz([11.0, 11.0, 11.0]);
        assert!(below[1] < above[1]);
        assert_relative_eq!(rgb_to_xyz([255.0, 255.0, 255.0])[1], 100.0, epsilon = 0.01);
    }

    #[test]
    fn lab_white_point() {
        let lab = rgb_to_lab([255.0, 255.0, 255.0]);
        assert_relative_eq!(lab[0], 100.0, epsilon = 0.01);
        assert_relative_eq!(lab[1], 0.0, epsilon = 0.05);
        assert_relative_eq!(lab[2], 0.0, epsilon = 0.05);
    }

    #[test]
    fn lab_lch_round_trip() {
        let lab = [54.0, 27.0, -33.0];
        let back = lch_to_lab(lab_to_lch(lab));
        for (a, b) in back.iter().zip(lab) {
            assert_relative_eq!(*a, b, epsilon = 1e-9);
        }
    }

    #[test]
    fn xyz_rgb_clamps_out_of_gamut() {
        // Pure XYZ green is outside sRGB; channels stay within [0, 255].
        let rgb = xyz_to_rgb([0.0, 100.0, 0.0]);
        for c in rgb {
            assert!((0.0..=255.0).contains(&c));
        }
    }

    #[test]
    fn ansi16_cube() {
        assert_eq!(rgb_to_ansi16([0.0, 0.0, 0.0], None), 30.0);
        assert_eq!(rgb_to_ansi16([255.0, 0.0, 0.0], None), 91.0);
        assert_eq!(ansi16_to_rgb(31.0), [127.5, 0.0, 0.0]);
        assert_eq!(ansi16_to_rgb(97.0), [255.0, 255.0, 255.0]);
    }

    #[test]
    fn ansi256_grayscale_ramp() {
        assert_eq!(rgb_to_ansi256([7.0, 7.0, 7.0]), 16.0);
        assert_eq!(rgb_to_ansi256([249.0, 249.0, 249.0]), 231.0);
        assert_eq!(rgb_to_ansi256([128.0, 128.0, 128.0]), 244.0);
        assert_eq!(ansi256_to_rgb(244.0), [128.0, 128.0, 128.0]);
    }

    #[test]
    fn hex_round_trip() {
        let hex = rgb_to_hex([10.0, 30.0, 25.0]);
        assert_eq!(hex, 0x0a1e19 as f64);
        assert_eq!(hex_to_rgb(hex), [10.0, 30.0, 25.0]);
    }

    #[test]
    fn keyword_matching() {
        let blue = rgb_to_keyword([0.0, 0.0, 255.0]);
        assert_eq!(keywords::name_at(blue as usize), Some("blue"));
        assert_eq!(keyword_to_rgb(blue), [0.0, 0.0, 255.0]);

        // Off-table values snap to the nearest entry.
        let near = rgb_to_keyword([254.0, 1.0, 1.0]);
        assert_eq!(keywords::name_at(near as usize), Some("red"));
    }

    #[test]
    fn apple_scaling() {
        assert_eq!(rgb_to_apple([255.0, 0.0, 255.0]), [65535.0, 0.0, 65535.0]);
        assert_eq!(apple_to_rgb([65535.0, 0.0, 65535.0]), [255.0, 0.0, 255.0]);
    }

    #[test]
    fn gray_fan_out() {
        assert_eq!(gray_to_rgb(100.0), [255.0, 255.0, 255.0]);
        assert_eq!(gray_to_hsl(40.0), [0.0, 0.0, 40.0]);
        assert_eq!(gray_to_hwb(40.0), [0.0, 100.0, 40.0]);
        assert_eq!(gray_to_cmyk(40.0), [0.0, 0.0, 0.0, 40.0]);
        assert_eq!(gray_to_lab(40.0), [40.0, 0.0, 0.0]);
        assert_eq!(gray_to_hex(100.0), 0xffffff as f64);
        assert_relative_eq!(rgb_to_gray([51.0, 51.0, 51.0]), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn hcg_round_trip() {
        let rgb = [250.0, 128.0, 114.0];
        let back = hcg_to_rgb(rgb_to_hcg(rgb));
        for (a, b) in back.iter().zip(rgb) {
            assert_relative_eq!(*a, b, epsilon = 1e-6);
        }
    }
}
