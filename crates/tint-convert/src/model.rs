//! The color model catalog.
//!
//! Every supported model is a variant of [`Model`], with a fixed channel
//! count and ordered channel labels. The catalog doubles as the shape table
//! used to infer a model from a set of channel keys: each model has a
//! *signature*, the lexicographically sorted concatenation of its labels,
//! and [`Model::from_signature`] resolves a signature back to its model.
//!
//! # Pseudo-channels
//!
//! Two models do not carry component values in the usual sense but still
//! participate in conversion routing as single-channel nodes:
//!
//! - `keyword` — the channel is an index into the CSS keyword table
//!   ([`crate::keywords`]).
//! - `hex` — the channel is the packed 24-bit RGB value.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Error returned when a model name is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown model: {0}")]
pub struct UnknownModel(pub String);

/// A named color model with a fixed ordered set of channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Model {
    /// Red, green, blue in [0, 255].
    Rgb,
    /// Hue in degrees, saturation and lightness in [0, 100].
    Hsl,
    /// Hue in degrees, saturation and value in [0, 100].
    Hsv,
    /// Hue in degrees, whiteness and blackness in [0, 100].
    Hwb,
    /// Cyan, magenta, yellow, key in [0, 100].
    Cmyk,
    /// CIE XYZ scaled to [0, 100], D65 white.
    Xyz,
    /// CIE L*a*b*; L in [0, 100], a/b unbounded.
    Lab,
    /// CIE LCh; cylindrical Lab with hue in degrees.
    Lch,
    /// Packed 24-bit RGB value as a single pseudo-channel.
    Hex,
    /// CSS keyword table index as a single pseudo-channel.
    Keyword,
    /// ANSI 16-color palette code.
    Ansi16,
    /// ANSI 256-color palette code.
    Ansi256,
    /// Hue in degrees, chroma and gray in [0, 100].
    Hcg,
    /// AppleRGB with 16-bit channels in [0, 65535].
    Apple,
    /// Single gray level in [0, 100].
    Gray,
}

impl Model {
    /// Number of supported models.
    pub const COUNT: usize = 15;

    /// Every model, in catalog order.
    pub const ALL: [Model; Model::COUNT] = [
        Model::Rgb,
        Model::Hsl,
        Model::Hsv,
        Model::Hwb,
        Model::Cmyk,
        Model::Xyz,
        Model::Lab,
        Model::Lch,
        Model::Hex,
        Model::Keyword,
        Model::Ansi16,
        Model::Ansi256,
        Model::Hcg,
        Model::Apple,
        Model::Gray,
    ];

    /// Declared channel count of the model.
    #[inline]
    pub const fn channels(self) -> usize {
        match self {
            Model::Cmyk => 4,
            Model::Hex | Model::Keyword | Model::Ansi16 | Model::Ansi256 | Model::Gray => 1,
            _ => 3,
        }
    }

    /// Ordered channel labels, one per channel.
    pub const fn labels(self) -> &'static [&'static str] {
        match self {
            Model::Rgb => &["r", "g", "b"],
            Model::Hsl => &["h", "s", "l"],
            Model::Hsv => &["h", "s", "v"],
            Model::Hwb => &["h", "w", "b"],
            Model::Cmyk => &["c", "m", "y", "k"],
            Model::Xyz => &["x", "y", "z"],
            Model::Lab => &["l", "a", "b"],
            Model::Lch => &["l", "c", "h"],
            Model::Hex => &["hex"],
            Model::Keyword => &["keyword"],
            Model::Ansi16 => &["ansi16"],
            Model::Ansi256 => &["ansi256"],
            Model::Hcg => &["h", "c", "g"],
            Model::Apple => &["r16", "g16", "b16"],
            Model::Gray => &["gray"],
        }
    }

    /// Catalog name of the model, e.g. `"rgb"`.
    pub const fn name(self) -> &'static str {
        match self {
            Model::Rgb => "rgb",
            Model::Hsl => "hsl",
            Model::Hsv => "hsv",
            Model::Hwb => "hwb",
            Model::Cmyk => "cmyk",
            Model::Xyz => "xyz",
            Model::Lab => "lab",
            Model::Lch => "lch",
            Model::Hex => "hex",
            Model::Keyword => "keyword",
            Model::Ansi16 => "ansi16",
            Model::Ansi256 => "ansi256",
            Model::Hcg => "hcg",
            Model::Apple => "apple",
            Model::Gray => "gray",
        }
    }

    /// Sorted-label signature used for shape inference.
    ///
    /// The signature is the model's labels sorted lexicographically and
    /// concatenated, e.g. `"bgr"` for rgb or `"ckmy"` for cmyk.
    pub fn signature(self) -> String {
        let mut labels: Vec<&str> = self.labels().to_vec();
        labels.sort_unstable();
        labels.concat()
    }

    /// Resolve a sorted-label signature back to its model.
    ///
    /// # Example
    ///
    /// ```
    /// use tint_convert::Model;
    ///
    /// assert_eq!(Model::from_signature("bgr"), Some(Model::Rgb));
    /// assert_eq!(Model::from_signature("hls"), Some(Model::Hsl));
    /// assert_eq!(Model::from_signature("zzz"), None);
    /// ```
    pub fn from_signature(signature: &str) -> Option<Model> {
        Model::ALL
            .into_iter()
            .find(|model| model.signature() == signature)
    }

    /// Position of this model in [`Model::ALL`].
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Model {
    type Err = UnknownModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Model::ALL
            .into_iter()
            .find(|model| model.name() == s)
            .ok_or_else(|| UnknownModel(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_counts_match_channel_counts() {
        for model in Model::ALL {
            assert_eq!(model.labels().len(), model.channels(), "{model}");
        }
    }

    #[test]
    fn signatures_are_unique() {
        for a in Model::ALL {
            for b in Model::ALL {
                if a != b {
                    assert_ne!(a.signature(), b.signature(), "{a} vs {b}");
                }
            }
        }
    }

    #[test]
    fn signature_resolution() {
        assert_eq!(Model::from_signature("bgr"), Some(Model::Rgb));
        assert_eq!(Model::from_signature("ckmy"), Some(Model::Cmyk));
        assert_eq!(Model::from_signature("b16g16r16"), Some(Model::Apple));
        assert_eq!(Model::from_signature("abl"), Some(Model::Lab));
        assert_eq!(Model::from_signature("chl"), Some(Model::Lch));
        assert_eq!(Model::from_signature(""), None);
    }

    #[test]
    fn round_trips_through_name() {
        for model in Model::ALL {
            assert_eq!(model.name().parse::<Model>(), Ok(model));
        }
        assert!("mmm".parse::<Model>().is_err());
    }

    #[test]
    fn index_matches_all_order() {
        for (i, model) in Model::ALL.into_iter().enumerate() {
            assert_eq!(model.index(), i);
        }
    }
}
