//! The channel accessor catalog.
//!
//! Every named channel (red, hue, cyan, …) is bound to a fixed (model,
//! index) pair with an optional clamp or wraparound rule. The catalog is a
//! compile-time table; the named accessor methods on [`crate::Color`] and
//! the construction-time Channel Limiter Table are both derived from it, so
//! a rule registered here limits that channel on *every* construction path,
//! not just through its accessor.
//!
//! Hue is shared by four models (hsl, hsv, hwb, hcg): its wrap rule limits
//! index 0 of all four, but the accessor itself is bound to hsl — the first
//! model in its registration list — regardless of the receiver's current
//! model.

use std::sync::LazyLock;

use tint_convert::{Channels, Model};

/// A clamp or normalize rule applied to one channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Clamp into `[0, max]`.
    Clamp(f64),
    /// Wrap into `[0, 360)` degrees, always non-negative.
    WrapDegrees,
}

impl Rule {
    /// Apply the rule to a value.
    #[inline]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Rule::Clamp(max) => value.clamp(0.0, max),
            Rule::WrapDegrees => ((value % 360.0) + 360.0) % 360.0,
        }
    }
}

/// A named channel across all supported models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// rgb red, [0, 255].
    Red,
    /// rgb green, [0, 255].
    Green,
    /// rgb blue, [0, 255].
    Blue,
    /// Shared hue in degrees, bound to hsl.
    Hue,
    /// hsl saturation, [0, 100].
    SaturationL,
    /// hsl lightness, [0, 100].
    Lightness,
    /// hsv saturation, [0, 100].
    SaturationV,
    /// hsv value, [0, 100].
    Value,
    /// hwb whiteness, [0, 100].
    White,
    /// hwb blackness, [0, 100].
    WBlack,
    /// cmyk cyan, [0, 100].
    Cyan,
    /// cmyk magenta, [0, 100].
    Magenta,
    /// cmyk yellow, [0, 100].
    Yellow,
    /// cmyk key (black), [0, 100].
    Black,
    /// hcg chroma, [0, 100].
    Chroma,
    /// hcg gray, [0, 100].
    Gray,
    /// Lab lightness, [0, 100].
    L,
    /// Lab a, unbounded.
    A,
    /// Lab b, unbounded.
    B,
    /// XYZ x, [0, 100].
    X,
    /// XYZ y, [0, 100].
    Y,
    /// XYZ z, [0, 100].
    Z,
}

/// One catalog entry: a channel bound to a model and index.
#[derive(Debug)]
pub(crate) struct ChannelDef {
    pub channel: Channel,
    /// The model the accessor converts through.
    pub model: Model,
    /// The channel position within that model.
    pub index: usize,
    pub rule: Option<Rule>,
    /// Models whose limiter table receives `rule` at `index`.
    pub limits: &'static [Model],
}

const CLAMP_100: Option<Rule> = Some(Rule::Clamp(100.0));
const CLAMP_255: Option<Rule> = Some(Rule::Clamp(255.0));

/// The full accessor catalog, in [`Channel`] declaration order.
pub(crate) static CHANNELS: &[ChannelDef] = &[
    ChannelDef {
        channel: Channel::Red,
        model: Model::Rgb,
        index: 0,
        rule: CLAMP_255,
        limits: &[Model::Rgb],
    },
    ChannelDef {
        channel: Channel::Green,
        model: Model::Rgb,
        index: 1,
        rule: CLAMP_255,
        limits: &[Model::Rgb],
    },
    ChannelDef {
        channel: Channel::Blue,
        model: Model::Rgb,
        index: 2,
        rule: CLAMP_255,
        limits: &[Model::Rgb],
    },
    ChannelDef {
        channel: Channel::Hue,
        model: Model::Hsl,
        index: 0,
        rule: Some(Rule::WrapDegrees),
        limits: &[Model::Hsl, Model::Hsv, Model::Hwb, Model::Hcg],
    },
    ChannelDef {
        channel: Channel::SaturationL,
        model: Model::Hsl,
        index: 1,
        rule: CLAMP_100,
        limits: &[Model::Hsl],
    },
    ChannelDef {
        channel: Channel::Lightness,
        model: Model::Hsl,
        index: 2,
        rule: CLAMP_100,
        limits: &[Model::Hsl],
    },
    ChannelDef {
        channel: Channel::SaturationV,
        model: Model::Hsv,
        index: 1,
        rule: CLAMP_100,
        limits: &[Model::Hsv],
    },
    ChannelDef {
        channel: Channel::Value,
        model: Model::Hsv,
        index: 2,
        rule: CLAMP_100,
        limits: &[Model::Hsv],
    },
    ChannelDef {
        channel: Channel::White,
        model: Model::Hwb,
        index: 1,
        rule: CLAMP_100,
        limits: &[Model::Hwb],
    },
    ChannelDef {
        channel: Channel::WBlack,
        model: Model::Hwb,
        index: 2,
        rule: CLAMP_100,
        limits: &[Model::Hwb],
    },
    ChannelDef {
        channel: Channel::Cyan,
        model: Model::Cmyk,
        index: 0,
        rule: CLAMP_100,
        limits: &[Model::Cmyk],
    },
    ChannelDef {
        channel: Channel::Magenta,
        model: Model::Cmyk,
        index: 1,
        rule: CLAMP_100,
        limits: &[Model::Cmyk],
    },
    ChannelDef {
        channel: Channel::Yellow,
        model: Model::Cmyk,
        index: 2,
        rule: CLAMP_100,
        limits: &[Model::Cmyk],
    },
    ChannelDef {
        channel: Channel::Black,
        model: Model::Cmyk,
        index: 3,
        rule: CLAMP_100,
        limits: &[Model::Cmyk],
    },
    ChannelDef {
        channel: Channel::Chroma,
        model: Model::Hcg,
        index: 1,
        rule: CLAMP_100,
        limits: &[Model::Hcg],
    },
    ChannelDef {
        channel: Channel::Gray,
        model: Model::Hcg,
        index: 2,
        rule: CLAMP_100,
        limits: &[Model::Hcg],
    },
    ChannelDef {
        channel: Channel::L,
        model: Model::Lab,
        index: 0,
        rule: CLAMP_100,
        limits: &[Model::Lab],
    },
    ChannelDef {
        channel: Channel::A,
        model: Model::Lab,
        index: 1,
        rule: None,
        limits: &[Model::Lab],
    },
    ChannelDef {
        channel: Channel::B,
        model: Model::Lab,
        index: 2,
        rule: None,
        limits: &[Model::Lab],
    },
    ChannelDef {
        channel: Channel::X,
        model: Model::Xyz,
        index: 0,
        rule: CLAMP_100,
        limits: &[Model::Xyz],
    },
    ChannelDef {
        channel: Channel::Y,
        model: Model::Xyz,
        index: 1,
        rule: CLAMP_100,
        limits: &[Model::Xyz],
    },
    ChannelDef {
        channel: Channel::Z,
        model: Model::Xyz,
        index: 2,
        rule: CLAMP_100,
        limits: &[Model::Xyz],
    },
];

impl Channel {
    /// The catalog entry for this channel.
    pub(crate) fn def(self) -> &'static ChannelDef {
        let def = &CHANNELS[self as usize];
        debug_assert_eq!(def.channel, self);
        def
    }
}

/// The Channel Limiter Table: per model, per index, the registered rule.
///
/// Populated once from the accessor catalog and consulted by every color
/// construction path.
static LIMITERS: LazyLock<[[Option<Rule>; Channels::MAX]; Model::COUNT]> = LazyLock::new(|| {
    let mut table = [[None; Channels::MAX]; Model::COUNT];

    for def in CHANNELS {
        let Some(rule) = def.rule else {
            continue;
        };

        for model in def.limits {
            table[model_slot(*model)][def.index] = Some(rule);
        }
    }

    table
});

fn model_slot(model: Model) -> usize {
    model as usize
}

/// The limiter registered for a model's channel, if any.
pub(crate) fn limiter(model: Model, index: usize) -> Option<Rule> {
    LIMITERS[model_slot(model)].get(index).copied().flatten()
}
