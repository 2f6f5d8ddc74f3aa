//! Conversion routing.
//!
//! Direct conversion primitives only exist for some model pairs; everything
//! else is reached by composing them. For each source model a breadth-first
//! search over the primitive-pair graph finds the shortest hop path to every
//! reachable target, and the composed chain is stored as a [`Conversion`].
//!
//! The full table is derived once per process inside a [`LazyLock`] and
//! shared read-only afterwards; pairs with no path are simply absent and
//! surface as `None` at lookup time.
//!
//! # Rounding
//!
//! Intermediate steps of a composed conversion always run at full precision.
//! [`Conversion::apply`] rounds each output channel once, at the end;
//! [`Conversion::apply_raw`] skips rounding entirely, for callers that keep
//! composing.

use std::collections::VecDeque;
use std::sync::LazyLock;

use crate::channels::Channels;
use crate::conversions as conv;
use crate::model::Model;

/// A composed conversion between two models.
///
/// Carries the inclusive path of models it hops through, useful for
/// diagnostics:
///
/// ```
/// use tint_convert::{conversion, Model};
///
/// let to_lch = conversion(Model::Rgb, Model::Lch).unwrap();
/// assert_eq!(to_lch.path(), &[Model::Rgb, Model::Lab, Model::Lch]);
/// ```
#[derive(Debug, Clone)]
pub struct Conversion {
    path: Vec<Model>,
}

impl Conversion {
    /// Source model.
    pub fn source(&self) -> Model {
        self.path[0]
    }

    /// Target model.
    pub fn target(&self) -> Model {
        self.path[self.path.len() - 1]
    }

    /// The ordered models on the conversion path, endpoints included.
    pub fn path(&self) -> &[Model] {
        &self.path
    }

    /// Apply the conversion at full precision.
    pub fn apply_raw(&self, input: &Channels) -> Channels {
        let mut current = *input;

        for pair in self.path.windows(2) {
            current = step(pair[0], pair[1], &current);
        }

        current
    }

    /// Apply the conversion, rounding every output channel to an integer.
    pub fn apply(&self, input: &Channels) -> Channels {
        self.apply_raw(input).map(f64::round)
    }
}

/// The composed conversion between two distinct models, if a path exists.
pub fn conversion(from: Model, to: Model) -> Option<&'static Conversion> {
    ROUTES[from.index() * Model::COUNT + to.index()].as_ref()
}

/// Convert channels between models, rounding the output.
pub fn convert(from: Model, to: Model, input: &Channels) -> Option<Channels> {
    conversion(from, to).map(|c| c.apply(input))
}

/// Convert channels between models at full precision.
pub fn convert_raw(from: Model, to: Model, input: &Channels) -> Option<Channels> {
    conversion(from, to).map(|c| c.apply_raw(input))
}

/// Direct conversion targets of a model, in primitive declaration order.
///
/// The order is observable: breadth-first discovery follows it, so it picks
/// which of several equal-length paths a composed conversion takes.
fn adjacent(model: Model) -> &'static [Model] {
    match model {
        Model::Rgb => &[
            Model::Hsl,
            Model::Hsv,
            Model::Hwb,
            Model::Cmyk,
            Model::Keyword,
            Model::Xyz,
            Model::Lab,
            Model::Ansi16,
            Model::Ansi256,
            Model::Hex,
            Model::Hcg,
            Model::Apple,
            Model::Gray,
        ],
        Model::Hsl => &[Model::Rgb, Model::Hsv, Model::Hcg],
        Model::Hsv => &[Model::Rgb, Model::Hsl, Model::Ansi16, Model::Hcg],
        Model::Hwb => &[Model::Rgb, Model::Hcg],
        Model::Cmyk => &[Model::Rgb],
        Model::Xyz => &[Model::Rgb, Model::Lab],
        Model::Lab => &[Model::Xyz, Model::Lch],
        Model::Lch => &[Model::Lab],
        Model::Hex => &[Model::Rgb],
        Model::Keyword => &[Model::Rgb],
        Model::Ansi16 => &[Model::Rgb],
        Model::Ansi256 => &[Model::Rgb],
        Model::Hcg => &[Model::Rgb, Model::Hsv, Model::Hsl, Model::Hwb],
        Model::Apple => &[Model::Rgb],
        Model::Gray => &[
            Model::Rgb,
            Model::Hsl,
            Model::Hsv,
            Model::Hwb,
            Model::Cmyk,
            Model::Lab,
            Model::Hex,
        ],
    }
}

fn tri(c: &Channels) -> [f64; 3] {
    [c[0], c[1], c[2]]
}

fn quad(c: &Channels) -> [f64; 4] {
    [c[0], c[1], c[2], c[3]]
}

/// One primitive hop. Only defined for pairs listed in [`adjacent`].
fn step(from: Model, to: Model, input: &Channels) -> Channels {
    match (from, to) {
        (Model::Rgb, Model::Hsl) => conv::rgb_to_hsl(tri(input)).into(),
        (Model::Rgb, Model::Hsv) => conv::rgb_to_hsv(tri(input)).into(),
        (Model::Rgb, Model::Hwb) => conv::rgb_to_hwb(tri(input)).into(),
        (Model::Rgb, Model::Cmyk) => conv::rgb_to_cmyk(tri(input)).into(),
        (Model::Rgb, Model::Keyword) => conv::rgb_to_keyword(tri(input)).into(),
        (Model::Rgb, Model::Xyz) => conv::rgb_to_xyz(tri(input)).into(),
        (Model::Rgb, Model::Lab) => conv::rgb_to_lab(tri(input)).into(),
        (Model::Rgb, Model::Ansi16) => conv::rgb_to_ansi16(tri(input), None).into(),
        (Model::Rgb, Model::Ansi256) => conv::rgb_to_ansi256(tri(input)).into(),
        (Model::Rgb, Model::Hex) => conv::rgb_to_hex(tri(input)).into(),
        (Model::Rgb, Model::Hcg) => conv::rgb_to_hcg(tri(input)).into(),
        (Model::Rgb, Model::Apple) => conv::rgb_to_apple(tri(input)).into(),
        (Model::Rgb, Model::Gray) => conv::rgb_to_gray(tri(input)).into(),
        (Model::Hsl, Model::Rgb) => conv::hsl_to_rgb(tri(input)).into(),
        (Model::Hsl, Model::Hsv) => conv::hsl_to_hsv(tri(input)).into(),
        (Model::Hsl, Model::Hcg) => conv::hsl_to_hcg(tri(input)).into(),
        (Model::Hsv, Model::Rgb) => conv::hsv_to_rgb(tri(input)).into(),
        (Model::Hsv, Model::Hsl) => conv::hsv_to_hsl(tri(input)).into(),
        (Model::Hsv, Model::Ansi16) => conv::hsv_to_ansi16(tri(input)).into(),
        (Model::Hsv, Model::Hcg) => conv::hsv_to_hcg(tri(input)).into(),
        (Model::Hwb, Model::Rgb) => conv::hwb_to_rgb(tri(input)).into(),
        (Model::Hwb, Model::Hcg) => conv::hwb_to_hcg(tri(input)).into(),
        (Model::Cmyk, Model::Rgb) => conv::cmyk_to_rgb(quad(input)).into(),
        (Model::Xyz, Model::Rgb) => conv::xyz_to_rgb(tri(input)).into(),
        (Model::Xyz, Model::Lab) => conv::xyz_to_lab(tri(input)).into(),
        (Model::Lab, Model::Xyz) => conv::lab_to_xyz(tri(input)).into(),
        (Model::Lab, Model::Lch) => conv::lab_to_lch(tri(input)).into(),
        (Model::Lch, Model::Lab) => conv::lch_to_lab(tri(input)).into(),
        (Model::Keyword, Model::Rgb) => conv::keyword_to_rgb(input[0]).into(),
        (Model::Ansi16, Model::Rgb) => conv::ansi16_to_rgb(input[0]).into(),
        (Model::Ansi256, Model::Rgb) => conv::ansi256_to_rgb(input[0]).into(),
        (Model::Hex, Model::Rgb) => conv::hex_to_rgb(input[0]).into(),
        (Model::Hcg, Model::Rgb) => conv::hcg_to_rgb(tri(input)).into(),
        (Model::Hcg, Model::Hsv) => conv::hcg_to_hsv(tri(input)).into(),
        (Model::Hcg, Model::Hsl) => conv::hcg_to_hsl(tri(input)).into(),
        (Model::Hcg, Model::Hwb) => conv::hcg_to_hwb(tri(input)).into(),
        (Model::Apple, Model::Rgb) => conv::apple_to_rgb(tri(input)).into(),
        (Model::Gray, Model::Rgb) => conv::gray_to_rgb(input[0]).into(),
        (Model::Gray, Model::Hsl) => conv::gray_to_hsl(input[0]).into(),
        (Model::Gray, Model::Hsv) => conv::gray_to_hsl(input[0]).into(),
        (Model::Gray, Model::Hwb) => conv::gray_to_hwb(input[0]).into(),
        (Model::Gray, Model::Cmyk) => conv::gray_to_cmyk(input[0]).into(),
        (Model::Gray, Model::Lab) => conv::gray_to_lab(input[0]).into(),
        (Model::Gray, Model::Hex) => conv::gray_to_hex(input[0]).into(),
        _ => unreachable!("no direct conversion {from} -> {to}"),
    }
}

static ROUTES: LazyLock<Vec<Option<Conversion>>> = LazyLock::new(build_routes);

fn build_routes() -> Vec<Option<Conversion>> {
    tracing::debug!(models = Model::COUNT, "deriving conversion route tables");

    let mut table: Vec<Option<Conversion>> = Vec::with_capacity(Model::COUNT * Model::COUNT);
    table.resize_with(Model::COUNT * Model::COUNT, || None);

    for from in Model::ALL {
        let parents = derive_bfs(from);

        for to in Model::ALL {
            // No path, or the source itself.
            if parents[to.index()].is_none() {
                continue;
            }

            let mut path = vec![to];
            let mut cursor = to;

            while let Some(parent) = parents[cursor.index()] {
                path.push(parent);
                cursor = parent;
            }

            path.reverse();
            table[from.index() * Model::COUNT + to.index()] = Some(Conversion { path });
        }
    }

    table
}

/// Classic FIFO breadth-first search; returns each node's parent.
fn derive_bfs(from: Model) -> [Option<Model>; Model::COUNT] {
    let mut distance = [-1_i32; Model::COUNT];
    let mut parent: [Option<Model>; Model::COUNT] = [None; Model::COUNT];
    let mut queue = VecDeque::new();

    distance[from.index()] = 0;
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        for &next in adjacent(current) {
            if distance[next.index()] == -1 {
                distance[next.index()] = distance[current.index()] + 1;
                parent[next.index()] = Some(current);
                queue.push_back(next);
            }
        }
    }

    parent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pair_is_routable() {
        for from in Model::ALL {
            for to in Model::ALL {
                if from == to {
                    assert!(conversion(from, to).is_none());
                } else {
                    let conv = conversion(from, to)
                        .unwrap_or_else(|| panic!("no route {from} -> {to}"));
                    assert_eq!(conv.source(), from);
                    assert_eq!(conv.target(), to);
                }
            }
        }
    }

    #[test]
    fn shortest_paths_follow_declaration_order() {
        let rgb_lch = conversion(Model::Rgb, Model::Lch).unwrap();
        assert_eq!(rgb_lch.path(), &[Model::Rgb, Model::Lab, Model::Lch]);

        let hsl_hwb = conversion(Model::Hsl, Model::Hwb).unwrap();
        assert_eq!(hsl_hwb.path(), &[Model::Hsl, Model::Rgb, Model::Hwb]);

        let keyword_hsl = conversion(Model::Keyword, Model::Hsl).unwrap();
        assert_eq!(
            keyword_hsl.path(),
            &[Model::Keyword, Model::Rgb, Model::Hsl]
        );

        let gray_lch = conversion(Model::Gray, Model::Lch).unwrap();
        assert_eq!(gray_lch.path(), &[Model::Gray, Model::Lab, Model::Lch]);
    }

    #[test]
    fn apply_rounds_once_at_the_end() {
        let input = Channels::from([10.0, 30.0, 25.0]);

        let rounded = convert(Model::Rgb, Model::Hsl, &input).unwrap();
        assert_eq!(rounded.as_slice(), &[165.0, 50.0, 8.0]);

        let raw = convert_raw(Model::Rgb, Model::Hsl, &input).unwrap();
        assert!((raw[2] - 20.0 / 255.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn composed_chain_matches_manual_composition() {
        let input = Channels::from([10.0, 30.0, 25.0]);

        let composed = convert_raw(Model::Rgb, Model::Lch, &input).unwrap();
        let manual: Channels =
            conv::lab_to_lch(conv::rgb_to_lab([10.0, 30.0, 25.0])).into();
        assert_eq!(composed.as_slice(), manual.as_slice());
    }

    #[test]
    fn round_trips_stay_within_one() {
        let rgb = Channels::from([10.0, 30.0, 25.0]);

        for target in Model::ALL {
            if target == Model::Rgb
                || matches!(
                    target,
                    Model::Ansi16 | Model::Ansi256 | Model::Keyword | Model::Gray
                )
            {
                // Palette quantization and gray averaging are intentionally lossy.
                continue;
            }

            let there = convert_raw(Model::Rgb, target, &rgb).unwrap();
            let back = convert(target, Model::Rgb, &there).unwrap();

            for (out, original) in back.iter().zip(rgb.iter()) {
                assert!(
                    (out - original).abs() <= 1.0,
                    "rgb -> {target} -> rgb drifted: {out} vs {original}"
                );
            }
        }
    }
}
