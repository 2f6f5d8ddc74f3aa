//! Polymorphic constructor input.
//!
//! [`crate::Color::new`] accepts six input shapes, tried in a fixed priority
//! order. [`ColorInput`] makes that sum explicit, and the `From` impls let
//! callers pass the natural Rust value for each shape directly:
//!
//! ```
//! use tint::Color;
//!
//! let from_text = Color::new("rgb(10, 30, 25)").unwrap();
//! let from_values = Color::new([10.0, 30.0, 25.0]).unwrap();
//! let from_number = Color::new(0x0a1e19_u32).unwrap();
//! assert_eq!(from_text, from_values);
//! assert_eq!(from_text, from_number);
//! ```

use std::collections::BTreeMap;

use crate::color::Color;

/// One of the accepted constructor input shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    /// Nothing: yields opaque black.
    None,
    /// Another color: structural copy.
    Color(Color),
    /// A CSS color string.
    Text(String),
    /// Channel values in model order, optionally followed by alpha.
    Values(Vec<f64>),
    /// A packed 24-bit RGB integer.
    Number(u32),
    /// Channel label → value pairs, optionally including an `alpha` key.
    Map(Vec<(String, f64)>),
}

impl From<()> for ColorInput {
    fn from((): ()) -> Self {
        ColorInput::None
    }
}

impl From<Color> for ColorInput {
    fn from(color: Color) -> Self {
        ColorInput::Color(color)
    }
}

impl From<&Color> for ColorInput {
    fn from(color: &Color) -> Self {
        ColorInput::Color(color.clone())
    }
}

impl From<&str> for ColorInput {
    fn from(text: &str) -> Self {
        ColorInput::Text(text.to_owned())
    }
}

impl From<String> for ColorInput {
    fn from(text: String) -> Self {
        ColorInput::Text(text)
    }
}

impl From<u32> for ColorInput {
    fn from(number: u32) -> Self {
        ColorInput::Number(number)
    }
}

impl From<Vec<f64>> for ColorInput {
    fn from(values: Vec<f64>) -> Self {
        ColorInput::Values(values)
    }
}

impl From<&[f64]> for ColorInput {
    fn from(values: &[f64]) -> Self {
        ColorInput::Values(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for ColorInput {
    fn from(values: [f64; N]) -> Self {
        ColorInput::Values(values.to_vec())
    }
}

impl From<Vec<(String, f64)>> for ColorInput {
    fn from(pairs: Vec<(String, f64)>) -> Self {
        ColorInput::Map(pairs)
    }
}

impl From<&[(&str, f64)]> for ColorInput {
    fn from(pairs: &[(&str, f64)]) -> Self {
        ColorInput::Map(
            pairs
                .iter()
                .map(|(key, value)| ((*key).to_owned(), *value))
                .collect(),
        )
    }
}

impl<const N: usize> From<[(&str, f64); N]> for ColorInput {
    fn from(pairs: [(&str, f64); N]) -> Self {
        ColorInput::Map(
            pairs
                .into_iter()
                .map(|(key, value)| (key.to_owned(), value))
                .collect(),
        )
    }
}

impl From<&BTreeMap<&str, f64>> for ColorInput {
    fn from(map: &BTreeMap<&str, f64>) -> Self {
        ColorInput::Map(
            map.iter()
                .map(|(key, value)| ((*key).to_owned(), *value))
                .collect(),
        )
    }
}
