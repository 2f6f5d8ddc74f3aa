//! # tint
//!
//! An immutable color value type with any-to-any model conversion, named
//! channel accessors, and derived-color operations.
//!
//! # Construction
//!
//! [`Color::new`] accepts a CSS string, a value list, a packed 24-bit
//! integer, a channel map, another color, or nothing at all:
//!
//! ```
//! use tint::Color;
//!
//! let named = Color::new("blue").unwrap();
//! let hex = Color::new("#0A1E19").unwrap();
//! let packed = Color::new(0x0a1e19_u32).unwrap();
//! let mapped = Color::new([("r", 10.0), ("g", 30.0), ("b", 25.0)]).unwrap();
//!
//! assert_eq!(hex, packed);
//! assert_eq!(hex, mapped);
//! assert_eq!(named.to_rgb().array(), vec![0.0, 0.0, 255.0]);
//! ```
//!
//! # Conversion and accessors
//!
//! Conversion methods view a color in another model; channel accessors read
//! and replace single named channels, producing a new value each time:
//!
//! ```
//! use tint::Color;
//!
//! let color = Color::rgb(10.0, 30.0, 25.0);
//! assert_eq!(color.to_hsl().round(0).array(), vec![165.0, 50.0, 8.0]);
//! assert_eq!(color.with_red(255.0).red(), 255.0);
//!
//! // Out-of-range writes clamp; hue wraps.
//! assert_eq!(color.with_red(400.0).red(), 255.0);
//! assert_eq!(color.with_hue(400.0).hue(), 40.0);
//! ```
//!
//! # Derived colors
//!
//! ```
//! use tint::Color;
//!
//! let red = Color::new("#f00").unwrap();
//! let blue = Color::new("#00f").unwrap();
//! assert_eq!(red.mix(&blue, None).hex(), "#800080");
//! assert_eq!(red.negate().hex(), "#00FFFF");
//! assert_eq!(red.level(&Color::new("white").unwrap()), "");
//! ```
//!
//! # Crate layout
//!
//! - `tint-convert` - conversion primitives, the BFS route table, and the
//!   CSS keyword table
//! - `tint-string` - the CSS string codec
//! - this crate - the [`Color`] value type and the channel accessor catalog
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` for [`Color`] and [`Model`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channel;
pub mod color;
pub mod error;
pub mod input;

pub use channel::{Channel, Rule};
pub use color::Color;
pub use error::{ColorError, Result};
pub use input::ColorInput;
pub use tint_convert::{Channels, Model};
