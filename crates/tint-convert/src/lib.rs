//! # tint-convert
//!
//! Color model conversion primitives and any-to-any routing.
//!
//! This crate is the numeric core under the `tint` color value type. It
//! knows fifteen color models ([`Model`]), a table of direct pairwise
//! conversion functions between them ([`conversions`]), and how to compose
//! those primitives into a conversion between *any* two models by
//! breadth-first search over the primitive-pair graph ([`conversion`]).
//!
//! # Usage
//!
//! ```
//! use tint_convert::{convert, convert_raw, Channels, Model};
//!
//! let rgb = Channels::from([10.0, 30.0, 25.0]);
//!
//! // Integer-rounded output for presentation.
//! let hsl = convert(Model::Rgb, Model::Hsl, &rgb).unwrap();
//! assert_eq!(hsl.as_slice(), &[165.0, 50.0, 8.0]);
//!
//! // Full precision for further composition.
//! let raw = convert_raw(Model::Rgb, Model::Hsl, &rgb).unwrap();
//! assert!(raw[2] < 8.0);
//! ```
//!
//! # Routing
//!
//! Routes are derived once per process and cached; see [`crate::route`] for
//! the search and the rounding policy (round once, at the outermost call,
//! never between hops).
//!
//! # Dependencies
//!
//! - [`thiserror`] - model name parse error
//! - [`tracing`] - one-shot debug event when the route table is derived
//!
//! # Used By
//!
//! - `tint-string` - CSS string codec (models + keyword table)
//! - `tint` - the `Color` value type

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channels;
pub mod conversions;
pub mod keywords;
pub mod model;
pub mod route;

pub use channels::Channels;
pub use model::{Model, UnknownModel};
pub use route::{conversion, convert, convert_raw, Conversion};
