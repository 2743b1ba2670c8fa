//! CSS value types
//!
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! - [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//! - [CSS 2.1 § 6.1 Specified, computed, and actual values](https://www.w3.org/TR/CSS2/cascade.html#value-stages)

mod color;
mod ident;
mod length;
mod resolved;
mod specified;

pub use color::ColorValue;
pub use ident::Ident;
pub use length::{AutoLength, DEFAULT_FONT_SIZE_PX, LengthUnit, LengthValue};
pub use resolved::{CounterData, FunctionValue, ResolvedValue};
pub use specified::SpecifiedValue;
