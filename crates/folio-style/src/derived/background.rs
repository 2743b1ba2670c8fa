//! Background layers.
//!
//! [§ 3 Backgrounds](https://www.w3.org/TR/css-backgrounds-3/#backgrounds)
//!
//! "Each box has a background layer that may be fully transparent (the
//! default), or filled with a color and/or one or more images."

use folio_common::warning::warn_once;
use serde::Serialize;

use crate::error::StyleError;
use crate::property::Property;
use crate::style::Style;
use crate::value::{AutoLength, FunctionValue, Ident, LengthValue, ResolvedValue};

/// The image of one background layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BackgroundImage {
    /// A `*-gradient()` function.
    Gradient(FunctionValue),
    /// `none`: the layer paints no image.
    None,
    /// A `url()` reference.
    Uri(String),
}

/// [§ 3.6 'background-position'](https://www.w3.org/TR/css-backgrounds-3/#background-position)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BackgroundPosition {
    /// Offset from the left edge.
    pub horizontal: LengthValue,
    /// Offset from the top edge.
    pub vertical: LengthValue,
}

/// [§ 3.9 'background-size'](https://www.w3.org/TR/css-backgrounds-3/#background-size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum BackgroundSize {
    /// "Scale the image, while preserving its intrinsic aspect ratio, to the
    /// smallest size such that both its width and its height can completely
    /// cover the background positioning area."
    Cover,
    /// "Scale the image, while preserving its intrinsic aspect ratio, to the
    /// largest size such that both its width and its height can fit inside
    /// the background positioning area."
    Contain,
    /// An explicit width and height, either of which may be `auto`.
    Explicit {
        /// Layer width.
        width: AutoLength,
        /// Layer height.
        height: AutoLength,
    },
}

/// One background image layer with its position, size and tiling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackgroundLayer {
    /// The image painted by this layer.
    pub image: BackgroundImage,
    /// Where the image is placed.
    pub position: BackgroundPosition,
    /// How large the image is drawn.
    pub size: BackgroundSize,
    /// `background-repeat` keyword.
    pub repeat: Ident,
}

impl Style<'_> {
    /// [§ 3.1 Layering Multiple Background Images](https://www.w3.org/TR/css-backgrounds-3/#layering)
    ///
    /// "The number of comma-separated items defines the number of background
    /// layers. [...] If a property doesn't have enough comma-separated values
    /// to match the number of layers, the UA must calculate its used value by
    /// repeating the list of values until there are enough."
    ///
    /// "The first image in the list is the layer closest to the user, the
    /// next one is painted behind the first, and so on."
    ///
    /// The returned layers are in paint order: index 0 is the last declared
    /// image, painted first.
    ///
    /// # Errors
    ///
    /// [`StyleError::UnexpectedValueShape`] when one of the four background
    /// properties resolved to something other than a layer list.
    pub fn background_layers(self) -> Result<Vec<BackgroundLayer>, StyleError> {
        let images = self.resolve(Property::BackgroundImage);
        let positions = self.resolve(Property::BackgroundPosition);
        let sizes = self.resolve(Property::BackgroundSize);
        let repeats = self.resolve(Property::BackgroundRepeat);

        let images = layer_list(Property::BackgroundImage, &images)?;
        let positions = layer_list(Property::BackgroundPosition, &positions)?;
        let sizes = layer_list(Property::BackgroundSize, &sizes)?;
        let repeats = layer_list(Property::BackgroundRepeat, &repeats)?;

        let mut layers = images
            .iter()
            .enumerate()
            .map(|(index, image)| {
                Ok(BackgroundLayer {
                    image: background_image(image)?,
                    position: cycle(positions, index)
                        .map_or(Ok(DEFAULT_POSITION), background_position)?,
                    size: cycle(sizes, index).map_or(Ok(DEFAULT_SIZE), background_size)?,
                    repeat: cycle(repeats, index)
                        .and_then(ResolvedValue::as_ident)
                        .unwrap_or(Ident::Repeat),
                })
            })
            .collect::<Result<Vec<_>, StyleError>>()?;
        layers.reverse();
        Ok(layers)
    }
}

const DEFAULT_POSITION: BackgroundPosition = BackgroundPosition {
    horizontal: LengthValue::percent(0.0),
    vertical: LengthValue::percent(0.0),
};

const DEFAULT_SIZE: BackgroundSize = BackgroundSize::Explicit {
    width: AutoLength::Auto,
    height: AutoLength::Auto,
};

fn layer_list(property: Property, value: &ResolvedValue) -> Result<&[ResolvedValue], StyleError> {
    value
        .as_list()
        .ok_or_else(|| StyleError::UnexpectedValueShape {
            property,
            expected: "list",
            found: value.kind(),
        })
}

/// The value for layer `index`, reusing the list from the start when it is
/// shorter than the image list.
fn cycle(values: &[ResolvedValue], index: usize) -> Option<&ResolvedValue> {
    if values.is_empty() {
        None
    } else {
        values.get(index % values.len())
    }
}

fn background_image(value: &ResolvedValue) -> Result<BackgroundImage, StyleError> {
    match value {
        ResolvedValue::Function(function) if function.is_gradient() => {
            Ok(BackgroundImage::Gradient(function.clone()))
        }
        ResolvedValue::Function(function) => {
            warn_once(
                "style",
                &format!("unsupported background image function '{}()'", function.name),
            );
            Ok(BackgroundImage::None)
        }
        ResolvedValue::Uri(uri) => Ok(BackgroundImage::Uri(uri.clone())),
        ResolvedValue::Ident(Ident::None) => Ok(BackgroundImage::None),
        other => Err(StyleError::UnexpectedValueShape {
            property: Property::BackgroundImage,
            expected: "image, gradient or none",
            found: other.kind(),
        }),
    }
}

fn background_position(value: &ResolvedValue) -> Result<BackgroundPosition, StyleError> {
    match value.as_list() {
        Some([ResolvedValue::Length(horizontal), ResolvedValue::Length(vertical)]) => {
            Ok(BackgroundPosition {
                horizontal: *horizontal,
                vertical: *vertical,
            })
        }
        _ => Err(StyleError::UnexpectedValueShape {
            property: Property::BackgroundPosition,
            expected: "horizontal and vertical offsets",
            found: value.kind(),
        }),
    }
}

fn background_size(value: &ResolvedValue) -> Result<BackgroundSize, StyleError> {
    let component = |value: &ResolvedValue| match value {
        ResolvedValue::Length(length) => Some(AutoLength::Length(*length)),
        ResolvedValue::Ident(Ident::Auto) => Some(AutoLength::Auto),
        _ => None,
    };
    let size = match value {
        ResolvedValue::Ident(Ident::Cover) => Some(BackgroundSize::Cover),
        ResolvedValue::Ident(Ident::Contain) => Some(BackgroundSize::Contain),
        ResolvedValue::List(pair) => match pair.as_slice() {
            [width, height] => component(width)
                .zip(component(height))
                .map(|(width, height)| BackgroundSize::Explicit { width, height }),
            _ => None,
        },
        _ => None,
    };
    size.ok_or_else(|| StyleError::UnexpectedValueShape {
        property: Property::BackgroundSize,
        expected: "cover, contain or a width and height",
        found: value.kind(),
    })
}
