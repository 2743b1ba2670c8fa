//! Render context and font services.
//!
//! [§ 10.8 Line height calculations](https://www.w3.org/TR/CSS2/visudet.html#line-height)
//!
//! "CSS assumes that every font has font metrics that specify a
//! characteristic height above the baseline and a depth below it."
//!
//! The engine never loads fonts itself. It asks a [`FontContext`] for a
//! concrete font and its metrics, and caches the answers per style.

use serde::Serialize;

use crate::derived::FontSpecification;
use crate::value::Ident;

/// Device and font information needed to turn lengths into device units.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// Device units per CSS pixel.
    pub dots_per_px: f32,
    /// Source of concrete fonts and their metrics.
    pub fonts: &'a dyn FontContext,
}

impl<'a> RenderContext<'a> {
    /// A context with one device unit per CSS pixel.
    #[must_use]
    pub fn new(fonts: &'a dyn FontContext) -> Self {
        Self {
            dots_per_px: 1.0,
            fonts,
        }
    }

    /// The same context at a different resolution.
    #[must_use]
    pub const fn with_dots_per_px(mut self, dots_per_px: f32) -> Self {
        self.dots_per_px = dots_per_px;
        self
    }
}

impl std::fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("dots_per_px", &self.dots_per_px)
            .finish_non_exhaustive()
    }
}

/// A concrete font chosen for a [`FontSpecification`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedFont {
    /// The family that was matched.
    pub family: String,
    /// Size in device units.
    pub size: f32,
    /// Numeric weight, 100..=900.
    pub weight: u16,
    /// Whether an italic or oblique face was selected.
    pub italic: bool,
    /// Whether small capitals are synthesized.
    pub small_caps: bool,
}

/// Vertical metrics of a resolved font, in device units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FontMetrics {
    /// Height above the baseline.
    pub ascent: f32,
    /// Depth below the baseline.
    pub descent: f32,
    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    /// "the x-height of the first available font"
    pub x_height: f32,
}

/// Supplier of concrete fonts and their metrics.
pub trait FontContext {
    /// Pick a concrete font for a specification.
    fn resolve_font(&self, spec: &FontSpecification) -> ResolvedFont;

    /// Measure a font picked by [`FontContext::resolve_font`].
    fn metrics(&self, font: &ResolvedFont) -> FontMetrics;
}

/// Approximate font metrics using fixed ratios.
///
/// Without access to actual font data, ascent, descent and x-height are fixed
/// fractions of the font size, typical for Latin text faces. This is used as
/// a fallback when no font backend is wired in, and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateFontContext;

impl ApproximateFontContext {
    const ASCENT_RATIO: f32 = 0.8;
    const DESCENT_RATIO: f32 = 0.2;
    const X_HEIGHT_RATIO: f32 = 0.5;
}

impl FontContext for ApproximateFontContext {
    fn resolve_font(&self, spec: &FontSpecification) -> ResolvedFont {
        ResolvedFont {
            family: spec
                .families
                .first()
                .cloned()
                .unwrap_or_else(|| "serif".to_string()),
            size: spec.size,
            weight: spec.weight,
            italic: matches!(spec.style, Ident::Italic | Ident::Oblique),
            small_caps: spec.variant == Ident::SmallCaps,
        }
    }

    fn metrics(&self, font: &ResolvedFont) -> FontMetrics {
        FontMetrics {
            ascent: font.size * Self::ASCENT_RATIO,
            descent: font.size * Self::DESCENT_RATIO,
            x_height: font.size * Self::X_HEIGHT_RATIO,
        }
    }
}
