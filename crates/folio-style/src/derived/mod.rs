//! Composite values computed from several resolved properties.
//!
//! Each value is computed at most once per style and stored in a
//! [`DerivedCaches`] cell on the style node. The cells are not thread-safe;
//! a style tree belongs to the thread that renders its document.

mod background;
mod boxes;
mod font;

use std::cell::OnceCell;
use std::rc::Rc;

pub use background::{BackgroundImage, BackgroundLayer, BackgroundPosition, BackgroundSize};
pub use boxes::{AllowedEdges, BorderEdges, BoxEdges, Edge};
pub use font::{FontSizeTable, FontSpecification};

use crate::context::{FontMetrics, ResolvedFont};

/// Lazily filled composite values of one style.
#[derive(Debug, Default)]
pub struct DerivedCaches {
    pub(crate) margin: OnceCell<Rc<BoxEdges>>,
    pub(crate) padding: OnceCell<Rc<BoxEdges>>,
    pub(crate) border: OnceCell<Rc<BorderEdges>>,
    pub(crate) font: OnceCell<Rc<FontSpecification>>,
    pub(crate) resolved_font: OnceCell<Rc<ResolvedFont>>,
    pub(crate) font_metrics: OnceCell<FontMetrics>,
    pub(crate) line_height: OnceCell<f32>,
}
