//! Rule forbidding data-layer files from importing the presentation layer.

use crate::import_boundary::{
    ImportBoundaryRule, Layer, FLUTTER_UI_IMPORTS, PRESENTATION_FRAGMENTS,
};

/// Rule code for `data_no_presentation_imports`.
pub const CODE: &str = "CMA012";

/// Rule name for `data_no_presentation_imports`.
pub const NAME: &str = "data_no_presentation_imports";

/// Creates a new `data_no_presentation_imports` rule.
#[must_use]
pub fn new_data_no_presentation_imports() -> ImportBoundaryRule {
    ImportBoundaryRule::new(CODE, NAME)
        .from_layer(Layer::Data)
        .target("presentation")
        .forbid_fragments(PRESENTATION_FRAGMENTS)
        .forbid_packages(FLUTTER_UI_IMPORTS)
        .with_description("Data layer must not import from the presentation layer")
        .with_correction("Expose data through repositories; presentation depends on data, not the reverse")
}
