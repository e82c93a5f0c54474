//! Rule forbidding domain files from importing the presentation layer.

use crate::import_boundary::{
    ImportBoundaryRule, Layer, FLUTTER_UI_IMPORTS, PRESENTATION_FRAGMENTS,
};

/// Rule code for `domain_no_presentation_imports`.
pub const CODE: &str = "CMA011";

/// Rule name for `domain_no_presentation_imports`.
pub const NAME: &str = "domain_no_presentation_imports";

/// Creates a new `domain_no_presentation_imports` rule.
///
/// The domain must stay UI-agnostic: no blocs, pages, widgets, and no
/// Flutter UI libraries.
#[must_use]
pub fn new_domain_no_presentation_imports() -> ImportBoundaryRule {
    ImportBoundaryRule::new(CODE, NAME)
        .from_layer(Layer::Domain)
        .target("presentation")
        .forbid_fragments(PRESENTATION_FRAGMENTS)
        .forbid_packages(FLUTTER_UI_IMPORTS)
        .with_description("Domain layer must not import from the presentation layer")
        .with_correction("Keep the domain free of UI code; let presentation depend on domain instead")
}
