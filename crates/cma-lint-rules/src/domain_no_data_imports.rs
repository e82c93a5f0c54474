//! Rule forbidding domain files from importing the data layer.

use crate::import_boundary::{ImportBoundaryRule, Layer, DATA_CLIENT_IMPORTS, DATA_FRAGMENTS};

/// Rule code for `domain_no_data_imports`.
pub const CODE: &str = "CMA010";

/// Rule name for `domain_no_data_imports`.
pub const NAME: &str = "domain_no_data_imports";

/// Creates a new `domain_no_data_imports` rule.
///
/// Flags, in domain files, imports of:
/// ```dart
/// import '../../data/models/user_model.dart';       // /data/, /models/
/// import 'package:app/core/datasources/local.dart'; // /datasources/
/// import 'package:dio/dio.dart';                    // HTTP/storage clients
/// ```
#[must_use]
pub fn new_domain_no_data_imports() -> ImportBoundaryRule {
    ImportBoundaryRule::new(CODE, NAME)
        .from_layer(Layer::Domain)
        .target("data")
        .forbid_fragments(DATA_FRAGMENTS)
        .forbid_packages(DATA_CLIENT_IMPORTS)
        .with_description("Domain layer must not import from the data layer")
        .with_correction("Depend on a domain abstraction (entity or repository interface) instead")
}
