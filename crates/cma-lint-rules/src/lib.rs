//! # cma-lint-rules
//!
//! Built-in Clean Modular Architecture rules for cma-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Default | Description |
//! |------|------|---------|-------------|
//! | CMA001 | `entity_no_methods` | error | Entities hold data, not behaviour |
//! | CMA002 | `entity_no_copywith` | error | No `copyWith` on entities |
//! | CMA003 | `entity_no_static` | error | No static members on entities |
//! | CMA004 | `entity_no_serialization` | error | No `toJson`/`fromJson` on entities |
//! | CMA005 | `entity_no_getters` | warning | No computed getters on entities |
//! | CMA006 | `model_extends_entity` | error | Models extend their entity |
//! | CMA007 | `model_naming_convention` | warning | Models end with the model suffix |
//! | CMA008 | `repository_interface_returns_entity` | error | Repository contracts return entities |
//! | CMA009 | `repository_uses_abstract_interface` | warning | Repository contracts are `abstract interface` |
//! | CMA010 | `domain_no_data_imports` | error | Domain does not import data |
//! | CMA011 | `domain_no_presentation_imports` | error | Domain does not import presentation |
//! | CMA012 | `data_no_presentation_imports` | error | Data does not import presentation |
//! | CMA013 | `use_lazy_singleton_for_bloc` | warning | Blocs use `registerLazySingleton` |
//! | CMA014 | `bloc_in_multiprovider` | warning | No `MultiBlocProvider` in `build` |
//! | CMA015 | `bloc_naming_convention` | warning | Bloc/Event/State suffixes |
//! | CMA016 | `cubit_simple_state` | warning | Global Cubits stay simple |
//!
//! ## Usage
//!
//! ```ignore
//! use cma_lint_core::{Analyzer, Configuration};
//! use cma_lint_rules::all_rules;
//!
//! let analyzer = Analyzer::builder()
//!     .config(Configuration::load(project_dir))
//!     .rules(all_rules())
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bloc_in_multiprovider;
mod bloc_naming_convention;
mod cubit_simple_state;
mod data_no_presentation_imports;
mod domain_no_data_imports;
mod domain_no_presentation_imports;
mod entity_members;
mod entity_no_copywith;
mod entity_no_getters;
mod entity_no_methods;
mod entity_no_serialization;
mod entity_no_static;
mod import_boundary;
mod model_extends_entity;
mod model_naming_convention;
mod registry;
mod repository_interface_returns_entity;
mod repository_uses_abstract_interface;
mod use_lazy_singleton_for_bloc;

#[cfg(test)]
mod testing;

pub use bloc_in_multiprovider::BlocInMultiProvider;
pub use bloc_naming_convention::BlocNamingConvention;
pub use cubit_simple_state::CubitSimpleState;
pub use data_no_presentation_imports::new_data_no_presentation_imports;
pub use domain_no_data_imports::new_domain_no_data_imports;
pub use domain_no_presentation_imports::new_domain_no_presentation_imports;
pub use entity_members::SERIALIZATION_NAMES;
pub use entity_no_copywith::EntityNoCopyWith;
pub use entity_no_getters::EntityNoGetters;
pub use entity_no_methods::EntityNoMethods;
pub use entity_no_serialization::EntityNoSerialization;
pub use entity_no_static::EntityNoStatic;
pub use import_boundary::{
    ImportBoundaryRule, Layer, DATA_CLIENT_IMPORTS, DATA_FRAGMENTS, FLUTTER_UI_IMPORTS,
    PRESENTATION_FRAGMENTS,
};
pub use model_extends_entity::ModelExtendsEntity;
pub use model_naming_convention::ModelNamingConvention;
pub use registry::all_rules;
pub use repository_interface_returns_entity::RepositoryInterfaceReturnsEntity;
pub use repository_uses_abstract_interface::RepositoryUsesAbstractInterface;
pub use use_lazy_singleton_for_bloc::UseLazySingletonForBloc;

/// Re-export core types for convenience.
pub use cma_lint_core::{Diagnostic, Rule, RuleBox, Severity};
