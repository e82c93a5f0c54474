//! Architectural role inference.
//!
//! A class's role is derived from its path first and its shape second. The
//! shape heuristic only applies inside the domain layer and errs toward
//! leaving a class unclassified: a missed entity costs a few diagnostics,
//! a wrongly classified one floods the file with them.

use std::fmt;
use std::path::Path;

use crate::config::Configuration;
use crate::syntax::ClassDecl;
use crate::utils::paths::{contains_fragment, normalize};

/// Architectural role of a class declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassRole {
    /// Pure-data domain object.
    Entity,
    /// Data-layer object extending an entity.
    Model,
    /// Abstract repository contract in the domain layer.
    RepositoryInterface,
    /// Concrete repository in the data layer.
    RepositoryImplementation,
    /// Event-driven state unit.
    Bloc,
    /// Method-driven state unit.
    Cubit,
    /// Bloc event.
    Event,
    /// Bloc or Cubit state.
    State,
    /// App-wide state unit under the core directory.
    GlobalCubit,
    /// None of the above.
    Unclassified,
}

impl fmt::Display for ClassRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Entity => "entity",
            Self::Model => "model",
            Self::RepositoryInterface => "repository interface",
            Self::RepositoryImplementation => "repository implementation",
            Self::Bloc => "bloc",
            Self::Cubit => "cubit",
            Self::Event => "event",
            Self::State => "state",
            Self::GlobalCubit => "global cubit",
            Self::Unclassified => "unclassified",
        };
        f.write_str(s)
    }
}

/// Resolves [`ClassRole`]s against a configuration.
///
/// Pure: the same (class, path, configuration) always yields the same role.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    config: &'a Configuration,
}

impl<'a> Classifier<'a> {
    /// Creates a classifier bound to a configuration.
    #[must_use]
    pub fn new(config: &'a Configuration) -> Self {
        Self { config }
    }

    /// Returns the single role of `class` declared in the file at `path`.
    #[must_use]
    pub fn classify(&self, class: &ClassDecl, path: &Path) -> ClassRole {
        if self.is_entity(class, path) {
            return ClassRole::Entity;
        }
        if self.is_model(class, path) {
            return ClassRole::Model;
        }
        if self.is_repository_interface(class, path) {
            return ClassRole::RepositoryInterface;
        }
        if self.is_repository_implementation(class, path) {
            return ClassRole::RepositoryImplementation;
        }
        if let Some(role) = self.state_unit_role(class) {
            if role == ClassRole::Cubit && self.config.is_global_cubit_path(path) {
                return ClassRole::GlobalCubit;
            }
            return role;
        }
        if class.name.ends_with("Event") {
            return ClassRole::Event;
        }
        if class.name.ends_with("State") {
            return ClassRole::State;
        }
        ClassRole::Unclassified
    }

    /// Entity test, in priority order: model-suffix veto, configured
    /// pattern, legacy path layout, then the domain shape fallback.
    #[must_use]
    pub fn is_entity(&self, class: &ClassDecl, path: &Path) -> bool {
        if self.has_model_suffix(&class.name) {
            return false;
        }
        if self.config.is_entity_path(path) {
            return true;
        }
        let p = normalize(path);
        if contains_fragment(&p, "domain/entities")
            || (contains_fragment(&p, "entities") && contains_fragment(&p, "domain"))
        {
            return true;
        }
        contains_fragment(&p, "domain")
            && !contains_fragment(&p, "models")
            && has_entity_shape(class)
    }

    /// Model test. Never true for a class that qualifies as an entity.
    #[must_use]
    pub fn is_model(&self, class: &ClassDecl, path: &Path) -> bool {
        if self.is_entity(class, path) {
            return false;
        }
        self.has_model_suffix(&class.name) || self.is_model_location(path)
    }

    /// Path is a model location: a configured model pattern or the legacy
    /// `data/models` layout.
    #[must_use]
    pub fn is_model_location(&self, path: &Path) -> bool {
        if self.config.is_model_path(path) {
            return true;
        }
        let p = normalize(path);
        contains_fragment(&p, "data/models")
            || (contains_fragment(&p, "models") && contains_fragment(&p, "data"))
    }

    /// Abstract or interface class under `domain/repositories`.
    #[must_use]
    pub fn is_repository_interface(&self, class: &ClassDecl, path: &Path) -> bool {
        class.is_abstract_like() && self.config.is_repository_interface_path(path)
    }

    /// Concrete `*RepositoryImpl`, or concrete `*Repository` under `data/repositories`.
    #[must_use]
    pub fn is_repository_implementation(&self, class: &ClassDecl, path: &Path) -> bool {
        if class.is_abstract_like() {
            return false;
        }
        let suffix = self.config.naming.repository_suffix.as_str();
        if suffix.is_empty() {
            return false;
        }
        class.name.ends_with(&format!("{suffix}Impl"))
            || (class.name.ends_with(suffix)
                && contains_fragment(&normalize(path), "data/repositories"))
    }

    /// Bloc or Cubit, judged by supertype first, then by name suffix.
    fn state_unit_role(&self, class: &ClassDecl) -> Option<ClassRole> {
        if extends_base(class, "Bloc") {
            return Some(ClassRole::Bloc);
        }
        if extends_base(class, "Cubit") {
            return Some(ClassRole::Cubit);
        }
        let naming = &self.config.naming;
        if !naming.bloc_suffix.is_empty() && class.name.ends_with(&naming.bloc_suffix) {
            return Some(ClassRole::Bloc);
        }
        if !naming.cubit_suffix.is_empty() && class.name.ends_with(&naming.cubit_suffix) {
            return Some(ClassRole::Cubit);
        }
        None
    }

    fn has_model_suffix(&self, name: &str) -> bool {
        let suffix = &self.config.naming.model_suffix;
        !suffix.is_empty() && name.ends_with(suffix.as_str())
    }
}

/// Returns true if the class `extends` a type whose base name ends with `base`
/// (`Bloc<E, S>`, `HydratedBloc<E, S>`, `bloc.Bloc<E, S>`).
#[must_use]
pub fn extends_base(class: &ClassDecl, base: &str) -> bool {
    class
        .extends
        .as_ref()
        .is_some_and(|ty| ty.base_name().ends_with(base))
}

/// All instance fields final, at least one field, at least one const constructor.
fn has_entity_shape(class: &ClassDecl) -> bool {
    let mut fields = class.fields().filter(|f| !f.is_static).peekable();
    if fields.peek().is_none() {
        return false;
    }
    fields.all(|f| f.is_final || f.is_const) && class.constructors().any(|c| c.is_const)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::build::*;

    fn classify(class: &ClassDecl, path: &str) -> ClassRole {
        let config = Configuration::default();
        Classifier::new(&config).classify(class, Path::new(path))
    }

    fn plain_entity(name: &str) -> ClassDecl {
        class(name)
            .field(final_field("String", "id"))
            .constructor(const_constructor(["id"]))
            .build()
    }

    #[test]
    fn entity_by_configured_path() {
        let c = class("User").build();
        assert_eq!(
            classify(&c, "lib/features/auth/domain/entities/user.dart"),
            ClassRole::Entity
        );
    }

    #[test]
    fn model_suffix_vetoes_entity() {
        let c = plain_entity("UserModel");
        assert_eq!(
            classify(&c, "lib/features/auth/domain/entities/user_model.dart"),
            ClassRole::Model
        );
    }

    #[test]
    fn legacy_entities_under_domain() {
        let config = Configuration::parse(
            "clean_modular_architecture:\n  structure:\n    entity_patterns: ['**/nowhere/**']\n",
        )
        .unwrap();
        let classifier = Classifier::new(&config);
        let c = class("Order").build();
        assert!(classifier.is_entity(&c, Path::new("lib/domain/shop/entities/order.dart")));
    }

    #[test]
    fn shape_fallback_in_domain() {
        let c = plain_entity("Money");
        assert_eq!(
            classify(&c, "lib/features/shop/domain/value_objects/money.dart"),
            ClassRole::Entity
        );
    }

    #[test]
    fn shape_fallback_rejects_mutable_field() {
        let c = class("Money")
            .field(var_field("int", "cents"))
            .constructor(const_constructor(["cents"]))
            .build();
        assert_eq!(
            classify(&c, "lib/features/shop/domain/value_objects/money.dart"),
            ClassRole::Unclassified
        );
    }

    #[test]
    fn shape_fallback_rejects_non_const_constructor() {
        let c = class("Money")
            .field(final_field("int", "cents"))
            .constructor(constructor(["cents"]))
            .build();
        assert_eq!(
            classify(&c, "lib/features/shop/domain/value_objects/money.dart"),
            ClassRole::Unclassified
        );
    }

    #[test]
    fn domain_class_without_members_is_unclassified() {
        let c = class("Marker").build();
        assert_eq!(
            classify(&c, "lib/features/shop/domain/marker.dart"),
            ClassRole::Unclassified
        );
    }

    #[test]
    fn shape_fallback_skips_models_dir() {
        let c = plain_entity("Money");
        let config = Configuration::default();
        assert!(!Classifier::new(&config)
            .is_entity(&c, Path::new("lib/domain/models/money.dart")));
    }

    #[test]
    fn entity_and_model_are_exclusive() {
        let config = Configuration::default();
        let classifier = Classifier::new(&config);
        let c = plain_entity("User");
        for path in [
            "lib/features/a/domain/entities/user.dart",
            "lib/features/a/data/models/user.dart",
            "lib/features/a/domain/entities/data/models/user.dart",
        ] {
            let p = Path::new(path);
            assert!(!(classifier.is_entity(&c, p) && classifier.is_model(&c, p)), "{path}");
        }
    }

    #[test]
    fn model_by_path_or_suffix() {
        let c = class("UserDto").build();
        assert_eq!(
            classify(&c, "lib/features/auth/data/models/user_dto.dart"),
            ClassRole::Model
        );
        let c = class("UserModel").build();
        assert_eq!(classify(&c, "lib/whatever/user_model.dart"), ClassRole::Model);
    }

    #[test]
    fn repository_roles() {
        let contract = class("AuthRepository").abstract_().build();
        assert_eq!(
            classify(&contract, "lib/features/auth/domain/repositories/auth_repository.dart"),
            ClassRole::RepositoryInterface
        );
        let implementation = class("AuthRepositoryImpl").build();
        assert_eq!(
            classify(
                &implementation,
                "lib/features/auth/data/repositories/auth_repository_impl.dart"
            ),
            ClassRole::RepositoryImplementation
        );
        let concrete = class("AuthRepository").build();
        assert_eq!(
            classify(&concrete, "lib/features/auth/data/repositories/auth_repository.dart"),
            ClassRole::RepositoryImplementation
        );
    }

    #[test]
    fn state_unit_roles() {
        let bloc = class("AuthBloc")
            .extends(generic("Bloc", [ty("AuthEvent"), ty("AuthState")]))
            .build();
        assert_eq!(
            classify(&bloc, "lib/features/auth/presentation/bloc/auth_bloc.dart"),
            ClassRole::Bloc
        );

        let cubit = class("Counter").extends(generic("Cubit", [ty("int")])).build();
        assert_eq!(classify(&cubit, "lib/features/counter/counter.dart"), ClassRole::Cubit);

        let global = class("ThemeCubit").build();
        assert_eq!(classify(&global, "lib/core/cubits/theme_cubit.dart"), ClassRole::GlobalCubit);
    }

    #[test]
    fn event_and_state_by_name() {
        assert_eq!(
            classify(
                &class("AuthEvent").abstract_().build(),
                "lib/features/auth/presentation/bloc/auth_event.dart"
            ),
            ClassRole::Event
        );
        assert_eq!(
            classify(
                &class("AuthState").build(),
                "lib/features/auth/presentation/bloc/auth_state.dart"
            ),
            ClassRole::State
        );
    }

    #[test]
    fn extends_base_strips_prefix() {
        let c = class("X").extends(generic("bloc.Bloc", [ty("E"), ty("S")])).build();
        assert!(extends_base(&c, "Bloc"));
        assert!(!extends_base(&class("Y").build(), "Bloc"));
    }
}
