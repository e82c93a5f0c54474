//! The built-in rule catalog.

use cma_lint_core::RuleBox;

use crate::{
    new_data_no_presentation_imports, new_domain_no_data_imports,
    new_domain_no_presentation_imports, BlocInMultiProvider, BlocNamingConvention,
    CubitSimpleState, EntityNoCopyWith, EntityNoGetters, EntityNoMethods, EntityNoSerialization,
    EntityNoStatic, ModelExtendsEntity, ModelNamingConvention, RepositoryInterfaceReturnsEntity,
    RepositoryUsesAbstractInterface, UseLazySingletonForBloc,
};

/// Returns every built-in rule, in code order.
///
/// Each call constructs a fresh list; hand it to
/// `AnalyzerBuilder::rules` and narrow it with `Analyzer::only` if needed.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(EntityNoMethods::new()),
        Box::new(EntityNoCopyWith::new()),
        Box::new(EntityNoStatic::new()),
        Box::new(EntityNoSerialization::new()),
        Box::new(EntityNoGetters::new()),
        Box::new(ModelExtendsEntity::new()),
        Box::new(ModelNamingConvention::new()),
        Box::new(RepositoryInterfaceReturnsEntity::new()),
        Box::new(RepositoryUsesAbstractInterface::new()),
        Box::new(new_domain_no_data_imports()),
        Box::new(new_domain_no_presentation_imports()),
        Box::new(new_data_no_presentation_imports()),
        Box::new(UseLazySingletonForBloc::new()),
        Box::new(BlocInMultiProvider::new()),
        Box::new(BlocNamingConvention::new()),
        Box::new(CubitSimpleState::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use cma_lint_core::Severity;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_sixteen_rules_in_code_order() {
        let rules = all_rules();
        assert_eq!(rules.len(), 16);
        let codes: Vec<_> = rules.iter().map(|r| r.code()).collect();
        let expected: Vec<String> = (1..=16).map(|n| format!("CMA{n:03}")).collect();
        assert_eq!(codes, expected);
    }

    #[test]
    fn test_names_are_unique_snake_case() {
        let rules = all_rules();
        let names: HashSet<_> = rules.iter().map(|r| r.name()).collect();
        assert_eq!(names.len(), rules.len());
        assert!(names
            .iter()
            .all(|n| n.chars().all(|c| c.is_ascii_lowercase() || c == '_')));
    }

    #[test]
    fn test_every_rule_is_described() {
        for rule in all_rules() {
            assert!(!rule.description().is_empty(), "{} has no description", rule.name());
            assert!(rule.correction().is_some(), "{} has no correction", rule.name());
        }
    }

    #[test]
    fn test_default_severities() {
        let warnings: Vec<_> = all_rules()
            .into_iter()
            .filter(|r| r.default_severity() == Severity::Warning)
            .map(|r| r.name())
            .collect();
        assert_eq!(
            warnings,
            [
                "entity_no_getters",
                "model_naming_convention",
                "repository_uses_abstract_interface",
                "use_lazy_singleton_for_bloc",
                "bloc_in_multiprovider",
                "bloc_naming_convention",
                "cubit_simple_state",
            ]
        );
    }
}
