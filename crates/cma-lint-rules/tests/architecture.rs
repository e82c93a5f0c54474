//! Integration test: the full rule catalog end-to-end via Analyzer.
//!
//! Uses `*.ast.json` dumps under `tests/fixtures/` plus trees built in
//! place to verify that each architectural mistake is reported once, by
//! the rule that owns it.

use cma_lint_core::syntax::build::*;
use cma_lint_core::syntax::ClassDecl;
use cma_lint_core::{Analyzer, Configuration, LintResult, Severity, SourceUnit};
use cma_lint_rules::all_rules;
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> SourceUnit {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{name}.ast.json"));
    SourceUnit::from_file(&path).expect("fixture should load")
}

fn analyze(config: Configuration, units: &[SourceUnit]) -> LintResult {
    Analyzer::builder()
        .config(config)
        .rules(all_rules())
        .build()
        .analyze(units)
}

fn analyze_default(units: &[SourceUnit]) -> LintResult {
    analyze(Configuration::default(), units)
}

fn describe(result: &LintResult) -> Vec<String> {
    result.diagnostics.iter().map(ToString::to_string).collect()
}

fn entity_unit(class: ClassDecl) -> SourceUnit {
    SourceUnit::new(
        "lib/features/auth/domain/entities/user.dart",
        unit().class(class).build(),
    )
}

// ── Scenarios: one mistake, one diagnostic ──

#[test]
fn entity_copywith_reports_exactly_one_diagnostic() {
    let result = analyze_default(&[fixture("parent_copywith")]);

    assert_eq!(result.diagnostics.len(), 1, "{:#?}", describe(&result));
    let d = &result.diagnostics[0];
    assert_eq!(d.code, "CMA002");
    assert_eq!(d.rule, "entity_no_copywith");
    assert_eq!(d.severity, Severity::Error);
    assert_eq!(d.location.line, 9);
    assert!(d.message.contains("Parent"));
}

#[test]
fn usecase_importing_model_reports_exactly_one_diagnostic() {
    let result = analyze_default(&[fixture("login_usecase")]);

    assert_eq!(result.diagnostics.len(), 1, "{:#?}", describe(&result));
    let d = &result.diagnostics[0];
    assert_eq!(d.rule, "domain_no_data_imports");
    assert_eq!(d.location.line, 1);
}

#[test]
fn singleton_bloc_registration_reports_exactly_one_diagnostic() {
    let result = analyze_default(&[fixture("injection_container")]);

    assert_eq!(result.diagnostics.len(), 1, "{:#?}", describe(&result));
    let d = &result.diagnostics[0];
    assert_eq!(d.rule, "use_lazy_singleton_for_bloc");
    assert_eq!(d.severity, Severity::Warning);
    assert_eq!(d.location.line, 6);
    assert_eq!(d.location.offset, 120);
    assert_eq!(d.location.length, 42);
}

#[test]
fn clean_entity_has_no_diagnostics() {
    let result = analyze_default(&[fixture("user_entity")]);
    assert!(result.diagnostics.is_empty(), "{:#?}", describe(&result));
    assert_eq!(result.files_checked, 1);
}

// ── Entity member ownership ──

#[test]
fn each_entity_member_is_owned_by_one_rule() {
    let class = class("User")
        .field(final_field("String", "first"))
        .field(final_field("String", "last"))
        .field(static_field("int", "maxLength"))
        .constructor(const_constructor(["first", "last"]))
        .method(method("copyWith").returns(ty("User")).at(10).build())
        .method(
            method("toJson")
                .returns(generic("Map", [ty("String"), ty("dynamic")]))
                .at(11)
                .build(),
        )
        .method(
            getter("fullName")
                .returns(ty("String"))
                .arrow(literal("'$first $last'"))
                .at(12)
                .build(),
        )
        .method(method("validate").returns(ty("bool")).at(13).build())
        .build();

    let result = analyze_default(&[entity_unit(class)]);

    let mut rules: Vec<&str> = result.diagnostics.iter().map(|d| d.rule.as_str()).collect();
    rules.sort_unstable();
    assert_eq!(
        rules,
        [
            "entity_no_copywith",
            "entity_no_getters",
            "entity_no_methods",
            "entity_no_serialization",
            "entity_no_static",
        ],
        "{:#?}",
        describe(&result)
    );
}

#[test]
fn static_serialization_member_is_reported_once() {
    let class = class("User")
        .field(final_field("String", "id"))
        .constructor(const_constructor(["id"]))
        .method(method("fromJson").static_().returns(ty("User")).build())
        .build();

    let result = analyze_default(&[entity_unit(class)]);

    assert_eq!(result.diagnostics.len(), 1, "{:#?}", describe(&result));
    assert_eq!(result.diagnostics[0].rule, "entity_no_serialization");
}

#[test]
fn computed_hash_code_getter_is_reported() {
    let class = class("User")
        .field(final_field("int", "id"))
        .constructor(const_constructor(["id"]))
        .method(
            getter("hashCode")
                .returns(ty("int"))
                .arrow(property(ident("id"), "hashCode"))
                .build(),
        )
        .build();
    let unit = SourceUnit::new(
        "lib/features/a/domain/entities/user.dart",
        unit().class(class).build(),
    );

    let result = analyze_default(&[unit]);

    assert_eq!(result.diagnostics.len(), 1, "{:#?}", describe(&result));
    assert_eq!(result.diagnostics[0].rule, "entity_no_getters");
}

// ── Models ──

#[test]
fn model_without_entity_supertype() {
    let model = SourceUnit::new(
        "lib/features/auth/data/models/user_model.dart",
        unit()
            .class(class("UserModel").field(final_field("String", "id")).build())
            .build(),
    );
    let result = analyze_default(&[model]);

    assert_eq!(result.diagnostics.len(), 1, "{:#?}", describe(&result));
    assert_eq!(result.diagnostics[0].rule, "model_extends_entity");
}

#[test]
fn model_extending_entity_is_clean() {
    let model = SourceUnit::new(
        "lib/features/auth/data/models/user_model.dart",
        unit()
            .import("../../domain/entities/user.dart")
            .class(
                class("UserModel")
                    .extends(ty("User"))
                    .constructor(factory_constructor("fromJson"))
                    .method(
                        method("toJson")
                            .returns(generic("Map", [ty("String"), ty("dynamic")]))
                            .build(),
                    )
                    .build(),
            )
            .build(),
    );
    let result = analyze_default(&[model]);
    assert!(result.diagnostics.is_empty(), "{:#?}", describe(&result));
}

// ── Layer boundaries ──

#[test]
fn domain_imports_are_checked_per_directive() {
    let usecase = SourceUnit::new(
        "lib/features/auth/domain/usecases/logout_usecase.dart",
        unit()
            .import("dart:async")
            .import("package:flutter/material.dart")
            .import("../../data/datasources/auth_remote.dart")
            .import("../entities/user.dart")
            .build(),
    );
    let result = analyze_default(&[usecase]);

    let rules: Vec<&str> = result.diagnostics.iter().map(|d| d.rule.as_str()).collect();
    assert_eq!(
        rules,
        ["domain_no_presentation_imports", "domain_no_data_imports"],
        "{:#?}",
        describe(&result)
    );
}

// ── Configuration ──

#[test]
fn project_config_overrides_severity() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("clean_modular_architecture.yaml"),
        "clean_modular_architecture:\n  lint:\n    severity:\n      entity_no_copywith: warning\n",
    )
    .expect("write config");

    let config = Configuration::load(dir.path());
    let result = analyze(config, &[fixture("parent_copywith")]);

    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].severity, Severity::Warning);
    assert!(!result.has_errors());
}

#[test]
fn project_config_can_ignore_a_rule() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("analysis_options.yaml"),
        "include: package:flutter_lints/flutter.yaml\n\
         clean_modular_architecture:\n  lint:\n    severity:\n      use_lazy_singleton_for_bloc: ignore\n",
    )
    .expect("write config");

    let config = Configuration::load(dir.path());
    let result = analyze(config, &[fixture("injection_container")]);
    assert!(result.diagnostics.is_empty(), "{:#?}", describe(&result));
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Configuration::load(dir.path());
    assert_eq!(config, Configuration::default());
    assert_eq!(analyze(config, &[fixture("parent_copywith")]).diagnostics.len(), 1);
}

#[test]
fn custom_entity_pattern_is_honoured() {
    let config = Configuration::parse(
        "clean_modular_architecture:\n  structure:\n    entity_patterns: ['domain/objects']\n",
    )
    .expect("config");
    let class = class("Order")
        .field(final_field("String", "id"))
        .method(method("copyWith").build())
        .build();
    let unit = SourceUnit::new(
        "lib/features/shop/domain/objects/order.dart",
        unit().class(class).build(),
    );

    let result = analyze(config, &[unit]);
    assert_eq!(result.by_rule("entity_no_copywith").len(), 1);
}

// ── Dispatch ──

#[test]
fn generated_files_are_skipped() {
    let mut unit = fixture("parent_copywith");
    unit.path = Path::new("lib/features/family/domain/entities/parent.freezed.dart").to_path_buf();
    assert!(analyze_default(&[unit]).diagnostics.is_empty());
}

#[test]
fn only_narrows_the_catalog() {
    let analyzer = Analyzer::builder()
        .rules(all_rules())
        .build()
        .only(&["CMA010", "entity_no_copywith"]);
    assert_eq!(analyzer.rule_count(), 2);

    let result = analyzer.analyze(&[
        fixture("parent_copywith"),
        fixture("login_usecase"),
        fixture("injection_container"),
    ]);
    assert_eq!(result.diagnostics.len(), 2);
}

#[test]
fn results_are_sorted_and_deterministic() {
    let units = vec![
        fixture("user_entity"),
        fixture("parent_copywith"),
        fixture("injection_container"),
        fixture("login_usecase"),
    ];
    let first = analyze_default(&units);

    let files: Vec<_> = first
        .diagnostics
        .iter()
        .map(|d| d.location.file.display().to_string())
        .collect();
    assert_eq!(
        files,
        [
            "lib/features/auth/domain/usecases/login_usecase.dart",
            "lib/features/family/domain/entities/parent.dart",
            "lib/injection_container.dart",
        ]
    );

    for _ in 0..10 {
        assert_eq!(analyze_default(&units), first);
    }
}
