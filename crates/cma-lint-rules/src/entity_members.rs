//! Ownership of entity members among the entity rules.
//!
//! Each disallowed member of an entity belongs to exactly one rule, so a
//! single offending member yields a single diagnostic. Narrower rules win:
//! `copyWith`, then serialization, then `static`, then computed getters,
//! and `entity_no_methods` takes whatever remains.

use cma_lint_core::syntax::{
    BodyContent, ClassDecl, ConstructorDecl, FieldDecl, MethodDecl, MethodKind,
};
use cma_lint_core::{ClassRole, CompilationUnit, FileContext};

/// Serialization member names that belong in the data layer.
pub const SERIALIZATION_NAMES: &[&str] = &[
    "fromJson",
    "toJson",
    "fromMap",
    "toMap",
    "fromDocument",
    "toDocument",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Owner {
    CopyWith,
    Serialization,
    Static,
    ComputedGetter,
    Method,
    Allowed,
}

pub(crate) fn method_owner(method: &MethodDecl) -> Owner {
    if method.is_operator() {
        return Owner::Allowed;
    }
    if method.name == "copyWith" {
        return Owner::CopyWith;
    }
    if SERIALIZATION_NAMES.contains(&method.name.as_str()) {
        return Owner::Serialization;
    }
    if method.is_static {
        return Owner::Static;
    }
    match method.method_kind {
        MethodKind::Getter => {
            if is_trivial_getter(method) {
                Owner::Allowed
            } else {
                Owner::ComputedGetter
            }
        }
        MethodKind::Method | MethodKind::Setter => {
            if method.name == "toString" {
                Owner::Allowed
            } else {
                Owner::Method
            }
        }
        MethodKind::Operator => Owner::Allowed,
    }
}

pub(crate) fn constructor_owner(ctor: &ConstructorDecl) -> Owner {
    match &ctor.name {
        Some(name) if SERIALIZATION_NAMES.contains(&name.as_str()) => Owner::Serialization,
        _ => Owner::Allowed,
    }
}

pub(crate) fn field_owner(field: &FieldDecl) -> Owner {
    if field.is_static {
        Owner::Static
    } else {
        Owner::Allowed
    }
}

/// A getter that only exposes a stored value: `=> _name`, or an abstract
/// getter. Any other body counts as computed, including `=> this._name`
/// and `{ return _name; }`.
pub(crate) fn is_trivial_getter(method: &MethodDecl) -> bool {
    match &method.body.content {
        BodyContent::Empty => true,
        BodyContent::Expression { expr } => expr.is_bare_identifier(),
        BodyContent::Block { .. } => false,
    }
}

/// Entity-classified classes of the unit.
pub(crate) fn entity_classes<'u>(
    ctx: &FileContext,
    unit: &'u CompilationUnit,
) -> Vec<&'u ClassDecl> {
    unit.classes()
        .filter(|class| ctx.role(class) == ClassRole::Entity)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cma_lint_core::syntax::build::*;
    use cma_lint_core::syntax::{Expr, Span};

    #[test]
    fn narrower_owner_wins() {
        assert_eq!(method_owner(&method("copyWith").static_().build()), Owner::CopyWith);
        assert_eq!(method_owner(&method("toJson").static_().build()), Owner::Serialization);
        assert_eq!(
            method_owner(&getter("instance").static_().arrow(ident("_i")).build()),
            Owner::Static
        );
        assert_eq!(method_owner(&method("validate").build()), Owner::Method);
    }

    #[test]
    fn allowed_members() {
        assert_eq!(method_owner(&operator("==").build()), Owner::Allowed);
        assert_eq!(method_owner(&method("toString").build()), Owner::Allowed);
        assert_eq!(method_owner(&getter("name").arrow(ident("_name")).build()), Owner::Allowed);
        assert_eq!(method_owner(&getter("name").build()), Owner::Allowed);
    }

    #[test]
    fn equality_getters_are_not_exempt() {
        let props = Expr::List {
            elements: vec![ident("id")],
            span: Span::default(),
        };
        assert_eq!(method_owner(&getter("props").arrow(props).build()), Owner::ComputedGetter);
        let hash = property(ident("id"), "hashCode");
        assert_eq!(method_owner(&getter("hashCode").arrow(hash).build()), Owner::ComputedGetter);
    }

    #[test]
    fn this_access_getter_is_computed() {
        let this = Expr::This {
            span: Span::default(),
        };
        let g = getter("name").arrow(property(this, "_name")).build();
        assert_eq!(method_owner(&g), Owner::ComputedGetter);
    }

    #[test]
    fn computed_getter() {
        let g = getter("fullName")
            .arrow(Expr::Binary {
                left: Box::new(ident("first")),
                operator: "+".to_string(),
                right: Box::new(ident("last")),
                span: Span::default(),
            })
            .build();
        assert_eq!(method_owner(&g), Owner::ComputedGetter);
    }

    #[test]
    fn block_getter_returning_field_is_computed() {
        let g = getter("id").body(block_body([return_stmt(ident("_id"))])).build();
        assert!(!is_trivial_getter(&g));
        assert_eq!(method_owner(&g), Owner::ComputedGetter);
    }

    #[test]
    fn serialization_constructor() {
        assert_eq!(constructor_owner(&factory_constructor("fromJson")), Owner::Serialization);
        assert_eq!(constructor_owner(&const_constructor(["id"])), Owner::Allowed);
    }
}
