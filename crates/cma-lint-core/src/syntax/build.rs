//! Terse constructors for syntax trees.
//!
//! Used by in-process hosts that lower their own AST and by rule tests.
//!
//! ```
//! use cma_lint_core::syntax::build::*;
//!
//! let unit = unit()
//!     .class(
//!         class("User")
//!             .field(final_field("String", "id"))
//!             .constructor(const_constructor(["id"]))
//!             .build(),
//!     )
//!     .build();
//! assert_eq!(unit.classes().count(), 1);
//! ```

use super::{
    Argument, BodyContent, BodyModifier, CatchClause, ClassDecl, ClassMember, CompilationUnit,
    ConstructorDecl, Declaration, Directive, Expr, FieldDecl, FunctionBody, FunctionDecl,
    MethodDecl, MethodKind, Parameter, ParameterKind, Span, Statement, TypeAnnotation,
    UriDirective, VariableDeclarator,
};

/// Starts a compilation unit.
#[must_use]
pub fn unit() -> UnitBuilder {
    UnitBuilder::default()
}

/// Builder for [`CompilationUnit`].
#[derive(Debug, Default)]
pub struct UnitBuilder {
    unit: CompilationUnit,
}

impl UnitBuilder {
    /// Adds `import 'uri';`.
    #[must_use]
    pub fn import(self, uri: &str) -> Self {
        let line = self.unit.directives.len() + 1;
        self.import_at(uri, line)
    }

    /// Adds `import 'uri';` on the given line.
    #[must_use]
    pub fn import_at(mut self, uri: &str, line: usize) -> Self {
        self.unit.directives.push(Directive::Import(UriDirective {
            uri: uri.to_string(),
            prefix: None,
            span: Span::at(line, 1),
        }));
        self
    }

    /// Adds `export 'uri';`.
    #[must_use]
    pub fn export(mut self, uri: &str) -> Self {
        let line = self.unit.directives.len() + 1;
        self.unit.directives.push(Directive::Export(UriDirective {
            uri: uri.to_string(),
            prefix: None,
            span: Span::at(line, 1),
        }));
        self
    }

    /// Adds a class declaration.
    #[must_use]
    pub fn class(mut self, class: ClassDecl) -> Self {
        self.unit.declarations.push(Declaration::Class(class));
        self
    }

    /// Adds a top-level function.
    #[must_use]
    pub fn function(mut self, function: FunctionDecl) -> Self {
        self.unit.declarations.push(Declaration::Function(function));
        self
    }

    /// Finishes the unit.
    #[must_use]
    pub fn build(self) -> CompilationUnit {
        self.unit
    }
}

/// Starts a class declaration.
#[must_use]
pub fn class(name: &str) -> ClassBuilder {
    ClassBuilder {
        class: ClassDecl {
            name: name.to_string(),
            name_span: Span::at(1, 7),
            span: Span::at(1, 1),
            ..ClassDecl::default()
        },
    }
}

/// Builder for [`ClassDecl`].
#[derive(Debug)]
pub struct ClassBuilder {
    class: ClassDecl,
}

impl ClassBuilder {
    /// Places the declaration on a line.
    #[must_use]
    pub fn at(mut self, line: usize) -> Self {
        self.class.span = Span::at(line, 1);
        self.class.name_span = Span::at(line, 7);
        self
    }

    /// Marks the class `abstract`.
    #[must_use]
    pub fn abstract_(mut self) -> Self {
        self.class.modifiers.is_abstract = true;
        self
    }

    /// Marks the class `interface`.
    #[must_use]
    pub fn interface(mut self) -> Self {
        self.class.modifiers.is_interface = true;
        self
    }

    /// Sets the `extends` clause.
    #[must_use]
    pub fn extends(mut self, ty: TypeAnnotation) -> Self {
        self.class.extends = Some(ty);
        self
    }

    /// Adds to the `implements` clause.
    #[must_use]
    pub fn implements(mut self, ty: TypeAnnotation) -> Self {
        self.class.implements.push(ty);
        self
    }

    /// Adds a field.
    #[must_use]
    pub fn field(mut self, field: FieldDecl) -> Self {
        self.class.members.push(ClassMember::Field(field));
        self
    }

    /// Adds a constructor.
    #[must_use]
    pub fn constructor(mut self, ctor: ConstructorDecl) -> Self {
        self.class.members.push(ClassMember::Constructor(ctor));
        self
    }

    /// Adds a method, getter, setter, or operator.
    #[must_use]
    pub fn method(mut self, method: MethodDecl) -> Self {
        self.class.members.push(ClassMember::Method(method));
        self
    }

    /// Finishes the class.
    #[must_use]
    pub fn build(self) -> ClassDecl {
        self.class
    }
}

/// `final Type name;`
#[must_use]
pub fn final_field(ty_name: &str, name: &str) -> FieldDecl {
    FieldDecl {
        is_final: true,
        ..var_field(ty_name, name)
    }
}

/// `Type name;`
#[must_use]
pub fn var_field(ty_name: &str, name: &str) -> FieldDecl {
    FieldDecl {
        ty: Some(ty(ty_name)),
        variables: vec![VariableDeclarator {
            name: name.to_string(),
            initializer: None,
            span: Span::default(),
        }],
        ..FieldDecl::default()
    }
}

/// `static const Type name = value;`
#[must_use]
pub fn static_field(ty_name: &str, name: &str) -> FieldDecl {
    FieldDecl {
        is_static: true,
        is_const: true,
        ..var_field(ty_name, name)
    }
}

/// `const Name({required this.a, required this.b});`
#[must_use]
pub fn const_constructor<const N: usize>(fields: [&str; N]) -> ConstructorDecl {
    ConstructorDecl {
        is_const: true,
        ..constructor(fields)
    }
}

/// `Name({required this.a, required this.b});`
#[must_use]
pub fn constructor<const N: usize>(fields: [&str; N]) -> ConstructorDecl {
    ConstructorDecl {
        parameters: fields
            .iter()
            .map(|f| Parameter {
                name: (*f).to_string(),
                parameter_kind: ParameterKind::Named,
                is_required: true,
                is_field_formal: true,
                ..Parameter::default()
            })
            .collect(),
        ..ConstructorDecl::default()
    }
}

/// `factory Name.ctor(Map<String, dynamic> json) => ...;`
#[must_use]
pub fn factory_constructor(name: &str) -> ConstructorDecl {
    ConstructorDecl {
        name: Some(name.to_string()),
        is_factory: true,
        parameters: vec![param("json", generic("Map", [ty("String"), ty("dynamic")]))],
        ..ConstructorDecl::default()
    }
}

/// Starts a method declaration.
#[must_use]
pub fn method(name: &str) -> MethodBuilder {
    MethodBuilder {
        method: MethodDecl {
            name: name.to_string(),
            ..MethodDecl::default()
        },
    }
}

/// Starts a getter declaration.
#[must_use]
pub fn getter(name: &str) -> MethodBuilder {
    method(name).kind(MethodKind::Getter)
}

/// Starts an operator declaration.
#[must_use]
pub fn operator(symbol: &str) -> MethodBuilder {
    method(symbol).kind(MethodKind::Operator).returns(ty("bool"))
}

/// Builder for [`MethodDecl`].
#[derive(Debug)]
pub struct MethodBuilder {
    method: MethodDecl,
}

impl MethodBuilder {
    /// Places the declaration on a line.
    #[must_use]
    pub fn at(mut self, line: usize) -> Self {
        self.method.span = Span::at(line, 3);
        self.method.name_span = Span::at(line, 3);
        self
    }

    /// Sets the member kind.
    #[must_use]
    pub fn kind(mut self, kind: MethodKind) -> Self {
        self.method.method_kind = kind;
        self
    }

    /// Marks the member `static`.
    #[must_use]
    pub fn static_(mut self) -> Self {
        self.method.is_static = true;
        self
    }

    /// Sets the return type.
    #[must_use]
    pub fn returns(mut self, ty: TypeAnnotation) -> Self {
        self.method.return_type = Some(ty);
        self
    }

    /// Adds a parameter.
    #[must_use]
    pub fn param(mut self, parameter: Parameter) -> Self {
        self.method.parameters.push(parameter);
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn body(mut self, body: FunctionBody) -> Self {
        self.method.body = body;
        self
    }

    /// Sets an `=> expr` body.
    #[must_use]
    pub fn arrow(self, expr: Expr) -> Self {
        self.body(expr_body(expr))
    }

    /// Finishes the method.
    #[must_use]
    pub fn build(self) -> MethodDecl {
        self.method
    }
}

/// Top-level function with the given body.
#[must_use]
pub fn function(name: &str, body: FunctionBody) -> FunctionDecl {
    FunctionDecl {
        name: name.to_string(),
        body,
        ..FunctionDecl::default()
    }
}

/// Positional parameter `Type name`.
#[must_use]
pub fn param(name: &str, ty: TypeAnnotation) -> Parameter {
    Parameter {
        name: name.to_string(),
        ty: Some(ty),
        ..Parameter::default()
    }
}

/// `=> expr`
#[must_use]
pub fn expr_body(expr: Expr) -> FunctionBody {
    FunctionBody {
        modifier: BodyModifier::Sync,
        content: BodyContent::Expression { expr },
    }
}

/// `{ statements }`
#[must_use]
pub fn block_body<I: IntoIterator<Item = Statement>>(statements: I) -> FunctionBody {
    FunctionBody {
        modifier: BodyModifier::Sync,
        content: BodyContent::Block {
            statements: statements.into_iter().collect(),
        },
    }
}

/// `async { statements }`
#[must_use]
pub fn async_body<I: IntoIterator<Item = Statement>>(statements: I) -> FunctionBody {
    FunctionBody {
        modifier: BodyModifier::Async,
        ..block_body(statements)
    }
}

/// Non-generic type.
#[must_use]
pub fn ty(name: &str) -> TypeAnnotation {
    TypeAnnotation::named(name)
}

/// Generic type `Name<A, B>`.
#[must_use]
pub fn generic<I: IntoIterator<Item = TypeAnnotation>>(name: &str, args: I) -> TypeAnnotation {
    TypeAnnotation {
        arguments: args.into_iter().collect(),
        ..TypeAnnotation::named(name)
    }
}

/// `name`
#[must_use]
pub fn ident(name: &str) -> Expr {
    Expr::Identifier {
        name: name.to_string(),
        span: Span::default(),
    }
}

/// Literal source text.
#[must_use]
pub fn literal(value: &str) -> Expr {
    Expr::Literal {
        value: value.to_string(),
        span: Span::default(),
    }
}

/// `target.property`
#[must_use]
pub fn property(target: Expr, name: &str) -> Expr {
    Expr::PropertyAccess {
        target: Box::new(target),
        property: name.to_string(),
        span: Span::default(),
    }
}

/// Target-less invocation `Name(args)`; how unresolved trees spell constructor calls.
#[must_use]
pub fn call<I: IntoIterator<Item = Expr>>(name: &str, args: I) -> Expr {
    Expr::MethodInvocation {
        target: None,
        method: name.to_string(),
        type_arguments: Vec::new(),
        arguments: positional(args),
        span: Span::default(),
    }
}

/// `target.method<T>(args)`
#[must_use]
pub fn invoke_on<T, A>(target: Expr, method: &str, type_args: T, args: A) -> Expr
where
    T: IntoIterator<Item = TypeAnnotation>,
    A: IntoIterator<Item = Expr>,
{
    Expr::MethodInvocation {
        target: Some(Box::new(target)),
        method: method.to_string(),
        type_arguments: type_args.into_iter().collect(),
        arguments: positional(args),
        span: Span::default(),
    }
}

/// Resolved instance creation `Name(args)`.
#[must_use]
pub fn new_instance<I: IntoIterator<Item = Expr>>(name: &str, args: I) -> Expr {
    Expr::InstanceCreation {
        ty: ty(name),
        constructor: None,
        is_const: false,
        arguments: positional(args),
        span: Span::default(),
    }
}

/// Instance creation with named arguments.
#[must_use]
pub fn new_instance_named<I>(name: &str, args: I) -> Expr
where
    I: IntoIterator<Item = (&'static str, Expr)>,
{
    Expr::InstanceCreation {
        ty: ty(name),
        constructor: None,
        is_const: false,
        arguments: args
            .into_iter()
            .map(|(n, value)| Argument {
                name: Some(n.to_string()),
                value,
            })
            .collect(),
        span: Span::default(),
    }
}

/// `() => expr`
#[must_use]
pub fn closure(expr: Expr) -> Expr {
    Expr::Closure {
        parameters: Vec::new(),
        body: Box::new(expr_body(expr)),
        span: Span::default(),
    }
}

/// `() { statements }`
#[must_use]
pub fn closure_block<I: IntoIterator<Item = Statement>>(statements: I) -> Expr {
    Expr::Closure {
        parameters: Vec::new(),
        body: Box::new(block_body(statements)),
        span: Span::default(),
    }
}

/// `await expr`
#[must_use]
pub fn await_(expr: Expr) -> Expr {
    Expr::Await {
        expr: Box::new(expr),
        span: Span::default(),
    }
}

/// `expr;`
#[must_use]
pub fn expr_stmt(expr: Expr) -> Statement {
    Statement::Expression { expr }
}

/// `return expr;`
#[must_use]
pub fn return_stmt(expr: Expr) -> Statement {
    Statement::Return {
        value: Some(expr),
        span: Span::default(),
    }
}

/// `try { body } catch (e) { handler }`
#[must_use]
pub fn try_stmt<B, H>(body: B, handler: H) -> Statement
where
    B: IntoIterator<Item = Statement>,
    H: IntoIterator<Item = Statement>,
{
    Statement::Try {
        body: body.into_iter().collect(),
        catches: vec![CatchClause {
            exception_type: None,
            body: handler.into_iter().collect(),
        }],
        finally: None,
        span: Span::default(),
    }
}

fn positional<I: IntoIterator<Item = Expr>>(args: I) -> Vec<Argument> {
    args.into_iter()
        .map(|value| Argument { name: None, value })
        .collect()
}
