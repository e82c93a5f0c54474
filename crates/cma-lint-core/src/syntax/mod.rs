//! Host-supplied syntax tree.
//!
//! cma-lint does not parse source code. The host (an IDE plugin, a build
//! step, or the `cma-lint` CLI reading `*.ast.json` dumps) lowers its own
//! parse tree into these types. Only the shapes the rules inspect are
//! modelled; anything else can be lowered to the `Other` variants and is
//! skipped by every rule.
//!
//! All nodes are `serde`-serializable with an internal `kind` tag, so a
//! compilation unit round-trips through JSON unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod build;
pub mod visit;

/// Source location of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Span {
    /// Byte offset from the start of the file.
    pub offset: usize,
    /// Length in bytes.
    pub length: usize,
    /// Line number (1-indexed, 0 when unknown).
    pub line: usize,
    /// Column number (1-indexed, 0 when unknown).
    pub column: usize,
}

impl Span {
    /// Creates a span pointing at a line/column with no byte range.
    #[must_use]
    pub fn at(line: usize, column: usize) -> Self {
        Self {
            offset: 0,
            length: 0,
            line,
            column,
        }
    }
}

/// A parsed compilation unit (one source file).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompilationUnit {
    /// Directives in source order.
    #[serde(default)]
    pub directives: Vec<Directive>,
    /// Top-level declarations in source order.
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}

impl CompilationUnit {
    /// Iterates over import directives.
    pub fn imports(&self) -> impl Iterator<Item = &UriDirective> {
        self.directives.iter().filter_map(|d| match d {
            Directive::Import(import) => Some(import),
            _ => None,
        })
    }

    /// Iterates over class declarations (including mixins and enums).
    pub fn classes(&self) -> impl Iterator<Item = &ClassDecl> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::Class(class) => Some(class),
            _ => None,
        })
    }
}

/// A library-level directive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Directive {
    /// `import 'uri' as prefix;`
    Import(UriDirective),
    /// `export 'uri';`
    Export(UriDirective),
    /// `part 'uri';`
    Part(UriDirective),
    /// `library name;`
    Library {
        /// Library name, possibly empty.
        #[serde(default)]
        name: String,
        /// Location of the directive.
        #[serde(default)]
        span: Span,
    },
}

/// A directive that references another file by URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UriDirective {
    /// The URI string without quotes.
    pub uri: String,
    /// Import prefix (`as foo`), if any.
    #[serde(default)]
    pub prefix: Option<String>,
    /// Location of the whole directive.
    #[serde(default)]
    pub span: Span,
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    /// Class, mixin, or enum.
    Class(ClassDecl),
    /// Top-level function.
    Function(FunctionDecl),
    /// Top-level variable(s).
    Variable(FieldDecl),
    /// Any declaration the rules don't inspect (typedefs, extensions, ...).
    Other {
        /// Location of the declaration.
        #[serde(default)]
        span: Span,
    },
}

/// Flavour of a class-like declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    /// `class Foo`
    #[default]
    Class,
    /// `mixin Foo`
    Mixin,
    /// `enum Foo`
    Enum,
}

/// Class modifiers (`abstract interface class Foo`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassModifiers {
    /// `abstract`
    pub is_abstract: bool,
    /// `interface`
    pub is_interface: bool,
    /// `base`
    pub is_base: bool,
    /// `final`
    pub is_final: bool,
    /// `sealed`
    pub is_sealed: bool,
}

/// A class, mixin, or enum declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassDecl {
    /// Declared name.
    pub name: String,
    /// Declaration flavour.
    #[serde(default)]
    pub class_kind: ClassKind,
    /// Class modifiers.
    #[serde(default)]
    pub modifiers: ClassModifiers,
    /// Type parameter names.
    #[serde(default)]
    pub type_parameters: Vec<String>,
    /// `extends` clause.
    #[serde(default)]
    pub extends: Option<TypeAnnotation>,
    /// `implements` clause.
    #[serde(default)]
    pub implements: Vec<TypeAnnotation>,
    /// `with` clause.
    #[serde(default)]
    pub mixins: Vec<TypeAnnotation>,
    /// Members in source order.
    #[serde(default)]
    pub members: Vec<ClassMember>,
    /// Location of the name token.
    #[serde(default)]
    pub name_span: Span,
    /// Location of the whole declaration.
    #[serde(default)]
    pub span: Span,
}

impl ClassDecl {
    /// Iterates over field declarations.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.members.iter().filter_map(|m| match m {
            ClassMember::Field(field) => Some(field),
            _ => None,
        })
    }

    /// Iterates over constructor declarations.
    pub fn constructors(&self) -> impl Iterator<Item = &ConstructorDecl> {
        self.members.iter().filter_map(|m| match m {
            ClassMember::Constructor(ctor) => Some(ctor),
            _ => None,
        })
    }

    /// Iterates over methods, getters, setters, and operators.
    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.members.iter().filter_map(|m| match m {
            ClassMember::Method(method) => Some(method),
            _ => None,
        })
    }

    /// Returns true for `abstract` or `interface` classes.
    #[must_use]
    pub fn is_abstract_like(&self) -> bool {
        self.modifiers.is_abstract || self.modifiers.is_interface
    }
}

/// A class member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassMember {
    /// Field declaration.
    Field(FieldDecl),
    /// Constructor (generative or factory).
    Constructor(ConstructorDecl),
    /// Method, getter, setter, or operator.
    Method(MethodDecl),
}

/// A field or top-level variable declaration (`final String a, b;`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    /// `static`
    #[serde(default)]
    pub is_static: bool,
    /// `final`
    #[serde(default)]
    pub is_final: bool,
    /// `const`
    #[serde(default)]
    pub is_const: bool,
    /// `late`
    #[serde(default)]
    pub is_late: bool,
    /// Declared type, if any.
    #[serde(default, rename = "type")]
    pub ty: Option<TypeAnnotation>,
    /// Declared variables.
    #[serde(default)]
    pub variables: Vec<VariableDeclarator>,
    /// Location of the declaration.
    #[serde(default)]
    pub span: Span,
}

/// One variable inside a field declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclarator {
    /// Variable name.
    pub name: String,
    /// Initializer expression.
    #[serde(default)]
    pub initializer: Option<Expr>,
    /// Location of the variable.
    #[serde(default)]
    pub span: Span,
}

/// A constructor declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstructorDecl {
    /// Constructor name for named constructors (`Foo.fromJson` → `fromJson`).
    #[serde(default)]
    pub name: Option<String>,
    /// `const`
    #[serde(default)]
    pub is_const: bool,
    /// `factory`
    #[serde(default)]
    pub is_factory: bool,
    /// Formal parameters.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Constructor body.
    #[serde(default)]
    pub body: FunctionBody,
    /// Location of the declaration.
    #[serde(default)]
    pub span: Span,
}

/// Kind of a method-like member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    /// Regular method.
    #[default]
    Method,
    /// `get name`
    Getter,
    /// `set name(v)`
    Setter,
    /// `operator ==`
    Operator,
}

/// A method, getter, setter, or operator declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    /// Member name (`==` for operators).
    pub name: String,
    /// Member kind.
    #[serde(default)]
    pub method_kind: MethodKind,
    /// `static`
    #[serde(default)]
    pub is_static: bool,
    /// Declared return type, if any.
    #[serde(default)]
    pub return_type: Option<TypeAnnotation>,
    /// Formal parameters.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Method body.
    #[serde(default)]
    pub body: FunctionBody,
    /// Location of the name token.
    #[serde(default)]
    pub name_span: Span,
    /// Location of the whole declaration.
    #[serde(default)]
    pub span: Span,
}

impl MethodDecl {
    /// Returns true if this is a getter.
    #[must_use]
    pub fn is_getter(&self) -> bool {
        self.method_kind == MethodKind::Getter
    }

    /// Returns true if this is an operator override.
    #[must_use]
    pub fn is_operator(&self) -> bool {
        self.method_kind == MethodKind::Operator
    }
}

/// A top-level function declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionDecl {
    /// Function name.
    pub name: String,
    /// Declared return type, if any.
    #[serde(default)]
    pub return_type: Option<TypeAnnotation>,
    /// Formal parameters.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Function body.
    #[serde(default)]
    pub body: FunctionBody,
    /// Location of the whole declaration.
    #[serde(default)]
    pub span: Span,
}

/// How a parameter is passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    /// `(a)`
    #[default]
    Positional,
    /// `([a])`
    OptionalPositional,
    /// `({a})`
    Named,
}

/// A formal parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Declared type, if any.
    #[serde(default, rename = "type")]
    pub ty: Option<TypeAnnotation>,
    /// Passing style.
    #[serde(default)]
    pub parameter_kind: ParameterKind,
    /// `required`
    #[serde(default)]
    pub is_required: bool,
    /// Field formal (`this.name`).
    #[serde(default)]
    pub is_field_formal: bool,
    /// Default value, if any.
    #[serde(default)]
    pub default_value: Option<Expr>,
}

/// Execution modifier of a function body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyModifier {
    /// Plain synchronous body.
    #[default]
    Sync,
    /// `async`
    Async,
    /// `sync*`
    SyncStar,
    /// `async*`
    AsyncStar,
}

/// A function, method, or constructor body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionBody {
    /// `async` / `sync*` / `async*` marker.
    #[serde(default)]
    pub modifier: BodyModifier,
    /// Body shape.
    #[serde(default)]
    pub content: BodyContent,
}

impl FunctionBody {
    /// Returns the expression of an `=> expr` body.
    #[must_use]
    pub fn expression(&self) -> Option<&Expr> {
        match &self.content {
            BodyContent::Expression { expr } => Some(expr),
            _ => None,
        }
    }

    /// Returns true if the body is absent (abstract member or `;`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.content, BodyContent::Empty)
    }

    /// Returns the expression this body evaluates to.
    ///
    /// For `=> expr` bodies this is `expr`; for block bodies it is the value
    /// of the first `return` statement found.
    #[must_use]
    pub fn returned_expr(&self) -> Option<&Expr> {
        match &self.content {
            BodyContent::Expression { expr } => Some(expr),
            BodyContent::Block { statements } => first_return(statements),
            BodyContent::Empty => None,
        }
    }
}

fn first_return(statements: &[Statement]) -> Option<&Expr> {
    statements.iter().find_map(|stmt| match stmt {
        Statement::Return { value, .. } => value.as_ref(),
        Statement::Block { statements, .. } => first_return(statements),
        _ => None,
    })
}

/// Shape of a function body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BodyContent {
    /// No body (`;`).
    #[default]
    Empty,
    /// `=> expr`
    Expression {
        /// The expression.
        expr: Expr,
    },
    /// `{ ... }`
    Block {
        /// Statements in the block.
        #[serde(default)]
        statements: Vec<Statement>,
    },
}

/// A type annotation such as `Future<Either<Failure, User>>?`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAnnotation {
    /// Type name, possibly import-prefixed (`dz.Either`).
    pub name: String,
    /// Type arguments.
    #[serde(default)]
    pub arguments: Vec<TypeAnnotation>,
    /// Trailing `?`.
    #[serde(default)]
    pub nullable: bool,
    /// Location of the annotation.
    #[serde(default)]
    pub span: Span,
}

impl TypeAnnotation {
    /// Creates a non-generic, non-nullable type.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Name with any import prefix removed (`dz.Either` → `Either`).
    #[must_use]
    pub fn base_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.arguments.is_empty() {
            f.write_str("<")?;
            write_joined(f, &self.arguments)?;
            f.write_str(">")?;
        }
        if self.nullable {
            f.write_str("?")?;
        }
        Ok(())
    }
}

/// A statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Statement {
    /// `{ ... }`
    Block {
        /// Nested statements.
        #[serde(default)]
        statements: Vec<Statement>,
        /// Location.
        #[serde(default)]
        span: Span,
    },
    /// `expr;`
    Expression {
        /// The expression.
        expr: Expr,
    },
    /// `return expr;`
    Return {
        /// Returned value.
        #[serde(default)]
        value: Option<Expr>,
        /// Location.
        #[serde(default)]
        span: Span,
    },
    /// `final x = expr;`
    Variable {
        /// Variable name.
        name: String,
        /// Declared type.
        #[serde(default, rename = "type")]
        ty: Option<TypeAnnotation>,
        /// Initializer.
        #[serde(default)]
        initializer: Option<Expr>,
        /// Location.
        #[serde(default)]
        span: Span,
    },
    /// `if (cond) ... else ...`
    If {
        /// Condition.
        condition: Expr,
        /// Then branch.
        then_branch: Box<Statement>,
        /// Else branch.
        #[serde(default)]
        else_branch: Option<Box<Statement>>,
        /// Location.
        #[serde(default)]
        span: Span,
    },
    /// `try { } on X catch (e) { } finally { }`
    Try {
        /// Guarded statements.
        #[serde(default)]
        body: Vec<Statement>,
        /// Catch clauses.
        #[serde(default)]
        catches: Vec<CatchClause>,
        /// Finally block.
        #[serde(default)]
        finally: Option<Vec<Statement>>,
        /// Location.
        #[serde(default)]
        span: Span,
    },
    /// `for` / `while` / `do` loops.
    Loop {
        /// Loop condition or iterable, if any.
        #[serde(default)]
        condition: Option<Expr>,
        /// Loop body.
        body: Box<Statement>,
        /// Location.
        #[serde(default)]
        span: Span,
    },
    /// Any statement the rules don't inspect.
    Other {
        /// Location.
        #[serde(default)]
        span: Span,
    },
}

/// A `catch` clause.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatchClause {
    /// `on Type`
    #[serde(default)]
    pub exception_type: Option<TypeAnnotation>,
    /// Clause body.
    #[serde(default)]
    pub body: Vec<Statement>,
}

/// A named or positional call argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    /// Name for named arguments.
    #[serde(default)]
    pub name: Option<String>,
    /// Argument value.
    pub value: Expr,
}

/// An expression.
///
/// Unresolved trees cannot tell `Foo()` (instance creation) from `foo()`
/// (function call), so hosts may emit either [`Expr::InstanceCreation`] or a
/// target-less [`Expr::MethodInvocation`] for constructor calls. Rules treat
/// both the same via [`Expr::invoked_name`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    /// `name`
    Identifier {
        /// Identifier text.
        name: String,
        /// Location.
        #[serde(default)]
        span: Span,
    },
    /// Literal rendered as source text (`'a'`, `42`, `null`).
    Literal {
        /// Source text.
        value: String,
        /// Location.
        #[serde(default)]
        span: Span,
    },
    /// `this`
    This {
        /// Location.
        #[serde(default)]
        span: Span,
    },
    /// `target.property`
    PropertyAccess {
        /// Receiver.
        target: Box<Expr>,
        /// Property name.
        property: String,
        /// Location.
        #[serde(default)]
        span: Span,
    },
    /// `target.method<T>(args)` or `method(args)`
    MethodInvocation {
        /// Receiver, if any.
        #[serde(default)]
        target: Option<Box<Expr>>,
        /// Method name.
        method: String,
        /// Explicit type arguments.
        #[serde(default)]
        type_arguments: Vec<TypeAnnotation>,
        /// Arguments.
        #[serde(default)]
        arguments: Vec<Argument>,
        /// Location.
        #[serde(default)]
        span: Span,
    },
    /// `Type.named(args)`, `const Type(args)`
    InstanceCreation {
        /// Constructed type.
        #[serde(rename = "type")]
        ty: TypeAnnotation,
        /// Named constructor, if any.
        #[serde(default)]
        constructor: Option<String>,
        /// `const`
        #[serde(default)]
        is_const: bool,
        /// Arguments.
        #[serde(default)]
        arguments: Vec<Argument>,
        /// Location.
        #[serde(default)]
        span: Span,
    },
    /// `(params) => body` or `(params) { body }`
    Closure {
        /// Formal parameters.
        #[serde(default)]
        parameters: Vec<Parameter>,
        /// Closure body.
        body: Box<FunctionBody>,
        /// Location.
        #[serde(default)]
        span: Span,
    },
    /// `await expr`
    Await {
        /// Awaited expression.
        expr: Box<Expr>,
        /// Location.
        #[serde(default)]
        span: Span,
    },
    /// `left op right`
    Binary {
        /// Left operand.
        left: Box<Expr>,
        /// Operator token.
        operator: String,
        /// Right operand.
        right: Box<Expr>,
        /// Location.
        #[serde(default)]
        span: Span,
    },
    /// `target = value`, `target ??= value`
    Assignment {
        /// Assigned target.
        target: Box<Expr>,
        /// Operator token.
        operator: String,
        /// Assigned value.
        value: Box<Expr>,
        /// Location.
        #[serde(default)]
        span: Span,
    },
    /// `cond ? a : b`
    Conditional {
        /// Condition.
        condition: Box<Expr>,
        /// Value when true.
        then_expr: Box<Expr>,
        /// Value when false.
        else_expr: Box<Expr>,
        /// Location.
        #[serde(default)]
        span: Span,
    },
    /// `target..a()..b = c`
    Cascade {
        /// Cascade receiver.
        target: Box<Expr>,
        /// Cascade sections.
        #[serde(default)]
        sections: Vec<Expr>,
        /// Location.
        #[serde(default)]
        span: Span,
    },
    /// `[a, b]`
    List {
        /// Elements.
        #[serde(default)]
        elements: Vec<Expr>,
        /// Location.
        #[serde(default)]
        span: Span,
    },
    /// Any expression the rules don't inspect.
    Other {
        /// Rendered source text, if the host has it.
        #[serde(default)]
        text: String,
        /// Location.
        #[serde(default)]
        span: Span,
    },
}

impl Expr {
    /// Location of this expression.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Identifier { span, .. }
            | Self::Literal { span, .. }
            | Self::This { span }
            | Self::PropertyAccess { span, .. }
            | Self::MethodInvocation { span, .. }
            | Self::InstanceCreation { span, .. }
            | Self::Closure { span, .. }
            | Self::Await { span, .. }
            | Self::Binary { span, .. }
            | Self::Assignment { span, .. }
            | Self::Conditional { span, .. }
            | Self::Cascade { span, .. }
            | Self::List { span, .. }
            | Self::Other { span, .. } => *span,
        }
    }

    /// Returns true if this is a bare identifier (`=> _name`).
    #[must_use]
    pub fn is_bare_identifier(&self) -> bool {
        matches!(self, Self::Identifier { .. })
    }

    /// Name of the type or function this expression invokes.
    ///
    /// `AuthBloc(...)` and `new AuthBloc(...)` give `AuthBloc`;
    /// `sl.registerFactory(...)` gives `registerFactory`.
    #[must_use]
    pub fn invoked_name(&self) -> Option<&str> {
        match self {
            Self::MethodInvocation { method, .. } => Some(method),
            Self::InstanceCreation { ty, .. } => Some(ty.base_name()),
            _ => None,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name, .. } => f.write_str(name),
            Self::Literal { value, .. } => f.write_str(value),
            Self::This { .. } => f.write_str("this"),
            Self::PropertyAccess {
                target, property, ..
            } => write!(f, "{target}.{property}"),
            Self::MethodInvocation {
                target,
                method,
                type_arguments,
                arguments,
                ..
            } => {
                if let Some(target) = target {
                    write!(f, "{target}.")?;
                }
                f.write_str(method)?;
                if !type_arguments.is_empty() {
                    f.write_str("<")?;
                    write_joined(f, type_arguments)?;
                    f.write_str(">")?;
                }
                write_arguments(f, arguments)
            }
            Self::InstanceCreation {
                ty,
                constructor,
                is_const,
                arguments,
                ..
            } => {
                if *is_const {
                    f.write_str("const ")?;
                }
                write!(f, "{ty}")?;
                if let Some(name) = constructor {
                    write!(f, ".{name}")?;
                }
                write_arguments(f, arguments)
            }
            Self::Closure {
                parameters, body, ..
            } => {
                f.write_str("(")?;
                let names: Vec<&str> = parameters.iter().map(|p| p.name.as_str()).collect();
                f.write_str(&names.join(", "))?;
                f.write_str(")")?;
                match &body.content {
                    BodyContent::Expression { expr } => write!(f, " => {expr}"),
                    BodyContent::Block { .. } => f.write_str(" {...}"),
                    BodyContent::Empty => Ok(()),
                }
            }
            Self::Await { expr, .. } => write!(f, "await {expr}"),
            Self::Binary {
                left,
                operator,
                right,
                ..
            } => write!(f, "{left} {operator} {right}"),
            Self::Assignment {
                target,
                operator,
                value,
                ..
            } => write!(f, "{target} {operator} {value}"),
            Self::Conditional {
                condition,
                then_expr,
                else_expr,
                ..
            } => write!(f, "{condition} ? {then_expr} : {else_expr}"),
            Self::Cascade {
                target, sections, ..
            } => {
                write!(f, "{target}")?;
                for section in sections {
                    write!(f, "..{section}")?;
                }
                Ok(())
            }
            Self::List { elements, .. } => {
                f.write_str("[")?;
                write_joined(f, elements)?;
                f.write_str("]")
            }
            Self::Other { text, .. } => f.write_str(text),
        }
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_arguments(f: &mut fmt::Formatter<'_>, arguments: &[Argument]) -> fmt::Result {
    f.write_str("(")?;
    for (i, arg) in arguments.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        if let Some(name) = &arg.name {
            write!(f, "{name}: ")?;
        }
        write!(f, "{}", arg.value)?;
    }
    f.write_str(")")
}
