//! Depth-first syntax tree traversal.
//!
//! Same shape as `syn::visit`: each `visit_*` method defaults to the free
//! function of the same name, which recurses into children. Override a
//! method to inspect a node and call the free function to keep descending.

use super::{
    BodyContent, ClassDecl, ClassMember, CompilationUnit, ConstructorDecl, Declaration, Directive,
    Expr, FieldDecl, FunctionBody, FunctionDecl, MethodDecl, Statement,
};

/// Syntax tree visitor.
pub trait Visit<'ast> {
    /// Visits a compilation unit.
    fn visit_compilation_unit(&mut self, node: &'ast CompilationUnit) {
        visit_compilation_unit(self, node);
    }

    /// Visits a directive.
    fn visit_directive(&mut self, _node: &'ast Directive) {}

    /// Visits a top-level declaration.
    fn visit_declaration(&mut self, node: &'ast Declaration) {
        visit_declaration(self, node);
    }

    /// Visits a class declaration.
    fn visit_class_decl(&mut self, node: &'ast ClassDecl) {
        visit_class_decl(self, node);
    }

    /// Visits a field or top-level variable declaration.
    fn visit_field_decl(&mut self, node: &'ast FieldDecl) {
        visit_field_decl(self, node);
    }

    /// Visits a constructor.
    fn visit_constructor_decl(&mut self, node: &'ast ConstructorDecl) {
        visit_function_body(self, &node.body);
    }

    /// Visits a method, getter, setter, or operator.
    fn visit_method_decl(&mut self, node: &'ast MethodDecl) {
        visit_function_body(self, &node.body);
    }

    /// Visits a top-level function.
    fn visit_function_decl(&mut self, node: &'ast FunctionDecl) {
        visit_function_body(self, &node.body);
    }

    /// Visits a statement.
    fn visit_statement(&mut self, node: &'ast Statement) {
        visit_statement(self, node);
    }

    /// Visits an expression.
    fn visit_expr(&mut self, node: &'ast Expr) {
        visit_expr(self, node);
    }
}

/// Walks directives then declarations.
pub fn visit_compilation_unit<'ast, V>(v: &mut V, node: &'ast CompilationUnit)
where
    V: Visit<'ast> + ?Sized,
{
    for directive in &node.directives {
        v.visit_directive(directive);
    }
    for declaration in &node.declarations {
        v.visit_declaration(declaration);
    }
}

/// Dispatches on the declaration kind.
pub fn visit_declaration<'ast, V>(v: &mut V, node: &'ast Declaration)
where
    V: Visit<'ast> + ?Sized,
{
    match node {
        Declaration::Class(class) => v.visit_class_decl(class),
        Declaration::Function(function) => v.visit_function_decl(function),
        Declaration::Variable(variable) => v.visit_field_decl(variable),
        Declaration::Other { .. } => {}
    }
}

/// Walks class members in source order.
pub fn visit_class_decl<'ast, V>(v: &mut V, node: &'ast ClassDecl)
where
    V: Visit<'ast> + ?Sized,
{
    for member in &node.members {
        match member {
            ClassMember::Field(field) => v.visit_field_decl(field),
            ClassMember::Constructor(ctor) => v.visit_constructor_decl(ctor),
            ClassMember::Method(method) => v.visit_method_decl(method),
        }
    }
}

/// Walks variable initializers.
pub fn visit_field_decl<'ast, V>(v: &mut V, node: &'ast FieldDecl)
where
    V: Visit<'ast> + ?Sized,
{
    for variable in &node.variables {
        if let Some(init) = &variable.initializer {
            v.visit_expr(init);
        }
    }
}

/// Walks the statements or expression of a body.
pub fn visit_function_body<'ast, V>(v: &mut V, node: &'ast FunctionBody)
where
    V: Visit<'ast> + ?Sized,
{
    match &node.content {
        BodyContent::Empty => {}
        BodyContent::Expression { expr } => v.visit_expr(expr),
        BodyContent::Block { statements } => {
            for stmt in statements {
                v.visit_statement(stmt);
            }
        }
    }
}

/// Walks nested statements and expressions.
pub fn visit_statement<'ast, V>(v: &mut V, node: &'ast Statement)
where
    V: Visit<'ast> + ?Sized,
{
    match node {
        Statement::Block { statements, .. } => {
            for stmt in statements {
                v.visit_statement(stmt);
            }
        }
        Statement::Expression { expr } => v.visit_expr(expr),
        Statement::Return { value, .. } => {
            if let Some(value) = value {
                v.visit_expr(value);
            }
        }
        Statement::Variable { initializer, .. } => {
            if let Some(init) = initializer {
                v.visit_expr(init);
            }
        }
        Statement::If {
            condition,
            then_branch,
            else_branch,
            ..
        } => {
            v.visit_expr(condition);
            v.visit_statement(then_branch);
            if let Some(else_branch) = else_branch {
                v.visit_statement(else_branch);
            }
        }
        Statement::Try {
            body,
            catches,
            finally,
            ..
        } => {
            for stmt in body {
                v.visit_statement(stmt);
            }
            for clause in catches {
                for stmt in &clause.body {
                    v.visit_statement(stmt);
                }
            }
            for stmt in finally.iter().flatten() {
                v.visit_statement(stmt);
            }
        }
        Statement::Loop {
            condition, body, ..
        } => {
            if let Some(condition) = condition {
                v.visit_expr(condition);
            }
            v.visit_statement(body);
        }
        Statement::Other { .. } => {}
    }
}

/// Walks sub-expressions, including closure bodies.
pub fn visit_expr<'ast, V>(v: &mut V, node: &'ast Expr)
where
    V: Visit<'ast> + ?Sized,
{
    match node {
        Expr::Identifier { .. } | Expr::Literal { .. } | Expr::This { .. } | Expr::Other { .. } => {
        }
        Expr::PropertyAccess { target, .. } => v.visit_expr(target),
        Expr::MethodInvocation {
            target, arguments, ..
        } => {
            if let Some(target) = target {
                v.visit_expr(target);
            }
            for arg in arguments {
                v.visit_expr(&arg.value);
            }
        }
        Expr::InstanceCreation { arguments, .. } => {
            for arg in arguments {
                v.visit_expr(&arg.value);
            }
        }
        Expr::Closure { body, .. } => visit_function_body(v, body),
        Expr::Await { expr, .. } => v.visit_expr(expr),
        Expr::Binary { left, right, .. } => {
            v.visit_expr(left);
            v.visit_expr(right);
        }
        Expr::Assignment { target, value, .. } => {
            v.visit_expr(target);
            v.visit_expr(value);
        }
        Expr::Conditional {
            condition,
            then_expr,
            else_expr,
            ..
        } => {
            v.visit_expr(condition);
            v.visit_expr(then_expr);
            v.visit_expr(else_expr);
        }
        Expr::Cascade {
            target, sections, ..
        } => {
            v.visit_expr(target);
            for section in sections {
                v.visit_expr(section);
            }
        }
        Expr::List { elements, .. } => {
            for element in elements {
                v.visit_expr(element);
            }
        }
    }
}
