//! A deliberately small abstract syntax tree.
//!
//! This is not an ECMAScript grammar: parsing, and therefore a full grammar,
//! is out of scope for the module rewriter. It covers exactly the
//! productions the rewriter reads or rewrites — `goog.module`/`goog.provide`
//! style marker calls, top-level declarations, `exports` assignments,
//! destructuring `goog.require` bindings, and JSDoc type-string payloads —
//! plus the small amount of structure (blocks, function bodies) needed to
//! decide whether a binding is at module top level or shadowed in a nested
//! scope.
//!
//! Nodes are plain owned Rust values (`Box`/`Vec`), not arena-allocated: the
//! rewriter mutates by `match`-ing and reassigning through `&mut` references,
//! the way a small, hand-written transform pass in this codebase would,
//! rather than by node-identity lookups into an arena.

mod declaration;
mod expression;
mod jsdoc;
mod module;
mod statement;

pub use declaration::{BindingPattern, ObjectPatternProperty, VarKind, VariableDeclaration, VariableDeclarator};
pub use expression::{
    AssignmentExpression, CallExpression, ClassExpression, Expression, FunctionExpression,
    Identifier, MemberExpression, NumberLiteral, ObjectExpression, ObjectProperty, StringLiteral,
};
pub use jsdoc::{JsDoc, JsDocTag, JsDocTagKind};
pub use module::{ModuleBody, Program, ScriptUnit};
pub use statement::{
    Block, ClassDeclaration, ExpressionStatement, FunctionDeclaration, ReturnStatement, Statement,
};

use rw_span::Span;

/// Builds a fresh qualified-name expression subtree from a dotted string,
/// e.g. `"a.b.c"` becomes `(a.b).c` nested member accesses on an
/// identifier root. This is the "helper that constructs a fresh
/// qualified-name subtree from a dotted string" the Tree API provides.
#[must_use]
pub fn qualified_name_from_dotted(dotted: &str, span: Span) -> Expression {
    let mut segments = dotted.split('.');
    let root = segments.next().expect("dotted name must have at least one segment");
    let mut expr = Expression::Identifier(Identifier::new(root, span));
    for segment in segments {
        expr = Expression::Member(Box::new(MemberExpression::new(expr, segment, span)));
    }
    expr
}

/// Flattens a qualified-name expression back into its dotted string, the
/// inverse of [`qualified_name_from_dotted`]. Returns `None` if the
/// expression is not a chain of identifier/member accesses (e.g. it bottoms
/// out in a call or a literal).
#[must_use]
pub fn dotted_name_of(expr: &Expression) -> Option<String> {
    match expr {
        Expression::Identifier(id) => Some(id.name.as_str().to_owned()),
        Expression::Member(member) => {
            let object = dotted_name_of(&member.object)?;
            Some(format!("{object}.{}", member.property))
        }
        _ => None,
    }
}
