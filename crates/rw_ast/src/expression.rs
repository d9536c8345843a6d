use rw_span::{Atom, Span};

use crate::{jsdoc::JsDoc, statement::Block};

/// An expression node.
///
/// Only the productions the rewriter needs to read or rewrite are
/// represented: identifiers, member access, calls, assignment, object
/// literals, and the handful of things that can appear as the RHS of an
/// `exports = …` or `goog.require(…)` call (functions and classes, treated
/// opaquely beyond their optional name).
#[derive(Debug, Clone)]
pub enum Expression {
    Identifier(Identifier),
    StringLiteral(StringLiteral),
    NumberLiteral(NumberLiteral),
    Member(Box<MemberExpression>),
    Call(Box<CallExpression>),
    Assignment(Box<AssignmentExpression>),
    Object(ObjectExpression),
    Function(Box<FunctionExpression>),
    Class(Box<ClassExpression>),
}

impl Expression {
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Identifier(n) => n.span,
            Self::StringLiteral(n) => n.span,
            Self::NumberLiteral(n) => n.span,
            Self::Member(n) => n.span,
            Self::Call(n) => n.span,
            Self::Assignment(n) => n.span,
            Self::Object(n) => n.span,
            Self::Function(n) => n.span,
            Self::Class(n) => n.span,
        }
    }

    /// Whether this expression, used as an initializer, is one of the
    /// non-inlinable call callees named in §3 ("if its initializer is a
    /// call, the callee is not `goog.require`, `goog.forwardDeclare`, or
    /// `goog.getMsg`").
    #[must_use]
    pub fn is_reserved_call(&self) -> bool {
        let Self::Call(call) = self else { return false };
        let Some(name) = crate::dotted_name_of(&call.callee) else { return false };
        matches!(name.as_str(), "goog.require" | "goog.forwardDeclare" | "goog.getMsg")
    }

    #[must_use]
    pub const fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Self::Identifier(id) => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_call(&self) -> Option<&CallExpression> {
        match self {
            Self::Call(call) => Some(call),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_object(&self) -> Option<&ObjectExpression> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

/// An identifier reference or binding.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub span: Span,
    pub name: Atom,
    /// The identifier's text before any rewrite, preserved so diagnostics
    /// can refer to the user-visible name (§4.3, "renames store the
    /// pre-rename identifier as an original name annotation").
    pub original_name: Option<Atom>,
}

impl Identifier {
    #[must_use]
    pub fn new(name: &str, span: Span) -> Self {
        Self { span, name: Atom::new(name), original_name: None }
    }

    /// Renames this identifier in place, recording its pre-rename text the
    /// first time it is renamed.
    pub fn rename(&mut self, new_name: impl Into<Atom>) {
        if self.original_name.is_none() {
            self.original_name = Some(self.name.clone());
        }
        self.name = new_name.into();
    }
}

#[derive(Debug, Clone)]
pub struct StringLiteral {
    pub span: Span,
    pub value: Atom,
}

impl StringLiteral {
    #[must_use]
    pub fn new(value: &str, span: Span) -> Self {
        Self { span, value: Atom::new(value) }
    }
}

#[derive(Debug, Clone)]
pub struct NumberLiteral {
    pub span: Span,
    pub value: f64,
}

/// A `.property` access, e.g. `goog.module` or `exports.x`.
#[derive(Debug, Clone)]
pub struct MemberExpression {
    pub span: Span,
    pub object: Expression,
    pub property: Atom,
}

impl MemberExpression {
    #[must_use]
    pub fn new(object: Expression, property: &str, span: Span) -> Self {
        Self { span, object, property: Atom::new(property) }
    }
}

#[derive(Debug, Clone)]
pub struct CallExpression {
    pub span: Span,
    pub callee: Expression,
    pub arguments: Vec<Expression>,
}

impl CallExpression {
    #[must_use]
    pub fn new(callee: Expression, arguments: Vec<Expression>, span: Span) -> Self {
        Self { span, callee, arguments }
    }

    /// The call's single string-literal argument, if it has exactly one
    /// argument and that argument is a string literal. Used to validate the
    /// marker calls' argument shape (§4.2).
    #[must_use]
    pub fn single_string_argument(&self) -> Option<&StringLiteral> {
        match self.arguments.as_slice() {
            [Expression::StringLiteral(s)] => Some(s),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssignmentExpression {
    pub span: Span,
    pub target: Expression,
    pub value: Expression,
}

impl AssignmentExpression {
    #[must_use]
    pub fn new(target: Expression, value: Expression, span: Span) -> Self {
        Self { span, target, value }
    }
}

/// An object literal, used both for ordinary object expressions and for the
/// named-exports-object form of `exports = {a, b: c}`.
#[derive(Debug, Clone)]
pub struct ObjectExpression {
    pub span: Span,
    pub properties: Vec<ObjectProperty>,
}

impl ObjectExpression {
    /// Whether this object literal is a *named-exports object literal*
    /// (§4.2): every key is an unquoted identifier whose value is either
    /// absent (shorthand) or a bare identifier.
    #[must_use]
    pub fn is_named_exports_object(&self) -> bool {
        !self.properties.is_empty()
            && self.properties.iter().all(|p| matches!(p.value, Expression::Identifier(_)))
    }
}

#[derive(Debug, Clone)]
pub struct ObjectProperty {
    pub span: Span,
    pub key: Atom,
    pub value: Expression,
    /// True for `{x}` as written; the parser still synthesizes `value` as
    /// `Identifier(x)` (§4.2, "synthesize a name child equal to the key").
    pub shorthand: bool,
    pub jsdoc: Option<JsDoc>,
}

impl ObjectProperty {
    /// Constructs a shorthand property `{x}`, synthesizing the value child
    /// the way Recorder does for every short object-literal property.
    #[must_use]
    pub fn shorthand(key: &str, span: Span) -> Self {
        Self {
            span,
            key: Atom::new(key),
            value: Expression::Identifier(Identifier::new(key, span)),
            shorthand: true,
            jsdoc: None,
        }
    }

    #[must_use]
    pub fn keyed(key: &str, value: Expression, span: Span) -> Self {
        Self { span, key: Atom::new(key), value, shorthand: false, jsdoc: None }
    }
}

#[derive(Debug, Clone)]
pub struct FunctionExpression {
    pub span: Span,
    pub id: Option<Identifier>,
    pub params: Vec<Identifier>,
    pub body: Block,
}

#[derive(Debug, Clone)]
pub struct ClassExpression {
    pub span: Span,
    pub id: Option<Identifier>,
}
