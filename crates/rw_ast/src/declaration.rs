use rw_span::{Atom, Span};

use crate::{expression::Expression, jsdoc::JsDoc, Identifier};

/// `var`/`let`/`const` declaration kind. Only `var`, `let` and `const`
/// declarations are *inlinable* export bindings (§3); `function`/`class`
/// declarations are tracked through [`crate::Statement`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    Var,
    Let,
    Const,
}

#[derive(Debug, Clone)]
pub struct VariableDeclaration {
    pub span: Span,
    pub kind: VarKind,
    pub declarations: Vec<VariableDeclarator>,
    pub jsdoc: Option<JsDoc>,
}

impl VariableDeclaration {
    #[must_use]
    pub fn new(kind: VarKind, declarations: Vec<VariableDeclarator>, span: Span) -> Self {
        Self { span, kind, declarations, jsdoc: None }
    }

    /// A single-binding `var X = rhs;` declaration, the common case this
    /// rewriter constructs when splitting multi-binding `goog.require`
    /// declarations (§4.2) or synthesizing `var <binary> = {};` (§4.3).
    #[must_use]
    pub fn single(kind: VarKind, id: Identifier, init: Option<Expression>, span: Span) -> Self {
        Self::new(kind, vec![VariableDeclarator { span, id: BindingPattern::Identifier(id), init }], span)
    }

    /// Iterates every bound name in this declaration's LHS patterns,
    /// regardless of whether it binds through a plain identifier or a
    /// destructuring object pattern — the Tree API's "iterate declaration
    /// LHS names" operation (§6).
    pub fn bound_names(&self) -> impl Iterator<Item = &Identifier> {
        self.declarations.iter().flat_map(|d| d.id.bound_names())
    }
}

#[derive(Debug, Clone)]
pub struct VariableDeclarator {
    pub span: Span,
    pub id: BindingPattern,
    pub init: Option<Expression>,
}

#[derive(Debug, Clone)]
pub enum BindingPattern {
    Identifier(Identifier),
    Object(Vec<ObjectPatternProperty>),
}

impl BindingPattern {
    pub fn bound_names(&self) -> Box<dyn Iterator<Item = &Identifier> + '_> {
        match self {
            Self::Identifier(id) => Box::new(std::iter::once(id)),
            Self::Object(props) => Box::new(props.iter().map(|p| &p.value)),
        }
    }

    #[must_use]
    pub const fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Self::Identifier(id) => Some(id),
            Self::Object(_) => None,
        }
    }
}

/// One field of a destructuring `const {a, b: c} = goog.require('pkg')`
/// pattern. `key` is the exported field name; `value` is the local binding
/// (`c` above) — "the source name chosen from the binding, not the key"
/// (§4.3).
#[derive(Debug, Clone)]
pub struct ObjectPatternProperty {
    pub key: Atom,
    pub value: Identifier,
}
