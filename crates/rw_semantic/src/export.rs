use rw_ast::{Expression, Identifier};
use rw_span::Atom;

/// The binding kind a top-level name was declared with, tracked alongside
/// `ScriptDescription::top_level_names` so export inlinability (§3, "the
/// name is bound by a declaration kind in {var, let, const, function,
/// class}") can be decided without re-walking the AST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Var,
    Let,
    Const,
    Function,
    Class,
}

/// One `exports.x = …` or named-exports-object property (§3 Export
/// Definition). `export_name` is `None` for a default export
/// (`exports = rhs`).
#[derive(Debug, Clone)]
pub struct ExportDefinition {
    pub export_name: Option<Atom>,
    pub rhs: Option<Expression>,
    pub name_decl: Option<Identifier>,
}

impl ExportDefinition {
    #[must_use]
    pub fn named(export_name: Atom, rhs: Expression) -> Self {
        Self { export_name: Some(export_name), rhs: Some(rhs), name_decl: None }
    }

    #[must_use]
    pub fn default(rhs: Expression) -> Self {
        Self { export_name: None, rhs: Some(rhs), name_decl: None }
    }

    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.export_name.is_none()
    }

    /// §3: "*Inlinable* when: the name is bound by a declaration kind in
    /// {var, let, const, function, class}; the name is not already present
    /// in `exportsToInline`; and if its initializer is a call, the callee is
    /// not `goog.require`, `goog.forwardDeclare`, or `goog.getMsg`."
    #[must_use]
    pub fn is_inlinable(
        &self,
        decl_kind: Option<DeclKind>,
        already_inlined: bool,
    ) -> bool {
        if decl_kind.is_none() || already_inlined {
            return false;
        }
        match &self.rhs {
            Some(expr @ Expression::Call(_)) => !expr.is_reserved_call(),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rw_ast::{qualified_name_from_dotted, CallExpression};
    use rw_span::Span;

    #[test]
    fn unbound_name_is_never_inlinable() {
        let def = ExportDefinition::default(Expression::NumberLiteral(rw_ast::NumberLiteral {
            span: Span::synthetic(),
            value: 1.0,
        }));
        assert!(!def.is_inlinable(None, false));
    }

    #[test]
    fn require_call_rhs_is_not_inlinable() {
        let span = Span::synthetic();
        let callee = qualified_name_from_dotted("goog.require", span);
        let rhs = Expression::Call(Box::new(CallExpression::new(
            callee,
            vec![Expression::StringLiteral(rw_ast::StringLiteral::new("a.b", span))],
            span,
        )));
        let def = ExportDefinition::default(rhs);
        assert!(!def.is_inlinable(Some(DeclKind::Const), false));
    }

    #[test]
    fn plain_name_declaration_is_inlinable() {
        let span = Span::synthetic();
        let rhs = Expression::Identifier(Identifier::new("Bar", span));
        let def = ExportDefinition::default(rhs);
        assert!(def.is_inlinable(Some(DeclKind::Class), false));
        assert!(!def.is_inlinable(Some(DeclKind::Class), true));
    }
}
