use rw_span::{Atom, Span};

use crate::{
    declaration::VariableDeclaration, expression::Expression, jsdoc::JsDoc, module::ModuleBody,
    Identifier,
};

/// A statement.
///
/// `Block` doubles as a function body and as a plain `{ … }` block
/// statement — the rewriter only needs blocks to know where a nested lexical
/// scope starts, never to execute control flow, so loops/`if`/`try` are not
/// represented at all (out of scope: the rewriter never looks inside them
/// beyond treating them, like any other statement, as opaque for top-level
/// purposes. A real frontend would lower them before this pass runs).
#[derive(Debug, Clone)]
pub enum Statement {
    Expression(ExpressionStatement),
    VariableDeclaration(VariableDeclaration),
    FunctionDeclaration(FunctionDeclaration),
    ClassDeclaration(ClassDeclaration),
    Block(Block),
    Return(ReturnStatement),
    ModuleBody(ModuleBody),
}

impl Statement {
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Expression(s) => s.span,
            Self::VariableDeclaration(s) => s.span,
            Self::FunctionDeclaration(s) => s.span,
            Self::ClassDeclaration(s) => s.span,
            Self::Block(s) => s.span,
            Self::Return(s) => s.span,
            Self::ModuleBody(s) => s.span,
        }
    }

    #[must_use]
    pub const fn as_expression(&self) -> Option<&Expression> {
        match self {
            Self::Expression(s) => Some(&s.expression),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_expression_mut(&mut self) -> Option<&mut Expression> {
        match self {
            Self::Expression(s) => Some(&mut s.expression),
            _ => None,
        }
    }

    /// The declared top-level name(s) of this statement, if it is a
    /// declaration the Recorder tracks in `topLevelNames` (§4.2: function,
    /// class, var/let/const).
    pub fn declared_names(&self) -> Box<dyn Iterator<Item = &Identifier> + '_> {
        match self {
            Self::FunctionDeclaration(f) => Box::new(f.id.iter()),
            Self::ClassDeclaration(c) => Box::new(c.id.iter()),
            Self::VariableDeclaration(v) => Box::new(v.bound_names()),
            _ => Box::new(std::iter::empty()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExpressionStatement {
    pub span: Span,
    pub expression: Expression,
    pub jsdoc: Option<JsDoc>,
}

impl ExpressionStatement {
    #[must_use]
    pub const fn new(expression: Expression, span: Span) -> Self {
        Self { span, expression, jsdoc: None }
    }
}

#[derive(Debug, Clone)]
pub struct FunctionDeclaration {
    pub span: Span,
    pub id: Option<Identifier>,
    pub params: Vec<Identifier>,
    pub body: Block,
    pub jsdoc: Option<JsDoc>,
}

#[derive(Debug, Clone)]
pub struct ClassDeclaration {
    pub span: Span,
    pub id: Option<Identifier>,
    pub jsdoc: Option<JsDoc>,
}

#[derive(Debug, Clone)]
pub struct ReturnStatement {
    pub span: Span,
    pub argument: Option<Expression>,
}

/// A block of statements: a function body, or a plain `{ … }` statement.
/// Carries its own directive prologue so `set-directives` (§6) has
/// somewhere to land independent of the owning script/module.
#[derive(Debug, Clone, Default)]
pub struct Block {
    pub span: Span,
    pub directives: Vec<Atom>,
    pub statements: Vec<Statement>,
}

impl Block {
    #[must_use]
    pub fn new(statements: Vec<Statement>, span: Span) -> Self {
        Self { span, directives: Vec::new(), statements }
    }

    pub fn set_directives(&mut self, directives: Vec<Atom>) {
        self.directives = directives;
    }

    /// Adds `"use strict"` if it is not already present, reporting whether
    /// it was already there (§4.2, `USELESS_USE_STRICT_DIRECTIVE`).
    pub fn ensure_use_strict(&mut self) -> UseStrictOutcome {
        if self.directives.iter().any(|d| d.as_str() == "use strict") {
            UseStrictOutcome::AlreadyPresent
        } else {
            self.directives.push(Atom::new("use strict"));
            UseStrictOutcome::Added
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseStrictOutcome {
    Added,
    AlreadyPresent,
}
