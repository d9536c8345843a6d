use rustc_hash::FxHashSet;
use rw_ast::Statement;
use rw_data_structures::Stack;
use rw_span::Atom;

/// What kind of node the traversal is currently inside, from outermost
/// towards the node being visited. Recorder and Updater push one of these
/// per nesting level; `TraverseCtx::is_top_level` reads the top of the
/// stack to decide whether a statement sits at module/script top level
/// (§6: "determine top-level/block-top-level position").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AncestorKind {
    ScriptRoot,
    ModuleBody,
    Function,
    Block,
}

/// Traversal context shared by Recorder and Updater (§9: "Implementations
/// should model this as an explicit stack owned by the pass, not as
/// dynamic-scope globals"). Tracks the ancestor chain for top-level-position
/// queries and a parallel stack of shadow scopes for
/// `IMPORT_INLINING_SHADOWS_VAR` detection.
#[derive(Debug, Default)]
pub struct TraverseCtx {
    ancestors: Stack<AncestorKind>,
    shadow_scopes: Stack<FxHashSet<Atom>>,
}

impl TraverseCtx {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self, kind: AncestorKind) {
        self.ancestors.push(kind);
        if matches!(kind, AncestorKind::Function | AncestorKind::Block | AncestorKind::ModuleBody) {
            self.shadow_scopes.push(FxHashSet::default());
        }
    }

    pub fn exit(&mut self, kind: AncestorKind) {
        if matches!(kind, AncestorKind::Function | AncestorKind::Block | AncestorKind::ModuleBody) {
            self.shadow_scopes.pop();
        }
        self.ancestors.pop();
    }

    /// True when the node being visited is a direct statement child of the
    /// module body or script root — "the immediate statement children of
    /// the module body" (GLOSSARY, "Top level of a module").
    #[must_use]
    pub fn is_top_level(&self) -> bool {
        matches!(self.ancestors.last(), Some(AncestorKind::ScriptRoot | AncestorKind::ModuleBody))
    }

    /// Declares a local binding in the innermost scope, for shadow
    /// detection. The module's own top-level scope frame (pushed on
    /// entering the module body) is intentionally included: a name bound at
    /// module top level is not itself a "shadow" but aliasing into it is
    /// handled separately by the rewriter's own `topLevelNames` check.
    pub fn declare_local(&mut self, name: Atom) {
        if let Some(scope) = self.shadow_scopes.last_mut() {
            scope.insert(name);
        }
    }

    /// Whether `name` is bound by some scope nested strictly inside the
    /// module's own top-level scope — §4.3: "the first segment of that
    /// namespace would shadow a local non-global, non-module-scope
    /// variable".
    #[must_use]
    pub fn shadows_nested_local(&self, name: &str) -> bool {
        let frames = self.shadow_scopes.len();
        if frames <= 1 {
            return false;
        }
        self.shadow_scopes.iter().skip(1).any(|scope| scope.contains(name))
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }
}

/// Walks a function's parameter list and statements, declaring each bound
/// name into the current shadow scope. Kept free-standing rather than a
/// method on `Statement` because it needs a `TraverseCtx`, not just the AST.
pub fn declare_block_locals(ctx: &mut TraverseCtx, statements: &[Statement]) {
    for statement in statements {
        for id in statement.declared_names() {
            ctx.declare_local(id.name.clone());
        }
    }
}
