use rustc_hash::{FxHashMap, FxHashSet};
use rw_span::Atom;

use crate::root_id::RootId;
use crate::script::PublishedModule;

/// An enqueued `goog.require`/`goog.forwardDeclare` whose target namespace
/// was unresolved at recording time (§4.2, §4.4).
#[derive(Debug, Clone)]
pub struct UnrecognizedRequire {
    pub namespace: Atom,
    pub must_be_ordered: bool,
}

/// Process-lifetime registry shared by every script in one compilation (§3
/// Global Rewrite State). Survives hot-swap edits; a hot-swap recompile first
/// withdraws one script's entries by [`RootId`], then re-runs Recorder and
/// Updater on that script alone.
#[derive(Debug, Default)]
pub struct GlobalRewriteState {
    scripts_by_namespace: FxHashMap<Atom, PublishedModule>,
    legacy_script_namespaces: FxHashSet<Atom>,
    namespaces_by_script_root: FxHashMap<RootId, FxHashSet<Atom>>,
    provide_prefixes: FxHashSet<Atom>,
    unrecognized_requires: Vec<UnrecognizedRequire>,
}

/// Why a namespace could not be registered (§3 invariant: "A namespace
/// appears in at most one of `scriptsByNamespace` and
/// `legacyScriptNamespaces`").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceConflict {
    /// The namespace already names a `goog.module`.
    DuplicateModule,
    /// The namespace already names a `goog.provide`.
    DuplicateNamespace,
}

impl GlobalRewriteState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_module_namespace(&self, namespace: &str) -> bool {
        self.scripts_by_namespace.contains_key(namespace)
    }

    #[must_use]
    pub fn is_legacy_namespace(&self, namespace: &str) -> bool {
        self.legacy_script_namespaces.contains(namespace)
    }

    #[must_use]
    pub fn is_known_namespace(&self, namespace: &str) -> bool {
        self.is_module_namespace(namespace) || self.is_legacy_namespace(namespace)
    }

    #[must_use]
    pub fn published(&self, namespace: &str) -> Option<&PublishedModule> {
        self.scripts_by_namespace.get(namespace)
    }

    /// Registers a `goog.module(ns)` declaration, per the duplicate rules of
    /// §4.2: already a module → `DuplicateModule`; already a legacy script →
    /// `DuplicateNamespace`.
    pub fn register_module(
        &mut self,
        namespace: Atom,
        root_id: RootId,
        published: PublishedModule,
    ) -> Result<(), NamespaceConflict> {
        if self.is_module_namespace(namespace.as_str()) {
            return Err(NamespaceConflict::DuplicateModule);
        }
        if self.is_legacy_namespace(namespace.as_str()) {
            return Err(NamespaceConflict::DuplicateNamespace);
        }
        self.namespaces_by_script_root.entry(root_id).or_default().insert(namespace.clone());
        self.scripts_by_namespace.insert(namespace, published);
        Ok(())
    }

    /// Registers a `goog.provide(ns)` declaration. Already a module →
    /// `DuplicateNamespace` (§4.2: "if the namespace is already a module →
    /// `DUPLICATE_NAMESPACE`"). Also adds every dotted prefix of `namespace`
    /// to the global prefix set the JSDoc rewriter consults.
    pub fn register_legacy_namespace(
        &mut self,
        namespace: &Atom,
        root_id: RootId,
    ) -> Result<(), NamespaceConflict> {
        if self.is_module_namespace(namespace.as_str()) {
            return Err(NamespaceConflict::DuplicateNamespace);
        }
        self.legacy_script_namespaces.insert(namespace.clone());
        self.namespaces_by_script_root.entry(root_id).or_default().insert(namespace.clone());
        for prefix in namespace.prefixes() {
            self.provide_prefixes.insert(Atom::from(prefix));
        }
        Ok(())
    }

    /// Whether `prefix` was registered by some `goog.provide` namespace
    /// (including as a strict dotted prefix of a longer one), and is not
    /// itself a module namespace — the JSDoc longest-prefix rule's
    /// "declared legacy-prefix and not also a module namespace" branch
    /// (§4.3).
    #[must_use]
    pub fn is_bare_provide_prefix(&self, prefix: &str) -> bool {
        self.provide_prefixes.contains(prefix) && !self.is_module_namespace(prefix)
    }

    pub fn enqueue_unrecognized_require(&mut self, namespace: Atom, must_be_ordered: bool) {
        self.unrecognized_requires.push(UnrecognizedRequire { namespace, must_be_ordered });
    }

    /// Drains the unrecognized-require queue (§4.4: "The queue is cleared so
    /// hot-swap recompiles report only new problems").
    pub fn drain_unrecognized_requires(&mut self) -> Vec<UnrecognizedRequire> {
        std::mem::take(&mut self.unrecognized_requires)
    }

    /// Withdraws every namespace a given script root registered, so a
    /// hot-swap recompile can re-record it from scratch (§3 Lifecycle:
    /// "hot-swap removes a single script's entries by root-node identity").
    pub fn remove_script_root(&mut self, root_id: RootId) {
        let Some(namespaces) = self.namespaces_by_script_root.remove(&root_id) else { return };
        for namespace in namespaces {
            self.scripts_by_namespace.remove(namespace.as_str());
            self.legacy_script_namespaces.remove(namespace.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ScriptDescription;

    fn published(script: &ScriptDescription) -> PublishedModule {
        script.publish()
    }

    #[test]
    fn duplicate_module_namespace_is_rejected() {
        let mut state = GlobalRewriteState::new();
        let ns = Atom::new("a.b");
        let script = ScriptDescription::module(RootId::next());
        state.register_module(ns.clone(), RootId::next(), published(&script)).unwrap();
        let err =
            state.register_module(ns, RootId::next(), published(&script)).unwrap_err();
        assert_eq!(err, NamespaceConflict::DuplicateModule);
    }

    #[test]
    fn module_then_provide_is_duplicate_namespace() {
        let mut state = GlobalRewriteState::new();
        let ns = Atom::new("a.b");
        let script = ScriptDescription::module(RootId::next());
        state.register_module(ns.clone(), RootId::next(), published(&script)).unwrap();
        let err = state.register_legacy_namespace(&ns, RootId::next()).unwrap_err();
        assert_eq!(err, NamespaceConflict::DuplicateNamespace);
    }

    #[test]
    fn provide_registers_every_prefix() {
        let mut state = GlobalRewriteState::new();
        state.register_legacy_namespace(&Atom::new("a.b.c"), RootId::next()).unwrap();
        assert!(state.is_bare_provide_prefix("a.b"));
        assert!(state.is_bare_provide_prefix("a"));
        assert!(state.is_bare_provide_prefix("a.b.c"));
        assert!(!state.is_bare_provide_prefix("a.b.c.d"));
    }

    #[test]
    fn module_namespace_is_not_a_bare_provide_prefix() {
        let mut state = GlobalRewriteState::new();
        let root = RootId::next();
        let script = ScriptDescription::module(root);
        state.register_module(Atom::new("a.b"), root, published(&script)).unwrap();
        state.register_legacy_namespace(&Atom::new("a.b.c"), RootId::next()).unwrap();
        assert!(!state.is_bare_provide_prefix("a.b"));
    }

    #[test]
    fn hot_swap_withdraws_script_namespaces() {
        let mut state = GlobalRewriteState::new();
        let root = RootId::next();
        let script = ScriptDescription::module(root);
        state.register_module(Atom::new("a.b"), root, published(&script)).unwrap();
        assert!(state.is_module_namespace("a.b"));
        state.remove_script_root(root);
        assert!(!state.is_module_namespace("a.b"));
    }

    #[test]
    fn unrecognized_requires_drain_once() {
        let mut state = GlobalRewriteState::new();
        state.enqueue_unrecognized_require(Atom::new("nope"), true);
        assert_eq!(state.drain_unrecognized_requires().len(), 1);
        assert!(state.drain_unrecognized_requires().is_empty());
    }
}
