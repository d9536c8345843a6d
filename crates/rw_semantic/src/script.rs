use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};
use rw_ast::Expression;
use rw_span::Atom;

use crate::export::{DeclKind, ExportDefinition};
use crate::root_id::RootId;

/// Per-script mutable record (§3 Script Description). Created by Recorder on
/// first encountering a script or module body, consumed by Updater, then
/// discarded.
#[derive(Debug)]
pub struct ScriptDescription {
    pub root_id: RootId,
    pub is_module: bool,
    pub declare_legacy_namespace: bool,
    pub legacy_namespace: Option<Atom>,
    pub top_level_names: FxHashSet<Atom>,
    pub top_level_kinds: FxHashMap<Atom, DeclKind>,
    pub names_to_inline_by_alias: FxHashMap<Atom, String>,
    pub default_export_rhs: Option<Expression>,
    pub default_export_local_name: Option<Atom>,
    pub named_exports: FxHashSet<Atom>,
    pub exports_to_inline: FxHashMap<Atom, ExportDefinition>,
    pub will_create_exports_object: bool,
    pub has_created_export_object: bool,
    pub child_scripts: VecDeque<ScriptDescription>,
    /// Local alias name -> namespace, populated by `let X = goog.forwardDeclare('ns')`
    /// so a later `X = goog.module.get('ns')` fill-in can be validated (§4.2,
    /// `INVALID_GET_ALIAS`).
    pub forward_declared: FxHashMap<Atom, Atom>,
}

impl ScriptDescription {
    #[must_use]
    pub fn new(root_id: RootId) -> Self {
        Self {
            root_id,
            is_module: false,
            declare_legacy_namespace: false,
            legacy_namespace: None,
            top_level_names: FxHashSet::default(),
            top_level_kinds: FxHashMap::default(),
            names_to_inline_by_alias: FxHashMap::default(),
            default_export_rhs: None,
            default_export_local_name: None,
            named_exports: FxHashSet::default(),
            exports_to_inline: FxHashMap::default(),
            will_create_exports_object: false,
            has_created_export_object: false,
            child_scripts: VecDeque::new(),
            forward_declared: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn module(root_id: RootId) -> Self {
        Self { is_module: true, ..Self::new(root_id) }
    }

    /// Sets the declared namespace and its two derived manglings (§3:
    /// "`contentsPrefix`, `binaryNamespace`, `exportedNamespace`: derived").
    pub fn set_legacy_namespace(&mut self, namespace: Atom) {
        self.legacy_namespace = Some(namespace);
    }

    #[must_use]
    pub fn contents_prefix(&self) -> Option<String> {
        self.legacy_namespace.as_ref().map(Atom::to_contents_prefix)
    }

    #[must_use]
    pub fn binary_namespace(&self) -> Option<String> {
        if self.is_module { self.legacy_namespace.as_ref().map(Atom::to_binary_namespace) } else { None }
    }

    /// The namespace under which this script's exports are runtime-visible:
    /// the dotted legacy namespace for legacy scripts and legacy modules, the
    /// binary namespace otherwise.
    #[must_use]
    pub fn exported_namespace(&self) -> Option<String> {
        if !self.is_module || self.declare_legacy_namespace {
            self.legacy_namespace.as_ref().map(ToString::to_string)
        } else {
            self.binary_namespace()
        }
    }

    pub fn record_top_level_name(&mut self, name: Atom, kind: DeclKind) {
        self.top_level_names.insert(name.clone());
        self.top_level_kinds.insert(name, kind);
    }

    #[must_use]
    pub fn is_top_level_name(&self, name: &str) -> bool {
        self.top_level_names.contains(name)
    }

    /// §3 invariant: "`exportsToInline` keys are drawn only from the
    /// module's own top-level bindings."
    pub fn queue_export_inline(&mut self, local_name: Atom, export: ExportDefinition) {
        debug_assert!(
            self.top_level_names.contains(&local_name),
            "exportsToInline keys must be top-level bindings"
        );
        self.exports_to_inline.insert(local_name, export);
    }

    /// The read-only slice of this description other scripts are allowed to
    /// consult once it is registered (§3: other scripts resolve aliases and
    /// validate destructuring imports against a module's exports, but never
    /// reach into its private `exportsToInline`/`namesToInlineByAlias`
    /// bookkeeping). Kept separate from the full record so
    /// `GlobalRewriteState` can hold one summary per namespace while the
    /// full, actively-mutated `ScriptDescription` stays owned by whichever
    /// script is currently being recorded or updated.
    #[must_use]
    pub fn publish(&self) -> PublishedModule {
        let prefix = self.contents_prefix().unwrap_or_default();
        let mut export_targets = FxHashMap::default();
        for (local_name, export) in &self.exports_to_inline {
            if let Some(key) = &export.export_name {
                export_targets.insert(key.clone(), format!("{prefix}{local_name}"));
            }
        }
        PublishedModule {
            declare_legacy_namespace: self.declare_legacy_namespace,
            named_exports: self.named_exports.clone(),
            default_export_local_name: self.default_export_local_name.clone(),
            has_default_export: self.default_export_rhs.is_some(),
            export_targets,
        }
    }
}

/// The externally-visible summary of a registered module (§3: what other
/// scripts need to resolve an alias or validate a destructuring import
/// against this module's exports), independent of whichever script is
/// currently recording or updating it.
#[derive(Debug, Clone)]
pub struct PublishedModule {
    pub declare_legacy_namespace: bool,
    pub named_exports: FxHashSet<Atom>,
    pub default_export_local_name: Option<Atom>,
    pub has_default_export: bool,
    /// Named export key -> the fully resolved identifier a requiring script
    /// should read instead of a runtime `exports.<key>` member access, for
    /// exports this module inlined into a renamed top-level declaration
    /// rather than exposing through a created exports object.
    pub export_targets: FxHashMap<Atom, String>,
}

/// The runtime-visible namespace a *registered module* exports under: its
/// dotted legacy namespace if it is a legacy module, otherwise its binary
/// namespace. Free function rather than a method because the caller only
/// has the namespace key and the `PublishedModule` summary, not a full
/// `ScriptDescription` (§3: `exportedNamespace`).
#[must_use]
pub fn exported_namespace_of(namespace: &Atom, published: &PublishedModule) -> String {
    if published.declare_legacy_namespace {
        namespace.to_string()
    } else {
        namespace.to_binary_namespace()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rw_span::Span;

    #[test]
    fn derived_names_follow_declared_namespace() {
        let mut script = ScriptDescription::module(RootId::next());
        script.set_legacy_namespace(Atom::new("foo.Bar"));
        assert_eq!(script.binary_namespace().as_deref(), Some("module$exports$foo$Bar"));
        assert_eq!(script.contents_prefix().as_deref(), Some("module$contents$foo$Bar_"));
        assert_eq!(script.exported_namespace().as_deref(), Some("module$exports$foo$Bar"));
    }

    #[test]
    fn legacy_module_exports_under_dotted_name() {
        let mut script = ScriptDescription::module(RootId::next());
        script.set_legacy_namespace(Atom::new("foo.Bar"));
        script.declare_legacy_namespace = true;
        assert_eq!(script.exported_namespace().as_deref(), Some("foo.Bar"));
    }

    #[test]
    fn legacy_script_has_no_binary_namespace() {
        let mut script = ScriptDescription::new(RootId::next());
        script.set_legacy_namespace(Atom::new("foo.Bar"));
        assert_eq!(script.binary_namespace(), None);
        assert_eq!(script.exported_namespace().as_deref(), Some("foo.Bar"));
    }

    #[test]
    fn top_level_name_tracking() {
        let mut script = ScriptDescription::module(RootId::next());
        script.record_top_level_name(Atom::new("Bar"), DeclKind::Class);
        assert!(script.is_top_level_name("Bar"));
        assert!(!script.is_top_level_name("Baz"));
        let _ = Span::synthetic();
    }
}
