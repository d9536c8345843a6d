use rustc_hash::{FxHashMap, FxHashSet};
use rw_semantic::{exported_namespace_of, GlobalRewriteState};
use rw_span::Atom;

/// Rewrites one JSDoc type string using the longest-known-prefix rule
/// (§4.3, §9): try the whole dotted string as a prefix, then progressively
/// shorter ones, stopping at the first rule that matches.
#[must_use]
pub fn rewrite_type_string(
    full: &str,
    aliases: &FxHashMap<Atom, String>,
    top_level_names: &FxHashSet<Atom>,
    contents_prefix: &str,
    state: &GlobalRewriteState,
) -> String {
    let mut prefix = full;
    loop {
        if let Some(target) = aliases.get(prefix) {
            return format!("{target}{}", &full[prefix.len()..]);
        }
        if top_level_names.contains(prefix) {
            return format!("{contents_prefix}{prefix}{}", &full[prefix.len()..]);
        }
        if state.is_bare_provide_prefix(prefix) {
            return full.to_owned();
        }
        if state.is_module_namespace(prefix) {
            if let Some(published) = state.published(prefix) {
                let binary = exported_namespace_of(&Atom::new(prefix), published);
                return format!("{binary}{}", &full[prefix.len()..]);
            }
        }
        match prefix.rfind('.') {
            Some(idx) => prefix = &prefix[..idx],
            None => return full.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rw_semantic::{PublishedModule, RootId};

    #[test]
    fn alias_prefix_is_substituted() {
        let mut aliases = FxHashMap::default();
        aliases.insert(Atom::new("B"), "module$exports$b$B".to_owned());
        let result = rewrite_type_string(
            "B",
            &aliases,
            &FxHashSet::default(),
            "module$contents$a_",
            &GlobalRewriteState::new(),
        );
        assert_eq!(result, "module$exports$b$B");
    }

    #[test]
    fn alias_prefix_keeps_member_suffix() {
        let mut aliases = FxHashMap::default();
        aliases.insert(Atom::new("ns"), "other.ns".to_owned());
        let result = rewrite_type_string(
            "ns.Inner",
            &aliases,
            &FxHashSet::default(),
            "module$contents$a_",
            &GlobalRewriteState::new(),
        );
        assert_eq!(result, "other.ns.Inner");
    }

    #[test]
    fn top_level_name_gets_content_prefix() {
        let mut top_level = FxHashSet::default();
        top_level.insert(Atom::new("Bar"));
        let result = rewrite_type_string(
            "Bar",
            &FxHashMap::default(),
            &top_level,
            "module$contents$foo$Bar_",
            &GlobalRewriteState::new(),
        );
        assert_eq!(result, "module$contents$foo$Bar_Bar");
    }

    #[test]
    fn module_namespace_prefix_becomes_binary_namespace() {
        let mut state = GlobalRewriteState::new();
        let root = RootId::next();
        let published = PublishedModule {
            declare_legacy_namespace: false,
            named_exports: FxHashSet::default(),
            default_export_local_name: None,
            has_default_export: true,
            export_targets: FxHashMap::default(),
        };
        state.register_module(Atom::new("b.B"), root, published).unwrap();
        let result = rewrite_type_string(
            "b.B",
            &FxHashMap::default(),
            &FxHashSet::default(),
            "module$contents$a_",
            &state,
        );
        assert_eq!(result, "module$exports$b$B");
    }

    #[test]
    fn unrelated_type_string_is_unchanged() {
        let result = rewrite_type_string(
            "string",
            &FxHashMap::default(),
            &FxHashSet::default(),
            "module$contents$a_",
            &GlobalRewriteState::new(),
        );
        assert_eq!(result, "string");
    }
}
