use std::fmt;

use compact_str::CompactString;

/// Interned-ish identifier/namespace text.
///
/// The rewriter spends most of its time slicing and rebuilding dotted
/// namespace strings (`"a.b.c"` → `module$exports$a$b$c`, longest-prefix
/// JSDoc lookups, …). `Atom` wraps a [`CompactString`] so short identifiers
/// — the overwhelming majority — never touch the heap, the same tradeoff
/// this workspace's own span crate makes for token text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Atom(CompactString);

impl Atom {
    #[must_use]
    pub fn new(s: &str) -> Self {
        Self(CompactString::new(s))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Dotted segments of a namespace, e.g. `"a.b.c"` → `["a", "b", "c"]`.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Every dotted prefix of this namespace, longest first:
    /// `"a.b.c"` → `["a.b.c", "a.b", "a"]`. Used by the JSDoc rewriter's
    /// longest-known-prefix rule (§4.3) and by `goog.provide`'s prefix
    /// registration (§4.2).
    #[must_use]
    pub fn prefixes(&self) -> std::vec::Vec<String> {
        let mut out = std::vec::Vec::new();
        let mut rest = self.0.as_str();
        loop {
            out.push(rest.to_owned());
            match rest.rfind('.') {
                Some(idx) => rest = &rest[..idx],
                None => break,
            }
        }
        out
    }

    /// The binary (flat) namespace: `module$exports$` + `.` replaced by `$`.
    #[must_use]
    pub fn to_binary_namespace(&self) -> String {
        format!("module$exports${}", self.0.replace('.', "$"))
    }

    /// The contents-prefix for a module's private top-level names:
    /// `module$contents$` + mangled namespace + `_`.
    #[must_use]
    pub fn to_contents_prefix(&self) -> String {
        format!("module$contents${}_", self.0.replace('.', "$"))
    }
}

impl From<&str> for Atom {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Atom {
    fn from(s: String) -> Self {
        Self(CompactString::from(s))
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::borrow::Borrow<str> for Atom {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::Atom;

    #[test]
    fn prefixes_are_longest_first() {
        let a = Atom::new("a.b.c");
        assert_eq!(a.prefixes(), vec!["a.b.c", "a.b", "a"]);
    }

    #[test]
    fn binary_namespace_mangles_dots() {
        assert_eq!(Atom::new("foo.Bar").to_binary_namespace(), "module$exports$foo$Bar");
    }

    #[test]
    fn contents_prefix_mangles_dots() {
        assert_eq!(Atom::new("foo.Bar").to_contents_prefix(), "module$contents$foo$Bar_");
    }
}
