/// A JSDoc comment payload attached to a statement or object property.
///
/// JSDoc type strings are plain text inside comments, not structural AST —
/// the rewriter's type-string rewriter (§4.3, §9) walks `type_string`
/// fields and rewrites the dotted prefixes it finds, it does not parse them
/// into a sub-tree.
#[derive(Debug, Clone, Default)]
pub struct JsDoc {
    pub tags: Vec<JsDocTag>,
}

impl JsDoc {
    #[must_use]
    pub const fn new() -> Self {
        Self { tags: Vec::new() }
    }

    /// Appends a `@const` marker if one isn't already present, the way the
    /// Updater annotates synthesized `exports.x = …` statements (§4.3,
    /// "Add a 'const' JSDoc marker copied from the original statement").
    pub fn add_const_marker(&mut self) {
        if !self.tags.iter().any(|t| t.kind == JsDocTagKind::Const) {
            self.tags.push(JsDocTag { kind: JsDocTagKind::Const, type_string: None });
        }
    }

    /// Every type string in this JSDoc payload, mutable, for the longest-
    /// prefix rewrite pass.
    pub fn type_strings_mut(&mut self) -> impl Iterator<Item = &mut String> {
        self.tags.iter_mut().filter_map(|t| t.type_string.as_mut())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsDocTag {
    pub kind: JsDocTagKind,
    pub type_string: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsDocTagKind {
    Type,
    Param,
    Return,
    Typedef,
    Const,
    Private,
    Enum,
}
