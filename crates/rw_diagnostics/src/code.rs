/// The stable diagnostic keys of §6/§7, each a `JSC_*`-prefixed string so a
/// consumer that only sees rendered diagnostics can still match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    InvalidModuleNamespace,
    InvalidProvideNamespace,
    InvalidRequireNamespace,
    InvalidForwardDeclareNamespace,
    InvalidGetNamespace,
    InvalidProvideCall,
    InvalidGetCallScope,
    InvalidGetAlias,
    InvalidExportComputedProperty,
    UselessUseStrictDirective,
    DuplicateModule,
    DuplicateNamespace,
    MissingModuleOrProvide,
    LateProvideError,
    ImportInliningShadowsVar,
    QualifiedReferenceToGoogModule,
    IllegalDestructuringDefaultExport,
    IllegalDestructuringNotExported,
}

impl DiagnosticCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidModuleNamespace => "JSC_GOOG_MODULE_INVALID_MODULE_NAMESPACE",
            Self::InvalidProvideNamespace => "JSC_GOOG_MODULE_INVALID_PROVIDE_NAMESPACE",
            Self::InvalidRequireNamespace => "JSC_GOOG_MODULE_INVALID_REQUIRE_NAMESPACE",
            Self::InvalidForwardDeclareNamespace => {
                "JSC_GOOG_MODULE_INVALID_FORWARD_DECLARE_NAMESPACE"
            }
            Self::InvalidGetNamespace => "JSC_GOOG_MODULE_INVALID_GET_NAMESPACE",
            Self::InvalidProvideCall => "JSC_GOOG_MODULE_INVALID_PROVIDE_CALL",
            Self::InvalidGetCallScope => "JSC_GOOG_MODULE_INVALID_GET_CALL_SCOPE",
            Self::InvalidGetAlias => "JSC_GOOG_MODULE_INVALID_GET_ALIAS",
            Self::InvalidExportComputedProperty => {
                "JSC_GOOG_MODULE_INVALID_EXPORT_COMPUTED_PROPERTY"
            }
            Self::UselessUseStrictDirective => "JSC_USELESS_USE_STRICT_DIRECTIVE",
            Self::DuplicateModule => "JSC_DUPLICATE_MODULE",
            Self::DuplicateNamespace => "JSC_DUPLICATE_NAMESPACE",
            Self::MissingModuleOrProvide => "JSC_MISSING_MODULE_OR_PROVIDE",
            Self::LateProvideError => "JSC_LATE_PROVIDE_ERROR",
            Self::ImportInliningShadowsVar => "JSC_IMPORT_INLINING_SHADOWS_VAR",
            Self::QualifiedReferenceToGoogModule => "JSC_QUALIFIED_REFERENCE_TO_GOOG_MODULE",
            Self::IllegalDestructuringDefaultExport => {
                "JSC_ILLEGAL_DESTRUCTURING_DEFAULT_EXPORT"
            }
            Self::IllegalDestructuringNotExported => "JSC_ILLEGAL_DESTRUCTURING_NOT_EXPORTED",
        }
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
