//! Updater pass (§4.3): a second traversal, run only once Recorder and the
//! unrecognized-require reporter have finished and the global namespace
//! registry is complete, that rewrites each script using that complete
//! state — marker-call removal, alias inlining, content-prefixing of a
//! module's private top-level names, `exports` rewiring, and JSDoc
//! type-string rewriting.
//!
//! A module's own exported identity (everywhere it rewires `exports`, or
//! rewrites its own `goog.module(ns)` call) is its
//! [`ScriptDescription::exported_namespace`] — the dotted legacy namespace
//! for a `declareLegacyNamespace` module, its flat binary namespace
//! otherwise. A dotted namespace is represented the same way an alias target
//! already is throughout this file: as an `Identifier` whose name happens to
//! contain dots, not as a qualified-name `Member` chain — this AST never
//! distinguishes the two, and nothing here ever parses an identifier's name
//! back apart.

use rustc_hash::{FxHashMap, FxHashSet};
use rw_ast::{
    dotted_name_of, qualified_name_from_dotted, AssignmentExpression, CallExpression, Expression,
    ExpressionStatement, Identifier, ObjectExpression, Program, ScriptUnit, Statement,
    StringLiteral, VarKind, VariableDeclaration,
};
use rw_diagnostics::{DiagnosticCode, DiagnosticsSink, RewriterDiagnostic};
use rw_semantic::{exported_namespace_of, GlobalRewriteState, ScriptDescription};
use rw_span::{Atom, Span};
use rw_traverse::{declare_block_locals, AncestorKind, StatementEdits, TraverseCtx};

use crate::change_tracker::ChangeTracker;
use crate::jsdoc_rewrite::rewrite_type_string;

/// Rewrites every script, consuming the [`ScriptDescription`]s Recorder
/// produced (in the same order as `program.scripts`).
pub fn update_program(
    program: &mut Program,
    descriptions: Vec<ScriptDescription>,
    state: &GlobalRewriteState,
    tracker: &mut dyn ChangeTracker,
    sink: &mut dyn DiagnosticsSink,
) {
    for (script, description) in program.scripts.iter_mut().zip(descriptions) {
        update_script(script, description, state, tracker, sink);
    }
}

/// Per-script rewrite context: the alias and content-prefix bindings
/// accumulate as the traversal walks the script top-to-bottom, mirroring how
/// a `goog.require` alias must be declared before its first use in
/// source order.
struct UpdateCtx {
    aliases: FxHashMap<Atom, String>,
    /// Alias name -> (named export key -> resolved target), for aliases of
    /// modules that inlined some of their named exports instead of exposing
    /// them through a created exports object.
    alias_exports: FxHashMap<Atom, FxHashMap<Atom, String>>,
    top_level_names: FxHashSet<Atom>,
    contents_prefix: String,
    /// This script's own runtime-visible identity: the dotted legacy
    /// namespace for a legacy script or legacy module, its binary namespace
    /// otherwise (§3 `exportedNamespace`).
    exported_namespace: Option<String>,
    is_module: bool,
}

impl UpdateCtx {
    fn new(description: &ScriptDescription) -> Self {
        Self {
            aliases: FxHashMap::default(),
            alias_exports: FxHashMap::default(),
            top_level_names: description.top_level_names.clone(),
            contents_prefix: description.contents_prefix().unwrap_or_default(),
            exported_namespace: description.exported_namespace(),
            is_module: description.is_module,
        }
    }
}

fn update_script(
    script: &mut ScriptUnit,
    mut description: ScriptDescription,
    state: &GlobalRewriteState,
    tracker: &mut dyn ChangeTracker,
    sink: &mut dyn DiagnosticsSink,
) {
    let mut ctx = UpdateCtx::new(&description);
    let mut traverse = TraverseCtx::new();
    traverse.enter(AncestorKind::ScriptRoot);
    update_statements(&mut script.statements, &mut ctx, &mut traverse, &mut description, state, tracker, sink);
    traverse.exit(AncestorKind::ScriptRoot);
}

/// What to do with a statement the dispatcher just visited, since rewriting
/// a `goog.module()` call can turn one statement into a different kind of
/// statement rather than just mutating or removing it.
enum StmtOutcome {
    Keep,
    Remove,
    Replace(Statement),
}

#[allow(clippy::too_many_arguments)]
fn update_statements(
    statements: &mut Vec<Statement>,
    ctx: &mut UpdateCtx,
    traverse: &mut TraverseCtx,
    description: &mut ScriptDescription,
    state: &GlobalRewriteState,
    tracker: &mut dyn ChangeTracker,
    sink: &mut dyn DiagnosticsSink,
) {
    let mut edits = StatementEdits::new();
    for (index, statement) in statements.iter_mut().enumerate() {
        rewrite_jsdoc_of(statement, ctx, state);
        let is_top_level = traverse.is_top_level();
        match statement {
            Statement::ModuleBody(module_body) => {
                let Some(mut child) = description.child_scripts.pop_front() else { continue };
                let mut child_ctx = UpdateCtx::new(&child);
                traverse.enter(AncestorKind::ModuleBody);
                update_statements(&mut module_body.statements, &mut child_ctx, traverse, &mut child, state, tracker, sink);
                traverse.exit(AncestorKind::ModuleBody);
                debug_assert!(
                    child.declare_legacy_namespace || !child.will_create_exports_object || child.has_created_export_object,
                    "a module that will create an exports object must have created one by module-body exit"
                );
                let flattened = std::mem::take(&mut module_body.statements);
                edits.remove(index);
                for stmt in flattened {
                    edits.insert_after(index, stmt);
                }
                tracker.on_structural_change("flattened a loadModule body into its enclosing script");
            }
            Statement::FunctionDeclaration(func) => {
                maybe_rename_top_level_decl(func.id.as_mut(), ctx, description, is_top_level);
                traverse.enter(AncestorKind::Function);
                for param in &func.params {
                    traverse.declare_local(param.name.clone());
                }
                declare_block_locals(traverse, &func.body.statements);
                update_statements(&mut func.body.statements, ctx, traverse, description, state, tracker, sink);
                traverse.exit(AncestorKind::Function);
            }
            Statement::ClassDeclaration(class) => {
                maybe_rename_top_level_decl(class.id.as_mut(), ctx, description, is_top_level);
            }
            Statement::Block(block) => {
                traverse.enter(AncestorKind::Block);
                declare_block_locals(traverse, &block.statements);
                update_statements(&mut block.statements, ctx, traverse, description, state, tracker, sink);
                traverse.exit(AncestorKind::Block);
            }
            Statement::VariableDeclaration(decl) => {
                match update_require_declaration(decl, ctx, state, sink, is_top_level) {
                    RequireOutcome::RemoveDeclaration => {
                        edits.remove(index);
                        tracker.on_structural_change("inlined a require/forwardDeclare alias");
                        continue;
                    }
                    RequireOutcome::ReduceToBareCall(stmt) => {
                        edits.replace(index, stmt);
                        tracker.on_structural_change("reduced a legacy-script require to a bare call");
                        continue;
                    }
                    RequireOutcome::ReplacedInPlace => {
                        tracker.on_structural_change("replaced a nested require call with its namespace identifier");
                        continue;
                    }
                    RequireOutcome::NotARequire => {}
                }
                for declarator in &mut decl.declarations {
                    if let Some(init) = &mut declarator.init {
                        rewrite_expression(init, ctx, traverse, state, sink);
                    }
                    if let rw_ast::BindingPattern::Identifier(id) = &mut declarator.id {
                        maybe_rename_top_level_decl(Some(id), ctx, description, is_top_level);
                    }
                }
            }
            Statement::Expression(expr_stmt) => {
                match update_expression_statement(expr_stmt, ctx, traverse, description, state, sink) {
                    StmtOutcome::Keep => {}
                    StmtOutcome::Remove => {
                        edits.remove(index);
                        tracker.on_structural_change("removed a namespace marker call");
                    }
                    StmtOutcome::Replace(stmt) => {
                        edits.replace(index, stmt);
                        tracker.on_structural_change("replaced goog.module with its exports object declaration");
                    }
                }
            }
            Statement::Return(ret) => {
                if let Some(arg) = &mut ret.argument {
                    rewrite_expression(arg, ctx, traverse, state, sink);
                }
            }
        }
    }
    edits.apply(statements);
}

/// Renames a top-level declaration's binding identifier: to the module's
/// exported namespace if it is the inlined default export, otherwise to its
/// content-prefixed name. Only fires for declarations actually at module/
/// script top level, so a nested declaration that happens to share a
/// top-level name is left alone.
///
/// A declaration binds a single identifier token, never a dotted path, so a
/// legacy module's inlined default export (whose exported namespace is a
/// dotted legacy name) can't be renamed onto its declaration this way; it
/// falls back to ordinary content-prefixing instead, the same as any other
/// top-level binding.
fn maybe_rename_top_level_decl(
    id: Option<&mut Identifier>,
    ctx: &UpdateCtx,
    description: &ScriptDescription,
    is_top_level: bool,
) {
    let Some(id) = id else { return };
    if !is_top_level || !ctx.is_module || !ctx.top_level_names.contains(&id.name) {
        return;
    }
    let name = id.name.clone();
    let is_inlined_default_export = description
        .default_export_local_name
        .as_ref()
        .map(rw_span::Atom::as_str)
        == Some(name.as_str());
    if is_inlined_default_export && !description.declare_legacy_namespace {
        if let Some(exported) = &ctx.exported_namespace {
            id.rename(exported.clone());
            return;
        }
    }
    id.rename(format!("{}{}", ctx.contents_prefix, name));
}

/// What `update_require_declaration` did with a declaration it recognized
/// as wrapping a `goog.require`/`goog.forwardDeclare` call, so its caller
/// knows how to adjust the enclosing statement list (§4.3).
enum RequireOutcome {
    /// Not a require/forwardDeclare declaration; handle it normally.
    NotARequire,
    /// Top-level binding of a module: the whole declaration is removed, and
    /// every later use of the bound name(s) is inlined to the required
    /// namespace's identifier instead.
    RemoveDeclaration,
    /// Non-top scope of a module: the call expression was already replaced
    /// in place with the required namespace's identifier; the declaration
    /// itself, and its binding, stay.
    ReplacedInPlace,
    /// A legacy script (not a module): the declaration is reduced to a bare
    /// `goog.require(ns);`/`goog.forwardDeclare(ns);` statement, discarding
    /// the alias binding but keeping the side-effecting call visible to the
    /// rest of the program.
    ReduceToBareCall(Statement),
}

/// Handles a single-declarator `var X = goog.require('ns')` /
/// `let X = goog.forwardDeclare('ns')` or its destructuring form.
fn update_require_declaration(
    decl: &mut VariableDeclaration,
    ctx: &mut UpdateCtx,
    state: &GlobalRewriteState,
    sink: &mut dyn DiagnosticsSink,
    is_top_level: bool,
) -> RequireOutcome {
    let span = decl.span;
    let [declarator] = decl.declarations.as_mut_slice() else { return RequireOutcome::NotARequire };
    let Some(Expression::Call(call)) = declarator.init.as_ref() else { return RequireOutcome::NotARequire };
    let Some(name) = dotted_name_of(&call.callee) else { return RequireOutcome::NotARequire };
    if name != "goog.require" && name != "goog.forwardDeclare" {
        return RequireOutcome::NotARequire;
    }
    let Some(lit) = call.single_string_argument() else { return RequireOutcome::NotARequire };
    let namespace = lit.value.clone();

    if !ctx.is_module {
        // A legacy script keeps the side-effecting call for the rest of the
        // program to see, but the alias binding it was attached to has no
        // meaning outside a module (§4.3).
        let callee = qualified_name_from_dotted(&name, span);
        let bare_call = Expression::Call(Box::new(CallExpression::new(
            callee,
            vec![Expression::StringLiteral(StringLiteral::new(namespace.as_str(), span))],
            span,
        )));
        return RequireOutcome::ReduceToBareCall(Statement::Expression(ExpressionStatement::new(bare_call, span)));
    }

    let (root, exports) = resolve_require_target(&namespace, state);

    if !is_top_level {
        // Non-top scope of a module: only a plain identifier binding can be
        // handled in place; a destructuring form this deep is unspecified
        // and falls through to the top-level alias-registration behavior.
        if let rw_ast::BindingPattern::Identifier(_) = &declarator.id {
            declarator.init = Some(Expression::Identifier(Identifier::new(&root, span)));
            return RequireOutcome::ReplacedInPlace;
        }
    }

    match &declarator.id {
        rw_ast::BindingPattern::Identifier(id) => {
            ctx.aliases.insert(id.name.clone(), root);
            if !exports.is_empty() {
                ctx.alias_exports.insert(id.name.clone(), exports);
            }
        }
        rw_ast::BindingPattern::Object(props) => {
            let published = state.published(namespace.as_str());
            // Destructuring is only legal against a module with named exports
            // at all; a default-export-only module reports every field as
            // ILLEGAL_DESTRUCTURING_DEFAULT_EXPORT rather than per-field
            // ILLEGAL_DESTRUCTURING_NOT_EXPORTED.
            let has_named_exports = published.is_some_and(|p| !p.named_exports.is_empty());
            for prop in props {
                let key = &prop.key;
                if key.as_str() == "default" {
                    if !published.is_some_and(|p| p.has_default_export) {
                        sink.report(
                            RewriterDiagnostic::error(
                                DiagnosticCode::IllegalDestructuringDefaultExport,
                                format!("'{namespace}' has no default export to destructure"),
                            )
                            .with_label(span),
                        );
                    }
                    ctx.aliases.insert(prop.value.name.clone(), root.clone());
                    continue;
                }
                let known = published.is_some_and(|p| p.named_exports.contains(key));
                if !known {
                    let code = if has_named_exports {
                        DiagnosticCode::IllegalDestructuringNotExported
                    } else {
                        DiagnosticCode::IllegalDestructuringDefaultExport
                    };
                    let message = if has_named_exports {
                        format!("'{namespace}' does not export '{key}'")
                    } else {
                        format!("'{namespace}' only has a default export; cannot destructure '{key}'")
                    };
                    sink.report(RewriterDiagnostic::error(code, message).with_label(span));
                    continue;
                }
                let target = exports.get(key).cloned().unwrap_or_else(|| format!("{root}.{key}"));
                ctx.aliases.insert(prop.value.name.clone(), target);
            }
        }
    }
    RequireOutcome::RemoveDeclaration
}

/// Resolves a required namespace to the identifier a consuming script should
/// substitute for the alias root, and any per-named-export overrides for
/// exports the required module inlined (§4.3). A registered module resolves
/// to its [`exported_namespace_of`] — the dotted legacy namespace under
/// `declareLegacyNamespace`, its flat binary namespace otherwise — so an
/// alias always matches the identity the required module rewrote its own
/// `exports` to. A plain `goog.provide` namespace has no module registration
/// to match, so it resolves to its real dotted global name directly.
fn resolve_require_target(namespace: &Atom, state: &GlobalRewriteState) -> (String, FxHashMap<Atom, String>) {
    if let Some(published) = state.published(namespace.as_str()) {
        (exported_namespace_of(namespace, published), published.export_targets.clone())
    } else {
        (namespace.to_string(), FxHashMap::default())
    }
}

#[allow(clippy::too_many_arguments)]
fn update_expression_statement(
    expr_stmt: &mut ExpressionStatement,
    ctx: &mut UpdateCtx,
    traverse: &mut TraverseCtx,
    description: &mut ScriptDescription,
    state: &GlobalRewriteState,
    sink: &mut dyn DiagnosticsSink,
) -> StmtOutcome {
    let span = expr_stmt.span;
    if let Expression::Call(call) = &expr_stmt.expression {
        if let Some(name) = dotted_name_of(&call.callee) {
            match name.as_str() {
                "goog.module" => {
                    if description.declare_legacy_namespace {
                        // A legacy module stays visible under its declared
                        // dotted namespace, the same way a plain
                        // `goog.provide` script does; keep the call alive
                        // but retarget its callee (§4.3 scenario 2).
                        let namespace = description
                            .legacy_namespace
                            .clone()
                            .unwrap_or_else(|| rw_span::Atom::new(""));
                        let callee = qualified_name_from_dotted("goog.provide", span);
                        let call = Expression::Call(Box::new(CallExpression::new(
                            callee,
                            vec![Expression::StringLiteral(StringLiteral::new(namespace.as_str(), span))],
                            span,
                        )));
                        return StmtOutcome::Replace(Statement::Expression(ExpressionStatement::new(call, span)));
                    }
                    return if description.will_create_exports_object {
                        description.has_created_export_object = true;
                        let binary = ctx.exported_namespace.clone().unwrap_or_default();
                        let init = Expression::Object(ObjectExpression { span, properties: Vec::new() });
                        let decl = VariableDeclaration::single(VarKind::Var, Identifier::new(&binary, span), Some(init), span);
                        StmtOutcome::Replace(Statement::VariableDeclaration(decl))
                    } else {
                        StmtOutcome::Remove
                    };
                }
                "goog.module.declareLegacyNamespace" | "goog.provide" | "goog.require" | "goog.forwardDeclare" => {
                    return StmtOutcome::Remove;
                }
                "goog.module.get" => {
                    // A `goog.module.get` left over after forwardDeclare
                    // fill-ins were matched away is replaced by the target's
                    // exported namespace rather than dropped (§4.3).
                    let Some(lit) = call.single_string_argument() else { return StmtOutcome::Remove };
                    let (root, _) = resolve_require_target(&lit.value, state);
                    let replacement = Expression::Identifier(Identifier::new(&root, span));
                    return StmtOutcome::Replace(Statement::Expression(ExpressionStatement::new(replacement, span)));
                }
                _ => {}
            }
        }
    }
    match &mut expr_stmt.expression {
        Expression::Assignment(assign) => {
            let is_exports_target = is_exports_expression(&assign.target);
            if ctx.is_module && is_exports_target {
                let exported = ctx.exported_namespace.clone().unwrap_or_default();
                rewrite_exports_target(&mut assign.target, &exported, span);
            } else {
                rewrite_expression(&mut assign.target, ctx, traverse, state, sink);
            }
            rewrite_expression(&mut assign.value, ctx, traverse, state, sink);
        }
        other => rewrite_expression(other, ctx, traverse, state, sink),
    }
    StmtOutcome::Keep
}

fn is_exports_expression(expr: &Expression) -> bool {
    match expr {
        Expression::Identifier(id) => id.name.as_str() == "exports",
        Expression::Member(member) => is_exports_expression(&member.object),
        _ => false,
    }
}

/// Replaces the `exports` root of an assignment target with the module's
/// exported namespace, e.g. `exports.x = …` becomes `<exported>.x = …`.
fn rewrite_exports_target(target: &mut Expression, exported: &str, span: Span) {
    match target {
        Expression::Identifier(id) if id.name.as_str() == "exports" => {
            *target = Expression::Identifier(Identifier::new(exported, span));
        }
        Expression::Member(member) => rewrite_exports_target(&mut member.object, exported, span),
        _ => {}
    }
}

fn rewrite_expression(expr: &mut Expression, ctx: &UpdateCtx, traverse: &mut TraverseCtx, state: &GlobalRewriteState, sink: &mut dyn DiagnosticsSink) {
    match expr {
        Expression::Identifier(id) => rewrite_identifier(id, ctx, traverse, sink),
        Expression::Member(member_box) => {
            let span = member_box.span;
            let property = member_box.property.clone();
            if let Some(full) = qualified_prefix_of(&member_box.object, property.as_str()) {
                if state.is_module_namespace(&full) {
                    sink.report(
                        RewriterDiagnostic::warn(
                            DiagnosticCode::QualifiedReferenceToGoogModule,
                            format!("'{full}' is a goog.module namespace; reference it through a goog.require alias instead"),
                        )
                        .with_label(span),
                    );
                }
            }
            let inline_target = match &member_box.object {
                Expression::Identifier(id) => ctx.alias_exports.get(&id.name).and_then(|exports| exports.get(&property)).cloned(),
                _ => None,
            };
            if let Some(target) = inline_target {
                *expr = Expression::Identifier(Identifier::new(&target, span));
            } else {
                rewrite_expression(&mut member_box.object, ctx, traverse, state, sink);
            }
        }
        Expression::Call(call) => {
            if dotted_name_of(&call.callee).as_deref() == Some("goog.module.get") {
                if let Some(lit) = call.single_string_argument() {
                    let span = lit.span;
                    let (root, _) = resolve_require_target(&lit.value, state);
                    *expr = Expression::Identifier(Identifier::new(&root, span));
                    return;
                }
            }
            rewrite_expression(&mut call.callee, ctx, traverse, state, sink);
            for argument in &mut call.arguments {
                rewrite_expression(argument, ctx, traverse, state, sink);
            }
        }
        Expression::Assignment(assign) => {
            rewrite_expression(&mut assign.target, ctx, traverse, state, sink);
            rewrite_expression(&mut assign.value, ctx, traverse, state, sink);
        }
        Expression::Object(obj) => {
            for prop in &mut obj.properties {
                rewrite_expression(&mut prop.value, ctx, traverse, state, sink);
                if let Some(jsdoc) = &mut prop.jsdoc {
                    rewrite_jsdoc(jsdoc, ctx, state);
                }
            }
        }
        Expression::Function(func) => {
            traverse.enter(AncestorKind::Function);
            for param in &func.params {
                traverse.declare_local(param.name.clone());
            }
            declare_block_locals(traverse, &func.body.statements);
            rewrite_nested_statements(&mut func.body.statements, ctx, traverse, state, sink);
            traverse.exit(AncestorKind::Function);
        }
        Expression::StringLiteral(_) | Expression::NumberLiteral(_) | Expression::Class(_) => {}
    }
}

/// A lighter statement walker used for bodies reached only through an
/// expression (e.g. a `function` expression assigned as an `exports.x`
/// property): rewrites identifier references and JSDoc, but never
/// recognizes marker calls or queues structural edits — those only ever
/// occur at a script's or module's own statement lists.
fn rewrite_nested_statements(statements: &mut Vec<Statement>, ctx: &UpdateCtx, traverse: &mut TraverseCtx, state: &GlobalRewriteState, sink: &mut dyn DiagnosticsSink) {
    for statement in statements.iter_mut() {
        rewrite_jsdoc_of(statement, ctx, state);
        match statement {
            Statement::Expression(expr_stmt) => rewrite_expression(&mut expr_stmt.expression, ctx, traverse, state, sink),
            Statement::VariableDeclaration(decl) => {
                for declarator in &mut decl.declarations {
                    if let Some(init) = &mut declarator.init {
                        rewrite_expression(init, ctx, traverse, state, sink);
                    }
                }
            }
            Statement::FunctionDeclaration(func) => {
                traverse.enter(AncestorKind::Function);
                for param in &func.params {
                    traverse.declare_local(param.name.clone());
                }
                declare_block_locals(traverse, &func.body.statements);
                rewrite_nested_statements(&mut func.body.statements, ctx, traverse, state, sink);
                traverse.exit(AncestorKind::Function);
            }
            Statement::Block(block) => {
                traverse.enter(AncestorKind::Block);
                declare_block_locals(traverse, &block.statements);
                rewrite_nested_statements(&mut block.statements, ctx, traverse, state, sink);
                traverse.exit(AncestorKind::Block);
            }
            Statement::Return(ret) => {
                if let Some(arg) = &mut ret.argument {
                    rewrite_expression(arg, ctx, traverse, state, sink);
                }
            }
            Statement::ClassDeclaration(_) | Statement::ModuleBody(_) => {}
        }
    }
}

fn rewrite_identifier(id: &mut Identifier, ctx: &UpdateCtx, traverse: &TraverseCtx, sink: &mut dyn DiagnosticsSink) {
    if id.name.as_str() == "exports" {
        if let Some(exported) = &ctx.exported_namespace {
            id.rename(exported.clone());
        }
        return;
    }
    if let Some(target) = ctx.aliases.get(&id.name) {
        let first_segment = target.split('.').next().unwrap_or(target.as_str());
        if traverse.shadows_nested_local(first_segment) {
            sink.report(
                RewriterDiagnostic::warn(
                    DiagnosticCode::ImportInliningShadowsVar,
                    format!("inlining '{}' would shadow a local variable named '{first_segment}'", id.name),
                )
                .with_label(id.span),
            );
        }
        id.rename(target.clone());
        return;
    }
    if ctx.is_module && ctx.top_level_names.contains(&id.name) {
        let prefixed = format!("{}{}", ctx.contents_prefix, id.name);
        id.rename(prefixed);
    }
}

fn qualified_prefix_of(object: &Expression, property: &str) -> Option<String> {
    let base = match object {
        Expression::Identifier(id) => id.name.as_str().to_owned(),
        Expression::Member(inner) => qualified_prefix_of(&inner.object, inner.property.as_str())?,
        _ => return None,
    };
    Some(format!("{base}.{property}"))
}

fn rewrite_jsdoc_of(statement: &mut Statement, ctx: &UpdateCtx, state: &GlobalRewriteState) {
    let jsdoc = match statement {
        Statement::Expression(s) => s.jsdoc.as_mut(),
        Statement::FunctionDeclaration(s) => s.jsdoc.as_mut(),
        Statement::ClassDeclaration(s) => s.jsdoc.as_mut(),
        Statement::VariableDeclaration(s) => s.jsdoc.as_mut(),
        _ => None,
    };
    if let Some(jsdoc) = jsdoc {
        rewrite_jsdoc(jsdoc, ctx, state);
    }
}

fn rewrite_jsdoc(jsdoc: &mut rw_ast::JsDoc, ctx: &UpdateCtx, state: &GlobalRewriteState) {
    for type_string in jsdoc.type_strings_mut() {
        *type_string = rewrite_type_string(type_string.as_str(), &ctx.aliases, &ctx.top_level_names, &ctx.contents_prefix, state);
    }
}
