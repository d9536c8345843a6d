//! Recorder pass (§4.2): a pre-order traversal that classifies every script
//! and module body, validates marker-call shapes, and builds each script's
//! [`ScriptDescription`] plus the cross-script [`GlobalRewriteState`].
//!
//! Marker calls (`goog.module`, `goog.provide`, `goog.require`, …) are
//! recognized wherever they occur as a bare expression statement or a
//! single-binding declaration initializer, not only at module top level —
//! `goog.module.get` fill-ins in particular are ordinary nested-function
//! code. Only `topLevelNames` collection and export recording are scoped to
//! true top-level statements.

use rw_ast::{
    dotted_name_of, AssignmentExpression, CallExpression, Expression, MemberExpression,
    ObjectExpression, Program, ScriptUnit, Statement, VarKind, VariableDeclaration,
    VariableDeclarator,
};
use rw_diagnostics::{DiagnosticCode, DiagnosticsSink, RewriterDiagnostic};
use rw_semantic::{
    DeclKind, ExportDefinition, GlobalRewriteState, NamespaceConflict, RootId, ScriptDescription,
};
use rw_span::{Atom, Span};
use rw_traverse::{declare_block_locals, AncestorKind, TraverseCtx};

use crate::change_tracker::ChangeTracker;
use crate::options::RewriterOptions;

/// Records every script in a compilation batch, in source order, returning
/// one [`ScriptDescription`] per top-level script. Nested `goog.loadModule`
/// bodies are recorded into their enclosing script's `child_scripts` queue
/// instead of the returned vector.
pub fn record_program(
    program: &mut Program,
    state: &mut GlobalRewriteState,
    options: &RewriterOptions,
    sink: &mut dyn DiagnosticsSink,
    tracker: &mut dyn ChangeTracker,
) -> Vec<ScriptDescription> {
    program.scripts.iter_mut().map(|script| record_script(script, state, options, sink, tracker)).collect()
}

fn record_script(
    script: &mut ScriptUnit,
    state: &mut GlobalRewriteState,
    options: &RewriterOptions,
    sink: &mut dyn DiagnosticsSink,
    tracker: &mut dyn ChangeTracker,
) -> ScriptDescription {
    let mut description = ScriptDescription::new(RootId::next());
    let mut ctx = TraverseCtx::new();
    ctx.enter(AncestorKind::ScriptRoot);
    record_statements(
        &mut script.statements,
        &mut script.directives,
        &mut description,
        state,
        options,
        sink,
        tracker,
        &mut ctx,
    );
    ctx.exit(AncestorKind::ScriptRoot);
    try_register_module(&description, state, sink);
    description
}

fn decl_kind_of(statement: &Statement) -> Option<DeclKind> {
    match statement {
        Statement::FunctionDeclaration(_) => Some(DeclKind::Function),
        Statement::ClassDeclaration(_) => Some(DeclKind::Class),
        Statement::VariableDeclaration(v) => Some(match v.kind {
            VarKind::Var => DeclKind::Var,
            VarKind::Let => DeclKind::Let,
            VarKind::Const => DeclKind::Const,
        }),
        _ => None,
    }
}

#[allow(clippy::too_many_arguments)]
fn record_statements(
    statements: &mut Vec<Statement>,
    script_directives: &mut Vec<Atom>,
    description: &mut ScriptDescription,
    state: &mut GlobalRewriteState,
    options: &RewriterOptions,
    sink: &mut dyn DiagnosticsSink,
    tracker: &mut dyn ChangeTracker,
    ctx: &mut TraverseCtx,
) {
    if ctx.is_top_level() {
        for statement in statements.iter() {
            let Some(kind) = decl_kind_of(statement) else { continue };
            for id in statement.declared_names() {
                description.record_top_level_name(id.name.clone(), kind);
            }
        }
    }

    let mut index = 0;
    while index < statements.len() {
        if let Statement::VariableDeclaration(decl) = &statements[index] {
            if decl.declarations.len() > 1 && decl.declarations.iter().any(declarator_is_require_call) {
                let split = split_require_declaration(decl);
                statements.splice(index..=index, split);
                continue;
            }
        }
        let mut remove = false;
        match &mut statements[index] {
            Statement::ModuleBody(module_body) => {
                let mut child = ScriptDescription::module(RootId::next());
                ctx.enter(AncestorKind::ModuleBody);
                record_statements(
                    &mut module_body.statements,
                    script_directives,
                    &mut child,
                    state,
                    options,
                    sink,
                    tracker,
                    ctx,
                );
                ctx.exit(AncestorKind::ModuleBody);
                try_register_module(&child, state, sink);
                description.child_scripts.push_back(child);
            }
            Statement::FunctionDeclaration(func) => {
                ctx.enter(AncestorKind::Function);
                for param in &func.params {
                    ctx.declare_local(param.name.clone());
                }
                declare_block_locals(ctx, &func.body.statements);
                record_statements(
                    &mut func.body.statements,
                    script_directives,
                    description,
                    state,
                    options,
                    sink,
                    tracker,
                    ctx,
                );
                ctx.exit(AncestorKind::Function);
            }
            Statement::Block(block) => {
                ctx.enter(AncestorKind::Block);
                declare_block_locals(ctx, &block.statements);
                record_statements(
                    &mut block.statements,
                    script_directives,
                    description,
                    state,
                    options,
                    sink,
                    tracker,
                    ctx,
                );
                ctx.exit(AncestorKind::Block);
            }
            Statement::Expression(expr_stmt) => {
                let span = expr_stmt.span;
                match &mut expr_stmt.expression {
                    Expression::Call(call) => {
                        remove = record_call_expression_statement(
                            call,
                            span,
                            description,
                            state,
                            options,
                            sink,
                            script_directives,
                        );
                        if remove {
                            tracker.on_structural_change("removed a recognized goog.module marker call");
                        }
                    }
                    Expression::Assignment(assign) => {
                        remove = record_assignment(assign, span, description, sink);
                        if remove {
                            tracker.on_structural_change("inlined an exports assignment at record time");
                        }
                    }
                    _ => {}
                }
            }
            Statement::VariableDeclaration(decl) => {
                remove = record_variable_declaration(decl, description, state, sink);
            }
            _ => {}
        }
        if remove {
            statements.remove(index);
        } else {
            index += 1;
        }
    }
}

/// Publishes a finished module description into global state (§4.2: "register
/// the script in global state"). Run once the description's fields are
/// complete — at the enclosing `ScriptUnit`'s end for an unwrapped script, or
/// at module-body exit for a nested `goog.loadModule` body — rather than the
/// instant `goog.module(ns)` is seen, since `PublishedModule` needs the
/// module's full export set.
fn try_register_module(description: &ScriptDescription, state: &mut GlobalRewriteState, sink: &mut dyn DiagnosticsSink) {
    if !description.is_module {
        return;
    }
    let Some(namespace) = description.legacy_namespace.clone() else { return };
    let published = description.publish();
    if let Err(conflict) = state.register_module(namespace.clone(), description.root_id, published) {
        let code = match conflict {
            NamespaceConflict::DuplicateModule => DiagnosticCode::DuplicateModule,
            NamespaceConflict::DuplicateNamespace => DiagnosticCode::DuplicateNamespace,
        };
        sink.report(RewriterDiagnostic::error(code, format!("'{namespace}' is already declared")));
    }
}

/// Adds `"use strict"` to the enclosing script's directives if absent,
/// returning whether it was already present (§4.2: idempotent).
fn ensure_use_strict(directives: &mut Vec<Atom>) -> bool {
    if directives.iter().any(|d| d.as_str() == "use strict") {
        true
    } else {
        directives.push(Atom::new("use strict"));
        false
    }
}

#[allow(clippy::too_many_arguments)]
fn record_call_expression_statement(
    call: &mut CallExpression,
    span: Span,
    description: &mut ScriptDescription,
    state: &mut GlobalRewriteState,
    options: &RewriterOptions,
    sink: &mut dyn DiagnosticsSink,
    script_directives: &mut Vec<Atom>,
) -> bool {
    let Some(name) = dotted_name_of(&call.callee) else { return false };
    match name.as_str() {
        "goog.module" => {
            let Some(lit) = call.single_string_argument() else {
                sink.report(
                    RewriterDiagnostic::error(
                        DiagnosticCode::InvalidModuleNamespace,
                        "goog.module() requires a single string literal argument",
                    )
                    .with_label(span),
                );
                return false;
            };
            description.is_module = true;
            description.set_legacy_namespace(lit.value.clone());
            if ensure_use_strict(script_directives) && options.report_useless_use_strict {
                sink.report(
                    RewriterDiagnostic::warn(
                        DiagnosticCode::UselessUseStrictDirective,
                        "redundant \"use strict\"; goog.module already implies strict mode",
                    )
                    .with_label(span),
                );
            }
            false
        }
        "goog.module.declareLegacyNamespace" => {
            description.declare_legacy_namespace = true;
            false
        }
        "goog.provide" => {
            if description.is_module {
                sink.report(
                    RewriterDiagnostic::error(
                        DiagnosticCode::InvalidProvideCall,
                        "goog.provide() cannot appear inside a goog.module",
                    )
                    .with_label(span),
                );
                return false;
            }
            let Some(lit) = call.single_string_argument() else {
                sink.report(
                    RewriterDiagnostic::error(
                        DiagnosticCode::InvalidProvideNamespace,
                        "goog.provide() requires a single string literal argument",
                    )
                    .with_label(span),
                );
                return false;
            };
            let namespace = lit.value.clone();
            match state.register_legacy_namespace(&namespace, description.root_id) {
                Ok(()) => description.set_legacy_namespace(namespace),
                Err(_) => {
                    sink.report(
                        RewriterDiagnostic::error(
                            DiagnosticCode::DuplicateNamespace,
                            format!("'{namespace}' is already provided or required"),
                        )
                        .with_label(span),
                    );
                }
            }
            false
        }
        "goog.require" => {
            record_require_call(call, span, description, state, sink, true);
            false
        }
        "goog.forwardDeclare" => {
            record_require_call(call, span, description, state, sink, false);
            false
        }
        "goog.module.get" => {
            if !description.is_module {
                sink.report(
                    RewriterDiagnostic::error(
                        DiagnosticCode::InvalidGetCallScope,
                        "goog.module.get() is only valid inside a goog.module",
                    )
                    .with_label(span),
                );
            } else if call.single_string_argument().is_none() {
                sink.report(
                    RewriterDiagnostic::error(
                        DiagnosticCode::InvalidGetNamespace,
                        "goog.module.get() requires a single string literal argument",
                    )
                    .with_label(span),
                );
            }
            false
        }
        _ => false,
    }
}

/// Validates and enqueues a `goog.require`/`goog.forwardDeclare` call,
/// returning whether its namespace argument had a valid shape (so a
/// `forwardDeclare` caller can decide whether to register the alias).
fn record_require_call(
    call: &CallExpression,
    span: Span,
    description: &ScriptDescription,
    state: &mut GlobalRewriteState,
    sink: &mut dyn DiagnosticsSink,
    must_be_ordered: bool,
) -> bool {
    let code =
        if must_be_ordered { DiagnosticCode::InvalidRequireNamespace } else { DiagnosticCode::InvalidForwardDeclareNamespace };
    let Some(lit) = call.single_string_argument() else {
        sink.report(RewriterDiagnostic::error(code, "expected a single string literal namespace argument").with_label(span));
        return false;
    };
    let namespace = lit.value.clone();
    if description.is_module && !state.is_known_namespace(namespace.as_str()) {
        state.enqueue_unrecognized_require(namespace, must_be_ordered);
    }
    true
}

fn declarator_is_require_call(declarator: &VariableDeclarator) -> bool {
    let Some(Expression::Call(call)) = declarator.init.as_ref() else { return false };
    matches!(dotted_name_of(&call.callee).as_deref(), Some("goog.require" | "goog.forwardDeclare"))
}

/// Splits a multi-binding declaration that contains a `goog.require`/
/// `goog.forwardDeclare` declarator (`var a = goog.require('x'), b = 1;`)
/// into one single-binding declaration per declarator, in source order, so
/// `record_variable_declaration` can then recognize the require in its own
/// declaration the way it already does for a single-binding one (§4.2).
fn split_require_declaration(decl: &VariableDeclaration) -> Vec<Statement> {
    decl.declarations
        .iter()
        .map(|declarator| Statement::VariableDeclaration(VariableDeclaration::new(decl.kind, vec![declarator.clone()], declarator.span)))
        .collect()
}

/// Handles `var X = goog.require('ns')` / `let X = goog.forwardDeclare('ns')`
/// declaration initializers, a single-declarator declaration by this point —
/// a multi-binding declaration was already split apart in `record_statements`.
fn record_variable_declaration(
    decl: &mut VariableDeclaration,
    description: &mut ScriptDescription,
    state: &mut GlobalRewriteState,
    sink: &mut dyn DiagnosticsSink,
) -> bool {
    let span = decl.span;
    let [declarator] = decl.declarations.as_mut_slice() else { return false };
    let Some(init) = &declarator.init else { return false };
    let Expression::Call(call) = init else { return false };
    let Some(name) = dotted_name_of(&call.callee) else { return false };
    match name.as_str() {
        "goog.require" => {
            record_require_call(call, span, description, state, sink, true);
            false
        }
        "goog.forwardDeclare" => {
            let valid = record_require_call(call, span, description, state, sink, false);
            if valid {
                if let (Some(id), Some(lit)) = (declarator.id.as_identifier(), call.single_string_argument()) {
                    description.forward_declared.insert(id.name.clone(), lit.value.clone());
                }
            }
            false
        }
        _ => false,
    }
}

fn is_exports_member(member: &MemberExpression) -> bool {
    matches!(&member.object, Expression::Identifier(id) if id.name.as_str() == "exports")
}

fn record_assignment(
    assign: &mut AssignmentExpression,
    span: Span,
    description: &mut ScriptDescription,
    sink: &mut dyn DiagnosticsSink,
) -> bool {
    match &assign.target {
        Expression::Identifier(id) if id.name.as_str() == "exports" => record_default_export(&assign.value, description),
        Expression::Member(member) if is_exports_member(member) => {
            let key = member.property.clone();
            record_named_export_property(key, &assign.value, description)
        }
        Expression::Identifier(id) => {
            let local_name = id.name.clone();
            record_forward_declare_alias_fill(&local_name, &assign.value, span, description, sink)
        }
        _ => false,
    }
}

/// `X = goog.module.get('ns')` filling in an alias previously declared by
/// `goog.forwardDeclare('ns')` (§4.2: `INVALID_GET_ALIAS` on mismatch; valid
/// fills are removed since the alias resolves through the earlier
/// `forwardDeclare` instead).
fn record_forward_declare_alias_fill(
    local_name: &Atom,
    value: &Expression,
    span: Span,
    description: &ScriptDescription,
    sink: &mut dyn DiagnosticsSink,
) -> bool {
    let Expression::Call(call) = value else { return false };
    let Some(name) = dotted_name_of(&call.callee) else { return false };
    if name != "goog.module.get" {
        return false;
    }
    let Some(lit) = call.single_string_argument() else {
        sink.report(
            RewriterDiagnostic::error(DiagnosticCode::InvalidGetNamespace, "goog.module.get() requires a single string literal argument")
                .with_label(span),
        );
        return false;
    };
    let namespace = lit.value.clone();
    match description.forward_declared.get(local_name) {
        Some(declared_ns) if *declared_ns == namespace => true,
        _ => {
            sink.report(
                RewriterDiagnostic::error(
                    DiagnosticCode::InvalidGetAlias,
                    format!("'{local_name}' was not forward-declared for '{namespace}'"),
                )
                .with_label(span),
            );
            false
        }
    }
}

fn record_named_exports_object(obj: &ObjectExpression, description: &mut ScriptDescription) -> bool {
    let mut all_inlinable = true;
    let mut pending = Vec::new();
    for prop in &obj.properties {
        description.named_exports.insert(prop.key.clone());
        let Expression::Identifier(value_id) = &prop.value else {
            all_inlinable = false;
            continue;
        };
        let local_name = value_id.name.clone();
        if !description.is_top_level_name(local_name.as_str()) {
            all_inlinable = false;
            continue;
        }
        let decl_kind = description.top_level_kinds.get(&local_name).copied();
        let already_inlined = description.exports_to_inline.contains_key(&local_name);
        let export = ExportDefinition::named(prop.key.clone(), prop.value.clone());
        if export.is_inlinable(decl_kind, already_inlined) {
            pending.push((local_name, export));
        } else {
            all_inlinable = false;
        }
    }
    if all_inlinable && !description.declare_legacy_namespace {
        for (local_name, export) in pending {
            description.queue_export_inline(local_name, export);
        }
        true
    } else {
        description.will_create_exports_object = true;
        false
    }
}

fn record_default_export(rhs: &Expression, description: &mut ScriptDescription) -> bool {
    if let Some(obj) = rhs.as_object() {
        if obj.is_named_exports_object() {
            return record_named_exports_object(obj, description);
        }
    }
    description.default_export_rhs = Some(rhs.clone());
    if let Some(id) = rhs.as_identifier() {
        let local_name = id.name.clone();
        if description.is_top_level_name(local_name.as_str()) {
            let decl_kind = description.top_level_kinds.get(&local_name).copied();
            let already_inlined = description.exports_to_inline.contains_key(&local_name);
            let export = ExportDefinition::default(rhs.clone());
            if export.is_inlinable(decl_kind, already_inlined) {
                description.default_export_local_name = Some(local_name.clone());
                description.queue_export_inline(local_name, export);
                return true;
            }
        }
    }
    description.will_create_exports_object = true;
    false
}

fn record_named_export_property(key: Atom, rhs: &Expression, description: &mut ScriptDescription) -> bool {
    description.named_exports.insert(key.clone());
    if description.default_export_rhs.is_some() {
        return false;
    }
    let Some(id) = rhs.as_identifier() else { return false };
    let local_name = id.name.clone();
    if !description.is_top_level_name(local_name.as_str()) {
        return false;
    }
    let decl_kind = description.top_level_kinds.get(&local_name).copied();
    let already_inlined = description.exports_to_inline.contains_key(&local_name);
    let export = ExportDefinition::named(key, rhs.clone());
    if export.is_inlinable(decl_kind, already_inlined) {
        description.queue_export_inline(local_name, export);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::change_tracker::NoopChangeTracker;
    use rw_ast::{BindingPattern, ExpressionStatement, Identifier, NumberLiteral, StringLiteral, VariableDeclarator};
    use rw_diagnostics::CollectingSink;

    fn module_call(namespace: &str, span: Span) -> Statement {
        let callee = rw_ast::qualified_name_from_dotted("goog.module", span);
        let call = Expression::Call(Box::new(CallExpression::new(
            callee,
            vec![Expression::StringLiteral(StringLiteral::new(namespace, span))],
            span,
        )));
        Statement::Expression(ExpressionStatement::new(call, span))
    }

    fn require_call(namespace: &str, span: Span) -> Statement {
        let callee = rw_ast::qualified_name_from_dotted("goog.require", span);
        let call = Expression::Call(Box::new(CallExpression::new(
            callee,
            vec![Expression::StringLiteral(StringLiteral::new(namespace, span))],
            span,
        )));
        Statement::Expression(ExpressionStatement::new(call, span))
    }

    fn const_decl(name: &str, span: Span) -> Statement {
        Statement::VariableDeclaration(VariableDeclaration::single(
            VarKind::Const,
            Identifier::new(name, span),
            Some(Expression::NumberLiteral(NumberLiteral { span, value: 1.0 })),
            span,
        ))
    }

    fn exports_property_assign(key: &str, value_name: &str, span: Span) -> Statement {
        let target =
            Expression::Member(Box::new(MemberExpression::new(Expression::Identifier(Identifier::new("exports", span)), key, span)));
        let value = Expression::Identifier(Identifier::new(value_name, span));
        let assign = Expression::Assignment(Box::new(AssignmentExpression::new(target, value, span)));
        Statement::Expression(ExpressionStatement::new(assign, span))
    }

    #[test]
    fn module_with_fully_inlinable_named_export_is_registered() {
        let span = Span::synthetic();
        let mut program = Program {
            scripts: vec![ScriptUnit::new(
                vec![module_call("a.b", span), const_decl("X", span), exports_property_assign("X", "X", span)],
                span,
            )],
        };
        let mut state = GlobalRewriteState::new();
        let options = RewriterOptions::new();
        let mut sink = CollectingSink::new();
        let mut tracker = NoopChangeTracker;
        let descriptions = record_program(&mut program, &mut state, &options, &mut sink, &mut tracker);

        assert!(sink.diagnostics().is_empty());
        assert!(state.is_module_namespace("a.b"));
        assert_eq!(descriptions.len(), 1);
        assert!(descriptions[0].exports_to_inline.contains_key("X"));
        assert_eq!(program.scripts[0].statements.len(), 2);
        assert!(program.scripts[0].directives.iter().any(|d| d.as_str() == "use strict"));
    }

    #[test]
    fn duplicate_module_namespace_is_reported() {
        let span = Span::synthetic();
        let mut program = Program {
            scripts: vec![
                ScriptUnit::new(vec![module_call("dup.ns", span)], span),
                ScriptUnit::new(vec![module_call("dup.ns", span)], span),
            ],
        };
        let mut state = GlobalRewriteState::new();
        let options = RewriterOptions::new();
        let mut sink = CollectingSink::new();
        let mut tracker = NoopChangeTracker;
        record_program(&mut program, &mut state, &options, &mut sink, &mut tracker);

        assert_eq!(sink.diagnostics().len(), 1);
        assert_eq!(sink.diagnostics()[0].code(), DiagnosticCode::DuplicateModule);
    }

    #[test]
    fn unknown_require_is_enqueued() {
        let span = Span::synthetic();
        let mut program = Program {
            scripts: vec![ScriptUnit::new(vec![module_call("has.require", span), require_call("nope.ns", span)], span)],
        };
        let mut state = GlobalRewriteState::new();
        let options = RewriterOptions::new();
        let mut sink = CollectingSink::new();
        let mut tracker = NoopChangeTracker;
        record_program(&mut program, &mut state, &options, &mut sink, &mut tracker);

        let pending = state.drain_unrecognized_requires();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].namespace.as_str(), "nope.ns");
        assert!(pending[0].must_be_ordered);
    }

    #[test]
    fn redundant_use_strict_is_flagged_when_enabled() {
        let span = Span::synthetic();
        let mut script = ScriptUnit::new(vec![module_call("a.strict", span)], span);
        script.directives.push(Atom::new("use strict"));
        let mut program = Program { scripts: vec![script] };
        let mut state = GlobalRewriteState::new();
        let options = RewriterOptions::new().with_useless_use_strict_reporting(true);
        let mut sink = CollectingSink::new();
        let mut tracker = NoopChangeTracker;
        record_program(&mut program, &mut state, &options, &mut sink, &mut tracker);

        assert_eq!(sink.diagnostics().len(), 1);
        assert_eq!(sink.diagnostics()[0].code(), DiagnosticCode::UselessUseStrictDirective);
    }

    #[test]
    fn requiring_an_already_known_namespace_is_not_enqueued() {
        let span = Span::synthetic();
        let mut program = Program {
            scripts: vec![
                ScriptUnit::new(vec![module_call("known.ns", span)], span),
                ScriptUnit::new(vec![module_call("consumer", span), require_call("known.ns", span)], span),
            ],
        };
        let mut state = GlobalRewriteState::new();
        let options = RewriterOptions::new();
        let mut sink = CollectingSink::new();
        let mut tracker = NoopChangeTracker;
        record_program(&mut program, &mut state, &options, &mut sink, &mut tracker);

        assert!(state.drain_unrecognized_requires().is_empty());
    }

    #[test]
    fn forward_declare_alias_fill_must_match_namespace() {
        let span = Span::synthetic();
        let forward_call = Expression::Call(Box::new(CallExpression::new(
            rw_ast::qualified_name_from_dotted("goog.forwardDeclare", span),
            vec![Expression::StringLiteral(StringLiteral::new("a.C", span))],
            span,
        )));
        let let_decl = Statement::VariableDeclaration(VariableDeclaration::new(
            VarKind::Let,
            vec![VariableDeclarator { span, id: BindingPattern::Identifier(Identifier::new("C", span)), init: Some(forward_call) }],
            span,
        ));
        let wrong_get = Expression::Call(Box::new(CallExpression::new(
            rw_ast::qualified_name_from_dotted("goog.module.get", span),
            vec![Expression::StringLiteral(StringLiteral::new("other.ns", span))],
            span,
        )));
        let fill = Statement::Expression(ExpressionStatement::new(
            Expression::Assignment(Box::new(AssignmentExpression::new(Expression::Identifier(Identifier::new("C", span)), wrong_get, span))),
            span,
        ));
        let mut program = Program { scripts: vec![ScriptUnit::new(vec![module_call("m", span), let_decl, fill], span)] };
        let mut state = GlobalRewriteState::new();
        let options = RewriterOptions::new();
        let mut sink = CollectingSink::new();
        let mut tracker = NoopChangeTracker;
        record_program(&mut program, &mut state, &options, &mut sink, &mut tracker);

        assert_eq!(sink.diagnostics().len(), 1);
        assert_eq!(sink.diagnostics()[0].code(), DiagnosticCode::InvalidGetAlias);
    }
}
