//! Unrecognized-require reporter (§4.4): runs once Recorder has processed the
//! whole compilation (or a single hot-swap script) and the global namespace
//! registry is as complete as it will get.

use rw_ast::{dotted_name_of, Expression, Program, Statement};
use rw_diagnostics::{DiagnosticCode, DiagnosticsSink, RewriterDiagnostic};
use rw_semantic::GlobalRewriteState;

/// Drains the unrecognized-require queue, reporting each entry as either
/// `MISSING_MODULE_OR_PROVIDE` (namespace never declared) or
/// `LATE_PROVIDE_ERROR` (declared, but only after the ordered `require` that
/// needed it). Also strips the corresponding `goog.require`/`goog.forwardDeclare`
/// statements from the AST for `MISSING_MODULE_OR_PROVIDE` so later passes
/// don't cascade the same complaint.
pub fn report_unrecognized_requires(program: &mut Program, state: &mut GlobalRewriteState, sink: &mut dyn DiagnosticsSink) {
    let pending = state.drain_unrecognized_requires();
    if pending.is_empty() {
        return;
    }

    let mut missing = rustc_hash::FxHashSet::default();
    for entry in &pending {
        if state.is_known_namespace(entry.namespace.as_str()) {
            sink.report(RewriterDiagnostic::error(
                DiagnosticCode::LateProvideError,
                format!("'{}' is provided later in the compilation than this require", entry.namespace),
            ));
        } else {
            sink.report(RewriterDiagnostic::error(
                DiagnosticCode::MissingModuleOrProvide,
                format!("could not find a module or provide for '{}'", entry.namespace),
            ));
            missing.insert(entry.namespace.clone());
        }
    }
    if !missing.is_empty() {
        for script in &mut program.scripts {
            remove_requires_for(&mut script.statements, &missing);
        }
    }
}

fn remove_requires_for(statements: &mut Vec<Statement>, missing: &rustc_hash::FxHashSet<rw_span::Atom>) {
    let mut index = 0;
    while index < statements.len() {
        if requires_missing_namespace(&statements[index], missing) {
            statements.remove(index);
            continue;
        }
        match &mut statements[index] {
            Statement::ModuleBody(module_body) => remove_requires_for(&mut module_body.statements, missing),
            Statement::FunctionDeclaration(func) => remove_requires_for(&mut func.body.statements, missing),
            Statement::Block(block) => remove_requires_for(&mut block.statements, missing),
            _ => {}
        }
        index += 1;
    }
}

fn requires_missing_namespace(statement: &Statement, missing: &rustc_hash::FxHashSet<rw_span::Atom>) -> bool {
    let call = match statement {
        Statement::Expression(expr) => expr.expression.as_call(),
        Statement::VariableDeclaration(decl) => match decl.declarations.as_slice() {
            [single] => single.init.as_ref().and_then(Expression::as_call),
            _ => None,
        },
        _ => None,
    };
    let Some(call) = call else { return false };
    let Some(name) = dotted_name_of(&call.callee) else { return false };
    if name != "goog.require" && name != "goog.forwardDeclare" {
        return false;
    }
    call.single_string_argument().is_some_and(|lit| missing.contains(lit.value.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rw_ast::{CallExpression, ExpressionStatement, ScriptUnit, StringLiteral};
    use rw_diagnostics::CollectingSink;
    use rw_span::{Atom, Span};

    fn require_stmt(namespace: &str, span: Span) -> Statement {
        let call = Expression::Call(Box::new(CallExpression::new(
            rw_ast::qualified_name_from_dotted("goog.require", span),
            vec![Expression::StringLiteral(StringLiteral::new(namespace, span))],
            span,
        )));
        Statement::Expression(ExpressionStatement::new(call, span))
    }

    #[test]
    fn missing_namespace_is_reported_and_removed() {
        let span = Span::synthetic();
        let mut program = Program { scripts: vec![ScriptUnit::new(vec![require_stmt("nope.ns", span)], span)] };
        let mut state = GlobalRewriteState::new();
        state.enqueue_unrecognized_require(Atom::new("nope.ns"), true);
        let mut sink = CollectingSink::new();

        report_unrecognized_requires(&mut program, &mut state, &mut sink);

        assert_eq!(sink.diagnostics().len(), 1);
        assert_eq!(sink.diagnostics()[0].code(), DiagnosticCode::MissingModuleOrProvide);
        assert!(program.scripts[0].statements.is_empty());
    }

    #[test]
    fn late_provide_is_reported_without_removing_the_statement() {
        let span = Span::synthetic();
        let mut program = Program { scripts: vec![ScriptUnit::new(vec![require_stmt("late.ns", span)], span)] };
        let mut state = GlobalRewriteState::new();
        state.register_legacy_namespace(&Atom::new("late.ns"), rw_semantic::RootId::next()).unwrap();
        state.enqueue_unrecognized_require(Atom::new("late.ns"), true);
        let mut sink = CollectingSink::new();

        report_unrecognized_requires(&mut program, &mut state, &mut sink);

        assert_eq!(sink.diagnostics()[0].code(), DiagnosticCode::LateProvideError);
        assert_eq!(program.scripts[0].statements.len(), 1);
    }

    #[test]
    fn empty_queue_reports_nothing() {
        let mut program = Program::default();
        let mut state = GlobalRewriteState::new();
        let mut sink = CollectingSink::new();
        report_unrecognized_requires(&mut program, &mut state, &mut sink);
        assert!(sink.diagnostics().is_empty());
    }
}
