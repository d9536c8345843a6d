use rw_ast::{dotted_name_of, Expression, ModuleBody, Program, Statement};

use crate::change_tracker::ChangeTracker;

/// Converts every top-level `goog.loadModule(function(exports){ …body…
/// return exports; })` statement into a synthetic module-body node (§4.1).
/// Only script-level expression statements are visited; this never descends
/// into function bodies, so a `loadModule` call nested inside another
/// function is left alone. Malformed shapes (wrong arity, missing terminal
/// `return`, mismatched parameter name) are left untouched with no
/// diagnostic — Recorder will reject whatever `goog.module` call, if any,
/// it then finds inside.
pub fn unwrap_load_modules(program: &mut Program, tracker: &mut dyn ChangeTracker) {
    for script in &mut program.scripts {
        for statement in &mut script.statements {
            if let Some(module_body) = try_unwrap(statement) {
                *statement = Statement::ModuleBody(module_body);
                tracker.on_structural_change("unwrapped goog.loadModule into a module body");
            }
        }
    }
}

fn try_unwrap(statement: &Statement) -> Option<ModuleBody> {
    let expr = statement.as_expression()?;
    let Expression::Call(call) = expr else { return None };
    let callee_name = dotted_name_of(&call.callee)?;
    if callee_name != "goog.loadModule" {
        return None;
    }
    let [Expression::Function(function)] = call.arguments.as_slice() else { return None };
    let [exports_param] = function.params.as_slice() else { return None };

    let mut statements = function.body.statements.clone();
    let Some(Statement::Return(terminal)) = statements.last() else { return None };
    match &terminal.argument {
        Some(Expression::Identifier(id)) if id.name == exports_param.name => {}
        _ => return None,
    }
    statements.pop();

    Some(ModuleBody::new(statements, function.body.span))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::change_tracker::NoopChangeTracker;
    use rw_ast::{
        CallExpression, ExpressionStatement, FunctionExpression, Identifier, ReturnStatement,
        ScriptUnit,
    };
    use rw_span::Span;

    fn load_module_call(body_statements: Vec<Statement>) -> Statement {
        let span = Span::synthetic();
        let exports_param = Identifier::new("exports", span);
        let mut statements = body_statements;
        statements.push(Statement::Return(ReturnStatement {
            span,
            argument: Some(Expression::Identifier(Identifier::new("exports", span))),
        }));
        let function = Expression::Function(Box::new(FunctionExpression {
            span,
            id: None,
            params: vec![exports_param],
            body: rw_ast::Block::new(statements, span),
        }));
        let callee = rw_ast::qualified_name_from_dotted("goog.loadModule", span);
        let call = Expression::Call(Box::new(CallExpression::new(callee, vec![function], span)));
        Statement::Expression(ExpressionStatement::new(call, span))
    }

    #[test]
    fn load_module_becomes_a_module_body() {
        let inner = Statement::Expression(ExpressionStatement::new(
            Expression::NumberLiteral(rw_ast::NumberLiteral { span: Span::synthetic(), value: 1.0 }),
            Span::synthetic(),
        ));
        let mut program = Program {
            scripts: vec![ScriptUnit::new(vec![load_module_call(vec![inner])], Span::synthetic())],
        };
        unwrap_load_modules(&mut program, &mut NoopChangeTracker);
        assert!(matches!(program.scripts[0].statements[0], Statement::ModuleBody(_)));
        let Statement::ModuleBody(body) = &program.scripts[0].statements[0] else { unreachable!() };
        assert_eq!(body.statements.len(), 1);
    }

    #[test]
    fn bare_script_statement_is_left_alone() {
        let mut program = Program {
            scripts: vec![ScriptUnit::new(
                vec![Statement::Expression(ExpressionStatement::new(
                    Expression::Identifier(Identifier::new("x", Span::synthetic())),
                    Span::synthetic(),
                ))],
                Span::synthetic(),
            )],
        };
        unwrap_load_modules(&mut program, &mut NoopChangeTracker);
        assert!(!matches!(program.scripts[0].statements[0], Statement::ModuleBody(_)));
    }
}
