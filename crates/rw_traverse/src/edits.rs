use rw_ast::Statement;

/// One queued change to a statement list, keyed by the index the statement
/// held when the traversal visited it.
enum Edit {
    InsertBefore(usize, Statement),
    InsertAfter(usize, Statement),
    Replace(usize, Statement),
    Remove(usize),
}

/// Queued edits to a single statement list (a script body, a module body, a
/// block). Recorder and Updater both rewrite statement lists while
/// traversing them; queuing edits and applying them afterwards means the
/// traversal index never has to account for insertions or removals shifting
/// later elements, the same way this codebase's transform passes defer
/// `Vec` surgery on nodes they are still iterating over.
#[derive(Default)]
pub struct StatementEdits {
    edits: Vec<Edit>,
}

impl StatementEdits {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_before(&mut self, index: usize, statement: Statement) {
        self.edits.push(Edit::InsertBefore(index, statement));
    }

    pub fn insert_after(&mut self, index: usize, statement: Statement) {
        self.edits.push(Edit::InsertAfter(index, statement));
    }

    pub fn replace(&mut self, index: usize, statement: Statement) {
        self.edits.push(Edit::Replace(index, statement));
    }

    pub fn remove(&mut self, index: usize) {
        self.edits.push(Edit::Remove(index));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Applies every queued edit to `statements`, in original-index order
    /// with insertions ordered before/after a removal or replacement at the
    /// same index.
    pub fn apply(self, statements: &mut Vec<Statement>) {
        if self.edits.is_empty() {
            return;
        }
        let original = std::mem::take(statements);
        let mut removed = vec![false; original.len()];
        let mut replacement = vec![None; original.len()];
        let mut before: Vec<Vec<Statement>> = (0..original.len()).map(|_| Vec::new()).collect();
        let mut after: Vec<Vec<Statement>> = (0..original.len()).map(|_| Vec::new()).collect();

        for edit in self.edits {
            match edit {
                Edit::InsertBefore(idx, stmt) => before[idx].push(stmt),
                Edit::InsertAfter(idx, stmt) => after[idx].push(stmt),
                Edit::Replace(idx, stmt) => replacement[idx] = Some(stmt),
                Edit::Remove(idx) => removed[idx] = true,
            }
        }

        let mut rebuilt = Vec::with_capacity(original.len());
        for (idx, statement) in original.into_iter().enumerate() {
            rebuilt.append(&mut before[idx]);
            if removed[idx] {
                // dropped
            } else if let Some(replacement) = replacement[idx].take() {
                rebuilt.push(replacement);
            } else {
                rebuilt.push(statement);
            }
            rebuilt.append(&mut after[idx]);
        }
        *statements = rebuilt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rw_ast::{ExpressionStatement, Identifier};
    use rw_span::Span;

    fn stmt(name: &str) -> Statement {
        let span = Span::synthetic();
        Statement::Expression(ExpressionStatement::new(
            rw_ast::Expression::Identifier(Identifier::new(name, span)),
            span,
        ))
    }

    fn name_of(statement: &Statement) -> &str {
        statement.as_expression().and_then(rw_ast::Expression::as_identifier).unwrap().name.as_str()
    }

    #[test]
    fn insert_before_and_after_preserve_order() {
        let mut statements = vec![stmt("a"), stmt("b")];
        let mut edits = StatementEdits::new();
        edits.insert_before(0, stmt("pre"));
        edits.insert_after(1, stmt("post"));
        edits.apply(&mut statements);
        let names: Vec<_> = statements.iter().map(name_of).collect();
        assert_eq!(names, ["pre", "a", "b", "post"]);
    }

    #[test]
    fn remove_drops_statement() {
        let mut statements = vec![stmt("a"), stmt("b")];
        let mut edits = StatementEdits::new();
        edits.remove(0);
        edits.apply(&mut statements);
        let names: Vec<_> = statements.iter().map(name_of).collect();
        assert_eq!(names, ["b"]);
    }

    #[test]
    fn replace_swaps_statement_in_place() {
        let mut statements = vec![stmt("a"), stmt("b")];
        let mut edits = StatementEdits::new();
        edits.replace(0, stmt("a2"));
        edits.apply(&mut statements);
        let names: Vec<_> = statements.iter().map(name_of).collect();
        assert_eq!(names, ["a2", "b"]);
    }

    #[test]
    fn no_edits_leaves_statements_untouched() {
        let mut statements = vec![stmt("a")];
        let edits = StatementEdits::new();
        edits.apply(&mut statements);
        assert_eq!(statements.len(), 1);
    }
}
