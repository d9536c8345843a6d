/// The compiler's change tracker (§5: "reports every structural AST change
/// to the compiler's change tracker so subsequent passes can discover
/// invalidated scopes"). This workspace's own convention for a side channel
/// with no real downstream consumer in scope is a trait plus a no-op default
/// and a `log`-backed implementation for local debugging.
pub trait ChangeTracker {
    fn on_structural_change(&mut self, description: &str);
}

/// Default tracker: discards every notification.
#[derive(Debug, Default)]
pub struct NoopChangeTracker;

impl ChangeTracker for NoopChangeTracker {
    fn on_structural_change(&mut self, _description: &str) {}
}

/// Routes every notification through `log::debug!`, for local debugging of a
/// rewrite session without a real compiler attached.
#[derive(Debug, Default)]
pub struct LoggingChangeTracker;

impl ChangeTracker for LoggingChangeTracker {
    fn on_structural_change(&mut self, description: &str) {
        log::debug!(target: "rw_rewriter::change", "{description}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_tracker_accepts_any_change() {
        let mut tracker = NoopChangeTracker;
        tracker.on_structural_change("removed goog.module statement");
    }
}
