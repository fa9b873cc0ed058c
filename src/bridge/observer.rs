//! Hook seam between an authorization subsystem and its observers.

use std::sync::Arc;

use super::AuthorizationTraceBridge;
use crate::types::{Argument, Entity};

/// Receives the before/after events an authorization subsystem emits around
/// every gate check.
///
/// The subsystem calls [`before_check`](GateObserver::before_check) before
/// evaluating a check and [`after_check`](GateObserver::after_check) with the
/// outcome afterwards, passing arguments that format identically both times.
/// Observers must hand the result back unchanged.
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use gate_trace::{AuthorizationTraceBridge, EntityRef, GateObserver};
/// use gate_trace::sink::NoopSink;
///
/// let observer: Arc<dyn GateObserver> = Arc::new(AuthorizationTraceBridge::new(NoopSink));
/// let user = EntityRef::new("User", 1);
///
/// observer.before_check(&user, "view-reports", &[]);
/// assert!(observer.after_check(&user, "view-reports", true, &[]));
/// ```
pub trait GateObserver: Send + Sync {
    /// Called before the check is evaluated.
    fn before_check(&self, actor: &dyn Entity, ability: &str, arguments: &[Argument<'_>]);

    /// Called after the check is evaluated. Returns `result` unchanged.
    fn after_check(
        &self,
        actor: &dyn Entity,
        ability: &str,
        result: bool,
        arguments: &[Argument<'_>],
    ) -> bool;
}

impl GateObserver for AuthorizationTraceBridge {
    fn before_check(&self, actor: &dyn Entity, ability: &str, arguments: &[Argument<'_>]) {
        self.on_check_started(actor, ability, arguments);
    }

    fn after_check(
        &self,
        actor: &dyn Entity,
        ability: &str,
        result: bool,
        arguments: &[Argument<'_>],
    ) -> bool {
        self.on_check_finished(actor, ability, result, arguments)
    }
}

impl<O: GateObserver + ?Sized> GateObserver for Arc<O> {
    fn before_check(&self, actor: &dyn Entity, ability: &str, arguments: &[Argument<'_>]) {
        (**self).before_check(actor, ability, arguments);
    }

    fn after_check(
        &self,
        actor: &dyn Entity,
        ability: &str,
        result: bool,
        arguments: &[Argument<'_>],
    ) -> bool {
        (**self).after_check(actor, ability, result, arguments)
    }
}
