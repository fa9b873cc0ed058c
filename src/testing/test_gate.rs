//! TestGate: a minimal in-memory gate for tests.

use std::{collections::HashMap, fmt, sync::Arc};

use crate::{
    AccessDenied,
    bridge::GateObserver,
    types::{Argument, ArgumentDescriptor, Entity},
};

type Ability = Box<dyn Fn(&dyn Entity, &[Argument<'_>]) -> bool + Send + Sync>;

/// An in-memory authorization gate that fires [`GateObserver`] hooks around
/// every check.
///
/// Abilities are closures over the actor and the arguments. Checking an
/// ability that was never defined denies.
///
/// ## Example
///
/// ```rust
/// use gate_trace::{Argument, Entity, EntityRef, Value};
/// use gate_trace::testing::TestGate;
///
/// let gate = TestGate::new().define("edit-post", |actor, args| {
///     args.first().map(Argument::format) == Some(Value::from("Post:42"))
///         && actor.entity_ref() == "User:7"
/// });
///
/// let user = EntityRef::new("User", 7);
/// let post = EntityRef::new("Post", 42);
///
/// assert!(gate.allows(&user, "edit-post", &[Argument::entity(&post)]));
/// assert!(gate.denies(&user, "delete-post", &[Argument::entity(&post)]));
///
/// let denied = gate.authorize(&EntityRef::new("User", 8), "edit-post", &[Argument::entity(&post)]);
/// assert_eq!(denied.unwrap_err().actor(), "User:8");
/// ```
#[derive(Default)]
pub struct TestGate {
    abilities: HashMap<String, Ability>,
    observers: Vec<Arc<dyn GateObserver>>,
}

impl TestGate {
    /// Creates a gate with no abilities and no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines (or redefines) an ability.
    #[must_use]
    pub fn define<F>(mut self, ability: impl Into<String>, rule: F) -> Self
    where
        F: Fn(&dyn Entity, &[Argument<'_>]) -> bool + Send + Sync + 'static,
    {
        self.abilities.insert(ability.into(), Box::new(rule));
        self
    }

    /// Registers an observer. Observers run in registration order.
    #[must_use]
    pub fn observe(mut self, observer: Arc<dyn GateObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Returns `true` if `ability` has been defined.
    pub fn has(&self, ability: &str) -> bool {
        self.abilities.contains_key(ability)
    }

    /// Runs a check, firing every observer before and after evaluation.
    ///
    /// The result is threaded through each observer's `after_check` in turn.
    pub fn check(&self, actor: &dyn Entity, ability: &str, arguments: &[Argument<'_>]) -> bool {
        for observer in &self.observers {
            observer.before_check(actor, ability, arguments);
        }

        let mut result = match self.abilities.get(ability) {
            Some(rule) => rule(actor, arguments),
            None => false,
        };

        for observer in &self.observers {
            result = observer.after_check(actor, ability, result, arguments);
        }

        result
    }

    /// Returns `true` if the actor may perform the ability.
    pub fn allows(&self, actor: &dyn Entity, ability: &str, arguments: &[Argument<'_>]) -> bool {
        self.check(actor, ability, arguments)
    }

    /// Returns `true` if the actor may not perform the ability.
    pub fn denies(&self, actor: &dyn Entity, ability: &str, arguments: &[Argument<'_>]) -> bool {
        !self.check(actor, ability, arguments)
    }

    /// Runs a check and converts a denial into [`AccessDenied`].
    pub fn authorize(
        &self,
        actor: &dyn Entity,
        ability: &str,
        arguments: &[Argument<'_>],
    ) -> Result<(), AccessDenied> {
        if self.check(actor, ability, arguments) {
            return Ok(());
        }

        let mut denied = AccessDenied::new(
            actor.entity_ref(),
            ability.to_owned(),
            ArgumentDescriptor::format(arguments).to_strings(),
        );
        if !self.has(ability) {
            denied = denied.with_reason("ability is not defined");
        }
        Err(denied)
    }
}

impl fmt::Debug for TestGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut abilities: Vec<_> = self.abilities.keys().collect();
        abilities.sort();
        f.debug_struct("TestGate")
            .field("abilities", &abilities)
            .field("observers", &self.observers.len())
            .finish()
    }
}
