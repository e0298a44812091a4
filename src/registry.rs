use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::operators::{self, FnOperator, Operator};
use crate::{OperatorTypeError, RuleError, Value};

/// Catalog mapping operator names to [`Operator`]s.
///
/// Built once during setup, then shared (typically behind `Arc`) with
/// whatever constructs [`Rule`](crate::Rule)s. Registration takes `&mut self`,
/// so it cannot race with lookups on a shared registry.
///
/// # Example
///
/// ```
/// use rulekit::{FnOperator, OperatorRegistry, Value};
///
/// let mut registry = OperatorRegistry::new();
/// registry.register_fn("is_even", |field: &Value, _rule: &Value| {
///     Ok(matches!(field, Value::Int(i) if i % 2 == 0))
/// });
/// assert!(registry.contains("is_even"));
/// assert!(registry.get("~=").is_err());
/// ```
#[derive(Clone)]
pub struct OperatorRegistry {
    operators: HashMap<String, Arc<dyn Operator>>,
}

impl OperatorRegistry {
    /// A registry seeded with the built-in operators.
    #[must_use]
    pub fn new() -> Self {
        Self::with_builtins()
    }

    /// A registry seeded with the built-in operators.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        for op in operators::builtins() {
            registry.operators.insert(op.name().to_owned(), op);
        }
        registry
    }

    /// A registry with no operators at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            operators: HashMap::new(),
        }
    }

    /// Store `op` under its name, replacing any operator of the same name.
    ///
    /// Returns the replaced operator. Rules already holding the replaced
    /// operator keep using it.
    pub fn register<O: Operator + 'static>(&mut self, op: O) -> Option<Arc<dyn Operator>> {
        self.register_shared(Arc::new(op))
    }

    /// Like [`register`](Self::register), for an operator that is already shared.
    pub fn register_shared(&mut self, op: Arc<dyn Operator>) -> Option<Arc<dyn Operator>> {
        let name = op.name().to_owned();
        let previous = self.operators.insert(name.clone(), op);
        debug!(operator = %name, replaced = previous.is_some(), "operator registered");
        previous
    }

    /// Register a closure as an operator named `name`.
    pub fn register_fn<F>(&mut self, name: &str, f: F) -> Option<Arc<dyn Operator>>
    where
        F: Fn(&Value, &Value) -> Result<bool, OperatorTypeError> + Send + Sync + 'static,
    {
        self.register(FnOperator::new(name, f))
    }

    /// Look up an operator by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::UnknownOperator`] when `name` is not registered.
    pub fn get(&self, name: &str) -> Result<Arc<dyn Operator>, RuleError> {
        self.operators
            .get(name)
            .cloned()
            .ok_or_else(|| RuleError::UnknownOperator {
                name: name.to_owned(),
            })
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.operators.contains_key(name)
    }

    /// Registered operator names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.operators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for OperatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorRegistry")
            .field("operators", &self.names())
            .finish()
    }
}
