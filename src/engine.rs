use std::sync::Arc;

use tracing::{instrument, warn};

use crate::operators::Operator;
use crate::{
    EvaluationReport, OperatorRegistry, Record, Relation, RelationParsing, Rule, RuleEntry,
    RuleError, RuleGroup, RuleOutcome, Value,
};

/// Items the [`Engine`] accepts in a rule list.
///
/// Resolved [`Rule`]s always qualify. A [`RuleEntry::Raw`] does not: the
/// engine refuses to guess how an unresolved definition should be resolved.
pub trait AsRule {
    /// Borrow the resolved rule, or explain why this item is not one.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when the item is not a resolved rule.
    fn as_rule(&self) -> Result<&Rule, String>;
}

impl AsRule for Rule {
    fn as_rule(&self) -> Result<&Rule, String> {
        Ok(self)
    }
}

impl AsRule for RuleEntry {
    fn as_rule(&self) -> Result<&Rule, String> {
        match self {
            RuleEntry::Rule(rule) => Ok(rule),
            RuleEntry::Raw(raw) => Err(format!(
                "unresolved definition for field '{}' (operator '{}')",
                raw.field, raw.operator
            )),
        }
    }
}

impl<T: AsRule + ?Sized> AsRule for &T {
    fn as_rule(&self) -> Result<&Rule, String> {
        (**self).as_rule()
    }
}

/// Engine-wide settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// How relation tokens passed to the engine are parsed.
    pub relation_parsing: RelationParsing,
    /// Relation used by [`Engine::evaluate()`].
    pub default_relation: Relation,
}

/// Facade over an [`OperatorRegistry`]: builds rules, validates rule lists
/// and evaluates them as a [`RuleGroup`].
///
/// Cloning an engine shares its registry.
///
/// # Example
///
/// ```
/// use rulekit::{Engine, Record, RuleOutcome};
///
/// let engine = Engine::new();
/// let rules = vec![
///     engine.rule("age", ">", 18_i64).unwrap(),
///     engine.rule("sex", "==", "1").unwrap(),
/// ];
/// let record = Record::new().set("age", 15_i64).set("sex", "1");
///
/// assert!(!engine.evaluate(&rules, &record).unwrap());
/// assert!(engine.evaluate_with_relation(&rules, &record, "OR").unwrap());
/// assert_eq!(
///     engine.evaluate_with_details(&rules, &record).unwrap(),
///     vec![RuleOutcome::new("age > 18", false), RuleOutcome::new("sex == 1", true)],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    registry: Arc<OperatorRegistry>,
    config: EngineConfig,
}

impl Engine {
    /// An engine with the built-in operators and the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// An engine sharing an existing registry.
    #[must_use]
    pub fn with_registry(registry: Arc<OperatorRegistry>, config: EngineConfig) -> Self {
        Self { registry, config }
    }

    #[must_use]
    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }

    /// A shared handle to the registry, for building rules elsewhere.
    #[must_use]
    pub fn shared_registry(&self) -> Arc<OperatorRegistry> {
        Arc::clone(&self.registry)
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build a rule against this engine's registry.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::UnknownOperator`] when `operator` is not registered.
    pub fn rule(
        &self,
        field: impl Into<String>,
        operator: &str,
        value: impl Into<Value>,
    ) -> Result<Rule, RuleError> {
        Rule::new(&self.registry, field, operator, value)
    }

    /// Evaluate `rules` with the configured default relation (AND unless changed).
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidRuleType`] if any item is not a resolved
    /// rule (nothing is evaluated in that case), or [`RuleError::Operator`]
    /// if an operator rejects its inputs.
    #[instrument(level = "debug", skip_all, fields(rules = rules.len()))]
    pub fn evaluate<R: AsRule>(&self, rules: &[R], record: &Record) -> Result<bool, RuleError> {
        let rules = validate(rules)?;
        RuleGroup::new(rules, self.config.default_relation).evaluate(record)
    }

    /// Evaluate `rules` combined by the relation named in `relation`.
    ///
    /// # Errors
    ///
    /// As [`evaluate()`](Self::evaluate), plus [`RuleError::InvalidRelation`]
    /// when strict relation parsing rejects the token.
    #[instrument(level = "debug", skip_all, fields(rules = rules.len(), relation = %relation))]
    pub fn evaluate_with_relation<R: AsRule>(
        &self,
        rules: &[R],
        record: &Record,
        relation: &str,
    ) -> Result<bool, RuleError> {
        let rules = validate(rules)?;
        let relation = Relation::parse(relation, self.config.relation_parsing)?;
        RuleGroup::new(rules, relation).evaluate(record)
    }

    /// Per-rule outcomes in input order. No relation is involved.
    ///
    /// # Errors
    ///
    /// As [`evaluate()`](Self::evaluate).
    #[instrument(level = "debug", skip_all, fields(rules = rules.len()))]
    pub fn evaluate_with_details<R: AsRule>(
        &self,
        rules: &[R],
        record: &Record,
    ) -> Result<Vec<RuleOutcome>, RuleError> {
        let rules = validate(rules)?;
        RuleGroup::new(rules, self.config.default_relation).evaluate_with_details(record)
    }

    /// Combined verdict and per-rule outcomes from a single evaluation.
    ///
    /// # Errors
    ///
    /// As [`evaluate_with_relation()`](Self::evaluate_with_relation).
    #[instrument(level = "debug", skip_all, fields(rules = rules.len(), relation = %relation))]
    pub fn evaluate_report<R: AsRule>(
        &self,
        rules: &[R],
        record: &Record,
        relation: &str,
    ) -> Result<EvaluationReport, RuleError> {
        let rules = validate(rules)?;
        let relation = Relation::parse(relation, self.config.relation_parsing)?;
        RuleGroup::new(rules, relation).evaluate_detailed(record)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Check the whole list before anything is evaluated.
fn validate<R: AsRule>(rules: &[R]) -> Result<Vec<&Rule>, RuleError> {
    rules
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_rule().map_err(|reason| {
                warn!(index, %reason, "rejected rule list");
                RuleError::InvalidRuleType { index, reason }
            })
        })
        .collect()
}

/// Builder for [`Engine`].
///
/// ```
/// use rulekit::{Engine, RelationParsing, Value};
///
/// let engine = Engine::builder()
///     .register_fn("is_even", |field: &Value, _: &Value| {
///         Ok(matches!(field, Value::Int(i) if i % 2 == 0))
///     })
///     .relation_parsing(RelationParsing::Lenient)
///     .build();
/// assert!(engine.registry().contains("is_even"));
/// ```
#[derive(Debug, Default)]
pub struct EngineBuilder {
    registry: Option<OperatorRegistry>,
    config: EngineConfig,
}

impl EngineBuilder {
    /// Start from `registry` instead of the built-ins.
    #[must_use]
    pub fn registry(mut self, registry: OperatorRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Register an operator, replacing any operator of the same name.
    #[must_use]
    pub fn register<O: Operator + 'static>(mut self, op: O) -> Self {
        self.registry.get_or_insert_with(OperatorRegistry::new).register(op);
        self
    }

    /// Register a closure as an operator named `name`.
    #[must_use]
    pub fn register_fn<F>(mut self, name: &str, f: F) -> Self
    where
        F: Fn(&Value, &Value) -> Result<bool, crate::OperatorTypeError> + Send + Sync + 'static,
    {
        self.registry
            .get_or_insert_with(OperatorRegistry::new)
            .register_fn(name, f);
        self
    }

    #[must_use]
    pub fn relation_parsing(mut self, parsing: RelationParsing) -> Self {
        self.config.relation_parsing = parsing;
        self
    }

    #[must_use]
    pub fn default_relation(mut self, relation: Relation) -> Self {
        self.config.default_relation = relation;
        self
    }

    #[must_use]
    pub fn build(self) -> Engine {
        Engine {
            registry: Arc::new(self.registry.unwrap_or_default()),
            config: self.config,
        }
    }
}
