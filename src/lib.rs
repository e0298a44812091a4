//! An embeddable predicate engine.
//!
//! Rules bind a field name, a named [`Operator`] and a comparison [`Value`].
//! A [`RuleGroup`] combines rules with AND or OR and evaluates them against
//! a [`Record`], producing a verdict or a per-rule report. The
//! [`Engine`] facade wraps this behind a shared [`OperatorRegistry`].
//!
//! ```
//! use rulekit::{Engine, Record};
//!
//! let engine = Engine::new();
//! let rules = vec![
//!     engine.rule("age", ">", 18_i64).unwrap(),
//!     engine.rule("sex", "==", "1").unwrap(),
//! ];
//! let record = Record::new().set("age", 20_i64).set("sex", "1");
//!
//! assert!(engine.evaluate(&rules, &record).unwrap());
//! ```

mod coerce;
mod engine;
mod error;
mod evaluate;
pub mod operators;
mod registry;
mod types;

pub use engine::{AsRule, Engine, EngineBuilder, EngineConfig};
pub use error::RuleError;
pub use operators::{FnOperator, Operator};
pub use registry::OperatorRegistry;
pub use types::{
    EvaluationReport, OperatorTypeError, RawRule, Record, Relation, RelationParsing, Rule,
    RuleEntry, RuleGroup, RuleOutcome, Value,
};
