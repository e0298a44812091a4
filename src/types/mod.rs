mod error;
mod evaluation_report;
mod outcome;
mod record;
mod relation;
mod rule;
mod rule_group;
mod value;

pub use error::OperatorTypeError;
pub use evaluation_report::EvaluationReport;
pub use outcome::RuleOutcome;
pub use record::Record;
pub use relation::{Relation, RelationParsing};
pub use rule::{RawRule, Rule, RuleEntry};
pub use rule_group::RuleGroup;
pub use value::Value;
