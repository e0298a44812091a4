
use proptest::prelude::*;
use rulekit::{Engine, OperatorRegistry, Record, Relation, RuleGroup, Value};
use strategies::{arb_record, arb_rule, arb_rules, build_all};

// ---------------------------------------------------------------------------
// Invariant 1: Combination
//
// An AND group is true iff every rule is true on its own; an OR group is
// true iff at least one rule is.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn and_iff_all_rules_pass(gen in arb_rules(), record in arb_record()) {
        let registry = OperatorRegistry::new();
        let rules = build_all(&gen, &registry);
        let individual: Vec<bool> = rules.iter().map(|r| r.evaluate(&record).unwrap()).collect();

        let verdict = RuleGroup::new(&rules, Relation::And).evaluate(&record).unwrap();
        prop_assert_eq!(verdict, individual.iter().all(|&p| p));
    }

    #[test]
    fn or_iff_any_rule_passes(gen in arb_rules(), record in arb_record()) {
        let registry = OperatorRegistry::new();
        let rules = build_all(&gen, &registry);
        let individual: Vec<bool> = rules.iter().map(|r| r.evaluate(&record).unwrap()).collect();

        let verdict = RuleGroup::new(&rules, Relation::Or).evaluate(&record).unwrap();
        prop_assert_eq!(verdict, individual.iter().any(|&p| p));
    }
}

// ---------------------------------------------------------------------------
// Invariant 2: Details
//
// One outcome per rule, in input order, each equal to the rule's own
// evaluation, whatever relation the group carries.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn details_match_independent_evaluation(gen in arb_rules(), record in arb_record()) {
        let registry = OperatorRegistry::new();
        let rules = build_all(&gen, &registry);

        for relation in [Relation::And, Relation::Or] {
            let details = RuleGroup::new(&rules, relation)
                .evaluate_with_details(&record)
                .unwrap();
            prop_assert_eq!(details.len(), rules.len());
            for (rule, outcome) in rules.iter().zip(&details) {
                prop_assert_eq!(outcome.description(), rule.description());
                prop_assert_eq!(outcome.passed(), rule.evaluate(&record).unwrap());
            }
        }
    }

    #[test]
    fn report_agrees_with_both_modes(gen in arb_rules(), record in arb_record(), or in any::<bool>()) {
        let registry = OperatorRegistry::new();
        let rules = build_all(&gen, &registry);
        let relation = if or { Relation::Or } else { Relation::And };
        let group = RuleGroup::new(&rules, relation);

        let report = group.evaluate_detailed(&record).unwrap();
        let details = group.evaluate_with_details(&record).unwrap();
        prop_assert_eq!(report.verdict(), group.evaluate(&record).unwrap());
        prop_assert_eq!(report.outcomes(), details.as_slice());
    }
}

// ---------------------------------------------------------------------------
// Invariant 3: Missing fields deny
//
// A rule on a field absent from the record is false, even when its operator
// would accept anything.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn missing_field_is_false(gen in arb_rule(), record in arb_record()) {
        let mut registry = OperatorRegistry::new();
        registry.register_fn("always", |_: &Value, _: &Value| Ok(true));
        let rule = gen.build(&registry);
        let always = rulekit::Rule::new(&registry, gen.field, "always", Value::Null).unwrap();

        let mut record = record;
        record.remove(gen.field);
        prop_assert_eq!(rule.evaluate(&record), Ok(false));
        prop_assert_eq!(always.evaluate(&record), Ok(false));
    }

    #[test]
    fn empty_record_denies_every_rule(gen in arb_rules()) {
        let registry = OperatorRegistry::new();
        let rules = build_all(&gen, &registry);
        let record = Record::new();

        let details = RuleGroup::new(&rules, Relation::Or).evaluate_with_details(&record).unwrap();
        prop_assert!(details.iter().all(|o| !o.passed()));
        prop_assert_eq!(
            RuleGroup::new(&rules, Relation::And).evaluate(&record).unwrap(),
            rules.is_empty()
        );
    }
}

// ---------------------------------------------------------------------------
// Invariant 4: Order and determinism
//
// Reordering rules never changes the verdict, and repeated evaluation
// returns the same result.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn verdict_is_order_independent(gen in arb_rules(), record in arb_record()) {
        let registry = OperatorRegistry::new();
        let rules = build_all(&gen, &registry);
        let reversed: Vec<_> = rules.iter().rev().collect();

        for relation in [Relation::And, Relation::Or] {
            prop_assert_eq!(
                RuleGroup::new(&rules, relation).evaluate(&record).unwrap(),
                RuleGroup::new(reversed.iter().copied(), relation).evaluate(&record).unwrap()
            );
        }
    }

    #[test]
    fn engine_is_deterministic(gen in arb_rules(), record in arb_record()) {
        let engine = Engine::new();
        let rules = build_all(&gen, engine.registry());
        let first = engine.evaluate_report(&rules, &record, "or").unwrap();
        for _ in 0..3 {
            let again = engine.evaluate_report(&rules, &record, "or").unwrap();
            prop_assert_eq!(again.verdict(), first.verdict());
            prop_assert_eq!(again.outcomes(), first.outcomes());
        }
    }
}
