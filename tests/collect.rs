use pretty_assertions::assert_eq;
use uncollect::{
    CollectError,
    bindings::Bindings,
    collection,
    filter::NoFilter,
    item::CandidateItem,
    marker,
    resolve::{self, DeclScope},
    rule::ExclusionRule,
};

fn case(id: &'static str, param: i32) -> CandidateItem {
    CandidateItem::new(id).with_bindings(Bindings::new().with("param", param))
}

fn param_is_two() -> ExclusionRule {
    ExclusionRule::when(|bindings: &Bindings| bindings.value::<i32>("param") == Some(&2))
}

#[test]
fn unmarked_suite_runs_untouched() {
    let items = vec![
        CandidateItem::new("test_sth"),
        case("test_more[1]", 1),
        case("test_more[2]", 2),
    ];

    let report = collection(items).run().unwrap();
    assert_eq!(
        report.ids().collect::<Vec<_>>(),
        ["test_sth", "test_more[1]", "test_more[2]"]
    );
    assert_eq!(report.uncollected, 0);
}

#[test]
fn marked_cases_disappear_from_the_run() {
    let items = (1..=3)
        .map(|param| {
            CandidateItem::new(format!("test_more[{param}]"))
                .with_bindings(Bindings::new().with("param", param))
                .with_rule(param_is_two())
        })
        .collect();

    let report = collection(items).run().unwrap();
    assert_eq!(
        report.ids().collect::<Vec<_>>(),
        ["test_more[1]", "test_more[3]"]
    );
    assert_eq!(report.uncollected, 1);
}

#[test]
fn group_rules_reach_derived_items() {
    let group = DeclScope::new().with_rule(param_is_two());
    let derived = resolve::attach(
        [case("grouped[1]", 1), case("grouped[2]", 2)],
        &[&group],
    );
    let mut items = vec![CandidateItem::new("ungrouped")];
    items.extend(derived);

    let report = collection(items).run().unwrap();
    assert_eq!(
        report.ids().collect::<Vec<_>>(),
        ["ungrouped", "grouped[1]"]
    );
    assert_eq!(report.uncollected, 1);
}

#[test]
fn unparametrized_marked_item_fails_the_pass() {
    let items = vec![CandidateItem::new("bare").with_rule(param_is_two())];

    let err = collection(items).run().unwrap_err();
    assert_eq!(
        err,
        CollectError::NotParametrized {
            item: "bare".into()
        }
    );
    assert_eq!(
        err.to_string(),
        "exclusion rule on 'bare' only applies to parametrized items"
    );
}

#[test]
fn missing_predicate_fails_the_pass() {
    let items = vec![case("misdeclared[2]", 2).with_rule(ExclusionRule::declared())];

    let err = collection(items).run().unwrap_err();
    assert_eq!(
        err.to_string(),
        "exclusion rule on 'misdeclared[2]' must carry a predicate"
    );
}

#[test]
fn no_filter_passes_malformed_rules_through() {
    let items = vec![
        CandidateItem::new("bare").with_rule(param_is_two()),
        case("misdeclared[2]", 2).with_rule(ExclusionRule::declared()),
    ];

    let report = collection(items).with_filter(NoFilter).run().unwrap();
    assert_eq!(
        report.ids().collect::<Vec<_>>(),
        ["bare", "misdeclared[2]"]
    );
    assert_eq!(report.uncollected, 0);
}

#[test]
fn extra_payload_survives_the_pass() {
    let items = vec![
        case("keep[1]", 1).with_extra("module_a"),
        case("drop[2]", 2).with_rule(param_is_two()).with_extra("module_b"),
        case("keep[3]", 3).with_extra("module_c"),
    ];

    let report = collection(items).run().unwrap();
    let extras: Vec<_> = report.items.iter().map(|item| item.extra).collect();
    assert_eq!(extras, ["module_a", "module_c"]);
}

#[test]
fn marker_listing_line_matches_the_contract() {
    assert_eq!(
        marker::UNCOLLECT_IF.to_string(),
        "uncollect_if: uncollect_if(predicate(params)): items marked with \
         uncollect_if will not be collected if predicate(params) returns \
         true - like a conditional skip but not reported as skipped"
    );
}
