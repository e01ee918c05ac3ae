use uncollect::{
    CollectError,
    bindings::Bindings,
    item::CandidateItem,
    resolve::{self, DeclScope},
    rule::ExclusionRule,
};

fn main() -> Result<(), CollectError> {
    // One rule declared on the group; only some derived items are
    // parametrized, so the rule tolerates the bare ones.
    let group = DeclScope::new().with_rule(
        ExclusionRule::when(|bindings: &Bindings| {
            bindings.value::<&'static str>("backend") == Some(&"legacy")
        })
        .with_require_parametrized(false),
    );

    let derived = [
        CandidateItem::new("setup_works"),
        CandidateItem::new("query[legacy]")
            .with_bindings(Bindings::new().with("backend", "legacy")),
        CandidateItem::new("query[modern]")
            .with_bindings(Bindings::new().with("backend", "modern")),
    ];

    let report = uncollect::collection(resolve::attach(derived, &[&group])).run()?;
    for id in report.ids() {
        println!("collected {id}");
    }
    println!("({} uncollected)", report.uncollected);

    Ok(())
}
