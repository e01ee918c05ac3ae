use uncollect::{CollectError, bindings::Bindings, item::CandidateItem, rule::ExclusionRule};

fn main() -> Result<(), CollectError> {
    let even_size = ExclusionRule::when(|bindings: &Bindings| {
        bindings.value::<i32>("size").is_some_and(|size| size % 2 == 0)
    });

    let items = (1..=6)
        .map(|size| {
            CandidateItem::new(format!("transfer[{size}]"))
                .with_bindings(Bindings::new().with("size", size))
                .with_rule(even_size.clone())
        })
        .collect();

    let report = uncollect::collection(items).run()?;
    for id in report.ids() {
        println!("collected {id}");
    }
    println!("({} uncollected)", report.uncollected);

    Ok(())
}
