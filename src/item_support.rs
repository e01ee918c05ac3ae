use std::borrow::Cow;

use crate::{bindings::Bindings, item::CandidateItem, rule::ExclusionRule};

#[derive(Default)]
pub struct BuildItem {
    pub id: Cow<'static, str>,
    pub bindings: Option<Bindings>,
    pub rules: Vec<ExclusionRule>,
}

impl From<BuildItem> for CandidateItem {
    fn from(value: BuildItem) -> Self {
        CandidateItem {
            id: value.id,
            bindings: value.bindings,
            rules: value.rules,
            extra: (),
        }
    }
}

macro_rules! item {
    {$($field:ident: $value:expr),* $(,)?} => {
        $crate::item::CandidateItem::from($crate::item_support::BuildItem {
            $($field: From::from($value),)*
            ..Default::default()
        })
    };
}

pub(crate) use item;

macro_rules! bindings {
    {$($name:ident: $value:expr),* $(,)?} => {{
        #[allow(unused_mut)]
        let mut bindings = $crate::bindings::Bindings::new();
        $(bindings.set(stringify!($name), $value);)*
        bindings
    }};
}

pub(crate) use bindings;
