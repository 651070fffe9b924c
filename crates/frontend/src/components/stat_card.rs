//! Statistics card component.

use yew::prelude::*;

/// Properties for StatCard component.
#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub value: AttrValue,
    pub label: AttrValue,
    /// Small line under the label, e.g. "+125 this week"
    #[prop_or_default]
    pub detail: Option<AttrValue>,
    #[prop_or_default]
    pub highlight: bool,
}

/// Statistics card component.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let value_class = if props.highlight {
        "stat-value stat-value-highlight"
    } else {
        "stat-value"
    };

    html! {
        <div class="card stat-card">
            <div class={value_class}>{ &props.value }</div>
            <div class="stat-label">{ &props.label }</div>
            if let Some(detail) = &props.detail {
                <div class="stat-detail">{ detail }</div>
            }
        </div>
    }
}
