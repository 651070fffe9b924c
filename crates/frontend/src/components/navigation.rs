//! Bottom tab bar.

use kindmap_types::Tab;
use yew::prelude::*;

use crate::components::{Icon, IconKind};

/// Properties for Navigation component.
#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub active_tab: Tab,
    pub on_tab_change: Callback<Tab>,
    pub alert_count: usize,
}

/// Navigation bar component.
#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    html! {
        <nav class="bottom-nav">
            { for Tab::ALL.iter().map(|&tab| {
                let is_active = props.active_tab == tab;
                let class = if is_active { "nav-tab active" } else { "nav-tab" };
                let onclick = props.on_tab_change.reform(move |_: MouseEvent| tab);

                html! {
                    <button key={tab.id()} class={class} data-tab={tab.id()} {onclick}>
                        <span class="nav-icon">
                            <Icon kind={IconKind::from(tab)} />
                            if let Some(count) = tab.badge(props.alert_count) {
                                <span class="nav-badge">{ count.to_string() }</span>
                            }
                        </span>
                        <span class="nav-label">{ tab.label() }</span>
                        if is_active {
                            <span class="nav-indicator"></span>
                        }
                    </button>
                }
            })}
        </nav>
    }
}
