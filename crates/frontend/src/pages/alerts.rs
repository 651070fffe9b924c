//! Alerts list page component.

use kindmap_types::Alert;
use yew::prelude::*;

use crate::components::AlertCard;

/// Properties for AlertsPage.
#[derive(Properties, PartialEq)]
pub struct AlertsPageProps {
    pub alerts: Vec<Alert>,
    pub on_accept: Callback<String>,
}

/// Nearby good deeds as a list of cards.
#[function_component(AlertsPage)]
pub fn alerts_page(props: &AlertsPageProps) -> Html {
    html! {
        <div class="page alerts-page">
            <div class="page-heading">
                <h2>{"Nearby Good Deeds"}</h2>
                <span class="badge badge-secondary">
                    { format!("{} available", props.alerts.len()) }
                </span>
            </div>

            if props.alerts.is_empty() {
                <div class="card">
                    <p>{"No requests nearby right now."}</p>
                </div>
            } else {
                <div class="alert-list">
                    { for props.alerts.iter().map(|alert| html! {
                        <AlertCard
                            key={alert.id.clone()}
                            alert={alert.clone()}
                            on_accept={props.on_accept.clone()}
                        />
                    })}
                </div>
            }
        </div>
    }
}
