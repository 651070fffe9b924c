//! Alert card component.

use kindmap_types::Alert;
use yew::prelude::*;

use crate::components::{Icon, IconKind};

/// Properties for AlertCard component.
#[derive(Properties, PartialEq)]
pub struct AlertCardProps {
    pub alert: Alert,
    /// Called with the alert id when "Accept Mission" is pressed.
    pub on_accept: Callback<String>,
}

/// Alert card component.
#[function_component(AlertCard)]
pub fn alert_card(props: &AlertCardProps) -> Html {
    let alert = &props.alert;

    let on_accept = {
        let id = alert.id.clone();
        props.on_accept.reform(move |_: MouseEvent| id.clone())
    };

    html! {
        <div class="card alert-card">
            <div class="alert-card-header">
                <div class="alert-requester">
                    <img
                        class="avatar avatar-small"
                        src={alert.requester.avatar.clone()}
                        alt={alert.requester.name.clone()}
                    />
                    <div>
                        <h3 class="alert-title">{ &alert.title }</h3>
                        <div class="alert-meta">
                            <span>{ &alert.requester.name }</span>
                            <span class="rating">
                                <Icon kind={IconKind::Star} class="icon icon-xs icon-filled" />
                                { alert.requester.rating.to_string() }
                            </span>
                        </div>
                    </div>
                </div>
                <span class={alert.urgency.badge_class()}>{ alert.urgency.label() }</span>
            </div>

            <p class="alert-description">{ &alert.description }</p>

            <div class="alert-details">
                <span>
                    <Icon kind={IconKind::MapPin} class="icon icon-sm" />
                    { location_line(alert) }
                </span>
                <span>
                    <Icon kind={IconKind::Clock} class="icon icon-sm" />
                    { &alert.time_posted }
                </span>
            </div>

            <div class="alert-card-footer">
                <div class="karma-reward">{ format!("+{} Karma Points", alert.reward) }</div>
                <button class="btn btn-primary" onclick={on_accept}>
                    {"Accept Mission"}
                </button>
            </div>
        </div>
    }
}

fn location_line(alert: &Alert) -> String {
    format!("{} • {}", alert.location, alert.distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindmap_types::mock;

    #[test]
    fn test_location_line() {
        let alert = &mock::alerts()[0];
        assert_eq!(location_line(alert), "Upper West Side • 0.3 miles");
    }
}
