//! Interactive map of helpers and help requests.

mod mapbox;
mod popup;
mod session;

use std::rc::Rc;

use kindmap_types::{GoodDeed, MapConfig, MapPanel, MapPanelEvent, User};
use yew::prelude::*;

use crate::components::Loading;
use session::{MapSession, MarkerData, SessionSlot};

/// Reducer wrapper around the panel state machine.
#[derive(Clone, PartialEq)]
struct PanelState(MapPanel);

impl Reducible for PanelState {
    type Action = MapPanelEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        Rc::new(PanelState(next))
    }
}

/// Properties for MapView component.
#[derive(Properties, PartialEq)]
pub struct MapViewProps {
    pub users: Vec<User>,
    pub good_deeds: Vec<GoodDeed>,
    pub on_deed_click: Callback<GoodDeed>,
    /// Access token; read once when the view mounts.
    #[prop_or_default]
    pub api_key: Option<String>,
    #[prop_or_default]
    pub config: MapConfig,
}

/// Map view component.
#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let panel = {
        let api_key = props.api_key.clone();
        use_reducer(move || PanelState(MapPanel::new(api_key.as_deref())))
    };
    let container = use_node_ref();
    let slot: SessionSlot = use_mut_ref(|| None::<MapSession>);
    let latest_click = {
        let on_deed_click = props.on_deed_click.clone();
        use_mut_ref(move || on_deed_click)
    };
    *latest_click.borrow_mut() = props.on_deed_click.clone();

    let report = {
        let dispatcher = panel.dispatcher();
        Callback::from(move |event: MapPanelEvent| dispatcher.dispatch(event))
    };

    // Create the widget whenever a token is accepted; tear it down when the
    // prompt comes back or the view unmounts.
    {
        let slot = slot.clone();
        let container = container.clone();
        let report = report.clone();
        let config = props.config.clone();
        let data = MarkerData {
            users: props.users.clone(),
            deeds: props.good_deeds.clone(),
            on_deed_click: latest_click.clone(),
        };
        let token = panel.0.active_token().cloned();

        use_effect_with((token, panel.0.generation), move |(token, _)| {
            if let Some(token) = token {
                if let Some(element) = container.cast::<web_sys::HtmlElement>() {
                    report.emit(MapPanelEvent::InitStarted);
                    tracing::info!(?token, "initializing map");
                    match MapSession::start(
                        &config,
                        token,
                        &element,
                        Rc::downgrade(&slot),
                        report.clone(),
                        data,
                    ) {
                        Ok(session) => *slot.borrow_mut() = Some(session),
                        Err(error) => {
                            tracing::error!(%error, "map initialization failed");
                            report.emit(MapPanelEvent::Failed(error));
                        }
                    }
                }
            }
            move || {
                slot.borrow_mut().take();
            }
        });
    }

    // Re-plot when the lists change.
    {
        let slot = slot.clone();
        use_effect_with(
            (props.users.clone(), props.good_deeds.clone()),
            move |(users, deeds)| {
                if let Ok(mut guard) = slot.try_borrow_mut()
                    && let Some(session) = guard.as_mut()
                {
                    session.set_data(users.clone(), deeds.clone());
                    session.place_markers();
                }
            },
        );
    }

    let state = &panel.0;

    if state.show_key_prompt {
        return html! {
            <KeyPrompt
                initial={state.prompt_input().to_string()}
                error={state.error.clone()}
                on_submit={report.reform(MapPanelEvent::TokenSubmitted)}
            />
        };
    }

    let on_change_key = {
        let dispatcher = panel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(MapPanelEvent::ChangeKeyRequested))
    };
    let on_dismiss = {
        let dispatcher = panel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(MapPanelEvent::ErrorDismissed))
    };

    html! {
        <div class="map-view">
            <div ref={container} class="map-container"></div>

            if state.loading {
                <div class="map-overlay">
                    <Loading label={"Loading map..."} />
                </div>
            }

            if let Some(message) = state.banner() {
                <div class="map-error-banner">
                    <button class="banner-close" onclick={on_dismiss}>{"×"}</button>
                    <p>{ message }</p>
                    <button class="btn btn-danger btn-small" onclick={on_change_key}>
                        {"Change API Key"}
                    </button>
                </div>
            }

            <div class="map-info-card">
                <h2>{"CareBnB"}</h2>
                <p>{ nearby_summary(props.good_deeds.len()) }</p>
            </div>
        </div>
    }
}

fn nearby_summary(count: usize) -> String {
    format!("{count} care requests nearby")
}

#[derive(Properties, PartialEq)]
struct KeyPromptProps {
    initial: AttrValue,
    error: Option<String>,
    on_submit: Callback<String>,
}

/// Token entry shown instead of the map.
#[function_component(KeyPrompt)]
fn key_prompt(props: &KeyPromptProps) -> Html {
    let input = {
        let initial = props.initial.to_string();
        use_state(move || initial)
    };

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let el: web_sys::HtmlInputElement = e.target_unchecked_into();
            input.set(el.value());
        })
    };

    let on_click = {
        let input = input.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| on_submit.emit((*input).clone()))
    };

    let on_keypress = {
        let input = input.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_submit.emit((*input).clone());
            }
        })
    };

    html! {
        <div class="key-prompt">
            <div class="card key-prompt-card">
                <h3>{"Enter Mapbox API Key"}</h3>
                <p class="text-secondary">
                    {"Get your public token from "}
                    <a
                        href="https://account.mapbox.com/access-tokens/"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"account.mapbox.com"}
                    </a>
                </p>
                if let Some(error) = &props.error {
                    <div class="inline-error">
                        <p>{ error }</p>
                    </div>
                }
                <input
                    type="text"
                    class="search-input"
                    value={(*input).clone()}
                    oninput={on_input}
                    onkeypress={on_keypress}
                    placeholder="pk.eyJ1IjoiZXhhbXBsZSIsImEiOiJjbGV..."
                />
                <button class="btn btn-primary btn-block" onclick={on_click}>
                    {"Load Map"}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearby_summary() {
        assert_eq!(nearby_summary(4), "4 care requests nearby");
    }

    #[test]
    fn test_panel_reducer_delegates() {
        let state = Rc::new(PanelState(MapPanel::new(None)));
        let next = state.reduce(MapPanelEvent::TokenSubmitted("nope".to_string()));
        assert!(next.0.show_key_prompt);
        assert!(next.0.error.is_some());

        let next = next.reduce(MapPanelEvent::TokenSubmitted("pk.abc".to_string()));
        assert!(!next.0.show_key_prompt);
        assert_eq!(next.0.generation, 1);
    }
}
