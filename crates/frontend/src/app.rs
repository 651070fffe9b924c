//! Main application component: header, active view and tab bar.

use std::rc::Rc;

use kindmap_types::{
    Alert, CurrentUser, DeedDraft, GoodDeed, MapConfig, Tab, Toast, ToastEvent, ToastSlot, User,
    UserStats, ViewState, mock,
};
use yew::prelude::*;

use crate::components::{CreateDeedForm, Icon, IconKind, Navigation, ToastView, UserProfile};
use crate::map::MapView;
use crate::pages::AlertsPage;

/// Everything the app displays, loaded once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct AppData {
    pub users: Vec<User>,
    pub good_deeds: Vec<GoodDeed>,
    pub alerts: Vec<Alert>,
    pub current_user: CurrentUser,
    pub stats: UserStats,
}

impl AppData {
    pub fn mock() -> Self {
        Self {
            users: mock::users(),
            good_deeds: mock::good_deeds(),
            alerts: mock::alerts(),
            current_user: mock::current_user(),
            stats: mock::user_stats(),
        }
    }
}

/// Reducer wrapper so delayed dismissals act on the latest toast.
#[derive(Default, PartialEq)]
struct ToastState(ToastSlot);

impl Reducible for ToastState {
    type Action = ToastEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        Rc::new(ToastState(next))
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let data = use_memo((), |_| AppData::mock());
    let config = use_memo((), |_| MapConfig::default());
    let view = use_state(ViewState::default);
    let toast = use_reducer(ToastState::default);

    let on_tab_change = {
        let view = view.clone();
        Callback::from(move |tab: Tab| {
            let mut next = *view;
            next.select_tab(tab);
            view.set(next);
        })
    };

    let on_accept = {
        let toast = toast.dispatcher();
        let data = data.clone();
        Callback::from(move |alert_id: String| {
            if let Some(confirmation) = Toast::for_accepted_id(&data.alerts, &alert_id) {
                tracing::info!(%alert_id, "mission accepted");
                toast.dispatch(ToastEvent::Show(confirmation));
            }
        })
    };

    let on_deed_click = {
        let toast = toast.dispatcher();
        Callback::from(move |deed: GoodDeed| {
            tracing::info!(deed_id = %deed.id, "good deed selected");
            toast.dispatch(ToastEvent::Show(Toast::deed_selected(&deed)));
        })
    };

    let on_create = {
        let toast = toast.dispatcher();
        let view = view.clone();
        Callback::from(move |draft: DeedDraft| {
            tracing::info!(
                title = %draft.title,
                urgency = %draft.urgency,
                reward = draft.reward,
                "help request posted"
            );
            toast.dispatch(ToastEvent::Show(Toast::request_posted()));
            let mut next = *view;
            next.request_posted();
            view.set(next);
        })
    };

    let on_cancel = {
        let view = view.clone();
        Callback::from(move |()| {
            let mut next = *view;
            next.cancel_create();
            view.set(next);
        })
    };

    let on_toast_dismiss = {
        let toast = toast.dispatcher();
        Callback::from(move |seq: u32| toast.dispatch(ToastEvent::Dismiss(seq)))
    };

    let content = if view.show_create_form {
        html! {
            <div class="page">
                <CreateDeedForm on_submit={on_create} on_cancel={on_cancel} />
            </div>
        }
    } else {
        match view.active_tab {
            Tab::Map => html! {
                <div class="page page-map">
                    <MapView
                        users={data.users.clone()}
                        good_deeds={data.good_deeds.clone()}
                        on_deed_click={on_deed_click}
                        api_key={config.default_token.clone()}
                        config={(*config).clone()}
                    />
                </div>
            },
            Tab::Alerts => html! {
                <AlertsPage alerts={data.alerts.clone()} on_accept={on_accept} />
            },
            Tab::Profile => html! {
                <div class="page">
                    <UserProfile user={data.current_user.clone()} stats={data.stats.clone()} />
                </div>
            },
            // The form overlays the active tab; it is never the active tab itself.
            Tab::Create => html! {},
        }
    };

    html! {
        <div class="app-container">
            <Header data={(*data).clone()} />
            <main class="main-content">
                { content }
            </main>
            if let Some((seq, current)) = toast.0.current() {
                <ToastView seq={seq} toast={current.clone()} on_dismiss={on_toast_dismiss} />
            }
            <Navigation
                active_tab={view.highlighted_tab()}
                on_tab_change={on_tab_change}
                alert_count={data.alerts.len()}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    data: AppData,
}

/// Title bar with the karma total and quick stats.
#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let data = &props.data;

    html! {
        <header class="app-header">
            <div class="app-header-top">
                <div>
                    <h1 class="nav-brand">
                        <Icon kind={IconKind::Heart} class="icon icon-brand" />
                        {"KindMap"}
                    </h1>
                    <p class="tagline">{"Spread kindness, one deed at a time"}</p>
                </div>
                <div class="header-karma">
                    <div class="header-karma-value">{ data.stats.total_karma.to_string() }</div>
                    <div class="header-karma-label">{"Karma Points"}</div>
                </div>
            </div>

            <div class="quick-stats">
                <QuickStat value={data.alerts.len().to_string()} label="Active Alerts" />
                <QuickStat value={data.users.len().to_string()} label="Helpers Nearby" />
                <QuickStat value={format!("+{}", data.stats.weekly_karma)} label="This Week" />
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct QuickStatProps {
    value: AttrValue,
    label: AttrValue,
}

#[function_component(QuickStat)]
fn quick_stat(props: &QuickStatProps) -> Html {
    html! {
        <div class="quick-stat">
            <div class="quick-stat-value">{ &props.value }</div>
            <div class="quick-stat-label">{ &props.label }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_data_from_mock() {
        let data = AppData::mock();

        assert_eq!(data.alerts.len(), 3);
        assert_eq!(data.users.len(), 4);
        assert_eq!(data.good_deeds.len(), 4);
        assert_eq!(data.current_user.name, "Alex Thompson");
    }

    #[test]
    fn test_toast_reducer_restarts_on_repeat() {
        let data = AppData::mock();
        let toast = Toast::for_accepted_id(&data.alerts, "1").unwrap();

        let state = Rc::new(ToastState::default());
        let first = state.reduce(ToastEvent::Show(toast.clone()));
        let second = first.clone().reduce(ToastEvent::Show(toast));
        let (first_seq, _) = first.0.current().unwrap();
        let (second_seq, _) = second.0.current().unwrap();
        assert_ne!(first_seq, second_seq);

        // The timer of the first toast must not close the second one.
        let after = second.reduce(ToastEvent::Dismiss(first_seq));
        assert!(after.0.current().is_some());
    }

    #[test]
    fn test_badge_matches_alert_count() {
        let data = AppData::mock();
        assert_eq!(Tab::Alerts.badge(data.alerts.len()), Some(3));
    }
}
