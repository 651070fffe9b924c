//! Tab selection for the main page.

/// Bottom navigation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Map,
    Alerts,
    Create,
    Profile,
}

impl Tab {
    /// All tabs in navigation order.
    pub const ALL: [Tab; 4] = [Tab::Map, Tab::Alerts, Tab::Create, Tab::Profile];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Map => "map",
            Tab::Alerts => "alerts",
            Tab::Create => "create",
            Tab::Profile => "profile",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Map => "Map",
            Tab::Alerts => "Alerts",
            Tab::Create => "Request",
            Tab::Profile => "Profile",
        }
    }

    /// Badge count for this tab, given the number of pending alerts.
    ///
    /// Only the alerts tab carries a badge, and only when there is something
    /// to show.
    pub fn badge(self, alert_count: usize) -> Option<usize> {
        match self {
            Tab::Alerts if alert_count > 0 => Some(alert_count),
            _ => None,
        }
    }
}

/// Which content the main page shows.
///
/// The create form overlays the active tab rather than replacing it, so
/// closing the form always reveals the tab that was active before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub active_tab: Tab,
    pub show_create_form: bool,
}

impl ViewState {
    /// Handle a navigation tab click.
    pub fn select_tab(&mut self, tab: Tab) {
        if tab == Tab::Create {
            self.show_create_form = true;
        } else {
            self.show_create_form = false;
            self.active_tab = tab;
        }
    }

    /// Close the create form without posting.
    pub fn cancel_create(&mut self) {
        self.show_create_form = false;
    }

    /// Close the create form after a request was posted and show the alerts.
    pub fn request_posted(&mut self) {
        self.show_create_form = false;
        self.active_tab = Tab::Alerts;
    }

    /// Tab to highlight in the navigation bar.
    pub fn highlighted_tab(&self) -> Tab {
        if self.show_create_form {
            Tab::Create
        } else {
            self.active_tab
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view() {
        let view = ViewState::default();
        assert_eq!(view.active_tab, Tab::Map);
        assert!(!view.show_create_form);
    }

    #[test]
    fn test_create_shows_form_from_any_tab() {
        for tab in [Tab::Map, Tab::Alerts, Tab::Profile] {
            let mut view = ViewState::default();
            view.select_tab(tab);
            view.select_tab(Tab::Create);

            assert!(view.show_create_form);
            assert_eq!(view.active_tab, tab);
            assert_eq!(view.highlighted_tab(), Tab::Create);
        }
    }

    #[test]
    fn test_cancel_returns_to_previous_tab() {
        let mut view = ViewState::default();
        view.select_tab(Tab::Create);
        view.cancel_create();
        assert_eq!(view.active_tab, Tab::Map);
        assert!(!view.show_create_form);

        view.select_tab(Tab::Profile);
        view.select_tab(Tab::Create);
        view.cancel_create();
        assert_eq!(view.highlighted_tab(), Tab::Profile);
    }

    #[test]
    fn test_other_tab_hides_form() {
        let mut view = ViewState::default();
        view.select_tab(Tab::Create);
        view.select_tab(Tab::Alerts);

        assert!(!view.show_create_form);
        assert_eq!(view.active_tab, Tab::Alerts);
    }

    #[test]
    fn test_request_posted_switches_to_alerts() {
        let mut view = ViewState::default();
        view.select_tab(Tab::Create);
        view.request_posted();

        assert!(!view.show_create_form);
        assert_eq!(view.active_tab, Tab::Alerts);
    }

    #[test]
    fn test_badge_only_on_alerts() {
        assert_eq!(Tab::Alerts.badge(3), Some(3));
        assert_eq!(Tab::Alerts.badge(0), None);
        assert_eq!(Tab::Map.badge(3), None);
        assert_eq!(Tab::Profile.badge(3), None);
    }

    #[test]
    fn test_tab_ids_and_labels() {
        let ids: Vec<_> = Tab::ALL.iter().map(|t| t.id()).collect();
        assert_eq!(ids, ["map", "alerts", "create", "profile"]);
        assert_eq!(Tab::Create.label(), "Request");
    }
}
