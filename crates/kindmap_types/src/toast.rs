//! Confirmation messages shown after user actions.

use crate::{Alert, GoodDeed};

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Confirmation for accepting an alert.
    pub fn mission_accepted(alert: &Alert) -> Self {
        Self::new(
            "Mission Accepted! 🎉",
            format!(
                "You've accepted \"{}\". The requester will be notified.",
                alert.title
            ),
        )
    }

    /// Look up an alert by id and confirm it; unknown ids yield nothing.
    pub fn for_accepted_id(alerts: &[Alert], alert_id: &str) -> Option<Self> {
        alerts
            .iter()
            .find(|a| a.id == alert_id)
            .map(Self::mission_accepted)
    }

    pub fn deed_selected(deed: &GoodDeed) -> Self {
        Self::new(
            "Good Deed Selected!",
            format!("You've shown interest in: {}", deed.title),
        )
    }

    pub fn request_posted() -> Self {
        Self::new(
            "Help Request Posted! 📢",
            "Your request has been shared with the community.",
        )
    }
}

/// Changes to the toast slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastEvent {
    Show(Toast),
    /// Dismiss the toast with this sequence number, if it is still shown.
    Dismiss(u32),
}

/// The single toast slot of the app.
///
/// Every shown toast gets a fresh sequence number, so showing the same
/// message twice still counts as a new toast and restarts its timer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastSlot {
    current: Option<Toast>,
    seq: u32,
}

impl ToastSlot {
    /// The visible toast and its sequence number.
    pub fn current(&self) -> Option<(u32, &Toast)> {
        self.current.as_ref().map(|toast| (self.seq, toast))
    }

    pub fn apply(&mut self, event: ToastEvent) {
        match event {
            ToastEvent::Show(toast) => {
                self.seq = self.seq.wrapping_add(1);
                self.current = Some(toast);
            }
            ToastEvent::Dismiss(seq) if seq == self.seq => self.current = None,
            ToastEvent::Dismiss(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn test_accepted_known_alert() {
        let alerts = mock::alerts();
        let toast = Toast::for_accepted_id(&alerts, "2").unwrap();

        assert!(toast.title.starts_with("Mission Accepted!"));
        assert_eq!(
            toast.description,
            "You've accepted \"URGENT: Help move elderly resident\". The requester will be notified."
        );
    }

    #[test]
    fn test_accepted_unknown_alert() {
        let alerts = mock::alerts();
        assert!(Toast::for_accepted_id(&alerts, "99").is_none());
    }

    #[test]
    fn test_deed_selected() {
        let deed = &mock::good_deeds()[1];
        let toast = Toast::deed_selected(deed);

        assert_eq!(toast.title, "Good Deed Selected!");
        assert_eq!(
            toast.description,
            "You've shown interest in: Walk rescue dog for busy single mom"
        );
    }

    #[test]
    fn test_repeated_toast_gets_new_sequence() {
        let alerts = mock::alerts();
        let toast = Toast::for_accepted_id(&alerts, "1").unwrap();
        let mut slot = ToastSlot::default();
        assert!(slot.current().is_none());

        slot.apply(ToastEvent::Show(toast.clone()));
        let (first, _) = slot.current().unwrap();
        slot.apply(ToastEvent::Show(toast.clone()));
        let (second, shown) = slot.current().unwrap();

        assert_ne!(first, second);
        assert_eq!(shown, &toast);
    }

    #[test]
    fn test_stale_dismiss_keeps_newer_toast() {
        let mut slot = ToastSlot::default();
        slot.apply(ToastEvent::Show(Toast::request_posted()));
        let (first, _) = slot.current().unwrap();
        slot.apply(ToastEvent::Show(Toast::request_posted()));
        let (second, _) = slot.current().unwrap();

        slot.apply(ToastEvent::Dismiss(first));
        assert!(slot.current().is_some());

        slot.apply(ToastEvent::Dismiss(second));
        assert!(slot.current().is_none());
    }
}
