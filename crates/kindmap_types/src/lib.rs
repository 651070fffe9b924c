//! Core types for the KindMap community-assistance app.
//!
//! This crate defines the data model, the compiled-in mock dataset and the
//! view-independent logic (form validation, tab selection, map panel
//! lifecycle) shared by the web frontend.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub mod draft;
pub mod map;
pub mod mock;
pub mod toast;
pub mod view;

pub use draft::{DeedDraft, DraftError, REWARD_MAX, REWARD_MIN};
pub use map::{AccessToken, MapConfig, MapError, MapPanel, MapPanelEvent, TokenError};
pub use toast::{Toast, ToastEvent, ToastSlot};
pub use view::{Tab, ViewState};

/// Error returned when parsing one of the fixed enumerations from a form value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Urgency tier of a help request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
}

impl Urgency {
    /// All tiers in display order.
    pub const ALL: [Urgency; 3] = [Urgency::Low, Urgency::Medium, Urgency::High];

    /// Form and serialization value.
    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        }
    }

    /// Badge text shown on alert cards and in the priority selector.
    pub fn label(self) -> &'static str {
        match self {
            Urgency::Low => "Low Priority",
            Urgency::Medium => "Medium Priority",
            Urgency::High => "Urgent",
        }
    }

    /// CSS class of the alert-card badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            Urgency::Low => "badge urgency-low",
            Urgency::Medium => "badge urgency-medium",
            Urgency::High => "badge urgency-high",
        }
    }

    /// Map marker colour.
    pub fn marker_color(self) -> &'static str {
        match self {
            Urgency::Low => "#10b981",
            Urgency::Medium => "#f59e0b",
            Urgency::High => "#ef4444",
        }
    }

    /// Suggested reward range shown next to the option in the form.
    pub fn reward_hint(self) -> &'static str {
        match self {
            Urgency::Low => "5-15 karma",
            Urgency::Medium => "10-30 karma",
            Urgency::High => "20-50 karma",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Urgency::ALL
            .into_iter()
            .find(|u| u.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "urgency",
                value: s.to_string(),
            })
    }
}

/// Category of a help request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Elderly Care")]
    ElderlyCare,
    #[serde(rename = "Pet Care")]
    PetCare,
    #[serde(rename = "Moving Help")]
    MovingHelp,
    #[serde(rename = "Grocery Shopping")]
    GroceryShopping,
    Transportation,
    #[serde(rename = "Tech Support")]
    TechSupport,
    Childcare,
    Cleaning,
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::ElderlyCare,
        Category::PetCare,
        Category::MovingHelp,
        Category::GroceryShopping,
        Category::Transportation,
        Category::TechSupport,
        Category::Childcare,
        Category::Cleaning,
        Category::Other,
    ];

    /// Display label, also used as the form value.
    pub fn label(self) -> &'static str {
        match self {
            Category::ElderlyCare => "Elderly Care",
            Category::PetCare => "Pet Care",
            Category::MovingHelp => "Moving Help",
            Category::GroceryShopping => "Grocery Shopping",
            Category::Transportation => "Transportation",
            Category::TechSupport => "Tech Support",
            Category::Childcare => "Childcare",
            Category::Cleaning => "Cleaning",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "category",
                value: s.to_string(),
            })
    }
}

/// A helper shown on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Avatar image URL
    pub avatar: String,
    /// Accumulated karma points
    pub points: u32,
}

/// A help request ("good deed") placed on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoodDeed {
    pub id: String,
    pub title: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Name of the person or organisation asking for help
    pub requester: String,
    pub reward: u32,
    pub urgency: Urgency,
}

impl GoodDeed {
    /// Coordinates in Mapbox order.
    pub fn lng_lat(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

/// Requester identity embedded in an alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requester {
    pub name: String,
    pub avatar: String,
    pub rating: f32,
}

/// A help request reshaped for the alerts list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Neighbourhood name
    pub location: String,
    /// Human-readable distance, e.g. "0.3 miles"
    pub distance: String,
    pub reward: u32,
    pub urgency: Urgency,
    /// Human-readable age, e.g. "15 min ago"
    pub time_posted: String,
    pub requester: Requester,
}

/// The signed-in user's identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub name: String,
    pub avatar: String,
    pub join_date: String,
    pub location: String,
}

/// Aggregate counters shown in the header and profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_karma: u32,
    pub weekly_karma: u32,
    pub completed_deeds: u32,
    pub helped_people: u32,
    /// Rank label, e.g. "Community Hero"
    pub rank: String,
    /// Points still needed to reach the next rank
    pub next_rank_points: u32,
    /// Progress to the next rank, 0-100
    pub current_level_progress: u8,
}

impl UserStats {
    /// Progress line shown above the rank bar.
    pub fn progress_summary(&self) -> String {
        format!(
            "{}% ({} points needed)",
            self.current_level_progress.min(100),
            self.next_rank_points
        )
    }
}

/// Icon shown next to an achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementIcon {
    Heart,
    Users,
    TrendingUp,
}

/// A profile achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub icon: AchievementIcon,
    pub name: &'static str,
    pub description: &'static str,
}

/// Achievements listed on every profile.
pub const ACHIEVEMENTS: [Achievement; 3] = [
    Achievement {
        icon: AchievementIcon::Heart,
        name: "First Helper",
        description: "Completed your first good deed",
    },
    Achievement {
        icon: AchievementIcon::Users,
        name: "Community Hero",
        description: "Helped 10 different people",
    },
    Achievement {
        icon: AchievementIcon::TrendingUp,
        name: "Weekly Warrior",
        description: "Active 7 days in a row",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_presentation_triples() {
        let expected = [
            (Urgency::Low, "Low Priority", "badge urgency-low", "#10b981"),
            (Urgency::Medium, "Medium Priority", "badge urgency-medium", "#f59e0b"),
            (Urgency::High, "Urgent", "badge urgency-high", "#ef4444"),
        ];

        for (urgency, label, class, color) in expected {
            assert_eq!(urgency.label(), label);
            assert_eq!(urgency.badge_class(), class);
            assert_eq!(urgency.marker_color(), color);
        }
    }

    #[test]
    fn test_urgency_colors_are_distinct() {
        assert_ne!(Urgency::Low.marker_color(), Urgency::Medium.marker_color());
        assert_ne!(Urgency::Medium.marker_color(), Urgency::High.marker_color());
        assert_ne!(Urgency::Low.marker_color(), Urgency::High.marker_color());
    }

    #[test]
    fn test_urgency_from_form_value() {
        assert_eq!("high".parse::<Urgency>(), Ok(Urgency::High));
        assert_eq!("low".parse::<Urgency>(), Ok(Urgency::Low));
        assert!("critical".parse::<Urgency>().is_err());
        assert_eq!(Urgency::default(), Urgency::Medium);
    }

    #[test]
    fn test_urgency_serializes_lowercase() {
        let json = serde_json::to_string(&Urgency::High).unwrap();
        assert_eq!(json, "\"high\"");

        let parsed: Urgency = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, Urgency::Medium);
    }

    #[test]
    fn test_category_has_nine_options() {
        assert_eq!(Category::ALL.len(), 9);
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>(), Ok(category));
        }
        assert!("Gardening".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&Category::TechSupport).unwrap();
        assert_eq!(json, "\"Tech Support\"");
    }

    #[test]
    fn test_alert_uses_camel_case_fields() {
        let alert = &mock::alerts()[0];
        let json = serde_json::to_value(alert).unwrap();

        assert_eq!(json["timePosted"], "15 min ago");
        assert_eq!(json["requester"]["name"], "Sarah Chen");
    }

    #[test]
    fn test_progress_summary() {
        let stats = mock::user_stats();
        assert_eq!(stats.progress_summary(), "73% (153 points needed)");
    }

    #[test]
    fn test_deed_lng_lat_order() {
        let deed = &mock::good_deeds()[0];
        assert_eq!(deed.lng_lat(), [-73.98, 40.76]);
    }

    #[test]
    fn test_achievements_fixed() {
        let names: Vec<_> = ACHIEVEMENTS.iter().map(|a| a.name).collect();
        assert_eq!(names, ["First Helper", "Community Hero", "Weekly Warrior"]);
    }
}
