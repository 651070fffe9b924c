//! Compiled-in mock dataset.

use crate::{Alert, CurrentUser, GoodDeed, Requester, Urgency, User, UserStats};

const AVATAR_SARAH: &str = "https://images.unsplash.com/photo-1494790108755-2616b612b47c?w=150&h=150&fit=crop&crop=face";
const AVATAR_MARCUS: &str = "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face";
const AVATAR_ELENA: &str = "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop&crop=face";
const AVATAR_DAVID: &str = "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face";
const AVATAR_COMMUNITY_CENTER: &str = "https://images.unsplash.com/photo-1560472354-b33ff0c44a43?w=150&h=150&fit=crop&crop=center";
const AVATAR_MARIA: &str = "https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=150&h=150&fit=crop&crop=face";
const AVATAR_ALEX: &str = "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=150&h=150&fit=crop&crop=face";

const GROCERIES_DESCRIPTION: &str = "My neighbor Mrs. Johnson (82) needs help carrying groceries up 3 flights of stairs. She has mobility issues but is too proud to ask for help directly.";
const HOSPITAL_DESCRIPTION: &str = "Elderly resident needs immediate help getting to hospital for scheduled appointment. Wheelchair accessible vehicle needed.";

fn user(id: &str, name: &str, latitude: f64, longitude: f64, avatar: &str, points: u32) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        latitude,
        longitude,
        avatar: avatar.to_string(),
        points,
    }
}

/// Helpers shown on the map.
pub fn users() -> Vec<User> {
    vec![
        user("1", "Sarah Chen", 40.7589, -73.9851, AVATAR_SARAH, 1250),
        user("2", "Marcus Johnson", 40.7505, -73.9934, AVATAR_MARCUS, 890),
        user("3", "Elena Rodriguez", 40.7614, -73.9776, AVATAR_ELENA, 2100),
        user("4", "David Kim", 40.7282, -73.9942, AVATAR_DAVID, 675),
    ]
}

/// Help requests shown on the map.
pub fn good_deeds() -> Vec<GoodDeed> {
    vec![
        GoodDeed {
            id: "1".to_string(),
            title: "Help elderly neighbor with groceries".to_string(),
            description: GROCERIES_DESCRIPTION.to_string(),
            latitude: 40.7600,
            longitude: -73.9800,
            requester: "Sarah Chen".to_string(),
            reward: 25,
            urgency: Urgency::Medium,
        },
        GoodDeed {
            id: "2".to_string(),
            title: "Walk rescue dog for busy single mom".to_string(),
            description: "Single mom working double shifts needs someone to walk her rescue dog Buddy. He's friendly but energetic and needs 30-45 min walks.".to_string(),
            latitude: 40.7520,
            longitude: -73.9900,
            requester: "Maria Santos".to_string(),
            reward: 15,
            urgency: Urgency::Low,
        },
        GoodDeed {
            id: "3".to_string(),
            title: "URGENT: Help move elderly resident to hospital".to_string(),
            description: HOSPITAL_DESCRIPTION.to_string(),
            latitude: 40.7650,
            longitude: -73.9750,
            requester: "Community Center".to_string(),
            reward: 50,
            urgency: Urgency::High,
        },
        GoodDeed {
            id: "4".to_string(),
            title: "Tech support for senior center".to_string(),
            description: "Senior center needs help setting up tablets for online class. Basic tech knowledge required, very rewarding experience!".to_string(),
            latitude: 40.7300,
            longitude: -73.9950,
            requester: "Golden Years Center".to_string(),
            reward: 30,
            urgency: Urgency::Medium,
        },
    ]
}

/// Help requests shown in the alerts list.
pub fn alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: "1".to_string(),
            title: "Help elderly neighbor with groceries".to_string(),
            description: GROCERIES_DESCRIPTION.to_string(),
            location: "Upper West Side".to_string(),
            distance: "0.3 miles".to_string(),
            reward: 25,
            urgency: Urgency::Medium,
            time_posted: "15 min ago".to_string(),
            requester: Requester {
                name: "Sarah Chen".to_string(),
                avatar: AVATAR_SARAH.to_string(),
                rating: 4.8,
            },
        },
        Alert {
            id: "2".to_string(),
            title: "URGENT: Help move elderly resident".to_string(),
            description: HOSPITAL_DESCRIPTION.to_string(),
            location: "Midtown East".to_string(),
            distance: "0.8 miles".to_string(),
            reward: 50,
            urgency: Urgency::High,
            time_posted: "5 min ago".to_string(),
            requester: Requester {
                name: "Community Center".to_string(),
                avatar: AVATAR_COMMUNITY_CENTER.to_string(),
                rating: 4.9,
            },
        },
        Alert {
            id: "3".to_string(),
            title: "Walk rescue dog for single mom".to_string(),
            description: "Single mom working double shifts needs someone to walk her rescue dog Buddy. He's friendly but energetic.".to_string(),
            location: "Greenwich Village".to_string(),
            distance: "1.2 miles".to_string(),
            reward: 15,
            urgency: Urgency::Low,
            time_posted: "1 hour ago".to_string(),
            requester: Requester {
                name: "Maria Santos".to_string(),
                avatar: AVATAR_MARIA.to_string(),
                rating: 4.7,
            },
        },
    ]
}

pub fn current_user() -> CurrentUser {
    CurrentUser {
        name: "Alex Thompson".to_string(),
        avatar: AVATAR_ALEX.to_string(),
        join_date: "March 2024".to_string(),
        location: "New York, NY".to_string(),
    }
}

pub fn user_stats() -> UserStats {
    UserStats {
        total_karma: 1847,
        weekly_karma: 125,
        completed_deeds: 23,
        helped_people: 18,
        rank: "Community Hero".to_string(),
        next_rank_points: 153,
        current_level_progress: 73,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dataset_sizes() {
        assert_eq!(users().len(), 4);
        assert_eq!(good_deeds().len(), 4);
        assert_eq!(alerts().len(), 3);
    }

    #[test]
    fn test_ids_unique() {
        let deed_ids: HashSet<_> = good_deeds().into_iter().map(|d| d.id).collect();
        let alert_ids: HashSet<_> = alerts().into_iter().map(|a| a.id).collect();
        let user_ids: HashSet<_> = users().into_iter().map(|u| u.id).collect();

        assert_eq!(deed_ids.len(), 4);
        assert_eq!(alert_ids.len(), 3);
        assert_eq!(user_ids.len(), 4);
    }

    #[test]
    fn test_every_urgency_tier_present() {
        let tiers: HashSet<_> = good_deeds().into_iter().map(|d| d.urgency).collect();
        assert_eq!(tiers.len(), 3);
    }

    #[test]
    fn test_coordinates_around_manhattan() {
        for user in users() {
            assert!((40.7..40.8).contains(&user.latitude), "{}", user.name);
            assert!((-74.0..-73.9).contains(&user.longitude), "{}", user.name);
        }
        for deed in good_deeds() {
            assert!((40.7..40.8).contains(&deed.latitude), "{}", deed.title);
            assert!((-74.0..-73.9).contains(&deed.longitude), "{}", deed.title);
        }
    }

    #[test]
    fn test_stats_values() {
        let stats = user_stats();
        assert_eq!(stats.total_karma, 1847);
        assert_eq!(stats.rank, "Community Hero");
        assert!(stats.current_level_progress <= 100);
    }
}
