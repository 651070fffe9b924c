//! Draft of a new help request being composed in the create form.

use thiserror::Error;

use crate::{Category, Urgency};

/// Smallest karma reward a request may offer.
pub const REWARD_MIN: u32 = 5;
/// Largest karma reward a request may offer.
pub const REWARD_MAX: u32 = 100;

/// Reasons a draft cannot be submitted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("a title is required")]
    MissingTitle,

    #[error("a description is required")]
    MissingDescription,

    #[error("a location is required")]
    MissingLocation,

    #[error("reward must be between {min} and {max} karma, got {0}", min = REWARD_MIN, max = REWARD_MAX)]
    RewardOutOfRange(u32),
}

/// A help request under composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeedDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub urgency: Urgency,
    pub reward: u32,
    /// Unset until the user picks one
    pub category: Option<Category>,
}

impl Default for DeedDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            location: String::new(),
            urgency: Urgency::Medium,
            reward: 10,
            category: None,
        }
    }
}

impl DeedDraft {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = urgency;
        self
    }

    pub fn with_reward(mut self, reward: u32) -> Self {
        self.reward = reward;
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Replace the reward from raw number-input text.
    ///
    /// Text that does not parse as a whole number reads as 0, which then
    /// fails validation.
    pub fn set_reward_input(&mut self, raw: &str) {
        self.reward = parse_reward(raw);
    }

    /// Check the same constraints the form declares on its inputs.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.description.trim().is_empty() {
            return Err(DraftError::MissingDescription);
        }
        if self.location.trim().is_empty() {
            return Err(DraftError::MissingLocation);
        }
        if !(REWARD_MIN..=REWARD_MAX).contains(&self.reward) {
            return Err(DraftError::RewardOutOfRange(self.reward));
        }
        Ok(())
    }
}

/// Parse the leading integer of a number input, falling back to 0.
pub fn parse_reward(raw: &str) -> u32 {
    let trimmed = raw.trim();
    let digits: &str = match trimmed.find(|c: char| !c.is_ascii_digit()) {
        Some(end) => &trimmed[..end],
        None => trimmed,
    };
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> DeedDraft {
        DeedDraft::default()
            .with_title("Help moving a couch")
            .with_description("Third floor walk-up, one couch")
            .with_location("Astoria")
            .with_category(Category::MovingHelp)
    }

    #[test]
    fn test_default_draft() {
        let draft = DeedDraft::default();

        assert_eq!(draft.urgency, Urgency::Medium);
        assert_eq!(draft.reward, 10);
        assert!(draft.category.is_none());
        assert_eq!(draft.validate(), Err(DraftError::MissingTitle));
    }

    #[test]
    fn test_complete_draft_is_valid() {
        assert_eq!(complete_draft().validate(), Ok(()));
    }

    #[test]
    fn test_required_fields() {
        let draft = complete_draft().with_description("   ");
        assert_eq!(draft.validate(), Err(DraftError::MissingDescription));

        let draft = complete_draft().with_location("");
        assert_eq!(draft.validate(), Err(DraftError::MissingLocation));
    }

    #[test]
    fn test_reward_bounds_inclusive() {
        assert!(complete_draft().with_reward(5).validate().is_ok());
        assert!(complete_draft().with_reward(100).validate().is_ok());
        assert_eq!(
            complete_draft().with_reward(4).validate(),
            Err(DraftError::RewardOutOfRange(4))
        );
        assert_eq!(
            complete_draft().with_reward(101).validate(),
            Err(DraftError::RewardOutOfRange(101))
        );
    }

    #[test]
    fn test_reward_input_parsing() {
        let mut draft = complete_draft();

        draft.set_reward_input("42");
        assert_eq!(draft.reward, 42);

        draft.set_reward_input("abc");
        assert_eq!(draft.reward, 0);
        assert!(draft.validate().is_err());

        draft.set_reward_input("");
        assert_eq!(draft.reward, 0);

        assert_eq!(parse_reward("12.5"), 12);
        assert_eq!(parse_reward("-3"), 0);
    }

    #[test]
    fn test_category_is_optional() {
        let mut draft = complete_draft();
        draft.category = None;
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DraftError::RewardOutOfRange(200).to_string(),
            "reward must be between 5 and 100 karma, got 200"
        );
    }
}
