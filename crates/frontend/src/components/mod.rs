//! Reusable UI components.

mod alert_card;
mod create_deed_form;
mod icon;
mod loading;
mod navigation;
mod stat_card;
mod toast;
mod user_profile;

pub use alert_card::AlertCard;
pub use create_deed_form::CreateDeedForm;
pub use icon::{Icon, IconKind};
pub use loading::Loading;
pub use navigation::Navigation;
pub use stat_card::StatCard;
pub use toast::ToastView;
pub use user_profile::UserProfile;
