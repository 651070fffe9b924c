//! Page components.

mod alerts;

pub use alerts::AlertsPage;
