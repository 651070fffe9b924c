//! Map configuration, access-token validation and the map panel lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Prefix every Mapbox public token carries.
pub const TOKEN_PREFIX: &str = "pk.";

/// Errors from validating a user-entered access token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("no access token entered")]
    Empty,

    #[error("Invalid API key format. Mapbox public tokens start with \"pk.\"")]
    InvalidFormat,
}

/// Errors reported by the map widget.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("Failed to initialize map: Mapbox GL library is not loaded")]
    LibraryMissing,

    #[error("Failed to initialize map: {0}")]
    Init(String),

    #[error("Failed to load map: {0}")]
    Runtime(String),
}

impl MapError {
    /// Runtime error with the widget's message, or a hint about the token
    /// when the widget gave none.
    pub fn runtime(message: Option<String>) -> Self {
        match message {
            Some(m) if !m.trim().is_empty() => MapError::Runtime(m),
            _ => MapError::Runtime("Please check your API key".to_string()),
        }
    }
}

/// A Mapbox public access token that passed the surface format check.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccessToken(String);

impl AccessToken {
    /// Trim and validate raw input.
    pub fn parse(raw: &str) -> Result<Self, TokenError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TokenError::Empty);
        }
        if !trimmed.starts_with(TOKEN_PREFIX) {
            return Err(TokenError::InvalidFormat);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AccessToken {
    type Error = TokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AccessToken> for String {
    fn from(token: AccessToken) -> Self {
        token.0
    }
}

// Tokens end up in logs; keep the secret part out of them.
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visible: String = self.0.chars().take(8).collect();
        write!(f, "AccessToken({visible}…)")
    }
}

/// Map widget settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapConfig {
    /// Mapbox style URL
    pub style: String,
    /// Initial centre as `[lng, lat]`
    pub center: [f64; 2],
    pub zoom: f64,
    /// Delay between a load event and placing markers
    pub settle_delay_ms: u32,
    /// Stylesheet injected when the page did not include one
    pub stylesheet_url: String,
    /// Token baked in at build time, if any
    pub default_token: Option<String>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            style: "mapbox://styles/mapbox/light-v11".to_string(),
            center: [-74.006, 40.7128],
            zoom: 12.0,
            settle_delay_ms: 100,
            stylesheet_url: "https://api.mapbox.com/mapbox-gl-js/v2.15.0/mapbox-gl.css"
                .to_string(),
            default_token: option_env!("KINDMAP_MAPBOX_TOKEN").map(str::to_string),
        }
    }
}

impl MapConfig {
    pub fn with_default_token(mut self, token: Option<String>) -> Self {
        self.default_token = token;
        self
    }
}

/// Inputs that drive the map panel.
#[derive(Debug, Clone, PartialEq)]
pub enum MapPanelEvent {
    /// The user pressed "Load Map" or Enter in the token prompt.
    TokenSubmitted(String),
    /// Widget construction started.
    InitStarted,
    /// The widget fired its `load` event.
    Loaded,
    /// Construction threw or the widget fired `error`.
    Failed(MapError),
    /// "Change API Key" on the error banner.
    ChangeKeyRequested,
    /// Close button on the error banner.
    ErrorDismissed,
}

/// What the map panel shows.
///
/// Failures before the widget finished loading bring the token prompt back
/// with the error inline. Failures after a successful load keep the map and
/// show the error as a banner.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPanel {
    pub show_key_prompt: bool,
    pub error: Option<String>,
    pub loading: bool,
    pub loaded: bool,
    /// Token the widget is (or will be) initialized with
    pub token: Option<AccessToken>,
    /// Bumped on every accepted token so resubmitting the same token
    /// re-initializes the widget.
    pub generation: u32,
}

impl MapPanel {
    pub fn new(default_token: Option<&str>) -> Self {
        let parsed = default_token.map(AccessToken::parse);
        let (token, error) = match parsed {
            Some(Ok(token)) => (Some(token), None),
            Some(Err(TokenError::Empty)) | None => (None, None),
            Some(Err(e)) => (None, Some(e.to_string())),
        };

        Self {
            show_key_prompt: token.is_none(),
            error,
            loading: false,
            loaded: false,
            token,
            generation: 0,
        }
    }

    /// Token to initialize the widget with, when the map should be shown.
    pub fn active_token(&self) -> Option<&AccessToken> {
        if self.show_key_prompt {
            None
        } else {
            self.token.as_ref()
        }
    }

    /// Text the token prompt starts with: the last accepted token, so a
    /// failed initialization can be retried without retyping it.
    pub fn prompt_input(&self) -> &str {
        self.token.as_ref().map_or("", AccessToken::as_str)
    }

    /// Error shown as a banner over a visible map.
    pub fn banner(&self) -> Option<&str> {
        if self.show_key_prompt {
            None
        } else {
            self.error.as_deref()
        }
    }

    pub fn apply(&mut self, event: MapPanelEvent) {
        match event {
            MapPanelEvent::TokenSubmitted(raw) => match AccessToken::parse(&raw) {
                Ok(token) => {
                    self.show_key_prompt = false;
                    self.error = None;
                    self.loaded = false;
                    self.token = Some(token);
                    self.generation = self.generation.wrapping_add(1);
                }
                Err(TokenError::Empty) => {}
                Err(e) => self.error = Some(e.to_string()),
            },
            MapPanelEvent::InitStarted => {
                self.loading = true;
                self.loaded = false;
                self.error = None;
            }
            MapPanelEvent::Loaded => {
                self.loading = false;
                self.loaded = true;
            }
            MapPanelEvent::Failed(e) => {
                self.loading = false;
                self.error = Some(e.to_string());
                if !self.loaded {
                    self.show_key_prompt = true;
                }
            }
            MapPanelEvent::ChangeKeyRequested => {
                self.show_key_prompt = true;
                self.loading = false;
                self.loaded = false;
            }
            MapPanelEvent::ErrorDismissed => self.error = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "pk.eyJ1IjoiZXhhbXBsZSIsImEiOiJjbGV4YW1wbGUifQ.abc";

    #[test]
    fn test_token_parse() {
        assert_eq!(AccessToken::parse(""), Err(TokenError::Empty));
        assert_eq!(AccessToken::parse("   "), Err(TokenError::Empty));
        assert_eq!(
            AccessToken::parse("sk.secret"),
            Err(TokenError::InvalidFormat)
        );

        let token = AccessToken::parse(&format!("  {GOOD}\n")).unwrap();
        assert_eq!(token.as_str(), GOOD);
    }

    #[test]
    fn test_prompt_keeps_token_after_failed_init() {
        let mut panel = MapPanel::new(None);
        assert_eq!(panel.prompt_input(), "");

        panel.apply(MapPanelEvent::TokenSubmitted(format!(" {GOOD} ")));
        panel.apply(MapPanelEvent::InitStarted);
        panel.apply(MapPanelEvent::Failed(MapError::runtime(None)));

        assert!(panel.show_key_prompt);
        assert_eq!(panel.prompt_input(), GOOD);
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = AccessToken::parse(GOOD).unwrap();
        let shown = format!("{token:?}");
        assert!(shown.starts_with("AccessToken(pk.eyJ1I"));
        assert!(!shown.contains("abc"));
    }

    #[test]
    fn test_token_deserialize_validates() {
        let ok: Result<AccessToken, _> = serde_json::from_str(&format!("\"{GOOD}\""));
        assert!(ok.is_ok());

        let bad: Result<AccessToken, _> = serde_json::from_str("\"tk.nope\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_panel_without_token_prompts() {
        let panel = MapPanel::new(None);
        assert!(panel.show_key_prompt);
        assert!(panel.error.is_none());
        assert!(panel.active_token().is_none());
    }

    #[test]
    fn test_panel_with_default_token() {
        let panel = MapPanel::new(Some(GOOD));
        assert!(!panel.show_key_prompt);
        assert_eq!(panel.active_token().map(AccessToken::as_str), Some(GOOD));
    }

    #[test]
    fn test_malformed_default_token_prompts_with_error() {
        let panel = MapPanel::new(Some("abc"));
        assert!(panel.show_key_prompt);
        assert_eq!(
            panel.error.as_deref(),
            Some("Invalid API key format. Mapbox public tokens start with \"pk.\"")
        );
    }

    #[test]
    fn test_bad_token_keeps_prompt() {
        let mut panel = MapPanel::new(None);
        panel.apply(MapPanelEvent::TokenSubmitted("sk.private".to_string()));

        assert!(panel.show_key_prompt);
        assert_eq!(panel.error, Some(TokenError::InvalidFormat.to_string()));
        assert!(panel.token.is_none());
    }

    #[test]
    fn test_empty_submission_ignored() {
        let mut panel = MapPanel::new(None);
        let before = panel.clone();
        panel.apply(MapPanelEvent::TokenSubmitted("  ".to_string()));
        assert_eq!(panel, before);
    }

    #[test]
    fn test_good_token_hides_prompt() {
        let mut panel = MapPanel::new(None);
        panel.apply(MapPanelEvent::TokenSubmitted("bad".to_string()));
        panel.apply(MapPanelEvent::TokenSubmitted(GOOD.to_string()));

        assert!(!panel.show_key_prompt);
        assert!(panel.error.is_none());
        assert_eq!(panel.generation, 1);
        assert!(panel.active_token().is_some());
    }

    #[test]
    fn test_failure_before_load_reopens_prompt() {
        let mut panel = MapPanel::new(Some(GOOD));
        panel.apply(MapPanelEvent::InitStarted);
        assert!(panel.loading);

        panel.apply(MapPanelEvent::Failed(MapError::runtime(None)));

        assert!(!panel.loading);
        assert!(panel.show_key_prompt);
        assert_eq!(
            panel.error.as_deref(),
            Some("Failed to load map: Please check your API key")
        );
        assert!(panel.banner().is_none());
    }

    #[test]
    fn test_failure_after_load_shows_banner() {
        let mut panel = MapPanel::new(Some(GOOD));
        panel.apply(MapPanelEvent::InitStarted);
        panel.apply(MapPanelEvent::Loaded);
        panel.apply(MapPanelEvent::Failed(MapError::runtime(Some(
            "tile 404".to_string(),
        ))));

        assert!(!panel.show_key_prompt);
        assert_eq!(panel.banner(), Some("Failed to load map: tile 404"));

        panel.apply(MapPanelEvent::ErrorDismissed);
        assert!(panel.banner().is_none());
    }

    #[test]
    fn test_change_key_then_resubmit_same_token() {
        let mut panel = MapPanel::new(None);
        panel.apply(MapPanelEvent::TokenSubmitted(GOOD.to_string()));
        panel.apply(MapPanelEvent::Loaded);
        panel.apply(MapPanelEvent::ChangeKeyRequested);
        assert!(panel.show_key_prompt);
        assert!(panel.active_token().is_none());

        panel.apply(MapPanelEvent::TokenSubmitted(GOOD.to_string()));
        assert_eq!(panel.generation, 2);
        assert!(panel.active_token().is_some());
    }

    #[test]
    fn test_config_defaults() {
        let config = MapConfig::default().with_default_token(None);
        assert_eq!(config.center, [-74.006, 40.7128]);
        assert_eq!(config.settle_delay_ms, 100);
        assert!(config.style.ends_with("light-v11"));
        assert!(config.default_token.is_none());
    }

    #[test]
    fn test_config_partial_json() {
        let config: MapConfig = serde_json::from_str(r#"{"zoom": 14.5}"#).unwrap();
        assert_eq!(config.zoom, 14.5);
        assert_eq!(config.settle_delay_ms, 100);
    }
}
