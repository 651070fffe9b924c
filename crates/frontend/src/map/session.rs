//! A live Mapbox map and everything registered on it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use kindmap_types::{AccessToken, GoodDeed, MapConfig, MapError, MapPanelEvent, User};
use wasm_bindgen::prelude::*;
use web_sys::MouseEvent;
use yew::Callback;

use super::mapbox::{self, Map, Marker, NavigationControl, Popup};
use super::popup;

const USER_MARKER_COLOR: &str = "#22c55e";
const USER_MARKER_SCALE: f64 = 0.8;
const DEED_MARKER_SCALE: f64 = 1.2;

/// Slot a component keeps its session in.
pub type SessionSlot = Rc<RefCell<Option<MapSession>>>;

/// Users and deeds to plot, plus the latest deed-click handler.
#[derive(Clone)]
pub struct MarkerData {
    pub users: Vec<User>,
    pub deeds: Vec<GoodDeed>,
    pub on_deed_click: Rc<RefCell<Callback<GoodDeed>>>,
}

/// Markers currently on the map and their button listeners.
#[derive(Default)]
struct MarkerLayer {
    markers: Vec<Marker>,
    listeners: Vec<Closure<dyn FnMut(MouseEvent)>>,
}

impl MarkerLayer {
    fn clear(&mut self) {
        for marker in self.markers.drain(..) {
            marker.remove();
        }
        self.listeners.clear();
    }
}

pub struct MapSession {
    map: Map,
    data: MarkerData,
    layer: MarkerLayer,
    _events: Vec<Closure<dyn FnMut(JsValue)>>,
}

impl MapSession {
    /// Create the map in `container` and subscribe to its lifecycle events.
    ///
    /// Markers are placed `settle_delay_ms` after `load` and `style.load`.
    /// Events reach the session through `slot` once the caller stores it there.
    pub fn start(
        config: &MapConfig,
        token: &AccessToken,
        container: &web_sys::HtmlElement,
        slot: Weak<RefCell<Option<MapSession>>>,
        report: Callback<MapPanelEvent>,
        data: MarkerData,
    ) -> Result<Self, MapError> {
        mapbox::set_access_token(token)?;
        mapbox::ensure_stylesheet(&config.stylesheet_url);

        let map = Map::create(container, &config.style, config.center, config.zoom)?;
        map.add_control(&NavigationControl::new(), "top-right");

        let delay = config.settle_delay_ms;

        let on_load = {
            let slot = slot.clone();
            let report = report.clone();
            Closure::<dyn FnMut(JsValue)>::new(move |_: JsValue| {
                tracing::info!("map loaded");
                report.emit(MapPanelEvent::Loaded);
                schedule_markers(slot.clone(), delay);
            })
        };

        let on_style_load = {
            let slot = slot.clone();
            Closure::<dyn FnMut(JsValue)>::new(move |_: JsValue| {
                tracing::debug!("map style loaded");
                schedule_markers(slot.clone(), delay);
            })
        };

        let on_error = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            let error = MapError::runtime(mapbox::error_event_message(&event));
            tracing::error!(%error, "mapbox error");
            report.emit(MapPanelEvent::Failed(error));
        });

        map.on("load", on_load.as_ref().unchecked_ref());
        map.on("style.load", on_style_load.as_ref().unchecked_ref());
        map.on("error", on_error.as_ref().unchecked_ref());

        Ok(Self {
            map,
            data,
            layer: MarkerLayer::default(),
            _events: vec![on_load, on_style_load, on_error],
        })
    }

    pub fn set_data(&mut self, users: Vec<User>, deeds: Vec<GoodDeed>) {
        self.data.users = users;
        self.data.deeds = deeds;
    }

    /// Replace all markers with the current users and deeds.
    ///
    /// Does nothing until the style has loaded; the load events call back in.
    pub fn place_markers(&mut self) {
        if !self.map.is_style_loaded() {
            return;
        }
        self.layer.clear();

        if let Err(error) = self.place_users().and_then(|()| self.place_deeds()) {
            tracing::error!(%error, "failed to place markers");
        }
        tracing::debug!(markers = self.layer.markers.len(), "markers placed");
    }

    fn place_users(&mut self) -> Result<(), MapError> {
        let document = document()?;
        for user in &self.data.users {
            let content = popup::user_content(&document, user).map_err(dom_error)?;
            let popup = Popup::with_content(&content)?;
            let marker = Marker::place(
                &self.map,
                [user.longitude, user.latitude],
                USER_MARKER_COLOR,
                USER_MARKER_SCALE,
                &popup,
            )?;
            self.layer.markers.push(marker);
        }
        Ok(())
    }

    fn place_deeds(&mut self) -> Result<(), MapError> {
        let document = document()?;
        for deed in &self.data.deeds {
            let (content, button) = popup::deed_content(&document, deed).map_err(dom_error)?;
            let popup = Popup::with_content(&content)?;

            let on_click = {
                let deed = deed.clone();
                let popup = popup.clone();
                let handler = self.data.on_deed_click.clone();
                Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
                    e.prevent_default();
                    e.stop_propagation();
                    popup.remove();
                    tracing::info!(deed_id = %deed.id, "help offered from map");
                    let callback = handler.borrow().clone();
                    callback.emit(deed.clone());
                })
            };
            button
                .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
                .map_err(dom_error)?;

            let marker = Marker::place(
                &self.map,
                deed.lng_lat(),
                deed.urgency.marker_color(),
                DEED_MARKER_SCALE,
                &popup,
            )?;
            self.layer.markers.push(marker);
            self.layer.listeners.push(on_click);
        }
        Ok(())
    }
}

impl Drop for MapSession {
    fn drop(&mut self) {
        self.layer.clear();
        self.map.remove();
    }
}

fn schedule_markers(slot: Weak<RefCell<Option<MapSession>>>, delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        let Some(slot) = slot.upgrade() else {
            return;
        };
        let Ok(mut guard) = slot.try_borrow_mut() else {
            return;
        };
        if let Some(session) = guard.as_mut() {
            session.place_markers();
        }
    })
    .forget();
}

fn document() -> Result<web_sys::Document, MapError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| MapError::Init("no document".to_string()))
}

fn dom_error(e: JsValue) -> MapError {
    MapError::Init(mapbox::js_message(&e).unwrap_or_else(|| "DOM error".to_string()))
}
