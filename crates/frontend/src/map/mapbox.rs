//! Bindings to the Mapbox GL JS global loaded by `index.html`.

use js_sys::{Function, Reflect};
use kindmap_types::{AccessToken, MapError};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl)]
    pub type Map;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, catch)]
    fn new(options: &JsValue) -> Result<Map, JsValue>;

    #[wasm_bindgen(method)]
    pub fn on(this: &Map, event: &str, listener: &Function);

    #[wasm_bindgen(method, js_name = addControl)]
    pub fn add_control(this: &Map, control: &NavigationControl, position: &str);

    #[wasm_bindgen(method, js_name = isStyleLoaded)]
    pub fn is_style_loaded(this: &Map) -> bool;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Map);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl)]
    pub type NavigationControl;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl)]
    pub fn new() -> NavigationControl;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl)]
    pub type Marker;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl)]
    fn new(options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = setLngLat)]
    fn set_lng_lat(this: &Marker, lng_lat: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = setPopup)]
    fn set_popup(this: &Marker, popup: &Popup) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Marker, map: &Map) -> Marker;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Marker);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl)]
    #[derive(Clone)]
    pub type Popup;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl)]
    fn new(options: &JsValue) -> Popup;

    #[wasm_bindgen(method, js_name = setDOMContent)]
    fn set_dom_content(this: &Popup, content: &web_sys::Node) -> Popup;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Popup);
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions<'a> {
    style: &'a str,
    center: [f64; 2],
    zoom: f64,
    attribution_control: bool,
    preserve_drawing_buffer: bool,
}

#[derive(Serialize)]
struct MarkerOptions<'a> {
    color: &'a str,
    scale: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PopupOptions {
    offset: u32,
    close_button: bool,
    close_on_click: bool,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, MapError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| MapError::Init(e.to_string()))
}

/// Best-effort message out of a thrown JS value.
pub fn js_message(value: &JsValue) -> Option<String> {
    if let Some(s) = value.as_string() {
        return Some(s);
    }
    Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
}

/// Message carried by a Mapbox `error` event (`event.error.message`).
pub fn error_event_message(event: &JsValue) -> Option<String> {
    Reflect::get(event, &JsValue::from_str("error"))
        .ok()
        .filter(|e| !e.is_undefined() && !e.is_null())
        .and_then(|e| js_message(&e))
}

fn library() -> Result<JsValue, MapError> {
    let lib = Reflect::get(&js_sys::global(), &JsValue::from_str("mapboxgl"))
        .map_err(|_| MapError::LibraryMissing)?;
    if lib.is_undefined() || lib.is_null() {
        return Err(MapError::LibraryMissing);
    }
    Ok(lib)
}

/// Set `mapboxgl.accessToken`.
pub fn set_access_token(token: &AccessToken) -> Result<(), MapError> {
    let lib = library()?;
    Reflect::set(
        &lib,
        &JsValue::from_str("accessToken"),
        &JsValue::from_str(token.as_str()),
    )
    .map_err(|e| MapError::Init(js_message(&e).unwrap_or_else(|| "Unknown error".into())))?;
    Ok(())
}

/// Add the Mapbox stylesheet to `<head>` unless the page already links it.
pub fn ensure_stylesheet(url: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Ok(Some(_)) = document.query_selector("link[href*=\"mapbox-gl.css\"]") {
        return;
    }
    let Ok(link) = document.create_element("link") else {
        return;
    };
    let _ = link.set_attribute("rel", "stylesheet");
    let _ = link.set_attribute("href", url);
    if let Some(head) = document.head() {
        let _ = head.append_child(&link);
        tracing::debug!(url, "injected mapbox stylesheet");
    }
}

impl Map {
    /// Construct a map inside `container`.
    pub fn create(
        container: &web_sys::HtmlElement,
        style: &str,
        center: [f64; 2],
        zoom: f64,
    ) -> Result<Map, MapError> {
        library()?;
        let options = to_js(&MapOptions {
            style,
            center,
            zoom,
            attribution_control: false,
            preserve_drawing_buffer: true,
        })?;
        Reflect::set(&options, &JsValue::from_str("container"), container)
            .map_err(|e| MapError::Init(js_message(&e).unwrap_or_default()))?;

        Map::new(&options).map_err(|e| {
            MapError::Init(js_message(&e).unwrap_or_else(|| "Unknown error".to_string()))
        })
    }
}

impl Marker {
    /// Create a coloured marker at `[lng, lat]` with a popup and add it to `map`.
    pub fn place(
        map: &Map,
        lng_lat: [f64; 2],
        color: &str,
        scale: f64,
        popup: &Popup,
    ) -> Result<Marker, MapError> {
        let options = to_js(&MarkerOptions { color, scale })?;
        let position = to_js(&lng_lat)?;
        Ok(Marker::new(&options)
            .set_lng_lat(&position)
            .set_popup(popup)
            .add_to(map))
    }
}

impl Popup {
    /// Popup with a close button that stays open on map clicks.
    pub fn with_content(content: &web_sys::Node) -> Result<Popup, MapError> {
        let options = to_js(&PopupOptions {
            offset: 25,
            close_button: true,
            close_on_click: false,
        })?;
        Ok(Popup::new(&options).set_dom_content(content))
    }
}
