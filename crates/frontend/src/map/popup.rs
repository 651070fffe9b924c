//! DOM content of marker popups.
//!
//! Popups live outside the Yew tree, so their content is built with
//! `web_sys` directly. Text goes through `set_text_content`, never HTML.

use kindmap_types::{GoodDeed, User};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement};

fn element(document: &Document, tag: &str, class: &str) -> Result<Element, wasm_bindgen::JsValue> {
    let el = document.create_element(tag)?;
    el.set_class_name(class);
    Ok(el)
}

fn text(
    document: &Document,
    tag: &str,
    class: &str,
    content: &str,
) -> Result<Element, wasm_bindgen::JsValue> {
    let el = element(document, tag, class)?;
    el.set_text_content(Some(content));
    Ok(el)
}

pub fn karma_points_text(points: u32) -> String {
    format!("{points} karma points")
}

pub fn reward_text(reward: u32) -> String {
    format!("+{reward} karma")
}

/// Avatar, name and point total of a helper.
pub fn user_content(document: &Document, user: &User) -> Result<Element, wasm_bindgen::JsValue> {
    let root = element(document, "div", "popup popup-user")?;

    let avatar = element(document, "img", "popup-avatar")?;
    avatar.set_attribute("src", &user.avatar)?;
    avatar.set_attribute("alt", &user.name)?;
    root.append_child(&avatar)?;

    let name = text(document, "h3", "popup-title", &user.name)?;
    root.append_child(&name)?;
    let points = text(document, "p", "popup-meta", &karma_points_text(user.points))?;
    root.append_child(&points)?;
    Ok(root)
}

/// Title, description, reward and the "Help Out!" button of a good deed.
///
/// The button is returned separately so the caller can attach its handler.
pub fn deed_content(
    document: &Document,
    deed: &GoodDeed,
) -> Result<(Element, HtmlButtonElement), wasm_bindgen::JsValue> {
    let root = element(document, "div", "popup popup-deed")?;
    let title = text(document, "h3", "popup-title", &deed.title)?;
    root.append_child(&title)?;
    let description = text(document, "p", "popup-description", &deed.description)?;
    root.append_child(&description)?;

    let footer = element(document, "div", "popup-footer")?;
    let reward = text(document, "span", "popup-reward", &reward_text(deed.reward))?;
    footer.append_child(&reward)?;

    let button: HtmlButtonElement = text(document, "button", "good-deed-btn", "Help Out!")?
        .dyn_into()
        .map_err(wasm_bindgen::JsValue::from)?;
    button.set_type("button");
    button.set_attribute("data-deed-id", &deed.id)?;
    footer.append_child(&button)?;

    root.append_child(&footer)?;
    Ok((root, button))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_texts() {
        assert_eq!(karma_points_text(1250), "1250 karma points");
        assert_eq!(reward_text(25), "+25 karma");
    }
}
