//! Live-page bindings: geometry reads and the `PageChrome` implementation.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::chrome::PageChrome;
use crate::config::BODY_FADE_IN_DELAY_MS;
use crate::error::{UiError, UiResult};
use crate::scroll_state::{LayoutSnapshot, RevealKind, RevealProbe, SectionGeometry};

pub const REVEAL_KIND_ATTR: &str = "data-reveal";
pub const REVEAL_KEY_ATTR: &str = "data-reveal-key";

pub fn window() -> UiResult<Window> {
    web_sys::window().ok_or_else(|| UiError::ElementMissing("window".to_string()))
}

pub fn document() -> UiResult<Document> {
    window()?
        .document()
        .ok_or_else(|| UiError::ElementMissing("document".to_string()))
}

pub fn body() -> UiResult<HtmlElement> {
    document()?
        .body()
        .ok_or_else(|| UiError::ElementMissing("body".to_string()))
}

pub fn scroll_y(window: &Window) -> UiResult<f64> {
    Ok(window.scroll_y()?)
}

pub fn viewport_height(window: &Window) -> UiResult<f64> {
    window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| UiError::Js("innerHeight is not a number".to_string()))
}

fn html_elements(document: &Document, selector: &str) -> UiResult<Vec<HtmlElement>> {
    let nodes = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(node) = nodes.get(i) {
            match node.dyn_into::<HtmlElement>() {
                Ok(element) => elements.push(element),
                Err(_) => log::debug!("skipping non-html node in {}", selector),
            }
        }
    }
    Ok(elements)
}

/// `section[id]` boxes in document order.
pub fn read_sections(document: &Document) -> UiResult<Vec<SectionGeometry>> {
    Ok(html_elements(document, "section[id]")?
        .into_iter()
        .map(|section| {
            SectionGeometry::new(
                section.id(),
                f64::from(section.offset_top()),
                f64::from(section.offset_height()),
            )
        })
        .collect())
}

pub fn read_reveal_probes(document: &Document) -> UiResult<Vec<RevealProbe>> {
    let selector = format!("[{}]", REVEAL_KEY_ATTR);
    Ok(html_elements(document, &selector)?
        .into_iter()
        .filter_map(|element| reveal_probe(&element))
        .collect())
}

fn reveal_probe(element: &Element) -> Option<RevealProbe> {
    let key = element.get_attribute(REVEAL_KEY_ATTR)?;
    let kind = element
        .get_attribute(REVEAL_KIND_ATTR)
        .and_then(|value| RevealKind::from_attr(&value))
        .unwrap_or(RevealKind::Section);
    let rect = element.get_bounding_client_rect();
    Some(RevealProbe {
        key,
        kind,
        top: rect.top(),
        height: rect.height(),
    })
}

pub fn hero_height(document: &Document) -> Option<f64> {
    document
        .query_selector(".hero")
        .ok()
        .flatten()
        .and_then(|hero| hero.dyn_into::<HtmlElement>().ok())
        .map(|hero| f64::from(hero.offset_height()))
}

pub fn layout_snapshot() -> UiResult<LayoutSnapshot> {
    let window = window()?;
    let document = document()?;
    Ok(LayoutSnapshot {
        scroll_y: scroll_y(&window)?,
        viewport_height: viewport_height(&window)?,
        sections: read_sections(&document)?,
        probes: read_reveal_probes(&document)?,
    })
}

/// Fades the body in shortly after mount.
pub fn fade_in_body() -> UiResult<()> {
    let body = body()?;
    let style = body.style();
    style.set_property("opacity", "0")?;
    style.set_property("transition", "opacity 0.5s ease")?;
    Timeout::new(BODY_FADE_IN_DELAY_MS, move || {
        if let Err(e) = body.style().set_property("opacity", "1") {
            log::warn!("body fade-in failed: {:?}", e);
        }
    })
    .forget();
    Ok(())
}

fn set_body_class(class: &str, enabled: bool) -> UiResult<()> {
    let classes = body()?.class_list();
    if enabled {
        classes.add_1(class)?;
    } else {
        classes.remove_1(class)?;
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DomChrome;

impl PageChrome for DomChrome {
    fn set_scroll_locked(&self, locked: bool) -> UiResult<()> {
        let overflow = if locked { "hidden" } else { "auto" };
        body()?.style().set_property("overflow", overflow)?;
        Ok(())
    }

    fn set_dark_mode(&self, dark: bool) -> UiResult<()> {
        set_body_class("dark-mode", dark)
    }

    fn set_keyboard_nav(&self, enabled: bool) -> UiResult<()> {
        set_body_class("keyboard-nav", enabled)
    }

    fn scroll_to(&self, top: f64) -> UiResult<()> {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window()?.scroll_to_with_scroll_to_options(&options);
        Ok(())
    }
}
