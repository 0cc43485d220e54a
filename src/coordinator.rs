//! Window listeners for the landing page.
//!
//! Built once when the page mounts; dropping it detaches every listener and
//! cancels any pending debounced recomputation.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Window};
use yew::functional::UseReducerDispatcher;

use crate::chrome::PageChrome;
use crate::config::SCROLL_DEBOUNCE_MS;
use crate::debounce::{Debouncer, GlooTimer};
use crate::dom::{self, DomChrome};
use crate::error::UiResult;
use crate::scroll_state::{ScrollAction, ScrollUIState};
use crate::theme::keyboard_nav_after_key;

pub struct ScrollCoordinator {
    window: Window,
    on_scroll: Closure<dyn FnMut()>,
    on_keydown: Closure<dyn FnMut(KeyboardEvent)>,
    on_mousedown: Closure<dyn FnMut()>,
}

fn dispatch_layout(dispatcher: &UseReducerDispatcher<ScrollUIState>) {
    match dom::layout_snapshot() {
        Ok(snapshot) => dispatcher.dispatch(ScrollAction::Layout(snapshot)),
        Err(e) => log::debug!("layout pass skipped: {}", e),
    }
}

impl ScrollCoordinator {
    pub fn attach(dispatcher: UseReducerDispatcher<ScrollUIState>) -> UiResult<Self> {
        let window = dom::window()?;

        let on_scroll = {
            let layout_dispatcher = dispatcher.clone();
            let mut debouncer = Debouncer::new(GlooTimer, SCROLL_DEBOUNCE_MS, move || {
                dispatch_layout(&layout_dispatcher);
            });
            let window = window.clone();
            Closure::<dyn FnMut()>::new(move || {
                if let Ok(scroll_y) = dom::scroll_y(&window) {
                    let hero_height = dom::document().ok().and_then(|d| dom::hero_height(&d));
                    dispatcher.dispatch(ScrollAction::Scrolled { scroll_y, hero_height });
                }
                debouncer.trigger();
            })
        };

        let keyboard_nav = Rc::new(Cell::new(false));

        let on_keydown = {
            let keyboard_nav = keyboard_nav.clone();
            Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                let enabled = keyboard_nav_after_key(&e.key(), keyboard_nav.get());
                if enabled != keyboard_nav.get() {
                    keyboard_nav.set(enabled);
                    if let Err(err) = DomChrome.set_keyboard_nav(enabled) {
                        log::warn!("keyboard-nav toggle failed: {}", err);
                    }
                }
            })
        };

        let on_mousedown = Closure::<dyn FnMut()>::new(move || {
            if keyboard_nav.replace(false) {
                if let Err(e) = DomChrome.set_keyboard_nav(false) {
                    log::warn!("keyboard-nav toggle failed: {}", e);
                }
            }
        });

        window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
        let document = dom::document()?;
        document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
        document.add_event_listener_with_callback("mousedown", on_mousedown.as_ref().unchecked_ref())?;

        log::debug!("scroll coordinator attached");
        Ok(Self {
            window,
            on_scroll,
            on_keydown,
            on_mousedown,
        })
    }

    /// Page-load pass: fade the body in and reveal whatever is already visible.
    pub fn initial_pass(&self, dispatcher: &UseReducerDispatcher<ScrollUIState>) {
        if let Err(e) = dom::fade_in_body() {
            log::debug!("body fade-in skipped: {}", e);
        }
        if let Ok(scroll_y) = dom::scroll_y(&self.window) {
            let hero_height = dom::document().ok().and_then(|d| dom::hero_height(&d));
            dispatcher.dispatch(ScrollAction::Scrolled { scroll_y, hero_height });
        }
        dispatch_layout(dispatcher);
    }
}

impl Drop for ScrollCoordinator {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
        if let Some(document) = self.window.document() {
            let _ = document
                .remove_event_listener_with_callback("keydown", self.on_keydown.as_ref().unchecked_ref());
            let _ = document
                .remove_event_listener_with_callback("mousedown", self.on_mousedown.as_ref().unchecked_ref());
        }
        log::debug!("scroll coordinator detached");
    }
}
