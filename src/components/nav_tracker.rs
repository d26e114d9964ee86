//! Feeds router locations, browser traversal and input gestures into
//! [`NavState`]. Renders nothing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once inside the `<Router>`. Window listeners are installed only in
//! the browser build and removed when the component is disposed.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::nav::NavState;

#[component]
pub fn NavTracker() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let location = use_location();

    Effect::new(move || {
        let path = location.pathname.get();
        nav.try_update(|n| n.route_changed(&path));
    });

    #[cfg(feature = "csr")]
    listeners::install(nav);
}

#[cfg(feature = "csr")]
mod listeners {
    use leptos::ev;
    use leptos::prelude::*;
    use navigation::gesture::{MouseButton, Point};
    use navigation::shortcut::{self, Modifiers};
    use wasm_bindgen::JsCast;

    use crate::state::nav::{self, NavState};
    use crate::util::browser::now_ms;

    pub(super) fn install(nav: RwSignal<NavState>) {
        let popstate = window_event_listener(ev::popstate, move |_| {
            nav.try_update(NavState::mark_traversal);
        });

        let keydown = window_event_listener(ev::keydown, move |e: web_sys::KeyboardEvent| {
            let modifiers = Modifiers { shift: e.shift_key(), ctrl: e.ctrl_key(), alt: e.alt_key(), meta: e.meta_key() };
            if let Some(direction) = shortcut::resolve(&e.key(), modifiers, focus_is_editable()) {
                e.prevent_default();
                nav::go(nav, direction);
            }
        });

        let touchstart = window_event_listener(ev::touchstart, move |e: web_sys::TouchEvent| {
            let points = touch_points(&e.touches());
            nav.try_update(|n| n.swipe.touch_start(&points, now_ms()));
        });

        let touchend = window_event_listener(ev::touchend, move |e: web_sys::TouchEvent| {
            let Some(end) = touch_points(&e.changed_touches()).first().copied() else {
                return;
            };
            if let Some(direction) = nav.try_update(|n| n.swipe.touch_end(end, now_ms())).flatten() {
                nav::go(nav, direction);
            }
        });

        let mousedown = window_event_listener(ev::mousedown, move |e: web_sys::MouseEvent| {
            let Some(button) = MouseButton::from_dom(e.button()) else {
                return;
            };
            if button == MouseButton::Middle {
                // Suppress autoscroll so the drag reads as a gesture.
                e.prevent_default();
            }
            nav.try_update(|n| n.swipe.mouse_down(button, f64::from(e.client_x())));
        });

        let mouseup = window_event_listener(ev::mouseup, move |e: web_sys::MouseEvent| {
            let Some(button) = MouseButton::from_dom(e.button()) else {
                return;
            };
            if let Some(direction) = nav.try_update(|n| n.swipe.mouse_up(button, f64::from(e.client_x()))).flatten() {
                nav::go(nav, direction);
            }
        });

        on_cleanup(move || {
            popstate.remove();
            keydown.remove();
            touchstart.remove();
            touchend.remove();
            mousedown.remove();
            mouseup.remove();
        });
    }

    fn touch_points(list: &web_sys::TouchList) -> Vec<Point> {
        (0..list.length())
            .filter_map(|i| list.get(i))
            .map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y())))
            .collect()
    }

    fn focus_is_editable() -> bool {
        let Some(active) = document().active_element() else {
            return false;
        };
        let content_editable = active.dyn_ref::<web_sys::HtmlElement>().is_some_and(web_sys::HtmlElement::is_content_editable);
        shortcut::is_editable_tag(&active.tag_name(), content_editable)
    }
}
