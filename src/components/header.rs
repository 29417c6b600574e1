use std::rc::Rc;
use yew::prelude::*;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, MouseEvent,
};
use crate::tracking::{Sighting, TrackerAction, TrackerState, VISIBILITY_THRESHOLD};

/// A page section the header links to and highlights while it is in view.
#[derive(Clone, PartialEq)]
pub struct SectionRef {
    pub label: &'static str,
    pub href: &'static str,
    pub node: NodeRef,
}

#[derive(Properties, PartialEq)]
pub struct SegmentHeaderProps {
    pub sections: Rc<Vec<SectionRef>>,
}

type Dispatcher = UseReducerDispatcher<TrackerState>;

pub fn is_active_link(active: Option<&str>, label: &str) -> bool {
    active == Some(label)
}

pub fn scrolled_class(scrolled: bool) -> Option<&'static str> {
    scrolled.then(|| "scrolled")
}

pub fn menu_class(menu_open: bool) -> Option<&'static str> {
    menu_open.then(|| "open")
}

pub fn toggle_label(menu_open: bool) -> &'static str {
    if menu_open {
        "Close menu"
    } else {
        "Open menu"
    }
}

// Subscribes every mounted section element to one observer. Returns the
// teardown that unsubscribes them again.
fn observe_sections(
    sections: Rc<Vec<SectionRef>>,
    dispatcher: Dispatcher,
) -> Box<dyn FnOnce()> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new({
        let sections = sections.clone();
        let dispatcher = dispatcher.clone();
        move |entries: Array, _observer: IntersectionObserver| {
            let sightings: Vec<Sighting> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = entry.target();
                    let index = sections.iter().position(|section| {
                        section.node.cast::<Element>().as_ref() == Some(&target)
                    })?;
                    let sighting = Sighting {
                        index,
                        ratio: entry.intersection_ratio(),
                        is_intersecting: entry.is_intersecting(),
                    };
                    tracing::debug!(
                        section = sections[index].label,
                        ratio = sighting.ratio,
                        intersecting = sighting.is_intersecting,
                        "section intersection"
                    );
                    Some(sighting)
                })
                .collect();
            dispatcher.dispatch(TrackerAction::Intersections(sightings));
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(err) => {
            warn!("Section observer unavailable: {:?}", err);
            return Box::new(|| ());
        }
    };

    // Sections that are not in the DOM yet are skipped.
    let observed: Vec<(&'static str, Element)> = sections
        .iter()
        .filter_map(|section| {
            section
                .node
                .cast::<Element>()
                .map(|element| (section.label, element))
        })
        .collect();

    dispatcher.dispatch(TrackerAction::VisibilityAttached(
        sections.iter().map(|section| section.label).collect(),
    ));
    for (label, element) in &observed {
        observer.observe(element);
        tracing::debug!(section = *label, "observing section");
    }

    Box::new(move || {
        dispatcher.dispatch(TrackerAction::VisibilityDetached);
        for (label, element) in &observed {
            observer.unobserve(element);
            tracing::debug!(section = *label, "stopped observing section");
        }
        observer.disconnect();
        drop(callback);
    })
}

fn listen_scroll(dispatcher: Dispatcher) -> Box<dyn FnOnce()> {
    let Some(window) = web_sys::window() else {
        warn!("No window to listen for scroll on");
        return Box::new(|| ());
    };

    let callback = Closure::<dyn Fn()>::new({
        let dispatcher = dispatcher.clone();
        move || {
            if let Some(offset) = web_sys::window().and_then(|win| win.scroll_y().ok()) {
                dispatcher.dispatch(TrackerAction::Scrolled(offset));
            }
        }
    });

    if let Err(err) =
        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
    {
        warn!("Failed to attach scroll listener: {:?}", err);
        return Box::new(|| ());
    }
    dispatcher.dispatch(TrackerAction::ScrollAttached);

    // Initial read so a restored scroll position shows up before any scroll.
    if let Ok(offset) = window.scroll_y() {
        dispatcher.dispatch(TrackerAction::Scrolled(offset));
    }

    Box::new(move || {
        dispatcher.dispatch(TrackerAction::ScrollDetached);
        if let Err(err) =
            window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        {
            warn!("Failed to detach scroll listener: {:?}", err);
        }
        drop(callback);
    })
}

#[function_component(AcmeLogo)]
pub fn acme_logo() -> Html {
    html! {
        <svg class="brand-logo" fill="none" height="36" viewBox="0 0 32 32" width="36">
            <path
                clip-rule="evenodd"
                d="M17.6482 10.1305L15.8785 7.02583L7.02979 22.5499H10.5278L17.6482 10.1305ZM19.8798 14.0457L18.11 17.1983L19.394 19.4511H16.8453L15.1056 22.5499H24.7272L19.8798 14.0457Z"
                fill="currentColor"
                fill-rule="evenodd"
            />
        </svg>
    }
}

#[function_component(SegmentHeader)]
pub fn segment_header(props: &SegmentHeaderProps) -> Html {
    let tracker = use_reducer_eq(TrackerState::default);
    let menu_open = use_state(|| false);

    {
        let dispatcher = tracker.dispatcher();
        use_effect_with_deps(
            move |sections: &Rc<Vec<SectionRef>>| {
                let teardown = observe_sections(sections.clone(), dispatcher);
                move || teardown()
            },
            props.sections.clone(),
        );
    }

    {
        let dispatcher = tracker.dispatcher();
        use_effect_with_deps(
            move |_| {
                let teardown = listen_scroll(dispatcher);
                move || teardown()
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let active = tracker.active_label();
    let link_class = |base: &'static str, label: &str| {
        classes!(base, is_active_link(active, label).then(|| "active"))
    };

    html! {
        <>
            <div class="header-placeholder"></div>
            <nav class={classes!("fixed-header", scrolled_class(tracker.scrolled()))}>
                <div class="header-content">
                    <a href="/" class="header-brand">
                        <AcmeLogo />
                        <p class="brand-name">{"BiRefNet"}</p>
                    </a>

                    <div class="header-links">
                        {
                            props.sections.iter().map(|section| html! {
                                <a
                                    key={section.label}
                                    href={section.href}
                                    class={link_class("header-link", section.label)}
                                >
                                    {section.label}
                                </a>
                            }).collect::<Html>()
                        }
                    </div>

                    <div class="header-actions">
                        <a href="#footer" class="contact-cta">{"Contact us"}</a>
                        <button
                            class="burger-menu"
                            aria-label={toggle_label(*menu_open)}
                            aria-expanded={menu_open.to_string()}
                            onclick={toggle_menu}
                        >
                            <span></span>
                            <span></span>
                            <span></span>
                        </button>
                    </div>
                </div>

                <div class={classes!("header-menu", menu_class(*menu_open))}>
                    {
                        props.sections.iter().map(|section| html! {
                            <a
                                key={section.label}
                                href={section.href}
                                class={link_class("header-menu-item", section.label)}
                                onclick={close_menu.clone()}
                            >
                                {section.label}
                            </a>
                        }).collect::<Html>()
                    }
                </div>
            </nav>
            <style>
                {r#"
                .header-placeholder {
                    height: 64px;
                }
                .fixed-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 100;
                    background: rgba(255, 255, 255, 0.7);
                    backdrop-filter: blur(8px);
                    border-bottom: 1px solid rgba(0, 0, 0, 0.08);
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .fixed-header.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.1);
                }
                .header-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    max-width: 1280px;
                    height: 64px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .header-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #000;
                    text-decoration: none;
                }
                .brand-name {
                    font-weight: 700;
                    margin: 0;
                }
                .header-links {
                    display: flex;
                    flex-grow: 1;
                    justify-content: center;
                    gap: 1rem;
                }
                .header-link {
                    font-weight: 700;
                    color: #11181c;
                    padding: 0.5rem 0.75rem;
                    border-radius: 6px;
                    text-decoration: none;
                    transition: all 0.3s ease-in-out;
                }
                .header-link:hover {
                    background: #000;
                    color: #fff;
                    box-shadow: 0 8px 16px rgba(0, 0, 0, 0.2);
                }
                .header-link.active,
                .header-menu-item.active {
                    color: #f5a524;
                }
                .header-actions {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .contact-cta {
                    background: linear-gradient(to right, #a855f7, #ec4899, #ef4444);
                    color: #fff;
                    padding: 0.375rem 1.25rem;
                    border-radius: 6px;
                    white-space: nowrap;
                    text-decoration: none;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    transition: all 0.3s ease-in-out;
                }
                .contact-cta:hover {
                    transform: scale(1.05);
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #11181c;
                }
                .header-menu {
                    display: none;
                }
                @media (max-width: 640px) {
                    .header-links {
                        display: none;
                    }
                    .burger-menu {
                        display: flex;
                    }
                    .header-menu.open {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1.5rem;
                        height: calc(100vh - 64px);
                        background: rgba(255, 255, 255, 0.95);
                    }
                    .header-menu-item {
                        font-size: 1.25rem;
                        color: #11181c;
                        text-decoration: none;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_matching_label_is_highlighted() {
        assert!(is_active_link(Some("Demo"), "Demo"));
        assert!(!is_active_link(Some("Demo"), "Contrast"));
        assert!(!is_active_link(None, "Demo"));
    }

    #[test]
    fn scrolled_class_only_past_threshold() {
        assert_eq!(scrolled_class(false), None);
        assert_eq!(scrolled_class(true), Some("scrolled"));
    }

    #[test]
    fn menu_panel_opens_with_flag() {
        assert_eq!(menu_class(false), None);
        assert_eq!(menu_class(true), Some("open"));
    }

    #[test]
    fn toggle_label_describes_next_action() {
        assert_eq!(toggle_label(false), "Open menu");
        assert_eq!(toggle_label(true), "Close menu");
    }
}
