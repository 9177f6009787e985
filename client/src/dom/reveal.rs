//! Scroll reveal, active nav highlighting, and the one-shot skill and
//! counter animations.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::animate::run_text_tween;
use crate::state::nav::{ACTIVE_CLASS, NavLinks};
use crate::state::reveal::{
    INVIEW_CLASS, ROOT_MARGIN, Region, RevealEffect, RevealTracker, THRESHOLD, counter_plan,
    parse_float_attr, parse_int_attr, progress_plan,
};

const PROJECT_CARD_CLASS: &str = "project-card";

fn region_of(el: &Element) -> Region {
    let id = Some(el.id()).filter(|id| !id.is_empty());
    let project_card_index = if el.class_list().contains(PROJECT_CARD_CLASS) {
        el.parent_element()
            .and_then(|parent| super::children(&parent).iter().position(|c| c == el))
    } else {
        None
    };
    Region { id, project_card_index }
}

fn highlight_nav(links: &[Element], nav: &mut NavLinks, section_id: &str) {
    for (link, active) in links.iter().zip(nav.activate_section(section_id)) {
        super::set_class(link, ACTIVE_CLASS, active);
    }
}

fn animate_progress() {
    let bars = super::query_all(None, ".progress");
    let values: Vec<i64> = bars
        .iter()
        .map(|bar| parse_int_attr(bar.get_attribute("data-value").as_deref()))
        .collect();

    for (step, bar) in progress_plan(&values).into_iter().zip(bars) {
        Timeout::new(step.delay_ms, move || {
            if let Some(fill) = bar.query_selector("span").ok().flatten() {
                super::set_style(&fill, "width", &step.width);
            }
            let label = bar
                .parent_element()
                .and_then(|parent| parent.query_selector(".skill-percentage").ok().flatten());
            if let Some(label) = label {
                run_text_tween(label, step.label);
            }
        })
        .forget();
    }
}

fn animate_counters() {
    let counters = super::query_all(None, ".counter");
    let targets: Vec<f64> = counters
        .iter()
        .map(|c| parse_float_attr(c.get_attribute("data-count").as_deref()))
        .collect();

    for (step, counter) in counter_plan(&targets).into_iter().zip(counters) {
        Timeout::new(step.delay_ms, move || run_text_tween(counter, step.tween)).forget();
    }
}

fn apply(el: &Element, effect: RevealEffect, links: &[Element], nav: &mut NavLinks) {
    match effect {
        RevealEffect::MarkRevealed => {
            let _ = el.class_list().add_1(INVIEW_CLASS);
        }
        RevealEffect::ActivateNav(id) => highlight_nav(links, nav, &id),
        RevealEffect::AnimateProgress => animate_progress(),
        RevealEffect::AnimateCounters => animate_counters(),
        RevealEffect::StaggerCard { delay_ms } => {
            let card = el.clone();
            Timeout::new(delay_ms, move || {
                super::set_style(&card, "transform", "translateY(0)");
                super::set_style(&card, "opacity", "1");
            })
            .forget();
        }
    }
}

pub fn mount() {
    let targets = super::query_all(None, ".section, .animate-on-scroll");
    if targets.is_empty() {
        return;
    }

    let links = super::query_all(None, ".nav-link");
    let nav = RefCell::new(NavLinks::new(
        links.iter().map(|l| l.get_attribute("href").unwrap_or_default()),
    ));
    let tracker = RefCell::new(RevealTracker::new());

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let el = entry.target();
                let effects = tracker.borrow_mut().on_enter(&region_of(&el));
                let mut nav = nav.borrow_mut();
                for effect in effects {
                    apply(&el, effect, &links, &mut nav);
                }
            }
        },
    ));

    let options = IntersectionObserverInit::new();
    options.set_root_margin(ROOT_MARGIN);
    options.set_threshold(&JsValue::from_f64(THRESHOLD));
    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        log::warn!("IntersectionObserver unavailable; scroll reveal disabled");
        return;
    };
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
}
