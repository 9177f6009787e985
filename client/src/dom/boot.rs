//! Page start-up: mounts every feature and runs the one-off initializers.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};

use crate::net::emailjs::EmailJsSettings;
use crate::state::overlay::Overlays;
use crate::util::particles::{PARTICLES_CONTAINER_ID, particles_config};

pub const YEAR_ID: &str = "year";
pub const LOADED_CLASS: &str = "loaded";
pub const LOADED_DELAY_MS: u32 = 500;
pub const SERVICE_WORKER_URL: &str = "/sw.js";

const PRELOAD_STYLES: &[&str] = &[
    "https://unpkg.com/boxicons@2.1.4/css/boxicons.min.css",
    "https://fonts.googleapis.com/css2?family=Poppins:wght@300;400;600;700&display=swap",
];

fn set_year() {
    if let Some(el) = super::by_id(YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

/// Start the particle background when the page has loaded `particles.js`.
fn start_particles() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(init) = js_sys::Reflect::get(&window, &JsValue::from_str("particlesJS")) else {
        return;
    };
    let Ok(init) = init.dyn_into::<js_sys::Function>() else {
        return;
    };
    let Ok(config) = js_sys::JSON::parse(&particles_config().to_string()) else {
        return;
    };
    if let Err(e) = init.call2(&JsValue::NULL, &JsValue::from_str(PARTICLES_CONTAINER_ID), &config) {
        log::warn!("particles init failed: {e:?}");
    }
}

fn preload_styles() {
    let Some(doc) = super::document() else {
        return;
    };
    let Some(head) = doc.head() else {
        return;
    };
    for url in PRELOAD_STYLES {
        let Ok(link) = doc.create_element("link") else {
            continue;
        };
        let _ = link.set_attribute("rel", "preload");
        let _ = link.set_attribute("as", "style");
        let _ = link.set_attribute("href", url);
        let _ = head.append_child(&link);
    }
}

fn mark_loaded() {
    Timeout::new(LOADED_DELAY_MS, || {
        if let Some(body) = super::document().and_then(|doc| doc.body()) {
            let _ = body.class_list().add_1(LOADED_CLASS);
        }
    })
    .forget();
}

fn register_service_worker() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let has_sw = js_sys::Reflect::has(&window.navigator(), &JsValue::from_str("serviceWorker"))
        .unwrap_or(false);
    if !has_sw {
        return;
    }
    let win = window.clone();
    super::on(&window, "load", move |_| {
        let promise = win.navigator().service_worker().register(SERVICE_WORKER_URL);
        wasm_bindgen_futures::spawn_local(async move {
            match wasm_bindgen_futures::JsFuture::from(promise).await {
                Ok(_) => log::info!("service worker registered"),
                Err(e) => log::info!("service worker registration failed: {e:?}"),
            }
        });
    });
}

/// Wire every feature to the page.
pub fn mount() {
    set_year();
    start_particles();
    log::info!("EmailJS config: {}", EmailJsSettings::from_document().presence_summary());

    super::theme::mount();
    if let Some(typing) = super::typing::mount() {
        typing.detach();
    }

    let overlays = Rc::new(RefCell::new(Overlays::new()));
    super::overlay::mount(&overlays);
    super::header::mount(&overlays);
    super::gallery::mount(&overlays);
    super::reveal::mount();
    super::contact::mount();
    super::images::mount();

    preload_styles();
    mark_loaded();
    register_service_worker();
}
