//! Contact form bound to the submission flow.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, FormData, HtmlButtonElement, HtmlFormElement};

use crate::net::emailjs::{EmailJsSender, EmailJsSettings};
use crate::state::contact::{
    BUSY_LABEL, BannerKind, BannerSlot, FormView, IDLE_LABEL, RawFields, submit,
};

pub const FORM_ID: &str = "contact-form";
pub const SUCCESS_ID: &str = "form-success";
pub const ERROR_ID: &str = "form-error";
pub const SUBMIT_ID: &str = "submit-btn";

/// The page's contact form.
pub struct PageForm {
    form: HtmlFormElement,
    submit_btn: Option<HtmlButtonElement>,
    success: Option<Element>,
    error: Option<Element>,
    banners: Rc<RefCell<BannerSlot>>,
}

impl PageForm {
    fn find() -> Option<Self> {
        let form = super::by_id(FORM_ID)?.dyn_into::<HtmlFormElement>().ok()?;
        Some(Self {
            form,
            submit_btn: super::by_id(SUBMIT_ID).and_then(|b| b.dyn_into().ok()),
            success: super::by_id(SUCCESS_ID),
            error: super::by_id(ERROR_ID),
            banners: Rc::new(RefCell::new(BannerSlot::new())),
        })
    }

    fn banner(&self, kind: BannerKind) -> Option<&Element> {
        match kind {
            BannerKind::Success => self.success.as_ref(),
            BannerKind::Error => self.error.as_ref(),
        }
    }
}

impl FormView for PageForm {
    fn read_fields(&self) -> RawFields {
        let Ok(data) = FormData::new_with_form(&self.form) else {
            return RawFields::default();
        };
        let field = |name: &str| data.get(name).as_string().unwrap_or_default();
        RawFields {
            name: field("name"),
            email: field("email"),
            phone: field("phone"),
            subject: field("subject"),
            message: field("message"),
        }
    }

    fn set_busy(&self, busy: bool) {
        let Some(btn) = &self.submit_btn else {
            return;
        };
        btn.set_disabled(busy);
        if let Some(label) = btn.query_selector(".btn-text").ok().flatten() {
            label.set_text_content(Some(if busy { BUSY_LABEL } else { IDLE_LABEL }));
        }
        if let Some(icon) = btn.query_selector(".loading-icon").ok().flatten() {
            super::set_style(&icon, "display", if busy { "inline-block" } else { "none" });
        }
    }

    fn reset(&self) {
        self.form.reset();
    }

    fn show_banner(&self, kind: BannerKind, message: &str) {
        let Some(el) = self.banner(kind).cloned() else {
            return;
        };
        if let Some(other) = self.banner(kind.other()) {
            super::set_hidden(other, true);
        }

        // The banner is an icon followed by a text node.
        let text = el
            .query_selector("i")
            .ok()
            .flatten()
            .and_then(|icon| icon.next_sibling());
        if let Some(text) = text {
            text.set_text_content(Some(&format!(" {message}")));
        }
        super::set_hidden(&el, false);

        let token = self.banners.borrow_mut().show(kind);
        let banners = Rc::clone(&self.banners);
        Timeout::new(kind.hide_after_ms(), move || {
            if banners.borrow_mut().expire(token).is_some() {
                super::set_hidden(&el, true);
            }
        })
        .forget();
    }
}

fn timestamp() -> String {
    js_sys::Date::new_0()
        .to_locale_string("en-US", &JsValue::UNDEFINED)
        .into()
}

pub fn mount() {
    let Some(form) = PageForm::find() else {
        return;
    };
    let target = form.form.clone();
    let form = Rc::new(form);
    let sender = Rc::new(EmailJsSender::new(EmailJsSettings::from_document()));

    super::on(&target, "submit", move |event| {
        event.prevent_default();
        let form = Rc::clone(&form);
        let sender = Rc::clone(&sender);
        wasm_bindgen_futures::spawn_local(async move {
            // Outcomes are already shown on the form and logged.
            let _ = submit(form.as_ref(), sender.as_ref(), timestamp()).await;
        });
    });
}
