// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact form. Sending is simulated; see [`ContactForm`].

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_core::contact::{ContactForm, ContactPhase, Field};
use folio_core::theme::ThemeMode;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast as _;
use web_sys::{HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use super::{Mounted, reveal};
use crate::context::Ctx;
use crate::dom;
use crate::error::SiteResult;

const INTRO: &str = "Interested in working together? Have a question about one of my projects? \
                     I'd love to hear from you! Fill out the form below and I'll get back to you \
                     as soon as possible.";

const FIELD_CSS: &str = "width: 100%; box-sizing: border-box; border-radius: 8px; padding: 12px; \
                         border: 1px solid; font: inherit;";

fn label_for(field: Field) -> &'static str {
    match field {
        Field::Name => "Your Name",
        Field::Email => "Your Email",
        Field::Message => "Your Message",
    }
}

enum Input {
    Line(HtmlInputElement),
    Area(HtmlTextAreaElement),
}

impl Input {
    fn build(doc: &web_sys::Document, field: Field) -> SiteResult<Self> {
        let input = match field {
            Field::Name | Field::Email => {
                let el: HtmlInputElement = doc.create_element("input")?.unchecked_into();
                el.set_type(if field == Field::Email { "email" } else { "text" });
                Self::Line(el)
            }
            Field::Message => {
                let el: HtmlTextAreaElement = doc.create_element("textarea")?.unchecked_into();
                el.set_rows(6);
                Self::Area(el)
            }
        };
        let el = input.element();
        el.set_id(field.name());
        el.set_attribute("name", field.name())?;
        el.set_attribute("placeholder", field.placeholder())?;
        el.set_attribute("required", "")?;
        dom::style(el, FIELD_CSS)?;
        Ok(input)
    }

    fn element(&self) -> &HtmlElement {
        match self {
            Self::Line(el) => el,
            Self::Area(el) => el,
        }
    }

    fn value(&self) -> String {
        match self {
            Self::Line(el) => el.value(),
            Self::Area(el) => el.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            Self::Line(el) => el.set_value(value),
            Self::Area(el) => el.set_value(value),
        }
    }
}

struct Contact {
    form: RefCell<ContactForm>,
    timer: RefCell<Option<Timeout>>,
    panel: HtmlElement,
    sent: HtmlElement,
    inputs: Vec<(Field, Input)>,
    button: HtmlButtonElement,
}

impl Contact {
    fn render(&self) {
        let form = self.form.borrow();
        let phase = form.phase();
        let submitted = matches!(phase, ContactPhase::Submitted { .. });
        dom::set_css(&self.panel, "display", if submitted { "none" } else { "block" });
        dom::set_css(&self.sent, "display", if submitted { "block" } else { "none" });

        let submitting = matches!(phase, ContactPhase::Submitting { .. });
        self.button.set_disabled(submitting);
        self.button.set_text_content(Some(if submitting {
            "Sending Message..."
        } else {
            "Send Message"
        }));
        dom::set_css(&self.button, "opacity", if submitting { "0.7" } else { "1" });

        for (field, input) in &self.inputs {
            let value = form.get(*field);
            if input.value() != value {
                input.set_value(value);
            }
        }
    }

    /// Arms a timer for the form's next deadline, replacing any pending one.
    fn schedule(self: &Rc<Self>) {
        let deadline = self.form.borrow().next_deadline();
        let timeout = deadline.map(|at| {
            let delay = at.saturating_duration_since(folio_web::now());
            let this: Weak<Self> = Rc::downgrade(self);
            Timeout::new(delay.as_timer_millis(), move || {
                let Some(this) = this.upgrade() else {
                    return;
                };
                if this.form.borrow_mut().poll(folio_web::now()) {
                    this.render();
                }
                this.schedule();
            })
        });
        *self.timer.borrow_mut() = timeout;
    }
}

/// Builds the contact section.
pub(crate) fn mount(ctx: &Ctx) -> SiteResult<Mounted> {
    let doc = &ctx.document;
    let root = dom::section(doc, "contact")?;
    let header = dom::styled(doc, "div", "text-align: center; margin-bottom: 64px;", None)?;
    let heading = dom::heading(doc, "h2", "Get In Touch")?;
    let intro = dom::styled(doc, "p", "max-width: 640px; margin: 0 auto;", Some(INTRO))?;
    dom::append_all(&header, &[&heading, &intro])?;

    let body = dom::styled(doc, "div", "max-width: 768px; margin: 0 auto;", None)?;
    let panel = dom::styled(
        doc,
        "form",
        "border-radius: 16px; padding: 40px; border: 1px solid; \
         box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1);",
        None,
    )?;
    let grid = dom::styled(
        doc,
        "div",
        "display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); \
         gap: 24px; margin-bottom: 24px;",
        None,
    )?;
    let mut inputs = Vec::with_capacity(Field::ALL.len());
    let mut labels = Vec::with_capacity(Field::ALL.len());
    for field in Field::ALL {
        let wrap = dom::element(doc, "div")?;
        let label = dom::styled(
            doc,
            "label",
            "display: block; margin-bottom: 8px; font-size: 0.875rem; font-weight: 500;",
            Some(label_for(field)),
        )?;
        label.set_attribute("for", field.name())?;
        let input = Input::build(doc, field)?;
        dom::append_all(&wrap, &[&label, input.element()])?;
        if field == Field::Message {
            dom::set_css(&wrap, "margin-bottom", "24px");
            panel.append_child(&grid)?;
            panel.append_child(&wrap)?;
        } else {
            grid.append_child(&wrap)?;
        }
        labels.push(label);
        inputs.push((field, input));
    }
    let button: HtmlButtonElement = doc.create_element("button")?.unchecked_into();
    button.set_type("submit");
    dom::style(
        &button,
        "width: 100%; padding: 12px 24px; border: none; border-radius: 8px; cursor: pointer; \
         color: #ffffff; font-weight: 500; font-size: 1rem; \
         background: linear-gradient(90deg, #4f46e5, #9333ea);",
    )?;
    let privacy = dom::styled(
        doc,
        "p",
        "margin-top: 16px; font-size: 0.875rem; text-align: center; opacity: 0.6;",
        Some("I'll never share your email with anyone else."),
    )?;
    dom::append_all(&panel, &[&button, &privacy])?;

    let sent = dom::styled(
        doc,
        "div",
        "display: none; text-align: center; border-radius: 16px; padding: 40px; \
         border: 1px solid #c7d2fe; background: linear-gradient(90deg, #eef2ff, #faf5ff); color: #111827;",
        None,
    )?;
    let check = dom::styled(doc, "div", "font-size: 3rem; color: #22c55e;", Some("\u{2713}"))?;
    let sent_title = dom::styled(doc, "h3", "font-size: 1.5rem; margin: 0 0 8px;", Some("Message Sent!"))?;
    let sent_body = dom::styled(
        doc,
        "p",
        "color: #374151; margin: 0;",
        Some("Thank you for your message. I'll get back to you soon!"),
    )?;
    dom::append_all(&sent, &[&check, &sent_title, &sent_body])?;
    dom::append_all(&body, &[&panel, &sent])?;
    dom::append_all(&root, &[&header, &body])?;

    let contact = Rc::new(Contact {
        form: RefCell::new(ContactForm::default()),
        timer: RefCell::new(None),
        panel: panel.clone(),
        sent,
        inputs,
        button,
    });
    contact.render();

    let mut mounted = Mounted::new(root);
    for (index, (field, input)) in contact.inputs.iter().enumerate() {
        let field = *field;
        let this = Rc::downgrade(&contact);
        mounted.keep(EventListener::new(input.element(), "input", move |_| {
            let Some(this) = this.upgrade() else {
                return;
            };
            let value = this.inputs[index].1.value();
            this.form.borrow_mut().set(field, &value);
        }));
    }
    {
        let this = Rc::downgrade(&contact);
        let options = EventListenerOptions::enable_prevent_default();
        mounted.keep(EventListener::new_with_options(&panel, "submit", options, move |event| {
            event.prevent_default();
            let Some(this) = this.upgrade() else {
                return;
            };
            if this.form.borrow_mut().submit(folio_web::now()) {
                this.render();
                this.schedule();
            }
        }));
    }

    let paint = {
        let panel = panel.clone();
        let intro = intro.clone();
        let contact = Rc::downgrade(&contact);
        move |mode: ThemeMode| {
            dom::set_css(&intro, "color", mode.muted());
            dom::set_css(&panel, "background-color", mode.surface());
            dom::set_css(&panel, "border-color", mode.border());
            for label in &labels {
                dom::set_css(label, "color", mode.muted());
            }
            if let Some(contact) = contact.upgrade() {
                for (_, input) in &contact.inputs {
                    let el = input.element();
                    dom::set_css(el, "background-color", mode.background());
                    dom::set_css(el, "color", mode.foreground());
                    dom::set_css(el, "border-color", mode.border());
                }
            }
        }
    };
    paint(ctx.mode());
    mounted.keep(ctx.on_theme(paint));
    mounted.keep(reveal(&header, "translateY(20px)")?);
    mounted.keep(contact);
    Ok(mounted)
}
