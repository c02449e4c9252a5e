// File: src/dom.rs
// Purpose: Headless page state and the presenter that writes to it

use pagekit_forms::{CounterDisplay, FieldId, FieldStatus, FormId, Presenter, SubmitPhase};
use serde::Serialize;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

/// Element id of the contact success notice
pub const SUCCESS_NOTICE_ID: &str = "successMessage";

/// An input or textarea
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub value: String,
    pub classes: BTreeSet<String>,
    /// Text of the sibling `.invalid-feedback` element
    pub feedback: String,
}

/// A form element and its submit button
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub classes: BTreeSet<String>,
    pub submit_disabled: bool,
    pub loading_visible: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CounterView {
    pub text: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImageView {
    pub src: Option<String>,
    pub lazy: bool,
}

/// Everything on the page the behavior layer touches
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dom {
    pub fields: BTreeMap<String, FieldView>,
    pub forms: BTreeMap<String, FormView>,
    pub success_notice_visible: bool,
    /// Last element scrolled into view
    pub scrolled_into_view: Option<String>,
    /// Failure notices shown to the user, oldest first
    pub alerts: Vec<String>,
    pub subscribed: bool,
    pub char_count: CounterView,
    pub navbar_scrolled: bool,
    pub active_link: Option<String>,
    pub menu_open: bool,
    pub scroll_y: f64,
    /// Elements that have faded in
    pub visible: BTreeSet<String>,
    pub images: BTreeMap<String, ImageView>,
}

impl Dom {
    pub fn field(&self, id: &str) -> Option<&FieldView> {
        self.fields.get(id)
    }

    pub fn form(&self, form: FormId) -> Option<&FormView> {
        self.forms.get(form.as_str())
    }

    pub fn field_has_class(&self, id: &str, class: &str) -> bool {
        self.field(id).is_some_and(|f| f.classes.contains(class))
    }

    fn field_mut(&mut self, id: FieldId) -> &mut FieldView {
        self.fields.entry(id.as_str().to_string()).or_default()
    }

    fn form_mut(&mut self, form: FormId) -> &mut FormView {
        self.forms.entry(form.as_str().to_string()).or_default()
    }
}

/// Shared handle to the page state
///
/// Each controller holds its own clone; all of them run on the one event loop
/// thread.
#[derive(Debug, Clone, Default)]
pub struct DomHandle(Rc<RefCell<Dom>>);

impl DomHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current page state
    pub fn snapshot(&self) -> Dom {
        self.0.borrow().clone()
    }

    pub fn read<R>(&self, f: impl FnOnce(&Dom) -> R) -> R {
        f(&self.0.borrow())
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut Dom) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }
}

impl Presenter for DomHandle {
    fn show_field_status(&mut self, field: FieldId, status: &FieldStatus) {
        self.update(|dom| {
            let view = dom.field_mut(field);
            view.classes.remove("is-valid");
            view.classes.remove("is-invalid");

            match status {
                FieldStatus::Valid => {
                    view.classes.insert("is-valid".to_string());
                    view.feedback.clear();
                }
                FieldStatus::Invalid(err) => {
                    view.classes.insert("is-invalid".to_string());
                    view.feedback = err.to_string();
                }
                FieldStatus::Unvalidated => view.feedback.clear(),
            }
        });
    }

    fn set_field_value(&mut self, field: FieldId, value: &str) {
        self.update(|dom| dom.field_mut(field).value = value.to_string());
    }

    fn set_form_attempted(&mut self, form: FormId, attempted: bool) {
        self.update(|dom| {
            let classes = &mut dom.form_mut(form).classes;
            if attempted {
                classes.insert("was-validated".to_string());
            } else {
                classes.remove("was-validated");
            }
        });
    }

    fn show_submit_phase(&mut self, form: FormId, phase: SubmitPhase) {
        let busy = phase == SubmitPhase::Submitting;
        self.update(|dom| {
            let view = dom.form_mut(form);
            view.submit_disabled = busy;
            view.loading_visible = busy;
        });
    }

    fn set_success_notice(&mut self, _form: FormId, visible: bool) {
        self.update(|dom| {
            dom.success_notice_visible = visible;
            if visible {
                dom.scrolled_into_view = Some(SUCCESS_NOTICE_ID.to_string());
            }
        });
    }

    fn show_failure_notice(&mut self, _form: FormId, message: &str) {
        self.update(|dom| dom.alerts.push(message.to_string()));
    }

    fn set_subscribed(&mut self, subscribed: bool) {
        self.update(|dom| dom.subscribed = subscribed);
    }

    fn show_counter(&mut self, display: &CounterDisplay) {
        self.update(|dom| {
            dom.char_count = CounterView {
                text: display.count.to_string(),
                color: display.color.clone(),
            };
        });
    }
}
