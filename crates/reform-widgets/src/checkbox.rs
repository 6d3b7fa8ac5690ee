use reform_core::{BooleanField, FieldBinder, FieldBinding, FormStore};

use crate::chrome::input_error;
use crate::variant;
use crate::view::{Control, FieldView, LabelView, Widget};
use crate::WidgetResult;

/// Checkbox with a label to its right and optional helper text below.
#[derive(Clone)]
pub struct FormCheckbox {
    field: BooleanField,
    pub label: String,
    pub description: Option<String>,
}

impl FormCheckbox {
    pub fn new(field: BooleanField, label: impl Into<String>) -> Self {
        Self {
            field,
            label: label.into(),
            description: None,
        }
    }

    pub fn from_binding(binding: &FieldBinding, label: impl Into<String>) -> WidgetResult<Self> {
        Ok(Self::new(variant::boolean(binding)?, label))
    }

    pub fn for_field<S>(binder: &FieldBinder<S>, name: &str, label: impl Into<String>) -> WidgetResult<Self>
    where
        S: FormStore + Clone + 'static,
    {
        Self::from_binding(&*variant::lookup(binder, name)?, label)
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn checked(&self) -> bool {
        self.field.checked
    }

    pub fn set_checked(&self, checked: bool) {
        self.field.on_boolean_change(checked);
    }

    pub fn toggle(&self) {
        self.set_checked(!self.field.checked);
    }
}

impl Widget for FormCheckbox {
    fn view(&self) -> FieldView {
        let meta = &self.field.meta;
        FieldView {
            label: Some(LabelView {
                text: self.label.clone(),
                html_for: meta.id.clone(),
                visually_hidden: false,
            }),
            control: Control::Checkbox {
                id: meta.id.clone(),
                checked: self.field.checked,
            },
            description: self.description.clone(),
            error: input_error(meta.error.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reform_core::{FieldValue, Form, FormEvent};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_toggle_writes_once() {
        let form = Form::new([("agreedToTerms", false)]);
        let writes = Rc::new(Cell::new(0));
        form.subscribe({
            let writes = writes.clone();
            move |e| {
                if matches!(e, FormEvent::ValueChanged { .. }) {
                    writes.set(writes.get() + 1);
                }
            }
        });
        let binder = FieldBinder::new(form.clone());

        let checkbox = FormCheckbox::for_field(&binder, "agreedToTerms", "I agree")
            .unwrap()
            .description("You can change this later.");
        assert!(!checkbox.checked());

        checkbox.toggle();
        assert_eq!(writes.get(), 1);
        assert_eq!(form.value("agreedToTerms"), Some(FieldValue::Bool(true)));

        let refreshed = FormCheckbox::for_field(&binder, "agreedToTerms", "I agree").unwrap();
        let view = refreshed.view();
        assert_eq!(
            view.control,
            Control::Checkbox {
                id: "agreedToTerms".into(),
                checked: true
            }
        );
        assert_eq!(view.label.unwrap().text, "I agree");
        assert_eq!(view.description, None);
    }

    #[test]
    fn test_label_points_at_control_id() {
        let form = Form::new([("agreedToTerms", false)]);
        let binder = FieldBinder::new(form);
        let mut field = binder.field("agreedToTerms").as_boolean().cloned().unwrap();
        field.meta.id = "signup-terms".into();

        let view = FormCheckbox::new(field, "I agree").view();
        assert_eq!(view.label.unwrap().html_for, "signup-terms");
        assert_eq!(
            view.control,
            Control::Checkbox { id: "signup-terms".into(), checked: false }
        );
    }
}
