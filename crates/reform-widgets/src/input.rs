use reform_core::{ChangeEvent, FieldBinder, FieldBinding, FormStore, ScalarField};

use crate::chrome::{FieldChrome, input_error};
use crate::variant;
use crate::view::{Control, FieldView, Widget};
use crate::WidgetResult;

/// Single-line text input. Labelled with the capitalised field name unless
/// the chrome says otherwise.
#[derive(Clone)]
pub struct FormInput {
    field: ScalarField,
    pub chrome: FieldChrome,
    pub input_type: String,
    pub placeholder: Option<String>,
}

impl FormInput {
    pub fn new(field: ScalarField) -> Self {
        Self {
            field,
            chrome: FieldChrome::new().label_from_name(),
            input_type: "text".to_string(),
            placeholder: None,
        }
    }

    pub fn from_binding(binding: &FieldBinding) -> WidgetResult<Self> {
        variant::scalar(binding).map(Self::new)
    }

    pub fn for_field<S>(binder: &FieldBinder<S>, name: &str) -> WidgetResult<Self>
    where
        S: FormStore + Clone + 'static,
    {
        Self::from_binding(&*variant::lookup(binder, name)?)
    }

    pub fn chrome(mut self, chrome: FieldChrome) -> Self {
        self.chrome = chrome;
        self
    }

    pub fn input_type(mut self, t: impl Into<String>) -> Self {
        self.input_type = t.into();
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// The user typed; forwards the raw contents.
    pub fn input(&self, raw: &str) {
        self.field
            .on_change(ChangeEvent::named(self.field.meta.name.clone(), raw));
    }
}

impl Widget for FormInput {
    fn view(&self) -> FieldView {
        let meta = &self.field.meta;
        FieldView {
            label: self.chrome.label_view(&meta.id, &meta.name),
            control: Control::TextInput {
                id: meta.id.clone(),
                name: meta.name.clone(),
                input_type: self.input_type.clone(),
                value: self.field.value_or_empty().to_string(),
                placeholder: self.placeholder.clone(),
                invalid: input_error(meta.error.as_deref()).is_some(),
            },
            description: self.chrome.description.clone(),
            error: self.chrome.error_line(meta.error.as_deref()),
        }
    }
}
