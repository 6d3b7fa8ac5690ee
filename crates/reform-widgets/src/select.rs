use reform_core::{ChangeEvent, FieldBinder, FieldBinding, FormStore, ScalarField};

use crate::chrome::FieldChrome;
use crate::options::{SelectOption, label_for};
use crate::variant;
use crate::view::{Control, FieldView, OptionView, Widget};
use crate::WidgetResult;

pub const SELECT_PLACEHOLDER: &str = "Select an option";

/// Single choice from a fixed list.
#[derive(Clone)]
pub struct FormSelect {
    field: ScalarField,
    pub chrome: FieldChrome,
    pub options: Vec<SelectOption>,
    pub placeholder: String,
}

impl FormSelect {
    pub fn new(field: ScalarField, options: impl IntoIterator<Item = SelectOption>) -> Self {
        Self {
            field,
            chrome: FieldChrome::default(),
            options: options.into_iter().collect(),
            placeholder: SELECT_PLACEHOLDER.to_string(),
        }
    }

    pub fn from_binding(
        binding: &FieldBinding,
        options: impl IntoIterator<Item = SelectOption>,
    ) -> WidgetResult<Self> {
        Ok(Self::new(variant::scalar(binding)?, options))
    }

    pub fn for_field<S>(
        binder: &FieldBinder<S>,
        name: &str,
        options: impl IntoIterator<Item = SelectOption>,
    ) -> WidgetResult<Self>
    where
        S: FormStore + Clone + 'static,
    {
        Self::from_binding(&*variant::lookup(binder, name)?, options)
    }

    pub fn chrome(mut self, chrome: FieldChrome) -> Self {
        self.chrome = chrome;
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    pub fn selected(&self) -> Option<&SelectOption> {
        let current = self.field.value.as_deref()?;
        self.options.iter().find(|o| o.value == current)
    }

    /// The user picked `value`. The change event carries the field name, as a
    /// native `<select>` would.
    pub fn choose(&self, value: &str) {
        if label_for(&self.options, value).is_none() {
            log::debug!("select '{}': '{value}' is not among the options", self.field.meta.name);
        }
        self.field
            .on_change(ChangeEvent::named(self.field.meta.name.clone(), value));
    }
}

impl Widget for FormSelect {
    fn view(&self) -> FieldView {
        let meta = &self.field.meta;
        let current = self.field.value_or_empty();
        let (display, placeholder_shown) = match self.selected() {
            Some(opt) => (opt.label.clone(), false),
            None => (self.placeholder.clone(), true),
        };
        FieldView {
            label: self.chrome.label_view(&meta.id, &meta.name),
            control: Control::Select {
                id: meta.id.clone(),
                display,
                placeholder_shown,
                options: self
                    .options
                    .iter()
                    .map(|o| OptionView {
                        value: o.value.clone(),
                        label: o.label.clone(),
                        selected: o.value == current,
                    })
                    .collect(),
            },
            description: self.chrome.description.clone(),
            error: self.chrome.error_line(meta.error.as_deref()),
        }
    }
}
