use reform_core::{ArrayField, FieldBinder, FieldBinding, FormStore, Scalar};

use crate::chrome::FieldChrome;
use crate::options::{SelectOption, filter_options, label_for};
use crate::variant;
use crate::view::{BadgeView, Control, FieldView, OptionView, Widget};
use crate::WidgetResult;

pub const MULTI_SELECT_PLACEHOLDER: &str = "Select options";
pub const NO_OPTIONS_TEXT: &str = "No options found.";

/// Pick any number of options; selected ones show as removable badges.
#[derive(Clone)]
pub struct FormMultiSelect {
    field: ArrayField,
    pub chrome: FieldChrome,
    pub options: Vec<SelectOption>,
    pub placeholder: String,
    query: String,
}

impl FormMultiSelect {
    pub fn new(field: ArrayField, options: impl IntoIterator<Item = SelectOption>) -> Self {
        Self {
            field,
            chrome: FieldChrome::default(),
            options: options.into_iter().collect(),
            placeholder: MULTI_SELECT_PLACEHOLDER.to_string(),
            query: String::new(),
        }
    }

    pub fn from_binding(
        binding: &FieldBinding,
        options: impl IntoIterator<Item = SelectOption>,
    ) -> WidgetResult<Self> {
        Ok(Self::new(variant::array(binding)?, options))
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

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Selected values as strings, in selection order.
    pub fn selected_values(&self) -> Vec<String> {
        self.field.value.iter().map(|s| s.to_string()).collect()
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.field.value.iter().any(|s| s.to_string() == value)
    }

    /// Adds `value` if absent, removes it if present.
    pub fn toggle(&self, value: &str) {
        let next: Vec<Scalar> = if self.is_selected(value) {
            self.field
                .value
                .iter()
                .filter(|s| s.to_string() != value)
                .cloned()
                .collect()
        } else {
            let mut next = self.field.value.clone();
            next.push(Scalar::from(value));
            next
        };
        self.field.on_change(next);
    }

    /// Badge close button.
    pub fn remove(&self, value: &str) {
        if self.is_selected(value) {
            self.toggle(value);
        }
    }

    pub fn trigger_text(&self) -> String {
        match self.field.value.len() {
            0 => self.placeholder.clone(),
            n => format!("{n} selected"),
        }
    }
}

impl Widget for FormMultiSelect {
    fn view(&self) -> FieldView {
        let meta = &self.field.meta;
        let visible: Vec<OptionView> = filter_options(&self.options, &self.query)
            .into_iter()
            .map(|o| OptionView {
                value: o.value.clone(),
                label: o.label.clone(),
                selected: self.is_selected(&o.value),
            })
            .collect();
        let empty_text = visible.is_empty().then(|| NO_OPTIONS_TEXT.to_string());
        let badges = self
            .selected_values()
            .into_iter()
            .map(|value| BadgeView {
                label: label_for(&self.options, &value).map(str::to_string),
                value,
            })
            .collect();

        FieldView {
            label: self.chrome.label_view(&meta.id, &meta.name),
            control: Control::MultiSelect {
                id: meta.id.clone(),
                trigger: self.trigger_text(),
                query: self.query.clone(),
                options: visible,
                empty_text,
                badges,
            },
            description: self.chrome.description.clone(),
            error: self.chrome.error_line(meta.error.as_deref()),
        }
    }
}
