use reform_core::{ChangeEvent, FieldBinder, FieldBinding, FormStore, ScalarField};

use crate::chrome::FieldChrome;
use crate::options::{SelectOption, filter_options, label_for};
use crate::variant;
use crate::view::{Control, FieldView, OptionView, Widget};
use crate::WidgetResult;

/// Searchable single choice. `title` names the thing being picked and fills
/// the trigger, search and empty texts.
#[derive(Clone)]
pub struct FormComboBox {
    field: ScalarField,
    pub chrome: FieldChrome,
    pub options: Vec<SelectOption>,
    pub title: String,
    query: String,
}

impl FormComboBox {
    pub fn new(
        field: ScalarField,
        title: impl Into<String>,
        options: impl IntoIterator<Item = SelectOption>,
    ) -> Self {
        Self {
            field,
            chrome: FieldChrome::default(),
            options: options.into_iter().collect(),
            title: title.into(),
            query: String::new(),
        }
    }

    pub fn from_binding(
        binding: &FieldBinding,
        title: impl Into<String>,
        options: impl IntoIterator<Item = SelectOption>,
    ) -> WidgetResult<Self> {
        Ok(Self::new(variant::scalar(binding)?, title, options))
    }

    pub fn for_field<S>(
        binder: &FieldBinder<S>,
        name: &str,
        title: impl Into<String>,
        options: impl IntoIterator<Item = SelectOption>,
    ) -> WidgetResult<Self>
    where
        S: FormStore + Clone + 'static,
    {
        Self::from_binding(&*variant::lookup(binder, name)?, title, options)
    }

    pub fn chrome(mut self, chrome: FieldChrome) -> Self {
        self.chrome = chrome;
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn selected(&self) -> Option<&SelectOption> {
        let current = self.field.value.as_deref()?;
        self.options.iter().find(|o| o.value == current)
    }

    /// Selected label, or `"{title}..."` while nothing known is selected.
    pub fn trigger_text(&self) -> String {
        match self.selected() {
            Some(opt) => opt.label.clone(),
            None => format!("{}...", self.title),
        }
    }

    pub fn search_placeholder(&self) -> String {
        format!("Search {}...", self.title)
    }

    pub fn empty_text(&self) -> String {
        format!("No {} found.", self.title)
    }

    /// The user picked `value`. A value outside the options clears the field.
    pub fn choose(&self, value: &str) {
        let next = match label_for(&self.options, value) {
            Some(_) => value,
            None => {
                log::debug!(
                    "combo box '{}': '{value}' is not among the options, clearing",
                    self.field.meta.name
                );
                ""
            }
        };
        self.field
            .on_change(ChangeEvent::named(self.field.meta.name.clone(), next));
    }
}

impl Widget for FormComboBox {
    fn view(&self) -> FieldView {
        let meta = &self.field.meta;
        let current = self.field.value_or_empty();
        let visible: Vec<OptionView> = filter_options(&self.options, &self.query)
            .into_iter()
            .map(|o| OptionView {
                value: o.value.clone(),
                label: o.label.clone(),
                selected: o.value == current,
            })
            .collect();
        let empty_text = visible.is_empty().then(|| self.empty_text());

        FieldView {
            label: self.chrome.label_view(&meta.id, &meta.name),
            control: Control::ComboBox {
                id: meta.id.clone(),
                trigger: self.trigger_text(),
                placeholder_shown: self.selected().is_none(),
                search_placeholder: self.search_placeholder(),
                query: self.query.clone(),
                options: visible,
                empty_text,
            },
            description: self.chrome.description.clone(),
            error: self.chrome.error_line(meta.error.as_deref()),
        }
    }
}
