//! What widgets hand to a renderer.
//!
//! A [`FieldView`] is a plain description: no callbacks, no styling. The
//! widget that produced it owns the gesture methods.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelView {
    pub text: String,
    /// Id of the control the label points at.
    pub html_for: String,
    /// Kept for screen readers, not drawn.
    pub visually_hidden: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeView {
    pub value: String,
    /// `None` when the value is not among the widget's options.
    pub label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Control {
    TextInput {
        id: String,
        name: String,
        input_type: String,
        value: String,
        placeholder: Option<String>,
        /// `aria-invalid`: set whenever the field has an error, shown or not.
        invalid: bool,
    },
    Checkbox {
        id: String,
        checked: bool,
    },
    Select {
        id: String,
        /// Label of the selected option, or the placeholder.
        display: String,
        placeholder_shown: bool,
        options: Vec<OptionView>,
    },
    MultiSelect {
        id: String,
        trigger: String,
        query: String,
        options: Vec<OptionView>,
        /// Shown instead of `options` when the query matches nothing.
        empty_text: Option<String>,
        badges: Vec<BadgeView>,
    },
    ComboBox {
        id: String,
        /// Label of the selected option, or `"{title}..."`.
        trigger: String,
        placeholder_shown: bool,
        search_placeholder: String,
        query: String,
        /// `selected` marks the option that gets the check mark.
        options: Vec<OptionView>,
        empty_text: Option<String>,
    },
    DatePicker {
        id: String,
        date_text: String,
        placeholder_shown: bool,
        /// Present in date-time mode only.
        time_text: Option<String>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldView {
    pub label: Option<LabelView>,
    pub control: Control,
    pub description: Option<String>,
    pub error: Option<String>,
}

/// Anything that can describe itself for rendering.
pub trait Widget {
    fn view(&self) -> FieldView;
}
