use crate::view::LabelView;

/// Where a widget's label text comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LabelText {
    /// No label at all.
    #[default]
    Omitted,
    /// The field name with its first letter capitalised: `email` → `Email`.
    FromName,
    Custom(String),
}

/// Label, helper text and error line shared by every widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldChrome {
    pub label: LabelText,
    pub hide_label: bool,
    pub description: Option<String>,
    pub show_error: bool,
}

impl Default for FieldChrome {
    fn default() -> Self {
        Self {
            label: LabelText::Omitted,
            hide_label: false,
            description: None,
            show_error: true,
        }
    }
}

impl FieldChrome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, text: impl Into<String>) -> Self {
        self.label = LabelText::Custom(text.into());
        self
    }

    pub fn label_from_name(mut self) -> Self {
        self.label = LabelText::FromName;
        self
    }

    pub fn no_label(mut self) -> Self {
        self.label = LabelText::Omitted;
        self
    }

    pub fn hide_label(mut self, hidden: bool) -> Self {
        self.hide_label = hidden;
        self
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Whether the error line is rendered. The control is still marked
    /// invalid when this is off.
    pub fn show_error(mut self, show: bool) -> Self {
        self.show_error = show;
        self
    }

    pub(crate) fn label_view(&self, html_for: &str, name: &str) -> Option<LabelView> {
        let text = match &self.label {
            LabelText::Omitted => return None,
            LabelText::FromName => capitalize_first(name),
            LabelText::Custom(text) => text.clone(),
        };
        Some(LabelView {
            text,
            html_for: html_for.to_string(),
            visually_hidden: self.hide_label,
        })
    }

    pub(crate) fn error_line(&self, message: Option<&str>) -> Option<String> {
        if self.show_error { input_error(message) } else { None }
    }
}

/// The error line: nothing for a missing or blank message.
pub fn input_error(message: Option<&str>) -> Option<String> {
    message.filter(|m| !m.trim().is_empty()).map(str::to_string)
}

fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_hides_blank() {
        assert_eq!(input_error(None), None);
        assert_eq!(input_error(Some("")), None);
        assert_eq!(input_error(Some("  ")), None);
        assert_eq!(input_error(Some("Required")).as_deref(), Some("Required"));
    }

    #[test]
    fn test_hidden_label_is_still_described() {
        let chrome = FieldChrome::new().label("Email").hide_label(true);
        let label = chrome.label_view("email", "email").unwrap();
        assert!(label.visually_hidden);
        assert_eq!(label.html_for, "email");
        assert_eq!(FieldChrome::new().label_view("x", "x"), None);
    }

    #[test]
    fn test_label_from_name() {
        let chrome = FieldChrome::new().label_from_name();
        assert_eq!(chrome.label_view("first_name", "first_name").unwrap().text, "First_name");
        assert_eq!(chrome.label_view("", "").unwrap().text, "");
        assert_eq!(chrome.no_label().label_view("email", "email"), None);
        assert_eq!(capitalize_first("ärger"), "Ärger");
    }

    #[test]
    fn test_error_line_toggle() {
        let chrome = FieldChrome::new();
        assert_eq!(chrome.error_line(Some("Required")).as_deref(), Some("Required"));
        assert_eq!(chrome.show_error(false).error_line(Some("Required")), None);
    }
}
