//! # Field bindings
//!
//! A [`FieldBinding`] is everything a widget needs to render one field and
//! push edits back: name, id, current error, the value in the shape the widget
//! expects, and a change handler that forwards into [`FormStore::set_data`].
//!
//! ```rust
//! use reform_core::{bind, ChangeEvent, FieldValue, Form, FormStore};
//!
//! let form = Form::new([("title", FieldValue::from("Draft"))]);
//! let binding = bind(&form, "title");
//! let title = binding.as_scalar().unwrap();
//!
//! assert_eq!(title.value.as_deref(), Some("Draft"));
//! title.on_change(ChangeEvent::new("Final"));
//! assert_eq!(form.value("title"), Some(FieldValue::from("Final")));
//! ```

use std::fmt;
use std::rc::Rc;

use crate::{FieldKind, FieldValue, FormStore, Scalar};

/// Shared by all binding shapes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldMeta {
    pub name: String,
    /// Defaults to the field name.
    pub id: String,
    pub error: Option<String>,
}

/// What a text-like control reports when its contents change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeEvent {
    pub value: String,
    /// Name of the control that fired, when the control knows it.
    pub name: Option<String>,
}

impl ChangeEvent {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: None,
        }
    }

    pub fn named(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: Some(name.into()),
        }
    }
}

pub type BoolCallback = Rc<dyn Fn(bool)>;
pub type ListCallback = Rc<dyn Fn(Vec<Scalar>)>;
pub type ChangeCallback = Rc<dyn Fn(ChangeEvent)>;

#[derive(Clone)]
pub struct BooleanField {
    pub meta: FieldMeta,
    pub checked: bool,
    on_boolean_change: BoolCallback,
}

impl BooleanField {
    pub fn on_boolean_change(&self, value: bool) {
        (self.on_boolean_change)(value)
    }

    /// The raw callback, for handing to a checkbox primitive.
    pub fn handler(&self) -> BoolCallback {
        self.on_boolean_change.clone()
    }
}

#[derive(Clone)]
pub struct ArrayField {
    pub meta: FieldMeta,
    pub value: Vec<Scalar>,
    on_change: ListCallback,
}

impl ArrayField {
    /// Replaces the whole list. Nothing is merged with the current value.
    pub fn on_change(&self, value: Vec<Scalar>) {
        (self.on_change)(value)
    }

    pub fn handler(&self) -> ListCallback {
        self.on_change.clone()
    }

    pub fn contains(&self, item: &Scalar) -> bool {
        self.value.contains(item)
    }

    /// Drops every element equal to `item` if present, otherwise appends it.
    pub fn toggle(&self, item: Scalar) {
        if self.contains(&item) {
            self.remove(&item);
        } else {
            let mut next = self.value.clone();
            next.push(item);
            self.on_change(next);
        }
    }

    pub fn remove(&self, item: &Scalar) {
        let next: Vec<Scalar> = self.value.iter().filter(|v| *v != item).cloned().collect();
        self.on_change(next);
    }
}

#[derive(Clone)]
pub struct ScalarField {
    pub meta: FieldMeta,
    /// `None` when the field is unset or unknown.
    pub value: Option<String>,
    on_change: ChangeCallback,
}

impl ScalarField {
    pub fn on_change(&self, event: ChangeEvent) {
        (self.on_change)(event)
    }

    pub fn handler(&self) -> ChangeCallback {
        self.on_change.clone()
    }

    pub fn set_text(&self, value: impl Into<String>) {
        self.on_change(ChangeEvent::named(self.meta.name.clone(), value))
    }

    pub fn value_or_empty(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

#[derive(Clone)]
pub enum FieldBinding {
    Boolean(BooleanField),
    Array(ArrayField),
    Scalar(ScalarField),
}

impl FieldBinding {
    pub fn meta(&self) -> &FieldMeta {
        match self {
            FieldBinding::Boolean(f) => &f.meta,
            FieldBinding::Array(f) => &f.meta,
            FieldBinding::Scalar(f) => &f.meta,
        }
    }

    pub fn name(&self) -> &str {
        &self.meta().name
    }

    pub fn id(&self) -> &str {
        &self.meta().id
    }

    pub fn error(&self) -> Option<&str> {
        self.meta().error.as_deref()
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldBinding::Boolean(_) => FieldKind::Boolean,
            FieldBinding::Array(_) => FieldKind::Array,
            FieldBinding::Scalar(_) => FieldKind::Scalar,
        }
    }

    pub fn as_boolean(&self) -> Option<&BooleanField> {
        match self {
            FieldBinding::Boolean(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayField> {
        match self {
            FieldBinding::Array(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarField> {
        match self {
            FieldBinding::Scalar(f) => Some(f),
            _ => None,
        }
    }
}

impl fmt::Debug for FieldBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldBinding::Boolean(b) => f
                .debug_struct("Boolean")
                .field("meta", &b.meta)
                .field("checked", &b.checked)
                .field("on_boolean_change", &"<callback>")
                .finish(),
            FieldBinding::Array(a) => f
                .debug_struct("Array")
                .field("meta", &a.meta)
                .field("value", &a.value)
                .field("on_change", &"<callback>")
                .finish(),
            FieldBinding::Scalar(s) => f
                .debug_struct("Scalar")
                .field("meta", &s.meta)
                .field("value", &s.value)
                .field("on_change", &"<callback>")
                .finish(),
        }
    }
}

/// Derives the binding for `name` from the store's current state.
///
/// Unknown names bind as an unset scalar. The store's declared kind wins over
/// the value's runtime shape; if the two disagree the value's shape is used.
pub fn bind<S>(store: &S, name: &str) -> FieldBinding
where
    S: FormStore + Clone + 'static,
{
    let value = store.value(name).unwrap_or(FieldValue::Null);
    let error = store.error(name);
    bind_with(store, name, value, error)
}

pub(crate) fn bind_with<S>(
    store: &S,
    name: &str,
    value: FieldValue,
    error: Option<String>,
) -> FieldBinding
where
    S: FormStore + Clone + 'static,
{
    let meta = FieldMeta {
        name: name.to_string(),
        id: name.to_string(),
        error,
    };

    let inferred = FieldKind::infer(&value);
    let kind = match store.kind(name) {
        Some(declared) if declared.accepts(&value) => declared,
        Some(declared) => {
            log::warn!(
                "bind: field '{name}' is declared {declared} but holds a {inferred} value; \
                 binding as {inferred}"
            );
            inferred
        }
        None => inferred,
    };

    let owned_name: Rc<str> = Rc::from(name);
    match (kind, value) {
        (FieldKind::Boolean, FieldValue::Bool(checked)) => {
            let store = store.clone();
            FieldBinding::Boolean(BooleanField {
                meta,
                checked,
                on_boolean_change: Rc::new(move |v| store.set_data(&owned_name, FieldValue::Bool(v))),
            })
        }
        (FieldKind::Array, FieldValue::List(items)) => {
            let store = store.clone();
            FieldBinding::Array(ArrayField {
                meta,
                value: items,
                on_change: Rc::new(move |v| store.set_data(&owned_name, FieldValue::List(v))),
            })
        }
        (_, value) => {
            let store = store.clone();
            FieldBinding::Scalar(ScalarField {
                meta,
                value: value.to_display(),
                on_change: Rc::new(move |e: ChangeEvent| {
                    store.set_data(&owned_name, FieldValue::Text(e.value))
                }),
            })
        }
    }
}
