//! # Form state
//!
//! [`FormStore`] is the contract the binder needs from whatever owns form
//! state: read a value, read an error, write a value. [`Form`] is the store
//! that ships with Reform. Like `Signal<T>`, it is a cheap clonable handle;
//! clones share the same fields.
//!
//! ```rust
//! use reform_core::{FieldValue, Form, FormStore};
//!
//! let form = Form::new([
//!     ("name", FieldValue::from("Jane")),
//!     ("subscribed", FieldValue::from(false)),
//! ]);
//!
//! form.set_data("name", FieldValue::from("Janet"));
//! assert_eq!(form.value("name"), Some(FieldValue::from("Janet")));
//! assert!(form.is_dirty());
//!
//! form.reset();
//! assert!(!form.is_dirty());
//! ```
//!
//! Field kinds are fixed when the form is built. A write that would change a
//! field's kind (for example a string into a checkbox field) is rejected:
//! [`Form::try_set`] reports it, [`FormStore::set_data`] logs it and drops it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};

use crate::{FieldKind, FieldValue, FormError, FormResult};

/// What the field binder reads from and writes to.
///
/// `set_data` takes `&self`: implementors use interior mutability, and callers
/// must not assume the write is visible before `set_data` returns.
pub trait FormStore {
    fn value(&self, name: &str) -> Option<FieldValue>;
    fn error(&self, name: &str) -> Option<String>;
    fn set_data(&self, name: &str, value: FieldValue);

    /// Declared kind of a field. Stores without declarations infer it from the
    /// current value.
    fn kind(&self, name: &str) -> Option<FieldKind> {
        self.value(name).map(|v| FieldKind::infer(&v))
    }

    fn contains(&self, name: &str) -> bool {
        self.value(name).is_some()
    }
}

impl<T: FormStore + ?Sized> FormStore for Rc<T> {
    fn value(&self, name: &str) -> Option<FieldValue> {
        (**self).value(name)
    }
    fn error(&self, name: &str) -> Option<String> {
        (**self).error(name)
    }
    fn set_data(&self, name: &str, value: FieldValue) {
        (**self).set_data(name, value)
    }
    fn kind(&self, name: &str) -> Option<FieldKind> {
        (**self).kind(name)
    }
    fn contains(&self, name: &str) -> bool {
        (**self).contains(name)
    }
}

new_key_type! {
    pub struct SubscriptionKey;
}

/// Notification delivered to [`Form::subscribe`] callbacks.
#[derive(Clone, Debug, PartialEq)]
pub enum FormEvent {
    ValueChanged { name: String, value: FieldValue },
    ErrorChanged { name: String, error: Option<String> },
    Reset,
}

#[derive(Clone, Debug)]
struct FieldSlot {
    name: String,
    kind: FieldKind,
    initial: FieldValue,
    value: FieldValue,
}

struct FormInner {
    fields: Vec<FieldSlot>,
    index: HashMap<String, usize>,
    errors: HashMap<String, String>,
    version: u64,
    subs: SlotMap<SubscriptionKey, Rc<dyn Fn(&FormEvent)>>,
}

impl FormInner {
    fn slot(&self, name: &str) -> Option<&FieldSlot> {
        self.index.get(name).map(|&i| &self.fields[i])
    }
}

#[derive(Clone)]
pub struct Form(Rc<RefCell<FormInner>>);

impl Form {
    /// Builds a form whose field kinds are inferred once from `initial`.
    ///
    /// A name given twice keeps its first position and takes the last value.
    pub fn new<N, V>(initial: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<FieldValue>,
    {
        let mut builder = FormBuilder::default();
        for (name, value) in initial {
            let value = value.into();
            let kind = FieldKind::infer(&value);
            builder.upsert(name.into(), kind, value);
        }
        builder.finish()
    }

    pub fn builder() -> FormBuilder {
        FormBuilder::default()
    }

    pub fn field_names(&self) -> Vec<String> {
        self.0.borrow().fields.iter().map(|f| f.name.clone()).collect()
    }

    /// Snapshot of all values in declaration order.
    pub fn data(&self) -> Vec<(String, FieldValue)> {
        self.0
            .borrow()
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }

    /// Snapshot of current errors, sorted by field name.
    pub fn errors(&self) -> Vec<(String, String)> {
        let mut out: Vec<_> = self
            .0
            .borrow()
            .errors
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        out.sort();
        out
    }

    pub fn has_errors(&self) -> bool {
        !self.0.borrow().errors.is_empty()
    }

    /// Bumped on every accepted change.
    pub fn version(&self) -> u64 {
        self.0.borrow().version
    }

    /// Writes `value`, checking the field exists and the value fits its kind.
    pub fn try_set(&self, name: &str, value: FieldValue) -> FormResult<()> {
        {
            let mut inner = self.0.borrow_mut();
            let idx = *inner
                .index
                .get(name)
                .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
            let slot = &mut inner.fields[idx];
            if !slot.kind.accepts(&value) {
                return Err(FormError::KindMismatch {
                    name: name.to_string(),
                    expected: slot.kind,
                    found: FieldKind::infer(&value),
                });
            }
            slot.value = value.clone();
            inner.version += 1;
        }
        self.notify(FormEvent::ValueChanged {
            name: name.to_string(),
            value,
        });
        Ok(())
    }

    pub fn set_error(&self, name: &str, message: impl Into<String>) {
        let message = message.into();
        {
            let mut inner = self.0.borrow_mut();
            inner.errors.insert(name.to_string(), message.clone());
            inner.version += 1;
        }
        self.notify(FormEvent::ErrorChanged {
            name: name.to_string(),
            error: Some(message),
        });
    }

    pub fn clear_error(&self, name: &str) {
        let removed = {
            let mut inner = self.0.borrow_mut();
            let removed = inner.errors.remove(name).is_some();
            if removed {
                inner.version += 1;
            }
            removed
        };
        if removed {
            self.notify(FormEvent::ErrorChanged {
                name: name.to_string(),
                error: None,
            });
        }
    }

    pub fn clear_errors(&self) {
        let names: Vec<String> = self.0.borrow().errors.keys().cloned().collect();
        for name in names {
            self.clear_error(&name);
        }
    }

    /// Restores every field to its initial value.
    pub fn reset(&self) {
        {
            let mut inner = self.0.borrow_mut();
            for slot in inner.fields.iter_mut() {
                slot.value = slot.initial.clone();
            }
            inner.version += 1;
        }
        self.notify(FormEvent::Reset);
    }

    pub fn reset_field(&self, name: &str) -> FormResult<()> {
        let initial = self
            .0
            .borrow()
            .slot(name)
            .map(|s| s.initial.clone())
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        self.try_set(name, initial)
    }

    pub fn is_dirty(&self) -> bool {
        self.0.borrow().fields.iter().any(|f| f.value != f.initial)
    }

    pub fn is_field_dirty(&self, name: &str) -> bool {
        self.0
            .borrow()
            .slot(name)
            .is_some_and(|f| f.value != f.initial)
    }

    pub fn subscribe(&self, f: impl Fn(&FormEvent) + 'static) -> SubscriptionKey {
        self.0.borrow_mut().subs.insert(Rc::new(f))
    }

    pub fn unsubscribe(&self, key: SubscriptionKey) -> bool {
        self.0.borrow_mut().subs.remove(key).is_some()
    }

    // Subscribers run with no borrow held, so they may read or write the form.
    fn notify(&self, event: FormEvent) {
        let subs: Vec<Rc<dyn Fn(&FormEvent)>> = self.0.borrow().subs.values().cloned().collect();
        for s in subs {
            s(&event);
        }
    }
}

impl FormStore for Form {
    fn value(&self, name: &str) -> Option<FieldValue> {
        self.0.borrow().slot(name).map(|s| s.value.clone())
    }

    fn error(&self, name: &str) -> Option<String> {
        self.0.borrow().errors.get(name).cloned()
    }

    fn set_data(&self, name: &str, value: FieldValue) {
        if let Err(e) = self.try_set(name, value) {
            log::warn!("set_data: {e}; write dropped");
        }
    }

    fn kind(&self, name: &str) -> Option<FieldKind> {
        self.0.borrow().slot(name).map(|s| s.kind)
    }

    fn contains(&self, name: &str) -> bool {
        self.0.borrow().index.contains_key(name)
    }
}

impl std::fmt::Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.0.borrow();
        f.debug_struct("Form")
            .field("fields", &inner.fields)
            .field("errors", &inner.errors)
            .field("version", &inner.version)
            .field("subscribers", &inner.subs.len())
            .finish()
    }
}

/// Declares fields with explicit kinds.
///
/// ```rust
/// use reform_core::{FieldKind, Form, FormStore};
///
/// let form = Form::builder()
///     .boolean("agreed_to_terms", false)
///     .array("tags", vec!["a", "b"])
///     .scalar("starts_at", None::<&str>)
///     .build()
///     .unwrap();
///
/// assert_eq!(form.kind("starts_at"), Some(FieldKind::Scalar));
/// ```
#[derive(Default)]
pub struct FormBuilder {
    fields: Vec<FieldSlot>,
    index: HashMap<String, usize>,
    problem: Option<FormError>,
}

impl FormBuilder {
    pub fn boolean(self, name: impl Into<String>, initial: bool) -> Self {
        self.field(name, FieldKind::Boolean, FieldValue::Bool(initial))
    }

    pub fn array(self, name: impl Into<String>, initial: impl Into<FieldValue>) -> Self {
        self.field(name, FieldKind::Array, initial)
    }

    pub fn scalar(self, name: impl Into<String>, initial: impl Into<FieldValue>) -> Self {
        self.field(name, FieldKind::Scalar, initial)
    }

    pub fn field(
        mut self,
        name: impl Into<String>,
        kind: FieldKind,
        initial: impl Into<FieldValue>,
    ) -> Self {
        let name = name.into();
        let initial = initial.into();
        if self.problem.is_some() {
            return self;
        }
        if self.index.contains_key(&name) {
            self.problem = Some(FormError::DuplicateField(name));
            return self;
        }
        if !kind.accepts(&initial) {
            self.problem = Some(FormError::KindMismatch {
                found: FieldKind::infer(&initial),
                name,
                expected: kind,
            });
            return self;
        }
        self.upsert(name, kind, initial);
        self
    }

    pub fn build(self) -> FormResult<Form> {
        match self.problem {
            Some(e) => Err(e),
            None => Ok(self.finish()),
        }
    }

    fn upsert(&mut self, name: String, kind: FieldKind, value: FieldValue) {
        let slot = FieldSlot {
            name: name.clone(),
            kind,
            initial: value.clone(),
            value,
        };
        match self.index.get(&name) {
            Some(&i) => self.fields[i] = slot,
            None => {
                self.index.insert(name, self.fields.len());
                self.fields.push(slot);
            }
        }
    }

    fn finish(self) -> Form {
        Form(Rc::new(RefCell::new(FormInner {
            fields: self.fields,
            index: self.index,
            errors: HashMap::new(),
            version: 0,
            subs: SlotMap::with_key(),
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn sample() -> Form {
        Form::new([
            ("name", FieldValue::from("Jane")),
            ("agreed", FieldValue::from(false)),
            ("tags", FieldValue::from(vec!["a"])),
        ])
    }

    #[test]
    fn test_kinds_frozen_from_initial_values() {
        let form = sample();
        assert_eq!(form.kind("agreed"), Some(FieldKind::Boolean));
        assert_eq!(form.kind("tags"), Some(FieldKind::Array));
        assert_eq!(form.kind("name"), Some(FieldKind::Scalar));

        let err = form.try_set("agreed", FieldValue::from("yes")).unwrap_err();
        assert_eq!(
            err,
            FormError::KindMismatch {
                name: "agreed".into(),
                expected: FieldKind::Boolean,
                found: FieldKind::Scalar,
            }
        );
        assert_eq!(form.value("agreed"), Some(FieldValue::Bool(false)));
    }

    #[test]
    fn test_unknown_field_write_is_dropped() {
        let form = sample();
        let before = form.version();
        form.set_data("missing", FieldValue::from("x"));
        assert_eq!(form.version(), before);
        assert!(!form.contains("missing"));
        assert_eq!(
            form.try_set("missing", FieldValue::Null),
            Err(FormError::UnknownField("missing".into()))
        );
    }

    #[test]
    fn test_reset_and_dirty() {
        let form = sample();
        assert!(!form.is_dirty());
        form.set_data("name", FieldValue::from("Janet"));
        assert!(form.is_dirty());
        assert!(form.is_field_dirty("name"));
        assert!(!form.is_field_dirty("tags"));

        form.reset_field("name").unwrap();
        assert!(!form.is_dirty());

        form.set_data("agreed", FieldValue::from(true));
        form.reset();
        assert_eq!(form.value("agreed"), Some(FieldValue::Bool(false)));
    }

    #[test]
    fn test_errors() {
        let form = sample();
        form.set_error("name", "Name is required");
        form.set_error("tags", "Pick one more");
        assert!(form.has_errors());
        assert_eq!(form.error("name").as_deref(), Some("Name is required"));
        assert_eq!(
            form.errors(),
            vec![
                ("name".to_string(), "Name is required".to_string()),
                ("tags".to_string(), "Pick one more".to_string()),
            ]
        );

        form.clear_error("name");
        assert_eq!(form.error("name"), None);
        form.clear_errors();
        assert!(!form.has_errors());
    }

    #[test]
    fn test_subscribers_may_reenter() {
        let form = sample();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let key = form.subscribe({
            let form = form.clone();
            let seen = seen.clone();
            move |ev| {
                // reading inside the callback must not panic on a held borrow
                let current = form.value("name");
                seen.borrow_mut().push((ev.clone(), current));
            }
        });

        form.set_data("name", FieldValue::from("Janet"));
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0].1, Some(FieldValue::from("Janet")));

        assert!(form.unsubscribe(key));
        form.set_data("name", FieldValue::from("J"));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_builder_rejects_bad_declarations() {
        let dup = Form::builder()
            .scalar("a", "x")
            .scalar("a", "y")
            .build()
            .unwrap_err();
        assert_eq!(dup, FormError::DuplicateField("a".into()));

        let mismatch = Form::builder().boolean("ok", true).array("tags", "nope").build();
        assert!(matches!(mismatch, Err(FormError::KindMismatch { .. })));
    }

    #[test]
    fn test_data_keeps_declaration_order() {
        let form = Form::new([("b", 1i64), ("a", 2i64), ("b", 3i64)]);
        assert_eq!(
            form.data(),
            vec![
                ("b".to_string(), FieldValue::Number(3.0)),
                ("a".to_string(), FieldValue::Number(2.0)),
            ]
        );
    }
}
