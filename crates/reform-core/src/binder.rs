//! # Memoized bindings
//!
//! [`FieldBinder`] hands out `Rc<FieldBinding>`s keyed by field name, in the
//! same spirit as `remember_with_key`: asking twice for the same field returns
//! the same `Rc` as long as the field's value and error have not changed.
//! Consumers can compare bindings with `Rc::ptr_eq` to skip work.
//!
//! ```rust
//! use std::rc::Rc;
//! use reform_core::{FieldBinder, FieldValue, Form, FormStore};
//!
//! let form = Form::new([("email", FieldValue::from("a@b.c"))]);
//! let binder = FieldBinder::new(form.clone());
//!
//! let first = binder.field("email");
//! assert!(Rc::ptr_eq(&first, &binder.field("email")));
//!
//! form.set_error("email", "Taken");
//! let after_error = binder.field("email");
//! assert!(!Rc::ptr_eq(&first, &after_error));
//! assert_eq!(after_error.error(), Some("Taken"));
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::binding::bind_with;
use crate::{FieldBinding, FieldValue, FormError, FormResult, FormStore};

struct MemoSlot {
    value: FieldValue,
    error: Option<String>,
    binding: Rc<FieldBinding>,
}

pub struct FieldBinder<S: FormStore + Clone + 'static> {
    store: S,
    slots: RefCell<HashMap<String, MemoSlot>>,
}

impl<S: FormStore + Clone + 'static> FieldBinder<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            slots: RefCell::new(HashMap::new()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Binding for `name`, recomputed only when its value or error changed.
    ///
    /// Unknown names bind as an unset scalar.
    pub fn field(&self, name: &str) -> Rc<FieldBinding> {
        let value = self.store.value(name).unwrap_or(FieldValue::Null);
        let error = self.store.error(name);

        if let Some(slot) = self.slots.borrow().get(name)
            && slot.value == value
            && slot.error == error
        {
            return slot.binding.clone();
        }

        log::trace!("field binder: recomputing binding for '{name}'");
        let binding = Rc::new(bind_with(&self.store, name, value.clone(), error.clone()));
        self.slots.borrow_mut().insert(
            name.to_string(),
            MemoSlot {
                value,
                error,
                binding: binding.clone(),
            },
        );
        binding
    }

    /// Like [`field`](Self::field) but refuses names the store does not know.
    pub fn try_field(&self, name: &str) -> FormResult<Rc<FieldBinding>> {
        if !self.store.contains(name) {
            return Err(FormError::UnknownField(name.to_string()));
        }
        Ok(self.field(name))
    }

    pub fn invalidate(&self, name: &str) -> bool {
        self.slots.borrow_mut().remove(name).is_some()
    }

    pub fn clear(&self) {
        self.slots.borrow_mut().clear();
    }

    pub fn cached_len(&self) -> usize {
        self.slots.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChangeEvent, Form};

    #[test]
    fn test_same_rc_while_inputs_unchanged() {
        let form = Form::new([("name", "Jane")]);
        let binder = FieldBinder::new(form.clone());

        let a = binder.field("name");
        let b = binder.field("name");
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(binder.cached_len(), 1);
    }

    #[test]
    fn test_recomputes_on_value_change() {
        let form = Form::new([("name", "Jane")]);
        let binder = FieldBinder::new(form.clone());

        let a = binder.field("name");
        a.as_scalar().unwrap().on_change(ChangeEvent::new("Janet"));

        let b = binder.field("name");
        assert!(!Rc::ptr_eq(&a, &b));
        assert_eq!(b.as_scalar().unwrap().value.as_deref(), Some("Janet"));
    }

    #[test]
    fn test_writing_same_value_keeps_binding() {
        let form = Form::new([("n", "x")]);
        let binder = FieldBinder::new(form.clone());
        let a = binder.field("n");
        form.set_data("n", FieldValue::from("x"));
        assert!(Rc::ptr_eq(&a, &binder.field("n")));
    }

    #[test]
    fn test_invalidate_forces_new_binding() {
        let form = Form::new([("n", "x")]);
        let binder = FieldBinder::new(form);
        let a = binder.field("n");
        assert!(binder.invalidate("n"));
        assert!(!Rc::ptr_eq(&a, &binder.field("n")));
        binder.clear();
        assert_eq!(binder.cached_len(), 0);
    }

    #[test]
    fn test_try_field_rejects_unknown() {
        let form = Form::new([("n", "x")]);
        let binder = FieldBinder::new(form);
        assert!(binder.try_field("n").is_ok());
        assert_eq!(
            binder.try_field("nope").unwrap_err(),
            FormError::UnknownField("nope".into())
        );
        // the permissive path still answers
        assert!(binder.field("nope").as_scalar().unwrap().value.is_none());
    }
}
