//! # Forms, fields, and bindings
//!
//! Reform connects form state to input widgets. There are three pieces:
//!
//! - [`Form`]: a clonable store of field values and errors.
//! - [`bind`]: turns one field into a [`FieldBinding`] shaped for the widget
//!   that will show it.
//! - [`FieldBinder`]: memoizes bindings per field so unchanged fields hand out
//!   the same `Rc` on every render.
//!
//! ## Binding shapes
//!
//! Each field has a [`FieldKind`], declared when the form is built:
//!
//! - `Boolean` → [`BooleanField`]: `checked` and `on_boolean_change(bool)`.
//! - `Array` → [`ArrayField`]: `value` and `on_change(Vec<Scalar>)`, which
//!   replaces the whole list.
//! - `Scalar` → [`ScalarField`]: `value` as a display string and
//!   `on_change(ChangeEvent)`.
//!
//! ```rust
//! use reform_core::*;
//!
//! let form = Form::builder()
//!     .boolean("agreed_to_terms", false)
//!     .array("tags", vec!["a", "b"])
//!     .scalar("name", "Jane")
//!     .build()
//!     .unwrap();
//! let binder = FieldBinder::new(form.clone());
//!
//! binder.field("agreed_to_terms").as_boolean().unwrap().on_boolean_change(true);
//! binder.field("tags").as_array().unwrap().toggle(Scalar::from("a"));
//! binder.field("name").as_scalar().unwrap().on_change(ChangeEvent::new("Janet"));
//!
//! assert_eq!(form.value("agreed_to_terms"), Some(FieldValue::Bool(true)));
//! assert_eq!(form.value("tags"), Some(FieldValue::from(vec!["b"])));
//! assert_eq!(form.value("name"), Some(FieldValue::from("Janet")));
//! ```
//!
//! Any type implementing [`FormStore`] can stand in for [`Form`].

pub mod binder;
pub mod binding;
pub mod error;
pub mod form;
pub mod tests;
pub mod value;

pub use binder::*;
pub use binding::*;
pub use error::*;
pub use form::*;
pub use value::*;
