//! # Form widgets
//!
//! Headless controls on top of [`reform_core`] bindings. A widget takes the
//! binding variant it needs, exposes gesture methods (`input`, `toggle`,
//! `choose`, `set_query`, `select_date`, ...) that write through the binding, and
//! describes itself as a [`FieldView`] for whatever renders it.
//!
//! ```rust
//! use reform_core::{FieldBinder, FieldValue, Form, FormStore};
//! use reform_widgets::{FieldChrome, FormInput, Widget};
//!
//! let form = Form::new([("name", FieldValue::from("Jane"))]);
//! let binder = FieldBinder::new(form.clone());
//!
//! let input = FormInput::for_field(&binder, "name")
//!     .unwrap()
//!     .chrome(FieldChrome::new().label("Name"));
//! input.input("Janet");
//!
//! assert_eq!(form.value("name"), Some(FieldValue::from("Janet")));
//! assert_eq!(input.view().label.unwrap().text, "Name");
//! ```
//!
//! Widgets hold a snapshot of their binding. After a write, fetch a fresh one
//! from the [`FieldBinder`](reform_core::FieldBinder) on the next render.

pub mod checkbox;
pub mod chrome;
pub mod combo_box;
pub mod date;
pub mod error;
pub mod input;
pub mod multi_select;
pub mod options;
pub mod select;
mod variant;
pub mod view;

pub use checkbox::*;
pub use chrome::*;
pub use combo_box::*;
pub use date::*;
pub use error::*;
pub use input::*;
pub use multi_select::*;
pub use options::*;
pub use select::*;
pub use view::*;
