use reform_core::{ArrayField, BooleanField, FieldBinder, FieldBinding, FieldKind, FormStore, ScalarField};

use crate::{WidgetError, WidgetResult};

fn wrong(binding: &FieldBinding, expected: FieldKind) -> WidgetError {
    WidgetError::WrongVariant {
        name: binding.name().to_string(),
        expected,
        found: binding.kind(),
    }
}

pub(crate) fn scalar(binding: &FieldBinding) -> WidgetResult<ScalarField> {
    binding
        .as_scalar()
        .cloned()
        .ok_or_else(|| wrong(binding, FieldKind::Scalar))
}

pub(crate) fn boolean(binding: &FieldBinding) -> WidgetResult<BooleanField> {
    binding
        .as_boolean()
        .cloned()
        .ok_or_else(|| wrong(binding, FieldKind::Boolean))
}

pub(crate) fn array(binding: &FieldBinding) -> WidgetResult<ArrayField> {
    binding
        .as_array()
        .cloned()
        .ok_or_else(|| wrong(binding, FieldKind::Array))
}

/// Strict lookup: unknown names are an error rather than an empty field.
pub(crate) fn lookup<S>(binder: &FieldBinder<S>, name: &str) -> WidgetResult<std::rc::Rc<FieldBinding>>
where
    S: FormStore + Clone + 'static,
{
    Ok(binder.try_field(name)?)
}
