use reform_core::{FieldKind, FormError};
use reform_time::DateError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WidgetError {
    #[error("field '{name}' is bound as {found}; this widget needs {expected}")]
    WrongVariant {
        name: String,
        expected: FieldKind,
        found: FieldKind,
    },

    #[error(transparent)]
    Date(#[from] DateError),

    #[error(transparent)]
    Form(#[from] FormError),
}

pub type WidgetResult<T> = Result<T, WidgetError>;
