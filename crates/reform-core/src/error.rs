use crate::FieldKind;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("field '{name}' is declared as {expected} but received a {found} value")]
    KindMismatch {
        name: String,
        expected: FieldKind,
        found: FieldKind,
    },

    #[error("field '{0}' is declared more than once")]
    DuplicateField(String),
}

pub type FormResult<T> = Result<T, FormError>;
