use std::fmt;

use crate::domain::request::MessageKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    InvalidPhone {
        input: String,
    },
    KindMismatch {
        expected: MessageKind,
        actual: MessageKind,
    },
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field } => field,
            Self::InvalidPhone { .. } => "phone",
            Self::KindMismatch { .. } => "kind",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhone { input } => write!(
                f,
                "invalid phone number: {input} (expected country code + area code + number, e.g. 5511999999999)"
            ),
            Self::KindMismatch { expected, actual } => {
                write!(f, "expected a {expected} message request, got {actual}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Every field error found while validating one request.
///
/// Invariant: never empty.
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Turn collected errors into `Err` when there is at least one.
    pub(crate) fn check(errors: Vec<ValidationError>) -> Result<(), Self> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self(errors))
        }
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Names of the failing fields, in the order they were checked.
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(ValidationError::field).collect()
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.0.iter().any(|err| err.field() == field)
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(value: ValidationError) -> Self {
        Self(vec![value])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, err) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
