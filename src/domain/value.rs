use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::validation::ValidationError;

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(Phone::PATTERN).unwrap_or_else(|err| panic!("phone pattern must compile: {err}"))
});

#[derive(Clone, PartialEq, Eq, Hash)]
/// W-API bearer token sent as `Authorization: Bearer <token>`.
///
/// Invariant: non-empty after trimming. `Debug` output is redacted.
pub struct AccessToken(String);

impl AccessToken {
    pub const FIELD: &'static str = "accessToken";

    /// Create a validated [`AccessToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// W-API instance identifier (`instanceId` query parameter).
///
/// Invariant: non-empty after trimming.
pub struct InstanceId(String);

impl InstanceId {
    /// Query parameter name used by W-API (`instanceId`).
    pub const FIELD: &'static str = "instanceId";

    /// Create a validated [`InstanceId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated instance id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient phone number (`phone`).
///
/// Invariant: matches [`Phone::PATTERN`], i.e. digits only: country code, area code and
/// subscriber number, no leading zero (e.g. `5511999999999`). No normalization is applied.
pub struct Phone(String);

impl Phone {
    /// JSON field name used by W-API (`phone`).
    pub const FIELD: &'static str = "phone";

    /// Accepted phone shape: country code, area code and 8 or 9 digit number.
    ///
    /// ASCII digits only; `\d` in `regex` would also match other Unicode digits.
    pub const PATTERN: &'static str = r"^[1-9][0-9]{1,2}[0-9]{2}[0-9]{8,9}$";

    /// Create a validated [`Phone`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !PHONE_PATTERN.is_match(&value) {
            return Err(ValidationError::InvalidPhone { input: value });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Delay before W-API dispatches the message (`delayMessage`), in seconds.
///
/// No range validation is performed; the server decides what it accepts.
pub struct DelayMessage(u32);

impl DelayMessage {
    /// JSON field name used by W-API (`delayMessage`).
    pub const FIELD: &'static str = "delayMessage";

    /// Delay of `seconds` seconds.
    pub fn new(seconds: u32) -> Self {
        Self(seconds)
    }

    /// Delay in seconds.
    pub fn value(self) -> u32 {
        self.0
    }
}
