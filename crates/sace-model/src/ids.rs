#![deny(unsafe_code)]

use std::fmt;

use crate::SaceError;

/// Declares a trimmed, non-empty key of a timetable export record.
///
/// Exports write keys as numbers or strings; both arrive here as text.
/// Deserialization goes through the same check as `new`.
macro_rules! source_key {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Record kind named in errors.
            pub const KIND: &'static str = $kind;

            pub fn new(value: impl Into<String>) -> Result<Self, SaceError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(SaceError::EmptyIdentifier { kind: Self::KIND });
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = SaceError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

source_key!(
    /// `TeacherID` of a teacher in the timetable export.
    TeacherId,
    "teacher"
);

source_key!(
    /// `ClassNameID` of a class name record; timetable slots refer to it.
    ClassNameId,
    "class name"
);
