use serde::{Deserialize, Deserializer};

/// Presence-aware wrapper for PATCH request fields.
///
/// JSON PATCH bodies need three states per field: the key is missing
/// (leave the stored value alone), the key is `null` (clear the value),
/// or the key carries a value (apply it). A bare `Option` collapses the
/// first two, so patch DTOs wrap every field in `PatchField` instead.
///
/// Fields must be tagged `#[serde(default)]`: serde only invokes the
/// deserializer when the key is present, so a missing key falls back to
/// [`PatchField::Absent`] while an explicit `null` becomes
/// [`PatchField::Null`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchField<T> {
    /// Key missing from the request body; do not touch the field.
    Absent,
    /// Key present with an explicit `null`.
    Null,
    /// Key present with a value.
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Absent
    }
}

impl<T> PatchField<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, PatchField::Absent)
    }

    /// The carried value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            PatchField::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<'de, T> Deserialize<'de> for PatchField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => PatchField::Value(value),
            None => PatchField::Null,
        })
    }
}
