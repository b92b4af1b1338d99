use crate::error::CoreError;

/// Implemented by request payloads that must be checked before they reach a
/// collection.
pub trait Validate {
    fn validate(&self) -> Result<(), CoreError>;
}

/// A required text field must contain something other than whitespace.
pub fn required(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::MissingField(field));
    }
    Ok(())
}

/// A patch may leave a required field alone, but may not blank it.
pub fn required_if_present(field: &'static str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) => required(field, v),
        None => Ok(()),
    }
}

/// Loose address check. Empty is accepted; the console treats email as optional.
pub fn email(field: &'static str, value: Option<&str>) -> Result<(), CoreError> {
    let Some(v) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(());
    };
    match v.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(CoreError::InvalidField {
            field,
            reason: format!("'{v}' is not an email address"),
        }),
    }
}

/// Ids are assigned from 1, so zero never refers to a record.
pub fn id(field: &'static str, value: u32) -> Result<(), CoreError> {
    if value == 0 {
        return Err(CoreError::InvalidField {
            field,
            reason: "must be a positive id".to_string(),
        });
    }
    Ok(())
}

/// Case-insensitive substring test. `needle` must already be lowercase.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Same as [`contains_folded`] for optional fields; `None` never matches.
pub fn opt_contains_folded(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| contains_folded(h, needle))
}
