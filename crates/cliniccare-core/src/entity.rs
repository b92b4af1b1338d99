use jiff::Timestamp;

use crate::error::CoreError;

/// A record kind held in an id-keyed collection.
///
/// Creation takes a validated input and a server-assigned id and time.
/// Updates are shallow merges of a patch type whose fields are all optional.
pub trait Entity: Clone {
    /// Singular name used in logs and errors (`"patient"`, `"branch"`, ...).
    const KIND: &'static str;

    type New;
    type Patch;

    fn id(&self) -> u32;

    /// Build a stored record. `input` must already have passed validation.
    fn create(id: u32, input: Self::New, now: Timestamp) -> Self;

    /// Merge `patch` into `self`. On error `self` is left untouched.
    fn apply(&mut self, patch: Self::Patch, now: Timestamp) -> Result<(), CoreError>;

    /// Text search over the kind's searchable fields. `needle` is lowercase
    /// and non-empty.
    fn matches_search(&self, needle: &str) -> bool;
}
