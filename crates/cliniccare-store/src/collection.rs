use jiff::Timestamp;

use cliniccare_core::validate::Validate;
use cliniccare_core::Entity;

use crate::error::StoreError;

/// An insertion-ordered run of records of one kind.
///
/// Lookups are linear scans. Ids are assigned as one past the current
/// maximum, so an id freed by a delete of the newest record is handed out
/// again.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> Collection<T> {
    /// Seed a collection. Fails on the first repeated id.
    pub fn from_records(items: Vec<T>) -> Result<Self, StoreError> {
        let mut seen = std::collections::HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(StoreError::DuplicateId {
                    kind: T::KIND,
                    id: item.id(),
                });
            }
        }
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn get(&self, id: u32) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    /// Id the next `create` will assign. Fails once the highest id is
    /// `u32::MAX`.
    pub fn next_id(&self) -> Result<u32, StoreError> {
        match self.items.iter().map(|item| item.id()).max() {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or(StoreError::IdsExhausted { kind: T::KIND }),
        }
    }

    pub fn create(&mut self, input: T::New) -> Result<T, StoreError>
    where
        T::New: Validate,
    {
        self.create_at(input, Timestamp::now())
    }

    pub fn create_at(&mut self, input: T::New, now: Timestamp) -> Result<T, StoreError>
    where
        T::New: Validate,
    {
        input.validate()?;

        let id = self.next_id()?;
        let record = T::create(id, input, now);
        self.items.push(record.clone());

        tracing::debug!(kind = T::KIND, id, "record created");
        Ok(record)
    }

    pub fn update(&mut self, id: u32, patch: T::Patch) -> Result<T, StoreError> {
        self.update_at(id, patch, Timestamp::now())
    }

    pub fn update_at(&mut self, id: u32, patch: T::Patch, now: Timestamp) -> Result<T, StoreError> {
        let record = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(StoreError::NotFound { kind: T::KIND, id })?;

        record.apply(patch, now)?;

        tracing::debug!(kind = T::KIND, id, "record updated");
        Ok(record.clone())
    }

    /// Remove a record. Records in other collections that point at it are
    /// left in place.
    pub fn delete(&mut self, id: u32) -> Result<T, StoreError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(StoreError::NotFound { kind: T::KIND, id })?;

        let removed = self.items.remove(index);
        tracing::debug!(kind = T::KIND, id, "record deleted");
        Ok(removed)
    }
}
