use crate::error::{ClientbookError, Result};
use crate::model::Entity;
use std::cmp::Ordering;

/// An ordered list that never holds two entries that are the same under
/// domain equality ([`Entity::is_same`]).
///
/// Mutation targets (`set`, `remove`) are located by full structural
/// equality: callers pass back the exact entry they read. Every successful
/// mutation bumps `version`, which filtered views use to decide whether their
/// cached visibility is stale.
#[derive(Debug, Clone)]
pub struct UniqueList<T: Entity> {
    items: Vec<T>,
    version: u64,
}

impl<T: Entity> Default for UniqueList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            version: 0,
        }
    }
}

impl<T: Entity> UniqueList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from `items`, rejecting the whole input if any two
    /// entries are the same.
    pub fn from_items(items: Vec<T>) -> Result<Self> {
        let mut list = Self::new();
        list.set_all(items)?;
        Ok(list)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|existing| existing.is_same(item))
    }

    pub fn add(&mut self, item: T) -> Result<()> {
        if self.contains(&item) {
            return Err(duplicate(&item));
        }
        self.items.push(item);
        self.bump();
        Ok(())
    }

    /// Replaces `target` with `edited`, keeping its position.
    pub fn set(&mut self, target: &T, edited: T) -> Result<()> {
        let index = self.position(target).ok_or_else(|| not_found(target))?;

        if !target.is_same(&edited) && self.contains(&edited) {
            return Err(duplicate(&edited));
        }

        self.items[index] = edited;
        self.bump();
        Ok(())
    }

    pub fn remove(&mut self, target: &T) -> Result<T> {
        let index = self.position(target).ok_or_else(|| not_found(target))?;
        let removed = self.items.remove(index);
        self.bump();
        Ok(removed)
    }

    /// Replaces the whole contents. Leaves the list untouched on error.
    pub fn set_all(&mut self, items: Vec<T>) -> Result<()> {
        for (i, item) in items.iter().enumerate() {
            if items[i + 1..].iter().any(|other| other.is_same(item)) {
                return Err(duplicate(item));
            }
        }
        self.items = items;
        self.bump();
        Ok(())
    }

    /// Stable sort.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.items.sort_by(compare);
        self.bump();
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    fn position(&self, target: &T) -> Option<usize> {
        self.items.iter().position(|item| item == target)
    }

    fn bump(&mut self) {
        self.version += 1;
    }
}

/// Equality ignores the version counter.
impl<T: Entity> PartialEq for UniqueList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<'a, T: Entity> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn duplicate<T: Entity>(item: &T) -> ClientbookError {
    ClientbookError::DuplicateEntity {
        kind: T::KIND,
        name: item.name().to_string(),
    }
}

fn not_found<T: Entity>(item: &T) -> ClientbookError {
    ClientbookError::EntityNotFound {
        kind: T::KIND,
        name: item.name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{client, seller};

    #[test]
    fn test_add_rejects_same_name() {
        let mut list = UniqueList::new();
        list.add(client("Alice Pauline")).unwrap();

        let mut twin = client("Alice Pauline");
        twin.phone = crate::model::Phone::new("11111111").unwrap();
        let err = list.add(twin).unwrap_err();

        assert!(matches!(
            err,
            ClientbookError::DuplicateEntity { kind: "client", .. }
        ));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_set_keeps_position() {
        let mut list =
            UniqueList::from_items(vec![client("Alice"), client("Bob"), client("Carl")]).unwrap();
        list.set(&client("Bob"), client("Bernice")).unwrap();

        let names: Vec<_> = list.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bernice", "Carl"]);
    }

    #[test]
    fn test_set_same_identity_with_edits_is_allowed() {
        let mut list = UniqueList::from_items(vec![client("Alice")]).unwrap();
        let mut edited = client("Alice");
        edited.address = crate::model::Address::new("Changi Village").unwrap();

        list.set(&client("Alice"), edited.clone()).unwrap();
        assert_eq!(list.as_slice(), [edited]);
    }

    #[test]
    fn test_set_rejects_collision_with_other_entry() {
        let mut list = UniqueList::from_items(vec![client("Alice"), client("Bob")]).unwrap();
        let err = list.set(&client("Alice"), client("Bob")).unwrap_err();
        assert!(matches!(err, ClientbookError::DuplicateEntity { .. }));
        assert_eq!(list.as_slice()[0], client("Alice"));
    }

    #[test]
    fn test_set_missing_target() {
        let mut list = UniqueList::from_items(vec![client("Alice")]).unwrap();
        let err = list.set(&client("Zed"), client("Zack")).unwrap_err();
        assert!(matches!(err, ClientbookError::EntityNotFound { .. }));
    }

    #[test]
    fn test_remove_missing_leaves_list_unchanged() {
        let mut list = UniqueList::from_items(vec![seller("Carl")]).unwrap();
        let version = list.version();

        let err = list.remove(&seller("Daniel")).unwrap_err();
        assert!(matches!(
            err,
            ClientbookError::EntityNotFound { kind: "seller", .. }
        ));
        assert_eq!(list.len(), 1);
        assert_eq!(list.version(), version);
    }

    #[test]
    fn test_set_all_rejects_duplicates_atomically() {
        let mut list = UniqueList::from_items(vec![client("Alice")]).unwrap();
        let err = list
            .set_all(vec![client("Bob"), client("Carl"), client("Bob")])
            .unwrap_err();
        assert!(matches!(err, ClientbookError::DuplicateEntity { .. }));
        assert_eq!(list.as_slice(), [client("Alice")]);
    }

    #[test]
    fn test_every_mutation_bumps_version() {
        let mut list = UniqueList::new();
        let v0 = list.version();
        list.add(client("Bob")).unwrap();
        let v1 = list.version();
        list.add(client("Alice")).unwrap();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        let v2 = list.version();
        list.remove(&client("Bob")).unwrap();

        assert!(v0 < v1 && v1 < v2 && v2 < list.version());
    }
}
