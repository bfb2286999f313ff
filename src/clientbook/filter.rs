//! # Filtered Views
//!
//! A [`FilteredList`] is a live, read-only projection of a book through a
//! [`Predicate`]. It is a handle: cloning it is cheap, and every clone sees
//! the same backing book and the same installed predicate. A UI can keep a
//! handle for as long as it likes and read through it after any mutation
//! without asking the model for a fresh one.
//!
//! ## Lazy Re-evaluation
//!
//! Nothing is recomputed when the book or the predicate changes. Instead,
//! each read compares a [`ViewStamp`] (book version, predicate version)
//! against the stamp of the cached visible indices and only re-filters when
//! they differ. Reads therefore always agree with the current state, and a
//! burst of mutations costs one re-filter on the next read.
//!
//! Handles must not be read from inside a predicate; the shared state is
//! borrowed for the duration of a read.

use crate::book::Listing;
use crate::model::{Client, Entity, Tag};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A cloneable test over entities.
pub struct Predicate<T> {
    test: Rc<dyn Fn(&T) -> bool>,
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            test: Rc::clone(&self.test),
        }
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

impl<T: 'static> Predicate<T> {
    pub fn new(test: impl Fn(&T) -> bool + 'static) -> Self {
        Self {
            test: Rc::new(test),
        }
    }

    /// Shows everything.
    pub fn all() -> Self {
        Self::new(|_| true)
    }

    pub fn test(&self, item: &T) -> bool {
        (self.test)(item)
    }

    pub fn and(self, other: Predicate<T>) -> Self {
        Self::new(move |item| self.test(item) && other.test(item))
    }
}

impl<T: Entity + 'static> Predicate<T> {
    /// Matches entries whose name contains any of `keywords` as a whole
    /// word, ignoring case. A keyword holding several words counts as each
    /// of them. No keywords matches nothing.
    pub fn name_contains_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .flat_map(|k| {
                k.as_ref()
                    .split_whitespace()
                    .map(str::to_lowercase)
                    .collect::<Vec<_>>()
            })
            .collect();

        Self::new(move |item: &T| {
            let name = item.name().as_str().to_lowercase();
            name.split_whitespace()
                .any(|word| keywords.iter().any(|k| k == word))
        })
    }

    pub fn has_tag(tag: Tag) -> Self {
        Self::new(move |item: &T| item.tags().contains(&tag))
    }
}

impl Predicate<Client> {
    pub fn buyers_only() -> Self {
        Self::new(Client::is_buyer)
    }
}

impl<T: 'static> Default for Predicate<T> {
    fn default() -> Self {
        Self::all()
    }
}

/// Identifies one state of a filtered view. Two reads with the same stamp
/// see the same contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewStamp {
    pub source: u64,
    pub predicate: u64,
}

struct FilterState<T> {
    predicate: Predicate<T>,
    predicate_version: u64,
    cache: Option<VisibleCache>,
}

struct VisibleCache {
    stamp: ViewStamp,
    visible: Vec<usize>,
}

/// Live, read-only view of a book through its installed predicate.
pub struct FilteredList<S: Listing> {
    source: Rc<RefCell<S>>,
    state: Rc<RefCell<FilterState<S::Item>>>,
}

pub type FilteredClientList = FilteredList<crate::book::AddressBook>;
pub type FilteredSellerList = FilteredList<crate::book::SellerAddressBook>;

impl<S: Listing> Clone for FilteredList<S> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            state: Rc::clone(&self.state),
        }
    }
}

impl<S: Listing> FilteredList<S>
where
    S::Item: 'static,
{
    /// A view of `source` showing everything.
    pub fn new(source: Rc<RefCell<S>>) -> Self {
        Self {
            source,
            state: Rc::new(RefCell::new(FilterState {
                predicate: Predicate::all(),
                predicate_version: 0,
                cache: None,
            })),
        }
    }

    /// Installs `predicate`; the next read reflects it.
    pub fn set_predicate(&self, predicate: Predicate<S::Item>) {
        let mut state = self.state.borrow_mut();
        state.predicate = predicate;
        state.predicate_version += 1;
    }

    pub fn predicate(&self) -> Predicate<S::Item> {
        self.state.borrow().predicate.clone()
    }

    /// The current stamp. Cheap: does not re-filter.
    pub fn stamp(&self) -> ViewStamp {
        ViewStamp {
            source: self.source.borrow().version(),
            predicate: self.state.borrow().predicate_version,
        }
    }

    pub fn len(&self) -> usize {
        self.with_visible(|_, visible| visible.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<S::Item> {
        self.with_visible(|items, visible| visible.get(index).map(|&i| items[i].clone()))
    }

    /// Snapshot of the visible entries, in book order.
    pub fn to_vec(&self) -> Vec<S::Item> {
        self.with_visible(|items, visible| visible.iter().map(|&i| items[i].clone()).collect())
    }

    /// Structural membership among the visible entries.
    pub fn contains(&self, item: &S::Item) -> bool {
        self.with_visible(|items, visible| visible.iter().any(|&i| &items[i] == item))
    }

    /// Runs `f` over the book's items and the indices currently visible,
    /// re-filtering first if the cached indices are stale.
    fn with_visible<R>(&self, f: impl FnOnce(&[S::Item], &[usize]) -> R) -> R {
        let source = self.source.borrow();
        let mut state = self.state.borrow_mut();
        let stamp = ViewStamp {
            source: source.version(),
            predicate: state.predicate_version,
        };

        let cached = state.cache.take();
        let cache = match cached {
            Some(cache) if cache.stamp == stamp => cache,
            _ => {
                let visible = source
                    .items()
                    .iter()
                    .enumerate()
                    .filter(|(_, item)| state.predicate.test(item))
                    .map(|(i, _)| i)
                    .collect();
                tracing::trace!(?stamp, "re-filtered view");
                VisibleCache { stamp, visible }
            }
        };

        let result = f(source.items(), &cache.visible);
        state.cache = Some(cache);
        result
    }
}

impl<S: Listing> fmt::Debug for FilteredList<S>
where
    S::Item: 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteredList")
            .field("stamp", &self.stamp())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::{AddressBook, SellerAddressBook};
    use crate::store::memory::fixtures::{buyer, client, seller};

    fn view_of(names: &[&str]) -> (Rc<RefCell<AddressBook>>, FilteredClientList) {
        let mut book = AddressBook::new();
        for name in names {
            book.add_client(client(name)).unwrap();
        }
        let source = Rc::new(RefCell::new(book));
        let view = FilteredList::new(Rc::clone(&source));
        (source, view)
    }

    fn names(view: &FilteredClientList) -> Vec<String> {
        view.to_vec().iter().map(|c| c.name.to_string()).collect()
    }

    #[test]
    fn test_shows_everything_by_default() {
        let (_, view) = view_of(&["Alice", "Bob"]);
        assert_eq!(names(&view), ["Alice", "Bob"]);
    }

    #[test]
    fn test_predicate_keeps_book_order() {
        let (_, view) = view_of(&["Alice Pauline", "Bob", "Alice Tan", "Carl"]);
        view.set_predicate(Predicate::name_contains_keywords(["alice"]));
        assert_eq!(names(&view), ["Alice Pauline", "Alice Tan"]);
        assert_eq!(view.get(1).unwrap().name.as_str(), "Alice Tan");
        assert!(view.get(2).is_none());
    }

    #[test]
    fn test_follows_book_mutations() {
        let (source, view) = view_of(&["Alice"]);
        view.set_predicate(Predicate::name_contains_keywords(["alice", "ann"]));
        assert_eq!(view.len(), 1);

        source.borrow_mut().add_client(client("Ann")).unwrap();
        source.borrow_mut().add_client(client("Bob")).unwrap();
        assert_eq!(names(&view), ["Alice", "Ann"]);

        source.borrow_mut().remove_client(&client("Alice")).unwrap();
        assert_eq!(names(&view), ["Ann"]);
    }

    #[test]
    fn test_clones_share_predicate() {
        let (_, view) = view_of(&["Alice", "Bob"]);
        let held = view.clone();
        view.set_predicate(Predicate::new(|c: &Client| c.name.as_str() == "Bob"));
        assert_eq!(names(&held), ["Bob"]);
    }

    #[test]
    fn test_stamp_changes_on_either_side() {
        let (source, view) = view_of(&["Alice"]);
        let first = view.stamp();

        view.set_predicate(Predicate::all());
        let second = view.stamp();
        assert_ne!(first, second);

        source.borrow_mut().add_client(client("Bob")).unwrap();
        assert_ne!(second, view.stamp());
    }

    #[test]
    fn test_buyers_only_and_tags() {
        let mut book = AddressBook::new();
        book.add_client(client("Alice")).unwrap();
        book.add_buyer(buyer("Benson")).unwrap();
        let view = FilteredList::new(Rc::new(RefCell::new(book)));

        view.set_predicate(Predicate::buyers_only());
        assert_eq!(names(&view), ["Benson"]);

        let friends = Tag::new("friends").unwrap();
        view.set_predicate(Predicate::has_tag(friends).and(Predicate::buyers_only()));
        assert_eq!(names(&view), ["Benson"]);
    }

    #[test]
    fn test_multi_word_keyword_splits() {
        let (_, view) = view_of(&["Alice Pauline", "Bob", "Carl Pauline"]);
        view.set_predicate(Predicate::name_contains_keywords(["alice pauline"]));
        assert_eq!(names(&view), ["Alice Pauline", "Carl Pauline"]);

        view.set_predicate(Predicate::name_contains_keywords(["  bob\t"]));
        assert_eq!(names(&view), ["Bob"]);
    }

    #[test]
    fn test_no_keywords_matches_nothing() {
        let (_, view) = view_of(&["Alice"]);
        view.set_predicate(Predicate::name_contains_keywords(Vec::<String>::new()));
        assert!(view.is_empty());

        view.set_predicate(Predicate::name_contains_keywords(["   "]));
        assert!(view.is_empty());
    }

    #[test]
    fn test_seller_view() {
        let mut book = SellerAddressBook::new();
        book.add_seller(seller("Carl Kurz")).unwrap();
        book.add_seller(seller("Daniel Meier")).unwrap();
        let view: FilteredSellerList = FilteredList::new(Rc::new(RefCell::new(book)));

        view.set_predicate(Predicate::name_contains_keywords(["MEIER"]));
        assert_eq!(view.len(), 1);
        assert!(view.contains(&seller("Daniel Meier")));
    }
}
