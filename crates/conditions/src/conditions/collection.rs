//! Collection conditions
//!
//! Membership is always decided by walking the elements and comparing with
//! `PartialEq` (or the equality passed to
//! [`contains_by`](CollectionConditions::contains_by)). A set's own lookup is
//! never consulted, so a set built with a custom hasher or ordering is still
//! searched element by element.
//!
//! Maps are collections of their keys.
//!
//! `Option<C>` is the null collection: `None` has length 0 and contains
//! nothing. A failing check on `None` reports
//! [`ArgumentNull`](crate::ConditionError::ArgumentNull).
//!
//! The element lists taken by [`contains_any`](CollectionConditions::contains_any)
//! and its siblings accept anything iterable: arrays, `Vec`s, sets, ranges or
//! iterator chains. The list is collected once before it is searched.

use std::collections::{
    BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque, binary_heap,
    btree_map, btree_set, hash_map, hash_set, linked_list, vec_deque,
};
use std::fmt::Debug;
use std::iter::Flatten;
use std::{option, slice};

use crate::foundation::{ConditionError, ConditionFailure, Validator};

// ============================================================================
// COLLECTION
// ============================================================================

/// A possibly-null, finite sequence of elements.
pub trait Collection {
    /// Element type.
    type Item;

    /// Iterator over the elements.
    type Elements<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Iterates the elements. A null collection yields nothing.
    fn elements(&self) -> Self::Elements<'_>;

    /// Number of elements. A null collection has none.
    fn element_count(&self) -> usize;

    /// Whether this is the null collection.
    fn is_null(&self) -> bool {
        false
    }
}

impl<T> Collection for [T] {
    type Item = T;
    type Elements<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }

    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;
    type Elements<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }

    fn element_count(&self) -> usize {
        N
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;
    type Elements<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }

    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for VecDeque<T> {
    type Item = T;
    type Elements<'a>
        = vec_deque::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }

    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T, S> Collection for HashSet<T, S> {
    type Item = T;
    type Elements<'a>
        = hash_set::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }

    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for BTreeSet<T> {
    type Item = T;
    type Elements<'a>
        = btree_set::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }

    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for LinkedList<T> {
    type Item = T;
    type Elements<'a>
        = linked_list::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }

    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for BinaryHeap<T> {
    type Item = T;
    type Elements<'a>
        = binary_heap::Iter<'a, T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }

    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Collection for HashMap<K, V, S> {
    type Item = K;
    type Elements<'a>
        = hash_map::Keys<'a, K, V>
    where
        Self: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        self.keys()
    }

    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Item = K;
    type Elements<'a>
        = btree_map::Keys<'a, K, V>
    where
        Self: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        self.keys()
    }

    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<C: Collection + ?Sized> Collection for Box<C> {
    type Item = C::Item;
    type Elements<'a>
        = C::Elements<'a>
    where
        Self: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        (**self).elements()
    }

    fn element_count(&self) -> usize {
        (**self).element_count()
    }

    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<C: Collection + ?Sized> Collection for &C {
    type Item = C::Item;
    type Elements<'a>
        = C::Elements<'a>
    where
        Self: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        (**self).elements()
    }

    fn element_count(&self) -> usize {
        (**self).element_count()
    }

    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<C: Collection> Collection for Option<C> {
    type Item = C::Item;
    type Elements<'a>
        = Flatten<option::IntoIter<C::Elements<'a>>>
    where
        Self: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        self.as_ref().map(Collection::elements).into_iter().flatten()
    }

    fn element_count(&self) -> usize {
        self.as_ref().map_or(0, Collection::element_count)
    }

    fn is_null(&self) -> bool {
        self.as_ref().is_none_or(Collection::is_null)
    }
}

// ============================================================================
// COLLECTION CONDITIONS
// ============================================================================

/// Condition methods for collections.
///
/// ```
/// use conditions::prelude::*;
///
/// let ids = vec![3, 5, 8];
/// let ids = requires(ids, "ids")
///     .is_not_empty()?
///     .is_shorter_or_equal(10)?
///     .does_not_contain(0)?
///     .into_value();
/// assert_eq!(ids.len(), 3);
/// # Ok::<(), ConditionError>(())
/// ```
pub trait CollectionConditions: Sized {
    /// Element type of the wrapped collection.
    type Item;

    /// Checks that the collection has no elements. Null passes.
    fn is_empty(self) -> Result<Self, ConditionError>;

    /// Checks that the collection has at least one element. Null fails.
    fn is_not_empty(self) -> Result<Self, ConditionError>;

    /// Checks that the collection has exactly `length` elements.
    fn has_length(self, length: usize) -> Result<Self, ConditionError>;

    /// Checks that the collection does not have exactly `length` elements.
    fn does_not_have_length(self, length: usize) -> Result<Self, ConditionError>;

    /// Checks that the collection has fewer than `length` elements.
    fn is_shorter_than(self, length: usize) -> Result<Self, ConditionError>;

    /// Checks that the collection has at most `length` elements.
    fn is_shorter_or_equal(self, length: usize) -> Result<Self, ConditionError>;

    /// Checks that the collection has more than `length` elements.
    fn is_longer_than(self, length: usize) -> Result<Self, ConditionError>;

    /// Checks that the collection has at least `length` elements.
    fn is_longer_or_equal(self, length: usize) -> Result<Self, ConditionError>;

    /// Checks that some element equals `element`.
    fn contains<Q>(self, element: Q) -> Result<Self, ConditionError>
    where
        Self::Item: PartialEq<Q>,
        Q: Debug;

    /// Checks that no element equals `element`.
    fn does_not_contain<Q>(self, element: Q) -> Result<Self, ConditionError>
    where
        Self::Item: PartialEq<Q>,
        Q: Debug;

    /// Checks that some element equals `element` under `eq`.
    ///
    /// ```
    /// use conditions::prelude::*;
    ///
    /// let tags = ["Alpha", "beta"];
    /// let check = requires(tags, "tags")
    ///     .contains_by("ALPHA", |a: &&str, b: &&str| a.eq_ignore_ascii_case(b));
    /// assert!(check.is_ok());
    /// ```
    fn contains_by<Q, F>(self, element: Q, eq: F) -> Result<Self, ConditionError>
    where
        Q: Debug,
        F: FnMut(&Self::Item, &Q) -> bool;

    /// Checks that at least one of `elements` is present. An empty list fails.
    fn contains_any<I>(self, elements: I) -> Result<Self, ConditionError>
    where
        I: IntoIterator,
        Self::Item: PartialEq<I::Item>,
        I::Item: Debug;

    /// Checks that none of `elements` is present. An empty list passes.
    fn does_not_contain_any<I>(self, elements: I) -> Result<Self, ConditionError>
    where
        I: IntoIterator,
        Self::Item: PartialEq<I::Item>,
        I::Item: Debug;

    /// Checks that every one of `elements` is present. An empty list passes.
    fn contains_all<I>(self, elements: I) -> Result<Self, ConditionError>
    where
        I: IntoIterator,
        Self::Item: PartialEq<I::Item>,
        I::Item: Debug;

    /// Checks that at least one of `elements` is missing. An empty list
    /// fails.
    fn does_not_contain_all<I>(self, elements: I) -> Result<Self, ConditionError>
    where
        I: IntoIterator,
        Self::Item: PartialEq<I::Item>,
        I::Item: Debug;
}

fn holds_element<C, Q>(collection: &C, element: &Q) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq<Q>,
{
    collection.elements().any(|item| item == element)
}

fn element_noun(count: usize) -> &'static str {
    if count == 1 { "element" } else { "elements" }
}

fn verify_collection<C, D>(
    validator: Validator<C>,
    holds: bool,
    describe: D,
) -> Result<Validator<C>, ConditionError>
where
    C: Collection,
    D: FnOnce(&str) -> String,
{
    let is_null = validator.value().is_null();
    validator.verify(holds, |name| {
        ConditionFailure::new(describe(name)).with_null_value(is_null)
    })
}

fn verify_count<C, P, D>(
    validator: Validator<C>,
    predicate: P,
    describe: D,
) -> Result<Validator<C>, ConditionError>
where
    C: Collection,
    P: FnOnce(usize) -> bool,
    D: FnOnce(&str) -> String,
{
    let count = validator.value().element_count();
    let is_null = validator.value().is_null();
    validator.verify(predicate(count), |name| {
        ConditionFailure::new(describe(name))
            .with_additional(format!("The actual number of elements is {count}."))
            .with_null_value(is_null)
    })
}

impl<C: Collection> CollectionConditions for Validator<C> {
    type Item = C::Item;

    fn is_empty(self) -> Result<Self, ConditionError> {
        let holds = self.value().element_count() == 0;
        verify_collection(self, holds, |name| format!("{name} should be empty"))
    }

    fn is_not_empty(self) -> Result<Self, ConditionError> {
        let holds = self.value().element_count() > 0;
        verify_collection(self, holds, |name| format!("{name} should not be empty"))
    }

    fn has_length(self, length: usize) -> Result<Self, ConditionError> {
        verify_count(
            self,
            |count| count == length,
            |name| format!("{name} should contain {length} {}", element_noun(length)),
        )
    }

    fn does_not_have_length(self, length: usize) -> Result<Self, ConditionError> {
        verify_count(
            self,
            |count| count != length,
            |name| format!("{name} should not contain {length} {}", element_noun(length)),
        )
    }

    fn is_shorter_than(self, length: usize) -> Result<Self, ConditionError> {
        verify_count(
            self,
            |count| count < length,
            |name| format!("{name} should contain less than {length} {}", element_noun(length)),
        )
    }

    fn is_shorter_or_equal(self, length: usize) -> Result<Self, ConditionError> {
        verify_count(
            self,
            |count| count <= length,
            |name| {
                format!(
                    "{name} should contain less than or equal to {length} {}",
                    element_noun(length)
                )
            },
        )
    }

    fn is_longer_than(self, length: usize) -> Result<Self, ConditionError> {
        verify_count(
            self,
            |count| count > length,
            |name| format!("{name} should contain more than {length} {}", element_noun(length)),
        )
    }

    fn is_longer_or_equal(self, length: usize) -> Result<Self, ConditionError> {
        verify_count(
            self,
            |count| count >= length,
            |name| {
                format!(
                    "{name} should contain more than or equal to {length} {}",
                    element_noun(length)
                )
            },
        )
    }

    fn contains<Q>(self, element: Q) -> Result<Self, ConditionError>
    where
        C::Item: PartialEq<Q>,
        Q: Debug,
    {
        let holds = holds_element(self.value(), &element);
        verify_collection(self, holds, |name| format!("{name} should contain {element:?}"))
    }

    fn does_not_contain<Q>(self, element: Q) -> Result<Self, ConditionError>
    where
        C::Item: PartialEq<Q>,
        Q: Debug,
    {
        let holds = !holds_element(self.value(), &element);
        verify_collection(self, holds, |name| {
            format!("{name} should not contain {element:?}")
        })
    }

    fn contains_by<Q, F>(self, element: Q, mut eq: F) -> Result<Self, ConditionError>
    where
        Q: Debug,
        F: FnMut(&C::Item, &Q) -> bool,
    {
        let holds = self.value().elements().any(|item| eq(item, &element));
        verify_collection(self, holds, |name| format!("{name} should contain {element:?}"))
    }

    fn contains_any<I>(self, elements: I) -> Result<Self, ConditionError>
    where
        I: IntoIterator,
        C::Item: PartialEq<I::Item>,
        I::Item: Debug,
    {
        let elements: Vec<I::Item> = elements.into_iter().collect();
        let holds = elements.iter().any(|e| holds_element(self.value(), e));
        verify_collection(self, holds, |name| {
            format!("{name} should contain one of the following elements: {elements:?}")
        })
    }

    fn does_not_contain_any<I>(self, elements: I) -> Result<Self, ConditionError>
    where
        I: IntoIterator,
        C::Item: PartialEq<I::Item>,
        I::Item: Debug,
    {
        let elements: Vec<I::Item> = elements.into_iter().collect();
        let holds = !elements.iter().any(|e| holds_element(self.value(), e));
        verify_collection(self, holds, |name| {
            format!("{name} should not contain any of the following elements: {elements:?}")
        })
    }

    fn contains_all<I>(self, elements: I) -> Result<Self, ConditionError>
    where
        I: IntoIterator,
        C::Item: PartialEq<I::Item>,
        I::Item: Debug,
    {
        let elements: Vec<I::Item> = elements.into_iter().collect();
        let holds = elements.iter().all(|e| holds_element(self.value(), e));
        verify_collection(self, holds, |name| {
            format!("{name} should contain all of the following elements: {elements:?}")
        })
    }

    fn does_not_contain_all<I>(self, elements: I) -> Result<Self, ConditionError>
    where
        I: IntoIterator,
        C::Item: PartialEq<I::Item>,
        I::Item: Debug,
    {
        let elements: Vec<I::Item> = elements.into_iter().collect();
        let holds = !elements.iter().all(|e| holds_element(self.value(), e));
        verify_collection(self, holds, |name| {
            format!("{name} should not contain all of the following elements: {elements:?}")
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::requires;

    #[test]
    fn test_length_checks() {
        let v = vec![1, 2, 3];
        assert!(requires(&v, "a").has_length(3).is_ok());
        assert!(requires(&v, "a").is_shorter_than(4).is_ok());
        assert!(requires(&v, "a").is_longer_than(2).is_ok());
        assert!(requires(&v, "a").is_longer_or_equal(4).is_err());
        assert!(requires(&v, "a").does_not_have_length(2).is_ok());
        assert!(requires(&v, "a").is_shorter_or_equal(2).is_err());
    }

    #[test]
    fn test_length_message() {
        let err = requires([1, 2], "a").has_length(1).unwrap_err();
        assert_eq!(
            err.message(),
            "a should contain 1 element. The actual number of elements is 2."
        );
        assert!(matches!(err, ConditionError::InvalidArgument(_)));
    }

    #[test]
    fn test_emptiness() {
        assert!(requires(Vec::<u8>::new(), "a").is_empty().is_ok());
        assert!(requires(vec![1], "a").is_empty().is_err());
        assert!(requires(VecDeque::from([1]), "a").is_not_empty().is_ok());
        assert!(requires(BTreeSet::<i32>::new(), "a").is_not_empty().is_err());
    }

    #[test]
    fn test_null_collection() {
        let null: Option<Vec<i32>> = None;
        assert!(requires(null.clone(), "a").is_empty().is_ok());
        assert!(requires(null.clone(), "a").has_length(0).is_ok());
        assert!(requires(null.clone(), "a").does_not_contain(1).is_ok());

        let err = requires(null.clone(), "a").is_not_empty().unwrap_err();
        assert!(matches!(err, ConditionError::ArgumentNull(_)));
        let err = requires(null, "a").contains(1).unwrap_err();
        assert!(matches!(err, ConditionError::ArgumentNull(_)));
    }

    #[test]
    fn test_some_collection_is_not_null() {
        let err = requires(Some(vec![1]), "a").contains(2).unwrap_err();
        assert!(matches!(err, ConditionError::InvalidArgument(_)));
    }

    #[test]
    fn test_contains_with_borrowed_query() {
        let names = vec![String::from("ada"), String::from("grace")];
        assert!(requires(&names, "names").contains("ada").is_ok());
        let err = requires(&names, "names").contains("linus").unwrap_err();
        assert_eq!(err.condition(), "names should contain \"linus\"");
    }

    #[test]
    fn test_empty_query_list() {
        let v = [1, 2];
        let none: [i32; 0] = [];
        assert!(requires(v, "a").contains_any(none).is_err());
        assert!(requires(v, "a").does_not_contain_any(none).is_ok());
        assert!(requires(v, "a").contains_all(none).is_ok());
        assert!(requires(v, "a").does_not_contain_all(none).is_err());
    }

    #[test]
    fn test_any_and_all() {
        let v = HashSet::from([1, 2, 3]);
        assert!(requires(&v, "a").contains_any([9, 3]).is_ok());
        assert!(requires(&v, "a").contains_any([9, 8]).is_err());
        assert!(requires(&v, "a").contains_all([1, 3]).is_ok());
        assert!(requires(&v, "a").contains_all([1, 4]).is_err());
        assert!(requires(&v, "a").does_not_contain_all([1, 4]).is_ok());
        assert!(requires(&v, "a").does_not_contain_any([4, 5]).is_ok());
        assert!(requires(&v, "a").does_not_contain_any([4, 1]).is_err());
    }

    #[test]
    fn test_query_from_any_iterable() {
        let v = vec![1, 2, 3, 4];
        assert!(requires(&v, "a").contains_all(1..=2).is_ok());
        assert!(requires(&v, "a").contains_any(BTreeSet::from([7, 4])).is_ok());
        assert!(requires(&v, "a").does_not_contain_any((5..9).filter(|n| n % 2 == 0)).is_ok());
        let err = requires(&v, "a").contains_all(3..6).unwrap_err();
        assert_eq!(
            err.condition(),
            "a should contain all of the following elements: [3, 4, 5]"
        );
    }

    #[test]
    fn test_query_is_collected_once() {
        let mut calls = 0;
        let query = [1, 2].into_iter().inspect(|_| calls += 1);
        assert!(requires([2, 3], "a").does_not_contain_all(query).is_ok());
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_more_std_collections() {
        let list = LinkedList::from([1, 2]);
        assert!(requires(&list, "a").has_length(2).is_ok());
        assert!(requires(&list, "a").contains(2).is_ok());

        let heap = BinaryHeap::from([5, 1, 3]);
        assert!(requires(&heap, "a").contains_all([1, 5]).is_ok());

        let boxed: Box<[u8]> = Box::new([1, 2]);
        assert!(requires(boxed, "a").does_not_contain(3).is_ok());
    }

    #[test]
    fn test_maps_are_collections_of_keys() {
        let map = HashMap::from([("a", 1), ("b", 2)]);
        assert!(requires(&map, "map").contains("a").is_ok());
        assert!(requires(&map, "map").does_not_contain("z").is_ok());

        let tree = BTreeMap::from([(1, "one")]);
        let err = requires(&tree, "tree").contains_any([2, 3]).unwrap_err();
        assert_eq!(
            err.condition(),
            "tree should contain one of the following elements: [2, 3]"
        );
        assert!(requires(None::<BTreeMap<i32, i32>>, "tree").is_empty().is_ok());
    }

    #[test]
    fn test_slice() {
        let data = [10, 20, 30];
        let slice: &[i32] = &data[..2];
        assert!(requires(slice, "a").has_length(2).is_ok());
        assert!(requires(slice, "a").does_not_contain(30).is_ok());
    }
}
