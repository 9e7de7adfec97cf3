use crate::error::Result;

/// An ordered, index-addressable collection.
///
/// Positional operations report bad indices through [`ListError`](crate::ListError)
/// instead of panicking. Searches take anything the element type can be compared
/// with, so a `List<String>` can be searched with a `&str`.
pub trait List<T> {
    /// Appends `item` after the last element.
    fn push(&mut self, item: T);

    /// Inserts `item` at `index`, shifting later elements right.
    /// `index == len()` appends.
    fn insert(&mut self, index: usize, item: T) -> Result<()>;

    /// Removes and returns the element at `index`, shifting later elements left.
    fn remove(&mut self, index: usize) -> Result<T>;

    /// Removes the first element equal to `item`. Returns false if there is none.
    fn remove_item<Q: ?Sized>(&mut self, item: &Q) -> bool
    where
        T: PartialEq<Q>;

    /// Returns a reference to the element at `index`.
    fn get(&self, index: usize) -> Result<&T>;

    /// Replaces the element at `index`, returning the old one.
    fn set(&mut self, index: usize, item: T) -> Result<T>;

    /// Returns true if any element equals `item`.
    fn contains<Q: ?Sized>(&self, item: &Q) -> bool
    where
        T: PartialEq<Q>,
    {
        self.index_of(item).is_some()
    }

    /// Index of the first element equal to `item`.
    fn index_of<Q: ?Sized>(&self, item: &Q) -> Option<usize>
    where
        T: PartialEq<Q>;

    /// Index of the last element equal to `item`.
    fn last_index_of<Q: ?Sized>(&self, item: &Q) -> Option<usize>
    where
        T: PartialEq<Q>;

    /// Number of elements in the list.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every element.
    fn clear(&mut self);
}
