//! The value-projecting [`Select`] views.
//!
//! A projection maps every source element through a conversion when it is
//! read. With only a forward conversion the projected *values* cannot be
//! written back; with a forward/inverse pair ([`SelectMut`]) the view is a
//! bidirectional lens and supports the full mutation contract of its
//! source. The conversions are expected to be pure; that is a documented
//! precondition, not an enforced one.

use crate::list::{Error, List, Result};

/// A one-way projection of a source list through `to_value`.
///
/// Value writes ([`set`], [`insert`], [`push`], via-value [`remove`]) are
/// rejected because there is no way back to the source element type, and
/// the view reports itself read-only accordingly. Structural operations
/// that need no value conversion ([`remove_at`] and [`clear`]) still pass
/// through to the source.
///
/// [`set`]: List::set
/// [`insert`]: List::insert
/// [`push`]: List::push
/// [`remove`]: List::remove
/// [`remove_at`]: List::remove_at
/// [`clear`]: List::clear
pub struct Select<S, F> {
    source: S,
    to_value: F,
}

/// A two-way projection of a source list through the `to_value` /
/// `to_source` conversion pair.
///
/// Reads convert source elements with `to_value`; writes convert the given
/// value back with `to_source` before delegating, so every mutation the
/// source supports is available on the view.
///
/// # Examples
///
/// ```
/// use list_view::{select_mut, List};
///
/// let mut items = vec![1, 2, 3, 4];
/// let mut doubled = select_mut(&mut items, |x| x * 2, |x| x / 2);
/// assert_eq!(doubled.to_vec(), vec![2, 4, 6, 8]);
///
/// doubled.push(10)?;
/// assert_eq!(items, vec![1, 2, 3, 4, 5]);
/// # Ok::<(), list_view::Error>(())
/// ```
pub struct SelectMut<S, F, G> {
    source: S,
    to_value: F,
    to_source: G,
}

/// A one-way projection that also receives the logical index, like
/// [`Select`] in every other respect.
pub struct SelectIndexed<S, F> {
    source: S,
    to_value: F,
}

/// Creates a one-way projection of `source` through `to_value`.
///
/// # Examples
///
/// ```
/// use list_view::{select, List};
///
/// let items = vec![1, 2, 3];
/// let doubled = select(&items, |x| x * 2);
/// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
/// assert!(doubled.is_read_only());
/// ```
pub fn select<S, F, U>(source: S, to_value: F) -> Select<S, F>
where
    S: List,
    F: Fn(S::Item) -> U,
{
    Select { source, to_value }
}

/// Creates a two-way projection of `source` through `to_value` and its
/// inverse `to_source`.
pub fn select_mut<S, F, G, U>(source: S, to_value: F, to_source: G) -> SelectMut<S, F, G>
where
    S: List,
    F: Fn(S::Item) -> U,
    G: Fn(U) -> S::Item,
{
    SelectMut {
        source,
        to_value,
        to_source,
    }
}

/// Creates a one-way projection of `source` through `to_value`, which also
/// receives the logical index of the element.
pub fn select_indexed<S, F, U>(source: S, to_value: F) -> SelectIndexed<S, F>
where
    S: List,
    F: Fn(usize, S::Item) -> U,
{
    SelectIndexed { source, to_value }
}

impl<S, F, U> List for Select<S, F>
where
    S: List,
    F: Fn(S::Item) -> U,
{
    type Item = U;

    #[inline]
    fn len(&self) -> usize {
        self.source.len()
    }

    #[inline]
    fn is_read_only(&self) -> bool {
        true
    }

    #[inline]
    fn is_fixed_size(&self) -> bool {
        self.source.is_fixed_size()
    }

    fn get(&self, index: usize) -> Result<U> {
        self.source.get(index).map(&self.to_value)
    }

    fn set(&mut self, _index: usize, _item: U) -> Result<()> {
        Err(Error::NotSupported("set"))
    }

    fn insert(&mut self, _index: usize, _item: U) -> Result<()> {
        Err(Error::NotSupported("insert"))
    }

    fn remove_at(&mut self, index: usize) -> Result<U> {
        self.source.remove_at(index).map(&self.to_value)
    }

    fn clear(&mut self) -> Result<()> {
        self.source.clear()
    }

    fn push(&mut self, _item: U) -> Result<()> {
        Err(Error::NotSupported("push"))
    }
}

impl<S, F, G, U> List for SelectMut<S, F, G>
where
    S: List,
    F: Fn(S::Item) -> U,
    G: Fn(U) -> S::Item,
{
    type Item = U;

    #[inline]
    fn len(&self) -> usize {
        self.source.len()
    }

    #[inline]
    fn is_read_only(&self) -> bool {
        self.source.is_read_only()
    }

    #[inline]
    fn is_fixed_size(&self) -> bool {
        self.source.is_fixed_size()
    }

    fn get(&self, index: usize) -> Result<U> {
        self.source.get(index).map(&self.to_value)
    }

    fn set(&mut self, index: usize, item: U) -> Result<()> {
        self.source.set(index, (self.to_source)(item))
    }

    fn insert(&mut self, index: usize, item: U) -> Result<()> {
        self.source.insert(index, (self.to_source)(item))
    }

    fn remove_at(&mut self, index: usize) -> Result<U> {
        self.source.remove_at(index).map(&self.to_value)
    }

    fn clear(&mut self) -> Result<()> {
        self.source.clear()
    }

    fn push(&mut self, item: U) -> Result<()> {
        self.source.push((self.to_source)(item))
    }
}

impl<S, F, U> List for SelectIndexed<S, F>
where
    S: List,
    F: Fn(usize, S::Item) -> U,
{
    type Item = U;

    #[inline]
    fn len(&self) -> usize {
        self.source.len()
    }

    #[inline]
    fn is_read_only(&self) -> bool {
        true
    }

    #[inline]
    fn is_fixed_size(&self) -> bool {
        self.source.is_fixed_size()
    }

    fn get(&self, index: usize) -> Result<U> {
        let item = self.source.get(index)?;
        Ok((self.to_value)(index, item))
    }

    fn set(&mut self, _index: usize, _item: U) -> Result<()> {
        Err(Error::NotSupported("set"))
    }

    fn insert(&mut self, _index: usize, _item: U) -> Result<()> {
        Err(Error::NotSupported("insert"))
    }

    fn remove_at(&mut self, index: usize) -> Result<U> {
        let item = self.source.remove_at(index)?;
        Ok((self.to_value)(index, item))
    }

    fn clear(&mut self) -> Result<()> {
        self.source.clear()
    }

    fn push(&mut self, _item: U) -> Result<()> {
        Err(Error::NotSupported("push"))
    }
}

#[cfg(test)]
mod tests {
    use crate::list::{select, select_indexed, select_mut, Error, List};
    use pretty_assertions::assert_eq;

    #[test]
    fn projects_values() {
        let items = vec![1, 2, 3, 4];
        let doubled = select(&items, |x| x * 2);
        assert_eq!(doubled.to_vec(), vec![2, 4, 6, 8]);
    }

    #[test]
    fn projects_with_the_index() {
        let items = vec![10, 20];
        let paired = select_indexed(&items, |i, x| (i, x));
        assert_eq!(paired.to_vec(), vec![(0, 10), (1, 20)]);
    }

    #[test]
    fn one_way_projection_rejects_value_writes() {
        let mut items = vec![1, 2, 3, 4];
        let mut doubled = select(&mut items, |x| x * 2);
        assert!(doubled.is_read_only());
        assert_eq!(doubled.set(0, 2), Err(Error::NotSupported("set")));
        assert_eq!(doubled.insert(0, 2), Err(Error::NotSupported("insert")));
        assert_eq!(doubled.push(2), Err(Error::NotSupported("push")));
        assert_eq!(items, vec![1, 2, 3, 4]);
    }

    #[test]
    fn one_way_projection_passes_structural_operations_through() {
        let mut items = vec![1, 2, 3, 4];
        let mut doubled = select(&mut items, |x| x * 2);
        assert_eq!(doubled.remove_at(1), Ok(4));
        assert_eq!(items, vec![1, 3, 4]);

        let mut doubled = select(&mut items, |x| x * 2);
        doubled.clear().unwrap();
        assert_eq!(items, Vec::<i32>::new());
    }

    #[test]
    fn two_way_projection_round_trips_set() {
        let mut items = vec![1, 2, 3, 4];
        let mut doubled = select_mut(&mut items, |x| x * 2, |x| x / 2);
        doubled.set(1, 10).unwrap();
        assert_eq!(doubled.get(1), Ok(10));
        assert_eq!(doubled.to_vec(), vec![2, 10, 6, 8]);
        assert_eq!(items, vec![1, 5, 3, 4]);
    }

    #[test]
    fn two_way_projection_converts_on_insert_and_push() {
        let mut items = vec![1, 2, 3, 4];
        let mut doubled = select_mut(&mut items, |x| x * 2, |x| x / 2);
        doubled.insert(1, 10).unwrap();
        assert_eq!(doubled.to_vec(), vec![2, 10, 4, 6, 8]);
        assert_eq!(items, vec![1, 5, 2, 3, 4]);

        let mut doubled = select_mut(&mut items, |x| x * 2, |x| x / 2);
        doubled.push(12).unwrap();
        assert_eq!(items, vec![1, 5, 2, 3, 4, 6]);
    }

    #[test]
    fn two_way_projection_removes_by_projected_value() {
        let mut items = vec![1, 2, 3, 4];
        let mut doubled = select_mut(&mut items, |x| x * 2, |x| x / 2);
        assert_eq!(doubled.remove(&4), Ok(true));
        assert_eq!(doubled.to_vec(), vec![2, 6, 8]);
        assert_eq!(items, vec![1, 3, 4]);
    }

    #[test]
    fn two_way_projection_remove_of_an_unprojected_value_does_nothing() {
        let mut items = vec![1, 2, 3, 4];
        let mut doubled = select_mut(&mut items, |x| x * 2, |x| x / 2);
        // 3 is a source value; no projected value equals it.
        assert_eq!(doubled.remove(&3), Ok(false));
        assert_eq!(items, vec![1, 2, 3, 4]);
    }

    #[test]
    fn two_way_projection_clear_updates_the_source() {
        let mut items = vec![1, 2, 3, 4];
        let mut doubled = select_mut(&mut items, |x| x * 2, |x| x / 2);
        doubled.clear().unwrap();
        assert_eq!(items, Vec::<i32>::new());
    }

    #[test]
    fn two_way_projection_over_a_shared_borrow_is_read_only() {
        let items = vec![1, 2, 3, 4];
        let doubled = select_mut(&items, |x| x * 2, |x| x / 2);
        assert!(doubled.is_read_only());
    }

    #[test]
    fn projections_compose_with_other_views() {
        let mut items = vec![1, 2, 3];
        let rev = crate::list::reverse(&mut items);
        let mut doubled = select_mut(rev, |x| x * 2, |x| x / 2);
        assert_eq!(doubled.to_vec(), vec![6, 4, 2]);
        doubled.set(0, 8).unwrap();
        assert_eq!(items, vec![1, 2, 4]);
    }
}
