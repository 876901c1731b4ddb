use smallvec::SmallVec;

/// A container of items keyed by a monotonically increasing id.
///
/// Ids are never reused, so a stale id held by a cancelled handle can not
/// remove an item added later. Iteration follows insertion order.
///
/// # Examples
///
/// ```rust
/// use rxsubject::subscription::DynamicSubscriptions;
///
/// let mut subs: DynamicSubscriptions<&str> = DynamicSubscriptions::default();
///
/// let first = subs.add("first");
/// let second = subs.add("second");
/// assert_eq!(subs.len(), 2);
///
/// assert_eq!(subs.remove(first), Some("first"));
/// assert!(subs.remove(first).is_none());
/// assert!(subs.contains(second));
/// ```
pub struct DynamicSubscriptions<U> {
  next_id: usize,
  items: SmallVec<[(usize, U); 2]>,
}

impl<U> Default for DynamicSubscriptions<U> {
  fn default() -> Self { Self { next_id: 0, items: SmallVec::new() } }
}

impl<U> DynamicSubscriptions<U> {
  /// Create an empty container.
  #[inline]
  pub fn new() -> Self { Self::default() }

  /// Add an item and return its unique ID.
  #[inline]
  pub fn add(&mut self, item: U) -> usize {
    let id = self.next_id;
    self.next_id += 1;
    self.items.push((id, item));
    id
  }

  /// Remove an item by ID.
  pub fn remove(&mut self, id: usize) -> Option<U> {
    self
      .items
      .iter()
      .position(|(i, _)| *i == id)
      .map(|pos| self.items.remove(pos).1)
  }

  /// Check if an ID exists in the container.
  #[inline]
  pub fn contains(&self, id: usize) -> bool { self.items.iter().any(|(i, _)| *i == id) }

  #[inline]
  pub fn len(&self) -> usize { self.items.len() }

  #[inline]
  pub fn is_empty(&self) -> bool { self.items.is_empty() }

  /// Drain all items in insertion order.
  #[inline]
  pub fn drain(&mut self) -> impl Iterator<Item = U> + '_ {
    self.items.drain(..).map(|(_, item)| item)
  }

  /// Iterate over `(id, item)` pairs.
  #[inline]
  pub fn entries(&self) -> impl Iterator<Item = (usize, &U)> {
    self.items.iter().map(|(id, item)| (*id, item))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ids_are_not_reused() {
    let mut subs = DynamicSubscriptions::new();
    let a = subs.add('a');
    subs.remove(a);
    let b = subs.add('b');
    assert_ne!(a, b);
    assert!(!subs.contains(a));
  }

  #[test]
  fn entries_keep_insertion_order() {
    let mut subs = DynamicSubscriptions::new();
    subs.add(1);
    let mid = subs.add(2);
    subs.add(3);
    subs.remove(mid);
    let items: Vec<_> = subs.entries().map(|(_, v)| *v).collect();
    assert_eq!(items, vec![1, 3]);
  }
}
