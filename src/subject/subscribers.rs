use smallvec::SmallVec;

use crate::{
  observer::{BoxedObserver, Observer},
  rc::{MutRc, RcDeref, RcDerefMut},
  subscription::DynamicSubscriptions,
};

/// One registered observer.
///
/// The `Option` is taken when a terminal event consumes the observer, so a
/// slot that reads `None` is closed.
pub(crate) type Slot<'a, Item, Err> = MutRc<Option<BoxedObserver<'a, Item, Err>>>;

/// Subscribers container using DynamicSubscriptions for ID-based management.
///
/// This struct holds the list of observers subscribed to a Subject, in
/// subscription order. Broadcasting never keeps the container borrowed while
/// an observer runs, so observers may subscribe or unsubscribe from inside
/// their callbacks.
pub struct Subscribers<'a, Item, Err> {
  pub(crate) inner: DynamicSubscriptions<Slot<'a, Item, Err>>,
}

impl<'a, Item, Err> Default for Subscribers<'a, Item, Err> {
  fn default() -> Self { Self { inner: DynamicSubscriptions::default() } }
}

impl<'a, Item, Err> Subscribers<'a, Item, Err> {
  /// Add an observer and return its unique ID.
  #[inline]
  pub(crate) fn add(&mut self, slot: Slot<'a, Item, Err>) -> usize { self.inner.add(slot) }

  /// Remove an observer by ID.
  #[inline]
  pub(crate) fn remove(&mut self, id: usize) -> Option<Slot<'a, Item, Err>> {
    self.inner.remove(id)
  }

  /// Check if an ID exists.
  #[inline]
  pub fn contains(&self, id: usize) -> bool { self.inner.contains(id) }

  #[inline]
  pub fn len(&self) -> usize { self.inner.len() }

  #[inline]
  pub fn is_empty(&self) -> bool { self.inner.is_empty() }

  fn snapshot(&self) -> SmallVec<[(usize, Slot<'a, Item, Err>); 2]> {
    self
      .inner
      .entries()
      .map(|(id, slot)| (id, slot.clone()))
      .collect()
  }

  /// Remove every observer, returning them in subscription order.
  pub(crate) fn take_all(&mut self) -> SmallVec<[Slot<'a, Item, Err>; 2]> {
    self.inner.drain().collect()
  }
}

impl<'a, Item, Err> Subscribers<'a, Item, Err> {
  /// Deliver `value` to every observer registered when the call starts.
  ///
  /// An observer removed by an earlier observer's callback during the same
  /// broadcast is skipped; one added during the broadcast is not reached.
  pub(crate) fn broadcast_value(this: &MutRc<Self>, value: Item)
  where
    Item: Clone,
  {
    let targets = this.rc_deref().snapshot();
    for (id, mut slot) in targets {
      if !this.rc_deref().contains(id) {
        continue;
      }
      Observer::<Item, Err>::next(&mut slot, value.clone());
    }
  }

  /// Broadcast error to all observers and clear the subscriber list.
  ///
  /// The error is cloned for all observers except the last one.
  pub(crate) fn broadcast_error(this: &MutRc<Self>, err: Err)
  where
    Err: Clone,
  {
    let targets = this.rc_deref_mut().take_all();
    let mut iter = targets.into_iter().peekable();
    while let Some(slot) = iter.next() {
      if iter.peek().is_some() {
        Observer::<Item, Err>::error(slot, err.clone());
      } else {
        Observer::<Item, Err>::error(slot, err);
        break;
      }
    }
  }

  /// Broadcast completion to all observers and clear the subscriber list.
  pub(crate) fn broadcast_complete(this: &MutRc<Self>) {
    let targets = this.rc_deref_mut().take_all();
    for slot in targets {
      Observer::<Item, Err>::complete(slot);
    }
  }
}
