//! The subscribe side of a stream.

use crate::{
  event::Event,
  observer::{EventObserver, FnMutObserver, Observer, ObserverAll},
  subscription::Subscription,
};

/// A source that observers attach to.
///
/// `'a` bounds what the attached observers may borrow, so closures that
/// capture locals by reference can subscribe as long as the source does not
/// outlive them.
pub trait Observable<'a, Item, Err>: Sized {
  type Unsub: Subscription;

  /// Attach `observer` and return the handle that detaches it.
  fn actual_subscribe<O>(self, observer: O) -> Self::Unsub
  where
    O: Observer<Item, Err> + 'a;

  /// Subscribe with a `next` handler. Errors and completion are ignored.
  #[inline]
  fn subscribe<N>(self, next: N) -> Self::Unsub
  where
    N: FnMut(Item) + 'a,
  {
    self.actual_subscribe(FnMutObserver(next))
  }

  /// Subscribe with `next` and `error` handlers.
  #[inline]
  fn subscribe_err<N, E>(self, next: N, error: E) -> Self::Unsub
  where
    N: FnMut(Item) + 'a,
    E: FnOnce(Err) + 'a,
  {
    self.actual_subscribe(ObserverAll::new(next, error, || {}))
  }

  /// Subscribe with a handler for each kind of event.
  #[inline]
  fn subscribe_all<N, E, C>(self, next: N, error: E, complete: C) -> Self::Unsub
  where
    N: FnMut(Item) + 'a,
    E: FnOnce(Err) + 'a,
    C: FnOnce() + 'a,
  {
    self.actual_subscribe(ObserverAll::new(next, error, complete))
  }

  /// Subscribe with one handler that receives every notification wrapped in
  /// an [`Event`].
  #[inline]
  fn subscribe_event<F>(self, f: F) -> Self::Unsub
  where
    F: FnMut(Event<Item, Err>) + 'a,
  {
    self.actual_subscribe(EventObserver(f))
  }

  /// Subscribe a ready-made observer.
  #[inline]
  fn subscribe_with<O>(self, observer: O) -> Self::Unsub
  where
    O: Observer<Item, Err> + 'a,
  {
    self.actual_subscribe(observer)
  }
}

/// Read-only view over an observable.
///
/// Wrapping a subject hides its emitting side: the view can only be
/// subscribed to.
#[derive(Clone)]
pub struct AsObservable<S>(pub(crate) S);

impl<'a, Item, Err, S> Observable<'a, Item, Err> for AsObservable<S>
where
  S: Observable<'a, Item, Err>,
{
  type Unsub = S::Unsub;

  #[inline]
  fn actual_subscribe<O>(self, observer: O) -> Self::Unsub
  where
    O: Observer<Item, Err> + 'a,
  {
    self.0.actual_subscribe(observer)
  }
}
