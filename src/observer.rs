//! Observer trait and implementations
//!
//! The Observer trait defines the consumer of data in the reactive pattern.
//! It provides three methods: next (for values), error (for errors), and
//! complete (for stream completion).

use crate::{
  event::Event,
  rc::{MutRc, RcDeref, RcDerefMut},
};

// ============================================================================
// Observer Trait
// ============================================================================

/// Observer trait: The consumer of data in reactive programming
///
/// An Observer receives values, errors, and completion notifications from
/// an Observable.
pub trait Observer<Item, Err> {
  /// Receive the next value from the observable
  fn next(&mut self, value: Item);

  /// Handle an error from the observable
  ///
  /// This consumes the observer, as no more values can be emitted after an
  /// error
  fn error(self, err: Err);

  /// Handle completion of the observable
  ///
  /// This consumes the observer, as no more values can be emitted after
  /// completion
  fn complete(self);

  /// Returns `true` if the observer will not accept more values.
  fn is_closed(&self) -> bool;

  /// Dispatch an [`Event`] to the matching method.
  fn on_event(mut self, event: Event<Item, Err>)
  where
    Self: Sized,
  {
    match event {
      Event::Next(v) => self.next(v),
      Event::Error(e) => self.error(e),
      Event::Completed => self.complete(),
    }
  }
}

// ============================================================================
// DynObserver Trait - Object-safe Observer
// ============================================================================

/// Helper trait to enable object-safe Observers (Box<dyn Observer>)
///
/// Standard Observer trait is not object-safe because `error` and `complete`
/// take `self` by value. DynObserver mirrors the interface but adapts it for
/// vtables.
pub trait DynObserver<Item, Err> {
  fn box_next(&mut self, value: Item);
  fn box_error(self: Box<Self>, err: Err);
  fn box_complete(self: Box<Self>);
  fn box_is_closed(&self) -> bool;
}

impl<T, Item, Err> DynObserver<Item, Err> for T
where
  T: Observer<Item, Err>,
{
  fn box_next(&mut self, value: Item) { self.next(value); }
  fn box_error(self: Box<Self>, err: Err) { self.error(err); }
  fn box_complete(self: Box<Self>) { self.complete(); }
  fn box_is_closed(&self) -> bool { self.is_closed() }
}

/// Boxed value observer (single-threaded, no Send bound)
pub type BoxedObserver<'a, Item, Err> = Box<dyn DynObserver<Item, Err> + 'a>;

impl<'a, Item, Err> Observer<Item, Err> for BoxedObserver<'a, Item, Err> {
  #[inline]
  fn next(&mut self, value: Item) { (**self).box_next(value) }

  #[inline]
  fn error(self, err: Err) { self.box_error(err) }

  #[inline]
  fn complete(self) { self.box_complete() }

  #[inline]
  fn is_closed(&self) -> bool { (**self).box_is_closed() }
}

// ============================================================================
// Closure adapters
// ============================================================================

/// Observer made of a single `next` closure.
///
/// Errors and completion are ignored, whatever the error type is.
#[derive(Clone)]
pub struct FnMutObserver<F>(pub F);

impl<F, Item, Err> Observer<Item, Err> for FnMutObserver<F>
where
  F: FnMut(Item),
{
  #[inline]
  fn next(&mut self, v: Item) { (self.0)(v); }

  #[inline]
  fn error(self, _err: Err) {}

  #[inline]
  fn complete(self) {}

  #[inline]
  fn is_closed(&self) -> bool { false }
}

/// Observer built from three closures, one per event kind.
#[derive(Clone)]
pub struct ObserverAll<N, E, C> {
  next: N,
  error: E,
  complete: C,
}

impl<N, E, C> ObserverAll<N, E, C> {
  #[inline]
  pub fn new(next: N, error: E, complete: C) -> Self { Self { next, error, complete } }
}

impl<N, E, C, Item, Err> Observer<Item, Err> for ObserverAll<N, E, C>
where
  N: FnMut(Item),
  E: FnOnce(Err),
  C: FnOnce(),
{
  #[inline]
  fn next(&mut self, value: Item) { (self.next)(value); }

  #[inline]
  fn error(self, err: Err) { (self.error)(err); }

  #[inline]
  fn complete(self) { (self.complete)(); }

  #[inline]
  fn is_closed(&self) -> bool { false }
}

/// Observer that funnels every notification into one closure as an [`Event`].
#[derive(Clone)]
pub struct EventObserver<F>(pub F);

impl<F, Item, Err> Observer<Item, Err> for EventObserver<F>
where
  F: FnMut(Event<Item, Err>),
{
  #[inline]
  fn next(&mut self, value: Item) { (self.0)(Event::Next(value)); }

  #[inline]
  fn error(mut self, err: Err) { (self.0)(Event::Error(err)); }

  #[inline]
  fn complete(mut self) { (self.0)(Event::Completed); }

  #[inline]
  fn is_closed(&self) -> bool { false }
}

// ============================================================================
// Observer implementations for Option and reference-counted Option wrappers
// ============================================================================

/// Option observer - None ignores all events, Some delegates to inner
impl<O, Item, Err> Observer<Item, Err> for Option<O>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    if let Some(inner) = self {
      Observer::<Item, Err>::next(inner, value);
    }
  }

  fn error(self, err: Err) {
    if let Some(inner) = self {
      Observer::<Item, Err>::error(inner, err);
    }
  }

  fn complete(self) {
    if let Some(inner) = self {
      Observer::<Item, Err>::complete(inner);
    }
  }

  fn is_closed(&self) -> bool {
    self
      .as_ref()
      .map_or(true, |o| Observer::<Item, Err>::is_closed(o))
  }
}

/// MutRc<Option<O>> - shared ownership observer
/// Uses take() for terminal operations to consume the inner observer
impl<O, Item, Err> Observer<Item, Err> for MutRc<Option<O>>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    let mut inner = self.rc_deref_mut();
    Observer::<Item, Err>::next(&mut *inner, value);
  }

  fn error(self, err: Err) {
    let inner = self.rc_deref_mut().take();
    if let Some(inner) = inner {
      Observer::<Item, Err>::error(inner, err);
    }
  }

  fn complete(self) {
    let inner = self.rc_deref_mut().take();
    if let Some(inner) = inner {
      Observer::<Item, Err>::complete(inner);
    }
  }

  fn is_closed(&self) -> bool { self.rc_deref().is_none() }
}

// ============================================================================
// Tests
// ============================================================================
