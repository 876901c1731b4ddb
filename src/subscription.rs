//! Handles for cancelling a registration.

mod boxed;
mod dispose_bag;
mod dynamic;

pub use boxed::*;
pub use dispose_bag::*;
pub use dynamic::*;

/// Subscription returned from `Observable::subscribe` to allow unsubscribing.
pub trait Subscription {
  /// Detach the observer this subscription stands for. Calling it on a
  /// subscription that is already closed does nothing.
  fn unsubscribe(self);

  fn is_closed(&self) -> bool;

  /// Hand this subscription to `bag`, which unsubscribes it when the bag is
  /// disposed or dropped.
  #[inline]
  fn disposed_by<'a>(self, bag: &DisposeBag<'a>)
  where
    Self: Sized + 'a,
  {
    bag.add(self)
  }

  /// Activates "RAII" behavior for this subscription. That means
  /// `unsubscribe()` will be called automatically as soon as the returned
  /// value goes out of scope.
  ///
  /// **Attention:** If you don't assign the return value to a variable,
  /// `unsubscribe()` is called immediately, which is probably not what you
  /// want!
  #[inline]
  fn unsubscribe_when_dropped(self) -> SubscriptionGuard<Self>
  where
    Self: Sized,
  {
    SubscriptionGuard::new(self)
  }
}

/// The unit subscription is always closed.
impl Subscription for () {
  #[inline]
  fn unsubscribe(self) {}

  #[inline]
  fn is_closed(&self) -> bool { true }
}

impl<T: Subscription> Subscription for Option<T> {
  #[inline]
  fn unsubscribe(self) {
    if let Some(inner) = self {
      inner.unsubscribe();
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { self.as_ref().map_or(true, |s| s.is_closed()) }
}

/// An RAII implementation of a "scoped subscribed" of a subscription.
/// When this structure is dropped (falls out of scope), the subscription will
/// be unsubscribed.
///
/// If you want to drop it immediately, wrap it in its own scope
#[must_use]
pub struct SubscriptionGuard<T: Subscription>(Option<T>);

impl<T: Subscription> SubscriptionGuard<T> {
  /// Wraps an existing subscription with a guard to enable RAII behavior for
  /// it.
  #[inline]
  pub fn new(subscription: T) -> SubscriptionGuard<T> { SubscriptionGuard(Some(subscription)) }

  /// Disarm the guard and get the subscription back.
  #[inline]
  pub fn into_inner(mut self) -> Option<T> { self.0.take() }
}

impl<T: Subscription> Drop for SubscriptionGuard<T> {
  #[inline]
  fn drop(&mut self) {
    if let Some(subscription) = self.0.take() {
      subscription.unsubscribe();
    }
  }
}
