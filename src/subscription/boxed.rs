use super::Subscription;

/// Helper trait for calling unsubscribe on boxed trait objects
///
/// Since `Subscription::unsubscribe(self)` requires `Sized`, we need this
/// workaround trait to enable `Box<dyn Subscription>` to call unsubscribe.
pub trait BoxedSubscriptionInner {
  fn boxed_unsubscribe(self: Box<Self>);
  fn boxed_is_closed(&self) -> bool;
}

impl<T: Subscription> BoxedSubscriptionInner for T {
  #[inline]
  fn boxed_unsubscribe(self: Box<Self>) { (*self).unsubscribe() }

  #[inline]
  fn boxed_is_closed(&self) -> bool { self.is_closed() }
}

/// A type-erased subscription.
///
/// Subject subscriptions carry the lifetime of the observers they detach, so
/// the box keeps that lifetime instead of demanding `'static`.
pub struct BoxedSubscription<'a>(Box<dyn BoxedSubscriptionInner + 'a>);

impl<'a> BoxedSubscription<'a> {
  /// Create a new boxed subscription from any subscription type.
  #[inline]
  pub fn new(subscription: impl Subscription + 'a) -> Self { Self(Box::new(subscription)) }
}

impl<'a> Subscription for BoxedSubscription<'a> {
  #[inline]
  fn unsubscribe(self) { self.0.boxed_unsubscribe() }

  #[inline]
  fn is_closed(&self) -> bool { self.0.boxed_is_closed() }
}
