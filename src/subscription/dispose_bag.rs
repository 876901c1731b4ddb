use std::{
  cell::RefCell,
  fmt::{Debug, Formatter},
};

use smallvec::SmallVec;

use super::{BoxedSubscription, Subscription};

/// A bag of subscriptions that are unsubscribed together.
///
/// Subscriptions are unsubscribed in the order they were added, either by an
/// explicit [`DisposeBag::dispose`] or when the bag is dropped. A bag that has
/// been disposed stays closed: anything added afterwards is unsubscribed
/// immediately.
///
/// ```rust
/// use std::convert::Infallible;
///
/// use rxsubject::prelude::*;
///
/// let subject = PublishSubject::<i32, Infallible>::new();
/// {
///   let bag = DisposeBag::new();
///   subject.clone().subscribe(|_| {}).disposed_by(&bag);
///   assert_eq!(subject.observer_count(), 1);
/// }
/// assert_eq!(subject.observer_count(), 0);
/// ```
#[derive(Default)]
pub struct DisposeBag<'a>(RefCell<Inner<BoxedSubscription<'a>>>);

type Teardown<'a> = SmallVec<[BoxedSubscription<'a>; 1]>;

struct Inner<T> {
  closed: bool,
  teardown: SmallVec<[T; 1]>,
}

impl<T> Default for Inner<T> {
  fn default() -> Self { Inner { closed: false, teardown: SmallVec::new() } }
}

impl<'a> DisposeBag<'a> {
  #[inline]
  pub fn new() -> Self { Self::default() }

  /// Take ownership of `subscription`.
  ///
  /// Subscriptions already held that report closed are released first, and
  /// still get their `unsubscribe` call.
  pub fn add(&self, subscription: impl Subscription + 'a) {
    let mut inner = self.0.borrow_mut();
    if inner.closed {
      drop(inner);
      subscription.unsubscribe();
      return;
    }
    let (closed, mut open): (Teardown<'a>, Teardown<'a>) = std::mem::take(&mut inner.teardown)
      .into_iter()
      .partition(|s| s.is_closed());
    open.push(BoxedSubscription::new(subscription));
    inner.teardown = open;
    drop(inner);
    for subscription in closed {
      subscription.unsubscribe();
    }
  }

  /// Unsubscribe everything held, in insertion order.
  pub fn dispose(&self) {
    let teardown = {
      let mut inner = self.0.borrow_mut();
      if inner.closed {
        return;
      }
      inner.closed = true;
      std::mem::take(&mut inner.teardown)
    };
    tracing::trace!(subscriptions = teardown.len(), "dispose bag torn down");
    for subscription in teardown {
      subscription.unsubscribe();
    }
  }

  #[inline]
  pub fn is_disposed(&self) -> bool { self.0.borrow().closed }

  /// Number of subscriptions currently held.
  #[inline]
  pub fn len(&self) -> usize { self.0.borrow().teardown.len() }

  #[inline]
  pub fn is_empty(&self) -> bool { self.0.borrow().teardown.is_empty() }
}

impl<'a> Drop for DisposeBag<'a> {
  fn drop(&mut self) { self.dispose(); }
}

impl<'a> Debug for DisposeBag<'a> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let inner = self.0.borrow();
    f.debug_struct("DisposeBag")
      .field("closed", &inner.closed)
      .field("teardown_count", &inner.teardown.len())
      .finish()
  }
}
