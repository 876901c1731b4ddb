use std::convert::Infallible;

use super::BehaviorSubject;
use crate::observable::AsObservable;

/// A mutable value whose changes can be observed.
///
/// Every [`Variable::set_value`] emits the new value to the current
/// observers, and a new subscriber immediately receives the current value.
/// There is no error channel and the stream never ends while the variable is
/// alive; dropping the variable completes it.
///
/// ```rust
/// use std::{cell::RefCell, rc::Rc};
///
/// use rxsubject::prelude::*;
///
/// let seen = Rc::new(RefCell::new(vec![]));
/// let mut variable = Variable::new("Initial value");
/// variable.set_value("New initial value");
///
/// let c_seen = seen.clone();
/// variable
///   .as_observable()
///   .subscribe(move |v| c_seen.borrow_mut().push(v));
/// variable.set_value("1");
///
/// assert_eq!(*seen.borrow(), vec!["New initial value", "1"]);
/// assert_eq!(*variable.value(), "1");
/// ```
pub struct Variable<'a, Item: Clone> {
  value: Item,
  subject: BehaviorSubject<'a, Item, Infallible>,
}

impl<'a, Item: Clone> Variable<'a, Item> {
  pub fn new(value: Item) -> Self {
    Self { subject: BehaviorSubject::new(value.clone()), value }
  }

  /// The current value.
  #[inline]
  pub fn value(&self) -> &Item { &self.value }

  /// Replace the value and emit it.
  pub fn set_value(&mut self, value: Item) {
    self.value = value.clone();
    self.subject.emit_next(value);
  }

  /// The stream of values, starting with the current one.
  #[inline]
  pub fn as_observable(&self) -> AsObservable<BehaviorSubject<'a, Item, Infallible>> {
    self.subject.as_observable()
  }

  #[inline]
  pub fn observer_count(&self) -> usize { self.subject.observer_count() }
}

impl<'a, Item: Clone> Drop for Variable<'a, Item> {
  fn drop(&mut self) { self.subject.emit_completed(); }
}
