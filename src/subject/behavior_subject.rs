use super::{policy::Behavior, Subject};

/// Caches the latest event and hands it to every new subscriber.
///
/// The cache starts as the seed value given to [`BehaviorSubject::new`] and
/// follows every emission. After `emit_error` (or `emit_completed`) the
/// cached event is the terminal one: new subscribers receive only that.
///
/// ```rust
/// use std::{cell::RefCell, rc::Rc};
///
/// use rxsubject::prelude::*;
///
/// let subject = BehaviorSubject::<&str, ()>::new("Initial value");
/// subject.emit_next("X");
///
/// let seen = Rc::new(RefCell::new(vec![]));
/// let c_seen = seen.clone();
/// subject
///   .clone()
///   .subscribe(move |v| c_seen.borrow_mut().push(v));
/// assert_eq!(*seen.borrow(), vec!["X"]);
/// ```
pub type BehaviorSubject<'a, Item, Err> = Subject<'a, Item, Err, Behavior<Item, Err>>;

impl<'a, Item, Err> Subject<'a, Item, Err, Behavior<Item, Err>> {
  #[inline]
  pub fn new(value: Item) -> Self { Self::with_policy(Behavior::new(value)) }
}

#[cfg(test)]
mod tests {
  use std::{cell::RefCell, convert::Infallible, rc::Rc};

  use crate::prelude::*;

  #[test]
  fn base_data_flow() {
    let mut i = 0;

    {
      let broadcast = BehaviorSubject::<i32, Infallible>::new(42);
      broadcast.clone().subscribe(|v| i = v * 2);
    }

    assert_eq!(i, 84);

    {
      let broadcast = BehaviorSubject::<i32, Infallible>::new(42);
      broadcast.clone().subscribe(|v| i = v * 2);
      broadcast.emit_next(1);
    }

    assert_eq!(i, 2);
  }

  #[test]
  fn subscribe_yields_exactly_the_latest() {
    let subject = BehaviorSubject::<i32, ()>::new(0);
    subject.emit_next(1);
    subject.emit_next(2);

    let log = Rc::new(RefCell::new(vec![]));
    let c_log = log.clone();
    subject
      .clone()
      .subscribe_event(move |e| c_log.borrow_mut().push(e));

    assert_eq!(*log.borrow(), vec![Event::Next(2)]);
  }

  #[test]
  fn multiple_subscribers() {
    let subject = BehaviorSubject::<i32, Infallible>::new(0);

    let results1 = Rc::new(RefCell::new(vec![]));
    let results2 = Rc::new(RefCell::new(vec![]));
    let r1 = results1.clone();
    let r2 = results2.clone();

    subject
      .clone()
      .subscribe(move |v| r1.borrow_mut().push(v));
    subject
      .clone()
      .subscribe(move |v| r2.borrow_mut().push(v));

    assert_eq!(*results1.borrow(), vec![0]);
    assert_eq!(*results2.borrow(), vec![0]);

    subject.emit_next(1);
    subject.emit_next(2);
    assert_eq!(*results1.borrow(), vec![0, 1, 2]);
    assert_eq!(*results2.borrow(), vec![0, 1, 2]);
  }

  #[test]
  fn error_replaces_cached_value() {
    let subject = BehaviorSubject::<&str, &str>::new("Initial value");
    let first = Rc::new(RefCell::new(vec![]));
    let c_first = first.clone();
    subject
      .clone()
      .subscribe_event(move |e| c_first.borrow_mut().push(e));

    subject.emit_error("anError");
    subject.emit_next("ignored");

    for _ in 0..2 {
      let late = Rc::new(RefCell::new(vec![]));
      let c_late = late.clone();
      let sub = subject
        .clone()
        .subscribe_event(move |e| c_late.borrow_mut().push(e));
      assert_eq!(*late.borrow(), vec![Event::Error("anError")]);
      assert!(sub.is_closed());
    }

    assert_eq!(*first.borrow(), vec![Event::Next("Initial value"), Event::Error("anError")]);
  }

  #[test]
  fn completed_is_cached_too() {
    let subject = BehaviorSubject::<i32, ()>::new(1);
    subject.emit_completed();

    let log = Rc::new(RefCell::new(vec![]));
    let c_log = log.clone();
    subject
      .clone()
      .subscribe_event(move |e| c_log.borrow_mut().push(e));
    assert_eq!(*log.borrow(), vec![Event::Completed]);
  }

  #[test]
  fn unsubscribe() {
    let mut i = 0;

    {
      let subject = BehaviorSubject::<i32, Infallible>::new(42);
      subject.clone().subscribe(|v| i = v).unsubscribe();
      subject.emit_next(100);
    }

    assert_eq!(i, 42);
  }

  #[test]
  fn emission_from_replay_lands_after_registration() {
    let subject = BehaviorSubject::<i32, Infallible>::new(0);
    let log = Rc::new(RefCell::new(vec![]));

    subject.clone().subscribe({
      let subject = subject.clone();
      let log = log.clone();
      move |v| {
        log.borrow_mut().push(v);
        if v == 0 {
          subject.emit_next(1);
        }
      }
    });

    assert_eq!(*log.borrow(), vec![0, 1]);
  }
}
