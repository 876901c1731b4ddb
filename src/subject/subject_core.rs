use std::collections::VecDeque;

use super::{
  policy::ReplayPolicy,
  subject_subscription::SubjectSubscription,
  subscribers::{Slot, Subscribers},
};
use crate::{
  event::Event,
  observable::{AsObservable, Observable},
  observer::{BoxedObserver, Observer},
  rc::{MutRc, RcDeref, RcDerefMut},
};

/// Subject: a hot observable that multicasts values to many observers.
///
/// `Subject` acts as both an [`Observer`] and an [`Observable`]: values pushed
/// in with `emit_next` fan out synchronously to every observer registered at
/// that moment, in subscription order. `emit_error` and `emit_completed`
/// deliver the terminal event, drop every observer, and stop the subject for
/// good.
///
/// What a subject remembers for late subscribers is decided by its
/// [`ReplayPolicy`]; see [`PublishSubject`](super::PublishSubject),
/// [`BehaviorSubject`](super::BehaviorSubject) and
/// [`ReplaySubject`](super::ReplaySubject).
///
/// A `Subject` is a cheap handle: clones share the same observers and state.
///
/// # Re-entrancy
///
/// Observers may call back into the subject that is notifying them:
///
/// - `emit_*` from inside a callback is queued and delivered once the current
///   event has reached every observer, so every observer sees events in the
///   same order.
/// - `unsubscribe()` from inside a callback takes effect immediately, even
///   for observers later in the same broadcast.
/// - `subscribe()` from inside a callback registers immediately; the new
///   observer gets its replay but not the event being delivered.
///
/// # Example
///
/// ```rust
/// use std::{cell::RefCell, convert::Infallible, rc::Rc};
///
/// use rxsubject::prelude::*;
///
/// let subject = PublishSubject::<i32, Infallible>::new();
/// let results = Rc::new(RefCell::new(vec![]));
/// let c_results = results.clone();
///
/// subject.emit_next(0);
/// subject.clone().subscribe(move |v| c_results.borrow_mut().push(v));
/// subject.emit_next(1);
/// subject.emit_next(2);
/// assert_eq!(*results.borrow(), vec![1, 2]);
/// ```
pub struct Subject<'a, Item, Err, P> {
  pub(crate) observers: MutRc<Subscribers<'a, Item, Err>>,
  pub(crate) state: MutRc<SubjectState<Item, Err, P>>,
}

pub(crate) struct SubjectState<Item, Err, P> {
  pub(crate) policy: P,
  terminal: Option<Event<Item, Err>>,
  pending: VecDeque<Event<Item, Err>>,
  emitting: bool,
  disposed: bool,
}

impl<Item, Err, P> SubjectState<Item, Err, P> {
  #[inline]
  fn is_stopped(&self) -> bool { self.terminal.is_some() || self.disposed }
}

impl<'a, Item, Err, P> Subject<'a, Item, Err, P> {
  pub(crate) fn with_policy(policy: P) -> Self {
    Self {
      observers: MutRc::own(Subscribers::default()),
      state: MutRc::own(SubjectState {
        policy,
        terminal: None,
        pending: VecDeque::new(),
        emitting: false,
        disposed: false,
      }),
    }
  }

  /// Get the number of current subscribers.
  #[inline]
  pub fn observer_count(&self) -> usize { self.observers.rc_deref().len() }

  #[inline]
  pub fn has_observers(&self) -> bool { !self.observers.rc_deref().is_empty() }

  /// `true` once the subject has terminated or been disposed.
  #[inline]
  pub fn is_stopped(&self) -> bool { self.state.rc_deref().is_stopped() }

  /// Read-only view of this subject.
  #[inline]
  pub fn as_observable(&self) -> AsObservable<Self> { AsObservable(self.clone()) }
}

impl<'a, Item, Err, P> Subject<'a, Item, Err, P>
where
  P: ReplayPolicy<Item, Err>,
{
  /// Tear the subject down.
  ///
  /// Every observer is dropped without being notified and anything retained
  /// for replay is discarded. Later emissions are ignored and later
  /// subscriptions are closed from the start. Disposing twice is a no-op.
  pub fn dispose(&self) {
    {
      let mut state = self.state.rc_deref_mut();
      if state.disposed {
        return;
      }
      state.disposed = true;
      state.pending.clear();
      state.policy.clear();
    }
    let dropped = self.observers.rc_deref_mut().take_all();
    tracing::debug!(observers = dropped.len(), "subject disposed");
  }
}

impl<'a, Item, Err, P> Subject<'a, Item, Err, P>
where
  Item: Clone,
  Err: Clone,
  P: ReplayPolicy<Item, Err>,
{
  #[inline]
  pub fn emit_next(&self, value: Item) { self.emit(Event::Next(value)) }

  #[inline]
  pub fn emit_error(&self, err: Err) { self.emit(Event::Error(err)) }

  #[inline]
  pub fn emit_completed(&self) { self.emit(Event::Completed) }

  /// Push `event` to the observers.
  ///
  /// Ignored once the subject has stopped. When called while the subject is
  /// already delivering, the event is queued behind the current one.
  pub fn emit(&self, event: Event<Item, Err>) {
    {
      let mut state = self.state.rc_deref_mut();
      if state.is_stopped() {
        tracing::trace!(kind = event.kind(), "event after termination dropped");
        return;
      }
      state.pending.push_back(event);
      if state.emitting {
        return;
      }
      state.emitting = true;
    }
    self.flush();
  }

  /// Deliver queued events until the queue is empty, then release the
  /// emitting flag.
  fn flush(&self) {
    loop {
      let event = {
        let mut guard = self.state.rc_deref_mut();
        let state = &mut *guard;
        if state.is_stopped() {
          state.pending.clear();
        }
        let Some(event) = state.pending.pop_front() else {
          state.emitting = false;
          return;
        };
        state.policy.record(&event);
        if event.is_terminal() {
          state.terminal = Some(event.clone());
        }
        event
      };
      self.deliver(event);
    }
  }

  fn deliver(&self, event: Event<Item, Err>) {
    if event.is_terminal() {
      tracing::debug!(
        observers = self.observer_count(),
        kind = event.kind(),
        "subject terminated"
      );
    }
    match event {
      Event::Next(value) => Subscribers::broadcast_value(&self.observers, value),
      Event::Error(err) => Subscribers::broadcast_error(&self.observers, err),
      Event::Completed => Subscribers::broadcast_complete(&self.observers),
    }
  }
}

impl<'a, Item, Err, P> Observable<'a, Item, Err> for Subject<'a, Item, Err, P>
where
  Item: Clone + 'a,
  Err: Clone + 'a,
  P: ReplayPolicy<Item, Err>,
{
  type Unsub = SubjectSubscription<'a, Item, Err>;

  fn actual_subscribe<O>(self, observer: O) -> Self::Unsub
  where
    O: Observer<Item, Err> + 'a,
  {
    let boxed: BoxedObserver<'a, Item, Err> = Box::new(observer);
    let slot: Slot<'a, Item, Err> = MutRc::own(Some(boxed));

    let mut replay = Vec::new();
    let started = {
      let mut guard = self.state.rc_deref_mut();
      let state = &mut *guard;
      if state.disposed {
        None
      } else {
        state.policy.replay(state.terminal.as_ref(), &mut replay);
        // Hold the emitting flag while replaying so that anything emitted
        // from a replay callback is delivered after the replay.
        let owner = !state.emitting;
        state.emitting = true;
        Some((owner, state.terminal.is_some()))
      }
    };
    let Some((owner, terminated)) = started else {
      return SubjectSubscription::new(self.observers, None);
    };

    // Register before replaying: an observer subscribed from a replay
    // callback must come after this one.
    let id = (!terminated).then(|| self.observers.rc_deref_mut().add(slot.clone()));
    tracing::trace!(?id, "observer subscribed");

    for event in replay {
      Observer::<Item, Err>::on_event(slot.clone(), event);
    }

    let id = match id {
      Some(registered) if Observer::<Item, Err>::is_closed(&slot) => {
        let _closed = self.observers.rc_deref_mut().remove(registered);
        None
      }
      id => id,
    };

    if owner {
      self.flush();
    }
    SubjectSubscription::new(self.observers, id)
  }
}

/// A subject can itself observe another source and re-broadcast what it
/// receives.
impl<'a, Item, Err, P> Observer<Item, Err> for Subject<'a, Item, Err, P>
where
  Item: Clone,
  Err: Clone,
  P: ReplayPolicy<Item, Err>,
{
  #[inline]
  fn next(&mut self, value: Item) { self.emit_next(value) }

  #[inline]
  fn error(self, err: Err) { self.emit_error(err) }

  #[inline]
  fn complete(self) { self.emit_completed() }

  #[inline]
  fn is_closed(&self) -> bool { self.is_stopped() }
}

// ============================================================================
// Standard Traits
// ============================================================================

impl<'a, Item, Err, P> Clone for Subject<'a, Item, Err, P> {
  fn clone(&self) -> Self { Self { observers: self.observers.clone(), state: self.state.clone() } }
}

impl<'a, Item, Err, P: Default> Default for Subject<'a, Item, Err, P> {
  fn default() -> Self { Self::with_policy(P::default()) }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
  use std::{
    cell::{Cell, RefCell},
    convert::Infallible,
    rc::Rc,
  };

  use crate::prelude::*;

  #[test]
  fn test_multiple_subscribers() {
    let subject = PublishSubject::<i32, Infallible>::new();
    let results1 = Rc::new(RefCell::new(vec![]));
    let results2 = Rc::new(RefCell::new(vec![]));

    let c1 = results1.clone();
    subject
      .clone()
      .subscribe(move |v| c1.borrow_mut().push(v));

    subject.emit_next(1);

    let c2 = results2.clone();
    subject
      .clone()
      .subscribe(move |v| c2.borrow_mut().push(v));

    subject.emit_next(2);

    assert_eq!(*results1.borrow(), vec![1, 2]);
    assert_eq!(*results2.borrow(), vec![2]);
  }

  #[test]
  fn test_notification_follows_subscription_order() {
    let subject = PublishSubject::<i32, Infallible>::new();
    let order = Rc::new(RefCell::new(vec![]));
    for name in ["a", "b", "c"] {
      let order = order.clone();
      subject
        .clone()
        .subscribe(move |_| order.borrow_mut().push(name));
    }
    subject.emit_next(0);
    assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
  }

  #[test]
  fn test_scoped_subject() {
    let x = 100;
    let mut seen = 0;
    {
      let subject = PublishSubject::<i32, Infallible>::new();
      // Captures locals by reference.
      subject.clone().subscribe(|v| seen = v + x);
      subject.emit_next(10);
    }
    assert_eq!(seen, 110);
  }

  #[test]
  fn test_unsubscribe_inside_next_applies_to_same_broadcast() {
    let subject = PublishSubject::<i32, Infallible>::new();
    let primary = Rc::new(RefCell::new(vec![]));
    let secondary = Rc::new(RefCell::new(vec![]));
    let secondary_sub: Rc<RefCell<Option<SubjectSubscription<i32, Infallible>>>> =
      Rc::new(RefCell::new(None));

    subject.clone().subscribe({
      let primary = primary.clone();
      let secondary_sub = secondary_sub.clone();
      move |v| {
        primary.borrow_mut().push(v);
        if let Some(sub) = secondary_sub.borrow_mut().take() {
          sub.unsubscribe();
        }
      }
    });
    let sub = subject.clone().subscribe({
      let secondary = secondary.clone();
      move |v| secondary.borrow_mut().push(v)
    });
    *secondary_sub.borrow_mut() = Some(sub);

    subject.emit_next(1);
    subject.emit_next(2);

    assert_eq!(*primary.borrow(), vec![1, 2]);
    assert!(secondary.borrow().is_empty());
    assert_eq!(subject.observer_count(), 1);
  }

  #[test]
  fn test_unsubscribe_self_inside_next() {
    let subject = PublishSubject::<i32, Infallible>::new();
    let seen = Rc::new(RefCell::new(vec![]));
    let own: Rc<RefCell<Option<SubjectSubscription<i32, Infallible>>>> =
      Rc::new(RefCell::new(None));

    let sub = subject.clone().subscribe({
      let seen = seen.clone();
      let own = own.clone();
      move |v| {
        seen.borrow_mut().push(v);
        if let Some(sub) = own.borrow_mut().take() {
          sub.unsubscribe();
        }
      }
    });
    *own.borrow_mut() = Some(sub);

    subject.emit_next(1);
    subject.emit_next(2);
    assert_eq!(*seen.borrow(), vec![1]);
    assert!(!subject.has_observers());
  }

  #[test]
  fn test_subscribe_inside_next_misses_current_event() {
    let subject = PublishSubject::<i32, Infallible>::new();
    let primary = Rc::new(RefCell::new(vec![]));
    let secondary = Rc::new(RefCell::new(vec![]));

    subject.clone().subscribe({
      let subject = subject.clone();
      let primary = primary.clone();
      let secondary = secondary.clone();
      move |v| {
        primary.borrow_mut().push(v);
        if v == 1 {
          let secondary = secondary.clone();
          subject
            .clone()
            .subscribe(move |v| secondary.borrow_mut().push(v));
        }
      }
    });

    subject.emit_next(1);
    subject.emit_next(2);

    assert_eq!(*primary.borrow(), vec![1, 2]);
    assert_eq!(*secondary.borrow(), vec![2]);
  }

  #[test]
  fn test_subscribe_inside_replay_keeps_subscription_order() {
    let subject = BehaviorSubject::<i32, Infallible>::new(0);
    let log = Rc::new(RefCell::new(vec![]));
    let nested = Cell::new(false);

    subject.clone().subscribe({
      let subject = subject.clone();
      let log = log.clone();
      move |v| {
        log.borrow_mut().push(("outer", v));
        if !nested.replace(true) {
          let log = log.clone();
          subject
            .clone()
            .subscribe(move |v| log.borrow_mut().push(("inner", v)));
        }
      }
    });

    subject.emit_next(5);
    subject.emit_next(7);

    assert_eq!(
      *log.borrow(),
      vec![("outer", 0), ("inner", 0), ("outer", 5), ("inner", 5), ("outer", 7), ("inner", 7)]
    );
  }

  #[test]
  fn test_reentrant_emission_is_queued() {
    let subject = PublishSubject::<i32, Infallible>::new();
    let first = Rc::new(RefCell::new(vec![]));
    let second = Rc::new(RefCell::new(vec![]));

    subject.clone().subscribe({
      let subject = subject.clone();
      let first = first.clone();
      move |v| {
        first.borrow_mut().push(v);
        if v < 3 {
          subject.emit_next(v + 1);
        }
      }
    });
    subject.clone().subscribe({
      let second = second.clone();
      move |v| second.borrow_mut().push(v)
    });

    subject.emit_next(1);

    // Both observers see the same order, the nested emissions after the
    // outer one.
    assert_eq!(*first.borrow(), vec![1, 2, 3]);
    assert_eq!(*second.borrow(), vec![1, 2, 3]);
  }

  #[test]
  fn test_reentrant_complete_reaches_everyone_once() {
    let subject = PublishSubject::<i32, ()>::new();
    let log = Rc::new(RefCell::new(vec![]));

    subject.clone().subscribe_event({
      let subject = subject.clone();
      let log = log.clone();
      move |e| {
        if e.is_next() {
          subject.emit_completed();
          subject.emit_next(99);
        }
        log.borrow_mut().push(("a", e));
      }
    });
    subject.clone().subscribe_event({
      let log = log.clone();
      move |e| log.borrow_mut().push(("b", e))
    });

    subject.emit_next(1);

    assert_eq!(
      *log.borrow(),
      vec![
        ("a", Event::Next(1)),
        ("b", Event::Next(1)),
        ("a", Event::Completed),
        ("b", Event::Completed),
      ]
    );
  }

  #[test]
  fn test_dispose_subject() {
    let subject = ReplaySubject::<i32, ()>::new(4);
    let seen = Rc::new(RefCell::new(vec![]));
    let c_seen = seen.clone();
    let completed = Rc::new(RefCell::new(false));
    let c_completed = completed.clone();

    subject.emit_next(1);
    subject.clone().subscribe_all(
      move |v| c_seen.borrow_mut().push(v),
      |_| {},
      move || *c_completed.borrow_mut() = true,
    );
    subject.dispose();
    subject.dispose();

    subject.emit_next(2);
    subject.emit_completed();
    assert_eq!(*seen.borrow(), vec![1]);
    assert!(!*completed.borrow());
    assert!(subject.is_stopped());

    let late = subject.clone().subscribe(|_| panic!("disposed subject replays nothing"));
    assert!(late.is_closed());
  }

  #[test]
  fn test_subject_subscribe_subject() {
    let source = PublishSubject::<i32, ()>::new();
    let sink = ReplaySubject::<i32, ()>::unbounded();
    source.clone().subscribe_with(sink.clone());

    source.emit_next(1);
    source.emit_next(2);
    source.emit_error(());

    let log = Rc::new(RefCell::new(vec![]));
    let c_log = log.clone();
    sink
      .clone()
      .subscribe_event(move |e| c_log.borrow_mut().push(e));
    assert_eq!(*log.borrow(), vec![Event::Next(1), Event::Next(2), Event::Error(())]);
    assert!(sink.is_stopped());
  }

  #[test]
  fn test_subscription_clones_share_state() {
    let subject = PublishSubject::<i32, Infallible>::new();
    let sub = subject.clone().subscribe(|_| {});
    let twin = sub.clone();
    assert!(!twin.is_closed());
    sub.unsubscribe();
    assert!(twin.is_closed());
    twin.unsubscribe();
    assert_eq!(subject.observer_count(), 0);
  }

  #[test]
  fn test_unsubscribe_after_termination_is_noop() {
    let subject = PublishSubject::<i32, ()>::new();
    let sub = subject.clone().subscribe(|_| {});
    subject.emit_completed();
    assert!(sub.is_closed());
    sub.unsubscribe();
  }

  #[test]
  fn test_as_observable_view() {
    let subject = BehaviorSubject::<i32, Infallible>::new(5);
    let seen = Rc::new(RefCell::new(vec![]));
    let c_seen = seen.clone();
    subject
      .as_observable()
      .subscribe(move |v| c_seen.borrow_mut().push(v));
    subject.emit_next(6);
    assert_eq!(*seen.borrow(), vec![5, 6]);
  }
}
