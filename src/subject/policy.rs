//! What a subject remembers and what a late subscriber receives.
//!
//! The subject core owns observer bookkeeping and delivery; a policy only
//! decides which events are retained and replayed. Every subject variant is
//! the same [`Subject`](super::Subject) with a different policy plugged in.

use std::collections::VecDeque;

use crate::event::Event;

/// Retention and replay rules of a subject.
pub trait ReplayPolicy<Item, Err> {
  /// Called with each event, before it is delivered to the observers.
  fn record(&mut self, event: &Event<Item, Err>);

  /// Push onto `out` the events a newly subscribing observer receives
  /// before it is registered. `terminal` is the event that ended the subject,
  /// if any.
  fn replay(&self, terminal: Option<&Event<Item, Err>>, out: &mut Vec<Event<Item, Err>>);

  /// Drop whatever is retained. Called when the subject is disposed.
  fn clear(&mut self) {}
}

/// Nothing is retained; late subscribers see only what comes after them,
/// which after termination is nothing at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct Publish;

impl<Item, Err> ReplayPolicy<Item, Err> for Publish {
  #[inline]
  fn record(&mut self, _: &Event<Item, Err>) {}

  #[inline]
  fn replay(&self, _: Option<&Event<Item, Err>>, _: &mut Vec<Event<Item, Err>>) {}
}

/// Keeps the latest event, starting from an initial value.
#[derive(Debug, Clone)]
pub struct Behavior<Item, Err> {
  latest: Event<Item, Err>,
}

impl<Item, Err> Behavior<Item, Err> {
  #[inline]
  pub fn new(initial: Item) -> Self { Self { latest: Event::Next(initial) } }
}

impl<Item: Clone, Err: Clone> ReplayPolicy<Item, Err> for Behavior<Item, Err> {
  #[inline]
  fn record(&mut self, event: &Event<Item, Err>) { self.latest = event.clone(); }

  // The latest event already is the terminal one once the subject has ended.
  #[inline]
  fn replay(&self, _: Option<&Event<Item, Err>>, out: &mut Vec<Event<Item, Err>>) {
    out.push(self.latest.clone());
  }
}

/// Keeps the most recent `Next` values in a FIFO buffer.
#[derive(Debug, Clone)]
pub struct Replay<Item> {
  buffer: VecDeque<Item>,
  capacity: Option<usize>,
}

impl<Item> Replay<Item> {
  /// A buffer holding at most `capacity` values. Zero retains nothing.
  pub fn bounded(capacity: usize) -> Self {
    Self { buffer: VecDeque::new(), capacity: Some(capacity) }
  }

  pub fn unbounded() -> Self { Self { buffer: VecDeque::new(), capacity: None } }

  /// `None` when unbounded.
  #[inline]
  pub fn capacity(&self) -> Option<usize> { self.capacity }
}

impl<Item: Clone, Err: Clone> ReplayPolicy<Item, Err> for Replay<Item> {
  fn record(&mut self, event: &Event<Item, Err>) {
    let Event::Next(value) = event else {
      return;
    };
    match self.capacity {
      Some(0) => {}
      Some(cap) => {
        if self.buffer.len() == cap {
          self.buffer.pop_front();
        }
        self.buffer.push_back(value.clone());
      }
      None => self.buffer.push_back(value.clone()),
    }
  }

  fn replay(&self, terminal: Option<&Event<Item, Err>>, out: &mut Vec<Event<Item, Err>>) {
    out.extend(self.buffer.iter().cloned().map(Event::Next));
    out.extend(terminal.cloned());
  }

  fn clear(&mut self) { self.buffer.clear(); }
}
