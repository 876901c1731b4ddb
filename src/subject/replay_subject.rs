use super::{policy::Replay, Subject};
use crate::rc::RcDeref;

/// Buffers the most recent values and replays them to new subscribers.
///
/// A subscriber receives the buffer, oldest first, before any live event.
/// The subject keeps its buffer after terminating, so a subscriber that
/// arrives later still receives the buffer followed by the terminal event.
pub type ReplaySubject<'a, Item, Err> = Subject<'a, Item, Err, Replay<Item>>;

impl<'a, Item, Err> Subject<'a, Item, Err, Replay<Item>> {
  /// Keep the last `buffer_size` values. Zero keeps none.
  #[inline]
  pub fn new(buffer_size: usize) -> Self { Self::with_policy(Replay::bounded(buffer_size)) }

  /// Keep every value.
  #[inline]
  pub fn unbounded() -> Self { Self::with_policy(Replay::unbounded()) }

  /// `None` when unbounded.
  pub fn buffer_size(&self) -> Option<usize> { self.state.rc_deref().policy.capacity() }
}
