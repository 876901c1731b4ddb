//! The notification a stream delivers to its observers.

/// A single notification of a stream.
///
/// A stream emits zero or more `Next` events followed by at most one terminal
/// event (`Error` or `Completed`). Nothing is delivered after a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event<Item, Err> {
  Next(Item),
  Error(Err),
  Completed,
}

impl<Item, Err> Event<Item, Err> {
  /// `true` for `Error` and `Completed`.
  #[inline]
  pub fn is_terminal(&self) -> bool { !matches!(self, Event::Next(_)) }

  #[inline]
  pub fn is_next(&self) -> bool { matches!(self, Event::Next(_)) }

  /// The carried value of a `Next` event.
  #[inline]
  pub fn element(&self) -> Option<&Item> {
    match self {
      Event::Next(v) => Some(v),
      _ => None,
    }
  }

  /// The carried error of an `Error` event.
  #[inline]
  pub fn error(&self) -> Option<&Err> {
    match self {
      Event::Error(e) => Some(e),
      _ => None,
    }
  }

  #[inline]
  pub fn into_element(self) -> Option<Item> {
    match self {
      Event::Next(v) => Some(v),
      _ => None,
    }
  }

  /// Transform the value of a `Next` event, leaving terminal events as they
  /// are.
  pub fn map<U>(self, f: impl FnOnce(Item) -> U) -> Event<U, Err> {
    match self {
      Event::Next(v) => Event::Next(f(v)),
      Event::Error(e) => Event::Error(e),
      Event::Completed => Event::Completed,
    }
  }

  /// Short name of the variant, used as a structured logging field.
  pub(crate) fn kind(&self) -> &'static str {
    match self {
      Event::Next(_) => "next",
      Event::Error(_) => "error",
      Event::Completed => "completed",
    }
  }
}
