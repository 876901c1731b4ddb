use super::{policy::Publish, Subject};

/// Forwards only what is emitted after a subscription begins.
///
/// Nothing is buffered: values emitted while nobody listens are lost, and an
/// observer that subscribes after the subject terminated receives nothing at
/// all.
pub type PublishSubject<'a, Item, Err> = Subject<'a, Item, Err, Publish>;

impl<'a, Item, Err> Subject<'a, Item, Err, Publish> {
  #[inline]
  pub fn new() -> Self { Self::with_policy(Publish) }
}
