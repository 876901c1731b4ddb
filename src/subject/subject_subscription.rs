use std::{cell::Cell, rc::Rc};

use super::subscribers::Subscribers;
use crate::{
  rc::{MutRc, RcDeref, RcDerefMut},
  subscription::Subscription,
};

/// Subscription handle for a Subject.
///
/// Holds a pointer to the subject's observer list and the id of the observer
/// it registered. Clones share the id, so once any clone unsubscribes the
/// others are closed too and unsubscribing them does nothing.
///
/// A subscription to a subject that had already terminated never registered
/// an observer and is closed from the start.
pub struct SubjectSubscription<'a, Item, Err> {
  observers: MutRc<Subscribers<'a, Item, Err>>,
  id: Rc<Cell<Option<usize>>>,
}

impl<'a, Item, Err> SubjectSubscription<'a, Item, Err> {
  pub(crate) fn new(observers: MutRc<Subscribers<'a, Item, Err>>, id: Option<usize>) -> Self {
    Self { observers, id: Rc::new(Cell::new(id)) }
  }
}

impl<'a, Item, Err> Clone for SubjectSubscription<'a, Item, Err> {
  fn clone(&self) -> Self { Self { observers: self.observers.clone(), id: self.id.clone() } }
}

impl<'a, Item, Err> Subscription for SubjectSubscription<'a, Item, Err> {
  fn unsubscribe(self) {
    let Some(id) = self.id.take() else {
      return;
    };
    // Bind the removed observer so it drops after the borrow is released.
    let removed = self.observers.rc_deref_mut().remove(id);
    tracing::trace!(id, removed = removed.is_some(), "observer unsubscribed");
  }

  fn is_closed(&self) -> bool {
    match self.id.get() {
      Some(id) => !self.observers.rc_deref().contains(id),
      None => true,
    }
  }
}
