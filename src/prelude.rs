//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for easy access.

// Core traits
pub use crate::{
  event::Event,
  observable::{AsObservable, Observable},
  observer::{BoxedObserver, DynObserver, EventObserver, FnMutObserver, Observer, ObserverAll},
};
// Subject
pub use crate::subject::*;
// Subscription
pub use crate::subscription::*;
