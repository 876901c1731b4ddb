//! Subjects: observables that are also the emitter of their events.
//!
//! | Type | A new subscriber first receives |
//! |------|---------------------------------|
//! | [`PublishSubject`] | nothing |
//! | [`BehaviorSubject`] | the latest event (initially the seed value) |
//! | [`ReplaySubject`] | the buffered values, then the terminal event if any |
//! | [`Variable`] | the current value |

mod behavior_subject;
pub mod policy;
mod publish_subject;
mod replay_subject;
mod subject_core;
mod subject_subscription;
mod subscribers;
mod variable;

pub use behavior_subject::*;
pub use policy::{Behavior, Publish, Replay, ReplayPolicy};
pub use publish_subject::*;
pub use replay_subject::*;
pub use subject_core::*;
pub use subject_subscription::*;
pub use subscribers::Subscribers;
pub use variable::*;
