//! # rxsubject: Reactive subjects for Rust
//!
//! Single-threaded, synchronous implementations of the Reactive Extensions
//! subjects: values pushed into a subject are delivered to every current
//! observer before the emitting call returns.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::{cell::RefCell, rc::Rc};
//!
//! use rxsubject::prelude::*;
//!
//! let seen = Rc::new(RefCell::new(vec![]));
//! let subject = ReplaySubject::<i32, ()>::new(2);
//! let bag = DisposeBag::new();
//!
//! subject.emit_next(1);
//! subject.emit_next(2);
//! subject.emit_next(3);
//!
//! let c_seen = seen.clone();
//! subject
//!   .clone()
//!   .subscribe(move |v| c_seen.borrow_mut().push(v))
//!   .disposed_by(&bag);
//!
//! assert_eq!(*seen.borrow(), vec![2, 3]);
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Event`] | `Next`, `Error` or `Completed` notification |
//! | [`Observer`] | Consumes `next`, `error`, and `complete` events |
//! | [`Observable`] | A source observers subscribe to |
//! | [`Subject`] | An observable that is also the emitter |
//! | [`Subscription`] | Handle to cancel an active subscription |
//! | [`DisposeBag`] | Cancels many subscriptions at once |
//!
//! [`Event`]: event::Event
//! [`Observer`]: observer::Observer
//! [`Observable`]: observable::Observable
//! [`Subject`]: subject::Subject
//! [`Subscription`]: subscription::Subscription
//! [`DisposeBag`]: subscription::DisposeBag

pub mod event;
pub mod observable;
pub mod observer;
pub mod prelude;
pub mod rc;
pub mod subject;
pub mod subscription;

pub use prelude::*;
