//! Walks through every subject flavour and logs what each subscriber sees.
//!
//! Run with `RUST_LOG=trace` to also see the library's own subscription and
//! termination events.

use std::fmt::Display;

use rxsubject::prelude::*;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Error)]
enum MyError {
  #[error("anError")]
  AnError,
}

fn print<T: Display, E: Display>(label: &'static str) -> impl FnMut(Event<T, E>) {
  move |event| match event {
    Event::Next(v) => info!("{label}) {v}"),
    Event::Error(e) => info!("{label}) {e}"),
    Event::Completed => info!("{label}) completed"),
  }
}

fn publish_subject() {
  info!("--- PublishSubject ---");
  let bag = DisposeBag::new();
  let subject = PublishSubject::<&str, MyError>::new();
  subject.emit_next("Is anyone listening?");

  let sub1 = subject.clone().subscribe_event(print("1"));
  subject.emit_next("1");
  subject.emit_next("2");

  subject
    .clone()
    .subscribe_event(print("2"))
    .disposed_by(&bag);
  subject.emit_next("3");

  sub1.unsubscribe();
  subject.emit_next("4");
  subject.emit_completed();
  subject.emit_next("5");

  subject
    .clone()
    .subscribe_event(print("3"))
    .disposed_by(&bag);
  subject.emit_next("?");
}

fn behavior_subject() {
  info!("--- BehaviorSubject ---");
  let bag = DisposeBag::new();
  let subject = BehaviorSubject::<&str, MyError>::new("Initial value");
  subject.emit_next("X");
  subject
    .clone()
    .subscribe_event(print("1"))
    .disposed_by(&bag);
  subject.emit_error(MyError::AnError);
  subject
    .clone()
    .subscribe_event(print("2"))
    .disposed_by(&bag);
}

fn replay_subject() {
  info!("--- ReplaySubject ---");
  let bag = DisposeBag::new();
  let subject = ReplaySubject::<&str, MyError>::new(2);
  subject.emit_next("1");
  subject.emit_next("2");
  subject.emit_next("3");

  subject
    .clone()
    .subscribe_event(print("1"))
    .disposed_by(&bag);
  subject
    .clone()
    .subscribe_event(print("2"))
    .disposed_by(&bag);

  subject.emit_next("4");
  subject.emit_error(MyError::AnError);

  subject
    .clone()
    .subscribe_event(print("3"))
    .disposed_by(&bag);
}

fn variable() {
  info!("--- Variable ---");
  let bag = DisposeBag::new();
  let mut variable = Variable::new("Initial value");
  variable.set_value("New initial value");

  variable
    .as_observable()
    .subscribe_event(print("1"))
    .disposed_by(&bag);
  variable.set_value("1");

  variable
    .as_observable()
    .subscribe_event(print("2"))
    .disposed_by(&bag);
  variable.set_value("2");
  info!(current = *variable.value(), "variable value");
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    )
    .init();

  publish_subject();
  behavior_subject();
  replay_subject();
  variable();
}
