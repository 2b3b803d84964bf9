//! Timed follow-up steps.
//!
//! Animations never block: a transition that has to wait (dice flicker,
//! lane slide) schedules its continuation here, and the host drives the
//! clock with `tick(dt)` once per frame.

pub mod scheduler;

pub use scheduler::Scheduler;
