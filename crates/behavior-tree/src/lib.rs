//! Minimal behavior tree primitives for turn-based combat decisions.
//!
//! A tree is evaluated once per decision against a caller-owned context (the
//! "blackboard"). Every tick completes immediately:
//!
//! - **No Running state**: nodes succeed or fail within the tick
//! - **No clock**: turn order is the caller's concern
//! - **Zero dependencies**
//!
//! # Architecture
//!
//! - [`Behavior`]: core trait for all nodes
//! - [`Status`]: Success or Failure
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Decorator nodes: [`Inverter`]
//! - Leaf helper: [`Condition`] wraps a predicate over the context

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod status;

pub use behavior::{Behavior, Condition};
pub use composite::{Selector, Sequence};
pub use decorator::Inverter;
pub use status::Status;
