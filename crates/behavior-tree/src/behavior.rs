//! Core behavior trait.
//!
//! [`Behavior`] is generic over the context type `C` so one tree type can be
//! shared by every decision that uses the same blackboard.

use crate::Status;

/// A behavior tree node that can be evaluated against a context.
///
/// Trees are usually built once and evaluated many times, possibly from a
/// `static`, hence the `Send + Sync` bound.
pub trait Behavior<C>: Send + Sync {
    /// Evaluate this node. Nodes may read the context and record results in it.
    fn tick(&self, ctx: &mut C) -> Status;
}

impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}

/// Leaf node that succeeds when a predicate over the context holds.
///
/// ```rust,ignore
/// let healthy = Condition::new(|ctx: &Ctx| ctx.hp * 2 > ctx.max_hp);
/// ```
pub struct Condition<F> {
    predicate: F,
}

impl<F> Condition<F> {
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<C, F> Behavior<C> for Condition<F>
where
    F: Fn(&C) -> bool + Send + Sync,
{
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (self.predicate)(ctx).into()
    }
}
