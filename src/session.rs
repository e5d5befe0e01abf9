//! A live calculator session.
//!
//! The session owns the one mutable [`GoalInputs`] value. Every effective
//! edit is published to input subscribers, recomputed, and the fresh
//! outputs published to output subscribers. All of it happens synchronously
//! on the caller's thread, subscribers in the order they subscribed.

mod change;
mod clock;

use tracing::{debug, trace};

use crate::calculator::{GoalError, compute_goal};
use crate::model::{Field, GoalInputs, GoalOutputs};

pub use change::{InputChange, ParseChangeError};
pub use clock::{Clock, FixedClock, SystemClock};

/// Handle returned by `subscribe_*`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Published after every recomputation.
#[derive(Debug)]
pub struct Recalculated<'a> {
    pub inputs: &'a GoalInputs,
    pub outputs: &'a Result<GoalOutputs, GoalError>,
}

type InputListener = Box<dyn FnMut(&InputChange)>;
type OutputListener = Box<dyn for<'a> FnMut(&Recalculated<'a>)>;

/// Holds inputs and the outputs last derived from them.
pub struct GoalSession<C = SystemClock> {
    inputs: GoalInputs,
    outputs: Result<GoalOutputs, GoalError>,
    clock: C,
    next_id: u64,
    input_listeners: Vec<(SubscriptionId, InputListener)>,
    output_listeners: Vec<(SubscriptionId, OutputListener)>,
}

impl<C: Clock> GoalSession<C> {
    /// Start a session and compute its first outputs.
    pub fn new(inputs: GoalInputs, clock: C) -> Self {
        let outputs = compute_goal(&inputs, &clock.now());
        Self {
            inputs,
            outputs,
            clock,
            next_id: 0,
            input_listeners: Vec::new(),
            output_listeners: Vec::new(),
        }
    }

    pub fn inputs(&self) -> &GoalInputs {
        &self.inputs
    }

    /// Outputs from the last recomputation.
    pub fn outputs(&self) -> &Result<GoalOutputs, GoalError> {
        &self.outputs
    }

    /// Be told about every effective input edit.
    pub fn subscribe_inputs(
        &mut self,
        listener: impl FnMut(&InputChange) + 'static,
    ) -> SubscriptionId {
        let id = self.next_subscription();
        self.input_listeners.push((id, Box::new(listener)));
        id
    }

    /// Be told about every recomputation.
    pub fn subscribe_outputs(
        &mut self,
        listener: impl for<'a> FnMut(&Recalculated<'a>) + 'static,
    ) -> SubscriptionId {
        let id = self.next_subscription();
        self.output_listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a subscription of either kind. Returns whether it existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.input_listeners.len() + self.output_listeners.len();
        self.input_listeners.retain(|(sub, _)| *sub != id);
        self.output_listeners.retain(|(sub, _)| *sub != id);
        before != self.input_listeners.len() + self.output_listeners.len()
    }

    /// Set one field. Returns `false`, publishing nothing, if the value is unchanged.
    pub fn set(&mut self, field: Field, value: f64) -> bool {
        self.apply(InputChange { field, value })
    }

    /// Apply an edit, publish it, recompute, and publish the outputs.
    #[allow(clippy::float_cmp)] // Only an identical value is a no-op.
    pub fn apply(&mut self, change: InputChange) -> bool {
        if self.inputs.get(change.field) == change.value {
            trace!(field = %change.field, "unchanged input, skipping");
            return false;
        }

        self.inputs.set(change.field, change.value);
        debug!(field = %change.field, value = change.value, "input changed");

        for (_, listener) in &mut self.input_listeners {
            listener(&change);
        }
        self.recompute();
        true
    }

    /// Recompute with a fresh reading of the clock and publish the outputs.
    pub fn refresh(&mut self) {
        self.recompute();
    }

    fn recompute(&mut self) {
        self.outputs = compute_goal(&self.inputs, &self.clock.now());
        let event = Recalculated {
            inputs: &self.inputs,
            outputs: &self.outputs,
        };
        for (_, listener) in &mut self.output_listeners {
            listener(&event);
        }
    }

    fn next_subscription(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        id
    }
}
