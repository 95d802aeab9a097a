//! The parameter-change -> invocation -> render loop.

use std::sync::mpsc::Receiver;

use pt_core::{ParameterSet, numeric::Real};
use pt_invoke::Simulate;
use pt_params::{ChangeEvent, GainKind, ParameterStore};

use crate::render::RenderSink;

/// Observable loop state. There is no `Running` state: invocation is
/// synchronous, so callers only ever see the loop between displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// No change processed yet, nothing displayed.
    Idle,
    /// Last result (possibly the empty state) is on screen.
    Displaying,
}

/// Owns the store, the simulation capability, and the render sink.
///
/// Every change notification becomes exactly one invocation and exactly one
/// render call, processed serially in emission order. Failures resolve to
/// `render_empty`; there is no retry and nothing propagates past the loop.
pub struct ControlLoop<I: Simulate, S: RenderSink> {
    store: ParameterStore,
    events: Receiver<ChangeEvent>,
    invoker: I,
    sink: S,
    state: LoopState,
}

impl<I: Simulate, S: RenderSink> ControlLoop<I, S> {
    pub fn new(mut store: ParameterStore, invoker: I, sink: S) -> Self {
        let events = store.subscribe();
        Self {
            store,
            events,
            invoker,
            sink,
            state: LoopState::Idle,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn store(&self) -> &ParameterStore {
        &self.store
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Slider-drag entry point: mutate, then process the resulting events.
    pub fn set_from_slider(&mut self, kind: GainKind, raw: Real) {
        self.store.set_from_slider(kind, raw);
        self.pump();
    }

    /// Text-commit entry point: mutate, then process the resulting events.
    pub fn set_from_text(&mut self, kind: GainKind, raw: &str) {
        self.store.set_from_text(kind, raw);
        self.pump();
    }

    /// Drain pending change events in order, one invocation and one render
    /// call each. Returns the number of events processed.
    pub fn pump(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.events.try_recv() {
            tracing::debug!(gain = %event.kind, "processing parameter change");
            let snapshot = self.store.snapshot();
            self.display(snapshot);
            processed += 1;
        }
        processed
    }

    /// One invocation of the current snapshot, independent of the event
    /// queue. Used by front ends that set up parameters before attaching.
    pub fn refresh(&mut self) {
        let snapshot = self.store.snapshot();
        self.display(snapshot);
    }

    fn display(&mut self, params: ParameterSet) {
        match self.invoker.simulate(params) {
            Ok(resp) if !resp.is_empty() => {
                self.sink
                    .render(&resp.times, &resp.outputs, resp.overshoot, resp.settle_time);
            }
            Ok(_) => self.sink.render_empty(),
            Err(err) => {
                tracing::debug!(error = %err, "invocation failed, clearing display");
                self.sink.render_empty();
            }
        }
        self.state = LoopState::Displaying;
    }
}
