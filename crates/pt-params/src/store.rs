//! The store owning all three gains plus change notification.

use std::sync::mpsc::{Receiver, Sender, channel};

use pt_core::{ParameterSet, numeric::Real};

use crate::gain::{Gain, GainKind};

/// Emitted after every mutator call, in emission order.
///
/// Carries only the gain that was touched; subscribers take a fresh
/// [`ParameterStore::snapshot`] when they process the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    pub kind: GainKind,
}

/// Owns the three gains and notifies subscribers on every mutation.
#[derive(Debug)]
pub struct ParameterStore {
    kp: Gain,
    ki: Gain,
    kd: Gain,
    subscribers: Vec<Sender<ChangeEvent>>,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self {
            kp: Gain::new(GainKind::Kp),
            ki: Gain::new(GainKind::Ki),
            kd: Gain::new(GainKind::Kd),
            subscribers: Vec::new(),
        }
    }

    /// Register a change listener. Events arrive in emission order and are
    /// never coalesced: a no-op mutation still produces an event.
    pub fn subscribe(&mut self) -> Receiver<ChangeEvent> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn gain(&self, kind: GainKind) -> &Gain {
        match kind {
            GainKind::Kp => &self.kp,
            GainKind::Ki => &self.ki,
            GainKind::Kd => &self.kd,
        }
    }

    fn gain_mut(&mut self, kind: GainKind) -> &mut Gain {
        match kind {
            GainKind::Kp => &mut self.kp,
            GainKind::Ki => &mut self.ki,
            GainKind::Kd => &mut self.kd,
        }
    }

    /// Slider-drag path: clamp, round, re-render text, notify.
    pub fn set_from_slider(&mut self, kind: GainKind, raw: Real) {
        self.gain_mut(kind).set_from_slider(raw);
        self.notify(kind);
    }

    /// Text-commit path: parse (with reset-to-zero recovery), clamp, notify.
    pub fn set_from_text(&mut self, kind: GainKind, raw: &str) {
        self.gain_mut(kind).set_from_text(raw);
        self.notify(kind);
    }

    /// Current triple, by value.
    pub fn snapshot(&self) -> ParameterSet {
        ParameterSet::new(self.kp.value(), self.ki.value(), self.kd.value())
    }

    fn notify(&mut self, kind: GainKind) {
        // Disconnected receivers are dropped subscribers; ignore them.
        for tx in &self.subscribers {
            let _ = tx.send(ChangeEvent { kind });
        }
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_mutations() {
        let mut store = ParameterStore::new();
        store.set_from_slider(GainKind::Kp, 1.2);
        store.set_from_text(GainKind::Ki, "0.5");
        let snap = store.snapshot();
        assert_eq!(snap, ParameterSet::new(1.2, 0.5, 0.0));
        assert_eq!(store.gain(GainKind::Ki).kind(), GainKind::Ki);
    }

    #[test]
    fn snapshot_is_detached_from_later_mutations() {
        let mut store = ParameterStore::new();
        store.set_from_slider(GainKind::Kd, 0.8);
        let snap = store.snapshot();
        store.set_from_slider(GainKind::Kd, 1.6);
        assert_eq!(snap.kd, 0.8);
        assert_eq!(store.snapshot().kd, 1.6);
    }

    #[test]
    fn every_mutation_emits_even_when_value_unchanged() {
        let mut store = ParameterStore::new();
        let rx = store.subscribe();
        store.set_from_slider(GainKind::Kp, 1.0);
        store.set_from_slider(GainKind::Kp, 1.0);
        store.set_from_text(GainKind::Kp, "1.0");
        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(events.len(), 3);
        assert!(events.iter().all(|e| e.kind == GainKind::Kp));
    }

    #[test]
    fn events_arrive_in_emission_order() {
        let mut store = ParameterStore::new();
        let rx = store.subscribe();
        store.set_from_slider(GainKind::Kp, 0.1);
        store.set_from_slider(GainKind::Ki, 0.2);
        store.set_from_slider(GainKind::Kd, 0.3);
        let kinds: Vec<_> = rx.try_iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![GainKind::Kp, GainKind::Ki, GainKind::Kd]);
    }

    #[test]
    fn dropped_subscriber_does_not_block_mutations() {
        let mut store = ParameterStore::new();
        drop(store.subscribe());
        store.set_from_slider(GainKind::Kp, 0.5);
        assert_eq!(store.snapshot().kp, 0.5);
    }
}
