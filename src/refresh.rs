// Request generations for view refreshes
// Every filter change starts a new generation; responses tagged with an older
// generation are dropped so a slow, superseded fetch can never overwrite the
// view of the current selection

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

/// Monotonic generation source shared between the view and its fetchers
#[derive(Debug, Default)]
pub struct GenerationCounter {
    current: AtomicU64,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, superseding every earlier one
    pub fn advance(&self) -> Generation {
        Generation(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn current(&self) -> Generation {
        Generation(self.current.load(Ordering::SeqCst))
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.current() == generation
    }
}

/// A fetch result stamped with the generation that requested it
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Tagged<T> {
    pub generation: Generation,
    pub payload: T,
}

impl<T> Tagged<T> {
    pub fn new(generation: Generation, payload: T) -> Self {
        Self {
            generation,
            payload,
        }
    }
}

/// Holds the most recent payload accepted for the current generation
pub struct LatestView<T> {
    counter: Arc<GenerationCounter>,
    latest: Option<Tagged<T>>,
}

impl<T> LatestView<T> {
    pub fn new(counter: Arc<GenerationCounter>) -> Self {
        Self {
            counter,
            latest: None,
        }
    }

    /// Store `response` if its generation is still current. Returns whether
    /// it was accepted.
    pub fn accept(&mut self, response: Tagged<T>) -> bool {
        if !self.counter.is_current(response.generation) {
            debug!(
                "Discarding stale response from generation {:?}, current is {:?}",
                response.generation,
                self.counter.current()
            );
            return false;
        }
        self.latest = Some(response);
        true
    }

    pub fn value(&self) -> Option<&T> {
        self.latest.as_ref().map(|tagged| &tagged.payload)
    }

    /// True when the held payload answers the current selection
    pub fn is_fresh(&self) -> bool {
        self.latest
            .as_ref()
            .is_some_and(|tagged| self.counter.is_current(tagged.generation))
    }
}
