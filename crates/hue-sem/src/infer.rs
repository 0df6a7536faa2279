//! Lazy return-type inference as an explicit worklist (§4.4,
//! §9: "Implementers should represent deferred work as an explicit queue
//! of `(node, expected_type?)` tuples and iterate until quiescence or no
//! progress").

use std::collections::VecDeque;

use hue_par::types::Type;
use hue_par::NodeId;

/// A `Call` whose callee's result type was still `Unknown` at the point it
/// was first visited (§4.4 step 2).
#[derive(Debug, Clone)]
pub struct Deferred {
    pub call: NodeId,
    pub expected: Option<Type>,
}

/// The worklist itself. `analysis.rs` drains it after each block (§4.4
/// step 3) and again in a final fixed-point loop over the whole module
/// (step 4).
#[derive(Default)]
pub struct Worklist {
    queue: VecDeque<Deferred>,
}

impl Worklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, call: NodeId, expected: Option<Type>) {
        self.queue.push_back(Deferred { call, expected });
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drains every entry through `retry`, keeping only the ones that made
    /// no progress. Returns whether *any* entry resolved this round.
    pub fn drain_retry(&mut self, mut retry: impl FnMut(&Deferred) -> bool) -> bool {
        let mut still_pending = VecDeque::new();
        let mut progress = false;
        while let Some(entry) = self.queue.pop_front() {
            if retry(&entry) {
                progress = true;
            } else {
                still_pending.push_back(entry);
            }
        }
        self.queue = still_pending;
        progress
    }

    pub fn pending(&self) -> impl Iterator<Item = &Deferred> {
        self.queue.iter()
    }
}
