//! Per-pass visitation state

use crate::project::FileId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    Unvisited,
    Visiting,
    Emitted,
}

/// Emission state of every file for one planning pass.
///
/// Created fresh per pass and owned by it. States only move forward:
/// `Unvisited -> Visiting -> Emitted`.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    states: Vec<VisitState>,
}

impl VisitedSet {
    pub fn new(len: usize) -> Self {
        Self {
            states: vec![VisitState::Unvisited; len],
        }
    }

    pub fn state(&self, id: FileId) -> VisitState {
        self.states[id.index()]
    }

    pub fn mark_visiting(&mut self, id: FileId) {
        debug_assert_eq!(self.state(id), VisitState::Unvisited);
        self.states[id.index()] = VisitState::Visiting;
    }

    pub fn mark_emitted(&mut self, id: FileId) {
        debug_assert_eq!(self.state(id), VisitState::Visiting);
        self.states[id.index()] = VisitState::Emitted;
    }
}
