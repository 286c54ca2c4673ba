use serde::{Deserialize, Serialize};

use crate::models::MatchPair;

/// Whether a state may belong to more than one active pair.
///
/// UI generations disagreed on this; it is an explicit flag here rather
/// than divergent code paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Selecting a pair touching a state already paired evicts the prior
    /// pair first, so each state belongs to at most one pair.
    Exclusive,
    /// Pairs accumulate freely.
    MultiSelect,
}

/// The active pair set as driven by user toggles.
#[derive(Debug, Clone)]
pub struct PairSelection {
    mode: SelectionMode,
    pairs: Vec<MatchPair>,
}

impl PairSelection {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            pairs: Vec::new(),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn pairs(&self) -> &[MatchPair] {
        &self.pairs
    }

    pub fn contains(&self, pair: &MatchPair) -> bool {
        self.pairs.contains(pair)
    }

    pub fn is_paired(&self, state: &str) -> bool {
        self.pairs.iter().any(|p| p.touches(state))
    }

    /// Toggle a pair: deselect it if present, otherwise select it (evicting
    /// conflicting pairs first under exclusive mode).
    pub fn toggle(&mut self, pair: MatchPair) {
        if let Some(idx) = self.pairs.iter().position(|p| *p == pair) {
            self.pairs.remove(idx);
            tracing::debug!(pair = %pair.key(), "pair deselected");
            return;
        }
        if self.mode == SelectionMode::Exclusive {
            self.pairs
                .retain(|p| !p.touches(pair.first()) && !p.touches(pair.second()));
        }
        tracing::debug!(pair = %pair.key(), "pair selected");
        self.pairs.push(pair);
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }
}
