//! Lookup tables for tabular temporal difference learning

use std::{collections::HashMap, hash::Hash};

/// Q-table mapping (state, action) pairs to action-value estimates
///
/// Keyed by canonical state key, then by action. Unseen pairs read as 0.0.
#[derive(Debug, Clone)]
pub struct QTable<K, A> {
    q_values: HashMap<K, HashMap<A, f64>>,
}

impl<K: Copy + Eq + Hash, A: Copy + Eq + Hash> QTable<K, A> {
    /// Create an empty Q-table
    pub fn new() -> Self {
        Self {
            q_values: HashMap::new(),
        }
    }

    /// Get Q-value for a state-action pair
    pub fn get(&self, state: &K, action: &A) -> f64 {
        self.q_values
            .get(state)
            .and_then(|actions| actions.get(action))
            .copied()
            .unwrap_or(0.0)
    }

    /// Set Q-value for a state-action pair
    #[cfg(test)]
    pub fn set(&mut self, state: K, action: A, value: f64) {
        self.q_values.entry(state).or_default().insert(action, value);
    }

    /// Blend the current estimate toward `target` and return the new value
    ///
    /// Q(s,a) ← (1 - α) Q(s,a) + α target
    pub fn blend(&mut self, state: K, action: A, target: f64, learning_rate: f64) -> f64 {
        let entry = self
            .q_values
            .entry(state)
            .or_default()
            .entry(action)
            .or_insert(0.0);
        *entry = (1.0 - learning_rate) * *entry + learning_rate * target;
        *entry
    }

    /// Highest-valued action among `legal_actions` and its value
    ///
    /// Ties go to the earliest action in `legal_actions`. Returns `None` only
    /// when `legal_actions` is empty.
    pub fn best(&self, state: &K, legal_actions: &[A]) -> Option<(A, f64)> {
        legal_actions
            .iter()
            .map(|action| (*action, self.get(state, action)))
            .fold(None, |best, (action, value)| match best {
                Some((_, best_value)) if value <= best_value => best,
                _ => Some((action, value)),
            })
    }

    /// Number of states with at least one stored Q-value
    #[cfg(test)]
    pub fn state_count(&self) -> usize {
        self.q_values.len()
    }

    /// Total number of stored Q-values
    pub fn size(&self) -> usize {
        self.q_values.values().map(HashMap::len).sum()
    }
}

impl<K: Copy + Eq + Hash, A: Copy + Eq + Hash> Default for QTable<K, A> {
    fn default() -> Self {
        Self::new()
    }
}
