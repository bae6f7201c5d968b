//! Episodic tabular learning agent
//!
//! Records every observation and action of an episode, then on the terminal
//! observation walks the trajectory backward once, updating action values,
//! state values and the greedy policy.

use std::collections::HashMap;

use log::{debug, trace};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    Error, Result,
    config::LearningConfig,
    ports::{Agent, Game},
    q_learning::{episode::Episode, tables::QTable},
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Tabular learner with an ε-greedy policy and a backward episodic update
///
/// Tables live as long as the agent and only ever grow. Each instance owns
/// its tables; nothing is shared between agents.
pub struct QLearnerAgent<G: Game> {
    name: String,
    q_table: QTable<G::Key, G::Action>,
    v_values: HashMap<G::Key, f64>,
    policy: HashMap<G::Key, G::Action>,
    episode: Episode<G::State, G::Action>,
    discount: f64,
    learning_rate: f64,
    greedy_eps: f64,
    eps_decay: f64,
    lr_decay: f64,
    min_greedy_eps: f64,
    episodes_learned: usize,
    rng: StdRng,
}

impl<G: Game> QLearnerAgent<G> {
    /// Create a learner with empty tables
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `config` does not validate.
    pub fn new(name: impl Into<String>, config: &LearningConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            name: name.into(),
            q_table: QTable::new(),
            v_values: HashMap::new(),
            policy: HashMap::new(),
            episode: Episode::new(),
            discount: config.discount,
            learning_rate: config.learning_rate,
            greedy_eps: config.greedy_eps,
            eps_decay: config.eps_decay,
            lr_decay: config.lr_decay,
            min_greedy_eps: config.min_greedy_eps,
            episodes_learned: 0,
            rng: build_rng(config.seed),
        })
    }

    /// Policy action for `key`, seeding it with a random legal action when the
    /// state has never been seen.
    fn policy_action(&mut self, key: G::Key, actions: &[G::Action]) -> Result<G::Action> {
        if let Some(&action) = self.policy.get(&key) {
            return Ok(action);
        }
        let action = *actions.choose(&mut self.rng).ok_or(Error::NoValidMoves)?;
        self.policy.insert(key, action);
        Ok(action)
    }

    /// Run one backward pass over the recorded episode and clear it.
    ///
    /// Called automatically when [`Agent::observe`] receives a terminal state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedTrajectory`] if the recorded steps do not
    /// alternate observation and action, or if any state other than the final
    /// one is terminal. The recorded episode is discarded either way.
    pub fn learn_from_episode(&mut self, game: &G) -> Result<()> {
        let (terminal, transitions) = self.episode.drain_backward()?;
        if let Some(early) = transitions.iter().find(|t| game.is_terminal(&t.state)) {
            return Err(Error::MalformedTrajectory {
                reason: format!(
                    "terminal state {:?} recorded before the end of the episode",
                    early.state
                ),
            });
        }
        self.v_values.insert(game.key(&terminal), 0.0);

        for transition in &transitions {
            let reward = transition.next_score - transition.score;
            let key = game.key(&transition.state);
            let next_value = self
                .v_values
                .get(&game.key(&transition.next_state))
                .copied()
                .unwrap_or(0.0);

            let q = self.q_table.blend(
                key,
                transition.action,
                reward + self.discount * next_value,
                self.learning_rate,
            );
            trace!(
                "{}: Q[{:?}][{:?}] <- {q:.4} (reward {reward})",
                self.name, key, transition.action
            );

            let actions = game.valid_actions(&transition.state);
            if let Some((best_action, best_value)) = self.q_table.best(&key, &actions) {
                self.v_values.insert(key, best_value);
                self.policy.insert(key, best_action);
            }
        }

        self.greedy_eps = (self.greedy_eps - self.eps_decay).max(self.min_greedy_eps);
        self.learning_rate = (self.learning_rate - self.lr_decay).max(0.0);
        self.episodes_learned += 1;

        debug!(
            "{}: learned episode {} ({} updates, eps {:.4}, lr {:.5}, {} states valued)",
            self.name,
            self.episodes_learned,
            transitions.len(),
            self.greedy_eps,
            self.learning_rate,
            self.v_values.len()
        );
        Ok(())
    }

    /// Current action-value estimate
    pub fn q_value(&self, state: &G::State, action: &G::Action, game: &G) -> f64 {
        self.q_table.get(&game.key(state), action)
    }

    /// Current state-value estimate, 0 for states never updated
    pub fn state_value(&self, state: &G::State, game: &G) -> f64 {
        self.v_values.get(&game.key(state)).copied().unwrap_or(0.0)
    }

    /// Whether a learning pass has ever assigned a value to `state`
    pub fn has_state_value(&self, state: &G::State, game: &G) -> bool {
        self.v_values.contains_key(&game.key(state))
    }

    /// Greedy action stored for `state`, if any
    pub fn policy_for(&self, state: &G::State, game: &G) -> Option<G::Action> {
        self.policy.get(&game.key(state)).copied()
    }

    pub fn greedy_eps(&self) -> f64 {
        self.greedy_eps
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Override the learning rate, e.g. when switching to a new opponent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] unless `learning_rate` is
    /// within [0, 1].
    pub fn set_learning_rate(&mut self, learning_rate: f64) -> Result<()> {
        if !(learning_rate.is_finite() && (0.0..=1.0).contains(&learning_rate)) {
            return Err(Error::InvalidConfiguration {
                message: format!("learning_rate must be within [0, 1], got {learning_rate}"),
            });
        }
        self.learning_rate = learning_rate;
        Ok(())
    }

    /// Steps recorded so far in the current episode
    pub fn episode_len(&self) -> usize {
        self.episode.len()
    }

    pub fn episodes_learned(&self) -> usize {
        self.episodes_learned
    }

    /// Number of states with a stored value
    pub fn known_states(&self) -> usize {
        self.v_values.len()
    }

    /// Total number of stored Q-values
    pub fn q_table_size(&self) -> usize {
        self.q_table.size()
    }
}

impl<G: Game> Agent<G> for QLearnerAgent<G> {
    fn observe(&mut self, state: &G::State, score: f64, game: &G) -> Result<Option<G::Action>> {
        self.episode.push_observation(state.clone(), score);
        if game.is_terminal(state) {
            self.learn_from_episode(game)?;
            return Ok(None);
        }
        self.make_action(state, game).map(Some)
    }

    fn make_action(&mut self, state: &G::State, game: &G) -> Result<G::Action> {
        if game.is_terminal(state) {
            return Err(Error::TerminalState {
                state: format!("{state:?}"),
            });
        }
        let actions = game.valid_actions(state);

        let action = if self.rng.random::<f64>() < self.greedy_eps {
            // Explore: random action
            *actions.choose(&mut self.rng).ok_or(Error::NoValidMoves)?
        } else {
            // Exploit: stored policy action
            self.policy_action(game.key(state), &actions)?
        };

        self.episode.push_action(action);
        Ok(action)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn abandon_episode(&mut self) {
        if !self.episode.is_empty() {
            debug!(
                "{}: discarding {} steps of an unfinished episode",
                self.name,
                self.episode.len()
            );
        }
        self.episode.clear();
    }
}
