//! Episode trajectories recorded by the learning agent

use crate::{Error, Result};

/// One entry of a trajectory
#[derive(Debug, Clone, PartialEq)]
pub enum Step<S, A> {
    /// A state handed to `observe`, with the score that came with it
    Observed { state: S, score: f64 },
    /// An action the agent returned
    Acted(A),
}

/// A single learning step, read backward from the end of an episode
///
/// `action` was taken in `state` (seen with `score`); `next_state` is the
/// following observation, the next time the agent was asked to move or the
/// terminal state.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S, A> {
    pub state: S,
    pub score: f64,
    pub action: A,
    pub next_state: S,
    pub next_score: f64,
}

/// Ordered record of observations and actions for the current episode
#[derive(Debug, Clone)]
pub struct Episode<S, A> {
    steps: Vec<Step<S, A>>,
}

impl<S: Clone, A: Copy> Episode<S, A> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn push_observation(&mut self, state: S, score: f64) {
        self.steps.push(Step::Observed { state, score });
    }

    pub fn push_action(&mut self, action: A) {
        self.steps.push(Step::Acted(action));
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step<S, A>] {
        &self.steps
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }

    /// Drain the recorded steps and pair them into backward transitions.
    ///
    /// The episode is empty afterwards, whether or not pairing succeeds.
    /// Returns the final (terminal) state together with the transitions,
    /// last transition first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedTrajectory`] unless the steps alternate
    /// observation, action, observation, ..., observation.
    pub fn drain_backward(&mut self) -> Result<(S, Vec<Transition<S, A>>)> {
        let mut steps = std::mem::take(&mut self.steps);
        steps.reverse();

        let malformed = |reason: String| Error::MalformedTrajectory { reason };

        let (terminal, terminal_score) = match steps.first() {
            Some(Step::Observed { state, score }) => (state.clone(), *score),
            Some(Step::Acted(_)) => {
                return Err(malformed("episode ends with an action".to_string()));
            }
            None => return Err(malformed("episode is empty".to_string())),
        };

        let mut transitions = Vec::with_capacity(steps.len() / 2);
        let (mut next_state, mut next_score) = (terminal.clone(), terminal_score);
        for i in (1..steps.len()).step_by(2) {
            let action = match &steps[i] {
                Step::Acted(action) => *action,
                Step::Observed { .. } => {
                    return Err(malformed(format!(
                        "step {i} from the end is an observation where an action was expected"
                    )));
                }
            };
            let (state, score) = match steps.get(i + 1) {
                Some(Step::Observed { state, score }) => (state.clone(), *score),
                Some(Step::Acted(_)) => {
                    return Err(malformed(format!(
                        "step {} from the end is an action where an observation was expected",
                        i + 1
                    )));
                }
                None => {
                    return Err(malformed(
                        "first action has no observation it was taken from".to_string(),
                    ));
                }
            };

            transitions.push(Transition {
                state: state.clone(),
                score,
                action,
                next_state,
                next_score,
            });
            next_state = state;
            next_score = score;
        }

        Ok((terminal, transitions))
    }
}

impl<S: Clone, A: Copy> Default for Episode<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
