use std::collections::BTreeSet;

use super::configurator::{Challenge, Industry};
use super::roi::{GoalKind, RoiInputs};

/// All visitor-held selection state, owned by a single `Signal` in the app
/// root. The original site tracked this in page-global variables; here every
/// section reads and mutates the one shared store through context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteState {
    pub industry: Option<Industry>,
    pub challenges: BTreeSet<Challenge>,
    pub roi: RoiInputs,
}

impl SiteState {
    pub fn select_industry(&mut self, industry: Industry) {
        self.industry = Some(industry);
    }

    pub fn toggle_challenge(&mut self, challenge: Challenge) {
        if !self.challenges.remove(&challenge) {
            self.challenges.insert(challenge);
        }
    }

    pub fn toggle_goal(&mut self, goal: GoalKind) {
        if !self.roi.goals.remove(&goal) {
            self.roi.goals.insert(goal);
        }
    }

    /// The strategy call-to-action needs an industry and at least one
    /// challenge before it unlocks.
    pub fn strategy_ready(&self) -> bool {
        self.industry.is_some() && !self.challenges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_the_selection() {
        let mut state = SiteState::default();
        state.toggle_challenge(Challenge::Analytics);
        assert!(state.challenges.contains(&Challenge::Analytics));
        state.toggle_challenge(Challenge::Analytics);
        assert!(state.challenges.is_empty());

        state.toggle_goal(GoalKind::Prediction);
        assert!(state.roi.goals.contains(&GoalKind::Prediction));
        state.toggle_goal(GoalKind::Prediction);
        assert!(state.roi.goals.is_empty());
    }

    #[test]
    fn strategy_needs_industry_and_a_challenge() {
        let mut state = SiteState::default();
        assert!(!state.strategy_ready());

        state.select_industry(Industry::Manufacturing);
        assert!(!state.strategy_ready());

        state.toggle_challenge(Challenge::Automation);
        assert!(state.strategy_ready());

        state.toggle_challenge(Challenge::Automation);
        assert!(!state.strategy_ready());
    }
}
