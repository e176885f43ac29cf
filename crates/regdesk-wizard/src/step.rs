//! The wizard's step enumeration.

use std::fmt;

use regdesk_model::PlayerSlot;

/// One position in the linear wizard flow.
///
/// Transitions only move forward or backward by one step; there is no
/// skipping. `Done` is terminal until the wizard is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Intro,
    Team,
    Player(PlayerSlot),
    Done,
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::Intro
    }
}

impl WizardStep {
    /// The step a successful forward transition lands on.
    pub fn next(&self) -> WizardStep {
        match self {
            WizardStep::Intro => WizardStep::Team,
            WizardStep::Team => WizardStep::Player(PlayerSlot::Two),
            WizardStep::Player(PlayerSlot::Two) => WizardStep::Player(PlayerSlot::Three),
            WizardStep::Player(PlayerSlot::Three) => WizardStep::Player(PlayerSlot::Four),
            WizardStep::Player(PlayerSlot::Four) => WizardStep::Player(PlayerSlot::Five),
            WizardStep::Player(PlayerSlot::Five) | WizardStep::Done => WizardStep::Done,
        }
    }

    /// The step a backward transition lands on.
    pub fn back(&self) -> WizardStep {
        match self {
            WizardStep::Intro | WizardStep::Team => WizardStep::Intro,
            WizardStep::Player(PlayerSlot::Two) => WizardStep::Team,
            WizardStep::Player(PlayerSlot::Three) => WizardStep::Player(PlayerSlot::Two),
            WizardStep::Player(PlayerSlot::Four) => WizardStep::Player(PlayerSlot::Three),
            WizardStep::Player(PlayerSlot::Five) => WizardStep::Player(PlayerSlot::Four),
            WizardStep::Done => WizardStep::Done,
        }
    }

    /// True for the last form step, whose successful validation submits
    /// instead of advancing.
    pub fn is_final_form_step(&self) -> bool {
        matches!(self, WizardStep::Player(PlayerSlot::Five))
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardStep::Intro => write!(f, "intro"),
            WizardStep::Team => write!(f, "team"),
            WizardStep::Player(slot) => write!(f, "player-{}", slot.number()),
            WizardStep::Done => write!(f, "done"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_walk_visits_every_step_once() {
        let mut step = WizardStep::Intro;
        let mut seen = vec![step];
        while step != WizardStep::Done {
            step = step.next();
            seen.push(step);
        }
        assert_eq!(seen.len(), 7);
        assert_eq!(seen[1], WizardStep::Team);
        assert_eq!(seen[5], WizardStep::Player(PlayerSlot::Five));
    }

    #[test]
    fn back_is_inverse_of_next_on_form_steps() {
        for step in [
            WizardStep::Team,
            WizardStep::Player(PlayerSlot::Two),
            WizardStep::Player(PlayerSlot::Three),
            WizardStep::Player(PlayerSlot::Four),
        ] {
            assert_eq!(step.next().back(), step);
        }
    }

    #[test]
    fn endpoints_are_absorbing() {
        assert_eq!(WizardStep::Intro.back(), WizardStep::Intro);
        assert_eq!(WizardStep::Done.next(), WizardStep::Done);
    }
}
