//! Turn phases.
//!
//! A turn runs Draw → Standby → Main1 → Battle → Main2 → End, then hands
//! the turn to the other player. Main1 skips straight to End on turn 1
//! (the first turn has no combat).
//!
//! Draw, Standby, and End are non-interactive: the engine performs their
//! fixed bookkeeping and the only legal action is advancing past them.
//! Main1, Battle, and Main2 accept player actions.

use serde::{Deserialize, Serialize};

/// Phase of the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Draw,
    Standby,
    Main1,
    Battle,
    Main2,
    End,
}

impl Phase {
    /// Check whether player actions other than `EndPhase` are accepted.
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        matches!(self, Phase::Main1 | Phase::Battle | Phase::Main2)
    }

    /// The phase that follows this one within the same turn.
    ///
    /// `turn` decides the Main1 successor: turn 1 has no Battle phase.
    /// `End` maps to `Draw`; the turn hand-off bookkeeping that accompanies
    /// that transition lives in the turn engine, not here.
    #[must_use]
    pub const fn next(self, turn: u32) -> Phase {
        match self {
            Phase::Draw => Phase::Standby,
            Phase::Standby => Phase::Main1,
            Phase::Main1 => {
                if turn == 1 {
                    Phase::End
                } else {
                    Phase::Battle
                }
            }
            Phase::Battle => Phase::Main2,
            Phase::Main2 => Phase::End,
            Phase::End => Phase::Draw,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Draw => "Draw",
            Phase::Standby => "Standby",
            Phase::Main1 => "Main 1",
            Phase::Battle => "Battle",
            Phase::Main2 => "Main 2",
            Phase::End => "End",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle_after_turn_one() {
        let mut phase = Phase::Draw;
        let expected = [
            Phase::Standby,
            Phase::Main1,
            Phase::Battle,
            Phase::Main2,
            Phase::End,
            Phase::Draw,
        ];

        for want in expected {
            phase = phase.next(2);
            assert_eq!(phase, want);
        }
    }

    #[test]
    fn test_turn_one_skips_battle() {
        assert_eq!(Phase::Main1.next(1), Phase::End);
        assert_eq!(Phase::Main1.next(2), Phase::Battle);
        assert_eq!(Phase::Main1.next(7), Phase::Battle);
    }

    #[test]
    fn test_interactivity() {
        assert!(!Phase::Draw.is_interactive());
        assert!(!Phase::Standby.is_interactive());
        assert!(Phase::Main1.is_interactive());
        assert!(Phase::Battle.is_interactive());
        assert!(Phase::Main2.is_interactive());
        assert!(!Phase::End.is_interactive());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Phase::Main1), "Main 1");
        assert_eq!(format!("{}", Phase::End), "End");
    }
}
