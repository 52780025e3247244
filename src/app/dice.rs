//! Dice roller panel state

use rand::Rng;
use std::collections::VecDeque;

use crate::constants::MAX_ROLL_LOG;
use crate::models::DiceKind;

/// Roll one die, uniform in `1..=sides`
pub fn roll<R: Rng>(kind: DiceKind, rng: &mut R) -> u32 {
    rng.gen_range(1..=kind.sides())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiceRoll {
    pub kind: DiceKind,
    pub value: u32,
}

/// Recent rolls, most recent first
#[derive(Debug, Default)]
pub struct DiceRoller {
    rolls: VecDeque<DiceRoll>,
}

impl DiceRoller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roll(&mut self, kind: DiceKind) -> u32 {
        self.roll_with(kind, &mut rand::thread_rng())
    }

    pub fn roll_with<R: Rng>(&mut self, kind: DiceKind, rng: &mut R) -> u32 {
        let value = roll(kind, rng);
        if self.rolls.len() >= MAX_ROLL_LOG {
            self.rolls.pop_back();
        }
        self.rolls.push_front(DiceRoll { kind, value });
        value
    }

    pub fn rolls(&self) -> Vec<DiceRoll> {
        self.rolls.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rolls_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for kind in DiceKind::ALL {
            for _ in 0..500 {
                let value = roll(kind, &mut rng);
                assert!((1..=kind.sides()).contains(&value), "{} rolled {}", kind.as_str(), value);
            }
        }
    }

    #[test]
    fn test_log_is_bounded_and_newest_first() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut roller = DiceRoller::new();
        for _ in 0..MAX_ROLL_LOG + 3 {
            roller.roll_with(DiceKind::D4, &mut rng);
        }
        let last = roller.roll_with(DiceKind::D20, &mut rng);

        let rolls = roller.rolls();
        assert_eq!(rolls.len(), MAX_ROLL_LOG);
        assert_eq!(rolls[0], DiceRoll { kind: DiceKind::D20, value: last });
    }
}
