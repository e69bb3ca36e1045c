//! Random intents for the two demo players.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sim_component::{Entity, Input};
use sim_system::InputSource;

/// Chance that player one presses each control in a frame.
const P1_RIGHT: f64 = 0.5;
const P1_JUMP: f64 = 0.2;
const P1_AUGMENT: f64 = 0.1;
const P1_ATTACK: f64 = 0.15;

/// Chance that player two presses each control in a frame.
const P2_LEFT: f64 = 0.5;
const P2_AUGMENT: f64 = 0.1;

/// Seeded random input: player one runs right and fights, player two runs
/// left. The same seed always yields the same intent sequence.
#[derive(Debug)]
pub struct RandomInput {
    rng: StdRng,
    player1: Entity,
    player2: Entity,
}

impl RandomInput {
    pub fn new(seed: u64, player1: Entity, player2: Entity) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            player1,
            player2,
        }
    }
}

impl InputSource for RandomInput {
    fn poll(&mut self, _frame_id: u64) -> Vec<(Entity, Input)> {
        let p1 = Input {
            right: self.rng.gen_bool(P1_RIGHT),
            jump: self.rng.gen_bool(P1_JUMP),
            augment: self.rng.gen_bool(P1_AUGMENT),
            attack: self.rng.gen_bool(P1_ATTACK),
            ..Input::default()
        };
        let p2 = Input {
            left: self.rng.gen_bool(P2_LEFT),
            augment: self.rng.gen_bool(P2_AUGMENT),
            ..Input::default()
        };
        vec![(self.player1, p1), (self.player2, p2)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_intents() {
        let mut a = RandomInput::new(7, Entity(0), Entity(1));
        let mut b = RandomInput::new(7, Entity(0), Entity(1));
        for frame in 1..=50 {
            assert_eq!(a.poll(frame), b.poll(frame));
        }
    }

    #[test]
    fn test_players_only_use_their_controls() {
        let mut input = RandomInput::new(42, Entity(3), Entity(5));
        for frame in 1..=200 {
            let intents = input.poll(frame);
            assert_eq!(intents.len(), 2);
            let (e1, p1) = intents[0];
            let (e2, p2) = intents[1];
            assert_eq!((e1, e2), (Entity(3), Entity(5)));
            assert!(!p1.left);
            assert!(!p2.right && !p2.jump && !p2.attack);
        }
    }

    #[test]
    fn test_player_one_runs_right_about_half_the_time() {
        let mut input = RandomInput::new(1, Entity(0), Entity(1));
        let right = (1..=2_000)
            .filter(|&frame| input.poll(frame)[0].1.right)
            .count();
        assert!((800..1_200).contains(&right), "right pressed {right} times");
    }
}
