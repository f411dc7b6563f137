//! Computer opponents.

use crate::{Gesture, History};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A computer opponent and its throwing habit.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Personality {
    /// Counters the human's favourite of the last 5 rounds.
    #[strum(to_string = "R2D2")]
    R2d2,
    /// Counters the human's favourite of the last 7 rounds.
    Hal,
    /// Counters the human's previous throw.
    Chappie,
    /// Always throws rock.
    Furby,
    /// Throws at random.
    Bot,
}

impl Personality {
    /// Every opponent.
    pub const ALL: [Personality; 5] = [
        Personality::R2d2,
        Personality::Hal,
        Personality::Chappie,
        Personality::Furby,
        Personality::Bot,
    ];

    /// How many past rounds this opponent studies, if any.
    pub fn window(self) -> Option<usize> {
        match self {
            Personality::R2d2 => Some(5),
            Personality::Hal => Some(7),
            Personality::Chappie => Some(1),
            Personality::Furby | Personality::Bot => None,
        }
    }

    /// Picks an opponent uniformly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Chooses this opponent's next throw.
    ///
    /// Bias readers throw at random until there is history, then pick
    /// uniformly among the gestures that beat the human's bias.
    #[instrument(skip(history, rng), fields(rounds = history.len()))]
    pub fn throw<R: Rng + ?Sized>(self, history: &History, rng: &mut R) -> Gesture {
        let gesture = match self {
            Personality::Furby => Gesture::Rock,
            Personality::Bot => random_gesture(rng),
            reader => match reader.window().and_then(|window| history.bias(window)) {
                Some(bias) => *bias
                    .counters()
                    .choose(rng)
                    .unwrap_or(&Gesture::Rock),
                None => random_gesture(rng),
            },
        };

        debug!(%gesture, "Computer throw");
        gesture
    }
}

fn random_gesture<R: Rng + ?Sized>(rng: &mut R) -> Gesture {
    Gesture::ALL[rng.gen_range(0..Gesture::ALL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Round;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_furby_always_throws_rock() {
        let mut rng = StdRng::seed_from_u64(1);
        let history = History::new();
        for _ in 0..20 {
            assert_eq!(Personality::Furby.throw(&history, &mut rng), Gesture::Rock);
        }
    }

    #[test]
    fn test_readers_counter_the_bias() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut history = History::new();
        for _ in 0..3 {
            history.record(Round {
                human: Gesture::Lizard,
                computer: Gesture::Rock,
            });
        }

        for personality in [Personality::R2d2, Personality::Hal, Personality::Chappie] {
            for _ in 0..20 {
                let gesture = personality.throw(&history, &mut rng);
                assert!(gesture.beats(Gesture::Lizard), "{personality} threw {gesture}");
            }
        }
    }

    #[test]
    fn test_chappie_only_remembers_one_round() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut history = History::new();
        for human in [Gesture::Rock, Gesture::Rock, Gesture::Paper] {
            history.record(Round {
                human,
                computer: Gesture::Spock,
            });
        }
        for _ in 0..20 {
            let gesture = Personality::Chappie.throw(&history, &mut rng);
            assert!(gesture.beats(Gesture::Paper));
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Personality::R2d2.to_string(), "R2D2");
        assert_eq!("r2d2".parse::<Personality>(), Ok(Personality::R2d2));
        assert_eq!("furby".parse::<Personality>(), Ok(Personality::Furby));
    }
}
