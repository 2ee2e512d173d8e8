use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Source of the left/right tie-break used when a liquid cell cannot fall.
///
/// `true` means "try left", `false` means "try right". Every call consumes
/// exactly one unit of randomness.
pub trait ChoiceSource: fmt::Debug {
    fn choice(&mut self) -> bool;

    /// Seed the stream was created from, if it can be replayed.
    fn seed(&self) -> Option<u64> {
        None
    }
}

impl<C: ChoiceSource + ?Sized> ChoiceSource for Box<C> {
    fn choice(&mut self) -> bool {
        (**self).choice()
    }

    fn seed(&self) -> Option<u64> {
        (**self).seed()
    }
}

/// Fair coin flip backed by a seeded ChaCha8 stream.
///
/// Given the same seed, the sequence of choices is identical on every
/// platform, so a whole simulation run can be replayed from its seed.
#[derive(Debug, Clone)]
pub struct RandomChoice {
    seed: u64,
    rng: ChaCha8Rng,
}

impl RandomChoice {
    /// Seed from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        Self::with_seed(rand::random())
    }

    /// Deterministic stream for replay and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl ChoiceSource for RandomChoice {
    fn choice(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn seed(&self) -> Option<u64> {
        Some(self.seed)
    }
}

/// Shared read handle on how many choices a [`ScriptedChoice`] has drawn.
///
/// Stays readable after the source has been moved into a `World`.
#[derive(Debug, Clone, Default)]
pub struct DrawCounter(Rc<Cell<usize>>);

impl DrawCounter {
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

/// Replays a fixed, cyclic sequence of choices and counts how many were drawn.
///
/// Clones share the same draw counter.
#[derive(Debug, Clone)]
pub struct ScriptedChoice {
    script: Vec<bool>,
    draws: DrawCounter,
}

impl ScriptedChoice {
    /// Create from a script that is replayed cyclically.
    ///
    /// # Panics
    ///
    /// Panics if `script` is empty.
    pub fn new(script: Vec<bool>) -> Self {
        assert!(!script.is_empty(), "choice script must not be empty");
        Self {
            script,
            draws: DrawCounter::default(),
        }
    }

    pub fn always_left() -> Self {
        Self::new(vec![true])
    }

    pub fn always_right() -> Self {
        Self::new(vec![false])
    }

    /// Number of choices drawn so far.
    pub fn draws(&self) -> usize {
        self.draws.get()
    }

    /// Handle that keeps reporting draws after the source is handed off.
    pub fn draw_counter(&self) -> DrawCounter {
        self.draws.clone()
    }
}

impl ChoiceSource for ScriptedChoice {
    fn choice(&mut self) -> bool {
        let drawn = self.draws.get();
        self.draws.0.set(drawn + 1);
        self.script[drawn % self.script.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomChoice::with_seed(42);
        let mut b = RandomChoice::with_seed(42);
        let seq_a: Vec<bool> = (0..256).map(|_| a.choice()).collect();
        let seq_b: Vec<bool> = (0..256).map(|_| b.choice()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = RandomChoice::with_seed(1);
        let mut b = RandomChoice::with_seed(2);
        let seq_a: Vec<bool> = (0..256).map(|_| a.choice()).collect();
        let seq_b: Vec<bool> = (0..256).map(|_| b.choice()).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn roughly_fair() {
        let mut c = RandomChoice::with_seed(7);
        let lefts = (0..10_000).filter(|_| c.choice()).count();
        assert!((4_500..=5_500).contains(&lefts), "lefts = {lefts}");
    }

    #[test]
    fn seed_is_reported() {
        let c = RandomChoice::with_seed(99);
        assert_eq!(c.seed(), 99);
        assert_eq!(ChoiceSource::seed(&c), Some(99));
        assert_eq!(ScriptedChoice::always_left().seed(), None);
    }

    #[test]
    fn script_cycles_and_counts() {
        let mut s = ScriptedChoice::new(vec![true, false, false]);
        let seq: Vec<bool> = (0..6).map(|_| s.choice()).collect();
        assert_eq!(seq, vec![true, false, false, true, false, false]);
        assert_eq!(s.draws(), 6);
    }

    #[test]
    fn counter_survives_boxing() {
        let s = ScriptedChoice::new(vec![false, true]);
        let counter = s.draw_counter();
        let mut boxed: Box<dyn ChoiceSource> = Box::new(s);
        assert!(!boxed.choice());
        assert!(boxed.choice());
        assert_eq!(counter.get(), 2);
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn empty_script_panics() {
        ScriptedChoice::new(Vec::new());
    }

    #[test]
    fn boxed_source_delegates() {
        let mut boxed: Box<dyn ChoiceSource> = Box::new(RandomChoice::with_seed(5));
        let mut plain = RandomChoice::with_seed(5);
        assert_eq!(boxed.seed(), Some(5));
        for _ in 0..32 {
            assert_eq!(boxed.choice(), plain.choice());
        }
    }
}
