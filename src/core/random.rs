use crate::domain::model::RandomNumber;
use crate::domain::ports::RandomSource;

/// Uniform draw over `[RandomNumber::MIN, RandomNumber::MAX]` from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn draw(&self) -> RandomNumber {
        RandomNumber::draw(&mut rand::thread_rng())
    }
}

/// Always yields the same value.
#[derive(Debug, Clone, Copy)]
pub struct FixedSource(pub RandomNumber);

impl RandomSource for FixedSource {
    fn draw(&self) -> RandomNumber {
        self.0
    }
}
