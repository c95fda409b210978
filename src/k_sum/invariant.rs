use super::{widened_sum, Quad, Triple};

/// Invariant trait for k-sum result checks
pub trait Invariant<T> {
    fn check(&self, value: &T) -> bool;
}

/// Tuple sums exactly to `target` in the widened accumulator
pub struct SumsTo {
    pub target: i64,
}

impl Invariant<Triple> for SumsTo {
    fn check(&self, value: &Triple) -> bool {
        widened_sum(value) == self.target
    }
}

impl Invariant<Quad> for SumsTo {
    fn check(&self, value: &Quad) -> bool {
        widened_sum(value) == self.target
    }
}

/// Tuple elements appear in non-decreasing order
pub struct NonDecreasing;

impl Invariant<Triple> for NonDecreasing {
    fn check(&self, value: &Triple) -> bool {
        value.windows(2).all(|w| w[0] <= w[1])
    }
}

impl Invariant<Quad> for NonDecreasing {
    fn check(&self, value: &Quad) -> bool {
        value.windows(2).all(|w| w[0] <= w[1])
    }
}
