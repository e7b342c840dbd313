use std::fmt::Debug;

mod avg;
mod count;
mod max;
mod min;

pub use avg::Avg;
pub use count::Count;
pub use max::Max;
pub use min::Min;

/// Accumulates numbers and reports a single value out of them.
pub trait Aggregate: Debug {
    fn update(&mut self, num: f64);

    fn value(&self) -> f64;
}
