use std::f64;
use super::Aggregate;

#[derive(Debug, Clone)]
pub struct Min {
    current: f64,
}

impl Min {
    pub fn new() -> Min {
        Default::default()
    }
}

impl Default for Min {
    fn default() -> Min {
        Min {
            current: f64::INFINITY,
        }
    }
}

impl Aggregate for Min {
    fn update(&mut self, num: f64) {
        if num < self.current {
            self.current = num;
        }
    }

    fn value(&self) -> f64 {
        self.current
    }
}
