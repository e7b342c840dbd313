use std::f64;
use super::Aggregate;

#[derive(Debug, Clone)]
pub struct Max {
    current: f64,
}

impl Max {
    pub fn new() -> Max {
        Default::default()
    }
}

impl Default for Max {
    fn default() -> Max {
        Max {
            current: f64::NEG_INFINITY,
        }
    }
}

impl Aggregate for Max {
    fn update(&mut self, num: f64) {
        if num > self.current {
            self.current = num;
        }
    }

    fn value(&self) -> f64 {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::{Aggregate, Max};

    #[test]
    fn test_max() {
        let mut max = Max::new();

        max.update(3.0);
        max.update(-2.0);
        max.update(0.5);

        assert_eq!(max.value(), 3.0);
    }

    #[test]
    fn test_empty_max() {
        assert_eq!(Max::new().value().to_string(), "-inf");
    }
}
