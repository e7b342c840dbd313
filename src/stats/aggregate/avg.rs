use super::Aggregate;

#[derive(Default, Debug, Clone)]
pub struct Avg {
    sum: f64,
    count: u64,
}

impl Avg {
    pub fn new() -> Avg {
        Default::default()
    }
}

impl Aggregate for Avg {
    fn update(&mut self, num: f64) {
        self.sum += num;
        self.count += 1;
    }

    fn value(&self) -> f64 {
        self.sum / self.count as f64
    }
}
