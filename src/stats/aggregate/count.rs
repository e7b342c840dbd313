use super::Aggregate;

#[derive(Default, Debug, Clone)]
pub struct Count {
    total: u64,
}

impl Count {
    pub fn new() -> Count {
        Default::default()
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

impl Aggregate for Count {
    fn update(&mut self, _num: f64) {
        self.total += 1;
    }

    fn value(&self) -> f64 {
        self.total as f64
    }
}
