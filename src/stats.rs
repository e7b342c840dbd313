//! Salary statistics per department.
use indexmap::{map, IndexMap};
use log::warn;

use crate::error::{Error, Result};
use crate::groupby::Groups;

pub mod aggregate;

use aggregate::{Aggregate, Avg, Count, Max, Min};

/// What to do with a value that is not a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericPolicy {
    /// Abort the whole computation with [Error::NonNumericValue]
    Fail,
    /// Log a warning and leave the value out
    Skip,
}

impl Default for NumericPolicy {
    fn default() -> NumericPolicy {
        NumericPolicy::Fail
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SalaryStats {
    pub count: u64,
    pub max: f64,
    pub min: f64,
    pub avg: f64,
}

impl SalaryStats {
    /// Computes the stats of `values`, or `None` if no value could be used.
    pub fn from_values<S: AsRef<str>>(
        key: &str,
        values: &[S],
        policy: NumericPolicy,
    ) -> Result<Option<SalaryStats>> {
        let mut count = Count::new();
        let mut max = Max::new();
        let mut min = Min::new();
        let mut avg = Avg::new();

        for value in values {
            let value = value.as_ref();

            let num = match value.trim().parse::<f64>() {
                Ok(num) => num,
                Err(_) => match policy {
                    NumericPolicy::Fail => {
                        return Err(Error::NonNumericValue {
                            key: key.to_string(),
                            value: value.to_string(),
                        })
                    }
                    NumericPolicy::Skip => {
                        warn!("skipping non numeric value {:?} in group {:?}", value, key);
                        continue;
                    }
                },
            };

            count.update(num);
            max.update(num);
            min.update(num);
            avg.update(num);
        }

        if count.total() == 0 {
            return Ok(None);
        }

        Ok(Some(SalaryStats {
            count: count.total(),
            max: max.value(),
            min: min.value(),
            avg: avg.value(),
        }))
    }
}

/// Stats of every department in the order they were first seen.
#[derive(Debug, Clone, Default)]
pub struct StatsReport {
    departments: IndexMap<String, SalaryStats>,
}

impl StatsReport {
    pub fn from_groups(groups: &Groups, policy: NumericPolicy) -> Result<StatsReport> {
        let mut departments = IndexMap::with_capacity(groups.len());

        for (key, values) in groups {
            match SalaryStats::from_values(key, values, policy)? {
                Some(stats) => {
                    departments.insert(key.clone(), stats);
                }
                None => warn!("group {:?} has no numeric values, leaving it out", key),
            }
        }

        Ok(StatsReport { departments })
    }

    pub fn len(&self) -> usize {
        self.departments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    pub fn get(&self, department: &str) -> Option<&SalaryStats> {
        self.departments.get(department)
    }

    pub fn iter(&self) -> map::Iter<'_, String, SalaryStats> {
        self.departments.iter()
    }
}

impl<'a> IntoIterator for &'a StatsReport {
    type Item = (&'a String, &'a SalaryStats);

    type IntoIter = map::Iter<'a, String, SalaryStats>;

    fn into_iter(self) -> Self::IntoIter {
        self.departments.iter()
    }
}
