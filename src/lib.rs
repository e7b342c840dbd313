//! Groups the rows of a delimited file by one column and reports on the
//! values of another: the teams of every department and their salary stats.
pub mod config;
mod error;
pub mod export;
pub mod groupby;
pub mod hierarchy;
mod input;
pub mod menu;
pub mod print;
pub mod stats;

pub use config::{Columns, Config};
pub use error::{Error, Result};
pub use groupby::{Aggregation, GroupBy, Groups};
pub use hierarchy::Hierarchy;
pub use input::ReaderSource;
pub use menu::{Action, Menu};
pub use stats::{NumericPolicy, SalaryStats, StatsReport};

type Row = csv::StringRecord;
