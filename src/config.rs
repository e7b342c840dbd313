use encoding::all::UTF_8;
use encoding::label::encoding_from_whatwg_label;
use encoding::{EncoderTrap, EncodingRef};
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::groupby::Aggregation;
use crate::stats::NumericPolicy;

pub const DEFAULT_INPUT: &str = "data/Corp_Summary.csv";
pub const DEFAULT_OUTPUT: &str = "data/out_dept_sal_stats.csv";

/// Positions of the columns the reports are built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Columns {
    pub department: usize,
    pub team: usize,
    pub salary: usize,
}

impl Default for Columns {
    fn default() -> Columns {
        Columns {
            department: 1,
            team: 2,
            salary: 5,
        }
    }
}

/// Where the data comes from, where the stats go and how to read them.
#[derive(Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub delimiter: u8,
    pub encoding: EncodingRef,
    pub has_header: bool,
    pub columns: Columns,
    pub numeric_policy: NumericPolicy,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            delimiter: b';',
            encoding: UTF_8,
            has_header: true,
            columns: Columns::default(),
            numeric_policy: NumericPolicy::default(),
        }
    }
}

impl Config {
    fn aggregation(&self, groupby_index: usize, agg_index: usize) -> Aggregation {
        Aggregation::new(groupby_index, agg_index)
            .delimiter(self.delimiter)
            .has_header(self.has_header)
            .encoding(self.encoding)
    }

    /// Departments and their distinct teams
    pub fn hierarchy_aggregation(&self) -> Aggregation {
        self.aggregation(self.columns.department, self.columns.team)
            .keep_duplicates(false)
    }

    /// Departments and every salary in them
    pub fn salary_aggregation(&self) -> Aggregation {
        self.aggregation(self.columns.department, self.columns.salary)
            .keep_duplicates(true)
    }
}

/// Checks that `delimiter` is exactly one ASCII character.
pub fn parse_delimiter(delimiter: &str) -> Result<u8> {
    let mut chars = delimiter.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(Error::InvalidDelimiter(delimiter.to_string())),
    }
}

// Lines are split into fields before they are decoded
const ASCII_SAMPLE: &str = "\t\n\r ;,|:0123456789AZaz";

fn is_ascii_compatible(encoding: EncodingRef) -> bool {
    match encoding.encode(ASCII_SAMPLE, EncoderTrap::Strict) {
        Ok(bytes) => bytes == ASCII_SAMPLE.as_bytes(),
        Err(_) => false,
    }
}

/// Looks up an encoding by its WHATWG label. Only encodings that write ASCII
/// as plain ASCII bytes are accepted.
pub fn parse_encoding(label: &str) -> Result<EncodingRef> {
    match encoding_from_whatwg_label(label) {
        Some(encoding) if is_ascii_compatible(encoding) => Ok(encoding),
        _ => Err(Error::UnknownEncoding(label.to_string())),
    }
}
