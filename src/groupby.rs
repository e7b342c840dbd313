//! Groups the values of one column by the values of another one.
//!
//! Both the groups and the values inside each group keep the order in which
//! they were first seen in the source. Nothing is sorted.
use encoding::all::UTF_8;
use encoding::EncodingRef;
use indexmap::{map, IndexMap};
use log::{error, info};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::input::ReaderSource;
use crate::Row;

/// The values collected for a single key while the source is being read.
#[derive(Debug, Default)]
struct Bucket {
    values: Vec<String>,
    seen: HashSet<String>,
}

impl Bucket {
    fn push(&mut self, value: &str, keep_duplicates: bool) {
        if keep_duplicates {
            self.values.push(value.to_string());
        } else if self.seen.insert(value.to_string()) {
            self.values.push(value.to_string());
        }
    }
}

/// The result of an aggregation: every key with its list of values, in
/// first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Groups {
    groups: IndexMap<String, Vec<String>>,
}

impl Groups {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.groups.get(key).map(|v| v.as_slice())
    }

    pub fn keys(&self) -> map::Keys<'_, String, Vec<String>> {
        self.groups.keys()
    }

    pub fn iter(&self) -> map::Iter<'_, String, Vec<String>> {
        self.groups.iter()
    }

    /// Number of values over all groups
    pub fn total(&self) -> usize {
        self.groups.values().map(|v| v.len()).sum()
    }
}

impl<'a> IntoIterator for &'a Groups {
    type Item = (&'a String, &'a Vec<String>);

    type IntoIter = map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl IntoIterator for Groups {
    type Item = (String, Vec<String>);

    type IntoIter = map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Builds a [Groups] one row at a time.
pub struct GroupBy {
    groupby_index: usize,
    agg_index: usize,
    keep_duplicates: bool,
    buckets: IndexMap<String, Bucket>,
}

impl GroupBy {
    pub fn new(groupby_index: usize, agg_index: usize, keep_duplicates: bool) -> GroupBy {
        GroupBy {
            groupby_index,
            agg_index,
            keep_duplicates,
            buckets: IndexMap::new(),
        }
    }

    /// Minimum number of fields a row must have
    pub fn required_fields(&self) -> usize {
        self.groupby_index.max(self.agg_index) + 1
    }

    pub fn update(&mut self, row: &Row) -> Result<()> {
        let (key, value) = match (row.get(self.groupby_index), row.get(self.agg_index)) {
            (Some(key), Some(value)) => (key, value),
            _ => {
                return Err(Error::MalformedRow {
                    line: row.position().map(|p| p.line()).unwrap_or(0),
                    required: self.required_fields(),
                    found: row.len(),
                })
            }
        };

        let keep_duplicates = self.keep_duplicates;

        self.buckets
            .entry(key.to_string())
            .or_insert_with(Bucket::default)
            .push(value, keep_duplicates);

        Ok(())
    }

    pub fn finish(self) -> Groups {
        Groups {
            groups: self
                .buckets
                .into_iter()
                .map(|(key, bucket)| (key, bucket.values))
                .collect(),
        }
    }
}

/// Parameters of a group-by pass over a delimited source.
///
/// Defaults to `;` as delimiter, a header line, keeping duplicates and UTF-8.
#[derive(Clone, Copy)]
pub struct Aggregation {
    delimiter: u8,
    has_header: bool,
    groupby_index: usize,
    agg_index: usize,
    keep_duplicates: bool,
    encoding: EncodingRef,
}

impl Aggregation {
    pub fn new(groupby_index: usize, agg_index: usize) -> Aggregation {
        Aggregation {
            delimiter: b';',
            has_header: true,
            groupby_index,
            agg_index,
            keep_duplicates: true,
            encoding: UTF_8,
        }
    }

    pub fn delimiter(mut self, delimiter: u8) -> Aggregation {
        self.delimiter = delimiter;
        self
    }

    pub fn has_header(mut self, has_header: bool) -> Aggregation {
        self.has_header = has_header;
        self
    }

    pub fn keep_duplicates(mut self, keep_duplicates: bool) -> Aggregation {
        self.keep_duplicates = keep_duplicates;
        self
    }

    pub fn encoding(mut self, encoding: EncodingRef) -> Aggregation {
        self.encoding = encoding;
        self
    }

    fn consume<I>(&self, rows: I) -> Result<Groups>
    where
        I: Iterator<Item = Result<Row>>,
    {
        let mut group_by = GroupBy::new(self.groupby_index, self.agg_index, self.keep_duplicates);

        for row in rows {
            group_by.update(&row?)?;
        }

        let groups = group_by.finish();

        info!(
            "grouped {} values in {} groups by column {}",
            groups.total(),
            groups.len(),
            self.groupby_index
        );

        Ok(groups)
    }

    /// Aggregates everything that can be read from `reader`. The first error
    /// aborts the whole pass.
    pub fn read<R: Read>(&self, reader: R) -> Result<Groups> {
        self.consume(ReaderSource::from_reader(
            reader,
            self.delimiter,
            self.has_header,
            self.encoding,
        ))
    }

    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<Groups> {
        self.consume(ReaderSource::from_path(
            path,
            self.delimiter,
            self.has_header,
            self.encoding,
        )?)
    }

    /// Like [read_path](Aggregation::read_path) but a failure is logged and
    /// an empty result is returned instead.
    pub fn read_path_or_empty<P: AsRef<Path>>(&self, path: P) -> Groups {
        match self.read_path(&path) {
            Ok(groups) => groups,
            Err(e) => {
                error!(
                    "An error occurred while processing {:?}: {}",
                    path.as_ref(),
                    e
                );

                Groups::default()
            }
        }
    }
}
