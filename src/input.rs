use csv::{ByteRecord, Position};
use encoding::{DecoderTrap, EncodingRef};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};
use crate::Row;

fn at_line(line: u64) -> Position {
    let mut position = Position::new();
    position.set_line(line);

    position
}

fn decode(data: &ByteRecord, line: u64, encoding: EncodingRef) -> Result<Row> {
    let mut row = Row::with_capacity(data.as_slice().len(), data.len());

    for item in data.iter() {
        match encoding.decode(item, DecoderTrap::Strict) {
            Ok(field) => row.push_field(&field),
            Err(reason) => {
                return Err(Error::Decode {
                    line,
                    reason: reason.into_owned(),
                })
            }
        }
    }

    row.set_position(Some(at_line(line)));

    Ok(row)
}

fn trim_terminator(mut line: &[u8]) -> &[u8] {
    if line.ends_with(b"\n") {
        line = &line[..line.len() - 1];
    }

    if line.ends_with(b"\r") {
        line = &line[..line.len() - 1];
    }

    line
}

/// Rows of a delimited source, decoded with the given encoding.
///
/// Every line is split on the delimiter as is, quotes are ordinary
/// characters. Rows are not required to have the same number of fields and a
/// blank line comes out as a row without fields, the caller decides what a
/// short row means.
pub struct ReaderSource<R> {
    reader: BufReader<R>,
    delimiter: u8,
    encoding: EncodingRef,
    line: u64,
    buffer: Vec<u8>,
    record: ByteRecord,
}

impl<R: Read> ReaderSource<R> {
    pub fn from_reader(
        reader: R,
        delimiter: u8,
        has_header: bool,
        encoding: EncodingRef,
    ) -> ReaderSource<R> {
        ReaderSource {
            reader: BufReader::new(reader),
            delimiter,
            encoding,
            // the header line is read and thrown away before the first row
            line: if has_header { 0 } else { 1 },
            buffer: Vec::new(),
            record: ByteRecord::new(),
        }
    }

    fn read_line(&mut self) -> Result<bool> {
        self.buffer.clear();

        Ok(self.reader.read_until(b'\n', &mut self.buffer)? > 0)
    }

    fn split(&mut self) {
        let delimiter = self.delimiter;

        self.record.clear();

        let line = trim_terminator(&self.buffer);

        if line.is_empty() {
            return;
        }

        for field in line.split(|b| *b == delimiter) {
            self.record.push_field(field);
        }
    }

    fn next_row(&mut self) -> Result<Option<Row>> {
        if self.line == 0 {
            self.line = 1;

            if !self.read_line()? {
                return Ok(None);
            }

            self.line += 1;
        }

        if !self.read_line()? {
            return Ok(None);
        }

        self.split();

        let row = decode(&self.record, self.line, self.encoding)?;

        self.line += 1;

        Ok(Some(row))
    }
}

impl ReaderSource<File> {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        delimiter: u8,
        has_header: bool,
        encoding: EncodingRef,
    ) -> Result<ReaderSource<File>> {
        debug!("opening {:?} as {}", path.as_ref(), encoding.name());

        let file = File::open(path)?;

        Ok(ReaderSource::from_reader(file, delimiter, has_header, encoding))
    }
}

impl<R: Read> Iterator for ReaderSource<R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_row().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::{ReaderSource, Row};
    use crate::error::{Error, Result};
    use encoding::all::{UTF_8, WINDOWS_1252};

    fn rows(data: &str, has_header: bool) -> Vec<Row> {
        ReaderSource::from_reader(data.as_bytes(), b';', has_header, UTF_8)
            .map(|r| r.unwrap())
            .collect()
    }

    fn lines(data: &str, has_header: bool) -> Vec<u64> {
        ReaderSource::from_reader(data.as_bytes(), b';', has_header, UTF_8)
            .map(|r: Result<Row>| r.unwrap().position().unwrap().line())
            .collect()
    }

    #[test]
    fn test_read_rows() {
        assert_eq!(
            rows("a;b\n1;3\n5;2\n", true),
            vec![Row::from(vec!["1", "3"]), Row::from(vec!["5", "2"])]
        );
        assert_eq!(lines("a;b\n1;3\n5;2\n", true), vec![2, 3]);
    }

    #[test]
    fn test_header_is_always_dropped() {
        assert_eq!(rows("1;3\n5;2\n", true), vec![Row::from(vec!["5", "2"])]);
    }

    #[test]
    fn test_blank_header_is_dropped() {
        assert_eq!(
            rows("\nAl;Eng\nBo;Ops\n", true),
            vec![Row::from(vec!["Al", "Eng"]), Row::from(vec!["Bo", "Ops"])]
        );
        assert_eq!(lines("\nAl;Eng\nBo;Ops\n", true), vec![2, 3]);
    }

    #[test]
    fn test_blank_lines_are_empty_rows() {
        let read = rows("a;b\n1;3\n\n\n5;2\n", true);

        assert_eq!(
            read,
            vec![
                Row::from(vec!["1", "3"]),
                Row::new(),
                Row::new(),
                Row::from(vec!["5", "2"]),
            ]
        );
        assert_eq!(lines("a;b\n1;3\n\n\n5;2\n", true), vec![2, 3, 4, 5]);
        assert_eq!(lines("1;3\n\n5;2\n", false), vec![1, 2, 3]);
    }

    #[test]
    fn test_quotes_are_plain_characters() {
        assert_eq!(
            rows("\"Big\" Eng;x\n\"Al;Eng\nBo;Ops\n", false),
            vec![
                Row::from(vec!["\"Big\" Eng", "x"]),
                Row::from(vec!["\"Al", "Eng"]),
                Row::from(vec!["Bo", "Ops"]),
            ]
        );
    }

    #[test]
    fn test_rows_of_different_size() {
        assert_eq!(
            rows("1;3;4\n5\n", false),
            vec![Row::from(vec!["1", "3", "4"]), Row::from(vec!["5"])]
        );
    }

    #[test]
    fn different_encoding() {
        let rows: Vec<Row> =
            ReaderSource::from_path("test/assets/windows1252.csv", b';', true, WINDOWS_1252)
                .unwrap()
                .map(|r| r.unwrap())
                .collect();

        assert_eq!(
            rows,
            vec![Row::from(vec!["José", "Ingeniería", "Backend", "Dev", "4", "100"])]
        );
    }

    #[test]
    fn wrong_encoding_is_an_error() {
        let mut source =
            ReaderSource::from_path("test/assets/windows1252.csv", b';', true, UTF_8).unwrap();

        match source.next() {
            Some(Err(Error::Decode { line, .. })) => assert_eq!(line, 2),
            _ => panic!("expected a decode error"),
        }
    }

    #[test]
    fn missing_file() {
        match ReaderSource::from_path("test/assets/nope.csv", b';', true, UTF_8) {
            Err(Error::Io(_)) => {}
            _ => panic!("expected an IO error"),
        }
    }
}
