//! Streaming CSV field counting.
//!
//! A single pass over the input: records are read into one reused
//! `ByteRecord` and only their field counts are accumulated. No record
//! outlives its loop iteration.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};

use crate::error::{Error, Result};

const BUF_SIZE: usize = 64 * 1024; // 64 KB

/// Counts the total number of fields across all records read from `rdr`.
///
/// Header rows are counted like any other record, and records may have
/// varying field counts. End of input terminates the count normally; any
/// parser or mid-stream I/O error is returned as [`Error::Parse`].
pub fn count_fields<R: io::Read>(rdr: R) -> Result<u64> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(rdr);

    let mut record = ByteRecord::new();
    let mut total: u64 = 0;

    while reader.read_byte_record(&mut record)? {
        total += record.len() as u64;
    }

    Ok(total)
}

/// Opens `path` for reading and counts its fields via [`count_fields`].
///
/// The handle is buffered and released on every exit path.
pub fn count_file(path: &Path) -> Result<u64> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    count_fields(BufReader::with_capacity(BUF_SIZE, file))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(data: &str) -> u64 {
        count_fields(data.as_bytes()).unwrap()
    }

    #[test]
    fn empty_input_counts_zero() {
        assert_eq!(count(""), 0);
    }

    #[test]
    fn single_record_without_trailing_newline() {
        assert_eq!(count("a,b,c"), 3);
    }

    #[test]
    fn trailing_newline_adds_nothing() {
        assert_eq!(count("a,b,c\n"), 3);
    }

    #[test]
    fn variable_width_records_are_summed() {
        assert_eq!(count("a,b,c\nd,e,f\ng,h,i,j,k\n"), 11);
    }

    #[test]
    fn header_row_is_counted() {
        assert_eq!(count("name,age\nalice,30\n"), 4);
    }

    #[test]
    fn quoted_comma_stays_one_field() {
        assert_eq!(count("a,\"b,c\",d\n"), 3);
    }

    #[test]
    fn doubled_quotes_escape_inside_quoted_field() {
        assert_eq!(count("\"he said \"\"hi\"\"\",x\n"), 2);
    }

    #[test]
    fn crlf_separators_count_the_same() {
        assert_eq!(count("a,b\r\nc,d\r\n"), 4);
    }

    #[test]
    fn blank_interior_line_yields_no_record() {
        assert_eq!(count("a,b\n\nc,d\n"), 4);
    }

    struct FailingReader;

    impl io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "read failed"))
        }
    }

    #[test]
    fn mid_stream_io_failure_is_a_parse_error() {
        match count_fields(FailingReader) {
            Err(Error::Parse(_)) => {}
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_an_open_error() {
        match count_file(Path::new("/nonexistent/fields.csv")) {
            Err(Error::Open { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/fields.csv"));
            }
            other => panic!("expected open error, got {:?}", other),
        }
    }
}
