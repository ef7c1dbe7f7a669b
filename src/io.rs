//! Text-format matrix I/O and CLI argument parsing.
//!
//! The on-disk format is a header line `rows columns`, then one line per
//! row of whitespace-separated integers:
//!
//! ```text
//! 2 3
//! 1 2 3
//! 4 5 6
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Write};

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Reads a matrix from the text file at `path`.
///
/// Fails with [`Error::Io`] when the file cannot be opened or read, with
/// [`Error::Parse`] (carrying the 1-based line number) when the content
/// does not match the format, and with [`Error::Allocation`] when the
/// header declares a zero dimension.
pub fn read_matrix(path: &str) -> Result<Matrix> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_string(),
        source,
    })?;
    read_matrix_from(BufReader::new(file), path)
}

/// Reads a matrix in the text format from any buffered reader.
///
/// `path` only labels error messages; tests feed in-memory readers.
/// Content after the final row is ignored.
pub fn read_matrix_from<R: BufRead>(reader: R, path: &str) -> Result<Matrix> {
    let mut lines = reader.lines();

    let header = read_line(&mut lines, path, 1)?;
    let (rows, columns) = parse_header(&header, path)?;

    let mut matrix = Matrix::new(rows, columns)?;
    for row in 0..rows {
        let line_no = row + 2;
        let line = read_line(&mut lines, path, line_no)?;
        parse_row(&line, path, line_no, row, &mut matrix)?;
    }
    Ok(matrix)
}

/// Writes `matrix` in the text format: the header line, then one line per
/// row with values separated by a single space.
pub fn write_matrix<W: Write>(writer: &mut W, matrix: &Matrix) -> Result<()> {
    writeln!(writer, "{} {}", matrix.rows(), matrix.columns())?;
    for row in 0..matrix.rows() {
        let mut separator = "";
        for value in matrix.row(row) {
            write!(writer, "{separator}{value}")?;
            separator = " ";
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Parses the `number-of-threads` CLI argument.
///
/// Zero, negative, and non-numeric input fail with
/// [`Error::InvalidArgument`].
pub fn parse_worker_count(argument: &str) -> Result<usize> {
    match argument.trim().parse::<usize>() {
        Ok(count) if count >= 1 => Ok(count),
        _ => Err(Error::InvalidArgument(format!(
            "number-of-threads should be a positive integer, got {argument:?}"
        ))),
    }
}

/// Pulls the next line, reporting EOF as a parse error at the line the
/// caller expected to find.
fn read_line<R: BufRead>(lines: &mut Lines<R>, path: &str, line_no: usize) -> Result<String> {
    match lines.next() {
        Some(Ok(line)) => Ok(line),
        Some(Err(source)) => Err(Error::Io {
            path: path.to_string(),
            source,
        }),
        None => Err(Error::Parse {
            path: path.to_string(),
            line: line_no,
            reason: "unexpected end of file".to_string(),
        }),
    }
}

fn parse_header(line: &str, path: &str) -> Result<(usize, usize)> {
    let mut fields = line.split_whitespace();
    let (Some(rows), Some(columns), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(Error::Parse {
            path: path.to_string(),
            line: 1,
            reason: "header must be `rows columns`".to_string(),
        });
    };
    let rows = rows.parse().map_err(|_| dimension_error(path, rows))?;
    let columns = columns
        .parse()
        .map_err(|_| dimension_error(path, columns))?;
    Ok((rows, columns))
}

fn dimension_error(path: &str, token: &str) -> Error {
    Error::Parse {
        path: path.to_string(),
        line: 1,
        reason: format!("invalid dimension {token:?}"),
    }
}

fn parse_row(
    line: &str,
    path: &str,
    line_no: usize,
    row: usize,
    matrix: &mut Matrix,
) -> Result<()> {
    let columns = matrix.columns();
    let mut values = line.split_whitespace();
    for column in 0..columns {
        let Some(token) = values.next() else {
            return Err(Error::Parse {
                path: path.to_string(),
                line: line_no,
                reason: format!("expected {columns} values, found {column}"),
            });
        };
        let value: i32 = token.parse().map_err(|_| Error::Parse {
            path: path.to_string(),
            line: line_no,
            reason: format!("invalid matrix value {token:?}"),
        })?;
        matrix.set(row, column, value)?;
    }
    if values.next().is_some() {
        return Err(Error::Parse {
            path: path.to_string(),
            line: line_no,
            reason: format!("row has more than {columns} values"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_str(text: &str) -> Result<Matrix> {
        read_matrix_from(text.as_bytes(), "test-input")
    }

    #[test]
    fn reads_a_well_formed_matrix() {
        let matrix = read_str("2 3\n1 2 3\n-4 5 -6\n").unwrap();
        assert_eq!(matrix.rows(), 2);
        assert_eq!(matrix.columns(), 3);
        assert_eq!(matrix.as_slice(), &[1, 2, 3, -4, 5, -6]);
    }

    #[test]
    fn tolerates_extra_whitespace_and_trailing_content() {
        let matrix = read_str("2 2\n  1\t2 \n3 4\nleftover garbage\n").unwrap();
        assert_eq!(matrix.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn rejects_a_malformed_header() {
        assert!(matches!(
            read_str("2\n1 2\n"),
            Err(Error::Parse { line: 1, .. })
        ));
        assert!(matches!(
            read_str("2 x\n1 2\n"),
            Err(Error::Parse { line: 1, .. })
        ));
        assert!(matches!(
            read_str("2 2 9\n1 2\n3 4\n"),
            Err(Error::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn rejects_zero_dimensions_through_the_container() {
        assert!(matches!(
            read_str("0 4\n"),
            Err(Error::Allocation { rows: 0, columns: 4 })
        ));
    }

    #[test]
    fn rejects_a_short_row_with_its_line_number() {
        let error = read_str("2 3\n1 2 3\n4 5\n").unwrap_err();
        match error {
            Error::Parse { line, reason, .. } => {
                assert_eq!(line, 3);
                assert_eq!(reason, "expected 3 values, found 2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_a_long_row() {
        assert!(matches!(
            read_str("1 2\n1 2 3\n"),
            Err(Error::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn rejects_a_non_numeric_value() {
        let error = read_str("1 2\n1 x\n").unwrap_err();
        match error {
            Error::Parse { line, reason, .. } => {
                assert_eq!(line, 2);
                assert_eq!(reason, "invalid matrix value \"x\"");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_a_truncated_file() {
        let error = read_str("3 2\n1 2\n3 4\n").unwrap_err();
        match error {
            Error::Parse { line, reason, .. } => {
                assert_eq!(line, 4);
                assert_eq!(reason, "unexpected end of file");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn read_matrix_reports_unopenable_paths() {
        let error = read_matrix("definitely/not/a/real/file.txt").unwrap_err();
        assert!(matches!(error, Error::Io { .. }));
    }

    #[test]
    fn writes_the_documented_rendering() {
        let matrix = Matrix::from_vec(2, 2, vec![19, 22, 43, 50]).unwrap();
        let mut rendered = Vec::new();
        write_matrix(&mut rendered, &matrix).unwrap();
        assert_eq!(rendered, b"2 2\n19 22\n43 50\n");
    }

    #[test]
    fn written_output_reads_back_equal() {
        let matrix = Matrix::from_vec(3, 2, vec![1, -2, 30, -40, 500, -600]).unwrap();
        let mut rendered = Vec::new();
        write_matrix(&mut rendered, &matrix).unwrap();

        let reread = read_matrix_from(rendered.as_slice(), "round-trip").unwrap();
        assert_eq!(reread, matrix);
    }

    #[test]
    fn worker_count_must_be_a_positive_integer() {
        assert_eq!(parse_worker_count("4").unwrap(), 4);
        assert_eq!(parse_worker_count(" 12 ").unwrap(), 12);

        for bad in ["0", "-3", "2.5", "abc", ""] {
            assert!(
                matches!(parse_worker_count(bad), Err(Error::InvalidArgument(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
