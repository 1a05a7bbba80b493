// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::fs::{read_to_string, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Parses ordering text, one integer per line.
///
/// Leading and trailing whitespace of the whole text is ignored.
pub fn parse_ordering(text: &str) -> Result<Vec<usize>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.lines()
        .enumerate()
        .map(|(i, l)| {
            l.trim().parse().map_err(|e| Error::Ordering {
                line: i + 1,
                reason: format!("{e} ({l:?})"),
            })
        })
        .collect()
}

/// Reads an ordering file. See [parse_ordering].
pub fn read_ordering(path: impl AsRef<Path>) -> Result<Vec<usize>> {
    parse_ordering(&read_to_string(path)?)
}

/// Writes an ordering file, one integer per line.
pub fn write_ordering(path: impl AsRef<Path>, ordering: &[usize]) -> Result<()> {
    let mut f = BufWriter::new(File::create(path)?);
    for i in ordering {
        writeln!(f, "{i}")?;
    }
    f.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(parse_ordering("3\n1\n0\n2\n").unwrap(), vec![3, 1, 0, 2]);
        assert_eq!(parse_ordering("\n 3 \r\n1\n\n").unwrap(), vec![3, 1]);
        assert_eq!(parse_ordering("  \n").unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn test_parse_error_line() {
        match parse_ordering("0\n1\nx\n3") {
            Err(Error::Ordering { line, .. }) => assert_eq!(line, 3),
            r => panic!("Unexpected result {r:?}"),
        }
        match parse_ordering("0\n\n1") {
            Err(Error::Ordering { line, .. }) => assert_eq!(line, 2),
            r => panic!("Unexpected result {r:?}"),
        }
        assert!(parse_ordering("-1").is_err());
    }

    #[test]
    fn test_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("order.txt");

        write_ordering(&path, &[2, 0, 1]).unwrap();
        assert_eq!(read_to_string(&path).unwrap(), "2\n0\n1\n");
        assert_eq!(read_ordering(&path).unwrap(), vec![2, 0, 1]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_ordering(dir.path().join("nope.txt")),
            Err(Error::Io(_))
        ));
    }
}
