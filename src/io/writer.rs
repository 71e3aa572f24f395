//! Report writers.
use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

use log::info;
use serde::Serialize;

use crate::error::Error;

/// Create the parent directory of `path` if needed.
fn ensure_parent(path: &Path) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Serialize `rows` into a headed CSV file at `dst`.
///
/// Returns the number of written rows.
pub fn write_csv<T, I>(dst: &Path, rows: I) -> Result<usize, Error>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    ensure_parent(dst)?;
    let mut out = csv::WriterBuilder::new().from_path(dst)?;
    let mut nb_rows = 0;
    for row in rows {
        out.serialize(row)?;
        nb_rows += 1;
    }
    out.flush()?;

    info!("saved {} rows to {:?}", nb_rows, dst);
    Ok(nb_rows)
}

/// Write a CSV file at `dst` holding only `headers`.
///
/// Serialized rows carry their own headers, an empty table needs them spelled out.
pub fn write_empty_csv(dst: &Path, headers: &[&str]) -> Result<(), Error> {
    ensure_parent(dst)?;
    let mut out = csv::WriterBuilder::new().from_path(dst)?;
    out.write_record(headers)?;
    out.flush()?;

    info!("saved empty table to {:?}", dst);
    Ok(())
}

/// Write `lines` to `dst`, one per line.
pub fn write_lines<I, S>(dst: &Path, lines: I) -> Result<(), Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ensure_parent(dst)?;
    let mut f = File::create(dst)?;
    for line in lines {
        writeln!(f, "{}", line.as_ref())?;
    }
    info!("saved {:?}", dst);
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Row {
        #[serde(rename = "Token")]
        token: &'static str,
        #[serde(rename = "Frequency")]
        frequency: u64,
    }

    #[test]
    fn csv_with_parents() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("nested/out.csv");
        let rows = vec![
            Row {
                token: "uh",
                frequency: 3,
            },
            Row {
                token: "um",
                frequency: 1,
            },
        ];

        assert_eq!(write_csv(&dst, rows).unwrap(), 2);
        let content = std::fs::read_to_string(&dst).unwrap();
        assert_eq!(content, "Token,Frequency\nuh,3\num,1\n");
    }

    #[test]
    fn empty_table_keeps_headers() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("empty.csv");
        write_empty_csv(&dst, &["Token", "Frequency"]).unwrap();
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "Token,Frequency\n");
    }

    #[test]
    fn lines() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("links.txt");
        write_lines(&dst, ["a | b", "c | d"]).unwrap();
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "a | b\nc | d\n");
    }
}
