//! Strain/stress CSV files: two float columns `eps` and `sig`.

use anyhow::{Context, Result};
use kappa::api::Points;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

pub const EPS_COL: &str = "eps";
pub const SIG_COL: &str = "sig";

/// Read a polyline from CSV. Extra columns are ignored; nulls are an error.
pub fn read_points(path: &Path) -> Result<Points> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col(EPS_COL).cast(DataType::Float64),
            col(SIG_COL).cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::debug!(rows = df.height(), path = %path.display(), "input_csv_shape");
    let eps = float_column(&df, EPS_COL)?;
    let sig = float_column(&df, SIG_COL)?;
    Ok(Points::from_vecs(eps, sig)?)
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let ca = df.column(name)?.f64()?;
    ca.into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("null {name} in row {row}")))
        .collect()
}

/// Write a polyline as CSV with a header row.
pub fn write_points(path: &Path, points: &Points) -> Result<()> {
    ensure_parent(path)?;
    let (eps, sig) = points.clone().into_vecs();
    let mut df = df!(EPS_COL => eps, SIG_COL => sig)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;
    Ok(())
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn csv_survives_write_and_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/curve.csv");
        let p = kappa::api::demo_tension();
        write_points(&path, &p).unwrap();
        assert_eq!(read_points(&path).unwrap(), p);
    }

    #[test]
    fn integer_columns_are_cast() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ints.csv");
        std::fs::write(&path, "eps,sig,note\n0,0,a\n2,4,b\n5,4,c\n").unwrap();
        let p = read_points(&path).unwrap();
        assert_eq!(p.epsilon(), &[0.0, 2.0, 5.0]);
        assert_eq!(p.sigma(), &[0.0, 4.0, 4.0]);
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "eps,stress\n0,0\n1,1\n").unwrap();
        assert!(read_points(&path).is_err());
    }
}
