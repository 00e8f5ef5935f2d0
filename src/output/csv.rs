use crate::error::{Result, TraceError};
use crate::processors::EmpiricalCdf;
use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;

/// Write `x,y` rows for a CDF to any writer: no header, one row per sample.
pub fn write_cdf_rows<W: Write>(cdf: &EmpiricalCdf, writer: W) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    for row in cdf.rows() {
        writer.serialize(row)?;
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// CSV export function for one CDF
pub fn save_cdf_to_csv(cdf: &EmpiricalCdf, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| TraceError::io(path, e))?;
    write_cdf_rows(cdf, file)
}
