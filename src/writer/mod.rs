pub mod delimited;
pub mod ogr;

pub use delimited::CsvExtentWriter;
pub use ogr::OgrExtentWriter;

use crate::config::OutputFormat;
use crate::traits::ExtentSink;
use gdal::spatial_ref::SpatialRef;
use std::path::Path;

/// Open the sink for `format` at `path`. `srs` is only used by OGR outputs.
pub fn create_writer(
    path: &Path,
    format: OutputFormat,
    srs: Option<&SpatialRef>,
) -> anyhow::Result<Box<dyn ExtentSink>> {
    Ok(match format.driver_name() {
        Some(driver) => Box::new(OgrExtentWriter::create(path, driver, srs)?),
        None => Box::new(CsvExtentWriter::create(path)?),
    })
}
