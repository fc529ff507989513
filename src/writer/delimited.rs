use crate::models::record::RectanglePolygon;
use crate::traits::ExtentSink;
use anyhow::Context;
use csv::{Writer, WriterBuilder};
use serde::Serialize;
use std::fs::File;
use std::path::Path;

/// One CSV row: the rectangle as WKT followed by the ten extent fields.
#[derive(Serialize)]
#[serde(rename_all = "UPPERCASE")]
struct ExtentRow {
    wkt: String,
    minx: f64,
    miny: f64,
    maxx: f64,
    maxy: f64,
    cntx: f64,
    cnty: f64,
    area: f64,
    perim: f64,
    height: f64,
    width: f64,
}

pub struct CsvExtentWriter {
    writer: Writer<File>,
}

impl CsvExtentWriter {
    pub fn create(path: &Path) -> anyhow::Result<Self> {
        let writer = WriterBuilder::new()
            .has_headers(true)
            .from_path(path)
            .with_context(|| format!("Failed to create {:?}", path))?;
        Ok(Self { writer })
    }
}

impl ExtentSink for CsvExtentWriter {
    fn add_feature(
        &mut self,
        geometry: &RectanglePolygon,
        attributes: &[f64; 10],
    ) -> anyhow::Result<()> {
        let [minx, miny, maxx, maxy, cntx, cnty, area, perim, height, width] = *attributes;
        self.writer.serialize(ExtentRow {
            wkt: geometry.to_wkt(),
            minx,
            miny,
            maxx,
            maxy,
            cntx,
            cnty,
            area,
            perim,
            height,
            width,
        })?;
        Ok(())
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
