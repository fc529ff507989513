use crate::models::record::{FIELD_NAMES, RectanglePolygon};
use crate::traits::ExtentSink;
use anyhow::Context;
use gdal::spatial_ref::SpatialRef;
use gdal::vector::{
    FieldValue, Geometry, LayerAccess, LayerOptions, OGRFieldType, OGRwkbGeometryType,
};
use gdal::{Dataset, DriverManager};
use std::path::{Path, PathBuf};

/// Writes extents as polygon features into a new OGR dataset.
pub struct OgrExtentWriter {
    path: PathBuf,
    dataset: Dataset,
}

impl OgrExtentWriter {
    pub const LAYER_NAME: &'static str = "extent";

    /// Create `path` with the named OGR driver, replacing any existing file.
    pub fn create(
        path: &Path,
        driver_name: &str,
        srs: Option<&SpatialRef>,
    ) -> anyhow::Result<Self> {
        let driver = DriverManager::get_driver_by_name(driver_name)
            .with_context(|| format!("GDAL driver '{}' is not available", driver_name))?;

        // the driver removes sidecar files (.dbf, .shx, .prj) along with the main one
        if path.exists() {
            log::debug!("Replacing existing output {:?}", path);
            driver
                .delete(path)
                .with_context(|| format!("Failed to replace {:?}", path))?;
        }

        let mut dataset = driver
            .create_vector_only(path)
            .with_context(|| format!("Failed to create {:?}", path))?;

        let layer = dataset.create_layer(LayerOptions {
            name: Self::LAYER_NAME,
            srs,
            ty: OGRwkbGeometryType::wkbPolygon,
            options: None,
        })?;
        let fields: Vec<(&str, OGRFieldType::Type)> = FIELD_NAMES
            .iter()
            .map(|name| (*name, OGRFieldType::OFTReal))
            .collect();
        layer.create_defn_fields(&fields)?;

        Ok(Self {
            path: path.to_path_buf(),
            dataset,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExtentSink for OgrExtentWriter {
    fn add_feature(
        &mut self,
        geometry: &RectanglePolygon,
        attributes: &[f64; 10],
    ) -> anyhow::Result<()> {
        let mut layer = self.dataset.layer(0)?;
        let geometry = Geometry::from_wkt(&geometry.to_wkt())?;
        let values: Vec<FieldValue> = attributes
            .iter()
            .map(|v| FieldValue::RealValue(*v))
            .collect();
        layer
            .create_feature_fields(geometry, &FIELD_NAMES, &values)
            .with_context(|| format!("Failed to write feature to {:?}", self.path))?;
        Ok(())
    }
}
