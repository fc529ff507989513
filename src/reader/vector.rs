use crate::models::geometry::BoundingBox;
use crate::traits::{Bounded, LayerSource};
use anyhow::Context;
use gdal::Dataset;
use gdal::spatial_ref::SpatialRef;
use gdal::vector::{Geometry, Layer, LayerAccess};
use std::path::{Path, PathBuf};

impl Bounded for Geometry {
    fn bounding_box(&self) -> Option<BoundingBox> {
        if self.is_empty() {
            return None;
        }
        let env = self.envelope();
        Some(BoundingBox::from((env.MinX, env.MinY, env.MaxX, env.MaxY)))
    }
}

/// One layer of an OGR vector dataset.
pub struct VectorSource {
    path: PathBuf,
    dataset: Dataset,
    layer_name: String,
}

impl VectorSource {
    /// Open `path` and select `layer`, or the first layer when none is named.
    pub fn open(path: &Path, layer: Option<&str>) -> anyhow::Result<Self> {
        let dataset =
            Dataset::open(path).with_context(|| format!("Failed to open {:?}", path))?;

        let layer_name = match layer {
            Some(name) => dataset
                .layer_by_name(name)
                .with_context(|| format!("Layer '{}' not found in {:?}", name, path))?
                .name(),
            None => dataset
                .layer(0)
                .with_context(|| format!("No vector layer in {:?}", path))?
                .name(),
        };
        log::debug!("Using layer '{}' of {:?}", layer_name, path);

        Ok(Self {
            path: path.to_path_buf(),
            dataset,
            layer_name,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn layer_name(&self) -> &str {
        &self.layer_name
    }

    /// CRS of the layer, handed to the writer untouched.
    pub fn spatial_ref(&self) -> Option<SpatialRef> {
        self.layer().ok().and_then(|layer| layer.spatial_ref())
    }

    pub fn feature_count(&self) -> anyhow::Result<u64> {
        Ok(self.layer()?.feature_count())
    }

    fn layer(&self) -> anyhow::Result<Layer<'_>> {
        self.dataset
            .layer_by_name(&self.layer_name)
            .with_context(|| format!("Layer '{}' not found in {:?}", self.layer_name, self.path))
    }
}

impl LayerSource for VectorSource {
    type Geometry = Option<Geometry>;

    fn extent(&mut self) -> anyhow::Result<Option<BoundingBox>> {
        let reported = {
            let layer = self.layer()?;
            if layer.feature_count() == 0 {
                return Ok(None);
            }
            layer.get_extent()
        };

        match reported {
            Ok(env) => Ok(Some(BoundingBox::from((
                env.MinX, env.MinY, env.MaxX, env.MaxY,
            )))),
            Err(err) => {
                log::debug!(
                    "No extent reported for '{}' ({}), scanning features",
                    self.layer_name,
                    err
                );
                let boxes = self.geometries()?;
                Ok(boxes
                    .iter()
                    .filter_map(Bounded::bounding_box)
                    .reduce(|a, b| a.union(&b)))
            }
        }
    }

    fn geometries(&mut self) -> anyhow::Result<Vec<Self::Geometry>> {
        let mut layer = self.layer()?;
        let geometries = layer
            .features()
            .map(|feature| feature.geometry().cloned())
            .collect();
        Ok(geometries)
    }
}
