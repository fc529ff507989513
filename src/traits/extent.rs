use crate::models::{
    geometry::BoundingBox,
    record::{ExtentRecord, RectanglePolygon},
};

/// Anything that can report an axis-aligned bounding box.
/// `None` means there are no coordinates to bound.
pub trait Bounded {
    fn bounding_box(&self) -> Option<BoundingBox>;
}

/// A vector layer as seen by the extent computation.
pub trait LayerSource {
    type Geometry: Bounded;

    /// Aggregate extent of the whole layer, `None` when the layer has none.
    fn extent(&mut self) -> anyhow::Result<Option<BoundingBox>>;

    /// Feature geometries in layer order.
    fn geometries(&mut self) -> anyhow::Result<Vec<Self::Geometry>>;
}

/// Receives an advisory integer percentage after each processed unit.
pub trait ProgressSink {
    fn set_percentage(&mut self, percent: u8);
}

/// Consumer of produced extents, called once per record in production order.
pub trait ExtentSink {
    fn add_feature(
        &mut self,
        geometry: &RectanglePolygon,
        attributes: &[f64; 10],
    ) -> anyhow::Result<()>;

    /// Push buffered output to its destination once all records are added.
    fn finish(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

impl Bounded for BoundingBox {
    fn bounding_box(&self) -> Option<BoundingBox> {
        Some(*self)
    }
}

impl Bounded for [(f64, f64)] {
    fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_coords(self.iter().copied())
    }
}

impl Bounded for Vec<(f64, f64)> {
    fn bounding_box(&self) -> Option<BoundingBox> {
        self.as_slice().bounding_box()
    }
}

impl<T: Bounded + ?Sized> Bounded for &T {
    fn bounding_box(&self) -> Option<BoundingBox> {
        (**self).bounding_box()
    }
}

impl<T: Bounded> Bounded for Option<T> {
    fn bounding_box(&self) -> Option<BoundingBox> {
        self.as_ref().and_then(Bounded::bounding_box)
    }
}

/// Discards progress.
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn set_percentage(&mut self, _percent: u8) {}
}

impl ExtentSink for Vec<ExtentRecord> {
    fn add_feature(
        &mut self,
        geometry: &RectanglePolygon,
        attributes: &[f64; 10],
    ) -> anyhow::Result<()> {
        self.push(ExtentRecord {
            geometry: *geometry,
            attributes: *attributes,
        });
        Ok(())
    }
}
