use crate::models::{geometry::BoundingBox, mode::Mode, record::ExtentRecord};
use crate::traits::{Bounded, ExtentSink, LayerSource, ProgressSink};

/// One record for the aggregate extent of a layer.
pub fn compute_whole_layer_extent(bbox: &BoundingBox) -> ExtentRecord {
    ExtentRecord::from(bbox)
}

/// Lazily yields one record per geometry, in input order, reporting progress
/// after each geometry. Geometries without coordinates are skipped.
pub fn compute_per_feature_extents<I, P>(
    geometries: I,
    progress: &mut P,
) -> PerFeatureExtents<'_, I::IntoIter, P>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    I::Item: Bounded,
    P: ProgressSink + ?Sized,
{
    let geometries = geometries.into_iter();
    let total = geometries.len();
    PerFeatureExtents {
        geometries,
        total,
        position: 0,
        skipped: 0,
        progress,
    }
}

pub struct PerFeatureExtents<'p, I, P: ?Sized> {
    geometries: I,
    total: usize,
    position: usize,
    skipped: usize,
    progress: &'p mut P,
}

impl<I, P: ?Sized> PerFeatureExtents<'_, I, P> {
    /// Number of geometries consumed so far that had no bounding box.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<I, P> Iterator for PerFeatureExtents<'_, I, P>
where
    I: Iterator,
    I::Item: Bounded,
    P: ProgressSink + ?Sized,
{
    type Item = ExtentRecord;

    fn next(&mut self) -> Option<ExtentRecord> {
        loop {
            let geometry = self.geometries.next()?;
            let bbox = geometry.bounding_box();
            let index = self.position;
            self.position += 1;

            // position >= 1, so the divisor is never zero
            let percent = (self.position * 100 / self.total.max(self.position)) as u8;
            self.progress.set_percentage(percent);

            match bbox {
                Some(bbox) => return Some(ExtentRecord::from(&bbox)),
                None => {
                    log::warn!("Skipping feature {} without coordinates", index);
                    self.skipped += 1;
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.geometries.size_hint().1)
    }
}

/// Outcome of one processing pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub records: usize,
    pub skipped: usize,
    /// Union of every written rectangle.
    pub extent: Option<BoundingBox>,
}

impl RunSummary {
    fn add(&mut self, record: &ExtentRecord) {
        let bbox = record.bbox();
        self.records += 1;
        self.extent = Some(match self.extent {
            Some(extent) => extent.union(&bbox),
            None => bbox,
        });
    }
}

/// Compute the extent(s) of `source` and hand every record to `sink`.
pub fn run<S, W, P>(
    source: &mut S,
    mode: Mode,
    sink: &mut W,
    progress: &mut P,
) -> anyhow::Result<RunSummary>
where
    S: LayerSource,
    W: ExtentSink + ?Sized,
    P: ProgressSink + ?Sized,
{
    let mut summary = RunSummary::default();

    match mode {
        Mode::WholeLayer => {
            match source.extent()? {
                Some(bbox) => {
                    let record = compute_whole_layer_extent(&bbox);
                    sink.add_feature(&record.geometry, &record.attributes)?;
                    summary.add(&record);
                }
                None => log::warn!("Layer has no extent, nothing written"),
            }
            progress.set_percentage(100);
        }
        Mode::PerFeature => {
            let geometries = source.geometries()?;
            let mut extents = compute_per_feature_extents(geometries, progress);
            for record in extents.by_ref() {
                sink.add_feature(&record.geometry, &record.attributes)?;
                summary.add(&record);
            }
            summary.skipped = extents.skipped();
        }
    }

    Ok(summary)
}
