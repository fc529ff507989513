use gdal::Dataset;
use gdal::spatial_ref::SpatialRef;
use gdal::vector::LayerAccess;
use layerextent::compute::run;
use layerextent::models::record::FIELD_NAMES;
use layerextent::reader::VectorSource;
use layerextent::traits::{Bounded, ExtentSink, LayerSource, NoProgress};
use layerextent::writer::OgrExtentWriter;
use layerextent::{BoundingBox, ExtentRecord, Mode, compute_whole_layer_extent};
use std::fs;
use std::path::PathBuf;

const PARCELS: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    { "type": "Feature", "properties": { "id": 1 },
      "geometry": { "type": "Polygon", "coordinates": [[[0, 0], [0, 1], [1, 1], [1, 0], [0, 0]]] } },
    { "type": "Feature", "properties": { "id": 2 }, "geometry": null },
    { "type": "Feature", "properties": { "id": 3 },
      "geometry": { "type": "LineString", "coordinates": [[2, -1], [6, 1], [4, 3]] } }
  ]
}"#;

fn write_parcels(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("parcels.geojson");
    fs::write(&path, PARCELS).unwrap();
    path
}

#[test]
fn test_whole_layer_extent_from_geojson() {
    let dir = tempfile::tempdir().unwrap();
    let mut source = VectorSource::open(&write_parcels(&dir), None).unwrap();

    let mut sink: Vec<ExtentRecord> = Vec::new();
    let summary = run(&mut source, Mode::WholeLayer, &mut sink, &mut NoProgress).unwrap();

    assert_eq!(summary.records, 1);
    assert_eq!(sink[0].bbox(), BoundingBox::from((0.0, -1.0, 6.0, 3.0)));
    assert_eq!(sink[0].attributes[6], 24.0);
    assert_eq!(sink[0].attributes[7], 20.0);
}

#[test]
fn test_per_feature_extents_skip_null_geometry() {
    let dir = tempfile::tempdir().unwrap();
    let mut source = VectorSource::open(&write_parcels(&dir), None).unwrap();
    assert_eq!(source.feature_count().unwrap(), 3);

    let mut sink: Vec<ExtentRecord> = Vec::new();
    let summary = run(&mut source, Mode::PerFeature, &mut sink, &mut NoProgress).unwrap();

    assert_eq!(summary.records, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(sink[0].bbox(), BoundingBox::from((0.0, 0.0, 1.0, 1.0)));
    assert_eq!(sink[1].bbox(), BoundingBox::from((2.0, -1.0, 6.0, 3.0)));
}

#[test]
fn test_missing_layer_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(VectorSource::open(&write_parcels(&dir), Some("no_such_layer")).is_err());
}

#[test]
fn test_ogr_writer_round_trips_rectangles() {
    let dir = tempfile::tempdir().unwrap();
    let mut source = VectorSource::open(&write_parcels(&dir), None).unwrap();
    let out = dir.path().join("extent.geojson");

    {
        let srs = source.spatial_ref();
        let mut writer = OgrExtentWriter::create(&out, "GeoJSON", srs.as_ref()).unwrap();
        run(&mut source, Mode::PerFeature, &mut writer, &mut NoProgress).unwrap();
    }

    let mut written = VectorSource::open(&out, Some(OgrExtentWriter::LAYER_NAME)).unwrap();
    let boxes: Vec<Option<BoundingBox>> = written
        .geometries()
        .unwrap()
        .iter()
        .map(Bounded::bounding_box)
        .collect();
    assert_eq!(
        boxes,
        vec![
            Some(BoundingBox::from((0.0, 0.0, 1.0, 1.0))),
            Some(BoundingBox::from((2.0, -1.0, 6.0, 3.0))),
        ]
    );
}

#[test]
fn test_ogr_writer_stores_schema_fields_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let parcels = write_parcels(&dir);
    let out = dir.path().join("fields.geojson");

    let mut expected: Vec<ExtentRecord> = Vec::new();
    let mut source = VectorSource::open(&parcels, None).unwrap();
    run(&mut source, Mode::PerFeature, &mut expected, &mut NoProgress).unwrap();
    {
        let mut source = VectorSource::open(&parcels, None).unwrap();
        let mut writer = OgrExtentWriter::create(&out, "GeoJSON", None).unwrap();
        run(&mut source, Mode::PerFeature, &mut writer, &mut NoProgress).unwrap();
    }

    let dataset = Dataset::open(&out).unwrap();
    let mut layer = dataset.layer(0).unwrap();
    let names: Vec<String> = layer.defn().fields().map(|field| field.name()).collect();
    assert_eq!(names, FIELD_NAMES.to_vec());

    let mut count = 0;
    for (feature, record) in layer.features().zip(&expected) {
        for (name, value) in FIELD_NAMES.iter().zip(record.attributes) {
            let stored = feature.field_as_double_by_name(name).unwrap();
            assert_eq!(stored, Some(value), "field {} differs", name);
        }
        count += 1;
    }
    assert_eq!(count, 2);
}

#[test]
fn test_ogr_writer_replaces_shapefile_sidecars() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("extent.shp");
    let record = compute_whole_layer_extent(&BoundingBox::from((0.0, 0.0, 4.0, 2.0)));

    {
        let wgs84 = SpatialRef::from_epsg(4326).unwrap();
        let mut writer = OgrExtentWriter::create(&out, "ESRI Shapefile", Some(&wgs84)).unwrap();
        writer
            .add_feature(&record.geometry, &record.attributes)
            .unwrap();
    }
    assert!(out.with_extension("prj").exists());

    {
        let mut writer = OgrExtentWriter::create(&out, "ESRI Shapefile", None).unwrap();
        writer
            .add_feature(&record.geometry, &record.attributes)
            .unwrap();
    }
    assert!(!out.with_extension("prj").exists());

    let written = VectorSource::open(&out, None).unwrap();
    assert!(written.spatial_ref().is_none());
    assert_eq!(written.feature_count().unwrap(), 1);
}
