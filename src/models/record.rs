use crate::models::geometry::BoundingBox;
use serde::Serialize;

/// Output schema, in attribute order. All fields are doubles.
pub const FIELD_NAMES: [&str; 10] = [
    "MINX", "MINY", "MAXX", "MAXY", "CNTX", "CNTY", "AREA", "PERIM", "HEIGHT", "WIDTH",
];

/// Single-part polygon whose only ring is an axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectanglePolygon {
    pub ring: [(f64, f64); 5],
}

impl RectanglePolygon {
    pub fn to_wkt(&self) -> String {
        let coords = self
            .ring
            .iter()
            .map(|(x, y)| format!("{} {}", x, y))
            .collect::<Vec<_>>()
            .join(", ");
        format!("POLYGON (({}))", coords)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtentRecord {
    pub geometry: RectanglePolygon,
    /// MINX, MINY, MAXX, MAXY, CNTX, CNTY, AREA, PERIM, HEIGHT, WIDTH
    pub attributes: [f64; 10],
}

impl From<&BoundingBox> for ExtentRecord {
    fn from(bbox: &BoundingBox) -> Self {
        ExtentRecord {
            geometry: RectanglePolygon { ring: bbox.ring() },
            attributes: [
                bbox.minx,
                bbox.miny,
                bbox.maxx,
                bbox.maxy,
                bbox.center_x(),
                bbox.center_y(),
                bbox.area(),
                bbox.perimeter(),
                bbox.height(),
                bbox.width(),
            ],
        }
    }
}

impl ExtentRecord {
    /// The box this record was built from.
    pub fn bbox(&self) -> BoundingBox {
        let [minx, miny, maxx, maxy, ..] = self.attributes;
        BoundingBox::from((minx, miny, maxx, maxy))
    }
}
