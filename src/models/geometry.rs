use serde::Serialize;

/// Axis-aligned bounding box. `minx <= maxx` and `miny <= maxy` always hold
/// for boxes built through [`BoundingBox::from_coords`] or [`BoundingBox::union`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl From<(f64, f64, f64, f64)> for BoundingBox {
    fn from((minx, miny, maxx, maxy): (f64, f64, f64, f64)) -> Self {
        BoundingBox {
            minx,
            miny,
            maxx,
            maxy,
        }
    }
}

impl BoundingBox {
    /// Componentwise min/max over a set of coordinates. `None` when empty.
    pub fn from_coords<I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut iter = coords.into_iter();
        let (x0, y0) = iter.next()?;
        let mut bbox = BoundingBox::from((x0, y0, x0, y0));
        for (x, y) in iter {
            bbox.minx = bbox.minx.min(x);
            bbox.miny = bbox.miny.min(y);
            bbox.maxx = bbox.maxx.max(x);
            bbox.maxy = bbox.maxy.max(y);
        }
        Some(bbox)
    }

    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            minx: self.minx.min(other.minx),
            miny: self.miny.min(other.miny),
            maxx: self.maxx.max(other.maxx),
            maxy: self.maxy.max(other.maxy),
        }
    }

    pub fn width(&self) -> f64 {
        self.maxx - self.minx
    }

    pub fn height(&self) -> f64 {
        self.maxy - self.miny
    }

    pub fn center_x(&self) -> f64 {
        self.minx + self.width() / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.miny + self.height() / 2.0
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * self.width() + 2.0 * self.height()
    }

    /// Closed rectangle ring, first vertex repeated last.
    pub fn ring(&self) -> [(f64, f64); 5] {
        [
            (self.minx, self.miny),
            (self.minx, self.maxy),
            (self.maxx, self.maxy),
            (self.maxx, self.miny),
            (self.minx, self.miny),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_coords_takes_componentwise_min_max() {
        let bbox = BoundingBox::from_coords([(3.0, -1.0), (-2.0, 4.0), (0.5, 0.5)]).unwrap();
        assert_eq!(bbox, BoundingBox::from((-2.0, -1.0, 3.0, 4.0)));
    }

    #[test]
    fn test_from_coords_empty_has_no_box() {
        assert!(BoundingBox::from_coords(Vec::<(f64, f64)>::new()).is_none());
    }

    #[test]
    fn test_single_point_is_degenerate_box() {
        let bbox = BoundingBox::from_coords([(5.0, 5.0)]).unwrap();
        assert_eq!(bbox.width(), 0.0);
        assert_eq!(bbox.height(), 0.0);
        assert_eq!(bbox.area(), 0.0);
        assert_eq!(bbox.perimeter(), 0.0);
        assert_eq!((bbox.center_x(), bbox.center_y()), (5.0, 5.0));
    }

    #[test]
    fn test_union_covers_both() {
        let a = BoundingBox::from((0.0, 0.0, 1.0, 1.0));
        let b = BoundingBox::from((-1.0, 0.5, 0.5, 3.0));
        assert_eq!(a.union(&b), BoundingBox::from((-1.0, 0.0, 1.0, 3.0)));
    }

    #[test]
    fn test_ring_is_closed_rectangle() {
        let ring = BoundingBox::from((0.0, 0.0, 4.0, 2.0)).ring();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring[0], ring[4]);
        assert_eq!(ring[1], (0.0, 2.0));
        assert_eq!(ring[2], (4.0, 2.0));
        assert_eq!(ring[3], (4.0, 0.0));
    }
}
