use std::ops::Index;

use crate::geopoint::GeoPoint;

/// Ordered coordinates of an instruction. Either every point carries an
/// elevation (3D) or none does.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointList {
    points: Vec<GeoPoint>,
    is_3d: bool,
}

impl PointList {
    pub fn new(is_3d: bool) -> Self {
        PointList {
            points: Vec::new(),
            is_3d,
        }
    }

    pub fn with_capacity(capacity: usize, is_3d: bool) -> Self {
        PointList {
            points: Vec::with_capacity(capacity),
            is_3d,
        }
    }

    /// Builds a 2D list from `(lat, lon)` pairs.
    pub fn from_lat_lon(coordinates: &[(f64, f64)]) -> Self {
        let mut list = PointList::with_capacity(coordinates.len(), false);
        for &(lat, lon) in coordinates {
            list.push(lat, lon);
        }
        list
    }

    /// Builds a 3D list from `(lat, lon, ele)` triples.
    pub fn from_lat_lon_ele(coordinates: &[(f64, f64, f64)]) -> Self {
        let mut list = PointList::with_capacity(coordinates.len(), true);
        for &(lat, lon, ele) in coordinates {
            list.push_3d(lat, lon, ele);
        }
        list
    }

    pub fn push(&mut self, lat: f64, lon: f64) {
        let ele = if self.is_3d { Some(f64::NAN) } else { None };
        self.points.push(GeoPoint { lat, lon, ele });
    }

    pub fn push_3d(&mut self, lat: f64, lon: f64, ele: f64) {
        let ele = if self.is_3d { Some(ele) } else { None };
        self.points.push(GeoPoint { lat, lon, ele });
    }

    pub fn size(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_3d(&self) -> bool {
        self.is_3d
    }

    pub fn latitude(&self, index: usize) -> f64 {
        self.points[index].lat
    }

    pub fn longitude(&self, index: usize) -> f64 {
        self.points[index].lon
    }

    /// NaN for 2D lists.
    pub fn elevation(&self, index: usize) -> f64 {
        self.points[index].elevation()
    }

    pub fn point(&self, index: usize) -> Option<&GeoPoint> {
        self.points.get(index)
    }

    pub fn first(&self) -> Option<&GeoPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&GeoPoint> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeoPoint> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[GeoPoint] {
        &self.points
    }
}

impl Index<usize> for PointList {
    type Output = GeoPoint;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a PointList {
    type Item = &'a GeoPoint;
    type IntoIter = std::slice::Iter<'a, GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
