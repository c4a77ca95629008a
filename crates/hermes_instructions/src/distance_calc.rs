use geo::{Bearing, Distance, Euclidean, Haversine};

use crate::{geopoint::GeoPoint, meters::Meters};

/// Distances and bearings between two coordinates.
pub trait DistanceCalc {
    fn distance_2d(&self, from: &GeoPoint, to: &GeoPoint) -> Meters;

    /// Falls back to the 2D distance when either elevation is missing.
    fn distance_3d(&self, from: &GeoPoint, to: &GeoPoint) -> Meters {
        let planar = self.distance_2d(from, to).value();
        let (from_ele, to_ele) = (from.elevation(), to.elevation());

        if from_ele.is_nan() || to_ele.is_nan() {
            return Meters::new(planar);
        }

        let delta = to_ele - from_ele;
        Meters::new((planar * planar + delta * delta).sqrt())
    }

    /// Initial bearing in degrees within [0, 360), 0 is north, clockwise.
    fn bearing(&self, from: &GeoPoint, to: &GeoPoint) -> f64;
}

/// Great-circle distances on the earth sphere.
#[derive(Debug, Default, Clone, Copy)]
pub struct HaversineDistanceCalc;

impl DistanceCalc for HaversineDistanceCalc {
    fn distance_2d(&self, from: &GeoPoint, to: &GeoPoint) -> Meters {
        let haversine = Haversine;
        Meters::new(haversine.distance(geo::Point::from(from), geo::Point::from(to)))
    }

    fn bearing(&self, from: &GeoPoint, to: &GeoPoint) -> f64 {
        let haversine = Haversine;
        haversine
            .bearing(geo::Point::from(from), geo::Point::from(to))
            .rem_euclid(360.0)
    }
}

/// Treats `lon` as x and `lat` as y on a plane, with coordinates already in meters.
#[derive(Debug, Default, Clone, Copy)]
pub struct EuclideanDistanceCalc;

impl DistanceCalc for EuclideanDistanceCalc {
    fn distance_2d(&self, from: &GeoPoint, to: &GeoPoint) -> Meters {
        let euclidean = Euclidean;
        Meters::new(euclidean.distance(geo::Point::from(from), geo::Point::from(to)))
    }

    fn bearing(&self, from: &GeoPoint, to: &GeoPoint) -> f64 {
        let delta_x = to.lon - from.lon;
        let delta_y = to.lat - from.lat;
        delta_x.atan2(delta_y).to_degrees().rem_euclid(360.0)
    }
}
