use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{distance_calc::DistanceCalc, instruction::Instruction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassPoint {
    const SLICE: f64 = 360.0 / 16.0;

    /// Each point covers 45 degrees centred on its own heading.
    pub fn from_azimuth(azimuth: f64) -> CompassPoint {
        let azimuth = azimuth.rem_euclid(360.0);

        if azimuth < Self::SLICE {
            CompassPoint::N
        } else if azimuth < Self::SLICE * 3.0 {
            CompassPoint::NE
        } else if azimuth < Self::SLICE * 5.0 {
            CompassPoint::E
        } else if azimuth < Self::SLICE * 7.0 {
            CompassPoint::SE
        } else if azimuth < Self::SLICE * 9.0 {
            CompassPoint::S
        } else if azimuth < Self::SLICE * 11.0 {
            CompassPoint::SW
        } else if azimuth < Self::SLICE * 13.0 {
            CompassPoint::W
        } else if azimuth < Self::SLICE * 15.0 {
            CompassPoint::NW
        } else {
            CompassPoint::N
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::NE => "NE",
            CompassPoint::E => "E",
            CompassPoint::SE => "SE",
            CompassPoint::S => "S",
            CompassPoint::SW => "SW",
            CompassPoint::W => "W",
            CompassPoint::NW => "NW",
        }
    }
}

impl Display for CompassPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compass label and rounded bearing of the first segment of `instruction`.
///
/// Both are empty when the instruction does not span a segment on its own and
/// there is no following instruction to borrow the second point from.
pub fn classify(
    instruction: &Instruction,
    next: Option<&Instruction>,
    calc: &impl DistanceCalc,
) -> (String, String) {
    match instruction.calc_azimuth(next, calc) {
        Some(azimuth) => (
            CompassPoint::from_azimuth(azimuth).to_string(),
            format_azimuth(azimuth),
        ),
        None => (String::new(), String::new()),
    }
}

pub(crate) fn format_azimuth(azimuth: f64) -> String {
    format!("{}", azimuth.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        distance_calc::EuclideanDistanceCalc, meters::Meters, point_list::PointList,
        turn::TurnCode,
    };

    fn instruction(points: &[(f64, f64)]) -> Instruction {
        Instruction::builder(TurnCode::Continue, "", PointList::from_lat_lon(points))
            .distance(Meters::new(10.0))
            .time(10)
            .build()
    }

    #[test]
    fn test_from_azimuth_boundaries() {
        assert_eq!(CompassPoint::from_azimuth(0.0), CompassPoint::N);
        assert_eq!(CompassPoint::from_azimuth(22.4), CompassPoint::N);
        assert_eq!(CompassPoint::from_azimuth(22.5), CompassPoint::NE);
        assert_eq!(CompassPoint::from_azimuth(90.0), CompassPoint::E);
        assert_eq!(CompassPoint::from_azimuth(180.0), CompassPoint::S);
        assert_eq!(CompassPoint::from_azimuth(225.0), CompassPoint::SW);
        assert_eq!(CompassPoint::from_azimuth(300.0), CompassPoint::NW);
        assert_eq!(CompassPoint::from_azimuth(337.5), CompassPoint::N);
        assert_eq!(CompassPoint::from_azimuth(359.9), CompassPoint::N);
    }

    #[test]
    fn test_from_azimuth_normalizes() {
        assert_eq!(CompassPoint::from_azimuth(-90.0), CompassPoint::W);
        assert_eq!(CompassPoint::from_azimuth(450.0), CompassPoint::E);
    }

    #[test]
    fn test_classify_uses_own_second_point() {
        let calc = EuclideanDistanceCalc;
        let east = instruction(&[(0.0, 0.0), (0.0, 10.0)]);

        assert_eq!(
            classify(&east, None, &calc),
            (String::from("E"), String::from("90"))
        );
    }

    #[test]
    fn test_classify_single_point_uses_next_instruction() {
        let calc = EuclideanDistanceCalc;
        let single = instruction(&[(0.0, 0.0)]);
        let next = instruction(&[(-10.0, 0.0), (-20.0, 0.0)]);

        assert_eq!(
            classify(&single, Some(&next), &calc),
            (String::from("S"), String::from("180"))
        );
    }

    #[test]
    fn test_classify_single_point_without_next_is_empty() {
        let calc = EuclideanDistanceCalc;
        let single = instruction(&[(0.0, 0.0)]);

        assert_eq!(classify(&single, None, &calc), (String::new(), String::new()));
    }

    #[test]
    fn test_classify_is_idempotent() {
        let calc = EuclideanDistanceCalc;
        let diagonal = instruction(&[(0.0, 0.0), (7.0, 3.0)]);

        assert_eq!(
            classify(&diagonal, None, &calc),
            classify(&diagonal, None, &calc)
        );
    }
}
