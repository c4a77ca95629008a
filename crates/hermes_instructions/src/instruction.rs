use std::fmt::Display;

use crate::{
    annotation::InstructionAnnotation,
    compass::{self, CompassPoint},
    distance_calc::DistanceCalc,
    error::InstructionError,
    geopoint::GeoPoint,
    meters::Meters,
    point_list::PointList,
    turn::TurnCode,
};

pub type Milliseconds = u64;

/// One maneuver of a route.
///
/// The points and the per-segment times have the same count: the last point
/// of the span is not stored here, it is the first point of the next
/// instruction.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    turn: TurnCode,
    name: String,
    annotation: InstructionAnnotation,
    points: PointList,
    distance: Meters,
    time: Milliseconds,
}

impl Instruction {
    pub fn builder(turn: TurnCode, name: impl Into<String>, points: PointList) -> InstructionBuilder {
        InstructionBuilder::new(turn, name, points)
    }

    /// Final instruction of a route, a single point where the route ends.
    pub fn finish(point: GeoPoint) -> Instruction {
        let mut points = PointList::with_capacity(1, point.ele.is_some());
        match point.ele {
            Some(ele) => points.push_3d(point.lat, point.lon, ele),
            None => points.push(point.lat, point.lon),
        }

        InstructionBuilder::new(TurnCode::Finish, "", points).build()
    }

    pub fn turn(&self) -> TurnCode {
        self.turn
    }

    pub fn sign(&self) -> i32 {
        self.turn.sign()
    }

    /// Street or path being entered, empty when unnamed.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn annotation(&self) -> &InstructionAnnotation {
        &self.annotation
    }

    pub fn points(&self) -> &PointList {
        &self.points
    }

    /// Distance in meters until the next instruction.
    pub fn distance(&self) -> Meters {
        self.distance
    }

    /// Time until the next instruction.
    pub fn time(&self) -> Milliseconds {
        self.time
    }

    /// Location where this instruction takes place.
    pub fn first_point(&self) -> Result<&GeoPoint, InstructionError> {
        self.points.first().ok_or_else(|| self.empty_error())
    }

    pub(crate) fn ensure_points(&self) -> Result<(), InstructionError> {
        if self.points.is_empty() {
            return Err(self.empty_error());
        }

        Ok(())
    }

    fn empty_error(&self) -> InstructionError {
        InstructionError::EmptyInstruction {
            instruction: self.to_string(),
        }
    }

    /// Bearing of the first segment, borrowing the first point of `next` when
    /// this instruction has a single point.
    pub fn calc_azimuth(&self, next: Option<&Instruction>, calc: &impl DistanceCalc) -> Option<f64> {
        let next_point = if self.points.size() >= 2 {
            self.points.point(1)
        } else if self.points.size() == 1 {
            next.and_then(|next| next.points.first())
        } else {
            None
        }?;

        let first = self.points.first()?;
        Some(calc.bearing(first, next_point))
    }

    /// Compass label of the first segment or an empty string.
    pub fn direction(&self, next: Option<&Instruction>, calc: &impl DistanceCalc) -> String {
        self.calc_azimuth(next, calc)
            .map(|azimuth| CompassPoint::from_azimuth(azimuth).to_string())
            .unwrap_or_default()
    }

    /// Rounded bearing of the first segment or an empty string.
    pub fn azimuth(&self, next: Option<&Instruction>, calc: &impl DistanceCalc) -> String {
        self.calc_azimuth(next, calc)
            .map(compass::format_azimuth)
            .unwrap_or_default()
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({},{},{},{})",
            self.turn.sign(),
            self.name,
            self.distance,
            self.time
        )
    }
}

/// Geometry goes in first, the totals are set once, then [`build`](Self::build)
/// hands out the immutable instruction.
pub struct InstructionBuilder {
    turn: TurnCode,
    name: String,
    annotation: InstructionAnnotation,
    points: PointList,
    distance: Meters,
    time: Milliseconds,
}

impl InstructionBuilder {
    pub fn new(turn: TurnCode, name: impl Into<String>, points: PointList) -> Self {
        InstructionBuilder {
            turn,
            name: name.into(),
            annotation: InstructionAnnotation::empty(),
            points,
            distance: Meters::ZERO,
            time: 0,
        }
    }

    pub fn annotation(mut self, annotation: InstructionAnnotation) -> Self {
        self.annotation = annotation;
        self
    }

    pub fn distance(mut self, distance: Meters) -> Self {
        self.distance = distance;
        self
    }

    pub fn time(mut self, time: Milliseconds) -> Self {
        self.time = time;
        self
    }

    /// Sums the segment distances of the points, including the segment to
    /// `next_first` when the span continues into another instruction.
    pub fn compute_distance(mut self, next_first: Option<&GeoPoint>, calc: &impl DistanceCalc) -> Self {
        let is_3d = self.points.is_3d();
        let segment = |from: &GeoPoint, to: &GeoPoint| {
            if is_3d {
                calc.distance_3d(from, to)
            } else {
                calc.distance_2d(from, to)
            }
        };

        let points = self.points.as_slice();
        let mut distance: Meters = points
            .windows(2)
            .map(|pair| segment(&pair[0], &pair[1]))
            .sum();

        if let (Some(last), Some(next_first)) = (points.last(), next_first) {
            distance += segment(last, next_first);
        }

        self.distance = distance;
        self
    }

    pub fn build(self) -> Instruction {
        Instruction {
            turn: self.turn,
            name: self.name,
            annotation: self.annotation,
            points: self.points,
            distance: self.distance,
            time: self.time,
        }
    }
}
