use serde::Serialize;
use tracing::debug;

use crate::{
    distance_calc::DistanceCalc,
    error::InstructionError,
    geopoint::GeoPoint,
    instruction::{Instruction, Milliseconds},
};

/// A position of the trace and the time it is reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TraceSample {
    pub lat: f64,
    pub lon: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ele: Option<f64>,
    pub time: Milliseconds,
}

impl TraceSample {
    pub fn new(point: &GeoPoint, is_3d: bool, time: Milliseconds) -> Self {
        TraceSample {
            lat: point.lat,
            lon: point.lon,
            ele: if is_3d { Some(point.elevation()) } else { None },
            time,
        }
    }
}

/// Samples of every point of `instruction`, starting at `start_time`.
///
/// The time of the instruction is spread over its segments in proportion to
/// their length; the last segment ends at the first point of `next`, which is
/// not emitted here. Without `next` the last point gets no segment.
///
/// Returns the samples and the start time of the next instruction, which is
/// always `start_time + time` regardless of the rounding of the samples.
pub fn interpolate(
    instruction: &Instruction,
    start_time: Milliseconds,
    prev: Option<&Instruction>,
    next: Option<&Instruction>,
    is_first: bool,
    calc: &impl DistanceCalc,
) -> Result<(Vec<TraceSample>, Milliseconds), InstructionError> {
    instruction.ensure_points()?;

    let next_first = next.map(|next| next.first_point()).transpose()?;
    let distance = instruction.distance();
    let time = instruction.time();

    if time != 0 && distance.is_zero() {
        return Err(InstructionError::ZeroDistance {
            instruction: instruction.to_string(),
        });
    }

    if time != 0 && !distance.is_valid() {
        return Err(InstructionError::InvalidDistance {
            instruction: instruction.to_string(),
        });
    }

    let overflow = || InstructionError::TimeOverflow {
        instruction: instruction.to_string(),
    };
    let end_time = start_time.checked_add(time).ok_or_else(overflow)?;

    debug!(
        "Interpolating {} from {} (first = {}, after {:?})",
        instruction,
        start_time,
        is_first,
        prev.map(|prev| prev.sign())
    );

    let points = instruction.points();
    let is_3d = points.is_3d();
    let mut samples = Vec::with_capacity(points.size());
    let mut elapsed = start_time;

    for (i, point) in points.iter().enumerate() {
        samples.push(TraceSample::new(point, is_3d, elapsed));

        let Some(successor) = points.point(i + 1).or(next_first) else {
            break;
        };

        if time == 0 {
            continue;
        }

        let segment = if is_3d {
            calc.distance_3d(point, successor)
        } else {
            calc.distance_2d(point, successor)
        };

        let step = (time as f64 * segment.value() / distance.value()).round() as Milliseconds;
        elapsed = elapsed.checked_add(step).ok_or_else(overflow)?;
    }

    Ok((samples, end_time))
}
