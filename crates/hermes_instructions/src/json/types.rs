use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    annotation::InstructionAnnotation,
    distance_calc::DistanceCalc,
    error::InstructionError,
    geopoint::GeoPoint,
    instruction::{Instruction, Milliseconds},
    instruction_list::InstructionList,
    meters::Meters,
    point_list::PointList,
    turn::TurnCode,
};

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Route")]
pub struct JsonRoute {
    pub instructions: Vec<JsonInstruction>,
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Instruction")]
pub struct JsonInstruction {
    /// Turn code from -3 (sharp left) to 3 (sharp right), 4 finish, 5 reached via
    pub sign: i32,

    /// Name of the street being entered
    #[serde(default)]
    pub name: String,

    /// 1-based via point index, required when sign is 5
    pub via_position: Option<usize>,

    pub annotation: Option<InstructionAnnotation>,

    /// `[lon, lat]` or `[lon, lat, ele]`, the same arity for the whole route
    pub points: Vec<Vec<f64>>,

    /// Meters until the next instruction, computed from the points when absent
    pub distance: Option<f64>,

    /// Milliseconds until the next instruction
    #[serde(default)]
    pub time: Milliseconds,
}

impl JsonRoute {
    #[instrument(skip_all, level = "debug")]
    pub fn build_instruction_list(
        &self,
        calc: &impl DistanceCalc,
    ) -> Result<InstructionList, InstructionError> {
        let is_3d = self
            .instructions
            .iter()
            .flat_map(|instruction| instruction.points.first())
            .next()
            .is_some_and(|point| point.len() == 3);

        let mut point_lists = Vec::with_capacity(self.instructions.len());
        let mut offset = 0;
        for instruction in &self.instructions {
            point_lists.push(parse_points(&instruction.points, is_3d, offset)?);
            offset += instruction.points.len();
        }

        let mut instructions = Vec::with_capacity(self.instructions.len());
        for (index, (json, points)) in self.instructions.iter().zip(&point_lists).enumerate() {
            let turn = TurnCode::from_sign(json.sign, json.via_position)?;
            let next_first = point_lists.get(index + 1).and_then(|next| next.first());

            let mut builder = Instruction::builder(turn, json.name.clone(), points.clone())
                .annotation(json.annotation.clone().unwrap_or_default())
                .time(json.time);

            builder = match json.distance {
                Some(distance) => builder.distance(Meters::new(distance)),
                None => builder.compute_distance(next_first, calc),
            };

            let instruction = builder.build();
            if !instruction.distance().is_valid() {
                return Err(InstructionError::InvalidDistance {
                    instruction: instruction.to_string(),
                });
            }

            instructions.push(instruction);
        }

        let list = InstructionList::new(instructions);
        list.total_time()?;

        Ok(list)
    }
}

fn parse_points(
    coordinates: &[Vec<f64>],
    is_3d: bool,
    offset: usize,
) -> Result<PointList, InstructionError> {
    let mut points = PointList::with_capacity(coordinates.len(), is_3d);

    for (index, coordinate) in coordinates.iter().enumerate() {
        let invalid = |reason: &str| InstructionError::InvalidCoordinates {
            index: offset + index,
            reason: reason.to_owned(),
        };

        let point = match (coordinate.as_slice(), is_3d) {
            (&[lon, lat], false) => GeoPoint::new(lat, lon),
            (&[lon, lat, ele], true) => GeoPoint::with_elevation(lat, lon, ele),
            (&[_, _], true) | (&[_, _, _], false) => {
                return Err(invalid("mixed 2D and 3D points"));
            }
            _ => return Err(invalid("expected [lon, lat] or [lon, lat, ele]")),
        };

        if !(-90.0..=90.0).contains(&point.lat) || !(-180.0..=180.0).contains(&point.lon) {
            return Err(invalid("latitude or longitude out of range"));
        }

        match point.ele {
            Some(ele) => points.push_3d(point.lat, point.lon, ele),
            None => points.push(point.lat, point.lon),
        }
    }

    Ok(points)
}
