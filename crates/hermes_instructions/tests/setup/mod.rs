use hermes_instructions::{
    distance_calc::HaversineDistanceCalc,
    geopoint::GeoPoint,
    instruction::{Instruction, Milliseconds},
    instruction_list::InstructionList,
    json::types::JsonRoute,
    point_list::PointList,
    turn::TurnCode,
};

pub fn load_fixture_route() -> InstructionList {
    let content = include_str!("../fixtures/brussels_route.json");
    let route: JsonRoute = serde_json::from_str(content).unwrap();
    route
        .build_instruction_list(&HaversineDistanceCalc)
        .unwrap()
}

/// Instruction over `(lat, lon)` points whose distance is computed up to the
/// first point of the next instruction.
pub fn create_instruction(
    turn: TurnCode,
    name: &str,
    points: &[(f64, f64)],
    next_first: Option<(f64, f64)>,
    time: Milliseconds,
) -> Instruction {
    let next_first = next_first.map(|(lat, lon)| GeoPoint::new(lat, lon));
    Instruction::builder(turn, name, PointList::from_lat_lon(points))
        .compute_distance(next_first.as_ref(), &HaversineDistanceCalc)
        .time(time)
        .build()
}
