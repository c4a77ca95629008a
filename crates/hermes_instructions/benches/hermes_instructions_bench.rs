use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use hermes_instructions::{
    distance_calc::HaversineDistanceCalc,
    geopoint::GeoPoint,
    instruction::Instruction,
    instruction_list::InstructionList,
    point_list::PointList,
    translation::TranslationMap,
    turn::TurnCode,
};

const TURNS: [TurnCode; 4] = [
    TurnCode::Continue,
    TurnCode::Left,
    TurnCode::SlightRight,
    TurnCode::SharpLeft,
];

/// Zig-zag route of `instructions` steps with `points_per_instruction` points each.
fn create_route(instructions: usize, points_per_instruction: usize) -> InstructionList {
    let calc = HaversineDistanceCalc;
    let point = |index: usize| {
        let lat = 50.0 + index as f64 * 0.0005;
        let lon = 4.0 + if index % 2 == 0 { 0.0 } else { 0.0003 };
        (lat, lon)
    };

    let mut list = InstructionList::default();
    for step in 0..instructions {
        let first = step * points_per_instruction;
        let coordinates = (first..first + points_per_instruction)
            .map(point)
            .collect::<Vec<_>>();
        let (next_lat, next_lon) = point(first + points_per_instruction);
        let next_first = GeoPoint::new(next_lat, next_lon);

        list.push(
            Instruction::builder(
                TURNS[step % TURNS.len()],
                format!("Street {step}"),
                PointList::from_lat_lon(&coordinates),
            )
            .compute_distance(Some(&next_first), &calc)
            .time(10_000 * points_per_instruction as u64)
            .build(),
        );
    }

    let (lat, lon) = point(instructions * points_per_instruction);
    list.push(Instruction::finish(GeoPoint::new(lat, lon)));
    list
}

fn trace_benchmark(c: &mut Criterion) {
    let route = create_route(200, 25);
    let calc = HaversineDistanceCalc;

    c.bench_function("create trace (200 x 25 points)", |b| {
        b.iter(|| black_box(&route).create_trace(&calc))
    });
}

fn maneuvers_benchmark(c: &mut Criterion) {
    let route = create_route(200, 2);
    let calc = HaversineDistanceCalc;
    let tr = TranslationMap::for_locale("en");

    c.bench_function("create maneuvers (200)", |b| {
        b.iter(|| black_box(&route).create_maneuvers(&tr, &calc))
    });
}

criterion_group!(benches, trace_benchmark, maneuvers_benchmark);
criterion_main!(benches);
