use std::ops::Index;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    distance_calc::DistanceCalc,
    error::InstructionError,
    instruction::{Instruction, Milliseconds},
    meters::Meters,
    trace::{self, TraceSample},
    translation::Translation,
};

/// Instructions of one route in driving order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstructionList {
    instructions: Vec<Instruction>,
}

/// An instruction rendered for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Maneuver {
    pub text: String,
    pub sign: i32,
    pub street_name: String,
    pub distance: Meters,
    pub time: Milliseconds,
    /// First and last index of the maneuver in the route geometry.
    pub interval: [usize; 2],
    pub direction: String,
    pub azimuth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via_position: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation_importance: Option<i32>,
}

impl InstructionList {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        InstructionList { instructions }
    }

    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    pub fn total_distance(&self) -> Meters {
        self.instructions.iter().map(|i| i.distance()).sum()
    }

    pub fn total_time(&self) -> Result<Milliseconds, InstructionError> {
        self.instructions.iter().try_fold(0, |total: Milliseconds, instruction| {
            total
                .checked_add(instruction.time())
                .ok_or_else(|| InstructionError::TimeOverflow {
                    instruction: instruction.to_string(),
                })
        })
    }

    pub fn total_points(&self) -> usize {
        self.instructions.iter().map(|i| i.points().size()).sum()
    }

    pub fn create_trace(&self, calc: &impl DistanceCalc) -> Result<Vec<TraceSample>, InstructionError> {
        self.create_trace_from(0, calc)
    }

    /// Timestamped samples of the whole route, one per point.
    ///
    /// Each instruction starts at the exact end time of the previous one. The
    /// last instruction has no successor, so its own last point closes the
    /// trace.
    #[instrument(skip_all, level = "debug", fields(instructions = self.instructions.len()))]
    pub fn create_trace_from(
        &self,
        start_time: Milliseconds,
        calc: &impl DistanceCalc,
    ) -> Result<Vec<TraceSample>, InstructionError> {
        let (samples, end_time) = self.instructions.iter().enumerate().try_fold(
            (Vec::with_capacity(self.total_points()), start_time),
            |(mut samples, start), (index, instruction)| {
                let prev = index.checked_sub(1).and_then(|prev| self.instructions.get(prev));
                let next = self.instructions.get(index + 1);

                let (instruction_samples, next_start) =
                    trace::interpolate(instruction, start, prev, next, prev.is_none(), calc)?;
                samples.extend(instruction_samples);

                Ok::<_, InstructionError>((samples, next_start))
            },
        )?;

        debug!(
            "Created trace with {} samples ending at {}",
            samples.len(),
            end_time
        );

        Ok(samples)
    }

    pub fn create_maneuvers(
        &self,
        tr: &impl Translation,
        calc: &impl DistanceCalc,
    ) -> Vec<Maneuver> {
        let mut points_index = 0;
        let mut maneuvers = Vec::with_capacity(self.instructions.len());

        for (index, instruction) in self.instructions.iter().enumerate() {
            let next = self.instructions.get(index + 1);

            let mut end_index = points_index + instruction.points().size();
            // the last instruction does not reach into a next one
            if next.is_none() {
                end_index = end_index.saturating_sub(1);
            }

            let annotation = instruction.annotation();
            let (annotation_text, annotation_importance) = if annotation.is_empty() {
                (None, None)
            } else {
                (Some(annotation.message.clone()), Some(annotation.importance))
            };

            maneuvers.push(Maneuver {
                text: instruction.turn_description(tr),
                sign: instruction.sign(),
                street_name: instruction.name().to_owned(),
                distance: instruction.distance(),
                time: instruction.time(),
                interval: [points_index, end_index],
                direction: instruction.direction(next, calc),
                azimuth: instruction.azimuth(next, calc),
                via_position: instruction.turn().via_position(),
                annotation_text,
                annotation_importance,
            });

            points_index = end_index;
        }

        maneuvers
    }
}

impl Index<usize> for InstructionList {
    type Output = Instruction;

    fn index(&self, index: usize) -> &Self::Output {
        &self.instructions[index]
    }
}

impl From<Vec<Instruction>> for InstructionList {
    fn from(instructions: Vec<Instruction>) -> Self {
        InstructionList::new(instructions)
    }
}

impl<'a> IntoIterator for &'a InstructionList {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}
