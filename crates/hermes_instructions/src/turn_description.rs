use crate::{instruction::Instruction, translation::Translation, turn::TurnCode};

impl Instruction {
    /// The sentence to show the driver for this instruction.
    pub fn turn_description(&self, tr: &impl Translation) -> String {
        describe(self.turn(), self.name(), tr)
    }
}

pub fn describe(turn: TurnCode, name: &str, tr: &impl Translation) -> String {
    let direction_key = match turn {
        TurnCode::Finish => return tr.tr("finish", &[]),
        TurnCode::ReachedVia { via_position } => return tr.tr("stopover", &[&via_position]),
        TurnCode::Continue if name.is_empty() => return tr.tr("continue", &[]),
        TurnCode::Continue => return tr.tr("continue_onto", &[&name]),
        TurnCode::SharpLeft => "sharp_left",
        TurnCode::Left => "left",
        TurnCode::SlightLeft => "slight_left",
        TurnCode::SlightRight => "slight_right",
        TurnCode::Right => "right",
        TurnCode::SharpRight => "sharp_right",
    };

    let dir = tr.tr(direction_key, &[]);
    if name.is_empty() {
        tr.tr("turn", &[&dir])
    } else {
        tr.tr("turn_onto", &[&dir, &name])
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Display;

    use super::*;
    use crate::{meters::Meters, point_list::PointList, translation::TranslationMap};

    /// Renders `key(param,param)` so tests can check which key got which arguments.
    struct KeyTranslation;

    impl Translation for KeyTranslation {
        fn tr(&self, key: &str, params: &[&dyn Display]) -> String {
            if params.is_empty() {
                return key.to_owned();
            }

            let params = params
                .iter()
                .map(|param| param.to_string())
                .collect::<Vec<_>>()
                .join(",");
            format!("{key}({params})")
        }

        fn locale(&self) -> &str {
            "keys"
        }
    }

    fn instruction(turn: TurnCode, name: &str) -> Instruction {
        Instruction::builder(turn, name, PointList::from_lat_lon(&[(50.0, 4.0)]))
            .distance(Meters::new(10.0))
            .time(1000)
            .build()
    }

    #[test]
    fn test_continue() {
        assert_eq!(
            instruction(TurnCode::Continue, "").turn_description(&KeyTranslation),
            "continue"
        );
        assert_eq!(
            instruction(TurnCode::Continue, "Main St").turn_description(&KeyTranslation),
            "continue_onto(Main St)"
        );
    }

    #[test]
    fn test_turns() {
        assert_eq!(
            instruction(TurnCode::Left, "Oak Ave").turn_description(&KeyTranslation),
            "turn_onto(left,Oak Ave)"
        );
        assert_eq!(
            instruction(TurnCode::Left, "").turn_description(&KeyTranslation),
            "turn(left)"
        );
        assert_eq!(
            instruction(TurnCode::SharpRight, "").turn_description(&KeyTranslation),
            "turn(sharp_right)"
        );
        assert_eq!(
            instruction(TurnCode::SlightLeft, "A12").turn_description(&KeyTranslation),
            "turn_onto(slight_left,A12)"
        );
    }

    #[test]
    fn test_finish_and_stopover() {
        assert_eq!(
            instruction(TurnCode::Finish, "ignored").turn_description(&KeyTranslation),
            "finish"
        );
        assert_eq!(
            instruction(TurnCode::ReachedVia { via_position: 2 }, "")
                .turn_description(&KeyTranslation),
            "stopover(2)"
        );
    }

    #[test]
    fn test_english_sentences() {
        let tr = TranslationMap::for_locale("en");

        assert_eq!(
            instruction(TurnCode::Left, "Oak Ave").turn_description(&tr),
            "turn left onto Oak Ave"
        );
        assert_eq!(
            instruction(TurnCode::SharpRight, "").turn_description(&tr),
            "turn sharp right"
        );
        assert_eq!(
            instruction(TurnCode::Continue, "Main St").turn_description(&tr),
            "continue onto Main St"
        );
        assert_eq!(
            instruction(TurnCode::ReachedVia { via_position: 1 }, "").turn_description(&tr),
            "stopover 1"
        );
        assert_eq!(instruction(TurnCode::Finish, "").turn_description(&tr), "finish!");
    }

    #[test]
    fn test_german_sentences() {
        let tr = TranslationMap::for_locale("de");

        assert_eq!(
            instruction(TurnCode::Right, "Hauptstraße").turn_description(&tr),
            "rechts abbiegen auf Hauptstraße"
        );
    }
}
