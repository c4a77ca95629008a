pub mod annotation;
pub mod compass;
pub mod distance_calc;
pub mod error;
pub mod geopoint;
pub mod instruction;
pub mod instruction_list;
pub mod json;
pub mod meters;
pub mod point_list;
pub mod trace;
pub mod translation;
pub mod turn;
pub mod turn_description;
