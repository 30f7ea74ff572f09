mod lenient;

pub mod files;
pub mod gen;
pub mod types;

pub use gen::format_workout_plan;
pub use types::{DayBlock, Exercise, PlanDocument, Scalar, WeeklySchedule, WorkoutPlan};
