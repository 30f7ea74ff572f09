
mod escape;

pub mod html;

pub use escape::{encode_html, encode_optional_html, Escaped};

use crate::types::{day_name, DayBlock, Exercise, Scalar, WorkoutPlan};

pub const NO_PLAN: &str = r##"<div class="no-plan">No workout plan available.</div>"##;
pub const HEADING: &str = "Weekly Workout Plan";
pub const DEFAULT_DISCLAIMER: &str =
    "Consult a professional before starting a new exercise program.";

/// Renders the plan as an HTML fragment.
///
/// Never fails: a missing plan, or one without a weekly schedule, renders [NO_PLAN],
/// and any other missing field is simply left out.
pub fn format_workout_plan(plan: Option<&WorkoutPlan>) -> String {
    let Some(WorkoutPlan {
        weekly_schedule: Some(schedule),
        explanation,
        disclaimer,
    }) = plan
    else {
        log::debug!("No weekly schedule, rendering the empty plan placeholder");
        return NO_PLAN.to_string();
    };

    let days: String = schedule
        .days()
        .map(|(day, block)| raw_day_section(day_name(day), block))
        .collect();

    let explanation = explanation
        .as_deref()
        .map(encode_html)
        .map(|v| format!(r##"<div class="explanation"><h4>Explanation</h4><p>{v}</p></div>"##))
        .unwrap_or_default();

    let disclaimer = encode_html(disclaimer.as_deref().unwrap_or(DEFAULT_DISCLAIMER));

    format!(
        r##"<div class="workout-plan"><h3>{HEADING}</h3>{days}{explanation}<div class="disclaimer">Disclaimer: {disclaimer}</div></div>"##
    )
}

impl WorkoutPlan {
    pub fn to_html_fragment(&self) -> String {
        format_workout_plan(Some(self))
    }
}

fn raw_day_section(day: &str, block: &DayBlock) -> String {
    let DayBlock {
        workout_type,
        exercises,
        notes,
    } = block;

    let workout_type = encode_optional_html(workout_type.as_deref());

    let body = match (exercises.as_deref(), notes) {
        (Some(exercises), _) if !exercises.is_empty() => {
            let items: String = exercises.iter().map(raw_exercise_item).collect();
            format!(r##"<ul class="exercises">{items}</ul>"##)
        }
        (_, Some(notes)) => {
            let notes = encode_html(notes);
            format!(r##"<p class="notes">{notes}</p>"##)
        }
        _ => String::new(),
    };

    format!(r##"<section class="workout-day"><h4>{day} — {workout_type}</h4>{body}</section>"##)
}

fn raw_exercise_item(exercise: &Exercise) -> String {
    let Exercise {
        name,
        sets,
        reps,
        duration,
    } = exercise;

    let name = encode_optional_html(name.as_deref());

    let sets = set_scheme(sets.as_ref(), reps.as_ref())
        .map(|v| format!(" — {v}"))
        .unwrap_or_default();

    let duration = duration
        .as_deref()
        .map(|v| format!(" — {}", encode_html(v)))
        .unwrap_or_default();

    format!(r##"<li class="exercise"><strong>{name}</strong>{sets}{duration}</li>"##)
}

/// `3 x 12`, or `3 x` without reps. Escaped.
fn set_scheme(sets: Option<&Scalar>, reps: Option<&Scalar>) -> Option<String> {
    let sets = sets.filter(|s| s.is_set())?;
    let reps = reps.filter(|r| r.is_set());

    let scheme = match reps {
        Some(reps) => format!("{} x {}", Escaped(sets), Escaped(reps)),
        None => format!("{} x", Escaped(sets)),
    };

    Some(scheme.trim().to_string())
}
