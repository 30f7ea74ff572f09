use chrono::NaiveDate;

use crate::types::{PlanDocument, WorkoutPlan};

use super::{format_workout_plan, HEADING};

const STYLE: &str = include_str!("plan.css");

impl PlanDocument {
    pub fn to_single_html_page(&self) -> String {
        let window = plan_window(self.start_date, self.end_date);
        wrap_html(window.as_deref(), &format_workout_plan(self.plan.as_ref()))
    }
}

impl WorkoutPlan {
    pub fn to_single_html_page(&self) -> String {
        wrap_html(None, &self.to_html_fragment())
    }
}

/// `May 6, 2024 – May 12, 2024`, when both ends are known.
fn plan_window(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<String> {
    let (start, end) = (start?, end?);
    let start = start.format("%B %-d, %Y");
    let end = end.format("%B %-d, %Y");
    Some(format!("{start} – {end}"))
}

fn wrap_html(window: Option<&str>, plan: &str) -> String {
    let title = match window {
        Some(window) => format!("{HEADING} ({window})"),
        None => HEADING.to_string(),
    };
    let header = window
        .map(|window| format!(r##"<header class="plan-window">Active {window}</header>"##))
        .unwrap_or_default();

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta charset="utf-8"/>
        <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
        <title>{title}</title>
        <style>
            {STYLE}
        </style>
    </head>
    <body>
        <main class="plan-page">
            {header}
            {plan}
        </main>
    </body>
</html>
"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_needs_both_dates() {
        let start = NaiveDate::from_ymd_opt(2024, 5, 6);
        let end = NaiveDate::from_ymd_opt(2024, 5, 12);

        assert_eq!(
            plan_window(start, end).as_deref(),
            Some("May 6, 2024 – May 12, 2024")
        );
        assert_eq!(plan_window(start, None), None);
        assert_eq!(plan_window(None, end), None);
    }

    #[test]
    fn window_goes_into_title_and_header() {
        let document = PlanDocument {
            start_date: NaiveDate::from_ymd_opt(2024, 5, 6),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 12),
            ..PlanDocument::default()
        };
        let page = document.to_single_html_page();

        assert!(page.contains("<title>Weekly Workout Plan (May 6, 2024 – May 12, 2024)</title>"));
        assert!(page.contains(
            r#"<header class="plan-window">Active May 6, 2024 – May 12, 2024</header>"#
        ));
    }

    #[test]
    fn page_embeds_the_fragment() {
        let page = PlanDocument::default().to_single_html_page();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Weekly Workout Plan</title>"));
        assert!(page.contains(crate::gen::NO_PLAN));
        assert!(page.contains(".workout-day"));
        assert!(!page.contains("<header"));
    }

    #[test]
    fn plan_page() {
        let plan = WorkoutPlan {
            weekly_schedule: Some(Default::default()),
            ..WorkoutPlan::default()
        };
        let page = plan.to_single_html_page();

        assert!(page.contains(&plan.to_html_fragment()));
        assert!(page.contains(r#"<div class="workout-plan">"#));
    }
}
