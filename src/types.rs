use std::fmt;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::lenient;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkoutPlan {
    #[serde(default, deserialize_with = "lenient::record")]
    pub weekly_schedule: Option<WeeklySchedule>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub explanation: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub disclaimer: Option<String>,
}

/// One optional [DayBlock] per weekday. Any other key is ignored.
///
/// A day set to something other than an object (`"Monday": "rest"`) is still scheduled, with an empty block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeeklySchedule {
    #[serde(rename = "Monday", default, deserialize_with = "lenient::record")]
    pub monday: Option<DayBlock>,
    #[serde(rename = "Tuesday", default, deserialize_with = "lenient::record")]
    pub tuesday: Option<DayBlock>,
    #[serde(rename = "Wednesday", default, deserialize_with = "lenient::record")]
    pub wednesday: Option<DayBlock>,
    #[serde(rename = "Thursday", default, deserialize_with = "lenient::record")]
    pub thursday: Option<DayBlock>,
    #[serde(rename = "Friday", default, deserialize_with = "lenient::record")]
    pub friday: Option<DayBlock>,
    #[serde(rename = "Saturday", default, deserialize_with = "lenient::record")]
    pub saturday: Option<DayBlock>,
    #[serde(rename = "Sunday", default, deserialize_with = "lenient::record")]
    pub sunday: Option<DayBlock>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DayBlock {
    #[serde(default, deserialize_with = "lenient::text")]
    pub workout_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::sequence")]
    pub exercises: Option<Vec<Exercise>>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::scalar")]
    pub sets: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient::scalar")]
    pub reps: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub duration: Option<String>,
}

/// The value of `sets` and `reps`, which plans carry either as a number or as text (`"8-12"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(Number),
    Text(String),
}
impl Scalar {
    /// Zero and the empty string count as "not set".
    pub fn is_set(&self) -> bool {
        match self {
            Scalar::Number(n) => n.as_f64().map_or(true, |v| v != 0.0),
            Scalar::Text(s) => !s.is_empty(),
        }
    }
}
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => match n.as_f64() {
                // `3.0` is written `3`, the way a browser prints it.
                Some(v) if n.is_f64() && v.fract() == 0.0 && v.abs() < 1e15 => {
                    write!(f, "{v:.0}")
                }
                _ => write!(f, "{n}"),
            },
        }
    }
}
impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value.into())
    }
}
impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

impl WeeklySchedule {
    pub fn day(&self, day: Weekday) -> Option<&DayBlock> {
        match day {
            Weekday::Mon => self.monday.as_ref(),
            Weekday::Tue => self.tuesday.as_ref(),
            Weekday::Wed => self.wednesday.as_ref(),
            Weekday::Thu => self.thursday.as_ref(),
            Weekday::Fri => self.friday.as_ref(),
            Weekday::Sat => self.saturday.as_ref(),
            Weekday::Sun => self.sunday.as_ref(),
        }
    }
    pub fn day_mut(&mut self, day: Weekday) -> &mut Option<DayBlock> {
        match day {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        }
    }

    /// The scheduled days, always Monday first.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DayBlock)> {
        WEEKDAYS
            .into_iter()
            .filter_map(move |day| Some((day, self.day(day)?)))
    }
}

impl WorkoutPlan {
    /// Anything that isn't an object decodes to `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(_) => serde_json::from_value(value).ok(),
            _ => None,
        }
    }
}

/// A plan as it is handed around by the coaching API, with its active window if known.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlanDocument {
    pub plan: Option<WorkoutPlan>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

const WRAPPER_KEYS: [&str; 3] = ["data", "result", "payload"];

impl PlanDocument {
    /// Accepts a bare plan, an API envelope (`{"type": .., "plan": .., "start_date": ..}`),
    /// or either of those nested once under `data`, `result` or `payload`.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(object) = value else {
            log::debug!("Plan document is not an object");
            return Self::default();
        };
        let mut object = unwrap_payload(object);

        if object.contains_key("weekly_schedule") || !object.contains_key("plan") {
            return Self {
                plan: WorkoutPlan::from_value(Value::Object(object)),
                ..Self::default()
            };
        }

        let date = |object: &Map<String, Value>, key: &str| {
            object
                .get(key)
                .and_then(|v| v.as_str())
                .and_then(lenient::parse_date)
        };
        Self {
            start_date: date(&object, "start_date"),
            end_date: date(&object, "end_date"),
            plan: object.remove("plan").and_then(WorkoutPlan::from_value),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::from_value(serde_json::from_str(json)?))
    }
}

fn unwrap_payload(mut object: Map<String, Value>) -> Map<String, Value> {
    for key in WRAPPER_KEYS {
        if let Some(Value::Object(_)) = object.get(key) {
            if let Some(Value::Object(inner)) = object.remove(key) {
                return inner;
            }
        }
    }
    object
}

impl From<WorkoutPlan> for PlanDocument {
    fn from(plan: WorkoutPlan) -> Self {
        Self {
            plan: Some(plan),
            ..Self::default()
        }
    }
}
