//! Weekly workout plan builder.
//!
//! The week is a fixed template: training on Monday, Wednesday, Friday and
//! Sunday, rest on the days between. Every training day gets the same
//! exercise list for the profile's goal. Fitness level is not consulted.

use crate::rules::exercises_for_goal;
use crate::types::{Profile, WeeklyPlan, Weekday, WorkoutDay};

/// Whether each day of the week, Monday first, is a rest day
const REST_DAYS: [(Weekday, bool); 7] = [
    (Weekday::Monday, false),
    (Weekday::Tuesday, true),
    (Weekday::Wednesday, false),
    (Weekday::Thursday, true),
    (Weekday::Friday, false),
    (Weekday::Saturday, true),
    (Weekday::Sunday, false),
];

/// Build the weekly workout plan for a profile
pub fn generate_workout_plan(profile: &Profile) -> WeeklyPlan {
    let exercises = exercises_for_goal(profile.goal);

    let days = REST_DAYS
        .iter()
        .map(|&(day, rest)| WorkoutDay {
            day,
            rest,
            exercises: if rest { Vec::new() } else { exercises.to_vec() },
        })
        .collect();

    tracing::debug!(
        "Generated workout plan for {:?} ({} exercises per training day)",
        profile.goal,
        exercises.len()
    );

    WeeklyPlan { days }
}
