//! CSV export of a stored week.
//!
//! One row per weekday combining the workout and the meals, with the day's
//! nutrition totals. Either plan may be missing; its columns are left empty.

use crate::{Result, WeeklyMealPlan, WeeklyPlan, Weekday};
use std::fs::File;
use std::path::Path;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    day: &'static str,
    rest: Option<bool>,
    exercises: String,
    breakfast: Option<String>,
    lunch: Option<String>,
    dinner: Option<String>,
    dessert: Option<String>,
    calories: Option<u64>,
    protein: Option<u64>,
    carbs: Option<u64>,
    fat: Option<u64>,
}

impl CsvRow {
    fn build(day: Weekday, workout: Option<&WeeklyPlan>, meals: Option<&WeeklyMealPlan>) -> Self {
        let workout_day = workout.and_then(|w| w.day(day));
        let meal_day = meals.and_then(|m| m.day(day));
        let totals = meal_day.map(|m| m.totals());

        CsvRow {
            day: day.name(),
            rest: workout_day.map(|w| w.rest),
            exercises: workout_day
                .map(|w| {
                    w.exercises
                        .iter()
                        .map(|e| e.name.as_str())
                        .collect::<Vec<_>>()
                        .join("; ")
                })
                .unwrap_or_default(),
            breakfast: meal_day.map(|m| m.breakfast.name.clone()),
            lunch: meal_day.map(|m| m.lunch.name.clone()),
            dinner: meal_day.map(|m| m.dinner.name.clone()),
            dessert: meal_day.and_then(|m| m.dessert.as_ref().map(|d| d.name.clone())),
            calories: totals.map(|t| t.calories),
            protein: totals.map(|t| t.protein),
            carbs: totals.map(|t| t.carbs),
            fat: totals.map(|t| t.fat),
        }
    }
}

/// Write the week to `path` as CSV with a header row
///
/// The file is created (or truncated), flushed and synced. Returns the
/// number of rows written.
pub fn export_week_csv(
    workout: Option<&WeeklyPlan>,
    meals: Option<&WeeklyMealPlan>,
    path: &Path,
) -> Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new().has_headers(true).from_writer(file);

    let mut count = 0;
    for day in Weekday::ALL {
        writer.serialize(CsvRow::build(day, workout, meals))?;
        count += 1;
    }

    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    file.sync_all()?;

    tracing::info!("Exported {} days to {:?}", count, path);
    Ok(count)
}
