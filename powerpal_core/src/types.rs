//! Core domain types for Powerpal.
//!
//! This module defines the fundamental types used throughout the system:
//! - The user profile and its enumerations (fitness level, goal)
//! - Exercises and the weekly workout plan
//! - Meals and the weekly meal plan

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Youngest age accepted at onboarding
pub const MIN_AGE: u32 = 10;

/// Oldest age accepted at onboarding
pub const MAX_AGE: u32 = 120;

// ============================================================================
// Weekdays
// ============================================================================

/// Day of the week, Monday first
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days in plan order
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Position in the week (Monday = 0)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Parse a day name or its three-letter abbreviation, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        let lowered = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|day| {
            let name = day.name().to_lowercase();
            lowered == name || lowered == name[..3]
        })
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

// ============================================================================
// Profile Types
// ============================================================================

/// Lowercase a tag and drop separators so `weightLoss`, `weight_loss` and
/// `Weight Loss` compare equal.
fn normalize_tag(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Self-assessed training experience
///
/// Stored on the profile but not consulted by the workout template.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum FitnessLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub const ALL: [FitnessLevel; 3] = [
        FitnessLevel::Beginner,
        FitnessLevel::Intermediate,
        FitnessLevel::Advanced,
    ];

    /// Strict parse; `None` for anything outside the known set
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_tag(s).as_str() {
            "beginner" => Some(FitnessLevel::Beginner),
            "intermediate" => Some(FitnessLevel::Intermediate),
            "advanced" => Some(FitnessLevel::Advanced),
            _ => None,
        }
    }

    /// Parse, substituting the default level for unknown values
    pub fn parse_lenient(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            tracing::debug!("Unknown fitness level {:?}, using beginner", s);
            Self::default()
        })
    }

    pub fn label(self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
            FitnessLevel::Advanced => "Advanced",
        }
    }
}

impl From<String> for FitnessLevel {
    fn from(s: String) -> Self {
        Self::parse_lenient(&s)
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fitness objective driving both rule tables
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum FitnessGoal {
    WeightLoss,
    MuscleGain,
    Endurance,
    Flexibility,
    #[default]
    GeneralFitness,
}

impl FitnessGoal {
    pub const ALL: [FitnessGoal; 5] = [
        FitnessGoal::WeightLoss,
        FitnessGoal::MuscleGain,
        FitnessGoal::Endurance,
        FitnessGoal::Flexibility,
        FitnessGoal::GeneralFitness,
    ];

    /// Strict parse; `None` for anything outside the known set
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_tag(s).as_str() {
            "weightloss" => Some(FitnessGoal::WeightLoss),
            "musclegain" => Some(FitnessGoal::MuscleGain),
            "endurance" => Some(FitnessGoal::Endurance),
            "flexibility" => Some(FitnessGoal::Flexibility),
            "generalfitness" => Some(FitnessGoal::GeneralFitness),
            _ => None,
        }
    }

    /// Parse, substituting general fitness for unknown values
    pub fn parse_lenient(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            tracing::debug!("Unknown fitness goal {:?}, using general fitness", s);
            Self::default()
        })
    }

    pub fn label(self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "Weight Loss",
            FitnessGoal::MuscleGain => "Muscle Gain",
            FitnessGoal::Endurance => "Endurance",
            FitnessGoal::Flexibility => "Flexibility",
            FitnessGoal::GeneralFitness => "General Fitness",
        }
    }
}

impl From<String> for FitnessGoal {
    fn from(s: String) -> Self {
        Self::parse_lenient(&s)
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The user profile every plan is generated from
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub fitness_level: FitnessLevel,
    pub goal: FitnessGoal,
}

impl Profile {
    /// Build a validated profile; the name is trimmed
    pub fn new(
        name: impl Into<String>,
        age: u32,
        fitness_level: FitnessLevel,
        goal: FitnessGoal,
    ) -> Result<Self> {
        let profile = Profile {
            name: name.into().trim().to_string(),
            age,
            fitness_level,
            goal,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Check the onboarding rules: non-empty name, age within 10..=120
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidProfile("name must not be empty".into()));
        }
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(Error::InvalidProfile(format!(
                "age {} is outside {}-{}",
                self.age, MIN_AGE, MAX_AGE
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Workout Types
// ============================================================================

/// One exercise prescription
///
/// By convention either `sets`/`reps` or `duration_minutes` carries the
/// prescription and the other side is zero.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub duration_minutes: u32,
}

impl Exercise {
    pub fn timed(name: &str, duration_minutes: u32) -> Self {
        Exercise {
            name: name.into(),
            sets: 0,
            reps: 0,
            duration_minutes,
        }
    }

    pub fn strength(name: &str, sets: u32, reps: u32) -> Self {
        Exercise {
            name: name.into(),
            sets,
            reps,
            duration_minutes: 0,
        }
    }

    pub fn is_timed(&self) -> bool {
        self.duration_minutes > 0
    }
}

/// A single day of the workout week
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutDay {
    pub day: Weekday,
    pub rest: bool,
    pub exercises: Vec<Exercise>,
}

/// Seven workout days, Monday through Sunday
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeeklyPlan {
    pub days: Vec<WorkoutDay>,
}

impl WeeklyPlan {
    pub fn day(&self, day: Weekday) -> Option<&WorkoutDay> {
        self.days.iter().find(|d| d.day == day)
    }

    pub fn training_days(&self) -> usize {
        self.days.iter().filter(|d| !d.rest).count()
    }
}

// ============================================================================
// Meal Types
// ============================================================================

/// A meal with calories (kcal) and macros (grams)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meal {
    pub name: String,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl Meal {
    pub fn new(name: &str, calories: u32, protein: u32, carbs: u32, fat: u32) -> Self {
        Meal {
            name: name.into(),
            calories,
            protein,
            carbs,
            fat,
        }
    }
}

/// Summed calories and macros for a day
///
/// Widened to `u64` so any four stored `u32` values add up without overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NutritionTotals {
    pub calories: u64,
    pub protein: u64,
    pub carbs: u64,
    pub fat: u64,
}

/// Breakfast, lunch and dinner, plus dessert on most days
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyMealPlan {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dessert: Option<Meal>,
}

impl DailyMealPlan {
    /// The meals of the day in serving order, dessert last when present
    pub fn meals(&self) -> impl Iterator<Item = &Meal> {
        [&self.breakfast, &self.lunch, &self.dinner]
            .into_iter()
            .chain(self.dessert.as_ref())
    }

    pub fn totals(&self) -> NutritionTotals {
        self.meals().fold(NutritionTotals::default(), |acc, meal| NutritionTotals {
            calories: acc.calories + u64::from(meal.calories),
            protein: acc.protein + u64::from(meal.protein),
            carbs: acc.carbs + u64::from(meal.carbs),
            fat: acc.fat + u64::from(meal.fat),
        })
    }
}

/// Seven daily meal plans, Monday through Sunday
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeeklyMealPlan {
    pub days: Vec<DailyMealPlan>,
}

impl WeeklyMealPlan {
    /// Daily plans carry no weekday of their own, so lookup is positional
    /// (Monday at index 0).
    pub fn day(&self, day: Weekday) -> Option<&DailyMealPlan> {
        self.days.get(day.index())
    }
}
