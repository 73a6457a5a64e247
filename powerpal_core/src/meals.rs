//! Weekly meal plan builder.
//!
//! A seed derived from the profile drives four independent shuffles (one per
//! meal category). The shuffled candidates are then laid out over the week
//! by a fixed seven-row table; dessert is skipped on Thursday and Sunday.

use crate::rules::meals_for_goal;
use crate::shuffle::seeded_shuffle;
use crate::types::{DailyMealPlan, Meal, Profile, WeeklyMealPlan};

/// Modulus applied to the profile-derived seed
const SEED_MODULUS: u64 = 179;

/// Indices into the shuffled candidate lists for one day
#[derive(Clone, Copy, Debug)]
struct MealSlots {
    breakfast: usize,
    lunch: usize,
    dinner: usize,
    dessert: Option<usize>,
}

const fn slots(breakfast: usize, lunch: usize, dinner: usize, dessert: Option<usize>) -> MealSlots {
    MealSlots {
        breakfast,
        lunch,
        dinner,
        dessert,
    }
}

/// Day layout, Monday first
const WEEK_LAYOUT: [MealSlots; 7] = [
    slots(0, 0, 0, Some(0)),
    slots(1, 1, 1, Some(1)),
    slots(2, 2, 2, Some(2)),
    slots(0, 1, 2, None),
    slots(1, 2, 0, Some(1)),
    slots(2, 0, 1, Some(2)),
    slots(0, 1, 2, None),
];

/// Seed for a profile's meal shuffles
///
/// `(len(name) + age + len(name)) mod 179`, with the name length counted in
/// UTF-16 code units. Keep the doubled name term: any change to the formula
/// reorders every previously generated plan.
pub fn meal_seed(profile: &Profile) -> u32 {
    let name_len = profile.name.encode_utf16().count() as u64;
    let seed = (name_len + u64::from(profile.age) + name_len) % SEED_MODULUS;
    seed as u32
}

fn pick(list: &[Meal], idx: usize) -> Meal {
    list[idx].clone()
}

/// Build the weekly meal plan for a profile
pub fn generate_meal_plan(profile: &Profile) -> WeeklyMealPlan {
    let candidates = meals_for_goal(profile.goal);
    let seed = meal_seed(profile);

    let breakfasts = seeded_shuffle(&candidates.breakfasts, seed);
    let lunches = seeded_shuffle(&candidates.lunches, seed + 1);
    let dinners = seeded_shuffle(&candidates.dinners, seed + 2);
    let desserts = seeded_shuffle(&candidates.desserts, seed + 3);

    let days = WEEK_LAYOUT
        .iter()
        .map(|slot| DailyMealPlan {
            breakfast: pick(&breakfasts, slot.breakfast),
            lunch: pick(&lunches, slot.lunch),
            dinner: pick(&dinners, slot.dinner),
            dessert: slot.dessert.map(|idx| pick(&desserts, idx)),
        })
        .collect();

    tracing::debug!("Generated meal plan for {:?} with seed {}", profile.goal, seed);

    WeeklyMealPlan { days }
}
