//! Built-in rule tables mapping a fitness goal to exercises and meals.
//!
//! Each goal owns one exercise list and exactly three candidates per meal
//! category. General fitness doubles as the fallback table.

use crate::types::{Exercise, FitnessGoal, Meal};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Number of candidates every meal category carries
pub const MEAL_CANDIDATES: usize = 3;

/// Candidate meals for one goal, one list per category
#[derive(Clone, Debug)]
pub struct MealCandidates {
    pub breakfasts: Vec<Meal>,
    pub lunches: Vec<Meal>,
    pub dinners: Vec<Meal>,
    pub desserts: Vec<Meal>,
}

impl MealCandidates {
    fn categories(&self) -> [(&'static str, &[Meal]); 4] {
        [
            ("breakfasts", self.breakfasts.as_slice()),
            ("lunches", self.lunches.as_slice()),
            ("dinners", self.dinners.as_slice()),
            ("desserts", self.desserts.as_slice()),
        ]
    }
}

/// Everything the builders need for one goal
#[derive(Clone, Debug)]
pub struct GoalRules {
    pub exercises: Vec<Exercise>,
    pub meals: MealCandidates,
}

/// Goal-keyed rule tables with a fallback entry
#[derive(Clone, Debug)]
pub struct RuleBook {
    tables: HashMap<FitnessGoal, GoalRules>,
    fallback: GoalRules,
}

/// Cached default rule book, built once on first use
static DEFAULT_RULE_BOOK: Lazy<RuleBook> = Lazy::new(build_default_rule_book);

/// Get a reference to the cached default rule book
pub fn default_rule_book() -> &'static RuleBook {
    &DEFAULT_RULE_BOOK
}

/// Exercise list for a goal from the default rule book
pub fn exercises_for_goal(goal: FitnessGoal) -> &'static [Exercise] {
    &default_rule_book().rules_for(goal).exercises
}

/// Meal candidates for a goal from the default rule book
pub fn meals_for_goal(goal: FitnessGoal) -> &'static MealCandidates {
    &default_rule_book().rules_for(goal).meals
}

impl RuleBook {
    pub fn new(tables: HashMap<FitnessGoal, GoalRules>, fallback: GoalRules) -> Self {
        Self { tables, fallback }
    }

    /// Rules for `goal`, or the fallback table when the goal has no entry
    pub fn rules_for(&self, goal: FitnessGoal) -> &GoalRules {
        self.tables.get(&goal).unwrap_or_else(|| {
            tracing::debug!("No rule table for {:?}, using fallback", goal);
            &self.fallback
        })
    }

    /// Validate the rule book for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let entries = self
            .tables
            .iter()
            .map(|(goal, rules)| (format!("{:?}", goal), rules))
            .chain(std::iter::once(("fallback".to_string(), &self.fallback)));

        for (label, rules) in entries {
            if rules.exercises.is_empty() {
                errors.push(format!("Rules '{}' have no exercises", label));
            }
            for exercise in &rules.exercises {
                if exercise.name.is_empty() {
                    errors.push(format!("Rules '{}' contain an unnamed exercise", label));
                }
                if exercise.duration_minutes == 0 && (exercise.sets == 0 || exercise.reps == 0) {
                    errors.push(format!(
                        "Rules '{}': exercise '{}' has neither duration nor sets x reps",
                        label, exercise.name
                    ));
                }
            }

            for (category, meals) in rules.meals.categories() {
                if meals.len() != MEAL_CANDIDATES {
                    errors.push(format!(
                        "Rules '{}': {} has {} candidates, expected {}",
                        label,
                        category,
                        meals.len(),
                        MEAL_CANDIDATES
                    ));
                }
                if meals.iter().any(|m| m.name.is_empty()) {
                    errors.push(format!(
                        "Rules '{}': {} contain an unnamed meal",
                        label, category
                    ));
                }
            }
        }

        errors
    }
}

/// Builds the default rule book
///
/// **Note**: prefer `default_rule_book()`, which returns the cached copy.
pub fn build_default_rule_book() -> RuleBook {
    let mut tables = HashMap::new();

    // ========================================================================
    // Weight loss
    // ========================================================================

    tables.insert(
        FitnessGoal::WeightLoss,
        GoalRules {
            exercises: vec![
                Exercise::timed("Cardio", 30),
                Exercise::strength("Bodyweight Circuit", 3, 12),
            ],
            meals: MealCandidates {
                breakfasts: vec![
                    Meal::new("Oatmeal with Berries", 300, 10, 50, 5),
                    Meal::new("Egg White Omelet", 250, 20, 5, 8),
                    Meal::new("Greek Yogurt Parfait", 280, 15, 30, 6),
                ],
                lunches: vec![
                    Meal::new("Grilled Chicken Salad", 350, 30, 15, 12),
                    Meal::new("Turkey Wrap", 400, 25, 35, 10),
                    Meal::new("Quinoa Bowl", 380, 12, 65, 7),
                ],
                dinners: vec![
                    Meal::new("Baked Salmon", 420, 35, 10, 20),
                    Meal::new("Stir-Fry Veggies & Tofu", 350, 18, 45, 9),
                    Meal::new("Grilled Chicken Breast", 380, 40, 12, 8),
                ],
                desserts: vec![
                    Meal::new("Fruit Salad", 120, 2, 30, 0),
                    Meal::new("Yogurt with Honey", 150, 6, 20, 3),
                    Meal::new("Dark Chocolate Square", 100, 1, 10, 7),
                ],
            },
        },
    );

    // ========================================================================
    // Muscle gain
    // ========================================================================

    tables.insert(
        FitnessGoal::MuscleGain,
        GoalRules {
            exercises: vec![
                Exercise::strength("Weight Lifting", 4, 8),
                Exercise::strength("Compound Movements", 4, 10),
            ],
            meals: MealCandidates {
                breakfasts: vec![
                    Meal::new("Protein Pancakes", 400, 25, 50, 10),
                    Meal::new("Bacon & Eggs", 500, 35, 10, 35),
                    Meal::new("Breakfast Burrito", 450, 30, 40, 15),
                ],
                lunches: vec![
                    Meal::new("Steak Wrap", 550, 45, 45, 20),
                    Meal::new("Chicken Alfredo Pasta", 600, 40, 70, 18),
                    Meal::new("Chili", 500, 38, 40, 15),
                ],
                dinners: vec![
                    Meal::new("Salmon with Potatoes", 650, 45, 50, 25),
                    Meal::new("Chicken & Rice", 600, 40, 75, 10),
                    Meal::new("Beef Stir-Fry", 580, 38, 60, 16),
                ],
                desserts: vec![
                    Meal::new("Protein Bar", 200, 16, 18, 6),
                    Meal::new("Peanut Butter Cookies", 250, 8, 20, 14),
                    Meal::new("Banana Nut Muffin", 220, 6, 30, 8),
                ],
            },
        },
    );

    // ========================================================================
    // Endurance
    // ========================================================================

    tables.insert(
        FitnessGoal::Endurance,
        GoalRules {
            exercises: vec![
                Exercise::timed("Long-Distance Running", 45),
                Exercise::timed("Interval Training", 20),
            ],
            meals: MealCandidates {
                breakfasts: vec![
                    Meal::new("Whole Wheat Toast & Eggs", 350, 18, 48, 8),
                    Meal::new("Fruit Smoothie", 320, 12, 60, 4),
                    Meal::new("Oatmeal & Banana", 380, 13, 67, 7),
                ],
                lunches: vec![
                    Meal::new("Rice & Beans Bowl", 480, 20, 75, 10),
                    Meal::new("Chicken Pasta Salad", 520, 30, 70, 16),
                    Meal::new("Tofu Wrap", 420, 12, 65, 10),
                ],
                dinners: vec![
                    Meal::new("Veggie Stir-Fry & Rice", 530, 16, 90, 11),
                    Meal::new("Grilled Salmon & Quinoa", 560, 32, 46, 18),
                    Meal::new("Chicken Fajitas", 520, 35, 55, 16),
                ],
                desserts: vec![
                    Meal::new("Fruit Parfait", 170, 5, 30, 2),
                    Meal::new("Yogurt & Granola", 200, 7, 28, 5),
                    Meal::new("Energy Bites", 230, 6, 35, 8),
                ],
            },
        },
    );

    // ========================================================================
    // Flexibility
    // ========================================================================

    tables.insert(
        FitnessGoal::Flexibility,
        GoalRules {
            exercises: vec![
                Exercise::timed("Yoga", 60),
                Exercise::timed("Stretching", 30),
            ],
            meals: MealCandidates {
                breakfasts: vec![
                    Meal::new("Vegetable Omelet", 330, 16, 18, 18),
                    Meal::new("Smoothie Bowl", 360, 14, 66, 6),
                    Meal::new("Porridge & Berries", 320, 12, 58, 4),
                ],
                lunches: vec![
                    Meal::new("Grilled Veggie Wrap", 450, 18, 68, 12),
                    Meal::new("Chicken & Sweet Potatoes", 470, 28, 48, 14),
                    Meal::new("Bean & Rice Bowl", 430, 16, 60, 10),
                ],
                dinners: vec![
                    Meal::new("Grilled Fish & Veggies", 480, 36, 38, 14),
                    Meal::new("Stir-Fry Shrimp & Rice", 500, 30, 56, 13),
                    Meal::new("Lentil Stew", 420, 18, 62, 8),
                ],
                desserts: vec![
                    Meal::new("Frozen Yogurt", 160, 4, 28, 3),
                    Meal::new("Apple Granola Crunch", 200, 6, 33, 6),
                    Meal::new("Fruit Salad", 100, 2, 24, 1),
                ],
            },
        },
    );

    // ========================================================================
    // General fitness (also the fallback)
    // ========================================================================

    let general = GoalRules {
        // Mixed sessions carry both a duration and sets x reps.
        exercises: vec![Exercise {
            name: "Mixed Cardio & Strength".into(),
            sets: 3,
            reps: 10,
            duration_minutes: 20,
        }],
        meals: MealCandidates {
            breakfasts: vec![
                Meal::new("Egg & Toast", 350, 19, 45, 12),
                Meal::new("Smoothie", 320, 14, 57, 5),
                Meal::new("Pancakes & Fruit", 380, 11, 67, 12),
            ],
            lunches: vec![
                Meal::new("Chicken Salad", 420, 25, 37, 14),
                Meal::new("Pasta Bowl", 450, 20, 70, 9),
                Meal::new("Tofu Stir-Fry", 410, 17, 54, 13),
            ],
            dinners: vec![
                Meal::new("Grilled Chicken & Veggies", 430, 32, 29, 13),
                Meal::new("Salmon & Rice", 480, 27, 46, 16),
                Meal::new("Steak & Potatoes", 520, 32, 38, 19),
            ],
            desserts: vec![
                Meal::new("Yogurt", 120, 5, 19, 2),
                Meal::new("Fruit Mix", 110, 2, 28, 1),
                Meal::new("Dark Chocolate", 100, 3, 14, 6),
            ],
        },
    };

    tables.insert(FitnessGoal::GeneralFitness, general.clone());

    RuleBook::new(tables, general)
}
