//! Profile and plan flows over a `PlanStore`.
//!
//! Each flow is an ordered chain: validate, save the profile, then generate
//! and save the plans it affects. The first failing step aborts the chain and
//! its error is returned unchanged; nothing is retried.

use crate::store::PlanStore;
use crate::{
    generate_meal_plan, generate_workout_plan, Error, FitnessGoal, FitnessLevel, Profile, Result,
    WeeklyMealPlan, WeeklyPlan,
};

/// The profile and whatever plans have been stored for it
#[derive(Clone, Debug)]
pub struct CurrentWeek {
    pub profile: Profile,
    pub workout: Option<WeeklyPlan>,
    pub meals: Option<WeeklyMealPlan>,
}

/// Create the profile and generate both plans
///
/// Steps: validate, save profile, generate + save workout plan,
/// generate + save meal plan.
pub fn onboard<S: PlanStore>(
    store: &mut S,
    name: &str,
    age: u32,
    fitness_level: FitnessLevel,
    goal: FitnessGoal,
) -> Result<CurrentWeek> {
    let profile = Profile::new(name, age, fitness_level, goal)?;
    store.save_profile(&profile)?;
    tracing::info!("Saved profile for {}", profile.name);

    let workout = save_workout(store, &profile)?;
    let meals = save_meals(store, &profile)?;

    Ok(CurrentWeek {
        profile,
        workout: Some(workout),
        meals: Some(meals),
    })
}

/// Change the fitness level and regenerate the workout plan
///
/// The meal plan does not depend on the level and is left untouched.
pub fn change_level<S: PlanStore>(store: &mut S, level: FitnessLevel) -> Result<WeeklyPlan> {
    let mut profile = require_profile(store)?;
    profile.fitness_level = level;
    store.save_profile(&profile)?;
    tracing::info!("Fitness level changed to {:?}", level);

    save_workout(store, &profile)
}

/// Change the goal and regenerate both plans
pub fn change_goal<S: PlanStore>(
    store: &mut S,
    goal: FitnessGoal,
) -> Result<(WeeklyPlan, WeeklyMealPlan)> {
    let mut profile = require_profile(store)?;
    profile.goal = goal;
    store.save_profile(&profile)?;
    tracing::info!("Goal changed to {:?}", goal);

    let workout = save_workout(store, &profile)?;
    let meals = save_meals(store, &profile)?;
    Ok((workout, meals))
}

/// Rebuild the workout plan from the stored profile
pub fn regenerate_workout<S: PlanStore>(store: &mut S) -> Result<WeeklyPlan> {
    let profile = require_profile(store)?;
    save_workout(store, &profile)
}

/// Rebuild the meal plan from the stored profile
pub fn regenerate_meals<S: PlanStore>(store: &mut S) -> Result<WeeklyMealPlan> {
    let profile = require_profile(store)?;
    save_meals(store, &profile)
}

/// Load the stored profile along with both plans
pub fn current_week<S: PlanStore>(store: &S) -> Result<CurrentWeek> {
    let profile = require_profile(store)?;
    Ok(CurrentWeek {
        profile,
        workout: store.load_workout_plan()?,
        meals: store.load_meal_plan()?,
    })
}

/// Load the stored profile, rejecting a missing or invalid one
pub fn require_profile<S: PlanStore>(store: &S) -> Result<Profile> {
    let profile = store.load_profile()?.ok_or(Error::MissingProfile)?;
    profile.validate()?;
    Ok(profile)
}

fn save_workout<S: PlanStore>(store: &mut S, profile: &Profile) -> Result<WeeklyPlan> {
    let plan = generate_workout_plan(profile);
    store.save_workout_plan(&plan)?;
    tracing::info!("Saved workout plan ({} training days)", plan.training_days());
    Ok(plan)
}

fn save_meals<S: PlanStore>(store: &mut S, profile: &Profile) -> Result<WeeklyMealPlan> {
    let plan = generate_meal_plan(profile);
    store.save_meal_plan(&plan)?;
    tracing::info!("Saved meal plan");
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    /// Memory store whose workout saves always fail
    #[derive(Default)]
    struct BrokenWorkoutStore {
        inner: MemoryStore,
    }

    impl PlanStore for BrokenWorkoutStore {
        fn load_profile(&self) -> Result<Option<Profile>> {
            self.inner.load_profile()
        }
        fn save_profile(&mut self, profile: &Profile) -> Result<()> {
            self.inner.save_profile(profile)
        }
        fn load_workout_plan(&self) -> Result<Option<WeeklyPlan>> {
            self.inner.load_workout_plan()
        }
        fn save_workout_plan(&mut self, _plan: &WeeklyPlan) -> Result<()> {
            Err(Error::Other("disk unavailable".into()))
        }
        fn load_meal_plan(&self) -> Result<Option<WeeklyMealPlan>> {
            self.inner.load_meal_plan()
        }
        fn save_meal_plan(&mut self, plan: &WeeklyMealPlan) -> Result<()> {
            self.inner.save_meal_plan(plan)
        }
        fn clear(&mut self) -> Result<()> {
            self.inner.clear()
        }
    }

    fn onboarded() -> MemoryStore {
        let mut store = MemoryStore::new();
        onboard(
            &mut store,
            "Al",
            30,
            FitnessLevel::Beginner,
            FitnessGoal::WeightLoss,
        )
        .unwrap();
        store
    }

    #[test]
    fn test_onboard_stores_everything() {
        crate::logging::init_test();
        let store = onboarded();

        let week = current_week(&store).unwrap();
        assert_eq!(week.profile.name, "Al");
        assert_eq!(week.workout.unwrap().days.len(), 7);
        assert_eq!(week.meals.unwrap().days.len(), 7);
    }

    #[test]
    fn test_onboard_rejects_invalid_profile_before_saving() {
        let mut store = MemoryStore::new();
        let result = onboard(&mut store, "", 30, FitnessLevel::Beginner, FitnessGoal::Endurance);

        assert!(matches!(result, Err(Error::InvalidProfile(_))));
        assert!(store.load_profile().unwrap().is_none());
    }

    #[test]
    fn test_onboard_aborts_at_first_failure() {
        let mut store = BrokenWorkoutStore::default();
        let result = onboard(
            &mut store,
            "Al",
            30,
            FitnessLevel::Beginner,
            FitnessGoal::WeightLoss,
        );

        assert!(matches!(result, Err(Error::Other(_))));
        // profile was saved, meal step never ran
        assert!(store.load_profile().unwrap().is_some());
        assert!(store.load_meal_plan().unwrap().is_none());
    }

    #[test]
    fn test_change_level_only_touches_workout() {
        let mut store = onboarded();
        let meals_before = store.load_meal_plan().unwrap();

        change_level(&mut store, FitnessLevel::Advanced).unwrap();

        let profile = store.load_profile().unwrap().unwrap();
        assert_eq!(profile.fitness_level, FitnessLevel::Advanced);
        assert_eq!(store.load_meal_plan().unwrap(), meals_before);
    }

    #[test]
    fn test_change_goal_regenerates_both() {
        let mut store = onboarded();

        let (workout, meals) = change_goal(&mut store, FitnessGoal::MuscleGain).unwrap();

        assert_eq!(workout.days[0].exercises[0].name, "Weight Lifting");
        assert_eq!(store.load_workout_plan().unwrap(), Some(workout));
        assert_eq!(store.load_meal_plan().unwrap(), Some(meals));
        assert_eq!(
            store.load_profile().unwrap().unwrap().goal,
            FitnessGoal::MuscleGain
        );
    }

    #[test]
    fn test_regenerate_is_idempotent() {
        let mut store = onboarded();
        let first = regenerate_meals(&mut store).unwrap();
        let second = regenerate_meals(&mut store).unwrap();
        assert_eq!(first, second);

        let workout = regenerate_workout(&mut store).unwrap();
        assert_eq!(store.load_workout_plan().unwrap(), Some(workout));
    }

    #[test]
    fn test_flows_require_profile() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            regenerate_workout(&mut store),
            Err(Error::MissingProfile)
        ));
        assert!(matches!(
            change_goal(&mut store, FitnessGoal::Flexibility),
            Err(Error::MissingProfile)
        ));
        assert!(matches!(current_week(&store), Err(Error::MissingProfile)));
    }

    #[test]
    fn test_stored_invalid_profile_is_rejected() {
        let mut store = MemoryStore::new();
        let bad = Profile {
            name: "Kid".into(),
            age: 4,
            fitness_level: FitnessLevel::Beginner,
            goal: FitnessGoal::GeneralFitness,
        };
        store.save_profile(&bad).unwrap();

        assert!(matches!(
            regenerate_meals(&mut store),
            Err(Error::InvalidProfile(_))
        ));
        assert!(store.load_meal_plan().unwrap().is_none());
    }
}
