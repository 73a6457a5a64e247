use chrono::Datelike;
use clap::{Parser, Subcommand};
use powerpal_core::planner::{self, CurrentWeek};
use powerpal_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "powerpal")]
#[command(about = "Weekly workout and meal plans from your fitness profile", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create your profile and generate both plans
    Setup {
        #[arg(long)]
        name: String,

        #[arg(long)]
        age: u32,

        /// beginner, intermediate or advanced
        #[arg(long, default_value = "beginner")]
        level: String,

        /// weight-loss, muscle-gain, endurance, flexibility or general-fitness
        #[arg(long, default_value = "general-fitness")]
        goal: String,
    },

    /// Show the stored profile
    Profile,

    /// Show the weekly workout plan
    Workout {
        /// Rebuild the plan from the profile first
        #[arg(long)]
        regenerate: bool,
    },

    /// Show the weekly meal plan
    Meals {
        /// Only show one day (e.g. monday, thu)
        #[arg(long)]
        day: Option<String>,

        /// Rebuild the plan from the profile first
        #[arg(long)]
        regenerate: bool,
    },

    /// Show today's workout and meals
    Today,

    /// Change fitness level and regenerate the workout plan
    Level { level: String },

    /// Change goal and regenerate both plans
    Goal { goal: String },

    /// Export the week as CSV
    Export {
        #[arg(long)]
        out: PathBuf,
    },

    /// Delete the profile and both plans
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // A broken config file must not lock the user out of every command
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    powerpal_core::logging::init_with_level(&config.logging.level);
    if let Some(e) = config_error {
        tracing::warn!("Ignoring unreadable config file ({:?}), using defaults", e);
    }

    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let mut store = FileStore::new(data_dir);
    tracing::debug!("Using data directory {:?}", store.data_dir());

    let errors = default_rule_book().validate();
    if !errors.is_empty() {
        eprintln!("Rule book validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::RuleBook("Invalid rule book".into()));
    }

    match cli.command {
        Commands::Setup {
            name,
            age,
            level,
            goal,
        } => cmd_setup(&mut store, &name, age, &level, &goal),
        Commands::Profile => cmd_profile(&store),
        Commands::Workout { regenerate } => cmd_workout(&mut store, regenerate),
        Commands::Meals { day, regenerate } => cmd_meals(&mut store, day, regenerate),
        Commands::Today => cmd_today(&store),
        Commands::Level { level } => cmd_level(&mut store, &level),
        Commands::Goal { goal } => cmd_goal(&mut store, &goal),
        Commands::Export { out } => cmd_export(&store, &out),
        Commands::Reset => cmd_reset(&mut store),
    }
}

fn parse_level(s: &str) -> FitnessLevel {
    FitnessLevel::parse(s).unwrap_or_else(|| {
        eprintln!("Unknown fitness level: {}. Using beginner.", s);
        FitnessLevel::default()
    })
}

fn parse_goal(s: &str) -> FitnessGoal {
    FitnessGoal::parse(s).unwrap_or_else(|| {
        eprintln!("Unknown goal: {}. Using general fitness.", s);
        FitnessGoal::default()
    })
}

fn cmd_setup(store: &mut FileStore, name: &str, age: u32, level: &str, goal: &str) -> Result<()> {
    let week = planner::onboard(store, name, age, parse_level(level), parse_goal(goal))?;

    println!("\n✓ Profile saved!");
    display_profile(&week.profile);
    display_current_week(&week);
    Ok(())
}

fn cmd_profile(store: &FileStore) -> Result<()> {
    let profile = planner::require_profile(store)?;
    display_profile(&profile);
    Ok(())
}

fn cmd_workout(store: &mut FileStore, regenerate: bool) -> Result<()> {
    let plan = if regenerate {
        let plan = planner::regenerate_workout(store)?;
        println!("\n✓ Workout plan regenerated!");
        Some(plan)
    } else {
        planner::require_profile(&*store)?;
        store.load_workout_plan()?
    };

    match plan {
        Some(plan) => display_workout_plan(&plan),
        None => println!("No workout plan yet. Run `powerpal workout --regenerate`."),
    }
    Ok(())
}

fn cmd_meals(store: &mut FileStore, day: Option<String>, regenerate: bool) -> Result<()> {
    let only_day = match day {
        Some(d) => Some(
            Weekday::parse(&d).ok_or_else(|| Error::Other(format!("Unknown day: {}", d)))?,
        ),
        None => None,
    };

    let plan = if regenerate {
        let plan = planner::regenerate_meals(store)?;
        println!("\n✓ Meal plan regenerated!");
        Some(plan)
    } else {
        planner::require_profile(&*store)?;
        store.load_meal_plan()?
    };

    let Some(plan) = plan else {
        println!("No meal plan yet. Run `powerpal meals --regenerate`.");
        return Ok(());
    };

    for (day, daily) in Weekday::ALL.into_iter().zip(&plan.days) {
        if only_day.is_some_and(|d| d != day) {
            continue;
        }
        display_daily_meals(day, daily);
    }
    Ok(())
}

fn cmd_today(store: &FileStore) -> Result<()> {
    let week = planner::current_week(store)?;
    let today = Weekday::from(chrono::Local::now().weekday());

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  TODAY: {}", today.name().to_uppercase());
    println!("╰─────────────────────────────────────────╯");

    match week.workout.as_ref().and_then(|w| w.day(today)) {
        Some(day) => display_workout_day(day),
        None => println!("\n  No workout plan yet."),
    }

    match week.meals.as_ref().and_then(|m| m.day(today)) {
        Some(daily) => display_daily_meals(today, daily),
        None => println!("\n  No meal plan yet."),
    }
    Ok(())
}

fn cmd_level(store: &mut FileStore, level: &str) -> Result<()> {
    let level = parse_level(level);
    let plan = planner::change_level(store, level)?;

    println!("\n✓ Fitness level set to {}!", level);
    display_workout_plan(&plan);
    Ok(())
}

fn cmd_goal(store: &mut FileStore, goal: &str) -> Result<()> {
    let goal = parse_goal(goal);
    let (workout, meals) = planner::change_goal(store, goal)?;

    println!("\n✓ Goal set to {}! Both plans regenerated.", goal);
    display_workout_plan(&workout);
    for (day, daily) in Weekday::ALL.into_iter().zip(&meals.days) {
        display_daily_meals(day, daily);
    }
    Ok(())
}

fn cmd_export(store: &FileStore, out: &std::path::Path) -> Result<()> {
    let week = planner::current_week(store)?;
    if week.workout.is_none() && week.meals.is_none() {
        println!("No plans found - nothing to export.");
        return Ok(());
    }

    let rows = export_week_csv(week.workout.as_ref(), week.meals.as_ref(), out)?;
    println!("✓ Exported {} days to CSV", rows);
    println!("  CSV: {}", out.display());
    Ok(())
}

fn cmd_reset(store: &mut FileStore) -> Result<()> {
    store.clear()?;
    println!("✓ Profile and plans deleted.");
    Ok(())
}

fn display_profile(profile: &Profile) {
    println!();
    println!("  Name:  {}", profile.name);
    println!("  Age:   {}", profile.age);
    println!("  Level: {}", profile.fitness_level);
    println!("  Goal:  {}", profile.goal);
    println!();
}

fn display_current_week(week: &CurrentWeek) {
    if let Some(ref workout) = week.workout {
        display_workout_plan(workout);
    }
    if let Some(ref meals) = week.meals {
        for (day, daily) in Weekday::ALL.into_iter().zip(&meals.days) {
            display_daily_meals(day, daily);
        }
    }
}

fn display_workout_plan(plan: &WeeklyPlan) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  WORKOUT PLAN ({} training days)", plan.training_days());
    println!("╰─────────────────────────────────────────╯");

    for day in &plan.days {
        display_workout_day(day);
    }
    println!();
}

fn display_workout_day(day: &WorkoutDay) {
    println!();
    if day.rest {
        println!("  {} - Rest day", day.day);
        return;
    }

    println!("  {}", day.day);
    for exercise in &day.exercises {
        if exercise.is_timed() {
            println!("  → {}: {} min", exercise.name, exercise.duration_minutes);
        } else {
            println!(
                "  → {}: {} sets x {} reps",
                exercise.name, exercise.sets, exercise.reps
            );
        }
    }
}

fn display_daily_meals(day: Weekday, daily: &DailyMealPlan) {
    println!();
    println!("  {} meals", day);

    let labelled = [
        ("Breakfast", Some(&daily.breakfast)),
        ("Lunch", Some(&daily.lunch)),
        ("Dinner", Some(&daily.dinner)),
        ("Dessert", daily.dessert.as_ref()),
    ];
    for (label, meal) in labelled {
        if let Some(meal) = meal {
            println!(
                "  → {:<9} {} ({} kcal, P {}g / C {}g / F {}g)",
                label, meal.name, meal.calories, meal.protein, meal.carbs, meal.fat
            );
        }
    }

    let totals = daily.totals();
    println!(
        "  Total: {} kcal, P {}g / C {}g / F {}g",
        totals.calories, totals.protein, totals.carbs, totals.fat
    );
}
