#![forbid(unsafe_code)]

//! Core domain model and plan generation for Powerpal.
//!
//! This crate provides:
//! - Domain types (profile, exercises, meals, weekly plans)
//! - Goal-keyed rule tables
//! - Seeded shuffle and the workout/meal plan builders
//! - Persistence (file and in-memory stores)
//! - Profile/plan flows and CSV export

pub mod types;
pub mod error;
pub mod rules;
pub mod shuffle;
pub mod workout;
pub mod meals;
pub mod config;
pub mod logging;
pub mod store;
pub mod planner;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use rules::{default_rule_book, exercises_for_goal, meals_for_goal, RuleBook};
pub use shuffle::seeded_shuffle;
pub use workout::generate_workout_plan;
pub use meals::{generate_meal_plan, meal_seed};
pub use config::Config;
pub use store::{FileStore, MemoryStore, PlanStore};
pub use export::export_week_csv;
