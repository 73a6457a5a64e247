//! Persistence for the profile and both weekly plans.
//!
//! `PlanStore` is the seam between the planner and wherever records live.
//! `FileStore` keeps one JSON document per record. Saves replace the file by
//! rename and reads take a shared lock; `MemoryStore` keeps everything in
//! process.

use crate::{Error, Profile, Result, WeeklyMealPlan, WeeklyPlan};
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Storage for the profile and generated plans
///
/// Loads return `Ok(None)` when a record has never been saved.
pub trait PlanStore {
    fn load_profile(&self) -> Result<Option<Profile>>;
    fn save_profile(&mut self, profile: &Profile) -> Result<()>;

    fn load_workout_plan(&self) -> Result<Option<WeeklyPlan>>;
    fn save_workout_plan(&mut self, plan: &WeeklyPlan) -> Result<()>;

    fn load_meal_plan(&self) -> Result<Option<WeeklyMealPlan>>;
    fn save_meal_plan(&mut self, plan: &WeeklyMealPlan) -> Result<()>;

    /// Remove every stored record
    fn clear(&mut self) -> Result<()>;
}

/// The records a store holds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Record {
    Profile,
    WorkoutPlan,
    MealPlan,
}

impl Record {
    pub const ALL: [Record; 3] = [Record::Profile, Record::WorkoutPlan, Record::MealPlan];

    pub fn file_name(self) -> &'static str {
        match self {
            Record::Profile => "profile.json",
            Record::WorkoutPlan => "workout_plan.json",
            Record::MealPlan => "meal_plan.json",
        }
    }
}

// ============================================================================
// File store
// ============================================================================

/// JSON files in a data directory
#[derive(Clone, Debug)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, record: Record) -> PathBuf {
        self.data_dir.join(record.file_name())
    }

    fn load<T: DeserializeOwned>(&self, record: Record) -> Result<Option<T>> {
        read_json(&self.path_for(record))
    }

    fn save<T: Serialize>(&self, record: Record, value: &T) -> Result<()> {
        write_json_atomic(&self.path_for(record), value)
    }
}

impl PlanStore for FileStore {
    fn load_profile(&self) -> Result<Option<Profile>> {
        self.load(Record::Profile)
    }

    fn save_profile(&mut self, profile: &Profile) -> Result<()> {
        self.save(Record::Profile, profile)
    }

    fn load_workout_plan(&self) -> Result<Option<WeeklyPlan>> {
        self.load(Record::WorkoutPlan)
    }

    fn save_workout_plan(&mut self, plan: &WeeklyPlan) -> Result<()> {
        self.save(Record::WorkoutPlan, plan)
    }

    fn load_meal_plan(&self) -> Result<Option<WeeklyMealPlan>> {
        self.load(Record::MealPlan)
    }

    fn save_meal_plan(&mut self, plan: &WeeklyMealPlan) -> Result<()> {
        self.save(Record::MealPlan, plan)
    }

    fn clear(&mut self) -> Result<()> {
        for record in Record::ALL {
            let path = self.path_for(record);
            match std::fs::remove_file(&path) {
                Ok(()) => tracing::info!("Removed {:?}", path),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(Error::Io(e)),
            }
        }
        Ok(())
    }
}

/// Read a JSON record with shared locking
///
/// Returns `None` if the file doesn't exist. If the file can't be read or
/// parsed, logs a warning and returns `None` as well.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        tracing::debug!("No record at {:?}", path);
        return Ok(None);
    }

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            tracing::warn!("Unable to open {:?}: {}. Treating as absent.", path, e);
            return Ok(None);
        }
    };

    if let Err(e) = file.lock_shared() {
        tracing::warn!("Unable to lock {:?}: {}. Treating as absent.", path, e);
        return Ok(None);
    }

    let mut contents = String::new();
    let mut reader = std::io::BufReader::new(&file);
    if let Err(e) = reader.read_to_string(&mut contents) {
        let _ = file.unlock();
        tracing::warn!("Failed to read {:?}: {}. Treating as absent.", path, e);
        return Ok(None);
    }

    file.unlock()?;

    match serde_json::from_str::<T>(&contents) {
        Ok(value) => {
            tracing::debug!("Loaded {:?}", path);
            Ok(Some(value))
        }
        Err(e) => {
            tracing::warn!("Failed to parse {:?}: {}. Treating as absent.", path, e);
            Ok(None)
        }
    }
}

/// Write a JSON record atomically
///
/// Writes to a temp file in the same directory, syncs it, then renames it
/// over the target. The rename is the only synchronisation: concurrent
/// writers race and the last rename wins, while readers always see one
/// complete document.
fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| Error::Other(format!("record path {:?} has no parent", path)))?;
    std::fs::create_dir_all(parent)?;

    let temp = NamedTempFile::new_in(parent)?;

    {
        let mut writer = std::io::BufWriter::new(temp.as_file());
        let contents = serde_json::to_string(value)?;
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
    }

    temp.as_file().sync_all()?;

    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::debug!("Saved {:?}", path);
    Ok(())
}

// ============================================================================
// Memory store
// ============================================================================

/// In-process store, mainly for tests and embedding
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    profile: Option<Profile>,
    workout_plan: Option<WeeklyPlan>,
    meal_plan: Option<WeeklyMealPlan>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlanStore for MemoryStore {
    fn load_profile(&self) -> Result<Option<Profile>> {
        Ok(self.profile.clone())
    }

    fn save_profile(&mut self, profile: &Profile) -> Result<()> {
        self.profile = Some(profile.clone());
        Ok(())
    }

    fn load_workout_plan(&self) -> Result<Option<WeeklyPlan>> {
        Ok(self.workout_plan.clone())
    }

    fn save_workout_plan(&mut self, plan: &WeeklyPlan) -> Result<()> {
        self.workout_plan = Some(plan.clone());
        Ok(())
    }

    fn load_meal_plan(&self) -> Result<Option<WeeklyMealPlan>> {
        Ok(self.meal_plan.clone())
    }

    fn save_meal_plan(&mut self, plan: &WeeklyMealPlan) -> Result<()> {
        self.meal_plan = Some(plan.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        *self = Self::default();
        Ok(())
    }
}
