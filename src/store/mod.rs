//! Shared in-memory store backing the repositories.
//!
//! Plays the role a database pool plays elsewhere: one handle, cloned into
//! every repository. All tables sit behind a single `RwLock` so compound
//! operations (enrollment checks, cascades) can run in one critical
//! section. Guards are never held across an await point.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::{AppError, Result};
use crate::modules::classes::models::SchoolClass;
use crate::modules::students::models::Student;

/// In-memory tables for students and school classes.
#[derive(Debug, Default)]
pub struct SchoolData {
    pub students: HashMap<String, Student>,
    pub classes: BTreeMap<i32, SchoolClass>,
    next_class_id: i32,
}

impl SchoolData {
    /// Hand out the next class id. Ids start at 1 and are never reused.
    pub fn allocate_class_id(&mut self) -> i32 {
        self.next_class_id += 1;
        self.next_class_id
    }

    /// Students currently assigned to the given class.
    pub fn members_of(&self, class_id: i32) -> impl Iterator<Item = &Student> {
        self.students
            .values()
            .filter(move |s| s.school_class_id == Some(class_id))
    }
}

/// Store handle shared by all repositories.
#[derive(Debug, Default)]
pub struct SchoolStore {
    inner: RwLock<SchoolData>,
}

impl SchoolStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire a shared read guard over the tables.
    ///
    /// Poisoning means a writer panicked mid-mutation; the tables can no
    /// longer be trusted, so it surfaces as a storage fault.
    pub fn read(&self) -> Result<RwLockReadGuard<'_, SchoolData>> {
        self.inner
            .read()
            .map_err(|_| AppError::storage("school store lock poisoned"))
    }

    /// Acquire an exclusive write guard over the tables.
    pub fn write(&self) -> Result<RwLockWriteGuard<'_, SchoolData>> {
        self.inner
            .write()
            .map_err(|_| AppError::storage("school store lock poisoned"))
    }
}
