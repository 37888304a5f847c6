use std::path::Path;

use tokio::sync::Mutex;

use super::collection::{JsonCollection, Record, next_id};
use crate::domain::models::{Team, TeamUpdate};
use crate::errors::StoreError;

impl Record for Team {
    fn id(&self) -> i64 {
        self.id
    }
}

/// File-backed team collection. The mutex is held across every full
/// read-modify-write cycle so concurrent mutations serialize instead of
/// losing updates.
pub struct TeamStore {
    collection: JsonCollection,
    lock: Mutex<()>,
}

impl TeamStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            collection: JsonCollection::new(path),
            lock: Mutex::new(()),
        }
    }

    pub async fn list(&self) -> Result<Vec<Team>, StoreError> {
        let _guard = self.lock.lock().await;
        self.collection.load()
    }

    pub async fn get(&self, id: i64) -> Result<Option<Team>, StoreError> {
        let _guard = self.lock.lock().await;
        let teams: Vec<Team> = self.collection.load()?;
        Ok(teams.into_iter().find(|t| t.id == id))
    }

    pub async fn create(&self, name: String, country: String) -> Result<Team, StoreError> {
        let _guard = self.lock.lock().await;
        let mut teams: Vec<Team> = self.collection.load()?;

        let team = Team {
            id: next_id(&teams),
            name,
            country,
        };
        teams.push(team.clone());
        self.collection.persist(&teams)?;

        Ok(team)
    }

    /// Merge only the fields present in the update. `None` when no team has
    /// the given id.
    pub async fn update(&self, id: i64, update: TeamUpdate) -> Result<Option<Team>, StoreError> {
        let _guard = self.lock.lock().await;
        let mut teams: Vec<Team> = self.collection.load()?;

        let Some(team) = teams.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        if let Some(name) = update.name {
            team.name = name;
        }
        if let Some(country) = update.country {
            team.country = country;
        }
        let updated = team.clone();
        self.collection.persist(&teams)?;

        Ok(Some(updated))
    }

    /// Returns false when no record matched; the file is not rewritten in
    /// that case.
    pub async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let _guard = self.lock.lock().await;
        let teams: Vec<Team> = self.collection.load()?;

        let remaining: Vec<Team> = teams.iter().filter(|t| t.id != id).cloned().collect();
        if remaining.len() == teams.len() {
            return Ok(false);
        }
        self.collection.persist(&remaining)?;

        Ok(true)
    }
}
