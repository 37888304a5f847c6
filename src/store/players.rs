use std::path::Path;

use tokio::sync::Mutex;

use super::collection::{JsonCollection, Record, next_id};
use crate::domain::models::{Player, PlayerUpdate};
use crate::errors::StoreError;

impl Record for Player {
    fn id(&self) -> i64 {
        self.id
    }
}

/// File-backed player collection, same locking discipline as `TeamStore`.
pub struct PlayerStore {
    collection: JsonCollection,
    lock: Mutex<()>,
}

impl PlayerStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            collection: JsonCollection::new(path),
            lock: Mutex::new(()),
        }
    }

    pub async fn list(&self) -> Result<Vec<Player>, StoreError> {
        let _guard = self.lock.lock().await;
        self.collection.load()
    }

    pub async fn get(&self, id: i64) -> Result<Option<Player>, StoreError> {
        let _guard = self.lock.lock().await;
        let players: Vec<Player> = self.collection.load()?;
        Ok(players.into_iter().find(|p| p.id == id))
    }

    pub async fn create(
        &self,
        team_id: i64,
        name: String,
        number: i64,
        position: String,
    ) -> Result<Player, StoreError> {
        let _guard = self.lock.lock().await;
        let mut players: Vec<Player> = self.collection.load()?;

        let player = Player {
            id: next_id(&players),
            team_id,
            name,
            number,
            position,
        };
        players.push(player.clone());
        self.collection.persist(&players)?;

        Ok(player)
    }

    /// Merge only the fields present in the update. `None` when no player
    /// has the given id.
    pub async fn update(
        &self,
        id: i64,
        update: PlayerUpdate,
    ) -> Result<Option<Player>, StoreError> {
        let _guard = self.lock.lock().await;
        let mut players: Vec<Player> = self.collection.load()?;

        let Some(player) = players.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        if let Some(team_id) = update.team_id {
            player.team_id = team_id;
        }
        if let Some(name) = update.name {
            player.name = name;
        }
        if let Some(number) = update.number {
            player.number = number;
        }
        if let Some(position) = update.position {
            player.position = position;
        }
        let updated = player.clone();
        self.collection.persist(&players)?;

        Ok(Some(updated))
    }

    /// Returns false when no record matched; the file is not rewritten in
    /// that case.
    pub async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let _guard = self.lock.lock().await;
        let players: Vec<Player> = self.collection.load()?;

        let remaining: Vec<Player> = players.iter().filter(|p| p.id != id).cloned().collect();
        if remaining.len() == players.len() {
            return Ok(false);
        }
        self.collection.persist(&remaining)?;

        Ok(true)
    }

    /// All players whose advisory team reference equals `team_id`. Empty when
    /// none match, including when the team itself does not exist.
    pub async fn by_team(&self, team_id: i64) -> Result<Vec<Player>, StoreError> {
        let _guard = self.lock.lock().await;
        let players: Vec<Player> = self.collection.load()?;
        Ok(players.into_iter().filter(|p| p.team_id == team_id).collect())
    }

    /// Case-insensitive substring match on the player name.
    pub async fn search(&self, query: &str) -> Result<Vec<Player>, StoreError> {
        let needle = query.to_lowercase();
        let _guard = self.lock.lock().await;
        let players: Vec<Player> = self.collection.load()?;
        Ok(players
            .into_iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect())
    }
}
