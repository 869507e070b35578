//! Filesystem card storage: one JSON document per card.

use crate::traits::CardRepository;
use crate::types::{CardSummary, sort_summaries};
use crate::{StoreError, StoreResult};
use fc_project::{FieldCard, card_from_json, card_to_json, is_valid_card_id};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

type KeyLocks = Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>;

#[derive(Clone)]
pub struct FileCardStore {
    root_dir: PathBuf,
    locks: KeyLocks,
}

impl FileCardStore {
    pub fn new(root_dir: PathBuf) -> StoreResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self {
            root_dir,
            locks: Arc::default(),
        })
    }

    /// Store rooted at `<workspace>/.fieldcards/cards`.
    pub fn for_workspace(workspace_dir: &Path) -> StoreResult<Self> {
        Self::new(workspace_dir.join(".fieldcards").join("cards"))
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn card_path(&self, id: &str) -> PathBuf {
        self.root_dir.join(format!("{}.json", id))
    }

    fn temp_path(&self, id: &str) -> PathBuf {
        self.root_dir.join(format!(".{}.json.tmp", id))
    }

    fn key_lock(&self, id: &str) -> Arc<Mutex<()>> {
        let mut table = lock_ignoring_poison(&self.locks);
        table.entry(id.to_string()).or_default().clone()
    }

    /// Drop the lock entry for `id` unless another caller still holds it.
    fn release_key(&self, id: &str) {
        let mut table = lock_ignoring_poison(&self.locks);
        if table.get(id).is_some_and(|k| Arc::strong_count(k) == 1) {
            table.remove(id);
        }
    }

    #[cfg(test)]
    fn tracked_keys(&self) -> usize {
        lock_ignoring_poison(&self.locks).len()
    }

    /// Caller must hold the key lock for `card.id`.
    fn write_card(&self, card: &FieldCard) -> StoreResult<()> {
        let content = card_to_json(card)?;

        // Write-then-rename so readers never observe a partial document.
        let tmp = self.temp_path(&card.id);
        fs::write(&tmp, content)?;
        fs::rename(&tmp, self.card_path(&card.id))?;
        Ok(())
    }

    fn read_card(&self, id: &str) -> StoreResult<FieldCard> {
        let path = self.card_path(id);
        if !path.exists() {
            return Err(StoreError::CardNotFound {
                card_id: id.to_string(),
            });
        }
        let content = fs::read_to_string(path)?;
        Ok(card_from_json(&content)?)
    }
}

fn lock_ignoring_poison<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn check_id(id: &str) -> StoreResult<()> {
    if is_valid_card_id(id) {
        Ok(())
    } else {
        Err(StoreError::InvalidId { id: id.to_string() })
    }
}

impl CardRepository for FileCardStore {
    fn save(&self, card: &FieldCard) -> StoreResult<()> {
        check_id(&card.id)?;

        let key = self.key_lock(&card.id);
        let _guard = lock_ignoring_poison(&key);
        self.write_card(card)?;

        tracing::debug!(card_id = %card.id, "saved field card");
        Ok(())
    }

    fn load(&self, id: &str) -> StoreResult<FieldCard> {
        check_id(id)?;
        self.read_card(id)
    }

    fn update(
        &self,
        id: &str,
        edit: &mut dyn FnMut(&mut FieldCard),
    ) -> StoreResult<FieldCard> {
        check_id(id)?;
        let key = self.key_lock(id);
        let _guard = lock_ignoring_poison(&key);

        let mut card = self.read_card(id)?;
        edit(&mut card);
        if card.id != id {
            return Err(StoreError::InvalidId { id: card.id });
        }
        self.write_card(&card)?;

        tracing::debug!(card_id = id, "updated field card");
        Ok(card)
    }

    fn exists(&self, id: &str) -> StoreResult<bool> {
        check_id(id)?;
        Ok(self.card_path(id).exists())
    }

    fn list(&self) -> StoreResult<Vec<CardSummary>> {
        let mut summaries = Vec::new();

        if !self.root_dir.exists() {
            return Ok(summaries);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if !is_valid_card_id(id) {
                continue;
            }
            match self.load(id) {
                Ok(card) => summaries.push(CardSummary::from(&card)),
                Err(e) => tracing::warn!(card_id = id, error = %e, "skipping unreadable card"),
            }
        }

        sort_summaries(&mut summaries);
        Ok(summaries)
    }

    fn delete(&self, id: &str) -> StoreResult<()> {
        check_id(id)?;
        let key = self.key_lock(id);
        let guard = lock_ignoring_poison(&key);

        let path = self.card_path(id);
        let removed = if path.exists() {
            fs::remove_file(path).map(|_| true)
        } else {
            Ok(false)
        };

        drop(guard);
        drop(key);
        self.release_key(id);

        if removed? {
            tracing::debug!(card_id = id, "deleted field card");
        }
        Ok(())
    }
}
