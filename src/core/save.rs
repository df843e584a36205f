//! Checksummed career snapshots and load-time migration.

use super::constants::{
    MAX_TRAINING_SLOTS, SAVE_FILE_NAME, SAVE_VERSION, SAVE_VERSION_MAGIC, STARTING_TRAINING_SLOTS,
};
use super::error::{SaveError, SaveResult};
use super::game_state::GameState;
use crate::catalog::upgrades::UpgradeEffect;
use crate::upgrades::logic::owned_upgrades;
use crate::utils::persistence::save_path;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

const HEADER_LEN: usize = 8 + 4;
const CHECKSUM_LEN: usize = 32;

/// Drills added in save version 2 that defensive careers get for free.
const V2_DEFENSIVE_DRILLS: [&str; 2] = ["tackle_circuit", "pursuit_drills"];

/// Anything that can persist a snapshot. The tick driver only sees this
/// trait, so tests can swap in a store that fails.
pub trait SnapshotStore {
    fn save(&mut self, state: &GameState) -> SaveResult<()>;
}

/// Discards every snapshot. Used by headless runs that never persist.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStore;

impl SnapshotStore for NullStore {
    fn save(&mut self, _state: &GameState) -> SaveResult<()> {
        Ok(())
    }
}

/// Manages saving and loading game state with checksummed format
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Creates a SaveManager writing to the default save directory.
    pub fn new() -> SaveResult<Self> {
        Ok(Self {
            save_path: save_path(SAVE_FILE_NAME)?,
        })
    }

    /// Creates a SaveManager for an explicit file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: path.into(),
        }
    }

    /// Creates a SaveManager for testing with a unique temporary directory
    #[cfg(test)]
    fn new_for_test() -> SaveResult<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let temp_dir = std::env::temp_dir().join(format!(
            "gridiron-test-{}-{}",
            std::process::id(),
            test_id
        ));
        fs::create_dir_all(&temp_dir)?;

        Ok(Self::with_path(temp_dir.join(SAVE_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Writes the snapshot to disk.
    ///
    /// File format:
    /// - Version magic (8 bytes)
    /// - Payload length (4 bytes)
    /// - JSON game state (variable length)
    /// - SHA256 checksum of everything above (32 bytes)
    pub fn save_state(&self, state: &GameState) -> SaveResult<()> {
        let bytes = encode_snapshot(state)?;
        fs::write(&self.save_path, bytes)?;
        Ok(())
    }

    /// Loads, verifies and migrates the snapshot.
    ///
    /// Missing files, bad headers, checksum mismatches and unreadable
    /// payloads are all errors; the caller starts a fresh career instead.
    pub fn load(&self) -> SaveResult<GameState> {
        let bytes = fs::read(&self.save_path)?;
        let state = decode_snapshot(&bytes)?;
        tracing::info!(path = %self.save_path.display(), "loaded career");
        Ok(state)
    }
}

impl SnapshotStore for SaveManager {
    fn save(&mut self, state: &GameState) -> SaveResult<()> {
        self.save_state(state)
    }
}

fn checksum(header: &[u8], payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(header);
    hasher.update(payload);
    let mut digest = [0u8; CHECKSUM_LEN];
    digest.copy_from_slice(&hasher.finalize());
    digest
}

pub fn encode_snapshot(state: &GameState) -> SaveResult<Vec<u8>> {
    let payload = serde_json::to_vec(state)?;
    let len = u32::try_from(payload.len())
        .map_err(|_| SaveError::Migration("snapshot too large".to_string()))?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len() + CHECKSUM_LEN);
    bytes.extend_from_slice(&SAVE_VERSION_MAGIC.to_le_bytes());
    bytes.extend_from_slice(&len.to_le_bytes());
    let digest = checksum(&bytes, &payload);
    bytes.extend_from_slice(&payload);
    bytes.extend_from_slice(&digest);
    Ok(bytes)
}

pub fn decode_snapshot(bytes: &[u8]) -> SaveResult<GameState> {
    if bytes.len() < HEADER_LEN {
        return Err(SaveError::Truncated);
    }
    let (header, rest) = bytes.split_at(HEADER_LEN);

    let mut magic = [0u8; 8];
    magic.copy_from_slice(&header[..8]);
    if u64::from_le_bytes(magic) != SAVE_VERSION_MAGIC {
        return Err(SaveError::BadMagic);
    }

    let mut len_bytes = [0u8; 4];
    len_bytes.copy_from_slice(&header[8..]);
    let len = u32::from_le_bytes(len_bytes) as usize;
    if rest.len() < len + CHECKSUM_LEN {
        return Err(SaveError::Truncated);
    }

    let (payload, stored) = rest.split_at(len);
    if checksum(header, payload)[..] != stored[..CHECKSUM_LEN] {
        return Err(SaveError::ChecksumMismatch);
    }

    let value: Value = serde_json::from_slice(payload)?;
    migrate(value)
}

/// Brings a raw snapshot up to the current version.
///
/// Always clears the in-progress game and its opponent: a pre-selected
/// opponent from another session would not match the next simulated game.
pub fn migrate(mut value: Value) -> SaveResult<GameState> {
    let root = value
        .as_object_mut()
        .ok_or_else(|| SaveError::Migration("save data is not an object".to_string()))?;

    let version = root.get("version").and_then(Value::as_u64).unwrap_or(0);
    if version < 2 {
        migrate_v1_to_v2(root);
    }

    if let Some(season) = root.get_mut("season").and_then(Value::as_object_mut) {
        season.insert("game_in_progress".to_string(), Value::Bool(false));
        season.insert("current_opponent".to_string(), Value::Null);
    }
    root.insert("version".to_string(), Value::from(SAVE_VERSION));

    let mut state: GameState = serde_json::from_value(value)?;
    state.player.refresh_rating();
    let capacity = slot_capacity(&state);
    state.training.resize(capacity);

    if version < SAVE_VERSION as u64 {
        tracing::info!(from = version, to = SAVE_VERSION, "migrated save");
    }
    Ok(state)
}

/// Defensive careers from before version 2 get the tackle and pursuit drills.
fn migrate_v1_to_v2(root: &mut Map<String, Value>) {
    let is_defense = root
        .get("player")
        .and_then(|p| p.get("position"))
        .and_then(Value::as_str)
        .map(|code| matches!(code, "LB" | "CB" | "S"))
        .unwrap_or(false);
    if !is_defense {
        return;
    }

    let unlocked = root
        .entry("unlocked_drills")
        .or_insert_with(|| Value::Array(Vec::new()));
    if let Some(list) = unlocked.as_array_mut() {
        for drill in V2_DEFENSIVE_DRILLS {
            if !list.iter().any(|v| v.as_str() == Some(drill)) {
                list.push(Value::from(drill));
            }
        }
    }
}

/// Starting slots plus one per purchased slot unlock, capped.
fn slot_capacity(state: &GameState) -> usize {
    let unlocked: usize = owned_upgrades(state)
        .filter(|(def, _)| matches!(def.effect, UpgradeEffect::SlotUnlock))
        .map(|(_, level)| level as usize)
        .sum();
    (STARTING_TRAINING_SLOTS + unlocked).min(MAX_TRAINING_SLOTS)
}
