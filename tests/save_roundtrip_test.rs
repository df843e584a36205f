//! Integration test: Saving and resuming a career
//!
//! Writes real snapshot files through SaveManager, reloads them and checks the
//! career picks up where it left off.

use gridiron::character::attributes::Position;
use gridiron::core::error::SaveError;
use gridiron::core::game_loop::CareerLoop;
use gridiron::core::game_state::GameState;
use gridiron::core::save::SaveManager;
use gridiron::upgrades::logic::purchase_upgrade;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

const START: i64 = 1_700_000_000_000;

fn temp_save_path() -> PathBuf {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let dir = std::env::temp_dir().join(format!(
        "gridiron-it-{}-{}",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    ));
    fs::create_dir_all(&dir).expect("Failed to create temp dir");
    dir.join("career.sav")
}

#[test]
fn test_autosave_writes_a_loadable_snapshot() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut store = SaveManager::with_path(temp_save_path());
    let mut career = CareerLoop::new(GameState::new("Saver".to_string(), Position::TE, START));

    for i in 1..=90 {
        career.tick_at(1.0, START + i * 1000, &mut store, &mut rng);
    }
    assert!(store.save_exists());

    let loaded = store.load().expect("Failed to load autosave");
    assert_eq!(loaded.player.id, career.state().player.id);
    assert_eq!(loaded.last_save_time, START + 90_000);
    assert_eq!(loaded.season.current_week, 2);
    assert_eq!(loaded.season.match_history.len(), 1);

    fs::remove_file(store.path()).expect("Failed to remove save file");
}

#[test]
fn test_reload_clears_game_in_progress_and_resumes() {
    let mut rng = ChaCha8Rng::seed_from_u64(10);
    let store = SaveManager::with_path(temp_save_path());

    let mut state = GameState::new("Mid Game".to_string(), Position::QB, START);
    state.season.game_in_progress = true;
    state.season.current_opponent = Some("Packers".to_string());
    state.season.week_timer = 10.0;
    store.save_state(&state).expect("Failed to save");

    let loaded = store.load().expect("Failed to load");
    assert!(!loaded.season.game_in_progress);
    assert_eq!(loaded.season.current_opponent, None);

    // Two minutes away: the pending game plus one more
    let mut career = CareerLoop::new(loaded);
    let (report, messages) = career.resume_at(START + 120_000, &mut rng);
    assert_eq!(report.match_results.len(), 2);
    assert!(messages[0].starts_with("Welcome back!"));
    assert_eq!(career.state().season.current_week, 3);
    assert!((career.state().season.week_timer - 10.0).abs() < 1e-9);

    fs::remove_file(store.path()).expect("Failed to remove save file");
}

#[test]
fn test_purchases_survive_a_reload() {
    let store = SaveManager::with_path(temp_save_path());
    let mut state = GameState::new("Shopper".to_string(), Position::RB, START);
    state.season.season_number = 2;
    state.resources.money = 50_000.0;
    state.resources.fame = 100;
    assert!(purchase_upgrade(&mut state, "extra_slot", START).success);
    assert_eq!(state.training.capacity(), 4);
    store.save_state(&state).expect("Failed to save");

    let loaded = store.load().expect("Failed to load");
    assert_eq!(loaded.upgrade_level("extra_slot"), 1);
    assert_eq!(loaded.training.capacity(), 4);
    assert_eq!(loaded.resources, state.resources);

    fs::remove_file(store.path()).expect("Failed to remove save file");
}

#[test]
fn test_corrupt_file_is_rejected() {
    let path = temp_save_path();
    let store = SaveManager::with_path(&path);
    let state = GameState::new("Corrupt".to_string(), Position::S, START);
    store.save_state(&state).expect("Failed to save");

    let mut bytes = fs::read(&path).expect("Failed to read save");
    let middle = bytes.len() / 2;
    bytes[middle] ^= 0x5A;
    fs::write(&path, bytes).expect("Failed to write save");

    assert!(matches!(store.load(), Err(SaveError::ChecksumMismatch)));

    fs::write(&path, b"definitely not a gridiron career file").expect("Failed to write save");
    assert!(matches!(store.load(), Err(SaveError::BadMagic)));

    fs::remove_file(&path).expect("Failed to remove save file");
}
