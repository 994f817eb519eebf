//! Blockchain sync worker
//!
//! One background thread per connected wallet advances the local height
//! toward the network height. All shared fields are atomics (single writer,
//! many readers); shutdown is cooperative: `stop()` clears the running flag,
//! the thread observes it within one poll quantum, and `stop()` joins before
//! returning so no thread can outlive the wallet that owns its state.

use chrono::Utc;
use rand::Rng;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::error::{WalletError, WalletResult};

/// Poll interval of the worker loop. Kept short so `stop()` latency stays in
/// the tens of milliseconds.
pub const POLL_QUANTUM: Duration = Duration::from_millis(50);

/// Simulated blocks gained per poll iteration.
const MIN_STEP: u64 = 500;
const MAX_STEP: u64 = 1_500;

/// Shared sync state: written by the worker thread, read from any thread.
#[derive(Debug, Default)]
pub struct SyncState {
    running: AtomicBool,
    connected: AtomicBool,
    syncing: AtomicBool,
    current_height: AtomicU64,
    target_height: AtomicU64,
    peer_count: AtomicU32,
    last_block_time: AtomicU64,
    // Rate tracking for the time-remaining estimate
    origin_height: AtomicU64,
    origin_epoch_ms: AtomicU64,
    connection: Mutex<String>,
}

/// Point-in-time copy of the sync state.
#[derive(Debug, Clone)]
pub struct SyncSnapshot {
    pub current_height: u64,
    pub target_height: u64,
    pub is_connected: bool,
    pub is_syncing: bool,
    pub peer_count: u32,
    pub connection: String,
    pub last_block_time: Option<u64>,
    pub progress_percentage: f32,
    pub estimated_time_remaining: u64,
}

impl SyncState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the connected state and arm the sync run from `start_height`.
    pub fn connect(&self, start_height: u64, target_height: u64, connection: &str, peers: u32) {
        self.current_height.store(start_height, Ordering::Relaxed);
        self.target_height.store(target_height, Ordering::Relaxed);
        self.connected.store(true, Ordering::Relaxed);
        self.syncing
            .store(start_height < target_height, Ordering::Relaxed);
        self.peer_count.store(peers, Ordering::Relaxed);
        self.reset_rate_origin(start_height);
        if let Ok(mut guard) = self.connection.lock() {
            *guard = connection.to_string();
        }
    }

    pub fn disconnect(&self) {
        self.connected.store(false, Ordering::Relaxed);
        self.syncing.store(false, Ordering::Relaxed);
        self.peer_count.store(0, Ordering::Relaxed);
        if let Ok(mut guard) = self.connection.lock() {
            *guard = "Disconnected".to_string();
        }
    }

    /// Restart scanning from `start_height` (clamped to the target).
    pub fn rescan(&self, start_height: u64) {
        let target = self.target_height.load(Ordering::Relaxed);
        let start = start_height.min(target);
        self.current_height.store(start, Ordering::Relaxed);
        self.syncing.store(start < target, Ordering::Relaxed);
        self.reset_rate_origin(start);
    }

    /// One bounded sync step. Returns false once the target is reached (or
    /// syncing is off), which ends the worker loop naturally.
    pub fn advance_once(&self) -> bool {
        if !self.syncing.load(Ordering::Relaxed) {
            return false;
        }
        let target = self.target_height.load(Ordering::Relaxed);
        let current = self.current_height.load(Ordering::Relaxed);
        if current >= target {
            self.syncing.store(false, Ordering::Relaxed);
            return false;
        }

        let step = rand::thread_rng().gen_range(MIN_STEP..=MAX_STEP);
        let next = current.saturating_add(step).min(target);
        self.current_height.store(next, Ordering::Relaxed);
        self.last_block_time
            .store(Utc::now().timestamp() as u64, Ordering::Relaxed);

        if next == target {
            self.syncing.store(false, Ordering::Relaxed);
            log::info!("Blockchain sync completed at height {}", next);
            false
        } else {
            true
        }
    }

    pub fn current_height(&self) -> u64 {
        self.current_height.load(Ordering::Relaxed)
    }

    pub fn target_height(&self) -> u64 {
        self.target_height.load(Ordering::Relaxed)
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Relaxed)
    }

    pub fn is_syncing(&self) -> bool {
        self.syncing.load(Ordering::Relaxed)
    }

    pub fn peer_count(&self) -> u32 {
        self.peer_count.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> SyncSnapshot {
        let current = self.current_height();
        let target = self.target_height();
        let last_block = self.last_block_time.load(Ordering::Relaxed);

        let progress = if target == 0 {
            0.0
        } else {
            (current as f64 / target as f64 * 100.0) as f32
        };

        SyncSnapshot {
            current_height: current,
            target_height: target,
            is_connected: self.is_connected(),
            is_syncing: self.is_syncing(),
            peer_count: self.peer_count(),
            connection: self
                .connection
                .lock()
                .map(|g| g.clone())
                .unwrap_or_default(),
            last_block_time: (last_block > 0).then_some(last_block),
            progress_percentage: progress,
            estimated_time_remaining: self.estimate_remaining_secs(current, target),
        }
    }

    fn estimate_remaining_secs(&self, current: u64, target: u64) -> u64 {
        if !self.is_syncing() || current >= target {
            return 0;
        }
        let advanced = current.saturating_sub(self.origin_height.load(Ordering::Relaxed));
        let elapsed_ms =
            (Utc::now().timestamp_millis() as u64).saturating_sub(self.origin_epoch_ms.load(Ordering::Relaxed));
        if advanced == 0 || elapsed_ms == 0 {
            return 0;
        }
        let remaining = target - current;
        remaining.saturating_mul(elapsed_ms) / advanced / 1_000
    }

    fn reset_rate_origin(&self, height: u64) {
        self.origin_height.store(height, Ordering::Relaxed);
        self.origin_epoch_ms
            .store(Utc::now().timestamp_millis() as u64, Ordering::Relaxed);
    }

    fn set_running(&self, value: bool) {
        self.running.store(value, Ordering::Relaxed);
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }
}

/// Handle to the background sync thread. Dropping the handle stops and joins
/// the thread, so the state it captured can never be used after free.
pub struct SyncWorker {
    state: Arc<SyncState>,
    handle: Option<JoinHandle<()>>,
}

impl SyncWorker {
    /// Spawn the sync loop over an armed `SyncState`.
    pub fn start(state: Arc<SyncState>) -> WalletResult<Self> {
        state.set_running(true);
        let thread_state = Arc::clone(&state);

        let handle = thread::Builder::new()
            .name("fuego-sync".to_string())
            .spawn(move || {
                log::debug!("Sync worker started");
                loop {
                    thread::sleep(POLL_QUANTUM);
                    // Re-check the stop flag every quantum before touching
                    // state; shutdown latency is bounded by one interval.
                    if !thread_state.is_running() {
                        break;
                    }
                    if !thread_state.advance_once() {
                        break;
                    }
                }
                thread_state.set_running(false);
                log::debug!("Sync worker exited");
            })
            .map_err(|e| WalletError::Internal(format!("failed to spawn sync worker: {e}")))?;

        Ok(Self {
            state,
            handle: Some(handle),
        })
    }

    /// Signal the thread to stop and join it. Join failure (a panicked
    /// worker) is logged and the thread detached; it can no longer touch the
    /// shared state once the flag is down.
    pub fn stop(&mut self) {
        self.state.set_running(false);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("Sync worker thread panicked during shutdown; detaching");
            }
        }
    }
}

impl Drop for SyncWorker {
    fn drop(&mut self) {
        self.stop();
    }
}
