//! Mining worker
//!
//! Independent background thread producing simulated hash and share
//! statistics. It shares nothing with the sync worker; its counters live in a
//! dedicated `MiningSession` read by the command path through snapshots.
//! Shutdown follows the same protocol as the sync worker: clear the running
//! flag, join, then release.

use chrono::Utc;
use rand::Rng;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::error::{WalletError, WalletResult};
use crate::network::{BLOCK_REWARD, NETWORK_DIFFICULTY};

/// Worker tick; also bounds `stop()` latency.
pub const MINING_QUANTUM: Duration = Duration::from_millis(100);

/// Nominal hashrate per mining thread, in H/s.
const HASHRATE_PER_THREAD: u64 = 125;

/// Per-tick share probabilities.
const VALID_SHARE_P: f64 = 0.05;
const INVALID_SHARE_P: f64 = 0.01;

pub const MAX_MINING_THREADS: u32 = 32;

#[derive(Debug, Default, Clone)]
pub struct PoolConfig {
    pub pool_address: Option<String>,
    pub worker_name: Option<String>,
}

/// Shared mining state: written by the worker thread, read from any thread.
#[derive(Debug, Default)]
pub struct MiningSession {
    running: AtomicBool,
    background: AtomicBool,
    threads: AtomicU32,
    hashrate: AtomicU64,
    total_hashes: AtomicU64,
    valid_shares: AtomicU64,
    invalid_shares: AtomicU64,
    started_at_epoch: AtomicU64,
    last_share_epoch: AtomicU64,
    pool: Mutex<PoolConfig>,
}

/// Point-in-time copy of the mining session.
#[derive(Debug, Clone)]
pub struct MiningSnapshot {
    pub is_mining: bool,
    pub threads: u32,
    pub hashrate: u64,
    pub total_hashes: u64,
    pub valid_shares: u64,
    pub invalid_shares: u64,
    pub difficulty: u64,
    pub block_reward: u64,
    pub uptime_secs: u64,
    pub last_share_time: Option<u64>,
    pub pool_address: Option<String>,
    pub worker_name: Option<String>,
}

impl MiningSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    pub fn set_pool(&self, pool_address: Option<String>, worker_name: Option<String>) {
        if let Ok(mut guard) = self.pool.lock() {
            guard.pool_address = pool_address;
            guard.worker_name = worker_name;
        }
    }

    pub fn snapshot(&self) -> MiningSnapshot {
        let started = self.started_at_epoch.load(Ordering::Relaxed);
        let last_share = self.last_share_epoch.load(Ordering::Relaxed);
        let pool = self
            .pool
            .lock()
            .map(|g| g.clone())
            .unwrap_or_default();

        let uptime = if self.is_running() && started > 0 {
            (Utc::now().timestamp() as u64).saturating_sub(started)
        } else {
            0
        };

        MiningSnapshot {
            is_mining: self.is_running(),
            threads: self.threads.load(Ordering::Relaxed),
            hashrate: self.hashrate.load(Ordering::Relaxed),
            total_hashes: self.total_hashes.load(Ordering::Relaxed),
            valid_shares: self.valid_shares.load(Ordering::Relaxed),
            invalid_shares: self.invalid_shares.load(Ordering::Relaxed),
            difficulty: NETWORK_DIFFICULTY,
            block_reward: BLOCK_REWARD,
            uptime_secs: uptime,
            last_share_time: (last_share > 0).then_some(last_share),
            pool_address: pool.pool_address,
            worker_name: pool.worker_name,
        }
    }

    /// Arm the session for a new run: counters reset, thread count and
    /// nominal hashrate set.
    fn arm(&self, threads: u32, background: bool) {
        self.threads.store(threads, Ordering::Relaxed);
        self.hashrate
            .store(threads as u64 * HASHRATE_PER_THREAD, Ordering::Relaxed);
        self.total_hashes.store(0, Ordering::Relaxed);
        self.valid_shares.store(0, Ordering::Relaxed);
        self.invalid_shares.store(0, Ordering::Relaxed);
        self.started_at_epoch
            .store(Utc::now().timestamp() as u64, Ordering::Relaxed);
        self.last_share_epoch.store(0, Ordering::Relaxed);
        self.background.store(background, Ordering::Relaxed);
        self.running.store(true, Ordering::Relaxed);
    }

    /// Clear run state after the worker is joined.
    fn disarm(&self) {
        self.running.store(false, Ordering::Relaxed);
        self.threads.store(0, Ordering::Relaxed);
        self.hashrate.store(0, Ordering::Relaxed);
    }

    fn tick(&self) {
        let hashrate = self.hashrate.load(Ordering::Relaxed);
        // One tick is a tenth of a second of nominal hashing.
        self.total_hashes
            .fetch_add(hashrate / 10, Ordering::Relaxed);

        let mut rng = rand::thread_rng();
        if rng.gen_bool(VALID_SHARE_P) {
            self.valid_shares.fetch_add(1, Ordering::Relaxed);
            self.last_share_epoch
                .store(Utc::now().timestamp() as u64, Ordering::Relaxed);
        } else if rng.gen_bool(INVALID_SHARE_P) {
            self.invalid_shares.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// Handle to the background mining thread.
#[derive(Debug)]
pub struct MiningWorker {
    session: Arc<MiningSession>,
    handle: Option<JoinHandle<()>>,
}

impl MiningWorker {
    /// Validate and start a mining run over the shared session.
    pub fn start(session: Arc<MiningSession>, threads: u32, background: bool) -> WalletResult<Self> {
        if threads == 0 || threads > MAX_MINING_THREADS {
            return Err(WalletError::InvalidThreadCount(threads));
        }
        if session.is_running() {
            return Err(WalletError::AlreadyMining);
        }

        session.arm(threads, background);
        let thread_session = Arc::clone(&session);

        let handle = thread::Builder::new()
            .name("fuego-miner".to_string())
            .spawn(move || {
                log::debug!("Mining worker started");
                loop {
                    thread::sleep(MINING_QUANTUM);
                    if !thread_session.is_running() {
                        break;
                    }
                    thread_session.tick();
                }
                log::debug!("Mining worker exited");
            })
            .map_err(|e| {
                session.disarm();
                WalletError::Internal(format!("failed to spawn mining worker: {e}"))
            })?;

        log::info!("Mining started with {} threads", threads);
        Ok(Self {
            session,
            handle: Some(handle),
        })
    }

    /// Stop and join the worker, then zero thread count and hashrate.
    pub fn stop(&mut self) {
        self.session.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("Mining worker thread panicked during shutdown; detaching");
            }
        }
        self.session.disarm();
    }
}

impl Drop for MiningWorker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_thread_counts() {
        let session = Arc::new(MiningSession::new());
        for threads in [0, 33, 100] {
            let err = MiningWorker::start(Arc::clone(&session), threads, false).unwrap_err();
            assert!(matches!(err, WalletError::InvalidThreadCount(t) if t == threads));
            assert!(!session.is_running());
        }
    }

    #[test]
    fn rejects_double_start() {
        let session = Arc::new(MiningSession::new());
        let mut worker = MiningWorker::start(Arc::clone(&session), 2, false).unwrap();

        let err = MiningWorker::start(Arc::clone(&session), 2, false).unwrap_err();
        assert!(matches!(err, WalletError::AlreadyMining));

        worker.stop();
    }

    #[test]
    fn counters_advance_while_running_and_freeze_on_stop() {
        let session = Arc::new(MiningSession::new());
        let mut worker = MiningWorker::start(Arc::clone(&session), 4, true).unwrap();

        thread::sleep(Duration::from_millis(350));
        let mid = session.snapshot();
        assert!(mid.is_mining);
        assert_eq!(mid.threads, 4);
        assert_eq!(mid.hashrate, 4 * HASHRATE_PER_THREAD);
        assert!(mid.total_hashes > 0);

        worker.stop();
        let stopped = session.snapshot();
        assert!(!stopped.is_mining);
        assert_eq!(stopped.threads, 0);
        assert_eq!(stopped.hashrate, 0);

        let frozen = stopped.total_hashes;
        thread::sleep(Duration::from_millis(150));
        assert_eq!(session.snapshot().total_hashes, frozen);
    }

    #[test]
    fn restart_resets_counters() {
        let session = Arc::new(MiningSession::new());
        let mut worker = MiningWorker::start(Arc::clone(&session), 1, false).unwrap();
        thread::sleep(Duration::from_millis(250));
        worker.stop();
        assert!(session.snapshot().total_hashes > 0);

        let mut worker = MiningWorker::start(Arc::clone(&session), 1, false).unwrap();
        // Counters restart from zero; within one tick they are below the
        // previous run's total.
        let snapshot = session.snapshot();
        assert!(snapshot.total_hashes <= HASHRATE_PER_THREAD / 10);
        worker.stop();
    }

    #[test]
    fn pool_config_round_trips() {
        let session = MiningSession::new();
        session.set_pool(Some("pool.fuego.network".into()), Some("rig-1".into()));
        let snapshot = session.snapshot();
        assert_eq!(snapshot.pool_address.as_deref(), Some("pool.fuego.network"));
        assert_eq!(snapshot.worker_name.as_deref(), Some("rig-1"));
    }
}
