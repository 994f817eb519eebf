//! Fuego network parameters.
//!
//! Fixed constants of the XFG chain used by the simulation core. The real
//! values come from the public network; fee and reward figures are the
//! nominal ones the daemon reports.

/// Smallest indivisible unit: 1 XFG = 10^7 atomic units.
pub const ATOMIC_UNITS_PER_XFG: u64 = 10_000_000;

/// Fuego addresses start with "fire" followed by 95 hex characters.
pub const ADDRESS_PREFIX: &str = "fire";
pub const ADDRESS_BODY_LEN: usize = 95;

/// Target seconds between blocks.
pub const DIFFICULTY_TARGET_SECS: u64 = 480;

/// Blocks mined per day at the target block time.
pub const BLOCKS_PER_DAY: u64 = 86_400 / DIFFICULTY_TARGET_SECS;

/// Chain tip reported by the public nodes; used as the sync target until the
/// daemon supplies a live height.
pub const DEFAULT_NETWORK_HEIGHT: u64 = 964_943;

/// Peer count reported by fuego.spaceportx.net.
pub const DEFAULT_PEER_COUNT: u32 = 22;

/// Fixed nominal transaction fee in atomic units (0.1 XFG).
pub const NOMINAL_FEE: u64 = 1_000_000;

/// Current block reward in atomic units.
pub const BLOCK_REWARD: u64 = 3_005_769;

/// Current network difficulty.
pub const NETWORK_DIFFICULTY: u64 = 52_500_024;

pub const DEFAULT_NODE_PORT: u16 = 18_180;

/// Known public Fuego nodes, tried in order when no node is configured.
pub const KNOWN_NODES: &[(&str, u16)] = &[
    ("fuego.spaceportx.net", 18_180),
    ("node1.fuego.network", 18_081),
    ("node2.fuego.network", 18_081),
    ("node3.fuego.network", 18_081),
    ("127.0.0.1", 18_081),
];

/// Convert a term in days to its duration in blocks.
pub fn term_days_to_blocks(term_days: u32) -> u64 {
    term_days as u64 * BLOCKS_PER_DAY
}
