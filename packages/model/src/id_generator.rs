use crate::NodeId;
use crc32fast::Hasher;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use web_time::{SystemTime, UNIX_EPOCH};

static SESSION_SEED: OnceLock<String> = OnceLock::new();
static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Hash an arbitrary key into a short hex seed using CRC32
pub fn get_seed(key: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(key.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Seed shared by every id minted in this process.
///
/// Derived from the process id and start time so that documents produced by
/// different editor sessions do not collide when merged through import.
/// Hosts without process ids (the browser) should call [`seed_session`]
/// with their own entropy before the first id is minted.
pub fn session_seed() -> &'static str {
    SESSION_SEED.get_or_init(|| {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        get_seed(&format!("{}:{}", process_tag(), nanos))
    })
}

/// Fix the session seed from host-provided entropy. Returns `false` when a
/// seed was already in use.
pub fn seed_session(entropy: &str) -> bool {
    SESSION_SEED.set(get_seed(entropy)).is_ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn process_tag() -> u32 {
    std::process::id()
}

#[cfg(target_arch = "wasm32")]
fn process_tag() -> u32 {
    0
}

/// Mint the next process-unique node id
pub fn next_node_id() -> NodeId {
    let count = COUNTER.fetch_add(1, Ordering::Relaxed) + 1;
    NodeId::new(format!("n{}-{}", session_seed(), count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_generation() {
        let id1 = get_seed("/entry");
        let id2 = get_seed("/entry");

        // Same key always generates same seed
        assert_eq!(id1, id2);

        // Different keys generate different seeds
        let id3 = get_seed("/styles");
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_sequential_ids_share_session_seed() {
        let seed = session_seed();

        let ids: Vec<NodeId> = (0..3).map(|_| next_node_id()).collect();

        for id in &ids {
            assert!(id.as_str().starts_with(&format!("n{}-", seed)));
        }

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_seed_is_fixed_once_used() {
        let seed = session_seed().to_string();

        assert!(!seed_session("late entropy"));
        assert_eq!(session_seed(), seed);
        assert!(next_node_id().as_str().starts_with(&format!("n{}-", seed)));
    }

    #[test]
    fn test_ids_unique_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (0..250).map(|_| next_node_id()).collect::<Vec<_>>()))
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "id minted twice");
            }
        }
        assert_eq!(seen.len(), 1000);
    }
}
