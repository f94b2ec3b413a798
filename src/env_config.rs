//! Shared environment configuration for the driver binaries.
//!
//! Consolidates the `RAINWORDS_THREADS` read used by both binaries.

/// Read `RAINWORDS_THREADS` (fallback `RAYON_NUM_THREADS`, default 8) and
/// build the global rayon thread pool. Tolerates an already-initialized
/// pool. Returns the thread count.
pub fn init_rayon_threads() -> usize {
    let num_threads = std::env::var("RAINWORDS_THREADS")
        .or_else(|_| std::env::var("RAYON_NUM_THREADS"))
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .ok(); // May fail if already initialized
    num_threads
}
