//! Shared helper utilities for factory methods.

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Values start above a realistic snowflake floor so they parse as Discord ids.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    100_000_000_000_000_000 + COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}
