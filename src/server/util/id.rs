use chrono::Utc;
use rand::Rng;

/// Generates a public record id.
///
/// Hex millisecond timestamp followed by 64 random bits, so ids sort roughly by
/// creation time and stay unique when two records share a millisecond.
pub fn generate_record_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix: u64 = rand::rng().random();
    format!("{:x}-{:016x}", millis, suffix)
}
