use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use uuid::Uuid;

use super::model::ToastId;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// How toast identifiers are produced.
///
/// `Random` ids are v4 UUIDs. `Timestamp` ids combine the current time with
/// a pseudo-random suffix; they are unique within one process with
/// overwhelming probability, but not by construction, and two processes can
/// collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    #[default]
    Random,
    Timestamp,
}

pub fn generate_toast_id(strategy: IdStrategy) -> ToastId {
    match strategy {
        IdStrategy::Random => ToastId::new(format!("toast-{}", Uuid::new_v4())),
        IdStrategy::Timestamp => {
            let millis = Utc::now().timestamp_millis();
            ToastId::new(format!("toast-{}-{}", millis, random_suffix(millis)))
        }
    }
}

fn random_suffix(millis: i64) -> String {
    let mut hasher = RandomState::new().build_hasher();
    hasher.write_u64(SEQUENCE.fetch_add(1, Ordering::Relaxed));
    hasher.write_i64(millis);
    let mut n = hasher.finish();

    let mut suffix = String::with_capacity(SUFFIX_LEN);
    for _ in 0..SUFFIX_LEN {
        suffix.push(BASE36[(n % 36) as usize] as char);
        n /= 36;
    }
    suffix
}
