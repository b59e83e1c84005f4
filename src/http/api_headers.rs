use std::sync::atomic::{AtomicU64, Ordering};

use crate::utils;

static LAST_REQUEST_ID: AtomicU64 = AtomicU64::new(0);

/// Returns a fresh request id rendered as a decimal string.
///
/// Ids are wall-clock nanoseconds bumped through a process-wide atomic, so
/// two responses issued within the same clock tick still get distinct ids.
pub fn gen_request_id() -> String {
    let now = utils::now().timestamp_nanos() as u64;
    let mut last = LAST_REQUEST_ID.load(Ordering::Relaxed);
    loop {
        let id = now.max(last + 1);
        match LAST_REQUEST_ID.compare_exchange_weak(last, id, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => return id.to_string(),
            Err(cur) => last = cur,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_distinct() {
        let a = gen_request_id();
        let b = gen_request_id();
        let c = gen_request_id();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_request_id_is_decimal() {
        let id = gen_request_id();
        assert!(!id.is_empty());
        assert!(id.bytes().all(|b| b.is_ascii_digit()));
    }
}
