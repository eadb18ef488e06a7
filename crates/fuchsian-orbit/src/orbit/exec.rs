// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Serial and parallel application of a map over enumerated elements.
//!
//! Workers claim fixed-size chunks through an atomic counter. Results are
//! written back by chunk offset, so output order never depends on which
//! worker finished first.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Elements claimed by a worker per fetch.
pub(crate) const CHUNK: usize = 64;

/// Worker count for `requested` (`0` = available parallelism).
pub(crate) fn resolve_workers(requested: usize) -> usize {
    if requested > 0 {
        return requested;
    }
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

/// Serial baseline.
pub(crate) fn map_serial<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    items.iter().map(f).collect()
}

/// Order-preserving parallel map.
///
/// Runs serially when `items` is shorter than `threshold` or only one worker
/// would get work.
pub(crate) fn map_ordered<T, U, F>(items: &[T], workers: usize, threshold: usize, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync,
{
    let workers = resolve_workers(workers).min(items.len().div_ceil(CHUNK));
    if items.len() < threshold || workers <= 1 {
        return map_serial(items, f);
    }

    let next_chunk = AtomicUsize::new(0);
    let mut chunks: Vec<(usize, Vec<U>)> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                let next_chunk = &next_chunk;
                let f = &f;
                s.spawn(move || {
                    let mut claimed: Vec<(usize, Vec<U>)> = Vec::new();
                    loop {
                        let start = next_chunk.fetch_add(CHUNK, Ordering::Relaxed);
                        if start >= items.len() {
                            break;
                        }
                        let end = (start + CHUNK).min(items.len());
                        claimed.push((start, items[start..end].iter().map(f).collect()));
                    }
                    claimed
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|h| match h.join() {
                Ok(claimed) => claimed,
                Err(e) => std::panic::resume_unwind(e),
            })
            .collect()
    });

    chunks.sort_unstable_by_key(|(start, _)| *start);
    let mut out = Vec::with_capacity(items.len());
    for (_, chunk) in chunks {
        out.extend(chunk);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_matches_serial_order() {
        let items: Vec<u64> = (0..1_000).collect();
        let serial = map_serial(&items, |x| x * x);
        for workers in [2, 3, 8] {
            let parallel = map_ordered(&items, workers, 1, |x| x * x);
            assert_eq!(parallel, serial, "workers = {workers}");
        }
    }

    #[test]
    fn short_inputs_stay_serial() {
        let items = [1, 2, 3];
        assert_eq!(map_ordered(&items, 4, 256, |x| x + 1), vec![2, 3, 4]);
        assert!(map_ordered(&[] as &[u8], 4, 0, |x| *x).is_empty());
    }

    #[test]
    fn zero_requests_available_parallelism() {
        assert!(resolve_workers(0) >= 1);
        assert_eq!(resolve_workers(5), 5);
    }
}
