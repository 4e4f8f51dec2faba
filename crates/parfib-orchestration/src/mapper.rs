//! Ordered parallel map over a bounded worker pool.
//!
//! Tasks are tagged with their input position and dispatched over a channel
//! to a fixed number of scoped worker threads. Results are collected into a
//! pre-sized buffer indexed by original position, so the output order always
//! matches the input order regardless of completion order.

use std::thread;

use tracing::debug;

use parfib_core::constants::DEFAULT_DEGREE;

/// Resolve a requested degree of parallelism.
///
/// Zero means "use the default"; any positive value is taken as given.
#[must_use]
pub fn resolve_degree(requested: usize) -> usize {
    if requested == 0 {
        DEFAULT_DEGREE
    } else {
        requested
    }
}

/// Apply `f` to every item concurrently, preserving input order.
///
/// At most `degree` workers run at once (a degree of zero selects the
/// default). Dispatch always goes through the worker pool, even for a
/// single item. All workers are joined before the buffer is returned, so
/// a panic in `f` propagates to the caller.
#[must_use]
pub fn map_ordered<I, T, F>(items: Vec<I>, degree: usize, f: F) -> Vec<T>
where
    I: Send,
    T: Send,
    F: Fn(I) -> T + Sync,
{
    if items.is_empty() {
        return Vec::new();
    }

    let total = items.len();
    let workers = resolve_degree(degree).min(total);

    let (task_tx, task_rx) = crossbeam_channel::unbounded::<(usize, I)>();
    let (result_tx, result_rx) = crossbeam_channel::unbounded::<(usize, T)>();

    for task in items.into_iter().enumerate() {
        task_tx
            .send(task)
            .expect("task receiver alive while enqueuing");
    }
    // Workers drain the queue until it is empty, then see the disconnect.
    drop(task_tx);

    debug!(workers, tasks = total, "dispatching ordered parallel map");

    thread::scope(|s| {
        for _ in 0..workers {
            let task_rx = task_rx.clone();
            let result_tx = result_tx.clone();
            let f = &f;
            s.spawn(move || {
                while let Ok((pos, item)) = task_rx.recv() {
                    let value = f(item);
                    if result_tx.send((pos, value)).is_err() {
                        break;
                    }
                }
            });
        }
    });
    drop(result_tx);

    // Every worker has been joined, so the full result set is buffered in
    // the channel. Reorder by original position.
    let mut buffer: Vec<Option<T>> = Vec::with_capacity(total);
    buffer.resize_with(total, || None);
    for (pos, value) in result_rx {
        buffer[pos] = Some(value);
    }

    buffer
        .into_iter()
        .map(|slot| slot.expect("every position receives exactly one result"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use parfib_core::fib_closed_form;

    #[test]
    fn output_order_matches_permuted_input() {
        let indices = vec![5u64, 3, 8, 1, 13];
        let results = map_ordered(indices, 4, fib_closed_form);
        assert_eq!(results, vec![5, 2, 21, 1, 233]);
    }

    #[test]
    fn degree_one_and_eight_agree() {
        let inputs: Vec<u64> = (0..100).collect();
        let sequential: Vec<u64> = inputs.iter().map(|&i| i * i).collect();
        let deg1 = map_ordered(inputs.clone(), 1, |i| i * i);
        let deg8 = map_ordered(inputs, 8, |i| i * i);
        assert_eq!(deg1, sequential);
        assert_eq!(deg8, sequential);
    }

    #[test]
    fn single_item_goes_through_pool() {
        let results = map_ordered(vec![41u64], 4, |n| n + 1);
        assert_eq!(results, vec![42]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let results: Vec<u64> = map_ordered(Vec::<u64>::new(), 4, |n| n);
        assert!(results.is_empty());
    }

    #[test]
    fn slow_first_task_does_not_reorder() {
        // The first item sleeps so it finishes last; the collected output
        // must still lead with its result.
        let results = map_ordered(vec![0u32, 1, 2, 3], 4, |n| {
            if n == 0 {
                std::thread::sleep(std::time::Duration::from_millis(30));
            }
            n * 10
        });
        assert_eq!(results, vec![0, 10, 20, 30]);
    }

    #[test]
    fn non_copy_results_are_supported() {
        let results = map_ordered(vec![1u32, 2, 3], 2, |n| format!("v{n}"));
        assert_eq!(results, vec!["v1", "v2", "v3"]);
    }

    #[test]
    fn more_workers_than_items() {
        let results = map_ordered(vec![10u64, 20], 8, |n| n / 2);
        assert_eq!(results, vec![5, 10]);
    }

    #[test]
    fn resolve_degree_zero_falls_back() {
        assert_eq!(resolve_degree(0), DEFAULT_DEGREE);
    }

    #[test]
    fn resolve_degree_positive_passthrough() {
        assert_eq!(resolve_degree(1), 1);
        assert_eq!(resolve_degree(16), 16);
    }
}
