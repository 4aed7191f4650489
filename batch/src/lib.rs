//! Batched fan-out over identifier lists.
//!
//! Large identifier lists are split into bounded chunks, one request is
//! issued per chunk, every request runs concurrently and the per-chunk
//! results are merged back in chunk order. The whole call fails with the
//! first error any chunk reports.

use std::{fmt::Display, future::Future, num::NonZeroUsize};

use tracing::{debug, warn};

pub mod batcher;
pub mod bridge;
pub mod collector;
pub mod ids;
mod macros;
pub mod merge;

pub use batcher::{batch, chunk};
pub use bridge::{bridge, spawn_bridged};
pub use collector::collect_ordered;
pub use legends_shared::Identifier;
pub use merge::{Merge, concat_lists, merge_objects};

/// Issue one operation per chunk of `items` and merge their results.
///
/// An empty `items` resolves to the empty merged value without calling
/// `make_operation`.
pub async fn batch_and_merge<T, M, E, F, Fut>(
    items: &[T],
    max_per_chunk: NonZeroUsize,
    make_operation: F,
) -> Result<M, E>
where
    F: FnMut(&[T]) -> Fut,
    Fut: Future<Output = Result<M, E>>,
    M: Merge,
    E: Display,
{
    let operations = batch(items, max_per_chunk, make_operation);
    debug!(
        "[BATCH] {} items dispatched in {} chunks of at most {}",
        items.len(),
        operations.len(),
        max_per_chunk
    );

    match collect_ordered(operations).await {
        Ok(parts) => Ok(M::merge_all(parts)),
        Err(e) => {
            warn!("[BATCH] batched operation failed: {}", e);
            Err(e)
        }
    }
}

/// [`batch_and_merge`] for operations resolving to lists, concatenated in chunk order.
pub async fn batch_and_concat<T, V, E, F, Fut>(
    items: &[T],
    max_per_chunk: NonZeroUsize,
    make_operation: F,
) -> Result<Vec<V>, E>
where
    F: FnMut(&[T]) -> Fut,
    Fut: Future<Output = Result<Vec<V>, E>>,
    E: Display,
{
    batch_and_merge(items, max_per_chunk, make_operation).await
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, time::Duration};

    use serde_json::{Map, Value, json};

    use super::*;

    const K: NonZeroUsize = match NonZeroUsize::new(40) {
        Some(k) => k,
        None => unreachable!(),
    };

    #[tokio::test]
    async fn empty_list_never_calls_the_producer() {
        let calls = Cell::new(0);

        let merged: Result<Map<String, Value>, String> = batch_and_merge(&[] as &[u32], K, |_| {
            calls.set(calls.get() + 1);
            async { Ok(Map::new()) }
        })
        .await;

        assert_eq!(merged, Ok(Map::new()));
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn merged_object_contains_every_chunk() {
        let ids: Vec<u32> = (1..=97).collect();

        let merged: Map<String, Value> = batch_and_merge(&ids, K, |chunk| {
            let chunk = chunk.to_vec();
            // Later chunks answer first.
            let delay = 100 - u64::from(chunk[0]);
            async move {
                tokio::time::sleep(Duration::from_millis(delay)).await;
                Ok::<_, String>(
                    chunk
                        .iter()
                        .map(|id| (id.to_string(), json!({ "id": id })))
                        .collect::<Map<String, Value>>(),
                )
            }
        })
        .await
        .unwrap();

        assert_eq!(merged.len(), 97);
        assert_eq!(merged["97"], json!({ "id": 97 }));
    }

    #[tokio::test]
    async fn concat_keeps_chunk_order() {
        let ids: Vec<u32> = (1..=5).collect();

        let all = batch_and_concat(&ids, NonZeroUsize::new(2).unwrap(), |chunk| {
            let chunk = chunk.to_vec();
            async move { Ok::<_, String>(chunk) }
        })
        .await;

        assert_eq!(all, Ok(vec![1, 2, 3, 4, 5]));
    }
}
