use std::{
    num::NonZeroUsize,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use legends_batch::{Identifier, batch_and_merge, bridge, ids, spawn_bridged};
use serde_json::{Map, Value, json};

#[derive(Debug, Clone, PartialEq)]
struct ChunkError(usize);

impl std::fmt::Display for ChunkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "chunk {} failed", self.0)
    }
}

fn forty() -> NonZeroUsize {
    NonZeroUsize::new(40).unwrap()
}

/// Fake endpoint answering with an object keyed by identifier, failing on
/// the chunk at `fail_at` when set.
async fn fetch_chunk(
    index: usize,
    chunk: Vec<Identifier>,
    fail_at: Option<usize>,
) -> Result<Map<String, Value>, ChunkError> {
    tokio::time::sleep(Duration::from_millis(10 * (3 - index as u64))).await;
    if fail_at == Some(index) {
        return Err(ChunkError(index));
    }
    Ok(chunk
        .iter()
        .map(|id| (id.to_string(), json!({ "id": id })))
        .collect())
}

async fn run(
    ids: Vec<Identifier>,
    fail_at: Option<usize>,
    sizes: Arc<Mutex<Vec<usize>>>,
) -> Result<Map<String, Value>, ChunkError> {
    let next = AtomicUsize::new(0);
    batch_and_merge(&ids, forty(), |chunk| {
        sizes.lock().unwrap().push(chunk.len());
        let index = next.fetch_add(1, Ordering::Relaxed);
        fetch_chunk(index, chunk.to_vec(), fail_at)
    })
    .await
}

#[tokio::test(start_paused = true)]
async fn ninety_seven_ids_merge_into_one_object() {
    let sizes = Arc::new(Mutex::new(Vec::new()));
    let ids = ids![(1..=97u64).collect::<Vec<_>>()];

    let merged = run(ids, None, sizes.clone()).await.unwrap();

    assert_eq!(*sizes.lock().unwrap(), vec![40, 40, 17]);
    assert_eq!(merged.len(), 97);
    assert_eq!(merged["1"], json!({ "id": 1 }));
    assert_eq!(merged["41"], json!({ "id": 41 }));
    assert_eq!(merged["97"], json!({ "id": 97 }));
}

#[tokio::test(start_paused = true)]
async fn failing_middle_chunk_fails_the_whole_call() {
    let sizes = Arc::new(Mutex::new(Vec::new()));
    let ids = ids![(1..=97u64).collect::<Vec<_>>()];
    let outcomes = Arc::new(Mutex::new(Vec::new()));

    let recorded = outcomes.clone();
    let res = bridge(run(ids, Some(1), sizes.clone()), move |r| {
        recorded
            .lock()
            .unwrap()
            .push(r.map(|m| m.len()).map_err(Clone::clone));
    })
    .await;

    assert_eq!(res, Err(ChunkError(1)));
    assert_eq!(*sizes.lock().unwrap(), vec![40, 40, 17]);
    assert_eq!(*outcomes.lock().unwrap(), vec![Err(ChunkError(1))]);
}

#[tokio::test(start_paused = true)]
async fn spawned_callback_sees_merged_value_once() {
    let sizes = Arc::new(Mutex::new(Vec::new()));
    let ids = ids![[3u64, 1], "Chalop"];
    let outcomes = Arc::new(Mutex::new(Vec::new()));

    let recorded = outcomes.clone();
    let handle = spawn_bridged(run(ids, None, sizes), move |r| {
        recorded
            .lock()
            .unwrap()
            .push(r.map(|m| m.len()).map_err(Clone::clone));
    });

    let merged = handle.await.unwrap().unwrap();
    assert_eq!(merged["Chalop"], json!({ "id": "Chalop" }));
    assert_eq!(*outcomes.lock().unwrap(), vec![Ok(3)]);
}
