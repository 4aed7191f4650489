use std::future::Future;

use futures::{StreamExt, stream::FuturesUnordered};

/// Settled values of a fixed amount of operations, indexed by their original position.
#[derive(Debug)]
pub struct PendingSlots<T> {
    slots: Vec<Option<T>>,
    remaining: usize,
}

impl<T> PendingSlots<T> {
    pub fn new(len: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(len).collect(),
            remaining: len,
        }
    }

    /// Store `value` at `index`. A slot is written at most once, later writes
    /// and out of range indexes are ignored and return `false`.
    pub fn fill(&mut self, index: usize, value: T) -> bool {
        match self.slots.get_mut(index) {
            Some(slot @ None) => {
                *slot = Some(value);
                self.remaining -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Values in original order, or `None` while a slot is still unset.
    pub fn into_values(self) -> Option<Vec<T>> {
        self.slots.into_iter().collect()
    }
}

/// Poll every operation concurrently and resolve with their values in input order.
///
/// The first operation to fail makes the whole collection fail with its
/// error. Operations still in flight at that point are dropped and their
/// results never observed.
pub async fn collect_ordered<I, F, T, E>(operations: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    let mut in_flight: FuturesUnordered<_> = operations
        .into_iter()
        .enumerate()
        .map(|(index, op)| async move { (index, op.await) })
        .collect();

    let mut pending = PendingSlots::new(in_flight.len());

    while let Some((index, result)) = in_flight.next().await {
        if !pending.fill(index, result?) {
            tracing::trace!("ignoring duplicate completion for slot {}", index);
        }
        if pending.is_complete() {
            break;
        }
    }

    // Every operation settled exactly once, so all slots are set.
    Ok(pending.into_values().unwrap_or_default())
}
