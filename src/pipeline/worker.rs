use std::sync::{Arc, Mutex};

use futures::future::try_join_all;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::trace;

use crate::error::PipelineError;
use crate::pipeline::coordinator::Phase;
use crate::pipeline::shuffle::Groups;

/// One `(word, count)` emission from the map phase, immutable once made.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeyValue {
    key: String,
    value: u64,
}

impl KeyValue {
    pub fn new(key: String, value: u64) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn into_parts(self) -> (String, u64) {
        (self.key, self.value)
    }
}

/// A fixed-size pool of mapper tasks over a shared token queue.
///
/// Each worker pops one token at a time, applies the pure map function and
/// keeps the pair locally, so no two tasks ever touch the same data. The
/// pool's output carries no ordering guarantee between workers.
pub struct MapperPool {
    workers: usize,
}

impl MapperPool {
    pub fn new(workers: usize) -> Self {
        // A zero-sized pool would never drain the queue.
        Self {
            workers: workers.max(1),
        }
    }

    /// Maps every token and joins all workers before returning.
    ///
    /// The join is the end-of-map barrier: a panicked worker fails the
    /// whole phase, the remaining workers are aborted and no partial
    /// output escapes.
    pub async fn map_all<F>(
        &self,
        tokens: Vec<String>,
        map_fn: F,
    ) -> Result<Vec<KeyValue>, PipelineError>
    where
        F: Fn(&str) -> KeyValue + Send + Sync + 'static,
    {
        let queue = Arc::new(Mutex::new(tokens));
        let map_fn = Arc::new(map_fn);
        let mut handles: Vec<JoinHandle<Vec<KeyValue>>> = Vec::with_capacity(self.workers);

        for worker_id in 0..self.workers {
            let queue = Arc::clone(&queue);
            let map_fn = Arc::clone(&map_fn);
            handles.push(tokio::spawn(async move {
                let mut produced = Vec::new();
                loop {
                    // The guard is dropped before the transform runs, so a
                    // panicking map function cannot poison the queue.
                    let token = queue.lock().unwrap().pop();
                    match token {
                        Some(token) => produced.push(map_fn(&token)),
                        None => break,
                    }
                }
                trace!(worker_id, pairs = produced.len(), "mapper worker drained the queue");
                produced
            }));
        }

        let mut pairs = Vec::new();
        let mut handles = handles.into_iter();
        while let Some(handle) = handles.next() {
            match handle.await {
                Ok(mut produced) => pairs.append(&mut produced),
                Err(source) => {
                    for rest in handles.by_ref() {
                        rest.abort();
                    }
                    return Err(PipelineError::TaskFailure {
                        phase: Phase::Mapping,
                        source,
                    });
                }
            }
        }
        Ok(pairs)
    }
}

/// Spawns one summing task per distinct key, admitting at most `workers`
/// of them at a time.
///
/// Each task owns exactly one key's value sequence, so there is nothing to
/// lock. Completion order is irrelevant; the caller assembles the totals
/// into the final mapping in whatever order they joined.
pub struct ReducerPool {
    workers: usize,
}

impl ReducerPool {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// Reduces every group and joins all tasks before returning.
    /// Fail-fast: the first failed task fails the whole phase.
    pub async fn reduce_all<F>(
        &self,
        groups: Groups,
        reduce_fn: F,
    ) -> Result<Vec<(String, u64)>, PipelineError>
    where
        F: Fn(&str, &[u64]) -> u64 + Send + Sync + 'static,
    {
        let permits = Arc::new(Semaphore::new(self.workers));
        let reduce_fn = Arc::new(reduce_fn);
        let mut handles = Vec::with_capacity(groups.len());

        for (key, values) in groups {
            let permits = Arc::clone(&permits);
            let reduce_fn = Arc::clone(&reduce_fn);
            handles.push(tokio::spawn(async move {
                // The semaphore is never closed, so acquiring cannot fail.
                let _permit = permits.acquire().await.unwrap();
                let total = reduce_fn(&key, &values);
                trace!(key = %key, total, "reducer task finished");
                (key, total)
            }));
        }

        try_join_all(handles)
            .await
            .map_err(|source| PipelineError::TaskFailure {
                phase: Phase::Reducing,
                source,
            })
    }
}
