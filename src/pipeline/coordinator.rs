use std::collections::HashMap;
use std::fmt;

use tracing::{debug, info};

use crate::error::PipelineError;
use crate::pipeline::function::wc;
use crate::pipeline::shuffle;
use crate::pipeline::tokenizer;
use crate::pipeline::worker::{MapperPool, ReducerPool};

/// The phases of one pipeline run.
///
/// Transitions are strictly forward and each one is a barrier: a phase is
/// entered only after every task of the previous phase has joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Mapping,
    Shuffling,
    Reducing,
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mapping => "map",
            Self::Shuffling => "shuffle",
            Self::Reducing => "reduce",
            Self::Done => "done",
        };
        write!(f, "{name}")
    }
}

/// Sequences the map, shuffle and reduce phases over one input text and
/// assembles the final word → count mapping.
pub struct Coordinator {
    mapper: MapperPool,
    reducer: ReducerPool,
    workers: usize,
    phase: Phase,
}

impl Coordinator {
    /// Creates a coordinator driving `workers` concurrent tasks in the map
    /// and reduce phases. A worker count of zero is clamped to one.
    pub fn new(workers: usize) -> Self {
        let workers = workers.max(1);
        Self {
            mapper: MapperPool::new(workers),
            reducer: ReducerPool::new(workers),
            workers,
            phase: Phase::Mapping,
        }
    }

    /// Creates a coordinator sized to the available hardware parallelism.
    pub fn with_default_workers() -> Self {
        Self::new(num_cpus::get())
    }

    /// The phase the most recent run reached.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn advance(&mut self, next: Phase) {
        assert!(next > self.phase);
        self.phase = next;
    }

    /// Runs the full pipeline over `text` and returns the word totals.
    ///
    /// Zero tokens is not an error: empty or whitespace-only input yields
    /// an empty mapping. Fail-fast otherwise: the first mapper or reducer
    /// task failure aborts the run and no partial mapping is returned.
    /// The result is identical for any worker count and any task
    /// interleaving.
    pub async fn run(&mut self, text: &str) -> Result<HashMap<String, u64>, PipelineError> {
        self.phase = Phase::Mapping;

        let tokens = tokenizer::tokenize(text);
        let token_count = tokens.len();
        if tokens.is_empty() {
            debug!("no tokens in input, skipping all phases");
            self.phase = Phase::Done;
            return Ok(HashMap::new());
        }

        info!(tokens = token_count, workers = self.workers, "map phase starting");
        let pairs = self.mapper.map_all(tokens, wc::map).await?;
        self.advance(Phase::Shuffling);
        info!(pairs = pairs.len(), "all mapper tasks joined, shuffling");

        let groups = shuffle::shuffle(pairs);
        self.advance(Phase::Reducing);
        info!(keys = groups.len(), "shuffle finished, reduce phase starting");

        let totals = self.reducer.reduce_all(groups, wc::reduce).await?;
        self.advance(Phase::Done);
        info!("all reducer tasks joined, pipeline done");

        let result: HashMap<String, u64> = totals.into_iter().collect();
        debug_assert_eq!(result.values().sum::<u64>(), token_count as u64);
        Ok(result)
    }
}
