//! A minimal single-node map-reduce engine: extract a key from every input
//! element, group the mapped values by key, fan the groups out round-robin
//! over a fixed pool of workers, and fold each group into one aggregate
//! per key.
//!
//! Everything runs sequentially in one process, but workers share no
//! mutable state, so the observable results would survive running one
//! thread per worker.

pub mod error;
pub mod task;
pub mod worker;

use std::collections::HashMap;
use std::hash::Hash;

use itertools::Itertools;
use log::debug;

pub use crate::error::{Error, Result};
pub use crate::task::Task;
pub use crate::worker::Worker;

#[derive(Debug, Clone)]
pub struct MapReduce {
    num_workers: usize,
}

impl MapReduce {
    pub fn new(num_workers: usize) -> Result<Self> {
        if num_workers == 0 {
            return Err(Error::InvalidArgument(
                "num_workers should be positive".to_owned(),
            ));
        }
        Ok(Self { num_workers })
    }

    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Maps every element to a key/value pair, groups values by key,
    /// aggregates each group with `reduce` and returns one `(key,
    /// aggregate)` pair per distinct key.
    ///
    /// Pairs come back in worker-major order, not in any global key
    /// order; callers that need a particular order must sort.
    pub fn map_reduce<E, K, V, M, R>(&self, values: Vec<E>, map: M, reduce: R) -> Vec<(K, V)>
    where
        K: Hash + Eq + Clone,
        M: Fn(E) -> (K, V),
        R: Fn(V, V) -> V,
    {
        let workers = self.prepare_tasks(values, map, &reduce);
        Self::execute_tasks(workers)
    }

    fn prepare_tasks<'r, E, K, V, M, R>(
        &self,
        values: Vec<E>,
        map: M,
        reduce: &'r R,
    ) -> Vec<Worker<K, V, &'r R>>
    where
        K: Hash + Eq + Clone,
        M: Fn(E) -> (K, V),
        R: Fn(V, V) -> V,
    {
        let mapped = values.into_iter().map(map).collect_vec();

        // Group values by key, keeping keys in first-occurrence order:
        // the position of a key decides which worker it lands on.
        let mut groups: Vec<(K, Vec<V>)> = Vec::new();
        let mut positions: HashMap<K, usize> = HashMap::new();
        for (key, value) in mapped {
            match positions.get(&key) {
                Some(&at) => groups[at].1.push(value),
                None => {
                    positions.insert(key.clone(), groups.len());
                    groups.push((key, vec![value]));
                }
            }
        }

        debug!(
            "partitioned {} keys across {} workers",
            groups.len(),
            self.num_workers
        );

        let mut workers = (0..self.num_workers).map(|_| Worker::new()).collect_vec();
        for (i, (key, values)) in groups.into_iter().enumerate() {
            workers[i % self.num_workers].submit(Task::new(key, values, reduce));
        }
        workers
    }

    fn execute_tasks<K, V, F>(workers: Vec<Worker<K, V, F>>) -> Vec<(K, V)>
    where
        F: Fn(V, V) -> V,
    {
        workers.into_iter().flat_map(Worker::execute).collect()
    }
}
