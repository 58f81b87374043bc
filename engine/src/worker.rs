use crate::task::Task;

/// Holds the tasks assigned to it and runs them in submission order.
/// `execute` consumes the worker, so a worker cannot run twice or accept
/// tasks after running.
pub struct Worker<K, V, F> {
    tasks: Vec<Task<K, V, F>>,
}

impl<K, V, F> Worker<K, V, F>
where
    F: Fn(V, V) -> V,
{
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn submit(&mut self, task: Task<K, V, F>) {
        self.tasks.push(task);
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn execute(self) -> Vec<(K, V)> {
        self.tasks.into_iter().filter_map(Task::run).collect()
    }
}

impl<K, V, F> Default for Worker<K, V, F>
where
    F: Fn(V, V) -> V,
{
    fn default() -> Self {
        Self::new()
    }
}
