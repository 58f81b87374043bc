/// All values collected for one key, bound to the reducer that will
/// aggregate them. The unit of work handed to a single worker.
pub struct Task<K, V, F> {
    key: K,
    values: Vec<V>,
    reduce: F,
}

impl<K, V, F> Task<K, V, F>
where
    F: Fn(V, V) -> V,
{
    pub fn new(key: K, values: Vec<V>, reduce: F) -> Self {
        Self {
            key,
            values,
            reduce,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// Folds the values left-to-right with no seed and yields the
    /// aggregate for the key. `None` for an empty value list; the engine
    /// only builds tasks from non-empty groups.
    pub fn run(self) -> Option<(K, V)> {
        let Task {
            key,
            values,
            reduce,
        } = self;
        values.into_iter().reduce(reduce).map(|agg| (key, agg))
    }
}

#[cfg(test)]
mod tests {
    use super::Task;

    #[test]
    fn aggregates_values_for_key() {
        let task = Task::new("peter", vec![1, 1, 1, 1], |x, y| x + y);
        assert_eq!(task.run(), Some(("peter", 4)));
    }

    #[test]
    fn single_value_passes_through_untouched() {
        let task = Task::new("jenny", vec![7], |_, _| unreachable!());
        assert_eq!(task.run(), Some(("jenny", 7)));
    }

    #[test]
    fn folds_left_to_right() {
        let task = Task::new("k", vec![1, 2, 3], |x, y| x * 10 + y);
        assert_eq!(task.run(), Some(("k", 123)));
    }

    #[test]
    fn empty_values_yield_nothing() {
        let task: Task<_, i32, _> = Task::new("k", vec![], |x, y| x + y);
        assert_eq!(task.run(), None);
    }
}
