//! Parallel utilities with feature-gated implementations
//!
//! Provides the task-parallel-for used by both solver families. With the
//! `native` feature the work runs on the rayon pool; without it every helper
//! falls back to an ordinary loop with identical results.
//!
//! All helpers return only after every item has been processed, so a call is a
//! barrier: nothing after it observes a partially updated region.

/// How a parallel region of a solver is executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    /// Ordinary loop on the calling thread
    #[default]
    Sequential,
    /// One task per work item on the rayon pool, joined before returning
    Parallel,
}

impl Execution {
    /// Short label used in logs and reports
    pub fn label(self) -> &'static str {
        match self {
            Execution::Sequential => "sequential",
            Execution::Parallel => "parallel",
        }
    }
}

/// Number of worker threads a parallel region can use
#[cfg(feature = "native")]
pub fn current_num_threads() -> usize {
    rayon::current_num_threads()
}

/// Number of worker threads a parallel region can use
#[cfg(not(feature = "native"))]
pub fn current_num_threads() -> usize {
    1
}

/// Parallel for_each with index over disjoint mutable items
///
/// Each closure call receives the position of its item and exclusive access
/// to it; items never alias, so no synchronization is needed.
#[cfg(feature = "native")]
pub fn parallel_for_each_indexed_mut<U, F>(items: &mut [U], f: F)
where
    U: Send,
    F: Fn(usize, &mut U) + Sync + Send,
{
    use rayon::prelude::*;
    items
        .par_iter_mut()
        .enumerate()
        .for_each(|(i, item)| f(i, item));
}

/// Sequential for_each with index (fallback)
#[cfg(not(feature = "native"))]
pub fn parallel_for_each_indexed_mut<U, F>(items: &mut [U], f: F)
where
    F: Fn(usize, &mut U),
{
    items.iter_mut().enumerate().for_each(|(i, item)| f(i, item));
}

/// Run `f` over every item, either as a loop or as a parallel region
pub fn for_each_indexed_mut<U, F>(execution: Execution, items: &mut [U], f: F)
where
    U: Send,
    F: Fn(usize, &mut U) + Sync + Send,
{
    match execution {
        Execution::Sequential => items.iter_mut().enumerate().for_each(|(i, item)| f(i, item)),
        Execution::Parallel => parallel_for_each_indexed_mut(items, f),
    }
}
