/// Concurrency management for crashstack.
/// Configures the thread pool used to parse crash batches.

use anyhow::Result;

/// Initialize the global rayon thread pool.
/// `threads` of `None` uses half the cores, minimum 1 worker.
pub fn init_thread_pool(threads: Option<usize>) -> Result<usize> {
    let cores = num_cpus::get();
    let workers = threads
        .filter(|&n| n > 0)
        .unwrap_or_else(|| std::cmp::max(1, cores / 2));

    rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build_global()?;

    log::info!(
        "Initialized thread pool: {} workers (system has {} cores)",
        workers, cores
    );

    Ok(workers)
}
