use std::num::NonZeroUsize;
use std::thread;

/// Tuning knobs for [`CodebaseAnalyzer`](super::CodebaseAnalyzer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Upper bound on files read at the same time, in either phase.
    pub read_concurrency: usize,
    /// Run phase two across the worker pool instead of file by file.
    pub parallel_extraction: bool,
}

impl AnalyzerConfig {
    pub fn with_read_concurrency(mut self, read_concurrency: usize) -> Self {
        self.read_concurrency = read_concurrency.max(1);
        self
    }

    pub fn with_parallel_extraction(mut self, parallel_extraction: bool) -> Self {
        self.parallel_extraction = parallel_extraction;
        self
    }

    /// Single worker, sequential phase two.
    pub fn sequential() -> Self {
        Self {
            read_concurrency: 1,
            parallel_extraction: false,
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            read_concurrency: thread::available_parallelism().map_or(1, NonZeroUsize::get),
            parallel_extraction: true,
        }
    }
}
