//! Solver configuration.

/// Configuration for the N-Queens enumeration.
///
/// # Examples
///
/// ```
/// use u_exact::queens::QueensConfig;
///
/// let config = QueensConfig::default()
///     .with_size(6)
///     .with_collect_solutions(false);
/// ```
#[derive(Debug, Clone)]
pub struct QueensConfig {
    /// Board dimension. `0` is a valid (trivial) instance.
    pub size: usize,

    /// Keep a clone of the board for every solution found.
    ///
    /// Disable when streaming through an observer to avoid holding
    /// all solutions in memory (size 8 already has 92).
    pub collect_solutions: bool,

    /// Stop after this many solutions. 0 = enumerate everything.
    pub max_solutions: usize,
}

impl Default for QueensConfig {
    fn default() -> Self {
        Self {
            size: 8,
            collect_solutions: true,
            max_solutions: 0,
        }
    }
}

impl QueensConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_collect_solutions(mut self, collect: bool) -> Self {
        self.collect_solutions = collect;
        self
    }

    pub fn with_max_solutions(mut self, max: usize) -> Self {
        self.max_solutions = max;
        self
    }
}
