//! Builder utilities for configuring batch runs.
//!
//! Exposes the execution strategy and failure policy selection surface and
//! the validation performed before constructing [`Arbor`] instances.

use crate::{Result, arbor::Arbor, error::ArborError};

/// Indicates how [`Arbor::run`] schedules graphs and engines.
///
/// # Examples
/// ```
/// use arbor_core::ExecutionStrategy;
///
/// assert_eq!(ExecutionStrategy::default(), ExecutionStrategy::Sequential);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Process graphs one after another, Prim before Kruskal.
    #[default]
    Sequential,
    /// Process graphs as independent rayon tasks and run both engines of a
    /// graph concurrently. Requires the `parallel` feature.
    Parallel,
}

/// Decides what happens when a graph in the batch cannot be built.
///
/// # Examples
/// ```
/// use arbor_core::FailurePolicy;
///
/// assert_eq!(FailurePolicy::default(), FailurePolicy::Abort);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Fail the whole batch with the first invalid graph in input order.
    #[default]
    Abort,
    /// Record the invalid graph in [`crate::BatchReport::skipped`] and
    /// continue.
    Skip,
}

/// Configures and constructs [`Arbor`] instances.
///
/// # Examples
/// ```
/// use arbor_core::{ArborBuilder, ExecutionStrategy, FailurePolicy};
///
/// let arbor = ArborBuilder::new()
///     .with_failure_policy(FailurePolicy::Skip)
///     .with_execution_strategy(ExecutionStrategy::Sequential)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(arbor.failure_policy(), FailurePolicy::Skip);
/// assert_eq!(arbor.execution_strategy(), ExecutionStrategy::Sequential);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ArborBuilder {
    execution_strategy: ExecutionStrategy,
    failure_policy: FailurePolicy,
}

impl ArborBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the execution strategy to use when running a batch.
    #[must_use]
    pub fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the currently configured execution strategy.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Sets how invalid graphs are handled.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{ArborBuilder, FailurePolicy};
    ///
    /// let builder = ArborBuilder::new().with_failure_policy(FailurePolicy::Skip);
    /// assert_eq!(builder.failure_policy(), FailurePolicy::Skip);
    /// ```
    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Returns the currently configured failure policy.
    #[must_use]
    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    /// Validates the configuration and constructs an [`Arbor`] instance.
    ///
    /// # Errors
    /// Returns [`ArborError::BackendUnavailable`] when
    /// [`ExecutionStrategy::Parallel`] is requested from a build without the
    /// `parallel` feature.
    pub fn build(self) -> Result<Arbor> {
        if self.execution_strategy == ExecutionStrategy::Parallel && !cfg!(feature = "parallel") {
            return Err(ArborError::BackendUnavailable {
                requested: self.execution_strategy,
            });
        }
        Ok(Arbor::new(self.execution_strategy, self.failure_policy))
    }
}
