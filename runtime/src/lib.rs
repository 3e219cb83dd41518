//! # Task List Runtime
//!
//! Runtime implementation for the task list state model.
//!
//! This crate provides the [`Store`] that coordinates reducer execution and
//! effect handling.
//!
//! ## Core Components
//!
//! - **Store**: Owns the state, serializes every action through the reducer
//! - **Effect Executor**: Executes effect descriptions and feeds actions back
//! - **Change Notifications**: A revision counter published after every action
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//! let mut changes = store.subscribe();
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // A view waiting on `changes.changed()` wakes up and re-reads state
//! let value = store.state(|s| s.some_field).await;
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tasklist_core::{effect::Effect, reducer::Reducer};
use tokio::sync::RwLock;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// This error is returned when `send()` is called after shutdown initiated.
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// Shutdown timed out waiting for effects to complete
        #[error("Shutdown timed out with {0} effects still running")]
        ShutdownTimeout(usize),
    }
}

pub use error::StoreError;

/// Guard that decrements an atomic counter on drop (for shutdown tracking)
struct AtomicCounterGuard(Arc<AtomicUsize>);

impl Drop for AtomicCounterGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Store runtime for coordinating reducer execution and effect handling.
pub mod store {
    use super::{
        Arc, AtomicBool, AtomicCounterGuard, AtomicUsize, Duration, Effect, Ordering, Reducer,
        RwLock, StoreError,
    };
    use tokio::sync::{broadcast, watch};

    /// Default capacity of the action broadcast channel
    const DEFAULT_BROADCAST_CAPACITY: usize = 16;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`, so every action is applied atomically)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
    /// 5. Change notifications (revision counter on a `watch` channel)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: R,
        environment: E,
        shutdown: Arc<AtomicBool>,
        pending_effects: Arc<AtomicUsize>,
        /// Revision counter, bumped once after every processed action.
        revision: Arc<watch::Sender<u64>>,
        /// Actions produced by effects, cloned to every observer before
        /// they are fed back into the reducer.
        action_broadcast: broadcast::Sender<A>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
        A: Send + Clone + std::fmt::Debug + 'static,
        S: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_broadcast_capacity(
                initial_state,
                reducer,
                environment,
                DEFAULT_BROADCAST_CAPACITY,
            )
        }

        /// Create a new Store with custom action broadcast capacity
        ///
        /// Default capacity is 16. Increase if observers frequently lag.
        #[must_use]
        pub fn with_broadcast_capacity(
            initial_state: S,
            reducer: R,
            environment: E,
            capacity: usize,
        ) -> Self {
            let (action_broadcast, _) = broadcast::channel(capacity.max(1));
            let (revision, _) = watch::channel(0);

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
                shutdown: Arc::new(AtomicBool::new(false)),
                pending_effects: Arc::new(AtomicUsize::new(0)),
                revision: Arc::new(revision),
                action_broadcast,
            }
        }

        /// Send an action to the store
        ///
        /// 1. Acquires write lock on state
        /// 2. Calls reducer with (state, action, environment)
        /// 3. Publishes the next revision to subscribers
        /// 4. Starts the returned effects; actions they produce are fed back
        ///
        /// `send()` returns once the reducer has run. Delayed and future
        /// effects complete later on the tokio runtime.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
        pub async fn send(&self, action: A) -> Result<(), StoreError>
        where
            R: Clone,
            E: Clone,
        {
            self.send_and_inspect(action, |_| ()).await
        }

        /// Send an action and read the resulting state under the same lock
        ///
        /// No other action can be applied between the reducer and `inspect`,
        /// which makes this the way to learn the outcome of a command that
        /// records its rejection in state.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
        #[tracing::instrument(skip(self, action, inspect), name = "store_send")]
        pub async fn send_and_inspect<F, T>(&self, action: A, inspect: F) -> Result<T, StoreError>
        where
            R: Clone,
            E: Clone,
            F: FnOnce(&S) -> T,
        {
            if self.shutdown.load(Ordering::Acquire) {
                tracing::warn!(?action, "Rejected action: store is shutting down");
                metrics::counter!("store.shutdown.rejected_actions").increment(1);
                return Err(StoreError::ShutdownInProgress);
            }

            tracing::debug!(?action, "Processing action");
            metrics::counter!("store.commands.total").increment(1);

            let (effects, inspected) = {
                let mut state = self.state.write().await;
                tracing::trace!("Acquired write lock on state");

                let start = std::time::Instant::now();
                let effects = self.reducer.reduce(&mut *state, action, &self.environment);
                metrics::histogram!("store.reducer.duration_seconds")
                    .record(start.elapsed().as_secs_f64());

                tracing::trace!("Reducer completed, returned {} effects", effects.len());
                (effects, inspect(&*state))
            };

            self.revision.send_modify(|revision| *revision += 1);

            for effect in effects {
                self.execute_effect(effect);
            }

            Ok(inspected)
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let task_count = store.state(|s| s.tasks.len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// Subscribe to change notifications
        ///
        /// The receiver observes a revision number that increases by one
        /// after every processed action, including actions fed back from
        /// effects. Re-read state with [`Store::state`] when it changes.
        #[must_use]
        pub fn subscribe(&self) -> watch::Receiver<u64> {
            self.revision.subscribe()
        }

        /// Current revision (number of actions processed so far)
        #[must_use]
        pub fn revision(&self) -> u64 {
            *self.revision.borrow()
        }

        /// Subscribe to actions produced by effects
        ///
        /// Only actions produced by effects are broadcast, not the actions
        /// passed to `send`. A lagging receiver skips old actions and gets
        /// `RecvError::Lagged`.
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }

        /// Number of effects started but not yet finished
        #[must_use]
        pub fn pending_effects(&self) -> usize {
            self.pending_effects.load(Ordering::Acquire)
        }

        /// Initiate graceful shutdown of the store
        ///
        /// Sets the shutdown flag (rejecting new actions), then waits for
        /// pending effects until `timeout` elapses. Delayed actions whose
        /// timer fires after shutdown began are dropped.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownTimeout`] if the timeout expires before all
        /// pending effects complete.
        pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
            tracing::info!("Initiating graceful shutdown");
            metrics::counter!("store.shutdown.initiated").increment(1);

            self.shutdown.store(true, Ordering::Release);

            let start = tokio::time::Instant::now();
            let poll_interval = Duration::from_millis(10);

            loop {
                let pending = self.pending_effects.load(Ordering::Acquire);

                if pending == 0 {
                    tracing::info!("All effects completed, shutdown successful");
                    return Ok(());
                }

                if start.elapsed() >= timeout {
                    tracing::error!(
                        pending_effects = pending,
                        "Shutdown timeout: {} effects still running",
                        pending
                    );
                    metrics::counter!("store.shutdown.timeout").increment(1);
                    return Err(StoreError::ShutdownTimeout(pending));
                }

                tokio::time::sleep(poll_interval).await;
            }
        }

        /// Execute an effect
        ///
        /// - `None`: No-op
        /// - `Delay`: Waits for duration, then sends action
        /// - `Future`: Awaits the computation, sends resulting action if `Some`
        ///
        /// Produced actions are broadcast to observers first, then fed back
        /// through [`Store::send`]. Failures to feed back (store shutting
        /// down) are logged and dropped.
        fn execute_effect(&self, effect: Effect<A>)
        where
            R: Clone,
            E: Clone,
        {
            match effect {
                Effect::None => {
                    tracing::trace!("Executing Effect::None (no-op)");
                    metrics::counter!("store.effects.executed", "type" => "none").increment(1);
                },
                Effect::Delay { duration, action } => {
                    tracing::trace!("Executing Effect::Delay (duration: {:?})", duration);
                    metrics::counter!("store.effects.executed", "type" => "delay").increment(1);

                    let pending_guard = self.track_pending();
                    let store = self.clone();

                    tokio::spawn(async move {
                        let _pending_guard = pending_guard;

                        tokio::time::sleep(duration).await;
                        tracing::trace!("Effect::Delay completed, sending action");
                        store.feed_back(*action).await;
                    });
                },
                Effect::Future(fut) => {
                    tracing::trace!("Executing Effect::Future");
                    metrics::counter!("store.effects.executed", "type" => "future").increment(1);

                    let pending_guard = self.track_pending();
                    let store = self.clone();

                    tokio::spawn(async move {
                        let _pending_guard = pending_guard;

                        if let Some(action) = fut.await {
                            tracing::trace!("Effect::Future produced an action, sending to store");
                            store.feed_back(action).await;
                        } else {
                            tracing::trace!("Effect::Future completed with no action");
                        }
                    });
                },
            }
        }

        fn track_pending(&self) -> AtomicCounterGuard {
            self.pending_effects.fetch_add(1, Ordering::SeqCst);
            AtomicCounterGuard(Arc::clone(&self.pending_effects))
        }

        async fn feed_back(&self, action: A)
        where
            R: Clone,
            E: Clone,
        {
            // No receivers is not an error
            let _ = self.action_broadcast.send(action.clone());

            if let Err(error) = self.send(action).await {
                tracing::debug!(%error, "Dropped action produced by effect");
            }
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone,
        E: Clone,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: self.reducer.clone(),
                environment: self.environment.clone(),
                shutdown: Arc::clone(&self.shutdown),
                pending_effects: Arc::clone(&self.pending_effects),
                revision: Arc::clone(&self.revision),
                action_broadcast: self.action_broadcast.clone(),
            }
        }
    }
}

// Re-export for convenience
pub use store::Store;

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can unwrap
mod tests {
    use super::*;
    use tasklist_core::{smallvec, SmallVec};

    #[derive(Debug, Clone, Default)]
    struct TestState {
        value: i32,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum TestAction {
        Add(i32),
        AddLater(i32),
        AddViaFuture(i32),
    }

    #[derive(Clone)]
    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                TestAction::Add(n) => {
                    state.value += n;
                    smallvec![Effect::None]
                },
                TestAction::AddLater(n) => {
                    smallvec![Effect::delay(Duration::from_millis(50), TestAction::Add(n))]
                },
                TestAction::AddViaFuture(n) => {
                    smallvec![Effect::Future(Box::pin(async move { Some(TestAction::Add(n)) }))]
                },
            }
        }
    }

    fn test_store() -> Store<TestState, TestAction, (), TestReducer> {
        Store::new(TestState::default(), TestReducer, ())
    }

    #[tokio::test]
    async fn send_applies_reducer() {
        let store = test_store();
        store.send(TestAction::Add(3)).await.unwrap();
        store.send(TestAction::Add(4)).await.unwrap();
        assert_eq!(store.state(|s| s.value).await, 7);
    }

    #[tokio::test]
    async fn send_and_inspect_reads_post_state() {
        let store = test_store();
        let value = store
            .send_and_inspect(TestAction::Add(5), |s| s.value)
            .await
            .unwrap();
        assert_eq!(value, 5);
    }

    #[tokio::test]
    async fn revision_bumps_once_per_action() {
        let store = test_store();
        let rx = store.subscribe();
        assert_eq!(*rx.borrow(), 0);

        store.send(TestAction::Add(1)).await.unwrap();
        store.send(TestAction::Add(1)).await.unwrap();

        assert_eq!(store.revision(), 2);
        assert!(rx.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn delay_effect_feeds_back_after_duration() {
        let store = test_store();
        let mut rx = store.subscribe();

        store.send(TestAction::AddLater(9)).await.unwrap();
        rx.borrow_and_update();
        assert_eq!(store.state(|s| s.value).await, 0);
        assert_eq!(store.pending_effects(), 1);

        rx.changed().await.unwrap();
        assert_eq!(store.state(|s| s.value).await, 9);
    }

    #[tokio::test]
    async fn future_effect_is_broadcast_then_applied() {
        let store = test_store();
        let mut actions = store.subscribe_actions();

        store.send(TestAction::AddViaFuture(2)).await.unwrap();

        let observed = actions.recv().await.unwrap();
        assert_eq!(observed, TestAction::Add(2));
    }

    #[tokio::test]
    async fn shutdown_rejects_new_actions() {
        let store = test_store();
        store.shutdown(Duration::from_secs(1)).await.unwrap();

        let result = store.send(TestAction::Add(1)).await;
        assert_eq!(result, Err(StoreError::ShutdownInProgress));
        assert_eq!(store.state(|s| s.value).await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_times_out_with_pending_delay() {
        let store = test_store();
        store.send(TestAction::AddLater(1)).await.unwrap();

        let result = store.shutdown(Duration::from_millis(20)).await;
        assert_eq!(result, Err(StoreError::ShutdownTimeout(1)));
    }
}
