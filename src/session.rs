//! A running quiz: shared store, one-shot loader and countdown lifecycle.
//!
//! The session is what a presentation layer holds on to. It exposes the
//! current state and a single [`dispatch`](QuizSession::dispatch) entry
//! point, and after every event it reconciles the countdown: a fresh timer
//! when a run starts, no timer once the quiz leaves the active phase.

use crate::config::QuizConfig;
use crate::core::StateHistory;
use crate::effects::{load_questions, LoadError, QuestionSource};
use crate::quiz::{Action, QuizError, QuizEvent, QuizState, QuizStatus};
use crate::store::QuizStore;
use crate::timer::{SharedStore, TimerDriver, TimerHandle};
use std::sync::Arc;
use stillwater::effect::Effect;
use stillwater::prelude::*;
use tokio::sync::Mutex;

/// Owns the shared store and the countdown of one quiz.
///
/// Dropping the session cancels any running countdown.
#[derive(Debug)]
pub struct QuizSession {
    store: SharedStore,
    driver: TimerDriver,
    timer: Option<TimerHandle>,
}

impl QuizSession {
    pub fn new(config: QuizConfig) -> Self {
        let driver = TimerDriver::new(config.tick_interval());
        Self {
            store: Arc::new(Mutex::new(QuizStore::new(config))),
            driver,
            timer: None,
        }
    }

    /// Read-only view of the quiz, for views that render it.
    pub fn observer(&self) -> QuizObserver {
        QuizObserver {
            store: Arc::clone(&self.store),
        }
    }

    /// Copy of the current state.
    pub async fn snapshot(&self) -> QuizState {
        self.store.lock().await.state().clone()
    }

    pub async fn status(&self) -> QuizStatus {
        self.store.lock().await.status()
    }

    /// Whether a countdown task is currently alive.
    pub fn timer_running(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Fetch the question list once and feed the outcome to the reducer.
    ///
    /// A failed fetch becomes `dataFailed`, leaving the quiz in the error
    /// phase; the load error is returned alongside for the caller to show.
    pub async fn load<Env>(&mut self, env: &Env) -> Result<QuizState, LoadError>
    where
        Env: QuestionSource + Clone + Send + Sync + 'static,
    {
        let status = self.status().await;
        if status != QuizStatus::Loading {
            return Err(LoadError::Rejected(QuizError::IllegalTransition {
                event: "dataReceived",
                status: status.to_string(),
            }));
        }

        match load_questions::<Env>().run(env).await {
            Ok(questions) => {
                tracing::info!("Loaded {} questions", questions.len());
                Ok(self.dispatch(QuizEvent::DataReceived(questions)).await?)
            }
            Err(e) => {
                tracing::warn!("Question load failed: {}", e);
                if let Err(dispatch_err) = self.dispatch(QuizEvent::DataFailed).await {
                    tracing::warn!("Could not record load failure: {}", dispatch_err);
                }
                Err(e)
            }
        }
    }

    /// Apply one event and reconcile the countdown with the new phase.
    pub async fn dispatch(&mut self, event: QuizEvent) -> Result<QuizState, QuizError> {
        let (state, runs) = {
            let mut store = self.store.lock().await;
            let state = store.dispatch(event)?.clone();
            (state, store.runs())
        };
        self.reconcile_timer(state.status, runs);
        Ok(state)
    }

    /// Decode an untyped action and apply it.
    pub async fn dispatch_action(&mut self, action: Action) -> Result<QuizState, QuizError> {
        self.dispatch(QuizEvent::try_from(action)?).await
    }

    fn reconcile_timer(&mut self, status: QuizStatus, runs: u64) {
        if status != QuizStatus::Active {
            if let Some(timer) = self.timer.take() {
                tracing::debug!("Stopping countdown for run {}", timer.run());
            }
            return;
        }

        let current = self.timer.as_ref().is_some_and(|t| t.run() == runs);
        if !current {
            // Replacing the handle aborts any timer left from an older run.
            self.timer = Some(self.driver.spawn(Arc::clone(&self.store), runs));
        }
    }
}

/// Read-only view of a session's store.
///
/// Observers can read the state and its history but never dispatch; every
/// event goes through [`QuizSession::dispatch`] so the countdown stays in step.
///
/// ```compile_fail
/// use quizflow::{QuizConfig, QuizEvent, QuizSession};
///
/// async fn sneak_in(session: &QuizSession) {
///     session.observer().dispatch(QuizEvent::Start).await;
/// }
/// ```
#[derive(Clone, Debug)]
pub struct QuizObserver {
    store: SharedStore,
}

impl QuizObserver {
    pub async fn snapshot(&self) -> QuizState {
        self.store.lock().await.state().clone()
    }

    pub async fn status(&self) -> QuizStatus {
        self.store.lock().await.status()
    }

    pub async fn history(&self) -> StateHistory<QuizStatus> {
        self.store.lock().await.history().clone()
    }
}
