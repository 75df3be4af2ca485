//! Check orchestrator - debounced, race-free password check pipeline.
//!
//! Input changes are debounced by scheduling a delayed check and re-reading
//! the live input once the quiet period elapses: superseded checks wake up,
//! notice newer input and abandon silently instead of being cancelled.
//! Currency is not re-checked once the range lookup has been dispatched, so a
//! response that arrives after further typing is still applied; with several
//! checks in flight, presentation updates are not guaranteed to land in input
//! order. Both are accepted properties of the pipeline.

use std::sync::{Arc, Mutex};

use secrecy::{ExposeSecret, SecretString};
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::config::CheckConfig;
use crate::digest::PasswordDigest;
use crate::evaluator::evaluate_heuristics;
use crate::lookup::RangeProvider;
use crate::records::count_leak_occasions;
use crate::types::{Findings, LeakStatus, Presenter};

/// Check pipeline state for one input session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    /// The input is empty; nothing is scheduled or presented.
    Idle,
    /// A delayed check is waiting for the input to settle.
    Pending,
    /// A range lookup is in flight.
    Evaluating,
    /// Findings for the latest settled input are presented.
    Settled,
}

/// Debounces input change events and runs the check pipeline.
///
/// The orchestrator owns the single live "current password" value; delayed
/// checks re-read it at every suspension-resume point as an implicit
/// generation check. No locks are held across awaits.
pub struct CheckOrchestrator<R, P> {
    inner: Arc<Inner<R, P>>,
}

struct Inner<R, P> {
    config: CheckConfig,
    provider: R,
    presenter: Mutex<P>,
    current: Mutex<SecretString>,
    state: Mutex<CheckState>,
    shutdown: CancellationToken,
}

impl<R, P> CheckOrchestrator<R, P>
where
    R: RangeProvider + Send + Sync + 'static,
    P: Presenter + Send + 'static,
{
    pub fn new(config: CheckConfig, provider: R, presenter: P) -> Self {
        CheckOrchestrator {
            inner: Arc::new(Inner {
                config,
                provider,
                presenter: Mutex::new(presenter),
                current: Mutex::new(SecretString::new("".into())),
                state: Mutex::new(CheckState::Idle),
                shutdown: CancellationToken::new(),
            }),
        }
    }

    /// Handles a "password value changed" event.
    ///
    /// An empty value clears the presentation immediately; a non-empty value
    /// schedules a delayed check for it after the configured quiet period.
    /// Earlier delayed checks are left running and abandon on wake-up once
    /// they see that the input moved on.
    ///
    /// Must be called from within a tokio runtime.
    pub fn handle_input(&self, password: SecretString) {
        let snapshot = SecretString::new(password.expose_secret().into());
        *self.inner.current.lock().unwrap() = password;

        if snapshot.expose_secret().is_empty() {
            self.inner.set_state(CheckState::Idle);
            self.inner.presenter.lock().unwrap().clear();
            return;
        }

        self.inner.set_state(CheckState::Pending);
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            inner.delayed_check(snapshot).await;
        });
    }

    /// Current pipeline state.
    pub fn state(&self) -> CheckState {
        *self.inner.state.lock().unwrap()
    }

    /// Makes delayed checks that are still sleeping abandon without running.
    ///
    /// A check that already passed its staleness gate completes normally.
    pub fn shutdown(&self) {
        self.inner.shutdown.cancel();
    }
}

impl<R, P> Inner<R, P>
where
    R: RangeProvider,
    P: Presenter,
{
    fn set_state(&self, state: CheckState) {
        *self.state.lock().unwrap() = state;
        #[cfg(feature = "tracing")]
        tracing::debug!("check state: {:?}", state);
    }

    fn is_current(&self, snapshot: &SecretString) -> bool {
        self.current.lock().unwrap().expose_secret() == snapshot.expose_secret()
    }

    /// Runs one delayed check for a captured input snapshot.
    async fn delayed_check(&self, snapshot: SecretString) {
        if self
            .shutdown
            .run_until_cancelled(sleep(self.config.debounce))
            .await
            .is_none()
        {
            return;
        }

        // Last-write-wins debounce: the timer is never cancelled, a
        // superseded check notices newer input here and stops.
        if !self.is_current(&snapshot) {
            #[cfg(feature = "tracing")]
            tracing::debug!("abandoning check for superseded input");
            return;
        }

        self.set_state(CheckState::Evaluating);
        let digest = PasswordDigest::compute(&snapshot);
        let occasions = match self.provider.get_range(digest.prefix()).await {
            Ok(records) => count_leak_occasions(&records, digest.suffix()),
            Err(_error) => {
                #[cfg(feature = "tracing")]
                tracing::error!("range lookup failed: {}", _error);
                None
            }
        };

        // Currency is not re-checked past the staleness gate above; a late
        // response is applied as-is.
        let leak = LeakStatus::from_occasions(occasions, self.config.critical_leak_threshold);
        let findings = Findings::new(leak, evaluate_heuristics(&snapshot));
        self.presenter
            .lock()
            .unwrap()
            .present(findings.indication(), &findings.messages());
        self.set_state(CheckState::Settled);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use reqwest::StatusCode;

    use super::*;
    use crate::lookup::LookupError;
    use crate::types::Indication;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum PresenterEvent {
        Cleared,
        Presented(Indication, Vec<String>),
    }

    /// Records every call the orchestrator makes into the presentation layer.
    #[derive(Clone, Default)]
    struct RecordingPresenter {
        events: Arc<Mutex<Vec<PresenterEvent>>>,
    }

    impl RecordingPresenter {
        fn events(&self) -> Vec<PresenterEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl Presenter for RecordingPresenter {
        fn clear(&mut self) {
            self.events.lock().unwrap().push(PresenterEvent::Cleared);
        }

        fn present(&mut self, indication: Indication, messages: &[String]) {
            self.events
                .lock()
                .unwrap()
                .push(PresenterEvent::Presented(indication, messages.to_vec()));
        }
    }

    /// In-memory range provider with per-prefix records, built from real
    /// digests of the passwords a test cares about.
    struct FakeRangeProvider {
        records: HashMap<String, String>,
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl FakeRangeProvider {
        fn empty() -> Self {
            FakeRangeProvider {
                records: HashMap::new(),
                calls: Arc::new(AtomicUsize::new(0)),
                fail: false,
            }
        }

        fn failing() -> Self {
            FakeRangeProvider {
                fail: true,
                ..FakeRangeProvider::empty()
            }
        }

        /// Adds a leak record for `password`, surrounded by unrelated noise.
        fn with_leak(mut self, password: &str, count: u64) -> Self {
            let digest = PasswordDigest::compute(&secret(password));
            let noise = PasswordDigest::compute(&secret("unrelated"));
            self.records.insert(
                digest.prefix().to_string(),
                format!("{}:12\r\n{}:{}", noise.suffix(), digest.suffix(), count),
            );
            self
        }

        fn call_count(&self) -> Arc<AtomicUsize> {
            Arc::clone(&self.calls)
        }
    }

    impl RangeProvider for FakeRangeProvider {
        async fn get_range(&self, prefix: &str) -> Result<String, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(LookupError::Status(StatusCode::INTERNAL_SERVER_ERROR));
            }
            Ok(self.records.get(prefix).cloned().unwrap_or_default())
        }
    }

    fn secret(password: &str) -> SecretString {
        SecretString::new(password.to_string().into())
    }

    fn fast_config() -> CheckConfig {
        CheckConfig {
            api_base: "http://localhost:5000/range/".to_string(),
            ..CheckConfig::default()
        }
    }

    /// Sleeps past the debounce delay so scheduled checks complete.
    async fn settle() {
        sleep(Duration::from_millis(500)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_input_goes_idle_without_lookup() {
        let provider = FakeRangeProvider::empty();
        let calls = provider.call_count();
        let presenter = RecordingPresenter::default();
        let orchestrator = CheckOrchestrator::new(fast_config(), provider, presenter.clone());

        orchestrator.handle_input(secret(""));
        assert_eq!(orchestrator.state(), CheckState::Idle);

        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(presenter.events(), vec![PresenterEvent::Cleared]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_password_settles_with_success() {
        let provider = FakeRangeProvider::empty();
        let presenter = RecordingPresenter::default();
        let orchestrator = CheckOrchestrator::new(fast_config(), provider, presenter.clone());

        orchestrator.handle_input(secret("Str0ng&Diverse"));
        assert_eq!(orchestrator.state(), CheckState::Pending);

        settle().await;
        assert_eq!(orchestrator.state(), CheckState::Settled);
        assert_eq!(
            presenter.events(),
            vec![PresenterEvent::Presented(
                Indication::Success,
                vec!["No leaks found".to_string()]
            )]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaked_and_weak_password_combines_findings() {
        let provider = FakeRangeProvider::empty().with_leak("hello", 273646);
        let presenter = RecordingPresenter::default();
        let orchestrator = CheckOrchestrator::new(fast_config(), provider, presenter.clone());

        orchestrator.handle_input(secret("hello"));
        settle().await;

        assert_eq!(
            presenter.events(),
            vec![PresenterEvent::Presented(
                Indication::Warning,
                vec![
                    "Numerous leaks found".to_string(),
                    "Password must be at least 8 characters long".to_string(),
                ]
            )]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_few_leaks_warn_without_weaknesses() {
        let provider = FakeRangeProvider::empty().with_leak("123_56789", 3);
        let presenter = RecordingPresenter::default();
        let orchestrator = CheckOrchestrator::new(fast_config(), provider, presenter.clone());

        orchestrator.handle_input(secret("123_56789"));
        settle().await;

        assert_eq!(
            presenter.events(),
            vec![PresenterEvent::Presented(
                Indication::Warning,
                vec!["Several leaks found".to_string()]
            )]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_presents_only_final_input() {
        let provider = FakeRangeProvider::empty();
        let calls = provider.call_count();
        let presenter = RecordingPresenter::default();
        let orchestrator = CheckOrchestrator::new(fast_config(), provider, presenter.clone());

        orchestrator.handle_input(secret("first-Attempt1"));
        sleep(Duration::from_millis(100)).await;
        orchestrator.handle_input(secret("second-Attempt2"));
        settle().await;

        // The first check woke up, saw newer input and abandoned silently.
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            presenter.events(),
            vec![PresenterEvent::Presented(
                Indication::Success,
                vec!["No leaks found".to_string()]
            )]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_lookup_failure_reports_unknown_status() {
        let provider = FakeRangeProvider::failing();
        let presenter = RecordingPresenter::default();
        let orchestrator = CheckOrchestrator::new(fast_config(), provider, presenter.clone());

        orchestrator.handle_input(secret("qwerty123"));
        settle().await;

        assert_eq!(
            presenter.events(),
            vec![PresenterEvent::Presented(
                Indication::Warning,
                vec!["Error: could not check the password for leaks".to_string()]
            )]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_lookup_failure_keeps_heuristic_findings() {
        let provider = FakeRangeProvider::failing();
        let presenter = RecordingPresenter::default();
        let orchestrator = CheckOrchestrator::new(fast_config(), provider, presenter.clone());

        orchestrator.handle_input(secret("1357913"));
        settle().await;

        assert_eq!(
            presenter.events(),
            vec![PresenterEvent::Presented(
                Indication::Warning,
                vec![
                    "Error: could not check the password for leaks".to_string(),
                    "Password must be at least 8 characters long".to_string(),
                ]
            )]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_clearing_input_resets_presentation() {
        let provider = FakeRangeProvider::empty();
        let presenter = RecordingPresenter::default();
        let orchestrator = CheckOrchestrator::new(fast_config(), provider, presenter.clone());

        orchestrator.handle_input(secret("Str0ng&Diverse"));
        settle().await;
        orchestrator.handle_input(secret(""));

        assert_eq!(orchestrator.state(), CheckState::Idle);
        assert_eq!(
            presenter.events().last(),
            Some(&PresenterEvent::Cleared)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_abandons_pending_check() {
        let provider = FakeRangeProvider::empty();
        let calls = provider.call_count();
        let presenter = RecordingPresenter::default();
        let orchestrator = CheckOrchestrator::new(fast_config(), provider, presenter.clone());

        orchestrator.handle_input(secret("Str0ng&Diverse"));
        orchestrator.shutdown();
        settle().await;

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(presenter.events().is_empty());
        assert_eq!(orchestrator.state(), CheckState::Pending);
    }
}
