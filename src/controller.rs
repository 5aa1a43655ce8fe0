//! Query controller
//!
//! Owns the view state of the console (input text, result history, agent
//! badges, busy flag) and talks to the backend. The UI layer reads this
//! state every frame and forwards clicks and key presses to it.
//!
//! Requests run on a tokio runtime. Their outcomes come back through a
//! channel and are applied on the UI thread by [`QueryController::poll`].
//! Each submission gets a new request id; only the outcome of the most
//! recent one is rendered.

use crate::api::{QueryAnswer, QueryBackend, QueryRequest};
use crate::error::QueryError;
use crate::state::{AgentBadges, ResultCard, ResultsList};
use chrono::Local;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Sequence number of a submitted request
pub type RequestId = u64;

/// Preset query bound to a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    /// Button caption
    pub label: &'static str,
    /// Query submitted when clicked
    pub query: &'static str,
}

/// Presets shown above the input box
pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        label: "Weather in London",
        query: "What's the weather in London?",
    },
    QuickAction {
        label: "Math problem",
        query: "Calculate 15 * 8 + 23",
    },
    QuickAction {
        label: "Random fact",
        query: "Tell me a random fact",
    },
    QuickAction {
        label: "Tell a joke",
        query: "Tell me a joke",
    },
];

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Input was empty; an error card was added and nothing was sent
    Invalid,
    /// A request was sent
    Sent(RequestId),
}

#[derive(Debug)]
struct Completion {
    id: RequestId,
    outcome: Result<QueryAnswer, QueryError>,
}

type Waker = Arc<dyn Fn() + Send + Sync>;

/// Controller behind the query console window
pub struct QueryController {
    backend: Arc<dyn QueryBackend>,
    runtime: Handle,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    waker: Option<Waker>,
    input: String,
    results: ResultsList,
    badges: AgentBadges,
    last_issued: RequestId,
    pending: Option<RequestId>,
    scroll_to_top: bool,
}

impl QueryController {
    /// Create a controller that sends requests through `backend` on `runtime`
    pub fn new(backend: Arc<dyn QueryBackend>, runtime: Handle, badge_highlight: Duration) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            backend,
            runtime,
            completions_tx,
            completions_rx,
            waker: None,
            input: String::new(),
            results: ResultsList::new(),
            badges: AgentBadges::new(badge_highlight),
            last_issued: 0,
            pending: None,
            scroll_to_top: false,
        }
    }

    /// Callback invoked from the runtime whenever a request finishes
    pub fn with_waker(mut self, waker: impl Fn() + Send + Sync + 'static) -> Self {
        self.waker = Some(Arc::new(waker));
        self
    }

    /// Current input text
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Input text, for binding to a text field
    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    /// Submit the current input
    pub fn submit(&mut self) -> Submission {
        let request = match QueryRequest::from_input(&self.input) {
            Ok(request) => request,
            Err(err) => {
                debug!("Rejected empty query");
                self.push_error(err.user_message());
                return Submission::Invalid;
            }
        };

        self.last_issued += 1;
        let id = self.last_issued;
        if let Some(previous) = self.pending.replace(id) {
            debug!(request_id = id, superseded = previous, "Superseding in-flight query");
        }
        self.badges.clear();

        info!(request_id = id, query_len = request.query.len(), "Submitting query");

        let backend = Arc::clone(&self.backend);
        let tx = self.completions_tx.clone();
        let waker = self.waker.clone();
        self.runtime.spawn(async move {
            let outcome = backend.query(&request).await;
            // The receiver lives inside the controller; a send error means it is gone
            if tx.send(Completion { id, outcome }).is_err() {
                debug!(request_id = id, "Controller dropped before query completed");
                return;
            }
            if let Some(wake) = waker {
                wake();
            }
        });

        Submission::Sent(id)
    }

    /// Put a preset into the input box and submit it
    pub fn quick_action(&mut self, query: &str) -> Submission {
        self.input = query.to_string();
        self.submit()
    }

    /// Remove every card and show the welcome placeholder again
    pub fn clear_results(&mut self) {
        info!(cards = self.results.len(), "Clearing results");
        self.results.clear();
    }

    /// Apply finished requests and expire the badge highlight
    ///
    /// Returns true if anything visible changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Ok(completion) = self.completions_rx.try_recv() {
            changed |= self.apply(completion, now);
        }
        changed |= self.badges.expire(now);
        changed
    }

    fn apply(&mut self, completion: Completion, now: Instant) -> bool {
        if self.pending != Some(completion.id) {
            debug!(
                request_id = completion.id,
                latest = self.last_issued,
                "Discarding response to superseded query"
            );
            return false;
        }
        self.pending = None;

        match completion.outcome {
            Ok(answer) => {
                info!(
                    request_id = completion.id,
                    agent_used = %answer.agent_used,
                    "Query answered"
                );
                self.results.push(ResultCard::answer(&answer, Local::now()));
                if self.badges.activate(&answer.agent_used, now).is_none() {
                    debug!(agent_used = %answer.agent_used, "No badge for agent");
                }
                self.scroll_to_top = true;
            }
            Err(err @ QueryError::Rejected { .. }) => {
                info!(request_id = completion.id, error = %err, "Query rejected by backend");
                self.push_error(err.user_message());
            }
            Err(err) => {
                warn!(request_id = completion.id, error = %err, "Query request failed");
                self.push_error(err.user_message());
            }
        }

        self.input.clear();
        true
    }

    fn push_error(&mut self, message: String) {
        self.results.push(ResultCard::error(message, Local::now()));
    }

    /// Whether a request is in flight
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Result history
    pub fn results(&self) -> &ResultsList {
        &self.results
    }

    /// Agent badge state
    pub fn badges(&self) -> &AgentBadges {
        &self.badges
    }

    /// Consume the pending "scroll results to top" request
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_top)
    }

    /// Next instant `poll` has timed work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        self.badges.deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EMPTY_QUERY_MESSAGE, GENERIC_ERROR_MESSAGE, REQUEST_FAILED_MESSAGE};
    use crate::state::{AgentKind, CardKind};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    type Reply = (Duration, Result<QueryAnswer, QueryError>);

    /// Backend answering from a fixed table; unknown queries fail to connect
    #[derive(Default)]
    struct StubBackend {
        replies: HashMap<String, Reply>,
        calls: AtomicUsize,
    }

    impl StubBackend {
        fn reply(mut self, query: &str, delay_ms: u64, outcome: Result<QueryAnswer, QueryError>) -> Self {
            self.replies
                .insert(query.to_string(), (Duration::from_millis(delay_ms), outcome));
            self
        }

        fn answer(self, query: &str, agent: &str) -> Self {
            self.answer_after(query, agent, 0)
        }

        fn answer_after(self, query: &str, agent: &str, delay_ms: u64) -> Self {
            let answer = QueryAnswer {
                query: query.to_string(),
                response: format!("response for {}", query),
                agent_used: agent.to_string(),
            };
            self.reply(query, delay_ms, Ok(answer))
        }
    }

    #[async_trait]
    impl QueryBackend for StubBackend {
        async fn query(&self, request: &QueryRequest) -> Result<QueryAnswer, QueryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.replies.get(&request.query) {
                Some((delay, outcome)) => {
                    tokio::time::sleep(*delay).await;
                    outcome.clone()
                }
                None => Err(QueryError::Transport("connection refused".to_string())),
            }
        }
    }

    fn controller(backend: Arc<StubBackend>) -> QueryController {
        QueryController::new(backend, Handle::current(), Duration::from_secs(3))
    }

    async fn settle(controller: &mut QueryController) {
        for _ in 0..400 {
            controller.poll(Instant::now());
            if !controller.is_busy() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("query did not complete");
    }

    #[tokio::test]
    async fn test_empty_query_never_sent() {
        let backend = Arc::new(StubBackend::default());
        let mut controller = controller(Arc::clone(&backend));
        controller.input_mut().push_str("   \t ");

        assert_eq!(controller.submit(), Submission::Invalid);
        assert!(!controller.is_busy());

        tokio::time::sleep(Duration::from_millis(20)).await;
        controller.poll(Instant::now());

        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
        assert_eq!(controller.results().len(), 1);
        let card = controller.results().latest().unwrap();
        assert_eq!(card.kind, CardKind::Error);
        assert_eq!(card.body, EMPTY_QUERY_MESSAGE);
    }

    #[tokio::test]
    async fn test_success_renders_card_and_badge() {
        let backend = Arc::new(StubBackend::default().answer("weather in Rome", "Weather Agent"));
        let mut controller = controller(Arc::clone(&backend));
        assert!(controller.results().shows_welcome());

        controller.input_mut().push_str("  weather in Rome ");
        assert_eq!(controller.submit(), Submission::Sent(1));
        assert!(controller.is_busy());

        settle(&mut controller).await;

        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
        assert!(!controller.results().shows_welcome());
        let card = controller.results().latest().unwrap();
        assert_eq!(card.kind, CardKind::Answer);
        assert_eq!(card.heading, "weather in Rome");
        assert_eq!(card.agent_label.as_deref(), Some("Weather Agent"));
        assert_eq!(card.body, "response for weather in Rome");
        assert_eq!(controller.badges().active(), Some(AgentKind::Weather));
        assert_eq!(controller.input(), "");
        assert!(controller.take_scroll_request());
        assert!(!controller.take_scroll_request());
    }

    #[tokio::test]
    async fn test_badge_deactivates_after_highlight() {
        let backend = Arc::new(StubBackend::default().answer("2+2", "Math Tool"));
        let mut controller = controller(backend);
        controller.quick_action("2+2");
        settle(&mut controller).await;

        assert!(controller.badges().is_active(AgentKind::Math));
        assert!(!controller.badges().is_active(AgentKind::Weather));
        let deadline = controller.next_deadline().unwrap();

        assert!(controller.poll(deadline));
        assert!(controller.badges().active().is_none());
        assert!(controller.next_deadline().is_none());
    }

    #[tokio::test]
    async fn test_unknown_agent_activates_nothing() {
        let backend = Arc::new(StubBackend::default().answer("who", "Search Agent"));
        let mut controller = controller(backend);
        controller.quick_action("who");
        settle(&mut controller).await;

        assert_eq!(controller.results().len(), 1);
        assert!(controller.badges().active().is_none());
    }

    #[tokio::test]
    async fn test_new_query_clears_badge() {
        let backend = Arc::new(
            StubBackend::default()
                .answer("fact", "API Agent")
                .answer_after("slow", "Math Agent", 50),
        );
        let mut controller = controller(backend);
        controller.quick_action("fact");
        settle(&mut controller).await;
        assert!(controller.badges().is_active(AgentKind::Api));

        controller.quick_action("slow");
        assert!(controller.badges().active().is_none());
        settle(&mut controller).await;
        assert!(controller.badges().is_active(AgentKind::Math));
    }

    #[tokio::test]
    async fn test_backend_rejection_message() {
        let backend = Arc::new(
            StubBackend::default()
                .reply("bad", 0, Err(QueryError::rejected(Some("Unknown city".to_string()))))
                .reply("worse", 0, Err(QueryError::rejected(None))),
        );
        let mut controller = controller(backend);

        controller.quick_action("bad");
        settle(&mut controller).await;
        assert_eq!(controller.results().latest().unwrap().body, "Unknown city");

        controller.quick_action("worse");
        settle(&mut controller).await;
        assert_eq!(controller.results().latest().unwrap().body, GENERIC_ERROR_MESSAGE);
        assert_eq!(controller.results().len(), 2);
    }

    #[tokio::test]
    async fn test_transport_failure_resets_ui() {
        let backend = Arc::new(StubBackend::default());
        let mut controller = controller(backend);
        controller.input_mut().push_str("anything");
        controller.submit();
        settle(&mut controller).await;

        assert_eq!(controller.results().len(), 1);
        let card = controller.results().latest().unwrap();
        assert!(card.is_error());
        assert_eq!(card.body, REQUEST_FAILED_MESSAGE);
        assert_eq!(controller.input(), "");
        assert!(!controller.is_busy());
    }

    #[tokio::test]
    async fn test_superseded_response_is_dropped() {
        let backend = Arc::new(
            StubBackend::default()
                .answer_after("slow", "Weather Agent", 80)
                .answer("fast", "Math Agent"),
        );
        let mut controller = controller(backend);

        assert_eq!(controller.quick_action("slow"), Submission::Sent(1));
        assert_eq!(controller.quick_action("fast"), Submission::Sent(2));
        settle(&mut controller).await;

        // Let the slow reply arrive too
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(!controller.poll(Instant::now()));

        assert_eq!(controller.results().len(), 1);
        assert_eq!(controller.results().latest().unwrap().heading, "fast");
        assert!(controller.badges().is_active(AgentKind::Math));
    }

    #[tokio::test]
    async fn test_clear_results_restores_welcome() {
        let backend = Arc::new(StubBackend::default().answer("a", "Math Agent"));
        let mut controller = controller(backend);
        controller.submit();
        controller.quick_action("a");
        settle(&mut controller).await;
        assert_eq!(controller.results().len(), 2);

        controller.clear_results();
        assert!(controller.results().shows_welcome());
        assert_eq!(controller.results().len(), 0);
    }

    #[tokio::test]
    async fn test_waker_called_on_completion() {
        let backend = Arc::new(StubBackend::default().answer("ping", "API Agent"));
        let wakes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&wakes);
        let mut controller = controller(backend).with_waker(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        controller.quick_action("ping");
        settle(&mut controller).await;
        assert_eq!(wakes.load(Ordering::SeqCst), 1);
    }
}
