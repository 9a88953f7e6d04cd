//! Simulated assistant session controller.
//!
//! An `AssistantSession` owns one conversation: an append-only transcript
//! that opens with a mode-specific welcome turn, the user's pending input,
//! and the flag that is raised while a canned reply is "being typed".
//!
//! Each accepted submission schedules exactly one deferred reply on the
//! tokio runtime. The reply task races its timer against the session's
//! cancellation token, so a reply never lands in a closed (or dropped)
//! session. Submissions are refused while a reply is pending, which keeps
//! at most one reply in flight and applies replies in submission order.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tokio::runtime::Handle;
use tokio::sync::{broadcast, watch};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crafthub_types::assistant::{
    AssistantMode, SessionId, SessionSnapshot, Speaker, SubmitOutcome, Turn, TurnId,
};
use crafthub_types::config::AssistantConfig;
use crafthub_types::event::SessionEvent;

use super::chance::{ChanceSource, RngChance};
use super::content::{self, FOLLOW_UP_SUGGESTIONS};

/// Mutable part of a session, guarded by one mutex.
struct SessionState {
    transcript: Vec<Turn>,
    pending_input: String,
    awaiting_reply: bool,
    closed: bool,
    next_turn_id: u64,
    chance: Box<dyn ChanceSource>,
}

impl SessionState {
    fn push_turn(&mut self, speaker: Speaker, text: String, suggestions: Option<Vec<String>>) -> Turn {
        let turn = Turn {
            id: TurnId(self.next_turn_id),
            speaker,
            text,
            created_at: Utc::now(),
            suggestions,
        };
        self.next_turn_id += 1;
        self.transcript.push(turn.clone());
        turn
    }
}

/// State shared between the session handle and its deferred reply task.
struct Shared {
    id: SessionId,
    mode: AssistantMode,
    config: AssistantConfig,
    state: Mutex<SessionState>,
    events: broadcast::Sender<SessionEvent>,
    awaiting_tx: watch::Sender<bool>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().expect("assistant session lock poisoned")
    }

    /// Send to every current subscriber. Having none is fine.
    fn publish(&self, event: SessionEvent) {
        let _ = self.events.send(event);
    }

    /// Append the canned reply and leave the pending state.
    ///
    /// Does nothing if the session was closed after the timer fired.
    fn complete_reply(&self) {
        let mut state = self.lock();
        if state.closed {
            debug!(session_id = %self.id, "Discarding reply for closed session");
            return;
        }

        let pool = content::reply_pool(self.mode);
        let index = state.chance.pick_index(pool.len()) % pool.len();
        let suggestions = state
            .chance
            .chance(self.config.suggestion_probability)
            .then(|| FOLLOW_UP_SUGGESTIONS.iter().map(|s| s.to_string()).collect());

        let turn = state.push_turn(Speaker::Assistant, pool[index].to_string(), suggestions);
        state.awaiting_reply = false;

        info!(
            session_id = %self.id,
            mode = %self.mode,
            turn_id = %turn.id,
            reply_index = index,
            with_suggestions = turn.suggestions.is_some(),
            "Assistant reply delivered"
        );

        self.publish(SessionEvent::TurnAppended {
            session_id: self.id,
            turn,
            awaiting_reply: false,
        });
        self.awaiting_tx.send_replace(false);
    }
}

/// Wait for the reply deadline, unless the session is cancelled first.
async fn deliver_reply(shared: Arc<Shared>, cancel: CancellationToken, deadline: Instant) {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            debug!(session_id = %shared.id, "Pending reply cancelled");
            shared.publish(SessionEvent::ReplyCancelled { session_id: shared.id });
        }
        _ = tokio::time::sleep_until(deadline) => {
            shared.complete_reply();
        }
    }
}

/// One simulated assistant conversation.
///
/// The session is exclusively owned by its host. Dropping it cancels any
/// pending reply. Replies are spawned onto the current tokio runtime; a
/// submission made outside one is refused with [`SubmitOutcome::NoRuntime`].
pub struct AssistantSession {
    shared: Arc<Shared>,
    cancel: CancellationToken,
}

impl AssistantSession {
    /// Create a session with an explicit config and chance source.
    ///
    /// An invalid config is replaced by the defaults.
    pub fn new(mode: AssistantMode, config: AssistantConfig, chance: Box<dyn ChanceSource>) -> Self {
        let id = SessionId::new();
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!(session_id = %id, error = %e, "Invalid assistant config, using defaults");
                AssistantConfig::default()
            }
        };
        let (events, _) = broadcast::channel(config.event_capacity);
        let (awaiting_tx, _) = watch::channel(false);

        let mut state = SessionState {
            transcript: Vec::new(),
            pending_input: String::new(),
            awaiting_reply: false,
            closed: false,
            next_turn_id: 1,
            chance,
        };
        let welcome = content::content(mode);
        state.push_turn(
            Speaker::Assistant,
            welcome.welcome.to_string(),
            Some(welcome.welcome_suggestions.iter().map(|s| s.to_string()).collect()),
        );

        debug!(session_id = %id, mode = %mode, "Assistant session created");

        Self {
            shared: Arc::new(Shared {
                id,
                mode,
                config,
                state: Mutex::new(state),
                events,
                awaiting_tx,
            }),
            cancel: CancellationToken::new(),
        }
    }

    /// Create a session with the default config and an entropy-seeded generator.
    pub fn create(mode: AssistantMode) -> Self {
        Self::new(mode, AssistantConfig::default(), Box::new(RngChance::from_entropy()))
    }

    pub fn id(&self) -> SessionId {
        self.shared.id
    }

    pub fn mode(&self) -> AssistantMode {
        self.shared.mode
    }

    /// Subscribe to transcript and input updates.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.shared.events.subscribe()
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.shared.lock();
        SessionSnapshot {
            id: self.shared.id,
            mode: self.shared.mode,
            transcript: state.transcript.clone(),
            pending_input: state.pending_input.clone(),
            awaiting_reply: state.awaiting_reply,
        }
    }

    pub fn transcript(&self) -> Vec<Turn> {
        self.shared.lock().transcript.clone()
    }

    pub fn turn_count(&self) -> usize {
        self.shared.lock().transcript.len()
    }

    pub fn pending_input(&self) -> String {
        self.shared.lock().pending_input.clone()
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.shared.lock().awaiting_reply
    }

    pub fn is_closed(&self) -> bool {
        self.shared.lock().closed
    }

    /// Whether the send affordance should be enabled.
    pub fn can_submit(&self) -> bool {
        let state = self.shared.lock();
        !state.closed && !state.awaiting_reply && !state.pending_input.trim().is_empty()
    }

    /// Replace the pending input (keyboard typing).
    pub fn set_input(&self, text: impl Into<String>) {
        let mut state = self.shared.lock();
        if state.closed {
            return;
        }
        state.pending_input = text.into();
        self.publish_input(&state);
    }

    /// Copy a suggestion into the pending input without submitting it.
    pub fn select_suggestion(&self, text: &str) {
        debug!(session_id = %self.shared.id, suggestion = text, "Suggestion selected");
        self.set_input(text);
    }

    /// Submit `text` as a user turn.
    ///
    /// Empty or whitespace-only text and submissions while a reply is
    /// pending are absorbed without changing state. Returns immediately;
    /// the reply lands later on the event bus and in the transcript.
    pub fn submit(&self, text: &str) -> SubmitOutcome {
        let mut state = self.shared.lock();
        self.accept(&mut state, text)
    }

    /// Submit whatever is currently in the pending input.
    pub fn submit_pending(&self) -> SubmitOutcome {
        let mut state = self.shared.lock();
        let text = state.pending_input.clone();
        self.accept(&mut state, &text)
    }

    fn accept(&self, state: &mut MutexGuard<'_, SessionState>, text: &str) -> SubmitOutcome {
        if state.closed {
            return SubmitOutcome::Closed;
        }
        if state.awaiting_reply {
            debug!(session_id = %self.shared.id, "Submission ignored, reply pending");
            return SubmitOutcome::IgnoredPending;
        }
        let text = text.trim();
        if text.is_empty() {
            return SubmitOutcome::IgnoredEmpty;
        }
        let Ok(runtime) = Handle::try_current() else {
            warn!(session_id = %self.shared.id, "Submission refused, no tokio runtime for the reply");
            return SubmitOutcome::NoRuntime;
        };

        let turn = state.push_turn(Speaker::User, text.to_string(), None);
        let turn_id = turn.id;
        state.pending_input.clear();
        state.awaiting_reply = true;

        let config = &self.shared.config;
        let delay = state.chance.delay_between(config.min_delay(), config.max_delay());
        let deadline = Instant::now() + delay;

        self.shared.publish(SessionEvent::TurnAppended {
            session_id: self.shared.id,
            turn,
            awaiting_reply: true,
        });
        self.publish_input(state);
        self.shared.awaiting_tx.send_replace(true);

        info!(
            session_id = %self.shared.id,
            turn_id = %turn_id,
            delay_ms = delay.as_millis() as u64,
            "User turn accepted, reply scheduled"
        );

        runtime.spawn(deliver_reply(
            Arc::clone(&self.shared),
            self.cancel.clone(),
            deadline,
        ));

        SubmitOutcome::Accepted { turn_id }
    }

    fn publish_input(&self, state: &SessionState) {
        self.shared.publish(SessionEvent::InputChanged {
            session_id: self.shared.id,
            pending_input: state.pending_input.clone(),
        });
    }

    /// Resolve once no reply is pending (immediately if idle or closed).
    pub async fn wait_idle(&self) {
        let mut rx = self.shared.awaiting_tx.subscribe();
        let _ = rx.wait_for(|awaiting| !*awaiting).await;
    }

    /// Close the session, cancelling any pending reply.
    ///
    /// Idempotent. Later submissions return [`SubmitOutcome::Closed`].
    pub fn close(&self) {
        {
            let mut state = self.shared.lock();
            if state.closed {
                return;
            }
            state.closed = true;
            state.awaiting_reply = false;
        }
        self.cancel.cancel();
        self.shared.awaiting_tx.send_replace(false);
        self.shared.publish(SessionEvent::Closed { session_id: self.shared.id });
        info!(session_id = %self.shared.id, "Assistant session closed");
    }
}

impl Drop for AssistantSession {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for AssistantSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistantSession")
            .field("id", &self.shared.id)
            .field("mode", &self.shared.mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use tokio::sync::broadcast::error::TryRecvError;

    use crate::assistant::chance::FixedChance;
    use crate::assistant::content::{reply_pool, welcome_suggestions, welcome_text};

    fn fixed_session(mode: AssistantMode, index: usize, delay_ms: u64, attach: bool) -> AssistantSession {
        AssistantSession::new(
            mode,
            AssistantConfig::default(),
            Box::new(FixedChance::new(index, Duration::from_millis(delay_ms), attach)),
        )
    }

    #[test]
    fn new_session_starts_with_welcome_turn() {
        for mode in AssistantMode::ALL {
            let session = AssistantSession::new(
                mode,
                AssistantConfig::default(),
                Box::new(RngChance::seeded(1)),
            );
            let transcript = session.transcript();
            assert_eq!(transcript.len(), 1);
            assert_eq!(transcript[0].speaker, Speaker::Assistant);
            assert_eq!(transcript[0].text, welcome_text(mode));
            assert_eq!(transcript[0].id, TurnId(1));

            let suggestions = transcript[0].suggestions.clone().unwrap();
            assert_eq!(suggestions, welcome_suggestions(mode));
            assert!(!session.is_awaiting_reply());
            assert!(session.pending_input().is_empty());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn submit_appends_trimmed_user_turn() {
        let session = fixed_session(AssistantMode::Advisor, 0, 2000, false);

        let outcome = session.submit("  how do I price scarves?  ");

        assert_eq!(outcome, SubmitOutcome::Accepted { turn_id: TurnId(2) });
        let transcript = session.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[1].speaker, Speaker::User);
        assert_eq!(transcript[1].text, "how do I price scarves?");
        assert!(transcript[1].suggestions.is_none());
        assert!(session.is_awaiting_reply());
        assert!(session.pending_input().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn submit_while_pending_is_ignored() {
        let session = fixed_session(AssistantMode::Quality, 1, 2000, false);
        assert!(session.submit("first").is_accepted());

        assert_eq!(session.submit("second"), SubmitOutcome::IgnoredPending);
        assert_eq!(session.turn_count(), 2);

        session.wait_idle().await;
        assert_eq!(session.turn_count(), 3);

        // Idle again, so the next submission goes through.
        assert!(session.submit("second").is_accepted());
        assert_eq!(session.turn_count(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn reply_arrives_after_delay() {
        let session = fixed_session(AssistantMode::Generic, 3, 2000, false);
        session.submit("hello");

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(session.is_awaiting_reply());
        assert_eq!(session.turn_count(), 2);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(!session.is_awaiting_reply());

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[2].speaker, Speaker::Assistant);
        assert_eq!(transcript[2].text, reply_pool(AssistantMode::Generic)[3]);
        assert_eq!(transcript[2].id, TurnId(3));
    }

    #[tokio::test(start_paused = true)]
    async fn market_scenario() {
        let session = AssistantSession::new(
            AssistantMode::from_key("market"),
            AssistantConfig::default(),
            Box::new(RngChance::seeded(2024)),
        );
        session.submit("current prices?");

        let snapshot = session.snapshot();
        assert_eq!(snapshot.transcript.len(), 2);
        assert_eq!(snapshot.transcript[0].text, welcome_text(AssistantMode::Market));
        assert_eq!(snapshot.transcript[1].speaker, Speaker::User);
        assert_eq!(snapshot.transcript[1].text, "current prices?");
        assert!(snapshot.awaiting_reply);

        let started = Instant::now();
        session.wait_idle().await;
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(1500), "elapsed {elapsed:?}");
        assert!(elapsed < Duration::from_millis(2500), "elapsed {elapsed:?}");

        let snapshot = session.snapshot();
        assert_eq!(snapshot.transcript.len(), 3);
        assert!(reply_pool(AssistantMode::Market).contains(&snapshot.transcript[2].text.as_str()));
        assert!(!snapshot.awaiting_reply);
    }

    #[tokio::test(start_paused = true)]
    async fn whitespace_submission_is_ignored() {
        let session = fixed_session(AssistantMode::Advisor, 0, 2000, false);

        assert_eq!(session.submit("   "), SubmitOutcome::IgnoredEmpty);
        assert_eq!(session.submit(""), SubmitOutcome::IgnoredEmpty);
        assert_eq!(session.turn_count(), 1);
        assert!(!session.is_awaiting_reply());
    }

    #[test]
    fn select_suggestion_fills_input_only() {
        let session = fixed_session(AssistantMode::Market, 0, 2000, false);
        session.select_suggestion("Competitor pricing");

        assert_eq!(session.pending_input(), "Competitor pricing");
        assert_eq!(session.turn_count(), 1);
        assert!(!session.is_awaiting_reply());
        assert!(session.can_submit());
    }

    #[tokio::test(start_paused = true)]
    async fn submit_pending_uses_selected_suggestion() {
        let session = fixed_session(AssistantMode::Market, 0, 1500, false);
        session.select_suggestion("Demand trends analysis");

        assert!(session.submit_pending().is_accepted());
        let transcript = session.transcript();
        assert_eq!(transcript[1].text, "Demand trends analysis");
        assert!(session.pending_input().is_empty());
        assert!(!session.can_submit());
    }

    #[tokio::test(start_paused = true)]
    async fn suggestions_attached_when_chance_hits() {
        let with = fixed_session(AssistantMode::Quality, 0, 1500, true);
        with.submit("check my glaze");
        with.wait_idle().await;
        let reply = with.transcript().pop().unwrap();
        let expected: Vec<String> = FOLLOW_UP_SUGGESTIONS.iter().map(|s| s.to_string()).collect();
        assert_eq!(reply.suggestions, Some(expected));

        let without = fixed_session(AssistantMode::Quality, 0, 1500, false);
        without.submit("check my glaze");
        without.wait_idle().await;
        assert!(without.transcript().pop().unwrap().suggestions.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn turn_ids_increase_in_creation_order() {
        let session = fixed_session(AssistantMode::Generic, 0, 1500, false);
        for text in ["one", "two", "three"] {
            session.submit(text);
            session.wait_idle().await;
        }
        let ids: Vec<u64> = session.transcript().iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);

        let times: Vec<_> = session.transcript().iter().map(|t| t.created_at).collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
    }

    #[tokio::test(start_paused = true)]
    async fn close_cancels_pending_reply() {
        let session = fixed_session(AssistantMode::Advisor, 0, 2000, false);
        let mut rx = session.subscribe();
        session.submit("anything");

        session.close();
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert_eq!(session.turn_count(), 2);
        assert!(!session.is_awaiting_reply());
        assert!(session.is_closed());
        assert_eq!(session.submit("more"), SubmitOutcome::Closed);

        let mut saw_cancel = false;
        while let Ok(event) = rx.try_recv() {
            match event {
                SessionEvent::TurnAppended { turn, .. } => assert!(turn.is_user()),
                SessionEvent::ReplyCancelled { .. } => saw_cancel = true,
                _ => {}
            }
        }
        assert!(saw_cancel);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_pending_reply() {
        let session = fixed_session(AssistantMode::Advisor, 0, 2000, false);
        let mut rx = session.subscribe();
        session.submit("anything");
        drop(session);

        tokio::time::sleep(Duration::from_secs(5)).await;

        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        assert!(events.iter().any(|e| matches!(e, SessionEvent::Closed { .. })));
        assert!(events.iter().any(|e| matches!(e, SessionEvent::ReplyCancelled { .. })));
        assert!(!events.iter().any(
            |e| matches!(e, SessionEvent::TurnAppended { turn, .. } if turn.is_assistant())
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn events_follow_transcript_mutations() {
        let session = fixed_session(AssistantMode::Market, 2, 1500, false);
        let mut rx = session.subscribe();

        session.set_input("current prices?");
        session.submit_pending();
        session.wait_idle().await;

        let first = rx.recv().await.unwrap();
        assert!(matches!(first, SessionEvent::InputChanged { ref pending_input, .. } if pending_input == "current prices?"));

        match rx.recv().await.unwrap() {
            SessionEvent::TurnAppended { turn, awaiting_reply, .. } => {
                assert!(turn.is_user());
                assert!(awaiting_reply);
            }
            other => panic!("unexpected event: {other:?}"),
        }

        let cleared = rx.recv().await.unwrap();
        assert!(matches!(cleared, SessionEvent::InputChanged { ref pending_input, .. } if pending_input.is_empty()));

        match rx.recv().await.unwrap() {
            SessionEvent::TurnAppended { turn, awaiting_reply, session_id } => {
                assert!(turn.is_assistant());
                assert!(!awaiting_reply);
                assert_eq!(session_id, session.id());
                assert_eq!(turn.text, reply_pool(AssistantMode::Market)[2]);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn wait_idle_returns_immediately_when_idle() {
        let session = AssistantSession::create(AssistantMode::Generic);
        session.wait_idle().await;
        assert_eq!(session.turn_count(), 1);
    }

    #[test]
    fn close_is_idempotent() {
        let session = fixed_session(AssistantMode::Generic, 0, 1500, false);
        let mut rx = session.subscribe();
        session.close();
        session.close();
        session.set_input("ignored");

        assert!(session.pending_input().is_empty());
        assert!(matches!(rx.try_recv(), Ok(SessionEvent::Closed { .. })));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn submit_outside_runtime_leaves_state_untouched() {
        let session = fixed_session(AssistantMode::Advisor, 0, 1500, false);
        session.set_input("how do I price scarves?");

        assert_eq!(session.submit_pending(), SubmitOutcome::NoRuntime);
        assert_eq!(session.submit("hi"), SubmitOutcome::NoRuntime);

        assert_eq!(session.turn_count(), 1);
        assert!(!session.is_awaiting_reply());
        assert_eq!(session.pending_input(), "how do I price scarves?");
        session.close();
        assert!(session.is_closed());
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_config_falls_back_to_defaults() {
        let config = AssistantConfig {
            suggestion_probability: f64::NAN,
            event_capacity: 0,
            ..AssistantConfig::default()
        };
        let session = AssistantSession::new(AssistantMode::Quality, config, Box::new(RngChance::seeded(8)));
        assert_eq!(session.shared.config, AssistantConfig::default());

        assert!(session.submit("is my weave even?").is_accepted());
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert_eq!(session.turn_count(), 3);
        assert!(!session.is_awaiting_reply());
    }

    #[test]
    fn slow_subscriber_lags_without_affecting_session() {
        let config = AssistantConfig {
            event_capacity: 2,
            ..AssistantConfig::default()
        };
        let session = AssistantSession::new(AssistantMode::Market, config, Box::new(RngChance::seeded(3)));
        let mut rx = session.subscribe();

        for n in 0..5 {
            session.set_input(format!("draft {n}"));
        }

        assert!(matches!(rx.try_recv(), Err(TryRecvError::Lagged(3))));
        assert!(matches!(
            rx.try_recv(),
            Ok(SessionEvent::InputChanged { ref pending_input, .. }) if pending_input == "draft 3"
        ));
        assert_eq!(session.pending_input(), "draft 4");
    }
}
