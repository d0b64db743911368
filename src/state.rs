use crate::config::AppConfig;
use crate::domain::assessment::{AssessmentCatalog, AssessmentDefinition, AssessmentKind};
use crate::domain::session::SessionState;
use crate::middleware::RateLimiter;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<AssessmentCatalog>,
    pub sessions: Arc<RwLock<HashMap<Uuid, LiveSession>>>, // session id -> LiveSession
    pub limiter: RateLimiter,
    pub session_ttl: Duration,
}

/// An in-memory assessment session. Dropped on expiry; never persisted.
#[derive(Clone, Debug)]
pub struct LiveSession {
    pub kind: AssessmentKind,
    pub state: SessionState,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(catalog: AssessmentCatalog, config: &AppConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            sessions: Arc::new(RwLock::new(HashMap::new())),
            limiter: RateLimiter::new(config.rate_limit_max_sessions, config.rate_limit_window_secs),
            session_ttl: Duration::minutes(config.session_ttl_minutes),
        }
    }

    pub fn definition(&self, kind: AssessmentKind) -> &AssessmentDefinition {
        self.catalog.get(kind)
    }

    pub async fn open_session(&self, kind: AssessmentKind) -> (Uuid, LiveSession) {
        let now = Utc::now();
        let session = LiveSession {
            kind,
            state: SessionState::start(),
            created_at: now,
            expires_at: now + self.session_ttl,
        };
        let id = Uuid::new_v4();
        self.sessions.write().await.insert(id, session.clone());
        (id, session)
    }

    /// Returns the session if it exists and has not expired.
    pub async fn session(&self, id: Uuid) -> Option<LiveSession> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&id)
            .filter(|s| s.expires_at > Utc::now())
            .cloned()
    }

    /// Applies `transition` to a live session and stores the result.
    /// On error the stored session is left untouched.
    pub async fn update_session<F, E>(&self, id: Uuid, transition: F) -> Option<Result<LiveSession, E>>
    where
        F: FnOnce(&AssessmentDefinition, &SessionState) -> Result<SessionState, E>,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).filter(|s| s.expires_at > Utc::now())?;
        let definition = self.catalog.get(session.kind);
        Some(transition(definition, &session.state).map(|next| {
            session.state = next;
            session.clone()
        }))
    }

    pub async fn close_session(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    /// Drops expired sessions; returns how many were removed.
    pub async fn sweep_expired(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.expires_at > now);
        before - sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bank::QuestionId;
    use crate::domain::likert::Likert;
    use crate::domain::session::SessionError;

    fn state() -> AppState {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        AppState::new(AssessmentCatalog::load().unwrap(), &config)
    }

    #[tokio::test]
    async fn test_open_and_fetch_session() {
        let state = state();
        let (id, opened) = state.open_session(AssessmentKind::Couple).await;
        let fetched = state.session(id).await.unwrap();
        assert_eq!(fetched.kind, AssessmentKind::Couple);
        assert_eq!(fetched.state, SessionState::start());
        assert_eq!(fetched.expires_at, opened.expires_at);
    }

    #[tokio::test]
    async fn test_failed_transition_keeps_state() {
        let state = state();
        let (id, _) = state.open_session(AssessmentKind::Individual).await;

        let result = state
            .update_session(id, |def, s| s.next(&def.bank))
            .await
            .unwrap();
        assert_eq!(result.unwrap_err(), SessionError::Unanswered(QuestionId(1)));
        assert_eq!(state.session(id).await.unwrap().state, SessionState::start());

        let updated = state
            .update_session(id, |def, s| s.record_answer(&def.bank, QuestionId(1), Likert::Agree))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.state.answers().get(QuestionId(1)), Some(Likert::Agree));
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let state = state();
        assert!(state.session(Uuid::new_v4()).await.is_none());
        assert!(state
            .update_session(Uuid::new_v4(), |_, s| Ok::<_, SessionError>(s.clone()))
            .await
            .is_none());
        assert!(!state.close_session(Uuid::new_v4()).await);
    }

    #[tokio::test]
    async fn test_sweep_removes_only_expired() {
        let state = state();
        let (fresh, _) = state.open_session(AssessmentKind::Individual).await;
        let (stale, _) = state.open_session(AssessmentKind::Couple).await;
        {
            let mut sessions = state.sessions.write().await;
            sessions.get_mut(&stale).unwrap().expires_at = Utc::now() - Duration::minutes(1);
        }

        assert!(state.session(stale).await.is_none());
        assert_eq!(state.sweep_expired(Utc::now()).await, 1);
        assert!(state.session(fresh).await.is_some());
        assert_eq!(state.sessions.read().await.len(), 1);
    }
}
