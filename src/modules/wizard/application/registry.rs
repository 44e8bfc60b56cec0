use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::modules::wizard::domain::FormWizard;

/// Sessions untouched for this many minutes are dropped.
pub const DEFAULT_IDLE_MINUTES: i64 = 30;

struct Session {
    wizard: FormWizard,
    last_touched: DateTime<Utc>,
}

/// Open wizard sessions, keyed by a server-issued id.
///
/// Every session owns its own draft; nothing here touches the stored
/// collection until a save succeeds. Idle sessions are evicted whenever a
/// session is opened or looked up.
pub struct WizardRegistry {
    sessions: Mutex<HashMap<Uuid, Session>>,
    idle_ttl: Duration,
}

impl Default for WizardRegistry {
    fn default() -> Self {
        Self::with_idle_ttl(Duration::minutes(DEFAULT_IDLE_MINUTES))
    }
}

impl WizardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_ttl(idle_ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle_ttl,
        }
    }

    pub async fn insert(&self, wizard: FormWizard) -> Uuid {
        self.insert_at(wizard, Utc::now()).await
    }

    /// Runs `f` against the session, or returns `None` when it is unknown
    /// or has expired.
    pub async fn with_wizard<R>(&self, id: Uuid, f: impl FnOnce(&mut FormWizard) -> R) -> Option<R> {
        self.with_wizard_at(id, Utc::now(), f).await
    }

    pub async fn remove(&self, id: Uuid) -> Option<FormWizard> {
        self.sessions
            .lock()
            .await
            .remove(&id)
            .map(|session| session.wizard)
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    async fn insert_at(&self, wizard: FormWizard, now: DateTime<Utc>) -> Uuid {
        let id = Uuid::new_v4();
        let mut sessions = self.sessions.lock().await;
        self.evict_idle(&mut sessions, now);
        sessions.insert(
            id,
            Session {
                wizard,
                last_touched: now,
            },
        );
        id
    }

    async fn with_wizard_at<R>(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
        f: impl FnOnce(&mut FormWizard) -> R,
    ) -> Option<R> {
        let mut sessions = self.sessions.lock().await;
        self.evict_idle(&mut sessions, now);
        sessions.get_mut(&id).map(|session| {
            session.last_touched = now;
            f(&mut session.wizard)
        })
    }

    fn evict_idle(&self, sessions: &mut HashMap<Uuid, Session>, now: DateTime<Utc>) {
        let before = sessions.len();
        sessions.retain(|_, session| now - session.last_touched < self.idle_ttl);

        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!(evicted, remaining = sessions.len(), "Evicted idle wizard sessions");
        }
    }
}
