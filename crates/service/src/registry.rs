use std::{collections::BTreeMap, collections::HashMap, str::FromStr, sync::Arc};

use tokio::sync::RwLock;
use tracing::info;

use crate::errors::ServiceError;
use models::{Client, ClientStatus, Plan, ServiceName};

/// Admin lifecycle action on a client. Both directions are always
/// permitted; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    Pause,
    Resume,
}

impl AdminAction {
    pub fn past_tense(&self) -> &'static str {
        match self {
            AdminAction::Pause => "paused",
            AdminAction::Resume => "resumed",
        }
    }

    fn target_status(&self) -> ClientStatus {
        match self {
            AdminAction::Pause => ClientStatus::Paused,
            AdminAction::Resume => ClientStatus::Active,
        }
    }
}

impl FromStr for AdminAction {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pause" => Ok(AdminAction::Pause),
            "resume" => Ok(AdminAction::Resume),
            _ => Err(ServiceError::Validation("Invalid action".into())),
        }
    }
}

struct RegistryInner {
    clients: HashMap<u64, Client>,
    next_id: u64,
}

/// Process-wide map of subscribed clients, plus the monotonic id counter.
/// Clients are never deleted; ids start at 1 and are immutable once issued.
#[derive(Clone)]
pub struct ClientRegistry {
    inner: Arc<RwLock<RegistryInner>>,
}

impl Default for ClientRegistry {
    fn default() -> Self {
        Self {
            inner: Arc::new(RwLock::new(RegistryInner {
                clients: HashMap::new(),
                next_id: 1,
            })),
        }
    }
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id and store a new client with default service
    /// flags for its plan.
    pub async fn create(&self, name: String, plan: Plan) -> Client {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        let client = Client::new(id, name, plan);
        inner.clients.insert(id, client.clone());
        info!(client_id = id, ?plan, "subscription created");
        client
    }

    pub async fn get(&self, id: u64) -> Option<Client> {
        let inner = self.inner.read().await;
        inner.clients.get(&id).cloned()
    }

    /// Flip one service flag and return the updated map. The map is left
    /// untouched when the service is not part of the client's known set.
    pub async fn toggle_service(
        &self,
        id: u64,
        service: ServiceName,
        enabled: bool,
    ) -> Result<BTreeMap<ServiceName, bool>, ServiceError> {
        let mut inner = self.inner.write().await;
        let client = inner
            .clients
            .get_mut(&id)
            .ok_or_else(|| ServiceError::not_found("Client"))?;
        match client.services.get_mut(&service) {
            Some(flag) => {
                *flag = enabled;
                Ok(client.services.clone())
            }
            None => Err(ServiceError::Validation("Unknown service".into())),
        }
    }

    /// Apply an admin pause/resume and return the updated client.
    pub async fn set_status(
        &self,
        id: u64,
        action: AdminAction,
    ) -> Result<Client, ServiceError> {
        let mut inner = self.inner.write().await;
        let client = inner
            .clients
            .get_mut(&id)
            .ok_or_else(|| ServiceError::not_found("Client"))?;
        client.status = action.target_status();
        info!(client_id = id, status = action.past_tense(), "client status changed");
        Ok(client.clone())
    }

    /// All clients, ascending by id. Ordering is for stable output only,
    /// not part of the contract.
    pub async fn list(&self) -> Vec<Client> {
        let inner = self.inner.read().await;
        let mut all: Vec<Client> = inner.clients.values().cloned().collect();
        all.sort_by_key(|c| c.id);
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_monotonic_from_one() {
        let reg = ClientRegistry::new();
        for expected in 1..=5u64 {
            let c = reg.create("Acme".into(), Plan::Pro).await;
            assert_eq!(c.id, expected);
        }
        let all = reg.list().await;
        assert_eq!(all.len(), 5);
        assert_eq!(all.first().unwrap().id, 1);
    }

    #[tokio::test]
    async fn toggle_flips_and_returns_updated_map() {
        let reg = ClientRegistry::new();
        let c = reg.create("Acme".into(), Plan::Start).await;
        assert_eq!(c.services[&ServiceName::WhatsappBot], false);

        let services = reg
            .toggle_service(c.id, ServiceName::WhatsappBot, true)
            .await
            .unwrap();
        assert_eq!(services[&ServiceName::WhatsappBot], true);
        assert_eq!(
            reg.get(c.id).await.unwrap().services[&ServiceName::WhatsappBot],
            true
        );
    }

    #[tokio::test]
    async fn toggle_on_missing_client_is_not_found() {
        let reg = ClientRegistry::new();
        let err = reg
            .toggle_service(99, ServiceName::TelegramBot, false)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn pause_and_resume_round_trip() {
        let reg = ClientRegistry::new();
        let c = reg.create("Acme".into(), Plan::Pro).await;
        let paused = reg.set_status(c.id, AdminAction::Pause).await.unwrap();
        assert_eq!(paused.status, ClientStatus::Paused);
        let resumed = reg.set_status(c.id, AdminAction::Resume).await.unwrap();
        assert_eq!(resumed.status, ClientStatus::Active);
    }

    #[tokio::test]
    async fn set_status_on_missing_client_is_not_found() {
        let reg = ClientRegistry::new();
        let err = reg.set_status(1, AdminAction::Pause).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn action_parses_only_pause_and_resume() {
        assert_eq!("pause".parse::<AdminAction>().unwrap(), AdminAction::Pause);
        assert_eq!("resume".parse::<AdminAction>().unwrap(), AdminAction::Resume);
        assert!(matches!(
            "delete".parse::<AdminAction>().unwrap_err(),
            ServiceError::Validation(_)
        ));
    }
}
