use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Subscription tier. `Start` is the lowest tier and gets a reduced default
/// service set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Plan {
    Start,
    Pro,
    Enterprise,
}

impl Plan {
    pub fn is_lowest_tier(&self) -> bool {
        matches!(self, Plan::Start)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    Active,
    Paused,
}

/// Named product feature that can be toggled per client.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ServiceName {
    TelegramBot,
    WhatsappBot,
    MakeScenario,
    CrmIntegration,
}

/// A subscribed tenant with a plan, status and per-service enablement flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: u64,
    pub name: String,
    pub plan: Plan,
    pub status: ClientStatus,
    pub services: BTreeMap<ServiceName, bool>,
    #[serde(rename = "subscriptionDate")]
    pub subscription_date: String,
}

impl Client {
    /// Build a fresh client with the default service flags for its plan.
    /// Messaging add-ons (whatsapp, CRM) are off on the lowest tier.
    pub fn new(id: u64, name: String, plan: Plan) -> Self {
        let full = !plan.is_lowest_tier();
        let services = BTreeMap::from([
            (ServiceName::TelegramBot, true),
            (ServiceName::WhatsappBot, full),
            (ServiceName::MakeScenario, true),
            (ServiceName::CrmIntegration, full),
        ]);
        Self {
            id,
            name,
            plan,
            status: ClientStatus::Active,
            services,
            subscription_date: Utc::now().to_rfc3339(),
        }
    }
}
