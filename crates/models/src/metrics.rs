use rand::Rng;
use serde::{Deserialize, Serialize};

/// Synthetic dashboard numbers. Sampled fresh per read, never stored, so
/// consecutive reads are not expected to agree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(rename = "leadsProcessed")]
    pub leads_processed: u32,
    #[serde(rename = "messagesProcessed")]
    pub messages_processed: u32,
    #[serde(rename = "daysUntilRenewal")]
    pub days_until_renewal: u32,
}

impl Metrics {
    pub fn sample() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            leads_processed: rng.gen_range(0..1000),
            messages_processed: rng.gen_range(0..500),
            days_until_renewal: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_stays_in_range() {
        for _ in 0..100 {
            let m = Metrics::sample();
            assert!(m.leads_processed < 1000);
            assert!(m.messages_processed < 500);
            assert_eq!(m.days_until_renewal, 5);
        }
    }
}
