//! Generation backends. The mock backend waits for a configurable delay and
//! then runs the template generator; a live copywriting service would
//! implement the same trait.

use std::time::Duration;

use adcraft_core::{AdCraftResult, AdVariant, CampaignInput};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use tracing::info;
use uuid::Uuid;

/// One completed generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationBatch {
    pub id: Uuid,
    pub variants: Vec<AdVariant>,
    /// Whether the renderer should show script outlines for this run.
    pub include_video_script: bool,
    pub latency_ms: u64,
    pub generated_at: DateTime<Utc>,
}

/// Source of ad variants for a validated campaign input.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(&self, input: &CampaignInput) -> AdCraftResult<GenerationBatch>;
}

/// Template generator behind a simulated network delay.
#[derive(Debug, Clone)]
pub struct MockBackend {
    delay: Duration,
}

impl MockBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Backend that generates immediately.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl GenerationBackend for MockBackend {
    async fn generate(&self, input: &CampaignInput) -> AdCraftResult<GenerationBatch> {
        let start = Instant::now();
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let variants = adcraft_generator::generate(input);
        let latency_ms = start.elapsed().as_millis() as u64;

        info!(
            variants = variants.len(),
            platform = %input.platform,
            latency_ms,
            "mock generation complete"
        );

        Ok(GenerationBatch {
            id: Uuid::new_v4(),
            variants,
            include_video_script: input.include_video_script,
            latency_ms,
            generated_at: Utc::now(),
        })
    }
}
