//! A studio session: validates input, runs one generation at a time and
//! serves copy actions against the latest results.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use adcraft_core::{AdCraftError, AdCraftResult, AdVariant, AppConfig, CampaignInput};
use adcraft_generator::{build_prompt, copy_all_text};
use tracing::{debug, info, warn};

use crate::backend::{GenerationBackend, GenerationBatch, MockBackend};
use crate::clipboard::{Clipboard, CopyOutcome};
use crate::notifier::{NoticeSink, Notifier};
use crate::render::render_cards;

pub const MISSING_PRODUCT_NOTICE: &str = "Please describe your product or service first.";

/// Clears the in-flight flag when a generation finishes, however it ends.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct StudioSession {
    backend: Arc<dyn GenerationBackend>,
    notifier: Arc<Notifier>,
    clipboard: Clipboard,
    strict_inputs: bool,
    busy: AtomicBool,
    latest: parking_lot::RwLock<Option<GenerationBatch>>,
}

impl StudioSession {
    pub fn new(
        backend: Arc<dyn GenerationBackend>,
        notifier: Arc<Notifier>,
        clipboard: Clipboard,
        strict_inputs: bool,
    ) -> Self {
        Self {
            backend,
            notifier,
            clipboard,
            strict_inputs,
            busy: AtomicBool::new(false),
            latest: parking_lot::RwLock::new(None),
        }
    }

    /// Session wired from configuration: mock backend, toast notifier and
    /// command/file clipboard.
    pub fn from_config(config: &AppConfig, sink: Arc<dyn NoticeSink>) -> Self {
        let notifier = Arc::new(Notifier::new(
            sink,
            Duration::from_millis(config.notifications.toast_duration_ms),
        ));
        let backend = Arc::new(MockBackend::new(Duration::from_millis(
            config.generation.mock_delay_ms,
        )));
        let clipboard = Clipboard::from_config(&config.clipboard, notifier.clone());
        Self::new(backend, notifier, clipboard, config.generation.strict_inputs)
    }

    /// Validate and generate. Invalid input raises a notice and is not sent
    /// to the backend; a second call while one is running is rejected.
    pub async fn submit(&self, input: CampaignInput) -> AdCraftResult<GenerationBatch> {
        if let Err(err) = input.validate(self.strict_inputs) {
            warn!(error = %err, "rejected campaign input");
            match &err {
                AdCraftError::Validation(_) => self.notifier.show(MISSING_PRODUCT_NOTICE),
                other => self.notifier.show(other.to_string()),
            }
            return Err(err);
        }

        if self
            .busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(AdCraftError::Busy);
        }
        let _in_flight = InFlight(&self.busy);

        debug!(prompt = %build_prompt(&input), "prompt for a live copywriting backend");
        info!(
            platform = %input.platform,
            goal = %input.goal,
            tone = %input.tone,
            length = %input.length,
            "generating ad variations"
        );

        let batch = self.backend.generate(&input).await?;
        *self.latest.write() = Some(batch.clone());
        Ok(batch)
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn notifier(&self) -> &Arc<Notifier> {
        &self.notifier
    }

    /// Variants from the most recent successful generation.
    pub fn variants(&self) -> Vec<AdVariant> {
        self.latest
            .read()
            .as_ref()
            .map(|batch| batch.variants.clone())
            .unwrap_or_default()
    }

    /// Text cards for the latest results, if any.
    pub fn render(&self) -> Option<String> {
        self.latest
            .read()
            .as_ref()
            .map(|batch| render_cards(&batch.variants, batch.include_video_script))
    }

    /// Copy the primary text of the 1-based `variation_index`.
    pub fn copy_primary(&self, variation_index: usize) -> AdCraftResult<CopyOutcome> {
        let text = self.with_variant(variation_index, |variant, _| variant.primary.clone())?;
        Ok(self.clipboard.copy(&text))
    }

    /// Copy the full labelled block of the 1-based `variation_index`.
    pub fn copy_all(&self, variation_index: usize) -> AdCraftResult<CopyOutcome> {
        let text = self.with_variant(variation_index, copy_all_text)?;
        Ok(self.clipboard.copy(&text))
    }

    fn with_variant<T>(
        &self,
        variation_index: usize,
        f: impl FnOnce(&AdVariant, bool) -> T,
    ) -> AdCraftResult<T> {
        let latest = self.latest.read();
        let batch = latest
            .as_ref()
            .ok_or(AdCraftError::VariantNotFound(variation_index))?;
        let variant = batch
            .variants
            .iter()
            .find(|v| v.variation_index == variation_index)
            .ok_or(AdCraftError::VariantNotFound(variation_index))?;
        Ok(f(variant, batch.include_video_script))
    }
}
