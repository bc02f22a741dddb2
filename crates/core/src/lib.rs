//! Shared types, configuration and errors for the AdCraft workspace.

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AdCraftError, AdCraftResult};
pub use types::{AdVariant, Angle, CampaignInput, Goal, Length, Platform, Tone, DEFAULT_AUDIENCE};
