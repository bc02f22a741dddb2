//! Lookup tables for the copy fragments shared by every angle.

use adcraft_core::{Goal, Length, Platform, Tone};

/// Appended after the opening sentence and the length clause when emojis are on.
pub const EMOJI_SUFFIX: &str = " 🚀🔥✨";

/// Emoji suffix for the current flag, or an empty string.
pub fn emoji_suffix(include_emojis: bool) -> &'static str {
    if include_emojis {
        EMOJI_SUFFIX
    } else {
        ""
    }
}

/// Platform-specific hashtag chunk appended to the primary text.
pub fn hashtag_suffix(platform: &Platform, include_hashtags: bool) -> &'static str {
    if !include_hashtags {
        return "";
    }
    match platform {
        Platform::TikTok | Platform::XTwitter => " #ads #marketing #fyp",
        Platform::FacebookInstagram => " #facebookads #instagramads",
        Platform::YouTube => " #youtubeads",
        Platform::GoogleAds => " #searchads",
        Platform::LinkedIn => " #b2bmarketing",
        Platform::Other(_) => " #ads",
    }
}

/// Body clause keyed by tone. Each clause starts with a space.
pub fn tone_clause(tone: &Tone, goal: &Goal) -> String {
    match tone {
        Tone::Edgy => format!(
            " You’re not here to play it safe—you’re here to win. That means ads that stop the scroll and move people to {}.",
            goal.as_str().to_lowercase()
        ),
        Tone::Luxury => " They want premium quality and a seamless experience—and that’s exactly what your brand delivers."
            .to_string(),
        Tone::UgcStyle => " Real people. Real reactions. Real results. Show them what happens when they finally discover you."
            .to_string(),
        Tone::StoryBased => " Tell the story of someone just like them—and how everything changed once they tried your offer."
            .to_string(),
        Tone::Default | Tone::Other(_) => " Make it clear, confident, and benefit-driven so they instantly understand why this matters."
            .to_string(),
    }
}

/// Closing clause keyed by length, followed by the emoji suffix.
pub fn length_clause(length: &Length, emojis: &str) -> String {
    let clause = match length {
        Length::Short => " In one tight, high-impact paragraph, highlight the core benefit and invite them to take action.",
        Length::Long => " Build a mini narrative: call out the problem, agitate it slightly, then present your product as the clear, low-friction solution with 2–3 specific benefits.",
        Length::Balanced | Length::Other(_) => " Use 2–3 concise sentences to bridge from their current frustration to your solution, focusing on clarity and outcomes.",
    };
    format!("{clause}{emojis}")
}
