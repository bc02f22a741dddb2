use adcraft_core::{AdVariant, Angle, CampaignInput};

use crate::angles::AngleTemplate;
use crate::clauses::{emoji_suffix, hashtag_suffix, length_clause, tone_clause};

/// Number of lines in a generated video script outline.
pub const SCRIPT_OUTLINE_LINES: usize = 5;

/// Generate one ad-copy variant per angle, in angle order.
///
/// Pure and deterministic: the same input always yields the same three
/// variants. Unrecognized enumerated values fall back to generic copy and
/// an empty product produces degenerate but well-formed text.
pub fn generate(input: &CampaignInput) -> Vec<AdVariant> {
    let audience = input.normalized_audience();
    let emojis = emoji_suffix(input.include_emojis);
    let hashtags = hashtag_suffix(&input.platform, input.include_hashtags);
    let tone = tone_clause(&input.tone, &input.goal);
    let closing = length_clause(&input.length, emojis);

    let product = input.product.trim();
    let primary = format!(
        "If {audience} are still struggling without {}, they’re leaving results on the table.{emojis}{tone} {closing}{hashtags}",
        product.to_lowercase()
    );

    Angle::ALL
        .iter()
        .enumerate()
        .map(|(index, angle)| {
            let template = AngleTemplate::for_angle(*angle);
            let variation_index = index + 1;
            AdVariant {
                variation_index,
                angle: *angle,
                platform: input.platform.clone(),
                goal: input.goal.clone(),
                tone: input.tone.clone(),
                length: input.length.clone(),
                primary: primary.clone(),
                headline: template.headline(product, audience),
                description: template.description().to_string(),
                cta: template.cta(&input.goal).to_string(),
                script_outline: input
                    .include_video_script
                    .then(|| script_outline(variation_index, audience)),
            }
        })
        .collect()
}

/// Five-beat video ad outline for the variant at `variation_index` (1-based).
pub fn script_outline(variation_index: usize, audience: &str) -> Vec<String> {
    vec![
        format!("Hook ({variation_index}): Pattern interrupt that calls out {audience}."),
        "Problem: 1–2 quick lines showing the frustration or missed opportunity.".to_string(),
        "Solution: Introduce your product as the fast, easy way to solve it.".to_string(),
        "Social proof: Mention results, reviews, or proof points.".to_string(),
        "CTA: Direct, simple invitation to click, book, or buy.".to_string(),
    ]
}
