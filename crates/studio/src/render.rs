//! Plain-text result cards.

use adcraft_core::AdVariant;

/// Render one variant as a labelled card.
pub fn render_card(variant: &AdVariant, include_video_script: bool) -> String {
    let mut lines = vec![
        format!("Variation {} · {}", variant.variation_index, variant.angle),
        format!("{} · {} · {}", variant.platform, variant.tone, variant.goal),
        String::new(),
        "Primary Text".to_string(),
        variant.primary.clone(),
        String::new(),
        "Headline".to_string(),
        variant.headline.clone(),
        String::new(),
        "Description / Caption".to_string(),
        variant.description.clone(),
        String::new(),
        "Call to Action".to_string(),
        variant.cta.clone(),
    ];

    if include_video_script {
        if let Some(outline) = &variant.script_outline {
            lines.push(String::new());
            lines.push("Video Script Outline".to_string());
            lines.extend(outline.iter().map(|line| format!("  • {line}")));
        }
    }

    lines.join("\n")
}

/// Render every variant, cards separated by a rule.
pub fn render_cards(variants: &[AdVariant], include_video_script: bool) -> String {
    let rule = format!("\n\n{}\n\n", "─".repeat(60));
    variants
        .iter()
        .map(|variant| render_card(variant, include_video_script))
        .collect::<Vec<_>>()
        .join(&rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adcraft_core::{CampaignInput, Goal, Platform, Tone};

    fn variants(include_video_script: bool) -> Vec<AdVariant> {
        adcraft_generator::generate(&CampaignInput {
            product: "Cold brew subscription".to_string(),
            platform: Platform::FacebookInstagram,
            goal: Goal::Bookings,
            tone: Tone::StoryBased,
            include_video_script,
            ..Default::default()
        })
    }

    #[test]
    fn test_card_header_and_sections() {
        let card = render_card(&variants(false)[1], false);
        let mut lines = card.lines();

        assert_eq!(lines.next(), Some("Variation 2 · Before / After"));
        assert_eq!(
            lines.next(),
            Some("Facebook / Instagram · Story-based · Bookings")
        );
        assert!(card.contains("\nCall to Action\nBook Your Spot"));
        assert!(!card.contains("Video Script Outline"));
    }

    #[test]
    fn test_card_includes_outline_when_shown() {
        let card = render_card(&variants(true)[0], true);
        assert!(card.contains("Video Script Outline\n  • Hook (1): "));
        assert_eq!(card.matches("  • ").count(), 5);
    }

    #[test]
    fn test_cards_are_separated() {
        let text = render_cards(&variants(false), false);
        assert_eq!(text.matches("Variation ").count(), 3);
        assert_eq!(text.matches(&"─".repeat(60)).count(), 2);
    }
}
