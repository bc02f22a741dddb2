//! Plain-text export of a variant for the "copy all" action.

use adcraft_core::AdVariant;

/// Labelled copy block for a variant, sections separated by a blank line.
///
/// The script outline is included only when scripts are being shown and
/// the variant carries one.
pub fn copy_all_text(variant: &AdVariant, include_video_script: bool) -> String {
    let mut blocks = vec![
        format!("Primary: {}", variant.primary),
        format!("Headline: {}", variant.headline),
        format!("Description: {}", variant.description),
        format!("CTA: {}", variant.cta),
    ];

    if include_video_script {
        if let Some(outline) = variant.script_outline.as_deref().filter(|o| !o.is_empty()) {
            blocks.push(format!("Video Script Outline:\n- {}", outline.join("\n- ")));
        }
    }

    blocks.join("\n\n")
}
