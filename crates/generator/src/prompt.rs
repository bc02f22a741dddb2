//! Instruction prompt for a real copywriting model.
//!
//! The mock generator does not consume it; it is built and logged so a live
//! backend can be dropped in without changing what the caller collects.

use adcraft_core::CampaignInput;

const AUDIENCE_FALLBACK: &str = "Use your best guess based on the product and goal.";

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Build the prompt describing the requested ad copy.
pub fn build_prompt(input: &CampaignInput) -> String {
    let audience = match input.audience.trim() {
        "" => AUDIENCE_FALLBACK,
        audience => audience,
    };
    let script_item = if input.include_video_script {
        "- A short bullet-point video script outline (for a 20–30s ad)"
    } else {
        ""
    };

    format!(
        "
You are a senior performance marketer and direct response copywriter.

Write HIGH-CONVERTING ad copy for the following:

Product / offer:
{product}

Target audience:
{audience}

Platform: {platform}
Goal: {goal}
Tone / style: {tone}
Length: {length}
Include emojis: {emojis}
Include hashtags (if the platform uses them): {hashtags}
Also generate a short video ad script outline: {script}

Return 3 variations. For each variation, include:
- Primary text (the main ad body)
- Headline (if the platform uses headlines)
- Short supporting description or caption
- A clear call-to-action
{script_item}
",
        product = input.product.trim(),
        platform = input.platform,
        goal = input.goal,
        tone = input.tone,
        length = input.length,
        emojis = yes_no(input.include_emojis),
        hashtags = yes_no(input.include_hashtags),
        script = yes_no(input.include_video_script),
    )
}
