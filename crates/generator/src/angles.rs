use adcraft_core::{Angle, Goal};

/// Products longer than this are shortened in headlines.
pub const HEADLINE_PRODUCT_LIMIT: usize = 60;
/// Characters kept before the ellipsis when a product is shortened.
pub const HEADLINE_PRODUCT_KEEP: usize = 57;

/// Fixed wording attached to one angle.
#[derive(Debug, Clone, Copy)]
pub struct AngleTemplate {
    pub angle: Angle,
    pub headline_prefix: &'static str,
}

impl AngleTemplate {
    pub fn for_angle(angle: Angle) -> Self {
        let headline_prefix = match angle {
            Angle::PainSolution => "Stop",
            Angle::BeforeAfter => "Imagine",
            Angle::ProofAuthority => "Why",
        };
        Self {
            angle,
            headline_prefix,
        }
    }

    /// Call to action for this angle under the given campaign goal.
    pub fn cta(&self, goal: &Goal) -> &'static str {
        match (self.angle, goal) {
            (Angle::PainSolution, Goal::Sales) => "Shop Now",
            (Angle::PainSolution, Goal::Leads) => "Get Started",
            (Angle::PainSolution, _) => "Learn More",
            (Angle::BeforeAfter, Goal::Bookings) => "Book Your Spot",
            (Angle::BeforeAfter, Goal::AppInstalls) => "Download the App",
            (Angle::BeforeAfter, _) => "Try It Today",
            (Angle::ProofAuthority, _) => "See How It Works",
        }
    }

    pub fn description(&self) -> &'static str {
        match self.angle {
            Angle::PainSolution => "Call out the biggest friction your audience feels right now, then position your offer as the obvious next step.",
            Angle::BeforeAfter => "Paint a quick before/after contrast so they can see the transformation your product delivers.",
            Angle::ProofAuthority => "Highlight specific proof points—results, reviews, or milestones—that show your offer actually works.",
        }
    }

    /// Headline built from the prefix and the (possibly shortened) product.
    pub fn headline(&self, product: &str, audience: &str) -> String {
        let product = headline_product(product);
        let prefix = self.headline_prefix;
        match self.angle {
            Angle::PainSolution => format!("{prefix} wasting ad spend—start converting with {product}"),
            Angle::BeforeAfter => format!("{prefix} your life with {product} in the mix"),
            Angle::ProofAuthority => format!("{prefix} {audience} choose {product} over other options"),
        }
    }
}

/// Trimmed product, cut to 57 characters plus `...` when it exceeds 60.
pub fn headline_product(product: &str) -> String {
    let product = product.trim();
    if product.chars().count() > HEADLINE_PRODUCT_LIMIT {
        let mut short: String = product.chars().take(HEADLINE_PRODUCT_KEEP).collect();
        short.push_str("...");
        short
    } else {
        product.to_string()
    }
}
