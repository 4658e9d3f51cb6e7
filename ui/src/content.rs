//! Static site copy
//!
//! Everything rendered by the pages lives here so the views stay thin and the
//! text can be checked without a browser.

use crate::types::Page;

/// Accent colour of a methodology step.
///
/// Class strings are spelled out in full so Tailwind's scanner keeps them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Purple,
}

impl Accent {
    pub fn header_bg(self) -> &'static str {
        match self {
            Accent::Blue => "bg-blue-600",
            Accent::Green => "bg-green-600",
            Accent::Purple => "bg-purple-600",
        }
    }

    /// Number badge on the home page card
    pub fn badge(self) -> &'static str {
        match self {
            Accent::Blue => "bg-blue-100 text-blue-600",
            Accent::Green => "bg-green-100 text-green-600",
            Accent::Purple => "bg-purple-100 text-purple-600",
        }
    }

    pub fn link(self) -> &'static str {
        match self {
            Accent::Blue => "text-blue-600",
            Accent::Green => "text-green-600",
            Accent::Purple => "text-purple-600",
        }
    }

    /// Hover background for the dropdown entry
    pub fn hover_bg(self) -> &'static str {
        match self {
            Accent::Blue => "hover:bg-blue-50",
            Accent::Green => "hover:bg-green-50",
            Accent::Purple => "hover:bg-purple-50",
        }
    }
}

/// One methodology step: the home card and its detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodologyContent {
    pub page: Page,
    pub step: u8,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub accent: Accent,
    /// Short blurb on the home page card
    pub summary: &'static str,
    pub paragraphs: &'static [&'static str],
    pub list_heading: &'static str,
    pub items: &'static [&'static str],
}

pub const DISCOVER: MethodologyContent = MethodologyContent {
    page: Page::Discover,
    step: 1,
    title: "Step 1: Discover Your Blueprint",
    subtitle: "Mapping your internal operating system.",
    accent: Accent::Blue,
    summary: "Uncover your unconscious patterns, motivations, and fears to reveal your greatest strengths.",
    paragraphs: &[
        "We first uncover your unconscious patterns, motivations, and fears. This foundational step is about building radical self-awareness. By understanding why you do what you do, you gain the power to change it.",
        "Using proven frameworks like the Enneagram, we map your internal operating system to reveal your greatest strengths, core motivations, and hidden roadblocks that may be sabotaging your success and fulfillment.",
    ],
    list_heading: "Key Activities:",
    items: &[
        "In-depth Enneagram assessment and debrief.",
        "Exploration of core fears and desires.",
        "Identifying limiting beliefs and narratives.",
        "Mapping your typical stress and growth responses.",
    ],
};

pub const INTEGRATE: MethodologyContent = MethodologyContent {
    page: Page::Integrate,
    step: 2,
    title: "Step 2: Integrate & Reshape",
    subtitle: "Building resilience and healing what holds you back.",
    accent: Accent::Green,
    summary: "Release deep-seated habits that create stress through mindfulness and somatic practices.",
    paragraphs: &[
        "Awareness is the first step, but integration is where transformation happens. In this phase, you'll release the deep-seated habits that create stress and burnout.",
        "Through mindfulness techniques like Vipassana meditation, yoga, and other somatic (body-based) practices, you will build resilience, reshape your response to pressure, and heal what's been holding you back. This is about rewiring your nervous system for calm, clarity, and focus.",
    ],
    list_heading: "Key Practices:",
    items: &[
        "Guided mindfulness and meditation exercises.",
        "Somatic practices to release stored tension.",
        "Techniques for emotional regulation and stress reduction.",
        "Trauma-informed coaching to safely process past experiences.",
    ],
};

pub const ACTUALIZE: MethodologyContent = MethodologyContent {
    page: Page::Actualize,
    step: 3,
    title: "Step 3: Actualize in Community",
    subtitle: "Aligning with your authentic purpose.",
    accent: Accent::Purple,
    summary: "Amplify your journey in a supportive group setting to accelerate healing and problem-solving.",
    paragraphs: &[
        "Your journey is amplified in a supportive, small group setting. This \"collective coherence\" creates a powerful field of resonance that accelerates healing, enhances problem-solving, and provides shared validation for your authentic purpose.",
        "Here, you align your career and life with your authentic self, learning to lead with clarity, impact, and a direct connection to your intuition. The group acts as a mirror and a support system, reflecting your growth and holding you accountable to your highest potential.",
    ],
    list_heading: "Community Benefits:",
    items: &[
        "Accelerated healing through shared experience.",
        "Enhanced problem-solving via a \"collective mind.\"",
        "Validation and support from a trusted peer group.",
        "Making decisions with greater speed and confidence.",
    ],
};

/// Steps in presentation order
pub static METHODOLOGY: [MethodologyContent; 3] = [DISCOVER, INTEGRATE, ACTUALIZE];

/// Content for a methodology page, `None` for every other page
pub fn methodology(page: Page) -> Option<&'static MethodologyContent> {
    METHODOLOGY.iter().find(|step| step.page == page)
}

pub mod home {
    pub const HERO_TITLE: &str = "Beyond Achievement: The Path to Lasting Fulfillment";
    pub const HERO_TAGLINE: &str = "A confidential, transformative journey for leaders ready to align external success with inner satisfaction.";
    pub const HERO_CTA: &str = "Schedule a Discovery Call";

    pub const INTRO_TITLE: &str = "Is This You?";
    pub const INTRO_BODY: &str = "You've achieved success, but feel like something is missing. The constant pressure has left you disconnected from your purpose and well-being. It's time to redefine success on your own terms.";

    pub const METHODOLOGY_TITLE: &str = "Our Evidence-Informed Methodology";
    pub const METHODOLOGY_TAGLINE: &str = "A three-step framework to guide you from burnout to integrated purpose.";

    pub const OUTCOMES_TITLE: &str = "Your Transformation";
    pub const OUTCOMES_TAGLINE: &str = "Tangible results for your life and career.";

    pub static OUTCOMES: [&str; 8] = [
        "Navigate pressure with unshakable calm",
        "Sharpen intuition for better decision-making",
        "Master your emotions and deepen self-connection",
        "Release past limitations and thrive through transitions",
        "Increase connections with staff & leadership",
        "Cultivate well-being that fuels your success",
        "Self-regulate stress and develop inner awareness",
        "Accelerate career progression & development",
    ];
}

/// Coach profile on the about page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guide {
    pub name: &'static str,
    pub roles: &'static str,
    pub bio: &'static [&'static str],
}

pub static GUIDES: [Guide; 2] = [
    Guide {
        name: "Shalini Verma",
        roles: "Life Coach & Guide, Human Potentialist, Organizational Whisperer",
        bio: &[
            "Trained as an Enneagram Guide, Trauma Informed Coach, and Somatic Healer, Shalini is a MIT and Harvard Business School graduate named to Crain's Top 50 Technology Talent. With experience at Ford, Sun, Oracle, and Google, she inspires leaders to transform themselves and their organizations.",
            "Her passion is to discover and develop tools to uncover individual and collective intelligence to solve increasingly complex problems.",
        ],
    },
    Guide {
        name: "Jatin Alla",
        roles: "Life Coach, AI Researcher, Community Builder",
        bio: &[
            "A former researcher at Google Research and DeepMind, Jatin specializes in the intersection of AI and Human-Computer Interaction. With a background in cognitive science, he helps clients recognize and transform deeply ingrained behavioral patterns for lasting personal growth.",
            "He bridges the gap between technology and human development, generating insights that drive strategic decision-making and ethical AI implementation.",
        ],
    },
];

/// Email link in the contact block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub email: &'static str,
}

impl ContactChannel {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub static CONTACTS: [ContactChannel; 2] = [
    ContactChannel {
        label: "Email Jatin",
        email: "jatin@kairos-coaching.example",
    },
    ContactChannel {
        label: "Email Shalini",
        email: "shalini@kairos-coaching.example",
    },
];

/// Row of the session package price table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingOption {
    pub label: &'static str,
    pub price: &'static str,
    /// Highlight the best-value row
    pub highlight: bool,
}

pub const PACKAGE_NAME: &str = "10 Session Package";

pub static PRICING: [PricingOption; 3] = [
    PricingOption {
        label: "Pay Per Session:",
        price: "$350",
        highlight: false,
    },
    PricingOption {
        label: "Two Installments:",
        price: "$1600 x 2",
        highlight: false,
    },
    PricingOption {
        label: "Paid Upfront:",
        price: "$3000",
        highlight: true,
    },
];

pub const PRICING_NOTE: &str = "Pricing expected to increase 3-5x with full production release.";

pub static PAYMENT_CHANNELS: [&str; 2] = [
    "PayPal: @kairos-coaching",
    "Zelle: payments@kairos-coaching.example",
];

/// Footer copyright line for `year`
pub fn copyright(year: i32) -> String {
    format!("© {} Kairos AI Coaching. All Rights Reserved.", year)
}

/// Footer contact line built from [`CONTACTS`]
pub fn footer_contact_line() -> String {
    let emails: Vec<&str> = CONTACTS.iter().map(|c| c.email).collect();
    format!("Contact: {}", emails.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_methodology_lookup_covers_each_step() {
        for page in Page::METHODOLOGY {
            let content = methodology(page).expect("methodology page has content");
            assert_eq!(content.page, page);
        }
        assert!(methodology(Page::Home).is_none());
        assert!(methodology(Page::Contact).is_none());
    }

    #[test]
    fn test_steps_are_numbered_in_order() {
        let steps: Vec<u8> = METHODOLOGY.iter().map(|m| m.step).collect();
        assert_eq!(steps, vec![1, 2, 3]);

        for content in METHODOLOGY {
            assert!(content.title.starts_with(&format!("Step {}:", content.step)));
            assert_eq!(content.items.len(), 4);
            assert!(!content.paragraphs.is_empty());
        }
    }

    #[test]
    fn test_each_step_has_distinct_accent() {
        assert_eq!(DISCOVER.accent, Accent::Blue);
        assert_eq!(INTEGRATE.accent, Accent::Green);
        assert_eq!(ACTUALIZE.accent, Accent::Purple);
        assert_eq!(Accent::Green.header_bg(), "bg-green-600");
    }

    #[test]
    fn test_home_lists_eight_outcomes() {
        assert_eq!(home::OUTCOMES.len(), 8);
        assert!(home::OUTCOMES.iter().all(|o| !o.is_empty()));
    }

    #[test]
    fn test_pricing_table() {
        let prices: Vec<&str> = PRICING.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec!["$350", "$1600 x 2", "$3000"]);
        assert_eq!(PRICING.iter().filter(|p| p.highlight).count(), 1);
    }

    #[test]
    fn test_contact_links() {
        assert_eq!(CONTACTS[0].mailto(), "mailto:jatin@kairos-coaching.example");
        assert_eq!(
            footer_contact_line(),
            "Contact: jatin@kairos-coaching.example | shalini@kairos-coaching.example"
        );
    }

    #[test]
    fn test_copyright_uses_given_year() {
        assert_eq!(
            copyright(2026),
            "© 2026 Kairos AI Coaching. All Rights Reserved."
        );
    }
}
