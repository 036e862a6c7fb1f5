//! Copy and link tables rendered by the landing page.
//!
//! Everything here is compiled into the bundle. Sections read these tables and
//! never mutate them; the only checks are the anchor checks in [`validate`].

use thiserror::Error;

use crate::components::icons::Icon;
use crate::config;

/// Identifiers of the sections that can be scrolled to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    Features,
    HowItWorks,
    Pricing,
}

impl SectionId {
    pub const ALL: [SectionId; 3] = [SectionId::Features, SectionId::HowItWorks, SectionId::Pricing];

    /// Value of the `id` attribute on the section element.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Features => "features",
            SectionId::HowItWorks => "how-it-works",
            SectionId::Pricing => "pricing",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            SectionId::Features => "#features",
            SectionId::HowItWorks => "#how-it-works",
            SectionId::Pricing => "#pricing",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// `#anchor`, `#` for the page top, or an absolute URL.
    pub target: &'static str,
}

impl NavLink {
    /// The section id this link scrolls to, if it is an in-page anchor.
    pub fn anchor(&self) -> Option<&'static str> {
        match self.target.strip_prefix('#') {
            Some(anchor) if !anchor.is_empty() => Some(anchor),
            _ => None,
        }
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Features", target: "#features" },
    NavLink { label: "How it Works", target: "#how-it-works" },
    NavLink { label: "Pricing", target: "#pricing" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Product",
        links: &[
            NavLink { label: "Features", target: "#features" },
            NavLink { label: "Pricing", target: "#pricing" },
            NavLink { label: "Documentation", target: "#" },
            NavLink { label: "API Reference", target: "#" },
        ],
    },
    FooterColumn {
        title: "Company",
        links: &[
            NavLink { label: "About", target: config::COMPANY_URL },
            NavLink { label: "Blog", target: "#" },
            NavLink { label: "Careers", target: "#" },
            NavLink { label: "Contact", target: config::COMPANY_URL },
        ],
    },
    FooterColumn {
        title: "Legal",
        links: &[
            NavLink { label: "Privacy Policy", target: "#" },
            NavLink { label: "Terms of Service", target: "#" },
            NavLink { label: "Security", target: "#" },
            NavLink { label: "Compliance", target: "#" },
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Red,
    Orange,
    Yellow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProblemCard {
    pub category: &'static str,
    pub headline: &'static str,
    pub body: &'static str,
    pub tone: Tone,
}

pub const PROBLEM_CARDS: &[ProblemCard] = &[
    ProblemCard {
        category: "Financial Impact",
        headline: "€5.88B in Fines",
        body: "GDPR fines continue to escalate, with enforcement becoming more aggressive and personal liability extending to executives.",
        tone: Tone::Red,
    },
    ProblemCard {
        category: "Business Cost",
        headline: "8% Profit Drop",
        body: "SMEs face disproportionate compliance costs, with some experiencing over 8% reduction in profits due to regulatory overhead.",
        tone: Tone::Orange,
    },
    ProblemCard {
        category: "Technical Burden",
        headline: "Complex Tools",
        body: "Current solutions offer compliance as a tool you must configure correctly, leaving all responsibility and risk with you.",
        tone: Tone::Yellow,
    },
];

/// An icon, a short title and a paragraph. Used by the feature list and the
/// how-it-works steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub icon: Icon,
    pub title: &'static str,
    pub body: &'static str,
}

pub const FEATURE_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: Icon::Shield,
        title: "Breach-Proof Architecture",
        body: "Client-side encryption with zero-knowledge design. Even if our infrastructure is compromised, your data remains useless ciphertext.",
    },
    Highlight {
        icon: Icon::CircleCheck,
        title: "Automated Compliance",
        body: "GDPR-conformant audit logs, automated data retention, and built-in portability features work out of the box.",
    },
    Highlight {
        icon: Icon::Database,
        title: "Developer-First Experience",
        body: "Seamless integration with your existing stack. Simple SDKs, predictable pricing, and familiar database interfaces.",
    },
];

pub const HOW_IT_WORKS_STEPS: &[Highlight] = &[
    Highlight {
        icon: Icon::Lock,
        title: "Client-Side Encryption",
        body: "Your data is encrypted on your servers before it ever reaches Gardbase. Even if our infrastructure is compromised, your data remains useless ciphertext to attackers.",
    },
    Highlight {
        icon: Icon::Database,
        title: "Automated Compliance",
        body: "All GDPR requirements are handled automatically—audit logs, data retention, portability, and deletion rights—without manual configuration or oversight.",
    },
    Highlight {
        icon: Icon::Shield,
        title: "Seamless Integration",
        body: "Deploy through developer-friendly SDKs with simple, predictable pricing that includes all compliance features in your existing stack.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Price {
    /// Starting monthly price, already formatted (`€79+`).
    Monthly(&'static str),
    Custom,
}

impl Price {
    pub fn label(&self) -> &'static str {
        match self {
            Price::Monthly(amount) => *amount,
            Price::Custom => "Custom",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub description: &'static str,
    pub price: Price,
    pub features: &'static [&'static str],
}

impl PricingPlan {
    /// Plans without a list price are sold through the sales team.
    pub fn contact_sales(&self) -> bool {
        self.price == Price::Custom
    }
}

/// Position of the plan badged "Most Popular" in [`PRICING_PLANS`].
pub const MOST_POPULAR_PLAN: usize = 1;

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Startup",
        description: "Perfect for early-stage startups and small projects",
        price: Price::Monthly("€79+"),
        features: &[
            "Up to 20GB storage",
            "25M API Calls/month",
            "Full GDPR compliance",
            "Email support",
        ],
    },
    PricingPlan {
        name: "Growth",
        description: "For growing businesses and teams",
        price: Price::Monthly("€349+"),
        features: &[
            "Up to 100GB storage",
            "150M API Calls/month",
            "Full GDPR compliance",
            "Priority support",
        ],
    },
    PricingPlan {
        name: "Scale",
        description: "For large organizations with custom needs",
        price: Price::Custom,
        features: &[
            "Custom storage",
            "Custom API Calls limit",
            "Dedicated support",
            "SLA guarantees",
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Comment,
    Keyword,
    Identifier,
    Str,
    Literal,
    Punct,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodeLine {
    /// Leave a blank gap above the line.
    pub gap: bool,
    pub indent: bool,
    pub tokens: &'static [Token],
}

const fn tok(kind: TokenKind, text: &'static str) -> Token {
    Token { kind, text }
}

use TokenKind::{Comment, Identifier, Keyword, Literal, Punct, Str};

pub const CODE_SAMPLE_HEADING: &str = "// Simple integration";

/// Decorative snippet in the features section. Not a real client.
pub const CODE_SAMPLE: &[CodeLine] = &[
    CodeLine {
        gap: false,
        indent: false,
        tokens: &[
            tok(Keyword, "import"),
            tok(Punct, " { GardbaseClient } "),
            tok(Keyword, "from"),
            tok(Punct, " "),
            tok(Str, "'@gardbase/client'"),
        ],
    },
    CodeLine {
        gap: true,
        indent: false,
        tokens: &[
            tok(Keyword, "const"),
            tok(Punct, " "),
            tok(Identifier, "gardb"),
            tok(Punct, " = "),
            tok(Keyword, "new"),
            tok(Punct, " "),
            tok(Identifier, "GardbaseClient"),
            tok(Punct, "({"),
        ],
    },
    CodeLine {
        gap: false,
        indent: true,
        tokens: &[
            tok(Identifier, "apiKey"),
            tok(Punct, ": "),
            tok(Str, "'your-api-key'"),
            tok(Punct, ","),
        ],
    },
    CodeLine {
        gap: false,
        indent: true,
        tokens: &[
            tok(Identifier, "autoCompliance"),
            tok(Punct, ": "),
            tok(Literal, "true"),
            tok(Punct, " "),
            tok(Comment, "// Always on"),
        ],
    },
    CodeLine {
        gap: false,
        indent: false,
        tokens: &[tok(Punct, "});")],
    },
    CodeLine {
        gap: true,
        indent: false,
        tokens: &[tok(Comment, "// Data is encrypted client-side")],
    },
    CodeLine {
        gap: false,
        indent: false,
        tokens: &[
            tok(Keyword, "await"),
            tok(Punct, " "),
            tok(Identifier, "gardb"),
            tok(Punct, "."),
            tok(Identifier, "users"),
            tok(Punct, "."),
            tok(Identifier, "create"),
            tok(Punct, "({ "),
            tok(Identifier, "email"),
            tok(Punct, ", "),
            tok(Identifier, "name"),
            tok(Punct, " });"),
        ],
    },
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("link \"{label}\" points to #{anchor} but no section has that id")]
    MissingAnchor { label: &'static str, anchor: &'static str },
    #[error("section id \"{0}\" is used by more than one section")]
    DuplicateSection(&'static str),
}

/// Checks that section ids are unique and that every in-page anchor in
/// `links` names one of them.
pub fn check_anchors<'a, I>(sections: &[&'static str], links: I) -> Result<(), ContentError>
where
    I: IntoIterator<Item = &'a NavLink>,
{
    for (i, id) in sections.iter().enumerate() {
        if sections[..i].contains(id) {
            return Err(ContentError::DuplicateSection(*id));
        }
    }

    for link in links {
        if let Some(anchor) = link.anchor() {
            if !sections.contains(&anchor) {
                return Err(ContentError::MissingAnchor { label: link.label, anchor });
            }
        }
    }

    Ok(())
}

/// Runs [`check_anchors`] over the header and footer links.
pub fn validate() -> Result<(), ContentError> {
    let sections = SectionId::ALL.map(SectionId::as_str);
    let footer_links = FOOTER_COLUMNS.iter().flat_map(|column| column.links.iter());
    check_anchors(&sections, NAV_LINKS.iter().chain(footer_links))
}
