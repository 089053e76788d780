//! Static registries backing the creation wizard and the health scanner
//!
//! Research topics and prototype templates are curated, code-defined data:
//! they never change at runtime, so dangling references from project records
//! can be checked against them deterministically.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Category of a curated research topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TopicCategory {
    Cart,
    Checkout,
    ProductPage,
    Navigation,
    Search,
    Account,
    Mobile,
    UxPatterns,
}

/// A curated research topic selectable in the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchTopic {
    pub id: &'static str,
    pub title: &'static str,
    pub category: TopicCategory,
    pub url: &'static str,
    pub is_premium: bool,
    pub key_insights: &'static [&'static str],
    pub relevant_for: &'static [&'static str],
}

/// A prototype template selectable in the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrototypeTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub recommended_research: &'static [&'static str],
    pub required_inputs: &'static [&'static str],
}

/// Stage of the design-thinking process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DesignThinkingStage {
    Empathize,
    Define,
    Ideate,
    #[default]
    Prototype,
    Test,
}

/// Descriptive info for a design-thinking stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageInfo {
    pub stage: DesignThinkingStage,
    pub name: &'static str,
    pub description: &'static str,
    pub activities: &'static [&'static str],
    pub deliverables: &'static [&'static str],
}

/// Descriptive info for a fidelity tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FidelityInfo {
    pub tier: crate::project::FidelityTier,
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

/// Curated research topics, wizard ordering
pub static RESEARCH_TOPICS: Lazy<Vec<ResearchTopic>> = Lazy::new(|| {
    vec![
        ResearchTopic {
            id: "cart-abandonment",
            title: "Cart Abandonment Reasons & Solutions",
            category: TopicCategory::Cart,
            url: "https://baymard.com/blog/shopping-cart-abandonment",
            is_premium: false,
            key_insights: &[
                "70% average cart abandonment rate across ecommerce",
                "Top reasons: unexpected costs, forced account creation, complex checkout",
                "Clear progress indicators reduce abandonment by 20%",
            ],
            relevant_for: &["cart", "checkout", "reorder-flows"],
        },
        ResearchTopic {
            id: "cart-complex-products",
            title: "Cart Design for Configurable & Complex Products",
            category: TopicCategory::Cart,
            url: "https://baymard.com/blog/cart-item-grouping",
            is_premium: true,
            key_insights: &[
                "Grouped line items help users understand complex orders",
                "Expandable sections reduce cognitive load",
                "Users need a configuration summary without expanding",
            ],
            relevant_for: &["cart", "team-builder", "configurator"],
        },
        ResearchTopic {
            id: "checkout-flow",
            title: "Checkout Flow & Form Field Usability",
            category: TopicCategory::Checkout,
            url: "https://baymard.com/blog/checkout-flow-average-form-fields",
            is_premium: false,
            key_insights: &[
                "Reduced form fields measurably lower abandonment",
                "Progress indicators and guest checkout are expected",
            ],
            relevant_for: &["checkout", "cart"],
        },
        ResearchTopic {
            id: "reorder-functionality",
            title: "Account: Reorder & Repeat Purchase Patterns",
            category: TopicCategory::Account,
            url: "https://baymard.com/blog/reorder-past-orders",
            is_premium: true,
            key_insights: &[
                "Reorder buttons should be prominent in order history",
                "Multiple entry points increase repeat purchase by 23%",
                "Users expect one-click reorder for identical items",
            ],
            relevant_for: &["order-history", "dashboard", "account"],
        },
        ResearchTopic {
            id: "account-dashboards",
            title: "Account Dashboard Design & Organization",
            category: TopicCategory::Account,
            url: "https://baymard.com/blog/account-dashboard",
            is_premium: true,
            key_insights: &[
                "Flexible filtering helps users find content 40% faster",
                "Default view should match the most common use case",
            ],
            relevant_for: &["dashboard", "account", "saved-designs"],
        },
        ResearchTopic {
            id: "product-configurators",
            title: "Product Configurator UX Patterns",
            category: TopicCategory::UxPatterns,
            url: "https://baymard.com/blog/product-configurators",
            is_premium: true,
            key_insights: &[
                "Live previews keep users oriented during customization",
                "Configured products need a clear path into the cart",
            ],
            relevant_for: &["configurator", "team-builder"],
        },
        ResearchTopic {
            id: "search-autocomplete",
            title: "Search Autocomplete & Query Suggestions",
            category: TopicCategory::Search,
            url: "https://baymard.com/blog/autocomplete-design",
            is_premium: false,
            key_insights: &[
                "Suggestions should favor completions over corrections",
                "Keyboard navigation of suggestions is frequently broken",
            ],
            relevant_for: &["search", "navigation"],
        },
    ]
});

/// Prototype templates, wizard ordering
pub static PROTOTYPE_TEMPLATES: Lazy<Vec<PrototypeTemplate>> = Lazy::new(|| {
    vec![
        PrototypeTemplate {
            id: "dashboard",
            name: "Dashboard / Account Management",
            description: "User dashboards, saved items, account pages, design libraries",
            recommended_research: &["account-dashboards", "reorder-functionality"],
            required_inputs: &[
                "What items does the dashboard display?",
                "How should items be grouped and filtered?",
                "What actions can users take?",
            ],
        },
        PrototypeTemplate {
            id: "cart-checkout",
            name: "Cart & Checkout Flow",
            description: "Shopping cart, checkout process, order review",
            recommended_research: &["cart-abandonment", "cart-complex-products", "checkout-flow"],
            required_inputs: &[
                "What types of products are in the cart?",
                "Can users edit items in the cart?",
                "What information is shown in cart line items?",
            ],
        },
        PrototypeTemplate {
            id: "configurator",
            name: "Product Configurator / Customization",
            description: "Interactive product builders, design tools, customization flows",
            recommended_research: &["product-configurators", "cart-complex-products"],
            required_inputs: &[
                "What can users customize?",
                "Is there a live preview?",
                "Where do customized products go after creation?",
            ],
        },
        PrototypeTemplate {
            id: "search-navigation",
            name: "Search & Navigation",
            description: "Product search, filtering, category browsing",
            recommended_research: &["search-autocomplete"],
            required_inputs: &[
                "What are users searching for?",
                "What filters are available?",
                "How are results displayed?",
            ],
        },
    ]
});

/// Design-thinking stages in process order
pub static DESIGN_THINKING_STAGES: Lazy<Vec<StageInfo>> = Lazy::new(|| {
    vec![
        StageInfo {
            stage: DesignThinkingStage::Empathize,
            name: "Empathize",
            description: "Understand users through research and observation",
            activities: &["User interviews", "Contextual inquiry", "Shadowing"],
            deliverables: &["Empathy maps", "User personas", "Journey maps"],
        },
        StageInfo {
            stage: DesignThinkingStage::Define,
            name: "Define",
            description: "Synthesize research into actionable problem statements",
            activities: &["Affinity mapping", "POV development", "How Might We questions"],
            deliverables: &["Problem statements", "User needs hierarchy"],
        },
        StageInfo {
            stage: DesignThinkingStage::Ideate,
            name: "Ideate",
            description: "Generate creative solutions and explore possibilities",
            activities: &["Brainstorming", "Crazy 8s sketching", "SCAMPER"],
            deliverables: &["Concept sketches", "Prioritized idea backlog"],
        },
        StageInfo {
            stage: DesignThinkingStage::Prototype,
            name: "Prototype",
            description: "Build interactive representations of solutions",
            activities: &["Wireframing", "Interactive prototyping", "Content drafting"],
            deliverables: &["Clickable prototypes", "Flow diagrams"],
        },
        StageInfo {
            stage: DesignThinkingStage::Test,
            name: "Test",
            description: "Validate solutions with real users",
            activities: &["Usability testing", "A/B comparisons", "Feedback synthesis"],
            deliverables: &["Test findings", "Iteration plan"],
        },
    ]
});

/// Fidelity tiers in ascending order
pub static FIDELITY_LEVELS: Lazy<Vec<FidelityInfo>> = Lazy::new(|| {
    use crate::project::FidelityTier;
    vec![
        FidelityInfo {
            tier: FidelityTier::Wireframe,
            name: "Low-Fidelity Wireframes",
            description: "Quick, sketch-like interfaces for rapid iteration",
            features: &["Grayscale only", "Basic shapes and placeholders", "Fast iteration"],
        },
        FidelityInfo {
            tier: FidelityTier::Standard,
            name: "Standard Prototypes",
            description: "Interactive prototypes with the platform design system",
            features: &["Full color using design system", "Interactive components", "Real copy"],
        },
        FidelityInfo {
            tier: FidelityTier::Polished,
            name: "Polished Compositions",
            description: "High-fidelity, production-ready designs",
            features: &["Micro-interactions", "Real images and data", "Production-ready specs"],
        },
    ]
});

/// Look up a research topic by id
#[inline]
#[must_use]
pub fn research_topic(id: &str) -> Option<&'static ResearchTopic> {
    RESEARCH_TOPICS.iter().find(|t| t.id == id)
}

/// Look up a prototype template by id
#[inline]
#[must_use]
pub fn prototype_template(id: &str) -> Option<&'static PrototypeTemplate> {
    PROTOTYPE_TEMPLATES.iter().find(|t| t.id == id)
}
