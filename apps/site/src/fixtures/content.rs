//! Reference content rendered by the marketing pages.

use crate::models::{
    BlogPost, FaqEntry, Feature, FeatureIcon, NavLink, PricingPlan, Testimonial, UseCase,
    WorkflowStep,
};

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { to: "/features", label: "Features" },
    NavLink { to: "/pricing", label: "Pricing" },
    NavLink { to: "/blog", label: "Insights" },
    NavLink { to: "/dashboard", label: "Dashboard" },
];

pub const HERO_STATS: &[&str] = &[
    "41% less manual work",
    "100+ integrations",
    "SOC2 + SSO",
    "Deploy in days",
];

pub const HERO_ILLUSTRATION: &str =
    "https://images.unsplash.com/photo-1533135091724-62cc5402aa20";
pub const FEATURE_ILLUSTRATION: &str =
    "https://images.unsplash.com/photo-1532456745301-b2c645d8b80d";
pub const ACCENT_ILLUSTRATION: &str =
    "https://images.unsplash.com/photo-1482053450283-3e0b78b09a70";

pub const FEATURES: &[Feature] = &[
    Feature {
        id: "builder",
        title: "Visual workflow builder",
        description: "Design automations with drag-and-drop blocks and instant previews.",
        icon: FeatureIcon::Workflow,
    },
    Feature {
        id: "ai-recommend",
        title: "AI recommendations",
        description: "FundWise suggests optimizations and flags bottlenecks proactively.",
        icon: FeatureIcon::Sparkles,
    },
    Feature {
        id: "integrations",
        title: "100+ integrations",
        description: "Connect CRMs, ERPs, spreadsheets, messaging apps and more.",
        icon: FeatureIcon::Layers,
    },
    Feature {
        id: "monitoring",
        title: "Monitoring & alerts",
        description: "Track SLAs, failure rates and receive smart incident alerts.",
        icon: FeatureIcon::Activity,
    },
    Feature {
        id: "security",
        title: "Enterprise security",
        description: "SSO, RBAC, audit logs and field-level encryption by default.",
        icon: FeatureIcon::ShieldCheck,
    },
    Feature {
        id: "analytics",
        title: "Analytics",
        description: "Measure ROI and time-saved with built-in dashboards.",
        icon: FeatureIcon::LineChart,
    },
];

pub const USE_CASES: &[UseCase] = &[
    UseCase {
        key: "ops",
        title: "Operations",
        bullets: &[
            "Automate approvals and escalations",
            "Sync tasks across tools",
            "Daily health reports",
        ],
    },
    UseCase {
        key: "finance",
        title: "Finance",
        bullets: &[
            "Invoice reconciliation",
            "Expense policy checks",
            "Cashflow alerts",
        ],
    },
    UseCase {
        key: "sales",
        title: "Sales",
        bullets: &[
            "Lead routing & enrichment",
            "Deal stage automations",
            "Churn risk signals",
        ],
    },
    UseCase {
        key: "hr",
        title: "HR",
        bullets: &[
            "Onboarding & offboarding",
            "Interview scheduling",
            "Compliance reminders",
        ],
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Ava Thompson",
        role: "VP Operations, Lumen",
        quote: "FundWise cut our manual work by 41% in the first quarter—teams finally focus on impact.",
    },
    Testimonial {
        name: "Miguel Santos",
        role: "Head of RevOps, Northbeam",
        quote: "Implementation was a breeze. The AI suggestions pay for the product every month.",
    },
    Testimonial {
        name: "Priya Nair",
        role: "CFO, Novacore",
        quote: "We automated reconciliation and saved 200+ hours/month with clear audit trails.",
    },
];

pub const PRICING: &[PricingPlan] = &[
    PricingPlan {
        plan: "Starter",
        price_monthly: 49,
        price_yearly: 39,
        features: &["Unlimited workflows", "Basic analytics", "Email support"],
        popular: false,
        contact: false,
    },
    PricingPlan {
        plan: "Growth",
        price_monthly: 149,
        price_yearly: 119,
        features: &["AI recommendations", "Advanced analytics", "Priority support"],
        popular: true,
        contact: false,
    },
    PricingPlan {
        plan: "Enterprise",
        price_monthly: 0,
        price_yearly: 0,
        features: &["SSO + RBAC", "Custom SLAs", "Dedicated CSM"],
        popular: false,
        contact: true,
    },
];

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "automation-roi",
        title: "Calculating ROI of Workflow Automation",
        excerpt: "A practical framework to measure time saved and impact across teams.",
        tag: "Automation",
        date: "2025-05-12",
    },
    BlogPost {
        slug: "ai-playbooks",
        title: "AI Playbooks for Operations Leaders",
        excerpt: "Five playbooks to streamline approvals, escalations, and reporting.",
        tag: "AI",
        date: "2025-06-02",
    },
    BlogPost {
        slug: "scale-integrations",
        title: "Scaling Integrations without Chaos",
        excerpt: "Best practices for a maintainable integrations layer.",
        tag: "Engineering",
        date: "2025-07-08",
    },
];

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "How long does implementation take?",
        answer: "Most teams get value within the first week. Starter projects often launch in 1-2 days.",
    },
    FaqEntry {
        question: "Do you offer on-prem?",
        answer: "Yes, for Enterprise plans we support VPC and on-prem deployments.",
    },
    FaqEntry {
        question: "Can I cancel anytime?",
        answer: "Yes, monthly plans can be cancelled at any time in your workspace settings.",
    },
];

pub const CONTACT_EMAIL: &str = "hello@fundwise.ai";
pub const SUPPORT_EMAIL: &str = "support@fundwise.ai";

/// Steps the dashboard mock starts from on every mount.
pub fn seed_workflow_steps() -> Vec<WorkflowStep> {
    [
        (1, "Trigger: Form submission", true, 92),
        (2, "Enrich: CRM lookup", true, 88),
        (3, "Validate: Policy check", false, 0),
        (4, "Notify: Slack + Email", true, 95),
    ]
    .into_iter()
    .map(|(id, name, enabled, health)| WorkflowStep {
        id,
        name: name.to_string(),
        enabled,
        health,
    })
    .collect()
}
