//! Static site copy and assets. Inert data consumed by renderers.

use serde::Serialize;

use crate::domain::{PageId, PlanTier};

pub const BRAND: &str = "res";
pub const CONTACT_EMAIL: &str = "hello@res.ai";
pub const CONTACT_PHONE: &str = "+1 (555) 000-0000";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub specialty: &'static str,
    pub description: &'static str,
}

pub const TEAM_MEMBERS: [TeamMember; 5] = [
    TeamMember {
        name: "Sarah",
        role: "Senior Sales Executive",
        image: "/Lady_agent_1-removebg-preview.png",
        specialty: "Outbound & Closing",
        description: "Expert at cold outreach and closing deals via email and voice. She never sleeps and never misses a quota.",
    },
    TeamMember {
        name: "Nova",
        role: "Social Media Strategist",
        image: "/lady_agent_2-removebg-preview.png",
        specialty: "Content & Trends",
        description: "Manages your Instagram, X, and LinkedIn. She spots trends instantly and engages with your community 24/7.",
    },
    TeamMember {
        name: "Maya",
        role: "Customer Success Lead",
        image: "/lady_agent_3-removebg-preview.png",
        specialty: "Support & Retention",
        description: "Provides empathetic, instant support to your customers. Resolves tickets in seconds, not days.",
    },
    TeamMember {
        name: "Elena",
        role: "Operations Manager",
        image: "/lady_agent_4-removebg-preview.png",
        specialty: "Data & Logistics",
        description: "Organizes your Notion, manages schedules, and ensures your backend operations run without a hitch.",
    },
    TeamMember {
        name: "Chloe",
        role: "HR & Recruiting",
        image: "/lady_agent_5-removebg-preview.png",
        specialty: "Talent Acquisition",
        description: "Scans thousands of resumes and schedules interviews with top candidates automatically.",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [Faq; 4] = [
    Faq {
        question: "How do res agents integrate with my tools?",
        answer: "Our agents connect directly with your existing stack (Slack, Gmail, HubSpot, and Notion). Setup takes less than 5 minutes.",
    },
    Faq {
        question: "Is my data secure?",
        answer: "Absolutely. We use enterprise-grade encryption and never train our public models on your proprietary business data.",
    },
    Faq {
        question: "Can I customize the agent's personality?",
        answer: "Yes. You define the tone of voice, strictness, and creativity levels to match your brand identity perfectly.",
    },
    Faq {
        question: "Do I need to know how to code?",
        answer: "Zero coding required. If you can send a voice note, you can manage a res agent.",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PricingTier {
    pub plan: PlanTier,
    pub title: &'static str,
    pub list_price: &'static str,
    pub monthly_price: &'static str,
    pub savings: &'static str,
    pub most_popular: bool,
}

/// Cards in display order; the popular tier sits in the middle.
pub const PRICING_TIERS: [PricingTier; 3] = [
    PricingTier {
        plan: PlanTier::OneMonth,
        title: "1-month plan",
        list_price: "$97",
        monthly_price: "$48.50",
        savings: "Save 50%",
        most_popular: false,
    },
    PricingTier {
        plan: PlanTier::TwelveMonth,
        title: "12-month plan",
        list_price: "$52",
        monthly_price: "$15.60",
        savings: "Save 70%",
        most_popular: true,
    },
    PricingTier {
        plan: PlanTier::ThreeMonth,
        title: "3-month plan",
        list_price: "$59",
        monthly_price: "$23.60",
        savings: "Save 60%",
        most_popular: false,
    },
];

pub const MONEY_BACK_NOTE: &str = "14-day money-back guarantee";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceCard {
    pub title: &'static str,
    pub path: &'static str,
    pub blurb: &'static str,
}

pub const SERVICES: [ServiceCard; 3] = [
    ServiceCard {
        title: "CRM",
        path: "/crm",
        blurb: "Connect your entire sales pipeline with automated follow-ups.",
    },
    ServiceCard {
        title: "Website Management",
        path: "/website-management",
        blurb: "Full stack development and maintenance for your digital presence.",
    },
    ServiceCard {
        title: "AI Agents",
        path: "/agents",
        blurb: "Meet our specialized team of AI employees ready to work for you.",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    /// Rendered as a nested entry under the previous top-level link.
    pub nested: bool,
}

const fn link(label: &'static str, path: &'static str) -> NavLink {
    NavLink {
        label,
        path,
        nested: false,
    }
}

const fn nested(label: &'static str, path: &'static str) -> NavLink {
    NavLink {
        label,
        path,
        nested: true,
    }
}

pub const SERVICES_NAV: NavLink = link("Services", "/services");

pub const SERVICES_DROPDOWN: [NavLink; 3] = [
    link("CRM", "/crm"),
    link("Website Management", "/website-management"),
    link("AI Agents", "/agents"),
];

pub const DESKTOP_NAV: [NavLink; 4] = [
    link("About", "/about"),
    link("Pricing", "/pricing"),
    link("FAQ", "/faq"),
    link("Contact", "/contact"),
];

pub const MOBILE_NAV: [NavLink; 8] = [
    link("Home", "/"),
    nested("CRM", "/crm"),
    nested("Website Mgmt", "/website-management"),
    nested("AI Agents", "/agents"),
    link("Agents Team", "/agents"),
    link("Pricing", "/pricing"),
    link("About", "/about"),
    link("Contact", "/contact"),
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PageCopy {
    pub eyebrow: Option<&'static str>,
    pub heading: &'static str,
    pub body: &'static str,
}

pub fn page_copy(page: PageId) -> PageCopy {
    match page {
        PageId::Home => PageCopy {
            eyebrow: None,
            heading: "AI Employees: Your Helpers That Never Sleep.",
            body: "Build, grow, and scale your business with a team of autonomous agents that integrate seamlessly into your workflow.",
        },
        PageId::Services => PageCopy {
            eyebrow: None,
            heading: "Our Services",
            body: "Comprehensive solutions to automate your workflow.",
        },
        PageId::Agents => PageCopy {
            eyebrow: Some("Your Future Team"),
            heading: "Meet the Specialists",
            body: "",
        },
        PageId::Pricing => PageCopy {
            eyebrow: None,
            heading: "Choose res at a price that fits you",
            body: "The sale you've been waiting for.",
        },
        PageId::About => PageCopy {
            eyebrow: Some("Our Story"),
            heading: "We build the workforce of the future.",
            body: "Traditional hiring is slow, expensive, and limited by geography. Res provides instant access to top-tier AI talent that is trained, compliant, and ready to work from day one.",
        },
        PageId::Faq => PageCopy {
            eyebrow: None,
            heading: "Questions?",
            body: "",
        },
        PageId::Contact => PageCopy {
            eyebrow: None,
            heading: "Let's build your team.",
            body: "Ready to automate? Fill out the form and our onboarding AI will reach out instantly.",
        },
        PageId::Checkout => PageCopy {
            eyebrow: None,
            heading: "Complete your order",
            body: "Secure 256-bit SSL Encrypted Payment",
        },
        PageId::Crm => PageCopy {
            eyebrow: None,
            heading: "CRM Solutions",
            body: "Our CRM systems integrate seamlessly with your existing workflow, ensuring no lead is left behind.",
        },
        PageId::WebsiteManagement => PageCopy {
            eyebrow: None,
            heading: "Website Management",
            body: "From maintenance to full-stack development, we keep your digital presence pristine.",
        },
    }
}

pub const HOME_FEATURE_HEADING: &str = "Automates work. Even while you sleep.";
pub const HOME_FEATURE_BODY: &str = "Let your AI team handle social media posts, customer support tickets, and data entry while you focus on high-level strategy.";
pub const HOME_FEATURE_QUOTE: &str = "\"I've scheduled your posts for next week!\"";
pub const GET_STARTED_TAGLINE: &str = "Start your journey with autonomous AI helpers.";
