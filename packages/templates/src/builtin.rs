//! The built-in template catalog.

use pagecraft_schema::{
    ContactContent, CtaContent, FeatureItem, FeaturesContent, FieldKind, FormField, HeroContent,
    Section, SectionContent,
};

use crate::template::{PageKind, PageTemplate};

/// All built-in templates, in catalog order.
pub fn all() -> Vec<PageTemplate> {
    vec![product_lp(), benefit_page(), whitepaper()]
}

pub fn by_id(id: &str) -> Option<PageTemplate> {
    all().into_iter().find(|template| template.id == id)
}

pub fn by_kind(kind: PageKind) -> Vec<PageTemplate> {
    all().into_iter()
        .filter(|template| template.kind == kind)
        .collect()
}

fn prototype(id: &str, order: i64, content: SectionContent) -> Section {
    Section {
        id: id.to_string(),
        order,
        content,
        style: None,
        images: None,
    }
}

fn feature(icon: &str, title: &str, description: &str) -> FeatureItem {
    FeatureItem {
        icon_name: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

/// Standard product page: hero, three selling points, closing call to action.
pub fn product_lp() -> PageTemplate {
    PageTemplate {
        id: "product-basic".to_string(),
        name: "Product page (basic)".to_string(),
        description: "A standard product page with hero, features, and CTA sections".to_string(),
        kind: PageKind::ProductLp,
        sections: vec![
            prototype(
                "template-product-hero",
                0,
                SectionContent::Hero(HeroContent {
                    title: "Take Your Business to the Next Level".to_string(),
                    subtitle: Some("Maximize results with an innovative solution".to_string()),
                    description: Some(
                        "Our product solves your business challenges and accelerates growth."
                            .to_string(),
                    ),
                    button_text: Some("Contact us".to_string()),
                    button_link: Some("./contact".to_string()),
                    ..Default::default()
                }),
            ),
            prototype(
                "template-product-features",
                1,
                SectionContent::Features(FeaturesContent {
                    title: "Three Reasons to Choose Us".to_string(),
                    features: vec![
                        feature(
                            "Zap",
                            "Blazing Performance",
                            "Industry-leading speed that dramatically improves your workflow.",
                        ),
                        feature(
                            "Shield",
                            "Enterprise Security",
                            "Enterprise-grade security keeps your critical data protected.",
                        ),
                        feature(
                            "Users",
                            "Dedicated Support",
                            "A dedicated support team guides you from onboarding to operation.",
                        ),
                    ],
                    ..Default::default()
                }),
            ),
            prototype(
                "template-product-cta",
                2,
                SectionContent::Cta(CtaContent {
                    title: "Start Today and Accelerate Your Business".to_string(),
                    description: Some("Experience the difference with a free trial.".to_string()),
                    button_text: "Get in touch".to_string(),
                    button_link: "./contact".to_string(),
                    ..Default::default()
                }),
            ),
        ],
    }
}

/// Lead-magnet page: hero, bonus list, closing call to action.
pub fn benefit_page() -> PageTemplate {
    PageTemplate {
        id: "benefit-basic".to_string(),
        name: "Benefit page (basic)".to_string(),
        description: "A giveaway page with hero, benefit list, and CTA sections".to_string(),
        kind: PageKind::BenefitPage,
        sections: vec![
            prototype(
                "template-benefit-hero",
                0,
                SectionContent::Hero(HeroContent {
                    title: "Claim Your Exclusive Bonus!".to_string(),
                    subtitle: Some("Limited time: premium extras, completely free".to_string()),
                    description: Some(
                        "Everyone who signs up receives an exclusive bundle of business resources \
                         at no cost."
                            .to_string(),
                    ),
                    button_text: Some("Claim your bonus now".to_string()),
                    button_link: Some("#contact".to_string()),
                    ..Default::default()
                }),
            ),
            prototype(
                "template-benefit-features",
                1,
                SectionContent::Features(FeaturesContent {
                    title: "What's Inside the Bonus".to_string(),
                    features: vec![
                        feature(
                            "Gift",
                            "Bonus 1: Practical Guidebook",
                            "A guidebook packed with hands-on techniques you can use today.",
                        ),
                        feature(
                            "Video",
                            "Bonus 2: Video Seminar",
                            "Go deeper with an expert-led video seminar.",
                        ),
                        feature(
                            "Headphones",
                            "Bonus 3: One-on-One Consultation",
                            "A free 30-minute consultation to work through your challenges.",
                        ),
                    ],
                    ..Default::default()
                }),
            ),
            prototype(
                "template-benefit-cta",
                2,
                SectionContent::Cta(CtaContent {
                    title: "Claim Your Bonus Today".to_string(),
                    description: Some(
                        "The bonus is available for a limited time only. Sign up soon.".to_string(),
                    ),
                    button_text: "Get the free bonus".to_string(),
                    button_link: "#contact".to_string(),
                    ..Default::default()
                }),
            ),
        ],
    }
}

/// Whitepaper download page: hero, contents overview, download form.
pub fn whitepaper() -> PageTemplate {
    PageTemplate {
        id: "whitepaper-basic".to_string(),
        name: "Whitepaper page (basic)".to_string(),
        description:
            "A whitepaper download page with hero, contents overview, and a download form"
                .to_string(),
        kind: PageKind::Whitepaper,
        sections: vec![
            prototype(
                "template-whitepaper-hero",
                0,
                SectionContent::Hero(HeroContent {
                    title: "Download the Free Whitepaper".to_string(),
                    subtitle: Some("A practical guide to business success".to_string()),
                    description: Some(
                        "A whitepaper full of actionable know-how, written by industry \
                         professionals, free to download."
                            .to_string(),
                    ),
                    button_text: Some("Download the whitepaper".to_string()),
                    button_link: Some("#contact".to_string()),
                    ..Default::default()
                }),
            ),
            prototype(
                "template-whitepaper-features",
                1,
                SectionContent::Features(FeaturesContent {
                    title: "What You'll Get from This Whitepaper".to_string(),
                    features: vec![
                        feature(
                            "BookOpen",
                            "Practical Know-How",
                            "Techniques and strategies you can put to work immediately.",
                        ),
                        feature(
                            "TrendingUp",
                            "Data-Driven Analysis",
                            "Reliable insights backed by the latest data and statistics.",
                        ),
                        feature(
                            "Award",
                            "Expert Insight",
                            "Valuable perspectives from leading industry experts.",
                        ),
                    ],
                    ..Default::default()
                }),
            ),
            prototype(
                "template-whitepaper-contact",
                2,
                SectionContent::Contact(ContactContent {
                    title: "Download the Whitepaper".to_string(),
                    description: Some(
                        "Fill in the form below to download the whitepaper.".to_string(),
                    ),
                    form_fields: vec![
                        FormField::required("name", "Name", FieldKind::Text),
                        FormField::required("email", "Email", FieldKind::Email),
                        FormField::required("company", "Company", FieldKind::Text),
                        FormField::optional("position", "Job title", FieldKind::Text),
                        FormField::optional("message", "Questions or requests", FieldKind::Textarea),
                    ],
                    submit_button_text: "Download".to_string(),
                    ..Default::default()
                }),
            ),
        ],
    }
}
