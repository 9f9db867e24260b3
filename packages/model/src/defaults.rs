//! Starter content for newly added sections.

use crate::{
    ButtonStyle, CtaContent, FeatureItem, FeatureLayout, FeaturesContent, FreeformContent,
    HeroContent, ImageRef, LinkButton, Localized, Padding, PricingContent, PricingPlan, Section,
    SectionConfig, SectionContent, SectionKind, StatItem, StatsContent, Testimonial,
    TestimonialsContent,
};
use serde_json::Value;

impl Section {
    /// A section of `kind` carrying bilingual starter content
    pub fn with_defaults(id: impl Into<String>, kind: SectionKind) -> Self {
        let mut section = Section::new(id, SectionContent::defaults(kind));
        section.config = SectionConfig {
            background_color: Some("#ffffff".to_string()),
            padding: Some(Padding::default()),
            responsive: None,
        };
        section
    }
}

impl SectionContent {
    pub fn defaults(kind: SectionKind) -> Self {
        match kind {
            SectionKind::Hero => SectionContent::Hero(Localized::new(
                hero(
                    "Welcome to Our Platform",
                    "Build amazing landing pages",
                    "Create beautiful, responsive landing pages in minutes.",
                    "Get Started",
                    "Hero image",
                ),
                hero(
                    "مرحباً بكم في منصتنا",
                    "أنشئ صفحات هبوط رائعة",
                    "أنشئ صفحات هبوط جميلة ومتجاوبة في دقائق.",
                    "ابدأ الآن",
                    "صورة البطل",
                ),
            )),
            SectionKind::Features => SectionContent::Features(Localized::new(
                features(
                    "Key Features",
                    [
                        ("Feature 1", "Description of feature 1"),
                        ("Feature 2", "Description of feature 2"),
                        ("Feature 3", "Description of feature 3"),
                    ],
                ),
                features(
                    "الميزات الرئيسية",
                    [
                        ("ميزة 1", "وصف الميزة 1"),
                        ("ميزة 2", "وصف الميزة 2"),
                        ("ميزة 3", "وصف الميزة 3"),
                    ],
                ),
            )),
            SectionKind::Stats => SectionContent::Stats(Localized::new(
                stats("Our Numbers", ["Users", "Projects", "Satisfaction"]),
                stats("أرقامنا", ["مستخدم", "مشروع", "رضا"]),
            )),
            SectionKind::Testimonials => SectionContent::Testimonials(Localized::new(
                testimonials(
                    "What Our Clients Say",
                    [
                        ("John Doe", "CEO", "Great service!"),
                        ("Jane Smith", "Founder", "Highly recommended!"),
                    ],
                ),
                testimonials(
                    "ماذا يقول عملاؤنا",
                    [
                        ("أحمد محمد", "مدير", "خدمة رائعة!"),
                        ("فاطمة علي", "مؤسس", "موصى به بشدة!"),
                    ],
                ),
            )),
            SectionKind::Pricing => SectionContent::Pricing(Localized::new(
                pricing(
                    "Pricing Plans",
                    [("Basic", "$9"), ("Pro", "$29")],
                    ["Feature 1", "Feature 2", "Feature 3"],
                    "/month",
                    "Choose Plan",
                ),
                pricing(
                    "خطط الأسعار",
                    [("أساسي", "9$"), ("احترافي", "29$")],
                    ["ميزة 1", "ميزة 2", "ميزة 3"],
                    "/شهرياً",
                    "اختر الخطة",
                ),
            )),
            SectionKind::Cta => SectionContent::Cta(Localized::new(
                cta(
                    "Ready to Get Started?",
                    "Join thousands of satisfied customers today.",
                    "Start Now",
                ),
                cta("هل أنت مستعد للبدء؟", "انضم إلى آلاف العملاء الراضين اليوم.", "ابدأ الآن"),
            )),
            kind => SectionContent::Freeform {
                kind,
                content: Localized::new(freeform("New Section"), freeform("قسم جديد")),
            },
        }
    }
}

fn hero(heading: &str, subheading: &str, description: &str, button: &str, alt: &str) -> HeroContent {
    HeroContent {
        heading: heading.to_string(),
        subheading: Some(subheading.to_string()),
        description: description.to_string(),
        primary_button: Some(LinkButton {
            text: button.to_string(),
            link: "#".to_string(),
            style: ButtonStyle::Primary,
        }),
        secondary_button: None,
        image: Some(ImageRef {
            url: String::new(),
            alt: alt.to_string(),
        }),
        background_image: None,
    }
}

fn features(heading: &str, items: [(&str, &str); 3]) -> FeaturesContent {
    let icons = ["✨", "🚀", "💎"];
    FeaturesContent {
        heading: heading.to_string(),
        subheading: None,
        items: icons
            .iter()
            .zip(items)
            .map(|(icon, (title, description))| FeatureItem {
                icon: icon.to_string(),
                title: title.to_string(),
                description: description.to_string(),
            })
            .collect(),
        layout: FeatureLayout::Grid3,
    }
}

fn stats(heading: &str, labels: [&str; 3]) -> StatsContent {
    let values = ["1000+", "500+", "99%"];
    StatsContent {
        heading: Some(heading.to_string()),
        stats: values
            .iter()
            .zip(labels)
            .map(|(value, label)| StatItem {
                value: value.to_string(),
                label: label.to_string(),
            })
            .collect(),
    }
}

fn testimonials(heading: &str, entries: [(&str, &str, &str); 2]) -> TestimonialsContent {
    TestimonialsContent {
        heading: heading.to_string(),
        subheading: None,
        testimonials: entries
            .iter()
            .map(|(author, role, quote)| Testimonial {
                author: author.to_string(),
                role: role.to_string(),
                quote: quote.to_string(),
                avatar: None,
            })
            .collect(),
    }
}

/// The first plan lists two features, the second all three
fn pricing(
    heading: &str,
    plans: [(&str, &str); 2],
    features: [&str; 3],
    period: &str,
    button: &str,
) -> PricingContent {
    PricingContent {
        heading: heading.to_string(),
        subheading: None,
        items: plans
            .iter()
            .enumerate()
            .map(|(index, (name, price))| PricingPlan {
                name: name.to_string(),
                price: price.to_string(),
                period: Some(period.to_string()),
                features: features[..index + 2].iter().map(|f| f.to_string()).collect(),
                button_text: button.to_string(),
                button_link: "#".to_string(),
                popular: index == 1,
            })
            .collect(),
    }
}

fn cta(heading: &str, description: &str, button: &str) -> CtaContent {
    CtaContent {
        heading: heading.to_string(),
        description: Some(description.to_string()),
        button_text: button.to_string(),
        button_link: "#".to_string(),
    }
}

fn freeform(heading: &str) -> FreeformContent {
    let mut content = FreeformContent::new();
    content.insert("heading".to_string(), Value::String(heading.to_string()));
    content
}
