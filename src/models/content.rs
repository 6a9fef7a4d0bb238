use serde::Serialize;

use crate::services::media::ResponsiveImage;

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct About {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub paragraphs: Vec<&'static str>,
    pub cta_href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceCard {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub category: &'static str,
    pub status: &'static str,
    pub details: &'static str,
    pub image: ResponsiveImage,
    /// Pre-filled WhatsApp link for the card's call to action.
    pub enquiry_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HouseRule {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqEntry {
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub text: &'static str,
    pub rating: u8,
    pub avatar_url: String,
    pub date: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub whatsapp_url: String,
    pub email: &'static str,
    pub instagram_handle: &'static str,
    pub instagram_url: &'static str,
    pub copyright: String,
}

/// Every section of the landing page, in render order.
#[derive(Debug, Clone, Serialize)]
pub struct SiteContent {
    pub navigation: Vec<NavItem>,
    pub about: About,
    pub gallery: Vec<ResponsiveImage>,
    pub services: Vec<ServiceCard>,
    pub features: Vec<Feature>,
    pub structure: Vec<Feature>,
    pub rules: Vec<HouseRule>,
    pub faq: Vec<FaqEntry>,
    pub testimonials: Vec<Testimonial>,
    pub team: Vec<TeamMember>,
    pub contact: Contact,
}
