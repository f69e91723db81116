//! Page content view models.
//!
//! Every display field is optional and every repeater is a (possibly
//! empty) list. Serialized keys use the camelCase names templates read.

use serde::{Deserialize, Serialize};

use crate::models::{MediaReference, PostSummary};

/// Global site settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub launch_date: Option<String>,
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub whatsapp_url: Option<String>,
}

// --- Home ---

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomeContent {
    pub hero_heading: Option<String>,
    pub hero_subheading: Option<String>,
    pub hero_primary_text: Option<String>,
    pub hero_primary_link: Option<String>,
    pub hero_secondary_text: Option<String>,
    pub hero_secondary_link: Option<String>,
    pub mission_cards: Vec<MissionCard>,
    pub stats: Vec<Stat>,
    pub quote_text: Option<String>,
    pub quote_button_text: Option<String>,
    pub quote_button_link: Option<String>,
    pub hero_gallery: Vec<MediaReference>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MissionCard {
    pub card_title: Option<String>,
    pub card_description: Option<String>,
    pub card_image: Option<MediaReference>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    pub stat_number: Option<String>,
    pub stat_label: Option<String>,
}

// --- About ---

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub hero_heading: Option<String>,
    pub hero_subheading: Option<String>,
    pub hero_body: Option<String>,
    pub hero_image: Option<MediaReference>,
    pub journey_items: Vec<JourneyItem>,
    pub core_values: Vec<CoreValue>,
    pub leadership_team: Vec<Leader>,
    pub cta_text: Option<String>,
    pub cta_button_text: Option<String>,
    pub cta_button_link: Option<String>,
}

/// One entry of the organisation timeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JourneyItem {
    pub year: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoreValue {
    pub value_title: Option<String>,
    pub value_description: Option<String>,
    pub value_image: Option<MediaReference>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Leader {
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub photo: Option<MediaReference>,
}

// --- Services ---

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServicesContent {
    pub hero_heading: Option<String>,
    pub hero_body: Option<String>,
    pub offer_heading: Option<String>,
    pub offer_cards: Vec<OfferCard>,
    pub life_stage_heading: Option<String>,
    pub life_stage_programs: Vec<LifeStageProgram>,
    pub faq_heading: Option<String>,
    pub faqs: Vec<Faq>,
    pub cta_body: Option<String>,
    pub cta_button_text: Option<String>,
    pub cta_button_link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OfferCard {
    pub title: Option<String>,
    pub body: Option<String>,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LifeStageProgram {
    pub stage_label: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub question: Option<String>,
    pub answer: Option<String>,
}

// --- Shared rows ---

/// A short highlighted label under a hero heading.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Chip {
    pub chip_text: Option<String>,
}

/// A label/slug pair partitioning a post or card collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterOption {
    pub label: Option<String>,
    pub slug: Option<String>,
}

impl FilterOption {
    /// Slug of the catch-all option.
    pub const ALL: &'static str = "all";

    pub fn new(label: &str, slug: &str) -> Self {
        Self {
            label: Some(label.to_string()),
            slug: Some(slug.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("All")
    }

    pub fn slug(&self) -> &str {
        self.slug.as_deref().unwrap_or(Self::ALL)
    }

    pub fn is_all(&self) -> bool {
        self.slug().eq_ignore_ascii_case(Self::ALL)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LabelItem {
    pub label: Option<String>,
}

// --- Resources ---

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourcesContent {
    pub hero_eyebrow: Option<String>,
    pub hero_heading: Option<String>,
    pub hero_body: Option<String>,
    pub hero_chips: Vec<Chip>,
    pub library_heading: Option<String>,
    pub library_body: Option<String>,
    pub audience_filters: Vec<FilterOption>,
    pub library_cards: Vec<LibraryCard>,
    pub download_heading: Option<String>,
    pub download_body: Option<String>,
    pub download_cards: Vec<ResourceCard>,
    pub for_you_heading: Option<String>,
    pub for_you_body: Option<String>,
    pub for_you_cards: Vec<ResourceCard>,
    pub help_heading: Option<String>,
    pub help_body: Option<String>,
    pub help_primary_text: Option<String>,
    pub help_primary_link: Option<String>,
    pub help_secondary_text: Option<String>,
    pub help_secondary_link: Option<String>,
    pub quick_links: Vec<QuickLink>,
    pub cta_bar_text: Option<String>,
    pub cta_bar_button_text: Option<String>,
    pub cta_bar_button_link: Option<String>,
}

/// A searchable card in the resource library.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LibraryCard {
    #[serde(rename = "type")]
    pub card_type: Option<String>,
    pub title: Option<String>,
    pub audience: Option<String>,
    pub description: Option<String>,
    pub meta: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub audience_slug: Option<String>,
}

/// Download and "for you" cards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCard {
    pub title: Option<String>,
    pub description: Option<String>,
    pub meta: Option<String>,
    pub bullets: Vec<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuickLink {
    pub label: Option<String>,
    pub link: Option<String>,
    pub kind: Option<String>,
}

// --- Blog ---

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPageContent {
    pub hero_eyebrow: Option<String>,
    pub hero_heading: Option<String>,
    pub hero_body: Option<String>,
    pub hero_chips: Vec<Chip>,
    pub featured_heading: Option<String>,
    pub featured_body: Option<String>,
    /// Featured rows flattened to their posts
    pub featured_posts: Vec<PostSummary>,
    pub topic_filters: Vec<FilterOption>,
    pub cta_text: Option<String>,
    pub cta_button_text: Option<String>,
    pub cta_button_link: Option<String>,
}

// --- Contact ---

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    pub hero_eyebrow: Option<String>,
    pub hero_heading: Option<String>,
    pub hero_body: Option<String>,
    pub hero_chips: Vec<Chip>,
    pub form_heading: Option<String>,
    pub form_body: Option<String>,
    pub identity_options: Vec<LabelItem>,
    pub topic_options: Vec<LabelItem>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_address: Option<String>,
    pub best_ways_heading: Option<String>,
    pub best_ways_body: Option<String>,
    pub contact_buttons: Vec<ContactButton>,
    pub emergency_heading: Option<String>,
    pub emergency_body: Option<String>,
    pub emergency_link_text: Option<String>,
    pub emergency_link_url: Option<String>,
    pub space_heading: Option<String>,
    pub space_body: Option<String>,
    pub opening_hours: Vec<LabelItem>,
    pub accessibility: Vec<LabelItem>,
    pub map_image: Option<MediaReference>,
    pub map_caption: Option<String>,
    pub quick_questions: Vec<Faq>,
    pub cta_bar_text: Option<String>,
    pub cta_bar_button_text: Option<String>,
    pub cta_bar_button_link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactButton {
    pub label: Option<String>,
    pub link: Option<String>,
}
