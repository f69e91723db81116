//! Field tables, one per view model.
//!
//! Key matching is case-insensitive, so casing drift between content types
//! (`heroSubheading` vs `herosubheading`) needs no alias. Aliases are only
//! listed where the backend uses a different name or a nested path.

use std::collections::HashSet;

use serde_json::{Map, Value};

use super::{Field, FieldKind, ViewModel, get_ci, list_items};
use crate::models::{
    AboutContent, BlogPageContent, Category, Chip, ContactButton, ContactContent, CoreValue, Faq,
    FilterOption, HomeContent, JourneyItem, LabelItem, Leader, LibraryCard, LifeStageProgram,
    MissionCard, OfferCard, PostDetail, PostSummary, QuickLink, ResourceCard, ResourcesContent,
    ServicesContent, SiteSettings, Stat,
};

use super::FieldKind::{Gallery, Media, Posts, Rows, TextList};

// --- Shared rows ---

const CHIP: &[Field] = &[Field::aliased("chipText", &["text"], FieldKind::Text)];

const FILTER: &[Field] = &[
    Field::aliased("label", &["filterLabel"], FieldKind::Text),
    Field::aliased("slug", &["filterSlug"], FieldKind::Text),
];

const LABEL: &[Field] = &[Field::aliased("label", &["text", "value"], FieldKind::Text)];

const FAQ: &[Field] = &[Field::text("question"), Field::text("answer")];

const CATEGORY: &[Field] = &[Field::text("name"), Field::text("slug")];

// --- Posts ---

const POST_SUMMARY: &[Field] = &[
    Field::text("id"),
    Field::text("title"),
    Field::text("date"),
    Field::text("excerpt"),
    Field::text("uri"),
    Field::new("featuredImage", Media),
    Field::aliased("authorName", &["author.node.name", "author.name"], FieldKind::Text),
    Field::new("categories", Rows(CATEGORY)),
];

const POST_DETAIL: &[Field] = &[
    Field::text("id"),
    Field::text("title"),
    Field::text("date"),
    Field::text("excerpt"),
    Field::text("content"),
    Field::text("uri"),
    Field::new("featuredImage", Media),
    Field::aliased("authorName", &["author.node.name", "author.name"], FieldKind::Text),
    Field::new("categories", Rows(CATEGORY)),
];

// --- Site settings ---

const SITE_SETTINGS: &[Field] = &[
    Field::text("launchDate"),
    Field::text("instagramUrl"),
    Field::text("linkedinUrl"),
    Field::text("whatsappUrl"),
];

// --- Home ---

const MISSION_CARD: &[Field] = &[
    Field::text("cardTitle"),
    Field::text("cardDescription"),
    Field::new("cardImage", Media),
];

const STAT: &[Field] = &[Field::text("statNumber"), Field::text("statLabel")];

const HOME: &[Field] = &[
    Field::text("heroHeading"),
    Field::text("heroSubheading"),
    Field::text("heroPrimaryText"),
    Field::text("heroPrimaryLink"),
    Field::text("heroSecondaryText"),
    Field::text("heroSecondaryLink"),
    Field::new("missionCards", Rows(MISSION_CARD)),
    Field::new("stats", Rows(STAT)),
    Field::text("quoteText"),
    Field::text("quoteButtonText"),
    Field::text("quoteButtonLink"),
    Field::new("heroGallery", Gallery),
];

// --- About ---

const JOURNEY_ITEM: &[Field] = &[
    Field::text("year"),
    Field::text("title"),
    Field::text("description"),
];

const CORE_VALUE: &[Field] = &[
    Field::text("valueTitle"),
    Field::text("valueDescription"),
    Field::new("valueImage", Media),
];

const LEADER: &[Field] = &[
    Field::text("name"),
    Field::text("role"),
    Field::text("bio"),
    Field::new("photo", Media),
];

const ABOUT: &[Field] = &[
    Field::text("heroHeading"),
    Field::text("heroSubheading"),
    Field::text("heroBody"),
    Field::new("heroImage", Media),
    Field::new("journeyItems", Rows(JOURNEY_ITEM)),
    Field::new("coreValues", Rows(CORE_VALUE)),
    Field::new("leadershipTeam", Rows(LEADER)),
    Field::text("ctaText"),
    Field::text("ctaButtonText"),
    Field::text("ctaButtonLink"),
];

// --- Services ---

const OFFER_CARD: &[Field] = &[
    Field::aliased("title", &["cardTitle"], FieldKind::Text),
    Field::aliased("body", &["cardBody"], FieldKind::Text),
    Field::aliased("bullets", &["cardBullets"], TextList(&["bulletText", "text"])),
];

const LIFE_STAGE_PROGRAM: &[Field] = &[
    Field::text("stageLabel"),
    Field::aliased("title", &["programTitle"], FieldKind::Text),
    Field::aliased("body", &["programBody"], FieldKind::Text),
    Field::aliased("tags", &["programTags"], TextList(&["tagText", "text"])),
];

const SERVICES: &[Field] = &[
    Field::text("heroHeading"),
    Field::text("heroBody"),
    Field::text("offerHeading"),
    Field::new("offerCards", Rows(OFFER_CARD)),
    Field::text("lifeStageHeading"),
    Field::new("lifeStagePrograms", Rows(LIFE_STAGE_PROGRAM)),
    Field::text("faqHeading"),
    Field::new("faqs", Rows(FAQ)),
    Field::text("ctaBody"),
    Field::text("ctaButtonText"),
    Field::text("ctaButtonLink"),
];

// --- Resources ---

const LIBRARY_CARD: &[Field] = &[
    Field::aliased("type", &["cardType"], FieldKind::Text),
    Field::text("title"),
    Field::text("audience"),
    Field::text("description"),
    Field::text("meta"),
    Field::text("ctaText"),
    Field::text("ctaLink"),
    Field::text("audienceSlug"),
];

const RESOURCE_CARD: &[Field] = &[
    Field::text("title"),
    Field::text("description"),
    Field::text("meta"),
    Field::new("bullets", TextList(&["bulletText", "text"])),
    Field::text("ctaText"),
    Field::text("ctaLink"),
];

const QUICK_LINK: &[Field] = &[
    Field::text("label"),
    Field::aliased("link", &["url"], FieldKind::Text),
    Field::text("kind"),
];

const RESOURCES: &[Field] = &[
    Field::text("heroEyebrow"),
    Field::text("heroHeading"),
    Field::text("heroBody"),
    Field::new("heroChips", Rows(CHIP)),
    Field::text("libraryHeading"),
    Field::text("libraryBody"),
    Field::new("audienceFilters", Rows(FILTER)),
    Field::new("libraryCards", Rows(LIBRARY_CARD)),
    Field::text("downloadHeading"),
    Field::text("downloadBody"),
    Field::new("downloadCards", Rows(RESOURCE_CARD)),
    Field::text("forYouHeading"),
    Field::text("forYouBody"),
    Field::new("forYouCards", Rows(RESOURCE_CARD)),
    Field::text("helpHeading"),
    Field::text("helpBody"),
    Field::text("helpPrimaryText"),
    Field::text("helpPrimaryLink"),
    Field::text("helpSecondaryText"),
    Field::text("helpSecondaryLink"),
    Field::new("quickLinks", Rows(QUICK_LINK)),
    Field::text("ctaBarText"),
    Field::text("ctaBarButtonText"),
    Field::text("ctaBarButtonLink"),
];

// --- Blog ---

const BLOG_PAGE: &[Field] = &[
    Field::text("heroEyebrow"),
    Field::text("heroHeading"),
    Field::text("heroBody"),
    Field::new("heroChips", Rows(CHIP)),
    Field::text("featuredHeading"),
    Field::text("featuredBody"),
    Field::new("featuredPosts", Posts),
    Field::new("topicFilters", Rows(FILTER)),
    Field::text("ctaText"),
    Field::text("ctaButtonText"),
    Field::text("ctaButtonLink"),
];

// --- Contact ---

const CONTACT_BUTTON: &[Field] = &[
    Field::text("label"),
    Field::aliased("link", &["url"], FieldKind::Text),
];

const CONTACT: &[Field] = &[
    Field::text("heroEyebrow"),
    Field::text("heroHeading"),
    Field::text("heroBody"),
    Field::new("heroChips", Rows(CHIP)),
    Field::text("formHeading"),
    Field::text("formBody"),
    Field::new("identityOptions", Rows(LABEL)),
    Field::new("topicOptions", Rows(LABEL)),
    Field::text("contactEmail"),
    Field::text("contactPhone"),
    Field::text("contactAddress"),
    Field::text("bestWaysHeading"),
    Field::text("bestWaysBody"),
    Field::new("contactButtons", Rows(CONTACT_BUTTON)),
    Field::text("emergencyHeading"),
    Field::text("emergencyBody"),
    Field::text("emergencyLinkText"),
    Field::text("emergencyLinkUrl"),
    Field::text("spaceHeading"),
    Field::text("spaceBody"),
    Field::new("openingHours", Rows(LABEL)),
    Field::new("accessibility", Rows(LABEL)),
    Field::new("mapImage", Media),
    Field::text("mapCaption"),
    Field::new("quickQuestions", Rows(FAQ)),
    Field::text("ctaBarText"),
    Field::text("ctaBarButtonText"),
    Field::text("ctaBarButtonLink"),
];

macro_rules! view_model {
    ($ty:ty, $name:literal, $fields:expr, required: $required:expr) => {
        impl ViewModel for $ty {
            const NAME: &'static str = $name;
            const FIELDS: &'static [Field] = $fields;
            const REQUIRED: &'static [&'static str] = $required;
        }
    };
    ($ty:ty, $name:literal, $fields:expr) => {
        impl ViewModel for $ty {
            const NAME: &'static str = $name;
            const FIELDS: &'static [Field] = $fields;
        }
    };
}

view_model!(PostSummary, "post summary", POST_SUMMARY, required: &["id"]);
view_model!(PostDetail, "post", POST_DETAIL, required: &["id"]);
view_model!(SiteSettings, "site settings", SITE_SETTINGS);
view_model!(HomeContent, "homepage content", HOME);
view_model!(AboutContent, "about page content", ABOUT);
view_model!(ServicesContent, "services page content", SERVICES);
view_model!(ResourcesContent, "resources page content", RESOURCES);
view_model!(BlogPageContent, "blog page content", BLOG_PAGE);
view_model!(ContactContent, "contact page content", CONTACT);

// Rows, normalizable on their own too.
view_model!(MissionCard, "mission card", MISSION_CARD);
view_model!(Stat, "stat", STAT);
view_model!(JourneyItem, "journey item", JOURNEY_ITEM);
view_model!(CoreValue, "core value", CORE_VALUE);
view_model!(Leader, "leader", LEADER);
view_model!(OfferCard, "offer card", OFFER_CARD);
view_model!(LifeStageProgram, "life stage program", LIFE_STAGE_PROGRAM);
view_model!(Faq, "faq", FAQ);
view_model!(Chip, "chip", CHIP);
view_model!(FilterOption, "filter option", FILTER);
view_model!(LabelItem, "label", LABEL);
view_model!(LibraryCard, "library card", LIBRARY_CARD);
view_model!(ResourceCard, "resource card", RESOURCE_CARD);
view_model!(QuickLink, "quick link", QUICK_LINK);
view_model!(ContactButton, "contact button", CONTACT_BUTTON);
view_model!(Category, "category", CATEGORY);

/// Canonical post maps from a listing.
///
/// Accepts a post connection, a bare list, or repeater rows of the form
/// `{ post: { nodes: [...] } }`. Posts without an id are dropped, as are
/// repeated ids after their first occurrence; order is preserved.
pub(crate) fn post_rows(value: &Value) -> Vec<Map<String, Value>> {
    let mut seen = HashSet::new();
    list_items(value)
        .into_iter()
        .flat_map(|item| match get_ci(item, "post") {
            Some(inner) if inner.is_object() && is_connection(inner) => list_items(inner),
            Some(inner) if inner.is_object() => vec![inner],
            Some(inner) if inner.is_array() => list_items(inner),
            Some(_) => Vec::new(),
            None => vec![item],
        })
        .filter_map(PostSummary::normalize)
        .filter(|post| {
            post.get("id")
                .and_then(Value::as_str)
                .is_some_and(|id| !id.is_empty() && seen.insert(id.to_string()))
        })
        .collect()
}

fn is_connection(value: &Value) -> bool {
    get_ci(value, "nodes").is_some() || get_ci(value, "edges").is_some()
}

/// Typed post summaries from a listing, see [`post_rows`].
pub fn post_summaries(value: &Value) -> Vec<PostSummary> {
    post_rows(value)
        .into_iter()
        .filter_map(|map| PostSummary::from_raw(&Value::Object(map)))
        .collect()
}
