// src/services/catalog.rs

//! Filtering for post and resource listings, and the built-in option lists
//! used when the CMS leaves them empty.

use std::collections::HashSet;

use crate::models::{FilterOption, LabelItem, LibraryCard, PostSummary};

const BLOG_FILTERS: &[(&str, &str)] = &[
    ("All", "all"),
    ("Early years", "early-years"),
    ("School", "school"),
    ("Autistic adults", "autistic-adults"),
    ("Caregivers", "caregivers"),
    ("Community & advocacy", "community-advocacy"),
];

const AUDIENCE_FILTERS: &[(&str, &str)] = &[
    ("All", "all"),
    ("Families", "families"),
    ("Educators", "educators"),
    ("Professionals", "professionals"),
    ("Autistic adults", "autistic-adults"),
];

const IDENTITY_OPTIONS: &[&str] = &[
    "Family member / caregiver",
    "Autistic adult",
    "Educator / school staff",
    "Health professional",
    "Volunteer / supporter",
    "Other",
];

const TOPIC_OPTIONS: &[&str] = &[
    "General question",
    "Programs & events",
    "Resources / guides",
    "School inclusion / training",
    "Volunteering",
    "Partnerships / collaboration",
    "Donations / fundraising",
    "Other",
];

fn filters_or(configured: &[FilterOption], fallback: &[(&str, &str)]) -> Vec<FilterOption> {
    if configured.is_empty() {
        return fallback
            .iter()
            .map(|(label, slug)| FilterOption::new(label, slug))
            .collect();
    }
    configured
        .iter()
        .map(|f| FilterOption::new(f.label(), f.slug()))
        .collect()
}

fn labels_or(configured: &[LabelItem], fallback: &[&str]) -> Vec<LabelItem> {
    if !configured.is_empty() {
        return configured.to_vec();
    }
    fallback
        .iter()
        .map(|label| LabelItem {
            label: Some(label.to_string()),
        })
        .collect()
}

/// Blog topic filters, with missing labels and slugs filled in.
pub fn blog_filters(configured: &[FilterOption]) -> Vec<FilterOption> {
    filters_or(configured, BLOG_FILTERS)
}

/// Resource audience filters, with missing labels and slugs filled in.
pub fn audience_filters(configured: &[FilterOption]) -> Vec<FilterOption> {
    filters_or(configured, AUDIENCE_FILTERS)
}

pub fn identity_options(configured: &[LabelItem]) -> Vec<LabelItem> {
    labels_or(configured, IDENTITY_OPTIONS)
}

pub fn topic_options(configured: &[LabelItem]) -> Vec<LabelItem> {
    labels_or(configured, TOPIC_OPTIONS)
}

/// Library cards shown when the CMS has none.
pub fn library_cards(configured: &[LibraryCard]) -> Vec<LibraryCard> {
    if !configured.is_empty() {
        return configured.to_vec();
    }
    let card = |card_type: &str,
                title: &str,
                audience: &str,
                description: &str,
                meta: &str,
                cta_text: &str,
                audience_slug: &str| LibraryCard {
        card_type: Some(card_type.to_string()),
        title: Some(title.to_string()),
        audience: Some(audience.to_string()),
        description: Some(description.to_string()),
        meta: Some(meta.to_string()),
        cta_text: Some(cta_text.to_string()),
        cta_link: Some("/resources".to_string()),
        audience_slug: Some(audience_slug.to_string()),
    };
    vec![
        card(
            "Guide",
            "First steps after an autism diagnosis",
            "For families & caregivers",
            "A gentle, step-by-step overview of what a diagnosis can mean, common next steps, and ways to care for yourself and your child.",
            "10-minute read · Downloadable PDF",
            "View guide",
            "families",
        ),
        card(
            "Checklist",
            "Creating sensory-friendly classrooms",
            "For school teams",
            "Practical ideas to adjust lighting, sound, seating, and routines so autistic students can feel safer and more included in class.",
            "Printable · Classroom examples",
            "Download checklist",
            "educators",
        ),
        card(
            "Video",
            "Listening to autistic voices",
            "For everyone",
            "Short video stories from autistic people sharing what helps, what hurts, and how communities can better support them.",
            "15-minute video",
            "Watch now",
            "all",
        ),
        card(
            "Template",
            "My sensory profile & support plan",
            "For caregivers & adults",
            "A fillable template describing sensory preferences, communication styles, and helpful accommodations at home, school, or work.",
            "Fillable PDF",
            "Use template",
            "autistic-adults",
        ),
    ]
}

fn is_all(active: &str) -> bool {
    active.trim().is_empty() || active.trim().eq_ignore_ascii_case(FilterOption::ALL)
}

/// Case-insensitive substring match over the present fields.
fn matches_query(fields: &[Option<&str>], query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    fields
        .iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&query))
}

/// Posts in the active category, minus `excluded` ids, matching `query`.
///
/// Order is preserved.
pub fn filter_posts<'a>(
    posts: &'a [PostSummary],
    active: &str,
    query: &str,
    excluded: &HashSet<&str>,
) -> Vec<&'a PostSummary> {
    let active = active.trim();
    posts
        .iter()
        .filter(|post| is_all(active) || post.in_category(active))
        .filter(|post| !excluded.contains(post.id.as_str()))
        .filter(|post| matches_query(&[post.title.as_deref(), post.excerpt.as_deref()], query))
        .collect()
}

/// Library cards for the active audience matching `query`.
pub fn filter_cards<'a>(cards: &'a [LibraryCard], active: &str, query: &str) -> Vec<&'a LibraryCard> {
    let active = active.trim();
    cards
        .iter()
        .filter(|card| {
            is_all(active)
                || card
                    .audience_slug
                    .as_deref()
                    .is_some_and(|slug| slug.eq_ignore_ascii_case(active))
        })
        .filter(|card| {
            matches_query(
                &[
                    card.title.as_deref(),
                    card.description.as_deref(),
                    card.card_type.as_deref(),
                    card.audience.as_deref(),
                ],
                query,
            )
        })
        .collect()
}
