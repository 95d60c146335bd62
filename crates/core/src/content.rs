//! Record-to-ContentItem transformation.
//!
//! One upstream record becomes one [`ContentItem`]: publish-status filtering,
//! slug issuing, era classification, image resolution, and label resolution
//! all happen here, in one pass, with no I/O.

use serde::{Deserialize, Serialize};

use crate::era;
use crate::images;
use crate::slug::SlugIssuer;

/// Only records carrying exactly this publish status become content items.
pub const ACTIVE_STATUS: &str = "Active";

/// Sort sentinel for records with no explicit order; sorts after everything
/// explicitly ordered.
pub const UNORDERED_SENTINEL: i64 = 999;

const FOUNDER_ROLE: &str = "Founder";

/// Known location aliases. Dated New Haven variants collapse into one key
/// while the Miami variants stay distinct per era.
const LOCATION_ALIASES: &[(&str, &str)] = &[
    ("new-haven-1", "new-haven"),
    ("new-haven-2", "new-haven"),
    ("miami-1", "miami-1"),
    ("miami-2", "miami-2"),
    ("miami-3", "miami-3"),
];

/// One raw attachment reference from the upstream store.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Attachment {
    pub url: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default, rename = "type")]
    pub mime_type: String,
}

/// A field that the upstream store serves either as a single string or as an
/// array of strings, depending on how the column is configured.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// Collapse to one comma-separated display string.
    pub fn joined(&self) -> String {
        match self {
            OneOrMany::One(value) => value.clone(),
            OneOrMany::Many(values) => values.join(", "),
        }
    }
}

/// The upstream record field bag, named exactly as the store serves it.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct RecordFields {
    #[serde(default, rename = "Experience", skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, rename = "Company", skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, rename = "Type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    #[serde(default, rename = "StartYear", skip_serializing_if = "Option::is_none")]
    pub start_year: Option<u32>,
    #[serde(default, rename = "SortOrder", skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
    #[serde(default, rename = "LocationSort", skip_serializing_if = "Option::is_none")]
    pub location_sort: Option<i64>,
    #[serde(default, rename = "Hero", skip_serializing_if = "Option::is_none")]
    pub hero: Option<String>,
    #[serde(default, rename = "Publish Status", skip_serializing_if = "Option::is_none")]
    pub publish_status: Option<String>,
    #[serde(default, rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "Overview", skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, rename = "Link", skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, rename = "Eras", skip_serializing_if = "Vec::is_empty")]
    pub eras: Vec<String>,
    #[serde(default, rename = "Location", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, rename = "Logo", skip_serializing_if = "Vec::is_empty")]
    pub logo: Vec<Attachment>,
    #[serde(default, rename = "Logo CDN", skip_serializing_if = "Option::is_none")]
    pub logo_cdn: Option<String>,
    #[serde(default, rename = "Cover", skip_serializing_if = "Vec::is_empty")]
    pub cover: Vec<Attachment>,
    #[serde(default, rename = "Cover CDN", skip_serializing_if = "Option::is_none")]
    pub cover_cdn: Option<String>,
    #[serde(default, rename = "Skills", skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    #[serde(default, rename = "SkillNames", skip_serializing_if = "Option::is_none")]
    pub skill_names: Option<OneOrMany>,
    #[serde(default, rename = "Skill Names", skip_serializing_if = "Option::is_none")]
    pub skill_names_alt: Option<OneOrMany>,
    #[serde(default, rename = "SkillsConcat", skip_serializing_if = "Option::is_none")]
    pub skills_concat: Option<String>,
    #[serde(default, rename = "Category", skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<String>,
    #[serde(default, rename = "Tools", skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<String>,
    #[serde(default, rename = "Logo CDN (from Tools)", skip_serializing_if = "Vec::is_empty")]
    pub tool_logos: Vec<String>,
    #[serde(default, rename = "Project Image 1", skip_serializing_if = "Vec::is_empty")]
    pub project_image_1: Vec<Attachment>,
    #[serde(default, rename = "PIMG1 CDN", skip_serializing_if = "Option::is_none")]
    pub pimg1_cdn: Option<String>,
    #[serde(default, rename = "Image 1 Caption", skip_serializing_if = "Option::is_none")]
    pub image_1_caption: Option<String>,
    #[serde(default, rename = "Project Image 2", skip_serializing_if = "Vec::is_empty")]
    pub project_image_2: Vec<Attachment>,
    #[serde(default, rename = "PIMG2 CDN", skip_serializing_if = "Option::is_none")]
    pub pimg2_cdn: Option<String>,
    #[serde(default, rename = "Image 2 Caption", skip_serializing_if = "Option::is_none")]
    pub image_2_caption: Option<String>,
    #[serde(default, rename = "Project Image 3", skip_serializing_if = "Vec::is_empty")]
    pub project_image_3: Vec<Attachment>,
    #[serde(default, rename = "PIMG3 CDN", skip_serializing_if = "Option::is_none")]
    pub pimg3_cdn: Option<String>,
    #[serde(default, rename = "Image 3 Caption", skip_serializing_if = "Option::is_none")]
    pub image_3_caption: Option<String>,
    #[serde(default, rename = "Project Image 4", skip_serializing_if = "Vec::is_empty")]
    pub project_image_4: Vec<Attachment>,
    #[serde(default, rename = "PIMG4 CDN", skip_serializing_if = "Option::is_none")]
    pub pimg4_cdn: Option<String>,
    #[serde(default, rename = "Image 4 Caption", skip_serializing_if = "Option::is_none")]
    pub image_4_caption: Option<String>,
    #[serde(default, rename = "Hide all", skip_serializing_if = "Option::is_none")]
    pub hide_all: Option<bool>,
}

/// One row from the upstream content table.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Record {
    pub id: String,
    #[serde(default)]
    pub fields: RecordFields,
}

/// One tool with its positionally-matched logo.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ToolItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_id: Option<String>,
}

/// One project image slot with its caption.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ProjectImage {
    pub url: String,
    pub caption: String,
}

/// The fully-resolved, render-ready representation of one record.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    pub record_id: String,
    pub title: String,
    pub company: String,
    pub description: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(rename = "type")]
    pub item_type: String,
    pub era: String,
    pub start_year: String,
    pub sort_order: i64,
    pub location_sort: i64,
    pub is_hero: bool,
    pub is_founder: bool,
    pub content: String,
    pub link: String,
    pub location: String,
    pub skills: Vec<String>,
    pub skill_names: String,
    pub skill_categories: Vec<String>,
    pub tools: Vec<ToolItem>,
    pub project_images: Vec<ProjectImage>,
    pub hide_all: bool,
}

/// Content items grouped under one type.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub items: Vec<ContentItem>,
}

/// The full bundle the rendering consumer works from.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ContentBundle {
    pub items: Vec<ContentItem>,
    pub categories: Vec<Category>,
    pub hero: Option<ContentItem>,
}

/// Normalize a raw location tag to its canonical id.
pub fn normalize_location(raw: Option<&str>) -> String {
    let id = match raw {
        Some(raw) if !raw.trim().is_empty() => raw
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-"),
        _ => return "other".to_string(),
    };

    LOCATION_ALIASES
        .iter()
        .find(|(alias, _)| *alias == id)
        .map(|(_, canonical)| (*canonical).to_string())
        .unwrap_or(id)
}

/// Pick the resolved skill-names string for a record.
///
/// Priority: the concatenated formula field, then either skill-names lookup
/// field (string or array), then empty.
fn resolve_skill_names(fields: &RecordFields) -> String {
    if let Some(concat) = &fields.skills_concat {
        if !concat.trim().is_empty() {
            return concat.clone();
        }
    }

    for source in [&fields.skill_names, &fields.skill_names_alt] {
        if let Some(value) = source {
            let joined = value.joined();
            if !joined.trim().is_empty() {
                return joined;
            }
        }
    }

    String::new()
}

fn transform_record(record: &Record, issuer: &mut SlugIssuer, now_millis: i64) -> ContentItem {
    let fields = &record.fields;

    let id = issuer.issue(
        fields.experience.as_deref(),
        fields.company.as_deref(),
        &record.id,
    );

    let company = fields.company.clone().unwrap_or_default();
    let is_founder = fields.experience.as_deref() == Some(FOUNDER_ROLE) && !company.is_empty();

    let era = era::default_table()
        .classify(&fields.eras, fields.start_year)
        .to_string();

    ContentItem {
        id,
        record_id: record.id.clone(),
        title: fields
            .experience
            .clone()
            .unwrap_or_else(|| "Untitled Experience".to_string()),
        company,
        description: fields.description.clone().unwrap_or_default(),
        image: images::resolve_cover(fields, now_millis),
        logo: images::resolve_logo(fields, now_millis),
        item_type: fields
            .record_type
            .clone()
            .unwrap_or_else(|| "Other".to_string()),
        era,
        start_year: fields
            .start_year
            .map(|year| year.to_string())
            .unwrap_or_default(),
        sort_order: fields.sort_order.unwrap_or(UNORDERED_SENTINEL),
        location_sort: fields.location_sort.unwrap_or(UNORDERED_SENTINEL),
        is_hero: fields.hero.as_deref() == Some("Y"),
        is_founder,
        content: fields.overview.clone().unwrap_or_default(),
        link: fields.link.clone().unwrap_or_default(),
        location: normalize_location(fields.location.as_deref()),
        skills: fields.skills.clone(),
        skill_names: resolve_skill_names(fields),
        skill_categories: fields.category.clone(),
        tools: images::resolve_tools(fields),
        project_images: images::resolve_project_images(fields, now_millis),
        hide_all: fields.hide_all.unwrap_or(false),
    }
}

/// Transform one batch of upstream records into content items.
///
/// Records without an "Active" publish status are excluded entirely. Output
/// ids are pairwise unique within the batch. The result is sorted ascending
/// by sort order; the sort is stable, so ties keep their input order.
pub fn transform_records(records: &[Record], now_millis: i64) -> Vec<ContentItem> {
    let mut issuer = SlugIssuer::new();

    let mut items: Vec<ContentItem> = records
        .iter()
        .filter(|record| record.fields.publish_status.as_deref() == Some(ACTIVE_STATUS))
        .map(|record| transform_record(record, &mut issuer, now_millis))
        .collect();

    items.sort_by_key(|item| item.sort_order);
    items
}

/// Partition items by type, preserving the first-seen order of each type.
pub fn group_by_type(items: &[ContentItem]) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();

    for item in items {
        match categories.iter_mut().find(|c| c.id == item.item_type) {
            Some(category) => category.items.push(item.clone()),
            None => categories.push(Category {
                id: item.item_type.clone(),
                title: item.item_type.clone(),
                items: vec![item.clone()],
            }),
        }
    }

    categories
}

/// The first hero-flagged item, if any.
pub fn hero_content(items: &[ContentItem]) -> Option<&ContentItem> {
    items.iter().find(|item| item.is_hero)
}

/// Assemble the consumer-facing bundle from transformed items.
pub fn bundle(items: Vec<ContentItem>) -> ContentBundle {
    let categories = group_by_type(&items);
    let hero = hero_content(&items).cloned();
    ContentBundle {
        items,
        categories,
        hero,
    }
}
