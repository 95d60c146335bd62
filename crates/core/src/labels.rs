//! Display-name resolution for opaque upstream identifiers.
//!
//! The upstream store references skills and tools by record id (`rec` followed
//! by alphanumerics). Depending on how a field was configured, the same slot
//! may carry a bare id, an id with a trailing `- Name` suffix, or an already
//! human-readable name. Resolution is total: every input maps to some display
//! string, worst case the input itself.

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::content::ContentItem;

/// Tool record ids observed in production, paired with their display names.
const TOOL_NAMES: &[(&str, &str)] = &[
    ("recBMAXELcCr9mAQA", "Quizlet"),
    ("recWxxQuBh7v158rI", "Khan Academy"),
    ("recnTnrVJwYkVpQjl", "YouTube"),
    ("recn6X0OycoKAArTg", "Microsoft Office"),
    ("recGg251S6HVAziXt", "Qualtrics"),
    ("recr9nVnigk1QK4WP", "Stata"),
    ("reciUl6oNqqV83iDI", "Snowflake"),
    ("recY7Hdkceeq1BHlc", "Databricks"),
    ("recRZymNe0MCNQ8DE", "Jira"),
    ("recMf0OYdqlvyh15t", "Tableau"),
    ("recP9Kycl9U6T4FtH", "Looker"),
    ("rec0khXp0BqLX9LAf", "Airflow"),
    ("recldxZx5pXxU4i59", "dbt"),
    ("recBQisrWOrwXg8qG", "Supabase"),
    ("recuJFy6sbSwHhxwk", "PostgreSQL"),
    ("rectOt84NhBzieytu", "AWS"),
    ("rec8ywQxyIkcRgCFf", "Heroku"),
    ("reczFw3BnuuAr9CuR", "Mixpanel"),
    ("reciomy6daptSpQjj", "Zapier"),
    ("recKaIVp324egkhFj", "Adobe Illustrator"),
    ("recccxeyBLcyfQSl8", "Adobe Analytics"),
    ("rec9NASk4SQMjXE5c", "Google Workspace"),
    ("recQ4EKY1VRj6lbma", "HubSpot"),
    ("recxD46zgaVkjEkWx", "Meta Business Suite"),
    ("recYneN0MUcxu1k9g", "Airtable"),
    ("recgBs54Vzy3opPeZ", "Notion"),
    ("recQSVjhSCnjKJJ3L", "Figma"),
    ("rec3BQejI5kJGEkaE", "Shopify"),
    ("rec67XHzVxYpHeJq9", "ChatGPT"),
    ("recUSnPf66fZxhklr", "Anthropic AI Claude"),
    ("rec0LWQThxfUPN4eL", "Gemini"),
    ("recOyMlUh6oru9dEd", "Cursor"),
    ("recMQ5cZsdyNNB1OM", "Replit"),
    ("recoKJC33kqiyagfg", "v0"),
    ("recC1iNVR63bwI5nh", "Lovable"),
    ("rec0Bem72BodFq5An", "Hugging Face"),
    ("reczuNa5xYWviqV61", "LangChain AI"),
    ("recOXVEHTFj2ICTgk", "MongoDB"),
    ("recMcTklIObaLSqtS", "Cloudinary"),
    ("recI5NPVuSxsYM3sn", "Webflow"),
    ("recbc6lcn3nx4BENu", "Shippo"),
    ("recXTBHEi7rssRVfn", "Flowcode"),
    ("recYCWsskMVjMcs8y", "Canva"),
    ("recNaQjHom4pObhhh", "Jotform"),
    ("recmYRcfKYQlbHpcM", "Google Analytics"),
    ("recLB3mJ08Wbz5yK4", "Docker"),
    ("rec4kpBaei5MFckjI", "Verint"),
    ("recMkNfN9wcGC7aB5", "Typeform"),
    ("recP9FSxqRAtKE0SH", "Eventbrite"),
    ("rec8JtOpticiqwaf3", "Alteryx"),
    ("recarYJus8VuUNYIL", "GitHub"),
    ("recn1du2fwrJEDdbE", "Jupyter Notebook"),
    ("rec6JyVwYsovzXghJ", "VS Code"),
];

/// Skill record ids with their display names.
const SKILL_NAMES: &[(&str, &str)] = &[
    ("rec1", "Data Analysis"),
    ("rec2", "Data Visualization"),
    ("rec3", "Business Intelligence"),
    ("rec4", "Machine Learning"),
    ("rec5", "Statistical Analysis"),
    ("rec6", "SQL"),
    ("rec7", "Python"),
    ("rec8", "R"),
    ("rec9", "Tableau"),
    ("rec10", "Power BI"),
    ("rec11", "Excel"),
    ("rec12", "Data Modeling"),
    ("rec20", "Strategic Planning"),
    ("rec21", "Project Management"),
    ("rec22", "Business Development"),
    ("rec23", "Market Research"),
    ("rec24", "Financial Analysis"),
    ("rec25", "Leadership"),
    ("rec26", "Team Management"),
    ("rec27", "Consulting"),
    ("rec28", "Process Improvement"),
    ("rec30", "Content Strategy"),
    ("rec31", "Audience Analytics"),
    ("rec32", "Media Planning"),
    ("rec33", "Digital Marketing"),
    ("rec34", "SEO"),
    ("rec35", "Social Media"),
    ("rec36", "Content Creation"),
    ("rec37", "Video Production"),
    ("rec38", "Streaming Analytics"),
    ("rec40", "Teaching"),
    ("rec41", "Research"),
    ("rec42", "Curriculum Development"),
    ("rec43", "Academic Writing"),
    ("rec44", "Mentoring"),
    ("rec45", "Public Speaking"),
    ("rec50", "Sports Analytics"),
    ("rec51", "Performance Analysis"),
    ("rec52", "Team Management"),
    ("rec53", "Athlete Development"),
    ("rec54", "Sports Science"),
    ("rec60", "Startup Development"),
    ("rec61", "Fundraising"),
    ("rec62", "Venture Capital"),
    ("rec63", "Business Strategy"),
    ("rec64", "Product Development"),
    ("rec65", "Innovation"),
    ("rec70", "Communication"),
    ("rec71", "Problem Solving"),
    ("rec72", "Critical Thinking"),
    ("rec73", "Collaboration"),
    ("rec74", "Presentation"),
    ("rec75", "Negotiation"),
    ("rec80", "JavaScript"),
    ("rec81", "React"),
    ("rec82", "Node.js"),
    ("rec83", "AWS"),
    ("rec84", "Cloud Computing"),
    ("rec85", "Database Management"),
    ("rec86", "API Development"),
    ("rec87", "Web Development"),
];

/// Category abbreviations normalized to their full display names.
const CATEGORY_FULL_NAMES: &[(&str, &str)] = &[
    ("A", "Analytics"),
    ("B", "Business Ops"),
    ("M", "Media"),
    ("E", "Education"),
    ("S", "Sports & Coaching"),
    ("T", "Technology"),
    ("O", "Other"),
    ("P", "Product & Design"),
    ("I", "Instruction & Curriculum"),
    ("Q", "Quant & Finance"),
    ("D", "Data Eng / Analytics"),
    ("C", "Coding & Libraries"),
    ("AI", "AI & ML"),
    ("ML", "AI & ML"),
    ("Data", "Data Eng / Analytics"),
    ("Design", "Product & Design"),
    ("Product", "Product & Design"),
    ("Business", "Business Ops"),
    ("Quant", "Quant & Finance"),
    ("Finance", "Quant & Finance"),
    ("Instruction", "Instruction & Curriculum"),
    ("Curriculum", "Instruction & Curriculum"),
    ("Sports", "Sports & Coaching"),
    ("Coaching", "Sports & Coaching"),
    ("Coding", "Coding & Libraries"),
    ("Libraries", "Coding & Libraries"),
];

/// Category names that are already in display form and must pass through.
const KNOWN_FULL_CATEGORIES: &[&str] = &[
    "Product & Design",
    "Instruction & Curriculum",
    "Business Ops",
    "Quant & Finance",
    "Data Eng / Analytics",
    "AI & ML",
    "Sports & Coaching",
    "Coding & Libraries",
    "Data",
];

/// Built-in category membership used when the skills table cannot be fetched.
const FALLBACK_SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Analytics",
        &[
            "Data Analysis",
            "Data Visualization",
            "Business Intelligence",
            "Machine Learning",
            "Statistical Analysis",
            "SQL",
            "Python",
            "R",
            "Tableau",
            "Power BI",
            "Excel",
            "Data Modeling",
        ],
    ),
    (
        "Business",
        &[
            "Strategic Planning",
            "Project Management",
            "Business Development",
            "Market Research",
            "Financial Analysis",
            "Leadership",
            "Team Management",
            "Consulting",
            "Process Improvement",
        ],
    ),
    (
        "Media",
        &[
            "Content Strategy",
            "Audience Analytics",
            "Media Planning",
            "Digital Marketing",
            "SEO",
            "Social Media",
            "Content Creation",
            "Video Production",
            "Streaming Analytics",
        ],
    ),
    (
        "Education",
        &[
            "Teaching",
            "Research",
            "Curriculum Development",
            "Academic Writing",
            "Mentoring",
            "Public Speaking",
        ],
    ),
    (
        "Sports",
        &[
            "Sports Analytics",
            "Performance Analysis",
            "Team Management",
            "Athlete Development",
            "Sports Science",
        ],
    ),
    (
        "Entrepreneurship",
        &[
            "Startup Development",
            "Fundraising",
            "Venture Capital",
            "Business Strategy",
            "Product Development",
            "Innovation",
        ],
    ),
    (
        "Technology",
        &[
            "JavaScript",
            "React",
            "Node.js",
            "AWS",
            "Cloud Computing",
            "Database Management",
            "API Development",
            "Web Development",
        ],
    ),
];

fn tool_map() -> &'static HashMap<&'static str, &'static str> {
    static MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| TOOL_NAMES.iter().copied().collect())
}

fn skill_map() -> &'static HashMap<&'static str, &'static str> {
    static MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| SKILL_NAMES.iter().copied().collect())
}

fn category_map() -> &'static HashMap<&'static str, &'static str> {
    static MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| CATEGORY_FULL_NAMES.iter().copied().collect())
}

/// Matches a bare upstream record id.
fn id_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^rec[A-Za-z0-9]+$").expect("id shape pattern is valid"))
}

/// Matches `recXXX - Name` / `recXXX: Name` variants and captures the name.
fn id_with_name() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^rec[A-Za-z0-9]+\s*[-:]\s*(.+)$").expect("id-with-name pattern is valid")
    })
}

/// True when the token looks like a bare upstream record id.
pub fn looks_like_record_id(token: &str) -> bool {
    id_shape().is_match(token)
}

/// Resolve a tool token to a display name.
///
/// Tiers, first match wins: exact table hit, known id contained in the token,
/// name extracted from an `id - name` suffix, generic placeholder for bare
/// ids, and finally the token itself.
pub fn resolve_tool(token: &str) -> String {
    if token.is_empty() {
        return "Unknown Tool".to_string();
    }

    if let Some(name) = tool_map().get(token) {
        return (*name).to_string();
    }

    for (id, name) in TOOL_NAMES {
        if token.contains(id) {
            return (*name).to_string();
        }
    }

    if let Some(caps) = id_with_name().captures(token) {
        return caps[1].trim().to_string();
    }

    if looks_like_record_id(token) {
        return format!("Tool ({token})");
    }

    token.to_string()
}

/// Resolve a skill token to a display name, falling back to the token itself.
pub fn resolve_skill(token: &str) -> String {
    skill_map()
        .get(token)
        .map(|name| (*name).to_string())
        .unwrap_or_else(|| token.to_string())
}

/// Normalize a category code to its full display name.
///
/// Names that are already full and codes with no mapping pass through
/// unchanged.
pub fn full_category_name(category: &str) -> String {
    if KNOWN_FULL_CATEGORIES.contains(&category) {
        return category.to_string();
    }

    category_map()
        .get(category)
        .map(|name| (*name).to_string())
        .unwrap_or_else(|| category.to_string())
}

/// Find the built-in category for a skill name, defaulting to "Other".
pub fn find_category_for_skill(skill: &str) -> String {
    let normalized = skill.trim().to_lowercase();

    for (category, skills) in FALLBACK_SKILL_CATEGORIES {
        if skills.iter().any(|s| s.to_lowercase() == normalized) {
            return (*category).to_string();
        }
    }

    "Other".to_string()
}

/// Pick the best available skill labels for a content item.
///
/// Tries the resolved skill-names string, then the category tags, then raw
/// skill tokens that do not look like record ids, and finally the item type.
pub fn skills_for_display(item: &ContentItem) -> Vec<String> {
    let from_names: Vec<String> = item
        .skill_names
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if !from_names.is_empty() {
        return from_names;
    }

    if !item.skill_categories.is_empty() {
        return item.skill_categories.clone();
    }

    let non_ids: Vec<String> = item
        .skills
        .iter()
        .filter(|s| !looks_like_record_id(s))
        .cloned()
        .collect();
    if !non_ids.is_empty() {
        return non_ids;
    }

    vec![item.item_type.clone()]
}

/// One row from the upstream skills table.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SkillRecord {
    pub id: String,
    #[serde(default)]
    pub fields: SkillFields,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SkillFields {
    #[serde(default, rename = "Name")]
    pub name: Option<String>,
    #[serde(default, rename = "Category")]
    pub category: Vec<String>,
    #[serde(default, rename = "Description")]
    pub description: Option<String>,
}

/// Resolved skill entry keyed by upstream record id.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SkillInfo {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
}

/// The full skills lookup served to consumers.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SkillsData {
    pub skills: BTreeMap<String, SkillInfo>,
    pub categories: Vec<String>,
}

/// Build the skills lookup from upstream skill records.
///
/// Records without a name are skipped; categories are normalized to full
/// names and the unique set is returned sorted.
pub fn build_skills_data(records: &[SkillRecord]) -> SkillsData {
    let mut skills = BTreeMap::new();

    for record in records {
        let Some(name) = record.fields.name.as_deref() else {
            continue;
        };

        let raw_category = record
            .fields
            .category
            .first()
            .map(String::as_str)
            .unwrap_or("Other");

        skills.insert(
            record.id.clone(),
            SkillInfo {
                id: record.id.clone(),
                name: name.to_string(),
                category: full_category_name(raw_category),
                description: record.fields.description.clone().unwrap_or_default(),
            },
        );
    }

    let mut categories: Vec<String> = skills
        .values()
        .map(|skill| skill.category.clone())
        .collect();
    categories.sort();
    categories.dedup();

    SkillsData { skills, categories }
}

/// Skills lookup used when the upstream skills table is unavailable.
pub fn fallback_skills_data() -> SkillsData {
    let mut categories: Vec<String> = FALLBACK_SKILL_CATEGORIES
        .iter()
        .map(|(category, _)| (*category).to_string())
        .collect();
    categories.sort();

    SkillsData {
        skills: BTreeMap::new(),
        categories,
    }
}

/// Skills grouped under one display category.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SkillsByCategory {
    pub category: String,
    pub skills: Vec<String>,
}

/// Group skill tokens by category using the skills lookup, with the built-in
/// table as a fallback for unknown tokens. Groups are sorted by category and
/// deduplicated.
pub fn organize_skills_by_category(
    skills: &[String],
    lookup: &BTreeMap<String, SkillInfo>,
) -> Vec<SkillsByCategory> {
    let mut grouped: Vec<SkillsByCategory> = Vec::new();

    for skill in skills {
        let info = lookup
            .values()
            .find(|s| s.id == *skill || s.name.eq_ignore_ascii_case(skill));

        let category = match info {
            Some(info) => full_category_name(&info.category),
            None => full_category_name(&find_category_for_skill(skill)),
        };
        let name = info.map(|s| s.name.clone()).unwrap_or_else(|| skill.clone());

        match grouped.iter_mut().find(|g| g.category == category) {
            Some(group) => {
                if !group.skills.contains(&name) {
                    group.skills.push(name);
                }
            }
            None => grouped.push(SkillsByCategory {
                category,
                skills: vec![name],
            }),
        }
    }

    grouped.sort_by(|a, b| a.category.cmp(&b.category));
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentItem;

    fn item_with_skills(
        skill_names: &str,
        skill_categories: &[&str],
        skills: &[&str],
    ) -> ContentItem {
        ContentItem {
            skill_names: skill_names.to_string(),
            skill_categories: skill_categories.iter().map(|s| s.to_string()).collect(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            item_type: "Professional".to_string(),
            ..ContentItem::default()
        }
    }

    #[test]
    fn test_resolve_tool_exact_match() {
        assert_eq!(resolve_tool("recMf0OYdqlvyh15t"), "Tableau");
    }

    #[test]
    fn test_resolve_tool_contained_id() {
        assert_eq!(resolve_tool("prefix-recMf0OYdqlvyh15t-suffix"), "Tableau");
    }

    #[test]
    fn test_resolve_tool_extracts_trailing_name() {
        assert_eq!(resolve_tool("recAbC123 - Obsidian"), "Obsidian");
        assert_eq!(resolve_tool("recAbC123: Obsidian"), "Obsidian");
    }

    #[test]
    fn test_resolve_tool_bare_id_gets_placeholder() {
        assert_eq!(resolve_tool("recUnknown42"), "Tool (recUnknown42)");
    }

    #[test]
    fn test_resolve_tool_plain_name_passes_through() {
        assert_eq!(resolve_tool("Figma"), "Figma");
    }

    #[test]
    fn test_resolve_tool_empty_token() {
        assert_eq!(resolve_tool(""), "Unknown Tool");
    }

    #[test]
    fn test_resolve_skill_known_id() {
        assert_eq!(resolve_skill("rec6"), "SQL");
    }

    #[test]
    fn test_resolve_skill_unknown_passes_through() {
        assert_eq!(resolve_skill("Economics"), "Economics");
        assert_eq!(resolve_skill("rec999"), "rec999");
    }

    #[test]
    fn test_full_category_name_single_letter() {
        assert_eq!(full_category_name("A"), "Analytics");
        assert_eq!(full_category_name("Q"), "Quant & Finance");
    }

    #[test]
    fn test_full_category_name_abbreviation() {
        assert_eq!(full_category_name("ML"), "AI & ML");
        assert_eq!(full_category_name("Design"), "Product & Design");
    }

    #[test]
    fn test_full_category_name_known_full_passes_through() {
        assert_eq!(full_category_name("Business Ops"), "Business Ops");
        assert_eq!(full_category_name("Data"), "Data");
    }

    #[test]
    fn test_full_category_name_unknown_passes_through() {
        assert_eq!(full_category_name("Gardening"), "Gardening");
    }

    #[test]
    fn test_find_category_for_skill() {
        assert_eq!(find_category_for_skill("SQL"), "Analytics");
        assert_eq!(find_category_for_skill("teaching"), "Education");
        assert_eq!(find_category_for_skill("Juggling"), "Other");
    }

    #[test]
    fn test_skills_for_display_prefers_skill_names() {
        let item = item_with_skills("SQL, Python , ", &["Analytics"], &["rec6"]);
        assert_eq!(skills_for_display(&item), vec!["SQL", "Python"]);
    }

    #[test]
    fn test_skills_for_display_falls_back_to_categories() {
        let item = item_with_skills("", &["Analytics", "Media"], &["rec6"]);
        assert_eq!(skills_for_display(&item), vec!["Analytics", "Media"]);
    }

    #[test]
    fn test_skills_for_display_filters_id_shaped_skills() {
        let item = item_with_skills("", &[], &["rec6", "Economics"]);
        assert_eq!(skills_for_display(&item), vec!["Economics"]);
    }

    #[test]
    fn test_skills_for_display_last_resort_is_item_type() {
        let item = item_with_skills("", &[], &["rec6"]);
        assert_eq!(skills_for_display(&item), vec!["Professional"]);
    }

    fn skill_record(id: &str, name: Option<&str>, category: &[&str]) -> SkillRecord {
        SkillRecord {
            id: id.to_string(),
            fields: SkillFields {
                name: name.map(str::to_string),
                category: category.iter().map(|c| c.to_string()).collect(),
                description: None,
            },
        }
    }

    #[test]
    fn test_build_skills_data_skips_unnamed_records() {
        let records = vec![
            skill_record("recA", Some("SQL"), &["A"]),
            skill_record("recB", None, &["A"]),
        ];
        let data = build_skills_data(&records);
        assert_eq!(data.skills.len(), 1);
        assert!(data.skills.contains_key("recA"));
    }

    #[test]
    fn test_build_skills_data_normalizes_categories() {
        let records = vec![
            skill_record("recA", Some("SQL"), &["A"]),
            skill_record("recB", Some("Figma"), &["Design"]),
            skill_record("recC", Some("Excel"), &[]),
        ];
        let data = build_skills_data(&records);
        assert_eq!(data.skills["recA"].category, "Analytics");
        assert_eq!(data.skills["recB"].category, "Product & Design");
        assert_eq!(data.skills["recC"].category, "Other");
        assert_eq!(
            data.categories,
            vec!["Analytics", "Other", "Product & Design"]
        );
    }

    #[test]
    fn test_fallback_skills_data_has_sorted_categories() {
        let data = fallback_skills_data();
        assert!(data.skills.is_empty());
        let mut sorted = data.categories.clone();
        sorted.sort();
        assert_eq!(data.categories, sorted);
        assert!(data.categories.contains(&"Analytics".to_string()));
    }

    #[test]
    fn test_organize_skills_by_category_uses_lookup() {
        let data = build_skills_data(&[skill_record("recA", Some("SQL"), &["D"])]);
        let grouped =
            organize_skills_by_category(&["recA".to_string()], &data.skills);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].category, "Data Eng / Analytics");
        assert_eq!(grouped[0].skills, vec!["SQL"]);
    }

    #[test]
    fn test_organize_skills_by_category_falls_back_and_dedupes() {
        let lookup = BTreeMap::new();
        let skills = vec![
            "SQL".to_string(),
            "sql".to_string(),
            "Teaching".to_string(),
            "Juggling".to_string(),
        ];
        let grouped = organize_skills_by_category(&skills, &lookup);

        let categories: Vec<&str> = grouped.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(categories, vec!["Analytics", "Education", "Other"]);
        // "SQL" and "sql" collapse into one Analytics group entry each by
        // verbatim token, so the group holds the distinct spellings only.
        assert_eq!(grouped[0].skills, vec!["SQL", "sql"]);
        assert_eq!(grouped[2].skills, vec!["Juggling"]);
    }
}
