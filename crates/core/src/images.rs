//! Media URL resolution with tiered fallbacks.
//!
//! Each image slot prefers a pre-resolved CDN URL, then the first raw
//! attachment, and (for covers only) a synthesized placeholder. Cloudinary
//! URLs are rewritten for best quality; the rewrite is safe to re-apply.

use crate::content::{Attachment, ProjectImage, RecordFields, ToolItem};
use crate::labels;

/// Quality/format transform inserted into Cloudinary delivery URLs.
const CLOUDINARY_TRANSFORM: &str = "q_auto:best,f_auto,dpr_2.0/";

/// True when the URL is served by the Cloudinary image CDN.
pub fn is_cloudinary_url(url: &str) -> bool {
    !url.is_empty() && url.contains("cloudinary.com")
}

/// Rewrite a Cloudinary URL to request best-quality, auto-format output and
/// append a cache-defeating `cb` parameter.
///
/// Applying the function twice yields the same result as applying it once:
/// the transform segment is only inserted when absent and the cache-buster is
/// only appended when none is present. Non-Cloudinary URLs pass through
/// untouched. `now_millis` is supplied by the caller so the function stays
/// deterministic.
pub fn enhance_cloudinary_url(url: &str, now_millis: i64) -> String {
    if !is_cloudinary_url(url) {
        return url.to_string();
    }

    let mut enhanced = if url.contains("/upload/") && !url.contains(CLOUDINARY_TRANSFORM) {
        url.replacen("/upload/", &format!("/upload/{CLOUDINARY_TRANSFORM}"), 1)
    } else {
        url.to_string()
    };

    if !enhanced.contains("cb=") {
        let separator = if enhanced.contains('?') { '&' } else { '?' };
        enhanced = format!("{enhanced}{separator}cb={now_millis}");
    }

    enhanced
}

/// Placeholder cover URL parameterized by the record's display name.
pub fn placeholder_image(title: &str) -> String {
    format!(
        "/placeholder.svg?height=480&width=640&query={}",
        urlencoding::encode(title)
    )
}

fn first_attachment_url(attachments: &[Attachment]) -> Option<String> {
    attachments.first().map(|attachment| attachment.url.clone())
}

/// Pick one image URL from a CDN field and an attachment list, enhancing
/// Cloudinary sources.
fn resolve_slot(
    cdn: Option<&String>,
    attachments: &[Attachment],
    now_millis: i64,
) -> Option<String> {
    cdn.cloned()
        .or_else(|| first_attachment_url(attachments))
        .map(|url| enhance_cloudinary_url(&url, now_millis))
}

/// Resolve the cover image, always producing a URL (worst case a placeholder).
pub fn resolve_cover(fields: &RecordFields, now_millis: i64) -> String {
    resolve_slot(fields.cover_cdn.as_ref(), &fields.cover, now_millis).unwrap_or_else(|| {
        placeholder_image(fields.experience.as_deref().unwrap_or("Content"))
    })
}

/// Resolve the logo image, if any source is available.
pub fn resolve_logo(fields: &RecordFields, now_millis: i64) -> Option<String> {
    resolve_slot(fields.logo_cdn.as_ref(), &fields.logo, now_millis)
}

/// Resolve the up-to-four project image slots, in order, skipping empty slots.
pub fn resolve_project_images(fields: &RecordFields, now_millis: i64) -> Vec<ProjectImage> {
    let slots: [(Option<&String>, &[Attachment], Option<&String>); 4] = [
        (
            fields.pimg1_cdn.as_ref(),
            fields.project_image_1.as_slice(),
            fields.image_1_caption.as_ref(),
        ),
        (
            fields.pimg2_cdn.as_ref(),
            fields.project_image_2.as_slice(),
            fields.image_2_caption.as_ref(),
        ),
        (
            fields.pimg3_cdn.as_ref(),
            fields.project_image_3.as_slice(),
            fields.image_3_caption.as_ref(),
        ),
        (
            fields.pimg4_cdn.as_ref(),
            fields.project_image_4.as_slice(),
            fields.image_4_caption.as_ref(),
        ),
    ];

    slots
        .into_iter()
        .filter_map(|(cdn, attachments, caption)| {
            resolve_slot(cdn, attachments, now_millis).map(|url| ProjectImage {
                url,
                caption: caption.cloned().unwrap_or_default(),
            })
        })
        .collect()
}

/// Pair tool tokens with their logos by position.
///
/// The logo array may be shorter than the name array; missing entries simply
/// yield tools without logos.
pub fn resolve_tools(fields: &RecordFields) -> Vec<ToolItem> {
    fields
        .tools
        .iter()
        .enumerate()
        .map(|(index, token)| ToolItem {
            name: labels::resolve_tool(token),
            logo: fields.tool_logos.get(index).cloned(),
            original_id: Some(token.clone()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attachment(url: &str) -> Attachment {
        Attachment {
            url: url.to_string(),
            filename: "img.png".to_string(),
            size: 1024,
            mime_type: "image/png".to_string(),
        }
    }

    const CLOUDINARY: &str = "https://res.cloudinary.com/demo/image/upload/v1/cover.jpg";

    #[test]
    fn test_enhance_inserts_transform_and_cache_buster() {
        let enhanced = enhance_cloudinary_url(CLOUDINARY, 1700000000000);
        assert_eq!(
            enhanced,
            "https://res.cloudinary.com/demo/image/upload/q_auto:best,f_auto,dpr_2.0/v1/cover.jpg?cb=1700000000000"
        );
    }

    #[test]
    fn test_enhance_is_idempotent() {
        let once = enhance_cloudinary_url(CLOUDINARY, 42);
        let twice = enhance_cloudinary_url(&once, 42);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_enhance_never_double_inserts_transform() {
        let once = enhance_cloudinary_url(CLOUDINARY, 1);
        let twice = enhance_cloudinary_url(&once, 2);
        assert_eq!(twice.matches("q_auto:best").count(), 1);
        assert_eq!(twice.matches("cb=").count(), 1);
    }

    #[test]
    fn test_enhance_appends_with_ampersand_when_query_present() {
        let url = "https://res.cloudinary.com/demo/image/upload/v1/a.jpg?w=100";
        let enhanced = enhance_cloudinary_url(url, 7);
        assert!(enhanced.ends_with("?w=100&cb=7"));
    }

    #[test]
    fn test_enhance_ignores_non_cloudinary_urls() {
        let url = "https://example.com/upload/cover.jpg";
        assert_eq!(enhance_cloudinary_url(url, 7), url);
    }

    #[test]
    fn test_enhance_empty_url() {
        assert_eq!(enhance_cloudinary_url("", 7), "");
    }

    #[test]
    fn test_placeholder_encodes_title() {
        assert_eq!(
            placeholder_image("Media & Analytics"),
            "/placeholder.svg?height=480&width=640&query=Media%20%26%20Analytics"
        );
    }

    #[test]
    fn test_resolve_cover_prefers_cdn() {
        let fields = RecordFields {
            cover_cdn: Some("https://cdn.example.com/cover.jpg".to_string()),
            cover: vec![attachment("https://raw.example.com/cover.jpg")],
            ..RecordFields::default()
        };
        assert_eq!(resolve_cover(&fields, 0), "https://cdn.example.com/cover.jpg");
    }

    #[test]
    fn test_resolve_cover_falls_back_to_attachment() {
        let fields = RecordFields {
            cover: vec![attachment("https://raw.example.com/cover.jpg")],
            ..RecordFields::default()
        };
        assert_eq!(resolve_cover(&fields, 0), "https://raw.example.com/cover.jpg");
    }

    #[test]
    fn test_resolve_cover_synthesizes_placeholder() {
        let fields = RecordFields {
            experience: Some("Brown University".to_string()),
            ..RecordFields::default()
        };
        assert_eq!(
            resolve_cover(&fields, 0),
            "/placeholder.svg?height=480&width=640&query=Brown%20University"
        );
    }

    #[test]
    fn test_resolve_cover_placeholder_without_title() {
        let fields = RecordFields::default();
        assert!(resolve_cover(&fields, 0).contains("query=Content"));
    }

    #[test]
    fn test_resolve_cover_enhances_cloudinary_source() {
        let fields = RecordFields {
            cover_cdn: Some(CLOUDINARY.to_string()),
            ..RecordFields::default()
        };
        let cover = resolve_cover(&fields, 5);
        assert!(cover.contains("q_auto:best"));
        assert!(cover.ends_with("cb=5"));
    }

    #[test]
    fn test_resolve_logo_absent() {
        assert_eq!(resolve_logo(&RecordFields::default(), 0), None);
    }

    #[test]
    fn test_resolve_logo_from_attachment() {
        let fields = RecordFields {
            logo: vec![
                attachment("https://raw.example.com/logo1.png"),
                attachment("https://raw.example.com/logo2.png"),
            ],
            ..RecordFields::default()
        };
        assert_eq!(
            resolve_logo(&fields, 0),
            Some("https://raw.example.com/logo1.png".to_string())
        );
    }

    #[test]
    fn test_project_images_skip_gaps() {
        let fields = RecordFields {
            pimg1_cdn: Some("https://cdn.example.com/1.jpg".to_string()),
            image_1_caption: Some("First".to_string()),
            // Slot 2 empty.
            project_image_3: vec![attachment("https://raw.example.com/3.jpg")],
            pimg4_cdn: Some("https://cdn.example.com/4.jpg".to_string()),
            ..RecordFields::default()
        };

        let images = resolve_project_images(&fields, 0);
        assert_eq!(images.len(), 3);
        assert_eq!(images[0].url, "https://cdn.example.com/1.jpg");
        assert_eq!(images[0].caption, "First");
        assert_eq!(images[1].url, "https://raw.example.com/3.jpg");
        assert_eq!(images[1].caption, "");
        assert_eq!(images[2].url, "https://cdn.example.com/4.jpg");
    }

    #[test]
    fn test_tools_positional_matching() {
        let fields = RecordFields {
            tools: vec![
                "recMf0OYdqlvyh15t".to_string(),
                "recP9Kycl9U6T4FtH".to_string(),
                "Figma".to_string(),
            ],
            tool_logos: vec!["https://cdn.example.com/tableau.png".to_string()],
            ..RecordFields::default()
        };

        let tools = resolve_tools(&fields);
        assert_eq!(tools.len(), 3);
        assert_eq!(tools[0].name, "Tableau");
        assert_eq!(
            tools[0].logo,
            Some("https://cdn.example.com/tableau.png".to_string())
        );
        assert_eq!(tools[1].name, "Looker");
        assert_eq!(tools[1].logo, None);
        assert_eq!(tools[2].name, "Figma");
        assert_eq!(tools[2].logo, None);
        assert_eq!(tools[2].original_id, Some("Figma".to_string()));
    }

    #[test]
    fn test_tools_empty_input() {
        assert!(resolve_tools(&RecordFields::default()).is_empty());
    }
}
