use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a banner. Sequential, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BannerId(pub u32);

impl BannerId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for BannerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Fallback image used when a draft is saved without a picked file.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/100";

/// Promotional banner shown on the portal main page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub id: BannerId,

    /// Display-order label, zero-padded to two digits. Derived from the id
    /// at creation time and never recomputed afterwards.
    pub order: String,

    pub name: String,
    pub link: String,

    /// Text lines shown on the banner. At least one non-blank entry.
    pub texts: Vec<String>,

    /// Registration date, `YYYY-MM-DD`. Stamped once at creation.
    pub date: String,

    pub image: String,
}

impl Banner {
    /// Build a fully populated banner from an accepted draft.
    pub fn from_draft(id: BannerId, date: String, draft: &BannerDraft) -> Self {
        Self {
            id,
            order: format!("{:02}", id.value()),
            name: draft.name.clone(),
            link: draft.link.clone(),
            texts: draft.texts.clone(),
            date,
            image: draft
                .image
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
        }
    }

    /// Overwrite the editable fields from a draft. `id`, `order` and `date`
    /// keep their original values.
    pub fn apply_draft(&mut self, draft: &BannerDraft) {
        self.name = draft.name.clone();
        self.link = draft.link.clone();
        self.texts = draft.texts.clone();
        if let Some(image) = &draft.image {
            self.image = image.clone();
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Draft state behind the create/edit popup. Any field may still be unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BannerDraft {
    pub id: Option<BannerId>,
    pub name: String,
    pub link: String,
    pub texts: Vec<String>,
    pub image: Option<String>,
}

impl BannerDraft {
    /// Empty draft with a single blank text slot, as the popup expects.
    pub fn empty() -> Self {
        Self {
            texts: vec![String::new()],
            ..Self::default()
        }
    }

    /// Draft pre-filled from an existing banner for the edit flow.
    pub fn from_banner(banner: &Banner) -> Self {
        Self {
            id: Some(banner.id),
            name: banner.name.clone(),
            link: banner.link.clone(),
            texts: banner.texts.clone(),
            image: Some(banner.image.clone()),
        }
    }

    /// Validate every checked field at once, as the save button does.
    pub fn validate(&self) -> FieldErrors {
        FieldErrors {
            name: validate_name(&self.name),
            link: validate_link(&self.link),
            texts: validate_texts(&self.texts),
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Per-field violation messages. An empty string means the field is valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub name: String,
    pub link: String,
    pub texts: String,
}

impl FieldErrors {
    pub fn is_clean(&self) -> bool {
        self.name.is_empty() && self.link.is_empty() && self.texts.is_empty()
    }
}

pub fn validate_name(value: &str) -> String {
    if value.trim().is_empty() {
        "Banner Name is required.".to_string()
    } else {
        String::new()
    }
}

pub fn validate_link(value: &str) -> String {
    if value.trim().is_empty() {
        "Link is required.".to_string()
    } else {
        String::new()
    }
}

pub fn validate_texts(texts: &[String]) -> String {
    if texts.iter().any(|t| !t.trim().is_empty()) {
        String::new()
    } else {
        "At least one valid text is required.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> BannerDraft {
        BannerDraft {
            id: None,
            name: "Main Banner".to_string(),
            link: "http://example.com".to_string(),
            texts: vec!["hello".to_string()],
            image: None,
        }
    }

    #[test]
    fn blank_name_and_link_are_rejected() {
        assert!(!validate_name("").is_empty());
        assert!(!validate_name("   ").is_empty());
        assert!(validate_name("Banner").is_empty());

        assert!(!validate_link("").is_empty());
        assert!(validate_link("http://example.com").is_empty());
    }

    #[test]
    fn texts_need_at_least_one_non_blank_entry() {
        assert!(!validate_texts(&[]).is_empty());
        assert!(!validate_texts(&["".to_string(), "   ".to_string()]).is_empty());
        assert!(validate_texts(&["".to_string(), "x".to_string()]).is_empty());
    }

    #[test]
    fn validate_reports_only_the_offending_fields() {
        let mut draft = valid_draft();
        draft.name = String::new();

        let errors = draft.validate();
        assert_eq!(errors.name, "Banner Name is required.");
        assert_eq!(errors.link, "");
        assert_eq!(errors.texts, "");
        assert!(!errors.is_clean());

        assert!(valid_draft().validate().is_clean());
    }

    #[test]
    fn empty_draft_has_one_blank_text_slot() {
        let draft = BannerDraft::empty();
        assert_eq!(draft.texts, vec![String::new()]);
        assert!(draft.id.is_none());
        assert!(draft.image.is_none());
    }

    #[test]
    fn from_draft_derives_order_and_defaults_image() {
        let banner = Banner::from_draft(BannerId::new(7), "2024-10-17".to_string(), &valid_draft());
        assert_eq!(banner.id, BannerId::new(7));
        assert_eq!(banner.order, "07");
        assert_eq!(banner.date, "2024-10-17");
        assert_eq!(banner.image, PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn apply_draft_preserves_identity_fields() {
        let mut banner = Banner::from_draft(BannerId::new(1), "2024-10-17".to_string(), &valid_draft());
        let original_order = banner.order.clone();

        let mut draft = BannerDraft::from_banner(&banner);
        draft.name = "Renamed".to_string();
        draft.texts = vec!["new line".to_string()];
        banner.apply_draft(&draft);

        assert_eq!(banner.name, "Renamed");
        assert_eq!(banner.texts, vec!["new line".to_string()]);
        assert_eq!(banner.id, BannerId::new(1));
        assert_eq!(banner.order, original_order);
        assert_eq!(banner.date, "2024-10-17");
    }

    #[test]
    fn apply_draft_without_image_keeps_the_existing_one() {
        let mut draft = valid_draft();
        draft.image = Some("blob:abc".to_string());
        let mut banner = Banner::from_draft(BannerId::new(1), "2024-10-17".to_string(), &draft);

        draft.image = None;
        banner.apply_draft(&draft);
        assert_eq!(banner.image, "blob:abc");
    }
}
