use crate::shared::date_utils;
use contracts::domain::banner::aggregate::{Banner, BannerDraft, BannerId};
use leptos::prelude::*;

/// Ordered collection of banner records plus the mutation operations the
/// admin screen needs. Plain state; reactivity lives in
/// [`BannerStoreService`].
#[derive(Debug, Clone, Default)]
pub struct BannerStore {
    banners: Vec<Banner>,
}

impl BannerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the demo dataset the screen ships with.
    pub fn with_mock_data() -> Self {
        Self {
            banners: mock_banners(),
        }
    }

    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    pub fn len(&self) -> usize {
        self.banners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }

    pub fn get(&self, id: BannerId) -> Option<&Banner> {
        self.banners.iter().find(|b| b.id == id)
    }

    /// Append a new banner built from the draft. The id continues the current
    /// numbering (`len + 1`), the order label is derived from it and the
    /// record is stamped with today's date.
    pub fn create(&mut self, draft: &BannerDraft) -> Banner {
        let id = BannerId::new(self.banners.len() as u32 + 1);
        let banner = Banner::from_draft(id, date_utils::today_iso(), draft);
        self.banners.push(banner.clone());
        banner
    }

    /// Overwrite the editable fields of an existing banner. `id`, `order` and
    /// `date` are preserved.
    pub fn update(&mut self, id: BannerId, draft: &BannerDraft) -> Result<Banner, String> {
        let banner = self
            .banners
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| "Banner not found.".to_string())?;
        banner.apply_draft(draft);
        Ok(banner.clone())
    }

    /// Remove the banner with the given id. Remaining records keep their ids
    /// and order labels. Returns `false` when no such banner exists.
    pub fn delete(&mut self, id: BannerId) -> bool {
        let before = self.banners.len();
        self.banners.retain(|b| b.id != id);
        self.banners.len() != before
    }
}

/// Context-provided handle to the single mutable store instance. Mutations
/// replace the signal value wholesale so every reader re-renders.
#[derive(Clone, Copy)]
pub struct BannerStoreService {
    state: RwSignal<BannerStore>,
}

impl BannerStoreService {
    pub fn new(store: BannerStore) -> Self {
        Self {
            state: RwSignal::new(store),
        }
    }

    pub fn with_mock_data() -> Self {
        Self::new(BannerStore::with_mock_data())
    }

    /// Reactive snapshot of the current records, in display order.
    pub fn banners(&self) -> Vec<Banner> {
        self.state.with(|s| s.banners().to_vec())
    }

    pub fn get(&self, id: BannerId) -> Option<Banner> {
        self.state.with_untracked(|s| s.get(id).cloned())
    }

    pub fn create(&self, draft: &BannerDraft) -> Banner {
        let mut store = self.state.get_untracked();
        let created = store.create(draft);
        self.state.set(store);
        created
    }

    pub fn update(&self, id: BannerId, draft: &BannerDraft) -> Result<Banner, String> {
        let mut store = self.state.get_untracked();
        let updated = store.update(id, draft)?;
        self.state.set(store);
        Ok(updated)
    }

    pub fn delete(&self, id: BannerId) -> bool {
        let mut store = self.state.get_untracked();
        let removed = store.delete(id);
        if removed {
            self.state.set(store);
        }
        removed
    }
}

fn mock_banners() -> Vec<Banner> {
    vec![
        Banner {
            id: BannerId::new(1),
            order: "01".to_string(),
            name: "Main Banner Test 1".to_string(),
            link: "http://TTA.co.kr".to_string(),
            texts: vec![
                "TTA Integrated Standard Portal Service: The standard for ICT standardization, leading ICT technology standardization.".to_string(),
            ],
            date: "2024-10-17".to_string(),
            image: "https://i.ibb.co/hLtjbg4/image-22.png".to_string(),
        },
        Banner {
            id: BannerId::new(2),
            order: "02".to_string(),
            name: "Main Banner Test 2".to_string(),
            link: "http://TTA.example.co.kr".to_string(),
            texts: vec![
                "TTA Integrated Standard Portal Service: The standard for ICT standardization, leading ICT technology standardization.".to_string(),
            ],
            date: "2024-10-17".to_string(),
            image: "https://i.ibb.co/hLtjbg4/image-22.png".to_string(),
        },
        Banner {
            id: BannerId::new(3),
            order: "03".to_string(),
            name: "Lý Hồng Phong".to_string(),
            link: "https://via.placeholder.com/100".to_string(),
            texts: vec!["I am the top candidate.".to_string()],
            date: "2024-10-17".to_string(),
            image: "https://i.ibb.co/NtnC7CT/133694002376763458.jpg".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::banner::aggregate::PLACEHOLDER_IMAGE_URL;

    fn draft(name: &str) -> BannerDraft {
        BannerDraft {
            id: None,
            name: name.to_string(),
            link: "http://example.com".to_string(),
            texts: vec!["line".to_string()],
            image: None,
        }
    }

    #[test]
    fn create_appends_a_fully_populated_record() {
        let mut store = BannerStore::new();
        let banner = store.create(&draft("First"));

        assert_eq!(store.len(), 1);
        assert_eq!(banner.id, BannerId::new(1));
        assert_eq!(banner.order, "01");
        assert_eq!(banner.date, date_utils::today_iso());
        assert_eq!(banner.image, PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn create_continues_the_numbering() {
        let mut store = BannerStore::with_mock_data();
        let before = store.len();

        let banner = store.create(&BannerDraft {
            name: "B".to_string(),
            link: "L".to_string(),
            texts: vec!["t".to_string()],
            ..BannerDraft::default()
        });

        assert_eq!(store.len(), before + 1);
        assert_eq!(banner.id, BannerId::new(before as u32 + 1));
        assert_eq!(banner.order, format!("{:02}", before + 1));
    }

    #[test]
    fn create_on_a_single_record_store_yields_id_two() {
        let mut store = BannerStore::new();
        store.create(&draft("First"));

        let banner = store.create(&BannerDraft {
            name: "B".to_string(),
            link: "L".to_string(),
            texts: vec!["t".to_string()],
            ..BannerDraft::default()
        });

        assert_eq!(store.len(), 2);
        assert_eq!(banner.id, BannerId::new(2));
        assert_eq!(banner.order, "02");
    }

    #[test]
    fn update_keeps_length_order_and_date() {
        let mut store = BannerStore::with_mock_data();
        let before = store.len();
        let id = BannerId::new(2);
        let original = store.get(id).cloned().expect("seed record");

        let mut d = draft("Renamed");
        d.id = Some(id);
        let updated = store.update(id, &d).expect("record exists");

        assert_eq!(store.len(), before);
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.order, original.order);
        assert_eq!(updated.date, original.date);
    }

    #[test]
    fn update_of_missing_id_fails_without_mutating() {
        let mut store = BannerStore::with_mock_data();
        let snapshot = store.banners().to_vec();

        let err = store.update(BannerId::new(999), &draft("x")).unwrap_err();
        assert_eq!(err, "Banner not found.");
        assert_eq!(store.banners(), &snapshot[..]);
    }

    #[test]
    fn delete_removes_exactly_the_matching_record() {
        let mut store = BannerStore::with_mock_data();
        assert!(store.delete(BannerId::new(2)));

        assert_eq!(store.len(), 2);
        assert!(store.get(BannerId::new(2)).is_none());
        // survivors keep their ids and order labels
        assert_eq!(store.get(BannerId::new(1)).map(|b| b.order.clone()), Some("01".to_string()));
        assert_eq!(store.get(BannerId::new(3)).map(|b| b.order.clone()), Some("03".to_string()));
    }

    #[test]
    fn delete_of_missing_id_is_a_no_op() {
        let mut store = BannerStore::with_mock_data();
        assert!(!store.delete(BannerId::new(999)));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn create_after_delete_reuses_numbering() {
        // Deleting never renumbers and create derives the id from the current
        // count, so a freed slot is silently reused. Kept as-is from the
        // behavior this screen always had.
        let mut store = BannerStore::with_mock_data();
        store.delete(BannerId::new(2));

        let banner = store.create(&draft("Recreated"));
        assert_eq!(banner.id, BannerId::new(3));
        assert_eq!(banner.order, "03");
    }
}
