use super::*;

fn ids(videos: &[&VideoSummary]) -> Vec<u32> {
    videos.iter().map(|v| v.id).collect()
}

// =============================================================
// Catalog literals
// =============================================================

#[test]
fn catalog_has_six_videos_with_unique_ids() {
    assert_eq!(VIDEOS.len(), 6);
    let mut seen = VIDEOS.iter().map(|v| v.id).collect::<Vec<_>>();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), VIDEOS.len());
}

#[test]
fn every_video_category_is_in_fixed_set() {
    for video in &VIDEOS {
        assert!(Category::ALL.contains(&video.category), "{} has unknown category", video.title);
    }
}

#[test]
fn featured_ids_all_exist() {
    assert_eq!(by_ids(&VIDEOS, &FEATURED_IDS).len(), FEATURED_IDS.len());
}

// =============================================================
// Category
// =============================================================

#[test]
fn category_label_round_trips() {
    for category in Category::ALL {
        assert_eq!(Category::from_label(category.label()), Some(category));
    }
}

#[test]
fn category_from_label_rejects_all_pill_and_unknown() {
    assert_eq!(Category::from_label(ALL_PILL_LABEL), None);
    assert_eq!(Category::from_label("technology"), None);
    assert_eq!(Category::from_label(""), None);
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn technology_section_has_exactly_two_videos_in_catalog_order() {
    let tech = in_category(&VIDEOS, Category::Technology);
    assert_eq!(ids(&tech), vec![2, 4]);
    assert!(tech.iter().all(|v| v.category == Category::Technology));
}

#[test]
fn in_category_returns_empty_for_absent_category() {
    assert!(in_category(&VIDEOS, Category::Mathematics).is_empty());
}

#[test]
fn by_ids_keeps_requested_order_and_skips_unknown() {
    let picked = by_ids(&VIDEOS, &[6, 99, 2]);
    assert_eq!(ids(&picked), vec![6, 2]);
}

// =============================================================
// Sections
// =============================================================

#[test]
fn sections_start_with_trending_then_featured() {
    let all = sections();
    assert_eq!(all[0].kind, SectionKind::Trending);
    assert_eq!(ids(&all[0].videos), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(all[1].kind, SectionKind::Featured);
    assert_eq!(ids(&all[1].videos), FEATURED_IDS.to_vec());
}

#[test]
fn sections_include_only_categories_present_in_declaration_order() {
    let kinds = sections().into_iter().skip(2).map(|s| s.kind).collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![
            SectionKind::Category(Category::Technology),
            SectionKind::Category(Category::History),
            SectionKind::Category(Category::Space),
            SectionKind::Category(Category::Philosophy),
        ]
    );
}

#[test]
fn sections_for_custom_list_without_featured_matches() {
    static ONE: [VideoSummary; 1] = [VideoSummary {
        id: 10,
        title: "Prime Numbers",
        channel: "Number Line",
        views: "12K views",
        uploaded: "1 day ago",
        duration: "09:01",
        thumbnail: "#000",
        category: Category::Mathematics,
    }];
    let built = sections_for(&ONE, &[1, 2]);
    assert_eq!(built.len(), 3);
    assert!(built[1].videos.is_empty());
    assert_eq!(built[2].kind, SectionKind::Category(Category::Mathematics));
}

#[test]
fn section_kind_titles_and_keys() {
    assert_eq!(SectionKind::Trending.title(), "Trending Now");
    assert_eq!(SectionKind::Featured.key(), "featured");
    assert_eq!(SectionKind::Category(Category::Space).title(), "Space");
    assert_eq!(SectionKind::Category(Category::Space).key(), "space");
}
