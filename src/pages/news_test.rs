use super::*;

fn results(total_pages: u64) -> NewsPage {
    NewsPage { news: Vec::new(), total_items: total_pages * 5, total_pages }
}

#[test]
fn next_page_available_until_last() {
    let query = NewsQuery { page: 1, ..NewsQuery::default() };
    assert!(has_next_page(&query, &results(3)));
    let last = NewsQuery { page: 3, ..NewsQuery::default() };
    assert!(!has_next_page(&last, &results(3)));
}

#[test]
fn empty_results_have_no_next_page() {
    assert!(!has_next_page(&NewsQuery::default(), &results(0)));
}

#[test]
fn page_label_never_reports_zero_pages() {
    assert_eq!(page_label(&NewsQuery::default(), &results(0)), "Page 1 of 1");
    assert_eq!(page_label(&NewsQuery { page: 2, ..NewsQuery::default() }, &results(4)), "Page 2 of 4");
}

#[test]
fn only_writers_get_edit_and_delete() {
    assert!(can_edit(Some(&Role::Writer)));
    assert!(!can_edit(Some(&Role::Admin)));
    assert!(!can_edit(None));
}

#[test]
fn only_admins_get_status_control() {
    assert!(can_set_status(Some(&Role::Admin)));
    assert!(!can_set_status(Some(&Role::Writer)));
    assert!(!can_set_status(None));
}

#[test]
fn drafts_query_is_pinned_to_pending() {
    let query = Some(NewsStatus::Pending).map_or_else(NewsQuery::default, NewsQuery::with_status);
    assert_eq!(query.status, Some(NewsStatus::Pending));
    assert_eq!(query.page, 1);
}
