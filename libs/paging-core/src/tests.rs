use crate::{compute, Error};

#[test]
fn first_page_has_no_previous() {
    let paging = compute("/items", 0, 10, 25, 10).unwrap();
    assert_eq!(paging.previous, None);
    assert_eq!(paging.next.as_deref(), Some("/items?skip=10&limit=10"));
    assert_eq!(paging.first, "/items?skip=0&limit=10");
    assert_eq!(paging.last, "/items?skip=15&limit=10");
    assert_eq!(paging.pages, 3);
    assert_eq!(paging.current_page, 1);
    assert_eq!(paging.total_records, 25);
    assert_eq!(paging.records_on_page, 10);
}

#[test]
fn last_page_has_no_next_and_keeps_request_uri() {
    let paging = compute("/items?skip=20&limit=10", 20, 10, 25, 5).unwrap();
    assert_eq!(paging.next, None);
    assert_eq!(paging.previous.as_deref(), Some("/items?skip=10&limit=10"));
    // The current request addresses the last window, so `last` is the
    // request URI verbatim.
    assert_eq!(paging.last, "/items?skip=20&limit=10");
    assert_eq!(paging.current_page, 3);
    assert_eq!(paging.pages, 3);
}

#[test]
fn middle_page_links_both_ways() {
    let paging = compute("/items?skip=10&limit=10", 10, 10, 35, 10).unwrap();
    assert_eq!(paging.previous.as_deref(), Some("/items?skip=0&limit=10"));
    assert_eq!(paging.next.as_deref(), Some("/items?skip=20&limit=10"));
    assert_eq!(paging.last, "/items?skip=25&limit=10");
    assert_eq!(paging.pages, 4);
    assert_eq!(paging.current_page, 2);
}

#[test]
fn short_first_page_previous_window() {
    // skip smaller than limit: the previous page is a short first page
    // covering records 0..skip.
    let paging = compute("/items?skip=5&limit=10", 5, 10, 25, 10).unwrap();
    assert_eq!(paging.previous.as_deref(), Some("/items?skip=0&limit=5"));
    assert_eq!(paging.next.as_deref(), Some("/items?skip=15&limit=10"));
    assert_eq!(paging.current_page, 2);
}

#[test]
fn skip_beyond_records_points_back_at_last_window() {
    let paging = compute("/items?skip=40&limit=10", 40, 10, 25, 0).unwrap();
    assert_eq!(paging.previous.as_deref(), Some("/items?skip=15&limit=10"));
    assert_eq!(paging.next, None);
    assert_eq!(paging.current_page, 0);
    assert_eq!(paging.last, "/items?skip=15&limit=10");
}

#[test]
fn single_page_is_its_own_last() {
    let paging = compute("/items", 0, 50, 25, 25).unwrap();
    assert_eq!(paging.pages, 1);
    assert_eq!(paging.current_page, 1);
    // Single page: the request itself is the last page.
    assert_eq!(paging.last, "/items");
    assert_eq!(paging.previous, None);
    assert_eq!(paging.next, None);
}

#[test]
fn empty_record_set() {
    let paging = compute("/items", 0, 10, 0, 0).unwrap();
    assert_eq!(paging.pages, 0);
    assert_eq!(paging.current_page, 0);
    assert_eq!(paging.previous, None);
    assert_eq!(paging.next, None);
    assert_eq!(paging.last, "/items");
}

#[test]
fn pages_is_ceiling_of_records_over_limit() {
    for (records, limit, pages) in [(25, 10, 3), (30, 10, 3), (31, 10, 4), (1, 10, 1), (0, 10, 0)]
    {
        let paging = compute("/items", 0, limit, records, 0).unwrap();
        assert_eq!(paging.pages, pages, "records={records} limit={limit}");
    }
}

#[test]
fn current_page_is_monotonic_in_skip() {
    let records = 47;
    let limit = 10;
    let mut previous_page = 0;
    for skip in 0..records {
        let paging = compute("/items", skip, limit, records, 0).unwrap();
        assert!(
            paging.current_page >= previous_page,
            "page decreased at skip={skip}"
        );
        previous_page = paging.current_page;
    }
}

#[test]
fn current_page_equals_pages_exactly_on_final_window() {
    let records = 47;
    let limit = 10;
    for skip in 0..records {
        let paging = compute("/items", skip, limit, records, 0).unwrap();
        let on_final_window = skip + limit >= records;
        assert_eq!(
            paging.current_page == paging.pages,
            on_final_window,
            "skip={skip}"
        );
    }
}

#[test]
fn skip_near_u64_max_yields_no_next() {
    let paging = compute("/items", u64::MAX - 5, 10, 25, 0).unwrap();
    assert_eq!(paging.next, None);
    assert_eq!(paging.previous.as_deref(), Some("/items?skip=15&limit=10"));
    assert_eq!(paging.current_page, 0);
}

#[test]
fn records_smaller_than_limit_pins_link_skips_to_zero() {
    // skip past a record set smaller than one page: both the previous
    // window and the last link saturate to skip 0.
    let paging = compute("/items?skip=7&limit=10", 7, 10, 5, 0).unwrap();
    assert_eq!(paging.last, "/items?skip=0&limit=10");
    assert_eq!(paging.previous.as_deref(), Some("/items?skip=0&limit=10"));
    assert_eq!(paging.next, None);
    assert_eq!(paging.pages, 1);
    assert_eq!(paging.current_page, 0);
}

#[test]
fn zero_limit_is_rejected() {
    assert!(matches!(compute("/items", 0, 0, 25, 0), Err(Error::ZeroLimit)));
}

#[test]
fn preserves_unrelated_query_params_in_links() {
    let paging = compute("/items?q=rust&skip=10&limit=10", 10, 10, 35, 10).unwrap();
    assert_eq!(
        paging.next.as_deref(),
        Some("/items?q=rust&skip=20&limit=10")
    );
    assert_eq!(
        paging.previous.as_deref(),
        Some("/items?q=rust&skip=0&limit=10")
    );
    assert_eq!(paging.first, "/items?q=rust&skip=0&limit=10");
    assert_eq!(paging.last, "/items?q=rust&skip=25&limit=10");
}
