//! Offset/limit paging metadata for JSON list endpoints.
//!
//! Given the request URI and the `skip`/`limit` window of the current page,
//! [`compute`] derives first/last/previous/next links by rewriting the
//! query string, plus page counts. Pure and transport-agnostic.

mod links;
mod page;

pub use links::with_paging_params;
pub use page::{PageParams, Paging};

/// Query parameter holding the zero-based record offset.
pub const PARAM_SKIP: &str = "skip";
/// Query parameter holding the maximum number of records per page.
pub const PARAM_LIMIT: &str = "limit";

/// Offset applied when the request carries no `skip` parameter.
pub const DEFAULT_SKIP: u64 = 0;
/// Page size applied when the request carries no `limit` parameter.
pub const DEFAULT_LIMIT: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("limit must be greater than zero")]
    ZeroLimit,
}

/// A `[skip, limit]` slice of the record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    skip: u64,
    limit: u64,
}

/// Compute paging metadata for one page of a record set.
///
/// `request_uri` is the path-and-query of the current request and serves as
/// the base for all rewritten links. `records` is the total count across all
/// pages, `records_on_page` the count actually returned for this page.
///
/// Returns [`Error::ZeroLimit`] when `limit` is zero.
pub fn compute(
    request_uri: &str,
    skip: u64,
    limit: u64,
    records: u64,
    records_on_page: u64,
) -> Result<Paging, Error> {
    if limit == 0 {
        return Err(Error::ZeroLimit);
    }

    let previous = previous_window(skip, limit, records);
    let next = next_window(skip, limit, records);

    let pages = records.div_ceil(limit);
    let current_page = if skip >= records {
        0
    } else {
        pages - (records - skip).div_ceil(limit) + 1
    };

    let last = if current_page == pages {
        // The current request already addresses the last window.
        request_uri.to_owned()
    } else {
        with_paging_params(request_uri, records.saturating_sub(limit), limit)
    };

    Ok(Paging {
        first: with_paging_params(request_uri, 0, limit),
        last,
        previous: previous.map(|w| with_paging_params(request_uri, w.skip, w.limit)),
        next: next.map(|w| with_paging_params(request_uri, w.skip, w.limit)),
        total_records: records,
        records_on_page,
        pages,
        current_page,
    })
}

fn previous_window(skip: u64, limit: u64, records: u64) -> Option<Window> {
    if skip == 0 {
        None
    } else if skip > records {
        // The offset ran past the data set; the previous page is the last
        // real window.
        Some(Window {
            skip: records.saturating_sub(limit),
            limit,
        })
    } else if limit > skip {
        // A short first page covering everything before the current offset.
        Some(Window {
            skip: 0,
            limit: skip,
        })
    } else {
        Some(Window {
            skip: skip - limit,
            limit,
        })
    }
}

fn next_window(skip: u64, limit: u64, records: u64) -> Option<Window> {
    // skip comes straight off the query string, so the sum may not fit.
    match skip.checked_add(limit) {
        Some(end) if end < records => Some(Window { skip: end, limit }),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
