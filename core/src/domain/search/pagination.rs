//! Total-count resolution for paged searches.
//!
//! A page that starts at offset zero and comes back shorter than the page size
//! already holds every matching row, so its total is known without a count query.

use std::future::Future;

use tracing::debug;

use crate::domain::{
    common::entities::app_errors::CoreError,
    search::value_objects::{OffsetLimit, Paginated},
};

/// Returns `true` when the total cannot be derived from the fetched content.
pub fn requires_count(page: &OffsetLimit, content_len: usize) -> bool {
    !(page.offset == 0 && (content_len as i64) < page.limit)
}

/// Builds a page, running `count` only when [`requires_count`] says so.
pub async fn paginate_with_deferred_count<T, F, Fut>(
    items: Vec<T>,
    page: &OffsetLimit,
    count: F,
) -> Result<Paginated<T>, CoreError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<u64, CoreError>>,
{
    let count = if requires_count(page, items.len()) {
        count().await? as i64
    } else {
        let total = page.offset + items.len() as i64;
        debug!(total, "short first page, count query skipped");
        total
    };

    Ok(Paginated {
        items,
        offset: page.offset,
        limit: page.limit,
        count,
    })
}
