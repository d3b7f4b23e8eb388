//! Concurrent fan-out/fan-in over page-numbered listings.
//!
//! Page 1 is fetched first to learn the total. The remaining pages are then
//! requested concurrently and merged in page order, whatever order they
//! complete in.

use std::future::Future;

use futures_util::future::try_join_all;

use crate::error::{ApiError, ApiResult};

/// Upper bound on pages in one listing; a larger total is a corrupt response.
pub const MAX_PAGES: u32 = 1_000;

/// One page of a listing plus the server's total item count.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub total: u64,
    pub items: Vec<T>,
}

/// Number of pages needed for `total` items.
pub fn page_count(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return u32::from(total > 0);
    }
    u32::try_from(total.div_ceil(u64::from(page_size))).unwrap_or(u32::MAX)
}

/// Fetch every page of a listing and concatenate the items in page order.
///
/// A failure on page 1 is returned as-is. A failure on any later page is
/// returned as `ApiError::PageFailed` and the other in-flight pages are
/// dropped; no partial list is ever returned. The total is read once from
/// page 1 and not re-checked; a total needing more than `MAX_PAGES` pages
/// is rejected as `ApiError::InvalidResponse` before any fan-out.
pub async fn fetch_all_pages<T, F, Fut>(page_size: u32, fetch_page: F) -> ApiResult<Vec<T>>
where
    F: Fn(u32) -> Fut,
    Fut: Future<Output = ApiResult<Page<T>>>,
{
    let first = fetch_page(1).await?;
    let pages = page_count(first.total, page_size);
    let mut items = first.items;

    if pages <= 1 {
        return Ok(items);
    }
    if pages > MAX_PAGES {
        return Err(ApiError::InvalidResponse {
            message: format!(
                "listing total {} needs {pages} pages, limit is {MAX_PAGES}",
                first.total
            ),
        });
    }

    tracing::debug!(
        total = first.total,
        pages,
        "Fetching remaining pages concurrently"
    );

    let remaining = try_join_all((2..=pages).map(|page| {
        let request = fetch_page(page);
        async move {
            request.await.map_err(|source| ApiError::PageFailed {
                page,
                source: Box::new(source),
            })
        }
    }))
    .await?;

    for page in remaining {
        items.extend(page.items);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    fn page_of(total: u64, page: u32, len: u32) -> Page<u32> {
        Page {
            total,
            items: (0..len).map(|i| page * 1000 + i).collect(),
        }
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 50), 0);
        assert_eq!(page_count(1, 50), 1);
        assert_eq!(page_count(50, 50), 1);
        assert_eq!(page_count(51, 50), 2);
        assert_eq!(page_count(120, 50), 3);
        assert_eq!(page_count(10, 0), 1);
    }

    #[tokio::test]
    async fn test_single_page_issues_one_request() {
        let calls = Mutex::new(Vec::new());
        let items = fetch_all_pages(50, |page| {
            calls.lock().unwrap().push(page);
            async move { Ok(page_of(30, page, 30)) }
        })
        .await
        .unwrap();

        assert_eq!(items.len(), 30);
        assert_eq!(*calls.lock().unwrap(), vec![1]);
    }

    #[tokio::test]
    async fn test_merge_order_ignores_completion_order() {
        let items = fetch_all_pages(50, |page| async move {
            // Page 2 finishes last.
            if page == 2 {
                tokio::time::sleep(Duration::from_millis(40)).await;
            }
            let len = if page == 3 { 20 } else { 50 };
            Ok(page_of(120, page, len))
        })
        .await
        .unwrap();

        assert_eq!(items.len(), 120);
        assert_eq!(items[0], 1000);
        assert_eq!(items[50], 2000);
        assert_eq!(items[100], 3000);
        assert!(items[..50].iter().all(|i| i / 1000 == 1));
        assert!(items[50..100].iter().all(|i| i / 1000 == 2));
        assert!(items[100..].iter().all(|i| i / 1000 == 3));
    }

    #[tokio::test]
    async fn test_remaining_pages_are_in_flight_together() {
        let in_flight = AtomicUsize::new(0);
        let peak = AtomicUsize::new(0);

        let items = fetch_all_pages(50, |page| {
            let in_flight = &in_flight;
            let peak = &peak;
            async move {
                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(30)).await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
                Ok(page_of(150, page, 50))
            }
        })
        .await
        .unwrap();

        assert_eq!(items.len(), 150);
        assert_eq!(peak.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_oversized_total_is_rejected_before_fan_out() {
        let calls = AtomicUsize::new(0);
        let result = fetch_all_pages(50, |page| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Ok(page_of(u64::MAX, page, 50)) }
        })
        .await;

        assert!(matches!(result, Err(ApiError::InvalidResponse { .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_max_pages_total_is_accepted() {
        assert_eq!(page_count(u64::from(MAX_PAGES) * 50, 50), MAX_PAGES);
    }

    #[tokio::test]
    async fn test_later_page_failure_is_aggregate() {
        let result = fetch_all_pages(50, |page| async move {
            if page == 3 {
                Err(ApiError::ApiRequestFailed {
                    status: 500,
                    url: "page3".to_string(),
                })
            } else {
                Ok(page_of(120, page, 50))
            }
        })
        .await;

        assert!(matches!(result, Err(ApiError::PageFailed { page: 3, .. })));
    }

    #[tokio::test]
    async fn test_first_page_failure_is_not_wrapped() {
        let result: ApiResult<Vec<u32>> = fetch_all_pages(50, |_| async {
            Err(ApiError::ServerCode {
                code: -101,
                message: "not logged in".to_string(),
            })
        })
        .await;

        assert!(matches!(result, Err(ApiError::ServerCode { code: -101, .. })));
    }
}
