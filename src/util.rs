//! Generic list, count and bulk helpers shared by every resource.
//!
//! `all` walks Stripe's cursor pagination to the end: each page is
//! requested with `starting_after` set to the id of the last item of the
//! page before, until a page reports `has_more: false`. `count` and
//! `delete_all` are built on top of it, so both cost one request per 100
//! upstream objects.

use crate::client::StripeClient;
use crate::error::{BulkError, DeleteReport, StripeError};
use crate::params::{item_path, page_query};
use crate::response::{Deleted, Object, Page};
use crate::transport::{AsyncTransport, Transport};
use log::{debug, info, warn};
use reqwest::Method;
use serde_json::Value;
use std::marker::PhantomData;

/// Largest page Stripe serves.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Cursor state of one pagination walk.
#[derive(Debug, Clone, Default)]
struct Walk {
    cursor: String,
    pages: usize,
    done: bool,
    truncated: bool,
}

impl Walk {
    fn advance<R: Object>(&mut self, page: &Page<R>) {
        self.pages += 1;
        match (page.has_more, page.cursor()) {
            (true, Some(id)) => self.cursor = id.to_string(),
            (true, None) if !page.is_empty() => {
                warn!(
                    "page {} has more results but its last object has no id; stopping, results are incomplete",
                    self.pages
                );
                self.truncated = true;
                self.done = true;
            }
            _ => self.done = true,
        }
    }
}

/// One page of `path`, starting after `cursor` (empty for the newest).
/// `limit` goes upstream untouched.
pub fn list<R: Object, T: Transport>(
    client: &StripeClient<T>,
    path: &str,
    api_key: Option<&str>,
    cursor: &str,
    limit: u32,
) -> Result<Page<R>, StripeError> {
    client.request(Method::GET, path, api_key, page_query(cursor, limit))
}

/// [`list`] without a typed shape.
pub fn list_raw<T: Transport>(
    client: &StripeClient<T>,
    path: &str,
    api_key: Option<&str>,
    cursor: &str,
    limit: u32,
) -> Result<Page<Value>, StripeError> {
    list(client, path, api_key, cursor, limit)
}

/// Lazily fetched pages of full size. Stops after the last page or after
/// the first error.
pub struct Pages<'c, R, T> {
    client: &'c StripeClient<T>,
    path: String,
    api_key: Option<String>,
    walk: Walk,
    _shape: PhantomData<fn() -> R>,
}

impl<'c, R: Object, T: Transport> Pages<'c, R, T> {
    pub fn new(client: &'c StripeClient<T>, path: &str, api_key: Option<&str>) -> Self {
        Self {
            client,
            path: path.to_string(),
            api_key: api_key.map(str::to_string),
            walk: Walk::default(),
            _shape: PhantomData,
        }
    }

    /// Cursor the next request will start after.
    pub fn cursor(&self) -> &str {
        &self.walk.cursor
    }
}

impl<R: Object, T: Transport> Iterator for Pages<'_, R, T> {
    type Item = Result<Page<R>, StripeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.walk.done {
            return None;
        }
        let result = list(
            self.client,
            &self.path,
            self.api_key.as_deref(),
            &self.walk.cursor,
            MAX_PAGE_SIZE,
        );
        match &result {
            Ok(page) => self.walk.advance(page),
            Err(_) => self.walk.done = true,
        }
        Some(result)
    }
}

/// Every object under `path`, in upstream order. Any failed page aborts
/// the whole walk.
pub fn all<R: Object, T: Transport>(
    client: &StripeClient<T>,
    path: &str,
    api_key: Option<&str>,
) -> Result<Vec<R>, BulkError> {
    let mut items = Vec::new();
    let mut pages = Pages::<R, T>::new(client, path, api_key);
    loop {
        let cursor = pages.cursor().to_string();
        match pages.next() {
            Some(Ok(page)) => items.extend(page.data),
            Some(Err(source)) => {
                return Err(BulkError::Listing {
                    fetched: items.len(),
                    cursor,
                    source,
                })
            }
            None => break,
        }
    }
    info!(
        "listed {} objects from {} in {} pages{}",
        items.len(),
        path,
        pages.walk.pages,
        if pages.walk.truncated { " (incomplete)" } else { "" }
    );
    Ok(items)
}

/// Number of objects under `path`. Stripe has no count endpoint, so this
/// pages through everything.
pub fn count<T: Transport>(
    client: &StripeClient<T>,
    path: &str,
    api_key: Option<&str>,
) -> Result<usize, BulkError> {
    all::<Value, T>(client, path, api_key).map(|items| items.len())
}

/// Lists everything under `path`, then deletes each object in turn.
/// Fails only when the listing fails; individual delete errors are logged
/// and collected in the report.
pub fn delete_all<T: Transport>(
    client: &StripeClient<T>,
    path: &str,
    api_key: Option<&str>,
) -> Result<DeleteReport, BulkError> {
    let items = all::<Value, T>(client, path, api_key)?;
    let mut report = DeleteReport::default();
    for id in ids(&items, path) {
        let result = client.request::<Deleted>(Method::DELETE, &item_path(path, id), api_key, vec![]);
        record(&mut report, id, result);
    }
    info!(
        "deleted {} of {} objects under {}",
        report.deleted.len(),
        report.attempted(),
        path
    );
    Ok(report)
}

/// Async [`list`].
pub async fn async_list<R: Object, T: AsyncTransport>(
    client: &StripeClient<T>,
    path: &str,
    api_key: Option<&str>,
    cursor: &str,
    limit: u32,
) -> Result<Page<R>, StripeError> {
    client
        .async_request(Method::GET, path, api_key, page_query(cursor, limit))
        .await
}

/// Async [`list_raw`].
pub async fn async_list_raw<T: AsyncTransport>(
    client: &StripeClient<T>,
    path: &str,
    api_key: Option<&str>,
    cursor: &str,
    limit: u32,
) -> Result<Page<Value>, StripeError> {
    async_list(client, path, api_key, cursor, limit).await
}

/// Async [`all`].
pub async fn async_all<R: Object, T: AsyncTransport>(
    client: &StripeClient<T>,
    path: &str,
    api_key: Option<&str>,
) -> Result<Vec<R>, BulkError> {
    let mut items = Vec::new();
    let mut walk = Walk::default();
    while !walk.done {
        let result = async_list::<R, T>(client, path, api_key, &walk.cursor, MAX_PAGE_SIZE).await;
        match result {
            Ok(page) => {
                walk.advance(&page);
                items.extend(page.data);
            }
            Err(source) => {
                return Err(BulkError::Listing {
                    fetched: items.len(),
                    cursor: walk.cursor,
                    source,
                })
            }
        }
    }
    info!(
        "listed {} objects from {} in {} pages{}",
        items.len(),
        path,
        walk.pages,
        if walk.truncated { " (incomplete)" } else { "" }
    );
    Ok(items)
}

/// Async [`count`].
pub async fn async_count<T: AsyncTransport>(
    client: &StripeClient<T>,
    path: &str,
    api_key: Option<&str>,
) -> Result<usize, BulkError> {
    async_all::<Value, T>(client, path, api_key)
        .await
        .map(|items| items.len())
}

/// Async [`delete_all`].
pub async fn async_delete_all<T: AsyncTransport>(
    client: &StripeClient<T>,
    path: &str,
    api_key: Option<&str>,
) -> Result<DeleteReport, BulkError> {
    let items = async_all::<Value, T>(client, path, api_key).await?;
    let mut report = DeleteReport::default();
    for id in ids(&items, path) {
        let result = client
            .async_request::<Deleted>(Method::DELETE, &item_path(path, id), api_key, vec![])
            .await;
        record(&mut report, id, result);
    }
    info!(
        "deleted {} of {} objects under {}",
        report.deleted.len(),
        report.attempted(),
        path
    );
    Ok(report)
}

fn ids<'a>(items: &'a [Value], path: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    items.iter().filter_map(move |item| {
        let id = item.id();
        if id.is_none() {
            warn!("skipping object without id under {}", path);
        }
        id
    })
}

fn record(report: &mut DeleteReport, id: &str, result: Result<Deleted, StripeError>) {
    match result {
        Ok(deleted) => {
            debug!("deleted {}", deleted.id);
            report.deleted.push(id.to_string());
        }
        Err(err) => {
            warn!("delete of {} failed, continuing: {}", id, err);
            report.failed.push((id.to_string(), err));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::transport::stub::StubTransport;
    use serde_json::json;

    fn page(prefix: &str, size: usize, has_more: bool) -> Value {
        let data: Vec<Value> = (0..size)
            .map(|i| json!({"id": format!("{}_{}", prefix, i), "object": "coupon"}))
            .collect();
        json!({"object": "list", "url": "/v1/coupons", "has_more": has_more, "data": data})
    }

    fn not_found(id: &str) -> Value {
        json!({"error": {
            "type": "invalid_request_error",
            "message": format!("No such coupon: '{}'", id),
            "code": "resource_missing"
        }})
    }

    fn client(stub: StubTransport) -> StripeClient<StubTransport> {
        StripeClient::with_transport(Config::new().with_api_key("sk_test_default"), stub)
    }

    fn three_pages() -> StubTransport {
        StubTransport::new()
            .reply(200, page("p1", 100, true))
            .reply(200, page("p2", 100, true))
            .reply(200, page("p3", 37, false))
    }

    #[test]
    fn all_walks_every_page_with_the_previous_last_id() {
        let client = client(three_pages());
        let items: Vec<Value> = all(&client, "coupons", None).unwrap();

        assert_eq!(items.len(), 237);
        assert_eq!(items[0]["id"], "p1_0");
        assert_eq!(items[236]["id"], "p3_36");

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(StubTransport::param(&requests[0], "starting_after"), None);
        assert_eq!(StubTransport::param(&requests[1], "starting_after"), Some("p1_99"));
        assert_eq!(StubTransport::param(&requests[2], "starting_after"), Some("p2_99"));
        for request in &requests {
            assert_eq!(request.method, Method::GET);
            assert_eq!(request.path, "coupons");
            assert_eq!(StubTransport::param(request, "limit"), Some("100"));
        }
    }

    #[test]
    fn count_is_the_length_of_the_full_walk() {
        let client = client(three_pages());
        assert_eq!(count(&client, "coupons", None).unwrap(), 237);
        assert_eq!(client.transport().requests().len(), 3);
    }

    #[test]
    fn failed_page_aborts_without_partial_results() {
        let client = client(
            StubTransport::new()
                .reply(200, page("p1", 100, true))
                .reply(500, json!({"error": {"type": "api_error", "message": "boom"}})),
        );
        let err = all::<Value, _>(&client, "coupons", None).unwrap_err();
        let BulkError::Listing { fetched, cursor, source } = err;
        assert_eq!(fetched, 100);
        assert_eq!(cursor, "p1_99");
        assert_eq!(source.api_error().map(|e| e.status), Some(500));
        assert_eq!(client.transport().requests().len(), 2);
    }

    #[test]
    fn has_more_on_an_empty_page_ends_the_walk() {
        let client = client(StubTransport::new().reply(200, page("p", 0, true)));
        let items: Vec<Value> = all(&client, "coupons", None).unwrap();
        assert!(items.is_empty());
        assert_eq!(client.transport().requests().len(), 1);
    }

    #[test]
    fn last_object_without_id_stops_the_walk_as_truncated() {
        let mut walk = Walk::default();
        let page: Page<Value> = serde_json::from_value(json!({
            "has_more": true,
            "data": [{"id": "a"}, {"object": "coupon"}]
        }))
        .unwrap();
        walk.advance(&page);
        assert!(walk.done);
        assert!(walk.truncated);

        let mut empty = Walk::default();
        empty.advance(&serde_json::from_value::<Page<Value>>(json!({"has_more": true, "data": []})).unwrap());
        assert!(empty.done);
        assert!(!empty.truncated);
    }

    #[test]
    fn pages_are_fetched_lazily() {
        let client = client(three_pages());
        let mut pages = Pages::<Value, _>::new(&client, "coupons", None);
        let first = pages.next().unwrap().unwrap();
        assert_eq!(first.len(), 100);
        assert_eq!(client.transport().requests().len(), 1);
        assert_eq!(pages.cursor(), "p1_99");
        assert_eq!(pages.count(), 2);
    }

    #[test]
    fn delete_all_keeps_going_past_a_failed_delete() {
        let client = client(
            StubTransport::new()
                .reply(200, page("cp", 3, false))
                .reply(200, json!({"id": "cp_0", "object": "coupon", "deleted": true}))
                .reply(404, not_found("cp_1"))
                .reply(200, json!({"id": "cp_2", "object": "coupon", "deleted": true})),
        );
        let report = delete_all(&client, "coupons", None).unwrap();

        assert_eq!(report.deleted, vec!["cp_0".to_string(), "cp_2".to_string()]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "cp_1");
        assert!(!report.is_complete());

        let paths: Vec<(Method, String)> = client
            .transport()
            .requests()
            .into_iter()
            .map(|r| (r.method, r.path))
            .collect();
        assert_eq!(
            paths,
            vec![
                (Method::GET, "coupons".to_string()),
                (Method::DELETE, "coupons/cp_0".to_string()),
                (Method::DELETE, "coupons/cp_1".to_string()),
                (Method::DELETE, "coupons/cp_2".to_string()),
            ]
        );
    }

    #[test]
    fn delete_all_fails_loudly_when_the_listing_fails() {
        let client = client(StubTransport::new().fail("connection refused"));
        let err = delete_all(&client, "coupons", None).unwrap_err();
        assert!(err.source_error().is_transport());
        assert_eq!(client.transport().requests().len(), 1);
    }

    #[test]
    fn list_forwards_zero_limit_untouched() {
        let client = client(StubTransport::new().reply(200, page("p", 0, false)));
        let page = list_raw(&client, "coupons", None, "", 0).unwrap();
        assert!(page.is_empty());
        let request = &client.transport().requests()[0];
        assert_eq!(StubTransport::param(request, "limit"), Some("0"));
    }
}
