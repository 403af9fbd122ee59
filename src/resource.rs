//! One client type for every resource, parameterized by base path and
//! response shape. The per-resource facades in [`crate::stripe`] are
//! aliases of it.

use crate::client::StripeClient;
use crate::error::{BulkError, DeleteReport, StripeError};
use crate::params::{encode, item_path, Params};
use crate::response::{Deleted, Object, Page};
use crate::transport::{AsyncTransport, Transport};
use crate::util::{self, Pages};
use reqwest::Method;
use serde_json::Value;
use std::marker::PhantomData;

pub struct Resource<'c, R, T> {
    client: &'c StripeClient<T>,
    path: &'static str,
    api_key: Option<&'c str>,
    _shape: PhantomData<fn() -> R>,
}

// Derives would demand R: Clone and T: Clone.
impl<R, T> Clone for Resource<'_, R, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, T> Copy for Resource<'_, R, T> {}

impl<'c, R, T> Resource<'c, R, T> {
    pub fn new(client: &'c StripeClient<T>, path: &'static str) -> Self {
        Self {
            client,
            path,
            api_key: None,
            _shape: PhantomData,
        }
    }

    /// Same resource, but every call authenticates with `api_key` instead
    /// of the client's configured key. Used to act on behalf of connected
    /// accounts.
    pub fn with_key(self, api_key: &'c str) -> Self {
        Self {
            api_key: Some(api_key),
            ..self
        }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn api_key(&self) -> Option<&'c str> {
        self.api_key
    }

    pub fn client(&self) -> &'c StripeClient<T> {
        self.client
    }

    pub(crate) fn item_path(&self, id: &str) -> String {
        item_path(self.path, id)
    }
}

impl<'c, R: Object, T: Transport> Resource<'c, R, T> {
    /// `POST <base>`
    pub fn create(&self, params: &Params) -> Result<R, StripeError> {
        self.client
            .request(Method::POST, self.path, self.api_key, encode(params))
    }

    /// `GET <base>/<id>`
    pub fn get(&self, id: &str) -> Result<R, StripeError> {
        self.client
            .request(Method::GET, &self.item_path(id), self.api_key, vec![])
    }

    /// `POST <base>/<id>` with a partial parameter set.
    pub fn update(&self, id: &str, params: &Params) -> Result<R, StripeError> {
        self.client
            .request(Method::POST, &self.item_path(id), self.api_key, encode(params))
    }

    /// `DELETE <base>/<id>`
    pub fn delete(&self, id: &str) -> Result<Deleted, StripeError> {
        self.client
            .request(Method::DELETE, &self.item_path(id), self.api_key, vec![])
    }

    pub fn list(&self, cursor: &str, limit: u32) -> Result<Page<R>, StripeError> {
        util::list(self.client, self.path, self.api_key, cursor, limit)
    }

    pub fn list_raw(&self, cursor: &str, limit: u32) -> Result<Page<Value>, StripeError> {
        util::list_raw(self.client, self.path, self.api_key, cursor, limit)
    }

    pub fn pages(&self) -> Pages<'c, R, T> {
        Pages::new(self.client, self.path, self.api_key)
    }

    pub fn all(&self) -> Result<Vec<R>, BulkError> {
        util::all(self.client, self.path, self.api_key)
    }

    pub fn count(&self) -> Result<usize, BulkError> {
        util::count(self.client, self.path, self.api_key)
    }

    pub fn delete_all(&self) -> Result<DeleteReport, BulkError> {
        util::delete_all(self.client, self.path, self.api_key)
    }
}

impl<'c, R: Object, T: AsyncTransport> Resource<'c, R, T> {
    pub async fn async_create(&self, params: &Params) -> Result<R, StripeError> {
        self.client
            .async_request(Method::POST, self.path, self.api_key, encode(params))
            .await
    }

    pub async fn async_get(&self, id: &str) -> Result<R, StripeError> {
        self.client
            .async_request(Method::GET, &self.item_path(id), self.api_key, vec![])
            .await
    }

    pub async fn async_update(&self, id: &str, params: &Params) -> Result<R, StripeError> {
        self.client
            .async_request(Method::POST, &self.item_path(id), self.api_key, encode(params))
            .await
    }

    pub async fn async_delete(&self, id: &str) -> Result<Deleted, StripeError> {
        self.client
            .async_request(Method::DELETE, &self.item_path(id), self.api_key, vec![])
            .await
    }

    pub async fn async_list(&self, cursor: &str, limit: u32) -> Result<Page<R>, StripeError> {
        util::async_list(self.client, self.path, self.api_key, cursor, limit).await
    }

    pub async fn async_list_raw(&self, cursor: &str, limit: u32) -> Result<Page<Value>, StripeError> {
        util::async_list_raw(self.client, self.path, self.api_key, cursor, limit).await
    }

    pub async fn async_all(&self) -> Result<Vec<R>, BulkError> {
        util::async_all(self.client, self.path, self.api_key).await
    }

    pub async fn async_count(&self) -> Result<usize, BulkError> {
        util::async_count(self.client, self.path, self.api_key).await
    }

    pub async fn async_delete_all(&self) -> Result<DeleteReport, BulkError> {
        util::async_delete_all(self.client, self.path, self.api_key).await
    }
}
