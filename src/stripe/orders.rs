use crate::client::StripeClient;
use crate::error::StripeError;
use crate::params::{encode, Params};
use crate::resource::Resource;
use crate::transport::{AsyncTransport, BlockingTransport, Transport};
use crate::types::{Order, OrderReturn};
use reqwest::Method;

/// `orders`, `orders/{id}`, `orders/{id}/pay` and `orders/{id}/returns`.
pub type Orders<'c, T = BlockingTransport> = Resource<'c, Order, T>;

impl<T> StripeClient<T> {
    pub fn orders(&self) -> Orders<'_, T> {
        self.resource::<Order>()
    }
}

impl<T: Transport> Orders<'_, T> {
    /// Pays an order with a source or customer given in `params`.
    pub fn pay(&self, id: &str, params: &Params) -> Result<Order, StripeError> {
        self.client().request(
            Method::POST,
            &format!("{}/pay", self.item_path(id)),
            self.api_key(),
            encode(params),
        )
    }

    /// Returns all or some of the items of a paid order.
    pub fn return_order(&self, id: &str, params: &Params) -> Result<OrderReturn, StripeError> {
        self.client().request(
            Method::POST,
            &format!("{}/returns", self.item_path(id)),
            self.api_key(),
            encode(params),
        )
    }
}

impl<T: AsyncTransport> Orders<'_, T> {
    pub async fn async_pay(&self, id: &str, params: &Params) -> Result<Order, StripeError> {
        self.client()
            .async_request(
                Method::POST,
                &format!("{}/pay", self.item_path(id)),
                self.api_key(),
                encode(params),
            )
            .await
    }

    pub async fn async_return_order(&self, id: &str, params: &Params) -> Result<OrderReturn, StripeError> {
        self.client()
            .async_request(
                Method::POST,
                &format!("{}/returns", self.item_path(id)),
                self.api_key(),
                encode(params),
            )
            .await
    }
}
