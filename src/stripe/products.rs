use crate::client::StripeClient;
use crate::resource::Resource;
use crate::transport::BlockingTransport;
use crate::types::Product;

/// `products` and `products/{id}`.
pub type Products<'c, T = BlockingTransport> = Resource<'c, Product, T>;

impl<T> StripeClient<T> {
    pub fn products(&self) -> Products<'_, T> {
        self.resource::<Product>()
    }
}
