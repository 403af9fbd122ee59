use crate::client::StripeClient;
use crate::resource::Resource;
use crate::transport::BlockingTransport;
use crate::types::Sku;

/// `skus` and `skus/{id}`.
pub type Skus<'c, T = BlockingTransport> = Resource<'c, Sku, T>;

impl<T> StripeClient<T> {
    pub fn skus(&self) -> Skus<'_, T> {
        self.resource::<Sku>()
    }
}
