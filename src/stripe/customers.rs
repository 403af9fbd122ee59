use crate::client::StripeClient;
use crate::resource::Resource;
use crate::transport::BlockingTransport;
use crate::types::Customer;

/// `customers` and `customers/{id}`.
pub type Customers<'c, T = BlockingTransport> = Resource<'c, Customer, T>;

impl<T> StripeClient<T> {
    pub fn customers(&self) -> Customers<'_, T> {
        self.resource::<Customer>()
    }
}
