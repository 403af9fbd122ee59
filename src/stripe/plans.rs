use crate::client::StripeClient;
use crate::resource::Resource;
use crate::transport::BlockingTransport;
use crate::types::Plan;

/// `plans` and `plans/{id}`.
pub type Plans<'c, T = BlockingTransport> = Resource<'c, Plan, T>;

impl<T> StripeClient<T> {
    pub fn plans(&self) -> Plans<'_, T> {
        self.resource::<Plan>()
    }
}
