use crate::client::StripeClient;
use crate::resource::Resource;
use crate::transport::BlockingTransport;
use crate::types::Coupon;

/// `coupons` and `coupons/{id}`.
pub type Coupons<'c, T = BlockingTransport> = Resource<'c, Coupon, T>;

impl<T> StripeClient<T> {
    pub fn coupons(&self) -> Coupons<'_, T> {
        self.resource::<Coupon>()
    }
}
