//! Typed facades, one per Stripe resource. Each is an alias of
//! [`Resource`](crate::resource::Resource) plus whatever endpoints only
//! that resource has.

pub mod coupons;
pub mod customers;
pub mod orders;
pub mod plans;
pub mod products;
pub mod skus;

pub use coupons::Coupons;
pub use customers::Customers;
pub use orders::Orders;
pub use plans::Plans;
pub use products::Products;
pub use skus::Skus;
