pub mod coupon;
pub mod customer;
pub mod order;
pub mod plan;
pub mod product;
pub mod sku;

pub use coupon::Coupon;
pub use customer::Customer;
pub use order::{Order, OrderItem, OrderReturn, StatusTransitions};
pub use plan::Plan;
pub use product::Product;
pub use sku::{Inventory, Sku};
