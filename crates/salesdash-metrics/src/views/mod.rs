//! The standard report views.

mod aov;
mod category;
mod geo;
mod monthly;
mod ranking;
mod revenue;

pub use aov::{average_order_value, AverageOrderValue, AOV_LABEL, TOTAL_ORDERS_LABEL};
pub use category::CategoryRevenue;
pub use geo::GeoRevenue;
pub use monthly::{MonthlyOrders, MonthlyRevenue};
pub use ranking::{TopOrders, TopProducts};
pub use revenue::{TotalRevenue, TOTAL_REVENUE_LABEL};
