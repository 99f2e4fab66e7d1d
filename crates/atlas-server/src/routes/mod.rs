mod capitals;
mod countries;
mod health;
pub mod params;
mod statistics;

pub use capitals::capital_routes;
pub use countries::country_routes;
pub use health::health_routes;
pub use statistics::statistics_routes;
