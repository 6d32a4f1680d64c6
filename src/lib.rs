// Library for consumers and tests to access modules

pub mod config;
pub mod host_query;
pub mod models;
pub mod monitors;
pub mod rate;
pub mod version;
pub mod worker;
