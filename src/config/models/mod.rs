//! Configuration data models

pub mod client;
pub mod query;

pub use client::*;
pub use query::*;

/// Default base URL of the buyers API
pub fn default_base_url() -> String {
    "https://services.b2list.com".to_string()
}

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default connect timeout in seconds
pub fn default_connect_timeout() -> u64 {
    10
}

/// Page size of the buyers API; page counts are computed against it
pub const PAGE_SIZE: u32 = 100;

/// Page size sent with every query
pub fn default_page_size() -> u32 {
    PAGE_SIZE
}

/// Hard cap on pages fetched for a single pair
pub fn default_max_pages() -> u32 {
    1000
}
