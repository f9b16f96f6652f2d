mod currency;
mod query;

pub use currency::format_currency;
pub use query::QueryParams;
