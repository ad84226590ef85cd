pub mod fetch;
pub mod http_client;
pub mod models;
pub mod resolver;

pub use fetch::fetch_tee_times;
pub use models::{ResolvedTarget, TeeTimeDocument, TeeTimeRecord};
pub use resolver::resolve;
