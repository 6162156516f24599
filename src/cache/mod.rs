pub mod moka;
pub mod traits;

pub use moka::MokaCacheWrapper;
pub use traits::{CacheResult, ObjectCache};

use crate::errors::Result;
use std::sync::Arc;

/// Builds the process-wide object cache.
pub async fn create_object_cache() -> Result<Arc<dyn ObjectCache>> {
    let cache = MokaCacheWrapper::new()
        .map_err(crate::errors::ForumError::cache_connection)?;
    Ok(Arc::new(cache))
}
