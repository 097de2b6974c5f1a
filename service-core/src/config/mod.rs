use crate::error::AppError;
use config::{Config as Cfg, Environment};
use serde::de::DeserializeOwned;

/// Deserialize `T` from environment variables sharing `prefix`.
///
/// `.env` is loaded first when present. Keys are matched after the prefix and
/// a single `_`, so with prefix `MONGO` the variable `MONGO_HOST` fills a field
/// named `host`. Fields absent from the environment fall back to their serde
/// defaults.
pub fn load_env<T: DeserializeOwned>(prefix: &str) -> Result<T, AppError> {
    dotenvy::dotenv().ok();

    let config = Cfg::builder()
        .add_source(Environment::with_prefix(prefix).prefix_separator("_"))
        .build()?;

    Ok(config.try_deserialize()?)
}
