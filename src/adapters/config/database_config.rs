use std::path::PathBuf;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct DatabaseConfig {
    pub path: PathBuf,
    pub query: String,
}
