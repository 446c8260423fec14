use std::path::PathBuf;

const ENV_DB_PATH: &str = "ENTRYBOOK_DB";
const ENV_BIND_ADDR: &str = "ENTRYBOOK_ADDR";
const ENV_BASE_URL: &str = "ENTRYBOOK_URL";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3001";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn database_path() -> PathBuf {
    env_value(ENV_DB_PATH)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("entrybook.db"))
}

pub fn bind_addr() -> String {
    env_value(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
}

pub fn base_url() -> String {
    env_value(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}
