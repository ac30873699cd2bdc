//! Default value functions used by serde for config deserialization.

pub fn default_name() -> String {
    "KKU Global Gateway".to_string()
}

pub fn default_data_dir() -> String {
    "~/.kku-gateway".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

pub fn default_port() -> u16 {
    3001
}

pub fn default_body_limit() -> usize {
    64 * 1024
}

pub fn default_storage_backend() -> String {
    "sqlite".to_string()
}

pub fn default_db_path() -> String {
    "~/.kku-gateway/data/local.db".to_string()
}

pub fn default_reply_delay_min() -> u64 {
    1000
}

pub fn default_reply_delay_max() -> u64 {
    2000
}

pub fn default_max_sessions() -> usize {
    1000
}

pub fn default_session_idle_secs() -> u64 {
    1800
}
