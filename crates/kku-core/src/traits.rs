use crate::error::GatewayError;
use async_trait::async_trait;

/// Per-client key/value storage, the server-side stand-in for a browser's
/// `localStorage`.
///
/// Values are opaque strings (JSON snapshots in practice). Every backend
/// (SQLite, in-memory) implements this trait so services stay storage-agnostic.
#[async_trait]
pub trait LocalStorage: Send + Sync {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Read the value stored under `key` for `client`, if any.
    async fn get_item(&self, client: &str, key: &str) -> Result<Option<String>, GatewayError>;

    /// Write (replace) the value under `key` for `client`.
    async fn set_item(&self, client: &str, key: &str, value: &str) -> Result<(), GatewayError>;

    /// Remove the value under `key`. Returns `true` if something was removed.
    async fn remove_item(&self, client: &str, key: &str) -> Result<bool, GatewayError>;
}
