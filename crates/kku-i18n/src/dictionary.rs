//! One locale's nested string table.

use kku_core::error::GatewayError;
use toml::{Table, Value};

/// A parsed translation table addressed by dotted key paths (`hero.title`).
///
/// Lookups never panic: a missing segment, a non-table parent, or a
/// non-string leaf all yield `None`.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    root: Table,
}

impl Dictionary {
    pub fn parse(source: &str) -> Result<Self, GatewayError> {
        let root: Table = toml::from_str(source)
            .map_err(|e| GatewayError::Config(format!("invalid translation table: {e}")))?;
        Ok(Self { root })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    fn node(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.root.get(segments.next()?)?;
        for segment in segments {
            current = current.as_table()?.get(segment)?;
        }
        Some(current)
    }

    /// String leaf at `path`.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.node(path)?.as_str()
    }

    /// String-array leaf at `path`. `None` if any element is not a string.
    pub fn get_list(&self, path: &str) -> Option<Vec<&str>> {
        self.node(path)?
            .as_array()?
            .iter()
            .map(Value::as_str)
            .collect()
    }

    /// Whether `path` names a leaf (string or array) in this table.
    pub fn contains(&self, path: &str) -> bool {
        matches!(self.node(path), Some(Value::String(_) | Value::Array(_)))
    }

    /// Every leaf path, sorted.
    pub fn key_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_paths(&self.root, "", &mut out);
        out.sort();
        out
    }
}

fn collect_paths(table: &Table, prefix: &str, out: &mut Vec<String>) {
    for (key, value) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Table(child) => collect_paths(child, &path, out),
            _ => out.push(path),
        }
    }
}
