//! Named statements split out of a `.sql` file by `-- name: <name>` headers.

use crate::error::StoreError;
use std::collections::HashMap;
use std::path::Path;

const HEADER: &str = "-- name: ";

#[derive(Clone, Debug, Default)]
pub struct NamedQueries {
    by_name: HashMap<String, String>,
}

impl NamedQueries {
    /// Split `text` into sections. Text before the first header and sections with an
    /// empty body are ignored; a repeated name keeps the last body.
    pub fn parse(text: &str) -> Self {
        let mut by_name = HashMap::new();
        for section in text.split(HEADER).skip(1) {
            let Some((name, body)) = section.split_once('\n') else {
                continue;
            };
            let name = name.trim();
            let body = body.trim();
            if name.is_empty() || body.is_empty() {
                continue;
            }
            by_name.insert(name.to_string(), body.to_string());
        }
        NamedQueries { by_name }
    }

    pub async fn load(path: &Path) -> Result<Self, StoreError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StoreError::QueryFile {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::parse(&text))
    }

    pub fn get(&self, name: &str) -> Result<&str, StoreError> {
        self.by_name
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| StoreError::UnknownQuery(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_headers() {
        let q = NamedQueries::parse(
            "-- preamble\n\n-- name: first\nSELECT 1\n\n-- name: second \nSELECT 2\nFROM t\n",
        );
        assert_eq!(q.len(), 2);
        assert_eq!(q.get("first").unwrap(), "SELECT 1");
        assert_eq!(q.get("second").unwrap(), "SELECT 2\nFROM t");
    }

    #[test]
    fn header_without_body_is_skipped() {
        let q = NamedQueries::parse("-- name: empty\n\n-- name: lonely");
        assert!(q.is_empty());
    }

    #[test]
    fn unknown_name_is_an_error() {
        let q = NamedQueries::parse("-- name: a\nSELECT 1");
        assert!(matches!(q.get("b"), Err(StoreError::UnknownQuery(n)) if n == "b"));
    }

    #[test]
    fn embedded_catalogue_has_raw_listing() {
        let q = NamedQueries::parse(include_str!("../../queries/records.sql"));
        let sql = q.get("list_records_raw").unwrap();
        assert!(sql.starts_with("SELECT id, test"));
        assert!(!sql.contains('$'));
    }

    #[tokio::test]
    async fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = NamedQueries::load(&dir.path().join("nope.sql")).await.unwrap_err();
        assert!(matches!(err, StoreError::QueryFile { .. }));
    }

    #[tokio::test]
    async fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("q.sql");
        std::fs::write(&path, "-- name: ping\nSELECT 1\n").unwrap();
        let q = NamedQueries::load(&path).await.unwrap();
        assert_eq!(q.get("ping").unwrap(), "SELECT 1");
    }
}
