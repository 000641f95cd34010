use super::catalog::Catalog;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TermsError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("No terms found in {0}")]
    Empty(String),
}

/// Reads a catalog from a JSON array of strings.
pub fn load_terms_file(path: &Path) -> Result<Catalog, TermsError> {
    let shown = path.display().to_string();
    let body = std::fs::read_to_string(path).map_err(|source| TermsError::Io {
        path: shown.clone(),
        source,
    })?;
    let terms: Vec<String> = serde_json::from_str(&body).map_err(|source| TermsError::Parse {
        path: shown.clone(),
        source,
    })?;

    let catalog = Catalog::from_terms(terms);
    if catalog.is_empty() {
        return Err(TermsError::Empty(shown));
    }
    tracing::info!(path = %shown, terms = catalog.len(), "loaded term file");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_tmp(body: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(body.as_bytes()).unwrap();
        f
    }

    #[test]
    fn loads_json_array() {
        let f = write_tmp(r#"["Kiwano", "Rambutan", "Kiwano"]"#);
        let c = load_terms_file(f.path()).unwrap();
        assert_eq!(c.iter().collect::<Vec<_>>(), vec!["Kiwano", "Rambutan"]);
    }

    #[test]
    fn rejects_non_array() {
        let f = write_tmp(r#"{"terms": ["Fig"]}"#);
        assert!(matches!(load_terms_file(f.path()), Err(TermsError::Parse { .. })));
    }

    #[test]
    fn rejects_empty_list() {
        let f = write_tmp(r#"["", "   "]"#);
        assert!(matches!(load_terms_file(f.path()), Err(TermsError::Empty(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_terms_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, TermsError::Io { .. }));
        assert!(err.to_string().contains("nope.json"));
    }
}
