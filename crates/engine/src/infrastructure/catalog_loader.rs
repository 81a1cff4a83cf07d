//! Reading hero and sourcebook documents from disk.

use std::fs;
use std::path::{Path, PathBuf};

use herobldr_domain::{Hero, Sourcebook};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_hero(path: &Path) -> Result<Hero, CatalogError> {
    let hero: Hero = read_json(path)?;
    tracing::info!(hero_id = %hero.id, name = %hero.name, path = %path.display(), "Loaded hero");
    Ok(hero)
}

/// Load every sourcebook, stopping at the first failure.
pub fn load_sourcebooks(paths: &[PathBuf]) -> Result<Vec<Sourcebook>, CatalogError> {
    let sourcebooks = paths
        .iter()
        .map(|path| read_json::<Sourcebook>(path))
        .collect::<Result<Vec<_>, _>>()?;

    for sourcebook in &sourcebooks {
        tracing::info!(
            sourcebook_id = %sourcebook.id,
            ancestries = sourcebook.ancestries.len(),
            classes = sourcebook.classes.len(),
            perks = sourcebook.perks.len(),
            "Loaded sourcebook"
        );
    }
    Ok(sourcebooks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::fixture_path;
    use std::io::Write;

    #[test]
    fn loads_the_sample_documents() {
        let hero = load_hero(&fixture_path("hero.json")).expect("hero");
        assert_eq!(hero.name, "Korva");

        let books = load_sourcebooks(&[fixture_path("sourcebook.json")]).expect("sourcebooks");
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, "sample");
    }

    #[test]
    fn missing_files_are_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope.json");

        match load_hero(&path) {
            Err(CatalogError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("unexpected result: {:?}", other.map(|h| h.id)),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "{{ \"id\": \"broken\"").expect("write");

        let err = load_sourcebooks(&[file.path().to_path_buf()]).expect_err("should fail");
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert!(err.to_string().starts_with("Failed to parse"));
    }

    #[test]
    fn sourcebooks_keep_their_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut paths = Vec::new();
        for id in ["first", "second"] {
            let path = dir.path().join(format!("{}.json", id));
            fs::write(&path, format!("{{\"id\": \"{}\", \"name\": \"{}\"}}", id, id)).expect("write");
            paths.push(path);
        }

        let books = load_sourcebooks(&paths).expect("sourcebooks");
        let ids: Vec<&str> = books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }
}
