use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::saved_page::page_file_name;

#[derive(Debug, Error)]
pub enum PageStoreError {
    #[error("could not prepare page directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not list page directory {path:?}")]
    List {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not write page {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not read page {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Directory holding one rendered html file per scraped page.
#[derive(Debug, Clone)]
pub struct PageStore {
    dir: PathBuf,
}

impl PageStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        PageStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn ensure_dir(&self) -> Result<(), PageStoreError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| PageStoreError::CreateDir {
                path: self.dir.clone(),
                source,
            })
    }

    /// Writes the page under a name derived from its title, replacing any page
    /// saved earlier with the same title.
    pub async fn save_page(&self, title: &str, html: &str) -> Result<PathBuf, PageStoreError> {
        let path = self.dir.join(page_file_name(title));

        tokio::fs::write(&path, html)
            .await
            .map_err(|source| PageStoreError::Write {
                path: path.clone(),
                source,
            })?;

        Ok(path)
    }

    /// Every regular file in the directory, whatever its extension, sorted by path.
    pub async fn list_pages(&self) -> Result<Vec<PathBuf>, PageStoreError> {
        let list_err = |source| PageStoreError::List {
            path: self.dir.clone(),
            source,
        };

        let mut entries = tokio::fs::read_dir(&self.dir).await.map_err(list_err)?;
        let mut pages = vec![];

        while let Some(entry) = entries.next_entry().await.map_err(list_err)? {
            let path = entry.path();
            match tokio::fs::metadata(&path).await {
                Ok(meta) if meta.is_file() => pages.push(path),
                Ok(_) => {}
                Err(e) => log::warn!("Skipping {:?}, could not stat it: {:?}", path, e),
            }
        }

        pages.sort();
        Ok(pages)
    }

    pub async fn read_page(&self, path: &Path) -> Result<String, PageStoreError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| PageStoreError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::PageStore;

    #[tokio::test]
    async fn save_page_uses_title_as_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = PageStore::new(dir.path());

        let path = store
            .save_page("Acme Solar GmbH", "<html></html>")
            .await
            .unwrap();

        assert_eq!(path, dir.path().join("Acme_Solar_GmbH.html"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "<html></html>");
    }

    #[tokio::test]
    async fn save_page_overwrites_same_title() {
        let dir = tempfile::tempdir().unwrap();
        let store = PageStore::new(dir.path());

        store.save_page("Acme", "first").await.unwrap();
        let path = store.save_page("Acme", "second").await.unwrap();

        assert_eq!(store.list_pages().await.unwrap().len(), 1);
        assert_eq!(store.read_page(&path).await.unwrap(), "second");
    }

    #[tokio::test]
    async fn list_pages_returns_regular_files_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.html"), "b").unwrap();
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let store = PageStore::new(dir.path());
        let pages = store.list_pages().await.unwrap();

        assert_eq!(
            pages,
            vec![dir.path().join("a.txt"), dir.path().join("b.html")]
        );
    }

    #[tokio::test]
    async fn read_page_replaces_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, [b'o', b'k', 0xff]).unwrap();

        let store = PageStore::new(dir.path());

        assert_eq!(store.read_page(&path).await.unwrap(), "ok\u{fffd}");
    }

    #[tokio::test]
    async fn list_pages_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = PageStore::new(dir.path().join("missing"));

        assert!(store.list_pages().await.is_err());
    }
}
