use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedFileError {
    #[error("could not read seed file {path:?}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Reads the first column of every row of a headerless csv file.
pub fn read_seeds<P: AsRef<Path>>(path: P) -> Result<Vec<String>, SeedFileError> {
    let path = path.as_ref();
    let file_access = |source| SeedFileError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(file_access)?;

    let mut seeds = vec![];
    for result in rdr.records() {
        let row = result.map_err(file_access)?;
        if let Some(seed) = row.get(0) {
            seeds.push(seed.to_string());
        }
    }

    log::info!("Loaded {} seeds from {:?}", seeds.len(), path);
    Ok(seeds)
}
