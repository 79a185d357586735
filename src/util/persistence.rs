use std::fs;
use std::io;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Error as SerdeError;

use crate::domain::TraderSnapshot;

pub fn load_snapshot<I>(path: impl AsRef<Path>) -> Result<TraderSnapshot<I>, SnapshotError>
where
    I: DeserializeOwned,
{
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

pub fn save_snapshot<I>(
    path: impl AsRef<Path>,
    snapshot: &TraderSnapshot<I>,
) -> Result<(), SnapshotError>
where
    I: Serialize,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
