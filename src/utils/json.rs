use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::convert::AsRef;
use std::fs::OpenOptions;
use std::io::BufReader;
use std::path::Path;

pub fn load_from_file<T: DeserializeOwned, P: AsRef<Path>>(
    path: P,
) -> Result<T> {
    let file = OpenOptions::new().read(true).open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

pub fn save_to_file<T: Serialize, P: AsRef<Path>>(
    value: &T,
    path: P,
) -> Result<()> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;
    Ok(serde_json::to_writer(file, value)?)
}

pub fn save_to_file_pretty<T: Serialize, P: AsRef<Path>>(
    value: &T,
    path: P,
) -> Result<()> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;
    Ok(serde_json::to_writer_pretty(file, value)?)
}
