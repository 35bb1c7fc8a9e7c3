use std::{fs::File, io::Write, path::Path};

use serde::Serialize;

use super::errors::PlotError;

pub fn print<T: Serialize + ?Sized>(item: &T, path: &Path) -> Result<(), PlotError> {
    let mut file = File::create(path)?;
    let json = serde_json::to_string_pretty(&item)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}
