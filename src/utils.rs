use anyhow::Context;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Helper function to write a file that logs the path of the file in case of an error.
pub fn write_file(path: &Path, content: &str) -> Result<(), anyhow::Error> {
    let file = create_file(path)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .context(format!("Can't write to file at {}", path.display()))?;
    writer
        .flush()
        .context(format!("Can't flush file at {}", path.display()))?;
    Ok(())
}

/// Helper function to create a file that logs the path of the file in case of an error.
pub fn create_file(path: &Path) -> Result<File, anyhow::Error> {
    let file = File::create(path).context(format!("Can't create file at {}", path.display()))?;
    Ok(file)
}
