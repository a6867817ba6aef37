//! I/O utility functions

use std::fs;
use std::io;
use std::path::Path;

/// Write `content` next to `path` and rename it into place, so an
/// interrupted save never leaves a truncated file behind.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    fs::write(temp_path, content)?;
    fs::rename(temp_path, path)
}
