use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::interface::Ui;
use crate::interface::messages::DATA_FOLDER_NOT_FOUND;

/// Create the file, and its parent directory, if either is missing.
pub fn ensure_file_exists(path: &Path, ui: &mut dyn Ui) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            info!(dir = %parent.display(), "creating data directory");
            fs::create_dir_all(parent)?;
            ui.show(DATA_FOLDER_NOT_FOUND);
        }
    }

    if !path.exists() {
        info!(file = %path.display(), "creating empty save file");
        fs::write(path, "")?;
    }
    Ok(())
}

/// Read every line of a text file, creating it first if needed.
///
/// Bytes that are not valid UTF-8 become U+FFFD, so a damaged line is left
/// for the decoder to reject instead of failing the whole read.
pub fn read_lines(path: &Path, ui: &mut dyn Ui) -> Result<Vec<String>> {
    ensure_file_exists(path, ui)?;
    let bytes = fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    debug!(file = %path.display(), lines = lines.len(), "read save file");
    Ok(lines)
}

/// Replace the file's content with `lines`, one per line.
pub fn overwrite_file(path: &Path, lines: &[String], ui: &mut dyn Ui) -> Result<()> {
    ensure_file_exists(path, ui)?;
    let mut content = String::new();
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    fs::write(path, content)?;
    debug!(file = %path.display(), lines = lines.len(), "wrote save file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::MemoryUi;
    use tempfile::tempdir;

    #[test]
    fn test_read_missing_file_creates_it_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("menu.txt");
        let mut ui = MemoryUi::new();

        let lines = read_lines(&path, &mut ui).unwrap();
        assert!(lines.is_empty());
        assert!(path.exists());
        assert!(ui.contains(DATA_FOLDER_NOT_FOUND));
    }

    #[test]
    fn test_overwrite_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("orders.txt");
        let mut ui = MemoryUi::new();

        overwrite_file(&path, &["a".to_string(), "b".to_string()], &mut ui).unwrap();
        overwrite_file(&path, &["c".to_string()], &mut ui).unwrap();
        assert_eq!(read_lines(&path, &mut ui).unwrap(), vec!["c".to_string()]);
    }

    #[test]
    fn test_invalid_utf8_only_damages_its_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pantry_stock.txt");
        fs::write(&path, b"Rice | 200 | g\nBad\xff | 1 | g\n").unwrap();
        let mut ui = MemoryUi::new();

        let lines = read_lines(&path, &mut ui).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Rice | 200 | g");
        assert_eq!(lines[1], "Bad\u{FFFD} | 1 | g");
    }
}
