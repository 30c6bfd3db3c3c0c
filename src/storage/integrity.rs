//! Checksum line handling for save files.
//!
//! Every save file ends with one line holding a signed decimal checksum of
//! the lines before it. The checksum only has to be stable between a save and
//! the next load; it is not a security measure.

use tracing::warn;
use xxhash_rust::xxh3::xxh3_64;

use crate::interface::Ui;
use crate::interface::messages::{
    HASH_STRING_TAMPERED, SAVE_FILE_FORMAT_MENU, SAVE_FILE_FORMAT_ORDERS,
    SAVE_FILE_FORMAT_PANTRY_STOCK, SAVE_FILE_TAMPER_DETECTED,
};

use super::SaveFile;

/// Separator used to join content lines before hashing.
const CHECKSUM_JOIN: &str = ", ";

/// Outcome of checking a file's trailing checksum line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Integrity {
    Intact,
    /// Checksum missing, malformed, or not matching the content.
    Tampered,
    /// Checksum line looked numeric but could not be read as one.
    HashStringTampered,
}

/// Checksum of the given content lines.
pub fn checksum(lines: &[String]) -> i64 {
    let joined = lines.join(CHECKSUM_JOIN);
    xxh3_64(joined.trim().as_bytes()) as i64
}

/// Append the checksum line to freshly encoded content.
pub fn append_checksum(mut lines: Vec<String>) -> Vec<String> {
    let sum = checksum(&lines);
    lines.push(sum.to_string());
    lines
}

/// A (possibly negative) run of decimal digits that is not two or more zeros.
fn is_well_formed(hash: &str) -> bool {
    let digits = hash.strip_prefix('-').unwrap_or(hash);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    !(hash.len() >= 2 && hash.bytes().all(|b| b == b'0'))
}

/// Check the trailing checksum line of a loaded file.
///
/// The checksum line is removed only when it could be read as a number; a
/// malformed line stays in place and is left to the decoder. An empty file is
/// intact.
pub fn verify_and_strip(lines: &mut Vec<String>) -> Integrity {
    let Some(last) = lines.last() else {
        return Integrity::Intact;
    };

    if !is_well_formed(last) {
        return Integrity::Tampered;
    }

    let stored: i64 = match last.parse() {
        Ok(value) => value,
        Err(_) => return Integrity::HashStringTampered,
    };
    lines.pop();

    if checksum(lines) == stored {
        Integrity::Intact
    } else {
        Integrity::Tampered
    }
}

/// Per-file tamper state, reported to the user once and then cleared.
#[derive(Debug, Default)]
pub struct TamperFlags {
    menu: bool,
    pantry_stock: bool,
    orders: bool,
    hash_string: bool,
    notice_shown: bool,
}

impl TamperFlags {
    pub fn raise(&mut self, file: SaveFile, integrity: Integrity) {
        if integrity == Integrity::Intact {
            return;
        }
        warn!(file = file.label(), ?integrity, "save file tampered");
        match file {
            SaveFile::Menu => self.menu = true,
            SaveFile::PantryStock => self.pantry_stock = true,
            SaveFile::Orders => self.orders = true,
        }
        if integrity == Integrity::HashStringTampered {
            self.hash_string = true;
        }
    }

    pub fn any(&self) -> bool {
        self.menu || self.pantry_stock || self.orders || self.hash_string
    }

    /// Show every raised flag, then clear them. The general tamper notice is
    /// shown only the first time.
    pub fn report(&mut self, ui: &mut dyn Ui) {
        if !self.any() {
            return;
        }
        if !self.notice_shown {
            ui.show(SAVE_FILE_TAMPER_DETECTED);
            self.notice_shown = true;
        }
        if std::mem::take(&mut self.hash_string) {
            ui.show(HASH_STRING_TAMPERED);
        }
        if std::mem::take(&mut self.menu) {
            ui.show(SAVE_FILE_FORMAT_MENU);
        }
        if std::mem::take(&mut self.pantry_stock) {
            ui.show(SAVE_FILE_FORMAT_PANTRY_STOCK);
        }
        if std::mem::take(&mut self.orders) {
            ui.show(SAVE_FILE_FORMAT_ORDERS);
        }
        ui.show("");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::MemoryUi;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_intact_file_is_stripped() {
        let mut saved = append_checksum(lines(&["Rice | 100 | g", "Milk | 20 | ml"]));
        assert_eq!(verify_and_strip(&mut saved), Integrity::Intact);
        assert_eq!(saved, lines(&["Rice | 100 | g", "Milk | 20 | ml"]));
    }

    #[test]
    fn test_edited_content_is_tampered() {
        let mut saved = append_checksum(lines(&["Rice | 100 | g"]));
        saved[0] = "Rice | 900 | g".to_string();
        assert_eq!(verify_and_strip(&mut saved), Integrity::Tampered);
        assert_eq!(saved.len(), 1);
    }

    #[test]
    fn test_non_numeric_checksum_is_kept() {
        let mut saved = lines(&["Rice | 100 | g", "not a hash"]);
        assert_eq!(verify_and_strip(&mut saved), Integrity::Tampered);
        assert_eq!(saved.len(), 2);
    }

    #[test]
    fn test_degenerate_zeros_are_tampered() {
        let mut saved = lines(&["Rice | 100 | g", "000"]);
        assert_eq!(verify_and_strip(&mut saved), Integrity::Tampered);
    }

    #[test]
    fn test_oversized_checksum_is_hash_string_tampered() {
        let mut saved = lines(&["Rice | 100 | g", "99999999999999999999999"]);
        assert_eq!(verify_and_strip(&mut saved), Integrity::HashStringTampered);
        assert_eq!(saved.len(), 2);
    }

    #[test]
    fn test_empty_content_round_trips() {
        let mut saved = append_checksum(Vec::new());
        assert_eq!(saved.len(), 1);
        assert_eq!(verify_and_strip(&mut saved), Integrity::Intact);
        assert!(saved.is_empty());
    }

    #[test]
    fn test_flags_report_once_then_clear() {
        let mut flags = TamperFlags::default();
        let mut ui = MemoryUi::new();

        flags.raise(SaveFile::Menu, Integrity::Tampered);
        flags.raise(SaveFile::Orders, Integrity::HashStringTampered);
        flags.report(&mut ui);
        assert_eq!(ui.count(SAVE_FILE_TAMPER_DETECTED), 1);
        assert_eq!(ui.count(SAVE_FILE_FORMAT_MENU), 1);
        assert_eq!(ui.count(SAVE_FILE_FORMAT_ORDERS), 1);
        assert_eq!(ui.count(HASH_STRING_TAMPERED), 1);
        assert!(!flags.any());

        flags.report(&mut ui);
        assert_eq!(ui.count(SAVE_FILE_FORMAT_MENU), 1);

        flags.raise(SaveFile::PantryStock, Integrity::Tampered);
        flags.report(&mut ui);
        assert_eq!(ui.count(SAVE_FILE_TAMPER_DETECTED), 1);
        assert_eq!(ui.count(SAVE_FILE_FORMAT_PANTRY_STOCK), 1);
    }
}
