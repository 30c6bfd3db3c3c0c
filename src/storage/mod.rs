pub mod decoder;
pub mod encoder;
pub mod files;
pub mod integrity;

use std::path::PathBuf;

use tracing::{info, warn};

use crate::interface::Ui;
use crate::models::{Menu, Sales};
use crate::settings::Settings;
use crate::state::Pantry;

use integrity::{Integrity, TamperFlags};

pub use decoder::{LineError, OrderRecord};

/// The three save files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFile {
    Menu,
    PantryStock,
    Orders,
}

impl SaveFile {
    pub fn label(&self) -> &'static str {
        match self {
            SaveFile::Menu => "menu",
            SaveFile::PantryStock => "pantry stock",
            SaveFile::Orders => "orders",
        }
    }
}

/// Loads and saves the menu, pantry and sales with a checksum per file.
///
/// Nothing here fails outright: unreadable files decode as empty, tampered
/// files are reported and decoded as far as possible, and write failures are
/// reported per file.
#[derive(Debug)]
pub struct Storage {
    menu_path: PathBuf,
    pantry_path: PathBuf,
    orders_path: PathBuf,
    flags: TamperFlags,
}

impl Storage {
    pub fn new(settings: &Settings) -> Self {
        Self {
            menu_path: settings.menu_path(),
            pantry_path: settings.pantry_path(),
            orders_path: settings.orders_path(),
            flags: TamperFlags::default(),
        }
    }

    fn path(&self, file: SaveFile) -> &PathBuf {
        match file {
            SaveFile::Menu => &self.menu_path,
            SaveFile::PantryStock => &self.pantry_path,
            SaveFile::Orders => &self.orders_path,
        }
    }

    /// Read a save file's content lines, checking and removing its checksum.
    fn read_verified(&mut self, file: SaveFile, ui: &mut dyn Ui) -> Vec<String> {
        info!(file = file.label(), "loading");
        let path = self.path(file).clone();
        let mut lines = match files::read_lines(&path, ui) {
            Ok(lines) => lines,
            Err(e) => {
                warn!(file = %path.display(), error = %e, "could not read save file");
                ui.show(&format!(
                    "Could not read the {} file ({}), starting with no {} data.",
                    file.label(),
                    e,
                    file.label()
                ));
                return Vec::new();
            }
        };

        let integrity = integrity::verify_and_strip(&mut lines);
        if integrity != Integrity::Intact {
            self.flags.raise(file, integrity);
            self.flags.report(ui);
        }
        lines
    }

    pub fn load_menu(&mut self, ui: &mut dyn Ui) -> Menu {
        let lines = self.read_verified(SaveFile::Menu, ui);
        decoder::decode_menu(&lines, ui)
    }

    pub fn load_pantry_stock(&mut self, ui: &mut dyn Ui) -> Pantry {
        let lines = self.read_verified(SaveFile::PantryStock, ui);
        decoder::decode_pantry_stock(&lines, ui)
    }

    /// Orders refer to dishes by name, so the menu must be loaded first.
    pub fn load_sales(&mut self, menu: &Menu, ui: &mut dyn Ui) -> Sales {
        let lines = self.read_verified(SaveFile::Orders, ui);
        decoder::decode_sales(&lines, menu, ui)
    }

    fn save(&self, file: SaveFile, lines: Vec<String>, ui: &mut dyn Ui) -> bool {
        info!(file = file.label(), records = lines.len(), "saving");
        let path = self.path(file);
        match files::overwrite_file(path, &integrity::append_checksum(lines), ui) {
            Ok(()) => true,
            Err(e) => {
                warn!(file = %path.display(), error = %e, "saving unsuccessful");
                ui.show(&format!("Could not save the {} file: {}", file.label(), e));
                false
            }
        }
    }

    /// Save all three files. Each is written independently; the returned list
    /// names the files that could not be written.
    pub fn save_all(&self, menu: &Menu, sales: &Sales, pantry: &Pantry, ui: &mut dyn Ui) -> Vec<SaveFile> {
        let mut failed = Vec::new();
        if !self.save(SaveFile::Menu, encoder::encode_menu(menu), ui) {
            failed.push(SaveFile::Menu);
        }
        if !self.save(SaveFile::Orders, encoder::encode_sales(sales), ui) {
            failed.push(SaveFile::Orders);
        }
        if !self.save(SaveFile::PantryStock, encoder::encode_pantry_stock(pantry), ui) {
            failed.push(SaveFile::PantryStock);
        }
        failed
    }
}
