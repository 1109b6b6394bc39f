// src/ui/assets.rs
use eframe::egui;
use std::path::PathBuf;

/// Maps catalog asset references such as `/assets/graph1.png` onto files under
/// the configured asset root.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    root: PathBuf,
}

impl AssetResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, reference: &str) -> PathBuf {
        self.root.join(reference.trim_start_matches('/'))
    }

    /// Image URI for the reference, or `None` when the file is not there.
    pub fn resolve(&self, reference: &str) -> Option<String> {
        let path = self.path_for(reference);
        path.is_file().then(|| format!("file://{}", path.display()))
    }
}

/// Draws the referenced image, or the placeholder text when it cannot be found.
pub fn show_asset(
    ui: &mut egui::Ui,
    assets: &AssetResolver,
    reference: &str,
    placeholder: &str,
    max_size: egui::Vec2,
) {
    match assets.resolve(reference) {
        Some(uri) => {
            ui.add(egui::Image::new(uri).max_size(max_size));
        }
        None => {
            ui.label(egui::RichText::new(placeholder).italics().weak());
        }
    }
}
