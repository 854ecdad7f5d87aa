//! Credits screen text, assembled from asset metadata and library credits.

use std::collections::HashMap;

use input::FrameInput;

use crate::assets::{AssetEntry, AssetLibrary};

/// Rust libraries credited alongside the assets.
const LIBRARY_CREDITS: [(&str, &str); 4] = [
    ("glam", "https://github.com/bitshifter/glam-rs"),
    ("noise", "https://github.com/Razaekel/noise-rs"),
    ("rand", "https://github.com/rust-random/rand"),
    ("ron", "https://github.com/ron-rs/ron"),
];

/// Pre-rendered credits text, built once from the loaded asset library.
#[derive(Debug)]
pub struct CreditsScreen {
    text: String,
}

fn section(out: &mut String, title: &str, entries: &HashMap<String, AssetEntry>) {
    out.push_str(title);
    out.push('\n');
    let mut names: Vec<&String> = entries.keys().collect();
    names.sort();
    for name in names {
        let entry = &entries[name];
        out.push_str(&format!(
            "  {} by {} ({})\n    {}\n",
            entry.file,
            entry.credit.authors.join(", "),
            entry.credit.license,
            entry.credit.source,
        ));
    }
    out.push('\n');
}

impl CreditsScreen {
    pub fn new(assets: &AssetLibrary) -> Self {
        let mut text = String::new();
        section(&mut text, "Images", &assets.images);
        section(&mut text, "Fonts", &assets.fonts);
        section(&mut text, "Music and sounds", &assets.sounds);
        text.push_str("Libraries\n");
        for (name, url) in LIBRARY_CREDITS {
            text.push_str(&format!("  {name}\n    {url}\n"));
        }
        Self { text }
    }

    /// Returns true when the player dismisses the screen.
    pub fn update(&self, input: &FrameInput) -> bool {
        input.confirm || input.cancel
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
