//! Asset library collaborator interface.
//!
//! Decoding and playback are external concerns; the core only needs a
//! catalogue of named assets with credit metadata, loaded asynchronously so
//! the state machine can show a loading screen while a worker prepares it,
//! and a seam through which it can request sounds by name.

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use thiserror::Error;

/// Asset preparation failures. Surfaced as a dedicated error screen rather
/// than proceeding with partial assets.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset {name:?} has no credit metadata")]
    MissingCredit { name: String },
    #[error("asset worker terminated without a result")]
    WorkerLost,
}

/// Attribution for one asset, shown on the credits screen.
#[derive(Debug, Clone)]
pub struct Credit {
    pub authors: Vec<String>,
    pub license: String,
    pub source: String,
}

/// One catalogued asset: the file an external loader would decode, plus its
/// credit.
#[derive(Debug, Clone)]
pub struct AssetEntry {
    pub file: &'static str,
    pub credit: Credit,
}

/// Named images, fonts, and sounds with their credits.
#[derive(Debug, Default)]
pub struct AssetLibrary {
    pub images: HashMap<String, AssetEntry>,
    pub fonts: HashMap<String, AssetEntry>,
    pub sounds: HashMap<String, AssetEntry>,
}

fn credit(authors: &[&str], license: &str, source: &str) -> Credit {
    Credit {
        authors: authors.iter().map(|a| a.to_string()).collect(),
        license: license.to_string(),
        source: source.to_string(),
    }
}

impl AssetLibrary {
    /// Assemble and validate the catalogue. Run on a worker, not the game
    /// tick thread.
    fn build() -> Result<Self, AssetError> {
        let mut library = AssetLibrary::default();

        let images = [
            ("ship", "Spaceship.png", credit(&["Kenney"], "CC0", "https://opengameart.org/content/space-shooter-redux")),
            ("planet", "Green Gas Planet.png", credit(&["Viktor Hahn"], "CC-BY-3.0", "https://opengameart.org/content/17-planet-sprites")),
            ("earth", "Earth.png", credit(&["Viktor Hahn"], "CC-BY-3.0", "https://opengameart.org/content/17-planet-sprites")),
            ("moon", "Moon.png", credit(&["Viktor Hahn"], "CC-BY-3.0", "https://opengameart.org/content/17-planet-sprites")),
            ("satellite", "Satellite.png", credit(&["Kenney"], "CC0", "https://opengameart.org/content/space-shooter-redux")),
            ("wormHole", "Hurricane.png", credit(&["qubodup"], "CC0", "https://opengameart.org/content/hurricane-icon")),
            ("background", "Starfield.png", credit(&["Kenney"], "CC0", "https://opengameart.org/content/space-backgrounds-0")),
        ];
        for (name, file, credit) in images {
            library.images.insert(name.to_string(), AssetEntry { file, credit });
        }

        library.fonts.insert(
            "oxanium".to_string(),
            AssetEntry {
                file: "Oxanium-Regular.ttf",
                credit: credit(&["Severin Meyer"], "OFL-1.1", "https://fonts.google.com/specimen/Oxanium"),
            },
        );

        let sounds = [
            ("music", "HomeBase.mp3", credit(&["Axtoncrolley"], "CC0", "https://opengameart.org/content/homebase")),
            ("click", "Click.wav", credit(&["qubodup"], "CC0", "https://opengameart.org/content/ui-clicks")),
        ];
        for (name, file, credit) in sounds {
            library.sounds.insert(name.to_string(), AssetEntry { file, credit });
        }

        library.validate()?;
        Ok(library)
    }

    /// Every entry must carry attribution; an uncredited asset is a packaging
    /// mistake we refuse to ship past.
    fn validate(&self) -> Result<(), AssetError> {
        for (name, entry) in self.images.iter().chain(&self.fonts).chain(&self.sounds) {
            if entry.credit.authors.is_empty() || entry.credit.license.is_empty() {
                return Err(AssetError::MissingCredit { name: name.clone() });
            }
        }
        Ok(())
    }

    pub fn has_sound(&self, name: &str) -> bool {
        self.sounds.contains_key(name)
    }
}

/// In-flight asynchronous load, polled once per frame.
pub struct AssetLoadHandle {
    rx: Receiver<Result<AssetLibrary, AssetError>>,
}

impl AssetLoadHandle {
    /// Non-blocking poll. `None` while the worker is still running.
    pub fn poll(&mut self) -> Option<Result<AssetLibrary, AssetError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(AssetError::WorkerLost)),
        }
    }
}

/// Start building the asset library on a worker thread.
pub fn load_async() -> AssetLoadHandle {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = AssetLibrary::build();
        if let Err(e) = &result {
            log::error!("asset library build failed: {e}");
        }
        // Receiver may already be gone if the game quit during loading.
        let _ = tx.send(result);
    });
    AssetLoadHandle { rx }
}

/// Seam through which the core requests sounds by name. Playback itself is
/// the host's business.
pub trait Sounds {
    fn play(&mut self, name: &str);
}

/// Default sink used by headless hosts and tests.
#[derive(Debug, Default)]
pub struct LogSounds;

impl Sounds for LogSounds {
    fn play(&mut self, name: &str) {
        log::debug!("play sound {name:?}");
    }
}
