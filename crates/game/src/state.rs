//! Top-level screen state machine.
//!
//! Each screen is an explicit variant; transitions happen only inside
//! [`Game::update`], and a world exists exactly while a session is running.

use std::time::Instant;

use input::FrameInput;
use procgen::seed_to_u64;

use crate::assets::{load_async, AssetLibrary, AssetLoadHandle, Sounds};
use crate::config::GameConfig;
use crate::credits::CreditsScreen;
use crate::menu::{GameCreationMenu, MainMenu, MenuEntry};
use crate::settings::SettingsScreen;
use crate::view::ViewState;
use crate::world::{World, WorldStatus};

/// The screen currently in control of input and drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    LoadFailed,
    Menu,
    CreatingGame,
    InGame,
    Won,
    Lost,
    Settings,
    Credits,
}

/// What the host should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameSignal {
    Continue,
    Exit,
}

/// Owns every screen's state and the active session, if any.
pub struct Game {
    screen: Screen,
    loader: Option<AssetLoadHandle>,
    assets: Option<AssetLibrary>,
    load_error: Option<String>,

    menu: MainMenu,
    creation: GameCreationMenu,
    settings: SettingsScreen,
    credits: Option<CreditsScreen>,
    world: Option<World>,

    sounds: Box<dyn Sounds>,
    config: GameConfig,
}

impl Game {
    /// Start in the loading screen with the asset build already running.
    pub fn new(config: GameConfig, sounds: Box<dyn Sounds>) -> Self {
        Self {
            screen: Screen::Loading,
            loader: Some(load_async()),
            assets: None,
            load_error: None,
            menu: MainMenu::new(),
            creation: GameCreationMenu::new(),
            settings: SettingsScreen::new(&config),
            credits: None,
            world: None,
            sounds,
            config,
        }
    }

    /// Advance whichever screen is active by one tick.
    pub fn update(&mut self, now: Instant, input: &FrameInput, view: &mut ViewState) -> GameSignal {
        match self.screen {
            Screen::Loading => self.update_loading(),
            Screen::LoadFailed => {
                if input.confirm || input.cancel {
                    return GameSignal::Exit;
                }
                GameSignal::Continue
            }
            Screen::Menu => self.update_menu(input),
            Screen::CreatingGame => self.update_creation(now, input),
            Screen::InGame | Screen::Won | Screen::Lost => self.update_session(now, input, view),
            Screen::Settings => {
                if self.settings.update(input) {
                    if self.config.keyboard_layout != self.settings.layout() {
                        self.config.keyboard_layout = self.settings.layout();
                        self.config.save();
                    }
                    self.sounds.play("click");
                    self.screen = Screen::Menu;
                }
                GameSignal::Continue
            }
            Screen::Credits => {
                let done = self.credits.as_ref().map_or(true, |c| c.update(input));
                if done {
                    self.screen = Screen::Menu;
                }
                GameSignal::Continue
            }
        }
    }

    fn update_loading(&mut self) -> GameSignal {
        let Some(loader) = &mut self.loader else {
            return GameSignal::Continue;
        };
        if let Some(result) = loader.poll() {
            self.loader = None;
            match result {
                Ok(library) => {
                    self.credits = Some(CreditsScreen::new(&library));
                    self.assets = Some(library);
                    self.sounds.play("music");
                    self.screen = Screen::Menu;
                }
                Err(e) => {
                    log::error!("asset loading failed: {e}");
                    self.load_error = Some(e.to_string());
                    self.screen = Screen::LoadFailed;
                }
            }
        }
        GameSignal::Continue
    }

    fn update_menu(&mut self, input: &FrameInput) -> GameSignal {
        match self.menu.update(input) {
            Some(MenuEntry::NewGame) => {
                self.sounds.play("click");
                self.creation.open();
                self.screen = Screen::CreatingGame;
            }
            Some(MenuEntry::Settings) => {
                self.sounds.play("click");
                self.settings = SettingsScreen::new(&self.config);
                self.screen = Screen::Settings;
            }
            Some(MenuEntry::Credits) => {
                self.sounds.play("click");
                self.screen = Screen::Credits;
            }
            Some(MenuEntry::Exit) => return GameSignal::Exit,
            None => {}
        }
        GameSignal::Continue
    }

    fn update_creation(&mut self, now: Instant, input: &FrameInput) -> GameSignal {
        if input.cancel {
            self.screen = Screen::Menu;
            return GameSignal::Continue;
        }
        if let Some(seed_text) = self.creation.update(input) {
            match seed_to_u64(&seed_text) {
                Ok(seed) => {
                    log::info!("starting session with seed {seed_text:?}");
                    self.sounds.play("click");
                    self.world = Some(World::new(seed, now, self.config.clone()));
                    self.screen = Screen::InGame;
                }
                Err(e) => {
                    log::warn!("rejected seed {seed_text:?}: {e}");
                    self.creation.set_error(e.to_string());
                }
            }
        }
        GameSignal::Continue
    }

    fn update_session(&mut self, now: Instant, input: &FrameInput, view: &mut ViewState) -> GameSignal {
        // A session screen without a world is a bug in the transitions above.
        let world = self.world.as_mut().expect("session screen without a world");
        match self.screen {
            Screen::InGame => match world.update(now, input, view) {
                WorldStatus::InGame => {}
                WorldStatus::Won => {
                    log::info!("session won with score {}", world.score());
                    self.screen = Screen::Won;
                }
                WorldStatus::Lost => {
                    log::info!("session lost with score {}", world.score());
                    self.screen = Screen::Lost;
                }
            },
            Screen::Won | Screen::Lost => {
                if input.confirm {
                    self.world = None;
                    *view = ViewState::new();
                    self.menu.reset_to_new_game();
                    self.screen = Screen::Menu;
                }
            }
            _ => unreachable!(),
        }
        GameSignal::Continue
    }

    // ── Read accessors for hosts ────────────────────────────────────────────

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    pub fn assets(&self) -> Option<&AssetLibrary> {
        self.assets.as_ref()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn menu(&self) -> &MainMenu {
        &self.menu
    }

    pub fn creation(&self) -> &GameCreationMenu {
        &self.creation
    }

    pub fn settings(&self) -> &SettingsScreen {
        &self.settings
    }

    pub fn credits_text(&self) -> Option<&str> {
        self.credits.as_ref().map(CreditsScreen::text)
    }

    #[cfg(test)]
    pub(crate) fn creation_mut(&mut self) -> &mut GameCreationMenu {
        &mut self.creation
    }
}
