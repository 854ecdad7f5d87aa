//! The in-game world: ships, lazily generated bodies, scans, win/loss.

use std::collections::HashMap;
use std::time::Instant;

use engine_core::{Direction, Operation, Position};
use input::FrameInput;
use procgen::{ChunkGenerator, ChunkTracker, Planet, WormHole};

use crate::config::GameConfig;
use crate::intro::IntroSequence;
use crate::view::ViewState;

/// Outcome of one world tick, read by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldStatus {
    InGame,
    Won,
    Lost,
}

/// A probe ship. Scans are keyed by planet index in the world's planet list
/// and live only while the planet stays in range and unlooted.
#[derive(Debug)]
pub struct Ship {
    pub position: Position,
    pub direction: Direction,
    scans: HashMap<usize, Operation>,
}

impl Ship {
    fn new() -> Self {
        Self {
            position: Position::ORIGIN,
            direction: Direction::North,
            scans: HashMap::new(),
        }
    }

    /// Progress of this ship's scan of the given planet, if one is running.
    pub fn scan_progress(&self, planet_index: usize) -> Option<f64> {
        self.scans.get(&planet_index).map(Operation::completed_percentage)
    }

    /// Whether any scan is currently running on this ship.
    pub fn scanning(&self) -> bool {
        !self.scans.is_empty()
    }
}

/// All state of one game session.
pub struct World {
    planets: Vec<Planet>,
    wormholes: Vec<WormHole>,
    ships: Vec<Ship>,
    selected_ship: usize,

    tracker: ChunkTracker,
    generator: ChunkGenerator,

    /// The doomsday clock. Paused until the intro is dismissed; completion
    /// means the session is lost.
    countdown: Operation,
    score: u32,

    intro: Option<IntroSequence>,
    displayed_planet_name: String,

    config: GameConfig,
}

impl World {
    /// Create a fresh session from a numeric seed. Earth sits pre-looted at
    /// index 0 so it never counts toward the score; ships start on top of it.
    pub fn new(seed: u64, now: Instant, config: GameConfig) -> Self {
        let ships = (0..config.ship_count.max(1)).map(|_| Ship::new()).collect();
        Self {
            planets: vec![Planet::earth()],
            wormholes: Vec::new(),
            ships,
            selected_ship: 0,
            tracker: ChunkTracker::new(),
            generator: ChunkGenerator::new(seed),
            countdown: Operation::new_paused(now, config.countdown_speed),
            score: 0,
            intro: Some(IntroSequence::new(now)),
            displayed_planet_name: String::new(),
            config,
        }
    }

    /// Dismiss the intro immediately and start the countdown.
    pub fn skip_intro(&mut self, now: Instant) {
        if self.intro.take().is_some() {
            self.countdown.resume(now);
        }
    }

    /// Advance the session by one tick.
    pub fn update(&mut self, now: Instant, input: &FrameInput, view: &mut ViewState) -> WorldStatus {
        // Intro gate: no gameplay until the text is dismissed.
        if let Some(intro) = self.intro.as_mut() {
            if input.confirm && intro.confirm(now) {
                self.intro = None;
                self.countdown.resume(now);
            }
            return WorldStatus::InGame;
        }

        if input.previous_ship {
            self.select_previous_ship();
        }
        if input.next_ship {
            self.select_next_ship();
        }

        view.apply(input);

        self.move_selected_ship(input);

        let selected_position = self.ships[self.selected_ship].position;
        for coord in self.tracker.ensure_around(&selected_position) {
            let contents = self.generator.generate(coord);
            log::debug!(
                "generated chunk ({}, {}): {} planets, {} wormholes",
                coord.x,
                coord.y,
                contents.planets.len(),
                contents.wormholes.len()
            );
            self.planets.extend(contents.planets);
            self.wormholes.extend(contents.wormholes);
        }

        self.run_scans(now);

        if self.score >= self.config.win_score {
            return WorldStatus::Won;
        }
        self.countdown.update(now);
        if self.countdown.is_completed() {
            return WorldStatus::Lost;
        }

        WorldStatus::InGame
    }

    /// Resolve movement flags (opposing pairs cancel), displace the selected
    /// ship, and update its facing.
    fn move_selected_ship(&mut self, input: &FrameInput) {
        let goes_north = input.up && !input.down;
        let goes_south = input.down && !input.up;
        let goes_west = input.left && !input.right;
        let goes_east = input.right && !input.left;

        let speed = self.config.ship_speed;
        let ship = &mut self.ships[self.selected_ship];
        if goes_north {
            ship.position.y -= speed;
        }
        if goes_south {
            ship.position.y += speed;
        }
        if goes_west {
            ship.position.x -= speed;
        }
        if goes_east {
            ship.position.x += speed;
        }

        if let Some(direction) =
            Direction::from_movement(input.up, input.down, input.left, input.right)
        {
            ship.direction = direction;
        }
    }

    /// Create, advance, and resolve scan operations for every ship.
    ///
    /// Ships are visited in collection order, which resolves the case of two
    /// ships finishing the same planet in one tick: the lower-indexed ship
    /// flips the looted flag and scores; the other ship's operation is then
    /// discarded when evaluated against the now-looted planet.
    fn run_scans(&mut self, now: Instant) {
        let radius = self.config.interaction_radius;
        let scan_speed = self.config.scan_speed;
        let selected_index = self.selected_ship;

        let World {
            ships,
            planets,
            score,
            displayed_planet_name,
            ..
        } = self;

        for (ship_index, ship) in ships.iter_mut().enumerate() {
            let mut closest: Option<(usize, f64)> = None;
            for (planet_index, planet) in planets.iter().enumerate() {
                let distance = ship.position.distance_to(&planet.position);
                if closest.map_or(true, |(_, d)| distance < d) {
                    closest = Some((planet_index, distance));
                }
                if !planet.looted && distance < radius {
                    ship.scans
                        .entry(planet_index)
                        .or_insert_with(|| Operation::new(now, scan_speed));
                }
            }

            if ship_index == selected_index {
                *displayed_planet_name = match closest {
                    Some((planet_index, distance)) if distance < radius => {
                        planets[planet_index].name.clone()
                    }
                    _ => String::new(),
                };
            }

            let position = ship.position;
            let mut completed = Vec::new();
            ship.scans.retain(|&planet_index, scan| {
                let planet = &planets[planet_index];
                // Looted by another ship, or out of range: drop the scan and
                // its progress with it.
                if planet.looted || position.distance_to(&planet.position) >= radius {
                    return false;
                }
                scan.update(now);
                if scan.is_completed() {
                    completed.push(planet_index);
                    return false;
                }
                true
            });

            for planet_index in completed {
                let planet = &mut planets[planet_index];
                planet.looted = true;
                *score += 1;
                log::info!("scanned {} ({} total)", planet.name, *score);
            }
        }
    }

    fn select_next_ship(&mut self) {
        self.selected_ship = (self.selected_ship + 1) % self.ships.len();
    }

    fn select_previous_ship(&mut self) {
        self.selected_ship = (self.selected_ship + self.ships.len() - 1) % self.ships.len();
    }

    // ── Read-only surface for the renderer and state machine ───────────────

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn wormholes(&self) -> &[WormHole] {
        &self.wormholes
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn win_score(&self) -> u32 {
        self.config.win_score
    }

    pub fn selected_ship_index(&self) -> usize {
        self.selected_ship
    }

    pub fn selected_ship_position(&self) -> Position {
        self.ships[self.selected_ship].position
    }

    /// Name of the planet closest to the selected ship, when in range.
    pub fn displayed_planet_name(&self) -> &str {
        &self.displayed_planet_name
    }

    /// Intro text to display this frame, while the intro is active.
    pub fn intro_text(&self, now: Instant) -> Option<String> {
        self.intro.as_ref().map(|intro| intro.visible_text(now))
    }

    pub fn chunks_generated(&self) -> usize {
        self.tracker.generated_count()
    }

    /// Remaining time on the doomsday clock, rendered as a wall-clock string
    /// ticking from 23:55:00 toward midnight.
    pub fn doomsday_clock(&self) -> String {
        // The clock spans 5 minutes of displayed time over the full countdown.
        let seconds_per_percent = (5 * 60) / 100;
        let total_seconds =
            (seconds_per_percent as f64 * self.countdown.completed_percentage()) as i64;

        let minutes = 55 + total_seconds / 60;
        let seconds = total_seconds % 60;

        if minutes >= 60 {
            return "Midnight".to_string();
        }
        format!("23:{minutes:02}:{seconds:02}")
    }

    #[cfg(test)]
    pub(crate) fn push_planet(&mut self, planet: Planet) -> usize {
        self.planets.push(planet);
        self.planets.len() - 1
    }

    #[cfg(test)]
    pub(crate) fn ship_mut(&mut self, index: usize) -> &mut Ship {
        &mut self.ships[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use procgen::seed_to_u64;
    use std::time::Duration;

    fn test_config() -> GameConfig {
        GameConfig::default()
    }

    fn started_world(seed: &str, now: Instant) -> World {
        let mut world = World::new(seed_to_u64(seed).unwrap(), now, test_config());
        world.skip_intro(now);
        world
    }

    #[test]
    fn new_world_has_only_looted_earth_and_idle_ships() {
        let world = World::new(1, Instant::now(), test_config());
        assert_eq!(world.planets().len(), 1);
        assert_eq!(world.planets()[0].name, "Earth");
        assert!(world.planets()[0].looted);
        assert_eq!(world.ships().len(), 2);
        assert_eq!(world.score(), 0);
    }

    #[test]
    fn intro_gates_gameplay_and_countdown() {
        let t0 = Instant::now();
        let mut world = World::new(1, t0, test_config());
        let mut view = ViewState::new();

        let mut input = FrameInput::new();
        input.right = true;
        let status = world.update(t0 + Duration::from_secs(1), &input, &mut view);
        assert_eq!(status, WorldStatus::InGame);
        // No movement, no generation, frozen clock while the intro runs.
        assert_eq!(world.ships()[0].position, Position::ORIGIN);
        assert_eq!(world.chunks_generated(), 0);
        assert_eq!(world.doomsday_clock(), "23:55:00");
        assert!(world.intro_text(t0).is_some());
    }

    #[test]
    fn first_tick_generates_the_home_neighborhood_once() {
        let t0 = Instant::now();
        let mut world = started_world("abc123", t0);
        let mut view = ViewState::new();
        let input = FrameInput::new();

        world.update(t0 + Duration::from_millis(16), &input, &mut view);
        assert_eq!(world.chunks_generated(), 9);
        let planets_after_first = world.planets().len();

        // Standing still: same neighborhood, no regeneration.
        world.update(t0 + Duration::from_millis(32), &input, &mut view);
        assert_eq!(world.chunks_generated(), 9);
        assert_eq!(world.planets().len(), planets_after_first);
    }

    #[test]
    fn same_seed_generates_the_same_universe() {
        let t0 = Instant::now();
        let mut view = ViewState::new();
        let input = FrameInput::new();

        let mut a = started_world("abc123", t0);
        let mut b = started_world("abc123", t0);
        a.update(t0 + Duration::from_millis(16), &input, &mut view);
        b.update(t0 + Duration::from_millis(16), &input, &mut view);

        assert_eq!(a.planets().len(), b.planets().len());
        for (pa, pb) in a.planets().iter().zip(b.planets()) {
            assert_eq!(pa, pb);
        }
        assert_eq!(a.wormholes(), b.wormholes());
    }

    #[test]
    fn movement_displaces_selected_ship_and_sets_direction() {
        let t0 = Instant::now();
        let mut world = started_world("abc123", t0);
        let mut view = ViewState::new();

        let mut input = FrameInput::new();
        input.right = true;
        input.down = true;
        world.update(t0 + Duration::from_millis(16), &input, &mut view);

        let ship = &world.ships()[0];
        assert_eq!(ship.position, Position::new(3.0, 3.0));
        assert_eq!(ship.direction, Direction::Southeast);
        // Other ship untouched.
        assert_eq!(world.ships()[1].position, Position::ORIGIN);
    }

    #[test]
    fn opposing_movement_intents_cancel() {
        let t0 = Instant::now();
        let mut world = started_world("abc123", t0);
        let mut view = ViewState::new();

        let mut input = FrameInput::new();
        input.left = true;
        input.right = true;
        world.update(t0 + Duration::from_millis(16), &input, &mut view);
        assert_eq!(world.ships()[0].position, Position::ORIGIN);
    }

    #[test]
    fn ship_selection_wraps_both_ways() {
        let t0 = Instant::now();
        let mut world = started_world("abc123", t0);
        let mut view = ViewState::new();

        let mut input = FrameInput::new();
        input.next_ship = true;
        world.update(t0 + Duration::from_millis(16), &input, &mut view);
        assert_eq!(world.selected_ship_index(), 1);
        world.update(t0 + Duration::from_millis(32), &input, &mut view);
        assert_eq!(world.selected_ship_index(), 0);

        input.next_ship = false;
        input.previous_ship = true;
        world.update(t0 + Duration::from_millis(48), &input, &mut view);
        assert_eq!(world.selected_ship_index(), 1);
    }

    #[test]
    fn scan_completes_after_two_seconds_in_range() {
        let t0 = Instant::now();
        let mut world = started_world("abc123", t0);
        let mut view = ViewState::new();
        let input = FrameInput::new();

        let planet_index =
            world.push_planet(Planet::new("Kepler 1 a".into(), Position::new(10.0, 0.0), 0.0));

        // First tick creates the operation at `now`; progress accrues from there.
        let t1 = t0 + Duration::from_millis(16);
        world.update(t1, &input, &mut view);
        assert_eq!(world.ships()[0].scan_progress(planet_index), Some(0.0));

        let status = world.update(t1 + Duration::from_secs(2), &input, &mut view);
        assert_eq!(status, WorldStatus::InGame);
        assert_eq!(world.score(), 1);
        assert!(world.planets()[planet_index].looted);
        assert_eq!(world.ships()[0].scan_progress(planet_index), None);
    }

    #[test]
    fn leaving_range_discards_scan_progress() {
        let t0 = Instant::now();
        let mut world = started_world("abc123", t0);
        let mut view = ViewState::new();
        let input = FrameInput::new();

        let planet_index =
            world.push_planet(Planet::new("Kepler 2 b".into(), Position::new(10.0, 0.0), 0.0));

        let t1 = t0 + Duration::from_millis(16);
        world.update(t1, &input, &mut view);
        world.update(t1 + Duration::from_secs(1), &input, &mut view);
        assert_eq!(world.ships()[0].scan_progress(planet_index), Some(50.0));

        // Teleport out of range: the operation is dropped, not paused.
        world.ship_mut(0).position = Position::new(1000.0, 1000.0);
        world.update(t1 + Duration::from_millis(1100), &input, &mut view);
        assert_eq!(world.ships()[0].scan_progress(planet_index), None);
        assert!(!world.planets()[planet_index].looted);

        // Coming back starts over from zero.
        world.ship_mut(0).position = Position::ORIGIN;
        let t2 = t1 + Duration::from_millis(1200);
        world.update(t2, &input, &mut view);
        assert_eq!(world.ships()[0].scan_progress(planet_index), Some(0.0));
    }

    #[test]
    fn shared_planet_race_scores_once_for_the_lower_indexed_ship() {
        let t0 = Instant::now();
        let mut world = started_world("abc123", t0);
        let mut view = ViewState::new();
        let input = FrameInput::new();

        let planet_index =
            world.push_planet(Planet::new("Kepler 3 c".into(), Position::new(10.0, 0.0), 0.0));
        // Both ships in range of the same planet.
        world.ship_mut(1).position = Position::new(20.0, 0.0);

        let t1 = t0 + Duration::from_millis(16);
        world.update(t1, &input, &mut view);
        assert_eq!(world.ships()[0].scan_progress(planet_index), Some(0.0));
        assert_eq!(world.ships()[1].scan_progress(planet_index), Some(0.0));

        // Both operations would reach 100% this tick; ship 0 is evaluated
        // first, loots the planet, and ship 1's operation is discarded.
        world.update(t1 + Duration::from_secs(2), &input, &mut view);
        assert_eq!(world.score(), 1);
        assert!(world.planets()[planet_index].looted);
        assert_eq!(world.ships()[1].scan_progress(planet_index), None);
    }

    #[test]
    fn reaching_the_win_score_returns_won_before_the_countdown_runs() {
        let t0 = Instant::now();
        let mut config = test_config();
        config.win_score = 1;
        // 1%/s so the clock exposes whether the countdown advanced.
        config.countdown_speed = 1.0;
        let mut world = World::new(seed_to_u64("abc123").unwrap(), t0, config);
        world.skip_intro(t0);
        let mut view = ViewState::new();
        let input = FrameInput::new();

        world.push_planet(Planet::new("Kepler 4 d".into(), Position::new(10.0, 0.0), 0.0));

        let t1 = t0;
        world.update(t1, &input, &mut view);
        let status = world.update(t1 + Duration::from_secs(2), &input, &mut view);
        assert_eq!(status, WorldStatus::Won);
        // Won short-circuits before the countdown is advanced: the clock
        // still reads the value from the previous tick, not +2 seconds.
        assert_eq!(world.doomsday_clock(), "23:55:00");
    }

    #[test]
    fn countdown_completion_loses_the_session() {
        let t0 = Instant::now();
        let mut config = test_config();
        config.countdown_speed = 50.0;
        let mut world = World::new(1, t0, config);
        world.skip_intro(t0);
        let mut view = ViewState::new();
        let input = FrameInput::new();

        assert_eq!(
            world.update(t0 + Duration::from_secs(1), &input, &mut view),
            WorldStatus::InGame
        );
        assert_eq!(
            world.update(t0 + Duration::from_secs(2), &input, &mut view),
            WorldStatus::Lost
        );
    }

    #[test]
    fn doomsday_clock_renders_wall_time_to_midnight() {
        let t0 = Instant::now();
        let mut config = test_config();
        // 1%/s so percentages map directly to elapsed seconds.
        config.countdown_speed = 1.0;
        let mut world = World::new(1, t0, config);
        world.skip_intro(t0);
        let mut view = ViewState::new();
        let input = FrameInput::new();

        assert_eq!(world.doomsday_clock(), "23:55:00");

        world.update(t0 + Duration::from_secs(20), &input, &mut view);
        // 20% × 3 s/percent = 60 displayed seconds.
        assert_eq!(world.doomsday_clock(), "23:56:00");

        world.update(t0 + Duration::from_secs(90), &input, &mut view);
        assert_eq!(world.doomsday_clock(), "23:59:30");

        world.update(t0 + Duration::from_secs(100), &input, &mut view);
        assert_eq!(world.doomsday_clock(), "Midnight");
    }

    #[test]
    fn displayed_name_follows_the_selected_ship() {
        let t0 = Instant::now();
        let mut world = started_world("abc123", t0);
        let mut view = ViewState::new();
        let input = FrameInput::new();

        // Ships start on Earth, which is the closest planet and in range.
        world.update(t0 + Duration::from_millis(16), &input, &mut view);
        assert_eq!(world.displayed_planet_name(), "Earth");

        world.ship_mut(0).position = Position::new(10_000.0, 10_000.0);
        world.update(t0 + Duration::from_millis(32), &input, &mut view);
        // Far from everything: no name shown (unless a generated planet
        // happens to sit within range of the new spot).
        let near_any = world.planets().iter().any(|p| {
            p.position.distance_to(&Position::new(10_000.0, 10_000.0)) < 50.0
        });
        if !near_any {
            assert_eq!(world.displayed_planet_name(), "");
        }
    }
}
