//! The event dispatch loop: one cooperative loop that serializes key,
//! resize, and render events so at most one move animates at a time.
//!
//! Keys map to a closed [`Command`] enumeration through a single dispatch
//! table; unrecognized keys are ignored without a redraw. In hosted mode
//! (selected by the `TERMCUBE_HOSTED` environment variable) the quit key
//! resets the session instead of ending it; end-of-input always ends the
//! loop.

use crate::anim::Scheduler;
use crate::cube::{Engine, FrameSink, Grid, Move, SHUFFLE_LEN};
use crate::input::{InputEvent, InputSource, KeyCode};
use crate::render::{cycle_theme, Hud, Renderer, Theme, THEMES};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;

/// Environment variable that switches quit behavior to session reset.
pub const HOSTED_ENV: &str = "TERMCUBE_HOSTED";

/// Everything a key press can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Apply a move with the given signed multiplier.
    Turn(Move, i32),
    /// Undo the most recent counted move.
    Undo,
    /// Randomize the cube, then reset history and steps.
    Shuffle,
    /// Increase the animation delay.
    Slower,
    /// Decrease the animation delay (floored at zero).
    Faster,
    /// Next color theme.
    ThemeNext,
    /// Previous color theme.
    ThemePrev,
    /// Re-initialize the display and repaint; cube state untouched.
    Refresh,
    /// End the session (or reset it, in hosted mode).
    Quit,
}

/// The fixed key bindings. Returns `None` for unrecognized keys.
pub fn command_for(code: KeyCode, ctrl: bool) -> Option<Command> {
    if ctrl {
        return match code {
            KeyCode::Char('l') => Some(Command::Refresh),
            _ => None,
        };
    }
    let command = match code {
        KeyCode::Char(c) => match c {
            'u' => Command::Turn(Move::Up, 1),
            'i' => Command::Turn(Move::Up, -1),
            'k' => Command::Turn(Move::Down, 1),
            'j' => Command::Turn(Move::Down, -1),
            'o' => Command::Turn(Move::Right, 1),
            'l' => Command::Turn(Move::Right, -1),
            'y' | 'z' => Command::Turn(Move::Left, 1),
            'h' => Command::Turn(Move::Left, -1),
            'n' => Command::Turn(Move::Front, 1),
            'm' => Command::Turn(Move::Front, -1),
            '7' => Command::Turn(Move::Back, 1),
            '8' => Command::Turn(Move::Back, -1),
            'd' => Command::Turn(Move::RollRight, 1),
            'a' => Command::Turn(Move::RollRight, -1),
            'w' => Command::Turn(Move::RollUp, 1),
            's' => Command::Turn(Move::RollUp, -1),
            '+' | '=' => Command::Slower,
            '-' | '_' => Command::Faster,
            't' => Command::ThemeNext,
            'T' => Command::ThemePrev,
            'N' => Command::Shuffle,
            'x' => Command::Undo,
            'Q' => Command::Quit,
            _ => return None,
        },
        KeyCode::Backspace | KeyCode::Delete => Command::Undo,
        KeyCode::Esc => Command::Quit,
    };
    Some(command)
}

/// Session configuration resolved at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Quit resets the session instead of ending it.
    pub hosted: bool,
    /// Number of random moves per shuffle.
    pub shuffle_len: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            hosted: false,
            shuffle_len: SHUFFLE_LEN,
        }
    }
}

impl AppConfig {
    /// Read the hosted toggle from the environment.
    pub fn from_env() -> Self {
        Self {
            hosted: std::env::var_os(HOSTED_ENV).is_some_and(|v| !v.is_empty()),
            ..Self::default()
        }
    }
}

/// Frame sink wiring the engine's animation steps through the scheduler to
/// the renderer. Draw errors are stashed and surfaced after the move.
struct Pacer<'a, R: Renderer> {
    scheduler: &'a mut Scheduler,
    renderer: &'a mut R,
    theme: &'static Theme,
    error: Option<io::Error>,
}

impl<R: Renderer> FrameSink for Pacer<'_, R> {
    fn step(&mut self, grid: &Grid, steps: i32, forced: bool) {
        if self.scheduler.on_step(forced) {
            let hud = Hud {
                steps,
                delay: self.scheduler.delay(),
                theme: self.theme,
            };
            if let Err(e) = self.renderer.draw(grid, &hud) {
                self.error.get_or_insert(e);
            }
        }
    }
}

/// The interactive session: engine, scheduler, theme, and the two external
/// collaborators (input source and renderer).
pub struct App<I: InputSource, R: Renderer> {
    engine: Engine,
    scheduler: Scheduler,
    theme: usize,
    input: I,
    renderer: R,
    config: AppConfig,
    rng: StdRng,
}

impl<I: InputSource, R: Renderer> App<I, R> {
    /// Build a session around an input source and a renderer.
    pub fn new(input: I, renderer: R, config: AppConfig) -> Self {
        Self {
            engine: Engine::new(),
            scheduler: Scheduler::new(),
            theme: 0,
            input,
            renderer,
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// The cube engine (exposed for inspection).
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The renderer (exposed for inspection).
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Index of the active theme.
    pub const fn theme_index(&self) -> usize {
        self.theme
    }

    /// The animation scheduler.
    pub const fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Run the dispatch loop until quit or end-of-input.
    ///
    /// # Errors
    ///
    /// Returns the first renderer error; output failures are fatal to the
    /// session.
    pub fn run(&mut self) -> io::Result<()> {
        self.redraw()?;
        loop {
            match self.input.next_event() {
                InputEvent::Closed => return Ok(()),
                InputEvent::Resize { width, height } => {
                    // A resize never mutates cube state.
                    self.renderer.resize(width, height);
                    self.redraw()?;
                }
                InputEvent::Key { code, ctrl } => {
                    let Some(command) = command_for(code, ctrl) else {
                        continue;
                    };
                    if !self.dispatch(command)? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Execute one command. Returns `false` when the session should end.
    fn dispatch(&mut self, command: Command) -> io::Result<bool> {
        match command {
            Command::Turn(mv, mul) => {
                self.animate(|engine, _, pacer| engine.apply(mv, mul, pacer))?;
            }
            Command::Undo => {
                self.animate(|engine, _, pacer| engine.undo(pacer))?;
            }
            Command::Shuffle => {
                let len = self.config.shuffle_len;
                self.scheduler.set_bulk(true);
                let result = self.animate(|engine, rng, pacer| engine.shuffle(rng, len, pacer));
                self.scheduler.set_bulk(false);
                result?;
                self.redraw()?;
            }
            Command::Slower => {
                self.scheduler.slower();
                self.redraw()?;
            }
            Command::Faster => {
                self.scheduler.faster();
                self.redraw()?;
            }
            Command::ThemeNext => {
                self.theme = cycle_theme(self.theme, true);
                self.redraw()?;
            }
            Command::ThemePrev => {
                self.theme = cycle_theme(self.theme, false);
                self.redraw()?;
            }
            Command::Refresh => {
                let hud = self.hud();
                self.renderer.refresh(self.engine.grid(), &hud)?;
            }
            Command::Quit => {
                if !self.config.hosted {
                    return Ok(false);
                }
                self.reset();
                self.redraw()?;
            }
        }
        Ok(true)
    }

    /// Run a move under a pacer that couples the scheduler and renderer.
    fn animate<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut Engine, &mut StdRng, &mut dyn FrameSink),
    {
        let mut pacer = Pacer {
            scheduler: &mut self.scheduler,
            renderer: &mut self.renderer,
            theme: &THEMES[self.theme],
            error: None,
        };
        f(&mut self.engine, &mut self.rng, &mut pacer);
        match pacer.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Restore the entire session to its startup state.
    fn reset(&mut self) {
        self.engine.reset();
        self.scheduler.reset();
        self.theme = 0;
    }

    fn hud(&self) -> Hud<'static> {
        Hud {
            steps: self.engine.steps(),
            delay: self.scheduler.delay(),
            theme: &THEMES[self.theme],
        }
    }

    fn redraw(&mut self) -> io::Result<()> {
        let hud = self.hud();
        self.renderer.draw(self.engine.grid(), &hud)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays a fixed script, then reports end-of-input forever.
    struct ScriptedSource {
        events: VecDeque<InputEvent>,
    }

    impl ScriptedSource {
        fn new(events: &[InputEvent]) -> Self {
            Self {
                events: events.iter().copied().collect(),
            }
        }

        fn keys(keys: &str) -> Self {
            Self::new(&keys.chars().map(InputEvent::ch).collect::<Vec<_>>())
        }
    }

    impl InputSource for ScriptedSource {
        fn next_event(&mut self) -> InputEvent {
            self.events.pop_front().unwrap_or(InputEvent::Closed)
        }
    }

    /// Records draw/refresh/resize calls instead of painting.
    #[derive(Default)]
    struct CountingRenderer {
        draws: usize,
        refreshes: usize,
        size: Option<(u16, u16)>,
        last_steps: i32,
    }

    impl Renderer for CountingRenderer {
        fn draw(&mut self, _grid: &Grid, hud: &Hud<'_>) -> io::Result<()> {
            self.draws += 1;
            self.last_steps = hud.steps;
            Ok(())
        }

        fn refresh(&mut self, _grid: &Grid, hud: &Hud<'_>) -> io::Result<()> {
            self.refreshes += 1;
            self.last_steps = hud.steps;
            Ok(())
        }

        fn resize(&mut self, width: u16, height: u16) {
            self.size = Some((width, height));
        }
    }

    /// Five `-` presses floor the delay at zero so tests never sleep.
    const FAST: &str = "-----";

    fn run_keys(keys: &str) -> App<ScriptedSource, CountingRenderer> {
        let mut app = App::new(
            ScriptedSource::keys(keys),
            CountingRenderer::default(),
            AppConfig::default(),
        );
        app.run().unwrap();
        app
    }

    #[test]
    fn test_unrecognized_keys_are_ignored_without_redraw() {
        let app = run_keys("qe9");
        assert_eq!(app.renderer().draws, 1, "only the initial paint");
        assert!(app.engine().grid().is_solved());
    }

    #[test]
    fn test_turn_key_applies_a_counted_move() {
        let app = run_keys("-----u");
        assert_eq!(app.engine().steps(), 1);
        assert!(!app.engine().grid().is_solved());
        assert_eq!(app.renderer().last_steps, 1);
    }

    #[test]
    fn test_turn_with_zero_delay_draws_the_two_forced_frames() {
        let app = run_keys("-----u");
        // 1 initial + 5 speed redraws + 2 forced frames of the turn.
        assert_eq!(app.renderer().draws, 8);
    }

    #[test]
    fn test_undo_key_restores_the_cube() {
        let app = run_keys("-----ux");
        assert!(app.engine().grid().is_solved());
        assert_eq!(app.engine().steps(), 0);
    }

    #[test]
    fn test_backspace_and_delete_also_undo() {
        for key in [KeyCode::Backspace, KeyCode::Delete] {
            let script = [
                InputEvent::ch('-'),
                InputEvent::ch('-'),
                InputEvent::ch('-'),
                InputEvent::ch('-'),
                InputEvent::ch('-'),
                InputEvent::ch('u'),
                InputEvent::key(key),
            ];
            let mut app = App::new(
                ScriptedSource::new(&script),
                CountingRenderer::default(),
                AppConfig::default(),
            );
            app.run().unwrap();
            assert!(app.engine().grid().is_solved(), "{key:?} should undo");
        }
    }

    #[test]
    fn test_resize_redraws_without_mutating_the_cube() {
        let script = [InputEvent::Resize {
            width: 120,
            height: 40,
        }];
        let mut app = App::new(
            ScriptedSource::new(&script),
            CountingRenderer::default(),
            AppConfig::default(),
        );
        app.run().unwrap();
        assert_eq!(app.renderer().draws, 2);
        assert_eq!(app.renderer().size, Some((120, 40)));
        assert!(app.engine().grid().is_solved());
    }

    #[test]
    fn test_quit_key_stops_before_later_events() {
        let app = run_keys("Qu");
        assert_eq!(app.engine().steps(), 0, "the turn after Q never ran");
    }

    #[test]
    fn test_esc_quits_too() {
        let script = [InputEvent::key(KeyCode::Esc), InputEvent::ch('u')];
        let mut app = App::new(
            ScriptedSource::new(&script),
            CountingRenderer::default(),
            AppConfig::default(),
        );
        app.run().unwrap();
        assert_eq!(app.engine().steps(), 0);
    }

    #[test]
    fn test_hosted_quit_resets_instead_of_terminating() {
        let mut app = App::new(
            ScriptedSource::keys("-----utQu"),
            CountingRenderer::default(),
            AppConfig {
                hosted: true,
                ..AppConfig::default()
            },
        );
        app.run().unwrap();
        // Q reset everything, then the trailing u applied one move.
        assert_eq!(app.engine().steps(), 1);
        assert_eq!(app.theme_index(), 0, "theme reset by Q");
        assert!(!app.scheduler().delay().is_zero(), "delay reset by Q");
    }

    #[test]
    fn test_shuffle_leaves_zero_steps_and_empty_history() {
        let mut app = App::new(
            ScriptedSource::keys("N"),
            CountingRenderer::default(),
            AppConfig {
                shuffle_len: 40,
                ..AppConfig::default()
            },
        );
        app.run().unwrap();
        assert_eq!(app.engine().steps(), 0);
        assert_eq!(app.engine().history_len(), 0);
        assert!(!app.scheduler().is_bulk(), "bulk mode left after shuffle");
    }

    #[test]
    fn test_speed_keys_adjust_the_delay_with_a_floor() {
        let app = run_keys(FAST);
        assert!(app.scheduler().delay().is_zero());
        let app = run_keys("------+");
        assert!(!app.scheduler().delay().is_zero());
    }

    #[test]
    fn test_theme_keys_cycle_both_ways() {
        let app = run_keys("t");
        assert_eq!(app.theme_index(), 1);
        let app = run_keys("tT");
        assert_eq!(app.theme_index(), 0);
        let app = run_keys("T");
        assert_eq!(app.theme_index(), THEMES.len() - 1);
    }

    #[test]
    fn test_ctrl_l_refreshes_without_touching_state() {
        let script = [InputEvent::Key {
            code: KeyCode::Char('l'),
            ctrl: true,
        }];
        let mut app = App::new(
            ScriptedSource::new(&script),
            CountingRenderer::default(),
            AppConfig::default(),
        );
        app.run().unwrap();
        assert_eq!(app.renderer().refreshes, 1);
        assert!(app.engine().grid().is_solved());
    }

    #[test]
    fn test_dispatch_table_covers_every_face_pair() {
        let pairs = [
            ('u', 'i', Move::Up),
            ('k', 'j', Move::Down),
            ('o', 'l', Move::Right),
            ('y', 'h', Move::Left),
            ('n', 'm', Move::Front),
            ('7', '8', Move::Back),
        ];
        for (cw, ccw, mv) in pairs {
            assert_eq!(
                command_for(KeyCode::Char(cw), false),
                Some(Command::Turn(mv, 1))
            );
            assert_eq!(
                command_for(KeyCode::Char(ccw), false),
                Some(Command::Turn(mv, -1))
            );
        }
        assert_eq!(
            command_for(KeyCode::Char('z'), false),
            Some(Command::Turn(Move::Left, 1))
        );
    }
}
