//! The move engine: face turns, whole-cube rolls, history, and shuffle.
//!
//! # Animation protocol
//!
//! A face turn moves two structures: a 12-cell band spanning four faces and
//! the face's own 8-cell ring. The turn is split into three equal-looking
//! steps so the renderer gets three intermediate frames:
//!
//! 1. band shift by `dir · mul`, non-forced frame;
//! 2. and 3. band shift by `dir · mul` plus ring shift by `ring_dir · mul`,
//!    forced frame each.
//!
//! After all three steps the band has advanced `3 · mul` cells (one full
//! face width per quarter turn) and the ring `2 · mul` cells (8 cells / 4
//! sides). The two structures advance at different per-step rates on
//! purpose; only the totals are geometrically meaningful.
//!
//! Whole-cube rolls re-express the entire net with three band shifts per
//! iteration; the flanking rings join only on iterations 2 and 3, because
//! the first three-band shift alone is already the correct partial frame.

use super::cycles::Cycle;
use super::grid::Grid;
use rand::Rng;

/// Number of random moves in one shuffle. Tunable; the animation runs in
/// bulk mode regardless of the length.
pub const SHUFFLE_LEN: usize = 100;

/// Receives a frame request after each permutation step of a move.
///
/// `forced` marks the combined band+ring steps that must be shown even when
/// the animation delay is zero.
pub trait FrameSink {
    /// A permutation step completed; `steps` is the current step counter.
    fn step(&mut self, grid: &Grid, steps: i32, forced: bool);
}

/// A sink that discards every frame. Useful for tests and benchmarks.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn step(&mut self, _grid: &Grid, _steps: i32, _forced: bool) {}
}

/// One of the eight cube operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Turn the top face.
    Up,
    /// Turn the bottom face.
    Down,
    /// Turn the left face.
    Left,
    /// Turn the right face.
    Right,
    /// Turn the front face.
    Front,
    /// Turn the back face.
    Back,
    /// Roll the whole cube to the right (visual only, not counted).
    RollRight,
    /// Roll the whole cube upward (visual only, not counted).
    RollUp,
}

/// Shift plan for one face turn: the leading band, the face's own ring,
/// and their shift directions per unit multiplier.
struct FaceSpec {
    band: Cycle,
    band_dir: i32,
    ring: Cycle,
    ring_dir: i32,
}

impl Move {
    /// The six face turns, the moves a shuffle draws from.
    pub const FACES: [Self; 6] = [
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::Front,
        Self::Back,
    ];

    /// Whether this move counts toward the step total and enters history.
    pub const fn counts(self) -> bool {
        !matches!(self, Self::RollRight | Self::RollUp)
    }

    const fn face_spec(self) -> Option<FaceSpec> {
        let spec = match self {
            Self::Up => FaceSpec {
                band: Cycle::TopRow,
                band_dir: 1,
                ring: Cycle::UpRing,
                ring_dir: -1,
            },
            Self::Down => FaceSpec {
                band: Cycle::BottomRow,
                band_dir: -1,
                ring: Cycle::DownRing,
                ring_dir: -1,
            },
            Self::Right => FaceSpec {
                band: Cycle::RightCol,
                band_dir: 1,
                ring: Cycle::RightRing,
                ring_dir: -1,
            },
            Self::Left => FaceSpec {
                band: Cycle::LeftCol,
                band_dir: 1,
                ring: Cycle::LeftRing,
                ring_dir: 1,
            },
            Self::Front => FaceSpec {
                band: Cycle::FrontBand,
                band_dir: 1,
                ring: Cycle::FrontRing,
                ring_dir: 1,
            },
            Self::Back => FaceSpec {
                band: Cycle::BackBand,
                band_dir: 1,
                ring: Cycle::BackRing,
                ring_dir: -1,
            },
            Self::RollRight | Self::RollUp => return None,
        };
        Some(spec)
    }
}

/// The cube transformation engine: grid, step counter, and undo history.
pub struct Engine {
    grid: Grid,
    steps: i32,
    history: Vec<(Move, i32)>,
}

impl Engine {
    /// A fresh engine holding the solved cube.
    pub const fn new() -> Self {
        Self {
            grid: Grid::solved(),
            steps: 0,
            history: Vec::new(),
        }
    }

    /// The current cube state.
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Counted moves performed minus counted moves undone.
    pub const fn steps(&self) -> i32 {
        self.steps
    }

    /// Number of moves available to undo.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Apply `mv` with the signed quarter-turn multiplier `mul`,
    /// animating through `sink`.
    pub fn apply(&mut self, mv: Move, mul: i32, sink: &mut dyn FrameSink) {
        self.apply_inner(mv, mul, false, sink);
    }

    /// Undo the most recent counted move, replaying its inverse with the
    /// full three-step animation. No-op on empty history.
    pub fn undo(&mut self, sink: &mut dyn FrameSink) {
        if let Some((mv, mul)) = self.history.pop() {
            self.apply_inner(mv, mul, true, sink);
        }
    }

    /// Run `len` uniformly random face turns (multiplier −1, +1, or +2),
    /// then clear the history and zero the step counter.
    ///
    /// The caller is expected to put its scheduler into bulk mode around
    /// this; the engine itself only drives the permutations.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R, len: usize, sink: &mut dyn FrameSink) {
        const MULS: [i32; 3] = [-1, 1, 2];
        for _ in 0..len {
            let mv = Move::FACES[rng.gen_range(0..Move::FACES.len())];
            let mul = MULS[rng.gen_range(0..MULS.len())];
            self.apply_inner(mv, mul, false, sink);
        }
        self.history.clear();
        self.steps = 0;
    }

    /// Reset to the solved cube with empty history and zero steps.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn record(&mut self, mv: Move, mul: i32, is_undo: bool) {
        if !mv.counts() {
            return;
        }
        if is_undo {
            self.steps -= 1;
        } else {
            self.steps += 1;
            self.history.push((mv, -mul));
        }
    }

    fn apply_inner(&mut self, mv: Move, mul: i32, is_undo: bool, sink: &mut dyn FrameSink) {
        self.record(mv, mul, is_undo);
        if let Some(spec) = mv.face_spec() {
            self.grid.apply_cycle(spec.band, spec.band_dir * mul);
            sink.step(&self.grid, self.steps, false);
            for _ in 0..2 {
                self.grid.apply_cycle(spec.band, spec.band_dir * mul);
                self.grid.apply_cycle(spec.ring, spec.ring_dir * mul);
                sink.step(&self.grid, self.steps, true);
            }
        } else {
            self.roll(mv, mul, sink);
        }
    }

    fn roll(&mut self, mv: Move, mul: i32, sink: &mut dyn FrameSink) {
        let (rings, bands, band_dir) = match mv {
            Move::RollRight => (
                [(Cycle::UpRing, 1), (Cycle::DownRing, -1)],
                [Cycle::TopRow, Cycle::MidRow, Cycle::BottomRow],
                -1,
            ),
            Move::RollUp => (
                [(Cycle::LeftRing, 1), (Cycle::RightRing, -1)],
                [Cycle::LeftCol, Cycle::MidCol, Cycle::RightCol],
                1,
            ),
            _ => unreachable!("roll called for a face turn"),
        };
        for i in 0..3 {
            // The first iteration skips the rings: the three-band shift
            // alone is the correct partial reshuffle until the bands have
            // moved enough to expose the flanking faces.
            if i > 0 {
                for (ring, dir) in rings {
                    self.grid.apply_cycle(ring, dir * mul);
                }
            }
            for band in bands {
                self.grid.apply_cycle(band, band_dir * mul);
            }
            sink.step(&self.grid, self.steps, true);
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Counts frames and records the forced flags, in order.
    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<bool>,
    }

    impl FrameSink for RecordingSink {
        fn step(&mut self, _grid: &Grid, _steps: i32, forced: bool) {
            self.frames.push(forced);
        }
    }

    #[test]
    fn test_face_turn_emits_three_frames() {
        let mut engine = Engine::new();
        let mut sink = RecordingSink::default();
        engine.apply(Move::Up, 1, &mut sink);
        assert_eq!(sink.frames, vec![false, true, true]);
    }

    #[test]
    fn test_roll_emits_three_forced_frames() {
        let mut engine = Engine::new();
        let mut sink = RecordingSink::default();
        engine.apply(Move::RollRight, 1, &mut sink);
        assert_eq!(sink.frames, vec![true, true, true]);
    }

    #[test]
    fn test_every_face_turn_has_period_four() {
        for mv in Move::FACES {
            let mut engine = Engine::new();
            for _ in 0..4 {
                engine.apply(mv, 1, &mut NullSink);
            }
            assert!(engine.grid().is_solved(), "{mv:?} four quarter turns");

            let mut engine = Engine::new();
            engine.apply(mv, 2, &mut NullSink);
            engine.apply(mv, 2, &mut NullSink);
            assert!(engine.grid().is_solved(), "{mv:?} two half turns");
        }
    }

    #[test]
    fn test_quarter_turn_then_counter_turn_is_identity() {
        for mv in Move::FACES {
            let mut engine = Engine::new();
            engine.apply(mv, 1, &mut NullSink);
            engine.apply(mv, -1, &mut NullSink);
            assert!(engine.grid().is_solved(), "{mv:?} +1 then -1");
        }
    }

    #[test]
    fn test_up_three_times_then_once_more_solves() {
        let mut engine = Engine::new();
        for _ in 0..3 {
            engine.apply(Move::Up, 1, &mut NullSink);
        }
        assert!(!engine.grid().is_solved());
        engine.apply(Move::Up, 1, &mut NullSink);
        assert!(engine.grid().is_solved());
    }

    #[test]
    fn test_quarter_turn_actually_moves_facelets() {
        let mut engine = Engine::new();
        engine.apply(Move::Up, 1, &mut NullSink);
        assert!(!engine.grid().is_solved());
        // Top row advanced a full face width: Green slides into the
        // old Orange block.
        use crate::cube::Facelet;
        assert_eq!(engine.grid().get(3, 0), Facelet::Green);
        assert_eq!(engine.grid().get(3, 3), Facelet::Red);
        // The top face itself rotated but stays all white.
        assert_eq!(engine.grid().get(0, 3), Facelet::White);
    }

    #[test]
    fn test_rolls_have_period_four_and_never_count() {
        for mv in [Move::RollRight, Move::RollUp] {
            let mut engine = Engine::new();
            for _ in 0..4 {
                engine.apply(mv, 1, &mut NullSink);
                assert_eq!(engine.steps(), 0, "{mv:?} changed the step counter");
                assert_eq!(engine.history_len(), 0, "{mv:?} entered history");
            }
            assert!(engine.grid().is_solved(), "{mv:?} four rolls");
        }
    }

    #[test]
    fn test_roll_then_counter_roll_is_identity() {
        for mv in [Move::RollRight, Move::RollUp] {
            let mut engine = Engine::new();
            engine.apply(mv, 1, &mut NullSink);
            engine.apply(mv, -1, &mut NullSink);
            assert!(engine.grid().is_solved());
        }
    }

    #[test]
    fn test_undo_restores_grid_and_steps() {
        let mut engine = Engine::new();
        engine.apply(Move::Front, 1, &mut NullSink);
        assert_eq!(engine.steps(), 1);
        assert_eq!(engine.history_len(), 1);
        engine.undo(&mut NullSink);
        assert!(engine.grid().is_solved());
        assert_eq!(engine.steps(), 0);
        assert_eq!(engine.history_len(), 0);
    }

    #[test]
    fn test_undo_replays_the_full_animation() {
        let mut engine = Engine::new();
        engine.apply(Move::Back, 2, &mut NullSink);
        let mut sink = RecordingSink::default();
        engine.undo(&mut sink);
        assert_eq!(sink.frames, vec![false, true, true]);
        assert!(engine.grid().is_solved());
    }

    #[test]
    fn test_undo_unwinds_a_whole_sequence() {
        let mut engine = Engine::new();
        let sequence = [
            (Move::Up, 1),
            (Move::Right, -1),
            (Move::Front, 2),
            (Move::Down, 1),
        ];
        for (mv, mul) in sequence {
            engine.apply(mv, mul, &mut NullSink);
        }
        assert_eq!(engine.steps(), 4);
        for _ in 0..4 {
            engine.undo(&mut NullSink);
        }
        assert!(engine.grid().is_solved());
        assert_eq!(engine.steps(), 0);
    }

    #[test]
    fn test_undo_on_empty_history_is_a_no_op() {
        let mut engine = Engine::new();
        engine.undo(&mut NullSink);
        assert!(engine.grid().is_solved());
        assert_eq!(engine.steps(), 0);
    }

    #[test]
    fn test_step_counter_tracks_counted_moves_only() {
        let mut engine = Engine::new();
        engine.apply(Move::Up, 1, &mut NullSink);
        engine.apply(Move::RollRight, 1, &mut NullSink);
        engine.apply(Move::Left, -1, &mut NullSink);
        assert_eq!(engine.steps(), 2);
        engine.undo(&mut NullSink);
        assert_eq!(engine.steps(), 1);
    }

    #[test]
    fn test_shuffle_resets_steps_and_history() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [0, 1, 25, SHUFFLE_LEN] {
            let mut engine = Engine::new();
            engine.shuffle(&mut rng, len, &mut NullSink);
            assert_eq!(engine.steps(), 0, "shuffle of {len}");
            assert_eq!(engine.history_len(), 0, "shuffle of {len}");
        }
    }

    #[test]
    fn test_shuffle_is_deterministic_under_a_seed() {
        let mut a = Engine::new();
        let mut b = Engine::new();
        a.shuffle(&mut StdRng::seed_from_u64(42), 50, &mut NullSink);
        b.shuffle(&mut StdRng::seed_from_u64(42), 50, &mut NullSink);
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_reset_returns_to_the_solved_cube() {
        let mut engine = Engine::new();
        engine.apply(Move::Up, 1, &mut NullSink);
        engine.reset();
        assert!(engine.grid().is_solved());
        assert_eq!(engine.steps(), 0);
        assert_eq!(engine.history_len(), 0);
    }
}
