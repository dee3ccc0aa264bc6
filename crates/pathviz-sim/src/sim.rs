//! The [`Simulation`] state machine driven by a presentation shell.

use std::time::Instant;

use log::{debug, info};
use pathviz_core::{Grid, Point, Tile};
use pathviz_maze::{MazeGen, MazeKind};
use pathviz_search::{Algorithm, Step, StepSearch};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::SimConfig;
use crate::error::{ConfigError, EditError};
use crate::history::{RunHistory, RunRecord};

/// Where the current run stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunStatus {
    /// No run in progress; the grid may be edited.
    #[default]
    Idle,
    /// Steps are produced on every [`Simulation::tick`].
    Running,
    /// A run exists but only advances on [`Simulation::advance`].
    Paused,
    /// The final step has been shown.
    Finished,
}

/// Explicit driver state: grid, endpoints, selected algorithm and the
/// in-progress search.
///
/// The search engine only ever sees a snapshot of the grid taken when the
/// run starts; every edit resets the run.
pub struct Simulation {
    grid: Grid,
    start: Point,
    end: Point,
    algorithm: Algorithm,
    maze: MazeKind,
    mazegen: MazeGen<StdRng>,
    steps_per_tick: usize,
    run: Option<Box<dyn StepSearch>>,
    // steps of the current run, kept after it finishes
    steps: usize,
    status: RunStatus,
    view: Step,
    started_at: Option<Instant>,
    history: RunHistory,
}

impl Simulation {
    /// Create a simulation with an all-open grid.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Ok(Self {
            grid: Grid::new(config.width, config.height),
            start: config.start,
            end: config.end,
            algorithm: config.algorithm,
            maze: config.maze,
            mazegen: MazeGen::new(rng),
            steps_per_tick: config.steps_per_tick,
            run: None,
            steps: 0,
            status: RunStatus::Idle,
            view: Step::default(),
            started_at: None,
            history: RunHistory::new(config.history_len),
        })
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn maze_kind(&self) -> MazeKind {
        self.maze
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn history(&self) -> &RunHistory {
        &self.history
    }

    /// The latest step shown (empty sets when idle).
    pub fn view(&self) -> &Step {
        &self.view
    }

    /// The final path of the last finished run (empty otherwise).
    pub fn path(&self) -> &[Point] {
        self.view.path.as_deref().unwrap_or(&[])
    }

    /// Steps produced by the in-progress or just finished run.
    pub fn steps_emitted(&self) -> usize {
        self.steps
    }

    // -----------------------------------------------------------------------
    // Run control
    // -----------------------------------------------------------------------

    /// Discard any run and clear the displayed step.
    pub fn reset(&mut self) {
        self.run = None;
        self.steps = 0;
        self.status = RunStatus::Idle;
        self.view = Step::default();
        self.started_at = None;
    }

    /// Select the algorithm for the next run. Resets the current run.
    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.reset();
    }

    /// Start a fresh run with the selected algorithm, in the running state.
    pub fn start_run(&mut self) {
        self.begin(RunStatus::Running);
    }

    /// Pause a running search or resume a paused one. Starts a new run when
    /// idle or finished.
    pub fn toggle_pause(&mut self) {
        match self.status {
            RunStatus::Running => self.status = RunStatus::Paused,
            RunStatus::Paused => self.status = RunStatus::Running,
            RunStatus::Idle | RunStatus::Finished => self.start_run(),
        }
    }

    /// Produce exactly one step. When idle, a paused run is started first.
    ///
    /// Returns `false` once there is nothing left to produce.
    pub fn advance(&mut self) -> bool {
        match self.status {
            RunStatus::Finished => return false,
            RunStatus::Idle => self.begin(RunStatus::Paused),
            RunStatus::Running | RunStatus::Paused => {}
        }
        let Some(run) = self.run.as_mut() else {
            return false;
        };
        let next = run.next_step();
        self.steps = run.steps_emitted();
        match next {
            Some(step) => {
                let done = step.is_final();
                self.view = step;
                if done {
                    self.complete();
                }
                true
            }
            None => {
                self.complete();
                false
            }
        }
    }

    /// Advance up to `steps_per_tick` steps if running. Returns how many
    /// steps were produced.
    pub fn tick(&mut self) -> usize {
        let mut n = 0;
        while self.status == RunStatus::Running && n < self.steps_per_tick {
            if !self.advance() {
                break;
            }
            n += 1;
        }
        n
    }

    /// Change the number of steps per tick (at least 1).
    pub fn set_steps_per_tick(&mut self, n: usize) {
        self.steps_per_tick = n.max(1);
    }

    pub fn steps_per_tick(&self) -> usize {
        self.steps_per_tick
    }

    fn begin(&mut self, status: RunStatus) {
        // Engines assume open endpoints.
        self.grid.set(self.start, Tile::Open);
        self.grid.set(self.end, Tile::Open);
        self.run = Some(self.algorithm.search(self.start, self.end, &self.grid));
        self.steps = 0;
        self.view = Step::default();
        self.status = status;
        self.started_at = Some(Instant::now());
        debug!(
            "started {} run {} -> {}",
            self.algorithm, self.start, self.end
        );
    }

    fn complete(&mut self) {
        let record = RunRecord {
            algorithm: self.algorithm,
            steps: self.steps,
            visited: self.view.visited.len(),
            path_len: self.view.path_len(),
            elapsed: self.started_at.map(|t| t.elapsed()).unwrap_or_default(),
        };
        info!(
            "{} finished in {} steps ({} visited), path length {}",
            record.algorithm, record.steps, record.visited, record.path_len
        );
        self.history.push(record);
        self.run = None;
        self.started_at = None;
        self.status = RunStatus::Finished;
    }

    // -----------------------------------------------------------------------
    // Grid editing
    // -----------------------------------------------------------------------

    fn check_editable(&self, p: Point) -> Result<(), EditError> {
        if !self.grid.contains(p) {
            return Err(EditError::OutOfBounds(p));
        }
        if p == self.start || p == self.end {
            return Err(EditError::Endpoint(p));
        }
        Ok(())
    }

    /// Flip a cell between wall and open. Resets the current run.
    pub fn toggle_wall(&mut self, p: Point) -> Result<Tile, EditError> {
        self.check_editable(p)?;
        let tile = self.grid.toggle(p).ok_or(EditError::OutOfBounds(p))?;
        debug!("toggled {p} to {tile:?}");
        self.reset();
        Ok(tile)
    }

    /// Set a cell to wall (`true`) or open (`false`). Resets the current run.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> Result<(), EditError> {
        self.check_editable(p)?;
        let tile = if wall { Tile::Wall } else { Tile::Open };
        self.grid.set(p, tile);
        self.reset();
        Ok(())
    }

    /// Move the start cell to `p`, opening it. Resets the current run.
    pub fn move_start(&mut self, p: Point) -> Result<(), EditError> {
        if !self.grid.contains(p) {
            return Err(EditError::OutOfBounds(p));
        }
        if p == self.end {
            return Err(EditError::Overlap(p));
        }
        self.start = p;
        self.grid.set(p, Tile::Open);
        debug!("moved start to {p}");
        self.reset();
        Ok(())
    }

    /// Move the end cell to `p`, opening it. Resets the current run.
    pub fn move_end(&mut self, p: Point) -> Result<(), EditError> {
        if !self.grid.contains(p) {
            return Err(EditError::OutOfBounds(p));
        }
        if p == self.start {
            return Err(EditError::Overlap(p));
        }
        self.end = p;
        self.grid.set(p, Tile::Open);
        debug!("moved end to {p}");
        self.reset();
        Ok(())
    }

    /// Select the maze strategy used by [`generate_maze`](Self::generate_maze).
    pub fn set_maze_kind(&mut self, kind: MazeKind) {
        self.maze = kind;
    }

    /// Switch to the next maze strategy and return it.
    pub fn cycle_maze_kind(&mut self) -> MazeKind {
        self.maze = self.maze.next();
        self.maze
    }

    /// Regenerate the grid with the selected maze strategy. Resets the
    /// current run.
    pub fn generate_maze(&mut self) {
        self.reset();
        self.mazegen
            .generate(self.maze, &mut self.grid, self.start, self.end);
        debug!(
            "generated {} maze, wall ratio {:.3}",
            self.maze,
            self.grid.wall_ratio()
        );
    }

    /// Open every cell. Resets the current run.
    pub fn clear(&mut self) {
        self.reset();
        self.grid.fill(Tile::Open);
    }
}
