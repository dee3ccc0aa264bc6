//! Terminal pathfinding visualizer.
//!
//! Run: cargo run --bin pathviz -- --help

mod args;
mod term;

use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use pathviz_core::Point;
use pathviz_search::Algorithm;
use pathviz_sim::{SimConfig, Simulation};

use args::Args;
use term::Terminal;

/// Frame-level state kept by the shell on top of the simulation.
struct App {
    sim: Simulation,
    cursor: Point,
    message: String,
    quit: bool,
}

impl App {
    fn new(sim: Simulation) -> Self {
        let cursor = sim.start();
        Self {
            sim,
            cursor,
            message: String::new(),
            quit: false,
        }
    }

    fn move_cursor(&mut self, delta: Point) {
        let p = self.cursor + delta;
        if self.sim.grid().contains(p) {
            self.cursor = p;
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        self.message.clear();
        let c = self.cursor;
        let edit = match code {
            KeyCode::Char('w') => self.sim.toggle_wall(c).map(drop),
            KeyCode::Char('s') => self.sim.move_start(c),
            KeyCode::Char('e') => self.sim.move_end(c),
            _ => {
                self.handle_control(code);
                return;
            }
        };
        if let Err(e) = edit {
            self.message = e.to_string();
        }
    }

    fn handle_control(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Up => self.move_cursor(Point::new(0, -1)),
            KeyCode::Down => self.move_cursor(Point::new(0, 1)),
            KeyCode::Left => self.move_cursor(Point::new(-1, 0)),
            KeyCode::Right => self.move_cursor(Point::new(1, 0)),
            KeyCode::Char(c @ '1'..='4') => {
                let i = c as usize - '1' as usize;
                self.sim.select_algorithm(Algorithm::ALL[i]);
            }
            KeyCode::Char(' ') => self.sim.toggle_pause(),
            KeyCode::Char('n') => {
                self.sim.advance();
            }
            KeyCode::Tab => self.sim.generate_maze(),
            KeyCode::Char('m') => {
                let kind = self.sim.cycle_maze_kind();
                self.message = format!("maze: {kind}");
            }
            KeyCode::Char('`') => self.sim.clear(),
            _ => {}
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = SimConfig {
        width: args.width,
        height: args.height,
        start: Point::new(0, 0),
        end: Point::new(args.width - 1, args.height - 1),
        algorithm: args.algorithm,
        maze: args.maze,
        seed: args.seed,
        steps_per_tick: args.steps_per_tick,
        ..SimConfig::default()
    };
    let mut app = App::new(Simulation::new(config)?);
    let frame = Duration::from_millis(args.tick_ms.max(1));

    let mut term = Terminal::open()?;
    let mut last_tick = Instant::now();
    while !app.quit {
        term.draw(&app.sim, app.cursor, &app.message)?;

        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) = event::read()?
            {
                app.handle_key(code);
            }
        }
        if last_tick.elapsed() >= frame {
            app.sim.tick();
            last_tick = Instant::now();
        }
    }
    term.close();
    Ok(())
}
