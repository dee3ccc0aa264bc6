//! Crossterm screen handling: setup, teardown and drawing the simulation.

use std::collections::HashSet;
use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType},
};
use pathviz_core::{Point, Tile};
use pathviz_sim::Simulation;

const HELP: &str =
    "arrows move  w wall  s/e start/end  1-4 algorithm  space run/pause  n step  tab maze  m kind  ` clear  q quit";

/// The terminal in raw mode on the alternate screen. Restored on
/// [`close`](Self::close) or drop.
pub struct Terminal {
    out: Stdout,
    active: bool,
}

impl Terminal {
    pub fn open() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        crossterm::execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self { out, active: true })
    }

    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let _ = crossterm::execute!(
            self.out,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }

    /// Redraw the grid, status line, run history and the last message.
    pub fn draw(&mut self, sim: &Simulation, at: Point, message: &str) -> io::Result<()> {
        let view = sim.view();
        let path: HashSet<Point> = sim.path().iter().copied().collect();
        let grid = sim.grid();

        for (p, tile) in grid.iter() {
            let (ch, fg) = if p == sim.start() {
                ('S', Color::Green)
            } else if p == sim.end() {
                ('E', Color::Red)
            } else if tile == Tile::Wall {
                ('#', Color::Grey)
            } else if path.contains(&p) {
                ('*', Color::Yellow)
            } else if view.visited.contains(&p) {
                ('.', Color::Blue)
            } else if view.frontier.contains(&p) {
                ('+', Color::Cyan)
            } else {
                (' ', Color::Reset)
            };
            queue!(self.out, cursor::MoveTo(p.x as u16, p.y as u16))?;
            if p == at {
                queue!(self.out, SetAttribute(Attribute::Reverse))?;
            }
            queue!(self.out, SetForegroundColor(fg), Print(ch))?;
            if p == at {
                queue!(self.out, SetAttribute(Attribute::Reset))?;
            }
        }
        queue!(self.out, ResetColor)?;

        let mut y = grid.height() as u16 + 1;
        let status = format!(
            "{} | {} | {:?} | steps {} | visited {} | path {}",
            sim.algorithm(),
            sim.maze_kind(),
            sim.status(),
            sim.steps_emitted(),
            view.visited.len(),
            view.path_len(),
        );
        self.line(&mut y, &status)?;
        self.line(&mut y, HELP)?;
        self.line(&mut y, message)?;
        for rec in sim.history().newest_first() {
            let text = format!(
                "{:<8} steps {:>5}  visited {:>5}  path {:>4}  {:?}",
                rec.algorithm.label(),
                rec.steps,
                rec.visited,
                rec.path_len,
                rec.elapsed,
            );
            self.line(&mut y, &text)?;
        }
        self.out.flush()
    }

    fn line(&mut self, y: &mut u16, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, *y),
            Print(text),
            terminal::Clear(ClearType::UntilNewLine)
        )?;
        *y += 1;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        self.close();
    }
}
