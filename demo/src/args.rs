use clap::Parser;
use pathviz_maze::MazeKind;
use pathviz_search::Algorithm;

#[derive(Parser)]
#[command(name = "pathviz")]
#[command(about = "Watch grid search algorithms explore a maze, one step at a time")]
pub struct Args {
    /// Grid width in cells
    #[arg(short = 'W', long, default_value = "45")]
    pub width: i32,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value = "30")]
    pub height: i32,

    /// Initial algorithm (dijkstra, astar, bfs, dfs)
    #[arg(short, long, default_value = "dijkstra")]
    pub algorithm: Algorithm,

    /// Initial maze strategy (winding, biased, perfect)
    #[arg(short, long, default_value = "perfect")]
    pub maze: MazeKind,

    /// Seed for maze generation
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Search steps advanced per frame while running
    #[arg(short = 'k', long, value_name = "COUNT", default_value = "1")]
    pub steps_per_tick: usize,

    /// Milliseconds between frames
    #[arg(short, long, value_name = "MS", default_value = "30")]
    pub tick_ms: u64,
}
