use docopt::Docopt;
use serde_derive::Deserialize;
use mazes::{
    grid_displays::PathDisplay,
    maze::{Maze, MazeConfig},
    observers::{LoggingObserver, MazeObserver, NoopObserver},
};
use std::{
    io,
    io::prelude::*,
    fs::File,
};

const USAGE: &str = "Mazes

Usage:
    mazes_driver -h | --help
    mazes_driver [--rows=<n>] [--columns=<n>] [--seed=<s>] [--solve] [--show-path] [--trace-events] [--text-out=<path>]

Options:
    -h --help              Show this screen.
    --rows=<n>             The number of rows in the grid [default: 20].
    --columns=<n>          The number of columns in the grid [default: 20].
    --seed=<s>             Seed for the random generator. The same seed and grid size always give the same maze.
    --solve                Find the route from the entrance (top left) to the exit (bottom right) and report on it.
    --show-path            Draw the route from the entrance to the exit. Implies --solve.
    --trace-events         Log every wall change, move and step at trace level, e.g. with RUST_LOG=mazes=trace.
    --text-out=<path>      Output file path for a textual rendering of the maze instead of stdout.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_rows: usize,
    flag_columns: usize,
    flag_seed: Option<u64>,
    flag_solve: bool,
    flag_show_path: bool,
    flag_trace_events: bool,
    flag_text_out: String,
}

// Driver errors: library and docopt failures convert into these with `?`, and `chain_err`
// adds what the driver was doing at the time.
mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(mazes::errors::Error, mazes::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let mut config = MazeConfig::new().dimensions(args.flag_rows, args.flag_columns);
    if let Some(seed) = args.flag_seed {
        config = config.seed(seed);
    }

    let mut logger = LoggingObserver::new();
    let mut noop = NoopObserver;
    let mut observer: &mut dyn MazeObserver = if args.flag_trace_events {
        &mut logger
    } else {
        &mut noop
    };

    let mut maze = Maze::new(config, &mut observer)
        .chain_err(|| format!("Failed to generate a {} x {} maze", args.flag_rows, args.flag_columns))?;

    let solution = if args.flag_solve || args.flag_show_path {
        let solution = maze.solve(&mut observer);
        match solution {
            Some(ref s) => {
                let backtracks = s.visited_count() - 1 - s.steps();
                println!("Solved: {} steps, {} cells visited, {} backtracks",
                         s.steps(),
                         s.visited_count(),
                         backtracks);
            }
            None => println!("Unsolved: no route from the entrance to the exit"),
        }
        solution
    } else {
        None
    };

    let text = match solution {
        Some(ref s) if args.flag_show_path => {
            maze.grid().display_with(&PathDisplay::new(s.path())).to_string()
        }
        _ => maze.grid().to_string(),
    };

    if args.flag_text_out.is_empty() {
        println!("{}", text);
    } else {
        write_text_to_file(&text, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    if args.flag_trace_events {
        eprintln!("{} cells visited in total", logger.steps());
    }

    Ok(())
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
