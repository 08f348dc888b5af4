use std::fs::File;
use std::path::Path;

use clap::{App, Arg};
use wordgrid::{render, solve, Grid, Puzzle, Wordlist};

fn main() -> Result<(), String> {
    env_logger::init();

    let matches = App::new("wordgrid")
        .arg(
            Arg::with_name("grid")
                .short("g")
                .long("grid")
                .value_name("FILE")
                .help("Grid structure file, '*' marks blocked cells")
                .required(true),
        )
        .arg(
            Arg::with_name("words")
                .short("w")
                .long("words")
                .value_name("FILE")
                .help("Word list, one word per line or JSON")
                .required(true),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .value_name("WIDTH")
                .help("Grid width. Required if the grid is not square"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .value_name("HEIGHT")
                .help("Grid height. Required if the grid is not square"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .help("Also write the filled grid to this file"),
        )
        .arg(
            Arg::with_name("profile")
                .short("p")
                .long("profile")
                .takes_value(false),
        )
        .get_matches();

    let grid = matches.value_of("grid").expect("grid not included");
    let grid = std::fs::read_to_string(grid).expect("failed to read grid");

    let grid = match (matches.value_of("width"), matches.value_of("height")) {
        (Some(width), Some(height)) => {
            let width = width.parse().expect("failed to parse width");
            let height = height.parse().expect("failed to parse height");
            Grid::rectangle(grid, width, height).map_err(|err| err.to_string())?
        }
        (None, None) => Grid::square(grid).map_err(|err| err.to_string())?,
        (None, Some(_)) => return Err(String::from("Height specified but not width.")),
        (Some(_), None) => return Err(String::from("Width specified but not height.")),
    };

    let words = matches.value_of("words").expect("words not included");
    let wordlist = Wordlist::load(Path::new(words)).map_err(|err| err.to_string())?;

    if matches.is_present("profile") {
        let guard = pprof::ProfilerGuard::new(100).unwrap();
        std::thread::spawn(move || loop {
            if let Ok(report) = guard.report().build() {
                let file = File::create("flamegraph.svg").unwrap();
                report.flamegraph(file).unwrap();
            }
            std::thread::sleep(std::time::Duration::from_secs(5))
        });
    }

    let puzzle = Puzzle::new(grid);
    match solve(&puzzle, &wordlist) {
        Some(assignment) => {
            let filled = render(&puzzle, &assignment);
            println!("{}", filled);
            if let Some(path) = matches.value_of("output") {
                std::fs::write(path, format!("{}", filled)).map_err(|err| err.to_string())?;
            }
        }
        None => println!("No solution."),
    }
    Ok(())
}
