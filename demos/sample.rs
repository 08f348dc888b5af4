use std::time::Instant;

use wordgrid::{render, solve, Grid, Puzzle, Wordlist};

fn main() {
    env_logger::init();

    let grid = Grid::square(String::from(
        "
___
___
___
",
    ))
    .expect("failed to parse grid");
    let wordlist = Wordlist::from_text("bat\nole\nwed\nbow\nale\nted");

    let puzzle = Puzzle::new(grid);

    let start = Instant::now();
    match solve(&puzzle, &wordlist) {
        Some(assignment) => {
            println!("{}", render(&puzzle, &assignment));
            println!("Filled in {:?}", start.elapsed());
        }
        None => println!("No solution."),
    }
}
