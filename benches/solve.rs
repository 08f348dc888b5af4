use criterion::{black_box, Benchmark};
use criterion::{criterion_group, criterion_main, Criterion};
use wordgrid::{parse_slots, solve, Grid, Puzzle, Solver, Wordlist};

fn vocabulary() -> Wordlist {
    Wordlist::from_text(
        &[
            "bat", "ole", "wed", "bow", "ale", "ted", "cat", "car", "tar", "tax", "oak", "urn",
            "eel", "bus", "air", "rim", "net", "sun", "ray", "ivy",
        ]
        .join("\n"),
    )
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench(
        "parse",
        Benchmark::new("slots_9x9", move |b| {
            let grid = Grid::square(String::from(
                "
___*___*_
_*___*___
____*____
*___*___*
____*____
___*___*_
_*___*___
____*____
*___*___*
",
            ))
            .expect("failed to parse grid");

            b.iter(|| parse_slots(black_box(&grid)));
        }),
    );

    c.bench(
        "solve",
        Benchmark::new("propagate_word_square", move |b| {
            let grid = Grid::square(String::from(
                "
___
___
___
",
            ))
            .expect("failed to parse grid");
            let puzzle = Puzzle::new(grid);
            let wordlist = vocabulary();

            b.iter(|| {
                let mut solver = Solver::new(black_box(&puzzle), black_box(&wordlist));
                solver.enforce_node_consistency();
                assert!(solver.ac3());
            });
        }),
    );

    c.bench(
        "solve",
        Benchmark::new("fill_word_square", move |b| {
            let grid = Grid::square(String::from(
                "
___
___
___
",
            ))
            .expect("failed to parse grid");
            let puzzle = Puzzle::new(grid);
            let wordlist = vocabulary();

            b.iter(|| {
                assert!(solve(black_box(&puzzle), black_box(&wordlist)).is_some());
            });
        }),
    );
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
