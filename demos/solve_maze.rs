use grid_maze::{MazeConfig, MazeRun, Point, SearchSnapshot};

// Generates a seeded 31x21 maze, solves it from the top-left to the bottom-right
// lattice corner and prints it with
// - # walls
// - . cells explored by the search
// - o the path
// - S and E the start and the end

fn render(run: &MazeRun) -> String {
    let path = run.outcome.path.as_deref().unwrap_or(&[]);
    let mut out = String::new();
    for y in 0..run.grid.height() as i32 {
        for x in 0..run.grid.width() as i32 {
            let p = Point::new(x, y);
            let c = if p == run.start {
                'S'
            } else if p == run.end {
                'E'
            } else if path.contains(&p) {
                'o'
            } else if run.outcome.explored.contains(&p) {
                '.'
            } else if run.grid.is_passage(x, y) {
                ' '
            } else {
                '#'
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}

fn main() {
    let config = MazeConfig::new(31, 21).with_seed(2024);
    let mut largest_frontier = 0;
    let mut observer = |snapshot: &SearchSnapshot<'_>| {
        largest_frontier = largest_frontier.max(snapshot.frontier_len().unwrap_or(0));
    };
    let run = config.solve_with_observer(&mut observer).unwrap();
    print!("{}", render(&run));
    match run.outcome.path_length() {
        Some(steps) => println!("Path of {} steps", steps),
        None => println!("No path"),
    }
    println!(
        "Explored {} of {} open cells, frontier peaked at {}",
        run.outcome.explored.len(),
        run.grid.passage_count(),
        largest_frontier
    );
}
