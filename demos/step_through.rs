use grid_maze::{MazeGenerator, PathFinder, Point, SearchStatus};

// Advances a search one expansion at a time, as an animated display would,
// and gives up after a fixed budget of expansions.

const STEP_BUDGET: usize = 150;

fn main() {
    let grid = MazeGenerator::from_seed(Some(11)).generate(41, 41).unwrap();
    println!("{}", grid);
    let start = Point::new(1, 1);
    let end = Point::new(39, 39);

    let mut search = PathFinder::new().search(&grid, start, end).unwrap();
    for step in 1..=STEP_BUDGET {
        match search.step() {
            SearchStatus::Expanded(p) => {
                if step % 25 == 0 {
                    println!(
                        "step {:>3}: expanded {}, {} queued",
                        step,
                        p,
                        search.frontier().count()
                    );
                }
            }
            SearchStatus::Found => {
                let steps = search.path().map_or(0, |p| p.len() - 1);
                println!(
                    "Reached {} in {} steps after {} expansions",
                    end,
                    steps,
                    search.expansions()
                );
                return;
            }
            SearchStatus::Exhausted => {
                println!("{} is unreachable", end);
                return;
            }
        }
    }
    println!(
        "Budget of {} expansions used up, {} cells explored",
        STEP_BUDGET,
        search.explored().len()
    );
}
