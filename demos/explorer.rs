use maze_pathfinding::{render_distances, Explorer, ExplorerConfig};
use std::io::{self, BufRead, Write};

const MENU_TEXT: &str = "Keys (followed by Enter):
    - / a   Lower maximum distance
    + / d   Increase maximum distance
    r       Create a new maze
    q       Exit";

fn draw(explorer: &Explorer) {
    println!("{}", render_distances(explorer.result(), explorer.path()));
    println!(
        "max distance: {}, path length: {}",
        explorer.max_distance(),
        explorer.path().len()
    );
}

fn main() -> io::Result<()> {
    env_logger::init();
    println!("{MENU_TEXT}");
    let mut rng = rand::thread_rng();
    let mut explorer = Explorer::new(ExplorerConfig::default(), &mut rng);
    draw(&explorer);
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        match line?.trim() {
            "-" | "a" => explorer.step(-1),
            "+" | "d" => explorer.step(1),
            "r" => explorer.reset(&mut rng),
            "q" => break,
            _ => {
                println!("{MENU_TEXT}");
                continue;
            }
        }
        draw(&explorer);
        io::stdout().flush()?;
    }
    Ok(())
}
