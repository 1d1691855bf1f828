//! Terminal demo: spins a cube and prints each frame in place.
//!
//! Usage: `termrast [config.ron]`
//! Set `RUST_LOG=debug` for session logging.

use std::io::Write;
use std::time::{Duration, Instant};
use std::{env, process, thread};

use termrast::{shapes, RenderConfig, Renderer};

const FRAME_INTERVAL: Duration = Duration::from_millis(33);

fn main() {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => match RenderConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{path}: {e}");
                process::exit(1);
            }
        },
        None => RenderConfig::default(),
    };

    let mut renderer = match Renderer::from_config(&config, shapes::cube()) {
        Ok(renderer) => renderer,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let start = Instant::now();
    let mut stdout = std::io::stdout();
    // Clear once, then repaint in place from the home position
    print!("\x1b[2J");

    loop {
        let time = start.elapsed().as_millis() as f32;
        let frame = renderer.render(time);

        let mut out = String::with_capacity((frame.width() + 1) * frame.height() + 8);
        out.push_str("\x1b[H");
        for row in frame.rows() {
            out.push_str(row);
            out.push('\n');
        }
        print!("{out}");
        let _ = stdout.flush();

        thread::sleep(FRAME_INTERVAL);
    }
}
