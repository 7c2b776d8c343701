use std::path::Path;

use driftfield::{Options, Viewer};

fn main() {
    env_logger::init();

    // Optional first argument: path to a TOML options preset.
    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(opts) => opts,
            Err(e) => {
                log::error!("failed to load preset {path}: {e}");
                std::process::exit(2);
            }
        },
        None => Options::default(),
    };

    if let Err(e) = Viewer::builder().with_options(options).build().run() {
        log::error!("viewer failed: {e}");
        std::process::exit(1);
    }
}
