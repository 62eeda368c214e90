mod angle;
mod arc;
mod canvas;
mod config;
mod showcase;
mod vector2;

use std::panic::{self, UnwindSafe};

use clap::Parser;
use log::error;

use crate::arc::ArcError;
use crate::config::Config;

fn main() -> Result<(), ArcError> {
    env_logger::init();
    let config = Config::parse();

    // raylib panics when the window cannot be opened
    let window = open_window(|| {
        raylib::init()
            .size(config.width, config.height)
            .title("Arc")
            .build()
    });
    let Some((rl, thread)) = window else {
        error!("Cannot create the window");
        std::process::exit(1);
    };

    let mut showcase = showcase::Showcase::build(rl, thread, &config);

    while showcase.process()? {}

    Ok(())
}

fn open_window<T>(open: impl FnOnce() -> T + UnwindSafe) -> Option<T> {
    panic::catch_unwind(open).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_window_failure_is_caught() {
        let window: Option<()> = open_window(|| panic!("Attempting to create window failed!"));
        assert!(window.is_none());
    }

    #[test]
    fn test_open_window_success() {
        assert_eq!(open_window(|| (1, "thread")), Some((1, "thread")));
    }
}
