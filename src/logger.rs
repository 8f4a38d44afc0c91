use anyhow::Result;
use log::Level;
use simple_logger::init_with_level;

pub fn init(verbosity: u8) -> Result<()> {
    init_with_level(level(verbosity))?;

    Ok(())
}

fn level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_warn() {
        assert_eq!(level(0), Level::Warn);
    }

    #[test]
    fn should_raise_level_with_verbosity() {
        assert_eq!(level(1), Level::Info);
        assert_eq!(level(2), Level::Debug);
        assert_eq!(level(7), Level::Trace);
    }
}
