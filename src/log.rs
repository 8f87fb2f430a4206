use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

pub fn build_pace_logger_for_level(level: LevelFilter) {
    let mut builder = Builder::from_default_env();
    builder
        .format(|buf, record| writeln!(buf, "c {} - {}", record.level(), record.args()))
        .filter(None, level)
        .init();
}

/// Raises `base` by one level for every occurrence of `-v`.
pub fn build_pace_logger_for_verbosity(base: LevelFilter, verbosity: usize) {
    build_pace_logger_for_level(level_for_verbosity(base, verbosity));
}

fn level_for_verbosity(base: LevelFilter, verbosity: usize) -> LevelFilter {
    let levels = [
        LevelFilter::Off,
        LevelFilter::Error,
        LevelFilter::Warn,
        LevelFilter::Info,
        LevelFilter::Debug,
        LevelFilter::Trace,
    ];
    let start = levels.iter().position(|l| *l == base).unwrap_or(0);
    levels[(start + verbosity).min(levels.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::level_for_verbosity;
    use log::LevelFilter;

    #[test]
    fn verbosity_saturates() {
        assert_eq!(level_for_verbosity(LevelFilter::Warn, 0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(LevelFilter::Warn, 1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(LevelFilter::Warn, 9), LevelFilter::Trace);
    }
}
