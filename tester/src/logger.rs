use chrono::Local;
use colored::{ColoredString, Colorize};
use fern::Dispatch;
use log::{Level, LevelFilter};

/// Logs to stdout as `HH:MM:SS.mmm LEVEL message`. Diagnostics emitted by the
/// list itself carry a `list` tag so they stand apart from the replay output.
pub fn init_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {:>5} {}{}",
                Local::now().format("%H:%M:%S%.3f"),
                colored_level(record.level()),
                origin(record.target()),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
}

fn colored_level(level: Level) -> ColoredString {
    let name = level.as_str();
    match level {
        Level::Error => name.red().bold(),
        Level::Warn => name.yellow(),
        Level::Info => name.green(),
        Level::Debug => name.cyan(),
        Level::Trace => name.dimmed(),
    }
}

fn origin(target: &str) -> &'static str {
    if target.starts_with("singly_linked_list") {
        "[list] "
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_list_records_are_tagged() {
        let list_target = "singly_linked_list::linked_lists::singly_linked_list::delete";
        assert_eq!(origin(list_target), "[list] ");
        assert_eq!(origin("sll_tester::tester"), "");
        assert_eq!(origin(module_path!()), "");
    }

    #[test]
    fn level_names_survive_colouring() {
        colored::control::set_override(false);
        for level in [Level::Error, Level::Warn, Level::Info, Level::Debug, Level::Trace] {
            assert_eq!(colored_level(level).to_string(), level.as_str());
        }
    }
}
