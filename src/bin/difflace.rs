use std::process::ExitCode;
use std::rc::Rc;

use clap::Parser;
use log::LevelFilter;

use difflace::cli::{Cli, Style};
use difflace::config::ConfigOptions;
use difflace::ignore::{mark_ignorable_changes, IgnorePolicy};
use difflace::loader::load_pair;
use difflace::matcher::RegexMatcher;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_target(false)
        .format_timestamp(None)
        .init();

    run(&cli)
}

fn run(cli: &Cli) -> ExitCode {
    let (file0, file1, mut script) = match load_pair(&cli.file0, &cli.file1) {
        Ok(v) => v,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::from(2);
        }
    };

    let mut labels = cli.labels.iter();
    let label0 = labels.next().cloned();
    let label1 = labels.next().cloned();

    let ignore_regex = match cli.ignore_regex.as_deref().map(RegexMatcher::new) {
        Some(Ok(m)) => Some(Rc::new(m) as Rc<dyn difflace::matcher::Matcher>),
        Some(Err(err)) => {
            log::error!("invalid ignore pattern: {err}");
            return ExitCode::from(2);
        }
        None => None,
    };
    let function_regex = match cli.function_regex.as_deref().map(RegexMatcher::new) {
        Some(Ok(m)) => Some(Rc::new(m) as Rc<dyn difflace::matcher::Matcher>),
        Some(Err(err)) => {
            log::error!("invalid function pattern: {err}");
            return ExitCode::from(2);
        }
        None => None,
    };

    let policy = IgnorePolicy::new(cli.ignore_blank_lines, ignore_regex.clone());
    mark_ignorable_changes(&mut script, &policy, &file0, &file1);

    let mut config = ConfigOptions::new(cli.context_lines())
        .with_ignore_blank_lines(cli.ignore_blank_lines)
        .with_initial_tab(cli.initial_tab)
        .with_labels(label0, label1);
    if let Some(m) = ignore_regex {
        config = config.with_ignore_regex(m);
    }
    if let Some(m) = function_regex {
        config = config.with_function_regex(m);
    }
    config.tabsize = cli.tabsize;
    config.expand_tabs = cli.expand_tabs;
    config.time_format = cli.time_format.clone();

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    let result = match cli.style {
        Style::Unified => difflace::format::unified::emit(&mut handle, &file0, &file1, &script, &config),
        Style::Context => difflace::format::context::emit(&mut handle, &file0, &file1, &script, &config),
    };

    match result {
        Ok(wrote_hunk) => {
            if wrote_hunk {
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::from(2)
        }
    }
}
