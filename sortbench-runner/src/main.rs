//! The `sortbench-runner` binary
use std::io::Write;

use colored::{control, Colorize};
use env_logger::Env;
use log::{error, warn};
use sortbench_runner::runner::envs;

/// The main function of the `sortbench-runner` binary
///
/// We initialize the logging interface and configure the usage of colors as early as possible here.
/// Then we're printing warnings with [`print_warnings`] and finally call the main
/// [`sortbench_runner::runner::run`] library function catching and printing its errors.
fn main() {
    // Configure the colored crate to respect SORTBENCH_COLOR and CARGO_TERM_COLOR
    let sortbench_color = std::env::var(envs::SORTBENCH_COLOR).ok();
    if let Some(var) = sortbench_color
        .clone()
        .or_else(|| std::env::var(envs::CARGO_TERM_COLOR).ok())
    {
        if var == "never" {
            control::set_override(false);
        } else if var == "always" {
            control::set_override(true);
        } else {
            // do nothing
        }
    }

    // Configure the env_logger crate to respect SORTBENCH_COLOR and CARGO_TERM_COLOR
    env_logger::Builder::from_env(
        Env::default()
            .filter_or(envs::SORTBENCH_LOG, "warn")
            .write_style(
                sortbench_color.map_or_else(|| envs::CARGO_TERM_COLOR, |_| envs::SORTBENCH_COLOR),
            ),
    )
    .format(|buf, record| {
        writeln!(
            buf,
            "{}: {:<5}: {}",
            record
                .module_path()
                .unwrap_or_else(|| record.module_path_static().unwrap_or("???")),
            match record.level() {
                log::Level::Error => "Error".red().bold(),
                log::Level::Warn => "Warn".yellow().bold(),
                log::Level::Info => "Info".green().bold(),
                log::Level::Debug => "Debug".blue().bold(),
                log::Level::Trace => "Trace".cyan().bold(),
            },
            record.args()
        )
    })
    .init();

    print_warnings();
    if let Err(error) = sortbench_runner::runner::run() {
        error!("{error:#}");
        std::process::exit(1)
    }
}

/// Print warnings for environment variables which have no effect
fn print_warnings() {
    if std::env::var("RUST_LOG").is_ok() && std::env::var(envs::SORTBENCH_LOG).is_err() {
        warn!(
            "The RUST_LOG environment variable is ignored. Use {} to set the log level",
            envs::SORTBENCH_LOG
        );
    }
}
