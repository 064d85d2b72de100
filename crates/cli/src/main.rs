//! hookmsg CLI entry point
//!
//! This is the minimal main entry point that delegates to the library.

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(false)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))
    .ok();

    let cli = hookmsg::Cli::parse();

    match hookmsg::run(cli) {
        Ok(code) => code,
        Err(e) => {
            let report = miette::Report::msg(format!("{e:#}"));
            eprintln!("{report:?}");
            ExitCode::FAILURE
        }
    }
}
