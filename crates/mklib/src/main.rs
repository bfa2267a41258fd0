//! mklib CLI - scaffold a TypeScript library project

use colored::Colorize;
use mklib_core::Outcome;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let result = run().await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(Outcome::Created(_)) | Ok(Outcome::Help) => {}
        Ok(Outcome::Cancelled) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

async fn run() -> anyhow::Result<Outcome> {
    let cwd = std::env::current_dir()?;
    let argv: Vec<String> = std::env::args().skip(1).collect();
    mklib_core::run(argv, &cwd, CLI_VERSION).await
}
