//! mermview CLI - Preview Mermaid.js diagrams embedded in markdown

mod cli;

use clap::Parser;

fn main() {
    let cli_args = cli::Cli::parse();
    cli::setup_logging(&cli_args);

    let result = cli::PreviewApp::from_env().and_then(|app| app.run(&cli_args));

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(cli::exit_code(&e));
    }
}
