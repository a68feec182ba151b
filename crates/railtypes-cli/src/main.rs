mod cli;
mod config;
#[allow(unused_assignments)]
mod diagnostic;
mod error;
mod generate;
mod logging;
mod output;

use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = cli::Cli::parse();
    let output = output::OutputContext::from_global(&cli.global);
    logging::init(&cli.global, output.use_color);

    let result = generate::run(cli.generate, &cli.global, &output).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            output.print_error(&e);
            std::process::exit(e.exit_code() as i32);
        }
    }
}
