use std::process;

use log::debug;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args: Vec<_> = std::env::args_os().collect();
    let cli = match globcc_cli::parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => process::exit(globcc_cli::report_usage_error(&e)),
    };
    globcc_cli::init_logging(&cli);
    debug!("arguments: {args:?}");

    let code = globcc_cli::execute(&cli)?;
    process::exit(code)
}
