pub mod bulb;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;

use error::AppError;
use output::print_error;

/// Configure logging once at startup.
///
/// `--debug` raises the filter to debug level so the device library's
/// protocol traces become visible; otherwise `RUST_LOG` applies as usual.
pub fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

pub async fn run(cli_args: cli::Cli) -> i32 {
    match try_run(cli_args).await {
        Ok(()) => 0,
        Err(err) => {
            print_error(&err);
            err.exit_code()
        }
    }
}

async fn try_run(cli_args: cli::Cli) -> Result<(), AppError> {
    // The action is fixed before any network traffic happens.
    let action = cli_args.action();

    let device_config = config::read_device(&config::default_config_path(), &cli_args.name)?;
    let bulb = bulb::Bulb::connect(&cli_args.name, &device_config);

    let before = bulb.status().await?;
    output::print_status("before", &before);

    if let Some(action) = action {
        bulb.apply(action).await?;
    }

    let after = bulb.status().await?;
    output::print_status("after", &after);

    bulb.shutdown().await;
    Ok(())
}
