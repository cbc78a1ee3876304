use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = light::cli::Cli::parse();
    light::init_logging(cli.debug);
    let exit_code = light::run(cli).await;
    std::process::exit(exit_code);
}
