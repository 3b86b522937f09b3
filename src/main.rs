use clap::Parser;
use mathpath::app::{run_app, AppError, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    run_app(cli).await
}
