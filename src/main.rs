use clap::Parser;
use docmarks::{cmd, Args, Config, Logger, SettingsArgs};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    Logger::init(args.verbose);
    let config = Config::init(args.settings.as_deref(), &SettingsArgs::from(&args))?;

    cmd::export(&config, &args).await?;

    Ok(())
}
