use std::error::Error;

use clap::Parser;
use lib::rozklad::{
    helpers::get_config,
    models::Args,
    run_tool::run,
    schedule_getter::Api,
};
use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    /* Setup logging */
    env_logger::builder()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    /* Get all the required resources */
    let args = Args::parse();
    let config = get_config(&args)?;
    info!(
        "Read config.json from {}",
        std::path::absolute(&args.config_json_path)?.display()
    );
    let api = Api::new(&config.base_uri, reqwest::Client::new());

    /* Fetch, normalize and save the timetable */
    let lessons = run(&api, &args).await?;
    info!("Saved {} lessons", lessons.len());
    Ok(())
}
