use std::process;

mod cli;
mod config;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match cli::run() {
        Ok(report) => {
            log::info!(
                "Synchronized {} beaches ({} merged, {} created)",
                report.total(),
                report.merged,
                report.created
            );
        }
        Err(err) => {
            log::error!("Failed to create or update beaches: {err:#}");
            process::exit(1);
        }
    }
}
