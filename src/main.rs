mod cli;
mod config;
mod gateways;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();
    if let Err(err) = cli::run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}
