use bravia::bravia::BraviaTV;
use bravia::command::{self, Command};
use bravia::config::Config;
use bravia::rpc::http::HttpConnection;
use clap::Parser;
use log::debug;
use std::process;

/// Control a Sony Bravia TV over its IP control API.
///
/// The TV is addressed by BRAVIA_IP and authenticated with the pre-shared
/// key in BRAVIA_PSK. BRAVIA_TIMEOUT optionally bounds each request, in
/// seconds.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about)]
struct Args {
    #[arg(value_enum)]
    command: Command,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("WARN"))
        .format_timestamp(Some(env_logger::fmt::TimestampPrecision::Millis))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    };
    debug!("talking to {}", config.host);
    let tv = BraviaTV::new(HttpConnection::new(config));
    command::run(args.command, &tv);
}
