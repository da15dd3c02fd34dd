use ipaddr_seq::command::execute;
use ipaddr_seq::config::Config;
use ipaddr_seq::logging::init_logging;
use ipaddr_seq::output::print_outcome;
use ipaddr_seq::CancelToken;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let config = Config::from_env()?;
    init_logging(&config.log_config)?;
    log::info!("#Start main() {config:?}");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cancel = CancelToken::new();
    let outcome = execute(&args, config.take, &cancel)?;
    print_outcome(&outcome, config.output)?;

    Ok(())
}
