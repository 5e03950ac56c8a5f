extern crate clap;
use anyhow::Result;
use clap::{App, AppSettings, Arg, ErrorKind};
use std::path::PathBuf;
use std::time::Duration;
use storeclient::action::{Action, HELP};
use storeclient::config::{Connection, DEFAULT_CONFIG_PATH};
use storeclient::issuer::{Issuer, DEFAULT_BURST};
use storeclient::order::DEFAULT_ORDERS_DIR;
use storeclient::worker::Schedule;
use storeclient::ClientError;

fn main() {
    if let Err(e) = run() {
        println!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let default_burst = DEFAULT_BURST.to_string();
    let matches = App::new("client")
        .version("0.0.1")
        .author("Alessio Giambrone <AlessioGiambrone@users.noreply.github.com>")
        .about("Load generator for the catalog and ordering service")
        .setting(AppSettings::TrailingVarArg)
        .after_help(HELP)
        .arg(
            Arg::with_name("ACTION")
                .help("OPERATION [item_id] [--error]; options must come before it")
                .multiple(true)
                .allow_hyphen_values(true)
                .index(1),
        )
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .default_value(DEFAULT_CONFIG_PATH)
                .help("path to the JSON file with the service url and port"),
        )
        .arg(
            Arg::with_name("orders")
                .short("o")
                .long("orders")
                .takes_value(true)
                .default_value(DEFAULT_ORDERS_DIR)
                .help("directory holding one JSON order per file"),
        )
        .arg(
            Arg::with_name("all orders")
                .long("all-orders")
                .help("send every order found in the orders directory, not only the first"),
        )
        .arg(
            Arg::with_name("interval")
                .short("i")
                .long("interval")
                .takes_value(true)
                .default_value("2000")
                .help("pause between iterations, in milliseconds"),
        )
        .arg(
            Arg::with_name("iterations")
                .short("n")
                .long("iterations")
                .takes_value(true)
                .help("stop after this many iterations instead of looping forever"),
        )
        .arg(
            Arg::with_name("burst")
                .long("burst")
                .takes_value(true)
                .default_value(&default_burst)
                .help("concurrent orders sent per iteration with --error"),
        )
        .arg(
            Arg::with_name("timeout")
                .short("t")
                .long("timeout")
                .takes_value(true)
                .help("request timeout, in seconds (no timeout by default)"),
        )
        .arg(
            Arg::with_name("v")
                .short("v")
                .multiple(true)
                .help("Sets the level of verbosity")
                .long_help(
                    "three verbosity levels are available:
(None) each response is printed as elapsed time and body;
       JSON bodies are indented.
-v     the output also shows response status and headers.
-vv    the output shows the sent request method, URL, headers and body
       followed by all what is printed with -v
",
                ),
        )
        .get_matches_safe()
        .map_err(|e| {
            let kind = e.kind;
            match kind {
                ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => e.exit(),
                _ => ClientError::Usage,
            }
        })?;

    let verbosity = matches.occurrences_of("v");
    init_logger(verbosity);

    let connection = Connection::load(matches.value_of("config").unwrap_or(DEFAULT_CONFIG_PATH))?;
    let raw_action: Vec<&str> = matches
        .values_of("ACTION")
        .map(|values| values.collect())
        .unwrap_or_default();
    let action = Action::parse(&raw_action)?;

    let timeout = match matches.value_of("timeout") {
        Some(secs) => Some(Duration::from_secs(secs.parse::<u64>()?)),
        None => None,
    };
    let interval = Duration::from_millis(
        matches
            .value_of("interval")
            .unwrap_or("2000")
            .parse::<u64>()?,
    );
    let iterations = match matches.value_of("iterations") {
        Some(n) => Some(n.parse::<u64>()?),
        None => None,
    };
    let burst_size = matches
        .value_of("burst")
        .unwrap_or(default_burst.as_str())
        .parse::<usize>()?;

    let mut issuer = Issuer::new(connection, timeout)?;
    issuer.schedule = Schedule {
        interval,
        iterations,
    };
    issuer.verbosity = verbosity;
    issuer.orders_dir = PathBuf::from(matches.value_of("orders").unwrap_or(DEFAULT_ORDERS_DIR));
    issuer.all_orders = matches.is_present("all orders");
    issuer.burst_size = burst_size;

    issuer.dispatch(&action)?;
    Ok(())
}

fn init_logger(verbosity: u64) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}
