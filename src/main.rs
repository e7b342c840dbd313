use clap::{App, Arg, ArgMatches};
use log::{error, LevelFilter};
use std::io;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use csvgroup::config::{parse_delimiter, parse_encoding, DEFAULT_INPUT, DEFAULT_OUTPUT};
use csvgroup::menu::run_action;
use csvgroup::{Action, Columns, Config, Menu, NumericPolicy};

fn column(matches: &ArgMatches, name: &str, default: usize) -> Result<usize, String> {
    match matches.value_of(name) {
        Some(v) => usize::from_str(v)
            .map_err(|_| format!("{} must be a column index, got {:?}", name, v)),
        None => Ok(default),
    }
}

fn build_config(matches: &ArgMatches) -> Result<Config, String> {
    let defaults = Columns::default();

    Ok(Config {
        input: PathBuf::from(matches.value_of("input").unwrap_or(DEFAULT_INPUT)),
        output: PathBuf::from(matches.value_of("output").unwrap_or(DEFAULT_OUTPUT)),
        delimiter: parse_delimiter(matches.value_of("delimiter").unwrap_or(";"))
            .map_err(|e| e.to_string())?,
        encoding: parse_encoding(matches.value_of("encoding").unwrap_or("utf-8"))
            .map_err(|e| e.to_string())?,
        has_header: !matches.is_present("no-header"),
        columns: Columns {
            department: column(matches, "department-col", defaults.department)?,
            team: column(matches, "team-col", defaults.team)?,
            salary: column(matches, "salary-col", defaults.salary)?,
        },
        numeric_policy: if matches.is_present("skip-non-numeric") {
            NumericPolicy::Skip
        } else {
            NumericPolicy::Fail
        },
    })
}

fn main() {
    let matches = App::new("csvgroup")
        .version("0.1")
        .about("Reports the teams and salary stats of every department in an employee file")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .value_name("INPUT")
                .help("Employee file to read"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("OUTPUT")
                .help("Where the salary stats are saved"),
        )
        .arg(
            Arg::with_name("delimiter")
                .short("d")
                .long("delimiter")
                .value_name("CHAR")
                .help("Field separator of the input file"),
        )
        .arg(
            Arg::with_name("encoding")
                .short("e")
                .long("encoding")
                .value_name("LABEL")
                .help("Text encoding of the input file"),
        )
        .arg(
            Arg::with_name("no-header")
                .long("no-header")
                .help("The first line of the input is data too"),
        )
        .arg(
            Arg::with_name("department-col")
                .long("department-col")
                .value_name("INDEX")
                .help("Zero based index of the department column"),
        )
        .arg(
            Arg::with_name("team-col")
                .long("team-col")
                .value_name("INDEX")
                .help("Zero based index of the team column"),
        )
        .arg(
            Arg::with_name("salary-col")
                .long("salary-col")
                .value_name("INDEX")
                .help("Zero based index of the salary column"),
        )
        .arg(
            Arg::with_name("skip-non-numeric")
                .long("skip-non-numeric")
                .help("Leave out salaries that are not numbers instead of failing"),
        )
        .arg(
            Arg::with_name("action")
                .short("a")
                .long("action")
                .value_name("N")
                .possible_values(&["1", "2", "3", "4"])
                .help("Run a single action instead of the menu"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more, repeat for even more"),
        )
        .get_matches();

    let level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = match build_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            process::exit(2);
        }
    };

    let stdout = io::stdout();

    let result = match matches.value_of("action") {
        Some(choice) => match choice.parse::<Action>() {
            Ok(action) => run_action(&config, action, &mut stdout.lock()),
            Err(e) => {
                error!("invalid action {:?}", e.0);
                process::exit(2);
            }
        },
        None => {
            let stdin = io::stdin();

            Menu::new(config).run(stdin.lock(), stdout.lock())
        }
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
