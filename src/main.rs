use clap::{Arg, ArgAction, ArgMatches, Command};
use group_sanitizer::{
    FieldVerdict, GroupInput, GroupVerdict,
    config::Config,
    error::{AppError, AppResult},
    escape_html, init_tracing, sanitize_and_validate_group,
    validation::{GroupField, validate_field},
};
use serde::Serialize;
use std::io::Read;
use std::process::ExitCode;
use tracing::{error, info};

fn cli() -> Command {
    Command::new("group-sanitizer")
        .about("Validate and sanitize group metadata")
        .subcommand_required(true)
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .global(true)
                .help("Pretty-print JSON output")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("check")
                .about("Validate group JSON read from FILE or stdin")
                .arg(
                    Arg::new("file")
                        .value_name("FILE")
                        .help("Path to a JSON file; reads stdin when omitted"),
                ),
        )
        .subcommand(
            Command::new("field")
                .about("Validate a single group field")
                .arg(
                    Arg::new("field")
                        .value_name("FIELD")
                        .required(true)
                        .value_parser(["name", "description", "category", "privacy"]),
                )
                .arg(Arg::new("value").value_name("VALUE")),
        )
        .subcommand(
            Command::new("escape")
                .about("HTML-escape TEXT")
                .arg(Arg::new("text").value_name("TEXT").required(true)),
        )
}

fn read_input(matches: &ArgMatches) -> AppResult<String> {
    match matches.get_one::<String>("file") {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> AppResult<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}

fn check(matches: &ArgMatches, pretty: bool) -> AppResult<GroupVerdict> {
    let raw = read_input(matches)?;
    let input = GroupInput::from_json_str(&raw)?;
    let verdict = sanitize_and_validate_group(&input);
    print_json(&verdict, pretty)?;
    Ok(verdict)
}

fn check_field(matches: &ArgMatches, pretty: bool) -> AppResult<FieldVerdict> {
    let field: GroupField = matches
        .get_one::<String>("field")
        .and_then(|f| f.parse().ok())
        .ok_or_else(|| AppError::invalid_argument("Unknown group field"))?;
    let value = matches.get_one::<String>("value").map(String::as_str);
    let verdict = FieldVerdict::from(validate_field(field, value));
    print_json(&verdict, pretty)?;
    Ok(verdict)
}

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };
    if let Err(e) = init_tracing(&config) {
        eprintln!("{}", e);
        return ExitCode::from(2);
    }

    let matches = cli().get_matches();
    let pretty = matches.get_flag("pretty");

    match matches.subcommand() {
        Some(("check", sub)) => match check(sub, pretty) {
            Ok(verdict) if verdict.is_valid() => ExitCode::SUCCESS,
            Ok(verdict) => {
                info!(errors = ?verdict.error_messages(), "Group rejected");
                ExitCode::FAILURE
            }
            Err(e) => {
                error!("{}", e);
                ExitCode::from(2)
            }
        },
        Some(("field", sub)) => match check_field(sub, pretty) {
            Ok(verdict) if verdict.valid => ExitCode::SUCCESS,
            Ok(_) => ExitCode::FAILURE,
            Err(e) => {
                error!("{}", e);
                ExitCode::from(2)
            }
        },
        Some(("escape", sub)) => {
            let text = sub.get_one::<String>("text").map(String::as_str);
            println!("{}", escape_html(text));
            ExitCode::SUCCESS
        }
        _ => ExitCode::from(2),
    }
}
