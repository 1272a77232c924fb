// Legend for various fix-this comments:
//   * "TODO" - bug or missing crucial feature.
//   * "Improvement potential" - missing nice-to-have feature or an opportunity
//       to make code better or faster.

#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

mod check_roster;
mod generate_main;
mod http_server_state;
mod remote_generator;
mod roster_file;
mod server_config;
mod server_main;

use clap::{Command, arg};


fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("fairkick")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about("Splits a group of players into two balanced teams")
        .subcommand_required(true)
        .subcommand(Command::new("server").about("Run as server").arg(
            arg!(<config_file> "Path to the configuration file: yaml-serialized ServerConfig."),
        ))
        .subcommand(
            Command::new("generate")
                .about("Split players from a roster file into two teams")
                .arg(arg!(<roster_file> "Path to the roster file (yaml or json)"))
                .arg(arg!(--"captain-a" <player> "Blue captain: name or id").required(true))
                .arg(arg!(--"captain-b" <player> "Orange captain: name or id").required(true))
                .arg(
                    arg!(--"players" <players> "Comma-separated names or ids (default: everyone)")
                        .value_delimiter(','),
                )
                .arg(
                    arg!(--"seed" <seed> "Seed for reproducible local runs")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(arg!(--"remote" <url> "Base URL of a fairkick server to delegate to"))
                .arg(
                    arg!(--"timeout" <duration> "Remote request timeout")
                        .value_parser(humantime::parse_duration)
                        .default_value("10s"),
                )
                .arg(arg!(--"json" "Print the result as JSON")),
        )
        .subcommand(
            Command::new("check-roster")
                .about("Verifies that a roster file is valid and prints it.")
                .arg(arg!(<roster_file> "Roster file to check")),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("server", sub_matches)) => {
            let config_file = sub_matches.get_one::<String>("config_file").unwrap();
            let config = server_config::read_config_file(config_file)?;
            async_std::task::block_on(server_main::run(config))
        }
        Some(("generate", sub_matches)) => {
            let config = generate_main::GenerateConfig {
                roster_file: sub_matches.get_one::<String>("roster_file").unwrap().clone(),
                captain_a: sub_matches.get_one::<String>("captain-a").unwrap().clone(),
                captain_b: sub_matches.get_one::<String>("captain-b").unwrap().clone(),
                players: sub_matches
                    .get_many::<String>("players")
                    .map(|players| players.cloned().collect())
                    .unwrap_or_default(),
                seed: sub_matches.get_one::<u64>("seed").copied(),
                remote: sub_matches.get_one::<String>("remote").cloned(),
                timeout: *sub_matches.get_one::<std::time::Duration>("timeout").unwrap(),
                json: sub_matches.get_flag("json"),
            };
            async_std::task::block_on(generate_main::run(config))
        }
        Some(("check-roster", sub_matches)) => {
            check_roster::run(sub_matches.get_one::<String>("roster_file").unwrap())
        }
        _ => unreachable!("Exhausted list of subcommands and subcommand_required prevents `None`"),
    }
}
