// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use clap::{Arg, ArgAction, Command};
use eyre::{Result, WrapErr};
use numkit_core::Policy;
use std::fs::File;
use std::io::{stdin, BufReader};
use std::process::ExitCode;

use numkit::config::{self, Format};
use numkit::fmt::render;
use numkit::runner::{group_args, Runner};
use numkit::{logging, repl};

fn main() -> Result<ExitCode> {
    let matches = Command::new("numkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Primality tests and prime factorization")
        .arg(
            Arg::new("QUERY")
                .help("Queries to evaluate, such as `prime 17`, `factor 360` or `360`. If no arguments are provided, an interactive session will start.")
                .num_args(..)
                .allow_negative_numbers(true)
                .required(false),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .help("Reads one query per line from a file, or from stdin if `-`"),
        )
        .arg(
            Arg::new("config-path")
                .long("config-path")
                .help("Prints a path to the config file, then exits")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("legacy")
                .long("legacy")
                .help("Treat 0, 1 and negative numbers as prime and factor 1 as [1]")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print one JSON object per query")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .num_args(1)
                .long("config")
                .action(ArgAction::Set)
                .help("Set path to config.toml"),
        )
        .get_matches();

    color_eyre::install()?;
    logging::init();

    let mut config = config::read_config(matches.get_one::<String>("config").map(|s| &**s))?;
    if matches.get_flag("legacy") {
        config.numbers.policy = Policy::Legacy;
    }
    if matches.get_flag("json") {
        config.output.format = Format::Json;
    }

    let exit_code = |ok: bool| {
        if ok {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    };

    if matches.get_flag("config-path") {
        println!("{}", config::config_toml_path()?.display());
        Ok(ExitCode::SUCCESS)
    } else if let Some(filename) = matches.get_one::<String>("file") {
        match &filename[..] {
            "-" => {
                let stdin_handle = stdin();
                repl::noninteractive(stdin_handle.lock(), &config).map(exit_code)
            }
            _ => {
                let file = File::open(filename)
                    .wrap_err(format!("Failed to open input file `{filename}`"))?;
                repl::noninteractive(BufReader::new(file), &config).map(exit_code)
            }
        }
    } else if let Some(args) = matches.get_many::<String>("QUERY") {
        let runner = Runner::new(&config);
        let mut ok = true;
        for query in group_args(args.cloned()) {
            let Some(result) = runner.eval(&query) else {
                continue;
            };
            ok &= result.is_ok();
            if config.output.format == Format::Plain {
                println!("> {}", query);
            }
            println!("{}", render(&config, &query, &result));
        }
        Ok(exit_code(ok))
    } else {
        repl::interactive(&config).map(|_| ExitCode::SUCCESS)
    }
}
