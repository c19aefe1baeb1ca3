// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::Config;
use crate::fmt::render;
use crate::runner::{QueryError, Runner};
use eyre::Result;
use rustyline::{error::ReadlineError, Editor};
use std::io::BufRead;

/// Evaluates one query per line. Returns false if any query failed.
///
/// A line that isn't valid UTF-8 gets an error reply of its own, and the
/// lines after it are still evaluated.
pub fn noninteractive<T: BufRead>(f: T, config: &Config) -> Result<bool> {
    let runner = Runner::new(config);
    let mut all_ok = true;
    for bytes in f.split(b'\n') {
        let mut bytes = bytes?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        let (line, result) = match String::from_utf8(bytes) {
            Ok(line) => {
                let result = runner.eval(&line);
                (line, result)
            }
            Err(err) => {
                tracing::warn!("Skipping line that is not valid UTF-8");
                let line = String::from_utf8_lossy(err.as_bytes()).into_owned();
                (line, Some(Err(QueryError::InvalidUtf8)))
            }
        };
        if let Some(result) = result {
            all_ok &= result.is_ok();
            println!("{}", render(config, &line, &result));
        }
    }
    Ok(all_ok)
}

pub const HELP_TEXT: &str = "Queries:
  prime N     checks whether N is prime
  factor N    prime factorization of N
  N           same as `factor N`
To quit, type `quit` or press Ctrl+D.";

pub fn interactive(config: &Config) -> Result<()> {
    let runner = Runner::new(config);
    let mut rl = Editor::<()>::new();

    loop {
        let readline = rl.readline(&config.output.prompt);
        match readline {
            Ok(ref line) if line.trim() == "help" => {
                println!("{}", HELP_TEXT);
            }
            Ok(ref line) if line.trim() == "quit" || line.trim() == "exit" => {
                break;
            }
            Ok(line) => {
                rl.add_history_entry(line.as_str());
                if let Some(result) = runner.eval(&line) {
                    println!("{}", render(config, &line, &result));
                }
            }
            Err(ReadlineError::Interrupted) => {}
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                tracing::error!("Readline error: {}", err);
                return Err(eyre::eyre!(err));
            }
        }
    }
    Ok(())
}
