// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use nu_ansi_term::{AnsiString, AnsiStrings};
use serde_json::{json, Value};

use crate::config::{Config, Format, Theme};
use crate::runner::{QueryError, Reply};

fn to_ansi_inner<'a>(theme: &Theme, strings: &mut Vec<AnsiString<'a>>, reply: &Reply) {
    match reply {
        Reply::Prime { n, prime, divisor } => {
            strings.push(theme.number.paint(n.to_string()));
            if *prime {
                strings.push(" is ".into());
                strings.push(theme.prime.paint("prime"));
            } else {
                strings.push(" is not prime".into());
                if let Some(d) = divisor {
                    strings.push(" (divisible by ".into());
                    strings.push(theme.number.paint(d.to_string()));
                    strings.push(")".into());
                }
            }
        }
        Reply::Factors { n, factorization } => {
            strings.push(theme.number.paint(n.to_string()));
            strings.push(" = ".into());
            if factorization.is_empty() {
                strings.push("1".into());
            }
            for (i, &(prime, exp)) in factorization.powers().iter().enumerate() {
                if i != 0 {
                    strings.push(" * ".into());
                }
                // Legacy factorizations of 1 yield a lone 1, which isn't prime.
                let style = if prime < 2 { theme.number } else { theme.prime };
                strings.push(style.paint(prime.to_string()));
                if exp != 1 {
                    strings.push(format!("^{}", exp).into());
                }
            }
        }
    }
}

pub fn to_ansi_string(config: &Config, reply: &Reply) -> String {
    let theme = config.get_theme();
    let mut strings = vec![];
    to_ansi_inner(&theme, &mut strings, reply);
    AnsiStrings(&strings).to_string()
}

pub fn error_to_ansi_string(config: &Config, err: &QueryError) -> String {
    config.get_theme().error.paint(err.to_string()).to_string()
}

pub fn to_json(query: &str, result: &Result<Reply, QueryError>) -> Value {
    let query = query.trim();
    match result {
        Ok(Reply::Prime { n, prime, divisor }) => json!({
            "query": query,
            "n": n,
            "prime": prime,
            "divisor": divisor,
        }),
        Ok(Reply::Factors { n, factorization }) => json!({
            "query": query,
            "n": n,
            "factors": factorization.factors(),
            "powers": factorization.powers(),
        }),
        Err(err) => json!({
            "query": query,
            "error": err.to_string(),
        }),
    }
}

/// Renders one result the way the config asks for.
pub fn render(config: &Config, query: &str, result: &Result<Reply, QueryError>) -> String {
    match config.output.format {
        Format::Json => to_json(query, result).to_string(),
        Format::Plain => match result {
            Ok(reply) => to_ansi_string(config, reply),
            Err(err) => error_to_ansi_string(config, err),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::Runner;
    use numkit_core::Policy;

    fn colored(policy: Policy, input: &str) -> (String, String) {
        let mut config = Config::default();
        config.colors.enabled = Some(true);
        config.numbers.policy = policy;
        let reply = Runner::new(&config).eval(input).unwrap().unwrap();
        let prime_prefix = config.get_theme().prime.prefix().to_string();
        (to_ansi_string(&config, &reply), prime_prefix)
    }

    #[test]
    fn primes_are_highlighted() {
        let (out, prime_prefix) = colored(Policy::Strict, "factor 12");
        assert!(out.contains(&format!("{}2", prime_prefix)), "{:?}", out);
        assert!(out.contains(&format!("{}3", prime_prefix)), "{:?}", out);
    }

    #[test]
    fn legacy_one_is_not_highlighted() {
        let (out, prime_prefix) = colored(Policy::Legacy, "factor 1");
        assert!(!out.contains(&prime_prefix), "{:?}", out);
        let (out, prime_prefix) = colored(Policy::Strict, "factor 1");
        assert!(!out.contains(&prime_prefix), "{:?}", out);
    }
}
