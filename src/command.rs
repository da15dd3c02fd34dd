//! Command line operations.
//!
//! Parses `<op> <args...>` and runs the matching library operation. Kept out of
//! `main.rs` so it can be tested.

use crate::models::{Address, Mask, Network};
use crate::seq::{range, split, CancelToken};
use crate::{add, next, prev};
use std::error::Error;

pub const USAGE: &str = "usage: ipaddr-seq <op> <args>
  add   <addr> <value>
  next  <net>
  prev  <net>
  range <net> <step> [count]
  split <net> <prefix> [count]";

/// Result of one command.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Address(&'static str, Option<Address>),
    Networks(&'static str, Vec<Network>),
}

impl Outcome {
    /// Name of the operation that produced this outcome.
    pub fn op(&self) -> &'static str {
        match self {
            Outcome::Address(op, _) | Outcome::Networks(op, _) => op,
        }
    }
}

/// Run the command in `args`. Sequences are cut at `[count]`, else `default_take`.
pub fn execute(
    args: &[String],
    default_take: usize,
    cancel: &CancelToken,
) -> Result<Outcome, Box<dyn Error>> {
    let Some((op, rest)) = args.split_first() else {
        return Err(USAGE.into());
    };
    log::debug!("execute({op}, {rest:?})");

    match op.as_str() {
        "add" => {
            let addr: Address = arg(rest, 0, "addr")?.parse()?;
            let value = arg(rest, 1, "value")?
                .parse::<i64>()
                .map_err(|e| format!("Invalid value: {e}"))?;
            Ok(Outcome::Address("add", add(addr, value)))
        }
        "next" => {
            let nt = Network::new(arg(rest, 0, "net")?)?;
            Ok(Outcome::Networks("next", next(nt).into_iter().collect()))
        }
        "prev" => {
            let nt = Network::new(arg(rest, 0, "net")?)?;
            Ok(Outcome::Networks("prev", prev(nt).into_iter().collect()))
        }
        "range" => {
            let nt = Network::new(arg(rest, 0, "net")?)?;
            let step = arg(rest, 1, "step")?
                .parse::<i64>()
                .map_err(|e| format!("Invalid step: {e}"))?;
            let count = count(rest, 2, default_take)?;
            Ok(Outcome::Networks(
                "range",
                range(nt, step).take(cancel, count),
            ))
        }
        "split" => {
            let nt = Network::new(arg(rest, 0, "net")?)?;
            let prefix = arg(rest, 1, "prefix")?
                .trim_start_matches('/')
                .parse::<u8>()
                .map_err(|e| format!("Invalid prefix: {e}"))?;
            let count = count(rest, 2, default_take)?;
            let mask = Mask {
                prefix,
                bits: nt.bits(),
            };
            Ok(Outcome::Networks("split", split(nt, mask).take(cancel, count)))
        }
        other => Err(format!("Unknown op {other}\n{USAGE}").into()),
    }
}

fn arg<'a>(rest: &'a [String], i: usize, name: &str) -> Result<&'a str, Box<dyn Error>> {
    rest.get(i)
        .map(|s| s.as_str())
        .ok_or_else(|| format!("Missing <{name}>\n{USAGE}").into())
}

fn count(rest: &[String], i: usize, default_take: usize) -> Result<usize, Box<dyn Error>> {
    match rest.get(i) {
        Some(s) => Ok(s.parse::<usize>().map_err(|e| format!("Invalid count {s}: {e}"))?),
        None => Ok(default_take),
    }
}
