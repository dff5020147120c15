//! Input collection and validation.
//!
//! Everything the allocator assumes about its inputs is enforced here:
//! dotted-quad addresses are checked against a regex before parsing, the
//! base prefix is restricted to /8..=/30, and non-positive host counts are
//! coerced to 1 (with a console warning) per the tool's inherited policy.
//! The prompt functions are generic over [`BufRead`] so they can be driven
//! from a test cursor as well as stdin.

use crate::error::InputError;
use crate::models::{Ipv4, MAX_BASE_PREFIX, MIN_BASE_PREFIX};
use colored::Colorize;
use lazy_static::lazy_static;
use regex::Regex;
use std::io::{self, BufRead, Write};
use std::net::Ipv4Addr;

lazy_static! {
    static ref DOTTED_QUAD: Regex = Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$"
    )
    .expect("dotted-quad pattern is valid");
}

/// Validate and parse a base network from separate address and prefix strings.
pub fn parse_base_network(addr: &str, prefix: &str) -> Result<Ipv4, InputError> {
    let addr = addr.trim();
    if !DOTTED_QUAD.is_match(addr) {
        return Err(InputError::MalformedAddress(addr.to_string()));
    }
    let prefix = prefix.trim();
    let mask: u8 = prefix
        .parse()
        .map_err(|_| InputError::NotAnInteger(prefix.to_string()))?;
    if !(MIN_BASE_PREFIX..=MAX_BASE_PREFIX).contains(&mask) {
        return Err(InputError::PrefixOutOfRange(mask));
    }
    let parsed: Ipv4Addr = addr
        .parse()
        .map_err(|_| InputError::MalformedAddress(addr.to_string()))?;
    Ok(Ipv4 { addr: parsed, mask })
}

/// Parse a signed integer from user input.
pub fn parse_count(s: &str) -> Result<i64, InputError> {
    let s = s.trim();
    s.parse()
        .map_err(|_| InputError::NotAnInteger(s.to_string()))
}

/// Parse the number of subnets to plan; must be at least 1.
pub fn parse_subnet_count(s: &str) -> Result<usize, InputError> {
    let n = parse_count(s)?;
    if n < 1 {
        return Err(InputError::NoSubnetsRequested);
    }
    Ok(n as usize)
}

/// Coerce a host count to the minimum of 1. Caller policy: non-positive
/// requirements become the smallest valid request instead of an error.
pub fn coerce_min_hosts(n: i64) -> u32 {
    n.clamp(1, i64::from(u32::MAX)) as u32
}

fn read_trimmed_line<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut line = String::new();
    let n = reader.read_line(&mut line)?;
    if n == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }
    Ok(line.trim().to_string())
}

/// Prompt for a base network, re-asking until the input validates.
pub fn prompt_base_network<R: BufRead>(reader: &mut R) -> io::Result<Ipv4> {
    loop {
        print!("Base IP address (e.g. 192.168.0.0): ");
        io::stdout().flush()?;
        let addr = read_trimmed_line(reader)?;

        print!("Base CIDR prefix (8-30, e.g. 24): ");
        io::stdout().flush()?;
        let prefix = read_trimmed_line(reader)?;

        match parse_base_network(&addr, &prefix) {
            Ok(net) => return Ok(net),
            Err(e) => println!(
                "{}",
                format!("Error: {}. Please enter valid values.", e).red()
            ),
        }
    }
}

/// Prompt for the subnet count and one host requirement per subnet.
pub fn prompt_requirements<R: BufRead>(reader: &mut R) -> io::Result<Vec<u32>> {
    let count = loop {
        print!("How many subnets do you need?: ");
        io::stdout().flush()?;
        match parse_subnet_count(&read_trimmed_line(reader)?) {
            Ok(n) => break n,
            Err(e) => println!("{}", format!("Error: {}", e).red()),
        }
    };

    let mut requirements = Vec::with_capacity(count);
    for i in 0..count {
        loop {
            print!("Hosts needed for subnet #{}: ", i + 1);
            io::stdout().flush()?;
            match parse_count(&read_trimmed_line(reader)?) {
                Ok(n) => {
                    if n < 1 {
                        println!(
                            "{}",
                            "At least 1 host is required. Using minimum of 1".yellow()
                        );
                        log::warn!("subnet #{}: host count {} coerced to 1", i + 1, n);
                    }
                    requirements.push(coerce_min_hosts(n));
                    break;
                }
                Err(e) => println!("{}", format!("Error: {}", e).red()),
            }
        }
    }
    Ok(requirements)
}

/// Ask whether to run another calculation.
pub fn prompt_continue<R: BufRead>(reader: &mut R) -> io::Result<bool> {
    loop {
        print!("\nCalculate another network? (y/n): ");
        io::stdout().flush()?;
        match read_trimmed_line(reader)?.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("{}", "Please enter 'y' or 'n'".red()),
        }
    }
}
