//! Fills a vector with random values in 0..=99, prints it, sorts it and prints it again.
//!
//! Usage: classic_sorts_demo [ALGORITHM] [LEN] [DIGITS]
//!
//! Set OVERRIDE_SEED=<u64> to get the same input on every run.

use std::env;
use std::fmt::Display;
use std::process;

use classic_sorts::{other::radix, stable, unstable};
use sort_test_tools::patterns;

const ALGORITHMS: [&str; 7] = [
    "bubble",
    "cocktail",
    "insertion",
    "merge",
    "shell",
    "quick",
    "radix",
];

const DEFAULT_ALGORITHM: &str = "cocktail";
const DEFAULT_LEN: usize = 20;
// Values are below 100.
const DEFAULT_DIGITS: u32 = 2;

fn usage() -> ! {
    eprintln!("Usage: classic_sorts_demo [ALGORITHM] [LEN] [DIGITS]");
    eprintln!("       classic_sorts_demo --list");
    eprintln!();
    eprintln!("ALGORITHM is one of: {}", ALGORITHMS.join(", "));
    eprintln!("DIGITS is only used by radix, defaults to {DEFAULT_DIGITS}.");
    process::exit(2);
}

fn parse_arg<T: std::str::FromStr>(arg: Option<&String>, default: T) -> T {
    match arg {
        None => default,
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            eprintln!("Invalid argument: {arg}");
            usage()
        }),
    }
}

fn display_list<T: Display>(v: &[T]) {
    let line = v
        .iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("{line}");
}

fn main() {
    let args = env::args().skip(1).collect::<Vec<_>>();

    if args.iter().any(|arg| arg == "--list") {
        for name in ALGORITHMS {
            println!("{name}");
        }
        return;
    }
    if args.iter().any(|arg| arg == "-h" || arg == "--help") || args.len() > 3 {
        usage();
    }

    let algorithm = args.first().map_or(DEFAULT_ALGORITHM, |arg| arg.as_str());
    let len = parse_arg(args.get(1), DEFAULT_LEN);
    let digits = parse_arg(args.get(2), DEFAULT_DIGITS);

    if !patterns::is_seed_overridden() {
        patterns::use_random_seed_each_time();
    }
    let mut list = patterns::random_uniform(len, 0..100);

    display_list(&list);

    match algorithm {
        "bubble" => stable::bubble::sort(&mut list),
        "cocktail" => stable::cocktail::sort(&mut list),
        "insertion" => stable::insertion::sort(&mut list),
        "merge" => stable::merge::sort(&mut list),
        "shell" => unstable::shell::sort(&mut list),
        "quick" => unstable::quick::sort(&mut list),
        "radix" => radix::sort_with_digits(&mut list, digits),
        other => {
            eprintln!("Unknown algorithm: {other}");
            usage();
        }
    }

    display_list(&list);
}
