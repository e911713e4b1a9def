
extern crate rx_lint;
extern crate rand;

mod rnd;
mod str_gen;
mod edit_gen;

use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;

use clap::Parser;
use rx_lint::{BuiltinTypes, KnownTypes, ChainResolver, TypeKind, ValidationResult, Validator};
use rnd::*;
use str_gen::*;
use edit_gen::*;

/// Ignore patterns the way they show up in real configurations.
const CORPUS: &[&str] = &[
    r"^Call to an undefined method Foo::bar\(\)\.$",
    r"^Parameter \#1 \$x of function foo expects int\|string, float given\.$",
    r"^Access to an undefined property [a-zA-Z0-9\\_]+::\$foo\.$",
    r"^Method Foo::(get|set)Bar\(\) has no return type specified\.$",
    r"#^Variable \$[a-z]+ might not be defined\.$#",
    r"Foo|Bar",
    r"int|string",
    r"^(?i)unsafe usage of new static\(\)\.$",
    r"~^Property .+::\$\w+ is never read, only written\.$~u",
    r".*",
    r"",
];

#[derive(Parser)]
#[command(name = "rx_pattern_fuzzer")]
#[command(about = "Mutates ignore patterns and checks that validating them holds up", long_about = None)]
struct Cli {
    /// Seed to replay; taken from the clock when missing
    #[arg(long)]
    seed: Option<u64>,

    /// Number of mutated patterns to validate
    #[arg(long, default_value = "100000")]
    iterations: usize,

    /// Maximum number of edits applied to one corpus pattern
    #[arg(long, default_value = "8")]
    edits: usize,
}

fn edit_strategy() -> RandomEdit {
    let mut strategy = RandomEdit::new();
    strategy.add(AppendEdit::with_gen(FragmentGenerator::regex_syntax()));
    strategy.add(InsertEdit::with_gen(FragmentGenerator::regex_syntax()));
    strategy.add(InsertEdit::with_gen(RandomStringGenerator::with_len_and_charset(1..4, "ab|$^.*+?()[]{}\\:<>=!#,-0123456789é")));
    strategy.add(EraseEdit);
    strategy.add(SpliceEdit::with_gen(FragmentGenerator::regex_syntax()));
    strategy
}

/// What must hold for any validation outcome of `pattern`.
fn check_outcome(pattern: &str, outcome: &Result<ValidationResult, rx_lint::MalformedPatternError>) -> Result<(), String> {
    match outcome {
        Err(e) => {
            if e.offset > pattern.len() || !pattern.is_char_boundary(e.offset) {
                return Err(format!("error offset {} is not a position in the pattern", e.offset));
            }
        },
        Ok(result) => {
            if let Some(offset) = result.anchor_in_middle() {
                if pattern.get(offset..(offset + 1)) != Some("$") {
                    return Err(format!("anchor offset {} does not point at a '$'", offset));
                }
            }
            if let Some(sequence) = result.wrong_sequence() {
                if !pattern.contains(sequence) {
                    return Err(format!("universal sequence '{}' is not part of the pattern", sequence));
                }
            }
        },
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    set_seed(cli.seed.unwrap_or_else(seed_from_system_time));
    println!("Fuzzing with seed {}", current_seed());

    let validator = Validator::with_resolver(ChainResolver::new()
        .with(KnownTypes::new().with("Foo", TypeKind::Class).with("Bar", TypeKind::Interface))
        .with(BuiltinTypes));
    let strategy = edit_strategy();

    for i in 0..cli.iterations {
        let mut pattern = sample(CORPUS).to_string();
        for _ in 0..rand_range(&(1..(cli.edits + 1))) {
            pattern = strategy.make_edit(&pattern).apply(&pattern);
        }

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| validator.validate(&pattern)));
        let verdict = match &outcome {
            Ok(outcome) => check_outcome(&pattern, outcome),
            Err(_) => Err("validation panicked".to_string()),
        };
        if let Err(reason) = verdict {
            println!("Iteration {} (seed {}): {}", i, current_seed(), reason);
            println!("Pattern: {:?}", pattern);
            return ExitCode::from(1);
        }
    }

    println!("{} patterns validated", cli.iterations);
    ExitCode::SUCCESS
}
