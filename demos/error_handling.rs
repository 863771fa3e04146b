//! Walkthrough of guarded runs: catching, recovering and cleaning up.
//!
//! # Running
//!
//! ```bash
//! cargo run --example error_handling
//!
//! # With the library's own logs:
//! RUST_LOG=guarded_run=debug cargo run --example error_handling
//! ```

use guarded_run::builtins::{checked_div, element_at, parse_int, read_to_string};
use guarded_run::{Category, Failure, Guard, GuardConfig, Outcome};
use tracing_subscriber::EnvFilter;

fn basic_recovery() {
    println!("=== Recovering from a built-in failure ===\n");

    let outcome = Guard::attempt(|| checked_div(10, 0))
        .catch(Category::ARITHMETIC, |failure| {
            println!("Caught {failure}");
            Ok(-1)
        })
        .run();
    println!("Outcome: {outcome:?}\n");
}

fn multiple_categories() {
    println!("=== One handler, several categories ===\n");

    let outcome = Guard::attempt(|| {
        let value = parse_int("abc")?;
        checked_div(10, value)
    })
    .catch_any_of([Category::CONVERSION, Category::ARITHMETIC], |failure| {
        println!("Caught {} - {}", failure.category(), failure.message());
        Ok(0)
    })
    .run();
    println!("Outcome: {outcome:?}\n");
}

fn success_action() {
    println!("=== Success-only action ===\n");

    let outcome = Guard::attempt(|| parse_int("123"))
        .catch(Category::CONVERSION, |_| {
            println!("Conversion failed.");
            Ok(0)
        })
        .on_success(|num| {
            println!("Conversion succeeded: {num}");
            Ok(num)
        })
        .run();
    println!("Outcome: {outcome:?}\n");
}

fn unhandled_with_cleanup() {
    println!("=== Cleanup always runs ===\n");

    let outcome = Guard::attempt(|| element_at(&[1, 2, 3], 5))
        .catch(Category::LOOKUP, |_| Ok(0))
        .finally(|| -> Outcome<()> {
            println!("Cleaning up (finally block).");
            Ok(())
        })
        .run();
    match outcome {
        Ok(value) => println!("Value: {value}\n"),
        Err(failure) => println!("Unhandled: {failure}\n"),
    }
}

fn cleanup_override() {
    println!("=== A failing cleanup overrides the outcome ===\n");

    let report = Guard::attempt(|| checked_div(1, 0))
        .catch(Category::ARITHMETIC, |failure| {
            println!("Caught {failure}");
            Ok(0)
        })
        .finally(|| -> Outcome<()> {
            println!("Raising from cleanup...");
            Err(Failure::conversion("Exception from finally block"))
        })
        .run_with_report();

    println!("Phases: {:?}", report.phases);
    if let Err(failure) = &report.outcome {
        println!("Final failure: {failure}");
    }
    println!();
}

fn domain_hierarchy() -> anyhow::Result<()> {
    println!("=== Domain categories ===\n");

    let validation = Category::domain("ValidationError");
    let minor = validation.specialize("MinorValidationError");

    let outcome = Guard::attempt(|| -> Outcome<()> {
        Err(Failure::new(minor.clone(), "Minor issue").with_code(1002))
    })
    .catch(validation.clone(), |failure| {
        println!("Caught as ValidationError: {failure}");
        Ok(())
    })
    .run();
    outcome?;

    let config_missing = Category::IO.specialize("ConfigFileMissing");
    let report = Guard::attempt(|| read_to_string("nonexistent.txt"))
        .catch(Category::IO, |failure| {
            Err(Failure::new(config_missing.clone(), failure.message())
                .with_suppressed(failure))
        })
        .run_with_report();
    println!("{}", serde_json::to_string_pretty(&report)?);
    println!();

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = GuardConfig::from_env()?;
    println!("Configuration: {config:?}\n");

    basic_recovery();
    multiple_categories();
    success_action();
    unhandled_with_cleanup();
    cleanup_override();
    domain_hierarchy()?;

    println!("Key takeaways:");
    println!("- Handlers are tried in order; the first matching category wins.");
    println!("- A handler for a general category also catches its specializations.");
    println!("- Cleanup runs exactly once, whatever happened before it.");
    println!("- A failing cleanup replaces the outcome and keeps the old failure as its source.");

    Ok(())
}
