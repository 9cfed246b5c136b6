//! Main CLI application

use crate::error::Result;
use crate::runner::{build_invocation, stdin_is_piped, ProcessRunner, SystemRunner};
use crate::store::{self, Environment, SystemEnvironment};
use clap::{Arg, ArgAction, ArgMatches, Command};

/// Build the clap command
fn build_command() -> Command {
    Command::new("gf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Save and reuse grep search patterns")
        .arg(
            Arg::new("save")
                .long("save")
                .help("Save a pattern (e.g: gf --save pat-name -Hnri 'search-pattern')")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .help("List available patterns")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dump")
                .long("dump")
                .help("Print the engine command rather than executing it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("args")
                .value_name("ARGS")
                .num_args(0..=3)
                // Flag strings like -Hnri arrive as positional values
                .allow_hyphen_values(true)
                .help("Pattern name and target, or name, flags and pattern with --save"),
        )
}

/// Dispatch a parsed invocation to one of the tool's modes
///
/// Returns the process exit code: the engine's own exit code for execute
/// mode, zero for the other modes.
fn dispatch(
    matches: &ArgMatches,
    env: &dyn Environment,
    runner: &dyn ProcessRunner,
    piped: bool,
) -> Result<i32> {
    let args: Vec<String> = matches
        .get_many::<String>("args")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    if matches.get_flag("list") {
        for name in store::list_patterns(env)? {
            println!("{}", name);
        }
        return Ok(0);
    }

    if matches.get_flag("save") {
        let name = args.first().map(String::as_str).unwrap_or("");
        let flags = args.get(1).map(String::as_str).unwrap_or("");
        let pattern = args.get(2).map(String::as_str).unwrap_or("");

        store::save_pattern(env, name, flags, pattern)?;
        return Ok(0);
    }

    // Execute (or dump) a saved pattern
    let Some(name) = args.first() else {
        // No pattern specified, show help
        build_command().print_help()?;
        println!();
        return Ok(0);
    };
    let target = args.get(1).map(String::as_str);

    let (def, path) = store::read_pattern(env, name)?;
    let invocation = build_invocation(&def, &path, target, piped)?;

    if matches.get_flag("dump") {
        println!("{}", invocation);
        return Ok(0);
    }

    let code = runner.run(&invocation.program, &invocation.args())?;
    Ok(code)
}

/// Run the CLI application with the process's arguments
pub fn run() -> Result<i32> {
    let matches = build_command().get_matches();
    dispatch(&matches, &SystemEnvironment, &SystemRunner, stdin_is_piped())
}
