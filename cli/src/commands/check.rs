//! The `check` command - resolve declaration files and report identities.

use thiol::{RenderConfig, ResolveOptions, ResolveOptionsOverride, render_error_to};

use crate::cli::CheckArgs;
use crate::common::input::read_input;
use crate::common::{CliError, CliResult};

/// Run the check command.
pub fn run(args: CheckArgs, no_color: bool) -> CliResult<()> {
    let options = ResolveOptions::default().override_with(&ResolveOptionsOverride {
        max_depth: args.max_depth,
    });

    let failed = args
        .files
        .iter()
        .filter(|file| !check_file(file, &args, options, no_color))
        .count();

    if failed > 0 {
        return Err(CliError::Failed {
            failed,
            total: args.files.len(),
        });
    }
    Ok(())
}

/// Check a single file. Returns true if OK, false if errors.
fn check_file(path: &str, args: &CheckArgs, options: ResolveOptions, no_color: bool) -> bool {
    let input = match read_input(path) {
        Ok(input) => input,
        Err(e) => {
            if !args.quiet {
                eprintln!("error: {}", e);
            }
            return false;
        }
    };

    let checked = match thiol::check(&input.content, options) {
        Ok(checked) => checked,
        Err(e) => {
            if !args.quiet {
                let config = RenderConfig {
                    color: !no_color,
                    filename: Some(&input.name),
                    ..Default::default()
                };
                render_error_to(&e, &input.content, &mut std::io::stderr(), &config).ok();
            }
            return false;
        }
    };

    if args.dump_type_context {
        print!("{}", checked.dump());
    } else if !args.quiet {
        println!("{}: OK", input.name);
    }
    true
}
