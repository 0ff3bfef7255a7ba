//! user-validator CLI entry point

use clap::Parser;
use std::process;
use user_validator::cli::check::{CheckOptions, Target, run_check};
use user_validator::cli::common::{EXIT_ERROR, EXIT_SUCCESS, log_ansi};
use user_validator::cli::init::InitOutcome;
use user_validator::cli::{Command, args::Cli};
use user_validator::logging::{LogConfig, init_logging};
use user_validator::report::Submission;

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig::from_verbosity(cli.verbose).with_ansi(log_ansi(cli.color));
    init_logging(&log_config);

    let config = cli.config.as_deref();
    let options = |format| CheckOptions {
        config,
        format,
        color: cli.color,
    };

    let exit_code = match &cli.command {
        Command::Email { value, format } => run_check(Target::Email(value), options(*format)),
        Command::Username { value, format } => {
            run_check(Target::Username(value), options(*format))
        }
        Command::Password {
            value,
            username,
            format,
        } => run_check(
            Target::Password {
                username: username.as_deref(),
                password: value,
            },
            options(*format),
        ),
        Command::Check {
            email,
            username,
            password,
            format,
        } => run_check(
            Target::Submission(Submission {
                email: email.as_deref(),
                username: username.as_deref(),
                password: password.as_deref(),
            }),
            options(*format),
        ),
        Command::Init { force } => match user_validator::cli::init::run_init(config, *force) {
            Ok(result) => {
                match result.outcome {
                    InitOutcome::Created => println!("Created {}", result.path),
                    InitOutcome::Overwritten => println!("Overwrote {}", result.path),
                    InitOutcome::Skipped => {
                        println!("{} already exists (use --force to overwrite)", result.path)
                    }
                }
                EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                EXIT_ERROR
            }
        },
        Command::Config { format } => user_validator::cli::show::run_show_config(config, *format),
    };

    process::exit(exit_code);
}
