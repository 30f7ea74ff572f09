use clap::Parser;
use std::{error::Error, path::PathBuf, process::ExitCode};

use fitplan::{
    files::{write_if_changed, Input},
    gen::format_workout_plan,
    PlanDocument,
};

/// Render weekly workout plans into HTML.
#[derive(Debug, Parser)]
enum Command {
    /// Render one or more JSON plans.
    Render {
        /// Plan files or glob patterns. Use `-` to read from stdin.
        #[clap(required = true)]
        inputs: Vec<String>,

        #[command(flatten)]
        options: CliOptions,
    },
}

#[derive(Debug, Clone, Parser)]
struct CliOptions {
    /// Write one `<name>.html` per input into this directory instead of printing to stdout.
    #[clap(long)]
    out_dir: Option<PathBuf>,

    /// Only emit the plan fragment, without the surrounding page and stylesheet.
    #[clap(long)]
    fragment: bool,

    /// Log every step.
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let Command::Render { inputs, options } = Command::parse();

    let level = if options.verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = simple_logger::init_with_level(level) {
        eprintln!("Failed to set up logging: {e}");
    }

    let mut failed = false;
    for pattern in &inputs {
        let expanded = match Input::expand(pattern) {
            Ok(expanded) => expanded,
            Err(e) => {
                log::error!("Invalid input {pattern}: {e}");
                failed = true;
                continue;
            }
        };

        for input in expanded {
            if let Err(e) = render(&input, &options) {
                log::error!("Failed to render {input}: {e}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        log::info!("Done");
        ExitCode::SUCCESS
    }
}

fn render(input: &Input, options: &CliOptions) -> Result<(), Box<dyn Error>> {
    log::debug!("Reading plan from {input}");
    let document = input.read_plan()?;

    if document.plan.is_none() {
        log::info!("{input} does not contain a workout plan");
    }

    let html = if options.fragment {
        format_workout_plan(document.plan.as_ref())
    } else {
        document.to_single_html_page()
    };

    match &options.out_dir {
        Some(out_dir) => {
            let path = out_dir.join(input.output_name());
            std::fs::create_dir_all(out_dir)?;
            if write_if_changed(&path, html)? {
                log::info!("Wrote {}", path.display());
            } else {
                log::info!("{} is up to date", path.display());
            }
        }
        None => println!("{html}"),
    }

    Ok(())
}
