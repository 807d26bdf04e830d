use clap::Parser;
use cupcake_page::cli::commands::{ReplayOptions, cmd_layout, cmd_replay, cmd_transform, cmd_validate};
use cupcake_page::cli::config::{
    Cli, Commands, load_config, resolve_format, resolve_today, resolve_trace_path,
};
use cupcake_page::form::form_model::FormSnapshot;
use cupcake_page::trace::logger::TraceLogger;

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_deref());

    // Resolve trace destination: CLI > config > disabled
    let tracer = TraceLogger::from_path(resolve_trace_path(cli.trace.as_deref(), &config));

    match cli.command {
        Commands::Validate {
            name,
            email,
            phone,
            order,
            date,
            today,
        } => {
            let snapshot = FormSnapshot {
                name,
                email,
                phone,
                order_details: order,
                date,
            };
            let today = resolve_today(today.as_deref(), &config)?;
            let outcome = cmd_validate(&snapshot, today, tracer, cli.verbose)?;
            Ok(if outcome.accepted { 0 } else { 1 })
        }
        Commands::Replay {
            script,
            layout,
            today,
            format,
            output,
        } => {
            let options = ReplayOptions {
                script_path: &script,
                layout_path: layout.as_deref(),
                today: resolve_today(today.as_deref(), &config)?,
                format: resolve_format(format.as_deref(), &config),
                output: output.as_deref(),
                reset_delay_ms: config.form.reset_delay_ms,
                verbose: cli.verbose,
            };
            cmd_replay(&options, tracer)?;
            Ok(0)
        }
        Commands::Transform { text } => {
            print!("{}", cmd_transform(&text));
            Ok(0)
        }
        Commands::Layout { format } => {
            print!("{}", cmd_layout(&format)?);
            Ok(0)
        }
    }
}
