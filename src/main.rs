use anyhow::Context;
use clap::Parser;
use labbook::utils::{logger, validation::Validate};
use labbook::{labs, Cli, Commands, Console, LabId, LabRunner, LabbookConfig, Output, RunReport};
use serde::Serialize;

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日誌
    if cli.json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::info!("Starting labbook");
    tracing::debug!("CLI: {:?}", cli);

    if let Err(e) = execute(&cli) {
        tracing::error!(
            "❌ labbook failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        if cli.json {
            let report = JsonOut {
                ok: false,
                data: e.user_friendly_message(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("serializing error report")?
            );
        } else {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        }
        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn execute(cli: &Cli) -> labbook::Result<()> {
    let config = LabbookConfig::discover(cli.config.as_deref())?;
    config.validate()?;
    tracing::debug!("Config: {:?}", config);

    let runner = LabRunner::new(config);

    match &cli.command {
        Commands::List { group } => {
            let infos = labs::catalog(runner.settings(), *group);
            if cli.json {
                print_json(&infos)?;
            } else {
                for info in infos {
                    let marker = if info.interactive { "\tinteractive" } else { "" };
                    println!("{}\t{}\t{}{}", info.id, info.group, info.title, marker);
                }
            }
        }
        Commands::Describe { lab } => {
            let info = labs::info(*lab, runner.settings());
            if cli.json {
                print_json(&info)?;
            } else {
                println!("name: {}", info.id);
                println!("title: {}", info.title);
                println!("group: {}", info.group);
                println!("interactive: {}", if info.interactive { "yes" } else { "no" });
                println!("concepts:");
                for concept in &info.concepts {
                    println!("  - {}", concept);
                }
            }
        }
        Commands::Run { lab, input } => {
            let lab_input = runner.input_for(*lab, input.as_deref());
            if cli.json {
                let report = runner.capture(*lab, lab_input)?;
                print_json(&report)?;
            } else {
                let mut console = Console::new(lab_input, Output::stdout());
                runner.run(*lab, &mut console)?;
            }
        }
        Commands::All => {
            let mut reports: Vec<RunReport> = Vec::new();
            for id in LabId::ALL {
                if id.is_interactive() && !runner.has_scripted_input(id) {
                    tracing::warn!("Skipping {}: no [inputs] entry configured", id);
                    if !cli.json {
                        eprintln!("⏭️  skipped {} (needs input)", id);
                    }
                    continue;
                }

                let lab_input = runner.input_for(id, None);
                if cli.json {
                    reports.push(runner.capture(id, lab_input)?);
                } else {
                    println!("##### {} #####", id);
                    let mut console = Console::new(lab_input, Output::stdout());
                    runner.run(id, &mut console)?;
                    println!();
                }
            }
            if cli.json {
                print_json(&reports)?;
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(data: T) -> labbook::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}
