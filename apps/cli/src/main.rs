use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rotationforge_core::{export_text, write_config, Makro, RotationDocument};
use rotationforge_templates::{builtin, TemplateRegistry};

#[derive(Parser)]
#[command(
    name = "rotationforge",
    about = "Headless tools for rotation macro configs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the built-in command templates.
    #[command(subcommand)]
    Templates(TemplatesCommand),
    /// Check a saved editor state for stale or malformed commands.
    Validate(StateArgs),
    /// Print every makro's rendered key lines.
    Render(StateArgs),
    /// Write the flat config consumed by the macro engine.
    Export(ExportArgs),
}

#[derive(Subcommand)]
enum TemplatesCommand {
    /// List template names in registry order.
    List,
    /// Show one template's format, parameters, and example.
    Show { name: String },
}

#[derive(Args)]
struct StateArgs {
    /// Saved editor state (JSON).
    state: PathBuf,
}

#[derive(Args)]
struct ExportArgs {
    /// Saved editor state (JSON).
    state: PathBuf,
    /// Output path; defaults to rotation_config.txt next to the state file.
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let registry = builtin();
    match cli.command {
        Commands::Templates(TemplatesCommand::List) => templates_list(registry),
        Commands::Templates(TemplatesCommand::Show { name }) => templates_show(registry, &name),
        Commands::Validate(args) => validate(registry, &args.state),
        Commands::Render(args) => render_state(registry, &args.state),
        Commands::Export(args) => export(registry, &args.state, args.output),
    }
}

fn templates_list(registry: &TemplateRegistry) -> Result<()> {
    for name in registry.names() {
        println!("{name}");
    }
    Ok(())
}

fn templates_show(registry: &TemplateRegistry, name: &str) -> Result<()> {
    let template = registry.lookup(name)?;
    println!("{}", template.key);
    println!("  format:      {}", template.format.source());
    if template.params.is_empty() {
        println!("  parameters:  (none)");
    } else {
        println!("  parameters:");
        for param in &template.params {
            println!("    - {}", param.name);
        }
    }
    println!("  description: {}", template.description);
    println!("  example:     {}", template.example);
    Ok(())
}

fn load_state(path: &Path) -> Result<RotationDocument> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse {}", path.display()))
}

fn validate(registry: &TemplateRegistry, state: &Path) -> Result<()> {
    let doc = load_state(state)?;
    let mut problems = Vec::new();

    for (makro_index, makro) in doc.makros.iter().enumerate() {
        for (key_index, key) in makro.keys.iter().enumerate() {
            for (command_index, command) in key.commands.iter().enumerate() {
                let location = format!(
                    "{}, key {}, command {}",
                    Makro::display_name(makro_index),
                    key_index + 1,
                    command_index + 1
                );
                if !command.is_set() {
                    continue;
                }
                let Some(template) = registry.get(&command.template) else {
                    problems.push(format!(
                        "{location}: unknown template {:?}",
                        command.template
                    ));
                    continue;
                };
                if !template.passthrough && command.params.len() != template.params.len() {
                    problems.push(format!(
                        "{location}: {:?} expects {} parameter(s), state has {}",
                        template.key,
                        template.params.len(),
                        command.params.len()
                    ));
                }
            }
        }
    }

    if problems.is_empty() {
        println!("{} is valid", state.display());
        Ok(())
    } else {
        for problem in &problems {
            eprintln!("{problem}");
        }
        bail!("{} problem(s) found in {}", problems.len(), state.display());
    }
}

fn render_state(registry: &TemplateRegistry, state: &Path) -> Result<()> {
    let doc = load_state(state)?;
    let spells = doc.spells.selected();
    for (makro_index, makro) in doc.makros.iter().enumerate() {
        println!("{}", Makro::display_name(makro_index));
        for (key_index, key) in makro.keys.iter().enumerate() {
            let line = key.render(registry, &spells);
            if line.is_empty() {
                println!("  key {}: <blank>", key_index + 1);
            } else {
                println!("  key {}: {line}", key_index + 1);
            }
        }
    }
    Ok(())
}

fn export(registry: &TemplateRegistry, state: &Path, output: Option<PathBuf>) -> Result<()> {
    let doc = load_state(state)?;
    let output = output.unwrap_or_else(|| {
        state
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("rotation_config.txt")
    });
    write_config(&doc, registry, &output)
        .with_context(|| format!("failed to export {}", output.display()))?;
    let lines = export_text(&doc, registry).lines().count();
    println!("wrote {} ({lines} lines)", output.display());
    Ok(())
}
