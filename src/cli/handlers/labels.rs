//! Label command handlers.

use anyhow::{Context, Result};

use super::{AppContext, parse_id};
use crate::cli::output::{LabelListing, OutputFormat, print_json};
use crate::cli::{LabelCommand, LabelsArgs};
use crate::domain::LabelId;
use crate::service::{create_label, delete_label};

pub fn handle_labels(args: &LabelsArgs, ctx: &AppContext) -> Result<()> {
    let store = ctx.open_store()?;
    let labels = store
        .labels(ctx.owner)
        .context("failed to list labels")?;

    match args.format {
        OutputFormat::Human => {
            if labels.is_empty() {
                println!("No labels found.");
            } else {
                for label in &labels {
                    match label.color {
                        Some(color) => println!("{:>6}  {}  (color {})", label.id, label.name, color),
                        None => println!("{:>6}  {}", label.id, label.name),
                    }
                }
            }
            Ok(())
        }
        OutputFormat::Json => {
            let listings: Vec<LabelListing> = labels.iter().map(LabelListing::from).collect();
            print_json(listings)
        }
    }
}

pub fn handle_label(command: &LabelCommand, ctx: &AppContext) -> Result<()> {
    let store = ctx.open_store()?;

    match command {
        LabelCommand::Add(args) => {
            let color = args.color.or(ctx.label_color);
            let label = create_label(&store, ctx.owner, &args.name, color)?;
            println!("Created label {} ({})", label.name, label.id);
        }
        LabelCommand::Rm(args) => {
            let id: LabelId = parse_id(&args.id, "label")?;
            delete_label(&store, ctx.owner, id)?;
            println!("Deleted label {}", id);
        }
    }

    Ok(())
}
