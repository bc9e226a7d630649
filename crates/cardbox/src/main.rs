//! `cardbox` - CLI for the contact-card editor
//!
//! This binary provides the command-line interface for editing the working
//! card, exporting vCard files, and managing shared snapshots.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;

use cardbox::card::ContactCard;
use cardbox::cli::{
    Cli, Command, ConfigCommand, EditCommand, ExportCommand, ListCommand, OpenCommand, SetArgs,
    ShareCommand, ShowCommand, StatsCommand,
};
use cardbox::link::{self, LaunchParams, ViewMode};
use cardbox::storage::SnapshotStore;
use cardbox::{draft, init_logging, render, vcf, Config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Edit(edit_cmd) => handle_edit(&config, edit_cmd),
        Command::Show(show_cmd) => handle_show(&config, &show_cmd),
        Command::Export(export_cmd) => handle_export(&config, &export_cmd),
        Command::Share(share_cmd) => handle_share(&config, &share_cmd),
        Command::Open(open_cmd) => handle_open(&config, &open_cmd),
        Command::List(list_cmd) => handle_list(&config, &list_cmd),
        Command::Stats(stats_cmd) => handle_stats(&config, &stats_cmd),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn open_store(config: &Config) -> anyhow::Result<SnapshotStore> {
    SnapshotStore::open(config.database_path(), config.storage.max_share_bytes)
        .context("failed to open snapshot store")
}

fn handle_edit(config: &Config, cmd: EditCommand) -> anyhow::Result<()> {
    let draft_path = config.draft_path();
    let mut card = draft::load(&draft_path)?;

    match cmd {
        EditCommand::Set(args) => {
            apply_set(&mut card, args);
            draft::save(&draft_path, &card)?;
            println!("Updated card for {}", display_name(&card));
        }
        EditCommand::AddField { label, value, icon } => {
            let id = card.add_custom_field(&label, &value, icon);
            draft::save(&draft_path, &card)?;
            println!("Added field \"{label}\" (id {id})");
        }
        EditCommand::RemoveField { id } => {
            if card.remove_custom_field(&id) {
                draft::save(&draft_path, &card)?;
                println!("Removed field {id}");
            } else {
                println!("No field with id {id}");
            }
        }
        EditCommand::AddSocial {
            platform,
            url,
            icon,
        } => {
            card.add_social_link(&platform, &url, &icon)?;
            draft::save(&draft_path, &card)?;
            println!("Added {platform} link");
        }
        EditCommand::RemoveSocial { platform } => {
            if card.remove_social_link(&platform) {
                draft::save(&draft_path, &card)?;
                println!("Removed {platform} link");
            } else {
                println!("No link for platform {platform}");
            }
        }
        EditCommand::AddImage { url } => {
            card.add_image(&url);
            draft::save(&draft_path, &card)?;
            println!("Added image ({} in gallery)", card.images.len());
        }
        EditCommand::RemoveImage { url } => {
            if card.remove_image(&url) {
                draft::save(&draft_path, &card)?;
                println!("Removed image ({} in gallery)", card.images.len());
            } else {
                println!("No such image in gallery");
            }
        }
        EditCommand::Clear { yes } => {
            if yes {
                draft::clear(&draft_path)?;
                println!("Cleared the working card.");
            } else {
                println!("This will reset the working card to defaults.");
                println!("Use --yes to confirm.");
            }
        }
    }
    Ok(())
}

/// Apply every provided option from `edit set` to the card.
fn apply_set(card: &mut ContactCard, args: SetArgs) {
    if let Some(v) = args.first_name {
        card.first_name = v;
    }
    if let Some(v) = args.last_name {
        card.last_name = v;
    }
    if let Some(v) = args.organization {
        card.organization = v;
    }
    if let Some(v) = args.title {
        card.title = v;
    }
    if let Some(v) = args.email {
        card.email = v;
    }
    if let Some(v) = args.phone {
        card.phone = v;
    }
    if let Some(v) = args.website {
        card.website = v;
    }
    if let Some(v) = args.photo {
        card.photo = v;
    }
    if let Some(v) = args.logo {
        card.logo = v;
    }
    if let Some(v) = args.linkedin {
        card.social.linkedin = v;
    }
    if let Some(v) = args.instagram {
        card.social.instagram = v;
    }
    if let Some(v) = args.whatsapp {
        card.social.whatsapp = v;
    }
    if let Some(v) = args.street {
        card.address.street = v;
    }
    if let Some(v) = args.city {
        card.address.city = v;
    }
    if let Some(v) = args.state {
        card.address.state = v;
    }
    if let Some(v) = args.zip {
        card.address.zip = v;
    }
    if let Some(v) = args.country {
        card.address.country = v;
    }
    if let Some(v) = args.theme {
        card.theme = v.into();
    }
    if let Some(v) = args.template {
        card.template = v.into();
    }
    if let Some(v) = args.brand_color {
        card.brand_color = v;
    }
}

fn display_name(card: &ContactCard) -> String {
    let name = card.full_name();
    if name.is_empty() {
        "(unnamed card)".to_string()
    } else {
        name
    }
}

fn handle_show(config: &Config, cmd: &ShowCommand) -> anyhow::Result<()> {
    let card = draft::load(config.draft_path())?;

    if cmd.vcf {
        println!("{}", vcf::serialize(&card));
    } else if cmd.html {
        print!("{}", render::html(&card));
    } else {
        print!("{}", render::text(&card));
        if !card.custom_fields.is_empty() {
            println!("\nField ids (for edit remove-field):");
            for field in &card.custom_fields {
                println!("  {}  {}", field.id, field.label);
            }
        }
    }
    Ok(())
}

fn handle_export(config: &Config, cmd: &ExportCommand) -> anyhow::Result<()> {
    let card = draft::load(config.draft_path())?;
    let path = cmd
        .output
        .clone()
        .unwrap_or_else(|| vcf::file_name(&card).into());

    std::fs::write(&path, vcf::serialize(&card))
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!("Wrote {} ({})", path.display(), vcf::MIME_TYPE);
    Ok(())
}

fn handle_share(config: &Config, cmd: &ShareCommand) -> anyhow::Result<()> {
    let draft_path = config.draft_path();
    let mut card = draft::load(&draft_path)?;

    let store = open_store(config)?;
    let id = store.put(&card)?;
    let share_link = link::build_share_link(&config.share.base_url, &id)?;

    card.shareable_link = Some(share_link.clone());
    draft::save(&draft_path, &card)?;

    let qr = link::qr_payload(Some(&share_link), &config.share.base_url);
    if cmd.json {
        let out = serde_json::json!({
            "id": id,
            "link": share_link,
            "qrPayload": qr,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Shareable link: {share_link}");
        println!("QR payload:     {qr}");
    }
    Ok(())
}

fn handle_open(config: &Config, cmd: &OpenCommand) -> anyhow::Result<()> {
    let params = LaunchParams::parse(&cmd.link, config.share.admin_token.as_deref())?;
    let mode = params.view_mode();

    let card = match &params.card_id {
        Some(id) => {
            let store = open_store(config)?;
            match store.get(id)? {
                Some(card) => card,
                None => {
                    println!("Snapshot {id} not found (it may have been evicted).");
                    return Ok(());
                }
            }
        }
        // No id in the link: show the working card in the selected mode.
        None => draft::load(config.draft_path())?,
    };

    println!("Contact Card ({mode})");
    println!("--------------------");
    print!("{}", render::text(&card));
    match mode {
        ViewMode::Editor => println!("\nAdmin mode - full editing capabilities enabled."),
        ViewMode::ReadOnly => println!("\nView only mode."),
    }
    Ok(())
}

fn handle_list(config: &Config, cmd: &ListCommand) -> anyhow::Result<()> {
    let store = open_store(config)?;
    let infos = store.list()?;

    if cmd.json {
        let rows: Vec<serde_json::Value> = infos
            .iter()
            .map(|info| {
                serde_json::json!({
                    "id": info.id,
                    "createdAt": info.created_at.to_rfc3339(),
                    "sizeBytes": info.size_bytes,
                    "name": info.name,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if infos.is_empty() {
        println!("No snapshots stored.");
    } else {
        println!("{:<34} {:<25} {:>10}  NAME", "ID", "CREATED", "BYTES");
        for info in infos {
            println!(
                "{:<34} {:<25} {:>10}  {}",
                info.id,
                info.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
                info.size_bytes,
                info.name
            );
        }
    }
    Ok(())
}

fn handle_stats(config: &Config, cmd: &StatsCommand) -> anyhow::Result<()> {
    let store = open_store(config)?;
    let stats = store.stats()?;

    if cmd.json {
        let out = serde_json::json!({
            "totalSnapshots": stats.total_snapshots,
            "totalBytes": stats.total_bytes,
            "maxBytes": stats.max_bytes,
            "oldestSnapshot": stats.oldest_snapshot.map(|t| t.to_rfc3339()),
            "newestSnapshot": stats.newest_snapshot.map(|t| t.to_rfc3339()),
            "dbSizeBytes": stats.db_size_bytes,
            "databasePath": config.database_path(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("cardbox snapshot store");
        println!("----------------------");
        println!("Database:   {}", config.database_path().display());
        println!("Snapshots:  {}", stats.total_snapshots);
        println!(
            "Used:       {} / {} bytes",
            stats.total_bytes, stats.max_bytes
        );
        if let Some(oldest) = stats.oldest_snapshot {
            println!("Oldest:     {}", oldest.format("%Y-%m-%d %H:%M:%S UTC"));
        }
        if let Some(newest) = stats.newest_snapshot {
            println!("Newest:     {}", newest.format("%Y-%m-%d %H:%M:%S UTC"));
        }
        println!("File size:  {} bytes", stats.db_size_bytes);
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:    {}", config.database_path().display());
                println!("  Draft path:       {}", config.draft_path().display());
                println!("  Max share bytes:  {}", config.storage.max_share_bytes);
                println!();
                println!("[Share]");
                println!("  Base URL:         {}", config.share.base_url);
                println!(
                    "  Admin token:      {}",
                    if config.share.admin_token.is_some() {
                        "configured"
                    } else {
                        "not set (edit mode disabled)"
                    }
                );
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
