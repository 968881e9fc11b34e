//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Installs the tracing subscriber
//! - Writes export files
//! - Asks for confirmation
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Resolve the data directory, load config, open the store
//! 3. **API Dispatch**: Call the appropriate `InventoryApi` method
//! 4. **Output Formatting**: Tables and colored messages, or JSON with `--output json`
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::print::{print_item, print_items, print_json, print_messages, print_report};
use super::setup::{Cli, Commands, ItemArgs, OutputMode};
use clap::Parser;
use serde::Serialize;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use stockzapp::api::InventoryApi;
use stockzapp::commands::{CmdMessage, CmdResult};
use stockzapp::config::StockzConfig;
use stockzapp::error::{Result, StockzError};
use stockzapp::init::initialize;
use stockzapp::model::ItemFields;
use stockzapp::session::ViewState;
use stockzapp::store::fs::FileStore;
use stockzapp::transfer::ExportFormat;
use stockzapp::view::{SortConfig, SortDirection, SortField};
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: InventoryApi<FileStore>,
    config: StockzConfig,
    data_dir: PathBuf,
    view: ViewState,
    output: OutputMode,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli);

    match cli.command {
        Some(Commands::Add(fields)) => handle_add(&mut ctx, fields),
        Some(Commands::Edit { id, fields }) => handle_edit(&mut ctx, &id, fields),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, &id),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::List { search, sort, desc }) => handle_list(&mut ctx, search, sort, desc),
        Some(Commands::View { id }) => handle_view(&ctx, &id),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Export {
            format,
            out,
            no_bom,
        }) => handle_export(&ctx, format, out, no_bom),
        Some(Commands::Import { path }) => handle_import(&mut ctx, &path),
        Some(Commands::Config) => handle_config(&ctx),
        None => handle_list(&mut ctx, None, None, false),
    }
}

/// `RUST_LOG` wins when set; otherwise warnings only, or debug for our crates with `-v`.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "warn" };
        EnvFilter::new(format!("warn,stockz={level},stockzapp={level}"))
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn init_context(cli: &Cli) -> AppContext {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let ctx = initialize(&cwd, cli.data.clone());

    AppContext {
        api: ctx.api,
        config: ctx.config,
        data_dir: ctx.data_dir,
        view: ViewState::new(),
        output: cli.output,
    }
}

/// Print a mutation result: the JSON document, or messages followed by the
/// refreshed listing.
fn finish(ctx: &AppContext, result: &CmdResult, show_rows: bool) -> Result<()> {
    if ctx.output == OutputMode::Json {
        return print_json(result);
    }
    print_messages(&result.messages);
    if show_rows {
        if let Some(snapshot) = &result.snapshot {
            println!();
            print_items(&snapshot.items);
        }
    }
    Ok(())
}

fn handle_add(ctx: &mut AppContext, fields: ItemArgs) -> Result<()> {
    let fields = fields.merge_into(ItemFields::default());
    let result = ctx.api.submit(&mut ctx.view, fields)?;
    finish(ctx, &result, false)
}

fn handle_edit(ctx: &mut AppContext, id: &str, fields: ItemArgs) -> Result<()> {
    let id = ctx.api.resolve_id(id)?;
    let current = ctx.api.begin_edit(&mut ctx.view, &id)?;
    let result = ctx.api.submit(&mut ctx.view, fields.merge_into(current))?;
    finish(ctx, &result, false)
}

fn handle_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let id = ctx.api.resolve_id(id)?;
    let result = ctx.api.delete_item(&mut ctx.view, &id)?;
    finish(ctx, &result, false)
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let count = ctx.api.snapshot(&ctx.view)?.report.stats.total_items;
    if count == 0 {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Inventory is already empty."));
        return finish(ctx, &result, false);
    }

    if !yes && !confirm(&format!("This will remove all {} items.", count))? {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Operation cancelled."));
        return finish(ctx, &result, false);
    }

    let result = ctx.api.clear_items(&mut ctx.view)?;
    finish(ctx, &result, false)
}

/// Ask on stderr, read one line from stdin. Only `y` / `yes` confirms.
fn confirm(prompt: &str) -> Result<bool> {
    let mut stderr = io::stderr();
    write!(stderr, "{} Continue? [y/N] ", prompt).map_err(StockzError::Io)?;
    stderr.flush().map_err(StockzError::Io)?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(StockzError::Io)?;
    Ok(matches!(
        input.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

fn handle_list(
    ctx: &mut AppContext,
    search: Option<String>,
    sort: Option<SortField>,
    desc: bool,
) -> Result<()> {
    if let Some(query) = search {
        ctx.view.set_query(query);
    }
    if let Some(field) = sort {
        let direction = if desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        ctx.view.sort = SortConfig::by(field, direction);
    }

    let result = ctx.api.list_items(&ctx.view)?;
    let Some(snapshot) = result.snapshot else {
        return Ok(());
    };

    if ctx.output == OutputMode::Json {
        return print_json(&snapshot);
    }

    print_items(&snapshot.items);
    let stats = &snapshot.report.stats;
    if snapshot.items.len() != stats.total_items {
        println!("\nShowing {} of {} items", snapshot.items.len(), stats.total_items);
    }
    Ok(())
}

fn handle_view(ctx: &AppContext, id: &str) -> Result<()> {
    let id = ctx.api.resolve_id(id)?;
    let item = ctx.api.get_item(&id)?;
    match ctx.output {
        OutputMode::Json => print_json(&item),
        OutputMode::Text => {
            print_item(&item);
            Ok(())
        }
    }
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let snapshot = ctx.api.snapshot(&ctx.view)?;
    match ctx.output {
        OutputMode::Json => print_json(&snapshot.report),
        OutputMode::Text => {
            print_report(&snapshot.report);
            Ok(())
        }
    }
}

fn handle_export(
    ctx: &AppContext,
    format: ExportFormat,
    out: Option<String>,
    no_bom: bool,
) -> Result<()> {
    let with_bom = ctx.config.csv_bom && !no_bom;
    let mut result = ctx.api.export(format, with_bom)?;
    let Some(payload) = result.export.take() else {
        return Err(StockzError::Api("export produced no payload".to_string()));
    };

    if out.as_deref() == Some("-") {
        print!("{}", payload.content);
        if !payload.content.ends_with('\n') {
            println!();
        }
        return Ok(());
    }

    let target = out
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&payload.file_name));
    std::fs::write(&target, payload.content.as_bytes())
        .map_err(StockzError::Io)?;
    tracing::info!(path = %target.display(), "export written");

    if ctx.output == OutputMode::Json {
        #[derive(Serialize)]
        struct Written<'a> {
            format: ExportFormat,
            path: String,
            item_count: usize,
            messages: &'a [CmdMessage],
        }
        return print_json(&Written {
            format: payload.format,
            path: target.display().to_string(),
            item_count: payload.item_count,
            messages: &result.messages,
        });
    }

    print_messages(&result.messages);
    println!("Written to {}", target.display());
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: &str) -> Result<()> {
    let raw = if path == "-" {
        let mut buffer = String::new();
        if io::stdin().is_terminal() {
            return Err(StockzError::Api(
                "refusing to read an import from an interactive terminal".to_string(),
            ));
        }
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(StockzError::Io)?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(StockzError::Io)?
    };

    let result = ctx.api.import_json(&mut ctx.view, &raw)?;
    finish(ctx, &result, true)
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    let store_path = ctx.api.store().path().display().to_string();

    if ctx.output == OutputMode::Json {
        #[derive(Serialize)]
        struct Resolved<'a> {
            data_dir: String,
            store_path: String,
            config: &'a StockzConfig,
        }
        return print_json(&Resolved {
            data_dir: ctx.data_dir.display().to_string(),
            store_path,
            config: &ctx.config,
        });
    }

    let text = toml::to_string(&ctx.config)
        .map_err(|e| StockzError::Api(format!("cannot render config: {}", e)))?;
    println!("# data dir: {}", ctx.data_dir.display());
    println!("# store:    {}", store_path);
    print!("{}", text);
    Ok(())
}
