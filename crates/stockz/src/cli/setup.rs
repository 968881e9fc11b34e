use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use stockzapp::model::ItemFields;
use stockzapp::transfer::ExportFormat;
use stockzapp::view::SortField;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "stockz",
    bin_name = "stockz",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(
    about = "Track stock items, quantities and prices from the terminal",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (overrides STOCKZ_DATA and ./.stockz)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t,
        help_heading = "Options"
    )]
    pub output: OutputMode,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// Form fields shared by `add` and `edit`.
#[derive(Args, Debug, Default, Clone)]
pub struct ItemArgs {
    /// Item name (required for add)
    #[arg(long)]
    pub name: Option<String>,

    /// Item code (required for add)
    #[arg(long)]
    pub code: Option<String>,

    /// Quantity in stock
    #[arg(long, short = 'q', allow_hyphen_values = true)]
    pub quantity: Option<String>,

    /// Unit price
    #[arg(long, short = 'p', allow_hyphen_values = true)]
    pub price: Option<String>,

    /// Storage location
    #[arg(long, short = 'l')]
    pub location: Option<String>,

    /// Category
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Free-form description
    #[arg(long, short = 'd')]
    pub description: Option<String>,
}

impl ItemArgs {
    /// Overlay the given flags on `base`; absent flags keep the base value.
    pub fn merge_into(self, base: ItemFields) -> ItemFields {
        ItemFields {
            name: self.name.unwrap_or(base.name),
            code: self.code.unwrap_or(base.code),
            quantity: self.quantity.unwrap_or(base.quantity),
            price: self.price.unwrap_or(base.price),
            location: self.location.unwrap_or(base.location),
            category: self.category.unwrap_or(base.category),
            description: self.description.unwrap_or(base.description),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new item
    #[command(alias = "a")]
    Add(ItemArgs),

    /// Change fields of an existing item
    #[command(alias = "e")]
    Edit {
        /// Item id (or unique prefix)
        id: String,

        #[command(flatten)]
        fields: ItemArgs,
    },

    /// Remove an item
    #[command(alias = "rm")]
    Delete {
        /// Item id (or unique prefix)
        id: String,
    },

    /// Remove every item
    Clear {
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List items (default)
    #[command(alias = "ls")]
    List {
        /// Only show items whose name, code, location, category or description contains this text
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Sort by column
        #[arg(long, value_parser = parse_sort_field)]
        sort: Option<SortField>,

        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,
    },

    /// Show one item in full
    View {
        /// Item id (or unique prefix)
        id: String,
    },

    /// Totals, per-category summary and the highest-value item
    Stats,

    /// Export the inventory as CSV or JSON
    Export {
        /// csv or json
        #[arg(value_parser = parse_export_format)]
        format: ExportFormat,

        /// Output file, `-` for stdout (default: inventory.csv / inventory.json)
        #[arg(long = "out", short = 'o', value_name = "PATH")]
        out: Option<String>,

        /// Do not prefix CSV with a byte order mark
        #[arg(long)]
        no_bom: bool,
    },

    /// Replace the inventory with items from a JSON file (`-` for stdin)
    Import {
        /// Path to a JSON array of items
        path: String,
    },

    /// Show resolved configuration and paths
    Config,
}

fn parse_sort_field(raw: &str) -> Result<SortField, String> {
    raw.parse::<SortField>().map_err(|_| {
        let names: Vec<_> = SortField::ALL.iter().map(|f| f.as_str()).collect();
        format!("expected one of: {}", names.join(", "))
    })
}

fn parse_export_format(raw: &str) -> Result<ExportFormat, String> {
    raw.parse::<ExportFormat>()
        .map_err(|_| "expected csv or json".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn naked_invocation_has_no_command() {
        let cli = Cli::try_parse_from(["stockz"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.output, OutputMode::Text);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = ["stockz", "stats", "--output", "json", "--data", "/tmp/x"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.output, OutputMode::Json);
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn list_sort_parses_field_names() {
        let args = ["stockz", "list", "--sort", "Value", "--desc"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Some(Commands::List { sort, desc, .. }) => {
                assert_eq!(sort, Some(SortField::Value));
                assert!(desc);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn list_rejects_unknown_sort_field() {
        assert!(Cli::try_parse_from(["stockz", "list", "--sort", "colour"]).is_err());
    }

    #[test]
    fn desc_requires_sort() {
        assert!(Cli::try_parse_from(["stockz", "list", "--desc"]).is_err());
    }

    #[test]
    fn export_format_is_validated() {
        assert!(Cli::try_parse_from(["stockz", "export", "xml"]).is_err());
        let args = ["stockz", "export", "csv", "-o", "-"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Some(Commands::Export { format, out, no_bom }) => {
                assert_eq!(format, ExportFormat::Csv);
                assert_eq!(out.as_deref(), Some("-"));
                assert!(!no_bom);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn edit_flags_overlay_current_values() {
        let args = ["stockz", "edit", "ab12", "--price", "99", "-c", "Tools"];
        let cli = Cli::try_parse_from(args).unwrap();
        let Some(Commands::Edit { id, fields }) = cli.command else {
            panic!("expected edit");
        };
        assert_eq!(id, "ab12");

        let base = ItemFields::new("Hammer", "HM-1").with_quantity("3");
        let merged = fields.merge_into(base);
        assert_eq!(merged.name, "Hammer");
        assert_eq!(merged.quantity, "3");
        assert_eq!(merged.price, "99");
        assert_eq!(merged.category, "Tools");
    }
}
