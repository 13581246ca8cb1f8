use clap::Subcommand;
use std::path::PathBuf;

pub mod convert;
pub mod info;

#[derive(Subcommand)]
pub enum Commands {
    /// Convert exported game data into a FactorioLab data set
    Convert {
        /// products.json from the export
        #[arg(short, long)]
        products: PathBuf,

        /// machines_and_buildings.json from the export
        #[arg(short, long)]
        machines: PathBuf,

        /// transports.json from the export (belts, pipes)
        #[arg(short, long)]
        transports: Option<PathBuf>,

        /// Folder searched recursively for icon images
        #[arg(short, long)]
        icons: Option<PathBuf>,

        /// Output directory for data.json and the sprite sheet
        #[arg(short, long, default_value = "./factoriolab_output")]
        output: PathBuf,

        /// Sprite sheet tile size in pixels (overrides the config file)
        #[arg(long)]
        icon_size: Option<u32>,

        /// TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Emit maintenance, computing and worker upkeep on machines
        #[arg(long)]
        machine_consumption: bool,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show a summary of the exported game data
    Info {
        /// products.json from the export
        #[arg(short, long)]
        products: PathBuf,

        /// machines_and_buildings.json from the export
        #[arg(short, long)]
        machines: PathBuf,

        /// transports.json from the export
        #[arg(short, long)]
        transports: Option<PathBuf>,
    },
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Convert {
                products,
                machines,
                transports,
                icons,
                output,
                icon_size,
                config,
                machine_consumption,
                quiet,
            } => convert::execute(&convert::ConvertArgs {
                products,
                machines,
                transports: transports.as_deref(),
                icons: icons.as_deref(),
                output,
                icon_size: *icon_size,
                config: config.as_deref(),
                machine_consumption: *machine_consumption,
                quiet: *quiet,
            }),
            Commands::Info {
                products,
                machines,
                transports,
            } => info::execute(products, machines, transports.as_deref()),
        }
    }

    /// Whether the command asked for quiet output
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        matches!(self, Commands::Convert { quiet: true, .. })
    }
}
