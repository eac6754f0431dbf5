pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "minbar")]
#[command(about = "Mosque companion: Quran reader and news feed", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all surahs
    Surahs {
        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the verses of one surah
    Surah {
        /// Surah number (1-114)
        number: u32,
    },
    /// Show the latest mosque news
    News {
        /// Open the n-th listed item in the browser
        #[arg(long, value_name = "INDEX")]
        open: Option<usize>,
    },
    /// Play the recitation of one verse
    Play {
        /// Surah number (1-114)
        surah: u32,
        /// Verse id within the surah
        ayah: u32,
    },
}
