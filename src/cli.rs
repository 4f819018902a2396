//! Command-line interface for the splitter.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{SplitConfig, DEFAULT_SPLIT_COUNT, DEFAULT_SPLIT_DEPTH};
use crate::error::Result;
use crate::fragment::stamp_fragments;
use crate::splitter::Splitter;

/// xml-splitter - Split large XML files into chunks by element count.
#[derive(Parser)]
#[command(name = "xml-splitter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split an XML file into chunks of whole elements.
    Split {
        /// Input XML file
        input: PathBuf,

        /// Nesting depth to split at: 1 splits the root's children, 2 the
        /// root's children's children, and so forth
        #[arg(short, long, default_value_t = DEFAULT_SPLIT_DEPTH)]
        depth: usize,

        /// How many elements at that depth per chunk file
        #[arg(short, long, default_value_t = DEFAULT_SPLIT_COUNT)]
        count: usize,

        /// Text to prepend to each chunk, usually parent opening tags
        #[arg(long)]
        header: Option<String>,

        /// Text to append to each chunk, usually parent closing tags
        #[arg(long)]
        footer: Option<String>,

        /// Existing directory for chunk files (default: system temp dir)
        #[arg(short, long)]
        work_dir: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            input,
            depth,
            count,
            header,
            footer,
            work_dir,
        } => split_command(&input, depth, count, header, footer, work_dir),
    }
}

/// Execute the split command.
fn split_command(
    input: &std::path::Path,
    depth: usize,
    count: usize,
    header: Option<String>,
    footer: Option<String>,
    work_dir: Option<PathBuf>,
) -> Result<()> {
    // Validate configuration before touching the input
    let mut config = SplitConfig::new(depth, count)?;
    config.header = header;
    config.footer = footer;
    config.work_dir = work_dir;

    println!(
        "{} {} (depth {}, {} elements per chunk)",
        style("Splitting").bold(),
        style(input.display()).cyan(),
        style(depth).green(),
        style(count).green()
    );
    println!();

    let file = File::open(input)?;

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // template literal cannot fail to parse
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Splitting...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let splitter = Splitter::new(BufReader::new(file), config);
    let paths = match splitter.split() {
        Ok(paths) => paths,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    let fragments = stamp_fragments(paths);
    for fragment in &fragments {
        println!(
            "  [{}/{}] {}",
            fragment.index + 1,
            fragment.count,
            fragment.path.display()
        );
    }

    println!();
    println!(
        "{} {} chunk(s), group {}",
        style("Produced:").green().bold(),
        fragments.len(),
        fragments
            .first()
            .map(|f| f.group_id.as_str())
            .unwrap_or("-")
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_split_defaults() {
        let cli = Cli::parse_from(["xml-splitter", "split", "input.xml"]);

        let Commands::Split {
            input,
            depth,
            count,
            header,
            footer,
            work_dir,
        } = cli.command;
        assert_eq!(input, PathBuf::from("input.xml"));
        assert_eq!(depth, 1);
        assert_eq!(count, 10);
        assert!(header.is_none());
        assert!(footer.is_none());
        assert!(work_dir.is_none());
    }

    #[test]
    fn test_cli_parse_split_with_options() {
        let cli = Cli::parse_from([
            "xml-splitter",
            "split",
            "input.xml",
            "--depth",
            "2",
            "--count",
            "25",
            "--header",
            "<root>",
            "--footer",
            "</root>",
            "--work-dir",
            "/tmp",
        ]);

        let Commands::Split {
            depth,
            count,
            header,
            footer,
            work_dir,
            ..
        } = cli.command;
        assert_eq!(depth, 2);
        assert_eq!(count, 25);
        assert_eq!(header, Some("<root>".to_string()));
        assert_eq!(footer, Some("</root>".to_string()));
        assert_eq!(work_dir, Some(PathBuf::from("/tmp")));
    }
}
