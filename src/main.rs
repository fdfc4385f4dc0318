use anyhow::Context;
use chronos::OutputFormat;
use chronos::areas::repository::Repository;
use chronos::artifacts::core::{PagerWriter, should_page};
use chronos::artifacts::log::{LogFilter, LogQuery};
use chronos::artifacts::reference::version_reference::VersionReference;
use chronos::commands::porcelain::compare::CompareOptions;
use chronos::commands::porcelain::details::DetailsOptions;
use chronos::commands::porcelain::history::HistoryOptions;
use chronos::commands::porcelain::log::LogOptions;
use clap::{Parser, Subcommand};
use minus::Pager;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "CHRONOS_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(
    name = "chronos",
    version = "0.1.0",
    about = "Browse snapshot and Git history and compare file versions",
    long_about = "chronos reads the local snapshot history recorded by the editor extension \
    together with the project's Git history, and compares any two versions of a file: \
    the working copy, a snapshot, the index or any Git revision.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        long = "repo",
        global = true,
        help = "The project root (defaults to the current directory)"
    )]
    repo: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "compare",
        about = "Show the patch between two versions of a file",
        long_about = "Each side is a path (absolute, project-relative, or .history/<storage name> \
        for a snapshot) and an optional Git revision. Missing versions compare as empty files."
    )]
    Compare {
        #[arg(index = 1, help = "Path of the original side")]
        path_a: String,
        #[arg(index = 2, help = "Path of the modified side")]
        path_b: String,
        #[arg(long, help = "Git revision of the original side")]
        rev_a: Option<String>,
        #[arg(long, help = "Git revision of the modified side")]
        rev_b: Option<String>,
        #[arg(long, help = "Print the result as JSON")]
        json: bool,
        #[arg(long, help = "Append hunk and line counts")]
        stat: bool,
    },
    #[command(name = "show", about = "Print one version of a file")]
    Show {
        #[arg(index = 1)]
        path: String,
        #[arg(long, help = "Git revision to read the file at")]
        rev: Option<String>,
        #[arg(long, conflicts_with = "rev", help = "Read the file from the index")]
        staged: bool,
    },
    #[command(name = "history", about = "List recorded snapshots, newest first")]
    History {
        #[arg(index = 1, help = "Only list snapshots of this project-relative file")]
        file: Option<String>,
        #[arg(short = 'n', long, help = "Maximum number of snapshots")]
        limit: Option<usize>,
        #[arg(long, help = "Print the snapshots as JSON")]
        json: bool,
    },
    #[command(
        name = "log",
        about = "Show commits touching a file, or the whole repository",
        long_about = "Without a file the whole repository is listed, 50 commits unless -n says otherwise."
    )]
    Log {
        #[arg(index = 1)]
        file: Option<String>,
        #[arg(short = 'n', long, help = "Maximum number of commits")]
        limit: Option<usize>,
        #[arg(
            short = 'L',
            long = "lines",
            requires = "file",
            help = "Only commits touching lines <start>,<end>"
        )]
        lines: Option<String>,
        #[arg(
            short = 'S',
            long = "search",
            conflicts_with = "lines",
            help = "Only commits adding or removing this text"
        )]
        search: Option<String>,
        #[arg(
            short = 'G',
            long = "grep",
            conflicts_with_all = ["lines", "search"],
            help = "Only commits whose added or removed lines match this regex"
        )]
        grep: Option<String>,
        #[arg(long, help = "One line per commit")]
        oneline: bool,
    },
    #[command(
        name = "details",
        about = "Show working tree changes of a file",
        long_about = "Compares the index with the working copy, or HEAD with the index when --staged is given."
    )]
    Details {
        #[arg(index = 1)]
        file: String,
        #[arg(long)]
        staged: bool,
        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },
    #[command(name = "status", about = "Show the working tree status")]
    Status,
    #[command(name = "branches", about = "List local and remote-tracking branches")]
    Branches,
}

fn parse_line_range(range: &str) -> anyhow::Result<LogFilter> {
    let (start, end) = range
        .split_once(',')
        .with_context(|| format!("line range must be <start>,<end>, got '{range}'"))?;
    let start = start
        .trim()
        .parse::<u32>()
        .with_context(|| format!("invalid start line: {start}"))?;
    let end = end
        .trim()
        .parse::<u32>()
        .with_context(|| format!("invalid end line: {end}"))?;

    if start == 0 || end < start {
        anyhow::bail!("invalid line range: {range}");
    }

    Ok(LogFilter::LineRange { start, end })
}

async fn run(repository: &Repository, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Compare {
            path_a,
            path_b,
            rev_a,
            rev_b,
            json,
            stat,
        } => {
            let opts = CompareOptions {
                a: VersionReference::new(path_a, rev_a),
                b: VersionReference::new(path_b, rev_b),
                format: OutputFormat::from_json_flag(json),
                stat,
            };
            repository.compare(&opts).await
        }
        Commands::Show { path, rev, staged } => {
            let reference = if staged {
                VersionReference::staged(path)
            } else {
                VersionReference::new(path, rev)
            };
            repository.show(&reference).await
        }
        Commands::History { file, limit, json } => {
            let opts = HistoryOptions {
                file,
                limit,
                format: OutputFormat::from_json_flag(json),
            };
            repository.history(&opts).await
        }
        Commands::Log {
            file,
            limit,
            lines,
            search,
            grep,
            oneline,
        } => {
            let filter = match (lines, search, grep) {
                (Some(lines), _, _) => parse_line_range(&lines)?,
                (None, Some(search), _) => LogFilter::Pickaxe(search),
                (None, None, Some(grep)) => LogFilter::Grep(grep),
                (None, None, None) => LogFilter::File,
            };
            let query = match file {
                Some(file) => LogQuery::file(file),
                None => LogQuery::repository(),
            };
            let opts = LogOptions {
                query: query.with_limit(limit).with_filter(filter),
                oneline,
            };
            repository.log(&opts).await
        }
        Commands::Details { file, staged, json } => {
            let opts = DetailsOptions {
                file,
                staged,
                format: OutputFormat::from_json_flag(json),
            };
            repository.details(&opts).await
        }
        Commands::Status => repository.status().await,
        Commands::Branches => repository.branches().await,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so patches and JSON on stdout stay machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let repo_path = match cli.repo {
        Some(path) => path,
        None => std::env::current_dir()?.to_string_lossy().to_string(),
    };

    if should_page() {
        let pager = Pager::new();
        let repository = Repository::new(&repo_path, Box::new(PagerWriter::new(pager.clone())))?;
        run(&repository, cli.command).await?;
        drop(repository);
        minus::page_all(pager)?;
    } else {
        let repository = Repository::new(&repo_path, Box::new(std::io::stdout()))?;
        run(&repository, cli.command).await?;
    }

    Ok(())
}
