//! sqlpart: render SQL statements from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Render a CREATE TABLE statement
//! sqlpart create-table users --col id:INT! --col name:VARCHAR(255)
//!
//! # In the MySQL dialect, as JSON
//! sqlpart --dialect mysql create-table shop.order --if-not-exists --format json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use serde::Serialize;
use sqlpart::parser::{parse_column_defn, parse_table_name};
use sqlpart::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sqlpart")]
#[command(version)]
#[command(about = "Render SQL statements from typed parts", long_about = None)]
#[command(after_help = "EXAMPLES:
    sqlpart create-table users --col id:INT! --col email
    sqlpart --dialect mysql create-table shop.order --temporary
    sqlpart create-table report --as 'SELECT * FROM orders' --format json")]
struct Cli {
    /// SQL dialect (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    dialect: Option<Dialect>,

    /// Config file (default: ./sqlpart.toml, then the user config dir)
    #[arg(long, global = true, env = "SQLPART_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a CREATE TABLE statement
    CreateTable {
        /// Table name, optionally schema-qualified (schema.table)
        name: String,

        /// Schema of the table
        #[arg(long)]
        schema: Option<String>,

        /// CREATE TEMPORARY TABLE
        #[arg(short, long)]
        temporary: bool,

        /// CREATE ... IF NOT EXISTS
        #[arg(long)]
        if_not_exists: bool,

        /// Column definition: name[:TYPE][!], `!` for NOT NULL
        #[arg(short = 'c', long = "col")]
        columns: Vec<String>,

        /// Create the table from a query
        #[arg(long = "as")]
        as_query: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// List every part type
    PartTypes,
    /// List the dialects and the part types each one overrides
    Dialects,
}

#[derive(Serialize)]
struct Report<'a> {
    dialect: &'a str,
    sql: &'a str,
    errors: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let config = Config::load(cli.config.as_deref())?;
    init_tracing(cli.verbose, config.log_filter.as_deref());

    let dialect = cli.dialect.unwrap_or(config.dialect);
    if cli.verbose {
        eprintln!("{} {}", "Dialect:".dimmed(), dialect.to_string().yellow());
    }

    match &cli.command {
        Some(Commands::CreateTable {
            name,
            schema,
            temporary,
            if_not_exists,
            columns,
            as_query,
            format,
        }) => {
            let mut table = parse_table_name(name)?;
            if let Some(schema) = schema {
                table = table.with_schema(schema.as_str());
            }

            let mut builder = CreateTableSqlBuilder::new(dialect.factory()).table(table);
            if *temporary {
                builder = builder.temporary();
            }
            if *if_not_exists {
                builder = builder.if_not_exists();
            }
            for column in columns {
                builder = builder.column(parse_column_defn(column)?);
            }
            if let Some(query) = as_query {
                builder = builder.as_query(query.as_str());
            }

            render(&builder, dialect, *format)
        }
        Some(Commands::PartTypes) => {
            show_part_types();
            Ok(true)
        }
        Some(Commands::Dialects) => {
            show_dialects();
            Ok(true)
        }
        None => {
            println!("{}", "sqlpart: SQL statements from typed parts".cyan().bold());
            println!();
            println!("Usage: sqlpart <COMMAND> [OPTIONS]");
            println!();
            println!("Try: sqlpart --help");
            Ok(true)
        }
    }
}

fn init_tracing(verbose: bool, configured: Option<&str>) {
    let fallback = match (verbose, configured) {
        (true, _) => "sqlpart=debug",
        (false, Some(filter)) => filter,
        (false, None) => "warn",
    };
    let filter =
        EnvFilter::try_from_env("SQLPART_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints the statement. Returns false when the build reported errors.
fn render(
    builder: &impl SqlBuilder,
    dialect: Dialect,
    format: OutputFormat,
) -> anyhow::Result<bool> {
    let (sql, errors) = match builder.build() {
        Ok(sql) => (sql, Vec::new()),
        Err(SqlError::Build { source, .. }) => (
            source.partial_sql().to_string(),
            source.errors().iter().map(|e| e.to_string()).collect(),
        ),
        Err(e) => return Err(e.into()),
    };

    match format {
        OutputFormat::Json => {
            let report = Report {
                dialect: dialect.name(),
                sql: &sql,
                errors,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(report.errors.is_empty())
        }
        OutputFormat::Text => {
            if errors.is_empty() {
                println!("{}", sql.white());
                return Ok(true);
            }

            println!("{}", "Partial SQL:".yellow().bold());
            println!("  {}", sql.white());
            println!();
            eprintln!("{} {}", "Build failed:".red().bold(), SqlBuildError::SENTINEL.dimmed());
            for err in &errors {
                eprintln!("  {} {}", "✗".red(), err);
            }
            Ok(false)
        }
    }
}

fn show_part_types() {
    println!("{}", "Part Types".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for part_type in PartType::ALL {
        println!("  {}", part_type.to_string().white());
    }
}

fn show_dialects() {
    println!(
        "{:10} {}",
        "Dialect".white().bold(),
        "Overrides".white().bold()
    );
    println!("{}", "─".repeat(40).dimmed());

    for dialect in Dialect::ALL {
        let overrides: Vec<String> = dialect.overrides().iter().map(|t| t.to_string()).collect();
        let overrides = if overrides.is_empty() {
            "(all generic)".to_string()
        } else {
            overrides.join(", ")
        };
        println!("{:10} {}", dialect.name().cyan().bold(), overrides.dimmed());
    }
}
