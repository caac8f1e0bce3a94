use std::fmt::{self, Write as _};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::debug;
use tuongso_access::{Permission, Role, RoleSet, role_permissions};
use tuongso_config::TuongsoConfig;
use tuongso_numerology::{BirthDate, CalculationResult, reduce_to_single_digit};

#[derive(Parser)]
#[command(name = "tuongso", about = "Cân Xương Tính Lượng numerology CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Interpretation table asset (TOML), overrides the config file
    #[arg(long, global = true)]
    tables: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Full reading for a birth date
    Calc {
        /// Birth date (DD/MM/YYYY or YYYY-MM-DD)
        date: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// The three indices for a birth date
    Indices {
        /// Birth date (DD/MM/YYYY or YYYY-MM-DD)
        date: String,
    },
    /// Reduce a positive integer to a single digit
    Reduce {
        /// Integer to reduce
        n: u32,
    },
    /// Texts for raw index values
    Interpret {
        /// Cân Xương (1-9)
        can_xuong: u8,
        /// Tính Lượng (1-9)
        tinh_luong: u8,
        /// Tang Mão (1-10)
        tang_mao: u8,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the active interpretation tables as a TOML asset
    Tables,
    /// List the permissions granted by a role
    Permissions {
        /// Role name (SuperAdmin, Admin, User)
        role: String,
    },
    /// Check whether a set of roles grants a permission
    Check {
        /// Role held by the account (repeatable)
        #[arg(long = "role")]
        roles: Vec<String>,
        /// Permission name, e.g. approve_story
        permission: String,
    },
    /// Landing path after sign-in for a set of roles
    Redirect {
        /// Role held by the account (repeatable)
        #[arg(long = "role")]
        roles: Vec<String>,
    },
}

fn load_config(cli: &Cli) -> Result<TuongsoConfig> {
    let mut config = match &cli.config {
        Some(path) => TuongsoConfig::load_from_file(path)?,
        None => TuongsoConfig::default(),
    };
    config.merge_with_env();
    if let Some(path) = &cli.tables {
        config.tables.path = Some(path.clone());
    }
    if cli.verbose {
        config.log.level = "debug".to_string();
    }
    config.validate()?;
    Ok(config)
}

fn render_result(date: Option<&BirthDate>, r: &CalculationResult) -> Result<String, fmt::Error> {
    let mut out = String::new();
    if let Some(date) = date {
        writeln!(out, "Ngày sinh: {date}")?;
    }
    writeln!(
        out,
        "Cân Xương: {}  Tính Lượng: {}  Tang Mão: {}",
        r.can_xuong, r.tinh_luong, r.tang_mao
    )?;
    writeln!(
        out,
        "Hành: {} ({})",
        r.element.name(),
        r.element.english_name()
    )?;
    writeln!(out, "\n{}", r.interpretation)?;
    writeln!(out, "\nĐặc điểm tính cách:")?;
    for t in &r.personality_traits {
        writeln!(out, "  - {t}")?;
    }
    writeln!(out, "\nLời khuyên cuộc sống:")?;
    for a in &r.life_advice {
        writeln!(out, "  - {a}")?;
    }
    Ok(out)
}

fn print_result(date: Option<&BirthDate>, r: &CalculationResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(r)?);
    } else {
        print!("{}", render_result(date, r)?);
    }
    Ok(())
}

fn parse_role(s: &str) -> Result<Role> {
    s.parse::<Role>()
        .context("valid roles: SuperAdmin, Admin, User")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    tracing_subscriber::fmt()
        .with_env_filter(config.log.level.as_str())
        .with_writer(std::io::stderr)
        .init();
    debug!(?config, "configuration resolved");

    let tables = config
        .resolve_tables()
        .context("failed to load interpretation tables")?;
    tuongso_rs::init(tables)?;

    match cli.command {
        Commands::Calc { date, json } => {
            let parsed: BirthDate = date.parse()?;
            let result = tuongso_rs::calculate(parsed.day(), parsed.month(), parsed.year())?;
            print_result(Some(&parsed), &result, json)?;
        }

        Commands::Indices { date } => {
            let parsed: BirthDate = date.parse()?;
            let idx = tuongso_rs::indices(parsed.day(), parsed.month(), parsed.year())?;
            println!(
                "Cân Xương: {}  Tính Lượng: {}  Tang Mão: {}",
                idx.can_xuong(),
                idx.tinh_luong(),
                idx.tang_mao()
            );
        }

        Commands::Reduce { n } => {
            if n == 0 {
                bail!("reduce needs a positive integer");
            }
            println!("{}", reduce_to_single_digit(n));
        }

        Commands::Interpret {
            can_xuong,
            tinh_luong,
            tang_mao,
            json,
        } => {
            let result = tuongso_rs::interpret(can_xuong, tinh_luong, tang_mao)?;
            print_result(None, &result, json)?;
        }

        Commands::Tables => {
            print!("{}", toml::to_string(tuongso_rs::tables())?);
        }

        Commands::Permissions { role } => {
            let role = parse_role(&role)?;
            for p in role_permissions(role) {
                println!("{p}");
            }
        }

        Commands::Check { roles, permission } => {
            let permission: Permission = permission.parse()?;
            let set = RoleSet::from_names(&roles);
            if set.has_permission(permission) {
                println!("granted");
            } else {
                println!("denied");
                std::process::exit(1);
            }
        }

        Commands::Redirect { roles } => {
            println!("{}", RoleSet::from_names(&roles).redirect_path());
        }
    }

    Ok(())
}
