use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inquire::{Confirm, Password};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use portfolio::content::{render_markdown, Portfolio};
use portfolio::cv::SelectedFile;
use portfolio::i18n::{save_locale, Locale, Translator};
use portfolio::session::password::PasswordChange;
use portfolio::state::{open_store, AppContext};
use portfolio::Config;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Bilingual portfolio content and CV administration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the portfolio content as markdown
    Show {
        /// Render in this locale instead of the saved one
        #[arg(long)]
        locale: Option<Locale>,
    },
    /// Show or change the saved interface language (en, sr)
    Locale { locale: Option<Locale> },
    /// Sign in as the site administrator
    Login {
        #[arg(short, long)]
        username: String,
        /// Prompted for when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Forget the stored admin session
    Logout,
    /// Check whether the stored session is still valid
    Status,
    /// Manage the published CV
    Cv {
        #[command(subcommand)]
        action: CvAction,
    },
    /// Change the administrator password
    Password {
        #[arg(long)]
        current: Option<String>,
        #[arg(long)]
        new: Option<String>,
        #[arg(long)]
        confirm: Option<String>,
    },
}

#[derive(Subcommand)]
enum CvAction {
    /// Show the current CV's metadata
    Info,
    /// Upload a PDF, replacing the current CV
    Upload { path: PathBuf },
    /// Download the public CV
    Download {
        #[arg(short, long, default_value = "cv.pdf")]
        out: PathBuf,
    },
    /// Delete the current CV
    Delete {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Show storage statistics
    Stats,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    debug!(
        "Starting portfolio v{} against {}",
        env!("CARGO_PKG_VERSION"),
        config.api_url
    );

    let store = open_store(&config).context("Failed to open client state")?;
    let ctx = AppContext::new(config, store).context("Failed to build HTTP client")?;

    let ok = run(&ctx, cli.command).await?;
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

async fn run(ctx: &AppContext, command: Commands) -> Result<bool> {
    let t = ctx.translator;

    match command {
        Commands::Show { locale } => {
            let t = locale.map(Translator::new).unwrap_or(t);
            let portfolio = Portfolio::bundled().context("Bundled content is invalid")?;
            print!("{}", render_markdown(&portfolio, &t));
            Ok(true)
        }
        Commands::Locale { locale: None } => {
            println!("{}", t.locale());
            Ok(true)
        }
        Commands::Locale {
            locale: Some(locale),
        } => {
            save_locale(ctx.store.as_ref(), locale).context("Failed to save locale")?;
            println!("{locale}");
            Ok(true)
        }
        Commands::Login { username, password } => {
            let password = or_prompt(password, t.t("login.password"))?;
            if ctx.session.login(&username, &password).await.is_err() {
                let status = ctx.session.snapshot().login_status;
                return Ok(report(false, status));
            }
            println!("{}", t.t("login.success"));
            if ctx.session.snapshot().first_login {
                println!("{}", t.t("password.firstLoginHint"));
            }
            Ok(true)
        }
        Commands::Logout => {
            ctx.session.logout();
            println!("{}", t.t("login.loggedOut"));
            Ok(true)
        }
        Commands::Status => {
            let session = ctx.load_session().await;
            if !session.is_authenticated() {
                eprintln!("{}", t.t("login.required"));
                return Ok(false);
            }
            println!(
                "{}: {} ({})",
                t.t("login.success"),
                session.username.as_deref().unwrap_or("?"),
                ctx.api.base_url()
            );
            Ok(true)
        }
        Commands::Cv { action } => run_cv(ctx, action).await,
        Commands::Password {
            current,
            new,
            confirm,
        } => {
            let Some(token) = require_session(ctx).await else {
                return Ok(false);
            };
            let current = or_prompt(current, t.t("password.current"))?;
            let new = or_prompt(new, t.t("password.new"))?;
            let confirm = or_prompt(confirm, t.t("password.confirm"))?;

            ctx.password
                .update_form(|f| *f = PasswordChange::new(&current, &new, &confirm));
            let ok = ctx.password.submit(Some(&token)).await;
            Ok(report(ok, ctx.password.snapshot().status))
        }
    }
}

async fn run_cv(ctx: &AppContext, action: CvAction) -> Result<bool> {
    let t = ctx.translator;

    match action {
        CvAction::Info => {
            let Some(token) = require_session(ctx).await else {
                return Ok(false);
            };
            ctx.cv.refresh(Some(&token)).await;
            match ctx.cv.snapshot().cv {
                Some(cv) => {
                    println!("{}", t.t("admin.currentCV"));
                    println!("  {} {}", t.t("admin.file"), cv.name);
                    println!("  {} {} {}", t.t("admin.size"), cv.size_mb(), t.t("common.mb"));
                    println!(
                        "  {} {}",
                        t.t("admin.lastUpdated"),
                        cv.last_modified.format("%Y-%m-%d %H:%M")
                    );
                    println!("  {}", ctx.cv.download_url());
                    println!("  {}", ctx.api.view_url());
                }
                None => println!("{}", t.t("admin.noCVUploaded")),
            }
            Ok(true)
        }
        CvAction::Upload { path } => {
            let Some(token) = require_session(ctx).await else {
                return Ok(false);
            };
            let file = SelectedFile::from_path(&path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            ctx.cv.select_file(Some(file));
            let panel = ctx.cv.snapshot();
            if !panel.upload_enabled() {
                return Ok(report(false, panel.status));
            }
            let ok = ctx.cv.upload(Some(&token)).await;
            Ok(report(ok, ctx.cv.snapshot().status))
        }
        // public endpoint, no session needed
        CvAction::Download { out } => match ctx.cv.download().await {
            Ok(bytes) => {
                tokio::fs::write(&out, &bytes)
                    .await
                    .with_context(|| format!("Failed to write {}", out.display()))?;
                println!("{} -> {}", t.t("header.downloadCV"), out.display());
                Ok(true)
            }
            Err(e) => Ok(report(false, Some(e.to_string()))),
        },
        CvAction::Delete { yes } => {
            let Some(token) = require_session(ctx).await else {
                return Ok(false);
            };
            if !yes && !confirm(t.t("admin.deleteConfirm"))? {
                return Ok(false);
            }
            let ok = ctx.cv.delete(Some(&token)).await;
            Ok(report(ok, ctx.cv.snapshot().status))
        }
        CvAction::Stats => {
            let Some(token) = require_session(ctx).await else {
                return Ok(false);
            };
            match ctx.api.fetch_cv_stats(&token).await {
                Ok(stats) => {
                    println!("{} {}", t.t("admin.fileCount"), stats.file_count);
                    println!(
                        "{} {:.2} {}",
                        t.t("admin.size"),
                        stats.total_size_mb,
                        t.t("common.mb")
                    );
                    Ok(true)
                }
                Err(e) => Ok(report(false, Some(e.to_string()))),
            }
        }
    }
}

/// Loading gate for protected commands.
async fn require_session(ctx: &AppContext) -> Option<String> {
    let session = ctx.load_session().await;
    if !session.is_authenticated() {
        eprintln!("{}", ctx.translator.t("login.required"));
        return None;
    }
    session.token
}

/// Prints the status line to stdout on success, stderr otherwise.
fn report(ok: bool, status: Option<String>) -> bool {
    if let Some(status) = status {
        if ok {
            println!("{status}");
        } else {
            eprintln!("{status}");
        }
    }
    ok
}

fn prompt_secret(label: &str) -> Result<String> {
    Password::new(label)
        .without_confirmation()
        .prompt()
        .map_err(|e| anyhow::anyhow!("Password entry failed: {}", e))
}

fn or_prompt(value: Option<String>, label: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => prompt_secret(label),
    }
}

fn confirm(question: &str) -> Result<bool> {
    Confirm::new(question)
        .with_default(false)
        .prompt()
        .map_err(|e| anyhow::anyhow!("Confirmation failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplied_value_skips_prompt() {
        assert_eq!(or_prompt(Some("s3cret".into()), "Password").unwrap(), "s3cret");
    }

    #[test]
    fn test_login_password_is_optional() {
        let cli = Cli::try_parse_from(["portfolio", "login", "-u", "admin"]).unwrap();
        match cli.command {
            Commands::Login { username, password } => {
                assert_eq!(username, "admin");
                assert!(password.is_none());
            }
            _ => panic!("expected login"),
        }
    }

    #[test]
    fn test_cv_delete_confirms_unless_yes() {
        let cli = Cli::try_parse_from(["portfolio", "cv", "delete"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Cv {
                action: CvAction::Delete { yes: false }
            }
        ));

        let cli = Cli::try_parse_from(["portfolio", "cv", "delete", "--yes"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Cv {
                action: CvAction::Delete { yes: true }
            }
        ));
    }
}
