//! Command line surface.
//!
//! Each subcommand stands in for one screen action and prints its result as
//! pretty JSON on stdout.

use std::path::PathBuf;

use anyhow::bail;
use clap::{Args, Parser, Subcommand};
use serde_json::{json, Value};
use tracing::{info_span, Instrument};

use ll_app::usecases::{MenuFilter, ProfileChanges};
use ll_app::UseCases;
use ll_core::menu::{MenuCategory, MenuItem};
use ll_core::onboarding::{GateEvent, OnboardingForm, StartupRoute};
use ll_core::SoftRead;

#[derive(Debug, Parser)]
#[command(name = "little-lemon", version, about = "Little Lemon restaurant app")]
pub struct Cli {
    /// Configuration file (TOML). Defaults to `<data-dir>/config.toml` when present.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Application data directory. Defaults to the platform data directory.
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decide the first screen: onboarding or menu
    Start,

    /// Submit the onboarding form
    Onboard {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        email: String,
    },

    /// Show the menu, optionally filtered
    Menu(MenuArgs),

    /// Show or edit the profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Forget that onboarding was completed
    ResetOnboarding,

    /// Log out; the next start shows onboarding again
    Logout,
}

#[derive(Debug, Args)]
pub struct MenuArgs {
    /// Category to show; repeat to select several (none = all)
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<MenuCategory>,

    /// Case-insensitive name filter
    #[arg(long)]
    pub search: Option<String>,

    /// Fetch the menu again before showing it
    #[arg(long)]
    pub refresh: bool,
}

#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    Show,
    Edit(ProfileEditArgs),
}

#[derive(Debug, Default, Args)]
pub struct ProfileEditArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// Phone number; an empty value clears it
    #[arg(long)]
    pub phone: Option<String>,
    /// Avatar URI; an empty value clears it
    #[arg(long)]
    pub avatar: Option<String>,
    #[arg(long, value_name = "BOOL")]
    pub order_status: Option<bool>,
    #[arg(long, value_name = "BOOL")]
    pub password_change: Option<bool>,
    #[arg(long, value_name = "BOOL")]
    pub special_offers: Option<bool>,
    #[arg(long, value_name = "BOOL")]
    pub newsletter: Option<bool>,
}

fn clearable(value: Option<String>) -> Option<Option<String>> {
    value.map(|v| {
        let v = v.trim().to_string();
        (!v.is_empty()).then_some(v)
    })
}

impl From<ProfileEditArgs> for ProfileChanges {
    fn from(args: ProfileEditArgs) -> Self {
        Self {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            phone_number: clearable(args.phone),
            avatar: clearable(args.avatar),
            order_status: args.order_status,
            password_change: args.password_change,
            special_offers: args.special_offers,
            newsletter: args.newsletter,
        }
    }
}

fn menu_output(read: SoftRead<Vec<MenuItem>>, filter: &MenuFilter) -> Value {
    let degraded = read.reason().map(str::to_string);
    let items = read.into_value();
    let shown = filter.apply(&items);
    json!({
        "count": shown.len(),
        "items": shown,
        "degraded": degraded,
    })
}

/// Runs one command against the wired use cases.
pub async fn execute(usecases: &UseCases<'_>, command: Command) -> anyhow::Result<Value> {
    let span = info_span!("cli.command", command = ?command);

    async {
        match command {
            Command::Start => {
                let gate = usecases.resolve_startup_route().resolve_gate().await;
                Ok(json!({ "state": gate.state(), "route": gate.route() }))
            }

            Command::Onboard { first_name, email } => {
                let mut gate = usecases.resolve_startup_route().resolve_gate().await;
                let profile = usecases
                    .complete_onboarding()
                    .execute(&OnboardingForm::new(first_name, email))
                    .await?;
                gate.apply(GateEvent::OnboardingCompleted);
                Ok(json!({
                    "route": gate.route().unwrap_or(StartupRoute::Menu),
                    "profile": profile,
                }))
            }

            Command::Menu(args) => {
                let query = args.search.unwrap_or_default();
                let read = if args.refresh {
                    SoftRead::Loaded(usecases.refresh_menu().execute().await?)
                } else {
                    usecases.load_menu().execute().await
                };

                if read.is_degraded() || args.categories.len() > 1 {
                    let filter = MenuFilter::new()
                        .with_categories(args.categories)
                        .with_query(query);
                    return Ok(menu_output(read, &filter));
                }

                // The menu is stored by now; single-category and name lookups go to the store.
                let narrowed = match (args.categories.first(), query.trim().is_empty()) {
                    (Some(category), true) => {
                        usecases.list_menu_by_category().execute(*category).await
                    }
                    (None, false) => usecases.search_menu().execute(&query).await,
                    _ => read,
                };
                let filter = MenuFilter::new()
                    .with_categories(args.categories)
                    .with_query(query);
                Ok(menu_output(narrowed, &filter))
            }

            Command::Profile {
                action: ProfileAction::Show,
            } => {
                let read = usecases.get_profile().execute().await;
                let degraded = read.reason().map(str::to_string);
                Ok(json!({ "profile": read.into_value(), "degraded": degraded }))
            }

            Command::Profile {
                action: ProfileAction::Edit(args),
            } => {
                let changes = ProfileChanges::from(args);
                if changes.is_empty() {
                    bail!("Nothing to change: pass at least one field flag");
                }
                let profile = usecases.edit_profile().execute(&changes).await?;
                Ok(json!({ "profile": profile }))
            }

            Command::ResetOnboarding => {
                usecases.reset_onboarding().execute().await?;
                Ok(json!({ "onboarding_completed": false }))
            }

            Command::Logout => {
                usecases.logout().execute().await?;
                Ok(json!({ "logged_out": true, "route": StartupRoute::Onboarding }))
            }
        }
    }
    .instrument(span)
    .await
}
