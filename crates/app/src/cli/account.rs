use clap::{Args, Subcommand};
use storefront::{account::DialogMode, users::ProfileChanges};
use storefront_app::{components::AccountPanel, context::AppContext};

use super::render;

#[derive(Debug, Args)]
pub(crate) struct AccountCommand {
    #[command(subcommand)]
    command: AccountSubcommand,
}

#[derive(Debug, Subcommand)]
enum AccountSubcommand {
    /// Show the profile
    Show,

    /// Change profile fields; omitted fields keep their value
    Update(UpdateArgs),

    /// List previous invoices
    Invoices,

    /// Delete the account. Irreversible
    Delete {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
struct UpdateArgs {
    #[arg(long)]
    dni_cif: Option<String>,

    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    address: Option<String>,

    #[arg(long)]
    phone: Option<String>,

    #[arg(long)]
    password: Option<String>,

    #[arg(long)]
    currency: Option<String>,

    #[arg(long)]
    language: Option<String>,
}

impl From<UpdateArgs> for ProfileChanges {
    fn from(args: UpdateArgs) -> Self {
        Self {
            dni_cif: args.dni_cif,
            name: args.name,
            email: args.email,
            address: args.address,
            phone: args.phone,
            password: args.password,
            currency: args.currency,
            language: args.language,
        }
    }
}

pub(crate) async fn run(ctx: AppContext, command: AccountCommand) -> Result<(), String> {
    let currency = ctx.settings.currency.clone();
    let mut panel = AccountPanel::new(ctx);

    match command.command {
        AccountSubcommand::Show => {
            let profile = panel
                .profile()
                .await
                .map_err(|error| format!("failed to load profile: {error}"))?;

            println!("name: {}", profile.name);
            println!("email: {}", profile.email);
            println!("dni_cif: {}", profile.dni_cif);
            println!("address: {}", profile.address);
            println!("phone: {}", profile.phone);
            println!("currency: {}", profile.currency);
            println!("language: {}", profile.language);
        }
        AccountSubcommand::Update(args) => {
            let changes = ProfileChanges::from(args);

            if changes.is_empty() {
                return Err("nothing to update".to_string());
            }

            panel.select(DialogMode::Update);

            panel
                .update_profile(changes)
                .await
                .map_err(|error| format!("failed to update profile: {error}"))?;

            println!("profile updated");
        }
        AccountSubcommand::Invoices => {
            panel.select(DialogMode::Invoices);

            let invoices = panel
                .invoices()
                .await
                .map_err(|error| format!("failed to list invoices: {error}"))?;

            if invoices.is_empty() {
                println!("no invoices yet");
            } else {
                println!("{}", render::invoices(&invoices, currency.as_deref()));
            }
        }
        AccountSubcommand::Delete { yes } => {
            if !yes {
                return Err("refusing to delete the account without --yes".to_string());
            }

            panel.select(DialogMode::Delete);

            panel
                .delete_account()
                .await
                .map_err(|error| format!("failed to delete account: {error}"))?;

            println!("account deleted");
        }
    }

    Ok(())
}

pub(crate) async fn users(ctx: AppContext) -> Result<(), String> {
    let users = AccountPanel::new(ctx)
        .users()
        .await
        .map_err(|error| format!("failed to list users: {error}"))?;

    println!("{}", render::users(&users));

    Ok(())
}
