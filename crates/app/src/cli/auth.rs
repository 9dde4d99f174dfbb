use clap::Args;
use storefront::users::{Credentials, UserProfile};
use storefront_app::{
    components::{AccountPanel, LoginOutcome},
    context::AppContext,
};

#[derive(Debug, Args)]
pub(crate) struct LoginArgs {
    /// Account email
    #[arg(long)]
    email: String,

    /// Account password
    #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Debug, Args)]
pub(crate) struct RegisterArgs {
    /// National identity or tax number
    #[arg(long)]
    dni_cif: String,

    /// Display name
    #[arg(long)]
    name: String,

    /// Login email
    #[arg(long)]
    email: String,

    /// Password
    #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
    password: String,

    /// Postal address
    #[arg(long, default_value = "")]
    address: String,

    /// Phone number
    #[arg(long, default_value = "")]
    phone: String,

    /// Preferred currency code
    #[arg(long, default_value = "EUR")]
    currency: String,

    /// Preferred language
    #[arg(long, default_value = "en")]
    language: String,
}

impl From<RegisterArgs> for UserProfile {
    fn from(args: RegisterArgs) -> Self {
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

pub(crate) async fn login(ctx: AppContext, args: LoginArgs) -> Result<(), String> {
    let panel = AccountPanel::new(ctx);

    let outcome = panel
        .login(Credentials {
            email: args.email,
            password: args.password,
        })
        .await
        .map_err(|error| format!("failed to log in: {error}"))?;

    match outcome {
        LoginOutcome::LoggedIn(user) => {
            println!("logged in as user {user}");
            Ok(())
        }
        LoginOutcome::Rejected(message) => Err(format!(
            "login rejected: {}",
            message.as_deref().unwrap_or("invalid credentials")
        )),
    }
}

pub(crate) async fn logout(ctx: AppContext) -> Result<(), String> {
    AccountPanel::new(ctx)
        .logout()
        .await
        .map_err(|error| format!("failed to log out: {error}"))?;

    println!("logged out");

    Ok(())
}

pub(crate) async fn register(ctx: AppContext, args: RegisterArgs) -> Result<(), String> {
    let email = args.email.clone();

    AccountPanel::new(ctx)
        .register(args.into())
        .await
        .map_err(|error| format!("failed to register: {error}"))?;

    println!("registered {email}; log in to continue");

    Ok(())
}
