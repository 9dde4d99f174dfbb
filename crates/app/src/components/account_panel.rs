//! Account panel.
//!
//! Login and registration while logged out; invoices, profile update and account deletion
//! behind [`Dialogs`] once logged in.

use storefront::{
    account::{DialogMode, Dialogs},
    invoices::Invoice,
    session::Session,
    users::{Credentials, ProfileChanges, UserId, UserProfile, UserSummary},
};
use tracing::{info, warn};

use crate::{context::AppContext, domain::ServiceError};

use super::{ComponentError, ResultExt};

/// Result of a login attempt the backend answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// A session was started for this user.
    LoggedIn(UserId),

    /// Credentials refused, with the server's explanation when it gave one.
    Rejected(Option<String>),
}

#[derive(Debug)]
pub struct AccountPanel {
    ctx: AppContext,
    dialogs: Dialogs,
}

impl AccountPanel {
    #[must_use]
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            dialogs: Dialogs::default(),
        }
    }

    /// Exchange credentials for a session and persist it.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails for a reason other than refused credentials,
    /// or the session cannot be persisted.
    pub async fn login(&self, credentials: Credentials) -> Result<LoginOutcome, ComponentError> {
        let email = credentials.email.clone();

        let response = match self.ctx.auth.login(credentials).await {
            Ok(response) => response,
            Err(ServiceError::Unauthorized(message)) => {
                warn!(%email, "login rejected");
                return Ok(LoginOutcome::Rejected(message));
            }
            Err(error) => return Err(error).or_log("failed to log in"),
        };

        self.ctx
            .session
            .begin(Session::new(response.jwt, response.id))
            .or_log("failed to store session")?;

        Ok(LoginOutcome::LoggedIn(response.id))
    }

    /// Create an account. The new user still has to log in.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the registration.
    pub async fn register(&self, profile: UserProfile) -> Result<(), ComponentError> {
        let email = profile.email.clone();

        self.ctx
            .auth
            .register(profile)
            .await
            .or_log("failed to register")?;

        info!(%email, "registered");

        Ok(())
    }

    /// Log out. The local session is dropped even when the server call fails.
    ///
    /// # Errors
    ///
    /// Returns an error when the stored session cannot be removed.
    pub async fn logout(&mut self) -> Result<(), ComponentError> {
        if let Err(source) = self.ctx.auth.logout().await {
            warn!("logout request failed: {source}");
        }

        self.end_session()
    }

    /// Menu click. Returns the dialog left open, if any.
    pub fn select(&mut self, mode: DialogMode) -> Option<DialogMode> {
        self.dialogs.select(mode)
    }

    /// Backdrop click or cancel.
    pub fn close(&mut self) {
        self.dialogs.close();
    }

    /// The open dialog, if any.
    pub fn dialog(&self) -> Option<DialogMode> {
        self.dialogs.current()
    }

    /// # Errors
    ///
    /// Returns an error when no one is logged in or the request fails.
    pub async fn invoices(&self) -> Result<Vec<Invoice>, ComponentError> {
        let user = self.ctx.session.user_id()?;

        self.ctx
            .invoices
            .list_invoices(user)
            .await
            .or_log("failed to list invoices")
    }

    /// # Errors
    ///
    /// Returns an error when no one is logged in or the request fails.
    pub async fn profile(&self) -> Result<UserProfile, ComponentError> {
        let user = self.ctx.session.user_id()?;

        self.ctx
            .users
            .get_user(user)
            .await
            .or_log("failed to load profile")
    }

    /// Apply `changes` over the stored profile and save it, closing the update dialog.
    ///
    /// # Errors
    ///
    /// Returns an error when no one is logged in or either request fails.
    pub async fn update_profile(
        &mut self,
        changes: ProfileChanges,
    ) -> Result<UserProfile, ComponentError> {
        let user = self.ctx.session.user_id()?;
        let profile = changes.apply(self.profile().await?);

        self.ctx
            .users
            .update_user(user, profile.clone())
            .await
            .or_log("failed to update profile")?;

        info!(%user, "profile updated");

        self.dialogs.close();

        Ok(profile)
    }

    /// Delete the account and log out. Irreversible.
    ///
    /// # Errors
    ///
    /// Returns an error when no one is logged in, the request fails or the stored session
    /// cannot be removed.
    pub async fn delete_account(&mut self) -> Result<(), ComponentError> {
        let user = self.ctx.session.user_id()?;

        self.ctx
            .users
            .delete_user(user)
            .await
            .or_log("failed to delete account")?;

        info!(%user, "account deleted");

        self.end_session()
    }

    /// # Errors
    ///
    /// Returns an error when the request fails.
    pub async fn users(&self) -> Result<Vec<UserSummary>, ComponentError> {
        self.ctx
            .users
            .list_users()
            .await
            .or_log("failed to list users")
    }

    fn end_session(&mut self) -> Result<(), ComponentError> {
        self.dialogs.close();
        self.ctx.cart.reset();

        self.ctx
            .session
            .end()
            .or_log("failed to clear stored session")
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use storefront::{
        carts::{CartData, DEFAULT_CART_NUMBER},
        session::View,
        users::LoginResponse,
    };
    use testresult::TestResult;

    use crate::test::{TestServices, invoice, valid_token};

    use super::*;

    const USER: UserId = UserId::new(9);

    fn credentials() -> Credentials {
        Credentials {
            email: "ana@example.com".to_string(),
            password: "hunter2".to_string(),
        }
    }

    #[tokio::test]
    async fn login_starts_a_session() -> TestResult {
        let mut services = TestServices::new();
        let token = valid_token()?;

        services.auth.expect_login().returning(move |_| {
            Ok(LoginResponse {
                id: USER,
                authorities: vec!["USER".to_string()],
                jwt: token.clone(),
            })
        });

        let ctx = services.into_context();
        let panel = AccountPanel::new(ctx.clone());

        assert_eq!(panel.login(credentials()).await?, LoginOutcome::LoggedIn(USER));
        assert_eq!(ctx.session.view(), View::Storefront);
        assert_eq!(ctx.session.user_id(), Ok(USER));

        Ok(())
    }

    #[tokio::test]
    async fn refused_login_surfaces_server_message() -> TestResult {
        let mut services = TestServices::new();

        services.auth.expect_login().returning(|_| {
            Err(ServiceError::Unauthorized(Some("Bad credentials".to_string())))
        });

        let ctx = services.into_context();
        let outcome = AccountPanel::new(ctx.clone()).login(credentials()).await?;

        assert_eq!(
            outcome,
            LoginOutcome::Rejected(Some("Bad credentials".to_string()))
        );
        assert_eq!(ctx.session.view(), View::Unauthenticated);

        Ok(())
    }

    #[tokio::test]
    async fn logout_clears_session_even_when_request_fails() -> TestResult {
        let mut services = TestServices::new();

        services
            .auth
            .expect_logout()
            .returning(|| Err(ServiceError::NotFound));

        let ctx = services.logged_in(USER)?;
        ctx.cart.set(CartData::empty(DEFAULT_CART_NUMBER, USER));

        let mut panel = AccountPanel::new(ctx.clone());
        panel.select(DialogMode::Invoices);
        panel.logout().await?;

        assert_eq!(ctx.session.view(), View::Unauthenticated);
        assert!(!ctx.cart.is_loaded(), "cart should be forgotten");
        assert_eq!(panel.dialog(), None);

        Ok(())
    }

    #[tokio::test]
    async fn update_merges_changes_over_stored_profile() -> TestResult {
        let mut services = TestServices::new();

        services.users.expect_get_user().with(eq(USER)).returning(|_| {
            Ok(UserProfile {
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                currency: "EUR".to_string(),
                ..UserProfile::default()
            })
        });
        services
            .users
            .expect_update_user()
            .withf(|user, profile| {
                *user == USER && profile.name == "Ana" && profile.currency == "USD"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mut panel = AccountPanel::new(services.logged_in(USER)?);
        panel.select(DialogMode::Update);

        let updated = panel
            .update_profile(ProfileChanges {
                currency: Some("USD".to_string()),
                ..ProfileChanges::default()
            })
            .await?;

        assert_eq!(updated.email, "ana@example.com");
        assert_eq!(panel.dialog(), None);

        Ok(())
    }

    #[tokio::test]
    async fn delete_account_logs_out() -> TestResult {
        let mut services = TestServices::new();

        services
            .users
            .expect_delete_user()
            .with(eq(USER))
            .times(1)
            .returning(|_| Ok(()));

        let ctx = services.logged_in(USER)?;
        let mut panel = AccountPanel::new(ctx.clone());

        panel.delete_account().await?;

        assert_eq!(ctx.session.view(), View::Unauthenticated);

        Ok(())
    }

    #[tokio::test]
    async fn invoices_need_a_session() -> TestResult {
        let mut services = TestServices::new();

        services
            .invoices
            .expect_list_invoices()
            .with(eq(USER))
            .returning(|user| Ok(vec![invoice(1, user), invoice(2, user)]));

        let logged_out = AccountPanel::new(TestServices::new().into_context());
        assert!(
            matches!(
                logged_out.invoices().await,
                Err(ComponentError::NotLoggedIn(_))
            ),
            "invoices should require login"
        );

        let panel = AccountPanel::new(services.logged_in(USER)?);
        assert_eq!(panel.invoices().await?.len(), 2);

        Ok(())
    }

    #[test]
    fn menu_click_closes_open_dialog() {
        let mut panel = AccountPanel::new(TestServices::new().into_context());

        assert_eq!(panel.select(DialogMode::Invoices), Some(DialogMode::Invoices));
        assert_eq!(panel.select(DialogMode::Delete), None);
        assert_eq!(panel.select(DialogMode::Delete), Some(DialogMode::Delete));

        panel.close();
        assert_eq!(panel.dialog(), None);
    }
}
