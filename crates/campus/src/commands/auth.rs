//! Login / logout handlers.

use secrecy::{ExposeSecret, SecretString};

use campus_config as config;

use crate::cli::LoginArgs;
use crate::context::AppContext;
use crate::error::CliError;

pub async fn login(ctx: &AppContext, args: LoginArgs) -> Result<(), CliError> {
    let username = match args.username {
        Some(username) => username,
        None => dialoguer::Input::new()
            .with_prompt("Username")
            .interact_text()
            .map_err(|e| CliError::Io(std::io::Error::other(e)))?,
    };
    let password = SecretString::from(rpassword::prompt_password("Password: ")?);

    let session = ctx.client.login(&username, &password).await?;
    config::store_token(&ctx.profile_name, session.token.expose_secret())?;

    ctx.toasts.success(format!(
        "logged in as {} ({})",
        session.account.username, session.account.role
    ));
    if session.account.is_initial_password {
        ctx.toasts
            .warning("this account still uses its initial password; change it soon");
    }
    Ok(())
}

pub async fn logout(ctx: &AppContext) -> Result<(), CliError> {
    // Clear the stored token regardless of whether the server-side
    // logout succeeds; a dead session is not worth keeping.
    let result = ctx.client.logout().await;
    config::clear_token(&ctx.profile_name)?;
    result?;
    ctx.toasts.info("logged out");
    Ok(())
}
