use crate::state::SharedState;

pub async fn cmd_advertiser_add(
    state: &SharedState,
    username: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    let advertiser = state.accounts.register(username, email, password).await?;

    println!("✓ Registered advertiser '{}'", advertiser.username);
    println!("  ID:    {}", advertiser.id);
    println!("  Email: {}", advertiser.email);
    Ok(())
}

pub async fn cmd_advertiser_check(
    state: &SharedState,
    username: &str,
    password: &str,
) -> anyhow::Result<()> {
    if state.accounts.check_credentials(username, password).await? {
        println!("✓ Credentials are valid");
        Ok(())
    } else {
        anyhow::bail!("Invalid username or password")
    }
}

pub async fn cmd_advertiser_reset_token(state: &SharedState, email: &str) -> anyhow::Result<()> {
    let issued = state.accounts.request_password_reset(email).await?;

    println!("Reset token for '{}':", issued.username);
    println!("{:-<70}", "");
    println!("{}", issued.token);
    println!("{:-<70}", "");
    println!(
        "Expires: {}",
        issued.expires_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();
    println!(
        "Use 'infobox advertiser reset-password {} <token> <new-password>'",
        issued.username
    );
    Ok(())
}

pub async fn cmd_advertiser_reset_password(
    state: &SharedState,
    username: &str,
    token: &str,
    new_password: &str,
) -> anyhow::Result<()> {
    state
        .accounts
        .reset_password(username, token, new_password)
        .await?;

    println!("✓ Password updated for '{username}'");
    Ok(())
}
