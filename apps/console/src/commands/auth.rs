//! Login, logout, profile and theme pages.

use clap::Subcommand;

use inventario_client::endpoints::{Credentials, ProfileUpdate};
use inventario_client::ApiResult;

use crate::commands::Context;
use crate::render;

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Show the authenticated identity and its grants
    Show,
    /// Update name/email and optionally the password
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        password_confirmation: Option<String>,
    },
}

pub async fn login(ctx: &Context, email: String, password: Option<String>) -> ApiResult<()> {
    let password = match password {
        Some(password) => password,
        None => render::prompt_line("Password: ")?,
    };

    let response = ctx
        .gateway
        .auth()
        .login(&Credentials { email, password })
        .await?;

    let theme = ctx.theme();
    println!(
        "{} {} <{}>",
        theme.ok("Logged in as"),
        response.user.name,
        response.user.email
    );
    if !response.roles.is_empty() {
        println!("{} {}", theme.muted("roles:"), response.roles.join(", "));
    }

    Ok(())
}

pub async fn logout(ctx: &Context) -> ApiResult<()> {
    // Best-effort backend invalidation; local logout always wins.
    ctx.gateway.auth().logout().await;
    println!("{}", ctx.theme().ok("Session cleared."));
    Ok(())
}

pub async fn profile(ctx: &Context, command: Option<ProfileCommand>) -> ApiResult<()> {
    match command.unwrap_or(ProfileCommand::Show) {
        ProfileCommand::Show => show_profile(ctx),
        ProfileCommand::Update {
            name,
            email,
            password,
            password_confirmation,
        } => update_profile(ctx, name, email, password, password_confirmation).await,
    }
}

fn show_profile(ctx: &Context) -> ApiResult<()> {
    let theme = ctx.theme();

    ctx.session().with(|session| {
        if ctx.json {
            return render::print_json(session);
        }

        // Guarded by the auth check in main, so user is present here.
        if let Some(user) = &session.user {
            println!("{}", theme.header("Profile"));
            println!("  name:  {}", user.name);
            println!("  email: {}", user.email);
            println!("  roles: {}", session.roles.join(", "));
            if !session.permissions.is_empty() {
                println!("  permissions: {}", session.permissions.join(", "));
            }
            println!(
                "  theme: {}",
                if session.dark_mode { "dark" } else { "light" }
            );
        }
        Ok(())
    })
}

async fn update_profile(
    ctx: &Context,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    password_confirmation: Option<String>,
) -> ApiResult<()> {
    // Prefill from the current identity, exactly like the profile form.
    let current = ctx.session().current_user();
    let (current_name, current_email) = current
        .map(|u| (u.name, u.email))
        .unwrap_or_default();

    let update = ProfileUpdate {
        name: name.unwrap_or(current_name),
        email: email.unwrap_or(current_email),
        password,
        password_confirmation,
    };

    let user = ctx.gateway.auth().update_profile(&update).await?;

    // Propagate the fresh identity; token and grants are unchanged.
    let (token, roles, permissions) = ctx.session().with(|s| {
        (
            s.token.clone().unwrap_or_default(),
            s.roles.clone(),
            s.permissions.clone(),
        )
    });
    ctx.session().set_auth(user, token, roles, permissions);

    println!("{}", ctx.theme().ok("Profile updated."));
    Ok(())
}

pub fn toggle_theme(ctx: &Context) -> ApiResult<()> {
    let dark = ctx.session().toggle_dark_mode();
    let theme = ctx.theme();
    println!(
        "{}",
        theme.ok(if dark {
            "Dark mode enabled."
        } else {
            "Dark mode disabled."
        })
    );
    Ok(())
}
