//! Staff user pages: list, role list, and the create/edit/delete cycle.
//!
//! The backend enforces who may manage users; an insufficient grant comes
//! back as 403 and surfaces through the shared error reporter.

use clap::Subcommand;

use inventario_client::endpoints::UserInput;
use inventario_client::{ApiError, ApiResult};

use crate::commands::Context;
use crate::render;

#[derive(Subcommand)]
pub enum UserCommand {
    /// List staff users
    List,
    /// List assignable roles
    Roles,
    /// Create a user
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        role: String,
    },
    /// Update a user; omitted flags keep their current value
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        role: Option<String>,
    },
    /// Delete a user
    Delete {
        id: i64,
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
}

pub async fn run(ctx: &Context, command: UserCommand) -> ApiResult<()> {
    match command {
        UserCommand::List => list(ctx).await,
        UserCommand::Roles => roles(ctx).await,
        UserCommand::Create {
            name,
            email,
            password,
            role,
        } => {
            let input = UserInput {
                name,
                email,
                password: Some(password),
                role: Some(role),
            };
            ctx.gateway.users().create(&input).await?;
            println!("{}", ctx.theme().ok("User created."));
            Ok(())
        }
        UserCommand::Update {
            id,
            name,
            email,
            password,
            role,
        } => {
            let current = ctx
                .gateway
                .users()
                .list()
                .await?
                .into_iter()
                .find(|u| u.id == id)
                .ok_or_else(|| ApiError::NotFound(format!("user {} not found", id)))?;

            let input = UserInput {
                name: name.unwrap_or(current.name),
                email: email.unwrap_or(current.email),
                password,
                role,
            };
            ctx.gateway.users().update(id, &input).await?;
            println!("{}", ctx.theme().ok("User updated."));
            Ok(())
        }
        UserCommand::Delete { id, yes } => {
            if !yes && !render::confirm("Delete this user?")? {
                return Ok(());
            }
            ctx.gateway.users().delete(id).await?;
            println!("{}", ctx.theme().ok("User deleted."));
            Ok(())
        }
    }
}

async fn list(ctx: &Context) -> ApiResult<()> {
    let users = ctx.gateway.users().list().await?;

    if ctx.json {
        return render::print_json(&users);
    }

    let theme = ctx.theme();
    println!("{}", theme.header("Users"));
    println!("{}", theme.muted(&format!("{:<5} {:<24} {}", "ID", "NAME", "EMAIL")));

    for user in &users {
        println!("{:<5} {:<24} {}", user.id, user.name, user.email);
    }

    Ok(())
}

async fn roles(ctx: &Context) -> ApiResult<()> {
    let roles = ctx.gateway.users().roles().await?;

    if ctx.json {
        return render::print_json(&roles);
    }

    let theme = ctx.theme();
    println!("{}", theme.header("Roles"));
    for role in &roles {
        println!("{:<5} {}", role.id, role.name);
    }

    Ok(())
}
