//! Category pages: list plus the inline create/edit/delete cycle.

use clap::Subcommand;

use inventario_client::endpoints::CategoryInput;
use inventario_client::{ApiError, ApiResult};

use crate::commands::Context;
use crate::render;

#[derive(Subcommand)]
pub enum CategoryCommand {
    /// List all categories
    List,
    /// Create a category
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update a category; omitted flags keep their current value
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a category
    Delete {
        id: i64,
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
}

pub async fn run(ctx: &Context, command: CategoryCommand) -> ApiResult<()> {
    match command {
        CategoryCommand::List => list(ctx).await,
        CategoryCommand::Create { name, description } => {
            let input = CategoryInput { name, description };
            ctx.gateway.categories().create(&input).await?;
            println!("{}", ctx.theme().ok("Category created."));
            Ok(())
        }
        CategoryCommand::Update {
            id,
            name,
            description,
        } => {
            // There is no detail endpoint; prefill from the list row.
            let current = ctx
                .gateway
                .categories()
                .list()
                .await?
                .into_iter()
                .find(|c| c.id == id)
                .ok_or_else(|| ApiError::NotFound(format!("category {} not found", id)))?;

            let input = CategoryInput {
                name: name.unwrap_or(current.name),
                description: description.or(current.description),
            };
            ctx.gateway.categories().update(id, &input).await?;
            println!("{}", ctx.theme().ok("Category updated."));
            Ok(())
        }
        CategoryCommand::Delete { id, yes } => {
            if !yes && !render::confirm("Delete this category?")? {
                return Ok(());
            }
            ctx.gateway.categories().delete(id).await?;
            println!("{}", ctx.theme().ok("Category deleted."));
            Ok(())
        }
    }
}

async fn list(ctx: &Context) -> ApiResult<()> {
    let categories = ctx.gateway.categories().list().await?;

    if ctx.json {
        return render::print_json(&categories);
    }

    let theme = ctx.theme();
    println!("{}", theme.header("Categories"));
    println!("{}", theme.muted(&format!("{:<5} {:<24} {}", "ID", "NAME", "DESCRIPTION")));

    if categories.is_empty() {
        println!("{}", theme.muted("No categories"));
        return Ok(());
    }

    for category in &categories {
        println!(
            "{:<5} {:<24} {}",
            category.id,
            category.name,
            category.description.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
