//! Supplier pages: list plus the inline create/edit/delete cycle.

use clap::Subcommand;

use inventario_client::endpoints::SupplierInput;
use inventario_client::{ApiError, ApiResult};

use crate::commands::Context;
use crate::render;

#[derive(Subcommand)]
pub enum SupplierCommand {
    /// List all suppliers
    List,
    /// Create a supplier
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
    /// Update a supplier; omitted flags keep their current value
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
    /// Delete a supplier
    Delete {
        id: i64,
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
}

pub async fn run(ctx: &Context, command: SupplierCommand) -> ApiResult<()> {
    match command {
        SupplierCommand::List => list(ctx).await,
        SupplierCommand::Create {
            name,
            email,
            phone,
            address,
        } => {
            let input = SupplierInput {
                name,
                email,
                phone,
                address,
            };
            ctx.gateway.suppliers().create(&input).await?;
            println!("{}", ctx.theme().ok("Supplier created."));
            Ok(())
        }
        SupplierCommand::Update {
            id,
            name,
            email,
            phone,
            address,
        } => {
            let current = ctx
                .gateway
                .suppliers()
                .list()
                .await?
                .into_iter()
                .find(|s| s.id == id)
                .ok_or_else(|| ApiError::NotFound(format!("supplier {} not found", id)))?;

            let input = SupplierInput {
                name: name.unwrap_or(current.name),
                email: email.or(current.email),
                phone: phone.or(current.phone),
                address: address.or(current.address),
            };
            ctx.gateway.suppliers().update(id, &input).await?;
            println!("{}", ctx.theme().ok("Supplier updated."));
            Ok(())
        }
        SupplierCommand::Delete { id, yes } => {
            if !yes && !render::confirm("Delete this supplier?")? {
                return Ok(());
            }
            ctx.gateway.suppliers().delete(id).await?;
            println!("{}", ctx.theme().ok("Supplier deleted."));
            Ok(())
        }
    }
}

async fn list(ctx: &Context) -> ApiResult<()> {
    let suppliers = ctx.gateway.suppliers().list().await?;

    if ctx.json {
        return render::print_json(&suppliers);
    }

    let theme = ctx.theme();
    println!("{}", theme.header("Suppliers"));
    println!(
        "{}",
        theme.muted(&format!(
            "{:<5} {:<24} {:<26} {:<16} {}",
            "ID", "NAME", "EMAIL", "PHONE", "ADDRESS"
        ))
    );

    if suppliers.is_empty() {
        println!("{}", theme.muted("No suppliers"));
        return Ok(());
    }

    for supplier in &suppliers {
        println!(
            "{:<5} {:<24} {:<26} {:<16} {}",
            supplier.id,
            supplier.name,
            supplier.email.as_deref().unwrap_or("-"),
            supplier.phone.as_deref().unwrap_or("-"),
            supplier.address.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
