//! Stock movement pages: filtered history plus movement registration.

use clap::Subcommand;

use inventario_client::endpoints::StockMovementInput;
use inventario_client::ApiResult;
use inventario_core::MovementType;

use crate::commands::Context;
use crate::render;

#[derive(Subcommand)]
pub enum StockCommand {
    /// Movement history, optionally filtered by type
    List {
        /// entrada, salida or ajuste
        #[arg(long = "type")]
        movement_type: Option<MovementType>,
    },
    /// Register a movement (the backend computes the resulting stock)
    Add {
        #[arg(long)]
        product: i64,
        /// entrada, salida or ajuste
        #[arg(long = "type")]
        movement_type: MovementType,
        /// Delta for entrada/salida; the NEW stock level for ajuste
        #[arg(long)]
        quantity: i64,
        #[arg(long)]
        reason: Option<String>,
    },
}

pub async fn run(ctx: &Context, command: StockCommand) -> ApiResult<()> {
    match command {
        StockCommand::List { movement_type } => list(ctx, movement_type).await,
        StockCommand::Add {
            product,
            movement_type,
            quantity,
            reason,
        } => add(ctx, product, movement_type, quantity, reason).await,
    }
}

async fn list(ctx: &Context, filter: Option<MovementType>) -> ApiResult<()> {
    let movements = ctx.gateway.stock().list(filter).await?;

    if ctx.json {
        return render::print_json(&movements);
    }

    let theme = ctx.theme();
    println!("{}", theme.header("Stock Movements"));
    println!(
        "{}",
        theme.muted(&format!(
            "{:<28} {:<8} {:>5} {:>7} {:>7}  {:<24} {:<14} {}",
            "PRODUCT", "TYPE", "QTY", "BEFORE", "AFTER", "REASON", "USER", "DATE"
        ))
    );

    if movements.is_empty() {
        println!("{}", theme.muted("No movements"));
        return Ok(());
    }

    for movement in &movements {
        let type_cell = match movement.movement_type {
            MovementType::Entrada => theme.ok("entrada"),
            MovementType::Salida => theme.err("salida"),
            MovementType::Ajuste => theme.warn("ajuste"),
        };

        println!(
            "{:<28} {:<8} {:>5} {:>7} {:>7}  {:<24} {:<14} {}",
            movement
                .product
                .as_ref()
                .map(|p| p.name.as_str())
                .unwrap_or("-"),
            type_cell,
            movement.quantity,
            movement.stock_before,
            movement.stock_after,
            movement.reason.as_deref().unwrap_or("-"),
            movement.user.as_ref().map(|u| u.name.as_str()).unwrap_or("-"),
            render::date_cell(&movement.created_at),
        );
    }

    Ok(())
}

async fn add(
    ctx: &Context,
    product: i64,
    movement_type: MovementType,
    quantity: i64,
    reason: Option<String>,
) -> ApiResult<()> {
    let input = StockMovementInput {
        product_id: product,
        movement_type,
        quantity,
        reason,
    };

    let movement = ctx.gateway.stock().create(&input).await?;

    let theme = ctx.theme();
    println!("{}", theme.ok("Movement registered."));
    println!(
        "stock: {} → {}",
        movement.stock_before, movement.stock_after
    );

    Ok(())
}
