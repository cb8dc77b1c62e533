//! # Sales Pages
//!
//! The sale list, the receipt-style detail view, cancellation of a persisted
//! sale, and the draft composition flow.
//!
//! ## `sales new` Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Fetch the product catalog (first page, like the sale form)          │
//! │  2. Build the draft through the engine:                                 │
//! │       --item 7x3 --item 12   →  lines [(7, qty 3), (12, qty 1)]         │
//! │  3. Show the ADVISORY total (catalog price × quantity)                  │
//! │  4. Submit as one atomic POST /sales                                    │
//! │       success   → draft discarded, sale list refreshed from backend     │
//! │       rejection → backend message verbatim, per-field where present     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::str::FromStr;

use clap::Subcommand;

use inventario_client::{ApiResult, SaleWorkflow};
use inventario_core::Sale;

use crate::commands::Context;
use crate::render;

/// `PRODUCT[xQTY]` argument for `sales new`, e.g. `7x3` or `12`.
#[derive(Debug, Clone)]
pub struct ItemSpec {
    pub product_id: i64,
    pub quantity: i64,
}

impl FromStr for ItemSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (product, quantity) = match s.split_once(['x', 'X']) {
            Some((product, quantity)) => (
                product,
                quantity
                    .parse()
                    .map_err(|_| format!("invalid quantity in item '{}'", s))?,
            ),
            None => (s, 1),
        };

        let product_id = product
            .parse()
            .map_err(|_| format!("invalid product id in item '{}'", s))?;

        Ok(ItemSpec {
            product_id,
            quantity,
        })
    }
}

#[derive(Subcommand)]
pub enum SaleCommand {
    /// List sales
    List,
    /// Receipt-style detail of one sale
    Show { id: i64 },
    /// Compose and submit a new sale
    New {
        #[arg(long)]
        customer: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        /// Line item as PRODUCT[xQTY]; repeat for multiple lines
        #[arg(long = "item", value_name = "PRODUCT[xQTY]")]
        items: Vec<ItemSpec>,
    },
    /// Cancel a persisted sale (the backend restores its stock)
    Cancel {
        id: i64,
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
}

pub async fn run(ctx: &Context, command: SaleCommand) -> ApiResult<()> {
    match command {
        SaleCommand::List => {
            let sales = ctx.gateway.sales().list().await?;
            print_sales(ctx, &sales)
        }
        SaleCommand::Show { id } => show(ctx, id).await,
        SaleCommand::New {
            customer,
            notes,
            items,
        } => new_sale(ctx, customer, notes, items).await,
        SaleCommand::Cancel { id, yes } => cancel(ctx, id, yes).await,
    }
}

async fn new_sale(
    ctx: &Context,
    customer: Option<String>,
    notes: Option<String>,
    items: Vec<ItemSpec>,
) -> ApiResult<()> {
    let theme = ctx.theme();

    // Catalog snapshot for the advisory estimate, like the form's dropdown.
    let catalog = ctx.gateway.products().catalog().await?;

    let mut workflow = SaleWorkflow::new(ctx.gateway.clone());
    {
        let draft = workflow.draft_mut();
        draft.customer_name = customer.unwrap_or_default();
        draft.notes = notes.unwrap_or_default();

        // The fresh draft already holds one empty line; fill it with the
        // first item and append a line per remaining item.
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                draft.add_line();
            }
            draft.set_product(index, Some(item.product_id));
            draft.set_quantity(index, Some(item.quantity));
        }
    }

    for (index, line) in workflow.draft().lines().iter().enumerate() {
        let name = line
            .product_id
            .and_then(|id| catalog.iter().find(|p| p.id == id))
            .map(|p| p.name.as_str())
            .unwrap_or("(no product)");
        println!(
            "  {} x{}  ${}",
            name,
            line.quantity.unwrap_or(0),
            workflow.draft().line_estimate(index, &catalog)
        );
    }
    println!(
        "{} ${}",
        theme.header("Estimated total:"),
        workflow.estimated_total(&catalog)
    );
    println!("{}", theme.muted("(advisory - the backend computes the authoritative total)"));

    // Atomic submit; any rejection leaves the draft state with the caller.
    workflow.submit().await?;
    println!("{}", theme.ok("Sale registered."));

    // Server is authoritative: refresh the list rather than trusting a
    // local echo of totals or stock.
    let sales = ctx.gateway.sales().list().await?;
    print_sales(ctx, &sales)
}

async fn cancel(ctx: &Context, id: i64, yes: bool) -> ApiResult<()> {
    if !yes && !render::confirm("Cancel this sale? Stock will be restored.")? {
        return Ok(());
    }

    let workflow = SaleWorkflow::new(ctx.gateway.clone());
    workflow.cancel_sale(id).await?;

    println!("{}", ctx.theme().ok("Sale cancelled."));

    let sales = ctx.gateway.sales().list().await?;
    print_sales(ctx, &sales)
}

async fn show(ctx: &Context, id: i64) -> ApiResult<()> {
    let sale = ctx.gateway.sales().get(id).await?;

    if ctx.json {
        return render::print_json(&sale);
    }

    let theme = ctx.theme();
    println!("{}", theme.header(&format!("Sale #{}", sale.id)));
    println!(
        "  customer: {}",
        sale.customer_name.as_deref().unwrap_or("general")
    );
    if let Some(user) = &sale.user {
        println!("  seller:   {}", user.name);
    }
    println!("  date:     {}", render::date_cell(&sale.created_at));
    println!("  status:   {}", sale.status);
    if let Some(notes) = &sale.notes {
        println!("  notes:    {}", notes);
    }

    println!();
    println!(
        "{}",
        theme.muted(&format!(
            "  {:<28} {:>10} {:>5} {:>10}",
            "PRODUCT", "PRICE", "QTY", "SUBTOTAL"
        ))
    );
    for item in &sale.items {
        println!(
            "  {:<28} {:>10} {:>5} {:>10}",
            item.product.as_ref().map(|p| p.name.as_str()).unwrap_or("-"),
            format!("${}", item.price),
            item.quantity,
            format!("${}", item.subtotal),
        );
    }
    println!("  {:<28} {:>10} {:>5} {:>10}", "", "", "Total:", format!("${}", sale.total));

    Ok(())
}

fn print_sales(ctx: &Context, sales: &[Sale]) -> ApiResult<()> {
    if ctx.json {
        return render::print_json(&sales);
    }

    let theme = ctx.theme();
    println!("{}", theme.header("Sales"));
    println!(
        "{}",
        theme.muted(&format!(
            "{:<5} {:<22} {:>6} {:>10}  {:<11} {:<14} {}",
            "ID", "CUSTOMER", "ITEMS", "TOTAL", "STATUS", "SELLER", "DATE"
        ))
    );

    if sales.is_empty() {
        println!("{}", theme.muted("No sales"));
        return Ok(());
    }

    for sale in sales {
        let status_cell = if sale.status.is_cancellable() {
            theme.ok(&sale.status.to_string())
        } else {
            theme.err(&sale.status.to_string())
        };

        println!(
            "{:<5} {:<22} {:>6} {:>10}  {:<11} {:<14} {}",
            sale.id,
            sale.customer_name.as_deref().unwrap_or("general"),
            sale.items.len(),
            format!("${}", sale.total),
            status_cell,
            sale.user.as_ref().map(|u| u.name.as_str()).unwrap_or("-"),
            render::date_cell(&sale.created_at),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_spec_with_quantity() {
        let spec: ItemSpec = "7x3".parse().unwrap();
        assert_eq!(spec.product_id, 7);
        assert_eq!(spec.quantity, 3);
    }

    #[test]
    fn test_item_spec_defaults_quantity_to_one() {
        let spec: ItemSpec = "12".parse().unwrap();
        assert_eq!(spec.product_id, 12);
        assert_eq!(spec.quantity, 1);
    }

    #[test]
    fn test_item_spec_rejects_garbage() {
        assert!("".parse::<ItemSpec>().is_err());
        assert!("abc".parse::<ItemSpec>().is_err());
        assert!("7xq".parse::<ItemSpec>().is_err());
    }
}
