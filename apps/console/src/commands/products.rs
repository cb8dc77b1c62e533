//! Product catalog pages: searchable paginated list, detail, and the
//! create/edit form cycle.

use clap::Subcommand;

use inventario_client::endpoints::ProductInput;
use inventario_client::ApiResult;
use inventario_core::{Money, Product};

use crate::commands::Context;
use crate::render;

#[derive(Subcommand)]
pub enum ProductCommand {
    /// Paginated list with optional name/SKU search
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Full detail of one product
    Show { id: i64 },
    /// Create a product
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        sku: String,
        #[arg(long)]
        price: Money,
        #[arg(long)]
        cost: Option<Money>,
        #[arg(long, default_value_t = 0)]
        stock: i64,
        #[arg(long, default_value_t = 0)]
        stock_min: i64,
        #[arg(long)]
        category: Option<i64>,
        #[arg(long)]
        supplier: Option<i64>,
        #[arg(long)]
        description: Option<String>,
        /// Create as inactive (hidden from sale forms)
        #[arg(long, default_value_t = false)]
        inactive: bool,
    },
    /// Update a product; omitted flags keep their current value
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        sku: Option<String>,
        #[arg(long)]
        price: Option<Money>,
        #[arg(long)]
        cost: Option<Money>,
        #[arg(long)]
        stock: Option<i64>,
        #[arg(long)]
        stock_min: Option<i64>,
        #[arg(long)]
        category: Option<i64>,
        #[arg(long)]
        supplier: Option<i64>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete a product
    Delete {
        id: i64,
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
}

pub async fn run(ctx: &Context, command: ProductCommand) -> ApiResult<()> {
    match command {
        ProductCommand::List { search, page } => list(ctx, search, page).await,
        ProductCommand::Show { id } => show(ctx, id).await,
        ProductCommand::Create {
            name,
            sku,
            price,
            cost,
            stock,
            stock_min,
            category,
            supplier,
            description,
            inactive,
        } => {
            let input = ProductInput {
                name,
                sku,
                description,
                price,
                cost,
                stock,
                stock_min,
                category_id: category,
                supplier_id: supplier,
                active: !inactive,
            };
            ctx.gateway.products().create(&input).await?;
            println!("{}", ctx.theme().ok("Product created."));
            Ok(())
        }
        ProductCommand::Update {
            id,
            name,
            sku,
            price,
            cost,
            stock,
            stock_min,
            category,
            supplier,
            description,
            active,
        } => {
            // Prefill from the current record, like the edit form does.
            let current = ctx.gateway.products().get(id).await?;
            let input = ProductInput {
                name: name.unwrap_or(current.name),
                sku: sku.or(current.sku).unwrap_or_default(),
                description: description.or(current.description),
                price: price.unwrap_or(current.price),
                cost: cost.or(current.cost),
                stock: stock.unwrap_or(current.stock),
                stock_min: stock_min.unwrap_or(current.stock_min),
                category_id: category.or(current.category_id),
                supplier_id: supplier.or(current.supplier_id),
                active: active.unwrap_or(current.active),
            };
            ctx.gateway.products().update(id, &input).await?;
            println!("{}", ctx.theme().ok("Product updated."));
            Ok(())
        }
        ProductCommand::Delete { id, yes } => {
            if !yes && !render::confirm("Delete this product?")? {
                return Ok(());
            }
            ctx.gateway.products().delete(id).await?;
            println!("{}", ctx.theme().ok("Product deleted."));
            Ok(())
        }
    }
}

async fn list(ctx: &Context, search: Option<String>, page: u32) -> ApiResult<()> {
    let result = ctx.gateway.products().list(search.as_deref(), page).await?;

    if ctx.json {
        return render::print_json(&result.data);
    }

    let theme = ctx.theme();
    println!("{}", theme.header("Products"));
    println!(
        "{}",
        theme.muted(&format!(
            "{:<5} {:<28} {:<12} {:>10} {:>7} {:>5}  {}",
            "ID", "NAME", "SKU", "PRICE", "STOCK", "MIN", "STATUS"
        ))
    );

    if result.data.is_empty() {
        println!("{}", theme.muted("No products"));
        return Ok(());
    }

    for product in &result.data {
        let stock_cell = format!("{:>7}", product.stock);
        let stock_cell = if product.is_low_stock() {
            theme.warn(&stock_cell).to_string()
        } else {
            stock_cell
        };

        println!(
            "{:<5} {:<28} {:<12} {:>10} {} {:>5}  {}",
            product.id,
            product.name,
            product.sku.as_deref().unwrap_or("-"),
            format!("${}", product.price),
            stock_cell,
            product.stock_min,
            if product.active { "active" } else { "inactive" },
        );
    }

    let meta = &result.meta;
    println!(
        "{}",
        theme.muted(&format!(
            "showing {}-{} of {} (page {}/{})",
            meta.from.unwrap_or(0),
            meta.to.unwrap_or(0),
            meta.total,
            page,
            meta.last_page
        ))
    );

    Ok(())
}

async fn show(ctx: &Context, id: i64) -> ApiResult<()> {
    let product: Product = ctx.gateway.products().get(id).await?;

    if ctx.json {
        return render::print_json(&product);
    }

    let theme = ctx.theme();
    println!("{}", theme.header(&format!("Product #{}", product.id)));
    println!("  name:        {}", product.name);
    println!("  sku:         {}", product.sku.as_deref().unwrap_or("-"));
    println!("  price:       ${}", product.price);
    if let Some(cost) = product.cost {
        println!("  cost:        ${}", cost);
    }
    println!("  stock:       {} (min {})", product.stock, product.stock_min);
    if let Some(category) = &product.category {
        println!("  category:    {}", category.name);
    }
    if let Some(supplier) = &product.supplier {
        println!("  supplier:    {}", supplier.name);
    }
    if let Some(description) = &product.description {
        println!("  description: {}", description);
    }
    println!(
        "  status:      {}",
        if product.active { "active" } else { "inactive" }
    );

    Ok(())
}
