//! Dashboard and report pages: read-only aggregates rendered as tables.

use clap::Subcommand;

use inventario_client::ApiResult;
use inventario_core::{CategoryReport, Product, ReportSummary};

use crate::commands::Context;
use crate::render;

#[derive(Subcommand)]
pub enum ReportCommand {
    /// Headline counters and total inventory value
    Summary,
    /// Product/stock totals per category
    ByCategory,
    /// Products at or below their minimum stock
    LowStock,
}

pub async fn run(ctx: &Context, command: ReportCommand) -> ApiResult<()> {
    match command {
        ReportCommand::Summary => {
            let summary = ctx.gateway.reports().summary().await?;
            if ctx.json {
                return render::print_json(&summary);
            }
            print_summary(ctx, &summary);
            Ok(())
        }
        ReportCommand::ByCategory => {
            let categories = ctx.gateway.reports().by_category().await?;
            if ctx.json {
                return render::print_json(&categories);
            }
            print_by_category(ctx, &categories);
            Ok(())
        }
        ReportCommand::LowStock => {
            let products = ctx.gateway.reports().low_stock().await?;
            if ctx.json {
                return render::print_json(&products);
            }
            print_low_stock(ctx, &products);
            Ok(())
        }
    }
}

/// The dashboard page: all three aggregates fetched concurrently, the way
/// the original fired its requests in parallel on mount.
pub async fn dashboard(ctx: &Context) -> ApiResult<()> {
    let reports = ctx.gateway.reports();
    let (summary, by_category, low_stock) = tokio::join!(
        reports.summary(),
        reports.by_category(),
        reports.low_stock()
    );
    let (summary, by_category, low_stock) = (summary?, by_category?, low_stock?);

    if ctx.json {
        return render::print_json(&serde_json::json!({
            "summary": summary,
            "by_category": by_category,
            "low_stock": low_stock,
        }));
    }

    print_summary(ctx, &summary);
    println!();
    print_by_category(ctx, &by_category);
    println!();
    print_low_stock(ctx, &low_stock);

    Ok(())
}

fn print_summary(ctx: &Context, summary: &ReportSummary) {
    let theme = ctx.theme();
    println!("{}", theme.header("Inventory Summary"));
    println!("  products:    {}", summary.total_products);
    println!("  categories:  {}", summary.total_categories);
    println!("  suppliers:   {}", summary.total_suppliers);

    let low = format!("  low stock:   {}", summary.low_stock);
    if summary.low_stock > 0 {
        println!("{}", theme.warn(&low));
    } else {
        println!("{}", low);
    }

    println!("  total value: ${}", summary.total_value);
}

fn print_by_category(ctx: &Context, categories: &[CategoryReport]) {
    let theme = ctx.theme();
    println!("{}", theme.header("Products by Category"));
    println!(
        "{}",
        theme.muted(&format!("{:<24} {:>10} {:>12}", "CATEGORY", "PRODUCTS", "TOTAL STOCK"))
    );

    for category in categories {
        println!(
            "{:<24} {:>10} {:>12}",
            category.name,
            category.products_count,
            category.products_sum_stock.unwrap_or(0)
        );
    }
}

fn print_low_stock(ctx: &Context, products: &[Product]) {
    let theme = ctx.theme();
    println!("{}", theme.header("Low Stock"));

    if products.is_empty() {
        println!("{}", theme.muted("No products below minimum stock"));
        return;
    }

    println!(
        "{}",
        theme.muted(&format!(
            "{:<28} {:<12} {:<18} {:>7} {:>5}",
            "PRODUCT", "SKU", "CATEGORY", "STOCK", "MIN"
        ))
    );

    for product in products {
        println!(
            "{:<28} {:<12} {:<18} {} {:>5}",
            product.name,
            product.sku.as_deref().unwrap_or("-"),
            product
                .category
                .as_ref()
                .map(|c| c.name.as_str())
                .unwrap_or("-"),
            theme.err(&format!("{:>7}", product.stock)),
            product.stock_min,
        );
    }
}
