//! Output formatting for the CLI.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use shop_commerce::prelude::*;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        println!("  {}", format_row(cols, widths));
    }

    /// Create a spinner for the splash screen.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Print the product listing.
    pub fn products(&self, products: &[Product]) {
        if self.json {
            self.json(&products);
            return;
        }

        self.table_row(&["ID", "NAME", "PRICE", "LIKED"], &PRODUCT_WIDTHS);
        for p in products {
            let id = p.id.to_string();
            let price = p.display_price();
            self.table_row(&[&id, &p.name, &price, like_badge(p.liked)], &PRODUCT_WIDTHS);
        }
    }

    /// Print the cart contents.
    pub fn cart(&self, items: &[LineItem]) {
        if self.json {
            self.json(&items);
            return;
        }

        if items.is_empty() {
            self.info("Your cart is empty.");
            return;
        }

        self.table_row(&["ID", "NAME", "PRICE", "QTY"], &CART_WIDTHS);
        for item in items {
            let id = item.product_id().to_string();
            let price = item.product.display_price();
            let qty = item.quantity.to_string();
            self.table_row(&[&id, &item.product.name, &price, &qty], &CART_WIDTHS);
        }

        let total: u64 = items.iter().map(|i| u64::from(i.quantity)).sum();
        self.info(&format!("{} item(s), {} unit(s)", items.len(), total));
    }
}

const PRODUCT_WIDTHS: [usize; 4] = [4, 20, 10, 5];
const CART_WIDTHS: [usize; 4] = [4, 20, 10, 5];

fn format_row(cols: &[&str], widths: &[usize]) -> String {
    let formatted: Vec<String> = cols
        .iter()
        .zip(widths.iter())
        .map(|(col, width)| format!("{:width$}", col, width = width))
        .collect();
    formatted.join("  ").trim_end().to_string()
}

/// Heart marker for liked products.
pub fn like_badge(liked: bool) -> &'static str {
    if liked {
        "♥"
    } else {
        ""
    }
}

/// Human label for a cart transition.
pub fn transition_label(transition: &Transition) -> String {
    match transition {
        Transition::Added => style("added").green().to_string(),
        Transition::Incremented { quantity } => format!("quantity {}", quantity),
        Transition::Decremented { quantity } => format!("quantity {}", quantity),
        Transition::Removed { .. } => style("removed").yellow().to_string(),
        Transition::NotFound => style("not in cart").dim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_row_pads_columns() {
        assert_eq!(format_row(&["1", "Fern"], &[4, 6]), "1     Fern");
    }

    #[test]
    fn test_like_badge() {
        assert_eq!(like_badge(true), "♥");
        assert_eq!(like_badge(false), "");
    }

    #[test]
    fn test_transition_label() {
        assert_eq!(
            transition_label(&Transition::Incremented { quantity: 3 }),
            "quantity 3"
        );
    }
}
