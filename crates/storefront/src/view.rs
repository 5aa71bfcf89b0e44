//! Text rendering for the storefront screen.

use console::style;
use tabled::{Table, Tabled, settings::Style};

use printmart_cart::{Cart, Receipt};
use printmart_catalog::Catalog;
use printmart_core::Money;

#[derive(Tabled)]
struct CatalogRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Discount")]
    discount: String,
    #[tabled(rename = "Price")]
    price: String,
}

#[derive(Tabled)]
struct CartRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Item")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
}

/// Rendering settings: currency label and whether to skip colors/box drawing.
#[derive(Debug, Clone)]
pub struct View {
    currency: String,
    plain: bool,
}

impl View {
    pub fn new(currency: impl Into<String>, plain: bool) -> Self {
        Self {
            currency: currency.into(),
            plain,
        }
    }

    /// `Rp 28,500` style amount, rounded to whole rupiah.
    pub fn price(&self, amount: Money) -> String {
        format!("{} {}", self.currency, group_thousands(amount.round_to_major()))
    }

    /// Catalog listing with base (undiscounted) prices.
    pub fn catalog_table(&self, catalog: &Catalog) -> String {
        let rows: Vec<CatalogRow> = catalog
            .iter()
            .enumerate()
            .map(|(i, product)| CatalogRow {
                position: i + 1,
                name: product.name().to_string(),
                category: product.category().label().to_string(),
                discount: product.discount_rate().to_string(),
                price: self.price(product.base_price()),
            })
            .collect();

        self.table(Table::new(rows))
    }

    /// Cart listing with discounted prices.
    pub fn cart_table(&self, cart: &Cart) -> String {
        if cart.is_empty() {
            return "Your cart is empty.".to_string();
        }

        let rows: Vec<CartRow> = cart
            .entries()
            .iter()
            .enumerate()
            .map(|(i, product)| CartRow {
                position: i + 1,
                name: product.name().to_string(),
                price: self.price(product.discounted_price()),
            })
            .collect();

        self.table(Table::new(rows))
    }

    pub fn total_line(&self, total: Money) -> String {
        let line = format!("Total: {}", self.price(total));
        if self.plain {
            line
        } else {
            style(line).bold().to_string()
        }
    }

    pub fn checkout_message(&self, receipt: &Receipt) -> String {
        let line = format!("Your total: {}", self.price(receipt.total));
        if self.plain {
            line
        } else {
            style(line).green().bold().to_string()
        }
    }

    pub fn notice(&self, message: &str) -> String {
        if self.plain {
            message.to_string()
        } else {
            style(message).cyan().to_string()
        }
    }

    pub fn warning(&self, message: &str) -> String {
        let line = format!("! {message}");
        if self.plain {
            line
        } else {
            style(line).yellow().to_string()
        }
    }

    pub fn help(&self) -> &'static str {
        "Commands:\n  \
         list            show the catalog\n  \
         add <n>         put catalog product #n in the cart\n  \
         remove <n>      take cart item #n out\n  \
         cart            show the cart\n  \
         total           show the cart total\n  \
         checkout        pay the total and empty the cart\n  \
         help            show this list\n  \
         quit            leave the shop"
    }

    fn table(&self, mut table: Table) -> String {
        if self.plain {
            table.with(Style::ascii());
        } else {
            table.with(Style::rounded());
        }
        table.to_string()
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new("Rp", false)
    }
}

/// `1234567` -> `1,234,567`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
