//! The read-eval-print loop that drives a [`Storefront`].

use std::io::{self, BufRead, Write};

use crate::error::StorefrontError;
use crate::input::Action;
use crate::session::Storefront;
use crate::view::View;

const PROMPT: &str = "> ";

/// Run the shop until `quit` or end of input.
///
/// Shopper mistakes are printed as warnings; only I/O failures end the loop
/// with an error.
pub fn run<R: BufRead, W: Write>(
    storefront: &mut Storefront,
    view: &View,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "{}", view.notice("Digital printing marketplace"))?;
    writeln!(output, "{}", view.catalog_table(storefront.catalog()))?;
    writeln!(output, "{}", view.total_line(storefront.total()))?;
    writeln!(output, "Type `help` for commands.")?;

    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;

        match Action::parse(&line) {
            Ok(None) => continue,
            Ok(Some(Action::Quit)) => {
                writeln!(output, "Goodbye.")?;
                break;
            }
            Ok(Some(action)) => {
                if let Err(err) = dispatch(storefront, view, action, output)? {
                    writeln!(output, "{}", view.warning(&err.to_string()))?;
                }
            }
            Err(err) => writeln!(output, "{}", view.warning(&err.to_string()))?,
        }
    }

    tracing::info!(cart_id = %storefront.cart().id_typed(), "storefront session ended");
    Ok(())
}

/// Perform one action. The outer `Result` carries I/O failures, the inner one
/// carries shopper mistakes.
fn dispatch<W: Write>(
    storefront: &mut Storefront,
    view: &View,
    action: Action,
    output: &mut W,
) -> io::Result<Result<(), StorefrontError>> {
    match action {
        Action::List => {
            writeln!(output, "{}", view.catalog_table(storefront.catalog()))?;
        }
        Action::Add(selection) => match storefront.add_selected(selection) {
            Ok(product) => {
                writeln!(
                    output,
                    "Added {} - {}",
                    product.name(),
                    view.price(product.discounted_price())
                )?;
                writeln!(output, "{}", view.total_line(storefront.total()))?;
            }
            Err(err) => return Ok(Err(err)),
        },
        Action::Remove(selection) => match storefront.remove_selected(selection) {
            Ok(product) => {
                writeln!(output, "Removed {}", product.name())?;
                writeln!(output, "{}", view.total_line(storefront.total()))?;
            }
            Err(err) => return Ok(Err(err)),
        },
        Action::ShowCart => {
            writeln!(output, "{}", view.cart_table(storefront.cart()))?;
            writeln!(output, "{}", view.total_line(storefront.total()))?;
        }
        Action::Total => {
            writeln!(output, "{}", view.total_line(storefront.total()))?;
        }
        Action::Checkout => {
            let receipt = storefront.checkout();
            writeln!(output, "{}", view.checkout_message(&receipt))?;
            writeln!(output, "{}", view.total_line(storefront.total()))?;
        }
        Action::Help => {
            writeln!(output, "{}", view.help())?;
        }
        Action::Quit => {}
    }

    Ok(Ok(()))
}
