//! Interactive menu loop.
//!
//! # Responsibility
//! - Render the menu, read operator input and call the inventory service.
//! - Translate service results into console messages.
//!
//! # Invariants
//! - Malformed input never panics; the current action is abandoned.
//! - End of input is treated like the exit option.

use log::warn;
use std::io::{self, BufRead, Write};
use stockroom_core::{InventoryService, Product, ProductRepository, RepoError, StockDirection};

/// Runs the menu until the operator exits or input ends.
pub fn run<R, I, O>(
    service: &mut InventoryService<R>,
    input: &mut I,
    output: &mut O,
) -> io::Result<()>
where
    R: ProductRepository,
    I: BufRead,
    O: Write,
{
    let mut shell = Shell {
        service,
        input,
        output,
    };
    shell.run()
}

enum Flow {
    Continue,
    Exit,
}

struct Shell<'a, R: ProductRepository, I, O> {
    service: &'a mut InventoryService<R>,
    input: &'a mut I,
    output: &'a mut O,
}

impl<R: ProductRepository, I: BufRead, O: Write> Shell<'_, R, I, O> {
    fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line()? else {
                return Ok(());
            };
            let flow = match choice.trim() {
                "1" => self.add_product()?,
                "2" => self.display_products()?,
                "3" => self.search_product()?,
                "4" => self.update_stock()?,
                "5" => {
                    writeln!(self.output, "Exiting...")?;
                    Flow::Exit
                }
                _ => {
                    writeln!(self.output, "Invalid choice.")?;
                    Flow::Continue
                }
            };
            if let Flow::Exit = flow {
                return Ok(());
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Inventory Management System ===")?;
        writeln!(self.output, "1. Add Product")?;
        writeln!(self.output, "2. Display Products")?;
        writeln!(self.output, "3. Search Product by ID")?;
        writeln!(self.output, "4. Update Stock")?;
        writeln!(self.output, "5. Exit")?;
        write!(self.output, "Choose an option: ")?;
        self.output.flush()
    }

    fn add_product(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt_parsed::<i32>("Enter ID: ")? else {
            return Ok(Flow::Continue);
        };
        let Some(name) = self.prompt("Enter Name: ")? else {
            return Ok(Flow::Continue);
        };
        let Some(quantity) = self.prompt_parsed::<i32>("Enter Quantity: ")? else {
            return Ok(Flow::Continue);
        };
        let Some(price) = self.prompt_with("Enter Price: ", parse_price)? else {
            return Ok(Flow::Continue);
        };

        let product = Product::new(id, name, quantity, price);
        if let Err(err) = self.service.add(product) {
            self.report_save_error(&err)?;
        }
        Ok(Flow::Continue)
    }

    fn display_products(&mut self) -> io::Result<Flow> {
        if self.service.is_empty() {
            writeln!(self.output, "Inventory is empty.")?;
            return Ok(Flow::Continue);
        }
        for product in self.service.list() {
            writeln!(self.output, "{product}")?;
        }
        Ok(Flow::Continue)
    }

    fn search_product(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt_parsed::<i32>("Enter ID to search: ")? else {
            return Ok(Flow::Continue);
        };
        match self.service.find_by_id(id) {
            Some(product) => writeln!(self.output, "Product Found: {product}")?,
            None => writeln!(self.output, "Product not found.")?,
        }
        Ok(Flow::Continue)
    }

    fn update_stock(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt_parsed::<i32>("Enter ID: ")? else {
            return Ok(Flow::Continue);
        };
        let Some(amount) = self.prompt_parsed::<i32>("Enter Quantity: ")? else {
            return Ok(Flow::Continue);
        };
        let Some(op) = self.prompt("Add or Remove (A/R): ")? else {
            return Ok(Flow::Continue);
        };

        match self
            .service
            .update_quantity(id, amount, parse_direction(&op))
        {
            Ok(()) => {}
            Err(RepoError::NotFound(_)) => writeln!(self.output, "Product not found.")?,
            Err(err) => self.report_save_error(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn report_save_error(&mut self, err: &RepoError) -> io::Result<()> {
        warn!("event=cli_save module=cli status=error error={err}");
        writeln!(self.output, "Error saving inventory.")
    }

    /// Prompts once; `None` means input ended.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prompts and parses. `Ok(None)` covers both end of input and bad input;
    /// either way the caller drops back to the menu, which then sees the EOF.
    fn prompt_parsed<T: std::str::FromStr>(&mut self, label: &str) -> io::Result<Option<T>> {
        self.prompt_with(label, |raw| raw.parse::<T>().ok())
    }

    fn prompt_with<T>(
        &mut self,
        label: &str,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> io::Result<Option<T>> {
        let Some(line) = self.prompt(label)? else {
            return Ok(None);
        };
        match parse(line.trim()) {
            Some(value) => Ok(Some(value)),
            None => {
                writeln!(self.output, "Invalid input.")?;
                Ok(None)
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Finite decimal only; `NaN` and `inf` parse as `f64` but cannot be stored.
fn parse_price(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|price| price.is_finite())
}

/// `A`/`a` as the first non-blank character means add; anything else removes.
fn parse_direction(raw: &str) -> StockDirection {
    match raw.trim().chars().next() {
        Some('A' | 'a') => StockDirection::Add,
        _ => StockDirection::Remove,
    }
}
