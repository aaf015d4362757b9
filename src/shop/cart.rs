// shop/cart.rs - Shopping cart and wishlist
//
// Per-shopper state kept in memory. Lines hold a snapshot of the product so
// the cart total does not move when the catalog is reloaded.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shop::error::CatalogError;
use crate::shop::model::Product;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units; an existing line for the product grows instead
    pub fn add(&mut self, product: &Product, quantity: u32) -> Result<(), CatalogError> {
        if quantity == 0 {
            return Err(CatalogError::InvalidQuantity(quantity));
        }
        if !product.in_stock {
            return Err(CatalogError::OutOfStock(product.id.clone()));
        }

        match self.lines.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine {
                product: product.clone(),
                quantity,
            }),
        }

        tracing::debug!("Added {} x '{}' to cart", quantity, product.id);
        Ok(())
    }

    /// Set the quantity of a line; zero removes it
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) -> Result<(), CatalogError> {
        if quantity == 0 {
            self.remove(product_id)?;
            return Ok(());
        }

        let line = self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product_id)
            .ok_or_else(|| CatalogError::ProductNotFound(product_id.to_string()))?;
        line.quantity = quantity;
        Ok(())
    }

    pub fn remove(&mut self, product_id: &str) -> Result<CartLine, CatalogError> {
        let index = self
            .lines
            .iter()
            .position(|line| line.product.id == product_id)
            .ok_or_else(|| CatalogError::ProductNotFound(product_id.to_string()))?;
        Ok(self.lines.remove(index))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across lines (the navbar badge)
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |total, line| total.saturating_add(line.quantity))
    }

    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// What the shopper saves against original prices
    pub fn savings(&self) -> Decimal {
        self.lines
            .iter()
            .map(|line| line.product.savings() * Decimal::from(line.quantity))
            .sum()
    }
}

/// Liked products (the heart button on a card)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    liked: BTreeSet<String>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the liked state, returning whether the product is liked afterwards
    pub fn toggle(&mut self, product_id: &str) -> bool {
        if self.liked.remove(product_id) {
            false
        } else {
            self.liked.insert(product_id.to_string());
            true
        }
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.liked.contains(product_id)
    }

    pub fn len(&self) -> usize {
        self.liked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.liked.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.liked.iter().map(String::as_str)
    }
}
