use serde::{Deserialize, Serialize};

use printmart_core::{DiscountRate, DomainError, DomainResult, Money};

/// Product category. The set is closed; every category carries a fixed discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Banner,
    PhotoPrint,
    Merch,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Banner, Category::PhotoPrint, Category::Merch];

    /// The one place discount rates are defined.
    pub const fn discount_rate(self) -> DiscountRate {
        match self {
            Category::Banner => DiscountRate::from_percent(5),
            Category::PhotoPrint => DiscountRate::from_percent(2),
            Category::Merch => DiscountRate::from_percent(10),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Banner => "Banner",
            Category::PhotoPrint => "Photo print",
            Category::Merch => "Merchandise",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// A purchasable print product. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Product {
    name: String,
    base_price: Money,
    category: Category,
}

impl Product {
    pub fn new(name: impl Into<String>, base_price: Money, category: Category) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            name,
            base_price,
            category,
        })
    }

    /// Product priced in whole rupiah. Prices that do not fit in minor units
    /// are rejected.
    pub fn from_whole_rupiah(
        name: impl Into<String>,
        price: u64,
        category: Category,
    ) -> DomainResult<Self> {
        let base_price = Money::checked_from_major(price)
            .ok_or_else(|| DomainError::validation(format!("base price too large: {price}")))?;
        Self::new(name, base_price, category)
    }

    pub fn banner(name: impl Into<String>, price: u64) -> DomainResult<Self> {
        Self::from_whole_rupiah(name, price, Category::Banner)
    }

    pub fn photo_print(name: impl Into<String>, price: u64) -> DomainResult<Self> {
        Self::from_whole_rupiah(name, price, Category::PhotoPrint)
    }

    pub fn merch(name: impl Into<String>, price: u64) -> DomainResult<Self> {
        Self::from_whole_rupiah(name, price, Category::Merch)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_price(&self) -> Money {
        self.base_price
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn discount_rate(&self) -> DiscountRate {
        self.category.discount_rate()
    }

    /// Base price with the category discount taken off.
    pub fn discounted_price(&self) -> Money {
        self.discount_rate().apply(self.base_price)
    }
}
