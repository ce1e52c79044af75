//! Greedy coin change over the US coin set
//!
//! The denominations {25, 10, 5, 1} form a canonical coin system, so taking
//! the largest coin that fits at every step yields the minimum coin count.

use std::fmt;

/// A US coin, ordered from the largest denomination to the smallest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coin {
    Quarter,
    Dime,
    Nickel,
    Penny,
}

impl Coin {
    /// Every coin in descending order of value
    pub const ALL: [Coin; 4] = [Coin::Quarter, Coin::Dime, Coin::Nickel, Coin::Penny];

    /// Face value in cents
    pub fn cents(self) -> u64 {
        match self {
            Coin::Quarter => 25,
            Coin::Dime => 10,
            Coin::Nickel => 5,
            Coin::Penny => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Coin::Quarter => "quarter",
            Coin::Dime => "dime",
            Coin::Nickel => "nickel",
            Coin::Penny => "penny",
        }
    }

    fn index(self) -> usize {
        match self {
            Coin::Quarter => 0,
            Coin::Dime => 1,
            Coin::Nickel => 2,
            Coin::Penny => 3,
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}c)", self.name(), self.cents())
    }
}

/// Number of coins of each denomination handed back for an amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoinBreakdown {
    counts: [u64; 4],
}

impl CoinBreakdown {
    pub fn count(&self, coin: Coin) -> u64 {
        self.counts[coin.index()]
    }

    /// Total number of coins across all denominations
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Value of the breakdown in cents
    pub fn value(&self) -> u64 {
        self.iter().map(|(coin, count)| coin.cents() * count).sum()
    }

    /// Pairs of coin and count, largest coin first
    pub fn iter(&self) -> impl Iterator<Item = (Coin, u64)> + '_ {
        Coin::ALL
            .into_iter()
            .map(move |coin| (coin, self.count(coin)))
    }
}

/// Breaks `cents` into coins, largest denomination first
pub fn make_change(cents: u64) -> CoinBreakdown {
    let mut remaining = cents;
    let mut breakdown = CoinBreakdown::default();

    for coin in Coin::ALL {
        breakdown.counts[coin.index()] = remaining / coin.cents();
        remaining %= coin.cents();
    }

    breakdown
}

/// Minimum number of coins needed to make `cents`
pub fn count_coins(cents: u64) -> u64 {
    make_change(cents).total()
}

/// Accepts any non-negative amount of change owed
pub fn validate_change_owed(value: i64) -> Result<u64, String> {
    u64::try_from(value).map_err(|_| format!("Change owed cannot be negative (got {value})"))
}
