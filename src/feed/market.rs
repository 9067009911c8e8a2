//! Simulated market quotes
//!
//! Each refresh rebuilds the whole grid: every figure is a fixed baseline
//! plus uniform noise of `(r - 0.5) * spread`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{MarketStat, Money, Quote};

/// Produces a fresh quote grid on each call
pub trait QuoteSource {
    fn snapshot(&mut self) -> Vec<Quote>;
}

struct Baseline {
    symbol: &'static str,
    name: &'static str,
    price: (f64, f64),
    change: (f64, f64),
    change_percent: (f64, f64),
    volume: &'static str,
}

const BASELINES: [Baseline; 6] = [
    Baseline {
        symbol: "SPY",
        name: "S&P 500 ETF",
        price: (445.67, 2.0),
        change: (2.34, 1.0),
        change_percent: (0.53, 0.2),
        volume: "125.4M",
    },
    Baseline {
        symbol: "QQQ",
        name: "Nasdaq 100 ETF",
        price: (387.23, 3.0),
        change: (-1.45, 1.0),
        change_percent: (-0.37, 0.3),
        volume: "89.2M",
    },
    Baseline {
        symbol: "AAPL",
        name: "Apple Inc.",
        price: (178.45, 2.0),
        change: (3.21, 1.5),
        change_percent: (1.83, 0.4),
        volume: "67.8M",
    },
    Baseline {
        symbol: "TSLA",
        name: "Tesla Inc.",
        price: (248.32, 5.0),
        change: (-4.67, 2.0),
        change_percent: (-1.85, 0.5),
        volume: "98.5M",
    },
    Baseline {
        symbol: "MSFT",
        name: "Microsoft Corp.",
        price: (412.78, 3.0),
        change: (5.23, 2.0),
        change_percent: (1.28, 0.3),
        volume: "42.1M",
    },
    Baseline {
        symbol: "GOOGL",
        name: "Alphabet Inc.",
        price: (142.65, 2.0),
        change: (1.87, 1.0),
        change_percent: (1.33, 0.4),
        volume: "38.9M",
    },
];

/// Random-walk-free quote generator around fixed baselines
pub struct SimulatedMarket {
    rng: StdRng,
}

impl SimulatedMarket {
    /// Generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator, for tests and reproducible output
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn jitter(&mut self, (base, spread): (f64, f64)) -> f64 {
        base + (self.rng.gen::<f64>() - 0.5) * spread
    }
}

impl Default for SimulatedMarket {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteSource for SimulatedMarket {
    fn snapshot(&mut self) -> Vec<Quote> {
        BASELINES
            .iter()
            .map(|b| Quote {
                symbol: b.symbol.to_string(),
                name: b.name.to_string(),
                price: Money::from_float(self.jitter(b.price)),
                change: Money::from_float(self.jitter(b.change)),
                change_percent: self.jitter(b.change_percent),
                volume: b.volume.to_string(),
            })
            .collect()
    }
}

/// The static summary strip under the grid
pub fn market_summary() -> Vec<MarketStat> {
    vec![
        MarketStat::new("Market Cap", "$42.8T", "+2.3%", true),
        MarketStat::new("Total Volume", "$1.2T", "+5.7%", true),
        MarketStat::new("Active Stocks", "4,247", "-1.2%", false),
    ]
}
