// services/tile-dash/src/mock.rs
//
// Tile Dashboard - Demo Gateway
// Serves generated tile samples from memory for UI development and demos
//

use std::cell::RefCell;

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use rand::prelude::*;
use rand::rngs::StdRng;

use tilekit::types::{FINISHES, GRADES, STATUSES, TILE_TYPES};
use tilekit::{InventoryError, TileDraft, TileGateway, TileRecord};

const BRANDS: [(&str, &str); 8] = [
    ("Roman", "PT Roman Ceramic International"),
    ("Mulia", "PT Mulia Industrindo"),
    ("Asia Tile", "PT Asia Tile Industry"),
    ("Platinum", "PT Platinum Ceramics Industry"),
    ("Granito", "PT Granitoguna Building Ceramics"),
    ("Milan", "PT Milan Ceramic"),
    ("Arwana", "PT Arwana Citramulia"),
    ("KIA", "PT Keramika Indonesia Assosiasi"),
];

const SIZES: [&str; 5] = ["30x30 cm", "40x40 cm", "50x50 cm", "60x60 cm", "60x120 cm"];

const LOCATIONS: [&str; 7] = [
    "Rak A-01", "Rak A-02", "Rak B-01", "Rak B-02", "Rak C-01", "Gudang Belakang", "",
];

/// In-memory stand-in for the sheet and its mutation script
pub struct DemoGateway {
    records: RefCell<Vec<TileRecord>>,
    latency_ms: u32,
    failure_rate: f64,
}

impl DemoGateway {
    /// Generate `count` samples deterministically from `seed`
    pub fn seeded(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let records = (0..count)
            .map(|i| sample_tile(&mut rng, i))
            .collect();

        Self {
            records: RefCell::new(records),
            latency_ms: 0,
            failure_rate: 0.0,
        }
    }

    /// Delay every call to make pending states visible
    pub fn with_latency(mut self, latency_ms: u32) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    /// Fraction of mutations answered with a script error
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = rate.clamp(0.0, 1.0);
        self
    }

    async fn simulate_latency(&self) {
        if self.latency_ms > 0 {
            TimeoutFuture::new(self.latency_ms).await;
        }
    }

    fn maybe_fail(&self) -> Result<(), InventoryError> {
        if self.failure_rate > 0.0 && rand::thread_rng().gen_bool(self.failure_rate) {
            return Err(InventoryError::Remote(
                "Demo script rejected the request".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl TileGateway for DemoGateway {
    async fn fetch_all(&self) -> Result<Vec<TileRecord>, InventoryError> {
        self.simulate_latency().await;
        Ok(self.records.borrow().clone())
    }

    async fn create(&self, draft: TileDraft) -> Result<TileRecord, InventoryError> {
        self.simulate_latency().await;
        self.maybe_fail()?;

        let record = TileRecord::from_draft(draft);
        self.records.borrow_mut().push(record.clone());
        Ok(record)
    }

    async fn delete(&self, record: &TileRecord) -> Result<(), InventoryError> {
        self.simulate_latency().await;
        self.maybe_fail()?;

        self.records.borrow_mut().retain(|r| r.id != record.id);
        Ok(())
    }

    fn name(&self) -> &str {
        "demo"
    }
}

fn sample_tile(rng: &mut StdRng, index: usize) -> TileRecord {
    let (brand, manufacturer) = BRANDS[rng.gen_range(0..BRANDS.len())];
    let day = 1 + (index % 28);
    let month = 1 + rng.gen_range(0..12);

    TileRecord {
        id: format!("tile-demo-{}", index),
        entry_date: format!("2024-{:02}-{:02}", month, day),
        brand: brand.to_string(),
        manufacturer: manufacturer.to_string(),
        grade: pick(rng, &GRADES),
        working_size: pick(rng, &SIZES),
        finish: pick(rng, &FINISHES),
        tile_type: pick(rng, &TILE_TYPES),
        location: pick(rng, &LOCATIONS),
        // roughly three quarters active
        status: if rng.gen_ratio(3, 4) {
            STATUSES[0].to_string()
        } else {
            STATUSES[1].to_string()
        },
    }
}

fn pick(rng: &mut StdRng, options: &[&str]) -> String {
    options
        .choose(rng)
        .map(|s| s.to_string())
        .unwrap_or_default()
}
