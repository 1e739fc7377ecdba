//! # Seed Data
//!
//! Initial contents of a [`Store`](crate::Store).
//!
//! [`SeedData::sample`] is the fixed demo data set the dashboard ships with:
//! three farmers, five crops, three inventory items, two harvests, one sale
//! and customer, one market listing, two sensors and two alerts.
//! [`SeedData::default`] is an empty store.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use agri_core::{
    Address, Alert, AlertSeverity, AlertType, Contact, Crop, CropCategory, Customer,
    CustomerStatus, CustomerType, FarmType, Farmer, FarmerStatus, HarvestQuality, HarvestRecord,
    HarvestStatus, InventoryCategory, InventoryItem, ListingQuality, ListingStatus, MarketListing,
    Money, PaymentMethod, PaymentStatus, Sale, SaleItem, Sensor, SensorStatus, SensorType,
    TemperatureRange, WaterRequirement,
};

/// Records a store starts with.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub farmers: Vec<Farmer>,
    pub crops: Vec<Crop>,
    pub inventory: Vec<InventoryItem>,
    pub harvests: Vec<HarvestRecord>,
    pub sales: Vec<Sale>,
    pub customers: Vec<Customer>,
    pub listings: Vec<MarketListing>,
    pub sensors: Vec<Sensor>,
    pub alerts: Vec<Alert>,
}

impl SeedData {
    /// The demo data set.
    pub fn sample() -> Self {
        SeedData {
            farmers: sample_farmers(),
            crops: sample_crops(),
            inventory: sample_inventory(),
            harvests: sample_harvests(),
            sales: sample_sales(),
            customers: sample_customers(),
            listings: sample_listings(),
            sensors: sample_sensors(),
            alerts: sample_alerts(),
        }
    }

    /// Replaces the farmers.
    pub fn with_farmers(mut self, farmers: Vec<Farmer>) -> Self {
        self.farmers = farmers;
        self
    }

    /// Replaces the inventory items.
    pub fn with_inventory(mut self, inventory: Vec<InventoryItem>) -> Self {
        self.inventory = inventory;
        self
    }

    /// Replaces the harvests.
    pub fn with_harvests(mut self, harvests: Vec<HarvestRecord>) -> Self {
        self.harvests = harvests;
        self
    }

    /// Replaces the alerts.
    pub fn with_alerts(mut self, alerts: Vec<Alert>) -> Self {
        self.alerts = alerts;
        self
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn sri_lanka(street: &str, city: &str, province: &str, postal_code: &str) -> Address {
    Address {
        street: street.to_string(),
        city: city.to_string(),
        district: city.to_string(),
        province: province.to_string(),
        postal_code: postal_code.to_string(),
        country: "Sri Lanka".to_string(),
    }
}

fn contact(phone: &str, email: &str, whatsapp: bool) -> Contact {
    Contact {
        phone: phone.to_string(),
        email: Some(email.to_string()),
        whatsapp: whatsapp.then(|| phone.to_string()),
    }
}

// =============================================================================
// Collections
// =============================================================================

fn sample_farmers() -> Vec<Farmer> {
    vec![
        Farmer {
            id: "1".to_string(),
            name: "Priya Sharma".to_string(),
            farmer_id: "CBF001".to_string(),
            address: sri_lanka("123 Tea Estate Road", "Kandy", "Central", "20000"),
            contact: contact("+94 77 123 4567", "priya.sharma@email.com", true),
            farm_size: 25.5,
            farm_type: FarmType::Organic,
            join_date: date(2022, 3, 15),
            status: FarmerStatus::Active,
            crops: strings(&["1", "2", "3"]),
            total_harvest: 1_250.0,
            revenue: Money::from_major(89_500),
            notes: Some("Excellent organic tea producer with sustainable practices.".to_string()),
            avatar: None,
        },
        Farmer {
            id: "2".to_string(),
            name: "Rajesh Kumar".to_string(),
            farmer_id: "CBF002".to_string(),
            address: sri_lanka("456 Rice Field Lane", "Polonnaruwa", "North Central", "51000"),
            contact: contact("+94 71 234 5678", "rajesh.kumar@email.com", false),
            farm_size: 18.2,
            farm_type: FarmType::Conventional,
            join_date: date(2021, 8, 22),
            status: FarmerStatus::Active,
            crops: strings(&["4", "5"]),
            total_harvest: 2_100.0,
            revenue: Money::from_major(125_000),
            notes: None,
            avatar: None,
        },
        Farmer {
            id: "3".to_string(),
            name: "Lakshmi Perera".to_string(),
            farmer_id: "CBF003".to_string(),
            address: sri_lanka("789 Coconut Grove", "Galle", "Southern", "80000"),
            contact: contact("+94 76 345 6789", "lakshmi.perera@email.com", true),
            farm_size: 12.8,
            farm_type: FarmType::Mixed,
            join_date: date(2023, 1, 10),
            status: FarmerStatus::Active,
            // Crops "6" and "7" are not in the catalog.
            crops: strings(&["6", "7"]),
            total_harvest: 850.0,
            revenue: Money::from_major(67_500),
            notes: None,
            avatar: None,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn crop(
    id: &str,
    name: &str,
    variety: &str,
    category: CropCategory,
    growing_period: u32,
    planting: &[&str],
    harvest: &[&str],
    water: WaterRequirement,
    soil: &[&str],
    (min, max): (f64, f64),
    description: &str,
) -> Crop {
    Crop {
        id: id.to_string(),
        name: name.to_string(),
        variety: variety.to_string(),
        category,
        growing_period,
        planting_season: strings(planting),
        harvest_season: strings(harvest),
        water_requirement: water,
        soil_type: strings(soil),
        optimal_temperature: TemperatureRange { min, max },
        description: Some(description.to_string()),
        image: None,
    }
}

fn sample_crops() -> Vec<Crop> {
    vec![
        crop(
            "1",
            "Tea",
            "Ceylon Black Tea",
            CropCategory::Beverage,
            1_095,
            &["April", "May", "October", "November"],
            &["All Year"],
            WaterRequirement::High,
            &["acidic", "well-drained"],
            (15.0, 25.0),
            "Premium Ceylon black tea with excellent quality and flavor.",
        ),
        crop(
            "2",
            "Cinnamon",
            "Ceylon Cinnamon",
            CropCategory::Spice,
            730,
            &["May", "June"],
            &["October", "November", "March", "April"],
            WaterRequirement::Medium,
            &["sandy loam", "laterite"],
            (20.0, 30.0),
            "True Ceylon cinnamon with delicate flavor and aroma.",
        ),
        crop(
            "3",
            "Cardamom",
            "Large Cardamom",
            CropCategory::Spice,
            1_095,
            &["June", "July"],
            &["September", "October", "November"],
            WaterRequirement::High,
            &["loamy", "well-drained"],
            (10.0, 25.0),
            "High-quality large cardamom with strong aroma.",
        ),
        crop(
            "4",
            "Rice",
            "Basmati",
            CropCategory::Grain,
            120,
            &["April", "May", "October", "November"],
            &["August", "September", "February", "March"],
            WaterRequirement::High,
            &["clay", "loamy"],
            (20.0, 35.0),
            "Premium basmati rice with excellent cooking quality.",
        ),
        crop(
            "5",
            "Coconut",
            "King Coconut",
            CropCategory::Fruit,
            2_190,
            &["All Year"],
            &["All Year"],
            WaterRequirement::Medium,
            &["sandy", "coastal"],
            (22.0, 32.0),
            "Premium king coconut variety native to Sri Lanka.",
        ),
    ]
}

fn sample_inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: "1".to_string(),
            name: "Organic Fertilizer NPK 10-10-10".to_string(),
            category: InventoryCategory::Fertilizer,
            brand: Some("EcoGrow".to_string()),
            unit: "kg".to_string(),
            current_stock: 2_500.0,
            min_stock_level: 500.0,
            max_stock_level: 5_000.0,
            price_per_unit: Money::from_major(85),
            supplier: "Green Earth Suppliers".to_string(),
            last_restocked: date(2024, 1, 15),
            expiry_date: Some(date(2025, 1, 15)),
            location: "Warehouse A - Section 2".to_string(),
            description: Some(
                "High-quality organic NPK fertilizer for sustainable farming".to_string(),
            ),
            image: None,
        },
        InventoryItem {
            id: "2".to_string(),
            name: "Tea Seeds - Ceylon Black".to_string(),
            category: InventoryCategory::Seeds,
            brand: Some("Ceylon Seeds Co.".to_string()),
            unit: "packet".to_string(),
            current_stock: 150.0,
            min_stock_level: 50.0,
            max_stock_level: 300.0,
            price_per_unit: Money::from_major(1_250),
            supplier: "Ceylon Agricultural Institute".to_string(),
            last_restocked: date(2024, 1, 10),
            expiry_date: None,
            location: "Cold Storage Room".to_string(),
            description: Some("Premium tea seeds for Ceylon black tea cultivation".to_string()),
            image: None,
        },
        InventoryItem {
            id: "3".to_string(),
            name: "Pesticide - BioSpray Natural".to_string(),
            category: InventoryCategory::Pesticide,
            brand: Some("BioCare".to_string()),
            unit: "liter".to_string(),
            current_stock: 45.0,
            min_stock_level: 20.0,
            max_stock_level: 100.0,
            price_per_unit: Money::from_major(2_500),
            supplier: "Bio Solutions Ltd".to_string(),
            last_restocked: date(2024, 1, 8),
            expiry_date: Some(date(2024, 12, 31)),
            location: "Chemical Storage - Secured Area".to_string(),
            description: Some("Natural bio-pesticide safe for organic farming".to_string()),
            image: None,
        },
    ]
}

fn sample_harvests() -> Vec<HarvestRecord> {
    vec![
        HarvestRecord {
            id: "1".to_string(),
            farmer_id: "1".to_string(),
            crop_plan_id: "cp1".to_string(),
            crop_name: "Tea".to_string(),
            harvest_date: date(2024, 1, 15),
            quantity: 125.5,
            unit: "kg".to_string(),
            quality: HarvestQuality::Excellent,
            moisture_content: Some(12.5),
            grade: Some("A+".to_string()),
            price_per_unit: Money::from_major(350),
            total_value: Money::from_major(43_925),
            storage_location: "Tea Processing Center - Lot A".to_string(),
            status: HarvestStatus::Stored,
            notes: Some("High-quality harvest with excellent flavor profile".to_string()),
        },
        HarvestRecord {
            id: "2".to_string(),
            farmer_id: "2".to_string(),
            crop_plan_id: "cp2".to_string(),
            crop_name: "Rice".to_string(),
            harvest_date: date(2024, 1, 12),
            quantity: 850.0,
            unit: "kg".to_string(),
            quality: HarvestQuality::Good,
            moisture_content: Some(14.0),
            grade: Some("A".to_string()),
            price_per_unit: Money::from_major(125),
            total_value: Money::from_major(106_250),
            storage_location: "Grain Storage - Silo 2".to_string(),
            status: HarvestStatus::Sold,
            notes: None,
        },
    ]
}

fn sample_sales() -> Vec<Sale> {
    vec![Sale {
        id: "1".to_string(),
        invoice_number: "INV-2024-001".to_string(),
        date: date(2024, 1, 16),
        customer_id: "c1".to_string(),
        customer_name: "Premium Tea Exporters Ltd".to_string(),
        items: vec![SaleItem {
            harvest_id: "1".to_string(),
            crop_name: "Tea".to_string(),
            quantity: 100.0,
            unit: "kg".to_string(),
            price_per_unit: Money::from_major(350),
            total: Money::from_major(35_000),
        }],
        subtotal: Money::from_major(35_000),
        tax: Money::from_major(3_500),
        discount: Money::zero(),
        total: Money::from_major(38_500),
        payment_status: PaymentStatus::Paid,
        payment_method: PaymentMethod::BankTransfer,
        due_date: None,
        notes: Some("Export quality tea shipment".to_string()),
    }]
}

fn sample_customers() -> Vec<Customer> {
    vec![Customer {
        id: "c1".to_string(),
        name: "Premium Tea Exporters Ltd".to_string(),
        kind: CustomerType::Company,
        contact: Contact {
            phone: "+94 11 234 5678".to_string(),
            email: Some("orders@premiumtea.lk".to_string()),
            whatsapp: None,
        },
        address: sri_lanka("123 Export Plaza", "Colombo", "Western", "00100"),
        credit_limit: Money::from_major(500_000),
        outstanding_balance: Money::zero(),
        payment_terms: 30,
        status: CustomerStatus::Active,
    }]
}

fn sample_listings() -> Vec<MarketListing> {
    vec![MarketListing {
        id: "1".to_string(),
        farmer_id: "1".to_string(),
        harvest_id: "1".to_string(),
        crop_name: "Premium Ceylon Tea".to_string(),
        quantity: 25.5,
        unit: "kg".to_string(),
        price_per_unit: Money::from_major(350),
        min_order_quantity: 5.0,
        quality: ListingQuality::Excellent,
        harvest_date: date(2024, 1, 15),
        available_from: date(2024, 1, 20),
        description: "Premium Ceylon black tea with exceptional flavor and aroma. \
                      Organically grown in the hills of Kandy."
            .to_string(),
        images: Vec::new(),
        location: "Kandy, Central Province".to_string(),
        status: ListingStatus::Active,
        created_at: date(2024, 1, 16),
        views: 25,
        inquiries: 3,
    }]
}

fn sample_sensors() -> Vec<Sensor> {
    vec![
        Sensor {
            id: "1".to_string(),
            name: "Tea Field Temperature Sensor".to_string(),
            kind: SensorType::Temperature,
            location: "Tea Estate Block A".to_string(),
            farmer_id: "1".to_string(),
            field_name: "Upper Field".to_string(),
            status: SensorStatus::Active,
            battery_level: Some(85),
            last_reading: at(2024, 1, 16, 10, 30),
            installed_date: date(2023, 6, 15),
        },
        Sensor {
            id: "2".to_string(),
            name: "Soil Moisture Monitor".to_string(),
            kind: SensorType::SoilMoisture,
            location: "Rice Field Section 2".to_string(),
            farmer_id: "2".to_string(),
            field_name: "Main Field".to_string(),
            status: SensorStatus::Active,
            battery_level: Some(92),
            last_reading: at(2024, 1, 16, 10, 25),
            installed_date: date(2023, 8, 20),
        },
    ]
}

fn sample_alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: "1".to_string(),
            kind: AlertType::Weather,
            severity: AlertSeverity::Medium,
            title: "Heavy Rainfall Warning".to_string(),
            message: "Heavy rainfall expected in next 48 hours. Secure harvested crops \
                      and check drainage systems."
                .to_string(),
            created_at: at(2024, 1, 16, 8, 0),
            read_at: None,
            dismissed_at: None,
            action_required: true,
            action_url: Some("/weather-alerts".to_string()),
        },
        Alert {
            id: "2".to_string(),
            kind: AlertType::Inventory,
            severity: AlertSeverity::High,
            title: "Low Fertilizer Stock".to_string(),
            message: "Organic fertilizer stock is below minimum threshold (23% remaining). \
                      Reorder required."
                .to_string(),
            created_at: at(2024, 1, 16, 6, 30),
            read_at: None,
            dismissed_at: None,
            action_required: true,
            action_url: Some("/inventory".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use agri_core::validation::Validate;

    #[test]
    fn test_sample_sizes() {
        let seed = SeedData::sample();
        assert_eq!(seed.farmers.len(), 3);
        assert_eq!(seed.crops.len(), 5);
        assert_eq!(seed.inventory.len(), 3);
        assert_eq!(seed.harvests.len(), 2);
        assert_eq!(seed.sales.len(), 1);
        assert_eq!(seed.customers.len(), 1);
        assert_eq!(seed.listings.len(), 1);
        assert_eq!(seed.sensors.len(), 2);
        assert_eq!(seed.alerts.len(), 2);
    }

    #[test]
    fn test_sample_records_pass_validation() {
        let seed = SeedData::sample();
        for farmer in &seed.farmers {
            farmer.validate().unwrap();
        }
        for item in &seed.inventory {
            item.validate().unwrap();
        }
        for harvest in &seed.harvests {
            harvest.validate().unwrap();
        }
    }

    #[test]
    fn test_sample_harvest_totals_match_price_times_quantity() {
        for harvest in SeedData::sample().harvests {
            assert_eq!(harvest.total_value, harvest.computed_total());
        }
    }

    #[test]
    fn test_sample_dates_are_real() {
        let seed = SeedData::sample();
        assert_eq!(seed.farmers[0].join_date, date(2022, 3, 15));
        assert_ne!(seed.alerts[0].created_at, DateTime::<Utc>::MIN_UTC);
    }

    #[test]
    fn test_default_is_empty() {
        let seed = SeedData::default();
        assert!(seed.farmers.is_empty());
        assert!(seed.alerts.is_empty());
    }
}
