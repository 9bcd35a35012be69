// ============================================================================
// Basic Usage Example
// ============================================================================

use battery_roi::prelude::*;
use std::sync::Arc;

fn amount(s: &str) -> Amount {
    s.parse().unwrap()
}

fn main() {
    #[cfg(feature = "logging")]
    if let Err(err) = battery_roi::logging::init_tracing(tracing::Level::DEBUG) {
        eprintln!("{}", err);
    }

    println!("=== Battery ROI Example ===\n");

    let battery = BatterySpec::new(
        amount("15"),
        amount("95"),
        amount("97"),
        amount("5"),
        amount("5"),
        amount("40000"),
    )
    .with_warranty(WarrantyTerms::new(amount("10"), amount("6000")));

    let quarter = PriceQuarterInfo::new(PriceZone::Se4, 2024, Quarter::Q1, amount("118"), amount("62"));

    let inputs = CalculationInputs::new(battery, amount("1.5"), amount("85"))
        .with_quarter_prices(&quarter)
        .with_tariff(TariffInfo::new(amount("60"), amount("0"), 6, 22))
        .with_peak_shaving(amount("10"), amount("80"))
        .with_zone_campaign(PriceZone::Se4, true)
        .with_grid_services_rate(amount("500"))
        .with_pricing(amount("100000"), amount("20000"))
        .with_subsidy_rate(amount("0.5"))
        .with_installer_cut(amount("15000"));

    for (name, config) in [
        ("Sales (fixed spread)", EngineConfig::sales_transparent()),
        ("Observed market", EngineConfig::observed_market()),
    ] {
        let engine = match create_from_config(config, Arc::new(LoggingEventHandler)) {
            Ok(engine) => engine,
            Err(err) => {
                eprintln!("Invalid configuration: {}", err);
                return;
            },
        };

        let outcome = match engine.calculate(&inputs) {
            Ok(outcome) => outcome,
            Err(err) => {
                eprintln!("Calculation failed: {}", err);
                return;
            },
        };

        let results = &outcome.results;
        println!("--- {} ---", name);
        println!("Spot price savings:    {:>10.2} kr", results.spot_price_savings);
        println!("Effect tariff savings: {:>10.2} kr", results.effect_tariff_savings);
        println!("Grid services (yr 1):  {:>10.2} kr", results.grid_services_income);
        println!("Total annual savings:  {:>10.2} kr", results.total_annual_savings);
        println!("Cost after subsidy:    {:>10.2} kr", results.cost_after_subsidy);
        println!("Payback:               {:>10.1} years", results.payback_years);
        println!("ROI 10 years:          {:>10.1} %", results.roi_10_years);
        println!("ROI 15 years:          {:>10.1} %", results.roi_15_years);
        if let Some(margin) = results.margin {
            println!("Margin:                {:>10.2} kr", margin);
        }
        for message in &results.messages {
            println!("Note: {}", message);
        }
        println!();
    }
}
