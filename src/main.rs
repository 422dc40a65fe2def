use emotions_report::{missing_gdp_entries, write_report, Datasets, Paths, Result};

fn main() -> Result<()> {
    env_logger::init();

    let paths = Paths::default();
    let data = Datasets::load(&paths)?;

    // Coverage check against the GDP lookup alone.
    let without_gdp = missing_gdp_entries(&data);
    if without_gdp.is_empty() {
        println!("All surveyed countries have corresponding GDP data.");
    } else {
        println!("Countries in survey data without corresponding GDP data:");
        for country in &without_gdp {
            println!("- {}", country);
        }
    }

    let missing = write_report(&data, &paths.report)?;
    println!("CSV file '{}' has been created.", paths.report.display());

    if missing.is_empty() {
        println!("All surveyed countries have corresponding GDP and Population data.");
    } else {
        println!("Countries in survey data without corresponding GDP or Population data:");
        for country in &missing {
            println!("- {}", country);
        }
    }

    Ok(())
}
