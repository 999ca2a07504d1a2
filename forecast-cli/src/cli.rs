use anyhow::Result;
use clap::Parser;

use forecast_core::config::Config;
use forecast_core::model::{CityMatch, CitySelector, Forecast};
use forecast_core::provider::OpenWeatherProvider;
use forecast_core::render::{cmdline_report, write_widget_report};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "forecast",
    version,
    about = "Fetch weather information and prepare it for consumption"
)]
pub struct Args {
    /// Name of the city to display the forecast for.
    #[arg(short, long)]
    pub city: Option<String>,

    /// OWM id of the city to display the forecast for.
    #[arg(short = 'i', long = "city-id", conflicts_with = "city")]
    pub city_id: Option<u64>,

    /// Write per-day files under /tmp for consumption by awesome widgets.
    #[arg(short, long)]
    pub awesome: bool,

    /// Number of days in the forecast, 0 for all available.
    #[arg(short = 'd', long = "num-days", default_value_t = 3)]
    pub num_days: usize,

    /// Query city names and display information about matches. Does not
    /// display weather data.
    #[arg(short, long)]
    pub query: Option<String>,
}

impl Args {
    pub fn run(self) -> Result<()> {
        let config = Config::load()?;
        let provider = OpenWeatherProvider::new(config.api_key.clone());

        if let Some(query) = &self.query {
            return run_city_search(&provider, query);
        }

        let city = self.city_selector(&config);
        let forecast = provider.fetch_forecast(&city, true)?;

        if forecast.days.is_empty() {
            println!("No forecast data found.");
            return Ok(());
        }

        if !self.awesome {
            print_city_header(&forecast);
        }

        for (index, day) in forecast.days.iter().enumerate() {
            if self.num_days != 0 && index >= self.num_days {
                break;
            }

            if self.awesome {
                if let Err(err) = write_widget_report(day, index) {
                    eprintln!("skipping day {index}: {err}");
                }
            } else {
                match cmdline_report(day) {
                    Ok(line) => println!("{line}"),
                    Err(err) => eprintln!("skipping day {index}: {err}"),
                }
            }
        }

        Ok(())
    }

    fn city_selector(&self, config: &Config) -> CitySelector {
        match (self.city_id, &self.city) {
            (Some(id), _) => CitySelector::Id(id),
            (None, Some(name)) => CitySelector::Name(name.clone()),
            (None, None) => CitySelector::Name(config.default_city_or_fallback().to_string()),
        }
    }
}

fn print_city_header(forecast: &Forecast) {
    let city = &forecast.city;
    println!(
        "{}, {}; lat {}, lon {}, population {}, OWM ID {}",
        city.name,
        city.country,
        city.latitude,
        city.longitude,
        format_population(city.population),
        city.id
    );
}

fn run_city_search(provider: &OpenWeatherProvider, query: &str) -> Result<()> {
    let matches = provider.find_cities(query)?;

    if matches.is_empty() {
        println!("No cities matched '{query}'.");
        return Ok(());
    }

    for city in matches {
        println!("{}", format_city_match(&city));
    }

    Ok(())
}

fn format_city_match(city: &CityMatch) -> String {
    format!(
        "{},{}; OWM-ID {}, population {}, lon {}",
        city.name,
        city.country,
        city.id,
        format_population(city.population),
        city.longitude
    )
}

fn format_population(population: Option<u64>) -> String {
    population.map_or_else(|| "unknown".to_string(), |p| p.to_string())
}
