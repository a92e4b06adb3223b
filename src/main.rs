use anyhow::{Context, Result};
use dish_calc::api_connection::IngredientSource;
use dish_calc::cli::{parse_args, Command, ItemSpec};
use dish_calc::config::CalculatorConfig;
use dish_calc::new_ingredient::NewIngredientForm;
use dish_calc::report::{render_catalog, render_dish};
use dish_calc::session::RecipeSession;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn build_dish(session: &mut RecipeSession, items: &[ItemSpec]) {
    for item in items {
        match session.select_by_name(&item.name) {
            Some(index) => {
                session.set_grams(index, item.grams);
            }
            None => warn!("No ingredient matching '{}' in the catalog, skipping", item.name),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dish_calc=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli_args = parse_args();
    let config = cli_args.source.apply_to(CalculatorConfig::from_env());
    let source = IngredientSource::from_config(&config)
        .context("Failed to build HTTP client for the ingredient sheet")?;

    match cli_args.command {
        Command::List { search } => {
            let mut session = RecipeSession::new();
            let ticket = session.begin_catalog_refresh();
            let catalog = source.fetch_all().await;
            session.apply_catalog_refresh(ticket, catalog);

            let hits = session.search(search.as_deref().unwrap_or(""));
            print!("{}", render_catalog(&hits));
        }
        Command::Calc { name, items, json } => {
            let mut session = RecipeSession::with_catalog(source.fetch_all().await);
            if let Some(name) = name {
                session.set_recipe_name(name);
            }
            build_dish(&mut session, &items);

            let totals = session.totals();
            if json {
                let out = serde_json::to_string_pretty(&totals)
                    .context("Failed to serialize dish totals")?;
                println!("{}", out);
            } else {
                print!("{}", render_dish(session.display_name(), session.selected(), &totals));
            }
        }
        Command::Add { name, calories, proteins, fats, carbs } => {
            let form = NewIngredientForm { name, calories, proteins, fats, carbs };
            source
                .add(&form)
                .await
                .with_context(|| format!("Could not add ingredient '{}'", form.name.trim()))?;

            let refreshed = source.fetch_all().await;
            println!(
                "Added '{}'. Catalog now has {} ingredients.",
                form.name.trim(),
                refreshed.len()
            );
        }
    }

    Ok(())
}
