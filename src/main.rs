use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::Duration;

use storefront::domain::model::OrderStatus;
use storefront::domain::ports::CatalogProvider;
use storefront::utils::{logger, validation::Validate};
use storefront::{
    CartStore, CliConfig, Command, CustomerSession, CustomerShell, FileCatalog, MenuScreen,
    OrderDashboard, SampleData, StorefrontConfig, StorefrontError, VendorListPage,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match cli.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, None);
            fail(&e);
        }
    };

    if settings.json_logging() {
        logger::init_json_logger(cli.verbose, Some(&settings.logging.level));
    } else {
        logger::init_cli_logger(cli.verbose, Some(&settings.logging.level));
    }

    tracing::info!(storefront = %settings.storefront.name, "Starting storefront CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = settings.validate() {
        fail(&e);
    }

    if let Err(e) = run(&cli.command, &settings).await {
        fail(&e);
    }

    io::stdout().flush().context("failed to flush stdout")?;
    Ok(())
}

fn fail(e: &StorefrontError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

fn load_catalog(settings: &StorefrontConfig) -> storefront::Result<Rc<dyn CatalogProvider>> {
    match &settings.catalog.path {
        Some(path) => Ok(Rc::new(FileCatalog::from_file(path)?)),
        None => {
            tracing::debug!("No catalog file configured, using sample data");
            Ok(Rc::new(SampleData::new()))
        }
    }
}

async fn run(command: &Command, settings: &StorefrontConfig) -> storefront::Result<()> {
    let brand = settings.storefront.name.as_str();

    match command {
        Command::Vendors => {
            let page = VendorListPage::mount(load_catalog(settings)?, &CartStore::new(), brand);
            println!("{}", page.render());
        }
        Command::Menu { vendor } => {
            let catalog = load_catalog(settings)?;
            let screen = MenuScreen::open(catalog.as_ref(), &CartStore::new(), Some(vendor.as_str()), brand);
            println!("{}", screen.render());
        }
        Command::Shop => {
            let session = CustomerSession::begin(load_catalog(settings)?, brand);
            CustomerShell::start(session)?.run(io::stdin().lock(), io::stdout().lock())?;
        }
        Command::Dashboard {
            watch_secs,
            status_changes,
        } => {
            let mut page = OrderDashboard::mount(Rc::new(SampleData::new()), &settings.timers, brand)?;

            for (order_id, raw_status) in status_changes {
                let status: OrderStatus = raw_status.parse()?;
                if !page.set_status(order_id, status) {
                    tracing::warn!(order_id = %order_id, "No such order, status left unchanged");
                }
            }
            println!("{}", page.render());

            let watch = Duration::from_secs(*watch_secs);
            let watched = tokio::time::timeout(watch, async {
                while page.process_next_event().await? {
                    println!("{}", page.render());
                }
                Ok::<_, StorefrontError>(())
            })
            .await;

            match watched {
                Ok(result) => result?,
                Err(_) => tracing::info!(watch_secs, "Watch window closed"),
            }
        }
    }

    Ok(())
}
