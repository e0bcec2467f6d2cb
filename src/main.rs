use clap::Parser;
use content_pipeline::app::output;
use content_pipeline::core::debounce::debounce_channel;
use content_pipeline::core::{FilterGroup, FixtureSource, Section};
use content_pipeline::utils::error::ErrorSeverity;
use content_pipeline::utils::validation::{validate_positive_number, Validate};
use content_pipeline::utils::logger;
use content_pipeline::{
    BrowseState, BuiltinFixtures, CatalogBrowser, CatalogConfig, CatalogError, CliConfig,
    FileFixtureSource, Filters, LogFormat, OutputFormat, SectionPage, SortKey,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("Starting content-pipeline");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ content-pipeline failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(cli: CliConfig) -> content_pipeline::Result<()> {
    // 載入並驗證配置
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            CatalogConfig::from_file(path)?
        }
        None => CatalogConfig::default(),
    };
    cli.apply_to(&mut config);
    config.validate()?;

    let section: Section = cli.section.parse()?;

    let catalog = match config.fixtures_path() {
        Some(path) => FileFixtureSource::new(path).load().await?,
        None => BuiltinFixtures.load().await?,
    };
    let browser = CatalogBrowser::new(catalog, config);

    if let Some(group_name) = &cli.facets {
        let group = FilterGroup::parse(group_name).ok_or_else(|| {
            CatalogError::InvalidConfigValueError {
                field: "facets".to_string(),
                value: group_name.clone(),
                reason: "Unknown filter group".to_string(),
            }
        })?;
        let counts = browser.facets(section, group);
        let stdout = std::io::stdout();
        return output::write_facets(&mut stdout.lock(), group.as_str(), &counts);
    }

    let mut state = browser.initial_state(section);
    if let Some(page_size) = cli.page_size {
        validate_positive_number("page_size", page_size, 1)?;
        state = BrowseState::new(page_size, state.query().sort);
    }
    if let Some(sort) = &cli.sort {
        state.set_sort(SortKey::parse(sort));
    }
    for pair in &cli.filters {
        match Filters::parse_pair(pair) {
            Some((group, value)) => state.select_filter(&group, &value),
            None => tracing::warn!("Ignoring malformed filter '{}', expected group=value", pair),
        }
    }
    state.set_query(cli.query.clone());
    state.set_page(cli.page);

    if cli.interactive {
        return run_interactive(&browser, section, state, cli.format).await;
    }

    let page = browser.browse(section, state.query())?;
    print_page(&page, cli.format)
}

/// 每行 stdin 視為一次搜尋輸入，經 debounce 後才重新計算
async fn run_interactive(
    browser: &CatalogBrowser,
    section: Section,
    mut state: BrowseState,
    format: OutputFormat,
) -> content_pipeline::Result<()> {
    use tokio::io::{AsyncBufReadExt, BufReader};

    let (tx, rx) = tokio::sync::mpsc::channel(32);
    let mut queries = debounce_channel(rx, browser.config().debounce());

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if tx.send(line).await.is_err() {
                break;
            }
        }
    });

    tracing::info!("🔍 Interactive search on {}, type to filter", section);
    print_page(&browser.browse(section, state.query())?, format)?;

    while let Some(query) = queries.recv().await {
        state.set_query(query);
        print_page(&browser.browse(section, state.query())?, format)?;
    }

    Ok(())
}

fn print_page(page: &SectionPage, format: OutputFormat) -> content_pipeline::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Table => output::write_table(&mut out, page),
        OutputFormat::Json => output::write_json(&mut out, page),
        OutputFormat::Csv => output::write_csv(out, page),
    }
}
