use clap::Parser;
use serde_json::json;
use stat_quest::app::endpoints::{ReturnType, ENDPOINTS};
use stat_quest::config::cli;
use stat_quest::core::{ConfigProvider, ManifestSource};
use stat_quest::utils::error::ErrorSeverity;
use stat_quest::utils::{logger, region, validation::Validate};
use stat_quest::{
    CliConfig, HttpSource, ManifestRegistry, QuestClient, QuestEngine, TomlConfig, Value,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliConfig::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting stat-quest CLI");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    if let Err(e) = run(args).await {
        tracing::error!("❌ stat-quest failed: {} (Severity: {:?})", e, e.severity());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(args: CliConfig) -> stat_quest::Result<()> {
    args.validate()?;

    // 載入 TOML 配置（可選）並套用命令列覆蓋
    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };
    // 本地 payload 的 region 只是標記，不必是已知平台
    let region_override = args.endpoint.as_ref().and(args.region.clone());
    config.apply_overrides(args.api_key.clone(), args.base_url.clone(), region_override);
    config.validate()?;

    let mut registry = ManifestRegistry::with_catalog();
    config.register_manifests(&mut registry);
    tracing::debug!("📋 {} manifests registered", registry.len());

    if args.list_types {
        print_catalog(&registry);
        return Ok(());
    }

    let region_name = args
        .region
        .clone()
        .unwrap_or_else(|| config.default_region().to_string());
    let engine = QuestEngine::new(registry);

    let value = if let Some(endpoint) = &args.endpoint {
        let params = cli::parse_params(&args.params)?;
        let source = HttpSource::from_config(&config)?;
        let client = QuestClient::new(source, engine);
        client.call(endpoint, &params, &region_name).await?
    } else {
        let input = args.input.as_deref().unwrap_or("-");
        let type_name = args.type_name.as_deref().unwrap_or_default();
        let raw = cli::read_input(input)?;
        // 認得的別名才正規化
        let tag = region::normalize(&region_name).unwrap_or(region_name.as_str());
        engine.load(type_name, &raw, tag)?
    };

    print_value(&value, args.pretty)?;
    tracing::info!("✅ Materialization completed successfully!");
    Ok(())
}

fn print_value(value: &Value, pretty: bool) -> stat_quest::Result<()> {
    let (type_name, region) = match value {
        Value::Object(object) => (Some(object.type_name()), Some(object.region())),
        Value::List(list) => (list.type_name(), Some(list.region())),
        _ => (None, None),
    };
    let output = json!({
        "type": type_name,
        "region": region,
        "data": value.to_json(),
    });

    let text = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", text);
    Ok(())
}

fn print_catalog(registry: &ManifestRegistry) {
    println!("Types:");
    for name in registry.type_names() {
        println!("  - {}", name);
    }

    println!("Endpoints:");
    for endpoint in ENDPOINTS {
        let returns = match endpoint.returns {
            ReturnType::Typed(type_name) => type_name.to_string(),
            ReturnType::Declared(type_name) if registry.contains(type_name) => type_name.to_string(),
            ReturnType::Declared(type_name) => format!("{} (undeclared, plain)", type_name),
            ReturnType::Plain => "(plain)".to_string(),
        };
        println!("  - {:<20} {} -> {}", endpoint.name(), endpoint.path, returns);
    }
}
