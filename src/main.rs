use clap::Parser;
use ledgers_common::{content, seo, Filter, Navigation, UiCoordinator};
use ledgers_portfolio::{assets, cli, config, error, loader, script, session};
use cli::{Cli, Commands};
use config::Config;
use error::{PortfolioError, Result};
use std::io::Write;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = Config::load()?;
    let catalog_path = cli.catalog.clone().or_else(|| config.catalog.clone());

    match cli.command {
        Commands::Check { assets } => {
            println!("🔍 ledgers-portfolio - 検証\n");

            println!("[1/2] カタログを検証中...");
            let catalog = loader::load_catalog(catalog_path.as_deref())?;
            let navigation = Navigation::site();
            println!("✔ {}件の案件 / {}件のナビゲーション\n", catalog.len(), navigation.targets().len());

            if let Some(root) = assets {
                println!("[2/2] 画像を確認中...");
                let report = assets::check_assets(&catalog, &root)?;
                println!("✔ {}件を確認", report.checked);
                for path in &report.invalid {
                    println!("  ✖ 不正なパス: {}", path);
                }
                for path in &report.missing {
                    println!("  ✖ 見つかりません: {}", path);
                }
                for path in &report.unused {
                    println!("  - 未使用: {}", path);
                }
                if !report.is_ok() {
                    return Err(PortfolioError::MissingAssets(
                        report.missing.len() + report.invalid.len(),
                    ));
                }
            } else {
                println!("[2/2] 画像の確認をスキップ（--assets 未指定）");
            }

            println!("\n✅ 検証完了");
        }

        Commands::Projects { filter, json } => {
            let catalog = loader::load_catalog(catalog_path.as_deref())?;
            let filter: Filter = filter.parse()?;
            let visible = ledgers_common::visible_projects(&catalog, filter);

            if json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                println!("{} ({}件)", filter, visible.len());
                for project in visible {
                    println!(
                        "  #{} {} [{}] 画像{}枚",
                        project.id,
                        project.title,
                        project.category,
                        project.image_count()
                    );
                }
            }
        }

        Commands::Nav => {
            for target in Navigation::site().targets() {
                println!("  {:<14} {}", target.href(), target.label);
            }
        }

        Commands::Seo { site_url } => {
            let site_url = site_url.unwrap_or_else(|| config.site_url.clone());
            let meta = seo::PageMeta::site();
            let base_path = config.base_path();

            println!("<title>{}</title>", meta.title);
            for (attr, key, value) in meta.tags() {
                let value = if key.ends_with(":image") {
                    content::asset_url(&base_path, &value)
                } else {
                    value
                };
                println!("<meta {}=\"{}\" content=\"{}\" />", attr, key, value);
            }
            let json_ld = seo::local_business_json_ld(&content::PROFILE, &site_url);
            println!("{}", serde_json::to_string_pretty(&json_ld)?);
        }

        Commands::Simulate { script, interval_ms, output } => {
            let catalog = loader::load_catalog(catalog_path.as_deref())?;
            let script = script::SessionScript::load(&script)?;

            let mut ui_config = config.ui;
            if let Some(ms) = interval_ms {
                ui_config.auto_advance_ms = ms;
            }
            log::info!(
                "simulate: {} steps, end {}ms, auto-advance {}ms",
                script.steps.len(),
                script.end_ms(),
                ui_config.auto_advance_ms
            );

            let mut ui = UiCoordinator::new(catalog, Navigation::site(), ui_config);
            let records = session::run_session(&mut ui, script).await;

            match output {
                Some(path) => {
                    std::fs::write(&path, serde_json::to_string_pretty(&records)?)?;
                    println!("✔ {}件のスナップショットを保存: {}", records.len(), path.display());
                }
                None => {
                    let stdout = std::io::stdout();
                    let mut out = stdout.lock();
                    for record in &records {
                        writeln!(out, "{}", serde_json::to_string(record)?)?;
                    }
                }
            }
        }

        Commands::Config { set_interval_ms, set_base_path, show } => {
            let mut config = config;

            if set_interval_ms.is_some() || set_base_path.is_some() {
                if let Some(ms) = set_interval_ms {
                    config.set_interval_ms(ms);
                }
                if let Some(path) = set_base_path {
                    config.base_path = path;
                }
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show {
                println!("設定:");
                println!("  ベースパス: {}", config.base_path());
                println!("  サイトURL: {}", config.site_url);
                println!(
                    "  カタログ: {}",
                    config
                        .catalog
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "組み込み".into())
                );
                println!("  自動送り間隔: {}ms", config.ui.auto_advance_ms);
                println!("  お客様の声の送り間隔: {}ms", config.ui.testimonial_autoplay_ms);
                println!("  アクティブ帯: {}", config.ui.active_band.root_margin());
            }
        }
    }

    Ok(())
}
