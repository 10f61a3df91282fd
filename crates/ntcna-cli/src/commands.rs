use std::path::Path;

use anyhow::{Context, Result, bail};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use ntcna_cli::filter_args::{FilterArg, parse_category_arg, parse_range_arg};
use ntcna_cli::summary::{
    chart_table, code_table, filter_table, map_table, rows_table, wide_chart_table, years_table,
};
use ntcna_common::{CENTROID_X_COLUMN, CENTROID_Y_COLUMN};
use ntcna_ingest::{IngestOptions, load_config, read_csv_frame, read_geojson_frame};
use ntcna_model::{CodeTable, DashboardConfig, FilterDecl};
use ntcna_transform::{Dashboard, FilterEngine};

use crate::cli::{ChartArgs, Cli, FilterArgs, MapArgs, SelectionArgs};

/// Reads `--config` when given and applies `--data-dir` on top.
pub fn resolve_config(cli: &Cli) -> Result<DashboardConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(dir) = &cli.data_dir {
        config = config.with_data_dir(dir);
    }
    Ok(config)
}

pub fn run_places() -> Result<()> {
    println!("{}", code_table(&CodeTable::places()));
    Ok(())
}

pub fn run_demographics() -> Result<()> {
    println!("{}", code_table(&CodeTable::demographics()));
    Ok(())
}

pub fn run_years(config: DashboardConfig) -> Result<()> {
    let dashboard = load_dashboard(config)?;
    let years = dashboard.available_years().context("collect census years")?;
    println!("{}", years_table(&years));
    Ok(())
}

pub fn run_chart(config: DashboardConfig, args: &ChartArgs) -> Result<()> {
    let mut dashboard = load_dashboard(config)?;
    apply_selection(&mut dashboard, &args.selection)?;
    if let Some(demographic) = &args.demographic {
        dashboard
            .set_demographic(demographic)
            .with_context(|| format!("select demographic '{demographic}'"))?;
    }
    for kind in args.kind.kinds() {
        let frame = dashboard
            .chart(kind)
            .with_context(|| format!("build chart '{kind}'"))?;
        println!("{}", frame.title);
        let table = if args.wide {
            wide_chart_table(&frame)
        } else {
            chart_table(&frame)
        };
        println!("{table}");
    }
    Ok(())
}

pub fn run_map(config: DashboardConfig, args: &MapArgs) -> Result<()> {
    let zoom = args.zoom.unwrap_or(config.default_zoom);
    let mut dashboard = load_dashboard(config)?;
    apply_selection(&mut dashboard, &args.selection)?;
    let focus = dashboard.map_focus(zoom).context("locate map focus")?;
    println!("{}", map_table(&focus));
    Ok(())
}

pub fn run_filter(config: &DashboardConfig, args: &FilterArgs) -> Result<()> {
    let span = info_span!("filter", path = %args.file.display());
    let _guard = span.enter();

    let source = read_table(&args.file, config)?;
    let mut parsed: Vec<FilterArg> = Vec::new();
    for spec in &args.ranges {
        parsed.push(parse_range_arg(spec)?);
    }
    for spec in &args.categories {
        parsed.push(parse_category_arg(spec)?);
    }

    let mut engine = if parsed.is_empty() {
        let mut exclude = config.identity_columns().to_vec();
        exclude.extend([CENTROID_X_COLUMN, CENTROID_Y_COLUMN]);
        FilterEngine::from_columns(source, &exclude)?
    } else {
        let decls: Vec<FilterDecl> = parsed.iter().map(|arg| arg.decl.clone()).collect();
        FilterEngine::new(source, decls)?
    };
    for arg in parsed {
        if let Some(value) = arg.value {
            engine
                .set_filter(&arg.decl.column, value)
                .with_context(|| format!("set filter on '{}'", arg.decl.column))?;
        }
    }
    info!(
        source_rows = engine.source().height(),
        filtered_rows = engine.filtered().height(),
        "filtering complete"
    );

    println!("{}", filter_table(engine.filters()));
    println!(
        "Rows: {} of {}",
        engine.filtered().height(),
        engine.source().height()
    );
    println!("{}", rows_table(engine.filtered(), args.limit));
    Ok(())
}

fn load_dashboard(config: DashboardConfig) -> Result<Dashboard> {
    let options = IngestOptions::for_config(&config);
    let census = read_geojson_frame(&config.census_path(), &options)
        .context("load census table")?;
    let chas = read_geojson_frame(&config.chas_path(), &options).context("load CHAS table")?;
    info!(
        census_rows = census.height(),
        chas_rows = chas.height(),
        "loaded source tables"
    );
    Ok(Dashboard::new(census, chas, config))
}

fn apply_selection(dashboard: &mut Dashboard, args: &SelectionArgs) -> Result<()> {
    if let Some(place) = &args.place {
        dashboard
            .set_place(place)
            .with_context(|| format!("select place '{place}'"))?;
    }
    if let Some(year) = args.year {
        dashboard
            .set_year(year)
            .with_context(|| format!("select year {year}"))?;
    }
    let year = dashboard.selection().year;
    let years = dashboard.available_years().context("collect census years")?;
    if !years.contains(&year) {
        bail!("no census records for {year}");
    }
    Ok(())
}

/// GeoJSON for `.geojson`/`.json` files, CSV otherwise.
fn read_table(path: &Path, config: &DashboardConfig) -> Result<DataFrame> {
    let options = IngestOptions::for_config(config);
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("geojson" | "json") => read_geojson_frame(path, &options),
        _ => read_csv_frame(path, &options),
    }
}
