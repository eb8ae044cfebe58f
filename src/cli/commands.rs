use std::path::{Path, PathBuf};

use rand::Rng;
use serde_json::Value;

use crate::cli::config::ProfileCommand;
use crate::config::profile::FlashFillConfig;
use crate::config::storage::{FileStore, load_config, save_config};
use crate::field::collector::collect;
use crate::fill::console::format_console_report;
use crate::fill::filler::FormFiller;
use crate::fill::report::FillRoute;
use crate::page::snapshot::SnapshotPage;
use crate::resolve::resolver::ValueResolver;
use crate::trace::logger::TraceLogger;

// ============================================================================
// fill subcommand
// ============================================================================

/// Options of one `fill` invocation, already merged with the YAML config.
#[derive(Debug, Clone, Default)]
pub struct FillOptions {
    pub output: Option<String>,
    pub seed: Option<u64>,
    pub profile: Option<String>,
    pub trace: Option<String>,
    pub format: String,
}

/// Fill a snapshot, write the filled copy and return the rendered report.
pub fn cmd_fill(
    page_path: &str,
    options: &FillOptions,
    store_dir: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut config = load_config(&FileStore::new(store_dir));
    if let Some(name) = &options.profile {
        config.select_profile(name)?;
    }

    if !config.enabled {
        return Ok("Flash Fill is disabled; run `flash-fill profile enable` to turn it on.\n".into());
    }

    let mut page = SnapshotPage::load(page_path)?;
    let tracer = match &options.trace {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    let report = match options.seed {
        Some(seed) => run_fill(FormFiller::seeded(seed), tracer, &mut page, &config),
        None => run_fill(FormFiller::from_entropy(), tracer, &mut page, &config),
    };

    let output_path = options
        .output
        .clone()
        .map(PathBuf::from)
        .unwrap_or_else(|| filled_path(page_path));
    page.save(&output_path)?;
    tracing::info!(path = %output_path.display(), "wrote filled snapshot");

    let rendered = match options.format.as_str() {
        "json" => serde_json::to_string_pretty(&report)? + "\n",
        _ => format_console_report(&report),
    };
    Ok(rendered)
}

fn run_fill<R: Rng>(
    filler: FormFiller<R>,
    tracer: TraceLogger,
    page: &mut SnapshotPage,
    config: &FlashFillConfig,
) -> crate::fill::report::FillReport {
    let mut filler = filler.with_tracer(tracer);
    let overrides = config.overrides();
    filler.fill(page, Some(&overrides))
}

/// `form.json` -> `form.filled.json`, next to the input.
pub fn filled_path(page_path: &str) -> PathBuf {
    let path = Path::new(page_path);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "page".to_string());
    path.with_file_name(format!("{}.filled.json", stem))
}

// ============================================================================
// scan subcommand
// ============================================================================

pub fn cmd_scan(page_path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let page = SnapshotPage::load(page_path)?;
    let fields = collect(&page);

    let mut out = format!("Detected {} fields:\n", fields.len());
    for field in &fields {
        let current = page.value_of(field.control).unwrap_or("");
        out.push_str(&format!(
            "  [{}] {:<24} {:<14} {:<8} {:?}\n",
            field.control.index(),
            field.key,
            field.input_type,
            field.tag.as_str(),
            current
        ));
    }
    Ok(out)
}

// ============================================================================
// resolve subcommand
// ============================================================================

/// Classify and resolve a single key against the active profile.
pub fn cmd_resolve(
    key: &str,
    input_type: &str,
    tag: &str,
    seed: Option<u64>,
    store_dir: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let config = load_config(&FileStore::new(store_dir));
    let overrides = config.overrides();

    let (classification, value) = match seed {
        Some(seed) => {
            let mut resolver = ValueResolver::seeded(seed);
            let c = resolver.classify(key, input_type, tag, Some(&overrides));
            (c, resolver.resolve(key, input_type, tag, Some(&overrides)))
        }
        None => {
            let mut resolver = ValueResolver::from_entropy();
            let c = resolver.classify(key, input_type, tag, Some(&overrides));
            (c, resolver.resolve(key, input_type, tag, Some(&overrides)))
        }
    };

    let category = classification
        .category()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "-".to_string());

    Ok(format!(
        "route:    {}\ncategory: {}\nvalue:    {}\n",
        FillRoute::from(classification.route()),
        category,
        value
    ))
}

// ============================================================================
// profile subcommand
// ============================================================================

pub fn cmd_profile(action: &ProfileCommand, store_dir: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut store = FileStore::new(store_dir);
    let mut config = load_config(&store);

    let out = match action {
        ProfileCommand::List => {
            let active = config.active_profile().map(|p| p.name.clone());
            let mut out = format!(
                "Profiles ({}):\n",
                if config.enabled { "enabled" } else { "disabled" }
            );
            for profile in &config.profiles {
                let marker = if Some(&profile.name) == active.as_ref() { "*" } else { " " };
                out.push_str(&format!("{} {} ({} values)\n", marker, profile.name, profile.data.len()));
            }
            return Ok(out);
        }
        ProfileCommand::Show { name } => {
            let profile = match name {
                Some(name) => config
                    .profile(name)
                    .ok_or_else(|| format!("no profile named '{}'", name))?,
                None => config.active_profile().ok_or("no profiles configured")?,
            };
            return Ok(serde_json::to_string_pretty(&Value::Object(profile.data.clone()))? + "\n");
        }
        ProfileCommand::Add { name } => {
            config.add_profile(name)?;
            format!("Added profile '{}'\n", name)
        }
        ProfileCommand::Remove { name } => {
            config.remove_profile(name)?;
            format!("Removed profile '{}'\n", name)
        }
        ProfileCommand::Use { name } => {
            config.select_profile(name)?;
            format!("Active profile: '{}'\n", name)
        }
        ProfileCommand::Set { name, key, value } => {
            config.set_profile_value(name, key, Value::String(value.clone()))?;
            format!("Set {} = {:?} on '{}'\n", key, value, name)
        }
        ProfileCommand::Enable => {
            config.set_enabled(true);
            "Flash Fill enabled\n".to_string()
        }
        ProfileCommand::Disable => {
            config.set_enabled(false);
            "Flash Fill disabled\n".to_string()
        }
    };

    save_config(&mut store, &config)?;
    Ok(out)
}
