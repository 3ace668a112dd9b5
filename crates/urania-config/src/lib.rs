use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use urania::aspects::{AspectKind, AspectSettings};
use urania::chart::CuspDefaults;
use urania::western::RulershipSystem;
use urania::zodiac::normalize_sign;
use urania::{AnalysisParams, ChartAnalyzer, HouseTopic};

/// Relative locations tried for `urania.toml`, from the workspace root or a crate dir
pub const CONFIG_PATHS: [&str; 2] = ["configs/urania.toml", "../../configs/urania.toml"];

#[derive(Debug, Clone, PartialEq)]
pub struct UraniaSettings {
    pub params: AnalysisParams,
    pub aspects: AspectSettings,
    pub cusp_defaults: CuspDefaults,
}

impl Default for UraniaSettings {
    fn default() -> Self {
        Self {
            params: AnalysisParams::default(),
            aspects: AspectSettings::default(),
            cusp_defaults: CuspDefaults::natural(),
        }
    }
}

impl UraniaSettings {
    pub fn analyzer(&self) -> ChartAnalyzer {
        ChartAnalyzer::new()
            .with_aspect_settings(self.aspects.clone())
            .with_cusp_defaults(self.cusp_defaults)
    }
}

#[derive(Debug, Clone, Deserialize)]
struct AnalysisToml {
    #[serde(default = "default_system")]
    system: String,
    #[serde(default = "default_fallback")]
    fallback: bool,
    #[serde(default = "default_root_house")]
    root_house: u32,
    #[serde(default = "default_derived_n")]
    derived_n: u32,
    #[serde(default)]
    topic: Option<String>,
    #[serde(default)]
    ascendant: Option<String>,
}

impl Default for AnalysisToml {
    fn default() -> Self {
        Self {
            system: default_system(),
            fallback: default_fallback(),
            root_house: default_root_house(),
            derived_n: default_derived_n(),
            topic: None,
            ascendant: None,
        }
    }
}

fn default_system() -> String {
    "modern".to_string()
}

fn default_fallback() -> bool {
    true
}

fn default_root_house() -> u32 {
    8
}

fn default_derived_n() -> u32 {
    2
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OrbsToml {
    conjunction: Option<f64>,
    sextile: Option<f64>,
    square: Option<f64>,
    trine: Option<f64>,
    opposition: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    analysis: AnalysisToml,
    #[serde(default)]
    orbs: OrbsToml,
}

/// Try the common relative paths for `configs/urania.toml`.
pub fn read_config_toml_text() -> anyhow::Result<String> {
    for p in &CONFIG_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            log::debug!("loaded config from {}", p);
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load urania.toml from {:?}", CONFIG_PATHS);
}

/// Settings from the first config found on `CONFIG_PATHS`, or the built-in
/// defaults when there is none. A config that exists but does not parse is
/// an error.
pub fn load_settings() -> anyhow::Result<UraniaSettings> {
    match read_config_toml_text() {
        Ok(text) => parse_settings(&text),
        Err(e) => {
            log::info!("{e}; using built-in defaults");
            Ok(UraniaSettings::default())
        }
    }
}

/// Settings from an explicit path, which must exist.
pub fn load_settings_from(path: &Path) -> anyhow::Result<UraniaSettings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    parse_settings(&text).with_context(|| format!("Invalid config {}", path.display()))
}

pub fn parse_settings(text: &str) -> anyhow::Result<UraniaSettings> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse urania.toml: {e}"))?;
    let RootConfigToml { analysis, orbs } = root;

    let system: RulershipSystem = analysis.system.parse().context("analysis.system")?;
    let root_house = match &analysis.topic {
        Some(topic) => {
            let topic: HouseTopic = topic.parse().context("analysis.topic")?;
            topic.root_house().number() as u32
        }
        None => analysis.root_house,
    };
    let params = AnalysisParams::new(root_house, analysis.derived_n, system, analysis.fallback)
        .context("analysis.root_house / analysis.derived_n")?;

    let cusp_defaults = match &analysis.ascendant {
        Some(name) => {
            let asc = normalize_sign(name)
                .ok_or_else(|| anyhow::anyhow!("analysis.ascendant: unknown sign {name:?}"))?;
            CuspDefaults::from_ascendant(asc)
        }
        None => CuspDefaults::natural(),
    };

    Ok(UraniaSettings {
        params,
        aspects: orb_settings(&orbs)?,
        cusp_defaults,
    })
}

fn orb_settings(orbs: &OrbsToml) -> anyhow::Result<AspectSettings> {
    let overrides = [
        (AspectKind::Conjunction, orbs.conjunction),
        (AspectKind::Sextile, orbs.sextile),
        (AspectKind::Square, orbs.square),
        (AspectKind::Trine, orbs.trine),
        (AspectKind::Opposition, orbs.opposition),
    ];
    let mut settings = AspectSettings::default();
    for (kind, orb) in overrides {
        let Some(orb) = orb else { continue };
        if !orb.is_finite() || orb < 0.0 {
            anyhow::bail!("orbs.{}: orb must be a non-negative number, got {}", kind, orb);
        }
        settings = settings.with_orb(kind, orb);
    }
    Ok(settings)
}
