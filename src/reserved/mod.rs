//! Términos genéricos de poca información ("index", "value", "key"...).
//!
//! Los llamadores los usan para restar peso a coincidencias con nombres
//! genéricos. El scoring de `core` nunca los consulta.
//!
//! Un proyecto puede ampliar la lista en `.argguard/reserved.yaml`; la lista
//! base `RESERVED_TERMS` nunca cambia.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::terms::split_terms;

/// Nombre del directorio de configuración.
const ARGGUARD_DIR: &str = ".argguard";
/// Nombre del archivo de términos reservados.
const RESERVED_FILE: &str = "reserved.yaml";
/// Única versión de formato soportada.
const CONFIG_VERSION: &str = "1";

/// Términos genéricos por defecto, en orden de inserción.
pub const RESERVED_TERMS: &[&str] = &[
    "message", "counter", "index", "object", "value", "item", "key",
];

/// Un identificador es reservado si todos sus términos lo son.
/// `"index"` y `"Key"` lo son; `"keyPath"` no.
pub fn is_reserved(name: &str) -> bool {
    all_terms_in(name, |term| RESERVED_TERMS.iter().any(|reserved| *reserved == term))
}

fn all_terms_in(name: &str, contains: impl Fn(&str) -> bool) -> bool {
    let terms = split_terms(name);
    !terms.is_empty() && terms.iter().all(|term| contains(term.as_str()))
}

/// Contenido de `.argguard/reserved.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservedConfig {
    /// Versión del formato.
    pub version: String,
    /// Términos añadidos por el proyecto sobre `RESERVED_TERMS`.
    #[serde(default)]
    pub extra_terms: Vec<String>,
}

impl Default for ReservedConfig {
    fn default() -> Self {
        ReservedConfig {
            version: CONFIG_VERSION.into(),
            extra_terms: Vec::new(),
        }
    }
}

impl ReservedConfig {
    /// Crea una configuración con términos extra.
    pub fn with_extra_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ReservedConfig {
            extra_terms: terms.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Carga la configuración desde el directorio del proyecto.
    /// Devuelve `None` si el archivo no existe.
    pub fn load(project_root: &Path) -> Result<Option<Self>> {
        let path = config_path(project_root);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("No se pudo leer la configuración: {}", path.display()))?;

        let config: ReservedConfig = serde_yml::from_str(&content)
            .with_context(|| format!("Error al parsear la configuración: {}", path.display()))?;

        if config.version != CONFIG_VERSION {
            anyhow::bail!(
                "Versión de configuración no soportada: '{}' (esperada: '{}')\n    -> Archivo: {}",
                config.version,
                CONFIG_VERSION,
                path.display()
            );
        }

        debug!(
            path = %path.display(),
            extra_terms = config.extra_terms.len(),
            "configuración de términos reservados cargada"
        );
        Ok(Some(config))
    }

    /// Guarda la configuración al disco.
    pub fn save(&self, project_root: &Path) -> Result<PathBuf> {
        let dir = project_root.join(ARGGUARD_DIR);
        if !dir.exists() {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("No se pudo crear: {}", dir.display()))?;
        }

        let path = dir.join(RESERVED_FILE);
        let content =
            serde_yml::to_string(self).context("Error al serializar la configuración")?;

        std::fs::write(&path, content)
            .with_context(|| format!("No se pudo escribir: {}", path.display()))?;

        debug!(path = %path.display(), "configuración de términos reservados guardada");
        Ok(path)
    }

    /// Lista efectiva: `RESERVED_TERMS` seguida de los extra normalizados
    /// (minúsculas, sin espacios, sin vacíos ni duplicados).
    pub fn terms(&self) -> Vec<String> {
        let mut terms: Vec<String> = RESERVED_TERMS.iter().map(|t| t.to_string()).collect();
        for extra in &self.extra_terms {
            let normalized = extra.trim().to_lowercase();
            if !normalized.is_empty() && !terms.contains(&normalized) {
                terms.push(normalized);
            }
        }
        terms
    }

    /// Como [`is_reserved`], pero con la lista ampliada del proyecto.
    pub fn is_reserved(&self, name: &str) -> bool {
        let terms = self.terms();
        all_terms_in(name, |term| terms.iter().any(|t| t == term))
    }
}

/// Obtiene la ruta al archivo de configuración.
fn config_path(project_root: &Path) -> PathBuf {
    project_root.join(ARGGUARD_DIR).join(RESERVED_FILE)
}
