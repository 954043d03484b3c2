// File: crates/broadsheet-core/src/registry.rs
// Summary: Process-wide theme registry; one theme may be active at a time.

use std::collections::HashMap;
use std::sync::RwLock;

use log::debug;
use once_cell::sync::Lazy;

use crate::error::ChartError;
use crate::theme::{presets, Theme};

struct Registry {
    themes: HashMap<String, Theme>,
    active: Option<String>,
}

// Presets are pre-registered; nothing is active until asked for.
static REGISTRY: Lazy<RwLock<Registry>> = Lazy::new(|| {
    let mut themes = HashMap::new();
    for t in presets() {
        themes.insert(t.name.clone(), t);
    }
    RwLock::new(Registry { themes, active: None })
});

/// Register `theme` under its own name, replacing any previous entry.
/// With `enable` set the theme also becomes the active one.
pub fn register(theme: Theme, enable: bool) {
    let mut reg = REGISTRY.write().expect("theme registry poisoned");
    debug!("registering theme '{}' (enable={})", theme.name, enable);
    if enable {
        reg.active = Some(theme.name.clone());
    }
    reg.themes.insert(theme.name.clone(), theme);
}

/// Activate a previously registered theme by name.
pub fn enable(name: &str) -> Result<(), ChartError> {
    let mut reg = REGISTRY.write().expect("theme registry poisoned");
    if !reg.themes.contains_key(name) {
        return Err(ChartError::UnknownTheme(name.to_string()));
    }
    reg.active = Some(name.to_string());
    Ok(())
}

/// Deactivate theming; charts fall back to engine defaults.
pub fn disable() {
    let mut reg = REGISTRY.write().expect("theme registry poisoned");
    reg.active = None;
}

/// Snapshot of the currently active theme, if any.
pub fn active() -> Option<Theme> {
    let reg = REGISTRY.read().expect("theme registry poisoned");
    reg.active
        .as_ref()
        .and_then(|name| reg.themes.get(name))
        .cloned()
}

/// Registered theme names, sorted.
pub fn names() -> Vec<String> {
    let reg = REGISTRY.read().expect("theme registry poisoned");
    let mut names: Vec<String> = reg.themes.keys().cloned().collect();
    names.sort();
    names
}
