use shared::{domain::AuxData, error::NavigationError};
use tracing::{debug, info};
use url::Url;

use crate::registry::{PageRegistry, Route};

// Only used to resolve relative hrefs; the host never leaves this module.
const RESOLVE_BASE: &str = "http://res.local/";
/// Hosts that serve this site. Absolute hrefs to anything else are not ours to route.
const SITE_HOSTS: [&str; 3] = ["res.local", "res.ai", "www.res.ai"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathChange {
    pub from: &'static Route,
    pub to: &'static Route,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavigationOutcome {
    Committed(PathChange),
    /// Same path, different payload. Not a path change.
    PayloadReplaced,
    Unchanged,
}

impl NavigationOutcome {
    pub fn path_change(&self) -> Option<&PathChange> {
        match self {
            NavigationOutcome::Committed(change) => Some(change),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub route: &'static Route,
    pub aux: Option<AuxData>,
}

/// Path-keyed navigation with a browser-style history stack.
///
/// Payloads stay attached to the history entry that carried them: reading does
/// not consume them, and `back`/`forward` bring them back with the entry.
#[derive(Debug)]
pub struct Router {
    registry: &'static PageRegistry,
    entries: Vec<HistoryEntry>,
    index: usize,
}

impl Router {
    pub fn new(initial_path: &str) -> Result<Self, NavigationError> {
        let registry = PageRegistry::site();
        let path = resolve_href(initial_path)?;
        let route = registry
            .lookup(&path)
            .ok_or_else(|| NavigationError::UnknownPath(path.clone()))?;
        Ok(Self::at(registry, route))
    }

    pub fn at_home() -> Self {
        let registry = PageRegistry::site();
        Self::at(registry, registry.home())
    }

    fn at(registry: &'static PageRegistry, route: &'static Route) -> Self {
        Self {
            registry,
            entries: vec![HistoryEntry { route, aux: None }],
            index: 0,
        }
    }

    pub fn registry(&self) -> &'static PageRegistry {
        self.registry
    }

    fn current(&self) -> &HistoryEntry {
        &self.entries[self.index]
    }

    pub fn current_route(&self) -> &'static Route {
        self.current().route
    }

    pub fn current_path(&self) -> &'static str {
        self.current().route.path
    }

    pub fn aux(&self) -> Option<&AuxData> {
        self.current().aux.as_ref()
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn history_len(&self) -> usize {
        self.entries.len()
    }

    /// Commits `path` synchronously. Repeating the current path replaces its
    /// payload in place instead of pushing a new entry.
    pub fn navigate(
        &mut self,
        path: &str,
        aux: Option<AuxData>,
    ) -> Result<NavigationOutcome, NavigationError> {
        let route = self
            .registry
            .lookup(path)
            .ok_or_else(|| NavigationError::UnknownPath(path.to_string()))?;

        let aux = match aux {
            Some(aux) if aux.is_empty() => None,
            Some(_) if !route.page.accepts_aux => {
                debug!(path = route.path, "payload dropped; page does not read aux data");
                None
            }
            other => other,
        };

        let from = self.current_route();
        if from.path == route.path {
            let entry = &mut self.entries[self.index];
            if entry.aux == aux {
                return Ok(NavigationOutcome::Unchanged);
            }
            entry.aux = aux;
            debug!(path = route.path, "payload replaced on current entry");
            return Ok(NavigationOutcome::PayloadReplaced);
        }

        self.entries.truncate(self.index + 1);
        self.entries.push(HistoryEntry { route, aux });
        self.index += 1;
        info!(from = from.path, to = route.path, "navigation committed");
        Ok(NavigationOutcome::Committed(PathChange { from, to: route }))
    }

    pub fn navigate_href(
        &mut self,
        href: &str,
        aux: Option<AuxData>,
    ) -> Result<NavigationOutcome, NavigationError> {
        let path = resolve_href(href)?;
        self.navigate(&path, aux)
    }

    /// `None` when there is no earlier entry.
    pub fn back(&mut self) -> Option<NavigationOutcome> {
        if !self.can_go_back() {
            return None;
        }
        Some(self.move_to(self.index - 1))
    }

    pub fn forward(&mut self) -> Option<NavigationOutcome> {
        if !self.can_go_forward() {
            return None;
        }
        Some(self.move_to(self.index + 1))
    }

    fn move_to(&mut self, index: usize) -> NavigationOutcome {
        let from = self.current_route();
        self.index = index;
        let to = self.current_route();
        if from.path == to.path {
            return NavigationOutcome::PayloadReplaced;
        }
        info!(from = from.path, to = to.path, "history navigation committed");
        NavigationOutcome::Committed(PathChange { from, to })
    }
}

/// Normalizes an href (absolute URL, rooted or relative path) to a route path.
/// Query string and fragment are dropped; a trailing slash is trimmed except on `/`.
pub fn resolve_href(href: &str) -> Result<String, NavigationError> {
    let trimmed = href.trim();
    if trimmed.is_empty() {
        return Err(NavigationError::malformed(href, "empty href"));
    }

    let base = Url::parse(RESOLVE_BASE)
        .map_err(|err| NavigationError::malformed(href, err.to_string()))?;
    let url = base
        .join(trimmed)
        .map_err(|err| NavigationError::malformed(href, err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(NavigationError::malformed(
            href,
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    let host = url.host_str().unwrap_or_default();
    if !SITE_HOSTS.contains(&host) {
        return Err(NavigationError::malformed(
            href,
            format!("external host '{host}'"),
        ));
    }

    let path = url.path();
    let path = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };
    if path.is_empty() {
        return Ok("/".to_string());
    }
    Ok(path.to_string())
}

#[cfg(test)]
#[path = "tests/router_tests.rs"]
mod tests;
