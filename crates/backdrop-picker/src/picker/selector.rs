//! ImagePicker state, configuration, and the selection algorithm.

use std::collections::HashSet;
use std::sync::Arc;

use backdrop_common::{ConfigError, Readiness};
use tracing::{debug, info};

use crate::catalog::default_catalog;
use crate::random::{pick_in_range, pick_index, RandomSource};
use crate::{Credential, ImageSearch, PhotoId, SearchQuery, SearchResult, SelectionError};

/// Bounds for the randomized page and page size of each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPolicy {
    pub max_page: u32,
    pub max_per_page: u32,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            max_page: 10,
            max_per_page: 15,
        }
    }
}

/// Everything the bootstrap code hands over once configuration is known.
#[derive(Debug, Clone, Default)]
pub struct PickerSettings {
    pub catalog: Vec<String>,
    pub credential: Option<Credential>,
    pub policy: SelectionPolicy,
}

/// Picks fresh photo URLs from an image search provider.
///
/// Photos already shown are remembered and skipped until a result page has
/// nothing new left, at which point the memory is cleared.
pub struct ImagePicker {
    pub(crate) search: Arc<dyn ImageSearch>,
    pub(crate) rng: Box<dyn RandomSource>,
    pub(crate) policy: SelectionPolicy,
    pub(crate) catalog: Vec<String>,
    pub(crate) credential: Option<Credential>,
    /// Ids of photos already chosen.
    pub(crate) used: HashSet<PhotoId>,
    pub(crate) current: Option<String>,
    /// Whether `current` is on screen, as opposed to the fallback.
    pub(crate) remote: bool,
}

impl ImagePicker {
    /// An unconfigured picker: built-in catalog, no credential.
    pub fn new(search: Arc<dyn ImageSearch>, rng: Box<dyn RandomSource>) -> Self {
        Self {
            search,
            rng,
            policy: SelectionPolicy::default(),
            catalog: default_catalog(),
            credential: None,
            used: HashSet::new(),
            current: None,
            remote: false,
        }
    }

    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.set_policy(policy);
        self
    }

    pub fn set_policy(&mut self, policy: SelectionPolicy) {
        self.policy = SelectionPolicy {
            max_page: policy.max_page.max(1),
            max_per_page: policy.max_per_page.max(1),
        };
    }

    /// Set the search terms and credential. An empty catalog selects the
    /// built-in terms; without a credential no remote call is ever made.
    pub fn configure(&mut self, catalog: Vec<String>, credential: Option<Credential>) {
        self.catalog = if catalog.is_empty() {
            default_catalog()
        } else {
            catalog
        };
        self.credential = credential;
        info!(
            terms = self.catalog.len(),
            remote = self.credential.is_some(),
            "image picker configured"
        );
    }

    /// Wait for bootstrap to publish settings, then apply them.
    pub async fn configure_when_ready(
        &mut self,
        ready: Readiness<PickerSettings>,
    ) -> Result<(), ConfigError> {
        let settings = ready.wait().await?;
        self.set_policy(settings.policy);
        self.configure(settings.catalog, settings.credential);
        Ok(())
    }

    /// Last successfully selected URL.
    pub fn current_selection(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Whether a remote photo is in effect rather than the fallback.
    pub fn is_remote(&self) -> bool {
        self.remote
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Draw term, page, and page size, in that order.
    fn draw_query(&mut self) -> SearchQuery {
        let term = self.catalog[pick_index(self.rng.as_mut(), self.catalog.len())].clone();
        let page = pick_in_range(self.rng.as_mut(), 1, self.policy.max_page);
        let per_page = pick_in_range(self.rng.as_mut(), 1, self.policy.max_per_page);
        SearchQuery::new(term, page, per_page)
    }

    /// Fetch one result page and choose a photo from it.
    ///
    /// Photos chosen before are skipped. When every candidate on the page has
    /// been shown already, the memory is cleared and the choice is made from
    /// the whole page, so a non-empty page always yields a URL.
    pub async fn select_next(&mut self) -> Result<String, SelectionError> {
        if self.credential.is_none() {
            return Err(SelectionError::NoCredential);
        }

        let query = self.draw_query();
        let credential = self
            .credential
            .as_ref()
            .ok_or(SelectionError::NoCredential)?;

        debug!(
            term = %query.term,
            page = query.page,
            per_page = query.per_page,
            "selecting next image"
        );
        let results = self.search.search(credential, &query).await?;

        let candidates: Vec<SearchResult> = results
            .into_iter()
            .filter(|r| r.best_url().is_some())
            .collect();
        if candidates.is_empty() {
            return Err(SelectionError::NoResults { term: query.term });
        }

        let fresh: Vec<&SearchResult> = candidates
            .iter()
            .filter(|c| !self.used.contains(&c.id))
            .collect();

        let chosen = if fresh.is_empty() {
            debug!(
                used = self.used.len(),
                "every candidate already shown, resetting"
            );
            self.used.clear();
            &candidates[pick_index(self.rng.as_mut(), candidates.len())]
        } else {
            fresh[pick_index(self.rng.as_mut(), fresh.len())]
        };

        let url = match chosen.best_url() {
            Some(url) => url.to_string(),
            None => return Err(SelectionError::NoResults { term: query.term }),
        };
        self.used.insert(chosen.id.clone());
        self.current = Some(url.clone());
        self.remote = true;

        info!(id = %chosen.id, term = %query.term, "selected background image");
        Ok(url)
    }
}
