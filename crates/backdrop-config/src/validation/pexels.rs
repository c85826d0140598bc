//! Image search section validation.

use crate::schema::BackdropConfig;

use super::helpers::validate_range;

/// Pexels rejects page sizes above this.
const PEXELS_MAX_PER_PAGE: u32 = 80;

pub(crate) fn validate_pexels(errors: &mut Vec<String>, config: &BackdropConfig) {
    let pexels = &config.pexels;
    validate_range(errors, "pexels.max_page", pexels.max_page, 1, 100);
    validate_range(
        errors,
        "pexels.max_per_page",
        pexels.max_per_page,
        1,
        PEXELS_MAX_PER_PAGE,
    );
    validate_range(errors, "pexels.timeout_secs", pexels.timeout_secs, 1, 120);

    if let Some(index) = pexels.queries.iter().position(|q| q.trim().is_empty()) {
        errors.push(format!("pexels.queries[{index}] is blank"));
    }

    if !pexels.base_url.starts_with("http://") && !pexels.base_url.starts_with("https://") {
        errors.push(format!(
            "pexels.base_url = {:?} must be an http(s) URL",
            pexels.base_url
        ));
    }
}
