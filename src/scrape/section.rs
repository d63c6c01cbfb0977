//! Section labels derived from category URLs

/// Derives the human-readable section slug from a category URL
///
/// A URL ending in a path separator yields its second-to-last segment,
/// otherwise its last segment. Used only for log labeling.
///
/// # Example
///
/// ```
/// use olx_harvest::scrape::section_name;
///
/// assert_eq!(section_name("https://www.olx.uz/transport/mototsikly/"), "mototsikly");
/// assert_eq!(section_name("https://www.olx.uz/transport/gruzoviki"), "gruzoviki");
/// ```
pub fn section_name(url: &str) -> &str {
    let trimmed = url.strip_suffix('/').unwrap_or(url);
    match trimmed.rsplit_once('/') {
        Some((_, segment)) => segment,
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_uses_second_to_last_segment() {
        assert_eq!(
            section_name("https://www.olx.uz/transport/mototsikly/"),
            "mototsikly"
        );
    }

    #[test]
    fn test_no_trailing_slash_uses_last_segment() {
        assert_eq!(
            section_name("https://www.olx.uz/transport/spetstehnika"),
            "spetstehnika"
        );
    }

    #[test]
    fn test_filter_suffix_is_part_of_the_label() {
        // The currency filter segment wins, same as the catalog's first entry
        assert_eq!(
            section_name("https://www.olx.uz/transport/legkoye-avtomobili/currency-UZS/"),
            "currency-UZS"
        );
    }

    #[test]
    fn test_bare_segment() {
        assert_eq!(section_name("transport"), "transport");
    }
}
