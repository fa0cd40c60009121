use scraper::ElementRef;

/// Marker class on the collapsed amendment blocks embedded in bill rows.
pub const HIDDEN_CLASS: &str = "hidethis";

/// How many ancestor levels of the authored markup are checked.
const MAX_ANCESTOR_LEVELS: usize = 4;

/// Keep only elements that are not nested inside a hidden container.
///
/// The listing page embeds a complete amendment sub-table inside a
/// `hidethis` block beneath certain bill rows; tag/attribute searches
/// match nodes inside that block as if they were top-level rows, which
/// corrupts every positional correlation downstream. Idempotent.
pub fn visible_only(tags: Vec<ElementRef<'_>>) -> Vec<ElementRef<'_>> {
    tags.into_iter().filter(|t| !in_hidden_container(*t)).collect()
}

fn in_hidden_container(el: ElementRef<'_>) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        // html5ever synthesizes tbody inside table; the authored markup
        // has no such level, so it does not count toward the depth.
        .filter(|a| a.value().name() != "tbody")
        .take(MAX_ANCESTOR_LEVELS)
        .any(|a| a.value().classes().any(|c| c == HIDDEN_CLASS))
}

// ── Tests ──
