//! Entity identity derivation.
//!
//! Entity ids are derived deterministically from the configured display
//! name so that the same configuration always produces the same ids, and
//! the month/day pair keeps two records with the same name distinct.

/// Prefix for all flagday entity ids.
pub const ENTITY_DOMAIN: &str = "flagday";

/// Reduce a display name to a lowercase `[a-z0-9_]` slug.
///
/// Runs of non-alphanumeric characters collapse into a single underscore;
/// leading and trailing underscores are stripped.
///
/// # Examples
/// ```
/// use flagdays_types::identity::slugify;
/// assert_eq!(slugify("Founding Day"), "founding_day");
/// assert_eq!(slugify("St. Olav's Day"), "st_olav_s_day");
/// assert_eq!(slugify("  Fête --- Nationale  "), "f_te_nationale");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('_');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Entity id for a named flagday: `flagday.<slug>`.
///
/// # Examples
/// ```
/// use flagdays_types::identity::entity_id;
/// assert_eq!(entity_id("Founding Day"), "flagday.founding_day");
/// ```
pub fn entity_id(name: &str) -> String {
    format!("{}.{}", ENTITY_DOMAIN, slugify(name))
}

/// Zero-padded `MMDD` tag for a month/day pair.
///
/// # Examples
/// ```
/// use flagdays_types::identity::month_day_tag;
/// assert_eq!(month_day_tag(3, 15), "0315");
/// assert_eq!(month_day_tag(12, 1), "1201");
/// ```
pub fn month_day_tag(month: u32, day: u32) -> String {
    format!("{month:02}{day:02}")
}

/// Stable unique id: `<entity_id>.<MMDD>`.
///
/// Two records sharing a name but anchored to different dates still get
/// distinct unique ids.
///
/// # Examples
/// ```
/// use flagdays_types::identity::unique_id;
/// assert_eq!(unique_id("Founding Day", 3, 15), "flagday.founding_day.0315");
/// ```
pub fn unique_id(name: &str, month: u32, day: u32) -> String {
    format!("{}.{}", entity_id(name), month_day_tag(month, day))
}
