/// Canonical key for an ingredient line: surrounding whitespace trimmed,
/// nothing else. Case and units are kept as typed, so `"Milk"` and `"milk"`
/// stay distinct. Blank input yields `None`.
pub fn normalize_ingredient(raw: &str) -> Option<String> {
    let name = raw.trim();
    if name.is_empty() {
        return None;
    }

    Some(name.to_owned())
}
