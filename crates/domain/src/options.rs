// crates/domain/src/options.rs
use std::str::FromStr;

/// Sorting keys available for ordering visible rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Score,
    Pct,
    Q,
    Accession,
}

/// Sort specification. Example: `score:desc,pct:desc,accession`.
#[derive(Debug, Clone)]
pub struct SortSpec(pub Vec<(SortKey, bool)>);

impl FromStr for SortSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let specs = s
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(parse_single_spec)
            .collect::<Result<Vec<_>, _>>()?;

        if specs.is_empty() {
            return Err("empty sort spec".into());
        }
        Ok(SortSpec(specs))
    }
}

fn parse_single_spec(part: &str) -> Result<(SortKey, bool), String> {
    let (key_str, desc) =
        part.split_once(':').map_or((part, false), |(k, d)| (k.trim(), matches!(d.trim(), "desc" | "DESC")));

    let key = parse_sort_key(key_str)?;
    Ok((key, desc))
}

fn parse_sort_key(key_str: &str) -> Result<SortKey, String> {
    match key_str.to_ascii_lowercase().as_str() {
        "score" => Ok(SortKey::Score),
        "pct" => Ok(SortKey::Pct),
        "q" => Ok(SortKey::Q),
        "accession" => Ok(SortKey::Accession),
        other => Err(format!("Unknown sort key: {other}")),
    }
}
