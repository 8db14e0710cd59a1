//! Builds a `Dataset` from the numbering registry text exports.
//!
//! Each registry line is `index#block#...#status#operator#dd/mm/yyyy`
//! (ISO-8859-15). A registry covers the number range formed by
//! `index + block + sub_block`, padded to nine digits.

use crate::domain::constants::ROOT_ID;
use crate::domain::models::{
    CategoryData, MetadataLookup, OperatorMetadata, OperatorRecord, YearBucket,
};
use anyhow::Context;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

const NUMBER_DIGITS: usize = 9;
const ASSIGNED: &str = "asignado";
const SUB_ASSIGNED: &str = "subasignado";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    pub operator: String,
    pub wholesaler: Option<String>,
    /// ISO `yyyy-mm-dd`.
    pub date: String,
    pub index: String,
    pub block: String,
    pub nmin: u64,
    pub nmax: u64,
    pub volume: u64,
    pub kind: String,
}

impl Registry {
    fn block_key(&self) -> String {
        format!("{}{}", self.index, self.block)
    }

    fn range_len(&self) -> u64 {
        self.nmax.saturating_sub(self.nmin) + 1
    }

    fn year(&self) -> Option<i32> {
        self.date.split('-').next()?.parse().ok()
    }
}

/// Decodes ISO-8859-15: Latin-1 apart from eight code points.
pub fn decode_latin9(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0xA4 => '€',
            0xA6 => 'Š',
            0xA8 => 'š',
            0xB4 => 'Ž',
            0xB8 => 'ž',
            0xBC => 'Œ',
            0xBD => 'œ',
            0xBE => 'Ÿ',
            _ => char::from(b),
        })
        .collect()
}

pub fn read_registries(path: &Path) -> anyhow::Result<Vec<Registry>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read registry {}", path.display()))?;
    let registries = parse_registries(&decode_latin9(&bytes));
    tracing::info!(path = %path.display(), registries = registries.len(), "registries read");
    Ok(registries)
}

pub fn parse_registries(text: &str) -> Vec<Registry> {
    let mut registries: Vec<Registry> = text.lines().filter_map(parse_line).collect();
    share_block_volumes(&mut registries);
    registries
}

fn parse_line(line: &str) -> Option<Registry> {
    let line = line.trim();
    let fields: Vec<&str> = line.split('#').collect();
    if fields.len() != 6 || fields[3].starts_with("Libre") {
        return None;
    }
    let index = fields[0];
    let block = fields[1];
    let mut status = fields[3].split(' ');
    let kind = status.next().unwrap_or_default().to_lowercase();
    let sub_block = status.next().map(str::trim).unwrap_or_default();

    let prefix = format!("{}{}{}", index, block, sub_block);
    let nmin = pad_number(&prefix, '0')?;
    let nmax = pad_number(&prefix, '9')?;
    let Some(date) = date_to_iso(fields[5]) else {
        tracing::warn!(line, "skipping registry with malformed date");
        return None;
    };

    Some(Registry {
        operator: fields[4].to_string(),
        wholesaler: None,
        date,
        index: index.to_string(),
        block: block.to_string(),
        nmin,
        nmax,
        volume: 0,
        kind,
    })
}

fn pad_number(prefix: &str, fill: char) -> Option<u64> {
    let mut s = prefix.to_string();
    while s.len() < NUMBER_DIGITS {
        s.push(fill);
    }
    s.parse().ok()
}

fn date_to_iso(raw: &str) -> Option<String> {
    let mut parts = raw.split('/');
    let (dd, mm, yyyy) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    Some(format!("{}-{}-{}", yyyy, mm, dd))
}

/// Sets each registry's volume from its number range, split between the
/// operators holding the block directly, and points sub-assigned ranges at
/// the block owner.
fn share_block_volumes(registries: &mut [Registry]) {
    let mut owners: HashMap<String, String> = HashMap::new();
    let mut shares: HashMap<String, u64> = HashMap::new();
    for r in registries.iter() {
        let key = r.block_key();
        if r.kind == ASSIGNED {
            owners.entry(key.clone()).or_insert_with(|| r.operator.clone());
        }
        *shares.entry(key).or_insert(0) += u64::from(r.kind != SUB_ASSIGNED);
    }
    for r in registries.iter_mut() {
        let key = r.block_key();
        let n = shares.get(&key).copied().unwrap_or(0).max(1);
        r.volume = r.range_len() / n;
        if r.kind == SUB_ASSIGNED {
            r.wholesaler = owners.get(&key).cloned();
        }
    }
}

/// Ids `"1".."n"` in order of first appearance; `date_added` is the
/// operator's earliest registry date.
pub fn assign_operators(registries: &[Registry]) -> (MetadataLookup, HashMap<String, String>) {
    let mut metadata = MetadataLookup::new();
    let mut ids: HashMap<String, String> = HashMap::new();
    for r in registries {
        match ids.get(&r.operator) {
            Some(id) => {
                if let Some(m) = metadata.get_mut(id) {
                    if m.date_added > r.date {
                        m.date_added = r.date.clone();
                    }
                }
            }
            None => {
                let id = (ids.len() + 1).to_string();
                ids.insert(r.operator.clone(), id.clone());
                metadata.insert(
                    id,
                    OperatorMetadata {
                        name: r.operator.clone(),
                        date_added: r.date.clone(),
                    },
                );
            }
        }
    }
    (metadata, ids)
}

/// Operator status as of the end of `year`: cumulative volume and the set of
/// operators each one hangs from (`"0"` for the regulator).
fn status_for_year(
    year: i32,
    registries: &[Registry],
    ids: &HashMap<String, String>,
) -> Vec<OperatorRecord> {
    let mut order: Vec<String> = Vec::new();
    let mut status: HashMap<String, (u64, BTreeSet<String>)> = HashMap::new();
    for r in registries {
        if r.year().map_or(true, |y| y > year) {
            continue;
        }
        let Some(id) = ids.get(&r.operator) else {
            continue;
        };
        let link = r
            .wholesaler
            .as_ref()
            .and_then(|w| ids.get(w))
            .cloned()
            .unwrap_or_else(|| ROOT_ID.to_string());
        let entry = status.entry(id.clone()).or_insert_with(|| {
            order.push(id.clone());
            (0, BTreeSet::new())
        });
        entry.0 += r.volume;
        entry.1.insert(link);
    }

    let mut operators: Vec<OperatorRecord> = order
        .into_iter()
        .filter_map(|id| {
            let (volume, links) = status.remove(&id)?;
            Some(OperatorRecord {
                id,
                volume,
                links: links.into_iter().collect(),
            })
        })
        .collect();
    operators.sort_by_key(|op| {
        op.links
            .iter()
            .filter_map(|l| l.parse::<u64>().ok())
            .sum::<u64>()
    });
    operators
}

pub fn build_category(registries: &[Registry]) -> CategoryData {
    let (operators, ids) = assign_operators(registries);
    let years: BTreeSet<i32> = registries.iter().filter_map(Registry::year).collect();
    let mut buckets = BTreeMap::new();
    if let (Some(&from), Some(&to)) = (years.first(), years.last()) {
        for year in from..=to {
            buckets.insert(
                year,
                YearBucket {
                    operators: status_for_year(year, registries, &ids),
                },
            );
        }
    }
    CategoryData {
        operators,
        years: buckets,
    }
}
