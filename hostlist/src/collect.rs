//! Folding name lists into range expressions

use std::collections::{BTreeMap, BTreeSet};

/// A name split around its last run of ASCII digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Numbered<'a> {
    head: &'a str,
    digits: &'a str,
    tail: &'a str,
    value: u64,
}

impl<'a> Numbered<'a> {
    fn split(name: &'a str) -> Option<Self> {
        let bytes = name.as_bytes();
        let end = bytes.iter().rposition(u8::is_ascii_digit)? + 1;
        let start = bytes[..end]
            .iter()
            .rposition(|b| !b.is_ascii_digit())
            .map_or(0, |i| i + 1);
        let digits = &name[start..end];
        // Runs too long for u64 are left as plain names
        let value = digits.parse().ok()?;
        Some(Self {
            head: &name[..start],
            digits,
            tail: &name[end..],
            value,
        })
    }

    fn padded_width(&self) -> Option<usize> {
        (self.digits.len() > 1 && self.digits.starts_with('0')).then_some(self.digits.len())
    }
}

type GroupKey<'a> = (&'a str, &'a str, usize);

/// Folds `names` into a hostlist expression.
///
/// Names sharing a stem and suffix around their last number are merged into
/// `stem[ranges]suffix`. Zero padding is preserved, duplicates collapse and the
/// result only depends on the set of names, not on their order.
pub fn collect<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names: Vec<S> = names.into_iter().collect();

    let mut plain = BTreeSet::new();
    let mut numbered = Vec::new();
    for name in &names {
        let name = name.as_ref();
        match Numbered::split(name) {
            Some(n) => numbered.push(n),
            None => {
                plain.insert(name);
            }
        }
    }

    // Unpadded numbers join a padded group when their length matches its width
    let padded: BTreeSet<GroupKey> = numbered
        .iter()
        .filter_map(|n| n.padded_width().map(|w| (n.head, n.tail, w)))
        .collect();

    let mut groups: BTreeMap<GroupKey, BTreeSet<u64>> = BTreeMap::new();
    for n in &numbered {
        let width = match n.padded_width() {
            Some(w) => w,
            None if padded.contains(&(n.head, n.tail, n.digits.len())) => n.digits.len(),
            None => 0,
        };
        groups
            .entry((n.head, n.tail, width))
            .or_default()
            .insert(n.value);
    }

    let mut parts: Vec<String> = groups
        .into_iter()
        .map(|((head, tail, width), values)| render_group(head, tail, width, &values))
        .collect();
    parts.extend(plain.into_iter().map(str::to_string));
    parts.join(",")
}

fn render_group(head: &str, tail: &str, width: usize, values: &BTreeSet<u64>) -> String {
    if values.len() == 1 {
        if let Some(v) = values.first() {
            return format!("{head}{v:0width$}{tail}");
        }
    }

    let ranges: Vec<String> = runs(values)
        .into_iter()
        .map(|(low, high)| {
            if low == high {
                format!("{low:0width$}")
            } else {
                format!("{low:0width$}-{high:0width$}")
            }
        })
        .collect();
    format!("{head}[{}]{tail}", ranges.join(","))
}

/// Contiguous runs of an ordered set, as inclusive bounds
fn runs(values: &BTreeSet<u64>) -> Vec<(u64, u64)> {
    let mut out: Vec<(u64, u64)> = Vec::new();
    for &v in values {
        match out.last_mut() {
            Some((_, high)) if high.checked_add(1) == Some(v) => *high = v,
            _ => out.push((v, v)),
        }
    }
    out
}
