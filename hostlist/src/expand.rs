//! Expanding range expressions back into names

use crate::error::{HostlistError, Result};

/// Expands a hostlist expression into the names it denotes.
///
/// Items are separated by commas outside brackets. Each item holds at most one
/// bracket group of comma separated numbers or `low-high` ranges. A lower bound
/// written with a leading zero fixes the padding width of the range.
pub fn expand(expr: &str) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for item in split_top_level(expr)? {
        if !item.is_empty() {
            expand_item(item, &mut names)?;
        }
    }
    Ok(names)
}

fn split_top_level(expr: &str) -> Result<Vec<&str>> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in expr.char_indices() {
        match c {
            '[' if depth == 0 => depth = 1,
            ']' if depth == 1 => depth = 0,
            '[' | ']' => return Err(HostlistError::UnbalancedBracket(expr.to_string())),
            ',' if depth == 0 => {
                items.push(&expr[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(HostlistError::UnbalancedBracket(expr.to_string()));
    }
    items.push(&expr[start..]);
    Ok(items)
}

fn expand_item(item: &str, out: &mut Vec<String>) -> Result<()> {
    let Some(open) = item.find('[') else {
        out.push(item.to_string());
        return Ok(());
    };
    let close = item[open..]
        .find(']')
        .map(|i| open + i)
        .ok_or_else(|| HostlistError::UnbalancedBracket(item.to_string()))?;

    let head = &item[..open];
    let body = &item[open + 1..close];
    let tail = &item[close + 1..];
    if tail.contains(['[', ']']) {
        return Err(HostlistError::UnbalancedBracket(item.to_string()));
    }

    for part in body.split(',') {
        if part.is_empty() {
            return Err(HostlistError::EmptyRange(item.to_string()));
        }
        let (lo, hi) = part.split_once('-').unwrap_or((part, part));
        let low = parse_bound(item, lo)?;
        let high = parse_bound(item, hi)?;
        if low > high {
            return Err(HostlistError::ReversedRange {
                item: item.to_string(),
                low,
                high,
            });
        }
        let width = if lo.len() > 1 && lo.starts_with('0') {
            lo.len()
        } else {
            0
        };
        out.extend((low..=high).map(|n| format!("{head}{n:0width$}{tail}")));
    }
    Ok(())
}

fn parse_bound(item: &str, bound: &str) -> Result<u64> {
    let invalid = || HostlistError::InvalidBound {
        item: item.to_string(),
        bound: bound.to_string(),
    };
    if bound.is_empty() || !bound.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    bound.parse().map_err(|_| invalid())
}
