//! Synthetic row generation.

use rand::Rng;

use super::Row;

/// Shape of a generation request.
///
/// `rows: None` asks for the default volume: a count drawn fresh from
/// `500_000..=1_000_000` on every call, never fixed up front.
#[derive(Debug, Clone)]
pub struct GenerateSpec {
    pub rows: Option<usize>,
    pub columns: usize,
    pub cell_length: usize,
}

impl Default for GenerateSpec {
    fn default() -> Self {
        GenerateSpec {
            rows: None,
            columns: 10,
            cell_length: 10,
        }
    }
}

impl GenerateSpec {
    pub fn new(rows: usize, columns: usize, cell_length: usize) -> Self {
        GenerateSpec {
            rows: Some(rows),
            columns,
            cell_length,
        }
    }
}

/// Append `spec`-shaped synthetic rows to `rows`. Returns the count appended.
pub(super) fn fill(rows: &mut Vec<Row>, spec: &GenerateSpec) -> usize {
    let mut rng = rand::thread_rng();
    let count = spec
        .rows
        .unwrap_or_else(|| rng.gen_range(500_000..=1_000_000));

    rows.reserve(count);
    for _ in 0..count {
        let row: Row = (0..spec.columns)
            .map(|_| fake_text(&mut rng, spec.cell_length))
            .collect();
        rows.push(row);
    }
    count
}

/// Word-like lowercase text of at most `max_len` characters.
///
/// Letters and spaces only, so generated cells can never collide with any
/// plausible delimiter character.
fn fake_text(rng: &mut impl Rng, max_len: usize) -> String {
    let mut out = String::with_capacity(max_len);
    while out.len() < max_len {
        let word_len = rng.gen_range(3..=7).min(max_len - out.len());
        if !out.is_empty() {
            if out.len() + 1 + word_len > max_len {
                break;
            }
            out.push(' ');
        }
        for _ in 0..word_len {
            out.push(rng.gen_range(b'a'..=b'z') as char);
        }
    }
    out
}
