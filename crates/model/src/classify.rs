//! Listing classification: placeholder filtering, ordering, KIF detection.

use crate::entry::{ClassifiedEntry, EntryKind, RawEntry};

/// Placeholder entries committed only to keep empty directories in git.
const KEEP_PLACEHOLDER: &str = ".keep";

/// Tests whether a file name denotes a KIF game record.
///
/// Pure case-insensitive suffix test: a file literally named `.kif` passes,
/// while `a.kif.txt` does not.
pub fn is_kif_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.ends_with(".kif") || lower.ends_with(".kifu")
}

/// Turns a raw listing into the ordered entries shown to the user.
///
/// `.keep` placeholders and non-dir/file kinds are dropped. Folders always
/// precede files; within each group entries sort ascending by lower-cased
/// name (raw name as tie-break), so the output depends only on the input
/// set, not its order. Files carry `selectable = is_kif_name(name)`.
pub fn classify(items: Vec<RawEntry>) -> Vec<ClassifiedEntry> {
    let mut folders = Vec::new();
    let mut files = Vec::new();

    for item in items {
        if item.name == KEEP_PLACEHOLDER {
            continue;
        }
        match item.kind {
            EntryKind::Dir => folders.push(item),
            EntryKind::File => files.push(item),
            EntryKind::Other => {}
        }
    }

    sort_by_name(&mut folders);
    sort_by_name(&mut files);

    let mut out = Vec::with_capacity(folders.len() + files.len());
    out.extend(folders.into_iter().map(|e| ClassifiedEntry {
        selectable: false,
        name: e.name,
        path: e.path,
        kind: EntryKind::Dir,
    }));
    out.extend(files.into_iter().map(|e| ClassifiedEntry {
        selectable: is_kif_name(&e.name),
        name: e.name,
        path: e.path,
        kind: EntryKind::File,
    }));
    out
}

fn sort_by_name(entries: &mut [RawEntry]) {
    entries.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
}
