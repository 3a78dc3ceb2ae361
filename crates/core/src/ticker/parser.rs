//! Parse raw history records into the paired ticker strings.

/// The two ticker lines, equal length in `char`s by construction.
///
/// `message_text` carries the record subjects, `meta_text` the matching
/// `by AUTHOR REL_TIME` attributions. Each record is padded to a shared
/// column width so the two lines stay vertically aligned at every scroll
/// offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerPair {
    pub message_text: String,
    pub meta_text: String,
}

/// Extra columns of spacing appended to each record's card.
const SEGMENT_GAP: usize = 4;

/// Convert raw history text into the paired ticker strings.
///
/// Each input line is a 4-field tab-separated record
/// `hash<TAB>author<TAB>relative_time<TAB>subject`. Lines blank after
/// trimming are dropped; lines with the wrong field count are silently
/// skipped. Returns `None` when no valid record survives, in which case
/// the caller should disable the ticker entirely.
///
/// Pure and order-preserving; widths are measured in `char`s so non-ASCII
/// authors and subjects keep the two lines aligned.
pub fn parse_history_ticker(raw: &str) -> Option<TickerPair> {
    let mut message_text = String::new();
    let mut meta_text = String::new();
    let mut records = 0usize;

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.splitn(4, '\t').collect();
        let [_hash, author, rel_time, subject] = fields[..] else {
            continue;
        };
        let message = subject;
        let meta = format!("by {author} {rel_time}");

        let message_len = message.chars().count();
        let meta_len = meta.chars().count();
        let segment_width = message_len.max(meta_len) + SEGMENT_GAP;

        message_text.push_str(message);
        message_text.push_str(&" ".repeat(segment_width - message_len));
        meta_text.push_str(&meta);
        meta_text.push_str(&" ".repeat(segment_width - meta_len));
        records += 1;
    }

    if records == 0 {
        return None;
    }
    Some(TickerPair {
        message_text,
        meta_text,
    })
}
