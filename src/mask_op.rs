//!
//! The pure mask operations. Cursor state goes in and out as plain
//! values, nothing here keeps state between calls.
//!

use crate::mask_format::MaskFormat;
use crate::mask_token::{CharCheck, Mask};
use crate::upos_type;
use log::debug;

/// Edit intent for [edit_value].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// Typed char, pasted or dropped text.
    Insert,
    /// Backspace or delete, with or without a selection.
    Delete,
}

/// Result of one edit: the new display text and the new cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskEdit {
    pub text: String,
    pub cursor: upos_type,
}

/// Render the full display text for a raw value.
///
/// The output has exactly one char per mask position. Literal
/// positions hold their literal char, editable positions hold a
/// validated input char or the prompt char.
///
/// Chars of `value` that equal one of the literal chars of the mask
/// are filtered out first, so an already masked value can be fed
/// back in. The remaining chars are matched against the editable
/// positions left to right; an invalid char degrades to the prompt
/// char, excess chars are cut off.
pub fn render_value(value: &str, fmt: &MaskFormat) -> String {
    let mut out: Vec<char> = fmt.empty_value().chars().collect();

    if value.is_empty() {
        return out.into_iter().collect();
    }

    let editable: Vec<upos_type> = fmt.editable_positions().collect();

    let mut edit_chars: Vec<char> = value
        .chars()
        .filter(|c| !fmt.is_literal_value(*c))
        .collect();
    for (i, c) in edit_chars.iter_mut().enumerate() {
        let Some(&pos) = editable.get(i) else {
            break;
        };
        if fmt.check_char(*c, pos) != CharCheck::Valid && *c != fmt.prompt() {
            *c = fmt.prompt();
        }
    }
    edit_chars.truncate(editable.len());

    for (i, c) in edit_chars.iter().enumerate() {
        out[editable[i] as usize] = *c;
    }

    out.into_iter().collect()
}

/// Strip a display text back to the raw value.
///
/// Removes every prompt char and every char that equals one of the
/// literal chars of the mask. Matching is by char value, not by
/// position: a user-entered char that happens to equal a literal
/// somewhere else in the mask is stripped too.
///
/// Idempotent for values that don't collide with the literal chars
/// or the prompt char.
pub fn strip_value(value: &str, fmt: &MaskFormat) -> String {
    value
        .chars()
        .filter(|c| *c != fmt.prompt() && !fmt.is_literal_value(*c))
        .collect()
}

/// Apply one edit to a masked display text.
///
/// * `old` - display text before the edit. Used for [EditOp::Insert].
/// * `attempt` - text of the input surface after the host applied
///   the raw edit. Used for [EditOp::Delete], where the host has
///   already removed the chars.
/// * `data` - the chars this edit introduces: the typed char, the
///   pasted or the dropped text. Used for [EditOp::Insert].
/// * `cursor` - cursor position at the start of the edit.
/// * `selection` - length of the replaced selection, 0 for none.
///
/// Never fails. Invalid chars are dropped or degrade to the prompt
/// char, positions beyond the mask are cut off.
pub fn edit_value(
    old: &str,
    attempt: &str,
    data: &str,
    fmt: &MaskFormat,
    cursor: upos_type,
    selection: upos_type,
    op: EditOp,
) -> MaskEdit {
    match op {
        EditOp::Insert => insert_value(old, data, fmt, cursor, selection),
        EditOp::Delete => delete_value(attempt, fmt, cursor, selection),
    }
}

/// Backspace/delete. The host already removed `max(selection, 1)`
/// chars from `attempt`, starting right of `cursor`. Refill one slot
/// per removed char so the text keeps the mask length: the prompt
/// char for editable slots, the mask's own char for literal slots.
/// Trailing content shifts toward the deletion point.
fn delete_value(
    attempt: &str,
    fmt: &MaskFormat,
    cursor: upos_type,
    selection: upos_type,
) -> MaskEdit {
    if attempt.is_empty() {
        debug!("delete_value: clear");
        return MaskEdit {
            text: render_value("", fmt),
            cursor: 0,
        };
    }

    let mut text: Vec<char> = attempt.chars().collect();
    let mut pos = cursor + 1;
    let new_cursor = pos;

    let mut n = 0;
    loop {
        let fill = match fmt.mask(pos) {
            Some(Mask::Literal(c)) => Some(*c),
            Some(_) => Some(fmt.prompt()),
            // beyond the mask, nothing left to refill
            None => None,
        };
        if let Some(fill) = fill {
            let at = (pos as usize).min(text.len());
            text.insert(at, fill);
        }
        pos += 1;

        n += 1;
        if n >= selection {
            break;
        }
    }

    debug!("delete_value: cursor {} -> {}", cursor, new_cursor);
    MaskEdit {
        text: text.into_iter().collect(),
        cursor: new_cursor,
    }
}

/// Type/paste/drop. Walks the input chars against the mask starting
/// at the cursor. A valid char fills the editable slot and advances,
/// an invalid char is dropped and the same slot is retried with the
/// next char. A literal run is skipped, but only one char gets an
/// attempt per run. If the input is shorter than the replaced
/// selection, the leftover selected span is blanked to the prompt
/// char.
fn insert_value(
    old: &str,
    data: &str,
    fmt: &MaskFormat,
    cursor: upos_type,
    mut selection: upos_type,
) -> MaskEdit {
    let selection_end = cursor + selection;
    let mut text: Vec<char> = old.chars().collect();
    let mut pos = cursor;

    debug!("insert_value: {:?} at {}", data, cursor);

    for c in data.chars() {
        if pos > fmt.len() {
            // past the end, cut off the rest of the input.
            return MaskEdit {
                text: text.into_iter().collect(),
                cursor: pos,
            };
        }

        if fmt.is_editable(pos) {
            if fmt.check_char(c, pos) == CharCheck::Valid {
                replace_char(&mut text, pos, c);
                pos += 1;
            }
            // invalid: drop the char, stay put.
        } else {
            // skip the literal run, then give this char one attempt.
            let mut i = cursor;
            while i < fmt.len() {
                if fmt.is_literal(pos) {
                    pos += 1;
                } else {
                    if fmt.check_char(c, pos) == CharCheck::Valid {
                        replace_char(&mut text, pos, c);
                        pos += 1;
                    }
                    break;
                }
                i += 1;
            }
        }

        selection = selection.saturating_sub(1);
    }

    // input shorter than the replaced selection: blank the rest.
    if selection > 0 {
        for _ in pos..selection_end {
            if fmt.is_literal(pos) {
                pos += 1;
            } else {
                replace_char(&mut text, pos, fmt.prompt());
                pos += 1;
            }
        }
    }

    MaskEdit {
        text: text.into_iter().collect(),
        cursor: pos,
    }
}

#[inline]
fn replace_char(text: &mut [char], pos: upos_type, c: char) {
    if let Some(slot) = text.get_mut(pos as usize) {
        *slot = c;
    }
}
