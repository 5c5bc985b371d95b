use crate::mask_format::MaskFormat;
use crate::mask_op::{EditOp, MaskEdit, edit_value, render_value, strip_value};
use crate::upos_type;
use std::fmt;
use std::fmt::{Debug, Formatter};

/// Transform applied to the display text on focus or blur.
///
/// The host surface can plug one in to show a differently formatted
/// text while the input is not being edited.
pub trait MaskPipe {
    /// Transformed display text.
    fn transform(&self, value: &str) -> String;
}

impl<F> MaskPipe for F
where
    F: Fn(&str) -> String,
{
    fn transform(&self, value: &str) -> String {
        self(value)
    }
}

/// Change payload after an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskEvent {
    /// Value with literals and prompt chars stripped.
    pub raw_value: String,
    /// Full display text.
    pub formatted_value: String,
}

/// Stateful editing core for one masked input.
///
/// Owns the parsed mask, the current display text and the cursor.
/// This is the thin wrapper over the pure operations [render_value],
/// [strip_value] and [edit_value]; use those directly for batch
/// reformatting, and one `MaskedCore` per bound input for editing.
/// The cursor has no meaning outside an active edit sequence.
pub struct MaskedCore {
    mask: MaskFormat,
    text: String,
    cursor: upos_type,
    include_literals: bool,
    focus_pipe: Option<Box<dyn MaskPipe>>,
    display_pipe: Option<Box<dyn MaskPipe>>,
}

impl Debug for MaskedCore {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskedCore")
            .field("mask", &self.mask)
            .field("text", &self.text)
            .field("cursor", &self.cursor)
            .field("include_literals", &self.include_literals)
            .field("focus_pipe", &self.focus_pipe.as_ref().map(|_| ".."))
            .field("display_pipe", &self.display_pipe.as_ref().map(|_| ".."))
            .finish()
    }
}

impl Default for MaskedCore {
    fn default() -> Self {
        let mask = MaskFormat::default();
        let text = mask.empty_value();
        Self {
            mask,
            text,
            cursor: 0,
            include_literals: false,
            focus_pipe: None,
            display_pipe: None,
        }
    }
}

impl MaskedCore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the mask format. Keeps the prompt char and resets the
    /// text to the empty rendering.
    pub fn set_mask<S: AsRef<str>>(&mut self, format: S) {
        self.mask = MaskFormat::with_prompt(format, self.mask.prompt());
        self.clear();
    }

    /// The mask format as entered.
    pub fn mask(&self) -> String {
        self.mask.format()
    }

    /// The parsed mask format.
    pub fn mask_format(&self) -> &MaskFormat {
        &self.mask
    }

    /// Change the prompt char. Re-renders the current value.
    pub fn set_prompt_char(&mut self, prompt: char) {
        let raw = self.raw_value();
        self.mask.set_prompt(prompt);
        self.text = render_value(&raw, &self.mask);
    }

    /// Change the prompt char from a string. Uses the first char if
    /// it's longer, keeps the current prompt if it's empty.
    pub fn set_prompt_str(&mut self, prompt: &str) {
        if let Some(c) = prompt.chars().next() {
            self.set_prompt_char(c);
        }
    }

    /// Prompt char.
    pub fn prompt_char(&self) -> char {
        self.mask.prompt()
    }

    /// Should [Self::data_value] keep the literals?
    pub fn set_include_literals(&mut self, include: bool) {
        self.include_literals = include;
    }

    pub fn include_literals(&self) -> bool {
        self.include_literals
    }

    /// Transform for the display text on focus.
    pub fn set_focus_pipe(&mut self, pipe: Option<Box<dyn MaskPipe>>) {
        self.focus_pipe = pipe;
    }

    /// Transform for the display text on blur.
    pub fn set_display_pipe(&mut self, pipe: Option<Box<dyn MaskPipe>>) {
        self.display_pipe = pipe;
    }
}

impl MaskedCore {
    /// Current display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Render a raw value into the mask. Doesn't touch the cursor.
    pub fn set_value<S: AsRef<str>>(&mut self, raw: S) {
        self.text = render_value(raw.as_ref(), &self.mask);
    }

    /// Current value with literals and prompt chars stripped.
    pub fn raw_value(&self) -> String {
        strip_value(&self.text, &self.mask)
    }

    /// The value for the bound data: raw, or the full display text
    /// with [Self::include_literals].
    pub fn data_value(&self) -> String {
        if self.include_literals {
            self.text.clone()
        } else {
            self.raw_value()
        }
    }

    /// Cursor position after the last edit.
    pub fn cursor(&self) -> upos_type {
        self.cursor
    }

    /// Set the cursor. Capped to the mask length.
    pub fn set_cursor(&mut self, cursor: upos_type) {
        self.cursor = cursor.min(self.mask.len());
    }

    /// Reset to the empty rendering, cursor 0.
    pub fn clear(&mut self) {
        self.text = self.mask.empty_value();
        self.cursor = 0;
    }

    /// Nothing entered yet, the text is still the empty rendering?
    pub fn is_empty(&self) -> bool {
        self.text == self.mask.empty_value()
    }

    /// Apply one edit and store the resulting text and cursor.
    ///
    /// `attempt` is the text of the input surface after the host
    /// applied the raw edit, `data` the chars the edit introduced.
    /// See [edit_value] for the exact contract.
    pub fn edit(
        &mut self,
        attempt: &str,
        data: &str,
        cursor: upos_type,
        selection: upos_type,
        op: EditOp,
    ) -> MaskEvent {
        let MaskEdit { text, cursor } =
            edit_value(&self.text, attempt, data, &self.mask, cursor, selection, op);
        self.text = text;
        self.cursor = cursor;
        MaskEvent {
            raw_value: self.raw_value(),
            formatted_value: self.text.clone(),
        }
    }

    /// Display text when the input gains focus. Unmasks an empty
    /// field to the prompt template, or runs the focus pipe.
    pub fn focus(&mut self) -> &str {
        self.text = if let Some(pipe) = &self.focus_pipe {
            pipe.transform(&self.text)
        } else {
            render_value(&self.text, &self.mask)
        };
        &self.text
    }

    /// Display text when the input loses focus. A field that still
    /// shows only the empty template is blanked, or the display pipe
    /// runs.
    pub fn blur(&mut self) -> &str {
        if let Some(pipe) = &self.display_pipe {
            self.text = pipe.transform(&self.text);
        } else if self.text == self.mask.empty_value() {
            self.text.clear();
        }
        &self.text
    }
}
