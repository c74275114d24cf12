// SPDX-License-Identifier: MPL-2.0
//! Dimension editor state and the aspect-ratio lock logic.

/// Pixel dimensions of the image currently loaded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    ///
    /// Returns `None` when the ratio is not a positive finite number
    /// (zero height or zero width), in which case proportional
    /// adjustment is skipped.
    pub fn aspect_ratio(self) -> Option<f64> {
        let ratio = f64::from(self.width) / f64::from(self.height);
        (ratio.is_finite() && ratio > 0.0).then_some(ratio)
    }
}

/// A validated resize target, emitted when the user confirms the apply action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeRequest {
    pub width: u32,
    pub height: u32,
}

/// Candidate dimensions typed by the user, optionally locked to the source ratio.
///
/// Candidates are signed: the fields accept any integer the user types
/// (including negatives and zero), and the submit predicates reject them.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionState {
    /// Candidate width in pixels
    pub width: i64,
    /// Candidate height in pixels
    pub height: i64,
    /// Whether editing one dimension recomputes the other
    pub aspect_locked: bool,
    /// Source dimensions the candidates were last synced from
    source: Dimensions,
}

impl DimensionState {
    pub fn new(source: Dimensions, aspect_locked: bool) -> Self {
        Self {
            width: i64::from(source.width),
            height: i64::from(source.height),
            aspect_locked,
            source,
        }
    }

    pub fn source(&self) -> Dimensions {
        self.source
    }

    /// Resynchronizes the candidates with new source dimensions.
    ///
    /// Only resets when the dimensions actually differ from the last seen
    /// source; the lock state is always kept. Returns whether a reset happened.
    pub fn set_source(&mut self, source: Dimensions) -> bool {
        if source == self.source {
            return false;
        }
        self.source = source;
        self.width = i64::from(source.width);
        self.height = i64::from(source.height);
        true
    }

    pub fn edit_width(&mut self, raw: &str) {
        self.width = parse_dimension_input(raw);
        if !self.aspect_locked {
            return;
        }
        if let Some(ratio) = self.source.aspect_ratio() {
            self.height = round_half_up(self.width as f64 / ratio);
        }
    }

    pub fn edit_height(&mut self, raw: &str) {
        self.height = parse_dimension_input(raw);
        if !self.aspect_locked {
            return;
        }
        if let Some(ratio) = self.source.aspect_ratio() {
            self.width = round_half_up(self.height as f64 * ratio);
        }
    }

    /// Flips the lock. The current pair is left as is; only future edits are affected.
    pub fn toggle_lock(&mut self) {
        self.aspect_locked = !self.aspect_locked;
    }

    /// Whether the candidates differ from the source dimensions.
    pub fn has_changed(&self) -> bool {
        self.width != i64::from(self.source.width) || self.height != i64::from(self.source.height)
    }

    /// Both candidates as a resize target, if both are strictly positive.
    ///
    /// Candidates above `u32::MAX` are rejected as well, since a request
    /// carries `u32` pixel counts.
    pub fn target(&self) -> Option<ResizeRequest> {
        let width = u32::try_from(self.width).ok().filter(|w| *w > 0)?;
        let height = u32::try_from(self.height).ok().filter(|h| *h > 0)?;
        Some(ResizeRequest { width, height })
    }

    /// Whether the width and height fields accept input.
    pub fn inputs_enabled(&self, busy: bool) -> bool {
        !busy
    }

    /// Whether the lock toggle is interactive. It stays usable while busy.
    pub fn lock_toggle_enabled(&self, _busy: bool) -> bool {
        true
    }

    /// Whether the apply action is interactive.
    pub fn can_submit(&self, busy: bool) -> bool {
        !busy && self.has_changed() && self.target().is_some()
    }

    /// Re-validates positivity and returns the request to hand to the host.
    ///
    /// Does not check `busy` or `has_changed`; those only gate the button.
    /// Values that overflow `u32` yield `None`, like non-positive ones.
    pub fn submit(&self) -> Option<ResizeRequest> {
        self.target()
    }
}

/// Parses the leading integer of a field value.
///
/// Skips leading whitespace, accepts one optional sign, then reads the
/// longest run of ASCII digits; trailing characters are ignored. Input
/// without any leading digit parses as `0`. Overflow saturates.
pub fn parse_dimension_input(value: &str) -> i64 {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut result: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(byte - b'0');
        result = if negative {
            result.saturating_mul(10).saturating_sub(digit)
        } else {
            result.saturating_mul(10).saturating_add(digit)
        };
    }
    result
}

/// Rounds to the nearest integer, with halves going toward positive infinity.
// Candidates stay far below 2^53, so the f64 round trip is exact.
#[allow(clippy::cast_possible_truncation)]
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
