//! Seat layout generation: partitions a seat count into labelled rows and gates.
//!
//! Rows are labelled like spreadsheet columns (`A`..`Z`, `AA`, `AB`, …).
//! Seats are spread as evenly as possible over the rows, with the first rows
//! taking one extra seat each until the remainder is used up. Rows are then
//! grouped into contiguous blocks, one block per gate.

/// Description of a single seat before it becomes part of a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatPlacement {
    /// Position within the row, `"1"` up to the row length.
    pub seat_number: String,
    /// Row label, see [`row_label`].
    pub row: String,
    /// One-based gate number as a string.
    pub gate: String,
}

/// Generate the seat layout for `seat_count` seats spread over `row_count`
/// rows and `gate_count` gates.
///
/// Returns an empty layout when any count is zero or negative. The caller is
/// expected to have validated the counts, in which case the result holds
/// exactly `seat_count` seats.
#[must_use]
pub fn generate(seat_count: i32, row_count: i32, gate_count: i32) -> Vec<SeatPlacement> {
    if seat_count <= 0 || row_count <= 0 || gate_count <= 0 {
        return Vec::new();
    }

    let seat_count = seat_count.unsigned_abs();
    let row_count = row_count.unsigned_abs();
    let gate_count = gate_count.unsigned_abs();

    let seats_per_row = seat_count / row_count;
    let extra_seats = seat_count % row_count;
    let rows_per_gate = rows_per_gate(row_count, gate_count);

    let mut seats = Vec::new();
    for row_index in 0..row_count {
        let row = row_label(row_index);
        let seats_in_row = seats_per_row + u32::from(row_index < extra_seats);
        let gate = (row_index / rows_per_gate + 1).to_string();

        seats.extend((1..=seats_in_row).map(|seat_number| SeatPlacement {
            seat_number: seat_number.to_string(),
            row: row.clone(),
            gate: gate.clone(),
        }));
    }
    seats
}

/// Number of consecutive rows served by each gate, rounded up so every row
/// gets a gate.
#[must_use]
pub fn rows_per_gate(row_count: u32, gate_count: u32) -> u32 {
    row_count.div_ceil(gate_count)
}

/// Bijective base-26 label for a zero-based row index.
///
/// `0 → "A"`, `25 → "Z"`, `26 → "AA"`, `701 → "ZZ"`, `702 → "AAA"`.
#[must_use]
pub fn row_label(index: u32) -> String {
    let mut remaining = u64::from(index) + 1;
    let mut letters = Vec::new();

    while remaining > 0 {
        remaining -= 1;
        // remaining % 26 always fits in a u8
        #[allow(clippy::cast_possible_truncation)]
        letters.push(char::from(b'A' + (remaining % 26) as u8));
        remaining /= 26;
    }

    letters.iter().rev().collect()
}
