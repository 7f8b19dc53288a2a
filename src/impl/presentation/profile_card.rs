use serde_derive::Serialize;

use crate::entities::BorrowerProfile;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 400;
const BACKGROUND: &str = "#E6F7FF";
const MARGIN: u32 = 10;
const LINE_HEIGHT: u32 = 20;
const LINE_COLORS: [&str; 2] = ["#000000", "#00509E"];
/// Characters that fit between the margins at the card's 11 px monospace font.
const MAX_LINE_CHARS: usize = 115;
const MAX_LINES: usize = ((HEIGHT - MARGIN) / LINE_HEIGHT) as usize;
const OVERFLOW_MARKER: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLine {
    pub x: u32,
    pub y: u32,
    pub color: &'static str,
    pub text: String,
}

/// Fixed-size visual card for one borrower, one `key: value` line per field.
/// Field colours alternate; a value too long for the card wraps onto
/// continuation lines in the same colour. Lines past the card's height are
/// cut, and the last visible line becomes `...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileCard {
    pub width: u32,
    pub height: u32,
    pub background: &'static str,
    pub lines: Vec<CardLine>,
}

impl ProfileCard {
    pub fn from_profile(profile: &BorrowerProfile) -> Self {
        let mut y = MARGIN;
        let mut lines = Vec::new();
        for (i, (key, value)) in profile.fields().into_iter().enumerate() {
            let color = LINE_COLORS[i % LINE_COLORS.len()];
            for text in textwrap::wrap(&format!("{}: {}", key, value), MAX_LINE_CHARS) {
                lines.push(CardLine {
                    x: MARGIN,
                    y,
                    color,
                    text: text.into_owned(),
                });
                y += LINE_HEIGHT;
            }
        }
        if lines.len() > MAX_LINES {
            lines.truncate(MAX_LINES);
            if let Some(last) = lines.last_mut() {
                last.text = OVERFLOW_MARKER.to_string();
            }
        }
        Self {
            width: WIDTH,
            height: HEIGHT,
            background: BACKGROUND,
            lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::entities::BorrowerId;

    fn profile(address: &str) -> BorrowerProfile {
        BorrowerProfile {
            borrower_id: BorrowerId::new("B-01"),
            name: "Siti Aminah".to_string(),
            email: "siti@example.com".to_string(),
            birthplace: "Bandung".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12),
            phone: "0812".to_string(),
            marital_status: "Menikah".to_string(),
            spouse_name: "Budi".to_string(),
            national_id: "3273000000000001".to_string(),
            address: address.to_string(),
            company_name: "PT. Pinus Merah Abadi".to_string(),
        }
    }

    #[test]
    fn one_line_per_field_with_alternating_colors() {
        let card = ProfileCard::from_profile(&profile("Jl. Merdeka No. 5"));
        assert_eq!((card.width, card.height), (800, 400));
        assert_eq!(card.lines.len(), 11);
        assert_eq!(card.lines[0].text, "ID Borrower: B-01");
        assert_eq!(card.lines[4].text, "Tanggal Lahir: 1990-04-12");
        assert_eq!(card.lines[0].y, 10);
        assert_eq!(card.lines[1].y, 30);
        assert_eq!(card.lines[0].color, "#000000");
        assert_eq!(card.lines[1].color, "#00509E");
        assert_eq!(card.lines[2].color, "#000000");
    }

    #[test]
    fn long_values_wrap_in_field_color() {
        let address = "Jl. Panjang Sekali ".repeat(12);
        let card = ProfileCard::from_profile(&profile(address.trim()));
        assert!(card.lines.len() > 11);
        let address_lines: Vec<&CardLine> = card
            .lines
            .iter()
            .skip_while(|l| !l.text.starts_with("Alamat:"))
            .take_while(|l| !l.text.starts_with("Nama Perusahaan:"))
            .collect();
        assert!(address_lines.len() > 1);
        assert!(address_lines.iter().all(|l| l.color == "#00509E"));
        assert!(address_lines.iter().all(|l| l.text.chars().count() <= 115));
    }

    #[test]
    fn overflowing_lines_are_cut_at_card_height() {
        let address = "Jl. Panjang Sekali ".repeat(80);
        let card = ProfileCard::from_profile(&profile(address.trim()));
        assert_eq!(card.lines.len(), 19);
        assert!(card.lines.iter().all(|l| l.y + LINE_HEIGHT <= card.height));
        assert_eq!(card.lines[18].text, "...");
        assert_eq!(card.lines[0].text, "ID Borrower: B-01");
    }
}
