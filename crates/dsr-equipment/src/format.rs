//! Formatted-line builder
//!
//! Renders parsed equipment lines into the display block stamped onto the
//! DSR equipment region. Pure and deterministic; running it twice on the
//! same input yields identical output.

use dsr_record::{ParsedEquipmentLine, Resolution};
use std::fmt::Write as _;

/// Format one parsed equipment line for display
///
/// Resolved items render as
/// `"<qty>x <brand> <model> - <power>mW total - NOHD: <nohd>m - Wavelengths: ..."`
/// with each clause omitted when its source value is absent; power is the
/// rated power multiplied by the requested quantity. Not-found and
/// unparseable items render as `"<qty> <description>"` verbatim.
#[must_use]
pub fn format_equipment_line(item: &ParsedEquipmentLine) -> String {
    match &item.resolution {
        Resolution::Resolved(entry) => {
            let mut line = format!("{}x {} {}", item.quantity, entry.brand, entry.model);
            if let Some(power_mw) = entry.power_mw {
                let total = u64::from(power_mw) * u64::from(item.quantity);
                let _ = write!(line, " - {total}mW total");
            }
            if let Some(nohd_m) = &entry.nohd_m {
                let _ = write!(line, " - NOHD: {nohd_m}m");
            }
            if !entry.wavelengths.is_empty() {
                let _ = write!(line, " - Wavelengths: {}", entry.wavelengths.join(", "));
            }
            line
        }
        Resolution::NotFound | Resolution::Unparseable(_) => {
            format!("{} {}", item.quantity, item.description)
        }
    }
}

/// Format a batch of parsed lines, newline-joined in input order
#[must_use]
pub fn format_equipment_lines(items: &[ParsedEquipmentLine]) -> String {
    items
        .iter()
        .map(format_equipment_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsr_record::EquipmentCatalogEntry;
    use pretty_assertions::assert_eq;

    fn clubmax() -> EquipmentCatalogEntry {
        EquipmentCatalogEntry::new("ClubMax", "1800 RGB")
            .with_power_mw(1800)
            .with_nohd_m("3")
            .with_wavelengths(["638nm", "520nm", "450nm"])
    }

    #[test]
    fn resolved_line_full_clauses() {
        let item = ParsedEquipmentLine::resolved(1, "ClubMax 1800 RGB", clubmax());
        assert_eq!(
            format_equipment_line(&item),
            "1x ClubMax 1800 RGB - 1800mW total - NOHD: 3m - Wavelengths: 638nm, 520nm, 450nm"
        );
    }

    #[test]
    fn power_multiplied_by_quantity() {
        let item = ParsedEquipmentLine::resolved(3, "ClubMax 1800 RGB", clubmax());
        assert!(format_equipment_line(&item).contains("5400mW total"));
    }

    #[test]
    fn absent_clauses_omitted() {
        let entry = EquipmentCatalogEntry::new("Kvant", "Atom 800");
        let item = ParsedEquipmentLine::resolved(2, "Kvant Atom 800", entry);
        assert_eq!(format_equipment_line(&item), "2x Kvant Atom 800");
    }

    #[test]
    fn not_found_line_verbatim() {
        let item = ParsedEquipmentLine::not_found(3, "Unknown Brand Widget");
        assert_eq!(format_equipment_line(&item), "3 Unknown Brand Widget");
    }

    #[test]
    fn unparseable_line_verbatim() {
        let item = ParsedEquipmentLine::unparseable(0, "Giant Order", "quantity out of range");
        assert_eq!(format_equipment_line(&item), "0 Giant Order");
    }

    #[test]
    fn lines_joined_in_input_order() {
        let items = vec![
            ParsedEquipmentLine::resolved(1, "ClubMax 1800 RGB", clubmax()),
            ParsedEquipmentLine::not_found(3, "Unknown Brand Widget"),
        ];
        let block = format_equipment_lines(&items);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1x ClubMax"));
        assert_eq!(lines[1], "3 Unknown Brand Widget");
    }

    #[test]
    fn formatting_is_idempotent() {
        let items = vec![
            ParsedEquipmentLine::resolved(2, "clubmax 1800 rgb", clubmax()),
            ParsedEquipmentLine::not_found(1, "Mystery Box"),
        ];
        assert_eq!(format_equipment_lines(&items), format_equipment_lines(&items));
    }

    #[test]
    fn empty_batch_formats_empty() {
        assert_eq!(format_equipment_lines(&[]), "");
    }
}
