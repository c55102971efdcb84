//! List command implementation

use std::process::ExitCode;

use crate::catalog::SheetId;

use super::EXIT_SUCCESS;

/// One line per animation, grouped by sheet.
pub(crate) fn format_listing() -> String {
    let mut out = String::new();
    for sheet in SheetId::ALL {
        let (w, h) = sheet.frame_class().dimensions();
        out.push_str(&format!("{} ({}x{})\n", sheet, w, h));
        for entry in sheet.animations() {
            let animation = entry.animation;
            out.push_str(&format!(
                "  {:<16} {:>2} frames  {:>4} ms/frame  {:>5} ms total\n",
                entry.label(),
                animation.len(),
                animation.frame_duration_ms(),
                animation.total_duration_ms()
            ));
        }
    }
    out
}

/// Execute the list command
pub fn run_list() -> ExitCode {
    print!("{}", format_listing());
    ExitCode::from(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_covers_every_sheet() {
        let listing = format_listing();
        assert!(listing.starts_with("brawler (24x24)\n"));
        assert!(listing.contains("impact (32x32)\n"));
        assert!(listing.contains("  idle              2 frames   250 ms/frame    500 ms total\n"));
        // 2 characters x 8 actions + 3 effects, plus 5 headers
        assert_eq!(listing.lines().count(), 16 + 3 + 5);
    }
}
